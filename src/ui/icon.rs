use leptos::prelude::*;

/// Inline outline icon drawn with `currentColor`
#[component]
pub fn Icon(
    /// Icon name, one of the constants in [`icons`]
    name: &'static str,
    /// CSS classes for sizing and color
    #[prop(default = "w-5 h-5")]
    class: &'static str,
) -> impl IntoView {
    view! {
        <svg
            class=class
            fill="none"
            viewBox="0 0 24 24"
            stroke="currentColor"
            stroke-width="2"
            aria-hidden="true"
        >
            <path stroke-linecap="round" stroke-linejoin="round" d=icons::path_data(name) />
        </svg>
    }
}

/// Icon names and their path data
pub mod icons {
    pub const ARROW_RIGHT: &str = "arrow-right";
    pub const BOT: &str = "bot";
    pub const BUILDING: &str = "building";
    pub const CHART: &str = "chart";
    pub const CHAT: &str = "chat";
    pub const CHECK: &str = "check";
    pub const CHEVRON_LEFT: &str = "chevron-left";
    pub const COPY: &str = "copy";
    pub const DOWNLOAD: &str = "download";
    pub const EYE: &str = "eye";
    pub const INSTAGRAM: &str = "instagram";
    pub const LIGHTNING: &str = "lightning";
    pub const LINKEDIN: &str = "linkedin";
    pub const LOADER: &str = "loader";
    pub const MAIL: &str = "mail";
    pub const MENU: &str = "menu";
    pub const SEARCH: &str = "search";
    pub const SEND: &str = "send";
    pub const TWITTER: &str = "twitter";
    pub const USER: &str = "user";
    pub const USERS: &str = "users";
    pub const X: &str = "x";

    /// SVG path for an icon name. Unknown names fall back to the lightning bolt.
    pub fn path_data(name: &str) -> &'static str {
        match name {
            ARROW_RIGHT => "M14 5l7 7m0 0l-7 7m7-7H3",
            BOT => "M9 3v2m6-2v2M9 19v2m6-2v2M5 9H3m2 6H3m18-6h-2m2 6h-2M7 19h10a2 2 0 002-2V7a2 2 0 00-2-2H7a2 2 0 00-2 2v10a2 2 0 002 2zM9 9h6v6H9V9z",
            BUILDING => "M19 21V5a2 2 0 00-2-2H7a2 2 0 00-2 2v16m14 0h2m-2 0h-5m-9 0H3m2 0h5M9 7h1m-1 4h1m4-4h1m-1 4h1m-5 10v-5a1 1 0 011-1h2a1 1 0 011 1v5m-4 0h4",
            CHART => "M9 19v-6a2 2 0 00-2-2H5a2 2 0 00-2 2v6a2 2 0 002 2h2a2 2 0 002-2zm0 0V9a2 2 0 012-2h2a2 2 0 012 2v10m-6 0a2 2 0 002 2h2a2 2 0 002-2m0 0V5a2 2 0 012-2h2a2 2 0 012 2v14a2 2 0 01-2 2h-2a2 2 0 01-2-2z",
            CHAT => "M8 12h.01M12 12h.01M16 12h.01M21 12c0 4.418-4.03 8-9 8a9.863 9.863 0 01-4.255-.949L3 20l1.395-3.72C3.512 15.042 3 13.574 3 12c0-4.418 4.03-8 9-8s9 3.582 9 8z",
            CHECK => "M5 13l4 4L19 7",
            CHEVRON_LEFT => "M15 19l-7-7 7-7",
            COPY => "M8 16H6a2 2 0 01-2-2V6a2 2 0 012-2h8a2 2 0 012 2v2m-6 12h8a2 2 0 002-2v-8a2 2 0 00-2-2h-8a2 2 0 00-2 2v8a2 2 0 002 2z",
            DOWNLOAD => "M4 16v1a3 3 0 003 3h10a3 3 0 003-3v-1m-4-4l-4 4m0 0l-4-4m4 4V4",
            EYE => "M15 12a3 3 0 11-6 0 3 3 0 016 0zM2.458 12C3.732 7.943 7.523 5 12 5c4.478 0 8.268 2.943 9.542 7-1.274 4.057-5.064 7-9.542 7-4.477 0-8.268-2.943-9.542-7z",
            INSTAGRAM => "M7 2h10a5 5 0 015 5v10a5 5 0 01-5 5H7a5 5 0 01-5-5V7a5 5 0 015-5zm9 9.37A4 4 0 1112.63 8 4 4 0 0116 11.37zM17.5 6.5h.01",
            LINKEDIN => "M16 8a6 6 0 016 6v7h-4v-7a2 2 0 00-4 0v7h-4v-7a6 6 0 016-6zM2 9h4v12H2zM4 2a2 2 0 110 4 2 2 0 010-4z",
            LOADER => "M4 4v5h.582m15.356 2A8.001 8.001 0 004.582 9m0 0H9m11 11v-5h-.581m0 0a8.003 8.003 0 01-15.357-2m15.357 2H15",
            MAIL => "M3 8l7.89 5.26a2 2 0 002.22 0L21 8M5 19h14a2 2 0 002-2V7a2 2 0 00-2-2H5a2 2 0 00-2 2v10a2 2 0 002 2z",
            MENU => "M4 6h16M4 12h16M4 18h16",
            SEARCH => "M21 21l-6-6m2-5a7 7 0 11-14 0 7 7 0 0114 0z",
            SEND => "M12 19l9 2-9-18-9 18 9-2zm0 0v-8",
            TWITTER => "M23 3a10.9 10.9 0 01-3.14 1.53 4.48 4.48 0 00-7.86 3v1A10.66 10.66 0 013 4s-4 9 5 13a11.64 11.64 0 01-7 2c9 5 20 0 20-11.5a4.5 4.5 0 00-.08-.83A7.72 7.72 0 0023 3z",
            USER => "M16 7a4 4 0 11-8 0 4 4 0 018 0zM12 14a7 7 0 00-7 7h14a7 7 0 00-7-7z",
            USERS => "M17 20h5v-2a3 3 0 00-5.356-1.857M17 20H7m10 0v-2c0-.656-.126-1.283-.356-1.857M7 20H2v-2a3 3 0 015.356-1.857M7 20v-2c0-.656.126-1.283.356-1.857m0 0a5.002 5.002 0 019.288 0M15 7a3 3 0 11-6 0 3 3 0 016 0zm6 3a2 2 0 11-4 0 2 2 0 014 0zM7 10a2 2 0 11-4 0 2 2 0 014 0z",
            X => "M6 18L18 6M6 6l12 12",
            _ => "M13 10V3L4 14h7v7l9-11h-7z",
        }
    }

    #[cfg(test)]
    mod tests {
        use super::*;

        #[test]
        fn test_feature_icons_resolve() {
            let fallback = path_data("does-not-exist");
            for feature in crate::core::content::FEATURES {
                if feature.icon != LIGHTNING {
                    assert_ne!(path_data(feature.icon), fallback, "{}", feature.icon);
                }
            }
        }
    }
}
