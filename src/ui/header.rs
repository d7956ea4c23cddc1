use leptos::prelude::*;
use leptos_router::components::A;

use crate::core::content::{BRAND, HEADER_LINKS, LOGIN_LINK, LOGO_PATH};
use crate::core::motion::header_is_raised;
use crate::ui::browser;
use crate::ui::icon::{Icon, icons};

/// Fixed site header. Drops a shadow once the page is scrolled.
#[component]
pub fn Header() -> impl IntoView {
    let raised = RwSignal::new(false);
    let (mobile_menu_open, set_mobile_menu_open) = signal(false);

    // Page may load already scrolled
    sync_raised(raised, browser::scroll_y());

    #[cfg(not(feature = "ssr"))]
    {
        use leptos::ev::scroll;

        let handle_scroll = window_event_listener(scroll, move |_| {
            sync_raised(raised, browser::scroll_y());
        });

        on_cleanup(move || handle_scroll.remove());
    }

    view! {
        <header
            class="fixed top-0 left-0 right-0 z-50 bg-white/95 backdrop-blur-md transition-shadow duration-300"
            class:shadow-md=move || raised.get()
        >
            <div class="max-w-7xl mx-auto px-4 sm:px-6 lg:px-8">
                <div class="flex items-center justify-between h-16">
                    <A href="/" attr:class="flex items-center gap-2 hover:opacity-80 transition-opacity">
                        <img src=LOGO_PATH alt=format!("{} Logo", BRAND) width="120" height="40" />
                    </A>

                    // Desktop navigation
                    <nav class="hidden md:flex items-center gap-6">
                        {HEADER_LINKS
                            .iter()
                            .map(|link| view! {
                                <A
                                    href=link.href
                                    attr:class="text-sm font-medium text-slate-600 hover:text-blue-700 transition-colors"
                                >
                                    {link.label}
                                </A>
                            })
                            .collect_view()}
                        <A
                            href=LOGIN_LINK.href
                            attr:class="px-4 py-2 text-sm font-semibold text-white bg-blue-700 hover:bg-blue-800 rounded-lg transition-colors"
                        >
                            {LOGIN_LINK.label}
                        </A>
                    </nav>

                    <button
                        class="md:hidden p-2 rounded-lg hover:bg-slate-100 transition-colors"
                        on:click=move |_| set_mobile_menu_open.update(|v| *v = !*v)
                        aria-label="Toggle mobile menu"
                        aria-expanded=move || mobile_menu_open.get().to_string()
                    >
                        {move || {
                            if mobile_menu_open.get() {
                                view! { <Icon name=icons::X class="w-6 h-6 text-slate-900" /> }.into_any()
                            } else {
                                view! { <Icon name=icons::MENU class="w-6 h-6 text-slate-900" /> }.into_any()
                            }
                        }}
                    </button>
                </div>

                // Mobile menu
                <div
                    class="md:hidden overflow-hidden transition-all duration-300"
                    class:max-h-0=move || !mobile_menu_open.get()
                    class:max-h-96=move || mobile_menu_open.get()
                >
                    <nav class="flex flex-col gap-2 py-4 border-t border-slate-200">
                        {HEADER_LINKS
                            .iter()
                            .chain(std::iter::once(&LOGIN_LINK))
                            .map(|link| view! {
                                <a
                                    href=link.href
                                    class="block px-4 py-2 text-sm font-medium text-slate-600 hover:bg-slate-100 rounded-lg transition-colors"
                                    on:click=move |_| set_mobile_menu_open.set(false)
                                >
                                    {link.label}
                                </a>
                            })
                            .collect_view()}
                    </nav>
                </div>
            </div>
        </header>
    }
}

/// Match the shadow to the scroll offset. Does nothing once the header is unmounted.
fn sync_raised(raised: RwSignal<bool>, scroll_y: f64) {
    let Some(current) = raised.try_get_untracked() else {
        return;
    };
    let next = header_is_raised(scroll_y);
    if current != next {
        raised.set(next);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_sync_raised() {
        let owner = Owner::new();
        owner.set();

        let raised = RwSignal::new(false);
        sync_raised(raised, 4.0);
        assert!(!raised.get_untracked());
        sync_raised(raised, 120.0);
        assert!(raised.get_untracked());
        sync_raised(raised, 0.0);
        assert!(!raised.get_untracked());
    }

    #[test]
    fn test_sync_raised_after_unmount() {
        let owner = Owner::new();
        owner.set();

        let raised = RwSignal::new(false);
        owner.cleanup();

        sync_raised(raised, 120.0);
        assert_eq!(raised.try_get_untracked(), None);
    }
}
