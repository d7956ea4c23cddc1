//! Static marketing copy shown on the landing page

pub const BRAND: &str = "LeadPilot";
pub const LOGO_PATH: &str = "/leadpilot-logo.svg";
pub const CONTACT_EMAIL: &str = "info@leadpilot.ai";

/// A marketing feature card
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Feature {
    /// Icon name from `ui::icons`
    pub icon: &'static str,
    pub title: &'static str,
    pub description: &'static str,
}

pub const FEATURES: [Feature; 6] = [
    Feature {
        icon: "search",
        title: "Find Real Leads",
        description: "Discover companies matching your target criteria based on profession, industry, and region.",
    },
    Feature {
        icon: "chat",
        title: "Generate AI Text",
        description: "Create personalized messages tailored to each lead with our advanced AI technology.",
    },
    Feature {
        icon: "mail",
        title: "Multi-Channel Outreach",
        description: "Reach out via email, LinkedIn, Instagram, or contact forms - all from one platform.",
    },
    Feature {
        icon: "chart",
        title: "Track Everything",
        description: "Monitor your outreach performance with detailed analytics and response tracking.",
    },
    Feature {
        icon: "lightning",
        title: "Automated Workflows",
        description: "Set up automated sequences to nurture leads through your sales pipeline.",
    },
    Feature {
        icon: "users",
        title: "Team Collaboration",
        description: "Work together with your team members to manage leads and campaigns efficiently.",
    },
];

/// A headline number in the call-to-action panel
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Stat {
    pub value: &'static str,
    pub label: &'static str,
}

pub const STATS: [Stat; 4] = [
    Stat { value: "500+", label: "Companies Found" },
    Stat { value: "98%", label: "Delivery Rate" },
    Stat { value: "24/7", label: "AI Support" },
    Stat { value: "3.5x", label: "ROI Increase" },
];

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct NavLink {
    pub label: &'static str,
    pub href: &'static str,
}

impl NavLink {
    const fn new(label: &'static str, href: &'static str) -> Self {
        Self { label, href }
    }
}

pub const HEADER_LINKS: [NavLink; 2] = [
    NavLink::new("Pricing", "/pricing"),
    NavLink::new("Dashboard", "/dashboard"),
];

pub const LOGIN_LINK: NavLink = NavLink::new("Login", "/login");

pub const QUICK_LINKS: [NavLink; 4] = [
    NavLink::new("Features", "/features"),
    NavLink::new("Pricing", "/pricing"),
    NavLink::new("Testimonials", "/testimonials"),
    NavLink::new("Blog", "/blog"),
];

pub const LEGAL_LINKS: [NavLink; 4] = [
    NavLink::new("Imprint", "/imprint"),
    NavLink::new("Privacy Policy", "/privacy"),
    NavLink::new("Terms of Service", "/terms"),
    NavLink::new("Cookie Policy", "/cookies"),
];

/// Social profiles as (icon name, href)
pub const SOCIAL_LINKS: [(&str, &str); 4] = [
    ("twitter", "#"),
    ("linkedin", "#"),
    ("instagram", "#"),
    ("mail", "mailto:info@leadpilot.ai"),
];

pub const POSTAL_ADDRESS: [&str; 3] = ["LeadPilot Inc.", "123 AI Avenue", "San Francisco, CA 94103"];

/// Footer copyright line for a given year
pub fn copyright_line(year: i32) -> String {
    format!("© {} {}. All rights reserved.", year, BRAND)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_feature_grid_has_six_cards() {
        assert_eq!(FEATURES.len(), 6);
        assert_eq!(FEATURES[0].title, "Find Real Leads");
        assert!(FEATURES.iter().all(|f| !f.description.is_empty()));
    }

    #[test]
    fn test_stats() {
        let values: Vec<&str> = STATS.iter().map(|s| s.value).collect();
        assert_eq!(values, vec!["500+", "98%", "24/7", "3.5x"]);
    }

    #[test]
    fn test_copyright_line() {
        assert_eq!(
            copyright_line(2026),
            "© 2026 LeadPilot. All rights reserved."
        );
    }

    #[test]
    fn test_contact_link_matches_email() {
        let (_, href) = SOCIAL_LINKS[3];
        assert_eq!(href, format!("mailto:{}", CONTACT_EMAIL));
    }
}
