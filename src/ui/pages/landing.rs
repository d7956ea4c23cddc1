//! Landing page
//!
//! Hero banner, the lead-intake wizard revealed by "Try Demo", the feature
//! grid and the footer, with the floating chat widget on top.

use leptos::html;
use leptos::prelude::*;
use leptos_meta::{Link, Meta, Title};

use crate::core::motion::REVEAL_SCROLL_DELAY_MS;
use crate::ui::banner::Banner;
use crate::ui::browser;
use crate::ui::chat::ChatWidget;
use crate::ui::chat_form::ChatForm;
use crate::ui::features::Features;
use crate::ui::footer::Footer;
use crate::ui::header::Header;
use crate::ui::styles::{ScrollAnimationScript, SiteStyles};

/// Landing page component
#[component]
pub fn LandingPage() -> impl IntoView {
    let show_chat_form = RwSignal::new(false);
    let chat_form_ref = NodeRef::<html::Div>::new();

    let (start_demo, close_chat_form) = chat_form_toggles(show_chat_form, chat_form_ref);

    view! {
        <SeoMeta />
        <SiteStyles />

        <div class="min-h-screen bg-white overflow-x-hidden">
            <Header />
            <Banner on_start_demo=start_demo />

            <div node_ref=chat_form_ref class="scroll-mt-16">
                <Show when=move || show_chat_form.get()>
                    <ChatForm on_close=close_chat_form />
                </Show>
            </div>

            <Features />
            <Footer />
            <ChatWidget />
        </div>

        <ScrollAnimationScript />
    }
}

/// "Try Demo" and close callbacks for the wizard slot
fn chat_form_toggles(
    show: RwSignal<bool>,
    slot: NodeRef<html::Div>,
) -> (Callback<()>, Callback<()>) {
    let start_demo = Callback::new(move |_| {
        show.set(true);
        // Give the form a moment to mount before scrolling to it
        browser::after(REVEAL_SCROLL_DELAY_MS, move || {
            browser::scroll_into_view(slot, true);
        });
    });
    let close = Callback::new(move |_| show.set(false));
    (start_demo, close)
}

/// SEO meta tags
#[component]
fn SeoMeta() -> impl IntoView {
    view! {
        <Title text="LeadPilot - AI-Powered Lead Generation" />

        <Meta name="description" content="Cutting-edge AI-powered lead generation. Find real leads, generate personalized outreach and track every campaign from one platform." />
        <Meta name="keywords" content="lead generation, AI outreach, sales prospecting, B2B leads, email outreach, LinkedIn outreach" />

        // Open Graph
        <Meta property="og:type" content="website" />
        <Meta property="og:url" content="https://leadpilot.ai/" />
        <Meta property="og:title" content="LeadPilot - AI-Powered Lead Generation" />
        <Meta property="og:description" content="Find and connect with potential clients through multiple channels." />

        // Twitter
        <Meta property="twitter:card" content="summary" />
        <Meta property="twitter:title" content="LeadPilot - AI-Powered Lead Generation" />
        <Meta property="twitter:description" content="Find and connect with potential clients through multiple channels." />

        <Link rel="canonical" href="https://leadpilot.ai/" />
        <Link rel="icon" href="/leadpilot-logo.svg" />

        <script type="application/ld+json" inner_html=r#"{"@context":"https://schema.org","@type":"SoftwareApplication","name":"LeadPilot","applicationCategory":"BusinessApplication","operatingSystem":"Web","description":"AI-powered lead generation platform helping businesses connect with potential clients","url":"https://leadpilot.ai","offers":{"@type":"Offer","price":"49","priceCurrency":"USD"}}"#></script>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_try_demo_reveals_chat_form() {
        let owner = Owner::new();
        owner.set();

        let show = RwSignal::new(false);
        let (start_demo, close) = chat_form_toggles(show, NodeRef::new());

        start_demo.run(());
        assert!(show.get_untracked());

        // Clicking again keeps it open
        start_demo.run(());
        assert!(show.get_untracked());

        close.run(());
        assert!(!show.get_untracked());
    }
}
