//! Demo page with the lead finder and the inline assistant

use leptos::prelude::*;
use leptos_meta::{Meta, Title};

use crate::ui::chat::{ChatBox, ChatSection};
use crate::ui::footer::Footer;
use crate::ui::header::Header;
use crate::ui::styles::{ScrollAnimationScript, SiteStyles};

#[component]
pub fn DemoPage() -> impl IntoView {
    view! {
        <Title text="LeadPilot Demo - Find Your Perfect Leads" />
        <Meta name="description" content="Try LeadPilot: describe your target audience and get matching contacts with a personalized outreach email." />
        <SiteStyles />

        <div class="min-h-screen bg-white overflow-x-hidden">
            <Header />
            <div class="pt-16">
                <ChatSection />
            </div>

            <section class="py-20 px-4 bg-white">
                <div class="text-center mb-10">
                    <h2 class="text-3xl font-bold text-[#004173] mb-3">"Ask LeadPilot AI"</h2>
                    <p class="text-[#6E8898] max-w-xl mx-auto">
                        "Questions about pricing or how lead generation works? Our assistant is here to help."
                    </p>
                </div>
                <ChatBox />
            </section>

            <Footer />
        </div>

        <ScrollAnimationScript />
    }
}
