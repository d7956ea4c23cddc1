//! Not found page component
//!
//! A 404 error page displayed when a route is not found.

use chrono::{Datelike, Utc};
use leptos::prelude::*;
use leptos_meta::Title;
use leptos_router::components::A;

use crate::core::content::copyright_line;
use crate::ui::icon::{Icon, icons};

/// Not found (404) page component
#[component]
pub fn NotFoundPage() -> impl IntoView {
    view! {
        <Title text="Page Not Found - LeadPilot" />

        <div class="min-h-screen bg-white flex flex-col items-center justify-center p-4">
            <div class="text-center">
                <div class="w-24 h-24 mx-auto mb-6 bg-[#0063B2]/10 rounded-full flex items-center justify-center">
                    <Icon name=icons::SEARCH class="w-12 h-12 text-[#0063B2]" />
                </div>

                <h1 class="text-6xl font-bold text-[#004173] mb-4">"404"</h1>
                <h2 class="text-2xl font-semibold text-[#004173] mb-2">"Page Not Found"</h2>
                <p class="text-[#6E8898] mb-8 max-w-md mx-auto">
                    "The page you're looking for doesn't exist or has been moved."
                </p>

                <div class="flex flex-col sm:flex-row items-center justify-center gap-4">
                    <A
                        href="/"
                        attr:class="px-6 py-3 bg-[#0063B2] hover:bg-[#004173] text-white font-medium rounded-full transition-colors"
                    >
                        "Go Home"
                    </A>
                    <A
                        href="/demo"
                        attr:class="px-6 py-3 border-2 border-[#A3B8CC] text-[#004173] hover:bg-[#A3B8CC]/20 font-medium rounded-full transition-colors"
                    >
                        "Try Demo"
                    </A>
                </div>
            </div>

            <div class="absolute bottom-8 text-center">
                <p class="text-sm text-[#6E8898]">{copyright_line(Utc::now().year())}</p>
            </div>
        </div>
    }
}
