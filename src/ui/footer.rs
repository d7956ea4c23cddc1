use chrono::{Datelike, Utc};
use leptos::prelude::*;
use leptos_router::components::A;

use crate::core::content::{
    CONTACT_EMAIL, LEGAL_LINKS, LOGO_PATH, NavLink, POSTAL_ADDRESS, QUICK_LINKS, SOCIAL_LINKS,
    copyright_line,
};
use crate::core::motion::FOOTER;
use crate::ui::icon::Icon;

const LINK_CLASS: &str = "text-[#6E8898] hover:text-[#0063B2] transition-colors text-sm";

/// Site footer
#[component]
pub fn Footer() -> impl IntoView {
    let year = Utc::now().year();

    view! {
        <footer class="bg-gradient-to-b from-[#004173]/5 to-[#004173]/10 pt-16 pb-8">
            <div class="max-w-6xl mx-auto px-6">
                <div class="grid grid-cols-1 md:grid-cols-4 gap-10">
                    // Company info
                    <div class="col-span-1 landing-scroll-animate" style=FOOTER.transition_style_for(0)>
                        <A href="/" attr:class="inline-block mb-6">
                            <img
                                src=LOGO_PATH
                                alt="LeadPilot Logo"
                                width="120"
                                height="40"
                                class="brightness-0 opacity-90"
                            />
                        </A>
                        <p class="text-[#6E8898] mb-6 text-sm">
                            "AI-powered lead generation platform helping businesses connect with potential clients."
                        </p>
                        <div class="flex gap-4">
                            {SOCIAL_LINKS
                                .iter()
                                .map(|&(icon, href)| view! {
                                    <a
                                        href=href
                                        class="text-[#6E8898] hover:text-[#0063B2] hover:scale-110 transition-all"
                                        aria-label=icon
                                    >
                                        <Icon name=icon class="w-[18px] h-[18px]" />
                                    </a>
                                })
                                .collect_view()}
                        </div>
                    </div>

                    <LinkColumn title="Quick Links" links={&QUICK_LINKS} index=1 />
                    <LinkColumn title="Legal" links={&LEGAL_LINKS} index=2 />

                    // Contact
                    <div class="col-span-1 landing-scroll-animate" style=FOOTER.transition_style_for(3)>
                        <h3 class="text-[#004173] font-medium mb-4">"Contact"</h3>
                        <ul class="space-y-2">
                            {POSTAL_ADDRESS
                                .iter()
                                .map(|line| view! { <li class="text-[#6E8898] text-sm">{*line}</li> })
                                .collect_view()}
                            <li class="text-[#6E8898] text-sm">
                                <a href=format!("mailto:{}", CONTACT_EMAIL) class="hover:text-[#0063B2] transition-colors">
                                    {CONTACT_EMAIL}
                                </a>
                            </li>
                        </ul>
                    </div>
                </div>

                // Bottom bar
                <div
                    class="border-t border-[#6E8898]/20 mt-12 pt-8 flex flex-col md:flex-row justify-between items-center landing-scroll-animate"
                    style=FOOTER.transition_style_for(4)
                >
                    <p class="text-[#6E8898] text-sm mb-4 md:mb-0">{copyright_line(year)}</p>
                    <div class="flex gap-6">
                        {LEGAL_LINKS[..2]
                            .iter()
                            .map(|link| view! {
                                <A href=link.href attr:class=format!("{} font-medium", LINK_CLASS)>
                                    {link.label}
                                </A>
                            })
                            .collect_view()}
                    </div>
                </div>
            </div>
        </footer>
    }
}

#[component]
fn LinkColumn(title: &'static str, links: &'static [NavLink], index: usize) -> impl IntoView {
    view! {
        <div class="col-span-1 landing-scroll-animate" style=FOOTER.transition_style_for(index)>
            <h3 class="text-[#004173] font-medium mb-4">{title}</h3>
            <ul class="space-y-2">
                {links
                    .iter()
                    .map(|link| view! {
                        <li>
                            <A href=link.href attr:class=LINK_CLASS>
                                {link.label}
                            </A>
                        </li>
                    })
                    .collect_view()}
            </ul>
        </div>
    }
}
