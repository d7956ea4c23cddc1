use leptos::prelude::*;

use crate::core::content::{FEATURES, Feature, STATS, Stat};
use crate::core::motion;
use crate::ui::icon::Icon;

/// "How LeadPilot Works" feature grid with the call-to-action panel
#[component]
pub fn Features() -> impl IntoView {
    view! {
        <section id="features" class="py-20 px-4 bg-gradient-to-b from-white to-[#4299e1]/5">
            <div class="max-w-6xl mx-auto">
                <div class="text-center mb-16 landing-scroll-animate" style=motion::FEATURES.transition_style_for(0)>
                    <h2 class="text-4xl font-bold text-gray-900 mb-4">"How LeadPilot Works"</h2>
                    <p class="text-lg text-gray-700 max-w-2xl mx-auto">
                        "Our AI-powered platform helps you find and connect with potential clients through multiple channels"
                    </p>
                </div>

                <div class="grid grid-cols-1 md:grid-cols-2 lg:grid-cols-3 gap-8">
                    {FEATURES
                        .iter()
                        .enumerate()
                        .map(|(i, feature)| view! { <FeatureCard feature={*feature} index={i + 1} /> })
                        .collect_view()}
                </div>

                <CallToAction />
            </div>
        </section>
    }
}

#[component]
fn FeatureCard(feature: Feature, index: usize) -> impl IntoView {
    view! {
        <div
            class="bg-white rounded-xl shadow-lg p-8 flex flex-col items-start landing-scroll-animate lp-lift"
            style=motion::FEATURES.transition_style_for(index)
        >
            <div class="w-16 h-16 rounded-full bg-[#0070f3]/10 text-[#0070f3] flex items-center justify-center mb-6">
                <Icon name=feature.icon class="w-6 h-6" />
            </div>
            <h3 class="text-xl font-bold text-gray-900 mb-3">{feature.title}</h3>
            <p class="text-gray-700">{feature.description}</p>
        </div>
    }
}

/// Gradient panel with the signup link and headline stats
#[component]
fn CallToAction() -> impl IntoView {
    view! {
        <div class="mt-20 bg-gradient-to-r from-[#0070f3] to-[#667eea] rounded-xl overflow-hidden shadow-xl landing-scroll-animate">
            <div class="flex flex-col md:flex-row">
                <div class="md:w-1/2 p-10 md:p-12 flex flex-col justify-center">
                    <h3 class="text-3xl font-bold text-white mb-4">
                        "Ready to transform your lead generation?"
                    </h3>
                    <p class="text-white text-lg mb-8 opacity-90">
                        "Start finding quality leads and reaching out with personalized messages today."
                    </p>
                    <div>
                        <a
                            href="#"
                            class="lp-press inline-block bg-white text-[#0070f3] font-bold py-3 px-8 rounded-full hover:bg-gray-100 transition-all shadow-md"
                        >
                            "Get Started Now"
                        </a>
                    </div>
                </div>
                <div class="md:w-1/2 bg-[#004173]/30 p-10 flex items-center justify-center">
                    <div class="grid grid-cols-2 gap-4 max-w-xs">
                        {STATS
                            .iter()
                            .enumerate()
                            .map(|(i, stat)| view! { <StatTile stat={*stat} index=i /> })
                            .collect_view()}
                    </div>
                </div>
            </div>
        </div>
    }
}

#[component]
fn StatTile(stat: Stat, index: usize) -> impl IntoView {
    view! {
        <div
            class="bg-white/10 backdrop-blur-sm p-4 rounded-lg landing-scroll-animate hover:bg-white/15 hover:scale-105 transition-transform"
            style=motion::STATS.transition_style_for(index)
        >
            <h4 class="text-white font-bold text-2xl mb-1">{stat.value}</h4>
            <p class="text-white text-sm opacity-80">{stat.label}</p>
        </div>
    }
}
