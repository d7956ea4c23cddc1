use leptos::prelude::*;
use leptos_router::components::A;

use crate::core::content::LOGO_PATH;
use crate::core::motion::HERO;

/// Color scheme of the hero banner
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum BannerVariant {
    /// Electric blue to navy gradient
    #[default]
    Gradient,
    Light,
}

impl BannerVariant {
    fn section_class(self) -> &'static str {
        match self {
            Self::Gradient => {
                "relative overflow-hidden bg-gradient-to-br from-[#0063B2] via-[#004173] to-[#002A4A] pt-40 pb-24 md:pt-48 md:pb-32"
            }
            Self::Light => "relative overflow-hidden bg-slate-50 pt-40 pb-24 md:pt-48 md:pb-32",
        }
    }

    fn strong_text(self) -> &'static str {
        match self {
            Self::Gradient => "text-white",
            Self::Light => "text-[#004173]",
        }
    }

    fn soft_text(self) -> &'static str {
        match self {
            Self::Gradient => "text-[#A3B8CC]",
            Self::Light => "text-[#6E8898]",
        }
    }
}

/// Hero section with the headline and the two calls to action
#[component]
pub fn Banner(
    #[prop(optional)] variant: BannerVariant,
    /// Reveals the demo wizard. Without it "Try Demo" links to the demo page.
    #[prop(optional)]
    on_start_demo: Option<Callback<()>>,
) -> impl IntoView {
    let strong = variant.strong_text();
    let soft = variant.soft_text();
    let demo_class = "lp-press border-2 border-[#A3B8CC] text-[#A3B8CC] px-8 py-3 rounded-full hover:bg-[#A3B8CC] hover:text-[#004173] transition-all duration-300 font-medium flex items-center justify-center gap-2";

    let try_demo = match on_start_demo {
        Some(start) => view! {
            <button class=demo_class on:click=move |_| start.run(())>
                "Try Demo"
            </button>
        }
        .into_any(),
        None => view! {
            <A href="/demo" attr:class=demo_class>
                "Try Demo"
            </A>
        }
        .into_any(),
    };

    view! {
        <section class=variant.section_class()>
            // Background decoration
            <div class="absolute top-0 right-0 w-1/2 h-full lp-glow" aria-hidden="true">
                <div class="w-full h-full bg-[#0063B2] rounded-full blur-3xl translate-x-1/4 -translate-y-1/4"></div>
            </div>
            <div class="absolute bottom-0 left-0 w-1/3 h-1/2 lp-glow lp-glow-late" aria-hidden="true">
                <div class="w-full h-full bg-[#6E8898] rounded-full blur-2xl -translate-x-1/4 translate-y-1/4"></div>
            </div>

            <div class="max-w-6xl mx-auto px-6 relative z-10">
                <div class="flex flex-col items-start max-w-3xl">
                    <h1
                        class="text-5xl md:text-6xl lg:text-7xl font-bold mb-6 tracking-tight leading-tight lp-rise"
                        style=HERO.style_for(0)
                    >
                        <div class="flex flex-wrap items-baseline">
                            <span class=format!("{} mr-3", strong)>"ELEVATE"</span>
                            <span class=soft>"YOUR BRAND"</span>
                        </div>
                        <div class="flex flex-wrap items-baseline mt-1">
                            <span class=format!("{} mr-3", soft)>"TRANSFORM"</span>
                            <span class=strong>"YOUR"</span>
                        </div>
                        <div class="mt-1">
                            <span class="bg-gradient-to-r from-[#0063B2] to-[#A3B8CC] text-transparent bg-clip-text">
                                "EXPERIENCE"
                            </span>
                        </div>
                    </h1>

                    <p
                        class=format!("{} text-lg md:text-xl mb-8 max-w-2xl leading-relaxed lp-rise", soft)
                        style=HERO.style_for(1)
                    >
                        "Cutting-edge AI-Powered Lead Generation for businesses "
                        <br class="hidden md:block" />
                        "that want to "
                        <span class=format!("{} font-medium", strong)>"stand out"</span>
                        "."
                    </p>

                    <div class="flex flex-col sm:flex-row gap-4 lp-rise" style=HERO.style_for(2)>
                        <A
                            href="/signup"
                            attr:class="lp-press bg-gradient-to-r from-white to-[#A3B8CC] text-[#004173] px-8 py-3 rounded-full hover:from-[#A3B8CC] hover:to-white transition-all duration-300 font-medium flex items-center justify-center gap-2 shadow-lg"
                        >
                            "Start Now"
                        </A>
                        {try_demo}
                    </div>
                </div>
            </div>

            // Corner badge
            <div class="absolute bottom-8 right-8 hidden md:block lp-rise" style="animation-delay: 1s;">
                <div class="bg-gradient-to-br from-[#6E8898]/30 to-[#A3B8CC]/20 backdrop-blur-md p-3 rounded-full shadow-lg border border-white/10">
                    <img src=LOGO_PATH alt="LeadPilot Logo" width="40" height="40" class="invert" />
                </div>
            </div>
        </section>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_variant_is_gradient() {
        assert_eq!(BannerVariant::default(), BannerVariant::Gradient);
        assert!(BannerVariant::Gradient.section_class().contains("bg-gradient-to-br"));
        assert!(!BannerVariant::Light.section_class().contains("bg-gradient-to-br"));
    }
}
