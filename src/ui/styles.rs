//! Page-level animation styles and the scroll reveal observer

use leptos::prelude::*;

/// Keyframes and helper classes for entrance and hover animations
#[component]
pub fn SiteStyles() -> impl IntoView {
    view! {
        <style>
            r#"
            /* Staggered entrance, delay and duration come from inline styles */
            @keyframes lp-rise {
                from {
                    opacity: 0;
                    transform: translateY(20px);
                }
                to {
                    opacity: 1;
                    transform: translateY(0);
                }
            }

            .lp-rise {
                animation: lp-rise 0.5s ease-out both;
            }

            /* Chat bubbles and panels */
            @keyframes lp-pop {
                from {
                    opacity: 0;
                    transform: translateY(10px) scale(0.98);
                }
                to {
                    opacity: 1;
                    transform: translateY(0) scale(1);
                }
            }

            .lp-pop {
                animation: lp-pop 0.3s ease-out both;
            }

            /* Hero background blobs */
            @keyframes lp-glow {
                0% {
                    opacity: 0;
                    transform: scale(0.8);
                }
                60% {
                    opacity: 0.3;
                }
                100% {
                    opacity: 0.5;
                    transform: scale(1);
                }
            }

            .lp-glow {
                animation: lp-glow 0.8s ease-out both;
            }

            .lp-glow-late {
                animation-delay: 0.3s;
            }

            .lp-press {
                transition: transform 0.2s;
            }
            .lp-press:hover {
                transform: scale(1.05);
            }
            .lp-press:active {
                transform: scale(0.95);
            }

            .lp-lift {
                transition: transform 0.3s, box-shadow 0.3s;
            }
            .lp-lift:hover {
                transform: translateY(-10px);
                box-shadow: 0 20px 25px -5px rgba(0, 112, 243, 0.15), 0 10px 10px -5px rgba(0, 112, 243, 0.1);
            }

            /* Scroll animations */
            .landing-scroll-animate {
                opacity: 0;
                transform: translateY(20px);
                transition: opacity 0.5s ease-out, transform 0.5s ease-out;
            }

            .landing-scroll-animate.visible {
                opacity: 1;
                transform: translateY(0);
            }

            @media (prefers-reduced-motion: reduce) {
                .lp-rise, .lp-pop, .lp-glow {
                    animation: none;
                }
                .landing-scroll-animate {
                    opacity: 1;
                    transform: none;
                    transition: none;
                }
            }
            "#
        </style>
    }
}

/// Adds `visible` to `.landing-scroll-animate` elements as they enter the viewport
#[component]
pub fn ScrollAnimationScript() -> impl IntoView {
    view! {
        <script>
            r#"
            (function() {
                function initScrollAnimations() {
                    const observer = new IntersectionObserver((entries) => {
                        entries.forEach(entry => {
                            if (entry.isIntersecting) {
                                entry.target.classList.add('visible');
                                observer.unobserve(entry.target);
                            }
                        });
                    }, {
                        threshold: 0.1,
                        rootMargin: '0px 0px -50px 0px'
                    });

                    document.querySelectorAll('.landing-scroll-animate').forEach(el => {
                        observer.observe(el);
                    });
                }

                if (document.readyState === 'loading') {
                    document.addEventListener('DOMContentLoaded', initScrollAnimations);
                } else {
                    initScrollAnimations();
                }
            })();
            "#
        </script>
    }
}
