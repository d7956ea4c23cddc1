//! Lead-intake wizard
//!
//! Walks the visitor through six questions, one at a time, with suggestion
//! chips for each. Answers stay in memory and are only logged on submit.

use leptos::html;
use leptos::logging::{log, warn};
use leptos::prelude::*;

use crate::core::wizard::{FOCUS_DELAY_MS, SubmitOutcome, Wizard};
use crate::ui::browser;
use crate::ui::icon::{Icon, icons};

const THANK_YOU_ALERT: &str =
    "Thank you for your responses! Your personalized leads are being generated.";

/// Wizard card shown below the hero once the demo is started
#[component]
pub fn ChatForm(
    /// Hides the form
    on_close: Callback<()>,
) -> impl IntoView {
    let wizard = RwSignal::new(Wizard::new());
    let input = RwSignal::new(String::new());
    let input_ref = NodeRef::<html::Input>::new();

    // Refocus the input whenever the step changes
    Effect::new(move |_| {
        let complete = wizard.with(|w| {
            let _ = w.index();
            w.is_complete()
        });
        if !complete {
            browser::after(FOCUS_DELAY_MS, move || browser::focus_input(input_ref));
        }
    });

    let on_submit = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();
        let value = input.get_untracked();
        match wizard.try_update(|w| w.submit(&value)) {
            Some(Ok(SubmitOutcome::Advanced)) => input.set(String::new()),
            Some(Ok(SubmitOutcome::Completed)) => {
                input.set(String::new());
                let answers: Vec<String> =
                    wizard.with_untracked(|w| w.answered().into_iter().map(|(_, a)| a).collect());
                log!("All questions answered: {:?}", answers);
            }
            Some(Ok(SubmitOutcome::Ignored)) | None => {}
            Some(Err(e)) => warn!("wizard submit rejected: {}", e),
        }
    };

    let on_back = move |_| {
        if let Some(previous) = wizard.try_update(|w| w.back()).flatten() {
            input.set(previous);
        }
    };

    let on_final_submit = move |_| {
        match wizard.with_untracked(|w| w.form_data()) {
            Some(data) => match serde_json::to_string(&data) {
                Ok(json) => log!("Final submission with answers: {}", json),
                Err(e) => warn!("could not serialize answers: {}", e),
            },
            None => warn!("final submit before all questions were answered"),
        }
        browser::alert(THANK_YOU_ALERT);
        on_close.run(());
    };

    let can_go_back = move || wizard.with(|w| w.index() > 0 || w.is_complete());

    view! {
        <div id="chat-form-section" class="w-full bg-white py-8 px-4 lp-rise">
            <div class="max-w-3xl mx-auto">
                <div class="bg-white border border-gray-200 rounded-xl shadow-sm overflow-hidden">
                    // Header
                    <div class="bg-[#0070f3] p-4">
                        <div class="flex justify-between items-center">
                            <div>
                                <h2 class="font-medium text-white text-lg">"LeadPilot Assistant"</h2>
                                <p class="text-xs text-white/80">
                                    "Answer a few questions to generate your personalized outreach"
                                </p>
                            </div>
                            <button
                                class="text-white/80 hover:text-white"
                                on:click=move |_| on_close.run(())
                                aria-label="Close"
                            >
                                <Icon name=icons::X />
                            </button>
                        </div>
                    </div>

                    <div class="p-6 space-y-8">
                        // Answered questions
                        {move || {
                            wizard
                                .with(|w| w.answered())
                                .into_iter()
                                .map(|(question, answer)| view! {
                                    <div class="space-y-4">
                                        <QuestionBubble question=question />
                                        <div class="flex items-start justify-end gap-4 pl-14">
                                            <div class="bg-[#0070f3] rounded-lg p-4 text-white max-w-[80%] font-medium">
                                                <p>{answer}</p>
                                            </div>
                                            <div class="w-10 h-10 bg-gray-200 rounded-full flex items-center justify-center flex-shrink-0">
                                                <Icon name=icons::USER class="w-5 h-5 text-gray-500" />
                                            </div>
                                        </div>
                                    </div>
                                })
                                .collect_view()
                        }}

                        {move || match wizard.with(|w| w.current_question()) {
                            None => view! {
                                <div class="space-y-6 py-4 text-center">
                                    <h3 class="text-xl font-semibold text-gray-800 mb-4">
                                        "Thank you for your responses!"
                                    </h3>
                                    <p class="text-gray-600 mb-6">
                                        "We've collected all the information needed to generate leads and create personalized outreach messages."
                                    </p>
                                    <button
                                        class="bg-[#0070f3] text-white px-6 py-3 rounded-md hover:bg-[#0060d3] transition-colors font-medium"
                                        on:click=on_final_submit
                                    >
                                        "Generate My Leads"
                                    </button>
                                </div>
                            }
                            .into_any(),
                            Some(question) => view! {
                                <div class="space-y-4">
                                    <QuestionBubble question=question />
                                    <form class="flex flex-col gap-3 pl-14" on:submit=on_submit>
                                        <div class="flex flex-wrap gap-2 mb-2">
                                            {wizard
                                                .with_untracked(|w| w.current_suggestions())
                                                .iter()
                                                .map(|&suggestion| view! {
                                                    <button
                                                        type="button"
                                                        class="px-4 py-2 text-sm bg-gray-100 text-gray-800 font-medium rounded-md hover:bg-gray-200 border border-gray-300 hover:border-gray-400 transition-colors whitespace-nowrap shadow-sm hover:shadow"
                                                        on:click=move |_| {
                                                            input.set(suggestion.to_string());
                                                            browser::focus_input(input_ref);
                                                        }
                                                    >
                                                        {suggestion}
                                                    </button>
                                                })
                                                .collect_view()}
                                        </div>
                                        <div class="flex items-center">
                                            <input
                                                node_ref=input_ref
                                                type="text"
                                                placeholder="Type your response..."
                                                class="flex-grow p-3 border border-gray-300 rounded-l-lg focus:outline-none focus:ring-2 focus:ring-[#0070f3] focus:border-transparent text-black font-medium"
                                                autofocus
                                                prop:value=move || input.get()
                                                on:input=move |ev| input.set(event_target_value(&ev))
                                            />
                                            <button
                                                type="submit"
                                                class="bg-[#0070f3] text-white p-3 rounded-r-lg hover:bg-[#0060d3] transition-colors disabled:opacity-50"
                                                disabled=move || input.with(|v| v.trim().is_empty())
                                                aria-label="Next question"
                                            >
                                                <Icon name=icons::ARROW_RIGHT />
                                            </button>
                                        </div>
                                    </form>
                                </div>
                            }
                            .into_any(),
                        }}
                    </div>

                    // Progress footer
                    <div class="p-4 border-t border-gray-200 bg-gray-50">
                        <div class="flex justify-between items-center text-sm text-gray-500">
                            <div class="flex items-center gap-3">
                                <Show when=can_go_back>
                                    <button
                                        class="flex items-center gap-1 text-gray-500 hover:text-gray-800 transition-colors"
                                        on:click=on_back
                                    >
                                        <Icon name=icons::CHEVRON_LEFT class="w-4 h-4" />
                                        "Back"
                                    </button>
                                </Show>
                                <span>{move || wizard.with(|w| w.status_label())}</span>
                            </div>
                            <div class="w-48 bg-gray-200 rounded-full h-2">
                                <div
                                    class="bg-[#0070f3] h-2 rounded-full transition-all duration-300"
                                    style:width=move || format!("{}%", wizard.with(|w| w.progress_percent()))
                                ></div>
                            </div>
                        </div>
                    </div>
                </div>
            </div>
        </div>
    }
}

/// Assistant avatar with a question bubble
#[component]
fn QuestionBubble(question: &'static str) -> impl IntoView {
    view! {
        <div class="flex items-start gap-4">
            <div class="w-10 h-10 bg-[#0070f3] rounded-full flex items-center justify-center flex-shrink-0">
                <Icon name=icons::EYE class="w-5 h-5 text-white" />
            </div>
            <div class="bg-gray-100 rounded-lg p-4 text-gray-800 max-w-[80%]">
                <p class="font-medium">{question}</p>
            </div>
        </div>
    }
}
