//! "Find Your Perfect Leads" section
//!
//! The visitor describes a target audience, waits through a simulated search
//! and gets the mock contact list plus an outreach email template. Each
//! contact can copy a personalized email, and the list exports as CSV.

use leptos::html;
use leptos::logging::warn;
use leptos::prelude::*;

use crate::core::leads::{
    self, COPIED_RESET_MS, CSV_FILENAME, CSV_MIME_TYPE, LeadSearchResult, SEARCH_DELAY_MS,
    SearchSequence, Target,
};
use crate::core::motion::CHAT_SECTION;
use crate::ui::browser;
use crate::ui::icon::{Icon, icons};

const MAX_PROMPT_HEIGHT: i32 = 150;

/// Lifecycle of one search
#[derive(Clone, Debug, PartialEq)]
enum SearchState {
    Idle,
    Loading,
    Found(LeadSearchResult),
    Failed,
}

#[component]
pub fn ChatSection() -> impl IntoView {
    let prompt = RwSignal::new(String::new());
    let state = RwSignal::new(SearchState::Idle);
    let copied_email = RwSignal::new(None::<String>);
    let searches = StoredValue::new(SearchSequence::default());
    let prompt_ref = NodeRef::<html::Textarea>::new();
    let result_ref = NodeRef::<html::Div>::new();

    // Focus the prompt whenever it is mounted, including after a reset
    Effect::new(move |_| {
        if prompt_ref.get().is_some() {
            browser::focus_textarea(prompt_ref);
        }
    });

    // Bring the results into view whenever they change
    Effect::new(move |_| {
        if state.with(|s| *s != SearchState::Idle) {
            browser::scroll_into_view(result_ref, true);
        }
    });

    let is_loading = move || state.with(|s| *s == SearchState::Loading);
    let can_submit = move || !is_loading() && prompt.with(|p| !p.trim().is_empty());

    let submit = move || {
        if state.with_untracked(|s| *s == SearchState::Loading) {
            return;
        }
        let query = prompt.with_untracked(|p| p.trim().to_string());
        if query.is_empty() {
            return;
        }

        let Some(ticket) = searches.try_update_value(|s| s.begin()) else {
            return;
        };
        state.set(SearchState::Loading);
        browser::reset_height(prompt_ref);
        browser::after(SEARCH_DELAY_MS, move || finish_search(state, searches, ticket, &query));
    };

    let copy_email = move |template: &str, target: &Target| {
        browser::copy_to_clipboard(&leads::personalize(template, target));
        let email = target.email.clone();
        copied_email.set(Some(email.clone()));
        browser::after(COPIED_RESET_MS, move || clear_copied(copied_email, &email));
    };

    let export_csv = move |_| {
        let csv = state.with_untracked(|s| match s {
            SearchState::Found(result) => Some(leads::to_csv(&result.targets)),
            _ => None,
        });
        if let Some(csv) = csv {
            if let Err(e) = browser::download_text(CSV_FILENAME, CSV_MIME_TYPE, &csv) {
                warn!("{}", e);
            }
        }
    };

    let reset = move |_| {
        searches.update_value(|s| s.cancel());
        prompt.set(String::new());
        state.set(SearchState::Idle);
        copied_email.set(None);
    };

    view! {
        <section class="min-h-screen bg-gradient-to-b from-[#0063B2]/5 to-[#0063B2]/10 py-20 px-4">
            <div class="max-w-6xl mx-auto">
                <div class="text-center mb-16 lp-rise" style=CHAT_SECTION.style_for(0)>
                    <h2 class="text-4xl font-bold text-[#004173] mb-4">"Find Your Perfect Leads"</h2>
                    <p class="text-[#6E8898] max-w-2xl mx-auto">
                        "Describe your target audience and we'll find relevant corporate contacts for your outreach campaigns."
                    </p>
                </div>

                <div
                    class="flex flex-col bg-white rounded-xl shadow-xl overflow-hidden border border-[#A3B8CC]/20 w-full max-w-3xl mx-auto lp-rise"
                    style=CHAT_SECTION.style_for(1)
                >
                    // Panel header
                    <div class="bg-gradient-to-r from-[#0063B2] to-[#004173] p-4 text-white flex items-center justify-between">
                        <div class="flex items-center">
                            <Icon name=icons::BUILDING class="w-[22px] h-[22px] mr-2" />
                            <h3 class="font-medium">"Lead Generation Tool"</h3>
                        </div>
                        <Show when=move || state.with(|s| matches!(s, SearchState::Found(_)))>
                            <button
                                class="flex items-center text-sm bg-white/10 hover:bg-white/20 px-3 py-1 rounded-full transition-colors"
                                on:click=export_csv
                            >
                                <Icon name=icons::DOWNLOAD class="w-4 h-4 mr-1" />
                                "Export CSV"
                            </button>
                        </Show>
                    </div>

                    <Show
                        when=move || state.with(|s| *s != SearchState::Idle)
                        fallback=move || view! {
                            // Prompt form
                            <div class="p-8 flex flex-col items-center justify-center">
                                <form
                                    class="w-full max-w-2xl"
                                    on:submit=move |ev| {
                                        ev.prevent_default();
                                        submit();
                                    }
                                >
                                    <div class="relative">
                                        <label class="block text-[#004173] font-medium mb-2">
                                            "Describe your target audience"
                                        </label>
                                        <textarea
                                            node_ref=prompt_ref
                                            rows="3"
                                            placeholder="Example: Marketing directors at tech companies in San Francisco with 50-200 employees who need help with lead generation"
                                            class="w-full resize-none border border-gray-300 rounded-lg py-4 px-5 pr-14 focus:outline-none focus:ring-2 focus:ring-[#0063B2] focus:border-transparent min-h-[120px] text-[#004173]"
                                            prop:value=move || prompt.get()
                                            on:input=move |ev| {
                                                prompt.set(event_target_value(&ev));
                                                browser::autoresize(prompt_ref, MAX_PROMPT_HEIGHT);
                                            }
                                            on:keydown=move |ev| {
                                                if ev.key() == "Enter" && !ev.shift_key() {
                                                    ev.prevent_default();
                                                    submit();
                                                }
                                            }
                                        ></textarea>
                                        <button
                                            type="submit"
                                            class=move || {
                                                if can_submit() {
                                                    "absolute right-4 bottom-4 rounded-full p-2 bg-[#0063B2] text-white hover:bg-[#004173] transition-colors"
                                                } else {
                                                    "absolute right-4 bottom-4 rounded-full p-2 bg-gray-200 text-gray-400 cursor-not-allowed transition-colors"
                                                }
                                            }
                                            disabled=move || !can_submit()
                                            aria-label="Find contacts"
                                        >
                                            <Icon name=icons::ARROW_RIGHT />
                                        </button>
                                    </div>
                                    <p class="text-xs text-gray-500 mt-2 text-center">
                                        "Be specific about industry, role, company size, location, and pain points"
                                    </p>
                                </form>
                            </div>
                        }
                    >
                        // Results
                        <div class="p-6 flex flex-col">
                            <div class="mb-6 bg-[#0063B2]/5 p-4 rounded-lg border border-[#0063B2]/10">
                                <h4 class="font-medium text-[#004173] mb-1">"Your target audience:"</h4>
                                <p class="text-[#6E8898]">{move || prompt.get()}</p>
                            </div>

                            <div node_ref=result_ref>
                                {move || match state.get() {
                                    SearchState::Loading | SearchState::Idle => view! {
                                        <div class="flex items-center p-6 bg-white rounded-lg border border-gray-200">
                                            <div class="mr-3 flex items-center justify-center w-8 h-8 bg-[#0063B2]/10 text-[#0063B2] rounded-full">
                                                <Icon name=icons::BUILDING class="w-4 h-4" />
                                            </div>
                                            <span class="w-4 h-4 mr-2 animate-spin text-[#0063B2]">
                                                <Icon name=icons::LOADER class="w-full h-full" />
                                            </span>
                                            <span class="text-[#6E8898]">"Finding relevant contacts..."</span>
                                        </div>
                                    }
                                    .into_any(),
                                    SearchState::Found(result) => view! {
                                        <LeadResults result=result copied_email=copied_email on_copy=copy_email />
                                    }
                                    .into_any(),
                                    SearchState::Failed => view! {
                                        <div class="p-4 bg-red-50 text-red-600 rounded-lg">
                                            "Sorry, we encountered an error finding contacts. Please try again with a more specific description."
                                        </div>
                                    }
                                    .into_any(),
                                }}
                            </div>

                            <div class="mt-8 flex justify-center">
                                <button
                                    class="px-6 py-2 bg-[#0063B2] text-white rounded-full hover:bg-[#004173] transition-colors"
                                    on:click=reset
                                >
                                    "Find new contacts"
                                </button>
                            </div>
                        </div>
                    </Show>
                </div>
            </div>
        </section>
    }
}

/// Publish the result of search `ticket`. Drops it when the panel was reset,
/// a newer search started, or the section is no longer mounted.
fn finish_search(
    state: RwSignal<SearchState>,
    searches: StoredValue<SearchSequence>,
    ticket: u32,
    query: &str,
) {
    let current = searches.try_with_value(|s| s.is_current(ticket)) == Some(true);
    let loading = state.try_with_untracked(|s| *s == SearchState::Loading) == Some(true);
    if !current || !loading {
        return;
    }

    let next = match leads::search(query) {
        Ok(result) => SearchState::Found(result),
        Err(e) => {
            warn!("Error generating response: {}", e);
            SearchState::Failed
        }
    };
    state.set(next);
}

/// Clear the "Copied" marker for `email`. A later copy may already have replaced it.
fn clear_copied(copied_email: RwSignal<Option<String>>, email: &str) {
    if copied_email.try_with_untracked(|c| c.as_deref() == Some(email)) == Some(true) {
        copied_email.set(None);
    }
}

/// Contact cards and the email template for a finished search
#[component]
fn LeadResults<F>(
    result: LeadSearchResult,
    copied_email: RwSignal<Option<String>>,
    on_copy: F,
) -> impl IntoView
where
    F: Fn(&str, &Target) + Copy + Send + Sync + 'static,
{
    let count = result.targets.len();
    let template = StoredValue::new(result.email_template.clone());

    let cards = result
        .targets
        .into_iter()
        .map(|target| {
            let email = target.email.clone();
            let is_copied = move || copied_email.with(|c| c.as_deref() == Some(email.as_str()));
            let linkedin = target.linkedin_url();
            let card = target.clone();

            view! {
                <div class="bg-white p-4 rounded-lg border border-gray-200 flex flex-col md:flex-row md:items-center justify-between">
                    <div>
                        <h5 class="font-medium text-[#004173]">{target.name}</h5>
                        <p class="text-[#6E8898] text-sm">{format!("{} at {}", target.position, target.company)}</p>
                        <div class="flex items-center mt-1">
                            <Icon name=icons::MAIL class="w-3.5 h-3.5 text-[#0063B2] mr-1" />
                            <span class="text-sm text-[#6E8898]">{target.email}</span>
                        </div>
                    </div>
                    <div class="mt-3 md:mt-0 flex items-center gap-2">
                        {linkedin.map(|href| view! {
                            <a
                                href=href
                                target="_blank"
                                rel="noopener noreferrer"
                                class="text-xs px-3 py-1 bg-[#0063B2]/10 text-[#0063B2] rounded-full hover:bg-[#0063B2]/20 transition-colors"
                            >
                                "LinkedIn"
                            </a>
                        })}
                        <button
                            class="text-xs px-3 py-1 bg-[#0063B2] text-white rounded-full hover:bg-[#004173] transition-colors flex items-center"
                            on:click=move |_| template.with_value(|t| on_copy(t, &card))
                        >
                            {move || {
                                if is_copied() {
                                    view! {
                                        <Icon name=icons::CHECK class="w-3.5 h-3.5 mr-1" />
                                        "Copied"
                                    }
                                    .into_any()
                                } else {
                                    view! {
                                        <Icon name=icons::COPY class="w-3.5 h-3.5 mr-1" />
                                        "Copy Email"
                                    }
                                    .into_any()
                                }
                            }}
                        </button>
                    </div>
                </div>
            }
        })
        .collect_view();

    view! {
        <div class="space-y-6 lp-pop">
            <div>
                <h4 class="font-medium text-[#004173] mb-3 flex items-center">
                    <Icon name=icons::BUILDING class="w-[18px] h-[18px] mr-2" />
                    {format!("Found {} relevant contacts", count)}
                </h4>
                <div class="grid gap-4">{cards}</div>
            </div>

            <div class="mt-8">
                <h4 class="font-medium text-[#004173] mb-3 flex items-center">
                    <Icon name=icons::MAIL class="w-[18px] h-[18px] mr-2" />
                    "AI-Generated Email Template"
                </h4>
                <div class="bg-white p-5 rounded-lg border border-gray-200">
                    <pre class="whitespace-pre-wrap text-[#004173] font-sans">{result.email_template}</pre>
                </div>
                <p class="text-xs text-[#6E8898] mt-2">
                    "Click \"Copy Email\" on any contact to get a personalized version of this template."
                </p>
            </div>
        </div>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const QUERY: &str = "CTOs at fintech startups";

    fn setup() -> (Owner, RwSignal<SearchState>, StoredValue<SearchSequence>) {
        let owner = Owner::new();
        owner.set();
        let state = RwSignal::new(SearchState::Idle);
        let searches = StoredValue::new(SearchSequence::default());
        (owner, state, searches)
    }

    fn begin(searches: StoredValue<SearchSequence>) -> u32 {
        searches.try_update_value(|s| s.begin()).unwrap()
    }

    #[test]
    fn test_finish_search_shows_results() {
        let (_owner, state, searches) = setup();
        let ticket = begin(searches);
        state.set(SearchState::Loading);

        finish_search(state, searches, ticket, QUERY);
        assert!(state.with_untracked(|s| matches!(s, SearchState::Found(r) if r.targets.len() == 5)));
    }

    #[test]
    fn test_finish_search_after_reset() {
        let (_owner, state, searches) = setup();
        let ticket = begin(searches);
        state.set(SearchState::Loading);

        // "Find new contacts" while the search is still running
        searches.update_value(|s| s.cancel());
        state.set(SearchState::Idle);

        finish_search(state, searches, ticket, QUERY);
        assert_eq!(state.get_untracked(), SearchState::Idle);
    }

    #[test]
    fn test_finish_search_superseded() {
        let (_owner, state, searches) = setup();
        let stale = begin(searches);
        let fresh = begin(searches);
        state.set(SearchState::Loading);

        finish_search(state, searches, stale, QUERY);
        assert_eq!(state.get_untracked(), SearchState::Loading);

        finish_search(state, searches, fresh, QUERY);
        assert!(state.with_untracked(|s| matches!(s, SearchState::Found(_))));
    }

    #[test]
    fn test_clear_copied() {
        let (_owner, _, _) = setup();
        let copied = RwSignal::new(Some("a@example.com".to_string()));

        // A newer copy keeps its marker
        clear_copied(copied, "b@example.com");
        assert_eq!(copied.get_untracked().as_deref(), Some("a@example.com"));

        clear_copied(copied, "a@example.com");
        assert_eq!(copied.get_untracked(), None);
    }

    #[test]
    fn test_timers_after_unmount() {
        let (owner, state, searches) = setup();
        let copied = RwSignal::new(Some("a@example.com".to_string()));
        let ticket = begin(searches);
        state.set(SearchState::Loading);
        owner.cleanup();

        finish_search(state, searches, ticket, QUERY);
        clear_copied(copied, "a@example.com");
        assert_eq!(state.try_get_untracked(), None);
        assert_eq!(copied.try_get_untracked(), None);
    }
}
