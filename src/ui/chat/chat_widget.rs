//! Floating chat button with a popup conversation panel

use leptos::html;
use leptos::prelude::*;

use crate::ui::chat::conversation::{ChatComposer, ChatTranscript, Conversation};
use crate::ui::icon::{Icon, icons};

const MAX_INPUT_HEIGHT: i32 = 100;

#[component]
pub fn ChatWidget() -> impl IntoView {
    let is_open = RwSignal::new(false);
    // Kept outside the popup so the conversation survives closing it
    let conversation = Conversation::new();
    let widget_ref = NodeRef::<html::Div>::new();

    // Close on Escape or a click outside the widget
    #[cfg(not(feature = "ssr"))]
    {
        use leptos::ev::{keydown, mousedown};
        use wasm_bindgen::JsCast;

        let handle_keydown = window_event_listener(keydown, move |ev| {
            if ev.key() == "Escape" {
                close_panel(is_open);
            }
        });

        let handle_mousedown = window_event_listener(mousedown, move |ev| {
            if is_open.try_get_untracked() != Some(true) {
                return;
            }
            let Some(widget) = widget_ref.try_get_untracked().flatten() else {
                return;
            };
            let clicked_inside = ev
                .target()
                .and_then(|t| t.dyn_into::<web_sys::Node>().ok())
                .is_some_and(|node| widget.contains(Some(&node)));
            if !clicked_inside {
                close_panel(is_open);
            }
        });

        on_cleanup(move || {
            handle_keydown.remove();
            handle_mousedown.remove();
        });
    }

    view! {
        <div node_ref=widget_ref>
            <button
                class="fixed bottom-6 right-6 z-50 w-14 h-14 rounded-full bg-gradient-to-r from-[#0063B2] to-[#004173] text-white shadow-lg flex items-center justify-center lp-press"
                on:click=move |_| is_open.update(|v| *v = !*v)
                aria-label="Chat with LeadPilot AI"
                aria-expanded=move || is_open.get().to_string()
            >
                {move || {
                    if is_open.get() {
                        view! { <Icon name=icons::X class="w-6 h-6" /> }.into_any()
                    } else {
                        view! { <Icon name=icons::CHAT class="w-6 h-6" /> }.into_any()
                    }
                }}
            </button>

            <Show when=move || is_open.get()>
                <div class="fixed bottom-24 right-6 z-50 flex flex-col bg-white rounded-xl shadow-xl overflow-hidden border border-[#A3B8CC]/20 w-full max-w-md h-[500px] lp-pop">
                    <div class="bg-gradient-to-r from-[#0063B2] to-[#004173] p-3 text-white flex items-center justify-between">
                        <div class="flex items-center">
                            <Icon name=icons::BOT class="w-5 h-5 mr-2" />
                            <h2 class="font-medium">"LeadPilot AI Assistant"</h2>
                        </div>
                        <button
                            class="text-white/80 hover:text-white transition-colors"
                            on:click=move |_| close_panel(is_open)
                            aria-label="Close chat"
                        >
                            <Icon name=icons::X />
                        </button>
                    </div>

                    <ChatTranscript conversation=conversation compact=true />
                    <ChatComposer
                        conversation=conversation
                        max_height=MAX_INPUT_HEIGHT
                        placeholder="Ask anything..."
                        compact=true
                        autofocus=true
                    />
                </div>
            </Show>
        </div>
    }
}

/// Close the popup if it is open. Does nothing once the widget is unmounted.
fn close_panel(is_open: RwSignal<bool>) {
    if is_open.try_get_untracked() == Some(true) {
        is_open.set(false);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_close_panel() {
        let owner = Owner::new();
        owner.set();

        let is_open = RwSignal::new(true);
        close_panel(is_open);
        assert!(!is_open.get_untracked());

        close_panel(is_open);
        assert!(!is_open.get_untracked());
    }

    #[test]
    fn test_close_panel_after_unmount() {
        let owner = Owner::new();
        owner.set();

        let is_open = RwSignal::new(true);
        owner.cleanup();

        close_panel(is_open);
        assert_eq!(is_open.try_get_untracked(), None);
    }
}
