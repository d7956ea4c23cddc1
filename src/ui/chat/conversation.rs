//! Conversation state shared by the inline chat box and the floating widget

use chrono::{DateTime, Utc};
use leptos::html;
use leptos::logging::warn;
use leptos::prelude::*;

use crate::core::chat::{self, ChatMessage, RESPONSE_DELAY_MS};
use crate::ui::browser;
use crate::ui::chat::message::{ChatBubble, TypingIndicator};
use crate::ui::icon::{Icon, icons};

/// Reactive handle to one conversation
#[derive(Clone, Copy)]
pub struct Conversation {
    pub messages: RwSignal<Vec<ChatMessage>>,
    pub input: RwSignal<String>,
    pub is_loading: RwSignal<bool>,
}

impl Conversation {
    /// Start a conversation with the assistant's greeting
    pub fn new() -> Self {
        Self {
            messages: RwSignal::new(vec![ChatMessage::greeting()]),
            input: RwSignal::new(String::new()),
            is_loading: RwSignal::new(false),
        }
    }

    /// Whether the send button should be enabled
    pub fn can_send(&self) -> bool {
        !self.is_loading.get() && self.input.with(|v| !v.trim().is_empty())
    }

    /// Post the typed message and schedule the canned reply.
    ///
    /// Returns false when nothing was sent (blank input or a reply still pending).
    pub fn send(&self) -> bool {
        if self.is_loading.get_untracked() {
            return false;
        }
        let prompt = self.input.with_untracked(|v| v.trim().to_string());
        if prompt.is_empty() {
            return false;
        }

        self.messages.update(|m| m.push(ChatMessage::user(prompt.clone())));
        self.input.set(String::new());
        self.is_loading.set(true);

        let conversation = *self;
        browser::after(RESPONSE_DELAY_MS, move || conversation.deliver_reply(&prompt));
        true
    }

    /// Append the canned reply to `prompt`. Does nothing once the panel is unmounted.
    fn deliver_reply(&self, prompt: &str) {
        let reply = chat::respond(prompt).unwrap_or_else(|e| {
            warn!("Error generating response: {}", e);
            ChatMessage::assistant(chat::FALLBACK_REPLY)
        });
        if self.messages.try_update(|m| m.push(reply)).is_some() {
            self.is_loading.set(false);
        }
    }
}

impl Default for Conversation {
    fn default() -> Self {
        Self::new()
    }
}

/// Reference time for message ages, refreshed whenever a message arrives
pub fn message_clock(messages: RwSignal<Vec<ChatMessage>>) -> Memo<DateTime<Utc>> {
    Memo::new(move |_| {
        messages.track();
        Utc::now()
    })
}

/// Message count and pending flag, the parts of a transcript that move its end
type TranscriptShape = (usize, bool);

/// Follow the end of the transcript only when it changed after mounting
fn should_follow(previous: Option<TranscriptShape>, current: TranscriptShape) -> bool {
    previous.is_some_and(|previous| previous != current)
}

/// Scrolling message list that follows the newest message
#[component]
pub fn ChatTranscript(
    conversation: Conversation,
    #[prop(optional)] compact: bool,
) -> impl IntoView {
    let end_ref = NodeRef::<html::Div>::new();
    let clock = message_clock(conversation.messages);

    Effect::new(move |previous: Option<TranscriptShape>| {
        let current = (
            conversation.messages.with(Vec::len),
            conversation.is_loading.get(),
        );
        if should_follow(previous, current) {
            browser::scroll_into_view(end_ref, false);
        }
        current
    });

    view! {
        <div class="flex-1 overflow-y-auto p-4 bg-gray-50">
            <For
                each=move || conversation.messages.get()
                key=|message| message.id
                children=move |message| view! { <ChatBubble message=message now=clock /> }
            />

            <div node_ref=end_ref></div>

            <Show when=move || conversation.is_loading.get()>
                <TypingIndicator compact=compact />
            </Show>
        </div>
    }
}

/// Auto-growing textarea with a send button. Enter sends, Shift+Enter adds a line.
#[component]
pub fn ChatComposer(
    conversation: Conversation,
    /// Height cap for the textarea, in pixels
    max_height: i32,
    placeholder: &'static str,
    #[prop(optional)] compact: bool,
    /// Focus the textarea once it is mounted
    #[prop(optional)]
    autofocus: bool,
) -> impl IntoView {
    let textarea_ref = NodeRef::<html::Textarea>::new();

    if autofocus {
        Effect::new(move |_| {
            if textarea_ref.get().is_some() {
                browser::focus_textarea(textarea_ref);
            }
        });
    }

    let submit = move || {
        if conversation.send() {
            browser::reset_height(textarea_ref);
        }
    };

    let textarea_class = if compact {
        "flex-1 resize-none border border-gray-300 rounded-lg py-2 px-3 pr-10 focus:outline-none focus:ring-2 focus:ring-[#0063B2] focus:border-transparent max-h-[100px] min-h-[40px] text-sm"
    } else {
        "flex-1 resize-none border border-gray-300 rounded-lg py-3 px-4 pr-12 focus:outline-none focus:ring-2 focus:ring-[#0063B2] focus:border-transparent max-h-[200px] min-h-[56px]"
    };
    let form_class = if compact {
        "border-t border-gray-200 p-3 bg-white"
    } else {
        "border-t border-gray-200 p-4 bg-white"
    };
    let button_position = if compact { "absolute right-2 bottom-2" } else { "absolute right-3 bottom-3" };
    let icon_size = if compact { "w-[18px] h-[18px]" } else { "w-5 h-5" };

    view! {
        <form
            class=form_class
            on:submit=move |ev| {
                ev.prevent_default();
                submit();
            }
        >
            <div class="relative flex items-end">
                <textarea
                    node_ref=textarea_ref
                    class=textarea_class
                    rows="1"
                    placeholder=placeholder
                    prop:value=move || conversation.input.get()
                    on:input=move |ev| {
                        conversation.input.set(event_target_value(&ev));
                        browser::autoresize(textarea_ref, max_height);
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
                        let state = if conversation.can_send() {
                            "text-[#0063B2] hover:bg-[#0063B2]/10"
                        } else {
                            "text-gray-400 cursor-not-allowed"
                        };
                        format!("{} rounded-md p-1 transition-colors {}", button_position, state)
                    }
                    disabled=move || !conversation.can_send()
                    aria-label="Send message"
                >
                    <Icon name=icons::SEND class=icon_size />
                </button>
            </div>
            {(!compact).then(|| view! {
                <p class="text-xs text-gray-500 mt-2">
                    "Press Enter to send, Shift+Enter for a new line"
                </p>
            })}
        </form>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn owner() -> Owner {
        let owner = Owner::new();
        owner.set();
        owner
    }

    #[test]
    fn test_send_blank_input() {
        let _owner = owner();
        let conversation = Conversation::new();
        conversation.input.set("  \n ".to_string());

        assert!(!conversation.can_send());
        assert!(!conversation.send());
        assert_eq!(conversation.messages.with_untracked(Vec::len), 1);
        assert!(!conversation.is_loading.get_untracked());
    }

    #[test]
    fn test_send_posts_message() {
        let _owner = owner();
        let conversation = Conversation::new();
        conversation.input.set("What does it cost?".to_string());

        assert!(conversation.send());
        conversation.messages.with_untracked(|m| {
            assert_eq!(m.len(), 2);
            assert!(m[1].is_user());
            assert_eq!(m[1].content, "What does it cost?");
        });
        assert!(conversation.input.with_untracked(String::is_empty));
        assert!(conversation.is_loading.get_untracked());
    }

    #[test]
    fn test_send_refused_while_reply_pending() {
        let _owner = owner();
        let conversation = Conversation::new();
        conversation.input.set("hello".to_string());
        assert!(conversation.send());

        conversation.input.set("anyone there?".to_string());
        assert!(!conversation.can_send());
        assert!(!conversation.send());
        assert_eq!(conversation.messages.with_untracked(Vec::len), 2);
        assert_eq!(conversation.input.get_untracked(), "anyone there?");
    }

    #[test]
    fn test_deliver_reply() {
        let _owner = owner();
        let conversation = Conversation::new();
        conversation.input.set("Tell me about pricing".to_string());
        assert!(conversation.send());

        conversation.deliver_reply("Tell me about pricing");
        assert!(!conversation.is_loading.get_untracked());
        conversation.messages.with_untracked(|m| {
            assert_eq!(m.len(), 3);
            assert!(m[2].content.starts_with("Our pricing starts at $49/month"));
        });
    }

    #[test]
    fn test_deliver_reply_after_unmount() {
        let owner = owner();
        let conversation = Conversation::new();
        owner.cleanup();

        conversation.deliver_reply("hello");
        assert_eq!(conversation.messages.try_with_untracked(Vec::len), None);
    }

    #[test]
    fn test_message_clock_refreshes_on_new_message() {
        let _owner = owner();
        let conversation = Conversation::new();
        let clock = message_clock(conversation.messages);

        let first = clock.get_untracked();
        std::thread::sleep(std::time::Duration::from_millis(5));
        assert_eq!(clock.get_untracked(), first);

        conversation.messages.update(|m| m.push(ChatMessage::user("hi")));
        assert!(clock.get_untracked() > first);
    }

    #[test]
    fn test_should_follow() {
        // Nothing to follow on mount
        assert!(!should_follow(None, (1, false)));
        assert!(!should_follow(Some((1, false)), (1, false)));
        assert!(should_follow(Some((1, false)), (2, true)));
        assert!(should_follow(Some((2, true)), (3, false)));
    }
}
