use leptos::prelude::*;

use crate::ui::chat::conversation::{ChatComposer, ChatTranscript, Conversation};
use crate::ui::icon::{Icon, icons};

const MAX_INPUT_HEIGHT: i32 = 200;

/// Inline chat panel with the LeadPilot assistant
#[component]
pub fn ChatBox() -> impl IntoView {
    let conversation = Conversation::new();

    view! {
        <div class="flex flex-col bg-white rounded-xl shadow-xl overflow-hidden border border-[#A3B8CC]/20 h-[600px] max-h-[80vh] w-full max-w-2xl mx-auto">
            <div class="bg-gradient-to-r from-[#0063B2] to-[#004173] p-4 text-white flex items-center">
                <Icon name=icons::BOT class="w-6 h-6 mr-2" />
                <h2 class="font-medium">"LeadPilot AI Assistant"</h2>
            </div>

            <ChatTranscript conversation=conversation />
            <ChatComposer
                conversation=conversation
                max_height=MAX_INPUT_HEIGHT
                placeholder="Type your message..."
            />
        </div>
    }
}
