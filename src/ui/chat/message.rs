use chrono::{DateTime, Utc};
use leptos::prelude::*;

use crate::core::chat::{ChatMessage, format_relative};
use crate::ui::icon::{Icon, icons};

/// One chat bubble with avatar and relative timestamp.
/// The age is measured against `now`, so it refreshes when `now` moves.
#[component]
pub fn ChatBubble(message: ChatMessage, #[prop(into)] now: Signal<DateTime<Utc>>) -> impl IntoView {
    let is_user = message.is_user();
    let timestamp = message.timestamp;
    let age = move || format_relative(timestamp, now.get());

    let (row, layout, avatar_slot, bubble, meta) = if is_user {
        (
            "flex justify-end mb-4 lp-pop",
            "flex max-w-[80%] flex-row-reverse",
            "flex-shrink-0 ml-3 flex items-start",
            "rounded-lg p-4 bg-[#0063B2] text-white",
            "text-xs mt-1 text-white/70",
        )
    } else {
        (
            "flex justify-start mb-4 lp-pop",
            "flex max-w-[80%] flex-row",
            "flex-shrink-0 mr-3 flex items-start",
            "rounded-lg p-4 bg-white text-gray-800 border border-gray-200",
            "text-xs mt-1 text-gray-500",
        )
    };

    let avatar = if is_user {
        view! {
            <div class="w-8 h-8 rounded-full flex items-center justify-center bg-[#0063B2]">
                <Icon name=icons::USER class="w-4 h-4 text-white" />
            </div>
        }
        .into_any()
    } else {
        view! {
            <div class="w-8 h-8 rounded-full flex items-center justify-center bg-[#0063B2]/10">
                <Icon name=icons::BOT class="w-4 h-4 text-[#0063B2]" />
            </div>
        }
        .into_any()
    };

    view! {
        <div class=row>
            <div class=layout>
                <div class=avatar_slot>{avatar}</div>
                <div class=bubble>
                    <div class="whitespace-pre-wrap">{message.content}</div>
                    <div class=meta>{age}</div>
                </div>
            </div>
        </div>
    }
}

/// Bot avatar with a spinner while a reply is pending
#[component]
pub fn TypingIndicator(#[prop(optional)] compact: bool) -> impl IntoView {
    let (box_class, avatar_class, icon_class) = if compact {
        (
            "flex items-center p-3 rounded-lg bg-white my-2 max-w-[80%] lp-pop",
            "mr-2 flex items-center justify-center w-7 h-7 bg-[#0063B2]/10 text-[#0063B2] rounded-full",
            "w-3.5 h-3.5",
        )
    } else {
        (
            "flex items-center p-4 rounded-lg bg-white my-2 max-w-[80%] lp-pop",
            "mr-2 flex items-center justify-center w-8 h-8 bg-[#0063B2]/10 text-[#0063B2] rounded-full",
            "w-4 h-4",
        )
    };

    view! {
        <div class=box_class role="status">
            <div class=avatar_class>
                <Icon name=icons::BOT class=icon_class />
            </div>
            <span class=format!("{} animate-spin text-[#0063B2]", icon_class)>
                <Icon name=icons::LOADER class="w-full h-full" />
            </span>
            <span class="sr-only">"LeadPilot AI is typing"</span>
        </div>
    }
}
