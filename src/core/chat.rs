//! Chat messages and canned replies
//!
//! The assistant never calls a model. Replies are picked by a case-insensitive
//! keyword lookup and delivered after a fixed delay by the UI.

use chrono::{DateTime, Utc};
use derive_more::Display;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::core::DemoError;

/// Delay before a canned reply is shown, in milliseconds
pub const RESPONSE_DELAY_MS: u32 = 1500;

/// First assistant message of every conversation
pub const GREETING: &str =
    "Hello! I'm LeadPilot AI. How can I help you with lead generation today?";

/// Shown in place of a reply when producing one fails
pub const FALLBACK_REPLY: &str = "Sorry, I encountered an error. Please try again.";

pub const LEAD_REPLY: &str = "LeadPilot helps you generate high-quality leads through our AI-powered platform. We can help you identify potential clients, create personalized outreach messages, and track your campaign performance.";

pub const PRICING_REPLY: &str = "Our pricing starts at $49/month for the Starter plan, which includes up to 100 leads per month. We also offer Professional ($99/month) and Enterprise (custom pricing) plans for larger needs.";

pub const HELLO_REPLY: &str =
    "Hello there! How can I help you with your lead generation needs today?";

pub const DEFAULT_REPLY: &str = "Thanks for your message. Our AI-powered lead generation platform can help you find and connect with potential clients through multiple channels. Would you like to know more about specific features or how to get started?";

/// Keyword rules, checked in order. The first rule with a matching keyword wins.
const REPLY_RULES: &[(&[&str], &str)] = &[
    (&["lead", "generation"], LEAD_REPLY),
    (&["price", "cost", "pricing"], PRICING_REPLY),
    (&["hello", "hi"], HELLO_REPLY),
];

/// Who wrote a message
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize, Display)]
#[serde(rename_all = "lowercase")]
pub enum MessageRole {
    #[display("user")]
    User,
    #[display("assistant")]
    Assistant,
}

/// A single chat message, alive only while its panel is mounted
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct ChatMessage {
    pub id: Uuid,
    pub content: String,
    pub role: MessageRole,
    pub timestamp: DateTime<Utc>,
}

impl ChatMessage {
    fn new(role: MessageRole, content: impl Into<String>) -> Self {
        Self {
            id: Uuid::new_v4(),
            content: content.into(),
            role,
            timestamp: Utc::now(),
        }
    }

    /// Create a user message
    pub fn user(content: impl Into<String>) -> Self {
        Self::new(MessageRole::User, content)
    }

    /// Create an assistant message
    pub fn assistant(content: impl Into<String>) -> Self {
        Self::new(MessageRole::Assistant, content)
    }

    /// The greeting every conversation opens with
    pub fn greeting() -> Self {
        Self::assistant(GREETING)
    }

    pub fn is_user(&self) -> bool {
        self.role == MessageRole::User
    }
}

/// Pick the canned reply for a prompt.
pub fn canned_reply(prompt: &str) -> &'static str {
    let lowered = prompt.to_lowercase();
    REPLY_RULES
        .iter()
        .find(|(keywords, _)| keywords.iter().any(|k| lowered.contains(k)))
        .map(|(_, reply)| *reply)
        .unwrap_or(DEFAULT_REPLY)
}

/// Produce the assistant's answer to a user prompt.
///
/// Blank prompts are rejected; the UI never sends them because the send
/// button is disabled, so an error here ends up as [`FALLBACK_REPLY`].
pub fn respond(prompt: &str) -> Result<ChatMessage, DemoError> {
    let prompt = prompt.trim();
    if prompt.is_empty() {
        return Err(DemoError::EmptyInput);
    }
    Ok(ChatMessage::assistant(canned_reply(prompt)))
}

/// Human-readable age of a message, e.g. "3 minutes ago".
///
/// Buckets follow the usual "time ago" wording: under 30 seconds is
/// "less than a minute", hours and months get an "about" prefix.
pub fn format_relative(timestamp: DateTime<Utc>, now: DateTime<Utc>) -> String {
    let seconds = (now - timestamp).num_seconds().max(0);
    let minutes = (seconds as f64 / 60.0).round() as i64;

    let distance = if seconds < 30 {
        "less than a minute".to_string()
    } else if minutes < 2 {
        "1 minute".to_string()
    } else if minutes < 45 {
        format!("{} minutes", minutes)
    } else if minutes < 90 {
        "about 1 hour".to_string()
    } else if minutes < 24 * 60 {
        format!("about {} hours", (minutes as f64 / 60.0).round() as i64)
    } else if minutes < 42 * 60 {
        "1 day".to_string()
    } else if minutes < 30 * 24 * 60 {
        format!("{} days", (minutes as f64 / (24.0 * 60.0)).round() as i64)
    } else if minutes < 365 * 24 * 60 {
        let months = ((minutes as f64 / (30.0 * 24.0 * 60.0)).round() as i64).max(1);
        if months == 1 {
            "about 1 month".to_string()
        } else {
            format!("{} months", months)
        }
    } else {
        let years = (minutes as f64 / (365.0 * 24.0 * 60.0)).floor() as i64;
        if years == 1 {
            "about 1 year".to_string()
        } else {
            format!("about {} years", years)
        }
    };

    format!("{} ago", distance)
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::Duration;

    #[test]
    fn test_canned_reply_lead_keywords() {
        assert_eq!(canned_reply("How do you find leads?"), LEAD_REPLY);
        assert_eq!(canned_reply("Tell me about GENERATION"), LEAD_REPLY);
    }

    #[test]
    fn test_canned_reply_pricing_keywords() {
        assert_eq!(canned_reply("What is the price?"), PRICING_REPLY);
        assert_eq!(canned_reply("how much does it cost"), PRICING_REPLY);
        assert_eq!(canned_reply("Pricing please"), PRICING_REPLY);
    }

    #[test]
    fn test_canned_reply_greeting() {
        assert_eq!(canned_reply("Hello"), HELLO_REPLY);
        assert_eq!(canned_reply("hi"), HELLO_REPLY);
    }

    #[test]
    fn test_canned_reply_first_rule_wins() {
        // "lead" outranks "price"
        assert_eq!(canned_reply("price per lead"), LEAD_REPLY);
    }

    #[test]
    fn test_canned_reply_default() {
        assert_eq!(canned_reply("Do you support Slack?"), DEFAULT_REPLY);
    }

    #[test]
    fn test_respond_rejects_blank_prompt() {
        assert_eq!(respond(""), Err(DemoError::EmptyInput));
        assert_eq!(respond("   \n"), Err(DemoError::EmptyInput));
    }

    #[test]
    fn test_respond_builds_assistant_message() {
        let reply = respond("  what's the price?  ").unwrap();
        assert_eq!(reply.role, MessageRole::Assistant);
        assert_eq!(reply.content, PRICING_REPLY);
    }

    #[test]
    fn test_message_constructors() {
        let user = ChatMessage::user("Hi");
        assert!(user.is_user());
        assert_eq!(user.content, "Hi");

        let greeting = ChatMessage::greeting();
        assert_eq!(greeting.role, MessageRole::Assistant);
        assert_eq!(greeting.content, GREETING);

        assert_ne!(user.id, greeting.id);
    }

    #[test]
    fn test_role_display_and_serde() {
        assert_eq!(MessageRole::User.to_string(), "user");
        assert_eq!(
            serde_json::to_string(&MessageRole::Assistant).unwrap(),
            "\"assistant\""
        );
    }

    #[test]
    fn test_format_relative() {
        let now = Utc::now();
        assert_eq!(format_relative(now, now), "less than a minute ago");
        assert_eq!(
            format_relative(now - Duration::seconds(50), now),
            "1 minute ago"
        );
        assert_eq!(
            format_relative(now - Duration::minutes(5), now),
            "5 minutes ago"
        );
        assert_eq!(
            format_relative(now - Duration::minutes(60), now),
            "about 1 hour ago"
        );
        assert_eq!(
            format_relative(now - Duration::hours(3), now),
            "about 3 hours ago"
        );
        assert_eq!(format_relative(now - Duration::hours(30), now), "1 day ago");
        assert_eq!(format_relative(now - Duration::days(4), now), "4 days ago");
    }

    #[test]
    fn test_format_relative_future_clamps_to_now() {
        let now = Utc::now();
        assert_eq!(
            format_relative(now + Duration::minutes(3), now),
            "less than a minute ago"
        );
    }
}
