//! Chat surfaces: the inline chat box, the floating widget and the lead finder

mod chat_box;
mod chat_section;
mod chat_widget;
pub mod conversation;
pub mod message;

pub use chat_box::ChatBox;
pub use chat_section::ChatSection;
pub use chat_widget::ChatWidget;
pub use conversation::Conversation;
