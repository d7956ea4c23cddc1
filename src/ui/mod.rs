pub mod banner;
pub mod browser;
pub mod chat;
pub mod chat_form;
pub mod features;
pub mod footer;
pub mod header;
pub mod icon;
pub mod pages;
pub mod styles;

pub use banner::{Banner, BannerVariant};
pub use chat::{ChatBox, ChatSection, ChatWidget};
pub use chat_form::ChatForm;
pub use features::Features;
pub use footer::Footer;
pub use header::Header;
pub use icon::{Icon, icons};
