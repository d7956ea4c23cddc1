//! Application pages
//!
//! - Landing page (home)
//! - Demo page (lead finder and assistant)
//! - Not found page

mod demo;
mod landing;
mod not_found;

pub use demo::DemoPage;
pub use landing::LandingPage;
pub use not_found::NotFoundPage;
