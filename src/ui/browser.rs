//! Browser-side helpers used by the interactive components.
//!
//! Every helper is a no-op while rendering on the server, so components can
//! call them from event handlers and effects without their own `cfg` gates.
//! Node refs are read with `try_get_untracked`, so a timer that fires after
//! its component unmounted does nothing.

use leptos::html;
use leptos::prelude::*;

use crate::core::DemoError;

/// Run `f` once after `ms` milliseconds
pub fn after(ms: u32, f: impl FnOnce() + 'static) {
    #[cfg(not(feature = "ssr"))]
    {
        use gloo_timers::future::TimeoutFuture;
        use wasm_bindgen_futures::spawn_local;

        spawn_local(async move {
            TimeoutFuture::new(ms).await;
            f();
        });
    }
    #[cfg(feature = "ssr")]
    {
        let _ = (ms, f);
    }
}

/// Smoothly scroll an element into view, aligned to the top or the bottom of the viewport
pub fn scroll_into_view(target: NodeRef<html::Div>, align_start: bool) {
    #[cfg(not(feature = "ssr"))]
    {
        use web_sys::{ScrollBehavior, ScrollIntoViewOptions, ScrollLogicalPosition};

        if let Some(el) = target.try_get_untracked().flatten() {
            let options = ScrollIntoViewOptions::new();
            options.set_behavior(ScrollBehavior::Smooth);
            options.set_block(if align_start {
                ScrollLogicalPosition::Start
            } else {
                ScrollLogicalPosition::End
            });
            el.scroll_into_view_with_scroll_into_view_options(&options);
        }
    }
    #[cfg(feature = "ssr")]
    {
        let _ = (target, align_start);
    }
}

pub fn focus_input(input: NodeRef<html::Input>) {
    #[cfg(not(feature = "ssr"))]
    {
        if let Some(el) = input.try_get_untracked().flatten() {
            let _ = el.focus();
        }
    }
    #[cfg(feature = "ssr")]
    {
        let _ = input;
    }
}

pub fn focus_textarea(textarea: NodeRef<html::Textarea>) {
    #[cfg(not(feature = "ssr"))]
    {
        if let Some(el) = textarea.try_get_untracked().flatten() {
            let _ = el.focus();
        }
    }
    #[cfg(feature = "ssr")]
    {
        let _ = textarea;
    }
}

/// Grow a textarea to fit its content, capped at `max_px`
pub fn autoresize(textarea: NodeRef<html::Textarea>, max_px: i32) {
    #[cfg(not(feature = "ssr"))]
    {
        if let Some(el) = textarea.try_get_untracked().flatten() {
            let style = el.style();
            let _ = style.set_property("height", "auto");
            let height = el.scroll_height().min(max_px);
            let _ = style.set_property("height", &format!("{}px", height));
        }
    }
    #[cfg(feature = "ssr")]
    {
        let _ = (textarea, max_px);
    }
}

/// Shrink a textarea back to a single row after its content was cleared
pub fn reset_height(textarea: NodeRef<html::Textarea>) {
    #[cfg(not(feature = "ssr"))]
    {
        if let Some(el) = textarea.try_get_untracked().flatten() {
            let _ = el.style().set_property("height", "auto");
        }
    }
    #[cfg(feature = "ssr")]
    {
        let _ = textarea;
    }
}

/// Current vertical scroll offset of the window
pub fn scroll_y() -> f64 {
    #[cfg(not(feature = "ssr"))]
    {
        web_sys::window()
            .and_then(|w| w.scroll_y().ok())
            .unwrap_or(0.0)
    }
    #[cfg(feature = "ssr")]
    {
        0.0
    }
}

pub fn copy_to_clipboard(text: &str) {
    #[cfg(not(feature = "ssr"))]
    {
        if let Some(window) = web_sys::window() {
            let clipboard = window.navigator().clipboard();
            let _ = clipboard.write_text(text);
        }
    }
    #[cfg(feature = "ssr")]
    {
        let _ = text;
    }
}

pub fn alert(message: &str) {
    #[cfg(not(feature = "ssr"))]
    {
        if let Some(window) = web_sys::window() {
            let _ = window.alert_with_message(message);
        }
    }
    #[cfg(feature = "ssr")]
    {
        let _ = message;
    }
}

/// Offer `content` to the user as a file download
pub fn download_text(filename: &str, mime_type: &str, content: &str) -> Result<(), DemoError> {
    #[cfg(not(feature = "ssr"))]
    {
        use wasm_bindgen::{JsCast, JsValue};

        let fail = |what: &str| DemoError::ExportFailed(what.to_string());

        let blob_parts = js_sys::Array::new();
        blob_parts.push(&JsValue::from_str(content));

        let options = web_sys::BlobPropertyBag::new();
        options.set_type(mime_type);

        let blob = web_sys::Blob::new_with_str_sequence_and_options(&blob_parts, &options)
            .map_err(|_| fail("could not create blob"))?;
        let url = web_sys::Url::create_object_url_with_blob(&blob)
            .map_err(|_| fail("could not create object url"))?;
        let document = web_sys::window()
            .and_then(|w| w.document())
            .ok_or_else(|| fail("no document"))?;
        let link = document
            .create_element("a")
            .map_err(|_| fail("could not create link"))?;
        let _ = link.set_attribute("href", &url);
        let _ = link.set_attribute("download", filename);
        if let Some(link) = link.dyn_ref::<web_sys::HtmlElement>() {
            link.click();
        }
        let _ = web_sys::Url::revoke_object_url(&url);
        Ok(())
    }
    #[cfg(feature = "ssr")]
    {
        let _ = (filename, mime_type, content);
        Ok(())
    }
}
