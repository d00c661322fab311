use crate::clipboard::copy_to_clipboard;
use quicklist_domain::{share_link, share_message, ShareMethod, TodoList};
use std::io;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ShareResult {
    Opened(String),
    /// No handler could open the link; the message went to the clipboard.
    Copied,
}

/// Hands the list to the platform handler for `method`, falling back to the
/// clipboard when nothing can open the link.
pub fn share(method: ShareMethod, list: &TodoList) -> io::Result<ShareResult> {
    let link = share_link(method, list);
    match webbrowser::open(&link) {
        Ok(()) => {
            tracing::info!("Opened {} share link", method);
            Ok(ShareResult::Opened(link))
        }
        Err(e) => {
            tracing::warn!("Could not open {} share link: {}", method, e);
            copy_to_clipboard(&share_message(list))?;
            Ok(ShareResult::Copied)
        }
    }
}
