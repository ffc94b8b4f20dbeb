//! Clipboard access for the contact email copy affordance.

use arboard::Clipboard;

/// Handler for clipboard operations.
///
/// Copying is fire-and-forget: failures are logged and swallowed, never
/// surfaced to the submission lifecycle. The caller only learns whether
/// the copied indicator should be shown.
pub struct ClipboardHandler {
    clipboard: Clipboard,
}

impl ClipboardHandler {
    pub fn new() -> Result<Self, arboard::Error> {
        let clipboard = Clipboard::new()?;
        Ok(Self { clipboard })
    }

    /// Write text to the system clipboard. Returns true on success.
    pub fn copy(&mut self, text: &str) -> bool {
        match self.clipboard.set_text(text.to_string()) {
            Ok(()) => true,
            Err(err) => {
                tracing::warn!(%err, "clipboard write failed");
                false
            }
        }
    }
}
