//! Outbound navigation to external profile links.

/// Open a URL with the system handler, detached from this process.
///
/// Fire-and-forget: there is no contract beyond "open in a new context",
/// so failures are logged and ignored.
pub fn open_external(url: &str) {
    if let Err(err) = open::that_detached(url) {
        tracing::warn!(%err, url, "failed to open external link");
    }
}
