//! Literal placeholder substitution over byte buffers
//!
//! A pure function: no I/O, no templating control flow. Content classified
//! as binary passes through untouched so opaque assets are never corrupted
//! by a token that happens to appear in their bytes.

use std::borrow::Cow;

use crate::bindings::PlaceholderBindings;

/// Bytes examined when classifying content as text or binary
const PROBE_WINDOW: usize = 8 * 1024;

/// Apply every binding's literal find-and-replace-all to `content`.
///
/// Bindings fire in the order [`PlaceholderBindings`] guarantees: longest
/// token first, every occurrence replaced. Binary content is returned
/// unchanged.
#[must_use]
pub fn apply<'a>(bindings: &PlaceholderBindings, content: &'a [u8]) -> Cow<'a, [u8]> {
    if is_binary(content) {
        return Cow::Borrowed(content);
    }
    // The probe window can miss invalid bytes further in; treat a failed
    // full decode as binary too.
    let Ok(text) = std::str::from_utf8(content) else {
        return Cow::Borrowed(content);
    };

    let mut out = text.to_owned();
    for (token, value) in bindings.entries() {
        if out.contains(token.as_str()) {
            out = out.replace(token.as_str(), value);
        }
    }
    Cow::Owned(out.into_bytes())
}

/// Classify content: a NUL byte or an invalid UTF-8 sequence within the
/// probe window means binary.
#[must_use]
pub fn is_binary(content: &[u8]) -> bool {
    let window = &content[..content.len().min(PROBE_WINDOW)];
    if window.contains(&0) {
        return true;
    }
    match std::str::from_utf8(window) {
        Ok(_) => false,
        // A multi-byte character truncated by the window edge is not
        // evidence of binary content; a hard decode error is.
        Err(err) => err.error_len().is_some(),
    }
}
