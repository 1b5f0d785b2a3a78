//! Sanitization of error messages before they reach standard output.
//!
//! Every caught error passes through [`sanitize`]. The check is a plain
//! substring denylist: any hex-looking fragment or any secret-bearing flag
//! name causes the whole message to be replaced.

/// Substrings that mark a message as possibly carrying secret material.
pub const SENSITIVE_MARKERS: [&str; 5] = [
    "0x",
    "--private-key",
    "--api-key",
    "--api-secret",
    "--api-passphrase",
];

/// Return `message` unchanged, or `"<kind>: signing failed"` when it
/// contains any of [`SENSITIVE_MARKERS`].
pub fn sanitize(kind: &str, message: &str) -> String {
    if SENSITIVE_MARKERS
        .iter()
        .any(|marker| message.contains(marker))
    {
        format!("{}: signing failed", kind)
    } else {
        message.to_string()
    }
}
