//! Percent-encoding for URL query values.
//!
//! Movie titles travel inside query strings (`?name=...`, `?q=...`), so
//! reserved characters like `&`, `#`, and `?` must not reach the URL raw —
//! an unescaped `&` would split the parameter. Encodes everything outside
//! the RFC 3986 unreserved set, matching `encodeURIComponent` for the
//! characters that matter here.

#[cfg(test)]
#[path = "urlenc_test.rs"]
mod urlenc_test;

const HEX: &[u8; 16] = b"0123456789ABCDEF";

/// Percent-encode a string for use as a URL query value.
pub fn encode(value: &str) -> String {
    let mut out = String::with_capacity(value.len());
    for byte in value.bytes() {
        match byte {
            b'A'..=b'Z' | b'a'..=b'z' | b'0'..=b'9' | b'-' | b'_' | b'.' | b'~' => {
                out.push(byte as char);
            }
            _ => {
                out.push('%');
                out.push(HEX[usize::from(byte >> 4)] as char);
                out.push(HEX[usize::from(byte & 0x0f)] as char);
            }
        }
    }
    out
}
