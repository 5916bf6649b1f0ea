//! Reserved-character escaping.
//!
//! Two HTML variants cover the two call sites: one writes straight into
//! the output sink, the other fills a caller-owned scratch buffer and
//! returns a view into it, for values that get composed into a larger
//! string before emission. A third variant sanitizes identifiers that
//! become file names.

use std::io::{self, Write};

/// Escape `s` into the output sink, replacing `<`, `>`, `&`, `"` and `'`
/// with their named character references. Every other byte passes through
/// unchanged.
pub fn escape_html<W: Write>(out: &mut W, s: &str) -> io::Result<()> {
    for b in s.bytes() {
        match b {
            b'<' => out.write_all(b"&lt;")?,
            b'>' => out.write_all(b"&gt;")?,
            b'&' => out.write_all(b"&amp;")?,
            b'"' => out.write_all(b"&quot;")?,
            b'\'' => out.write_all(b"&apos;")?,
            _ => out.write_all(&[b])?,
        }
    }
    Ok(())
}

/// Escape `s` into `buf` and return a view of the escaped text.
///
/// The buffer is cleared first, so a single buffer can be reused across
/// many calls without reallocating.
pub fn escape_html_buf<'a>(s: &str, buf: &'a mut String) -> &'a str {
    buf.clear();
    for c in s.chars() {
        match c {
            '<' => buf.push_str("&lt;"),
            '>' => buf.push_str("&gt;"),
            '&' => buf.push_str("&amp;"),
            '"' => buf.push_str("&quot;"),
            '\'' => buf.push_str("&apos;"),
            _ => buf.push(c),
        }
    }
    buf.as_str()
}

// ATTENTION: keep in sync with the filename mangling used by hyperlink
// producers; both sides must map an identifier to the same file name.
/// Sanitize an identifier for use in a generated file name: `:` becomes
/// `.`, everything else passes through unchanged.
pub fn escape_filename<'a>(s: &str, buf: &'a mut String) -> &'a str {
    buf.clear();
    for c in s.chars() {
        if c == ':' {
            buf.push('.');
        } else {
            buf.push(c);
        }
    }
    buf.as_str()
}
