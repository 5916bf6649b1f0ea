//! Streaming line-table renderer.
//!
//! Walks the source buffer once, left to right, and emits one table row
//! per source line. Annotation intervals may cross line boundaries and
//! nest; every opened element is closed before the row ends and reopened,
//! in the same nesting order, on the next row. Memory use is bounded by
//! the open-interval stack plus the current unflushed byte run.

use crate::overlay::LineOverlays;
use crate::tag::Tag;
use std::io::{self, Write};

/// Emit the opening markup of one table row.
fn open_row<W: Write>(out: &mut W, overlays: &LineOverlays, line: u32) -> io::Result<()> {
    write!(
        out,
        "<tr {} ><th {} id=\"{line}\">{line}</th><td>",
        overlays.row_style(line),
        overlays.line_number_style(line)
    )
}

/// Write out the raw run `[buffer_start, c)` and advance the run start.
/// The run never contains reserved characters; those are flushed around
/// and emitted as references individually.
fn flush<W: Write>(out: &mut W, source: &[u8], buffer_start: &mut usize, c: usize) -> io::Result<()> {
    if *buffer_start != c {
        out.write_all(&source[*buffer_start..c])?;
    }
    *buffer_start = c;
    Ok(())
}

/// Render `source` as an HTML table, wrapping the byte ranges described
/// by `tags` in markup and styling each row from `overlays`.
///
/// `tags` must be sorted by position and well nested; intervals that
/// cross each other produce undefined markup (but never a panic or an
/// out-of-bounds access). Zero-length intervals open and close in place.
pub fn render_table<W: Write>(
    out: &mut W,
    source: &[u8],
    tags: &[Tag],
    overlays: &LineOverlays,
) -> io::Result<()> {
    out.write_all(b"<table class=\"code\">\n")?;

    let end = source.len();
    let mut c = 0usize;
    let mut line = 1u32;
    let mut buffer_start = 0usize;

    // Cursor into the not-yet-opened intervals, and the open stack as
    // indices into `tags`, innermost last.
    let mut cursor = 0usize;
    let mut stack: Vec<usize> = Vec::new();
    let mut next_start = tags.first().map_or(end, |t| t.position.min(end));
    let mut next_end = end;
    let mut next = next_start.min(next_end);

    open_row(out, overlays, line)?;

    loop {
        // `>=` rather than `==`: intervals that violate the sortedness
        // precondition can leave `next` behind `c`, and the walk must
        // still reach the end of the buffer.
        if c >= next {
            flush(out, source, &mut buffer_start, c)?;

            // Close every open interval that ends at or before here,
            // innermost first.
            while let Some(&top) = stack.last() {
                if c < next_end {
                    break;
                }
                stack.pop();
                tags[top].close(out)?;
                next_end = stack.last().map_or(end, |&i| tags[i].end().min(end));
            }

            if c >= end {
                break;
            }

            // Open everything that starts exactly here. Nested intervals
            // at the same offset shrink next_end as they are pushed.
            while let Some(tag) = tags.get(cursor) {
                if tag.position != c {
                    break;
                }
                tag.open(out)?;
                if tag.length > 0 {
                    stack.push(cursor);
                    next_end = tag.end().min(end);
                }
                cursor += 1;
            }
            next_start = tags.get(cursor).map_or(end, |t| t.position.min(end));
            next = next_end.min(next_start);
        }

        match source[c] {
            b'\n' => {
                flush(out, source, &mut buffer_start, c)?;
                buffer_start += 1; // skip the newline byte
                line += 1;
                // The stack survives the line break: only the markup is
                // closed here and reopened on the new row.
                for &i in stack.iter().rev() {
                    tags[i].close(out)?;
                }
                out.write_all(b"</td></tr>\n")?;
                open_row(out, overlays, line)?;
                for &i in stack.iter() {
                    tags[i].open(out)?;
                }
            }
            b'&' => {
                flush(out, source, &mut buffer_start, c)?;
                buffer_start += 1;
                out.write_all(b"&amp;")?;
            }
            b'<' => {
                flush(out, source, &mut buffer_start, c)?;
                buffer_start += 1;
                out.write_all(b"&lt;")?;
            }
            b'>' => {
                flush(out, source, &mut buffer_start, c)?;
                buffer_start += 1;
                out.write_all(b"&gt;")?;
            }
            _ => {}
        }
        c += 1;
    }

    out.write_all(b"</td></tr>\n</table>")?;
    Ok(())
}
