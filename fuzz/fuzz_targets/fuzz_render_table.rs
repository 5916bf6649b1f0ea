//! Fuzz target for the streaming line renderer.
//!
//! Feeds arbitrary bytes through a plain render and checks the two
//! properties that must hold for any input: no panic, and one table row
//! per source line.

#![no_main]

use libfuzzer_sys::fuzz_target;
use sv_render::{render_table, LineOverlays};

fuzz_target!(|data: &[u8]| {
    let mut out = Vec::new();
    let overlays = LineOverlays::new();
    render_table(&mut out, data, &[], &overlays).expect("writing to a Vec cannot fail");

    // Content bytes are escaped, so `<tr ` can only come from row markup.
    let html = String::from_utf8_lossy(&out);
    let rows = html.matches("<tr ").count();
    let newlines = data.iter().filter(|&&b| b == b'\n').count();
    assert_eq!(rows, newlines + 1);
});
