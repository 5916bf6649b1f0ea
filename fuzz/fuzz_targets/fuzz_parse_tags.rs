//! Fuzz target for annotation-list decoding.
//!
//! Annotation sidecars come from external producers; decoding must
//! return an error on garbage rather than panic.

#![no_main]

use libfuzzer_sys::fuzz_target;
use sv_render::parse_tags;

fuzz_target!(|data: &[u8]| {
    if let Ok(text) = std::str::from_utf8(data) {
        let _ = parse_tags(text);
    }
});
