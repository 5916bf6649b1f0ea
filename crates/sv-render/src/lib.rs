//! Streaming HTML renderer for annotated source listings.
//!
//! Renders one plain-text source file into an HTML page in which an
//! externally supplied list of annotation intervals (highlight spans,
//! definition hyperlinks, anchors) is wrapped in nested markup, one table
//! row per source line, with per-line background classification loaded
//! from optional sidecar files.
//!
//! # Features
//!
//! - **Single-pass rendering**: one forward sweep over the source bytes;
//!   memory use is bounded by the open-interval stack, not the file size
//! - **Cross-line intervals**: markup is closed at every line boundary
//!   and reopened on the next row in the same nesting order
//! - **Line overlays**: `.common` / `.coverage` sidecars tint rows and
//!   line-number cells; absent sidecars are simply empty sets
//! - **Deep-linkable rows**: each line number doubles as an `id`
//!   attribute for fragment navigation
//!
//! # Example
//!
//! ```no_run
//! use sv_render::{Generator, GeneratorConfig, Tag};
//! use std::collections::BTreeSet;
//!
//! let config = GeneratorConfig::new().with_output_root("out");
//! let generator = Generator::new(config);
//! let tags = vec![Tag::new(4, 3, "span").with_attributes("class=\"kw\"")];
//! generator
//!     .generate("demo/main.c", b"int foo;\n", &tags, "", &BTreeSet::new())
//!     .unwrap();
//! ```

pub mod config;
pub mod error;
pub mod escape;
pub mod generator;
pub mod overlay;
pub mod page;
pub mod render;
pub mod tag;

pub use config::GeneratorConfig;
pub use error::{RenderError, Result};
pub use generator::Generator;
pub use overlay::LineOverlays;
pub use render::render_table;
pub use tag::{parse_tags, Tag};
