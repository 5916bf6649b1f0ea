//! File-level generation: output placement and the render pipeline.

use crate::config::GeneratorConfig;
use crate::error::{RenderError, Result};
use crate::overlay::LineOverlays;
use crate::page;
use crate::render::render_table;
use crate::tag::Tag;

use std::collections::{BTreeMap, BTreeSet};
use std::fs::{self, File};
use std::io::{BufWriter, Write};
use std::path::{Path, PathBuf};
use tracing::{debug, error, info};

/// Renders one source file at a time into the output tree.
///
/// Holds only configuration; every render owns its own cursor, stack and
/// sink, so independent `Generator`s (or repeated calls on one) can run
/// concurrently over different files.
pub struct Generator {
    config: GeneratorConfig,
    projects: BTreeMap<String, String>,
}

impl Generator {
    /// Create a generator with the given configuration.
    pub fn new(config: GeneratorConfig) -> Self {
        Self {
            config,
            projects: BTreeMap::new(),
        }
    }

    /// Create a generator with default configuration.
    pub fn default_config() -> Self {
        Self::new(GeneratorConfig::default())
    }

    /// Get the current configuration.
    pub fn config(&self) -> &GeneratorConfig {
        &self.config
    }

    /// Register a project name/revision pair for the page script block.
    pub fn with_project(mut self, name: impl Into<String>, revision: impl Into<String>) -> Self {
        self.projects.insert(name.into(), revision.into());
        self
    }

    /// Render `source` under its logical `filename` and write the page to
    /// `<output_root>/<filename>.html`, creating parent directories as
    /// needed. Returns the path of the written page.
    ///
    /// `tags` must be sorted by position and well nested. The footer
    /// fragment is embedded verbatim.
    pub fn generate(
        &self,
        filename: &str,
        source: &[u8],
        tags: &[Tag],
        footer: &str,
        interesting_definitions: &BTreeSet<String>,
    ) -> Result<PathBuf> {
        let out_path = self.config.output_root.join(format!("{filename}.html"));
        debug!(path = %out_path.display(), "generating source page");

        if let Some(parent) = out_path.parent() {
            fs::create_dir_all(parent).map_err(|e| output_error(&out_path, e))?;
        }
        let file = File::create(&out_path).map_err(|e| output_error(&out_path, e))?;
        let mut out = BufWriter::new(file);

        let overlays = self.load_overlays(filename);
        let warning = self.config.warning.as_deref();

        page::write_header(
            &mut out,
            filename,
            &self.config.data_path,
            warning,
            interesting_definitions,
            &self.projects,
        )
        .map_err(|e| output_error(&out_path, e))?;
        render_table(&mut out, source, tags, &overlays)
            .map_err(|e| output_error(&out_path, e))?;
        page::write_footer(&mut out, footer, warning).map_err(|e| output_error(&out_path, e))?;
        out.flush().map_err(|e| output_error(&out_path, e))?;

        info!(
            path = %out_path.display(),
            bytes = source.len(),
            intervals = tags.len(),
            "source page generated"
        );
        Ok(out_path)
    }

    /// Sidecars are keyed by the bare file name, looked up in the
    /// configured sidecar directory (working directory by default).
    fn load_overlays(&self, filename: &str) -> LineOverlays {
        let basename = filename
            .rsplit(['/', '\\'])
            .next()
            .unwrap_or(filename);
        let dir = self
            .config
            .sidecar_dir
            .as_deref()
            .unwrap_or(Path::new("."));
        LineOverlays::load(dir, basename)
    }
}

/// Report a failed write with its destination; the render is abandoned
/// and any partially written bytes stay on disk.
fn output_error(path: &Path, source: std::io::Error) -> RenderError {
    error!(path = %path.display(), error = %source, "cannot write output file");
    RenderError::Output {
        path: path.to_path_buf(),
        source,
    }
}
