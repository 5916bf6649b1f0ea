//! srcview - annotated source-to-HTML page generator.
//!
//! Renders a plain-text source file into an HTML listing, wrapping the
//! byte ranges described by an annotation-interval JSON file in nested
//! markup and styling each line from optional overlay sidecars.

mod exit_codes;

use clap::{Args, Parser, Subcommand};
use exit_codes::ExitCode;
use std::collections::BTreeSet;
use std::fs;
use std::path::PathBuf;
use sv_render::{parse_tags, Generator, GeneratorConfig, Tag};
use tracing::{debug, error, info};
use tracing_subscriber::EnvFilter;

/// srcview - render annotated source files as HTML pages
#[derive(Parser)]
#[command(name = "srcview")]
#[command(author, version, about, long_about = None)]
#[command(propagate_version = true)]
struct Cli {
    #[command(subcommand)]
    command: Commands,

    #[command(flatten)]
    global: GlobalOpts,
}

/// Global options available to all commands
#[derive(Args, Debug)]
struct GlobalOpts {
    /// Increase verbosity (-v, -vv)
    #[arg(short, long, global = true, action = clap::ArgAction::Count)]
    verbose: u8,

    /// Errors only (quiet mode)
    #[arg(short, long, global = true)]
    quiet: bool,
}

#[derive(Subcommand)]
enum Commands {
    /// Render one source file into the HTML output tree
    Generate(GenerateArgs),
}

#[derive(Args, Debug)]
struct GenerateArgs {
    /// Source file to render
    source: PathBuf,

    /// Annotation intervals as a JSON list, sorted by position.
    /// Defaults to <SOURCE>.annotations.json when present.
    #[arg(long)]
    annotations: Option<PathBuf>,

    /// Logical path used for the title, breadcrumb and output placement.
    /// Defaults to the source path as given.
    #[arg(long)]
    path: Option<String>,

    /// Directory the .html tree is written under
    #[arg(short = 'o', long, default_value = ".", env = "SRCVIEW_OUTPUT_ROOT")]
    output_root: PathBuf,

    /// Location of shared page assets (stylesheets, scripts)
    #[arg(long, default_value = "../data", env = "SRCVIEW_DATA_PATH")]
    data_path: String,

    /// Directory searched for .common/.coverage sidecars
    #[arg(long)]
    sidecar_dir: Option<PathBuf>,

    /// Footer fragment embedded verbatim at the bottom of the page
    #[arg(long, default_value = "")]
    footer: String,

    /// Warning paragraph shown above and below the code table
    #[arg(long)]
    warning: Option<String>,

    /// Project name=revision pair for the page script block (repeatable)
    #[arg(long = "project", value_name = "NAME=REV")]
    projects: Vec<String>,

    /// Interesting definition identifier for the head meta tag (repeatable)
    #[arg(long = "interesting", value_name = "IDENT")]
    interesting: Vec<String>,
}

fn main() {
    let cli = Cli::parse();
    init_logging(&cli.global);

    let code = match &cli.command {
        Commands::Generate(args) => run_generate(args),
    };
    code.exit();
}

/// Map -v/-q onto an env-filter default; SRCVIEW_LOG overrides both.
fn init_logging(global: &GlobalOpts) {
    let default_filter = if global.quiet {
        "error"
    } else {
        match global.verbose {
            0 => "info",
            1 => "debug",
            _ => "trace",
        }
    };
    let filter = EnvFilter::try_from_env("SRCVIEW_LOG")
        .unwrap_or_else(|_| EnvFilter::new(default_filter));

    // stdout carries the generated page path; all logs go to stderr.
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();
}

fn run_generate(args: &GenerateArgs) -> ExitCode {
    let source = match fs::read(&args.source) {
        Ok(bytes) => bytes,
        Err(e) => {
            error!(path = %args.source.display(), error = %e, "cannot read source file");
            return ExitCode::InputError;
        }
    };

    let tags = match load_annotations(args) {
        Ok(tags) => tags,
        Err(code) => return code,
    };

    let mut generator_config = GeneratorConfig::new()
        .with_output_root(&args.output_root)
        .with_data_path(&args.data_path);
    if let Some(dir) = &args.sidecar_dir {
        generator_config = generator_config.with_sidecar_dir(dir);
    }
    if let Some(warning) = &args.warning {
        generator_config = generator_config.with_warning(warning);
    }

    let mut generator = Generator::new(generator_config);
    for pair in &args.projects {
        match pair.split_once('=') {
            Some((name, revision)) => {
                generator = generator.with_project(name, revision);
            }
            None => {
                error!(value = %pair, "--project expects NAME=REV");
                return ExitCode::ArgsError;
            }
        }
    }

    let logical_path = args
        .path
        .clone()
        .unwrap_or_else(|| args.source.to_string_lossy().replace('\\', "/"));
    let interesting: BTreeSet<String> = args.interesting.iter().cloned().collect();

    match generator.generate(&logical_path, &source, &tags, &args.footer, &interesting) {
        Ok(path) => {
            info!(lines = source.iter().filter(|&&b| b == b'\n').count() + 1, "done");
            println!("{}", path.display());
            ExitCode::Ok
        }
        Err(e) => {
            error!(error = %e, "generation failed");
            ExitCode::OutputError
        }
    }
}

/// Read the annotation list. An explicitly named file must exist; the
/// default sidecar is optional and its absence means "no intervals".
fn load_annotations(args: &GenerateArgs) -> Result<Vec<Tag>, ExitCode> {
    let (path, required) = match &args.annotations {
        Some(path) => (path.clone(), true),
        None => {
            let mut name = args.source.as_os_str().to_owned();
            name.push(".annotations.json");
            (PathBuf::from(name), false)
        }
    };

    let text = match fs::read_to_string(&path) {
        Ok(text) => text,
        Err(e) if required => {
            error!(path = %path.display(), error = %e, "cannot read annotations");
            return Err(ExitCode::InputError);
        }
        Err(_) => {
            debug!(path = %path.display(), "no annotation sidecar, rendering plain");
            return Ok(Vec::new());
        }
    };

    match parse_tags(&text) {
        Ok(tags) => {
            debug!(path = %path.display(), intervals = tags.len(), "annotations loaded");
            Ok(tags)
        }
        Err(e) => {
            error!(path = %path.display(), error = %e, "cannot decode annotations");
            Err(ExitCode::InputError)
        }
    }
}
