//! Command implementations.

pub mod build;
pub mod config;
pub mod new;

use std::path::{Path, PathBuf};

use icsmith_core::Defaults;

use crate::cli::OutputOptions;
use crate::config::CliConfig;
use crate::error::CliResult;

/// Writes the document to its resolved destination, or to stdout.
pub(crate) fn write_document(
    document: &str,
    output: &OutputOptions,
    config: &CliConfig,
    defaults: &Defaults,
) -> CliResult<()> {
    if output.stdout {
        print!("{}", document);
        return Ok(());
    }

    let destination = resolve_destination(output.output.as_deref(), config, defaults);
    std::fs::write(&destination, document)?;
    println!("wrote {}", destination.display());
    Ok(())
}

/// Resolves the output path, always ending in `.ics`.
///
/// A missing path falls back to `<output_dir>/<filename>.ics`; a given
/// path keeps its directory and stem but has its extension replaced.
pub(crate) fn resolve_destination(
    output: Option<&Path>,
    config: &CliConfig,
    defaults: &Defaults,
) -> PathBuf {
    let base = match output {
        Some(path) => path.to_path_buf(),
        None => config
            .output_dir
            .clone()
            .unwrap_or_default()
            .join(&defaults.filename),
    };
    base.with_extension("ics")
}
