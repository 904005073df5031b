//! The update run: introspect, report, then reinstall what needs it.
//!
//! [`update_binaries`] is the single entry point. It never touches the
//! terminal directly; everything human-readable goes to the `out` writer so
//! the same run can be captured in tests.

pub mod classify;
pub mod problems;
pub mod reinstall;
pub mod summary;

pub use classify::{classify, render_source_built_skip, Classification};
pub use problems::{find_common_problems, CommonProblem, BUILT_FROM_SOURCE, COMMON_PROBLEMS};
pub use reinstall::{reinstall_binaries, ReinstallOutcome};
pub use summary::{print_json_inventory, print_summary, status_cell, InventoryEntry};

use std::io::Write;
use std::path::PathBuf;

use crate::error::{Result, UpdateError};
use crate::gobinaries::{
    introspect_binaries_with_progress, DirectoryLister, GoBinary, IntrospectionResult,
    Introspector,
};
use crate::gocli::{GoCli, GoCmdRunner};
use crate::ui::{introspection_spinner, Theme};

/// What to update and how.
#[derive(Debug, Clone, Default)]
pub struct Options {
    /// Install directory holding the binaries.
    pub gobin: PathBuf,
    /// Names to update. Empty means every entry in `gobin`.
    pub binaries: Vec<String>,
    /// Reinstall binaries that are already up to date.
    pub force_reinstall: bool,
    /// Report only; never run `go install`.
    pub dry_run: bool,
    /// Show package paths and echo install output.
    pub verbose: bool,
    /// Print the inventory as JSON instead of the table. Implies `dry_run`.
    pub json: bool,
    /// Show a spinner on stderr while introspecting.
    pub show_progress: bool,
}

/// Introspect the selected binaries, print the report, and reinstall every
/// candidate unless this is a dry run.
///
/// Introspection failures are reported and skipped. Returns
/// [`UpdateError::InstallFailed`] when at least one reinstall failed.
pub fn update_binaries(
    options: &Options,
    out: &mut dyn Write,
    theme: &Theme,
    runner: &dyn GoCmdRunner,
    lister: &dyn DirectoryLister,
) -> Result<()> {
    tracing::debug!(gobin = %options.gobin.display(), "using install directory");

    let binary_names = resolve_binary_names(&options.binaries, lister, &options.gobin)?;
    let introspector = Introspector::new(runner, &options.gobin);

    let spinner = introspection_spinner(binary_names.len(), options.show_progress && !options.json);
    let results = introspect_binaries_with_progress(&introspector, &binary_names, &spinner);
    spinner.finish_and_clear();

    if options.json {
        return print_json_inventory(&results, out);
    }

    print_summary(&results, out, theme, options.verbose)?;

    if options.dry_run {
        return Ok(());
    }

    writeln!(out)?;
    let candidates = select_candidates(&results, options.force_reinstall, out, theme)?;
    if candidates.is_empty() {
        return Ok(());
    }

    reinstall_binaries(
        &candidates,
        &GoCli::new(runner),
        out,
        theme,
        options.verbose,
    )?;
    Ok(())
}

/// Binary names to consider: the explicit list, or every entry in `gobin`.
pub fn resolve_binary_names(
    requested: &[String],
    lister: &dyn DirectoryLister,
    gobin: &std::path::Path,
) -> Result<Vec<String>> {
    if !requested.is_empty() {
        return Ok(requested.to_vec());
    }

    lister
        .list_directory_entries(gobin)
        .map_err(|source| UpdateError::ListDirectory {
            path: gobin.to_path_buf(),
            source,
        })
}

/// Message for an error that ends the run. The failed-install count is
/// highlighted.
pub fn render_error(err: &UpdateError, theme: &Theme) -> String {
    match err {
        UpdateError::InstallFailed { count } => format!(
            "could not install {} package(s)",
            theme.error(&count.to_string())
        ),
        other => other.chain_message(),
    }
}

/// Reinstall candidates in report order. Prints the skip explanation for
/// each source-built binary on the way.
fn select_candidates<'r>(
    results: &'r [IntrospectionResult],
    force_reinstall: bool,
    out: &mut dyn Write,
    theme: &Theme,
) -> Result<Vec<&'r GoBinary>> {
    let mut candidates = Vec::new();

    for result in results {
        let Some(binary) = result.binary() else {
            continue;
        };
        match classify(result, force_reinstall) {
            Classification::Reinstall => candidates.push(binary),
            Classification::BuiltFromSource => {
                write!(out, "{}", render_source_built_skip(binary, theme))?
            }
            Classification::Unintrospectable | Classification::UpToDate => {}
        }
    }

    Ok(candidates)
}
