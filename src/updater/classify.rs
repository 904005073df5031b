//! Deciding what to do with each introspected binary.

use crate::gobinaries::{GoBinary, IntrospectionResult};
use crate::ui::Theme;

use super::problems::BUILT_FROM_SOURCE;

/// Placeholder shown instead of the package path of `go build` binaries.
const UNKNOWN_REPOSITORY_PATH: &str = "repositoryPath";

/// What the updater does with one binary.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Classification {
    /// Introspection failed; reported and otherwise ignored.
    Unintrospectable,
    /// Installed version is the latest and no reinstall was forced.
    UpToDate,
    /// No released version to reinstall from. Skipped even when forced.
    BuiltFromSource,
    /// Queued for `go install`.
    Reinstall,
}

/// Classify one introspection result.
pub fn classify(result: &IntrospectionResult, force_reinstall: bool) -> Classification {
    let Some(binary) = result.binary() else {
        return Classification::Unintrospectable;
    };

    let classification = if !binary.upgrade_possible() && !force_reinstall {
        Classification::UpToDate
    } else if binary.built_from_source() {
        Classification::BuiltFromSource
    } else {
        Classification::Reinstall
    };

    tracing::debug!(
        binary = %binary.name,
        ?classification,
        force_reinstall,
        "classified binary"
    );
    classification
}

/// Explanation printed for a binary skipped as [`Classification::BuiltFromSource`].
///
/// Ends with the E001 known-problem block and a blank line.
pub fn render_source_built_skip(binary: &GoBinary, theme: &Theme) -> String {
    let verb = if binary.upgrade_possible() {
        "upgrading"
    } else {
        "reinstalling"
    };

    let (explanation, package_path) = if binary.built_with_go_build() {
        (
            format!(
                "The binary was built from source (probably using \"{}\") and the binary path is unknown.",
                theme.dim("go build")
            ),
            UNKNOWN_REPOSITORY_PATH,
        )
    } else {
        (
            format!(
                "The binary was installed from source (probably using \"{}\" in the cloned repository).",
                theme.dim("go install")
            ),
            binary.package_path.as_str(),
        )
    };

    let install_hint = theme.dim(&format!("go install {}@latest", package_path));

    format!(
        "Skipping {} {}\n    {}\n    Install the binary using \"{}\" instead.\n{}\n\n",
        verb,
        theme.binary_name(&binary.name),
        explanation,
        install_hint,
        BUILT_FROM_SOURCE.render(theme)
    )
}
