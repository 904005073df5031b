//! The introspected binary record.

use serde::Serialize;
use std::path::PathBuf;

/// Version reported for binaries built from a local checkout or file.
pub const DEVEL_VERSION: &str = "(devel)";

/// Package path reported for binaries built with `go build <file>.go`.
pub const COMMAND_LINE_ARGUMENTS: &str = "command-line-arguments";

/// A Go binary found in the install directory.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct GoBinary {
    /// File name inside the install directory.
    pub name: String,
    /// Filesystem path to this binary.
    pub path: PathBuf,
    /// The `mod` path from `go version -m`. Empty when the binary has no
    /// module context.
    pub module_path: String,
    /// The `path` from `go version -m`: the package the binary was built from.
    pub package_path: String,
    /// Installed module version, or [`DEVEL_VERSION`].
    pub version: String,
    /// Latest version known to the module proxy. `None` when the lookup was
    /// skipped.
    pub latest_version: Option<String>,
    /// Build tags the binary was compiled with, in their original order.
    pub build_tags: Vec<String>,
}

impl GoBinary {
    pub fn upgrade_possible(&self) -> bool {
        self.latest_version.as_deref() != Some(self.version.as_str())
    }

    /// Built from a local checkout or file, so there is no released version
    /// to reinstall. A `command-line-arguments` package counts even when the
    /// module line carries a real version.
    pub fn built_from_source(&self) -> bool {
        self.version == DEVEL_VERSION || self.built_with_go_build()
    }

    /// Built from a single file with `go build`; the package path is unknown.
    pub fn built_with_go_build(&self) -> bool {
        self.package_path == COMMAND_LINE_ARGUMENTS
    }
}
