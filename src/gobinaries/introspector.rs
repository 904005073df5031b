//! Introspection of a single binary.

use std::path::{Path, PathBuf};

use super::binary::{GoBinary, COMMAND_LINE_ARGUMENTS};
use super::module_info::{parse_module_info, ModuleInfo};
use crate::error::{Result, UpdateError};
use crate::gocli::{GoCli, GoCmdRunner};

/// Reads build metadata and the latest available version for binaries in
/// one install directory.
#[derive(Clone, Copy)]
pub struct Introspector<'a> {
    cli: GoCli<'a>,
    gobin: &'a Path,
}

impl<'a> Introspector<'a> {
    pub fn new(runner: &'a dyn GoCmdRunner, gobin: &'a Path) -> Self {
        Self {
            cli: GoCli::new(runner),
            gobin,
        }
    }

    /// Introspect the binary named `binary_name` in the install directory.
    pub fn introspect(&self, binary_name: &str) -> Result<GoBinary> {
        let binary_path = self.gobin.join(binary_name);
        let info = self.module_info(&binary_path)?;

        let latest_version = if should_look_up_latest(&info) {
            let version = self
                .cli
                .latest_version(&info.module_path)
                .map_err(|source| UpdateError::LatestVersion {
                    module: info.module_path.clone(),
                    source: Box::new(source),
                })?;
            Some(version)
        } else {
            None
        };

        let binary = GoBinary {
            name: binary_name.to_string(),
            path: binary_path,
            module_path: info.module_path,
            package_path: info.package_path,
            version: info.version,
            latest_version,
            build_tags: info.build_tags,
        };
        tracing::debug!(binary = %binary_name, record = ?binary, "introspected binary");

        Ok(binary)
    }

    fn module_info(&self, binary_path: &Path) -> Result<ModuleInfo> {
        let output =
            self.cli
                .module_info(binary_path)
                .map_err(|source| UpdateError::ModuleInfo {
                    path: PathBuf::from(binary_path),
                    source: Box::new(source),
                })?;

        parse_module_info(&output).ok_or_else(|| UpdateError::UnparseableModuleInfo {
            path: PathBuf::from(binary_path),
        })
    }
}

/// Binaries built from a file have no module to ask the proxy about; the
/// lookup would only produce a malformed-module-path error.
fn should_look_up_latest(info: &ModuleInfo) -> bool {
    info.package_path != COMMAND_LINE_ARGUMENTS && !info.module_path.is_empty()
}
