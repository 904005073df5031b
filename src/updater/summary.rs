//! The introspection report: an aligned table or a JSON inventory.

use serde::Serialize;
use std::io::Write;
use std::path::Path;

use crate::error::Result;
use crate::gobinaries::{GoBinary, IntrospectionResult};
use crate::ui::{Table, Theme};

const HEADERS: [&str; 3] = ["Binary", "Current version", "Status"];

/// Write introspection errors, then one table row per introspected binary.
///
/// In verbose mode the first column shows package paths instead of names.
pub fn print_summary(
    results: &[IntrospectionResult],
    out: &mut dyn Write,
    theme: &Theme,
    verbose: bool,
) -> Result<()> {
    let mut table = Table::new(HEADERS.to_vec());

    for result in results {
        match &result.result {
            Err(e) => writeln!(out, "{}", e.chain_message())?,
            Ok(binary) => {
                let name = if verbose {
                    binary.package_path.clone()
                } else {
                    binary.name.clone()
                };
                table.add_row(vec![name, binary.version.clone(), status_cell(binary, theme)]);
            }
        }
    }

    write!(out, "{}", table.render())?;
    Ok(())
}

/// The status column for one binary.
pub fn status_cell(binary: &GoBinary, theme: &Theme) -> String {
    match &binary.latest_version {
        Some(latest) if binary.upgrade_possible() => {
            format!("can upgrade to {}", theme.latest_version(latest))
        }
        Some(_) => "up-to-date".to_string(),
        None => theme.warning("cannot upgrade"),
    }
}

/// One binary in the JSON inventory.
#[derive(Debug, Serialize)]
pub struct InventoryEntry<'a> {
    pub name: &'a str,
    pub path: Option<&'a Path>,
    pub module_path: Option<&'a str>,
    pub package_path: Option<&'a str>,
    pub version: Option<&'a str>,
    pub latest_version: Option<&'a str>,
    pub build_tags: &'a [String],
    pub upgrade_possible: bool,
    pub built_from_source: bool,
    pub error: Option<String>,
}

impl<'a> InventoryEntry<'a> {
    pub fn from_result(result: &'a IntrospectionResult) -> Self {
        match &result.result {
            Ok(binary) => Self {
                name: &binary.name,
                path: Some(&binary.path),
                module_path: Some(&binary.module_path),
                package_path: Some(&binary.package_path),
                version: Some(&binary.version),
                latest_version: binary.latest_version.as_deref(),
                build_tags: &binary.build_tags,
                upgrade_possible: binary.upgrade_possible(),
                built_from_source: binary.built_from_source(),
                error: None,
            },
            Err(e) => Self {
                name: &result.binary_name,
                path: None,
                module_path: None,
                package_path: None,
                version: None,
                latest_version: None,
                build_tags: &[],
                upgrade_possible: false,
                built_from_source: false,
                error: Some(e.chain_message()),
            },
        }
    }
}

/// Write the inventory as a pretty-printed JSON array, one entry per result.
pub fn print_json_inventory(results: &[IntrospectionResult], out: &mut dyn Write) -> Result<()> {
    let entries: Vec<InventoryEntry<'_>> = results.iter().map(InventoryEntry::from_result).collect();
    let json = serde_json::to_string_pretty(&entries).map_err(anyhow::Error::from)?;
    writeln!(out, "{}", json)?;
    Ok(())
}
