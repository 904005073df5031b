//! Parsing of `go version -m` output.
//!
//! Only three line kinds matter:
//!
//! ```text
//!         path    mvdan.cc/sh/v3/cmd/shfmt
//!         mod     mvdan.cc/sh/v3  v3.4.2  h1:d3TKODXfZ1bjWU/StENN+GDg5xOzNu5+C8AEu405E5U=
//!         build   -tags=a,b,c
//! ```
//!
//! Newer go releases omit the `mod` line for binaries installed from a local
//! checkout, while older ones print it with a `(devel)` version. Both are
//! normalized to the same [`ModuleInfo`].

use regex::Regex;
use std::sync::LazyLock;

use super::binary::DEVEL_VERSION;

static RE_MODULE_INFO_LINE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^\s*(path|mod|build)\s+(\S+)(?:\s+(\S+))?").unwrap());

const TAGS_PREFIX: &str = "-tags=";

/// Build provenance extracted from a binary.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct ModuleInfo {
    pub module_path: String,
    pub package_path: String,
    pub version: String,
    pub build_tags: Vec<String>,
}

/// Parse `go version -m` output.
///
/// Returns `None` when there is no `path` line.
pub fn parse_module_info(output: &str) -> Option<ModuleInfo> {
    let mut info = ModuleInfo::default();
    let mut matched_path = false;
    let mut matched_mod = false;
    let mut matched_tags = false;

    for line in output.lines() {
        let Some(caps) = RE_MODULE_INFO_LINE.captures(line) else {
            continue;
        };
        let field = caps.get(2).map_or("", |m| m.as_str());

        match &caps[1] {
            "path" => {
                info.package_path = field.to_string();
                matched_path = true;
            }
            "mod" => {
                info.module_path = field.to_string();
                info.version = caps
                    .get(3)
                    .map_or(DEVEL_VERSION, |m| m.as_str())
                    .to_string();
                matched_mod = true;
            }
            "build" => {
                // Other build settings (-compiler, CGO_ENABLED, ...) share the keyword.
                if let Some(tags) = field.strip_prefix(TAGS_PREFIX) {
                    if !matched_tags {
                        info.build_tags = split_tags(tags);
                        matched_tags = true;
                    }
                }
            }
            other => unreachable!("module info regex matched unknown keyword {other:?}"),
        }
    }

    if !matched_path {
        return None;
    }

    if !matched_mod {
        info.module_path.clear();
        info.version = DEVEL_VERSION.to_string();
    }

    Some(info)
}

fn split_tags(tags: &str) -> Vec<String> {
    tags.split(',')
        .filter(|t| !t.is_empty())
        .map(str::to_string)
        .collect()
}
