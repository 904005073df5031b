//! Known `go install` failure signatures.
//!
//! Installer output is matched against a small catalog of problems that are
//! documented in `TROUBLESHOOTING.md`. Matches are advisory only: they add a
//! pointer to the docs below the failed install and never change what the
//! updater does.

use regex::Regex;
use std::sync::LazyLock;

use crate::ui::Theme;

/// Where every known problem is documented.
pub const TROUBLESHOOTING_URL: &str =
    "https://github.com/Gelio/go-global-update/blob/main/TROUBLESHOOTING.md";

/// A documented problem with a stable code.
#[derive(Debug)]
pub struct CommonProblem {
    /// Short code, e.g. `E002`.
    pub code: &'static str,
    /// Heading anchor in the troubleshooting document, including `#`.
    pub anchor: &'static str,
    /// Installer output signature. `None` for problems detected without
    /// running the installer.
    detection: Option<&'static LazyLock<Regex>>,
}

impl CommonProblem {
    /// Link to this problem's section of the troubleshooting document.
    pub fn troubleshooting_url(&self) -> String {
        format!("{}{}", TROUBLESHOOTING_URL, self.anchor)
    }

    /// Whether the installer output shows this problem.
    pub fn occurs_in(&self, install_output: &str) -> bool {
        self.detection
            .is_some_and(|re| re.is_match(install_output))
    }

    /// The indented help block printed below a failure.
    pub fn render(&self, theme: &Theme) -> String {
        format!(
            "    This seems like a known problem {}.\n    See {}\n    for more information.",
            theme.highlight(self.code),
            theme.dim(&self.troubleshooting_url())
        )
    }
}

// --- Compiled regexes (one-time via LazyLock) ---

macro_rules! lazy_regex {
    ($name:ident, $pattern:expr) => {
        static $name: LazyLock<Regex> = LazyLock::new(|| Regex::new($pattern).unwrap());
    };
}

lazy_regex!(
    RE_MODULE_MISSING_PACKAGE,
    r"module .*? found .*?, but does not contain package .*"
);
lazy_regex!(
    RE_MODULE_PATH_MISMATCH,
    r"(?s)module declares its path as: .*?\n\s+but was required as: .*"
);
lazy_regex!(
    RE_REPLACE_DIRECTIVES,
    r"(?s)The go.mod file .*? contains .*? replace directives\."
);

/// Binaries built from source are never reinstalled. Attached by the
/// classifier, not found by scanning output.
pub static BUILT_FROM_SOURCE: CommonProblem = CommonProblem {
    code: "E001",
    anchor: "#e001---binaries-built-from-source",
    detection: None,
};

/// Problems detectable in `go install` output, in report order.
pub static COMMON_PROBLEMS: [CommonProblem; 3] = [
    CommonProblem {
        code: "E002",
        anchor: "#e002---module-found-but-does-not-contain-package",
        detection: Some(&RE_MODULE_MISSING_PACKAGE),
    },
    CommonProblem {
        code: "E003",
        anchor: "#e003---module-declares-its-path-as--but-was-required-as-",
        detection: Some(&RE_MODULE_PATH_MISMATCH),
    },
    CommonProblem {
        code: "E004",
        anchor: "#e004---gomod-contains-replace-directives",
        detection: Some(&RE_REPLACE_DIRECTIVES),
    },
];

/// Every catalog problem whose signature appears in `install_output`.
pub fn find_common_problems(install_output: &str) -> Vec<&'static CommonProblem> {
    COMMON_PROBLEMS
        .iter()
        .filter(|p| p.occurs_in(install_output))
        .collect()
}
