//! Sequential `go install` of upgrade candidates.

use std::io::Write;

use super::problems::find_common_problems;
use crate::error::{Result, UpdateError};
use crate::gobinaries::GoBinary;
use crate::gocli::GoCli;
use crate::ui::Theme;

/// Outcome of one reinstall.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ReinstallOutcome {
    pub binary_name: String,
    pub success: bool,
    pub output: String,
}

/// Reinstall every candidate in order, one `go install` at a time.
///
/// A failed install is reported and counted; the remaining candidates are
/// still attempted. Returns [`UpdateError::InstallFailed`] when any install
/// failed.
pub fn reinstall_binaries(
    candidates: &[&GoBinary],
    cli: &GoCli<'_>,
    out: &mut dyn Write,
    theme: &Theme,
    verbose: bool,
) -> Result<Vec<ReinstallOutcome>> {
    let mut outcomes = Vec::with_capacity(candidates.len());

    for binary in candidates {
        write!(out, "{} ... ", status_line(binary, theme))?;
        out.flush()?;

        let (success, output) = match cli.install_latest(&binary.package_path, &binary.build_tags) {
            Ok(result) => (result.success, result.output),
            Err(e) => (false, e.chain_message()),
        };

        if success {
            writeln!(out, "✅")?;
        } else {
            tracing::debug!(binary = %binary.name, "reinstall failed");
            writeln!(out, "❌")?;
            writeln!(out, "    Could not install package")?;
        }

        if !output.is_empty() && (verbose || !success) {
            writeln!(out, "{}", output)?;
            for problem in find_common_problems(&output) {
                writeln!(out, "{}", problem.render(theme))?;
            }
        }
        writeln!(out)?;

        outcomes.push(ReinstallOutcome {
            binary_name: binary.name.clone(),
            success,
            output,
        });
    }

    let failed = outcomes.iter().filter(|o| !o.success).count();
    if failed > 0 {
        return Err(UpdateError::InstallFailed { count: failed });
    }

    Ok(outcomes)
}

/// The line announcing a reinstall, without the trailing marker.
pub fn status_line(binary: &GoBinary, theme: &Theme) -> String {
    let tags = if binary.build_tags.is_empty() {
        String::new()
    } else {
        format!(" (build tags: {})", theme.dim(&binary.build_tags.join(",")))
    };
    let name = theme.binary_name(&binary.name);

    match &binary.latest_version {
        Some(latest) if binary.upgrade_possible() => {
            format!("Upgrading {} to {}{}", name, theme.latest_version(latest), tags)
        }
        Some(latest) => format!(
            "Force-reinstalling {} {}{}",
            name,
            theme.latest_version(latest),
            tags
        ),
        None => format!("Reinstalling {}{}", name, tags),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::gocli::{format_command, CommandResult, GoCmdRunner, MockGoCmdRunner};
    use std::io;
    use std::path::{Path, PathBuf};

    /// Cannot start `go install` for one package; defers everything else.
    struct SpawnFailsFor {
        package: &'static str,
        inner: MockGoCmdRunner,
    }

    impl GoCmdRunner for SpawnFailsFor {
        fn run_go_command(&self, args: &[&str]) -> Result<CommandResult> {
            if args.first() == Some(&"install") && args.last() == Some(&self.package) {
                return Err(UpdateError::CommandSpawn {
                    command: format_command(Path::new("go"), args),
                    source: io::Error::new(io::ErrorKind::NotFound, "No such file or directory"),
                });
            }
            self.inner.run_go_command(args)
        }
    }

    fn binary(name: &str, package: &str, version: &str, latest: &str) -> GoBinary {
        GoBinary {
            name: name.into(),
            path: PathBuf::from("/home/test/go/bin").join(name),
            module_path: package.into(),
            package_path: package.into(),
            version: version.into(),
            latest_version: Some(latest.into()),
            build_tags: Vec::new(),
        }
    }

    fn run(
        candidates: &[&GoBinary],
        runner: &MockGoCmdRunner,
        verbose: bool,
    ) -> (Result<Vec<ReinstallOutcome>>, String) {
        let mut out = Vec::new();
        let result = reinstall_binaries(
            candidates,
            &GoCli::new(runner),
            &mut out,
            &Theme::plain(),
            verbose,
        );
        (result, String::from_utf8(out).unwrap())
    }

    #[test]
    fn status_line_variants() {
        let theme = Theme::plain();
        let mut b = binary("shfmt", "mvdan.cc/sh/v3/cmd/shfmt", "v3.4.2", "v3.4.3");
        assert_eq!(status_line(&b, &theme), "Upgrading shfmt to v3.4.3");

        b.build_tags = vec!["a".into(), "b".into(), "c".into()];
        assert_eq!(
            status_line(&b, &theme),
            "Upgrading shfmt to v3.4.3 (build tags: a,b,c)"
        );

        b.build_tags.clear();
        b.latest_version = Some("v3.4.2".into());
        assert_eq!(status_line(&b, &theme), "Force-reinstalling shfmt v3.4.2");

        b.latest_version = None;
        assert_eq!(status_line(&b, &theme), "Reinstalling shfmt");
    }

    #[test]
    fn quiet_success_hides_output() {
        let gofumpt = binary("gofumpt", "mvdan.cc/gofumpt", "v0.3.0", "v0.4.0");
        let runner = MockGoCmdRunner::new().respond(
            &["install", "mvdan.cc/gofumpt@latest"],
            "go: downloading mvdan.cc/gofumpt v0.4.0",
        );

        let (result, output) = run(&[&gofumpt], &runner, false);
        let outcomes = result.unwrap();
        assert_eq!(outcomes.len(), 1);
        assert!(outcomes[0].success);
        assert_eq!(output, "Upgrading gofumpt to v0.4.0 ... ✅\n\n");
    }

    #[test]
    fn verbose_success_echoes_output() {
        let gofumpt = binary("gofumpt", "mvdan.cc/gofumpt", "v0.3.0", "v0.4.0");
        let runner = MockGoCmdRunner::new().respond(
            &["install", "mvdan.cc/gofumpt@latest"],
            "go: downloading mvdan.cc/gofumpt v0.4.0",
        );

        let (result, output) = run(&[&gofumpt], &runner, true);
        assert!(result.is_ok());
        assert_eq!(
            output,
            "Upgrading gofumpt to v0.4.0 ... ✅\ngo: downloading mvdan.cc/gofumpt v0.4.0\n\n"
        );
    }

    #[test]
    fn failure_is_counted_and_later_candidates_still_run() {
        let cobra = binary("cobra", "github.com/spf13/cobra/cobra", "v1.3.0", "v1.4.0");
        let gofumpt = binary("gofumpt", "mvdan.cc/gofumpt", "v0.3.0", "v0.4.0");
        let runner = MockGoCmdRunner::new()
            .fail(
                &["install", "github.com/spf13/cobra/cobra@latest"],
                "go install: github.com/spf13/cobra/cobra@latest: module github.com/spf13/cobra@latest found (v1.4.0), but does not contain package github.com/spf13/cobra/cobra",
            )
            .respond(&["install", "mvdan.cc/gofumpt@latest"], "");

        let (result, output) = run(&[&cobra, &gofumpt], &runner, false);

        match result {
            Err(UpdateError::InstallFailed { count }) => assert_eq!(count, 1),
            other => panic!("unexpected result: {other:?}"),
        }
        assert_eq!(runner.calls_to("install").len(), 2);
        assert!(output.contains("Upgrading cobra to v1.4.0 ... ❌\n    Could not install package\n"));
        assert!(output.contains("known problem E002."));
        assert!(output.contains("TROUBLESHOOTING.md#e002---module-found-but-does-not-contain-package"));
        assert!(output.ends_with("Upgrading gofumpt to v0.4.0 ... ✅\n\n"));
    }

    #[test]
    fn install_that_cannot_start_is_a_failure() {
        let cobra = binary("cobra", "github.com/spf13/cobra/cobra", "v1.3.0", "v1.4.0");
        let gofumpt = binary("gofumpt", "mvdan.cc/gofumpt", "v0.3.0", "v0.4.0");
        let runner = SpawnFailsFor {
            package: "github.com/spf13/cobra/cobra@latest",
            inner: MockGoCmdRunner::new().respond(&["install", "mvdan.cc/gofumpt@latest"], ""),
        };

        let mut out = Vec::new();
        let result = reinstall_binaries(
            &[&cobra, &gofumpt],
            &GoCli::new(&runner),
            &mut out,
            &Theme::plain(),
            false,
        );
        let output = String::from_utf8(out).unwrap();

        match result {
            Err(UpdateError::InstallFailed { count }) => assert_eq!(count, 1),
            other => panic!("unexpected result: {other:?}"),
        }
        assert!(output.starts_with(
            "Upgrading cobra to v1.4.0 ... ❌\n    Could not install package\n\
             Could not run 'go install github.com/spf13/cobra/cobra@latest': No such file or directory\n\n"
        ));
        assert!(output.ends_with("Upgrading gofumpt to v0.4.0 ... ✅\n\n"));
        assert!(runner.inner.was_called_with(&["install", "mvdan.cc/gofumpt@latest"]));
    }

    #[test]
    fn build_tags_are_passed_to_install() {
        let mut shfmt = binary("shfmt", "mvdan.cc/sh/v3/cmd/shfmt", "v3.4.2", "v3.4.3");
        shfmt.build_tags = vec!["a".into(), "b".into(), "c".into()];
        let runner = MockGoCmdRunner::new().respond(
            &["install", "-tags", "a,b,c", "mvdan.cc/sh/v3/cmd/shfmt@latest"],
            "",
        );

        let (result, _) = run(&[&shfmt], &runner, false);
        assert!(result.is_ok());
        assert!(runner.was_called_with(&["install", "-tags", "a,b,c", "mvdan.cc/sh/v3/cmd/shfmt@latest"]));
    }

    #[test]
    fn no_candidates_is_success() {
        let runner = MockGoCmdRunner::new();
        let (result, output) = run(&[], &runner, false);
        assert!(result.unwrap().is_empty());
        assert!(output.is_empty());
        assert!(runner.calls().is_empty());
    }
}
