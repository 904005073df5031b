//! go-global-update CLI entry point.

use std::io::{self, Write};
use std::process::ExitCode;

use clap::Parser;
use go_global_update::cli::Cli;
use go_global_update::config::Config;
use go_global_update::gobinaries::FilesystemDirectoryLister;
use go_global_update::gocli::RealGoCmdRunner;
use go_global_update::ui::Theme;
use go_global_update::updater::{render_error, update_binaries, Options};
use go_global_update::Result;
use tracing_subscriber::{fmt, prelude::*, EnvFilter};

/// Initialize the tracing subscriber for logging.
///
/// Log level is controlled by:
/// 1. `--debug` flag sets level to DEBUG
/// 2. `RUST_LOG` environment variable (if set)
/// 3. Default is WARN
fn init_tracing(debug: bool) {
    let filter = if debug {
        EnvFilter::new("go_global_update=debug")
    } else {
        EnvFilter::try_from_default_env()
            .unwrap_or_else(|_| EnvFilter::new("go_global_update=warn"))
    };

    tracing_subscriber::registry()
        .with(fmt::layer().with_target(false).with_writer(io::stderr))
        .with(filter)
        .init();
}

fn run(cli: Cli, theme: &Theme) -> Result<()> {
    let config = Config::resolve(
        cli.gobin,
        cli.go_binary.clone(),
        &RealGoCmdRunner::new(&cli.go_binary),
    )?;
    let runner = RealGoCmdRunner::new(&config.go_binary).with_working_dir(&config.gobin);

    let options = Options {
        gobin: config.gobin,
        binaries: cli.binaries,
        force_reinstall: cli.force_reinstall,
        dry_run: cli.dry_run || cli.json,
        verbose: cli.verbose,
        json: cli.json,
        show_progress: true,
    };

    let stdout = io::stdout();
    let mut out = stdout.lock();
    let result = update_binaries(&options, &mut out, theme, &runner, &FilesystemDirectoryLister);
    out.flush()?;
    result
}

fn main() -> ExitCode {
    let cli = Cli::parse();
    init_tracing(cli.debug);

    tracing::debug!("go-global-update starting with args: {:?}", cli);

    let theme = if cli.no_color {
        Theme::plain()
    } else {
        Theme::detect(cli.colors)
    };

    match run(cli, &theme) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("Error: {}", render_error(&e, &theme));
            ExitCode::from(1)
        }
    }
}
