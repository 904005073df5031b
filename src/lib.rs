//! go-global-update - Update globally installed Go binaries.
//!
//! Every binary in the Go install directory (GOBIN) is introspected with
//! `go version -m`, compared against the latest version known to the module
//! proxy, and reinstalled with `go install <package>@latest` when a newer
//! version exists.
//!
//! # Modules
//!
//! - [`cli`] - Command-line argument parsing
//! - [`config`] - Install directory and go executable resolution
//! - [`error`] - Error types and result aliases
//! - [`gobinaries`] - Binary discovery and introspection
//! - [`gocli`] - Go command execution
//! - [`ui`] - Table, colors and progress output
//! - [`updater`] - Classification, reporting and reinstalling
//!
//! # Example
//!
//! ```
//! use go_global_update::gobinaries::parse_module_info;
//!
//! let info = parse_module_info(
//!     "/home/user/go/bin/gofumpt: go1.18\n\
//!      \tpath\tmvdan.cc/gofumpt\n\
//!      \tmod\tmvdan.cc/gofumpt\tv0.3.0\th1:abc=\n",
//! )
//! .unwrap();
//! assert_eq!(info.module_path, "mvdan.cc/gofumpt");
//! assert_eq!(info.version, "v0.3.0");
//! ```

pub mod cli;
pub mod config;
pub mod error;
pub mod gobinaries;
pub mod gocli;
pub mod ui;
pub mod updater;

pub use error::{Result, UpdateError};
