//! Discovery and introspection of installed Go binaries.
//!
//! - [`DirectoryLister`] lists the candidate binary names
//! - [`parse_module_info`] reads `go version -m` output
//! - [`Introspector`] builds a [`GoBinary`] for one name
//! - [`introspect_binaries`] runs the introspector over many names in parallel

pub mod batch;
pub mod binary;
pub mod introspector;
pub mod lister;
pub mod module_info;

pub use batch::{
    introspect_binaries, introspect_binaries_with_progress, worker_count, IntrospectionResult,
};
pub use binary::{GoBinary, COMMAND_LINE_ARGUMENTS, DEVEL_VERSION};
pub use introspector::Introspector;
pub use lister::{DirectoryLister, FilesystemDirectoryLister, MockDirectoryLister};
pub use module_info::{parse_module_info, ModuleInfo};
