//! Concurrent introspection of many binaries.

use indicatif::ProgressBar;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::OnceLock;
use std::thread;

use super::binary::GoBinary;
use super::introspector::Introspector;
use crate::error::{Result, UpdateError};

/// Fallback worker count when the available parallelism is unknown.
const DEFAULT_WORKERS: usize = 4;

/// Outcome of introspecting one binary.
#[derive(Debug)]
pub struct IntrospectionResult {
    /// The name that was introspected.
    pub binary_name: String,
    /// The binary record, or why it could not be built.
    pub result: Result<GoBinary>,
}

impl IntrospectionResult {
    pub fn binary(&self) -> Option<&GoBinary> {
        self.result.as_ref().ok()
    }

    pub fn error(&self) -> Option<&UpdateError> {
        self.result.as_ref().err()
    }
}

/// Introspect every binary, one result per name in input order.
///
/// A failure is stored in that binary's result and never stops the others.
pub fn introspect_binaries(
    introspector: &Introspector<'_>,
    binary_names: &[String],
) -> Vec<IntrospectionResult> {
    introspect_binaries_with_progress(introspector, binary_names, &ProgressBar::hidden())
}

/// Like [`introspect_binaries`], advancing `progress` once per finished binary.
pub fn introspect_binaries_with_progress(
    introspector: &Introspector<'_>,
    binary_names: &[String],
    progress: &ProgressBar,
) -> Vec<IntrospectionResult> {
    if binary_names.is_empty() {
        return Vec::new();
    }

    let slots: Vec<OnceLock<IntrospectionResult>> =
        binary_names.iter().map(|_| OnceLock::new()).collect();
    let next_index = AtomicUsize::new(0);
    let workers = worker_count(binary_names.len());

    tracing::debug!(
        workers,
        binaries = binary_names.len(),
        "introspecting binaries"
    );

    thread::scope(|scope| {
        for _ in 0..workers {
            scope.spawn(|| loop {
                let index = next_index.fetch_add(1, Ordering::Relaxed);
                let Some(binary_name) = binary_names.get(index) else {
                    break;
                };

                let result = introspector.introspect(binary_name).map_err(|source| {
                    UpdateError::Introspection {
                        binary: binary_name.clone(),
                        source: Box::new(source),
                    }
                });
                progress.inc(1);

                // Each index is handed out exactly once, so the slot is empty.
                let _ = slots[index].set(IntrospectionResult {
                    binary_name: binary_name.clone(),
                    result,
                });
            });
        }
    });

    slots
        .into_iter()
        .map(|slot| {
            slot.into_inner()
                .expect("every result slot is filled before the worker pool joins")
        })
        .collect()
}

/// Number of workers for `jobs` binaries: the available parallelism, never
/// more than there are jobs.
pub fn worker_count(jobs: usize) -> usize {
    thread::available_parallelism()
        .map_or(DEFAULT_WORKERS, |n| n.get())
        .min(jobs)
        .max(1)
}
