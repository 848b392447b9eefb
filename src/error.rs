//! Error types for stat range resolution and reference data loading.
//!
//! "Could not resolve" is not an error in this crate: resolvers return
//! `Ok(None)` for that. The enums here cover genuine faults only, namely
//! reference data that does not match the records it is applied to.

use std::path::PathBuf;
use thiserror::Error;

/// Format an optional step index for diagnostics.
fn format_step(step_index: &Option<usize>) -> String {
    match step_index {
        Some(step) => format!("step {}", step),
        None => String::from("node missing"),
    }
}

/// Errors that can occur while resolving an item's stat ranges.
///
/// # Examples
///
/// ```rust
/// use gearstat::StatError;
///
/// let err = StatError::MalformedGrid {
///     grid_hash: 42,
///     node_index: 3,
///     step_index: Some(7),
/// };
/// assert!(err.to_string().contains("grid 42"));
/// ```
#[derive(Debug, Error, Clone, PartialEq)]
pub enum StatError {
    /// The item's node state points at a node or step the talent grid
    /// definition does not have.
    ///
    /// `step_index` is `None` when the node position itself is missing
    /// from the grid.
    #[error(
        "Malformed talent grid {}: node {} ({})",
        .grid_hash,
        .node_index,
        format_step(.step_index)
    )]
    MalformedGrid {
        grid_hash: u32,
        node_index: usize,
        step_index: Option<usize>,
    },
}

/// Errors raised while loading reference data.
#[derive(Debug, Error)]
pub enum ReferenceError {
    /// The reference file could not be read.
    #[error("Failed to read reference data {}: {}", .path.display(), .source)]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// The reference data did not have the expected shape.
    #[error("Invalid reference data: {0}")]
    Parse(#[from] serde_json::Error),
}
