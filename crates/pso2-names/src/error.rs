//! Error types for bone renaming.

use thiserror::Error;

/// A batch rename would give two bones the same name.
///
/// Carries every colliding target name so all conflicts can be reported at
/// once.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("cannot rename bones, there are duplicates of the following bones:\n{}", .names.join("\n"))]
pub struct DuplicateNameError {
    pub names: Vec<String>,
}
