use thiserror::Error;

/// Failures that keep a carousel from being constructed.
///
/// None of these are retried: the embedding page has to supply new input.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum CarouselError {
    #[error("mount point `{0}` not found")]
    MountPointMissing(String),
    #[error("catalog must be an array of {{ code, name }} objects")]
    CatalogNotArray,
    #[error("catalog is empty")]
    EmptyCatalog,
    #[error("catalog entry {0} has a blank identifier")]
    BlankIdentifier(usize),
    #[error("duplicate catalog identifier `{0}`")]
    DuplicateIdentifier(String),
    #[error("catalog entry {index} is malformed: {reason}")]
    InvalidCatalogEntry { index: usize, reason: String },
}
