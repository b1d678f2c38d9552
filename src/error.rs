use crate::shell::MAX_RADIUS;

/// Errors from shell lookups.
#[derive(thiserror::Error, Debug, Clone, Copy, PartialEq, Eq)]
pub enum ShellError {
    /// Radius exceeds [`MAX_RADIUS`]; offsets store `i16` components.
    #[error("radius {0} out of range (max {MAX_RADIUS})")]
    RadiusOutOfRange(u16),
}
