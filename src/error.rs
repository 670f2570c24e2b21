use thiserror::Error;

/// Crate-wide result type alias.
pub type Result<T> = std::result::Result<T, Error>;

/// Error type for the simulation core and its collaborators.
///
/// Every failure is raised at the point of detection and surfaced to the
/// caller; the simulation has no partial-failure or retry semantics.
#[derive(Debug, Error)]
pub enum Error {
    /// Indexing a vector component outside `[0, dim)`.
    #[error("component {index} out of range for a {dim}-dimensional vector")]
    ComponentOutOfRange { index: usize, dim: usize },

    /// The vector product only exists for 3- and 7-dimensional vectors.
    #[error("vector product only defined for 3- and 7-dimensional vectors, got {0}")]
    VectorProductUndefined(usize),

    /// A scenario that cannot be simulated as configured.
    #[error("invalid scenario: {0}")]
    InvalidScenario(String),

    /// Scenario file could not be deserialized.
    #[error("failed to parse scenario file: {0}")]
    Config(#[from] serde_yaml::Error),

    /// Failure while writing the per-step position table.
    #[error(transparent)]
    Csv(#[from] csv::Error),

    #[error(transparent)]
    Io(#[from] std::io::Error),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn error_display_is_informative() {
        let e = Error::ComponentOutOfRange { index: 3, dim: 3 };
        let msg = format!("{e}");
        assert!(msg.contains("out of range"));
        assert!(msg.contains('3'));
    }
}
