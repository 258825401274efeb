//! Error type shared by the harness crates.

/// Error type for harness setup.
///
/// Running a batch never fails once the harness is built; only
/// configuration and pool construction can.
#[derive(Debug, thiserror::Error)]
pub enum CalcTestError {
    /// Invalid harness configuration.
    #[error("configuration error: {0}")]
    Config(String),

    /// No calculator kind with this name.
    #[error("unknown calculator kind: {0}")]
    UnknownCalculator(String),

    /// The worker pool could not be created.
    #[error("worker pool error: {0}")]
    Pool(String),
}
