//! Error types for wlanops

use thiserror::Error;

/// wlanops error type
#[derive(Error, Debug)]
pub enum WlanOpsError {
    /// Unknown environment profile
    ///
    /// The only hard failure the engine surfaces: selecting a profile name
    /// that is not in the catalog is a configuration error and must not
    /// silently fall back to unrelated defaults.
    #[error("unknown environment profile: {0}")]
    UnknownProfile(String),
}

/// Result type for wlanops
pub type WlanOpsResult<T> = Result<T, WlanOpsError>;
