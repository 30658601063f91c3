use thiserror::Error;

/// Decode failures.
///
/// Reinterpreting fixed-width bytes as integers cannot fail, so the only
/// error is a buffer too short to hold the full record. The caller decides
/// whether to re-fetch a longer buffer or surface the failure; no partial
/// record is ever returned.
#[derive(Error, Debug, Clone, Copy, PartialEq, Eq)]
pub enum DecodeError {
    #[error("token account data too short: need at least {required} bytes, got {actual}")]
    InsufficientData { required: usize, actual: usize },
}
