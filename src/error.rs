//! Error types for pixmark operations.

use thiserror::Error;

/// Result type alias using [`Error`].
pub type Result<T> = std::result::Result<T, Error>;

/// Errors that can occur when composing images.
///
/// Drawing routines never fail; they tolerate degenerate input by
/// drawing nothing. Only the combine operations validate their inputs,
/// and these are the two ways validation can fail.
#[derive(Error, Debug, Clone, Copy, PartialEq, Eq)]
pub enum Error {
    /// A coordinate that must address a pixel inside the image does not.
    #[error("coordinate not inside the image in {op}")]
    CoordNotInImage {
        /// Name of the failing operation.
        op: &'static str,
    },

    /// Two images that must have matching dimensions do not.
    #[error("incompatible image sizes in {op}")]
    IncompatibleSizes {
        /// Name of the failing operation.
        op: &'static str,
    },
}
