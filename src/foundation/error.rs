use crate::foundation::core::SheetRect;

/// Convenience result type used across Teeforge.
pub type TeeResult<T> = Result<T, TeeError>;

/// Top-level error taxonomy used by the rendering APIs.
#[derive(thiserror::Error, Debug)]
pub enum TeeError {
    /// The requested skin could not be found by a [`SkinSource`](crate::SkinSource).
    #[error("skin not found: {0}")]
    SourceNotFound(String),

    /// A sheet rectangle does not fit inside the decoded skin image.
    #[error("rectangle '{element}' {rect} is out of bounds for a {width}x{height} skin")]
    OutOfBounds {
        /// Name of the skin element whose rectangle was requested.
        element: String,
        /// The offending rectangle.
        rect: SheetRect,
        /// Width of the decoded image.
        width: u32,
        /// Height of the decoded image.
        height: u32,
    },

    /// A part references a skin element that the catalog does not define.
    #[error("part '{part}' references unknown skin element '{element}'")]
    UnknownPart {
        /// Name of the referencing part.
        part: String,
        /// The dangling element name.
        element: String,
    },

    /// Invalid user-provided data (catalogs, skin names, settings).
    #[error("validation error: {0}")]
    Validation(String),

    /// Errors while encoding the rendered avatar.
    #[error("encode error: {0}")]
    Encode(String),

    /// Wrapped lower-level error from dependencies or IO.
    #[error(transparent)]
    Other(#[from] anyhow::Error),
}

impl TeeError {
    /// Build a [`TeeError::Validation`] value.
    pub fn validation(msg: impl Into<String>) -> Self {
        Self::Validation(msg.into())
    }

    /// Build a [`TeeError::Encode`] value.
    pub fn encode(msg: impl Into<String>) -> Self {
        Self::Encode(msg.into())
    }

    /// Build a [`TeeError::SourceNotFound`] value.
    pub fn source_not_found(name: impl Into<String>) -> Self {
        Self::SourceNotFound(name.into())
    }
}

#[cfg(test)]
#[path = "../../tests/unit/foundation/error.rs"]
mod tests;
