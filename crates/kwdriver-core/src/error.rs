/// Errors raised while converting a single parameter declaration.
///
/// These indicate a defect in the keyword implementation's declarations and
/// are never retried or recovered from.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ParameterError {
    #[error("parameter declared on field '{field}' resolves to no usable name")]
    MissingName { field: String },

    #[error("required parameter '{name}' declares a default value")]
    DefaultOnRequired { name: String },
}

/// Errors raised while building a keyword definition.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum KeywordError {
    /// Two parameter declarations resolved to the same identity. Names the
    /// declaration under scan when the collision was found.
    #[error("duplicate parameter '{field}' on keyword type '{keyword_type}'")]
    DuplicateParameter { field: String, keyword_type: String },

    /// Field-level failure, surfaced verbatim.
    #[error(transparent)]
    Parameter(#[from] ParameterError),
}

pub type Result<T> = std::result::Result<T, KeywordError>;
