use thiserror::Error;

/// Main error type for the twclsx crate
#[derive(Debug, Error)]
pub enum TwclsxError {
    #[error("twclsx: The `twclsx()` function requires parameters.")]
    ParametersRequired,

    #[error("twclsx: Params cannot be null.")]
    NullParams,

    /// A responsive object value was not a string.
    #[doc(alias = "IncorrectKeyType")]
    #[error("twclsx: The values of your responsive object must be strings (`{breakpoint}` is {found}).")]
    IncorrectValueType {
        breakpoint: String,
        found: &'static str,
    },

    #[error("twclsx: The responsive object must be an object, found {found}.")]
    IncorrectParamsType { found: &'static str },

    #[error("twclsx: Unknown breakpoint `{0}`, expected one of sm, md, lg, xl, xxl.")]
    UnknownBreakPoint(String),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

pub type Result<T> = std::result::Result<T, TwclsxError>;
