//! Structured error types for gridview.
//!
//! Interaction handlers never fail; errors only surface while mounting the
//! viewer or validating its configuration.

/// All errors that can occur while configuring or mounting a grid view.
#[derive(Debug, thiserror::Error)]
pub enum GridViewError {
    /// Rejected construction-time configuration.
    #[error("Invalid configuration: {0}")]
    InvalidConfig(String),

    /// Configuration object could not be decoded.
    #[error("Configuration decode: {0}")]
    ConfigDecode(#[from] serde_json::Error),

    /// Rendering error (missing or unusable drawing context).
    #[error("Render error: {0}")]
    Render(String),

    /// DOM wiring failure (listener registration, observers).
    #[error("DOM error: {0}")]
    Dom(String),

    /// Catch-all for string errors.
    #[error("{0}")]
    Other(String),
}

impl GridViewError {
    /// A failed DOM call, with the browser's message when it gave one.
    pub fn dom(action: &str, detail: Option<String>) -> Self {
        match detail {
            Some(detail) => Self::Dom(format!("{action}: {detail}")),
            None => Self::Dom(action.to_string()),
        }
    }
}

/// Convenience alias used throughout the crate.
pub type Result<T> = std::result::Result<T, GridViewError>;

impl From<String> for GridViewError {
    fn from(s: String) -> Self {
        Self::Other(s)
    }
}

impl From<&str> for GridViewError {
    fn from(s: &str) -> Self {
        Self::Other(s.to_string())
    }
}

#[cfg(target_arch = "wasm32")]
impl From<GridViewError> for wasm_bindgen::JsValue {
    fn from(e: GridViewError) -> Self {
        wasm_bindgen::JsValue::from_str(&e.to_string())
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    #[test]
    fn dom_errors_carry_the_failed_action() {
        let err = GridViewError::dom("add wheel listener", Some("SecurityError".into()));
        assert!(matches!(err, GridViewError::Dom(_)));
        assert_eq!(err.to_string(), "DOM error: add wheel listener: SecurityError");
        assert_eq!(
            GridViewError::dom("create ResizeObserver", None).to_string(),
            "DOM error: create ResizeObserver"
        );
    }

    #[test]
    fn bad_json_is_a_decode_error() {
        let err: GridViewError = serde_json::from_str::<u32>("{").unwrap_err().into();
        assert!(matches!(err, GridViewError::ConfigDecode(_)));
        assert!(err.to_string().starts_with("Configuration decode: "));
    }

    #[test]
    fn plain_strings_fall_through_to_other() {
        assert!(matches!(GridViewError::from("boom"), GridViewError::Other(ref m) if m == "boom"));
    }
}
