use thiserror::Error;
use wasm_bindgen::JsValue;

#[derive(Debug, Error, PartialEq)]
pub enum DomError {
    #[error("no browser window available")]
    NoWindow,
    #[error("element `{0}` is missing")]
    MissingElement(String),
    #[error("local storage is unavailable")]
    StorageUnavailable,
    #[error("anchor target `#{0}` does not resolve")]
    UnresolvedTarget(String),
    #[error("javascript call failed: {0}")]
    Js(String),
}

impl From<JsValue> for DomError {
    fn from(value: JsValue) -> Self {
        DomError::Js(value.as_string().unwrap_or_else(|| format!("{:?}", value)))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn messages_name_the_missing_piece() {
        assert_eq!(
            DomError::MissingElement("#scrollTopBtn".into()).to_string(),
            "element `#scrollTopBtn` is missing"
        );
        assert_eq!(
            DomError::UnresolvedTarget("methods".into()).to_string(),
            "anchor target `#methods` does not resolve"
        );
    }
}
