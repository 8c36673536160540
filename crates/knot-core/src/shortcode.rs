use serde::{Deserialize, Serialize};
use std::fmt::Display;

/// A short code identifying a stored URL mapping.
///
/// Codes produced by [`Base62Encoder`](crate::base62::Base62Encoder) are
/// purely alphanumeric; the type itself is a thin wrapper and does not
/// re-validate, since every code in the system is derived from a record
/// identifier.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct ShortCode(String);

impl ShortCode {
    pub fn new(code: impl Into<String>) -> Self {
        Self(code.into())
    }

    /// Returns the short code as a string slice.
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Generates the full shortened URL based on the provided base URL.
    pub fn to_url(&self, base_url: &str) -> String {
        format!("{}/{}", base_url.trim_end_matches('/'), self.0)
    }
}

impl Display for ShortCode {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn display_matches_inner() {
        let code = ShortCode::new("b9");
        assert_eq!(code.to_string(), "b9");
        assert_eq!(code.as_str(), "b9");
    }

    #[test]
    fn to_url_joins_with_base() {
        let code = ShortCode::new("b9");
        assert_eq!(code.to_url("https://kno.t"), "https://kno.t/b9");
        assert_eq!(code.to_url("https://kno.t/"), "https://kno.t/b9");
    }
}
