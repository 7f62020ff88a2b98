use serde::Deserialize;

/// A credential that never shows up in `Debug` output.
#[derive(Clone, PartialEq, Eq, Deserialize)]
#[serde(transparent)]
pub struct ApiKey {
    key: String,
}

impl ApiKey {
    pub fn expose(&self) -> &str {
        &self.key
    }
}

impl From<String> for ApiKey {
    fn from(key: String) -> Self {
        Self { key }
    }
}

impl From<&str> for ApiKey {
    fn from(key: &str) -> Self {
        Self { key: key.to_string() }
    }
}

impl From<ApiKey> for String {
    fn from(api_key: ApiKey) -> String {
        api_key.key
    }
}

impl std::fmt::Debug for ApiKey {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str("[REDACTED]")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_debug_is_redacted() {
        let key = ApiKey::from("sk-test");
        assert_eq!(format!("{key:?}"), "[REDACTED]");
        assert_eq!(key.expose(), "sk-test");
    }
}
