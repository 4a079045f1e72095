//! Absolute base URL composition
//!
//! The base path is assembled from an optional host and an optional path
//! fragment under the `http` scheme. Composition never panics; callers that
//! only need the string use [`resolve_base_path`], which turns every failure
//! into `None`.

use crate::error::BasePathError;
use url::Url;

/// Scheme every base path is written with
pub const SCHEME: &str = "http";

/// A composed absolute base URL
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BasePath(String);

impl BasePath {
    /// Compose `http://{host}{path}`, treating absent parts as empty.
    ///
    /// ```
    /// use rostrum_swagger::BasePath;
    ///
    /// let base = BasePath::resolve(Some("petstore.swagger.io"), Some("/v2")).unwrap();
    /// assert_eq!(base.as_str(), "http://petstore.swagger.io/v2");
    ///
    /// let degenerate = BasePath::resolve(None, None).unwrap();
    /// assert_eq!(degenerate.as_str(), "http://");
    ///
    /// assert!(BasePath::resolve(Some("pet store"), None).is_err());
    /// ```
    pub fn resolve(host: Option<&str>, path: Option<&str>) -> Result<Self, BasePathError> {
        let host = host.unwrap_or("");
        let path = path.unwrap_or("");

        check_path(path)?;

        let composed = format!("{}://{}{}", SCHEME, host, path);
        if host.is_empty() {
            return Ok(BasePath(composed));
        }

        check_host(host)?;

        let parsed = Url::parse(&composed).map_err(|source| BasePathError::Malformed {
            url: composed.clone(),
            source,
        })?;
        if parsed.host_str().is_none_or(str::is_empty) {
            return Err(BasePathError::InvalidHost(host.to_string()));
        }

        Ok(BasePath(composed))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    pub fn into_string(self) -> String {
        self.0
    }
}

impl std::fmt::Display for BasePath {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.0)
    }
}

/// Resolve a base path, dropping it when the parts do not form a valid URL
pub fn resolve_base_path(host: Option<&str>, path: Option<&str>) -> Option<String> {
    match BasePath::resolve(host, path) {
        Ok(base) => Some(base.into_string()),
        Err(e) => {
            rostrum_log::warn!(target: "rostrum::swagger", "Omitting basePath: {}", e);
            None
        }
    }
}

/// `Url::parse` strips tabs and newlines, trims spaces and reads `\` as `/`,
/// so anything it would rewrite is rejected before parsing.
fn check_host(host: &str) -> Result<(), BasePathError> {
    let rewritten = |c: char| c.is_ascii_whitespace() || c.is_control() || c == '\\';
    if host.contains(['/', '?', '#', '@']) || host.chars().any(rewritten) {
        return Err(BasePathError::InvalidHost(host.to_string()));
    }
    Ok(())
}

fn check_path(path: &str) -> Result<(), BasePathError> {
    let invalid = |reason| BasePathError::InvalidPath {
        path: path.to_string(),
        reason,
    };

    if path.is_empty() {
        return Ok(());
    }
    if !path.starts_with('/') {
        return Err(invalid("must start with '/'"));
    }
    if path.chars().any(|c| c.is_ascii_whitespace() || c.is_control()) {
        return Err(invalid("contains whitespace or control characters"));
    }
    if path.contains(['?', '#']) {
        return Err(invalid("contains a query or fragment delimiter"));
    }

    let bytes = path.as_bytes();
    let mut i = 0;
    while i < bytes.len() {
        if bytes[i] == b'%' {
            let escape = bytes.get(i + 1..i + 3);
            if !escape.is_some_and(|hex| hex.iter().all(u8::is_ascii_hexdigit)) {
                return Err(invalid("malformed percent-encoding"));
            }
            i += 3;
        } else {
            i += 1;
        }
    }

    Ok(())
}
