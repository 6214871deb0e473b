use axum::http::header::InvalidHeaderValue;
use axum::http::HeaderValue;
use tower_http::cors::{AllowHeaders, AllowMethods, CorsLayer};

#[derive(Debug, thiserror::Error)]
#[error("invalid cors origin {origin:?}")]
pub struct Error {
    origin: String,
    #[source]
    source: InvalidHeaderValue,
}

#[derive(Clone, Debug, serde::Deserialize)]
pub struct Configuration {
    /// Single origin allowed to call the registry from a browser.
    #[serde(default = "Configuration::default_origin")]
    pub origin: String,
}

impl Default for Configuration {
    fn default() -> Self {
        Self {
            origin: Self::default_origin(),
        }
    }
}

impl Configuration {
    fn default_origin() -> String {
        "http://localhost:3000".into()
    }

    /// Credentials forbid wildcards, so methods and headers are mirrored
    /// from the preflight request.
    pub fn build(&self) -> Result<CorsLayer, Error> {
        let origin = HeaderValue::from_str(&self.origin).map_err(|source| Error {
            origin: self.origin.clone(),
            source,
        })?;
        tracing::debug!("allowing cross origin requests from {}", self.origin);
        Ok(CorsLayer::new()
            .allow_origin(origin)
            .allow_methods(AllowMethods::mirror_request())
            .allow_headers(AllowHeaders::mirror_request())
            .allow_credentials(true))
    }
}
