// File: src/client/core.rs
use crate::client::error::LoadError;
use crate::client::middleware::{FeedHeadersLayer, FeedHeadersService};

use http::{Request, Uri};
use http_body_util::BodyExt;
use hyper_rustls::HttpsConnectorBuilder;
use hyper_util::client::legacy::Client;
use hyper_util::client::legacy::connect::HttpConnector;
use hyper_util::rt::TokioExecutor;
use serde::de::DeserializeOwned;
use tower::ServiceExt;
use tower_layer::Layer;

type HttpsClient =
    FeedHeadersService<Client<hyper_rustls::HttpsConnector<HttpConnector>, String>>;

/// Joins a feed path onto the base URL. Absolute `http(s)://` paths are used as-is;
/// a leading `./` or `/` on relative paths is ignored.
pub fn resolve_url(base_url: &str, path: &str) -> String {
    if path.starts_with("http://") || path.starts_with("https://") {
        return path.to_string();
    }
    let rel = path.trim_start_matches("./").trim_start_matches('/');
    format!("{}/{}", base_url.trim_end_matches('/'), rel)
}

/// Reads the static JSON feeds the page is built from.
#[derive(Clone, Debug)]
pub struct FeedClient {
    base_url: String,
    http: HttpsClient,
}

impl FeedClient {
    pub fn new(base_url: &str, user_agent: &str) -> Self {
        let mut root_store = rustls::RootCertStore::empty();
        let result = rustls_native_certs::load_native_certs();
        root_store.add_parsable_certificates(result.certs);
        if root_store.is_empty() {
            // Plain http feeds still work; https ones will fail at handshake.
            log::warn!("No valid system certificates found");
        }
        let tls_config = rustls::ClientConfig::builder()
            .with_root_certificates(root_store)
            .with_no_client_auth();

        let https_connector = HttpsConnectorBuilder::new()
            .with_tls_config(tls_config)
            .https_or_http()
            .enable_http1()
            .build();

        let http_client = Client::builder(TokioExecutor::new()).build(https_connector);
        let http = FeedHeadersLayer::new(user_agent).layer(http_client);

        Self {
            base_url: base_url.to_string(),
            http,
        }
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    /// GET `path` and deserialize the whole body. All or nothing: one syntax
    /// error anywhere fails the feed.
    pub async fn get_json<T: DeserializeOwned>(&self, path: &str) -> Result<T, LoadError> {
        let url = resolve_url(&self.base_url, path);
        let uri: Uri = url.parse().map_err(|e| LoadError::fetch(&url, e))?;

        let req = Request::get(uri)
            .body(String::new())
            .map_err(|e| LoadError::fetch(&url, e))?;

        log::debug!("GET {}", url);
        let response = self
            .http
            .clone()
            .oneshot(req)
            .await
            .map_err(|e| LoadError::fetch(&url, e))?;

        let status = response.status();
        if !status.is_success() {
            return Err(LoadError::status(&url, status));
        }

        let body = response
            .into_body()
            .collect()
            .await
            .map_err(|e| LoadError::fetch(&url, e))?
            .to_bytes();

        serde_json::from_slice(&body).map_err(|source| LoadError::Parse { url, source })
    }
}
