use async_trait::async_trait;

use crate::config::Config;
use crate::core::error::{LinktagError, Result};
use crate::core::types::ProbeOutcome;

/// A liveness check for a single URL.
///
/// Implementations must not fail: every transport fault is folded into the
/// returned [`ProbeOutcome`].
#[async_trait]
pub trait ProbeUrl {
    async fn probe(&self, url: &str) -> ProbeOutcome;

    async fn verify_url(&self, url: &str) -> bool {
        self.probe(url).await.is_verified()
    }
}

/// Probes URLs with a bodiless HEAD request.
#[derive(Debug, Clone)]
pub struct HttpVerifier {
    client: reqwest::Client,
}

impl HttpVerifier {
    /// Build a verifier from configuration.
    ///
    /// Redirects follow the client's default policy and nothing is retried.
    pub fn new(config: &Config) -> Result<Self> {
        let user_agent = config.user_agent.as_deref().unwrap_or(concat!(
            env!("CARGO_PKG_NAME"),
            "/",
            env!("CARGO_PKG_VERSION")
        ));

        let mut client_builder = reqwest::Client::builder()
            .timeout(config.timeout_duration())
            .user_agent(user_agent);

        if config.skip_ssl_verification.unwrap_or(false) {
            client_builder = client_builder.danger_accept_invalid_certs(true);
        }

        if let Some(ref proxy_url) = config.proxy {
            let proxy = reqwest::Proxy::all(proxy_url).map_err(|e| {
                LinktagError::Config(format!("Invalid proxy URL '{proxy_url}': {e}"))
            })?;
            client_builder = client_builder.proxy(proxy);
        }

        Ok(Self {
            client: client_builder.build()?,
        })
    }
}

#[async_trait]
impl ProbeUrl for HttpVerifier {
    async fn probe(&self, url: &str) -> ProbeOutcome {
        match self.client.head(url).send().await {
            Ok(response) => ProbeOutcome::status(response.status().as_u16()),
            Err(err) => {
                let description = if err.is_timeout() {
                    "operation timed out".to_string()
                } else {
                    std::error::Error::source(&err)
                        .map(|e| e.to_string())
                        .unwrap_or_else(|| err.to_string())
                };
                ProbeOutcome::failure(description)
            }
        }
    }
}

#[cfg(test)]
mod tests {
    #![allow(non_snake_case)]

    use super::*;
    use mockito::Server;

    fn test_config() -> Config {
        Config {
            timeout: Some(5), // 5 seconds for CI stability
            ..Default::default()
        }
    }

    #[tokio::test]
    async fn test_probe__when_200__is_verified() {
        let mut server = Server::new_async().await;
        let _m = server
            .mock("HEAD", "/200")
            .with_status(200)
            .create_async()
            .await;
        let verifier = HttpVerifier::new(&test_config()).unwrap();

        let outcome = verifier.probe(&(server.url() + "/200")).await;

        assert_eq!(outcome.status_code, Some(200));
        assert_eq!(outcome.description, None);
        assert!(outcome.is_verified());
    }

    #[tokio::test]
    async fn test_probe__sends_head_request() {
        let mut server = Server::new_async().await;
        let head = server
            .mock("HEAD", "/page")
            .with_status(204)
            .expect(1)
            .create_async()
            .await;
        let get = server
            .mock("GET", "/page")
            .with_status(200)
            .expect(0)
            .create_async()
            .await;
        let verifier = HttpVerifier::new(&test_config()).unwrap();

        assert!(verifier.verify_url(&(server.url() + "/page")).await);

        head.assert_async().await;
        get.assert_async().await;
    }

    #[tokio::test]
    async fn test_probe__when_404__is_unverified() {
        let mut server = Server::new_async().await;
        let _m = server
            .mock("HEAD", "/404")
            .with_status(404)
            .create_async()
            .await;
        let verifier = HttpVerifier::new(&test_config()).unwrap();

        let outcome = verifier.probe(&(server.url() + "/404")).await;

        assert_eq!(outcome.status_code, Some(404));
        assert!(!outcome.is_verified());
    }

    #[tokio::test]
    async fn test_probe__when_500__is_unverified() {
        let mut server = Server::new_async().await;
        let _m = server
            .mock("HEAD", "/500")
            .with_status(500)
            .expect(1) // No retries
            .create_async()
            .await;
        let verifier = HttpVerifier::new(&test_config()).unwrap();

        assert!(!verifier.verify_url(&(server.url() + "/500")).await);
    }

    #[tokio::test]
    async fn test_probe__when_connection_refused__is_unverified() {
        let verifier = HttpVerifier::new(&test_config()).unwrap();

        let outcome = verifier.probe("http://127.0.0.1:1/unreachable").await;

        assert_eq!(outcome.status_code, None);
        assert!(outcome.description.is_some());
        assert!(!outcome.is_verified());
    }

    #[tokio::test]
    async fn test_probe__when_timeout_reached__is_unverified() {
        let config = Config {
            timeout: Some(1), // Use very small timeout
            ..Default::default()
        };
        let verifier = HttpVerifier::new(&config).unwrap();
        // RFC 5737 TEST-NET-1 address, never answers
        let outcome = verifier.probe("http://192.0.2.1:80/200").await;

        assert_eq!(outcome.status_code, None);
        assert!(outcome.description.is_some());
    }

    #[tokio::test]
    async fn test_probe__sends_custom_user_agent() {
        let mut server = Server::new_async().await;
        let m = server
            .mock("HEAD", "/ua")
            .match_header("user-agent", "chem-search/1.0")
            .with_status(200)
            .create_async()
            .await;
        let config = Config {
            user_agent: Some("chem-search/1.0".to_string()),
            ..test_config()
        };
        let verifier = HttpVerifier::new(&config).unwrap();

        assert!(verifier.verify_url(&(server.url() + "/ua")).await);
        m.assert_async().await;
    }

    #[test]
    fn test_new__rejects_invalid_proxy() {
        let config = Config {
            proxy: Some("not a proxy url".to_string()),
            ..Default::default()
        };

        assert!(matches!(
            HttpVerifier::new(&config),
            Err(LinktagError::Config(_))
        ));
    }
}
