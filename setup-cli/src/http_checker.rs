//! Trade-name checks against the remote advisory service.

use std::time::Duration;

use async_trait::async_trait;
use setup_core::services::{
    ServiceConfig, ServiceError, TradeNameCheck, TradeNameChecker, TradeNameCheckerFactory,
    TradeNameRequest,
};
use tracing::debug;

/// POSTs the request as JSON to `endpoint` and reads the flags back.
#[derive(Debug, Clone)]
pub struct HttpTradeNameChecker {
    client: reqwest::Client,
    endpoint: String,
}

impl HttpTradeNameChecker {
    pub fn new(config: &ServiceConfig) -> Result<Self, ServiceError> {
        let client = reqwest::Client::builder()
            .timeout(Duration::from_secs(config.timeout_secs))
            .build()
            .map_err(|e| ServiceError::Configuration(format!("cannot build HTTP client: {e}")))?;
        Ok(Self {
            client,
            endpoint: config.endpoint.clone(),
        })
    }

    pub fn endpoint(&self) -> &str {
        &self.endpoint
    }
}

#[async_trait]
impl TradeNameChecker for HttpTradeNameChecker {
    fn backend_name(&self) -> &'static str {
        "http"
    }

    async fn check(
        &self,
        request: &TradeNameRequest,
    ) -> Result<TradeNameCheck, ServiceError> {
        debug!(endpoint = %self.endpoint, thread_id = %request.thread_id, "posting trade name check");
        let response = self
            .client
            .post(&self.endpoint)
            .json(request)
            .send()
            .await
            .map_err(|e| ServiceError::Request(e.to_string()))?;

        let status = response.status();
        if !status.is_success() {
            return Err(ServiceError::Response(format!(
                "trade name service returned {status}"
            )));
        }

        response
            .json::<TradeNameCheck>()
            .await
            .map_err(|e| ServiceError::Response(e.to_string()))
    }
}

#[derive(Debug, Clone, Copy, Default)]
pub struct HttpCheckerFactory;

impl TradeNameCheckerFactory for HttpCheckerFactory {
    fn backend_name(&self) -> &'static str {
        "http"
    }

    fn create(
        &self,
        config: &ServiceConfig,
    ) -> Result<Box<dyn TradeNameChecker>, ServiceError> {
        if config.endpoint.trim().is_empty() {
            return Err(ServiceError::Configuration(
                "http trade name backend needs an endpoint".to_string(),
            ));
        }
        Ok(Box::new(HttpTradeNameChecker::new(config)?))
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;
    use tokio::io::{AsyncReadExt, AsyncWriteExt};
    use tokio::net::TcpListener;

    use super::*;

    /// Serves one canned HTTP response and hands back the request body.
    async fn serve_once(
        status_line: &'static str,
        body: &'static str,
    ) -> (String, tokio::task::JoinHandle<String>) {
        let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
        let addr = listener.local_addr().unwrap();
        let handle = tokio::spawn(async move {
            let (mut socket, _) = listener.accept().await.unwrap();
            let mut received = Vec::new();
            let mut buf = [0u8; 1024];
            let request_body = loop {
                let n = socket.read(&mut buf).await.unwrap();
                received.extend_from_slice(&buf[..n]);
                let text = String::from_utf8_lossy(&received).to_string();
                if let Some(split) = text.find("\r\n\r\n") {
                    let length = text[..split]
                        .lines()
                        .find_map(|l| {
                            let (name, value) = l.split_once(':')?;
                            name.eq_ignore_ascii_case("content-length")
                                .then(|| value.trim().parse::<usize>().ok())?
                        })
                        .unwrap_or(0);
                    let body = &text[split + 4..];
                    if body.len() >= length || n == 0 {
                        break body.to_string();
                    }
                }
            };
            let response = format!(
                "{status_line}\r\nContent-Type: application/json\r\nContent-Length: {}\r\nConnection: close\r\n\r\n{body}",
                body.len()
            );
            socket.write_all(response.as_bytes()).await.unwrap();
            request_body
        });
        (format!("http://{addr}/tradename"), handle)
    }

    fn config(endpoint: String) -> ServiceConfig {
        ServiceConfig {
            backend: "http".into(),
            endpoint,
            timeout_secs: 5,
        }
    }

    #[tokio::test]
    async fn posts_request_and_reads_flags() {
        let (endpoint, server) = serve_once(
            "HTTP/1.1 200 OK",
            r#"{"hasNumber":false,"hasRegionName":true,"hasArabizedName":false,"hasGlobalName":false,"arabicEquivalentName":"دبي"}"#,
        )
        .await;
        let checker = HttpTradeNameChecker::new(&config(endpoint)).unwrap();
        let request = TradeNameRequest::for_name("Dubai Bakes");

        let check = checker.check(&request).await.unwrap();

        assert!(check.has_region_name);
        assert_eq!(check.arabic_equivalent_name.as_deref(), Some("دبي"));
        let sent: TradeNameRequest = serde_json::from_str(&server.await.unwrap()).unwrap();
        assert_eq!(sent, request);
    }

    #[tokio::test]
    async fn error_status_is_a_response_error() {
        let (endpoint, server) = serve_once("HTTP/1.1 500 Internal Server Error", "{}").await;
        let checker = HttpTradeNameChecker::new(&config(endpoint)).unwrap();

        let err = checker
            .check(&TradeNameRequest::for_name("Anything"))
            .await
            .unwrap_err();

        assert!(matches!(err, ServiceError::Response(ref msg) if msg.contains("500")));
        server.await.unwrap();
    }

    #[tokio::test]
    async fn unreachable_service_is_a_request_error() {
        let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
        let addr = listener.local_addr().unwrap();
        drop(listener);
        let checker = HttpTradeNameChecker::new(&config(format!("http://{addr}/tradename"))).unwrap();

        let err = checker
            .check(&TradeNameRequest::for_name("Anything"))
            .await
            .unwrap_err();

        assert!(matches!(err, ServiceError::Request(_)));
    }

    #[test]
    fn factory_requires_an_endpoint() {
        let result = HttpCheckerFactory.create(&config("  ".into()));

        assert!(matches!(result, Err(ServiceError::Configuration(_))));
    }

    #[test]
    fn factory_builds_http_checker() {
        let checker = HttpCheckerFactory
            .create(&config("http://localhost:8000/tradename".into()))
            .unwrap();

        assert_eq!(checker.backend_name(), "http");
    }
}
