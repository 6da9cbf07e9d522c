//! mindicador.cl client for the observed USD/CLP rate

use async_trait::async_trait;
use reqwest::Url;
use serde_json::Value;

use crate::domain::{DomainError, ExchangeRateClient};
use crate::infrastructure::config::DEFAULT_MINDICADOR_BASE_URL;

pub struct MindicadorClient {
    client: reqwest::Client,
    base_url: String,
}

impl MindicadorClient {
    pub fn new(base_url: impl Into<String>) -> Self {
        Self {
            client: reqwest::Client::new(),
            base_url: base_url.into(),
        }
    }

    /// `<base>/dolar/<token>`, with the token kept as one encoded segment
    fn dolar_url(&self, date_token: &str) -> Result<Url, DomainError> {
        let mut url = Url::parse(&self.base_url)
            .map_err(|e| DomainError::RateUnavailable(format!("Invalid base URL: {}", e)))?;

        url.path_segments_mut()
            .map_err(|_| {
                DomainError::RateUnavailable(format!("Base URL cannot have a path: {}", self.base_url))
            })?
            .pop_if_empty()
            .push("dolar")
            .push(date_token);

        Ok(url)
    }
}

impl Default for MindicadorClient {
    fn default() -> Self {
        Self::new(DEFAULT_MINDICADOR_BASE_URL)
    }
}

#[async_trait]
impl ExchangeRateClient for MindicadorClient {
    async fn dolar(&self, date_token: &str) -> Result<Value, DomainError> {
        let url = self.dolar_url(date_token)?;
        tracing::debug!("Fetching dolar rate from {}", url);

        let resp = self
            .client
            .get(url)
            .send()
            .await
            .map_err(|e| DomainError::RateUnavailable(e.to_string()))?;

        let status = resp.status();
        if !status.is_success() {
            return Err(DomainError::RateUnavailable(format!(
                "Request failed with status code {}",
                status.as_u16()
            )));
        }

        resp.json::<Value>()
            .await
            .map_err(|e| DomainError::RateUnavailable(format!("Failed to parse JSON: {}", e)))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;
    use wiremock::matchers::{method, path};
    use wiremock::{Mock, MockServer, ResponseTemplate};

    async fn mock_mindicador() -> MockServer {
        let server = MockServer::start().await;

        Mock::given(method("GET"))
            .and(path("/dolar/01-01-2023"))
            .respond_with(ResponseTemplate::new(200).set_body_json(json!({
                "version": "1.6.0",
                "autor": "mindicador.cl",
                "codigo": "dolar",
                "nombre": "Dólar observado",
                "unidad_medida": "Pesos",
                "serie": [{ "fecha": "2023-01-01T03:00:00.000Z", "valor": 855.86 }]
            })))
            .mount(&server)
            .await;

        Mock::given(method("GET"))
            .and(path("/dolar/error"))
            .respond_with(ResponseTemplate::new(500))
            .mount(&server)
            .await;

        Mock::given(method("GET"))
            .and(path("/dolar/not-found"))
            .respond_with(ResponseTemplate::new(404))
            .mount(&server)
            .await;

        Mock::given(method("GET"))
            .and(path("/dolar/garbage"))
            .respond_with(ResponseTemplate::new(200).set_body_string("<html>"))
            .mount(&server)
            .await;

        server
    }

    #[test]
    fn test_dolar_url_template() {
        let client = MindicadorClient::default();
        assert_eq!(
            client.dolar_url("01-01-2023").unwrap().as_str(),
            "https://mindicador.cl/api/dolar/01-01-2023"
        );
    }

    #[test]
    fn test_dolar_url_encodes_separators() {
        let client = MindicadorClient::default();
        let url = client.dolar_url("../uf?x=1#frag").unwrap();

        assert_eq!(url.path(), "/api/dolar/..%2Fuf%3Fx=1%23frag");
        assert!(url.query().is_none());
        assert!(url.fragment().is_none());
    }

    #[test]
    fn test_dolar_url_rejects_bad_base() {
        let client = MindicadorClient::new("not a url");
        assert!(matches!(
            client.dolar_url("01-01-2023"),
            Err(DomainError::RateUnavailable(_))
        ));
    }

    #[tokio::test]
    async fn test_dolar_token_cannot_leave_dolar_path() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .and(path("/uf"))
            .respond_with(ResponseTemplate::new(200).set_body_json(json!({ "codigo": "uf" })))
            .mount(&server)
            .await;
        let client = MindicadorClient::new(server.uri());

        let result = client.dolar("../uf").await;
        assert!(matches!(result, Err(DomainError::RateUnavailable(_))));

        let requests = server.received_requests().await.unwrap();
        assert_eq!(requests.len(), 1);
        assert!(requests[0].url.path().starts_with("/dolar/"));
    }

    #[tokio::test]
    async fn test_dolar_passes_payload_through() {
        let server = mock_mindicador().await;
        let client = MindicadorClient::new(server.uri());

        let doc = client.dolar("01-01-2023").await.expect("lookup failed");
        assert_eq!(doc["serie"][0]["valor"], json!(855.86));
        assert_eq!(doc["codigo"], "dolar");
    }

    #[tokio::test]
    async fn test_dolar_server_error() {
        let server = mock_mindicador().await;
        let client = MindicadorClient::new(server.uri());

        let err = client.dolar("error").await.unwrap_err();
        assert!(err.to_string().contains("Error al obtener el dólar"));
        assert!(err.to_string().contains("500"));
    }

    #[tokio::test]
    async fn test_dolar_not_found() {
        let server = mock_mindicador().await;
        let client = MindicadorClient::new(server.uri());

        let err = client.dolar("not-found").await.unwrap_err();
        assert!(matches!(err, DomainError::RateUnavailable(ref msg) if msg.contains("404")));
    }

    #[tokio::test]
    async fn test_dolar_invalid_body() {
        let server = mock_mindicador().await;
        let client = MindicadorClient::new(server.uri());

        let err = client.dolar("garbage").await.unwrap_err();
        assert!(matches!(err, DomainError::RateUnavailable(_)));
    }

    #[tokio::test]
    async fn test_dolar_transport_failure() {
        // Nothing listens on port 9 locally
        let client = MindicadorClient::new("http://127.0.0.1:9");

        let err = client.dolar("01-01-2023").await.unwrap_err();
        assert!(err.to_string().starts_with("Error al obtener el dólar: "));
    }
}
