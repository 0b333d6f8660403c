use async_trait::async_trait;
use reqwest::{Client, Response};
use serde::de::DeserializeOwned;
use std::sync::Arc;
use tracing::debug;

use crate::error::GatewayError;
use crate::models::{ApiConfig, UserId, Usuario};

/// Operations against the remote users collection.
///
/// Implementations translate each call into exactly one request and hand
/// back the decoded body. Failures are returned as-is; no retries.
#[async_trait]
pub trait UserGateway: Send + Sync {
    /// Fetch every user, in server order
    async fn list(&self) -> Result<Vec<Usuario>, GatewayError>;

    /// Create a user; the returned record carries the server-assigned id
    async fn create(&self, usuario: &Usuario) -> Result<Usuario, GatewayError>;

    /// Replace the user stored under `id`.
    ///
    /// Any 2xx reply counts as stored. The echoed record is `None` when the
    /// backend answers with an empty body or one that is not a user.
    async fn update(&self, id: &UserId, usuario: &Usuario) -> Result<Option<Usuario>, GatewayError>;

    /// Remove the user stored under `id`
    async fn delete(&self, id: &UserId) -> Result<(), GatewayError>;
}

#[async_trait]
impl<G: UserGateway + ?Sized> UserGateway for Arc<G> {
    async fn list(&self) -> Result<Vec<Usuario>, GatewayError> {
        (**self).list().await
    }

    async fn create(&self, usuario: &Usuario) -> Result<Usuario, GatewayError> {
        (**self).create(usuario).await
    }

    async fn update(&self, id: &UserId, usuario: &Usuario) -> Result<Option<Usuario>, GatewayError> {
        (**self).update(id, usuario).await
    }

    async fn delete(&self, id: &UserId) -> Result<(), GatewayError> {
        (**self).delete(id).await
    }
}

/// REST gateway backed by reqwest
pub struct HttpUserGateway {
    client: Client,
    base_url: String,
}

impl HttpUserGateway {
    /// Create a gateway for the collection at `config.url`
    pub fn new(config: &ApiConfig) -> Result<Self, GatewayError> {
        let client = Client::builder()
            .build()
            .map_err(|e| GatewayError::RequestFailed(e.to_string()))?;

        Ok(Self {
            client,
            base_url: config.url.trim_end_matches('/').to_string(),
        })
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    /// URL of a single user: `{base}/{id}`
    pub fn item_url(&self, id: &UserId) -> String {
        format!("{}/{}", self.base_url, id)
    }

    fn connect_error(&self, e: reqwest::Error) -> GatewayError {
        if e.is_connect() {
            GatewayError::ConnectionRefused(format!(
                "Could not connect to backend at {}. Is it running?",
                self.base_url
            ))
        } else {
            GatewayError::from(e)
        }
    }

    async fn check_status(response: Response) -> Result<Response, GatewayError> {
        if !response.status().is_success() {
            let status = response.status().as_u16();
            let message = response.text().await.unwrap_or_default();
            return Err(GatewayError::HttpError { status, message });
        }
        Ok(response)
    }

    async fn decode<T: DeserializeOwned>(response: Response) -> Result<T, GatewayError> {
        let response = Self::check_status(response).await?;
        response
            .json()
            .await
            .map_err(|e| GatewayError::ParseError(e.to_string()))
    }
}

#[async_trait]
impl UserGateway for HttpUserGateway {
    async fn list(&self) -> Result<Vec<Usuario>, GatewayError> {
        debug!("GET {}", self.base_url);
        let response = self
            .client
            .get(&self.base_url)
            .send()
            .await
            .map_err(|e| self.connect_error(e))?;
        Self::decode(response).await
    }

    async fn create(&self, usuario: &Usuario) -> Result<Usuario, GatewayError> {
        debug!("POST {}", self.base_url);
        let response = self
            .client
            .post(&self.base_url)
            .json(usuario)
            .send()
            .await
            .map_err(|e| self.connect_error(e))?;
        Self::decode(response).await
    }

    async fn update(&self, id: &UserId, usuario: &Usuario) -> Result<Option<Usuario>, GatewayError> {
        let url = self.item_url(id);
        debug!("PUT {}", url);
        let response = self
            .client
            .put(&url)
            .json(usuario)
            .send()
            .await
            .map_err(|e| self.connect_error(e))?;
        let response = Self::check_status(response).await?;
        let body = response.bytes().await?;
        Ok(echoed_user(&body))
    }

    async fn delete(&self, id: &UserId) -> Result<(), GatewayError> {
        let url = self.item_url(id);
        debug!("DELETE {}", url);
        let response = self
            .client
            .delete(&url)
            .send()
            .await
            .map_err(|e| self.connect_error(e))?;
        Self::check_status(response).await?;
        Ok(())
    }
}

/// Record echoed in a 2xx update reply, if the body holds one
fn echoed_user(body: &[u8]) -> Option<Usuario> {
    if body.iter().all(u8::is_ascii_whitespace) {
        return None;
    }
    match serde_json::from_slice(body) {
        Ok(usuario) => Some(usuario),
        Err(e) => {
            debug!("Update reply is not a user record: {}", e);
            None
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn gateway(url: &str) -> HttpUserGateway {
        HttpUserGateway::new(&ApiConfig {
            url: url.to_string(),
        })
        .unwrap()
    }

    #[test]
    fn test_item_url_numeric_id() {
        let gw = gateway("http://localhost:5000/usuarios");
        assert_eq!(gw.item_url(&UserId::Number(3)), "http://localhost:5000/usuarios/3");
    }

    #[test]
    fn test_item_url_text_id() {
        let gw = gateway("http://localhost:5000/usuarios");
        assert_eq!(
            gw.item_url(&UserId::from("f3a9")),
            "http://localhost:5000/usuarios/f3a9"
        );
    }

    #[test]
    fn test_echoed_user_empty_body() {
        assert!(echoed_user(b"").is_none());
        assert!(echoed_user(b"  \n").is_none());
    }

    #[test]
    fn test_echoed_user_not_a_record() {
        assert!(echoed_user(b"[1, 2]").is_none());
        assert!(echoed_user(b"updated").is_none());
    }

    #[test]
    fn test_echoed_user_record() {
        let body = br#"{"nome":"Ana","sobrenome":"Silva","email":"a@x.com","cpf":"1","id":1}"#;
        let usuario = echoed_user(body).unwrap();
        assert_eq!(usuario.id, Some(UserId::Number(1)));
    }

    #[test]
    fn test_trailing_slash_trimmed() {
        let gw = gateway("http://localhost:5000/usuarios/");
        assert_eq!(gw.base_url(), "http://localhost:5000/usuarios");
        assert_eq!(gw.item_url(&UserId::Number(1)), "http://localhost:5000/usuarios/1");
    }
}
