use crate::{OrderId, ProductId, requests, responses};
use reqwest::StatusCode;
use serde::Serialize;

type ReqwestResult = Result<reqwest::Response, reqwest::Error>;

/// An API client for the backend integration proxy.
///
/// Every method is a single attempt against one proxy endpoint; callers
/// decide whether and when to retry.
pub struct APIClient {
    pub address: String,
    pub inner_client: reqwest::Client,
}

/// Helper methods for http actions
impl APIClient {
    fn format_url(&self, path: &str) -> String {
        format!("{}/integrations/{path}", &self.address)
    }

    async fn empty_get(&self, path: &str) -> ReqwestResult {
        let request = self.inner_client.get(self.format_url(path));

        #[cfg(target_arch = "wasm32")]
        let request = request.fetch_credentials_include();

        request.send().await
    }

    async fn get_with_query(
        &self,
        path: &str,
        query: &impl Serialize,
    ) -> ReqwestResult {
        let request =
            self.inner_client.get(self.format_url(path)).query(query);

        #[cfg(target_arch = "wasm32")]
        let request = request.fetch_credentials_include();

        request.send().await
    }

    async fn empty_post(&self, path: &str) -> ReqwestResult {
        let request = self.inner_client.post(self.format_url(path));

        #[cfg(target_arch = "wasm32")]
        let request = request.fetch_credentials_include();

        request.send().await
    }
}

/// Methods on the integration proxy API
impl APIClient {
    /// Whether the proxy currently holds a valid ERP session.
    pub async fn auth_status(
        &self,
    ) -> Result<responses::AuthStatus, ClientError> {
        let response = self.empty_get("auth/status/").await?;
        ok_body(response).await
    }

    /// Request the URL that starts the ERP authorization flow.
    pub async fn auth_start(
        &self,
    ) -> Result<responses::AuthStart, ClientError> {
        let response = self.empty_get("auth/start/").await?;
        ok_body(response).await
    }

    /// Invalidate the proxy's ERP session.
    pub async fn auth_logout(&self) -> Result<(), ClientError> {
        let response = self.empty_post("auth/logout/").await?;
        ok_empty(response).await
    }

    pub async fn dashboard_summary(
        &self,
    ) -> Result<responses::DashboardSummary, ClientError> {
        let response = self.empty_get("dashboard/").await?;
        ok_body(response).await
    }

    pub async fn health_check(
        &self,
    ) -> Result<responses::HealthCheck, ClientError> {
        let response = self.empty_get("health/").await?;
        ok_body(response).await
    }

    pub async fn list_products(
        &self,
        query: &requests::ProductsQuery,
    ) -> Result<responses::Paged<responses::Product>, ClientError> {
        let response = self.get_with_query("products/", query).await?;
        ok_body(response).await
    }

    pub async fn get_product(
        &self,
        product_id: &ProductId,
    ) -> Result<responses::Detail<responses::Product>, ClientError> {
        let response =
            self.empty_get(&format!("products/{product_id}/")).await?;
        ok_body(response).await
    }

    pub async fn list_orders(
        &self,
        query: &requests::OrdersQuery,
    ) -> Result<responses::Paged<responses::Order>, ClientError> {
        let response = self.get_with_query("orders/", query).await?;
        ok_body(response).await
    }

    pub async fn get_order(
        &self,
        order_id: &OrderId,
    ) -> Result<responses::Detail<responses::Order>, ClientError> {
        let response = self.empty_get(&format!("orders/{order_id}/")).await?;
        ok_body(response).await
    }

    pub async fn list_categories(
        &self,
        query: &requests::CategoriesQuery,
    ) -> Result<responses::Paged<responses::Category>, ClientError> {
        let response = self.get_with_query("categories/", query).await?;
        ok_body(response).await
    }

    pub async fn list_contacts(
        &self,
        query: &requests::ContactsQuery,
    ) -> Result<responses::Paged<responses::Contact>, ClientError> {
        let response = self.get_with_query("contacts/", query).await?;
        ok_body(response).await
    }
}

#[derive(Debug, thiserror::Error)]
pub enum ClientError {
    /// An unhandled API error to display, with the message extracted from
    /// the response body.
    #[error("{1}")]
    APIError(StatusCode, String),
    #[error("Erro de conexão. Verifique sua internet.")]
    Network(#[from] reqwest::Error),
}

/// Error responses carry a JSON body with an `error` string field.
#[derive(serde::Deserialize)]
struct ErrorBody {
    #[serde(default)]
    error: Option<String>,
}

/// Extract the human-readable message from an error response body, falling
/// back to a generic message when the body is not the expected JSON shape.
pub fn error_message(body: &str) -> String {
    serde_json::from_str::<ErrorBody>(body)
        .ok()
        .and_then(|b| b.error)
        .unwrap_or_else(|| "Erro na requisição".to_string())
}

async fn api_error(response: reqwest::Response) -> ClientError {
    let status = response.status();
    let message = match response.text().await {
        Ok(body) => error_message(&body),
        Err(_) => "Erro na requisição".to_string(),
    };
    tracing::error!(%status, "backend request failed: {message}");
    ClientError::APIError(status, message)
}

/// Deserialize a successful request into the desired type, or return an
/// appropriate error.
pub async fn ok_body<T: serde::de::DeserializeOwned>(
    response: reqwest::Response,
) -> Result<T, ClientError> {
    if !response.status().is_success() {
        return Err(api_error(response).await);
    }
    Ok(response.json::<T>().await?)
}

/// Check that a response is OK, discarding its body.
pub async fn ok_empty(response: reqwest::Response) -> Result<(), ClientError> {
    if !response.status().is_success() {
        return Err(api_error(response).await);
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn error_message_prefers_body_error_field() {
        assert_eq!(
            error_message(r#"{"error": "Token expirado", "details": "x"}"#),
            "Token expirado"
        );
    }

    #[test]
    fn error_message_falls_back_when_field_is_absent() {
        assert_eq!(error_message(r#"{"details": "x"}"#), "Erro na requisição");
        assert_eq!(error_message("<html>502</html>"), "Erro na requisição");
        assert_eq!(error_message(""), "Erro na requisição");
    }
}
