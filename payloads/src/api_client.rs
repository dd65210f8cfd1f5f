use crate::{Resource, ResourceKey, requests, responses};
use reqwest::StatusCode;
use serde::Serialize;

type ReqwestResult = Result<reqwest::Response, reqwest::Error>;

/// An API client for interfacing with the backend.
pub struct APIClient {
    pub address: String,
    pub inner_client: reqwest::Client,
}

/// Helper methods for http actions
impl APIClient {
    fn format_url(&self, path: &str) -> String {
        format!("{}/api/{path}", &self.address)
    }

    async fn post(&self, path: &str, body: &impl Serialize) -> ReqwestResult {
        let request = self.inner_client.post(self.format_url(path)).json(body);

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

    async fn empty_get(&self, path: &str) -> ReqwestResult {
        let request = self.inner_client.get(self.format_url(path));

        #[cfg(target_arch = "wasm32")]
        let request = request.fetch_credentials_include();

        request.send().await
    }
}

/// Methods on the backend API
impl APIClient {
    /// Start a session; the backend answers with a session cookie.
    pub async fn login(
        &self,
        details: &requests::LoginCredentials,
    ) -> Result<(), ClientError> {
        let response = self.post("login", details).await?;
        ok_empty(response).await
    }

    pub async fn logout(&self) -> Result<(), ClientError> {
        let response = self.empty_post("logout").await?;
        ok_empty(response).await
    }

    /// Check if the session cookie is still valid.
    pub async fn login_check(&self) -> Result<bool, ClientError> {
        let response = self.empty_post("login_check").await?;
        match response.status() {
            StatusCode::OK => Ok(true),
            StatusCode::UNAUTHORIZED => Ok(false),
            _ => Err(ClientError::APIError(
                response.status(),
                response.text().await?,
            )),
        }
    }

    /// Get the current user's profile, including permission flags.
    pub async fn user_profile(
        &self,
    ) -> Result<responses::UserProfile, ClientError> {
        let response = self.empty_get("user_profile").await?;
        ok_body(response).await
    }

    pub async fn list_suppliers(
        &self,
    ) -> Result<Vec<responses::Supplier>, ClientError> {
        let response = self.empty_get("suppliers").await?;
        ok_body(response).await
    }

    pub async fn list_stock_locations(
        &self,
    ) -> Result<Vec<responses::StockLocation>, ClientError> {
        let response = self.empty_get("stock_locations").await?;
        ok_body(response).await
    }

    pub async fn list_finishing_units(
        &self,
    ) -> Result<Vec<responses::FinishingUnit>, ClientError> {
        let response = self.empty_get("finishing_units").await?;
        ok_body(response).await
    }

    pub async fn list_processing_orders(
        &self,
    ) -> Result<Vec<responses::ProcessingOrder>, ClientError> {
        let response = self.empty_get("processing_orders").await?;
        ok_body(response).await
    }

    pub async fn list_activity_log(
        &self,
    ) -> Result<Vec<responses::ActivityLogEntry>, ClientError> {
        let response = self.empty_get("activity_log").await?;
        ok_body(response).await
    }

    /// Fetch the collection named by `key`.
    ///
    /// Only the well-known keys have an endpoint; anything else is reported
    /// as [`ClientError::UnknownResource`] without touching the network.
    pub async fn fetch_resource(
        &self,
        key: &ResourceKey,
    ) -> Result<Resource, ClientError> {
        let resource = if *key == ResourceKey::SUPPLIERS {
            Resource::Suppliers(self.list_suppliers().await?)
        } else if *key == ResourceKey::STOCK_LOCATIONS {
            Resource::StockLocations(self.list_stock_locations().await?)
        } else if *key == ResourceKey::FINISHING_UNITS {
            Resource::FinishingUnits(self.list_finishing_units().await?)
        } else if *key == ResourceKey::PROCESSING_ORDERS {
            Resource::ProcessingOrders(self.list_processing_orders().await?)
        } else if *key == ResourceKey::ACTIVITY_LOG {
            Resource::ActivityLog(self.list_activity_log().await?)
        } else if *key == ResourceKey::PROFILE {
            Resource::Profile(self.user_profile().await?)
        } else {
            return Err(ClientError::UnknownResource(key.clone()));
        };
        Ok(resource)
    }
}

#[derive(Debug, thiserror::Error)]
pub enum ClientError {
    /// An unhandled API error to display, containing response text.
    #[error("{1}")]
    APIError(StatusCode, String),
    #[error("Network error. Please check your connection.")]
    Network(#[from] reqwest::Error),
    #[error("No endpoint for resource '{0}'")]
    UnknownResource(ResourceKey),
}

/// Deserialize a successful request into the desired type, or return an
/// appropriate error.
pub async fn ok_body<T: serde::de::DeserializeOwned>(
    response: reqwest::Response,
) -> Result<T, ClientError> {
    if !response.status().is_success() {
        return Err(ClientError::APIError(
            response.status(),
            response.text().await?,
        ));
    }
    Ok(response.json::<T>().await?)
}

/// Check that an empty response is OK, returning a ClientError if not.
pub async fn ok_empty(response: reqwest::Response) -> Result<(), ClientError> {
    if !response.status().is_success() {
        return Err(ClientError::APIError(
            response.status(),
            response.text().await?,
        ));
    }
    Ok(())
}
