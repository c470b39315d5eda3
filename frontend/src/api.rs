//! The single data-access module: every REST call the app makes goes
//! through here, one async function per entity/verb pair.
//!
//! The backend lives behind the same origin under `/api`. Failed calls are
//! normalized into [`ApiError`]: non-2xx responses carry the backend's
//! `detail` message when the body provides one, so callers can discriminate
//! delete conflicts without touching the transport layer.

use gloo_net::http::{Request, Response};
use serde::de::DeserializeOwned;
use thiserror::Error;

use common::requests::ApiErrorBody;

const API_BASE: &str = "/api";

#[derive(Error, Clone, Debug, PartialEq)]
pub enum ApiError {
    #[error("{detail}")]
    Status { status: u16, detail: String },
    #[error("network error: {0}")]
    Network(String),
    #[error("unexpected response: {0}")]
    Decode(String),
}

impl ApiError {
    /// The message shown to the user and fed into delete-failure
    /// classification.
    pub fn detail(&self) -> String {
        self.to_string()
    }
}

async fn ok_or_status(response: Response) -> Result<Response, ApiError> {
    if response.ok() {
        return Ok(response);
    }
    let status = response.status();
    let raw = response.text().await.unwrap_or_default();
    let detail = serde_json::from_str::<ApiErrorBody>(&raw)
        .map(|body| body.detail)
        .unwrap_or(raw);
    Err(ApiError::Status { status, detail })
}

async fn decode<T: DeserializeOwned>(response: Response) -> Result<T, ApiError> {
    response
        .json::<T>()
        .await
        .map_err(|err| ApiError::Decode(err.to_string()))
}

async fn get_json<T: DeserializeOwned>(
    path: &str,
    query: &[(&str, String)],
) -> Result<T, ApiError> {
    let request = Request::get(&format!("{API_BASE}{path}"))
        .query(query.iter().map(|(k, v)| (*k, v.as_str())));
    let response = request
        .send()
        .await
        .map_err(|err| ApiError::Network(err.to_string()))?;
    decode(ok_or_status(response).await?).await
}

async fn delete_entity(path: &str) -> Result<(), ApiError> {
    let response = Request::delete(&format!("{API_BASE}{path}"))
        .send()
        .await
        .map_err(|err| ApiError::Network(err.to_string()))?;
    ok_or_status(response).await.map(|_| ())
}

pub mod investors {
    use common::model::investor::Investor;
    use common::requests::InvestorPayload;
    use gloo_net::http::Request;

    use super::{decode, delete_entity, get_json, ok_or_status, ApiError, API_BASE};

    pub async fn list() -> Result<Vec<Investor>, ApiError> {
        get_json("/investors", &[]).await
    }

    pub async fn create(payload: &InvestorPayload) -> Result<Investor, ApiError> {
        let request = Request::post(&format!("{API_BASE}/investors"))
            .json(payload)
            .map_err(|err| ApiError::Decode(err.to_string()))?;
        let response = request
            .send()
            .await
            .map_err(|err| ApiError::Network(err.to_string()))?;
        decode(ok_or_status(response).await?).await
    }

    pub async fn update(id: &str, payload: &InvestorPayload) -> Result<Investor, ApiError> {
        let request = Request::put(&format!("{API_BASE}/investors/{id}"))
            .json(payload)
            .map_err(|err| ApiError::Decode(err.to_string()))?;
        let response = request
            .send()
            .await
            .map_err(|err| ApiError::Network(err.to_string()))?;
        decode(ok_or_status(response).await?).await
    }

    pub async fn delete(id: &str) -> Result<(), ApiError> {
        delete_entity(&format!("/investors/{id}")).await
    }
}

pub mod investments {
    use common::model::investment::{Investment, InvestmentType};
    use common::requests::InvestmentPayload;
    use gloo_net::http::Request;

    use super::{decode, delete_entity, get_json, ok_or_status, ApiError, API_BASE};

    /// Lists investments, optionally narrowed by owner and type on the
    /// server side.
    pub async fn list(
        investor_id: Option<&str>,
        investment_type: Option<InvestmentType>,
    ) -> Result<Vec<Investment>, ApiError> {
        let mut query: Vec<(&str, String)> = Vec::new();
        if let Some(id) = investor_id {
            query.push(("investor_id", id.to_string()));
        }
        if let Some(kind) = investment_type {
            query.push(("investment_type", kind.as_str().to_string()));
        }
        get_json("/investments", &query).await
    }

    pub async fn create(payload: &InvestmentPayload) -> Result<Investment, ApiError> {
        let request = Request::post(&format!("{API_BASE}/investments"))
            .json(payload)
            .map_err(|err| ApiError::Decode(err.to_string()))?;
        let response = request
            .send()
            .await
            .map_err(|err| ApiError::Network(err.to_string()))?;
        decode(ok_or_status(response).await?).await
    }

    pub async fn delete(id: &str) -> Result<(), ApiError> {
        delete_entity(&format!("/investments/{id}")).await
    }
}

pub mod custom_fields {
    use common::model::custom_field::{CustomField, EntityKind};
    use common::requests::CustomFieldPayload;
    use gloo_net::http::Request;

    use super::{decode, delete_entity, get_json, ok_or_status, ApiError, API_BASE};

    pub async fn list(entity: EntityKind) -> Result<Vec<CustomField>, ApiError> {
        get_json(
            "/custom-fields",
            &[("entity_type", entity.as_str().to_string())],
        )
        .await
    }

    pub async fn create(payload: &CustomFieldPayload) -> Result<CustomField, ApiError> {
        let request = Request::post(&format!("{API_BASE}/custom-fields"))
            .json(payload)
            .map_err(|err| ApiError::Decode(err.to_string()))?;
        let response = request
            .send()
            .await
            .map_err(|err| ApiError::Network(err.to_string()))?;
        decode(ok_or_status(response).await?).await
    }

    pub async fn delete(id: &str) -> Result<(), ApiError> {
        delete_entity(&format!("/custom-fields/{id}")).await
    }
}

pub mod dashboard {
    use common::model::dashboard::DashboardStats;

    use super::{get_json, ApiError};

    pub async fn stats() -> Result<DashboardStats, ApiError> {
        get_json("/dashboard/stats", &[]).await
    }
}
