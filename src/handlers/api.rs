use axum::{
    body::Bytes,
    extract::State,
    http::{header, HeaderMap, StatusCode},
    response::Json,
};
use serde_json::Value;
use std::sync::Arc;
use tracing::{debug, error, info};

use crate::client::WebflowClient;
use crate::config::{AppConfig, ErrorStatusPolicy};
use crate::error::WebflowError;
use crate::models::cms::{Collection, Site};
use crate::models::form::{FormSubmission, ServiceStatus, WebhookResponse};
use crate::services::field_mapper::{map_form_fields, EVENT_FIELD_RULES};

// AppState struct containing shared resources
pub struct AppState {
    pub client: WebflowClient,
    pub config: AppConfig,
}

/// Select the wire status for a webhook outcome according to the
/// configured policy. Under `Always200` the JSON `success` field is the
/// only failure signal the caller gets.
fn webhook_reply(
    policy: ErrorStatusPolicy,
    status: StatusCode,
    response: WebhookResponse,
) -> (StatusCode, Json<WebhookResponse>) {
    match policy {
        ErrorStatusPolicy::Always200 => (StatusCode::OK, Json(response)),
        ErrorStatusPolicy::HttpStatus => (status, Json(response)),
    }
}

/// Parse the webhook body as JSON or, when the content type says so, as a
/// form-encoded key/value list.
fn parse_submission(content_type: Option<&str>, body: &[u8]) -> Result<FormSubmission, String> {
    let is_form = content_type
        .map(|ct| ct.contains("application/x-www-form-urlencoded"))
        .unwrap_or(false);

    if is_form {
        let pairs: Vec<(String, String)> =
            serde_html_form::from_bytes(body).map_err(|err| err.to_string())?;
        Ok(pairs
            .into_iter()
            .map(|(key, value)| (key, Value::String(value)))
            .collect())
    } else {
        serde_json::from_slice(body).map_err(|err| err.to_string())
    }
}

// Form submission webhook handler
pub async fn handle_form_submission(
    State(state): State<Arc<AppState>>,
    headers: HeaderMap,
    body: Bytes,
) -> (StatusCode, Json<WebhookResponse>) {
    let policy = state.config.error_status_policy;

    let content_type = headers
        .get(header::CONTENT_TYPE)
        .and_then(|value| value.to_str().ok());

    let submission = match parse_submission(content_type, &body) {
        Ok(submission) => submission,
        Err(err) => {
            error!("Failed to parse form submission body: {}", err);
            return webhook_reply(
                policy,
                StatusCode::BAD_REQUEST,
                WebhookResponse::failed("Invalid form submission body", err),
            );
        }
    };

    info!("Received form submission with {} fields", submission.len());
    debug!("Received form data: {:?}", submission);

    let (Some(_token), Some(_site_id), Some(collection_id)) = (
        state.config.api_token.as_deref(),
        state.config.site_id.as_deref(),
        state.config.collection_id.as_deref(),
    ) else {
        error!("Missing required environment variables");
        return webhook_reply(
            policy,
            StatusCode::INTERNAL_SERVER_ERROR,
            WebhookResponse::rejected(
                "Server configuration error. Please check environment variables.",
            ),
        );
    };

    let field_data = map_form_fields(EVENT_FIELD_RULES, &submission);
    debug!("Processed CMS data: {:?}", field_data);

    match state
        .client
        .create_item(collection_id, &field_data, state.config.create_as_draft)
        .await
    {
        Ok(item) => {
            info!("Successfully created CMS item {}", item.id);
            webhook_reply(policy, StatusCode::OK, WebhookResponse::created(item.id))
        }
        Err(err) => {
            error!("Error processing form submission: {}", err);
            let status = match &err {
                WebflowError::Api { .. } => StatusCode::BAD_GATEWAY,
                _ => StatusCode::INTERNAL_SERVER_ERROR,
            };
            webhook_reply(
                policy,
                status,
                WebhookResponse::failed("Internal server error", err.to_string()),
            )
        }
    }
}

// Liveness/config check for the webhook route
pub async fn service_status(State(state): State<Arc<AppState>>) -> Json<ServiceStatus> {
    Json(ServiceStatus {
        message: "Webflow form handler is running",
        has_token: state.config.api_token.is_some(),
        has_site_id: state.config.site_id.is_some(),
        has_collection_id: state.config.collection_id.is_some(),
        endpoint: "/",
        method: "POST",
    })
}

// CORS preflight: unconditionally successful, no body, nothing invoked
pub async fn preflight() -> StatusCode {
    StatusCode::OK
}

// Fallback for unsupported methods on the webhook route
pub async fn method_not_allowed(
    State(state): State<Arc<AppState>>,
) -> (StatusCode, Json<WebhookResponse>) {
    webhook_reply(
        state.config.error_status_policy,
        StatusCode::METHOD_NOT_ALLOWED,
        WebhookResponse::rejected("Method not allowed. Use POST."),
    )
}

// List collections endpoint (development mode only)
pub async fn list_collections(
    State(state): State<Arc<AppState>>,
) -> Result<Json<Vec<Collection>>, StatusCode> {
    let Some(site_id) = state.config.site_id.as_deref() else {
        error!("WEBFLOW_SITE_ID is not set");
        return Err(StatusCode::SERVICE_UNAVAILABLE);
    };

    match state.client.list_collections(site_id).await {
        Ok(collections) => {
            info!("Successfully retrieved {} collections", collections.len());
            Ok(Json(collections))
        }
        Err(err) => {
            error!("Failed to retrieve collections: {}", err);
            Err(StatusCode::INTERNAL_SERVER_ERROR)
        }
    }
}

// List sites endpoint (development mode only)
pub async fn list_sites(State(state): State<Arc<AppState>>) -> Result<Json<Vec<Site>>, StatusCode> {
    match state.client.list_sites().await {
        Ok(sites) => {
            info!("Successfully retrieved {} sites", sites.len());
            Ok(Json(sites))
        }
        Err(err) => {
            error!("Failed to retrieve sites: {}", err);
            Err(StatusCode::INTERNAL_SERVER_ERROR)
        }
    }
}
