use serde::Serialize;
use serde_json::{Map, Value};

/// Raw webhook payload: whatever the form posted. Keys vary in casing and
/// language, checkboxes arrive as booleans or the strings "true"/"false".
pub type FormSubmission = Map<String, Value>;

// Response structure for the webhook endpoint
#[derive(Debug, Serialize)]
pub struct WebhookResponse {
    pub success: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub message: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
    #[serde(rename = "itemId", skip_serializing_if = "Option::is_none")]
    pub item_id: Option<String>,
}

impl WebhookResponse {
    pub fn created(item_id: String) -> Self {
        Self {
            success: true,
            message: Some("CMS entry created successfully".to_string()),
            error: None,
            item_id: Some(item_id),
        }
    }

    /// Failure with a single error line.
    pub fn rejected(error: impl Into<String>) -> Self {
        Self {
            success: false,
            message: None,
            error: Some(error.into()),
            item_id: None,
        }
    }

    /// Failure with an error category and the underlying message.
    pub fn failed(error: impl Into<String>, detail: impl Into<String>) -> Self {
        Self {
            success: false,
            message: Some(detail.into()),
            error: Some(error.into()),
            item_id: None,
        }
    }
}

// Liveness/config-check payload for GET on the webhook route
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ServiceStatus {
    pub message: &'static str,
    pub has_token: bool,
    pub has_site_id: bool,
    pub has_collection_id: bool,
    pub endpoint: &'static str,
    pub method: &'static str,
}
