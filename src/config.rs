use dotenv::dotenv;
use std::env;
use tracing::warn;

/// Default base URL of the Webflow CMS API.
pub const DEFAULT_API_ENDPOINT: &str = "https://api.webflow.com/v2";

/// Status-code policy for webhook error responses.
///
/// Form platforms such as Webflow show their own error page whenever the
/// webhook answers with a non-2xx status, so the default delivers every
/// outcome as HTTP 200 and leaves the `success` field as the source of
/// truth. `HttpStatus` switches to conventional 4xx/5xx codes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ErrorStatusPolicy {
    #[default]
    Always200,
    HttpStatus,
}

impl ErrorStatusPolicy {
    fn parse(value: &str) -> Option<Self> {
        match value.to_lowercase().as_str() {
            "always200" => Some(ErrorStatusPolicy::Always200),
            "http_status" | "httpstatus" => Some(ErrorStatusPolicy::HttpStatus),
            _ => None,
        }
    }
}

/// Application configuration, read once at startup and passed into the
/// handler state and the API client.
///
/// The three Webflow values are kept as `Option` so the service can boot
/// without them: the webhook platform expects the endpoint to answer, and
/// `GET /` reports which values are set. Submissions are rejected until
/// all three are present.
#[derive(Debug, Clone)]
pub struct AppConfig {
    pub api_token: Option<String>,
    pub site_id: Option<String>,
    pub collection_id: Option<String>,
    pub api_endpoint: String,
    pub create_as_draft: bool,
    pub error_status_policy: ErrorStatusPolicy,
    pub port: u16,
}

impl AppConfig {
    /// Load configuration from the process environment (and `.env` if present).
    pub fn from_env() -> Self {
        dotenv().ok();

        let error_status_policy = env::var("ERROR_STATUS_POLICY")
            .ok()
            .and_then(|value| {
                let policy = ErrorStatusPolicy::parse(&value);
                if policy.is_none() {
                    warn!("Unrecognized ERROR_STATUS_POLICY value: {}", value);
                }
                policy
            })
            .unwrap_or_default();

        Self {
            api_token: env::var("WEBFLOW_API_TOKEN").ok().filter(|v| !v.is_empty()),
            site_id: env::var("WEBFLOW_SITE_ID").ok().filter(|v| !v.is_empty()),
            collection_id: env::var("WEBFLOW_COLLECTION_ID")
                .ok()
                .filter(|v| !v.is_empty()),
            api_endpoint: env::var("WEBFLOW_API_ENDPOINT")
                .unwrap_or_else(|_| DEFAULT_API_ENDPOINT.to_string()),
            create_as_draft: env::var("CREATE_AS_DRAFT")
                .map(|v| v.to_lowercase() == "true")
                .unwrap_or(false),
            error_status_policy,
            port: env::var("PORT")
                .ok()
                .and_then(|v| v.parse().ok())
                .unwrap_or(3000),
        }
    }

    /// Whether all values required to create CMS items are present.
    pub fn is_configured(&self) -> bool {
        self.api_token.is_some() && self.site_id.is_some() && self.collection_id.is_some()
    }

    /// One-time startup validation: warn about each missing value.
    pub fn log_status(&self) {
        let values = [
            ("WEBFLOW_API_TOKEN", &self.api_token),
            ("WEBFLOW_SITE_ID", &self.site_id),
            ("WEBFLOW_COLLECTION_ID", &self.collection_id),
        ];
        for (name, value) in values {
            if value.is_none() {
                warn!("{} is not set - form submissions will be rejected", name);
            }
        }
    }
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            api_token: None,
            site_id: None,
            collection_id: None,
            api_endpoint: DEFAULT_API_ENDPOINT.to_string(),
            create_as_draft: false,
            error_status_policy: ErrorStatusPolicy::default(),
            port: 3000,
        }
    }
}
