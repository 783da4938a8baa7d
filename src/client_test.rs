#[cfg(test)]
mod client_tests {
    use axum::{
        body::to_bytes,
        extract::{Request, State},
        http::StatusCode,
        response::IntoResponse,
        Json, Router,
    };
    use serde_json::{json, Map, Value};
    use std::sync::{Arc, Mutex};

    use crate::client::WebflowClient;
    use crate::config::AppConfig;
    use crate::error::WebflowError;

    struct RecordedRequest {
        method: String,
        path: String,
        authorization: Option<String>,
        accept_version: Option<String>,
        body: Value,
    }

    /// Stand-in for the Webflow API: records every request and answers
    /// with a canned status and body.
    struct MockWebflowApi {
        requests: Mutex<Vec<RecordedRequest>>,
        status: StatusCode,
        response: Value,
    }

    async fn capture(
        State(mock): State<Arc<MockWebflowApi>>,
        request: Request,
    ) -> impl IntoResponse {
        let (parts, body) = request.into_parts();
        let bytes = to_bytes(body, usize::MAX).await.unwrap();
        let body = if bytes.is_empty() {
            Value::Null
        } else {
            serde_json::from_slice(&bytes).unwrap_or(Value::Null)
        };

        let header = |name: &str| {
            parts
                .headers
                .get(name)
                .and_then(|value| value.to_str().ok())
                .map(String::from)
        };

        mock.requests.lock().unwrap().push(RecordedRequest {
            method: parts.method.to_string(),
            path: parts.uri.path().to_string(),
            authorization: header("authorization"),
            accept_version: header("accept-version"),
            body,
        });

        (mock.status, Json(mock.response.clone()))
    }

    async fn spawn_mock_api(status: StatusCode, response: Value) -> (Arc<MockWebflowApi>, String) {
        let mock = Arc::new(MockWebflowApi {
            requests: Mutex::new(Vec::new()),
            status,
            response,
        });

        let app = Router::new()
            .fallback(capture)
            .with_state(Arc::clone(&mock));

        let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
        let endpoint = format!("http://{}", listener.local_addr().unwrap());
        tokio::spawn(async move {
            axum::serve(listener, app).await.unwrap();
        });

        (mock, endpoint)
    }

    fn test_client(token: Option<&str>, endpoint: &str) -> WebflowClient {
        let config = AppConfig {
            api_token: token.map(String::from),
            api_endpoint: endpoint.to_string(),
            ..AppConfig::default()
        };
        WebflowClient::new(&config)
    }

    #[tokio::test]
    async fn test_create_item() {
        let (mock, endpoint) = spawn_mock_api(StatusCode::OK, json!({"id": "abc123"})).await;
        let client = test_client(Some("test-token"), &endpoint);

        let mut field_data = Map::new();
        field_data.insert("Text".to_string(), json!("Offenes Atelier"));
        field_data.insert("Aufzug".to_string(), json!("Aufzug"));

        let item = client.create_item("col-1", &field_data, false).await.unwrap();
        assert_eq!(item.id, "abc123");

        let requests = mock.requests.lock().unwrap();
        assert_eq!(requests.len(), 1);

        let request = &requests[0];
        assert_eq!(request.method, "POST");
        assert_eq!(request.path, "/collections/col-1/items");
        assert_eq!(request.authorization.as_deref(), Some("Bearer test-token"));
        assert_eq!(request.accept_version.as_deref(), Some("1.0.0"));
        assert_eq!(request.body["isDraft"], json!(false));
        assert_eq!(request.body["fieldData"]["Text"], json!("Offenes Atelier"));
        assert_eq!(request.body["fieldData"]["Aufzug"], json!("Aufzug"));
    }

    #[tokio::test]
    async fn test_create_item_as_draft() {
        let (mock, endpoint) = spawn_mock_api(StatusCode::OK, json!({"id": "abc123"})).await;
        let client = test_client(Some("test-token"), &endpoint);

        client
            .create_item("col-1", &Map::new(), true)
            .await
            .unwrap();

        let requests = mock.requests.lock().unwrap();
        assert_eq!(requests[0].body["isDraft"], json!(true));
    }

    #[tokio::test]
    async fn test_create_item_api_error() {
        let (mock, endpoint) = spawn_mock_api(
            StatusCode::UNPROCESSABLE_ENTITY,
            json!({"message": "Validation failure"}),
        )
        .await;
        let client = test_client(Some("test-token"), &endpoint);

        let err = client
            .create_item("col-1", &Map::new(), false)
            .await
            .unwrap_err();

        match &err {
            WebflowError::Api { status, body } => {
                assert_eq!(status.as_u16(), 422);
                assert!(body.contains("Validation failure"));
            }
            other => panic!("Expected API error, got {:?}", other),
        }

        // The rendered message carries status and body for the caller
        let message = err.to_string();
        assert!(message.contains("422"));
        assert!(message.contains("Validation failure"));

        assert_eq!(mock.requests.lock().unwrap().len(), 1);
    }

    #[tokio::test]
    async fn test_missing_token_fails_before_network() {
        let (mock, endpoint) = spawn_mock_api(StatusCode::OK, json!({"id": "abc123"})).await;
        let client = test_client(None, &endpoint);

        let result = client.create_item("col-1", &Map::new(), false).await;
        assert!(matches!(
            result,
            Err(WebflowError::MissingConfig("WEBFLOW_API_TOKEN"))
        ));

        assert!(client.list_collections("site-1").await.is_err());
        assert!(client.list_sites().await.is_err());

        // No request ever left the client
        assert_eq!(mock.requests.lock().unwrap().len(), 0);
    }

    #[tokio::test]
    async fn test_list_collections() {
        let (mock, endpoint) = spawn_mock_api(
            StatusCode::OK,
            json!([
                {"id": "c1", "displayName": "Veranstaltungen", "slug": "veranstaltungen"},
                {"id": "c2", "displayName": "Orte", "slug": "orte"}
            ]),
        )
        .await;
        let client = test_client(Some("test-token"), &endpoint);

        let collections = client.list_collections("site-1").await.unwrap();
        assert_eq!(collections.len(), 2);
        assert_eq!(collections[0].id, "c1");
        assert_eq!(collections[0].display_name, "Veranstaltungen");
        assert_eq!(collections[1].slug, "orte");

        let requests = mock.requests.lock().unwrap();
        assert_eq!(requests[0].method, "GET");
        assert_eq!(requests[0].path, "/sites/site-1/collections");
        assert_eq!(requests[0].accept_version.as_deref(), Some("1.0.0"));
    }

    #[tokio::test]
    async fn test_list_sites() {
        let (mock, endpoint) = spawn_mock_api(
            StatusCode::OK,
            json!([
                {"id": "s1", "displayName": "Kulturhaus", "shortName": "kulturhaus"}
            ]),
        )
        .await;
        let client = test_client(Some("test-token"), &endpoint);

        let sites = client.list_sites().await.unwrap();
        assert_eq!(sites.len(), 1);
        assert_eq!(sites[0].id, "s1");
        assert_eq!(sites[0].display_name, "Kulturhaus");
        assert_eq!(sites[0].short_name, "kulturhaus");

        let requests = mock.requests.lock().unwrap();
        assert_eq!(requests[0].method, "GET");
        assert_eq!(requests[0].path, "/sites");
        assert_eq!(
            requests[0].authorization.as_deref(),
            Some("Bearer test-token")
        );
    }
}
