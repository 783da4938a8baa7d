use axum::{routing::get, Router};
use std::sync::Arc;
use tracing::info;

use crate::handlers::api::{
    handle_form_submission, list_collections, list_sites, method_not_allowed, preflight,
    service_status, AppState,
};
use crate::handlers::test::{health_check, test_form_submission};

pub fn create_router(app_state: Arc<AppState>, is_production: bool) -> Router {
    let mut router = Router::new();

    // Health check is always available
    let health_route = Router::new().route("/health", get(health_check));
    router = router.merge(health_route);

    // Webhook endpoint is always available. GET is the liveness/config
    // check, OPTIONS answers CORS preflight, everything else is refused.
    let webhook_route = Router::new().route(
        "/",
        get(service_status)
            .post(handle_form_submission)
            .options(preflight)
            .fallback(method_not_allowed),
    );
    router = router.merge(webhook_route);

    // Only add management API routes if not in production mode
    if !is_production {
        let api_routes = Router::new()
            .route("/collections", get(list_collections))
            .route("/sites", get(list_sites))
            .route("/test/form-submission", get(test_form_submission));

        router = router.merge(api_routes);

        info!("Management API routes enabled - server running in development mode");
    } else {
        info!("Running in production mode - only webhook and health endpoints exposed");
    }

    router.with_state(app_state)
}
