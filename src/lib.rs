//! Webflow CMS Form Bridge
//!
//! This library provides a Rust client for the Webflow CMS API
//! and a web service that receives form-submission webhooks.
//! It can be used to bridge between form widgets and Webflow CMS collections.
//!
//! # Modules
//!
//! - `client`: WebflowClient for CMS API operations
//! - `config`: environment-backed application configuration
//! - `services::field_mapper`: normalization of submitted form fields
//!
//! # Authentication
//!
//! The Webflow API uses a bearer token read once at startup into the
//! application configuration. Inbound webhook requests are unauthenticated.

pub mod client;
pub mod config;
pub mod error;
pub mod handlers;
pub mod models;
pub mod routes;
pub mod services;

#[cfg(test)]
mod client_test;

// Re-export the main API types for ease of use
pub use client::WebflowClient;
pub use config::{AppConfig, ErrorStatusPolicy};
pub use error::WebflowError;
pub use handlers::api::AppState;
pub use routes::create_router;
