//! Cloud Vision REST API client.
//!
//! This crate provides:
//! - Credential file resolution (`GOOGLE_APPLICATION_CREDENTIALS`)
//! - Service account authentication via gcp_auth
//! - Batch request assembly from local image files
//! - A single-shot `images:annotate` client

pub mod auth;
pub mod client;
pub mod config;
pub mod credentials;
pub mod error;
pub mod request;

pub use auth::{AccessTokenSource, ServiceAccountTokenSource, StaticToken};
pub use client::VisionClient;
pub use config::VisionConfig;
pub use credentials::{resolve as resolve_credentials, CredentialsFile};
pub use error::{VisionError, VisionResult};
pub use request::build_batch;
