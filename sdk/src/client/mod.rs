//! HTTP client for the MatEdu REST API.
//!
//! Every endpoint method delegates to [`MatEduClient::request`], which merges
//! headers, attaches the session's bearer token when one is present, and
//! normalizes failures into [`ClientError`].
//!
//! # Example
//!
//! ```rust,ignore
//! use matedu_sdk::client::{MatEduClient, RequestOptions};
//! use serde_json::Value;
//!
//! #[tokio::main]
//! async fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     let client = MatEduClient::with_base_url("http://127.0.0.1:8000/api/v1")?;
//!
//!     // Typed endpoint
//!     let areas = client.areas().await?;
//!     println!("Found {} areas", areas.len());
//!
//!     // Untyped pass-through
//!     let hello: Value = client.request("/hola", RequestOptions::get()).await?;
//!     println!("{hello}");
//!
//!     Ok(())
//! }
//! ```

pub mod config;
pub mod error;
pub mod http;
pub mod options;

pub use config::ClientConfig;
pub use error::ClientError;
pub use http::MatEduClient;
pub use options::RequestOptions;
