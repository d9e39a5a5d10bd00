//! GraphQL introspection to SDL conversion.
//!
//! This crate fetches a schema from a GraphQL endpoint via introspection and
//! renders it as Schema Definition Language (SDL). The conversion itself is a
//! pure function of the decoded response and performs no I/O.
//!
//! # Examples
//!
//! ## One-step introspection to SDL
//!
//! ```no_run
//! use schemadump_introspect::introspect_url_to_sdl;
//!
//! #[tokio::main]
//! async fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     let sdl = introspect_url_to_sdl("https://api.example.com/graphql").await?;
//!     println!("{}", sdl);
//!     Ok(())
//! }
//! ```
//!
//! ## From an already fetched response
//!
//! ```
//! use schemadump_introspect::{introspection_to_sdl, IntrospectionResponse};
//!
//! let json = r#"{"data": {"__schema": {
//!     "types": [{"kind": "SCALAR", "name": "DateTime", "description": "RFC3339"}],
//!     "directives": []
//! }}}"#;
//! let response: IntrospectionResponse = serde_json::from_str(json).unwrap();
//! let sdl = introspection_to_sdl(&response).unwrap();
//! assert_eq!(sdl, "\n\"\"\"RFC3339\"\"\"\nscalar DateTime\n\n");
//! ```

mod client;
mod error;
mod query;
mod schema;
mod sdl;
mod type_ref;
mod types;

pub use client::IntrospectionClient;
pub use error::{IntrospectionError, Result};
pub use query::{execute_introspection, request_body, INTROSPECTION_QUERY};
pub use schema::{ArgDef, DirectiveDef, EnumValueDef, FieldDef, SchemaDoc, TypeBody, TypeDef};
pub use sdl::{introspection_to_sdl, introspection_to_sdl_with_options, print_schema, PrintOptions};
pub use type_ref::TypeRef;
pub use types::*;

/// Introspects a GraphQL endpoint and converts the result to SDL.
///
/// Combines [`execute_introspection`] and [`introspection_to_sdl`].
///
/// # Errors
///
/// Returns an error if:
/// - The network request fails
/// - The server returns an HTTP error or reports GraphQL errors
/// - The response cannot be parsed
/// - The schema contains a type reference or kind SDL cannot express
#[tracing::instrument]
pub async fn introspect_url_to_sdl(url: &str) -> Result<String> {
    tracing::info!("Starting introspection");
    let introspection = execute_introspection(url).await?;
    tracing::debug!("Converting introspection to SDL");
    let sdl = introspection_to_sdl(&introspection)?;
    tracing::info!(sdl_length = sdl.len(), "Introspection complete");
    Ok(sdl)
}
