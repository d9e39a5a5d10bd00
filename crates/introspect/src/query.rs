//! The introspection query and its request body.

use crate::{IntrospectionClient, IntrospectionResponse, Result};

/// Standard GraphQL introspection query.
///
/// Type references are requested seven `ofType` levels deep, enough for
/// wrappers like `[[[String!]!]!]`.
pub const INTROSPECTION_QUERY: &str = r"
query IntrospectionQuery {
  __schema {
    queryType { name }
    mutationType { name }
    subscriptionType { name }
    types {
      ...FullType
    }
    directives {
      name
      description
      locations
      args {
        ...InputValue
      }
    }
  }
}

fragment FullType on __Type {
  kind
  name
  description
  fields(includeDeprecated: true) {
    name
    description
    args {
      ...InputValue
    }
    type {
      ...TypeRef
    }
    isDeprecated
    deprecationReason
  }
  inputFields {
    ...InputValue
  }
  interfaces {
    ...TypeRef
  }
  enumValues(includeDeprecated: true) {
    name
    description
    isDeprecated
    deprecationReason
  }
  possibleTypes {
    ...TypeRef
  }
}

fragment InputValue on __InputValue {
  name
  description
  type { ...TypeRef }
  defaultValue
}

fragment TypeRef on __Type {
  kind
  name
  ofType {
    kind
    name
    ofType {
      kind
      name
      ofType {
        kind
        name
        ofType {
          kind
          name
          ofType {
            kind
            name
            ofType {
              kind
              name
              ofType {
                kind
                name
              }
            }
          }
        }
      }
    }
  }
}
";

/// JSON body POSTed to the endpoint. `variables` is always an empty map.
#[must_use]
pub fn request_body() -> serde_json::Value {
    serde_json::json!({
        "query": INTROSPECTION_QUERY,
        "variables": {}
    })
}

/// Executes an introspection query with a default [`IntrospectionClient`].
///
/// # Errors
///
/// Returns an error if:
/// - The network request fails ([`crate::IntrospectionError::Network`])
/// - The server returns an HTTP error status ([`crate::IntrospectionError::Http`])
/// - The response cannot be parsed as JSON ([`crate::IntrospectionError::Parse`])
///
/// # Examples
///
/// ```no_run
/// # use schemadump_introspect::execute_introspection;
/// # #[tokio::main]
/// # async fn main() -> Result<(), Box<dyn std::error::Error>> {
/// let response = execute_introspection("https://api.example.com/graphql").await?;
/// println!("Schema has {} types", response.schema()?.types.len());
/// # Ok(())
/// # }
/// ```
pub async fn execute_introspection(url: &str) -> Result<IntrospectionResponse> {
    IntrospectionClient::new().execute(url).await
}
