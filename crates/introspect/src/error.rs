use thiserror::Error;

pub type Result<T> = std::result::Result<T, IntrospectionError>;

#[derive(Debug, Error)]
pub enum IntrospectionError {
    #[error("Network error: {0}")]
    Network(String),

    #[error("HTTP error {0}: {1}")]
    Http(u16, String),

    #[error("Failed to parse introspection response: {0}")]
    Parse(String),

    #[error("Invalid introspection response: {0}")]
    Invalid(String),

    #[error("Server returned errors: {}", .0.join("; "))]
    Server(Vec<String>),

    #[error("Type reference of kind {kind} has no name")]
    MissingTypeName { kind: String },

    #[error("Wrapper type reference of kind {kind} has no ofType")]
    MissingOfType { kind: String },

    #[error("Type reference of kind {kind} cannot wrap another type")]
    UnexpectedOfType { kind: String },

    #[error("Type '{name}' has unsupported kind {kind}")]
    UnsupportedKind { name: String, kind: String },

    #[error("Malformed {field} on type '{type_name}': {message}")]
    MalformedPayload {
        type_name: String,
        field: &'static str,
        message: String,
    },
}

impl IntrospectionError {
    /// Whether the failure happened while fetching rather than while
    /// decoding or printing the schema.
    #[must_use]
    pub fn is_transport(&self) -> bool {
        matches!(
            self,
            Self::Network(_) | Self::Http(..) | Self::Parse(_) | Self::Server(_) | Self::Invalid(_)
        )
    }
}
