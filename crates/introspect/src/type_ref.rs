//! Canonical type references decoded from the introspection `ofType` chain.

use crate::{IntrospectionError, IntrospectionTypeRef, Result, TypeKind};
use std::fmt;

/// A named type wrapped by zero or more list / non-null modifiers.
///
/// The innermost node is always [`TypeRef::Named`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TypeRef {
    Named(String),
    List(Box<TypeRef>),
    NonNull(Box<TypeRef>),
}

impl TypeRef {
    /// Decodes an introspection type reference, unwinding `ofType` outside-in.
    ///
    /// # Examples
    ///
    /// ```
    /// # use schemadump_introspect::{IntrospectionTypeRef, TypeKind, TypeRef};
    /// let raw = IntrospectionTypeRef {
    ///     kind: TypeKind::NonNull,
    ///     name: None,
    ///     of_type: Some(Box::new(IntrospectionTypeRef {
    ///         kind: TypeKind::Scalar,
    ///         name: Some("String".to_string()),
    ///         of_type: None,
    ///     })),
    /// };
    /// assert_eq!(TypeRef::resolve(&raw).unwrap().to_string(), "String!");
    /// ```
    pub fn resolve(raw: &IntrospectionTypeRef) -> Result<Self> {
        let Some(of_type) = raw.of_type.as_deref() else {
            if matches!(raw.kind, TypeKind::List | TypeKind::NonNull) {
                return Err(IntrospectionError::MissingOfType {
                    kind: raw.kind.to_string(),
                });
            }
            return raw
                .name
                .clone()
                .map(Self::Named)
                .ok_or_else(|| IntrospectionError::MissingTypeName {
                    kind: raw.kind.to_string(),
                });
        };

        match raw.kind {
            TypeKind::NonNull => Ok(Self::NonNull(Box::new(Self::resolve(of_type)?))),
            TypeKind::List => Ok(Self::List(Box::new(Self::resolve(of_type)?))),
            _ => Err(IntrospectionError::UnexpectedOfType {
                kind: raw.kind.to_string(),
            }),
        }
    }

    /// The leaf type name, with all modifiers stripped.
    #[must_use]
    pub fn named_type(&self) -> &str {
        match self {
            Self::Named(name) => name,
            Self::List(inner) | Self::NonNull(inner) => inner.named_type(),
        }
    }
}

impl TryFrom<&IntrospectionTypeRef> for TypeRef {
    type Error = IntrospectionError;

    fn try_from(raw: &IntrospectionTypeRef) -> Result<Self> {
        Self::resolve(raw)
    }
}

/// Renders SDL type syntax: `String`, `[String]`, `[String!]!`.
impl fmt::Display for TypeRef {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Named(name) => f.write_str(name),
            Self::List(inner) => write!(f, "[{inner}]"),
            Self::NonNull(inner) => write!(f, "{inner}!"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn named(kind: TypeKind, name: &str) -> IntrospectionTypeRef {
        IntrospectionTypeRef {
            kind,
            name: Some(name.to_string()),
            of_type: None,
        }
    }

    fn wrap(kind: TypeKind, inner: IntrospectionTypeRef) -> IntrospectionTypeRef {
        IntrospectionTypeRef {
            kind,
            name: None,
            of_type: Some(Box::new(inner)),
        }
    }

    #[test]
    fn test_named_type() {
        let type_ref = TypeRef::resolve(&named(TypeKind::Scalar, "Int")).unwrap();
        assert_eq!(type_ref, TypeRef::Named("Int".to_string()));
        assert_eq!(type_ref.to_string(), "Int");
    }

    #[test]
    fn test_non_null_list_of_non_null() {
        let raw = wrap(
            TypeKind::NonNull,
            wrap(
                TypeKind::List,
                wrap(TypeKind::NonNull, named(TypeKind::Scalar, "String")),
            ),
        );
        let type_ref = TypeRef::resolve(&raw).unwrap();

        assert_eq!(
            type_ref,
            TypeRef::NonNull(Box::new(TypeRef::List(Box::new(TypeRef::NonNull(
                Box::new(TypeRef::Named("String".to_string()))
            )))))
        );
        assert_eq!(type_ref.to_string(), "[String!]!");
        assert_eq!(type_ref.named_type(), "String");
    }

    #[test]
    fn test_nested_lists() {
        let raw = wrap(
            TypeKind::List,
            wrap(TypeKind::List, named(TypeKind::Object, "User")),
        );
        assert_eq!(TypeRef::resolve(&raw).unwrap().to_string(), "[[User]]");
    }

    #[test]
    fn test_missing_name_is_an_error() {
        let raw = IntrospectionTypeRef {
            kind: TypeKind::Scalar,
            name: None,
            of_type: None,
        };
        assert!(matches!(
            TypeRef::resolve(&raw),
            Err(IntrospectionError::MissingTypeName { .. })
        ));
    }

    #[test]
    fn test_wrapper_without_of_type_is_an_error() {
        let raw = IntrospectionTypeRef {
            kind: TypeKind::List,
            name: None,
            of_type: None,
        };
        assert!(matches!(
            TypeRef::try_from(&raw),
            Err(IntrospectionError::MissingOfType { .. })
        ));
    }

    #[test]
    fn test_non_wrapper_with_of_type_is_an_error() {
        let raw = wrap(TypeKind::Object, named(TypeKind::Scalar, "String"));
        match TypeRef::resolve(&raw) {
            Err(IntrospectionError::UnexpectedOfType { kind }) => assert_eq!(kind, "OBJECT"),
            other => panic!("unexpected result: {other:?}"),
        }
    }
}
