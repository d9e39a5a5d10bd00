//! Decoded, read-only schema model built from an introspection payload.
//!
//! Every field, argument and input field type is resolved into a [`TypeRef`]
//! here. Enum values and union members stay raw until they are printed.

use crate::{
    IntrospectionDirective, IntrospectionEnumValue, IntrospectionError, IntrospectionField,
    IntrospectionInputValue, IntrospectionSchema, IntrospectionType, IntrospectionTypeRef, Result,
    TypeKind, TypeRef,
};
use serde_json::value::RawValue;

#[derive(Debug, Clone)]
pub struct SchemaDoc {
    pub directives: Vec<DirectiveDef>,
    pub types: Vec<TypeDef>,
}

#[derive(Debug, Clone)]
pub struct DirectiveDef {
    pub name: String,
    pub description: Option<String>,
    pub locations: Vec<String>,
    pub args: Vec<ArgDef>,
}

#[derive(Debug, Clone)]
pub struct TypeDef {
    pub name: String,
    pub description: Option<String>,
    pub body: TypeBody,
}

/// Kind-specific payload of a type definition.
#[derive(Debug, Clone)]
pub enum TypeBody {
    Scalar,
    Object {
        fields: Vec<FieldDef>,
        interfaces: Vec<String>,
    },
    Interface {
        fields: Vec<FieldDef>,
    },
    InputObject {
        fields: Vec<FieldDef>,
    },
    Union {
        possible_types: Option<Box<RawValue>>,
    },
    Enum {
        values: Option<Box<RawValue>>,
    },
    /// A kind that cannot appear as a type definition in SDL.
    Unsupported(TypeKind),
}

#[derive(Debug, Clone)]
pub struct FieldDef {
    pub name: String,
    pub description: Option<String>,
    pub type_ref: TypeRef,
    pub args: Vec<ArgDef>,
    pub default_value: Option<String>,
}

#[derive(Debug, Clone)]
pub struct ArgDef {
    pub name: String,
    pub description: Option<String>,
    pub type_ref: TypeRef,
    pub default_value: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EnumValueDef {
    pub name: String,
    pub description: Option<String>,
}

impl SchemaDoc {
    /// Decodes the wire schema, resolving every type reference.
    #[tracing::instrument(skip(schema), fields(
        types = schema.types.len(),
        directives = schema.directives.len()
    ))]
    pub fn from_introspection(schema: &IntrospectionSchema) -> Result<Self> {
        let directives = schema
            .directives
            .iter()
            .map(DirectiveDef::decode)
            .collect::<Result<Vec<_>>>()?;
        let types = schema
            .types
            .iter()
            .map(TypeDef::decode)
            .collect::<Result<Vec<_>>>()?;

        tracing::debug!("Schema decoded");
        Ok(Self { directives, types })
    }
}

impl DirectiveDef {
    fn decode(directive: &IntrospectionDirective) -> Result<Self> {
        Ok(Self {
            name: directive.name.clone(),
            description: directive.description.clone(),
            locations: directive.locations.clone(),
            args: decode_args(&directive.args)?,
        })
    }
}

impl TypeDef {
    fn decode(ty: &IntrospectionType) -> Result<Self> {
        let body = match &ty.kind {
            TypeKind::Scalar => TypeBody::Scalar,
            TypeKind::Object => TypeBody::Object {
                fields: decode_fields(ty.fields.as_deref())?,
                interfaces: ty
                    .interfaces
                    .iter()
                    .flatten()
                    .map(|interface| interface.name.clone())
                    .collect(),
            },
            TypeKind::Interface => TypeBody::Interface {
                fields: decode_fields(ty.fields.as_deref())?,
            },
            TypeKind::InputObject => TypeBody::InputObject {
                fields: ty
                    .input_fields
                    .iter()
                    .flatten()
                    .map(FieldDef::decode_input)
                    .collect::<Result<Vec<_>>>()?,
            },
            TypeKind::Union => TypeBody::Union {
                possible_types: ty.possible_types.clone(),
            },
            TypeKind::Enum => TypeBody::Enum {
                values: ty.enum_values.clone(),
            },
            other => TypeBody::Unsupported(other.clone()),
        };

        Ok(Self {
            name: ty.name.clone(),
            description: ty.description.clone(),
            body,
        })
    }

    /// The introspection kind this definition was decoded from.
    #[must_use]
    pub fn kind(&self) -> TypeKind {
        match &self.body {
            TypeBody::Scalar => TypeKind::Scalar,
            TypeBody::Object { .. } => TypeKind::Object,
            TypeBody::Interface { .. } => TypeKind::Interface,
            TypeBody::InputObject { .. } => TypeKind::InputObject,
            TypeBody::Union { .. } => TypeKind::Union,
            TypeBody::Enum { .. } => TypeKind::Enum,
            TypeBody::Unsupported(kind) => kind.clone(),
        }
    }
}

impl TypeBody {
    /// Decodes the raw `possibleTypes` of a union. A missing or `null`
    /// payload yields no members.
    pub fn union_members(raw: Option<&RawValue>, type_name: &str) -> Result<Vec<TypeRef>> {
        let refs: Vec<IntrospectionTypeRef> = decode_raw(raw, type_name, "possibleTypes")?;
        refs.iter().map(TypeRef::resolve).collect()
    }

    /// Decodes the raw `enumValues` of an enum. A missing or `null` payload
    /// yields no values.
    pub fn enum_values(raw: Option<&RawValue>, type_name: &str) -> Result<Vec<EnumValueDef>> {
        let values: Vec<IntrospectionEnumValue> = decode_raw(raw, type_name, "enumValues")?;
        Ok(values
            .into_iter()
            .map(|value| EnumValueDef {
                name: value.name,
                description: value.description,
            })
            .collect())
    }
}

impl FieldDef {
    fn decode(field: &IntrospectionField) -> Result<Self> {
        Ok(Self {
            name: field.name.clone(),
            description: field.description.clone(),
            type_ref: TypeRef::resolve(&field.type_ref)?,
            args: decode_args(&field.args)?,
            default_value: None,
        })
    }

    fn decode_input(value: &IntrospectionInputValue) -> Result<Self> {
        Ok(Self {
            name: value.name.clone(),
            description: value.description.clone(),
            type_ref: TypeRef::resolve(&value.type_ref)?,
            args: Vec::new(),
            default_value: value.default_value.clone(),
        })
    }
}

impl ArgDef {
    fn decode(value: &IntrospectionInputValue) -> Result<Self> {
        Ok(Self {
            name: value.name.clone(),
            description: value.description.clone(),
            type_ref: TypeRef::resolve(&value.type_ref)?,
            default_value: value.default_value.clone(),
        })
    }
}

fn decode_fields(fields: Option<&[IntrospectionField]>) -> Result<Vec<FieldDef>> {
    fields
        .unwrap_or_default()
        .iter()
        .map(FieldDef::decode)
        .collect()
}

fn decode_args(args: &[IntrospectionInputValue]) -> Result<Vec<ArgDef>> {
    args.iter().map(ArgDef::decode).collect()
}

fn decode_raw<T: serde::de::DeserializeOwned>(
    raw: Option<&RawValue>,
    type_name: &str,
    field: &'static str,
) -> Result<Vec<T>> {
    let Some(raw) = raw else {
        return Ok(Vec::new());
    };
    serde_json::from_str::<Option<Vec<T>>>(raw.get())
        .map(Option::unwrap_or_default)
        .map_err(|e| IntrospectionError::MalformedPayload {
            type_name: type_name.to_string(),
            field,
            message: e.to_string(),
        })
}
