//! SDL (Schema Definition Language) rendering of a decoded schema.

use crate::schema::{ArgDef, DirectiveDef, FieldDef, SchemaDoc, TypeBody, TypeDef};
use crate::{IntrospectionError, IntrospectionResponse, Result};

/// Built-in GraphQL scalar types, omitted when [`PrintOptions::skip_builtins`] is set.
const BUILTIN_SCALARS: &[&str] = &["Int", "Float", "String", "Boolean", "ID"];

/// Built-in directives, omitted when [`PrintOptions::skip_builtins`] is set.
const BUILTIN_DIRECTIVES: &[&str] = &["skip", "include", "deprecated", "specifiedBy"];

const INDENT: &str = "\t";

/// Controls what the printer emits.
#[derive(Debug, Clone, Copy, Default)]
pub struct PrintOptions {
    /// Drop built-in scalars, `__`-prefixed introspection types and the
    /// built-in directives from the output.
    pub skip_builtins: bool,
    /// Print object and interface field arguments inline, as
    /// `name(a: T): R`. Off by default, which prints `name: R`.
    pub field_arguments: bool,
    /// Append ` = <defaultValue>` to arguments and input fields that have one.
    pub default_values: bool,
}

/// Converts a GraphQL introspection response to SDL.
///
/// Fails without producing any output if the response carries errors, if a
/// type reference cannot be decoded, or if a type has a kind SDL cannot
/// express.
///
/// # Examples
///
/// ```no_run
/// # use schemadump_introspect::{execute_introspection, introspection_to_sdl};
/// # #[tokio::main]
/// # async fn main() -> Result<(), Box<dyn std::error::Error>> {
/// let introspection = execute_introspection("https://api.example.com/graphql").await?;
/// let sdl = introspection_to_sdl(&introspection)?;
/// println!("{}", sdl);
/// # Ok(())
/// # }
/// ```
pub fn introspection_to_sdl(introspection: &IntrospectionResponse) -> Result<String> {
    introspection_to_sdl_with_options(introspection, PrintOptions::default())
}

/// [`introspection_to_sdl`] with explicit [`PrintOptions`].
pub fn introspection_to_sdl_with_options(
    introspection: &IntrospectionResponse,
    options: PrintOptions,
) -> Result<String> {
    let schema = introspection.schema()?;
    let doc = SchemaDoc::from_introspection(schema)?;
    print_schema(&doc, options)
}

/// Renders a decoded schema: directives first, then every type definition in
/// payload order.
#[tracing::instrument(skip(doc), fields(
    types = doc.types.len(),
    directives = doc.directives.len()
))]
pub fn print_schema(doc: &SchemaDoc, options: PrintOptions) -> Result<String> {
    tracing::debug!("Converting schema to SDL");
    let mut writer = SdlWriter {
        options,
        ..SdlWriter::default()
    };

    for directive in &doc.directives {
        if options.skip_builtins && BUILTIN_DIRECTIVES.contains(&directive.name.as_str()) {
            continue;
        }
        writer.directive(directive);
    }
    writer.newline();

    let mut types_written = 0;
    for type_def in &doc.types {
        if options.skip_builtins && is_builtin_type(&type_def.name) {
            continue;
        }
        writer.type_def(type_def)?;
        types_written += 1;
    }

    tracing::debug!(
        types_written,
        sdl_length = writer.out.len(),
        "SDL generation complete"
    );
    Ok(writer.out)
}

fn is_builtin_type(name: &str) -> bool {
    name.starts_with("__") || BUILTIN_SCALARS.contains(&name)
}

/// Output buffer plus the current indentation depth, scoped to one render.
#[derive(Default)]
struct SdlWriter {
    out: String,
    depth: usize,
    options: PrintOptions,
}

impl SdlWriter {
    fn indent(&mut self) {
        for _ in 0..self.depth {
            self.out.push_str(INDENT);
        }
    }

    fn line(&mut self, text: &str) {
        self.indent();
        self.out.push_str(text);
        self.newline();
    }

    fn newline(&mut self) {
        self.out.push('\n');
    }

    /// Ends a top-level block with its line break and one blank line.
    fn end_block(&mut self) {
        self.out.push_str("\n\n");
    }

    fn description(&mut self, description: Option<&str>) {
        if let Some(description) = description.filter(|d| !d.is_empty()) {
            self.line(&format!("\"\"\"{description}\"\"\""));
        }
    }

    fn directive(&mut self, directive: &DirectiveDef) {
        self.description(directive.description.as_deref());
        self.indent();
        self.out.push_str("directive @");
        self.out.push_str(&directive.name);

        if !directive.args.is_empty() {
            self.out.push_str("(\n");
            self.depth += 1;
            for arg in &directive.args {
                self.description(arg.description.as_deref());
                let line = self.input_value(arg);
                self.line(&line);
            }
            self.depth -= 1;
            self.indent();
            self.out.push(')');
        }

        self.out.push_str(" on ");
        self.out.push_str(&directive.locations.join(" | "));
        self.end_block();
    }

    fn type_def(&mut self, type_def: &TypeDef) -> Result<()> {
        let name = &type_def.name;
        self.description(type_def.description.as_deref());

        match &type_def.body {
            TypeBody::Scalar => self.line_start(&format!("scalar {name}")),
            TypeBody::Object { fields, interfaces } => {
                let mut header = format!("type {name}");
                if !interfaces.is_empty() {
                    header.push_str(" implements ");
                    header.push_str(&interfaces.join(" & "));
                }
                self.fields_block(&header, fields, |field| field.description.as_deref());
            }
            TypeBody::Interface { fields } => {
                self.fields_block(&format!("interface {name}"), fields, |field| {
                    field.description.as_deref()
                });
            }
            TypeBody::InputObject { fields } => {
                // Input fields carry the type's description, not their own.
                let description = type_def.description.as_deref();
                self.fields_block(&format!("input {name}"), fields, |_| description);
            }
            TypeBody::Union { possible_types } => {
                let members = TypeBody::union_members(possible_types.as_deref(), name)?;
                let members: Vec<String> = members.iter().map(ToString::to_string).collect();
                self.line_start(&format!("union {name} ={}", members.join(" | ")));
            }
            TypeBody::Enum { values } => {
                let values = TypeBody::enum_values(values.as_deref(), name)?;
                self.line(&format!("enum {name} {{"));
                self.depth += 1;
                for value in &values {
                    self.description(value.description.as_deref());
                    self.line(&value.name);
                }
                self.depth -= 1;
                self.line_start("}");
            }
            TypeBody::Unsupported(kind) => {
                tracing::error!(kind = %kind, name = %name, "Unsupported type kind");
                return Err(IntrospectionError::UnsupportedKind {
                    name: name.clone(),
                    kind: kind.to_string(),
                });
            }
        }

        self.end_block();
        Ok(())
    }

    /// Writes `text` at the current depth without ending the line.
    fn line_start(&mut self, text: &str) {
        self.indent();
        self.out.push_str(text);
    }

    fn fields_block<'a>(
        &mut self,
        header: &str,
        fields: &'a [FieldDef],
        description: impl Fn(&'a FieldDef) -> Option<&'a str>,
    ) {
        self.line(&format!("{header} {{"));
        self.depth += 1;
        for field in fields {
            self.description(description(field));
            let line = self.field_line(field);
            self.line(&line);
        }
        self.depth -= 1;
        self.line_start("}");
    }

    /// `name: Type`, plus the argument list and default the options ask for.
    fn field_line(&self, field: &FieldDef) -> String {
        let mut line = field.name.clone();
        if self.options.field_arguments && !field.args.is_empty() {
            let args: Vec<String> = field.args.iter().map(|arg| self.input_value(arg)).collect();
            line.push('(');
            line.push_str(&args.join(", "));
            line.push(')');
        }
        line.push_str(": ");
        line.push_str(&field.type_ref.to_string());
        self.push_default(&mut line, field.default_value.as_deref());
        line
    }

    /// `name: Type` or `name: Type = default`.
    fn input_value(&self, arg: &ArgDef) -> String {
        let mut line = format!("{}: {}", arg.name, arg.type_ref);
        self.push_default(&mut line, arg.default_value.as_deref());
        line
    }

    fn push_default(&self, line: &mut String, default: Option<&str>) {
        if let Some(default) = default.filter(|_| self.options.default_values) {
            line.push_str(" = ");
            line.push_str(default);
        }
    }
}
