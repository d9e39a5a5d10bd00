use schemadump_introspect::{
    introspection_to_sdl, introspection_to_sdl_with_options, IntrospectionError,
    IntrospectionResponse, PrintOptions,
};
use serde_json::{json, Value};

fn response(value: &Value) -> IntrospectionResponse {
    serde_json::from_str(&value.to_string()).unwrap()
}

fn scalar(name: &str) -> Value {
    json!({ "kind": "SCALAR", "name": name, "ofType": null })
}

fn non_null(inner: Value) -> Value {
    json!({ "kind": "NON_NULL", "name": null, "ofType": inner })
}

fn list(inner: Value) -> Value {
    json!({ "kind": "LIST", "name": null, "ofType": inner })
}

fn object_ref(name: &str) -> Value {
    json!({ "kind": "OBJECT", "name": name, "ofType": null })
}

fn blog_schema() -> Value {
    json!({
        "data": {
            "__schema": {
                "queryType": { "name": "Query" },
                "mutationType": null,
                "subscriptionType": null,
                "directives": [{
                    "name": "auth",
                    "description": "Requires a role",
                    "locations": ["OBJECT", "FIELD_DEFINITION"],
                    "args": [{
                        "name": "roles",
                        "description": null,
                        "type": non_null(list(non_null(scalar("String")))),
                        "defaultValue": null
                    }]
                }],
                "types": [
                    {
                        "kind": "OBJECT",
                        "name": "Query",
                        "description": null,
                        "fields": [{
                            "name": "search",
                            "description": "Full text search",
                            "args": [{
                                "name": "term",
                                "description": null,
                                "type": non_null(scalar("String")),
                                "defaultValue": null
                            }],
                            "type": non_null(list(non_null(object_ref("SearchResult")))),
                            "isDeprecated": false,
                            "deprecationReason": null
                        }],
                        "inputFields": null,
                        "interfaces": [],
                        "enumValues": null,
                        "possibleTypes": null
                    },
                    {
                        "kind": "INTERFACE",
                        "name": "Node",
                        "description": null,
                        "fields": [{
                            "name": "id",
                            "description": null,
                            "args": [],
                            "type": non_null(scalar("ID")),
                            "isDeprecated": false,
                            "deprecationReason": null
                        }],
                        "inputFields": null,
                        "interfaces": [],
                        "enumValues": null,
                        "possibleTypes": [object_ref("Post")]
                    },
                    {
                        "kind": "OBJECT",
                        "name": "Post",
                        "description": "A blog post",
                        "fields": [
                            {
                                "name": "id",
                                "description": null,
                                "args": [],
                                "type": non_null(scalar("ID")),
                                "isDeprecated": false,
                                "deprecationReason": null
                            },
                            {
                                "name": "status",
                                "description": null,
                                "args": [],
                                "type": { "kind": "ENUM", "name": "Status", "ofType": null },
                                "isDeprecated": false,
                                "deprecationReason": null
                            }
                        ],
                        "inputFields": null,
                        "interfaces": [{ "kind": "INTERFACE", "name": "Node", "ofType": null }],
                        "enumValues": null,
                        "possibleTypes": null
                    },
                    {
                        "kind": "OBJECT",
                        "name": "Comment",
                        "description": null,
                        "fields": [],
                        "inputFields": null,
                        "interfaces": [],
                        "enumValues": null,
                        "possibleTypes": null
                    },
                    {
                        "kind": "UNION",
                        "name": "SearchResult",
                        "description": null,
                        "fields": null,
                        "inputFields": null,
                        "interfaces": null,
                        "enumValues": null,
                        "possibleTypes": [object_ref("Post"), object_ref("Comment")]
                    },
                    {
                        "kind": "ENUM",
                        "name": "Status",
                        "description": null,
                        "fields": null,
                        "inputFields": null,
                        "interfaces": null,
                        "enumValues": [
                            { "name": "DRAFT", "description": "Not yet visible", "isDeprecated": false, "deprecationReason": null },
                            { "name": "PUBLISHED", "description": null, "isDeprecated": false, "deprecationReason": null }
                        ],
                        "possibleTypes": null
                    },
                    {
                        "kind": "INPUT_OBJECT",
                        "name": "PostFilter",
                        "description": "Filter posts",
                        "fields": null,
                        "inputFields": [
                            { "name": "status", "description": "Only this status", "type": { "kind": "ENUM", "name": "Status", "ofType": null }, "defaultValue": "PUBLISHED" },
                            { "name": "tags", "description": null, "type": list(non_null(scalar("String"))), "defaultValue": null }
                        ],
                        "interfaces": null,
                        "enumValues": null,
                        "possibleTypes": null
                    },
                    {
                        "kind": "SCALAR",
                        "name": "String",
                        "description": "Built-in String",
                        "fields": null,
                        "inputFields": null,
                        "interfaces": null,
                        "enumValues": null,
                        "possibleTypes": null
                    }
                ]
            }
        }
    })
}

const BLOG_SDL: &str = "\"\"\"Requires a role\"\"\"
directive @auth(
\troles: [String!]!
) on OBJECT | FIELD_DEFINITION


type Query {
\t\"\"\"Full text search\"\"\"
\tsearch: [SearchResult!]!
}

interface Node {
\tid: ID!
}

\"\"\"A blog post\"\"\"
type Post implements Node {
\tid: ID!
\tstatus: Status
}

type Comment {
}

union SearchResult =Post | Comment

enum Status {
\t\"\"\"Not yet visible\"\"\"
\tDRAFT
\tPUBLISHED
}

\"\"\"Filter posts\"\"\"
input PostFilter {
\t\"\"\"Filter posts\"\"\"
\tstatus: Status
\t\"\"\"Filter posts\"\"\"
\ttags: [String!]
}

\"\"\"Built-in String\"\"\"
scalar String

";

#[test]
fn test_full_schema_renders_in_payload_order() {
    let sdl = introspection_to_sdl(&response(&blog_schema())).unwrap();
    assert_eq!(sdl, BLOG_SDL);
}

#[test]
fn test_arguments_and_defaults_are_opt_in() {
    let sdl = introspection_to_sdl_with_options(
        &response(&blog_schema()),
        PrintOptions {
            field_arguments: true,
            default_values: true,
            ..PrintOptions::default()
        },
    )
    .unwrap();
    assert!(sdl.contains("\tsearch(term: String!): [SearchResult!]!\n"));
    assert!(sdl.contains("\tstatus: Status = PUBLISHED\n"));
    assert_eq!(sdl.replace("(term: String!)", "").replace(" = PUBLISHED", ""), BLOG_SDL);
}

#[test]
fn test_null_errors_do_not_fail_the_render() {
    let sdl = introspection_to_sdl(&response(&json!({
        "data": { "__schema": {
            "types": [{
                "kind": "SCALAR",
                "name": "DateTime",
                "description": "RFC3339",
                "fields": null,
                "inputFields": null,
                "interfaces": null,
                "enumValues": null,
                "possibleTypes": null
            }],
            "directives": []
        } },
        "errors": null
    })))
    .unwrap();
    assert_eq!(sdl, "\n\"\"\"RFC3339\"\"\"\nscalar DateTime\n\n");
}

#[test]
fn test_skip_builtins_drops_builtin_scalars() {
    let sdl = introspection_to_sdl_with_options(
        &response(&blog_schema()),
        PrintOptions {
            skip_builtins: true,
            ..PrintOptions::default()
        },
    )
    .unwrap();
    assert!(!sdl.contains("scalar String"));
    assert!(sdl.contains("directive @auth("));
    assert!(sdl.ends_with("\ttags: [String!]\n}\n\n"));
}

#[test]
fn test_empty_schema_is_a_single_newline() {
    let sdl = introspection_to_sdl(&response(&json!({
        "data": { "__schema": { "types": [], "directives": [] } }
    })))
    .unwrap();
    assert_eq!(sdl, "\n");
}

#[test]
fn test_server_errors_are_surfaced() {
    let result = introspection_to_sdl(&response(&json!({
        "data": null,
        "errors": [{ "message": "Unauthorized" }]
    })));
    match result {
        Err(IntrospectionError::Server(messages)) => assert_eq!(messages, vec!["Unauthorized"]),
        other => panic!("unexpected result: {other:?}"),
    }
}

#[test]
fn test_unsupported_kind_aborts_whole_render() {
    let result = introspection_to_sdl(&response(&json!({
        "data": { "__schema": {
            "directives": [],
            "types": [
                { "kind": "SCALAR", "name": "DateTime" },
                { "kind": "MODULE", "name": "Billing" }
            ]
        } }
    })));
    assert!(matches!(
        result,
        Err(IntrospectionError::UnsupportedKind { ref kind, .. }) if kind == "MODULE"
    ));
}

#[test]
fn test_malformed_possible_types_abort() {
    let result = introspection_to_sdl(&response(&json!({
        "data": { "__schema": {
            "directives": [],
            "types": [{ "kind": "UNION", "name": "SearchResult", "possibleTypes": "Post" }]
        } }
    })));
    assert!(matches!(
        result,
        Err(IntrospectionError::MalformedPayload { field: "possibleTypes", .. })
    ));
}

#[test]
fn test_type_reference_without_name_aborts() {
    let result = introspection_to_sdl(&response(&json!({
        "data": { "__schema": {
            "directives": [],
            "types": [{
                "kind": "OBJECT",
                "name": "Query",
                "fields": [{ "name": "broken", "args": [], "type": { "kind": "SCALAR", "name": null } }],
                "interfaces": []
            }]
        } }
    })));
    assert!(matches!(
        result,
        Err(IntrospectionError::MissingTypeName { .. })
    ));
}
