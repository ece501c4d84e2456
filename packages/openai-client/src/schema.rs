//! Type-safe schema generation for OpenAI structured outputs.
//!
//! Schemas are generated from Rust types with the `schemars` crate and then
//! adjusted for OpenAI's strict mode, which requires `additionalProperties:
//! false` on every object, all properties listed in `required`, and fully
//! inlined schemas (strict-mode validation does not follow `$ref`).

use schemars::{schema_for, JsonSchema};
use serde::de::DeserializeOwned;

/// Types that can be requested as OpenAI structured output.
///
/// Blanket-implemented for anything that is `JsonSchema + DeserializeOwned`.
pub trait StructuredOutput: JsonSchema + DeserializeOwned {
    /// Generate an OpenAI strict-mode compatible JSON schema for this type.
    fn openai_schema() -> serde_json::Value {
        let schema = schema_for!(Self);
        let mut value = serde_json::to_value(schema).unwrap_or_default();

        strictify(&mut value);

        let definitions = value.get("definitions").cloned();
        if let Some(defs) = definitions {
            inline_refs(&mut value, &defs);
        }

        // OpenAI rejects unknown top-level keys
        if let serde_json::Value::Object(map) = &mut value {
            map.remove("$schema");
            map.remove("definitions");
        }

        value
    }

    /// Schema name for this type.
    fn type_name() -> String {
        <Self as JsonSchema>::schema_name()
    }
}

impl<T: JsonSchema + DeserializeOwned> StructuredOutput for T {}

/// Walk the schema, marking every object as closed and every property required.
fn strictify(value: &mut serde_json::Value) {
    match value {
        serde_json::Value::Object(map) => {
            if map.get("type") == Some(&serde_json::Value::String("object".to_string())) {
                map.insert(
                    "additionalProperties".to_string(),
                    serde_json::Value::Bool(false),
                );
                if let Some(serde_json::Value::Object(props)) = map.get("properties") {
                    let all: Vec<serde_json::Value> = props
                        .keys()
                        .map(|k| serde_json::Value::String(k.clone()))
                        .collect();
                    map.insert("required".to_string(), serde_json::Value::Array(all));
                }
            }
            for (_, v) in map.iter_mut() {
                strictify(v);
            }
        }
        serde_json::Value::Array(items) => {
            for item in items.iter_mut() {
                strictify(item);
            }
        }
        _ => {}
    }
}

/// Replace `{"$ref": "#/definitions/X"}` nodes with the definition body.
fn inline_refs(value: &mut serde_json::Value, definitions: &serde_json::Value) {
    match value {
        serde_json::Value::Object(map) => {
            let referenced = map
                .get("$ref")
                .and_then(|r| r.as_str())
                .and_then(|r| r.strip_prefix("#/definitions/"))
                .and_then(|name| definitions.get(name))
                .cloned();

            if let Some(mut def) = referenced {
                inline_refs(&mut def, definitions);
                *value = def;
                return;
            }

            for (_, v) in map.iter_mut() {
                inline_refs(v, definitions);
            }
        }
        serde_json::Value::Array(items) => {
            for item in items.iter_mut() {
                inline_refs(item, definitions);
            }
        }
        _ => {}
    }
}
