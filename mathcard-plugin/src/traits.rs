//! Tool traits

use crate::EvalContext;
use mathcard_core::EngineError;
use serde::Serialize;
use serde_json::Value;

/// Metadata about a tool argument
#[derive(Debug, Clone, Serialize)]
pub struct ArgMeta {
    pub name: &'static str,
    pub typ: &'static str,
    pub description: &'static str,
    pub optional: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub default: Option<&'static str>,
}

impl ArgMeta {
    pub const fn required(name: &'static str, typ: &'static str, description: &'static str) -> Self {
        Self { name, typ, description, optional: false, default: None }
    }

    pub const fn optional(name: &'static str, typ: &'static str, description: &'static str, default: &'static str) -> Self {
        Self { name, typ, description, optional: true, default: Some(default) }
    }

    /// JSON schema type for this argument
    pub fn json_type(&self) -> &'static str {
        match self.typ {
            "number" => "number",
            "integer" => "integer",
            "object" => "object",
            _ => "string",
        }
    }
}

/// Metadata for a tool plugin
#[derive(Debug, Clone, Serialize)]
pub struct ToolMeta {
    pub name: &'static str,
    pub description: &'static str,
    pub usage: &'static str,
    pub args: &'static [ArgMeta],
    pub returns: &'static str,
    pub examples: &'static [&'static str],
    pub category: &'static str,
    pub related: &'static [&'static str],
}

impl ToolMeta {
    /// JSON schema of the argument object, as advertised to hosts
    pub fn input_schema(&self) -> Value {
        let mut properties = serde_json::Map::new();
        let mut required = Vec::new();
        for arg in self.args {
            let mut prop = serde_json::Map::new();
            prop.insert("type".to_string(), Value::from(arg.json_type()));
            prop.insert("description".to_string(), Value::from(arg.description));
            properties.insert(arg.name.to_string(), Value::Object(prop));
            if !arg.optional {
                required.push(Value::from(arg.name));
            }
        }
        serde_json::json!({
            "type": "object",
            "properties": properties,
            "required": required,
        })
    }
}

/// A single engine operation exposed by name.
///
/// Arguments arrive as a JSON object; the result is the JSON form of the
/// engine record. Problems that belong to the math (an invalid base, an
/// empty solution set) are part of the result. Only malformed calls are
/// errors.
pub trait ToolPlugin: Send + Sync {
    fn meta(&self) -> ToolMeta;
    fn call(&self, args: &Value, ctx: &EvalContext) -> Result<Value, EngineError>;
}
