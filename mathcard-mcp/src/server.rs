//! JSON-RPC request handling
//!
//! One request per line in, at most one response per line out.
//! Notifications (requests without an `id`) are processed silently.

use mathcard::{EngineError, MathCard, Severity};
use serde::{Deserialize, Serialize};
use serde_json::{json, Value as JsonValue};
use tracing::{debug, error, info, warn};

pub const PROTOCOL_VERSION: &str = "2025-11-25";
pub const SERVER_NAME: &str = "mathcard";
pub const SERVER_VERSION: &str = env!("CARGO_PKG_VERSION");

const PARSE_ERROR: i32 = -32700;
const METHOD_NOT_FOUND: i32 = -32601;
const INVALID_PARAMS: i32 = -32602;

#[derive(Debug, Deserialize)]
pub struct McpRequest {
    pub id: Option<JsonValue>,
    pub method: String,
    #[serde(default)]
    pub params: Option<JsonValue>,
}

#[derive(Debug, Serialize)]
pub struct McpResponse {
    pub jsonrpc: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub id: Option<JsonValue>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub result: Option<JsonValue>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error: Option<McpError>,
}

#[derive(Debug, Serialize)]
pub struct McpError {
    pub code: i32,
    pub message: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub data: Option<JsonValue>,
}

impl McpError {
    fn new(code: i32, message: impl Into<String>) -> Self {
        Self { code, message: message.into(), data: None }
    }
}

impl McpResponse {
    fn success(id: Option<JsonValue>, result: JsonValue) -> Self {
        Self { jsonrpc: "2.0".to_string(), id, result: Some(result), error: None }
    }

    fn failure(id: Option<JsonValue>, error: McpError) -> Self {
        Self { jsonrpc: "2.0".to_string(), id, result: None, error: Some(error) }
    }
}

/// Host-level tools handled here rather than by the registry
const HELP_TOOL: &str = "help";
const LIST_TOOLS_TOOL: &str = "list_tools";

pub struct Server {
    card: MathCard,
}

impl Server {
    pub fn new(card: MathCard) -> Self {
        Self { card }
    }

    /// Handle one input line. `None` means nothing is written back.
    pub fn handle_line(&self, line: &str) -> Option<McpResponse> {
        let line = line.trim();
        if line.is_empty() {
            return None;
        }

        let request: McpRequest = match serde_json::from_str(line) {
            Ok(r) => r,
            Err(e) => {
                warn!(error = %e, "unparseable request");
                return Some(McpResponse::failure(
                    Some(JsonValue::Null),
                    McpError::new(PARSE_ERROR, format!("Parse error: {}", e)),
                ));
            }
        };

        debug!(method = %request.method, "processing request");
        let response = self.handle_request(&request);

        if request.id.is_none() {
            debug!(method = %request.method, "notification processed");
            return None;
        }
        Some(response)
    }

    fn handle_request(&self, request: &McpRequest) -> McpResponse {
        let result = match request.method.as_str() {
            "initialize" => Ok(self.handle_initialize(&request.params)),
            "initialized" | "notifications/initialized" | "ping" => Ok(json!({})),
            "tools/list" => Ok(self.handle_tools_list()),
            "tools/call" => self.handle_tool_call(&request.params),
            _ => Err(McpError::new(
                METHOD_NOT_FOUND,
                format!("Method not found: {}", request.method),
            )),
        };

        match result {
            Ok(r) => McpResponse::success(request.id.clone(), r),
            Err(e) => McpResponse::failure(request.id.clone(), e),
        }
    }

    fn handle_initialize(&self, params: &Option<JsonValue>) -> JsonValue {
        let client = params
            .as_ref()
            .and_then(|p| p.get("clientInfo"))
            .and_then(|c| c.get("name"))
            .and_then(|n| n.as_str())
            .unwrap_or("unknown");

        // Echo the client's protocol version for compatibility
        let protocol = params
            .as_ref()
            .and_then(|p| p.get("protocolVersion"))
            .and_then(|v| v.as_str())
            .unwrap_or(PROTOCOL_VERSION);

        info!(client, protocol, "client connected");

        json!({
            "protocolVersion": protocol,
            "serverInfo": {
                "name": SERVER_NAME,
                "version": SERVER_VERSION,
                "description": "Function analysis for linear, quadratic, exponential and logarithmic functions"
            },
            "capabilities": {
                "tools": { "listChanged": false }
            },
            "instructions": "Each tool analyzes one function, equation or inequality and returns a markdown table plus structured data. Call 'list_tools' to see what is available and 'help' for usage of a single tool."
        })
    }

    fn handle_tools_list(&self) -> JsonValue {
        let mut tools: Vec<JsonValue> = self
            .card
            .registry()
            .metas()
            .into_iter()
            .map(|meta| {
                json!({
                    "name": meta.name,
                    "description": meta.description,
                    "inputSchema": meta.input_schema(),
                })
            })
            .collect();

        tools.push(json!({
            "name": HELP_TOOL,
            "description": "Documentation for one tool, or an overview grouped by category",
            "inputSchema": {
                "type": "object",
                "properties": {
                    "name": { "type": "string", "description": "Tool name. Omit for the overview." }
                },
                "required": []
            }
        }));
        tools.push(json!({
            "name": LIST_TOOLS_TOOL,
            "description": "List available tools, optionally filtered by category",
            "inputSchema": {
                "type": "object",
                "properties": {
                    "category": { "type": "string", "description": "analysis, solvers or catalog" }
                },
                "required": []
            }
        }));

        json!({ "tools": tools })
    }

    fn handle_tool_call(&self, params: &Option<JsonValue>) -> Result<JsonValue, McpError> {
        let params = params
            .as_ref()
            .ok_or_else(|| McpError::new(INVALID_PARAMS, "Missing params"))?;
        let name = params
            .get("name")
            .and_then(|v| v.as_str())
            .ok_or_else(|| McpError::new(INVALID_PARAMS, "Missing tool name"))?;
        let args = params.get("arguments").cloned().unwrap_or_else(|| json!({}));
        if !args.is_object() {
            return Err(McpError::new(INVALID_PARAMS, "Tool arguments must be an object"));
        }

        debug!(tool = name, "tool call");
        let outcome = match name {
            HELP_TOOL => self
                .card
                .help(args.get("name").and_then(|v| v.as_str()))
                .map(|help| (format_help(&help), help)),
            LIST_TOOLS_TOOL => {
                let list = self.card.list_tools(args.get("category").and_then(|v| v.as_str()));
                Ok((format_tool_list(&list), list))
            }
            _ => self.card.call(name, &args).map(|r| (r.markdown, r.data)),
        };

        Ok(match outcome {
            Ok((text, data)) => json!({
                "content": [{ "type": "text", "text": text }],
                "structuredContent": data,
                "isError": false
            }),
            Err(e) => tool_error(name, e),
        })
    }
}

/// Engine failures are reported inside the tool result
fn tool_error(tool: &str, error: EngineError) -> JsonValue {
    match error.severity {
        Severity::Warning => info!(tool, code = %error.code, "tool call produced no result"),
        Severity::Error => warn!(tool, code = %error.code, "tool call failed"),
        Severity::Fatal => error!(tool, code = %error.code, message = %error.message, "tool call hit an internal error"),
    }
    let data = serde_json::to_value(&error).unwrap_or(JsonValue::Null);
    json!({
        "content": [{ "type": "text", "text": error.to_string() }],
        "structuredContent": { "error": data },
        "isError": true
    })
}

fn format_help(help: &JsonValue) -> String {
    let mut out = String::new();
    if let Some(name) = help.get("name").and_then(|v| v.as_str()) {
        out.push_str(&format!("# {}\n\n", name));
        if let Some(d) = help.get("description").and_then(|v| v.as_str()) {
            out.push_str(&format!("{}\n\n", d));
        }
        if let Some(u) = help.get("usage").and_then(|v| v.as_str()) {
            out.push_str(&format!("**Usage:** `{}`\n\n", u));
        }
        if let Some(examples) = help.get("examples").and_then(|v| v.as_array()) {
            for example in examples.iter().filter_map(|e| e.as_str()) {
                out.push_str(&format!("- `{}`\n", example));
            }
        }
        return out;
    }
    if let Some(categories) = help.get("tools").and_then(|v| v.as_object()) {
        for (category, names) in categories {
            let names: Vec<&str> = names
                .as_array()
                .map(|a| a.iter().filter_map(|n| n.as_str()).collect())
                .unwrap_or_default();
            out.push_str(&format!("**{}**: {}\n", category, names.join(", ")));
        }
    }
    out
}

fn format_tool_list(list: &JsonValue) -> String {
    let mut out = String::from("| tool | category | description |\n|------|----------|-------------|\n");
    for tool in list.as_array().into_iter().flatten() {
        out.push_str(&format!(
            "| {} | {} | {} |\n",
            tool["name"].as_str().unwrap_or_default(),
            tool["category"].as_str().unwrap_or_default(),
            tool["description"].as_str().unwrap_or_default(),
        ));
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    fn server() -> Server {
        Server::new(MathCard::with_standard_tools())
    }

    fn call(line: &str) -> JsonValue {
        let response = server().handle_line(line).expect("response expected");
        serde_json::to_value(response).unwrap()
    }

    #[test]
    fn test_initialize_echoes_protocol() {
        let out = call(r#"{"jsonrpc":"2.0","id":1,"method":"initialize","params":{"protocolVersion":"2024-11-05","clientInfo":{"name":"t"}}}"#);
        assert_eq!(out["id"], 1);
        assert_eq!(out["result"]["protocolVersion"], "2024-11-05");
        assert_eq!(out["result"]["serverInfo"]["name"], "mathcard");
    }

    #[test]
    fn test_notifications_get_no_response() {
        assert!(server().handle_line(r#"{"jsonrpc":"2.0","method":"initialized"}"#).is_none());
        assert!(server().handle_line(r#"{"jsonrpc":"2.0","method":"tools/call","params":{"name":"linear","arguments":{"m":1,"b":0}}}"#).is_none());
        assert!(server().handle_line("   ").is_none());
    }

    #[test]
    fn test_parse_error() {
        let out = call("{not json");
        assert_eq!(out["error"]["code"], -32700);
        assert!(out["id"].is_null());
    }

    #[test]
    fn test_unknown_method() {
        let out = call(r#"{"jsonrpc":"2.0","id":"a","method":"resources/list"}"#);
        assert_eq!(out["error"]["code"], -32601);
        assert_eq!(out["id"], "a");
    }

    #[test]
    fn test_tools_list_has_schemas() {
        let out = call(r#"{"jsonrpc":"2.0","id":2,"method":"tools/list"}"#);
        let tools = out["result"]["tools"].as_array().unwrap();
        assert_eq!(tools.len(), 13);
        let quadratic = tools.iter().find(|t| t["name"] == "quadratic").unwrap();
        assert_eq!(quadratic["inputSchema"]["required"], json!(["a", "b", "c"]));
        assert_eq!(quadratic["inputSchema"]["properties"]["a"]["type"], "number");
    }

    #[test]
    fn test_tool_call_returns_markdown_and_data() {
        let out = call(r#"{"jsonrpc":"2.0","id":3,"method":"tools/call","params":{"name":"quadratic_inequality","arguments":{"a":1,"b":-3,"c":2,"relation":">"}}}"#);
        let result = &out["result"];
        assert_eq!(result["isError"], false);
        assert_eq!(result["structuredContent"]["description"], "x < 1 or x > 2");
        let text = result["content"][0]["text"].as_str().unwrap();
        assert!(text.starts_with("## quadratic_inequality"));
    }

    #[test]
    fn test_engine_failure_is_tool_error() {
        let out = call(r#"{"jsonrpc":"2.0","id":4,"method":"tools/call","params":{"name":"linear","arguments":{"m":1}}}"#);
        assert!(out.get("error").is_none());
        assert_eq!(out["result"]["isError"], true);
        assert_eq!(out["result"]["structuredContent"]["error"]["code"], "ARG_MISSING");

        let out = call(r#"{"jsonrpc":"2.0","id":5,"method":"tools/call","params":{"name":"cubic","arguments":{}}}"#);
        assert_eq!(out["result"]["isError"], true);
        assert_eq!(out["result"]["structuredContent"]["error"]["code"], "UNKNOWN_TOOL");

        let out = call(r#"{"jsonrpc":"2.0","id":6,"method":"tools/call","params":{"name":"sample","arguments":{"function":"sqrt(x)","x_min":-4,"x_max":-1}}}"#);
        assert_eq!(out["result"]["isError"], true);
        let err = &out["result"]["structuredContent"]["error"];
        assert_eq!(err["code"], "DOMAIN_ERROR");
        assert_eq!(err["severity"], "warning");
    }

    #[test]
    fn test_bad_call_params() {
        let out = call(r#"{"jsonrpc":"2.0","id":6,"method":"tools/call"}"#);
        assert_eq!(out["error"]["code"], -32602);
        let out = call(r#"{"jsonrpc":"2.0","id":7,"method":"tools/call","params":{"arguments":{}}}"#);
        assert_eq!(out["error"]["code"], -32602);
        let out = call(r#"{"jsonrpc":"2.0","id":8,"method":"tools/call","params":{"name":"linear","arguments":[1]}}"#);
        assert_eq!(out["error"]["code"], -32602);
    }

    #[test]
    fn test_host_tools() {
        let out = call(r#"{"jsonrpc":"2.0","id":9,"method":"tools/call","params":{"name":"help","arguments":{"name":"sample"}}}"#);
        let text = out["result"]["content"][0]["text"].as_str().unwrap();
        assert!(text.starts_with("# sample"));

        let out = call(r#"{"jsonrpc":"2.0","id":10,"method":"tools/call","params":{"name":"help"}}"#);
        let text = out["result"]["content"][0]["text"].as_str().unwrap();
        assert!(text.contains("**solvers**"));

        let out = call(r#"{"jsonrpc":"2.0","id":11,"method":"tools/call","params":{"name":"list_tools","arguments":{"category":"catalog"}}}"#);
        assert_eq!(out["result"]["structuredContent"].as_array().unwrap().len(), 2);

        let out = call(r#"{"jsonrpc":"2.0","id":12,"method":"tools/call","params":{"name":"help","arguments":{"name":"nope"}}}"#);
        assert_eq!(out["result"]["isError"], true);
    }
}
