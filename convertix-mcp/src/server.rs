//! JSON-RPC request handling for the MCP server

use std::sync::Arc;
use convertix_core::Value;
use convertix_plugin::{EvalContext, PluginRegistry};
use serde::{Deserialize, Serialize};
use serde_json::{json, Value as JsonValue};
use tracing::{debug, info, warn};
use crate::config::ServerConfig;

pub const PROTOCOL_VERSION: &str = "2025-11-25";
/// Revisions a client may negotiate; anything else gets PROTOCOL_VERSION
pub const SUPPORTED_PROTOCOL_VERSIONS: &[&str] =
    &["2025-11-25", "2025-06-18", "2025-03-26", "2024-11-05"];
pub const SERVER_NAME: &str = "convertix";
pub const SERVER_VERSION: &str = env!("CARGO_PKG_VERSION");

pub const PARSE_ERROR: i32 = -32700;
pub const INVALID_REQUEST: i32 = -32600;
pub const METHOD_NOT_FOUND: i32 = -32601;
pub const INVALID_PARAMS: i32 = -32602;

// MCP Protocol types
#[derive(Debug, Deserialize)]
pub struct McpRequest {
    #[allow(dead_code)]
    pub jsonrpc: String,
    pub id: Option<JsonValue>,
    pub method: String,
    #[serde(default)]
    pub params: Option<JsonValue>,
}

#[derive(Debug, Serialize)]
pub struct McpResponse {
    pub jsonrpc: String,
    /// Null when the request id could not be read
    pub id: JsonValue,
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
    fn invalid_params(message: impl Into<String>) -> Self {
        McpError { code: INVALID_PARAMS, message: message.into(), data: None }
    }
}

impl McpResponse {
    fn new(id: JsonValue, result: Result<JsonValue, McpError>) -> Self {
        match result {
            Ok(r) => McpResponse { jsonrpc: "2.0".to_string(), id, result: Some(r), error: None },
            Err(e) => McpResponse { jsonrpc: "2.0".to_string(), id, result: None, error: Some(e) },
        }
    }
}

/// Build the registry with every function library loaded
pub fn standard_registry() -> PluginRegistry {
    let registry = PluginRegistry::new();
    let registry = convertix_units::load_units_library(registry);
    convertix_electric::load_electric_library(registry)
}

pub struct Server {
    registry: Arc<PluginRegistry>,
    config: ServerConfig,
}

impl Server {
    pub fn new(config: ServerConfig) -> Self {
        Self {
            registry: Arc::new(standard_registry()),
            config,
        }
    }

    fn context(&self) -> EvalContext {
        EvalContext::new().with_decimals(self.config.decimals)
    }

    /// Handle one line of input. Notifications yield no response.
    pub fn handle_line(&self, line: &str) -> Option<McpResponse> {
        let message: JsonValue = match serde_json::from_str(line) {
            Ok(m) => m,
            Err(e) => {
                warn!("invalid JSON: {}", e);
                return Some(McpResponse::new(JsonValue::Null, Err(McpError {
                    code: PARSE_ERROR,
                    message: format!("Parse error: {}", e),
                    data: None,
                })));
            }
        };

        let id = message.get("id").cloned().unwrap_or(JsonValue::Null);
        let request: McpRequest = match serde_json::from_value(message) {
            Ok(r) => r,
            Err(e) => {
                warn!("invalid JSON-RPC request: {}", e);
                return Some(McpResponse::new(id, Err(McpError {
                    code: INVALID_REQUEST,
                    message: format!("Invalid Request: {}", e),
                    data: None,
                })));
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

    pub fn handle_request(&self, request: &McpRequest) -> McpResponse {
        let result = match request.method.as_str() {
            // Lifecycle
            "initialize" => self.handle_initialize(&request.params),
            "initialized" | "notifications/initialized" => Ok(json!({})),
            "ping" => Ok(json!({})),

            // Tools
            "tools/list" => Ok(tools_list()),
            "tools/call" => self.handle_tool_call(&request.params),

            _ => Err(McpError {
                code: METHOD_NOT_FOUND,
                message: format!("Method not found: {}", request.method),
                data: None,
            }),
        };

        McpResponse::new(request.id.clone().unwrap_or(JsonValue::Null), result)
    }

    fn handle_initialize(&self, params: &Option<JsonValue>) -> Result<JsonValue, McpError> {
        let client_info = params.as_ref()
            .and_then(|p| p.get("clientInfo"))
            .and_then(|c| c.get("name"))
            .and_then(|n| n.as_str())
            .unwrap_or("unknown");

        let requested = params.as_ref()
            .and_then(|p| p.get("protocolVersion"))
            .and_then(|v| v.as_str());

        // Agree on the client's revision only when we speak it
        let protocol = match requested {
            Some(v) if SUPPORTED_PROTOCOL_VERSIONS.contains(&v) => v,
            _ => PROTOCOL_VERSION,
        };

        info!(client = client_info, requested = ?requested, protocol, "client connected");

        Ok(json!({
            "protocolVersion": protocol,
            "serverInfo": {
                "name": SERVER_NAME,
                "version": SERVER_VERSION,
                "description": "Unit conversion and Ohm's law calculator"
            },
            "capabilities": {
                "tools": {
                    "listChanged": false
                }
            },
            "instructions": "Convertix converts values between units of the same category (weight, length, volume, temperature, speed, area, pressure, energy, time, angle, density, power, torque, voltage, current, resistance). Use list_categories to discover units, convert for a single conversion and ohms_law for circuit values."
        }))
    }

    fn handle_tool_call(&self, params: &Option<JsonValue>) -> Result<JsonValue, McpError> {
        let params = params.as_ref().ok_or_else(|| McpError::invalid_params("Missing params"))?;

        let name = params.get("name")
            .and_then(|v| v.as_str())
            .ok_or_else(|| McpError::invalid_params("Missing tool name"))?;

        let args = params.get("arguments").cloned().unwrap_or(json!({}));
        info!(tool = name, "tool call");

        match name {
            "convert" => self.tool_convert(&args),
            "convert_all" => self.tool_convert_all(&args),
            "list_categories" => Ok(self.call_tool("list_categories", &[], "Categories listed")),
            "list_units" => self.tool_list_units(&args),
            "ohms_law" => self.tool_ohms_law(&args),
            "call" => self.tool_call(&args),
            "help" => Ok(self.tool_help(&args)),
            "list_functions" => Ok(self.tool_list_functions(&args)),
            _ => Err(McpError::invalid_params(format!("Unknown tool: {}", name))),
        }
    }

    fn tool_convert(&self, args: &JsonValue) -> Result<JsonValue, McpError> {
        let value = required(args, "value")?;
        let from = required_str(args, "from")?;
        let to = required_str(args, "to")?;

        let ctx = self.context();
        let input = Value::from_json(value);
        let result = self.registry.call_function("convert", &[
            input.clone(),
            Value::from(from),
            Value::from(to),
        ], &ctx);

        let text = match (&input.to_number(), &result) {
            (Ok(v), Value::Number(r)) => format!("{} {} = {} {}", ctx.format(*v), from, ctx.format(*r), to),
            _ => render(&result, &ctx),
        };
        Ok(tool_result(&result, text))
    }

    fn tool_convert_all(&self, args: &JsonValue) -> Result<JsonValue, McpError> {
        let value = required(args, "value")?;
        let unit = required_str(args, "unit")?;
        let call_args = [Value::from_json(value), Value::from(unit)];
        Ok(self.call_tool("convert_all", &call_args, ""))
    }

    fn tool_list_units(&self, args: &JsonValue) -> Result<JsonValue, McpError> {
        let category = required_str(args, "category")?;
        Ok(self.call_tool("list_units", &[Value::from(category)], ""))
    }

    fn tool_ohms_law(&self, args: &JsonValue) -> Result<JsonValue, McpError> {
        let pick = |key: &str| args.get(key).map(Value::from_json).unwrap_or(Value::Null);
        let call_args = [pick("voltage"), pick("current"), pick("resistance")];
        Ok(self.call_tool("ohms_law", &call_args, ""))
    }

    fn tool_call(&self, args: &JsonValue) -> Result<JsonValue, McpError> {
        let name = required_str(args, "name")?;
        let call_args: Vec<Value> = match args.get("args") {
            None | Some(JsonValue::Null) => Vec::new(),
            Some(JsonValue::Array(items)) => items.iter().map(Value::from_json).collect(),
            Some(_) => return Err(McpError::invalid_params("'args' must be an array")),
        };
        Ok(self.call_tool(name, &call_args, ""))
    }

    fn tool_help(&self, args: &JsonValue) -> JsonValue {
        let name = args.get("name").and_then(|v| v.as_str());
        let help = self.registry.help(name);
        tool_result(&help, format_help(&help))
    }

    fn tool_list_functions(&self, args: &JsonValue) -> JsonValue {
        let category = args.get("category").and_then(|v| v.as_str());
        let functions = self.registry.list_functions(category);
        self.wrap(&functions, "Functions listed")
    }

    /// Call a registered function and wrap its value as a tool result.
    /// An empty `summary` renders the value itself as the text content.
    fn call_tool(&self, name: &str, args: &[Value], summary: &str) -> JsonValue {
        let result = self.registry.call_function(name, args, &self.context());
        self.wrap(&result, summary)
    }

    fn wrap(&self, value: &Value, summary: &str) -> JsonValue {
        let text = if summary.is_empty() || value.is_error() {
            render(value, &self.context())
        } else {
            summary.to_string()
        };
        tool_result(value, text)
    }
}

fn required<'a>(args: &'a JsonValue, key: &str) -> Result<&'a JsonValue, McpError> {
    args.get(key)
        .filter(|v| !v.is_null())
        .ok_or_else(|| McpError::invalid_params(format!("Missing {} argument", key)))
}

fn required_str<'a>(args: &'a JsonValue, key: &str) -> Result<&'a str, McpError> {
    required(args, key)?
        .as_str()
        .ok_or_else(|| McpError::invalid_params(format!("Argument {} must be a string", key)))
}

fn tool_result(value: &Value, text: String) -> JsonValue {
    json!({
        "content": [{ "type": "text", "text": text }],
        "data": value.to_json(),
        "isError": value.is_error()
    })
}

/// Text rendering of a function result
fn render(value: &Value, ctx: &EvalContext) -> String {
    match value {
        Value::Number(n) => ctx.format(*n),
        Value::Text(s) => s.clone(),
        Value::Error(e) => match &e.suggestion {
            Some(s) => format!("Error [{}]: {}\n{}", e.code, e.message, s),
            None => format!("Error [{}]: {}", e.code, e.message),
        },
        other => serde_json::to_string_pretty(&other.to_json()).unwrap_or_else(|_| other.to_string()),
    }
}

fn format_help(help: &Value) -> String {
    match help {
        Value::Object(map) => {
            let mut out = String::new();
            if let Some(Value::Text(n)) = map.get("name") { out.push_str(&format!("# {}\n\n", n)); }
            if let Some(Value::Text(d)) = map.get("description") { out.push_str(&format!("{}\n\n", d)); }
            if let Some(Value::Text(u)) = map.get("usage") { out.push_str(&format!("**Usage:** `{}`\n\n", u)); }
            if let Some(Value::Object(groups)) = map.get("functions") {
                let mut categories: Vec<_> = groups.iter().collect();
                categories.sort_by(|a, b| a.0.cmp(b.0));
                for (category, names) in categories {
                    let names: Vec<&str> = names.as_list().unwrap_or(&[]).iter().filter_map(Value::as_text).collect();
                    out.push_str(&format!("**{}:** {}\n", category, names.join(", ")));
                }
            }
            if let Some(Value::List(examples)) = map.get("examples") {
                for example in examples.iter().filter_map(Value::as_text) {
                    out.push_str(&format!("- `{}`\n", example));
                }
            }
            if out.is_empty() {
                serde_json::to_string_pretty(&help.to_json()).unwrap_or_default()
            } else {
                out
            }
        }
        Value::Error(e) => format!("Error: {}", e.message),
        other => other.to_string(),
    }
}

fn tools_list() -> JsonValue {
    json!({
        "tools": [
            {
                "name": "convert",
                "description": "Convert a value between two units of the same category. Example: value=1, from=\"mi\", to=\"ft\" gives 5280.",
                "inputSchema": {
                    "type": "object",
                    "properties": {
                        "value": { "type": ["number", "string"], "description": "Value to convert; partial entries like \"-\" read as 0" },
                        "from": { "type": "string", "description": "Source unit symbol or name (e.g. \"kg\", \"celsius\")" },
                        "to": { "type": "string", "description": "Target unit symbol or name" }
                    },
                    "required": ["value", "from", "to"]
                }
            },
            {
                "name": "convert_all",
                "description": "Convert a value into every unit of its category",
                "inputSchema": {
                    "type": "object",
                    "properties": {
                        "value": { "type": ["number", "string"] },
                        "unit": { "type": "string", "description": "Source unit" }
                    },
                    "required": ["value", "unit"]
                }
            },
            {
                "name": "list_categories",
                "description": "List categories with their base unit, default units and unit symbols",
                "inputSchema": { "type": "object", "properties": {} }
            },
            {
                "name": "list_units",
                "description": "List the units of one category with their factor to the base unit",
                "inputSchema": {
                    "type": "object",
                    "properties": {
                        "category": { "type": "string", "description": "Category name, e.g. \"pressure\"" }
                    },
                    "required": ["category"]
                }
            },
            {
                "name": "ohms_law",
                "description": "Given any two of voltage (V), current (A) and resistance (Ω), derive the third and the power (W)",
                "inputSchema": {
                    "type": "object",
                    "properties": {
                        "voltage": { "type": "number" },
                        "current": { "type": "number" },
                        "resistance": { "type": "number" }
                    }
                }
            },
            {
                "name": "call",
                "description": "Call any registered function by name with positional arguments. Use list_functions to discover names.",
                "inputSchema": {
                    "type": "object",
                    "properties": {
                        "name": { "type": "string" },
                        "args": { "type": "array", "items": {} }
                    },
                    "required": ["name"]
                }
            },
            {
                "name": "help",
                "description": "Documentation for a function, or an overview when no name is given",
                "inputSchema": {
                    "type": "object",
                    "properties": {
                        "name": { "type": "string" }
                    }
                }
            },
            {
                "name": "list_functions",
                "description": "List registered functions, optionally filtered by category (\"units\" or \"electric\")",
                "inputSchema": {
                    "type": "object",
                    "properties": {
                        "category": { "type": "string" }
                    }
                }
            }
        ]
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    fn server() -> Server {
        Server::new(ServerConfig::default())
    }

    fn call(server: &Server, line: &str) -> JsonValue {
        let response = server.handle_line(line).expect("response");
        serde_json::to_value(&response).unwrap()
    }

    fn tool(server: &Server, name: &str, arguments: JsonValue) -> JsonValue {
        let request = json!({
            "jsonrpc": "2.0", "id": 1, "method": "tools/call",
            "params": { "name": name, "arguments": arguments }
        });
        call(server, &request.to_string())["result"].clone()
    }

    #[test]
    fn test_initialize() {
        let response = call(&server(), r#"{"jsonrpc":"2.0","id":1,"method":"initialize","params":{}}"#);
        assert_eq!(response["result"]["protocolVersion"], PROTOCOL_VERSION);
        assert_eq!(response["result"]["serverInfo"]["name"], "convertix");
        assert_eq!(response["id"], 1);
    }

    #[test]
    fn test_ping() {
        let response = call(&server(), r#"{"jsonrpc":"2.0","id":"a","method":"ping"}"#);
        assert_eq!(response["result"], json!({}));
    }

    #[test]
    fn test_notification_gets_no_response() {
        let line = r#"{"jsonrpc":"2.0","method":"notifications/initialized"}"#;
        assert!(server().handle_line(line).is_none());
    }

    #[test]
    fn test_parse_error() {
        let response = call(&server(), "{not json");
        assert_eq!(response["error"]["code"], PARSE_ERROR);
        assert_eq!(response.get("id"), Some(&JsonValue::Null));
    }

    #[test]
    fn test_invalid_request_keeps_id() {
        let response = call(&server(), r#"{"jsonrpc":"2.0","id":7}"#);
        assert_eq!(response["error"]["code"], INVALID_REQUEST);
        assert_eq!(response["id"], 7);

        let response = call(&server(), r#"[1, 2]"#);
        assert_eq!(response["error"]["code"], INVALID_REQUEST);
        assert_eq!(response.get("id"), Some(&JsonValue::Null));
    }

    #[test]
    fn test_initialize_negotiates_version() {
        let request = |version: &str| json!({
            "jsonrpc": "2.0", "id": 1, "method": "initialize",
            "params": { "protocolVersion": version }
        }).to_string();

        let response = call(&server(), &request("1999-01-01"));
        assert_eq!(response["result"]["protocolVersion"], PROTOCOL_VERSION);

        let response = call(&server(), &request("2025-06-18"));
        assert_eq!(response["result"]["protocolVersion"], "2025-06-18");
    }

    #[test]
    fn test_unknown_method() {
        let response = call(&server(), r#"{"jsonrpc":"2.0","id":2,"method":"resources/list"}"#);
        assert_eq!(response["error"]["code"], METHOD_NOT_FOUND);
    }

    #[test]
    fn test_tools_list() {
        let response = call(&server(), r#"{"jsonrpc":"2.0","id":3,"method":"tools/list"}"#);
        let names: Vec<&str> = response["result"]["tools"].as_array().unwrap()
            .iter()
            .filter_map(|t| t["name"].as_str())
            .collect();
        assert_eq!(names, vec![
            "convert", "convert_all", "list_categories", "list_units",
            "ohms_law", "call", "help", "list_functions",
        ]);
    }

    #[test]
    fn test_convert_tool() {
        let result = tool(&server(), "convert", json!({"value": 1000, "from": "g", "to": "kg"}));
        assert_eq!(result["isError"], false);
        assert_eq!(result["data"], 1.0);
        assert_eq!(result["content"][0]["text"], "1000 g = 1 kg");
    }

    #[test]
    fn test_convert_tool_text_value() {
        let result = tool(&server(), "convert", json!({"value": "100", "from": "°C", "to": "°F"}));
        assert_eq!(result["content"][0]["text"], "100 °C = 212 °F");
    }

    #[test]
    fn test_convert_tool_respects_decimals() {
        let server = Server::new(ServerConfig { decimals: 2 });
        let result = tool(&server, "convert", json!({"value": 1, "from": "kg", "to": "lb"}));
        assert_eq!(result["content"][0]["text"], "1 kg = 2.2 lb");
    }

    #[test]
    fn test_convert_tool_incompatible_is_tool_error() {
        let result = tool(&server(), "convert", json!({"value": 1, "from": "kg", "to": "m"}));
        assert_eq!(result["isError"], true);
        assert_eq!(result["data"]["_error"]["code"], "INCOMPATIBLE_UNITS");
    }

    #[test]
    fn test_convert_tool_missing_argument() {
        let request = json!({
            "jsonrpc": "2.0", "id": 4, "method": "tools/call",
            "params": { "name": "convert", "arguments": {"value": 1, "from": "kg"} }
        });
        let response = call(&server(), &request.to_string());
        assert_eq!(response["error"]["code"], INVALID_PARAMS);
    }

    #[test]
    fn test_unknown_tool() {
        let request = json!({
            "jsonrpc": "2.0", "id": 5, "method": "tools/call",
            "params": { "name": "eval", "arguments": {} }
        });
        let response = call(&server(), &request.to_string());
        assert_eq!(response["error"]["code"], INVALID_PARAMS);
    }

    #[test]
    fn test_convert_all_tool() {
        let result = tool(&server(), "convert_all", json!({"value": 1, "unit": "kV"}));
        assert_eq!(result["data"]["V"], 1000.0);
        assert_eq!(result["data"]["kV"], 1.0);
    }

    #[test]
    fn test_list_categories_tool() {
        let result = tool(&server(), "list_categories", json!({}));
        assert_eq!(result["data"].as_array().map(|a| a.len()), Some(16));
        assert_eq!(result["content"][0]["text"], "Categories listed");
    }

    #[test]
    fn test_list_units_tool() {
        let result = tool(&server(), "list_units", json!({"category": "resistance"}));
        let symbols: Vec<&str> = result["data"].as_array().unwrap()
            .iter()
            .filter_map(|u| u["symbol"].as_str())
            .collect();
        assert_eq!(symbols, vec!["Ω", "kΩ", "MΩ"]);
    }

    #[test]
    fn test_ohms_law_tool() {
        let result = tool(&server(), "ohms_law", json!({"current": 2, "resistance": 5}));
        assert_eq!(result["data"]["voltage"], 10.0);
        assert_eq!(result["data"]["power"], 20.0);

        let result = tool(&server(), "ohms_law", json!({"voltage": 5, "current": 0}));
        assert_eq!(result["isError"], true);
    }

    #[test]
    fn test_call_tool() {
        let result = tool(&server(), "call", json!({"name": "voltage", "args": [2, 5]}));
        assert_eq!(result["data"], 10.0);
        assert_eq!(result["content"][0]["text"], "10");

        let result = tool(&server(), "call", json!({"name": "in_units", "args": [1, "atm->Pa"]}));
        assert_eq!(result["data"], 101325.0);
    }

    #[test]
    fn test_call_tool_unknown_function() {
        let result = tool(&server(), "call", json!({"name": "conver", "args": []}));
        assert_eq!(result["isError"], true);
        assert_eq!(result["data"]["_error"]["code"], "UNDEFINED_FUNC");
    }

    #[test]
    fn test_help_tool() {
        let result = tool(&server(), "help", json!({"name": "convert"}));
        let text = result["content"][0]["text"].as_str().unwrap();
        assert!(text.starts_with("# convert"));
    }

    #[test]
    fn test_list_functions_tool() {
        let result = tool(&server(), "list_functions", json!({"category": "electric"}));
        assert_eq!(result["data"].as_array().map(|a| a.len()), Some(7));

        let result = tool(&server(), "list_functions", json!({}));
        assert_eq!(result["data"].as_array().map(|a| a.len()), Some(15));
    }
}
