//! Stdio transport - one JSON-RPC message per line
//!
//! stdout carries protocol messages only; everything diagnostic goes to
//! stderr through `tracing`.

use crate::protocol::{error_codes, JsonRpcRequest, JsonRpcResponse, PROTOCOL_VERSION};
use crate::router::ToolRouter;
use serde_json::Value;
use shared::{Result, ServerError};
use std::io::{BufRead, Write};
use store::DocumentStore;

/// Name this server advertises during the initialize handshake.
pub const SERVER_NAME: &str = "seezeestudios";

/// Version advertised alongside the server name.
pub const SERVER_VERSION: &str = env!("CARGO_PKG_VERSION");

/// The transport adapter: binds the tool router to a line-delimited
/// JSON-RPC channel. Holds no state beyond the router.
#[derive(Debug)]
pub struct McpServer {
    router: ToolRouter,
}

impl McpServer {
    /// Create a server over a document store.
    pub fn new(store: DocumentStore) -> Self {
        Self {
            router: ToolRouter::new(store),
        }
    }

    /// Process messages until the channel closes.
    ///
    /// Generic over the channel ends so tests can drive it with in-memory
    /// buffers; production passes locked stdin/stdout.
    pub fn serve(&self, reader: impl BufRead, mut writer: impl Write) -> Result<()> {
        tracing::info!(
            server = SERVER_NAME,
            version = SERVER_VERSION,
            "MCP server running on stdio"
        );

        for line in reader.lines() {
            let line = line?;
            if let Some(response) = self.handle_line(&line) {
                let text = serde_json::to_string(&response)?;
                writeln!(writer, "{text}")?;
                writer.flush()?;
            }
        }

        tracing::info!("stdin closed, shutting down");
        Ok(())
    }

    /// Handle one raw line. Returns `None` for blank lines and
    /// notifications, which must not be answered.
    pub fn handle_line(&self, line: &str) -> Option<JsonRpcResponse> {
        let line = line.trim();
        if line.is_empty() {
            return None;
        }

        let request: JsonRpcRequest = match serde_json::from_str(line) {
            Ok(req) => req,
            Err(err) => {
                tracing::warn!(error = %err, "unparseable message");
                return Some(JsonRpcResponse::error(
                    Value::Null,
                    error_codes::PARSE_ERROR,
                    format!("Parse error: {err}"),
                ));
            }
        };

        self.handle_request(request)
    }

    fn handle_request(&self, request: JsonRpcRequest) -> Option<JsonRpcResponse> {
        // Notifications never get a response, even on error
        if request.is_notification() {
            tracing::debug!(method = %request.method, "notification");
            return None;
        }

        let id = request.id.clone().unwrap_or(Value::Null);

        if request.jsonrpc != "2.0" {
            return Some(JsonRpcResponse::error(
                id,
                error_codes::INVALID_REQUEST,
                "Invalid request: expected jsonrpc \"2.0\"",
            ));
        }

        tracing::debug!(method = %request.method, "request");

        let response = match request.method.as_str() {
            "initialize" => JsonRpcResponse::success(
                id,
                serde_json::json!({
                    "protocolVersion": PROTOCOL_VERSION,
                    "capabilities": { "tools": {} },
                    "serverInfo": {
                        "name": SERVER_NAME,
                        "version": SERVER_VERSION,
                    },
                }),
            ),

            "ping" => JsonRpcResponse::success(id, serde_json::json!({})),

            "tools/list" => JsonRpcResponse::success(
                id,
                serde_json::json!({ "tools": self.router.list_tools() }),
            ),

            "tools/call" => self.handle_tool_call(id, &request.params),

            other => JsonRpcResponse::error(
                id,
                error_codes::METHOD_NOT_FOUND,
                format!("Method not found: {other}"),
            ),
        };

        Some(response)
    }

    fn handle_tool_call(&self, id: Value, params: &Value) -> JsonRpcResponse {
        let name = match params.get("name").and_then(Value::as_str) {
            Some(name) => name,
            None => {
                return JsonRpcResponse::error(
                    id,
                    error_codes::INVALID_PARAMS,
                    "Invalid params: missing tool name",
                );
            }
        };

        match self.router.call(name) {
            Ok(text) => JsonRpcResponse::success(
                id,
                serde_json::json!({
                    "content": [{ "type": "text", "text": text }],
                }),
            ),
            Err(err) => {
                tracing::warn!(tool = name, error = %err, "tool call failed");
                JsonRpcResponse::error(id, error_code_for(&err), err.to_string())
            }
        }
    }
}

/// Map a dispatch failure onto a JSON-RPC error code.
fn error_code_for(err: &ServerError) -> i64 {
    match err {
        ServerError::UnknownTool(_) => error_codes::INVALID_PARAMS,
        _ => error_codes::INTERNAL_ERROR,
    }
}
