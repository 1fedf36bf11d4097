//! MathCard - Function Analysis Cards
//!
//! Runs engine tools by name and returns both the structured record and a
//! markdown table of it.

mod render;

pub use render::Renderer;
pub use mathcard_core::{EngineError, NumberFormat, Severity};
pub use mathcard_plugin::{EvalContext, ToolRegistry};

use serde::Serialize;
use serde_json::Value;
use std::sync::Arc;

/// Result of one tool call
#[derive(Debug, Clone, Serialize)]
pub struct ToolResult {
    pub tool: String,
    pub data: Value,
    pub markdown: String,
}

/// Main MathCard engine
pub struct MathCard {
    registry: Arc<ToolRegistry>,
    context: EvalContext,
}

impl MathCard {
    pub fn new(registry: ToolRegistry) -> Self {
        Self {
            registry: Arc::new(registry),
            context: EvalContext::default(),
        }
    }

    pub fn with_standard_tools() -> Self {
        Self::new(mathcard_engine::engine_registry())
    }

    /// Decimal places in display text (clamped to 12)
    pub fn with_precision(mut self, precision: u32) -> Self {
        self.context = self.context.with_precision(precision);
        self
    }

    /// Default grid size for `sample`
    pub fn with_samples(mut self, samples: usize) -> Self {
        self.context = self.context.with_samples(samples);
        self
    }

    pub fn context(&self) -> &EvalContext {
        &self.context
    }

    pub fn registry(&self) -> Arc<ToolRegistry> {
        self.registry.clone()
    }

    pub fn call(&self, tool: &str, args: &Value) -> Result<ToolResult, EngineError> {
        let data = self.registry.call_tool(tool, args, &self.context)?;
        let markdown = Renderer::new(self.context.format()).render(tool, &data);
        Ok(ToolResult {
            tool: tool.to_string(),
            data,
            markdown,
        })
    }

    pub fn help(&self, name: Option<&str>) -> Result<Value, EngineError> {
        self.registry.help(name)
    }

    pub fn list_tools(&self, category: Option<&str>) -> Value {
        self.registry.list_tools(category)
    }
}

impl Default for MathCard {
    fn default() -> Self {
        Self::with_standard_tools()
    }
}
