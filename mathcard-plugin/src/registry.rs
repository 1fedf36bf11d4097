//! Tool Registry

use crate::{EvalContext, ToolMeta, ToolPlugin};
use mathcard_core::EngineError;
use serde_json::{json, Map, Value};
use std::collections::{BTreeMap, HashMap, HashSet};
use std::sync::Arc;
use tracing::debug;

/// Central tool registry
pub struct ToolRegistry {
    tools: HashMap<String, Arc<dyn ToolPlugin>>,
}

impl ToolRegistry {
    pub fn new() -> Self {
        Self { tools: HashMap::new() }
    }

    pub fn with_tool<T: ToolPlugin + 'static>(mut self, tool: T) -> Self {
        let name = tool.meta().name.to_lowercase();
        self.tools.insert(name, Arc::new(tool));
        self
    }

    pub fn get_tool(&self, name: &str) -> Option<&dyn ToolPlugin> {
        self.tools.get(&name.to_lowercase()).map(|t| t.as_ref())
    }

    pub fn len(&self) -> usize {
        self.tools.len()
    }

    pub fn is_empty(&self) -> bool {
        self.tools.is_empty()
    }

    /// Metadata of every tool, sorted by name
    pub fn metas(&self) -> Vec<ToolMeta> {
        let mut metas: Vec<ToolMeta> = self.tools.values().map(|t| t.meta()).collect();
        metas.sort_by(|a, b| a.name.cmp(b.name));
        metas
    }

    pub fn call_tool(&self, name: &str, args: &Value, ctx: &EvalContext) -> Result<Value, EngineError> {
        debug!(tool = name, "calling tool");
        match self.get_tool(name) {
            Some(tool) => tool.call(args, ctx).map_err(|e| match e.context {
                Some(ref c) if c.tool.is_some() => e,
                _ => e.in_tool(name),
            }),
            None => {
                // Find similar tool names for better error message
                let similar = self.find_similar_tools(name);
                let mut err = EngineError::unknown_tool(name);
                if !similar.is_empty() {
                    let suggestions: Vec<&str> = similar.iter().take(5).map(|s| s.as_str()).collect();
                    err = err.with_suggestion(format!(
                        "Similar: {}. Use list_tools for full list.",
                        suggestions.join(", ")
                    ));
                }
                Err(err)
            }
        }
    }

    /// Find tool names similar to the given name (for error suggestions)
    fn find_similar_tools(&self, name: &str) -> Vec<String> {
        let name_lower = name.to_lowercase();
        let mut matches: Vec<(String, usize)> = self.tools.keys()
            .filter_map(|tool_name| {
                let score = Self::similarity_score(&name_lower, tool_name);
                (score >= Self::MIN_SIMILARITY).then(|| (tool_name.clone(), score))
            })
            .collect();

        // Higher score first, then by name so suggestions are stable
        matches.sort_by(|a, b| b.1.cmp(&a.1).then_with(|| a.0.cmp(&b.0)));
        matches.into_iter().map(|(name, _)| name).collect()
    }

    const MIN_SIMILARITY: usize = 10;

    fn similarity_score(query: &str, candidate: &str) -> usize {
        let mut score = 0;

        if candidate.starts_with(query) {
            score += 100;
        } else if candidate.contains(query) {
            score += 50;
        } else if query.contains(candidate) {
            score += 30;
        }

        let query_chars: HashSet<char> = query.chars().collect();
        let candidate_chars: HashSet<char> = candidate.chars().collect();
        score += query_chars.intersection(&candidate_chars).count() * 2;

        let len_diff = query.len().abs_diff(candidate.len());
        if len_diff < 5 && score > 0 {
            score += 5 - len_diff;
        }

        score
    }

    pub fn help(&self, name: Option<&str>) -> Result<Value, EngineError> {
        match name {
            Some(n) => self.help_for(n),
            None => Ok(self.general_help()),
        }
    }

    fn help_for(&self, name: &str) -> Result<Value, EngineError> {
        let tool = self.get_tool(name).ok_or_else(|| EngineError::not_found(name))?;
        let meta = tool.meta();
        Ok(json!({
            "name": meta.name,
            "description": meta.description,
            "usage": meta.usage,
            "returns": meta.returns,
            "category": meta.category,
            "args": meta.args,
            "examples": meta.examples,
            "related": meta.related,
        }))
    }

    fn general_help(&self) -> Value {
        let mut by_category: BTreeMap<&'static str, Vec<&'static str>> = BTreeMap::new();
        for meta in self.metas() {
            by_category.entry(meta.category).or_default().push(meta.name);
        }
        let tools: Map<String, Value> = by_category
            .into_iter()
            .map(|(cat, names)| (cat.to_string(), json!(names)))
            .collect();
        json!({
            "tools": tools,
            "usage": "Call help('tool_name') for detailed help.",
        })
    }

    pub fn list_tools(&self, category: Option<&str>) -> Value {
        let tools: Vec<Value> = self.metas()
            .into_iter()
            .filter(|m| category.map_or(true, |c| m.category == c))
            .map(|m| json!({
                "name": m.name,
                "description": m.description,
                "usage": m.usage,
                "category": m.category,
            }))
            .collect();
        Value::Array(tools)
    }
}

impl Default for ToolRegistry {
    fn default() -> Self {
        Self::new()
    }
}
