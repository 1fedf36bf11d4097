//! Markdown renderer
//!
//! Renders a tool result as a two-column `property | value` table.

use mathcard_core::NumberFormat;
use serde_json::{Map, Value};

/// Suffix of the display-text companion of a structured field
const DESCRIPTION_SUFFIX: &str = "_description";

/// Result renderer
pub struct Renderer {
    format: NumberFormat,
}

impl Renderer {
    pub fn new(format: NumberFormat) -> Self {
        Self { format }
    }

    /// Render a tool result under a `## title` heading
    pub fn render(&self, title: &str, data: &Value) -> String {
        let mut output = format!("## {}\n\n", title);
        output.push_str("| property | value |\n");
        output.push_str("|----------|-------|\n");

        let mut rows = Vec::new();
        match data {
            Value::Object(map) => self.collect_rows("", map, &mut rows),
            other => rows.push(("result".to_string(), self.render_value(other))),
        }
        for (property, value) in rows {
            output.push_str(&format!("| {} | {} |\n", property, escape(&value)));
        }
        output
    }

    /// Flatten an object into rows.
    ///
    /// A field with a `<name>_description` sibling is shown through that
    /// text, and the sibling itself is not repeated.
    fn collect_rows(&self, prefix: &str, map: &Map<String, Value>, rows: &mut Vec<(String, String)>) {
        for (key, value) in map {
            if let Some(base) = key.strip_suffix(DESCRIPTION_SUFFIX) {
                if map.contains_key(base) {
                    continue;
                }
            }
            let property = if prefix.is_empty() { key.clone() } else { format!("{}.{}", prefix, key) };
            let description = map
                .get(&format!("{}{}", key, DESCRIPTION_SUFFIX))
                .and_then(Value::as_str);

            match (description, value) {
                (Some(text), _) => rows.push((property, text.to_string())),
                (None, Value::Object(inner)) if !is_point(inner) => {
                    self.collect_rows(&property, inner, rows)
                }
                (None, other) => rows.push((property, self.render_value(other))),
            }
        }
    }

    fn render_value(&self, value: &Value) -> String {
        match value {
            Value::Null => "none".to_string(),
            Value::Bool(b) => b.to_string(),
            Value::Number(n) => n
                .as_f64()
                .map(|x| self.format.compact(x))
                .unwrap_or_else(|| n.to_string()),
            Value::String(s) => s.clone(),
            Value::Array(items) if items.iter().all(is_scalar) => {
                if items.is_empty() {
                    "none".to_string()
                } else {
                    items.iter().map(|v| self.render_value(v)).collect::<Vec<_>>().join(", ")
                }
            }
            Value::Array(items) => format!("[{} items]", items.len()),
            Value::Object(map) if is_point(map) => format!(
                "({}, {})",
                self.render_value(&map["x"]),
                self.render_value(&map["y"])
            ),
            Value::Object(map) => format!("[{} fields]", map.len()),
        }
    }
}

impl Default for Renderer {
    fn default() -> Self {
        Self::new(NumberFormat::default())
    }
}

fn is_scalar(value: &Value) -> bool {
    !matches!(value, Value::Array(_) | Value::Object(_))
}

fn is_point(map: &Map<String, Value>) -> bool {
    map.len() == 2 && map.contains_key("x") && map.contains_key("y")
}

/// Keep cell text from breaking the table
fn escape(text: &str) -> String {
    text.replace('|', "\\|").replace('\n', " ")
}
