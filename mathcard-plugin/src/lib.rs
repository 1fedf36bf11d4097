//! MathCard Tool System
//!
//! Every engine operation is exposed as a named tool with static metadata,
//! so hosts can list, describe and call them uniformly.

mod traits;
mod registry;
mod context;

pub use traits::{ToolPlugin, ToolMeta, ArgMeta};
pub use registry::ToolRegistry;
pub use context::{EvalContext, DEFAULT_SAMPLES};

/// Re-export core types for tool authors
pub mod prelude {
    pub use crate::{ToolPlugin, ToolMeta, ArgMeta, ToolRegistry, EvalContext};
    pub use mathcard_core::prelude::*;
}
