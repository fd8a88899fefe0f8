//! Convertix Plugin System
//!
//! Functions are pure computations registered by name. Unit and
//! electrical libraries load themselves into a `PluginRegistry`; callers
//! dispatch by name with an `EvalContext`.

mod traits;
mod registry;
mod context;

pub use traits::{FunctionPlugin, FunctionMeta, ArgMeta};
pub use registry::PluginRegistry;
pub use context::EvalContext;

/// Re-export core types for plugin authors
pub mod prelude {
    pub use crate::{FunctionPlugin, FunctionMeta, ArgMeta, PluginRegistry, EvalContext};
    pub use convertix_core::prelude::*;
}
