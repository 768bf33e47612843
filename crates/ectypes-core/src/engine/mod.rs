//! Engine: contexto, compilación de blueprints y pipeline de build.

pub mod context;
mod pipeline;
pub mod producer;

pub use context::{create_context, Context};
pub use producer::Producer;
