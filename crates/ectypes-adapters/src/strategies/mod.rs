//! Estrategias concretas.

pub mod failing;
pub mod memory;
pub mod store;
pub mod typed;

pub use failing::FailingStrategy;
pub use memory::InMemoryStrategy;
pub use store::MemoryStoreStrategy;
pub use typed::TypedStrategy;
