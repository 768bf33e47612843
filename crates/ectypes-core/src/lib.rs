//! ectypes-core: fabricación de fixtures para tests a partir de blueprints.
//!
//! Flujo típico:
//!
//! ```ignore
//! let mut ctx = create_context();
//! ctx.load(MyStrategy);
//! ctx.add(Blueprint::new("Project").field("title", || "ectypes"))?;
//! let project = ctx.producer_for("Project").unwrap().build().await?;
//! ```
//!
//! El core no genera datos ni hace IO: los generadores, befores y
//! estrategias los aporta el llamador.
pub mod blueprint;
pub mod constants;
pub mod engine;
pub mod errors;
pub mod injection;
pub mod model;
pub mod strategy;

pub use blueprint::{done, fail, Before, Blueprint, ChainedStep, Generator, StandaloneStep, StepOutput};
pub use engine::{create_context, Context, Producer};
pub use errors::{BoxError, EctypesError};
pub use injection::merge_into;
pub use model::{fields_from, Entity, Fields};
pub use strategy::Strategy;
