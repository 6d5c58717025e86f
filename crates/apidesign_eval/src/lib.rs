//! Evaluation context for apidesign designs.
//!
//! A design is evaluated by running nested declaration closures against an
//! [`EvalContext`]. The context owns the [`Design`](apidesign_expr::Design)
//! being built, tracks which node is currently open, and collects every
//! error reported along the way so a single pass surfaces all problems.
//!
//! # Module Structure
//!
//! - `config` - Evaluation settings
//! - `collector` - Error accumulation
//! - `context` - The evaluation stack and current-target resolution
//! - `builder` - Scoped declaration methods that grow the tree

#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]

mod builder;
pub mod collector;
pub mod config;
pub mod context;

pub use collector::ErrorCollector;
pub use config::EvalConfig;
pub use context::{EvalContext, Reporter, Step, Target, run};
