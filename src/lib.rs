//! apidesign - Declarative API design language
//!
//! This crate re-exports all layers of apidesign for convenient access.
//! For detailed documentation, see the individual layer crates.
//!
//! # Architecture
//!
//! ```text
//! Layer 3: apidesign_dsl        - Validation and metadata DSL functions
//! Layer 2: apidesign_eval       - Evaluation context, current-target resolution, errors
//! Layer 1: apidesign_expr       - Declaration nodes, attribute types, records
//! Layer 0: apidesign_foundation - Core types (Value, Kind, Error)
//! ```

pub use apidesign_dsl as dsl;
pub use apidesign_eval as eval;
pub use apidesign_expr as expr;
pub use apidesign_foundation as foundation;
