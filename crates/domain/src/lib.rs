//! Stencil Domain - Core template types
//!
//! This crate defines the domain model for the Stencil template renderer:
//! variable names and bindings, the layered variable store, and the
//! constructs a template can contain. All types here are pure Rust with no
//! I/O dependencies; the process environment is read, never written.

pub mod error;
pub mod store;
pub mod template;
pub mod variable;

pub use error::{DomainError, DomainResult};
pub use store::VariableStore;
pub use template::{DefaultDeclaration, ResolvedSet};
pub use variable::{Binding, is_valid_name, quote_value};
