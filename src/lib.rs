//! spincube (workspace facade crate).
//!
//! Re-exports the workspace crates under one name so the binary, the
//! integration tests and the benches share a single import path.

pub use spincube_core as core;
pub use spincube_engine as engine;
pub use spincube_input as input;
pub use spincube_term as term;
pub use spincube_types as types;
