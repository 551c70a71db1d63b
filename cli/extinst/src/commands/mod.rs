//! CLI command implementations.

pub mod check;
pub mod dump;
pub mod envs;
pub mod import;
pub mod lookup;
