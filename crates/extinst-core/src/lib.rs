//! Extended instruction set registry.
//!
//! Describes, per target environment, which extended instruction sets are
//! available, and resolves references to them:
//! - **Table selection:** [`ext_inst_table`] maps a [`TargetEnv`] to its shared [`ExtInstTable`]
//! - **Import names:** [`resolve_import_name`] maps an `OpExtInstImport` string to an [`ExtInstSet`]
//! - **Instruction lookup:** by name for assembly, by opcode for disassembly
//!
//! All tables are immutable after their one-time build and safe to share
//! across threads.

pub mod check;
pub mod descriptor;
pub mod env;
pub mod error;
pub mod export;
pub mod grammar;
pub mod group;
pub mod registry;
pub mod set;
pub mod table;

pub use descriptor::{Capability, InstructionDescriptor, OperandKind};
pub use env::{TableFamily, TargetEnv};
pub use error::{ExtInstError, Result};
pub use group::ExtensionGroup;
pub use registry::{ext_inst_table, ext_inst_table_for_name, ext_inst_table_for_raw};
pub use set::{resolve_import_name, ExtInstSet};
pub use table::{lookup_by_name, lookup_by_opcode, ExtInstTable};
