//! Environment tables and instruction lookup.

use crate::descriptor::InstructionDescriptor;
use crate::env::TableFamily;
use crate::error::{ExtInstError, Result};
use crate::group::ExtensionGroup;
use crate::set::ExtInstSet;

/// The extended instruction sets usable in one family of target environments.
#[derive(Debug, Clone)]
pub struct ExtInstTable {
    family: TableFamily,
    groups: Vec<ExtensionGroup>,
}

impl ExtInstTable {
    /// Assemble a table. At most one group per set.
    pub fn new(family: TableFamily, groups: Vec<ExtensionGroup>) -> Result<Self> {
        for (i, group) in groups.iter().enumerate() {
            if groups[..i].iter().any(|g| g.set() == group.set()) {
                return Err(ExtInstError::DuplicateSet { set: group.set() });
            }
        }
        Ok(Self { family, groups })
    }

    pub fn family(&self) -> TableFamily {
        self.family
    }

    pub fn groups(&self) -> &[ExtensionGroup] {
        &self.groups
    }

    /// The group for `set`, if this table carries it.
    pub fn group(&self, set: ExtInstSet) -> Option<&ExtensionGroup> {
        self.groups.iter().find(|g| g.set() == set)
    }

    pub fn contains(&self, set: ExtInstSet) -> bool {
        self.group(set).is_some()
    }

    /// Sets carried by this table, in group order.
    pub fn sets(&self) -> impl Iterator<Item = ExtInstSet> + '_ {
        self.groups.iter().map(|g| g.set())
    }

    /// Number of groups.
    pub fn len(&self) -> usize {
        self.groups.len()
    }

    pub fn is_empty(&self) -> bool {
        self.groups.is_empty()
    }

    /// Total number of descriptors across all groups.
    pub fn instruction_count(&self) -> usize {
        self.groups.iter().map(|g| g.len()).sum()
    }

    /// Look up an instruction of `set` by exact name.
    pub fn lookup_by_name(
        &self,
        set: ExtInstSet,
        name: &str,
    ) -> Result<&'static InstructionDescriptor> {
        let group = self.group(set).ok_or(ExtInstError::UnknownSet { set })?;
        group
            .find_by_name(name)
            .ok_or_else(|| ExtInstError::UnknownName {
                set,
                name: name.to_string(),
            })
    }

    /// Look up an instruction of `set` by opcode.
    pub fn lookup_by_opcode(
        &self,
        set: ExtInstSet,
        opcode: u32,
    ) -> Result<&'static InstructionDescriptor> {
        let group = self.group(set).ok_or(ExtInstError::UnknownSet { set })?;
        group
            .find_by_opcode(opcode)
            .ok_or(ExtInstError::UnknownOpcode { set, opcode })
    }
}

/// Look up by name in a table that may be absent.
///
/// Returns [`ExtInstError::InvalidTable`] when `table` is `None`, regardless
/// of the other arguments.
pub fn lookup_by_name(
    table: Option<&ExtInstTable>,
    set: ExtInstSet,
    name: &str,
) -> Result<&'static InstructionDescriptor> {
    table
        .ok_or(ExtInstError::InvalidTable)?
        .lookup_by_name(set, name)
}

/// Look up by opcode in a table that may be absent.
///
/// Returns [`ExtInstError::InvalidTable`] when `table` is `None`, regardless
/// of the other arguments.
pub fn lookup_by_opcode(
    table: Option<&ExtInstTable>,
    set: ExtInstSet,
    opcode: u32,
) -> Result<&'static InstructionDescriptor> {
    table
        .ok_or(ExtInstError::InvalidTable)?
        .lookup_by_opcode(set, opcode)
}
