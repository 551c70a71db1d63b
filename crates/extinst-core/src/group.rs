//! Extension groups: one set's descriptors plus its name and opcode indexes.

use std::collections::{BTreeMap, HashMap};

use crate::descriptor::InstructionDescriptor;
use crate::error::{ExtInstError, Result};
use crate::set::ExtInstSet;

/// All instructions of one extended instruction set.
///
/// Construction checks that names are non-empty and that names and opcodes
/// are unique, then builds both indexes. A constructed group never changes.
#[derive(Debug, Clone)]
pub struct ExtensionGroup {
    set: ExtInstSet,
    entries: &'static [InstructionDescriptor],
    by_name: HashMap<&'static str, usize>,
    by_opcode: BTreeMap<u32, usize>,
}

impl ExtensionGroup {
    /// Index `entries` under `set`.
    pub fn new(set: ExtInstSet, entries: &'static [InstructionDescriptor]) -> Result<Self> {
        let mut by_name = HashMap::with_capacity(entries.len());
        let mut by_opcode = BTreeMap::new();

        for (index, entry) in entries.iter().enumerate() {
            if entry.name.is_empty() {
                return Err(ExtInstError::EmptyName {
                    set,
                    opcode: entry.opcode,
                });
            }
            if by_name.insert(entry.name, index).is_some() {
                return Err(ExtInstError::DuplicateName {
                    set,
                    name: entry.name.to_string(),
                });
            }
            if by_opcode.insert(entry.opcode, index).is_some() {
                return Err(ExtInstError::DuplicateOpcode {
                    set,
                    opcode: entry.opcode,
                });
            }
        }

        Ok(Self {
            set,
            entries,
            by_name,
            by_opcode,
        })
    }

    pub fn set(&self) -> ExtInstSet {
        self.set
    }

    pub fn import_name(&self) -> &'static str {
        self.set.import_name()
    }

    /// Descriptors in their declared order.
    pub fn entries(&self) -> &'static [InstructionDescriptor] {
        self.entries
    }

    /// Descriptors in ascending opcode order.
    pub fn iter(&self) -> impl Iterator<Item = &'static InstructionDescriptor> + '_ {
        let entries = self.entries;
        self.by_opcode.values().map(move |&i| &entries[i])
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Find a descriptor by exact name.
    pub fn find_by_name(&self, name: &str) -> Option<&'static InstructionDescriptor> {
        let entries = self.entries;
        self.by_name.get(name).map(|&i| &entries[i])
    }

    /// Find a descriptor by opcode.
    pub fn find_by_opcode(&self, opcode: u32) -> Option<&'static InstructionDescriptor> {
        let entries = self.entries;
        self.by_opcode.get(&opcode).map(|&i| &entries[i])
    }

    /// Whether both indexes cover exactly the entry list.
    pub(crate) fn indexes_consistent(&self) -> bool {
        self.by_name.len() == self.entries.len()
            && self.by_opcode.len() == self.entries.len()
            && self.entries.iter().enumerate().all(|(i, e)| {
                self.by_name.get(e.name) == Some(&i) && self.by_opcode.get(&e.opcode) == Some(&i)
            })
    }
}
