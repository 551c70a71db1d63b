//! Error types for registry operations.

use crate::set::ExtInstSet;

/// Errors that can occur during registry operations.
#[derive(Debug, thiserror::Error)]
pub enum ExtInstError {
    /// Target environment value outside the recognized enumeration.
    #[error("unrecognized target environment: {value}")]
    UnrecognizedEnvironment {
        /// The raw value or name that was supplied.
        value: String,
    },

    /// Lookup was attempted without a table.
    #[error("invalid extended instruction table")]
    InvalidTable,

    /// The table carries no group for the requested set.
    #[error("extended instruction set '{}' is not available in this table", set.import_name())]
    UnknownSet {
        /// The set that was requested.
        set: ExtInstSet,
    },

    /// No instruction with this name in the group.
    #[error("'{}' has no instruction named '{name}'", set.import_name())]
    UnknownName {
        /// The set that was searched.
        set: ExtInstSet,
        /// The name that was not found.
        name: String,
    },

    /// No instruction with this opcode in the group.
    #[error("'{}' has no instruction with opcode {opcode}", set.import_name())]
    UnknownOpcode {
        /// The set that was searched.
        set: ExtInstSet,
        /// The opcode that was not found.
        opcode: u32,
    },

    /// Descriptor with an empty name.
    #[error("'{}' has an instruction with an empty name (opcode {opcode})", set.import_name())]
    EmptyName {
        /// The group being built.
        set: ExtInstSet,
        /// Opcode of the unnamed descriptor.
        opcode: u32,
    },

    /// Two descriptors in one group share a name.
    #[error("'{}' defines instruction name '{name}' more than once", set.import_name())]
    DuplicateName {
        /// The group being built.
        set: ExtInstSet,
        /// The repeated name.
        name: String,
    },

    /// Two descriptors in one group share an opcode.
    #[error("'{}' defines opcode {opcode} more than once", set.import_name())]
    DuplicateOpcode {
        /// The group being built.
        set: ExtInstSet,
        /// The repeated opcode.
        opcode: u32,
    },

    /// Two groups in one table share a set.
    #[error("table contains more than one group for '{}'", set.import_name())]
    DuplicateSet {
        /// The set with more than one group.
        set: ExtInstSet,
    },

    /// JSON serialization error.
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    /// TOML serialization error.
    #[error("TOML serialization error: {0}")]
    TomlSer(#[from] toml::ser::Error),
}

impl ExtInstError {
    /// Whether this is an ordinary lookup miss rather than a misuse of the API.
    pub fn is_lookup_miss(&self) -> bool {
        matches!(
            self,
            Self::UnknownSet { .. } | Self::UnknownName { .. } | Self::UnknownOpcode { .. }
        )
    }
}

/// Result type for registry operations.
pub type Result<T> = std::result::Result<T, ExtInstError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn misses_are_distinguished_from_contract_violations() {
        let miss = ExtInstError::UnknownOpcode {
            set: ExtInstSet::GlslStd450,
            opcode: 999,
        };
        assert!(miss.is_lookup_miss());
        assert!(!ExtInstError::InvalidTable.is_lookup_miss());
        assert!(!ExtInstError::UnrecognizedEnvironment {
            value: "42".into()
        }
        .is_lookup_miss());
    }

    #[test]
    fn messages_name_the_import() {
        let err = ExtInstError::UnknownName {
            set: ExtInstSet::OpenClStd,
            name: "frobnicate".into(),
        };
        assert_eq!(
            err.to_string(),
            "'OpenCL.std' has no instruction named 'frobnicate'"
        );
    }
}
