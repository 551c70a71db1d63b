//! Instruction descriptors.
//!
//! A descriptor identifies one extended instruction by name and opcode and
//! records the operands that follow the set and instruction words. All
//! descriptors live in `'static` arrays and are handed out by reference.

use serde::Serialize;

/// Kind of an operand following `OpExtInst`'s set and instruction words.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "kebab-case")]
pub enum OperandKind {
    /// A single `<id>`.
    Id,
    /// An `<id>` that may be omitted.
    OptionalId,
    /// Zero or more trailing `<id>`s.
    VariableIds,
    LiteralInteger,
    OptionalLiteralInteger,
    VariableLiteralIntegers,
    FpRoundingMode,
    StorageClass,
    DebugInfoFlags,
    DebugBaseTypeAttributeEncoding,
    DebugCompositeType,
    DebugTypeQualifier,
    DebugOperation,
}

impl OperandKind {
    /// Whether an instruction may omit this operand.
    pub fn is_optional(self) -> bool {
        matches!(
            self,
            OperandKind::OptionalId
                | OperandKind::VariableIds
                | OperandKind::OptionalLiteralInteger
                | OperandKind::VariableLiteralIntegers
        )
    }

    /// Whether this operand absorbs all remaining words.
    pub fn is_variable(self) -> bool {
        matches!(
            self,
            OperandKind::VariableIds | OperandKind::VariableLiteralIntegers
        )
    }
}

/// A capability that must be declared to use an instruction.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "kebab-case")]
pub enum Capability {
    InterpolationFunction,
    Float64,
}

/// Immutable record describing one extended instruction.
#[derive(Debug, PartialEq, Eq, Hash, Serialize)]
pub struct InstructionDescriptor {
    /// Instruction name, unique within its set.
    pub name: &'static str,
    /// Numeric opcode, unique within its set.
    pub opcode: u32,
    /// Operand layout after the set and instruction words.
    pub operands: &'static [OperandKind],
    /// Capabilities enabling the instruction. Empty if always available.
    pub capabilities: &'static [Capability],
}

impl InstructionDescriptor {
    /// A descriptor with no required capabilities.
    pub const fn new(name: &'static str, opcode: u32, operands: &'static [OperandKind]) -> Self {
        Self {
            name,
            opcode,
            operands,
            capabilities: &[],
        }
    }

    /// The same descriptor, gated on `capabilities`.
    pub const fn requires(self, capabilities: &'static [Capability]) -> Self {
        Self {
            capabilities,
            ..self
        }
    }

    /// Number of operands that must be present.
    pub fn min_operand_count(&self) -> usize {
        self.operands.iter().filter(|k| !k.is_optional()).count()
    }

    /// Upper bound on operand count, or `None` if the last operand is variadic.
    pub fn max_operand_count(&self) -> Option<usize> {
        if self.operands.iter().any(|k| k.is_variable()) {
            None
        } else {
            Some(self.operands.len())
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use super::OperandKind::*;

    #[test]
    fn fixed_operand_counts() {
        let fma = InstructionDescriptor::new("Fma", 50, &[Id, Id, Id]);
        assert_eq!(fma.min_operand_count(), 3);
        assert_eq!(fma.max_operand_count(), Some(3));
        assert!(fma.capabilities.is_empty());
    }

    #[test]
    fn optional_and_variadic_operands() {
        let printf = InstructionDescriptor::new("printf", 184, &[Id, VariableIds]);
        assert_eq!(printf.min_operand_count(), 1);
        assert_eq!(printf.max_operand_count(), None);

        let scope = InstructionDescriptor::new("DebugScope", 23, &[Id, OptionalId]);
        assert_eq!(scope.min_operand_count(), 1);
        assert_eq!(scope.max_operand_count(), Some(2));
    }

    #[test]
    fn requires_keeps_identity() {
        const INTERP: InstructionDescriptor =
            InstructionDescriptor::new("InterpolateAtCentroid", 76, &[Id])
                .requires(&[Capability::InterpolationFunction]);
        assert_eq!(INTERP.name, "InterpolateAtCentroid");
        assert_eq!(INTERP.opcode, 76);
        assert_eq!(INTERP.capabilities, &[Capability::InterpolationFunction]);
    }
}
