//! `DebugInfo` instructions.

use crate::descriptor::InstructionDescriptor as I;
use crate::descriptor::OperandKind::{
    DebugBaseTypeAttributeEncoding, DebugCompositeType, DebugInfoFlags, DebugOperation,
    DebugTypeQualifier, Id, LiteralInteger, OptionalId, OptionalLiteralInteger, StorageClass,
    VariableIds, VariableLiteralIntegers,
};

pub static ENTRIES: &[I] = &[
    I::new("DebugInfoNone", 0, &[]),
    I::new("DebugCompilationUnit", 1, &[LiteralInteger, LiteralInteger]),
    I::new("DebugTypeBasic", 2, &[Id, Id, DebugBaseTypeAttributeEncoding]),
    I::new("DebugTypePointer", 3, &[Id, StorageClass, DebugInfoFlags]),
    I::new("DebugTypeQualifier", 4, &[Id, DebugTypeQualifier]),
    I::new("DebugTypeArray", 5, &[Id, VariableIds]),
    I::new("DebugTypeVector", 6, &[Id, LiteralInteger]),
    I::new(
        "DebugTypedef",
        7,
        &[Id, Id, Id, LiteralInteger, LiteralInteger, Id],
    ),
    I::new("DebugTypeFunction", 8, &[Id, VariableIds]),
    I::new(
        "DebugTypeEnum",
        9,
        &[
            Id,
            Id,
            Id,
            LiteralInteger,
            LiteralInteger,
            Id,
            Id,
            DebugInfoFlags,
            VariableIds,
        ],
    ),
    I::new(
        "DebugTypeComposite",
        10,
        &[
            Id,
            DebugCompositeType,
            Id,
            LiteralInteger,
            LiteralInteger,
            Id,
            Id,
            DebugInfoFlags,
            VariableIds,
        ],
    ),
    I::new(
        "DebugTypeMember",
        11,
        &[
            Id,
            Id,
            Id,
            LiteralInteger,
            LiteralInteger,
            Id,
            Id,
            Id,
            DebugInfoFlags,
            OptionalId,
        ],
    ),
    I::new("DebugTypeInheritance", 12, &[Id, Id, Id, Id, DebugInfoFlags]),
    I::new("DebugTypePtrToMember", 13, &[Id, Id]),
    I::new("DebugTypeTemplate", 14, &[Id, VariableIds]),
    I::new(
        "DebugTypeTemplateParameter",
        15,
        &[Id, Id, Id, Id, LiteralInteger, LiteralInteger],
    ),
    I::new(
        "DebugTypeTemplateTemplateParameter",
        16,
        &[Id, Id, Id, LiteralInteger, LiteralInteger],
    ),
    I::new(
        "DebugTypeTemplateParameterPack",
        17,
        &[Id, Id, LiteralInteger, LiteralInteger, VariableIds],
    ),
    I::new(
        "DebugGlobalVariable",
        18,
        &[
            Id,
            Id,
            Id,
            LiteralInteger,
            LiteralInteger,
            Id,
            Id,
            Id,
            DebugInfoFlags,
            OptionalId,
        ],
    ),
    I::new(
        "DebugFunctionDeclaration",
        19,
        &[
            Id,
            Id,
            Id,
            LiteralInteger,
            LiteralInteger,
            Id,
            Id,
            DebugInfoFlags,
        ],
    ),
    I::new(
        "DebugFunction",
        20,
        &[
            Id,
            Id,
            Id,
            LiteralInteger,
            LiteralInteger,
            Id,
            Id,
            DebugInfoFlags,
            LiteralInteger,
            Id,
            OptionalId,
        ],
    ),
    I::new(
        "DebugLexicalBlock",
        21,
        &[Id, LiteralInteger, LiteralInteger, Id, OptionalId],
    ),
    I::new("DebugLexicalBlockDiscriminator", 22, &[Id, LiteralInteger, Id]),
    I::new("DebugScope", 23, &[Id, OptionalId]),
    I::new("DebugNoScope", 24, &[]),
    I::new("DebugInlinedAt", 25, &[LiteralInteger, Id, OptionalId]),
    I::new(
        "DebugLocalVariable",
        26,
        &[
            Id,
            Id,
            Id,
            LiteralInteger,
            LiteralInteger,
            Id,
            OptionalLiteralInteger,
        ],
    ),
    I::new("DebugInlinedVariable", 27, &[Id, Id]),
    I::new("DebugDeclare", 28, &[Id, Id, Id]),
    I::new("DebugValue", 29, &[Id, Id, VariableIds]),
    I::new("DebugOperation", 30, &[DebugOperation, VariableLiteralIntegers]),
    I::new("DebugExpression", 31, &[VariableIds]),
    I::new("DebugMacroDef", 32, &[Id, LiteralInteger, Id, OptionalId]),
    I::new("DebugMacroUndef", 33, &[Id, LiteralInteger, Id]),
];
