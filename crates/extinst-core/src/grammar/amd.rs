//! AMD vendor extension instruction sets.

use crate::descriptor::InstructionDescriptor as I;
use crate::descriptor::OperandKind::Id;

/// `SPV_AMD_shader_explicit_vertex_parameter`
pub static SHADER_EXPLICIT_VERTEX_PARAMETER: &[I] = &[
    I::new("InterpolateAtVertexAMD", 1, &[Id, Id]),
];

/// `SPV_AMD_shader_trinary_minmax`
pub static SHADER_TRINARY_MINMAX: &[I] = &[
    I::new("FMin3AMD", 1, &[Id, Id, Id]),
    I::new("UMin3AMD", 2, &[Id, Id, Id]),
    I::new("SMin3AMD", 3, &[Id, Id, Id]),
    I::new("FMax3AMD", 4, &[Id, Id, Id]),
    I::new("UMax3AMD", 5, &[Id, Id, Id]),
    I::new("SMax3AMD", 6, &[Id, Id, Id]),
    I::new("FMid3AMD", 7, &[Id, Id, Id]),
    I::new("UMid3AMD", 8, &[Id, Id, Id]),
    I::new("SMid3AMD", 9, &[Id, Id, Id]),
];

/// `SPV_AMD_gcn_shader`
pub static GCN_SHADER: &[I] = &[
    I::new("CubeFaceIndexAMD", 1, &[Id]),
    I::new("CubeFaceCoordAMD", 2, &[Id]),
    I::new("TimeAMD", 3, &[]),
];

/// `SPV_AMD_shader_ballot`
pub static SHADER_BALLOT: &[I] = &[
    I::new("SwizzleInvocationsAMD", 1, &[Id, Id]),
    I::new("SwizzleInvocationsMaskedAMD", 2, &[Id, Id]),
    I::new("WriteInvocationAMD", 3, &[Id, Id, Id]),
    I::new("MbcntAMD", 4, &[Id]),
];
