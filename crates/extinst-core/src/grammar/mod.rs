//! Compiled-in descriptor tables, one array per extended instruction set.
//!
//! Generated from the grammar of each set's specification. Arrays are ordered
//! by opcode.

pub mod amd;
pub mod debug_info;
pub mod glsl_std_450;
pub mod opencl_std;

use crate::descriptor::InstructionDescriptor;
use crate::set::ExtInstSet;

/// The descriptor array for `set`.
pub fn entries(set: ExtInstSet) -> &'static [InstructionDescriptor] {
    match set {
        ExtInstSet::GlslStd450 => glsl_std_450::ENTRIES,
        ExtInstSet::OpenClStd => opencl_std::ENTRIES,
        ExtInstSet::AmdShaderExplicitVertexParameter => amd::SHADER_EXPLICIT_VERTEX_PARAMETER,
        ExtInstSet::AmdShaderTrinaryMinmax => amd::SHADER_TRINARY_MINMAX,
        ExtInstSet::AmdGcnShader => amd::GCN_SHADER,
        ExtInstSet::AmdShaderBallot => amd::SHADER_BALLOT,
        ExtInstSet::DebugInfo => debug_info::ENTRIES,
    }
}
