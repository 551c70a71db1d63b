//! Extended instruction set identifiers and import-name resolution.
//!
//! A module requests an extended instruction set with `OpExtInstImport` and a
//! literal name defined by that set's specification. Names are matched
//! exactly; an unknown name is a miss, not an error.

use std::fmt;

/// An extended instruction set known to the registry.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum ExtInstSet {
    /// `GLSL.std.450`, the standard shader math library.
    GlslStd450,
    /// `OpenCL.std`, the OpenCL kernel math library.
    OpenClStd,
    AmdShaderExplicitVertexParameter,
    AmdShaderTrinaryMinmax,
    AmdGcnShader,
    AmdShaderBallot,
    /// `DebugInfo`, the debug information encoding.
    DebugInfo,
}

impl ExtInstSet {
    /// Every recognized set.
    pub const ALL: [ExtInstSet; 7] = [
        ExtInstSet::GlslStd450,
        ExtInstSet::OpenClStd,
        ExtInstSet::AmdShaderExplicitVertexParameter,
        ExtInstSet::AmdShaderTrinaryMinmax,
        ExtInstSet::AmdGcnShader,
        ExtInstSet::AmdShaderBallot,
        ExtInstSet::DebugInfo,
    ];

    /// The literal import name a module uses to request this set.
    pub fn import_name(self) -> &'static str {
        match self {
            ExtInstSet::GlslStd450 => "GLSL.std.450",
            ExtInstSet::OpenClStd => "OpenCL.std",
            ExtInstSet::AmdShaderExplicitVertexParameter => {
                "SPV_AMD_shader_explicit_vertex_parameter"
            }
            ExtInstSet::AmdShaderTrinaryMinmax => "SPV_AMD_shader_trinary_minmax",
            ExtInstSet::AmdGcnShader => "SPV_AMD_gcn_shader",
            ExtInstSet::AmdShaderBallot => "SPV_AMD_shader_ballot",
            ExtInstSet::DebugInfo => "DebugInfo",
        }
    }

    /// Resolve an import name to its set. Case-sensitive and byte-exact.
    pub fn from_import_name(name: &str) -> Option<Self> {
        match name {
            "GLSL.std.450" => Some(ExtInstSet::GlslStd450),
            "OpenCL.std" => Some(ExtInstSet::OpenClStd),
            "SPV_AMD_shader_explicit_vertex_parameter" => {
                Some(ExtInstSet::AmdShaderExplicitVertexParameter)
            }
            "SPV_AMD_shader_trinary_minmax" => Some(ExtInstSet::AmdShaderTrinaryMinmax),
            "SPV_AMD_gcn_shader" => Some(ExtInstSet::AmdGcnShader),
            "SPV_AMD_shader_ballot" => Some(ExtInstSet::AmdShaderBallot),
            "DebugInfo" => Some(ExtInstSet::DebugInfo),
            _ => None,
        }
    }
}

impl fmt::Display for ExtInstSet {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.import_name())
    }
}

/// Map the literal string of an `OpExtInstImport` to its set.
///
/// Returns `None` for names the registry does not recognize; callers decide
/// whether that makes the module invalid or just unsupported.
pub fn resolve_import_name(name: &str) -> Option<ExtInstSet> {
    ExtInstSet::from_import_name(name)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn glsl_std_450_resolves() {
        assert_eq!(
            resolve_import_name("GLSL.std.450"),
            Some(ExtInstSet::GlslStd450)
        );
    }

    #[test]
    fn unknown_name_is_none() {
        assert_eq!(resolve_import_name("bogus"), None);
        assert_eq!(resolve_import_name(""), None);
    }

    #[test]
    fn matching_is_exact() {
        assert_eq!(resolve_import_name("glsl.std.450"), None);
        assert_eq!(resolve_import_name("GLSL.std.450 "), None);
        assert_eq!(resolve_import_name("OpenCL.std\0"), None);
        assert_eq!(resolve_import_name("SPV_AMD_gcn"), None);
    }

    #[test]
    fn import_names_round_trip() {
        for set in ExtInstSet::ALL {
            assert_eq!(resolve_import_name(set.import_name()), Some(set));
            assert_eq!(set.to_string(), set.import_name());
        }
    }
}
