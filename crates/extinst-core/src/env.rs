//! Target environments.
//!
//! A target environment names a platform/API version combination. Many
//! environments share the same extended instruction set availability and
//! therefore the same table; [`TableFamily`] records which one.

use std::fmt;
use std::str::FromStr;

use crate::error::ExtInstError;

/// A target execution environment.
///
/// Discriminants are the stable raw values used by callers that carry the
/// environment as an integer.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[repr(u32)]
pub enum TargetEnv {
    Universal1_0 = 0,
    Vulkan1_0 = 1,
    Universal1_1 = 2,
    OpenCl2_1 = 3,
    OpenCl2_2 = 4,
    OpenGl4_0 = 5,
    OpenGl4_1 = 6,
    OpenGl4_2 = 7,
    OpenGl4_3 = 8,
    OpenGl4_5 = 9,
    Universal1_2 = 10,
    OpenCl1_2 = 11,
    OpenClEmbedded1_2 = 12,
    OpenCl2_0 = 13,
    OpenClEmbedded2_0 = 14,
    OpenClEmbedded2_1 = 15,
    OpenClEmbedded2_2 = 16,
    Universal1_3 = 17,
    Vulkan1_1 = 18,
    WebGpu0 = 19,
}

/// Which shared extended instruction table an environment uses.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum TableFamily {
    /// Every extended instruction set at version 1.0.
    V1_0,
}

impl TableFamily {
    pub fn name(self) -> &'static str {
        match self {
            TableFamily::V1_0 => "1.0",
        }
    }
}

impl fmt::Display for TableFamily {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl TargetEnv {
    /// Every recognized environment, in raw-value order.
    pub const ALL: [TargetEnv; 20] = [
        TargetEnv::Universal1_0,
        TargetEnv::Vulkan1_0,
        TargetEnv::Universal1_1,
        TargetEnv::OpenCl2_1,
        TargetEnv::OpenCl2_2,
        TargetEnv::OpenGl4_0,
        TargetEnv::OpenGl4_1,
        TargetEnv::OpenGl4_2,
        TargetEnv::OpenGl4_3,
        TargetEnv::OpenGl4_5,
        TargetEnv::Universal1_2,
        TargetEnv::OpenCl1_2,
        TargetEnv::OpenClEmbedded1_2,
        TargetEnv::OpenCl2_0,
        TargetEnv::OpenClEmbedded2_0,
        TargetEnv::OpenClEmbedded2_1,
        TargetEnv::OpenClEmbedded2_2,
        TargetEnv::Universal1_3,
        TargetEnv::Vulkan1_1,
        TargetEnv::WebGpu0,
    ];

    /// The stable raw value of this environment.
    pub fn raw(self) -> u32 {
        self as u32
    }

    /// Canonical command-line name (e.g. `vulkan1.0`, `opencl2.2embedded`).
    pub fn name(self) -> &'static str {
        match self {
            TargetEnv::Universal1_0 => "spv1.0",
            TargetEnv::Universal1_1 => "spv1.1",
            TargetEnv::Universal1_2 => "spv1.2",
            TargetEnv::Universal1_3 => "spv1.3",
            TargetEnv::Vulkan1_0 => "vulkan1.0",
            TargetEnv::Vulkan1_1 => "vulkan1.1",
            TargetEnv::OpenCl1_2 => "opencl1.2",
            TargetEnv::OpenClEmbedded1_2 => "opencl1.2embedded",
            TargetEnv::OpenCl2_0 => "opencl2.0",
            TargetEnv::OpenClEmbedded2_0 => "opencl2.0embedded",
            TargetEnv::OpenCl2_1 => "opencl2.1",
            TargetEnv::OpenClEmbedded2_1 => "opencl2.1embedded",
            TargetEnv::OpenCl2_2 => "opencl2.2",
            TargetEnv::OpenClEmbedded2_2 => "opencl2.2embedded",
            TargetEnv::OpenGl4_0 => "opengl4.0",
            TargetEnv::OpenGl4_1 => "opengl4.1",
            TargetEnv::OpenGl4_2 => "opengl4.2",
            TargetEnv::OpenGl4_3 => "opengl4.3",
            TargetEnv::OpenGl4_5 => "opengl4.5",
            TargetEnv::WebGpu0 => "webgpu0",
        }
    }

    /// Human-readable description.
    pub fn description(self) -> &'static str {
        match self {
            TargetEnv::Universal1_0 => "SPIR-V 1.0",
            TargetEnv::Universal1_1 => "SPIR-V 1.1",
            TargetEnv::Universal1_2 => "SPIR-V 1.2",
            TargetEnv::Universal1_3 => "SPIR-V 1.3",
            TargetEnv::Vulkan1_0 => "Vulkan 1.0",
            TargetEnv::Vulkan1_1 => "Vulkan 1.1",
            TargetEnv::OpenCl1_2 => "OpenCL 1.2 Full Profile",
            TargetEnv::OpenClEmbedded1_2 => "OpenCL 1.2 Embedded Profile",
            TargetEnv::OpenCl2_0 => "OpenCL 2.0 Full Profile",
            TargetEnv::OpenClEmbedded2_0 => "OpenCL 2.0 Embedded Profile",
            TargetEnv::OpenCl2_1 => "OpenCL 2.1 Full Profile",
            TargetEnv::OpenClEmbedded2_1 => "OpenCL 2.1 Embedded Profile",
            TargetEnv::OpenCl2_2 => "OpenCL 2.2 Full Profile",
            TargetEnv::OpenClEmbedded2_2 => "OpenCL 2.2 Embedded Profile",
            TargetEnv::OpenGl4_0 => "OpenGL 4.0",
            TargetEnv::OpenGl4_1 => "OpenGL 4.1",
            TargetEnv::OpenGl4_2 => "OpenGL 4.2",
            TargetEnv::OpenGl4_3 => "OpenGL 4.3",
            TargetEnv::OpenGl4_5 => "OpenGL 4.5",
            TargetEnv::WebGpu0 => "WebGPU (draft)",
        }
    }

    /// The table family this environment draws its extended instruction
    /// sets from.
    ///
    /// Every extended instruction set is still at version 1.0, so all
    /// environments share one family.
    pub fn family(self) -> TableFamily {
        match self {
            TargetEnv::Universal1_0
            | TargetEnv::Vulkan1_0
            | TargetEnv::Universal1_1
            | TargetEnv::Universal1_2
            | TargetEnv::OpenCl1_2
            | TargetEnv::OpenClEmbedded1_2
            | TargetEnv::OpenCl2_0
            | TargetEnv::OpenClEmbedded2_0
            | TargetEnv::OpenCl2_1
            | TargetEnv::OpenClEmbedded2_1
            | TargetEnv::OpenCl2_2
            | TargetEnv::OpenClEmbedded2_2
            | TargetEnv::OpenGl4_0
            | TargetEnv::OpenGl4_1
            | TargetEnv::OpenGl4_2
            | TargetEnv::OpenGl4_3
            | TargetEnv::OpenGl4_5
            | TargetEnv::Universal1_3
            | TargetEnv::Vulkan1_1
            | TargetEnv::WebGpu0 => TableFamily::V1_0,
        }
    }
}

impl TryFrom<u32> for TargetEnv {
    type Error = ExtInstError;

    fn try_from(raw: u32) -> Result<Self, Self::Error> {
        TargetEnv::ALL
            .get(raw as usize)
            .copied()
            .ok_or(ExtInstError::UnrecognizedEnvironment {
                value: raw.to_string(),
            })
    }
}

impl FromStr for TargetEnv {
    type Err = ExtInstError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        TargetEnv::ALL
            .into_iter()
            .find(|env| env.name() == s)
            .ok_or_else(|| ExtInstError::UnrecognizedEnvironment {
                value: s.to_string(),
            })
    }
}

impl fmt::Display for TargetEnv {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn raw_values_are_positional() {
        for (i, env) in TargetEnv::ALL.iter().enumerate() {
            assert_eq!(env.raw() as usize, i);
            assert_eq!(TargetEnv::try_from(i as u32).unwrap(), *env);
        }
    }

    #[test]
    fn raw_out_of_range_is_unrecognized() {
        for raw in [20, 21, 100, u32::MAX] {
            let err = TargetEnv::try_from(raw).unwrap_err();
            assert!(matches!(err, ExtInstError::UnrecognizedEnvironment { .. }));
        }
    }

    #[test]
    fn names_parse_back() {
        for env in TargetEnv::ALL {
            assert_eq!(env.name().parse::<TargetEnv>().unwrap(), env);
        }
        assert_eq!(
            "opencl2.2embedded".parse::<TargetEnv>().unwrap(),
            TargetEnv::OpenClEmbedded2_2
        );
    }

    #[test]
    fn unknown_names_are_unrecognized() {
        assert!("vulkan9.9".parse::<TargetEnv>().is_err());
        assert!("Vulkan1.0".parse::<TargetEnv>().is_err());
        assert!("".parse::<TargetEnv>().is_err());
    }

    #[test]
    fn all_environments_share_one_family() {
        assert!(TargetEnv::ALL
            .iter()
            .all(|env| env.family() == TableFamily::V1_0));
    }
}
