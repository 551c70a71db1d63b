//! Process-wide registry of extended instruction tables.
//!
//! Tables are built from the compiled-in grammar on first access and shared
//! by every environment in the same [`TableFamily`].

use lazy_static::lazy_static;

use crate::env::{TableFamily, TargetEnv};
use crate::error::Result;
use crate::grammar;
use crate::group::ExtensionGroup;
use crate::set::ExtInstSet;
use crate::table::ExtInstTable;

/// Sets carried by the 1.0 table, in group order.
const SETS_1_0: [ExtInstSet; 7] = [
    ExtInstSet::GlslStd450,
    ExtInstSet::OpenClStd,
    ExtInstSet::AmdShaderExplicitVertexParameter,
    ExtInstSet::AmdShaderTrinaryMinmax,
    ExtInstSet::AmdGcnShader,
    ExtInstSet::AmdShaderBallot,
    ExtInstSet::DebugInfo,
];

/// Build the table for `family` from the compiled-in grammar.
pub fn build_table(family: TableFamily) -> Result<ExtInstTable> {
    let sets: &[ExtInstSet] = match family {
        TableFamily::V1_0 => &SETS_1_0,
    };
    let groups = sets
        .iter()
        .map(|&set| ExtensionGroup::new(set, grammar::entries(set)))
        .collect::<Result<Vec<_>>>()?;
    ExtInstTable::new(family, groups)
}

lazy_static! {
    static ref TABLE_1_0: ExtInstTable =
        build_table(TableFamily::V1_0).expect("compiled-in 1.0 extended instruction table is valid");
}

/// The shared table for `family`.
pub fn family_table(family: TableFamily) -> &'static ExtInstTable {
    match family {
        TableFamily::V1_0 => &TABLE_1_0,
    }
}

/// The extended instruction table applicable to `env`.
pub fn ext_inst_table(env: TargetEnv) -> &'static ExtInstTable {
    family_table(env.family())
}

/// The table for a raw environment value.
///
/// Fails with [`ExtInstError::UnrecognizedEnvironment`](crate::ExtInstError::UnrecognizedEnvironment)
/// if `raw` is not a known environment.
pub fn ext_inst_table_for_raw(raw: u32) -> Result<&'static ExtInstTable> {
    Ok(ext_inst_table(TargetEnv::try_from(raw)?))
}

/// The table for an environment given by its canonical name (e.g. `vulkan1.1`).
pub fn ext_inst_table_for_name(name: &str) -> Result<&'static ExtInstTable> {
    Ok(ext_inst_table(name.parse()?))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::ExtInstError;

    #[test]
    fn every_environment_has_a_table() {
        for env in TargetEnv::ALL {
            let table = ext_inst_table(env);
            assert!(!table.is_empty(), "{env} has an empty table");
            assert_eq!(table.family(), env.family());
        }
    }

    #[test]
    fn environments_share_the_table_instance() {
        let vulkan = ext_inst_table(TargetEnv::Vulkan1_0);
        let opencl = ext_inst_table(TargetEnv::OpenClEmbedded2_2);
        let webgpu = ext_inst_table(TargetEnv::WebGpu0);
        assert!(std::ptr::eq(vulkan, opencl));
        assert!(std::ptr::eq(vulkan, webgpu));
    }

    #[test]
    fn table_carries_every_set() {
        let table = ext_inst_table(TargetEnv::Universal1_0);
        for set in ExtInstSet::ALL {
            assert!(table.contains(set), "missing {set}");
        }
        assert_eq!(table.len(), ExtInstSet::ALL.len());
    }

    #[test]
    fn raw_and_named_selection() {
        let by_raw = ext_inst_table_for_raw(TargetEnv::Vulkan1_1.raw()).unwrap();
        let by_name = ext_inst_table_for_name("vulkan1.1").unwrap();
        assert!(std::ptr::eq(by_raw, by_name));

        assert!(matches!(
            ext_inst_table_for_raw(20),
            Err(ExtInstError::UnrecognizedEnvironment { .. })
        ));
        assert!(matches!(
            ext_inst_table_for_name("vulkan9.9"),
            Err(ExtInstError::UnrecognizedEnvironment { .. })
        ));
    }

    #[test]
    fn builds_are_independent_of_the_shared_table() {
        let fresh = build_table(TableFamily::V1_0).unwrap();
        assert_eq!(
            fresh.instruction_count(),
            family_table(TableFamily::V1_0).instruction_count()
        );
    }
}
