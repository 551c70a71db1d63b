//! Registry-wide properties over the compiled-in tables.

use std::collections::HashSet;

use extinst_core::{
    ext_inst_table, ext_inst_table_for_raw, lookup_by_name, lookup_by_opcode,
    resolve_import_name, ExtInstError, ExtInstSet, ExtInstTable, TargetEnv,
};

#[test]
fn every_environment_selects_a_non_empty_table() {
    for env in TargetEnv::ALL {
        let table = ext_inst_table_for_raw(env.raw()).unwrap();
        assert!(!table.is_empty());
        assert!(table.instruction_count() > 0);
    }
}

#[test]
fn unknown_raw_environments_are_rejected() {
    for raw in [TargetEnv::ALL.len() as u32, 64, 0xFFFF, u32::MAX] {
        match ext_inst_table_for_raw(raw) {
            Err(ExtInstError::UnrecognizedEnvironment { value }) => {
                assert_eq!(value, raw.to_string())
            }
            other => panic!("expected UnrecognizedEnvironment for {raw}, got {other:?}"),
        }
    }
}

#[test]
fn name_and_opcode_lookup_agree_for_every_descriptor() {
    for env in TargetEnv::ALL {
        let table = ext_inst_table(env);
        for group in table.groups() {
            for entry in group.entries() {
                let by_name = table.lookup_by_name(group.set(), entry.name).unwrap();
                let by_opcode = table.lookup_by_opcode(group.set(), entry.opcode).unwrap();
                assert!(std::ptr::eq(by_name, entry));
                assert!(std::ptr::eq(by_opcode, entry));
            }
        }
    }
}

#[test]
fn names_and_opcodes_are_unique_within_groups() {
    let table = ext_inst_table(TargetEnv::Universal1_0);
    for group in table.groups() {
        let names: HashSet<_> = group.entries().iter().map(|d| d.name).collect();
        let opcodes: HashSet<_> = group.entries().iter().map(|d| d.opcode).collect();
        assert_eq!(names.len(), group.len(), "duplicate name in {}", group.set());
        assert_eq!(opcodes.len(), group.len(), "duplicate opcode in {}", group.set());
        assert!(group.entries().iter().all(|d| !d.name.is_empty()));
    }
}

#[test]
fn absent_names_and_opcodes_miss() {
    let table = ext_inst_table(TargetEnv::Vulkan1_1);

    let err = table
        .lookup_by_name(ExtInstSet::GlslStd450, "NoSuchInstruction")
        .unwrap_err();
    assert!(err.is_lookup_miss());

    let err = table
        .lookup_by_opcode(ExtInstSet::GlslStd450, 0)
        .unwrap_err();
    assert!(matches!(err, ExtInstError::UnknownOpcode { opcode: 0, .. }));

    // OpenCL.std leaves a gap between 110 and 141
    let err = table.lookup_by_opcode(ExtInstSet::OpenClStd, 120).unwrap_err();
    assert!(err.is_lookup_miss());

    // names are case-sensitive
    assert!(table.lookup_by_name(ExtInstSet::OpenClStd, "Sqrt").is_err());
    assert!(table.lookup_by_name(ExtInstSet::OpenClStd, "sqrt").is_ok());
}

#[test]
fn absent_table_is_invalid_whatever_the_arguments() {
    for set in ExtInstSet::ALL {
        assert!(matches!(
            lookup_by_name(None, set, "Sin"),
            Err(ExtInstError::InvalidTable)
        ));
        assert!(matches!(
            lookup_by_opcode(None, set, 13),
            Err(ExtInstError::InvalidTable)
        ));
    }
}

#[test]
fn import_then_lookup() {
    let table = ext_inst_table(TargetEnv::Vulkan1_0);

    let set = resolve_import_name("GLSL.std.450").unwrap();
    assert_eq!(set, ExtInstSet::GlslStd450);
    let sin = lookup_by_name(Some(table), set, "Sin").unwrap();
    assert_eq!(sin.opcode, 13);
    assert_eq!(lookup_by_opcode(Some(table), set, 13).unwrap().name, "Sin");

    assert_eq!(resolve_import_name("bogus"), None);
}

#[test]
fn known_descriptors() {
    let table = ext_inst_table(TargetEnv::OpenCl2_0);

    let fma = table.lookup_by_name(ExtInstSet::GlslStd450, "Fma").unwrap();
    assert_eq!(fma.opcode, 50);
    assert_eq!(fma.min_operand_count(), 3);

    let printf = table.lookup_by_opcode(ExtInstSet::OpenClStd, 184).unwrap();
    assert_eq!(printf.name, "printf");
    assert_eq!(printf.max_operand_count(), None);

    let none = table.lookup_by_opcode(ExtInstSet::DebugInfo, 0).unwrap();
    assert_eq!(none.name, "DebugInfoNone");
    assert!(none.operands.is_empty());

    let time = table
        .lookup_by_name(ExtInstSet::AmdGcnShader, "TimeAMD")
        .unwrap();
    assert_eq!(time.opcode, 3);

    let interp = table
        .lookup_by_name(ExtInstSet::AmdShaderExplicitVertexParameter, "InterpolateAtVertexAMD")
        .unwrap();
    assert_eq!(interp.opcode, 1);
}

#[test]
fn group_sizes() {
    let table = ext_inst_table(TargetEnv::Universal1_2);
    let size = |set| table.group(set).map(|g| g.len()).unwrap_or(0);
    assert_eq!(size(ExtInstSet::GlslStd450), 81);
    assert_eq!(size(ExtInstSet::OpenClStd), 162);
    assert_eq!(size(ExtInstSet::AmdShaderExplicitVertexParameter), 1);
    assert_eq!(size(ExtInstSet::AmdShaderTrinaryMinmax), 9);
    assert_eq!(size(ExtInstSet::AmdGcnShader), 3);
    assert_eq!(size(ExtInstSet::AmdShaderBallot), 4);
    assert_eq!(size(ExtInstSet::DebugInfo), 34);
}

#[test]
fn concurrent_readers_see_the_same_table() {
    let handles: Vec<_> = TargetEnv::ALL
        .into_iter()
        .map(|env| {
            std::thread::spawn(move || {
                let table = ext_inst_table(env);
                let d = table.lookup_by_name(ExtInstSet::GlslStd450, "Cross").unwrap();
                (table as *const ExtInstTable as usize, d.opcode)
            })
        })
        .collect();
    let results: Vec<_> = handles.into_iter().map(|h| h.join().unwrap()).collect();
    assert!(results.iter().all(|r| *r == results[0]));
    assert_eq!(results[0].1, 68);
}
