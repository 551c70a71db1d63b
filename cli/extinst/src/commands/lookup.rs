//! `extinst lookup` — single instruction lookup.

use anyhow::{Context, Result};

use extinst_core::{ext_inst_table, resolve_import_name, InstructionDescriptor, TargetEnv};

/// What to look an instruction up by.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Key {
    Name(String),
    Opcode(u32),
}

/// Look up one instruction of `import` in the table for `env`.
pub fn run(env: TargetEnv, import: &str, key: &Key) -> Result<()> {
    let descriptor = find(env, import, key)?;
    print!("{}", describe(import, descriptor));
    Ok(())
}

fn find(env: TargetEnv, import: &str, key: &Key) -> Result<&'static InstructionDescriptor> {
    let set = resolve_import_name(import)
        .with_context(|| format!("'{import}' is not a recognized extended instruction set"))?;
    let table = ext_inst_table(env);
    let found = match key {
        Key::Name(name) => table.lookup_by_name(set, name),
        Key::Opcode(opcode) => table.lookup_by_opcode(set, *opcode),
    };
    found.with_context(|| format!("lookup in table for {env}"))
}

fn describe(import: &str, d: &InstructionDescriptor) -> String {
    let mut out = format!("{import} {} (opcode {})\n", d.name, d.opcode);
    if d.operands.is_empty() {
        out.push_str("  operands: none\n");
    } else {
        let kinds: Vec<String> = d.operands.iter().map(|k| format!("{k:?}")).collect();
        out.push_str(&format!("  operands: {}\n", kinds.join(", ")));
    }
    if !d.capabilities.is_empty() {
        let caps: Vec<String> = d.capabilities.iter().map(|c| format!("{c:?}")).collect();
        out.push_str(&format!("  requires: {}\n", caps.join(", ")));
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn by_name_and_by_opcode() {
        let env = TargetEnv::Vulkan1_0;
        let a = find(env, "GLSL.std.450", &Key::Name("Sqrt".into())).unwrap();
        let b = find(env, "GLSL.std.450", &Key::Opcode(31)).unwrap();
        assert!(std::ptr::eq(a, b));
    }

    #[test]
    fn unknown_import_fails() {
        assert!(run(TargetEnv::Vulkan1_0, "bogus", &Key::Opcode(1)).is_err());
    }

    #[test]
    fn unknown_instruction_fails() {
        let err = find(TargetEnv::OpenCl1_2, "OpenCL.std", &Key::Opcode(999)).unwrap_err();
        assert!(format!("{err:#}").contains("opcode 999"));
    }

    #[test]
    fn describe_lists_capabilities() {
        let d = find(
            TargetEnv::Vulkan1_0,
            "GLSL.std.450",
            &Key::Name("InterpolateAtSample".into()),
        )
        .unwrap();
        let text = describe("GLSL.std.450", d);
        assert!(text.starts_with("GLSL.std.450 InterpolateAtSample (opcode 77)"));
        assert!(text.contains("operands: Id, Id"));
        assert!(text.contains("requires: InterpolationFunction"));
    }
}
