//! `extinst dump` — whole-table output.

use anyhow::{bail, Result};

use extinst_core::export::{table_to_json, table_to_toml};
use extinst_core::{ext_inst_table, ExtInstTable, TargetEnv};

/// Dump the table for `env` in `format`.
pub fn run(env: TargetEnv, format: &str) -> Result<()> {
    let table = ext_inst_table(env);
    let out = match format {
        "text" => render_text(env, table),
        "json" => table_to_json(table)?,
        "toml" => table_to_toml(table)?,
        other => bail!("unknown format '{other}' (expected text, json, or toml)"),
    };
    println!("{out}");
    Ok(())
}

fn render_text(env: TargetEnv, table: &ExtInstTable) -> String {
    let mut out = format!(
        "=== {} ({}), table {} ===\n",
        env.name(),
        env.description(),
        table.family()
    );
    for group in table.groups() {
        out.push_str(&format!(
            "\n--- {} ({} instructions) ---\n",
            group.import_name(),
            group.len()
        ));
        for d in group.iter() {
            out.push_str(&format!("  {:>4}  {}\n", d.opcode, d.name));
        }
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn all_formats() {
        for format in ["text", "json", "toml"] {
            assert!(run(TargetEnv::Vulkan1_1, format).is_ok(), "{format}");
        }
    }

    #[test]
    fn unknown_format() {
        assert!(run(TargetEnv::Vulkan1_1, "yaml").is_err());
    }

    #[test]
    fn text_lists_groups_in_opcode_order() {
        let env = TargetEnv::OpenCl2_1;
        let text = render_text(env, ext_inst_table(env));
        assert!(text.contains("--- GLSL.std.450 (81 instructions) ---"));
        assert!(text.contains("--- DebugInfo (34 instructions) ---"));
        let acos = text.find("     0  acos").unwrap();
        let u_abs = text.find("   201  u_abs").unwrap();
        assert!(acos < u_abs);
    }
}
