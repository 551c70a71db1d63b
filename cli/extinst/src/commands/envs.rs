//! `extinst envs` — target environment listing.

use anyhow::Result;

use extinst_core::{ext_inst_table, TargetEnv};

/// List every recognized environment.
pub fn run() -> Result<()> {
    println!("Target environments:");
    println!();
    for env in TargetEnv::ALL {
        println!("  {}", format_env(env));
    }
    println!();
    println!("Use '--target <name>' to select one.");
    Ok(())
}

fn format_env(env: TargetEnv) -> String {
    let table = ext_inst_table(env);
    format!(
        "{:>2}  {:<20} {:<28} table {} ({} sets)",
        env.raw(),
        env.name(),
        env.description(),
        table.family(),
        table.len()
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn lists_every_environment() {
        assert!(run().is_ok());
    }

    #[test]
    fn line_shows_name_and_family() {
        let line = format_env(TargetEnv::Vulkan1_1);
        assert!(line.contains("vulkan1.1"));
        assert!(line.contains("Vulkan 1.1"));
        assert!(line.contains("table 1.0"));
    }
}
