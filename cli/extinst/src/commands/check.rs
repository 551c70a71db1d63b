//! `extinst check` — table consistency report.

use anyhow::{bail, Result};

use extinst_core::check::check_table;
use extinst_core::{ext_inst_table, TargetEnv};

/// Check the table for `env`, or for every environment.
pub fn run(env: Option<TargetEnv>) -> Result<()> {
    let envs = match env {
        Some(env) => vec![env],
        None => TargetEnv::ALL.to_vec(),
    };

    let mut errors = 0;
    for env in envs {
        let table = ext_inst_table(env);
        let issues = check_table(table);
        if issues.is_empty() {
            println!(
                "{:<20} ok ({} sets, {} instructions)",
                env.name(),
                table.len(),
                table.instruction_count()
            );
            continue;
        }
        for issue in &issues {
            println!("{:<20} {}: {}", env.name(), issue.severity, issue.message);
        }
        errors += issues.iter().filter(|i| i.is_error()).count();
    }

    if errors > 0 {
        bail!("{errors} error(s) found");
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn builtin_tables_pass() {
        assert!(run(None).is_ok());
        assert!(run(Some(TargetEnv::WebGpu0)).is_ok());
    }
}
