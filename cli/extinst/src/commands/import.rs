//! `extinst import` — import-name resolution.

use anyhow::{bail, Result};

use extinst_core::{resolve_import_name, ExtInstSet};

/// Resolve `name` and print the set it names.
pub fn run(name: &str) -> Result<()> {
    match resolve_import_name(name) {
        Some(set) => {
            println!("{name}: {set:?}");
            Ok(())
        }
        None => bail!(
            "'{name}' is not a recognized extended instruction set. Known imports: {}",
            known_imports()
        ),
    }
}

fn known_imports() -> String {
    ExtInstSet::ALL
        .iter()
        .map(|s| s.import_name())
        .collect::<Vec<_>>()
        .join(", ")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn known_import() {
        assert!(run("GLSL.std.450").is_ok());
        assert!(run("SPV_AMD_shader_ballot").is_ok());
    }

    #[test]
    fn unknown_import() {
        let err = run("bogus").unwrap_err();
        assert!(err.to_string().contains("OpenCL.std"));
    }
}
