//! Consistency checks over built tables.
//!
//! Construction already enforces uniqueness; these checks re-verify the
//! invariants callers rely on, so tooling can report on a table as a whole.

use crate::set::ExtInstSet;
use crate::table::ExtInstTable;

/// An issue found in a table.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CheckIssue {
    /// Severity: "error" or "warning".
    pub severity: &'static str,
    /// Human-readable description.
    pub message: String,
}

impl CheckIssue {
    fn error(message: String) -> Self {
        Self {
            severity: "error",
            message,
        }
    }

    fn warning(message: String) -> Self {
        Self {
            severity: "warning",
            message,
        }
    }

    pub fn is_error(&self) -> bool {
        self.severity == "error"
    }
}

/// Check every group of `table`. An empty result means the table is sound.
pub fn check_table(table: &ExtInstTable) -> Vec<CheckIssue> {
    let mut issues = Vec::new();

    if table.is_empty() {
        issues.push(CheckIssue::error(format!(
            "table for family {} has no groups",
            table.family()
        )));
    }

    for group in table.groups() {
        let set = group.set();

        if ExtInstSet::from_import_name(set.import_name()) != Some(set) {
            issues.push(CheckIssue::error(format!(
                "import name '{}' does not resolve back to its set",
                set.import_name()
            )));
        }

        if group.is_empty() {
            issues.push(CheckIssue::warning(format!("'{set}' has no instructions")));
            continue;
        }

        if !group.indexes_consistent() {
            issues.push(CheckIssue::error(format!(
                "'{set}' indexes disagree with its entry list"
            )));
        }

        for entry in group.entries() {
            let by_name = table.lookup_by_name(set, entry.name);
            let by_opcode = table.lookup_by_opcode(set, entry.opcode);
            match (by_name, by_opcode) {
                (Ok(a), Ok(b)) if std::ptr::eq(a, entry) && std::ptr::eq(b, entry) => {}
                _ => issues.push(CheckIssue::error(format!(
                    "'{set}' instruction {} ({}) does not round-trip through name and opcode lookup",
                    entry.name, entry.opcode
                ))),
            }
        }
    }

    issues
}
