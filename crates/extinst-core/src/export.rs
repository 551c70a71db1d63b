//! JSON and TOML export of extended instruction tables.

use serde::Serialize;

use crate::descriptor::InstructionDescriptor;
use crate::error::Result;
use crate::group::ExtensionGroup;
use crate::table::ExtInstTable;

/// Serializable view of a table.
#[derive(Debug, Serialize)]
#[serde(rename_all = "kebab-case")]
pub struct TableExport {
    pub family: &'static str,
    pub groups: Vec<GroupExport>,
}

/// Serializable view of one group, instructions in opcode order.
#[derive(Debug, Serialize)]
#[serde(rename_all = "kebab-case")]
pub struct GroupExport {
    pub import_name: &'static str,
    pub instructions: Vec<&'static InstructionDescriptor>,
}

impl From<&ExtensionGroup> for GroupExport {
    fn from(group: &ExtensionGroup) -> Self {
        Self {
            import_name: group.import_name(),
            instructions: group.iter().collect(),
        }
    }
}

impl From<&ExtInstTable> for TableExport {
    fn from(table: &ExtInstTable) -> Self {
        Self {
            family: table.family().name(),
            groups: table.groups().iter().map(GroupExport::from).collect(),
        }
    }
}

/// Serialize a table to pretty JSON.
pub fn table_to_json(table: &ExtInstTable) -> Result<String> {
    let json = serde_json::to_string_pretty(&TableExport::from(table))?;
    Ok(json)
}

/// Serialize a table to pretty TOML.
pub fn table_to_toml(table: &ExtInstTable) -> Result<String> {
    let toml_str = toml::to_string_pretty(&TableExport::from(table))?;
    Ok(toml_str)
}
