use anyhow::Result;

use wayfinder_routes::RouteTable;

/// Print the whole table as pretty JSON.
pub fn execute(table: &RouteTable) -> Result<()> {
    println!("{}", serde_json::to_string_pretty(table)?);
    Ok(())
}
