pub mod build;
pub mod check;
pub mod export;
pub mod list;

use anyhow::{Result, bail};

use wayfinder_routes::{Action, ActionEntry, RouteTable};

/// Resolve `route` to exactly one action.
///
/// A controller method reachable through several URLs needs `template` to
/// pick one of them.
pub fn pick<'a>(table: &'a RouteTable, route: &str, template: Option<&str>) -> Result<&'a Action> {
    let entry = table.resolve(route)?;
    if let Some(template) = template {
        return match entry.by_url(template) {
            Some(action) => Ok(action),
            None => bail!("`{route}` has no URL template `{template}`"),
        };
    }

    match entry {
        ActionEntry::Single(action) => Ok(action),
        ActionEntry::ByUrl(map) => {
            let templates: Vec<&str> = map.keys().copied().collect();
            bail!(
                "`{route}` is reachable through several URLs; pass --template with one of: {}",
                templates.join(", ")
            )
        }
    }
}
