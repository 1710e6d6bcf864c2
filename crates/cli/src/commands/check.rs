use std::path::PathBuf;

use anyhow::{Context, Result, bail};

use wayfinder_routes::{RouteTable, parse_route_list};

use crate::config::{Config, ROUTE_LIST_ENV};

/// Compare `table` against a `route:list --json` dump; fails when they differ.
pub fn execute(table: &RouteTable, config: &Config, path: Option<PathBuf>) -> Result<()> {
    let Some(path) = path.or_else(|| config.route_list.clone()) else {
        bail!("no route list given; pass a path or set {ROUTE_LIST_ENV}");
    };

    let raw = std::fs::read_to_string(&path)
        .with_context(|| format!("reading route list {}", path.display()))?;
    let server = parse_route_list(&raw)
        .with_context(|| format!("parsing route list {}", path.display()))?;

    let drift = table.drift(&server);
    tracing::info!(
        path = %path.display(),
        routes = server.len(),
        drift = drift.len(),
        "checked route list"
    );

    if drift.is_empty() {
        println!("{} routes, no drift", table.len());
        return Ok(());
    }

    for entry in &drift {
        println!("{entry}");
    }
    bail!("{} route(s) drifted from {}", drift.len(), path.display())
}
