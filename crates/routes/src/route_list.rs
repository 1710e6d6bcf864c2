//! Import of `php artisan route:list --json` output.

use serde::Deserialize;

use wayfinder_core::{HttpVerb, RouteError, RouteResult};

use crate::action::Action;
use crate::controller::Controller;
use crate::table::RouteTable;
use crate::template::RouteTemplate;

/// Method name Laravel dispatches to for single-action controllers.
pub const INVOKE_METHOD: &str = "__invoke";

/// One row of `route:list --json`. Unlisted fields (middleware, ...) are ignored.
#[derive(Debug, Clone, Deserialize)]
pub struct RouteListEntry {
    #[serde(default)]
    pub domain: Option<String>,
    pub method: String,
    pub uri: String,
    #[serde(default)]
    pub name: Option<String>,
    pub action: String,
}

impl RouteListEntry {
    fn verbs(&self) -> RouteResult<Vec<HttpVerb>> {
        let verbs = self
            .method
            .split('|')
            .filter(|m| !m.trim().is_empty())
            .map(str::parse)
            .collect::<RouteResult<Vec<HttpVerb>>>()?;
        if verbs.is_empty() {
            return Err(RouteError::route_list(format!("route `{}` has no methods", self.uri)));
        }
        Ok(verbs)
    }

    fn url(&self) -> String {
        let path = self.uri.trim_start_matches('/');
        match self.domain.as_deref() {
            Some(domain) if !domain.is_empty() => format!("//{domain}/{path}"),
            _ => format!("/{path}"),
        }
    }

    /// `(class, method)` for controller routes, `None` for closures.
    fn controller_method(&self) -> Option<(&str, &str)> {
        if self.action == "Closure" {
            return None;
        }
        Some(
            self.action
                .split_once('@')
                .unwrap_or((self.action.as_str(), INVOKE_METHOD)),
        )
    }
}

/// Parse a `route:list --json` document.
pub fn parse_route_list(json: &str) -> RouteResult<RouteTable> {
    let entries: Vec<RouteListEntry> =
        serde_json::from_str(json).map_err(|e| RouteError::route_list(e.to_string()))?;
    from_entries(entries)
}

/// Group entries into controllers in first-seen order, skipping closures.
pub fn from_entries(entries: impl IntoIterator<Item = RouteListEntry>) -> RouteResult<RouteTable> {
    let mut grouped: Vec<(String, Vec<Action>)> = Vec::new();
    let mut skipped = 0usize;

    for entry in entries {
        let Some((class, method)) = entry.controller_method() else {
            tracing::warn!(uri = %entry.uri, "skipping closure route");
            skipped += 1;
            continue;
        };

        let template = RouteTemplate::owned(entry.verbs()?, entry.url());
        template.segments()?;

        let action = Action::owned(
            class.to_string(),
            method.to_string(),
            entry.name.clone(),
            template,
        );

        match grouped.iter_mut().find(|(c, _)| c == class) {
            Some((_, actions)) => actions.push(action),
            None => grouped.push((class.to_string(), vec![action])),
        }
    }

    let table = RouteTable::new(
        grouped
            .into_iter()
            .map(|(class, actions)| Controller::owned(class, actions)),
    );
    tracing::debug!(
        controllers = table.controllers().len(),
        actions = table.len(),
        skipped,
        "imported route list"
    );
    Ok(table)
}
