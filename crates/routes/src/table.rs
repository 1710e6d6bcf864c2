//! Root index over every controller, plus drift detection against another table.

use std::collections::BTreeMap;

use serde::Serialize;

use wayfinder_core::{HttpVerb, RouteError, RouteResult};

use crate::action::Action;
use crate::controller::{ActionEntry, Controller};

/// Every controller of an application.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct RouteTable {
    controllers: Vec<Controller>,
}

/// One difference between two route tables.
///
/// Entries are matched by action key and URL template.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum RouteDrift {
    /// Present in the expected table only.
    Missing { action: String, url: String },
    /// Present in this table only.
    Unexpected { action: String, url: String },
    MethodsChanged {
        action: String,
        url: String,
        expected: Vec<HttpVerb>,
        actual: Vec<HttpVerb>,
    },
    NameChanged {
        action: String,
        url: String,
        expected: Option<String>,
        actual: Option<String>,
    },
}

impl core::fmt::Display for RouteDrift {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        match self {
            RouteDrift::Missing { action, url } => write!(f, "missing   {url} ({action})"),
            RouteDrift::Unexpected { action, url } => write!(f, "unexpected {url} ({action})"),
            RouteDrift::MethodsChanged {
                action,
                url,
                expected,
                actual,
            } => write!(
                f,
                "methods   {url} ({action}): expected {}, found {}",
                join_verbs(expected),
                join_verbs(actual)
            ),
            RouteDrift::NameChanged {
                action,
                url,
                expected,
                actual,
            } => write!(
                f,
                "name      {url} ({action}): expected {}, found {}",
                expected.as_deref().unwrap_or("-"),
                actual.as_deref().unwrap_or("-")
            ),
        }
    }
}

fn join_verbs(verbs: &[HttpVerb]) -> String {
    verbs
        .iter()
        .map(|v| v.as_upper())
        .collect::<Vec<_>>()
        .join("|")
}

impl RouteTable {
    pub fn new(controllers: impl IntoIterator<Item = Controller>) -> Self {
        Self {
            controllers: controllers.into_iter().collect(),
        }
    }

    pub fn controllers(&self) -> &[Controller] {
        &self.controllers
    }

    pub fn controller(&self, name: &str) -> Option<&Controller> {
        self.controllers.iter().find(|c| c.is_named(name))
    }

    pub fn actions(&self) -> impl Iterator<Item = &Action> {
        self.controllers.iter().flat_map(|c| c.actions().iter())
    }

    pub fn len(&self) -> usize {
        self.actions().count()
    }

    pub fn is_empty(&self) -> bool {
        self.actions().next().is_none()
    }

    /// Action registered under a Laravel route name (`almacenes.update`).
    pub fn by_name(&self, name: &str) -> Option<&Action> {
        self.actions().find(|a| a.name() == Some(name))
    }

    /// Action(s) for `Class@method`, with or without the namespace.
    pub fn by_key(&self, key: &str) -> Option<ActionEntry<'_>> {
        let (class, method) = key.split_once('@')?;
        self.controller(class)?.entry(method)
    }

    /// Resolve a route name first, then an action key.
    pub fn resolve(&self, route: &str) -> RouteResult<ActionEntry<'_>> {
        if let Some(action) = self.by_name(route) {
            return Ok(ActionEntry::Single(action));
        }
        self.by_key(route)
            .ok_or_else(|| RouteError::unknown_route(route))
    }

    /// Parse every template, failing on the first malformed one.
    pub fn validate(&self) -> RouteResult<()> {
        for action in self.actions() {
            action.definition().segments()?;
        }
        Ok(())
    }

    /// Differences of `self` relative to `expected`, in `expected` order
    /// followed by entries only `self` has.
    pub fn drift(&self, expected: &RouteTable) -> Vec<RouteDrift> {
        let ours: BTreeMap<(String, &str), &Action> = self
            .actions()
            .map(|a| ((a.key(), a.url_template()), a))
            .collect();

        let mut drift = Vec::new();
        let mut seen = Vec::new();

        for theirs in expected.actions() {
            let key = (theirs.key(), theirs.url_template());
            let Some(mine) = ours.get(&key) else {
                drift.push(RouteDrift::Missing {
                    action: key.0,
                    url: key.1.to_string(),
                });
                continue;
            };

            if mine.definition().methods != theirs.definition().methods {
                drift.push(RouteDrift::MethodsChanged {
                    action: key.0.clone(),
                    url: key.1.to_string(),
                    expected: theirs.definition().methods.to_vec(),
                    actual: mine.definition().methods.to_vec(),
                });
            }
            if mine.name() != theirs.name() {
                drift.push(RouteDrift::NameChanged {
                    action: key.0.clone(),
                    url: key.1.to_string(),
                    expected: theirs.name().map(str::to_string),
                    actual: mine.name().map(str::to_string),
                });
            }
            seen.push(key);
        }

        for ((action, url), _) in ours {
            if !seen.iter().any(|(a, u)| *a == action && *u == url) {
                drift.push(RouteDrift::Unexpected {
                    action,
                    url: url.to_string(),
                });
            }
        }

        drift
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const ALMACEN: &str = "App\\Http\\Controllers\\AlmacenController";

    const ALMACEN_ACTIONS: &[Action] = &[
        Action::named(
            "almacenes.index",
            ALMACEN,
            "index",
            &[HttpVerb::Get, HttpVerb::Head],
            "/almacenes",
        ),
        Action::named(
            "almacenes.update",
            ALMACEN,
            "update",
            &[HttpVerb::Put, HttpVerb::Patch],
            "/almacenes/{almacene}",
        ),
    ];

    fn table() -> RouteTable {
        RouteTable::new([Controller::new(ALMACEN, ALMACEN_ACTIONS)])
    }

    #[test]
    fn resolves_by_name_then_key() {
        let t = table();
        let by_name = t.resolve("almacenes.update").unwrap().single().unwrap();
        let by_key = t.resolve("AlmacenController@update").unwrap().single().unwrap();
        assert_eq!(by_name, by_key);
        assert_eq!(
            t.resolve("almacenes.destroy").unwrap_err(),
            RouteError::unknown_route("almacenes.destroy")
        );
    }

    #[test]
    fn counts_actions() {
        assert_eq!(table().len(), 2);
        assert!(RouteTable::default().is_empty());
        assert!(table().validate().is_ok());
    }

    #[test]
    fn identical_tables_have_no_drift() {
        assert!(table().drift(&table()).is_empty());
    }

    #[test]
    fn drift_reports_missing_unexpected_and_changed_entries() {
        let server = RouteTable::new([Controller::owned(
            ALMACEN.to_string(),
            vec![
                Action::owned(
                    ALMACEN.to_string(),
                    "update".to_string(),
                    Some("almacenes.actualizar".to_string()),
                    crate::RouteTemplate::owned(
                        vec![HttpVerb::Put],
                        "/almacenes/{almacene}".to_string(),
                    ),
                ),
                Action::owned(
                    ALMACEN.to_string(),
                    "destroy".to_string(),
                    Some("almacenes.destroy".to_string()),
                    crate::RouteTemplate::owned(
                        vec![HttpVerb::Delete],
                        "/almacenes/{almacene}".to_string(),
                    ),
                ),
            ],
        )]);

        let drift = table().drift(&server);
        let update_key = format!("{ALMACEN}@update");
        assert_eq!(
            drift,
            vec![
                RouteDrift::MethodsChanged {
                    action: update_key.clone(),
                    url: "/almacenes/{almacene}".to_string(),
                    expected: vec![HttpVerb::Put],
                    actual: vec![HttpVerb::Put, HttpVerb::Patch],
                },
                RouteDrift::NameChanged {
                    action: update_key,
                    url: "/almacenes/{almacene}".to_string(),
                    expected: Some("almacenes.actualizar".to_string()),
                    actual: Some("almacenes.update".to_string()),
                },
                RouteDrift::Missing {
                    action: format!("{ALMACEN}@destroy"),
                    url: "/almacenes/{almacene}".to_string(),
                },
                RouteDrift::Unexpected {
                    action: format!("{ALMACEN}@index"),
                    url: "/almacenes".to_string(),
                },
            ]
        );
        assert_eq!(
            drift[0].to_string(),
            format!(
                "methods   /almacenes/{{almacene}} ({ALMACEN}@update): {}",
                "expected PUT, found PUT|PATCH"
            )
        );
    }
}
