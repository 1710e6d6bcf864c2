//! Per-controller bundles of actions.

use std::borrow::Cow;
use std::collections::BTreeMap;

use serde::Serialize;

use crate::action::{Action, short_class};

/// All routes of one controller class, in declaration order.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Controller {
    name: Cow<'static, str>,
    actions: Cow<'static, [Action]>,
}

/// What a controller method resolves to.
///
/// A method reachable through two URL patterns is exposed as a map from URL
/// template to action rather than under synthetic names.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ActionEntry<'a> {
    Single(&'a Action),
    ByUrl(BTreeMap<&'a str, &'a Action>),
}

impl<'a> ActionEntry<'a> {
    pub fn single(&self) -> Option<&'a Action> {
        match self {
            ActionEntry::Single(action) => Some(*action),
            ActionEntry::ByUrl(_) => None,
        }
    }

    /// Action for the given URL template; a single entry matches its own URL.
    pub fn by_url(&self, url: &str) -> Option<&'a Action> {
        match self {
            ActionEntry::Single(action) => (action.url_template() == url).then_some(*action),
            ActionEntry::ByUrl(map) => map.get(url).copied(),
        }
    }

    pub fn actions(&self) -> Vec<&'a Action> {
        match self {
            ActionEntry::Single(action) => vec![*action],
            ActionEntry::ByUrl(map) => map.values().copied().collect(),
        }
    }
}

impl Controller {
    pub const fn new(name: &'static str, actions: &'static [Action]) -> Self {
        Self {
            name: Cow::Borrowed(name),
            actions: Cow::Borrowed(actions),
        }
    }

    pub fn owned(name: String, actions: Vec<Action>) -> Self {
        Self {
            name: Cow::Owned(name),
            actions: Cow::Owned(actions),
        }
    }

    /// Fully qualified class name.
    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn short_name(&self) -> &str {
        short_class(&self.name)
    }

    /// Whether `name` is this controller's class, with or without namespace.
    pub fn is_named(&self, name: &str) -> bool {
        name == self.name() || name == self.short_name()
    }

    pub fn actions(&self) -> &[Action] {
        &self.actions
    }

    /// Distinct method names in first-seen order.
    pub fn method_names(&self) -> Vec<&str> {
        let mut names: Vec<&str> = Vec::new();
        for action in self.actions.iter() {
            if !names.contains(&action.method()) {
                names.push(action.method());
            }
        }
        names
    }

    pub fn entry(&self, method: &str) -> Option<ActionEntry<'_>> {
        let matching: Vec<&Action> = self
            .actions
            .iter()
            .filter(|a| a.method() == method)
            .collect();
        match matching.as_slice() {
            [] => None,
            [only] => Some(ActionEntry::Single(*only)),
            many => Some(ActionEntry::ByUrl(
                many.iter().map(|&a| (a.url_template(), a)).collect(),
            )),
        }
    }
}
