use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use crate::args::ParamValue;

/// Explicit configuration every URL builder reads.
///
/// Holds the path-parameter defaults applied to omitted placeholders and the
/// current query string that `merge_query` options are merged onto.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct UrlContext {
    #[serde(default)]
    pub defaults: BTreeMap<String, ParamValue>,
    #[serde(default)]
    pub current_query: String,
}

static EMPTY: UrlContext = UrlContext {
    defaults: BTreeMap::new(),
    current_query: String::new(),
};

impl UrlContext {
    pub fn new() -> Self {
        Self::default()
    }

    /// Context with no defaults and an empty current query.
    pub fn empty() -> &'static UrlContext {
        &EMPTY
    }

    pub fn with_default(mut self, name: impl Into<String>, value: impl Into<ParamValue>) -> Self {
        self.defaults.insert(name.into(), value.into());
        self
    }

    pub fn with_current_query(mut self, query: impl Into<String>) -> Self {
        self.current_query = query.into();
        self
    }

    /// Fill `named` with defaults for the given placeholder names it lacks.
    pub(crate) fn apply_defaults<'a>(
        &self,
        names: impl IntoIterator<Item = &'a str>,
        named: &mut BTreeMap<String, ParamValue>,
    ) {
        for name in names {
            if named.contains_key(name) {
                continue;
            }
            if let Some(value) = self.defaults.get(name) {
                named.insert(name.to_string(), value.clone());
            }
        }
    }
}
