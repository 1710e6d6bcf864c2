//! Query-string options: `query` replaces, `merge_query` merges onto the
//! context's current query string.
//!
//! Serialization follows `application/x-www-form-urlencoded`, the encoding
//! browsers use for `URLSearchParams` (space as `+`, brackets escaped).

use wayfinder_core::{RouteError, RouteResult, Scalar};

/// Value of one query key.
#[derive(Debug, Clone, PartialEq)]
pub enum QueryValue {
    /// Removes the key (and its bracketed forms) when merging.
    Null,
    Scalar(Scalar),
    /// Rendered as repeated `key[]=value` pairs.
    List(Vec<Scalar>),
    /// Rendered as `key[sub]=value` pairs.
    Map(Vec<(String, Scalar)>),
}

impl From<Scalar> for QueryValue {
    fn from(value: Scalar) -> Self {
        QueryValue::Scalar(value)
    }
}

macro_rules! impl_query_scalar {
    ($($t:ty),+) => {
        $(
            impl From<$t> for QueryValue {
                fn from(value: $t) -> Self {
                    QueryValue::Scalar(Scalar::from(value))
                }
            }
        )+
    };
}

impl_query_scalar!(
    i8, i16, i32, i64, u8, u16, u32, u64, usize, f32, f64, bool, String, &str, &String
);

impl QueryValue {
    pub fn list<V: Into<Scalar>>(values: impl IntoIterator<Item = V>) -> Self {
        QueryValue::List(values.into_iter().map(Into::into).collect())
    }

    pub fn map<K, V>(entries: impl IntoIterator<Item = (K, V)>) -> Self
    where
        K: Into<String>,
        V: Into<Scalar>,
    {
        QueryValue::Map(
            entries
                .into_iter()
                .map(|(k, v)| (k.into(), v.into()))
                .collect(),
        )
    }
}

/// Insertion-ordered query parameters.
///
/// Re-inserting a key replaces its value in place, like assigning to an
/// existing property of an object literal.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct QueryMap {
    entries: Vec<(String, QueryValue)>,
}

impl QueryMap {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn insert(&mut self, key: impl Into<String>, value: impl Into<QueryValue>) {
        let key = key.into();
        let value = value.into();
        match self.entries.iter_mut().find(|(k, _)| *k == key) {
            Some(slot) => slot.1 = value,
            None => self.entries.push((key, value)),
        }
    }

    pub fn with(mut self, key: impl Into<String>, value: impl Into<QueryValue>) -> Self {
        self.insert(key, value);
        self
    }

    pub fn get(&self, key: &str) -> Option<&QueryValue> {
        self.entries.iter().find(|(k, _)| k == key).map(|(_, v)| v)
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &QueryValue)> {
        self.entries.iter().map(|(k, v)| (k.as_str(), v))
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Entries of `self` followed by `other`, `other` winning on shared keys.
    pub fn merged_with(&self, other: &QueryMap) -> QueryMap {
        let mut out = self.clone();
        for (k, v) in other.iter() {
            out.insert(k, v.clone());
        }
        out
    }
}

impl<K: Into<String>, V: Into<QueryValue>> FromIterator<(K, V)> for QueryMap {
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        let mut map = QueryMap::new();
        for (k, v) in iter {
            map.insert(k, v);
        }
        map
    }
}

/// Query options accepted by URL builders.
///
/// When both are set, `query` wins and `merge_query` is ignored.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct RouteQueryOptions {
    pub query: Option<QueryMap>,
    pub merge_query: Option<QueryMap>,
}

impl RouteQueryOptions {
    pub fn query(query: QueryMap) -> Self {
        Self {
            query: Some(query),
            merge_query: None,
        }
    }

    pub fn merge(merge_query: QueryMap) -> Self {
        Self {
            query: None,
            merge_query: Some(merge_query),
        }
    }

    /// Same mode, with `extra` placed first and the caller's entries after it.
    pub(crate) fn prepend(&self, extra: QueryMap) -> Self {
        match (&self.query, &self.merge_query) {
            (Some(q), _) => Self::query(extra.merged_with(q)),
            (None, Some(m)) => Self::merge(extra.merged_with(m)),
            (None, None) => Self::query(extra),
        }
    }
}

/// Ordered `key=value` pairs with `URLSearchParams`-style editing.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SearchParams {
    pairs: Vec<(String, String)>,
}

impl SearchParams {
    /// Parse a query string, with or without the leading `?`.
    pub fn parse(query: &str) -> RouteResult<Self> {
        let query = query.strip_prefix('?').unwrap_or(query);
        let pairs = serde_urlencoded::from_str::<Vec<(String, String)>>(query)
            .map_err(|e| RouteError::QueryEncoding(e.to_string()))?;
        Ok(Self { pairs })
    }

    pub fn has(&self, key: &str) -> bool {
        self.pairs.iter().any(|(k, _)| k == key)
    }

    pub fn get(&self, key: &str) -> Option<&str> {
        self.pairs
            .iter()
            .find(|(k, _)| k == key)
            .map(|(_, v)| v.as_str())
    }

    /// Replace the first occurrence in place and drop the rest, or append.
    pub fn set(&mut self, key: &str, value: String) {
        match self.pairs.iter().position(|(k, _)| k == key) {
            Some(first) => {
                self.pairs[first].1 = value;
                let mut index = 0;
                self.pairs.retain(|(k, _)| {
                    let keep = index == first || k != key;
                    index += 1;
                    keep
                });
            }
            None => self.pairs.push((key.to_string(), value)),
        }
    }

    pub fn append(&mut self, key: &str, value: String) {
        self.pairs.push((key.to_string(), value));
    }

    pub fn delete(&mut self, key: &str) {
        self.pairs.retain(|(k, _)| k != key);
    }

    /// Remove `key`, `key[]` and every `key[...]` entry.
    pub fn delete_family(&mut self, key: &str) {
        let bracketed = format!("{key}[");
        self.pairs
            .retain(|(k, _)| k != key && !k.starts_with(&bracketed));
    }

    pub fn is_empty(&self) -> bool {
        self.pairs.is_empty()
    }

    pub fn encode(&self) -> RouteResult<String> {
        serde_urlencoded::to_string(&self.pairs)
            .map_err(|e| RouteError::QueryEncoding(e.to_string()))
    }

    fn apply(&mut self, key: &str, value: &QueryValue) {
        match value {
            QueryValue::Null => self.delete_family(key),
            QueryValue::Scalar(s) => self.set(key, s.to_query_string()),
            QueryValue::List(items) => {
                let list_key = format!("{key}[]");
                self.delete(&list_key);
                for item in items {
                    self.append(&list_key, item.to_query_string());
                }
            }
            QueryValue::Map(entries) => {
                self.delete_family_members(key);
                for (sub, v) in entries {
                    self.set(&format!("{key}[{sub}]"), v.to_query_string());
                }
            }
        }
    }

    fn delete_family_members(&mut self, key: &str) {
        let bracketed = format!("{key}[");
        self.pairs.retain(|(k, _)| !k.starts_with(&bracketed));
    }
}

/// Render `?a=b...` for the given options, or an empty string.
///
/// `current_query` is the query string `merge_query` is merged onto.
pub fn render_query(options: &RouteQueryOptions, current_query: &str) -> RouteResult<String> {
    let (values, mut params) = match (&options.query, &options.merge_query) {
        (Some(q), _) => (q, SearchParams::default()),
        (None, Some(m)) => (m, SearchParams::parse(current_query)?),
        (None, None) => return Ok(String::new()),
    };

    for (key, value) in values.iter() {
        params.apply(key, value);
    }

    if params.is_empty() {
        return Ok(String::new());
    }
    Ok(format!("?{}", params.encode()?))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn no_options_render_nothing() {
        assert_eq!(render_query(&RouteQueryOptions::default(), "?page=2").unwrap(), "");
    }

    #[test]
    fn query_replaces_current_query() {
        let opts = RouteQueryOptions::query(QueryMap::new().with("buscar", "tornillo"));
        assert_eq!(render_query(&opts, "?page=2").unwrap(), "?buscar=tornillo");
    }

    #[test]
    fn merge_query_keeps_existing_keys_and_overrides_shared_ones() {
        let opts = RouteQueryOptions::merge(QueryMap::new().with("page", 3).with("orden", "desc"));
        assert_eq!(
            render_query(&opts, "?page=2&buscar=caja").unwrap(),
            "?page=3&buscar=caja&orden=desc"
        );
    }

    #[test]
    fn merge_null_removes_key() {
        let opts = RouteQueryOptions::merge(QueryMap::new().with("page", QueryValue::Null));
        assert_eq!(render_query(&opts, "page=2&buscar=caja").unwrap(), "?buscar=caja");
        let opts = RouteQueryOptions::merge(QueryMap::new().with("page", QueryValue::Null));
        assert_eq!(render_query(&opts, "page=2").unwrap(), "");
    }

    #[test]
    fn booleans_render_as_digits() {
        let opts = RouteQueryOptions::query(
            QueryMap::new().with("activos", true).with("anulados", false),
        );
        assert_eq!(render_query(&opts, "").unwrap(), "?activos=1&anulados=0");
    }

    #[test]
    fn lists_and_maps_use_bracket_keys() {
        let opts = RouteQueryOptions::query(
            QueryMap::new()
                .with("estado", QueryValue::list(["pagado", "pendiente"]))
                .with("filtro", QueryValue::map([("almacen", 2)])),
        );
        assert_eq!(
            render_query(&opts, "").unwrap(),
            "?estado%5B%5D=pagado&estado%5B%5D=pendiente&filtro%5Balmacen%5D=2"
        );
    }

    #[test]
    fn merging_a_list_replaces_previous_list() {
        let opts = RouteQueryOptions::merge(QueryMap::new().with("ids", QueryValue::list([3])));
        assert_eq!(
            render_query(&opts, "ids%5B%5D=1&ids%5B%5D=2&page=1").unwrap(),
            "?page=1&ids%5B%5D=3"
        );
    }

    #[test]
    fn spaces_encode_as_plus() {
        let opts = RouteQueryOptions::query(QueryMap::new().with("q", "caja chica"));
        assert_eq!(render_query(&opts, "").unwrap(), "?q=caja+chica");
    }

    #[test]
    fn reinserting_a_key_keeps_its_position() {
        let map = QueryMap::new().with("a", 1).with("b", 2).with("a", 3);
        let keys: Vec<&str> = map.iter().map(|(k, _)| k).collect();
        assert_eq!(keys, ["a", "b"]);
        assert_eq!(map.get("a"), Some(&QueryValue::from(3)));
    }

    #[test]
    fn set_collapses_duplicates_into_first_position() {
        let mut params = SearchParams::parse("a=1&b=2&a=3").unwrap();
        params.set("a", "9".to_string());
        assert_eq!(params.encode().unwrap(), "a=9&b=2");
    }

    #[test]
    fn search_params_parse_and_delete_families() {
        let mut params =
            SearchParams::parse("?q=caja+chica&ids%5B%5D=1&ids%5Bx%5D=2&idsx=3").unwrap();
        assert_eq!(params.get("q"), Some("caja chica"));
        assert!(params.has("ids[]"));

        params.delete_family("ids");
        assert!(!params.has("ids[]"));
        assert!(!params.has("ids[x]"));
        assert_eq!(params.get("idsx"), Some("3"));
    }
}
