//! Path-parameter arguments and their normalization into named values.
//!
//! Callers may pass a bare value, a positional tuple, a named map, or a
//! model-shaped value exposing the placeholder's binding field (`id` by
//! default). Everything is turned into one canonical `name -> value` map
//! before substitution runs, so the URL builder never inspects shapes.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use wayfinder_core::{RouteError, RouteResult, Scalar};

use crate::template::{Placeholder, Segment};

/// Value bound to one placeholder.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum ParamValue {
    Scalar(Scalar),
    /// A record whose binding field (`id`, `slug`, ...) is substituted.
    Model(BTreeMap<String, Scalar>),
}

impl ParamValue {
    /// Model exposing only an `id` field.
    pub fn id(value: impl Into<Scalar>) -> Self {
        Self::model([("id", value)])
    }

    pub fn model<K, V>(fields: impl IntoIterator<Item = (K, V)>) -> Self
    where
        K: Into<String>,
        V: Into<Scalar>,
    {
        Self::Model(
            fields
                .into_iter()
                .map(|(k, v)| (k.into(), v.into()))
                .collect(),
        )
    }

    /// Scalar substituted for a placeholder with the given binding field.
    pub fn resolve(&self, field: &str) -> Option<&Scalar> {
        match self {
            ParamValue::Scalar(s) => Some(s),
            ParamValue::Model(fields) => fields.get(field),
        }
    }
}

impl From<Scalar> for ParamValue {
    fn from(value: Scalar) -> Self {
        ParamValue::Scalar(value)
    }
}

macro_rules! impl_scalar_like {
    ($($t:ty),+) => {
        $(
            impl From<$t> for ParamValue {
                fn from(value: $t) -> Self {
                    ParamValue::Scalar(Scalar::from(value))
                }
            }

            impl From<$t> for RouteArgs {
                fn from(value: $t) -> Self {
                    RouteArgs::Single(ParamValue::from(value))
                }
            }
        )+
    };
}

impl_scalar_like!(
    i8, i16, i32, i64, u8, u16, u32, u64, usize, f32, f64, bool, String, &str, &String
);

/// Arguments accepted by every URL builder.
#[derive(Debug, Clone, Default, PartialEq)]
pub enum RouteArgs {
    /// No path parameters (or all of them come from defaults).
    #[default]
    None,
    /// One value bound to the first placeholder.
    Single(ParamValue),
    /// Values bound to placeholders in template order.
    Positional(Vec<ParamValue>),
    /// Values bound by placeholder name.
    Named(BTreeMap<String, ParamValue>),
}

impl RouteArgs {
    pub fn named<K, V>(pairs: impl IntoIterator<Item = (K, V)>) -> Self
    where
        K: Into<String>,
        V: Into<ParamValue>,
    {
        RouteArgs::Named(
            pairs
                .into_iter()
                .map(|(k, v)| (k.into(), v.into()))
                .collect(),
        )
    }

    pub fn positional<V: Into<ParamValue>>(values: impl IntoIterator<Item = V>) -> Self {
        RouteArgs::Positional(values.into_iter().map(Into::into).collect())
    }
}

impl From<()> for RouteArgs {
    fn from(_: ()) -> Self {
        RouteArgs::None
    }
}

impl From<Scalar> for RouteArgs {
    fn from(value: Scalar) -> Self {
        RouteArgs::Single(ParamValue::Scalar(value))
    }
}

impl From<ParamValue> for RouteArgs {
    fn from(value: ParamValue) -> Self {
        RouteArgs::Single(value)
    }
}

impl From<Vec<ParamValue>> for RouteArgs {
    fn from(values: Vec<ParamValue>) -> Self {
        RouteArgs::Positional(values)
    }
}

impl From<BTreeMap<String, ParamValue>> for RouteArgs {
    fn from(values: BTreeMap<String, ParamValue>) -> Self {
        RouteArgs::Named(values)
    }
}

impl<A, B> From<(A, B)> for RouteArgs
where
    A: Into<ParamValue>,
    B: Into<ParamValue>,
{
    fn from((a, b): (A, B)) -> Self {
        RouteArgs::Positional(vec![a.into(), b.into()])
    }
}

impl<A, B, C> From<(A, B, C)> for RouteArgs
where
    A: Into<ParamValue>,
    B: Into<ParamValue>,
    C: Into<ParamValue>,
{
    fn from((a, b, c): (A, B, C)) -> Self {
        RouteArgs::Positional(vec![a.into(), b.into(), c.into()])
    }
}

/// Bind `args` to the template's placeholders by name.
///
/// Positional values beyond the placeholder count and names that are not
/// placeholders are rejected.
pub(crate) fn normalize(
    route: &str,
    placeholders: &[Placeholder],
    args: &RouteArgs,
) -> RouteResult<BTreeMap<String, ParamValue>> {
    let mut named = BTreeMap::new();
    match args {
        RouteArgs::None => {}
        RouteArgs::Single(value) => {
            bind_positional(route, placeholders, std::slice::from_ref(value), &mut named)?
        }
        RouteArgs::Positional(values) => bind_positional(route, placeholders, values, &mut named)?,
        RouteArgs::Named(values) => {
            for (name, value) in values {
                if !placeholders.iter().any(|p| &p.name == name) {
                    return Err(RouteError::unexpected(route, name));
                }
                named.insert(name.clone(), value.clone());
            }
        }
    }
    Ok(named)
}

fn bind_positional(
    route: &str,
    placeholders: &[Placeholder],
    values: &[ParamValue],
    named: &mut BTreeMap<String, ParamValue>,
) -> RouteResult<()> {
    if values.len() > placeholders.len() {
        return Err(RouteError::unexpected(
            route,
            format!(
                "argument {} (route takes {})",
                placeholders.len() + 1,
                placeholders.len()
            ),
        ));
    }
    for (placeholder, value) in placeholders.iter().zip(values) {
        named.insert(placeholder.name.clone(), value.clone());
    }
    Ok(())
}

/// Optional placeholders may only be omitted from the end.
pub(crate) fn validate_optional(
    route: &str,
    placeholders: &[Placeholder],
    named: &BTreeMap<String, ParamValue>,
) -> RouteResult<()> {
    let mut first_missing: Option<&str> = None;
    for p in placeholders.iter().filter(|p| p.optional) {
        if !named.contains_key(&p.name) {
            first_missing.get_or_insert(p.name.as_str());
        } else if let Some(missing) = first_missing {
            return Err(RouteError::OptionalParameterGap {
                route: route.to_string(),
                parameter: p.name.clone(),
                missing: missing.to_string(),
            });
        }
    }
    Ok(())
}

/// Render the segments with the bound values, then strip trailing slashes.
pub(crate) fn substitute(
    route: &str,
    segments: &[Segment],
    named: &BTreeMap<String, ParamValue>,
) -> RouteResult<String> {
    let mut url = String::new();
    for segment in segments {
        match segment {
            Segment::Literal(text) => url.push_str(text),
            Segment::Param(p) => match named.get(&p.name) {
                Some(value) => {
                    let field = p.binding_field();
                    let scalar = value.resolve(field).ok_or_else(|| {
                        RouteError::missing(route, format!("{}.{}", p.name, field))
                    })?;
                    url.push_str(&scalar.to_path_string());
                }
                None if p.optional => {}
                None => return Err(RouteError::missing(route, &p.name)),
            },
        }
    }
    Ok(strip_trailing_slashes(url))
}

fn strip_trailing_slashes(mut url: String) -> String {
    let trimmed = url.trim_end_matches('/').len();
    if trimmed == 0 {
        return "/".to_string();
    }
    url.truncate(trimmed);
    url
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::template::RouteTemplate;
    use wayfinder_core::HttpVerb;

    fn placeholders(url: &'static str) -> Vec<Placeholder> {
        RouteTemplate::new(&[HttpVerb::Get], url).placeholders().unwrap()
    }

    #[test]
    fn single_positional_and_named_bind_identically() {
        let ps = placeholders("/almacenes/{almacene}");
        let single = normalize("r", &ps, &RouteArgs::from(5)).unwrap();
        let tuple = normalize("r", &ps, &RouteArgs::positional([5])).unwrap();
        let named = normalize("r", &ps, &RouteArgs::named([("almacene", 5)])).unwrap();
        assert_eq!(single, tuple);
        assert_eq!(single, named);
    }

    #[test]
    fn extra_positional_values_are_rejected() {
        let ps = placeholders("/almacenes/{almacene}");
        let err = normalize("r", &ps, &RouteArgs::from((1, 2))).unwrap_err();
        assert_eq!(err, RouteError::unexpected("r", "argument 2 (route takes 1)"));
        assert_eq!(
            err.to_string(),
            "route `r`: unexpected parameter `argument 2 (route takes 1)`"
        );
    }

    #[test]
    fn unknown_names_are_rejected() {
        let ps = placeholders("/almacenes/{almacene}");
        let err = normalize("r", &ps, &RouteArgs::named([("bodega", 1)])).unwrap_err();
        assert_eq!(err, RouteError::unexpected("r", "bodega"));
    }

    #[test]
    fn model_values_resolve_through_binding_field() {
        let v = ParamValue::model([("id", Scalar::from(9)), ("codigo", Scalar::from("CJ-01"))]);
        assert_eq!(v.resolve("id"), Some(&Scalar::Int(9)));
        assert_eq!(v.resolve("codigo"), Some(&Scalar::from("CJ-01")));
        assert_eq!(v.resolve("slug"), None);
    }

    #[test]
    fn optional_gap_is_reported() {
        let ps = placeholders("/reportes/{desde?}/{hasta?}");
        let named = normalize("r", &ps, &RouteArgs::named([("hasta", "2024-12-31")])).unwrap();
        let err = validate_optional("r", &ps, &named).unwrap_err();
        assert_eq!(
            err,
            RouteError::OptionalParameterGap {
                route: "r".to_string(),
                parameter: "hasta".to_string(),
                missing: "desde".to_string(),
            }
        );
    }

    #[test]
    fn trailing_slashes_are_stripped_but_root_survives() {
        assert_eq!(strip_trailing_slashes("/foo//".to_string()), "/foo");
        assert_eq!(strip_trailing_slashes("/".to_string()), "/");
        assert_eq!(strip_trailing_slashes("/foo".to_string()), "/foo");
    }
}
