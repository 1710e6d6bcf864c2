//! Parsing of command-line path and query parameters.

use std::collections::BTreeMap;

use anyhow::{Result, bail};

use wayfinder_routes::{ParamValue, QueryMap, QueryValue, RouteArgs, Scalar};

/// Path values stay strings, so `007` or `+5` reach the URL unchanged.
fn path_scalar(raw: &str) -> Scalar {
    Scalar::Str(raw.to_string())
}

/// Like [`path_scalar`], except `true`/`false` become booleans (`1`/`0`).
fn query_scalar(raw: &str) -> Scalar {
    match raw {
        "true" => Scalar::Bool(true),
        "false" => Scalar::Bool(false),
        _ => path_scalar(raw),
    }
}

/// Build route arguments from positional values or `name=value` pairs.
///
/// `name.field=value` sets one field of a model argument, so
/// `-p cliente.documento=2048` binds `{cliente:documento}`.
pub fn route_args(values: &[String], params: &[String]) -> Result<RouteArgs> {
    if !values.is_empty() && !params.is_empty() {
        bail!("pass path parameters either positionally or with --param, not both");
    }

    if params.is_empty() {
        let mut values: Vec<ParamValue> = values.iter().map(|v| path_scalar(v).into()).collect();
        return Ok(match values.len() {
            0 => RouteArgs::None,
            1 => RouteArgs::Single(values.remove(0)),
            _ => RouteArgs::Positional(values),
        });
    }

    let mut named: BTreeMap<String, ParamValue> = BTreeMap::new();
    for param in params {
        let (key, raw) = split_pair(param)?;
        let value = path_scalar(raw);

        let Some((name, field)) = key.split_once('.') else {
            if named.insert(key.to_string(), value.into()).is_some() {
                bail!("parameter `{key}` given twice");
            }
            continue;
        };

        let slot = named
            .entry(name.to_string())
            .or_insert_with(|| ParamValue::Model(BTreeMap::new()));
        match slot {
            ParamValue::Model(fields) => {
                fields.insert(field.to_string(), value);
            }
            ParamValue::Scalar(_) => bail!("parameter `{name}` is both a value and a model"),
        }
    }
    Ok(RouteArgs::Named(named))
}

/// Build a query map from `key=value`, `key[]=value`, `key[sub]=value` and bare `key`.
pub fn query_map(pairs: &[String]) -> Result<QueryMap> {
    let mut entries: Vec<(String, QueryValue)> = Vec::new();

    for pair in pairs {
        let (key, value) = match pair.split_once('=') {
            Some((key, raw)) => (key, Some(query_scalar(raw))),
            None => (pair.as_str(), None),
        };
        if key.is_empty() {
            bail!("empty query key in `{pair}`");
        }

        match (parse_key(key)?, value) {
            (QueryKey::Plain(key), value) => {
                let value = value.map_or(QueryValue::Null, QueryValue::Scalar);
                match slot(&mut entries, key) {
                    Some(existing) => *existing = value,
                    None => entries.push((key.to_string(), value)),
                }
            }
            (QueryKey::List(key), Some(value)) => match slot(&mut entries, key) {
                Some(QueryValue::List(items)) => items.push(value),
                Some(_) => bail!("query key `{key}` mixes list and plain values"),
                None => entries.push((key.to_string(), QueryValue::List(vec![value]))),
            },
            (QueryKey::Map(key, sub), Some(value)) => match slot(&mut entries, key) {
                Some(QueryValue::Map(fields)) => fields.push((sub.to_string(), value)),
                Some(_) => bail!("query key `{key}` mixes map and plain values"),
                None => entries.push((
                    key.to_string(),
                    QueryValue::Map(vec![(sub.to_string(), value)]),
                )),
            },
            (QueryKey::List(key) | QueryKey::Map(key, _), None) => {
                bail!("`{key}` needs a value")
            }
        }
    }

    Ok(entries.into_iter().collect())
}

enum QueryKey<'a> {
    Plain(&'a str),
    List(&'a str),
    Map(&'a str, &'a str),
}

fn parse_key(key: &str) -> Result<QueryKey<'_>> {
    let Some((base, rest)) = key.split_once('[') else {
        return Ok(QueryKey::Plain(key));
    };
    let Some(sub) = rest.strip_suffix(']') else {
        bail!("malformed query key `{key}`");
    };
    if base.is_empty() || sub.contains(['[', ']']) {
        bail!("malformed query key `{key}`");
    }
    Ok(if sub.is_empty() {
        QueryKey::List(base)
    } else {
        QueryKey::Map(base, sub)
    })
}

fn slot<'a>(entries: &'a mut [(String, QueryValue)], key: &str) -> Option<&'a mut QueryValue> {
    entries.iter_mut().find(|(k, _)| k == key).map(|(_, v)| v)
}

fn split_pair(pair: &str) -> Result<(&str, &str)> {
    match pair.split_once('=') {
        Some((key, value)) if !key.is_empty() => Ok((key, value)),
        _ => bail!("expected NAME=VALUE, got `{pair}`"),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn strings(items: &[&str]) -> Vec<String> {
        items.iter().map(|s| s.to_string()).collect()
    }

    #[test]
    fn path_values_pass_through_verbatim() {
        for raw in ["0020481234", "007", "+5", "42", "true", "2024-06-30"] {
            assert_eq!(path_scalar(raw), Scalar::from(raw));
        }
        assert_eq!(query_scalar("007"), Scalar::from("007"));
        assert_eq!(query_scalar("true"), Scalar::Bool(true));
        assert_eq!(query_scalar("false"), Scalar::Bool(false));
    }

    #[test]
    fn positional_values() {
        assert_eq!(route_args(&[], &[]).unwrap(), RouteArgs::None);
        assert_eq!(
            route_args(&strings(&["5"]), &[]).unwrap(),
            RouteArgs::Single(ParamValue::from("5"))
        );
        assert_eq!(
            route_args(&strings(&["2", "abc"]), &[]).unwrap(),
            RouteArgs::positional([ParamValue::from("2"), ParamValue::from("abc")])
        );
    }

    #[test]
    fn named_values_and_model_fields() {
        let params = strings(&["caja=2", "cliente.documento=0020481234", "cliente.id=9"]);
        assert_eq!(
            route_args(&[], &params).unwrap(),
            RouteArgs::named([
                ("caja", ParamValue::from("2")),
                (
                    "cliente",
                    ParamValue::model([("documento", "0020481234"), ("id", "9")]),
                ),
            ])
        );
    }

    #[test]
    fn zero_padded_values_build_the_same_url() {
        let args = route_args(&[], &strings(&["cliente.documento=0020481234"])).unwrap();
        assert_eq!(
            wayfinder_actions::creditos::ESTADO_CUENTA.url(args).unwrap(),
            "/clientes/0020481234/estado-cuenta"
        );

        let args = route_args(&strings(&["+5"]), &[]).unwrap();
        assert_eq!(wayfinder_actions::almacenes::SHOW.url(args).unwrap(), "/almacenes/+5");

        let query = query_map(&strings(&["codigo=007"])).unwrap();
        let url = wayfinder_actions::almacenes::INDEX
            .request()
            .query(query)
            .url(())
            .unwrap();
        assert_eq!(url, "/almacenes?codigo=007");
    }

    #[test]
    fn rejects_ambiguous_parameters() {
        assert!(route_args(&strings(&["1"]), &strings(&["caja=2"])).is_err());
        assert!(route_args(&[], &strings(&["caja"])).is_err());
        assert!(route_args(&[], &strings(&["caja=1", "caja=2"])).is_err());
        assert!(route_args(&[], &strings(&["caja=1", "caja.id=2"])).is_err());
    }

    #[test]
    fn query_pairs() {
        let query = query_map(&strings(&[
            "page=2",
            "marcas[]=acme",
            "filtro[estado]=activo",
            "marcas[]=otra",
            "buscar",
        ]))
        .unwrap();

        assert_eq!(query.get("page"), Some(&QueryValue::from("2")));
        assert_eq!(query.get("marcas"), Some(&QueryValue::list(["acme", "otra"])));
        assert_eq!(query.get("filtro"), Some(&QueryValue::map([("estado", "activo")])));
        assert_eq!(query.get("buscar"), Some(&QueryValue::Null));
        assert_eq!(query.len(), 4);
    }

    #[test]
    fn later_plain_value_replaces_earlier() {
        let query = query_map(&strings(&["page=1", "page=3"])).unwrap();
        assert_eq!(query.get("page"), Some(&QueryValue::from("3")));
    }

    #[test]
    fn rejects_malformed_query_keys() {
        assert!(query_map(&strings(&["=1"])).is_err());
        assert!(query_map(&strings(&["a[b=1"])).is_err());
        assert!(query_map(&strings(&["a[]"])).is_err());
        assert!(query_map(&strings(&["a[]=1", "a[x]=2"])).is_err());
    }
}
