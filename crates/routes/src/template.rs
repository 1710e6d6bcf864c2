//! Route templates: verb set + URL pattern with `{placeholder}` segments.

use std::borrow::Cow;

use serde::Serialize;

use wayfinder_core::{HttpVerb, RouteError, RouteResult};

/// Field substituted for a model-shaped argument when the placeholder does
/// not name one (`{almacene}` binds `almacene.id`).
pub const DEFAULT_BINDING_FIELD: &str = "id";

/// Static description of one server-side route.
///
/// Both fields are `Cow` so the generated route table can live in `const`
/// items while imported tables own their strings.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct RouteTemplate {
    pub methods: Cow<'static, [HttpVerb]>,
    pub url: Cow<'static, str>,
}

/// A `{name}`, `{name?}` or `{name:field}` segment of a template.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Placeholder {
    pub name: String,
    pub optional: bool,
    pub binding: Option<String>,
}

impl Placeholder {
    pub fn binding_field(&self) -> &str {
        self.binding.as_deref().unwrap_or(DEFAULT_BINDING_FIELD)
    }
}

/// Parsed piece of a template.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Segment {
    Literal(String),
    Param(Placeholder),
}

impl RouteTemplate {
    pub const fn new(methods: &'static [HttpVerb], url: &'static str) -> Self {
        Self {
            methods: Cow::Borrowed(methods),
            url: Cow::Borrowed(url),
        }
    }

    pub fn owned(methods: Vec<HttpVerb>, url: String) -> Self {
        Self {
            methods: Cow::Owned(methods),
            url: Cow::Owned(url),
        }
    }

    pub fn accepts(&self, verb: HttpVerb) -> bool {
        self.methods.contains(&verb)
    }

    /// Verb used when the caller does not pick one: the first declared verb.
    pub fn primary_verb(&self) -> HttpVerb {
        self.methods.first().copied().unwrap_or(HttpVerb::Get)
    }

    /// Split the URL into literal text and placeholders.
    pub fn segments(&self) -> RouteResult<Vec<Segment>> {
        parse_segments(&self.url)
    }

    pub fn placeholders(&self) -> RouteResult<Vec<Placeholder>> {
        Ok(self
            .segments()?
            .into_iter()
            .filter_map(|s| match s {
                Segment::Param(p) => Some(p),
                Segment::Literal(_) => None,
            })
            .collect())
    }
}

fn parse_segments(url: &str) -> RouteResult<Vec<Segment>> {
    let mut segments = Vec::new();
    let mut literal = String::new();
    let mut rest = url;

    while let Some(open) = rest.find(['{', '}']) {
        if rest[open..].starts_with('}') {
            return Err(RouteError::invalid_template(url, "unmatched `}`"));
        }
        literal.push_str(&rest[..open]);
        let after = &rest[open + 1..];
        let close = after
            .find('}')
            .ok_or_else(|| RouteError::invalid_template(url, "unterminated placeholder"))?;
        let body = &after[..close];
        if body.contains('{') {
            return Err(RouteError::invalid_template(url, "nested `{`"));
        }

        let placeholder = parse_placeholder(url, body)?;
        let duplicate = segments.iter().any(|s| {
            matches!(s, Segment::Param(p) if p.name == placeholder.name)
        });
        if duplicate {
            return Err(RouteError::invalid_template(
                url,
                format!("duplicate placeholder `{}`", placeholder.name),
            ));
        }

        if !literal.is_empty() {
            segments.push(Segment::Literal(std::mem::take(&mut literal)));
        }
        segments.push(Segment::Param(placeholder));
        rest = &after[close + 1..];
    }

    literal.push_str(rest);
    if !literal.is_empty() {
        segments.push(Segment::Literal(literal));
    }
    Ok(segments)
}

fn parse_placeholder(url: &str, body: &str) -> RouteResult<Placeholder> {
    let (body, optional) = match body.strip_suffix('?') {
        Some(b) => (b, true),
        None => (body, false),
    };
    let (name, binding) = match body.split_once(':') {
        Some((name, field)) => (name, Some(field)),
        None => (body, None),
    };

    if name.is_empty() {
        return Err(RouteError::invalid_template(url, "empty placeholder name"));
    }
    if binding.is_some_and(str::is_empty) {
        return Err(RouteError::invalid_template(
            url,
            format!("empty binding field for `{name}`"),
        ));
    }

    Ok(Placeholder {
        name: name.to_string(),
        optional,
        binding: binding.map(str::to_string),
    })
}
