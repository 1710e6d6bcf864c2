//! One controller method bound to one route template.

use std::borrow::Cow;

use serde::Serialize;

use wayfinder_core::{HttpVerb, RouteError, RouteResult};

use crate::args::{self, RouteArgs};
use crate::context::UrlContext;
use crate::definition::{FormMethod, RouteDefinition, RouteFormDefinition};
use crate::query::{self, QueryMap, RouteQueryOptions};
use crate::template::{RouteTemplate, Segment};

/// Query field carrying the real verb of a spoofed form submission.
pub const METHOD_FIELD: &str = "_method";

macro_rules! verb_shortcuts {
    ($out:ty) => {
        pub fn get(&self, args: impl Into<RouteArgs>) -> RouteResult<$out> {
            self.verb(HttpVerb::Get, args)
        }

        pub fn head(&self, args: impl Into<RouteArgs>) -> RouteResult<$out> {
            self.verb(HttpVerb::Head, args)
        }

        pub fn post(&self, args: impl Into<RouteArgs>) -> RouteResult<$out> {
            self.verb(HttpVerb::Post, args)
        }

        pub fn put(&self, args: impl Into<RouteArgs>) -> RouteResult<$out> {
            self.verb(HttpVerb::Put, args)
        }

        pub fn patch(&self, args: impl Into<RouteArgs>) -> RouteResult<$out> {
            self.verb(HttpVerb::Patch, args)
        }

        pub fn delete(&self, args: impl Into<RouteArgs>) -> RouteResult<$out> {
            self.verb(HttpVerb::Delete, args)
        }
    };
}

/// A controller method and the route that reaches it.
///
/// Constructible in `const` context so generated controller modules are
/// plain data.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Action {
    controller: Cow<'static, str>,
    method: Cow<'static, str>,
    name: Option<Cow<'static, str>>,
    #[serde(flatten)]
    template: RouteTemplate,
}

impl Action {
    pub const fn new(
        controller: &'static str,
        method: &'static str,
        methods: &'static [HttpVerb],
        url: &'static str,
    ) -> Self {
        Self {
            controller: Cow::Borrowed(controller),
            method: Cow::Borrowed(method),
            name: None,
            template: RouteTemplate::new(methods, url),
        }
    }

    /// Like [`Action::new`] for a route that also has a Laravel route name.
    pub const fn named(
        name: &'static str,
        controller: &'static str,
        method: &'static str,
        methods: &'static [HttpVerb],
        url: &'static str,
    ) -> Self {
        Self {
            controller: Cow::Borrowed(controller),
            method: Cow::Borrowed(method),
            name: Some(Cow::Borrowed(name)),
            template: RouteTemplate::new(methods, url),
        }
    }

    pub fn owned(
        controller: String,
        method: String,
        name: Option<String>,
        template: RouteTemplate,
    ) -> Self {
        Self {
            controller: Cow::Owned(controller),
            method: Cow::Owned(method),
            name: name.map(Cow::Owned),
            template,
        }
    }

    /// Fully qualified controller class.
    pub fn controller(&self) -> &str {
        &self.controller
    }

    /// Controller class without its namespace.
    pub fn short_controller(&self) -> &str {
        short_class(&self.controller)
    }

    pub fn method(&self) -> &str {
        &self.method
    }

    pub fn name(&self) -> Option<&str> {
        self.name.as_deref()
    }

    /// `Class@method`, as Laravel reports the action of a route.
    pub fn key(&self) -> String {
        format!("{}@{}", self.controller, self.method)
    }

    pub fn definition(&self) -> &RouteTemplate {
        &self.template
    }

    pub fn url_template(&self) -> &str {
        &self.template.url
    }

    /// Builder bound to an explicit context.
    pub fn with<'a>(&'a self, ctx: &'a UrlContext) -> ActionCall<'a> {
        ActionCall {
            action: self,
            ctx,
            options: RouteQueryOptions::default(),
        }
    }

    /// Builder with no defaults and no query.
    pub fn request(&self) -> ActionCall<'_> {
        self.with(UrlContext::empty())
    }

    pub fn url(&self, args: impl Into<RouteArgs>) -> RouteResult<String> {
        self.request().url(args)
    }

    /// Definition using the first declared verb.
    pub fn call(&self, args: impl Into<RouteArgs>) -> RouteResult<RouteDefinition> {
        self.request().call(args)
    }

    pub fn verb(&self, verb: HttpVerb, args: impl Into<RouteArgs>) -> RouteResult<RouteDefinition> {
        self.request().verb(verb, args)
    }

    verb_shortcuts!(RouteDefinition);

    pub fn form(&self) -> FormBuilder<'_> {
        self.request().form()
    }

    fn build_url(
        &self,
        args: &RouteArgs,
        options: &RouteQueryOptions,
        ctx: &UrlContext,
    ) -> RouteResult<String> {
        let route = self.template.url.as_ref();
        let segments = self.template.segments()?;
        let placeholders: Vec<_> = segments
            .iter()
            .filter_map(|s| match s {
                Segment::Param(p) => Some(p.clone()),
                Segment::Literal(_) => None,
            })
            .collect();

        let mut named = args::normalize(route, &placeholders, args)?;
        ctx.apply_defaults(placeholders.iter().map(|p| p.name.as_str()), &mut named);
        args::validate_optional(route, &placeholders, &named)?;

        let path = args::substitute(route, &segments, &named)?;
        let query = query::render_query(options, &ctx.current_query)?;
        Ok(path + &query)
    }

    fn ensure_accepts(&self, verb: HttpVerb) -> RouteResult<()> {
        if self.template.accepts(verb) {
            Ok(())
        } else {
            Err(RouteError::unsupported_verb(self.template.url.as_ref(), verb))
        }
    }
}

pub(crate) fn short_class(class: &str) -> &str {
    class.rsplit('\\').next().unwrap_or(class)
}

/// An action bound to a context and query options.
#[derive(Debug, Clone)]
pub struct ActionCall<'a> {
    action: &'a Action,
    ctx: &'a UrlContext,
    options: RouteQueryOptions,
}

impl<'a> ActionCall<'a> {
    /// Replace the query string entirely.
    pub fn query(mut self, query: QueryMap) -> Self {
        self.options = RouteQueryOptions::query(query);
        self
    }

    /// Merge onto the context's current query string.
    pub fn merge_query(mut self, merge_query: QueryMap) -> Self {
        self.options = RouteQueryOptions::merge(merge_query);
        self
    }

    pub fn options(mut self, options: RouteQueryOptions) -> Self {
        self.options = options;
        self
    }

    pub fn url(&self, args: impl Into<RouteArgs>) -> RouteResult<String> {
        self.action.build_url(&args.into(), &self.options, self.ctx)
    }

    pub fn call(&self, args: impl Into<RouteArgs>) -> RouteResult<RouteDefinition> {
        self.verb(self.action.template.primary_verb(), args)
    }

    pub fn verb(&self, verb: HttpVerb, args: impl Into<RouteArgs>) -> RouteResult<RouteDefinition> {
        self.action.ensure_accepts(verb)?;
        Ok(RouteDefinition {
            url: self.url(args)?,
            method: verb,
        })
    }

    verb_shortcuts!(RouteDefinition);

    pub fn form(&self) -> FormBuilder<'a> {
        FormBuilder { call: self.clone() }
    }
}

/// Form descriptors for an action.
///
/// GET and POST pass through; HEAD submits as GET and PUT / PATCH / DELETE
/// as POST, each carrying `_method` ahead of the caller's query entries.
#[derive(Debug, Clone)]
pub struct FormBuilder<'a> {
    call: ActionCall<'a>,
}

impl FormBuilder<'_> {
    /// Form for the first declared verb.
    pub fn submit(&self, args: impl Into<RouteArgs>) -> RouteResult<RouteFormDefinition> {
        self.verb(self.call.action.template.primary_verb(), args)
    }

    pub fn verb(
        &self,
        verb: HttpVerb,
        args: impl Into<RouteArgs>,
    ) -> RouteResult<RouteFormDefinition> {
        let action = self.call.action;
        action.ensure_accepts(verb)?;

        let (method, spoofed) = match verb {
            HttpVerb::Get => (FormMethod::Get, false),
            HttpVerb::Post => (FormMethod::Post, false),
            HttpVerb::Head => (FormMethod::Get, true),
            HttpVerb::Put | HttpVerb::Patch | HttpVerb::Delete => (FormMethod::Post, true),
            HttpVerb::Options => {
                return Err(RouteError::unsupported_verb(action.url_template(), verb));
            }
        };

        let options = if spoofed {
            self.call
                .options
                .prepend(QueryMap::new().with(METHOD_FIELD, verb.as_upper()))
        } else {
            self.call.options.clone()
        };

        Ok(RouteFormDefinition {
            action: action.build_url(&args.into(), &options, self.call.ctx)?,
            method,
        })
    }

    verb_shortcuts!(RouteFormDefinition);
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::args::ParamValue;
    use crate::query::QueryValue;

    const UPDATE: Action = Action::named(
        "almacenes.update",
        "App\\Http\\Controllers\\AlmacenController",
        "update",
        &[HttpVerb::Put, HttpVerb::Patch],
        "/almacenes/{almacene}",
    );

    const SHOW: Action = Action::named(
        "almacenes.show",
        "App\\Http\\Controllers\\AlmacenController",
        "show",
        &[HttpVerb::Get, HttpVerb::Head],
        "/almacenes/{almacene}",
    );

    const STORE: Action = Action::new(
        "App\\Http\\Controllers\\AlmacenController",
        "store",
        &[HttpVerb::Post],
        "/almacenes",
    );

    const TRANSFER: Action = Action::new(
        "App\\Http\\Controllers\\TransferenciaController",
        "show",
        &[HttpVerb::Get, HttpVerb::Head],
        "/almacenes/{almacene}/transferencias/{transferencia}",
    );

    #[test]
    fn call_uses_first_verb() {
        let def = UPDATE.call(5).unwrap();
        assert_eq!(
            def,
            RouteDefinition {
                url: "/almacenes/5".to_string(),
                method: HttpVerb::Put,
            }
        );
        assert_eq!(UPDATE.patch(5).unwrap().method, HttpVerb::Patch);
    }

    #[test]
    fn undeclared_verb_is_rejected() {
        let err = UPDATE.delete(5).unwrap_err();
        assert_eq!(
            err,
            RouteError::unsupported_verb("/almacenes/{almacene}", HttpVerb::Delete)
        );
    }

    #[test]
    fn put_form_spoofs_method() {
        let form = UPDATE.form().put(5).unwrap();
        assert_eq!(
            form,
            RouteFormDefinition {
                action: "/almacenes/5?_method=PUT".to_string(),
                method: FormMethod::Post,
            }
        );
        assert_eq!(UPDATE.form().submit(5).unwrap(), form);
    }

    #[test]
    fn head_form_submits_as_get_with_override() {
        let form = SHOW.form().head(7).unwrap();
        assert_eq!(form.method, FormMethod::Get);
        assert_eq!(form.action, "/almacenes/7?_method=HEAD");

        let form = SHOW.form().get(7).unwrap();
        assert_eq!(form.action, "/almacenes/7");
    }

    #[test]
    fn post_form_passes_through() {
        let form = STORE.form().post(()).unwrap();
        assert_eq!(form.action, "/almacenes");
        assert_eq!(form.method, FormMethod::Post);
    }

    #[test]
    fn caller_query_follows_method_field_and_may_override_it() {
        let form = UPDATE
            .request()
            .query(QueryMap::new().with("redirect", "listado"))
            .form()
            .patch(5)
            .unwrap();
        assert_eq!(form.action, "/almacenes/5?_method=PATCH&redirect=listado");

        let form = UPDATE
            .request()
            .query(QueryMap::new().with(METHOD_FIELD, "PATCH"))
            .form()
            .put(5)
            .unwrap();
        assert_eq!(form.action, "/almacenes/5?_method=PATCH");
    }

    #[test]
    fn merge_query_form_keeps_current_query() {
        let ctx = UrlContext::new().with_current_query("?page=2");
        let form = UPDATE
            .with(&ctx)
            .merge_query(QueryMap::new().with("orden", "asc"))
            .form()
            .put(5)
            .unwrap();
        assert_eq!(form.action, "/almacenes/5?page=2&_method=PUT&orden=asc");
    }

    #[test]
    fn id_model_and_scalar_resolve_identically() {
        assert_eq!(UPDATE.url(ParamValue::id(5)).unwrap(), UPDATE.url(5).unwrap());
        assert_eq!(UPDATE.url(5_u64).unwrap(), "/almacenes/5");
        assert_eq!(UPDATE.url(ParamValue::id(5_usize)).unwrap(), "/almacenes/5");
        assert_eq!(
            UPDATE.url(RouteArgs::named([("almacene", ParamValue::id(5))])).unwrap(),
            "/almacenes/5"
        );
    }

    #[test]
    fn multi_parameter_routes_accept_tuples_and_names() {
        assert_eq!(
            TRANSFER.url((1, 9)).unwrap(),
            "/almacenes/1/transferencias/9"
        );
        assert_eq!(
            TRANSFER
                .url(RouteArgs::named([("transferencia", 9), ("almacene", 1)]))
                .unwrap(),
            "/almacenes/1/transferencias/9"
        );
    }

    #[test]
    fn missing_parameter_names_the_placeholder() {
        let err = TRANSFER.url(1).unwrap_err();
        assert_eq!(
            err,
            RouteError::missing(
                "/almacenes/{almacene}/transferencias/{transferencia}",
                "transferencia"
            )
        );
    }

    #[test]
    fn model_without_binding_field_is_missing() {
        let err = UPDATE
            .url(ParamValue::model([("nombre", "Central")]))
            .unwrap_err();
        assert_eq!(err, RouteError::missing("/almacenes/{almacene}", "almacene.id"));
    }

    #[test]
    fn context_defaults_fill_omitted_parameters() {
        let ctx = UrlContext::new().with_default("almacene", 3);
        assert_eq!(
            TRANSFER.with(&ctx).url(RouteArgs::named([("transferencia", 4)])).unwrap(),
            "/almacenes/3/transferencias/4"
        );
        // Caller values win over defaults.
        assert_eq!(
            TRANSFER.with(&ctx).url((8, 4)).unwrap(),
            "/almacenes/8/transferencias/4"
        );
    }

    #[test]
    fn query_options_are_appended() {
        let url = STORE
            .request()
            .query(QueryMap::new().with("tipos", QueryValue::list([1, 2])))
            .url(())
            .unwrap();
        assert_eq!(url, "/almacenes?tipos%5B%5D=1&tipos%5B%5D=2");
    }

    #[test]
    fn options_has_no_form_representation() {
        const PREFLIGHT: Action = Action::new(
            "App\\Http\\Controllers\\CorsController",
            "preflight",
            &[HttpVerb::Options, HttpVerb::Get],
            "/cors",
        );
        let expected = RouteError::unsupported_verb("/cors", HttpVerb::Options);

        assert_eq!(PREFLIGHT.form().submit(()).unwrap_err(), expected);
        assert_eq!(PREFLIGHT.form().verb(HttpVerb::Options, ()).unwrap_err(), expected);
        assert_eq!(PREFLIGHT.verb(HttpVerb::Options, ()).unwrap().url, "/cors");
        assert_eq!(PREFLIGHT.form().get(()).unwrap().action, "/cors");
    }

    #[test]
    fn key_is_class_at_method() {
        assert_eq!(UPDATE.key(), "App\\Http\\Controllers\\AlmacenController@update");
        assert_eq!(UPDATE.short_controller(), "AlmacenController");
    }

    mod proptest_tests {
        use super::*;
        use proptest::prelude::*;

        proptest! {
            /// Property: scalar, one-element tuple, named map and `{id}` model agree.
            #[test]
            fn argument_shapes_agree(id in 0i64..1_000_000) {
                let scalar = UPDATE.url(id).unwrap();
                let tuple = UPDATE.url(RouteArgs::positional([id])).unwrap();
                let named = UPDATE.url(RouteArgs::named([("almacene", id)])).unwrap();
                let model = UPDATE.url(ParamValue::id(id)).unwrap();
                prop_assert_eq!(&scalar, &tuple);
                prop_assert_eq!(&scalar, &named);
                prop_assert_eq!(&scalar, &model);
                prop_assert_eq!(scalar, format!("/almacenes/{id}"));
            }

            /// Property: building is referentially transparent.
            #[test]
            fn building_is_deterministic(value in "[a-z0-9-]{1,12}", page in 1u32..500) {
                let update = UPDATE;
                let call = update.request().query(QueryMap::new().with("page", page));
                let first = call.url(value.as_str()).unwrap();
                let second = call.url(value.as_str()).unwrap();
                prop_assert_eq!(first, second);
            }

            /// Property: spoofed forms always post with the uppercase verb.
            #[test]
            fn spoofed_forms_post_uppercase_verb(id in 1i64..10_000, use_patch in any::<bool>()) {
                let verb = if use_patch { HttpVerb::Patch } else { HttpVerb::Put };
                let form = UPDATE.form().verb(verb, id).unwrap();
                prop_assert_eq!(form.method, FormMethod::Post);
                let expected = format!("/almacenes/{}?_method={}", id, verb.as_upper());
                prop_assert_eq!(form.action, expected);
            }
        }
    }
}
