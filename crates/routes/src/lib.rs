//! `wayfinder-routes`: typed route bindings.
//!
//! Maps controller actions to their URL templates and builds concrete URLs
//! and HTML form descriptors from them. Everything here is pure: no IO, no
//! global state; defaults travel in an explicit [`UrlContext`].

pub mod action;
pub mod args;
pub mod context;
pub mod controller;
pub mod definition;
pub mod query;
pub mod route_list;
pub mod table;
pub mod template;

pub use action::{Action, ActionCall, FormBuilder, METHOD_FIELD};
pub use args::{ParamValue, RouteArgs};
pub use context::UrlContext;
pub use controller::{ActionEntry, Controller};
pub use definition::{FormMethod, RouteDefinition, RouteFormDefinition};
pub use query::{QueryMap, QueryValue, RouteQueryOptions, SearchParams};
pub use route_list::{RouteListEntry, from_entries, parse_route_list};
pub use table::{RouteDrift, RouteTable};
pub use template::{Placeholder, RouteTemplate, Segment};

pub use wayfinder_core::{HttpVerb, RouteError, RouteResult, Scalar};
