//! Resolved request descriptors returned by the builders.

use serde::{Deserialize, Serialize};

use wayfinder_core::HttpVerb;

/// One concrete request: a substituted URL and the verb to send it with.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RouteDefinition {
    pub url: String,
    pub method: HttpVerb,
}

/// The only methods an HTML form can submit with.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum FormMethod {
    Get,
    Post,
}

/// `<form action=.. method=..>` attributes for a route.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RouteFormDefinition {
    pub action: String,
    pub method: FormMethod,
}
