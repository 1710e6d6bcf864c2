//! Route-binding error model.

use thiserror::Error;

use crate::verb::HttpVerb;

/// Result type used across the route-binding crates.
pub type RouteResult<T> = Result<T, RouteError>;

/// Route-binding error.
///
/// Keep this focused on deterministic failures of building a URL or a form
/// descriptor from caller input. Transport, authorization and validation
/// failures belong to the server and never show up here.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum RouteError {
    /// A required placeholder had no value after defaults were applied.
    #[error("route `{route}`: missing required parameter `{parameter}`")]
    MissingParameter { route: String, parameter: String },

    /// The route does not accept the verb, or a form cannot carry it.
    #[error("route `{route}`: unsupported verb {verb}")]
    UnsupportedVerb { route: String, verb: HttpVerb },

    /// A value was supplied for a name that is not a placeholder of the route.
    #[error("route `{route}`: unexpected parameter `{parameter}`")]
    UnexpectedParameter { route: String, parameter: String },

    /// An optional placeholder was supplied while an earlier optional one was not.
    #[error("route `{route}`: optional parameter `{parameter}` given without `{missing}`")]
    OptionalParameterGap {
        route: String,
        parameter: String,
        missing: String,
    },

    /// No route is registered under the given name or action key.
    #[error("unknown route: {0}")]
    UnknownRoute(String),

    /// A URL template could not be parsed.
    #[error("invalid template `{template}`: {reason}")]
    InvalidTemplate { template: String, reason: String },

    /// A verb string could not be parsed.
    #[error("invalid http verb: {0}")]
    InvalidVerb(String),

    /// A query string could not be parsed or encoded.
    #[error("query string: {0}")]
    QueryEncoding(String),

    /// A `route:list` dump could not be imported.
    #[error("route list: {0}")]
    RouteList(String),
}

impl RouteError {
    pub fn missing(route: impl Into<String>, parameter: impl Into<String>) -> Self {
        Self::MissingParameter {
            route: route.into(),
            parameter: parameter.into(),
        }
    }

    pub fn unsupported_verb(route: impl Into<String>, verb: HttpVerb) -> Self {
        Self::UnsupportedVerb {
            route: route.into(),
            verb,
        }
    }

    pub fn unexpected(route: impl Into<String>, parameter: impl Into<String>) -> Self {
        Self::UnexpectedParameter {
            route: route.into(),
            parameter: parameter.into(),
        }
    }

    pub fn invalid_template(template: impl Into<String>, reason: impl Into<String>) -> Self {
        Self::InvalidTemplate {
            template: template.into(),
            reason: reason.into(),
        }
    }

    pub fn unknown_route(name: impl Into<String>) -> Self {
        Self::UnknownRoute(name.into())
    }

    pub fn route_list(msg: impl Into<String>) -> Self {
        Self::RouteList(msg.into())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn messages_name_the_route_and_parameter() {
        let err = RouteError::missing("/almacenes/{almacene}", "almacene");
        assert_eq!(
            err.to_string(),
            "route `/almacenes/{almacene}`: missing required parameter `almacene`"
        );

        let err = RouteError::unsupported_verb("/cajas", HttpVerb::Options);
        assert_eq!(err.to_string(), "route `/cajas`: unsupported verb OPTIONS");
    }
}
