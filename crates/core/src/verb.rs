//! HTTP verbs accepted by route templates.

use core::str::FromStr;
use serde::{Deserialize, Serialize};

use crate::error::RouteError;

/// HTTP verb of a route.
///
/// Serialized lowercase (`"put"`), displayed uppercase (`PUT`) since that is
/// what travels on the wire in a `_method` override.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum HttpVerb {
    Get,
    Head,
    Post,
    Put,
    Patch,
    Delete,
    Options,
}

impl HttpVerb {
    pub const ALL: [HttpVerb; 7] = [
        HttpVerb::Get,
        HttpVerb::Head,
        HttpVerb::Post,
        HttpVerb::Put,
        HttpVerb::Patch,
        HttpVerb::Delete,
        HttpVerb::Options,
    ];

    pub fn as_upper(self) -> &'static str {
        match self {
            HttpVerb::Get => "GET",
            HttpVerb::Head => "HEAD",
            HttpVerb::Post => "POST",
            HttpVerb::Put => "PUT",
            HttpVerb::Patch => "PATCH",
            HttpVerb::Delete => "DELETE",
            HttpVerb::Options => "OPTIONS",
        }
    }
}

impl core::fmt::Display for HttpVerb {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.write_str(self.as_upper())
    }
}

impl FromStr for HttpVerb {
    type Err = RouteError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let trimmed = s.trim();
        HttpVerb::ALL
            .into_iter()
            .find(|v| v.as_upper().eq_ignore_ascii_case(trimmed))
            .ok_or_else(|| RouteError::InvalidVerb(s.to_string()))
    }
}
