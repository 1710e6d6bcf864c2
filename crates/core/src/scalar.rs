//! Scalar values substituted into paths and query strings.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// A single parameter value.
///
/// Paths render the natural display of the value; query strings render
/// booleans as `1` / `0` (see [`Scalar::to_query_string`]).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum Scalar {
    Bool(bool),
    Int(i64),
    Float(f64),
    Str(String),
}

impl Scalar {
    /// Rendering used for path segments.
    pub fn to_path_string(&self) -> String {
        self.to_string()
    }

    /// Rendering used for query-string values.
    pub fn to_query_string(&self) -> String {
        match self {
            Scalar::Bool(true) => "1".to_string(),
            Scalar::Bool(false) => "0".to_string(),
            other => other.to_string(),
        }
    }
}

impl core::fmt::Display for Scalar {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        match self {
            Scalar::Bool(b) => write!(f, "{b}"),
            Scalar::Int(i) => write!(f, "{i}"),
            Scalar::Float(x) => write!(f, "{x}"),
            Scalar::Str(s) => f.write_str(s),
        }
    }
}

macro_rules! impl_scalar_from {
    ($variant:ident, $target:ty, $($t:ty),+) => {
        $(
            impl From<$t> for Scalar {
                fn from(value: $t) -> Self {
                    Scalar::$variant(<$target>::from(value))
                }
            }
        )+
    };
}

impl_scalar_from!(Int, i64, i8, i16, i32, i64, u8, u16, u32);
impl_scalar_from!(Float, f64, f32, f64);
impl_scalar_from!(Bool, bool, bool);
impl_scalar_from!(Str, String, String, &str, &String);

macro_rules! impl_scalar_from_wide {
    ($($t:ty),+) => {
        $(
            /// Values beyond `i64::MAX` keep their decimal digits as a string.
            impl From<$t> for Scalar {
                fn from(value: $t) -> Self {
                    match i64::try_from(value) {
                        Ok(n) => Scalar::Int(n),
                        Err(_) => Scalar::Str(value.to_string()),
                    }
                }
            }
        )+
    };
}

impl_scalar_from_wide!(u64, usize);

impl From<Uuid> for Scalar {
    fn from(value: Uuid) -> Self {
        Scalar::Str(value.to_string())
    }
}

impl From<NaiveDate> for Scalar {
    fn from(value: NaiveDate) -> Self {
        Scalar::Str(value.format("%Y-%m-%d").to_string())
    }
}
