//! Loosely-shaped values from the annotation source
//!
//! Documentation annotations let several fields hold either a single value
//! or a list of values (union types, constant groups, return alternatives).
//! This module gives each of those shapes an explicit variant so consumers
//! pattern-match instead of probing the raw data.
//!
//! | Annotation | Rust value |
//! |------------|------------|
//! | `type: String` | `TypeExpr::Single("String")` |
//! | `type: [String, Object]` | `TypeExpr::Union(["String", "Object"])` |
//! | `constants: Titanium.UI.FILL` | `OneOrMany::One(..)` |
//! | `constants: [A.B_*, A.C_*]` | `OneOrMany::Many(..)` |
//! | `returns: void` | `Returns::Void` |
//! | `returns: { type: X }` | `Returns::Single(..)` |
//! | `returns: [{ type: X }, { type: Y }]` | `Returns::Many(..)` |

use serde::{Deserialize, Serialize};

/// A raw type expression: one type name or a union of alternatives
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(untagged)]
pub enum TypeExpr {
    /// A single type name (e.g. "Titanium.UI.View", "Array<String>")
    Single(String),
    /// Several acceptable types
    Union(Vec<String>),
}

impl TypeExpr {
    /// Create a single type expression
    pub fn single(name: impl Into<String>) -> Self {
        TypeExpr::Single(name.into())
    }

    /// Create a union type expression
    pub fn union<I, S>(names: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        TypeExpr::Union(names.into_iter().map(Into::into).collect())
    }

    /// Get the type name when this is not a union
    pub fn as_single(&self) -> Option<&str> {
        match self {
            TypeExpr::Single(name) => Some(name),
            TypeExpr::Union(_) => None,
        }
    }

    /// Iterate over every alternative, in declared order
    pub fn alternatives(&self) -> impl Iterator<Item = &str> {
        let names: &[String] = match self {
            TypeExpr::Single(name) => std::slice::from_ref(name),
            TypeExpr::Union(names) => names,
        };
        names.iter().map(String::as_str)
    }
}

impl From<&str> for TypeExpr {
    fn from(name: &str) -> Self {
        TypeExpr::Single(name.to_string())
    }
}

impl From<String> for TypeExpr {
    fn from(name: String) -> Self {
        TypeExpr::Single(name)
    }
}

impl From<Vec<&str>> for TypeExpr {
    fn from(names: Vec<&str>) -> Self {
        TypeExpr::union(names)
    }
}

/// A field that may hold one value or a list of values
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(untagged)]
pub enum OneOrMany<T> {
    /// Exactly one value
    One(T),
    /// A list of values
    Many(Vec<T>),
}

impl<T> OneOrMany<T> {
    /// Iterate over the values, normalising the single form to a list of one
    pub fn iter(&self) -> std::slice::Iter<'_, T> {
        match self {
            OneOrMany::One(value) => std::slice::from_ref(value).iter(),
            OneOrMany::Many(values) => values.iter(),
        }
    }

    /// Number of values held
    pub fn len(&self) -> usize {
        match self {
            OneOrMany::One(_) => 1,
            OneOrMany::Many(values) => values.len(),
        }
    }

    /// Check whether no values are held
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

impl From<&str> for OneOrMany<String> {
    fn from(value: &str) -> Self {
        OneOrMany::One(value.to_string())
    }
}

impl From<Vec<&str>> for OneOrMany<String> {
    fn from(values: Vec<&str>) -> Self {
        OneOrMany::Many(values.into_iter().map(String::from).collect())
    }
}

/// One documented return alternative of a method
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ReturnType {
    /// Returned type
    #[serde(rename = "type")]
    pub ty: TypeExpr,
    /// Markdown summary of the returned value
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub summary: Option<String>,
}

impl ReturnType {
    /// Create a return alternative
    pub fn new(ty: impl Into<TypeExpr>) -> Self {
        Self {
            ty: ty.into(),
            summary: None,
        }
    }

    /// Set the summary
    pub fn with_summary(mut self, summary: impl Into<String>) -> Self {
        self.summary = Some(summary.into());
        self
    }
}

/// The literal marker used by annotations for "no return value"
pub const VOID_MARKER: &str = "void";

/// Return specification of a method
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "ReturnsRepr", into = "ReturnsRepr")]
pub enum Returns {
    /// Explicitly returns nothing
    Void,
    /// One return alternative
    Single(ReturnType),
    /// Several return alternatives
    Many(Vec<ReturnType>),
}

impl Returns {
    /// Create a single-alternative return spec
    pub fn single(ty: impl Into<TypeExpr>) -> Self {
        Returns::Single(ReturnType::new(ty))
    }

    /// Return alternatives, empty for `Void`
    pub fn alternatives(&self) -> &[ReturnType] {
        match self {
            Returns::Void => &[],
            Returns::Single(ret) => std::slice::from_ref(ret),
            Returns::Many(rets) => rets,
        }
    }

    /// Check whether this spec documents no value at all
    pub fn is_void(&self) -> bool {
        self.alternatives().is_empty()
    }
}

/// Wire form of [`Returns`] as written by the annotation parser
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(untagged)]
pub enum ReturnsRepr {
    /// A bare marker string; only `"void"` is meaningful
    Marker(String),
    /// A single `{ type, summary }` record
    One(ReturnType),
    /// A list of `{ type, summary }` records
    Many(Vec<ReturnType>),
}

impl TryFrom<ReturnsRepr> for Returns {
    type Error = String;

    fn try_from(repr: ReturnsRepr) -> Result<Self, Self::Error> {
        match repr {
            ReturnsRepr::Marker(marker) if marker == VOID_MARKER => Ok(Returns::Void),
            ReturnsRepr::Marker(other) => Err(format!(
                "unsupported return marker `{}` (expected `{}` or a type record)",
                other, VOID_MARKER
            )),
            ReturnsRepr::One(ret) => Ok(Returns::Single(ret)),
            ReturnsRepr::Many(rets) => Ok(Returns::Many(rets)),
        }
    }
}

impl From<Returns> for ReturnsRepr {
    fn from(returns: Returns) -> Self {
        match returns {
            Returns::Void => ReturnsRepr::Marker(VOID_MARKER.to_string()),
            Returns::Single(ret) => ReturnsRepr::One(ret),
            Returns::Many(rets) => ReturnsRepr::Many(rets),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_type_expr_from_json() {
        let single: TypeExpr = serde_json::from_str(r#""String""#).unwrap();
        assert_eq!(single, TypeExpr::single("String"));

        let union: TypeExpr = serde_json::from_str(r#"["String", "Number"]"#).unwrap();
        assert_eq!(union, TypeExpr::union(["String", "Number"]));
        assert_eq!(union.alternatives().collect::<Vec<_>>(), vec!["String", "Number"]);
        assert_eq!(union.as_single(), None);
        assert_eq!(union.to_string(), "String | Number");
    }

    #[test]
    fn test_one_or_many_iter() {
        let one = OneOrMany::from("Titanium.UI.FILL");
        assert_eq!(one.iter().count(), 1);

        let many: OneOrMany<String> =
            serde_json::from_str(r#"["Titanium.UI.A_*", "Titanium.UI.B_*"]"#).unwrap();
        assert_eq!(many.len(), 2);
        assert_eq!(many.iter().next().unwrap(), "Titanium.UI.A_*");
    }

    #[test]
    fn test_returns_forms() {
        let void: Returns = serde_json::from_str(r#""void""#).unwrap();
        assert!(void.is_void());

        let single: Returns =
            serde_json::from_str(r#"{"type": "Titanium.UI.View", "summary": "The view"}"#).unwrap();
        assert_eq!(single.alternatives().len(), 1);
        assert_eq!(
            single.alternatives()[0].summary.as_deref(),
            Some("The view")
        );

        let many: Returns =
            serde_json::from_str(r#"[{"type": "String"}, {"type": "Number"}]"#).unwrap();
        assert_eq!(many.alternatives().len(), 2);
    }

    #[test]
    fn test_returns_rejects_unknown_marker() {
        let err = serde_json::from_str::<Returns>(r#""nothing""#).unwrap_err();
        assert!(err.to_string().contains("unsupported return marker"));
    }

    #[test]
    fn test_returns_serializes_void_marker() {
        assert_eq!(serde_json::to_string(&Returns::Void).unwrap(), r#""void""#);
    }
}
