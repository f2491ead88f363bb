//! Constant-group expansion
//!
//! Properties and parameters refer to the constants they accept with a
//! compact reference instead of listing them:
//!
//! - `Titanium.UI.TEXT_ALIGNMENT_*` - every constant starting with the prefix
//! - `Titanium.UI.FILL` - the named constant (and any constant it prefixes)
//! - `Titanium.Media.` - the run of upper-case constants declared on the type
//!
//! Expansion walks the declaring type's properties in declared order and
//! never invents a name that the registry does not hold.

use apidoc_model::{OneOrMany, TypeRegistry};
use lazy_static::lazy_static;
use regex::Regex;
use tracing::debug;

lazy_static! {
    /// Upper-case constant identifier
    static ref CONSTANT_NAME: Regex = Regex::new(r"^[A-Z_][A-Z0-9_]*$").unwrap();
}

/// A parsed constant-group reference
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ConstantRef<'a> {
    /// Declaring type (e.g. "Titanium.UI")
    pub namespace: &'a str,
    /// Name prefix, empty to select upper-case constants
    pub token: &'a str,
}

impl<'a> ConstantRef<'a> {
    /// Split a reference on its last `.`, dropping a trailing `*` wildcard
    pub fn parse(reference: &'a str) -> Self {
        let (namespace, token) = match reference.rsplit_once('.') {
            Some((namespace, token)) => (namespace, token),
            None => (reference, reference),
        };
        let token = token.strip_suffix('*').unwrap_or(token);
        Self { namespace, token }
    }
}

/// Check whether a property name looks like a constant
pub fn is_constant_name(name: &str) -> bool {
    CONSTANT_NAME.is_match(name)
}

/// Expand constant references into fully-qualified constant names
///
/// References are expanded in order and the results concatenated without
/// de-duplication. A reference whose namespace is not registered
/// contributes nothing.
pub fn expand_constants(references: &OneOrMany<String>, registry: &TypeRegistry) -> Vec<String> {
    let mut expanded = Vec::new();
    for reference in references.iter() {
        expand_reference(&ConstantRef::parse(reference), registry, &mut expanded);
    }
    expanded
}

fn expand_reference(reference: &ConstantRef<'_>, registry: &TypeRegistry, out: &mut Vec<String>) {
    let Some(declaring) = registry.get(reference.namespace) else {
        debug!(
            "Skipping constants of unknown namespace {}",
            reference.namespace
        );
        return;
    };

    let mut in_run = false;
    for property in &declaring.properties {
        let name = property.name.as_str();
        let matched = if reference.token.is_empty() {
            is_constant_name(name)
        } else {
            name.starts_with(reference.token)
        };

        if matched {
            out.push(format!("{}.{}", reference.namespace, name));
            in_run = true;
        } else if reference.token.is_empty() && in_run {
            // The upper-case run has ended
            break;
        }

        if name == reference.token {
            break;
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use apidoc_model::{ApiObject, Property};
    use pretty_assertions::assert_eq;

    fn registry_with(namespace: &str, names: &[&str]) -> TypeRegistry {
        let object = names
            .iter()
            .fold(ApiObject::module(namespace), |obj, name| {
                obj.property(Property::new(*name))
            });
        TypeRegistry::from_objects(vec![object]).unwrap()
    }

    #[test]
    fn test_parse_reference() {
        assert_eq!(
            ConstantRef::parse("Titanium.UI.TEXT_*"),
            ConstantRef {
                namespace: "Titanium.UI",
                token: "TEXT_"
            }
        );
        assert_eq!(ConstantRef::parse("Titanium.Media.").token, "");
        assert_eq!(ConstantRef::parse("Titanium.UI.FILL").token, "FILL");
    }

    #[test]
    fn test_wildcard_prefix() {
        let registry = registry_with("N", &["A_ONE", "A_TWO", "B_ONE"]);
        assert_eq!(
            expand_constants(&"N.A_*".into(), &registry),
            vec!["N.A_ONE", "N.A_TWO"]
        );
        assert_eq!(
            expand_constants(&"N.A_".into(), &registry),
            vec!["N.A_ONE", "N.A_TWO"]
        );
    }

    #[test]
    fn test_exact_name_ends_walk() {
        let registry = registry_with("N", &["FILL", "FILL_WIDTH", "SIZE"]);
        assert_eq!(expand_constants(&"N.FILL".into(), &registry), vec!["N.FILL"]);
    }

    #[test]
    fn test_empty_token_stops_after_run() {
        let registry = registry_with("N", &["backgroundColor", "LEFT", "RIGHT", "width", "TOP"]);
        assert_eq!(
            expand_constants(&"N.".into(), &registry),
            vec!["N.LEFT", "N.RIGHT"]
        );
    }

    #[test]
    fn test_unknown_namespace_is_empty() {
        let registry = registry_with("N", &["A_ONE"]);
        assert!(expand_constants(&"Missing.A_*".into(), &registry).is_empty());
    }

    #[test]
    fn test_multiple_references_not_deduplicated() {
        let registry = registry_with("N", &["A_ONE", "A_TWO"]);
        let refs: OneOrMany<String> = vec!["N.A_*", "N.A_ONE"].into();
        assert_eq!(
            expand_constants(&refs, &registry),
            vec!["N.A_ONE", "N.A_TWO", "N.A_ONE"]
        );
    }

    #[test]
    fn test_constant_name_pattern() {
        assert!(is_constant_name("ANIMATION_CURVE_EASE_IN"));
        assert!(is_constant_name("_PRIVATE"));
        assert!(is_constant_name("ENCODING_UTF8"));
        assert!(!is_constant_name("width"));
        assert!(!is_constant_name("Width"));
        assert!(!is_constant_name(""));
    }
}
