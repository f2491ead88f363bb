//! Type-name canonicalization
//!
//! JSCA allows exactly one type name per property, parameter and return
//! value, drawn from a small vocabulary. This module folds the richer
//! annotation type expressions into that vocabulary.
//!
//! | Input | Output |
//! |-------|--------|
//! | `[String, Object]` | `Object` |
//! | `[String, Number]` | `String` |
//! | `Callback<Object>` | `Function` |
//! | `Array<String>` | `Array` |
//! | `Dictionary<Titanium.UI.View>` | `Titanium.UI.View` |
//! | `Dictionary` | `Object` |
//! | `Titanium.UI.2DMatrix` | `Titanium.UI._2DMatrix` |
//!
//! Canonicalization is total and idempotent: every input yields exactly one
//! name, and canonicalizing that name again returns it unchanged.

use apidoc_model::TypeExpr;

/// Catch-all object type
pub const OBJECT: &str = "Object";

/// Any callable
pub const FUNCTION: &str = "Function";

/// Any array
pub const ARRAY: &str = "Array";

const CALLBACK_PREFIX: &str = "Callback";
const DICTIONARY: &str = "Dictionary";
const GLOBAL_PREFIX: &str = "Global.";

/// Canonicalize a raw type expression
///
/// A union collapses to `Object` when any alternative is (case-insensitively)
/// `object`; otherwise only its first alternative is kept. An empty union
/// carries no constraint and becomes `Object`.
pub fn canonical_type_name(expr: &TypeExpr) -> String {
    match expr {
        TypeExpr::Single(name) => canonical_name(name),
        TypeExpr::Union(names) => {
            if names.iter().any(|n| n.eq_ignore_ascii_case(OBJECT)) {
                return OBJECT.to_string();
            }
            names
                .first()
                .map(|first| canonical_name(first))
                .unwrap_or_else(|| OBJECT.to_string())
        }
    }
}

/// Canonicalize a single type name
pub fn canonical_name(name: &str) -> String {
    if name.starts_with(CALLBACK_PREFIX) {
        return FUNCTION.to_string();
    }
    if name.starts_with(ARRAY) {
        return ARRAY.to_string();
    }
    if name == DICTIONARY {
        return OBJECT.to_string();
    }
    if name.starts_with("Dictionary<") {
        if let Some(value_type) = dictionary_value_type(name) {
            return canonical_name(value_type);
        }
    }
    clean_namespace(name)
}

/// Extract `X` from `Dictionary<X>`, using the outermost brackets
fn dictionary_value_type(name: &str) -> Option<&str> {
    let open = name.find('<')?;
    let close = name.rfind('>')?;
    if close <= open + 1 {
        return None;
    }
    Some(&name[open + 1..close])
}

/// Prefix every dotted segment that starts with a digit with `_`
///
/// `"Titanium.UI.2DMatrix"` is not a valid script identifier path;
/// `"Titanium.UI._2DMatrix"` is.
pub fn clean_namespace(name: &str) -> String {
    name.split('.')
        .map(|part| {
            if part.starts_with(|c: char| c.is_ascii_digit()) {
                format!("_{}", part)
            } else {
                part.to_string()
            }
        })
        .collect::<Vec<_>>()
        .join(".")
}

/// Drop the `Global.` prefix used for documenting script globals
pub fn clean_class_name(name: &str) -> &str {
    name.strip_prefix(GLOBAL_PREFIX).unwrap_or(name)
}

/// Check whether a type name documents a script global
pub fn is_global(name: &str) -> bool {
    name.starts_with(GLOBAL_PREFIX)
}

/// Name under which a documented type is published
pub fn output_type_name(name: &str) -> String {
    clean_class_name(&clean_namespace(name)).to_string()
}
