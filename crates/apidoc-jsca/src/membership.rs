//! Membership and visibility heuristics
//!
//! The annotation source does not say whether a member belongs to the type
//! object or to its instances, nor which types should be hidden from code
//! assist. These rules infer that metadata. Each rule is a small pure
//! function so its precedence stays explicit:
//!
//! 1. [`is_creatable`] - `extends` of `Titanium.Proxy` / `Titanium.UI.View`
//!    makes a type creatable; an explicit `createable` flag overrides that.
//! 2. [`property_scope`] - properties of creatable types are instance
//!    members unless their name is entirely upper-case (a constant).
//! 3. [`method_scope`] - methods of creatable types are instance members.
//! 4. [`factory_parameter_type`] - `createX(Object)` returning `...X` takes
//!    an `X` options object.
//! 5. [`is_internal_type`] - proxies with no class-level properties are
//!    hidden, except script globals.

use crate::type_name::{canonical_name, is_global, OBJECT};
use apidoc_model::{ApiKind, ApiObject, Method, Returns, TypeRegistry};

/// Parents whose subtypes are created through `createX` factories
pub const CREATABLE_PARENTS: &[&str] = &["Titanium.Proxy", "Titanium.UI.View"];

/// Name prefix of factory methods
pub const FACTORY_PREFIX: &str = "create";

/// Whether a member is reached through the type or through its instances
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum MemberScope {
    /// Member of the type object itself
    Class,
    /// Member of each created instance
    Instance,
}

impl MemberScope {
    /// Scope for a member of a creatable or non-creatable type
    pub fn from_instance(is_instance: bool) -> Self {
        if is_instance {
            MemberScope::Instance
        } else {
            MemberScope::Class
        }
    }

    /// `isClassProperty` flag
    pub fn is_class(&self) -> bool {
        matches!(self, MemberScope::Class)
    }

    /// `isInstanceProperty` flag
    pub fn is_instance(&self) -> bool {
        matches!(self, MemberScope::Instance)
    }
}

/// Check whether instances of `owner` are created through a factory
pub fn is_creatable(owner: &ApiObject) -> bool {
    let inherited = owner
        .parent_name()
        .is_some_and(|parent| CREATABLE_PARENTS.contains(&parent));
    owner.createable.unwrap_or(inherited)
}

/// Check whether a name has no lower-case letters (a constant name)
pub fn is_upper_case(name: &str) -> bool {
    name == name.to_uppercase()
}

/// Scope of a property declared on a type with the given creatability
pub fn property_scope(creatable: bool, name: &str) -> MemberScope {
    MemberScope::from_instance(creatable && !is_upper_case(name))
}

/// Scope of a method declared on a type with the given creatability
pub fn method_scope(creatable: bool) -> MemberScope {
    MemberScope::from_instance(creatable)
}

/// Infer the options type of a `createX` factory parameter
///
/// Fires only when all of these hold:
/// - the parameter's canonical type is `Object` (any case)
/// - the method is named `create<X>` with a non-empty `<X>`
/// - the method has a single return type that is a registered type
/// - the return type's last dotted segment equals `<X>`
///
/// Returns the canonical return type name to use instead.
pub fn factory_parameter_type(
    canonical: &str,
    method: &Method,
    registry: &TypeRegistry,
) -> Option<String> {
    if !canonical.eq_ignore_ascii_case(OBJECT) {
        return None;
    }
    let created = method.name.strip_prefix(FACTORY_PREFIX)?;
    if created.is_empty() {
        return None;
    }
    let return_type = match method.returns.as_ref()? {
        Returns::Single(ret) => ret.ty.as_single()?,
        Returns::Void | Returns::Many(_) => return None,
    };
    let created_type = registry.get(return_type)?;
    (created == created_type.short_name()).then(|| canonical_name(return_type))
}

/// Check whether a type should be hidden from code assist
///
/// Only proxies outside the `Global.` namespace are candidates; they are
/// hidden when they expose no class-level property.
pub fn is_internal_type(kind: ApiKind, name: &str, has_class_properties: bool) -> bool {
    kind == ApiKind::Proxy && !is_global(name) && !has_class_properties
}
