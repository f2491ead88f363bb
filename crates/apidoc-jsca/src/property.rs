//! Property mapper
//!
//! Properties come in two shapes. Members of a type carry scope flags,
//! availability and platform data; properties of an event payload carry only
//! name, description, deprecation and type.

use crate::constants::expand_constants;
use crate::generator::JscaContext;
use crate::membership::{is_creatable, property_scope};
use crate::node::{since_list, user_agent_list, JscaProperty, JscaPropertyMember};
use crate::type_name::canonical_type_name;
use apidoc_model::{ApiObject, Property};

/// Availability used when a property does not declare one
pub const DEFAULT_AVAILABILITY: &str = "always";

/// Permission used when a property does not declare one
pub const DEFAULT_PERMISSION: &str = "read-write";

/// Map a property declared on `owner`
pub fn map_property(ctx: &JscaContext<'_>, owner: &ApiObject, property: &Property) -> JscaProperty {
    let scope = property_scope(is_creatable(owner), &property.name);
    let member = JscaPropertyMember {
        is_class_property: scope.is_class(),
        is_instance_property: scope.is_instance(),
        since: since_list(&property.platforms),
        user_agents: user_agent_list(&property.platforms),
        is_internal: false,
        examples: ctx.examples(&property.examples),
        availability: non_empty_or(property.availability.as_deref(), DEFAULT_AVAILABILITY),
        permission: non_empty_or(property.permission.as_deref(), DEFAULT_PERMISSION),
    };
    map_shape(ctx, property, Some(member))
}

/// Declared value, or `default` when it is missing or empty
fn non_empty_or(value: Option<&str>, default: &str) -> String {
    value.filter(|v| !v.is_empty()).unwrap_or(default).to_string()
}

/// Map a property of an event payload
pub fn map_event_property(ctx: &JscaContext<'_>, property: &Property) -> JscaProperty {
    map_shape(ctx, property, None)
}

fn map_shape(
    ctx: &JscaContext<'_>,
    property: &Property,
    member: Option<JscaPropertyMember>,
) -> JscaProperty {
    JscaProperty {
        name: property.name.clone(),
        description: ctx.description(property.summary.as_deref(), property.deprecated.as_ref()),
        deprecated: property.is_deprecated(),
        ty: property
            .ty
            .as_ref()
            .map(canonical_type_name)
            .unwrap_or_default(),
        member,
        constants: property
            .constants
            .as_ref()
            .map(|constants| expand_constants(constants, ctx.registry())),
    }
}
