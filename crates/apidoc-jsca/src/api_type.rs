//! Type mapper
//!
//! Converts one documented type and all of its members. External types and
//! excluded names map to `None` and are left out of the document.

use crate::event::map_event;
use crate::function::map_function;
use crate::generator::JscaContext;
use crate::membership::is_internal_type;
use crate::node::{since_list, user_agent_list, JscaType};
use crate::property::map_property;
use crate::type_name::{output_type_name, OBJECT};
use apidoc_model::ApiObject;
use tracing::{debug, trace};

/// Map a documented type, or `None` when it must not be published
pub fn map_type(ctx: &JscaContext<'_>, object: &ApiObject) -> Option<JscaType> {
    if object.external {
        debug!("Skipping external type {}", object.name);
        return None;
    }
    if ctx.is_excluded(&object.name) {
        debug!("Skipping excluded type {}", object.name);
        return None;
    }
    trace!("Converting {} to jsca", object.name);

    let mut mapped = JscaType {
        name: output_type_name(&object.name),
        is_internal: false,
        description: ctx.description(object.summary.as_deref(), object.deprecated.as_ref()),
        deprecated: object.is_deprecated(),
        examples: ctx.examples(&object.examples),
        properties: object
            .properties
            .iter()
            .map(|property| map_property(ctx, object, property))
            .collect(),
        functions: object
            .methods
            .iter()
            .map(|method| map_function(ctx, object, method))
            .collect(),
        events: object
            .events
            .iter()
            .map(|event| map_event(ctx, event))
            .collect(),
        remarks: object
            .description
            .as_deref()
            .filter(|description| !description.is_empty())
            .map(|description| vec![ctx.render(description)])
            .unwrap_or_default(),
        user_agents: user_agent_list(&object.platforms),
        since: since_list(&object.platforms),
        inherits: object.parent_name().unwrap_or(OBJECT).to_string(),
    };
    let has_class_properties = mapped.has_class_properties();
    mapped.is_internal = is_internal_type(object.kind, &object.name, has_class_properties);
    Some(mapped)
}
