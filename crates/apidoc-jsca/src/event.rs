//! Event mapper

use crate::generator::JscaContext;
use crate::node::JscaEvent;
use crate::property::map_event_property;
use apidoc_model::Event;

/// Map an event and its payload properties
pub fn map_event(ctx: &JscaContext<'_>, event: &Event) -> JscaEvent {
    JscaEvent {
        name: event.name.clone(),
        description: ctx.description(event.summary.as_deref(), event.deprecated.as_ref()),
        deprecated: event.is_deprecated(),
        properties: event
            .properties
            .iter()
            .map(|property| map_event_property(ctx, property))
            .collect(),
    }
}
