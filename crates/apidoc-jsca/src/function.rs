//! Function mapper

use crate::constants::expand_constants;
use crate::generator::JscaContext;
use crate::membership::{factory_parameter_type, is_creatable, method_scope};
use crate::node::{
    since_list, user_agent_list, JscaFunction, JscaParameter, JscaReturnType, ParameterUsage,
};
use crate::type_name::canonical_type_name;
use apidoc_model::{ApiObject, Method, Parameter, ReturnType};
use tracing::trace;

/// Map a method declared on `owner`
pub fn map_function(ctx: &JscaContext<'_>, owner: &ApiObject, method: &Method) -> JscaFunction {
    trace!("{}.{}", owner.name, method.name);

    let scope = method_scope(is_creatable(owner));

    let return_types = method
        .returns
        .as_ref()
        .filter(|returns| !returns.is_void())
        .map(|returns| {
            returns
                .alternatives()
                .iter()
                .map(|ret| map_return_type(ctx, ret))
                .collect()
        });

    let parameters = (!method.parameters.is_empty()).then(|| {
        method
            .parameters
            .iter()
            .map(|param| map_parameter(ctx, method, param))
            .collect()
    });

    JscaFunction {
        name: method.name.clone(),
        deprecated: method.is_deprecated(),
        description: ctx.description(method.summary.as_deref(), method.deprecated.as_ref()),
        return_types,
        parameters,
        since: since_list(&method.platforms),
        user_agents: user_agent_list(&method.platforms),
        is_instance_property: scope.is_instance(),
        is_class_property: scope.is_class(),
        is_internal: false,
        examples: ctx.examples(&method.examples),
        references: Vec::new(),
        exceptions: Vec::new(),
        is_constructor: false,
        is_method: true,
    }
}

/// Map one parameter of `method`
pub fn map_parameter(ctx: &JscaContext<'_>, method: &Method, param: &Parameter) -> JscaParameter {
    let canonical = canonical_type_name(&param.ty);
    let ty = factory_parameter_type(&canonical, method, ctx.registry()).unwrap_or(canonical);

    JscaParameter {
        name: param.name.clone(),
        description: ctx.description(param.summary.as_deref(), param.deprecated.as_ref()),
        ty,
        usage: ParameterUsage::from_flags(param.optional, param.repeatable),
        constants: param
            .constants
            .as_ref()
            .map(|constants| expand_constants(constants, ctx.registry())),
    }
}

fn map_return_type(ctx: &JscaContext<'_>, ret: &ReturnType) -> JscaReturnType {
    JscaReturnType {
        ty: canonical_type_name(&ret.ty),
        description: ctx.description(ret.summary.as_deref(), None),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test::{mock_method, mock_property, mock_proxy, mock_registry};
    use apidoc_model::{Deprecation, Returns, TypeExpr};
    use pretty_assertions::assert_eq;
    use serde_json::json;

    #[test]
    fn test_void_and_missing_returns_are_omitted() {
        let owner = mock_proxy("Titanium.UI.View");
        let registry = mock_registry(vec![owner.clone()]);
        let ctx = JscaContext::new(&registry);

        let func = map_function(&ctx, &owner, &mock_method("hide"));
        assert_eq!(func.return_types, None);
        assert_eq!(func.parameters, None);

        let func = map_function(&ctx, &owner, &mock_method("hide").returns(Returns::Void));
        assert_eq!(func.return_types, None);

        let value = serde_json::to_value(&func).unwrap();
        assert!(value.get("returnTypes").is_none());
        assert!(value.get("parameters").is_none());
    }

    #[test]
    fn test_return_alternatives() {
        let owner = mock_proxy("Titanium.Filesystem");
        let registry = mock_registry(vec![owner.clone()]);
        let ctx = JscaContext::new(&registry);

        let method = mock_method("read").returns(Returns::Many(vec![
            ReturnType::new("Titanium.Blob").with_summary("The contents."),
            ReturnType::new(TypeExpr::union(["String", "Object"])),
        ]));
        let func = map_function(&ctx, &owner, &method);
        assert_eq!(
            func.return_types.unwrap(),
            vec![
                JscaReturnType {
                    ty: "Titanium.Blob".into(),
                    description: "<p>The contents.</p>".into(),
                },
                JscaReturnType {
                    ty: "Object".into(),
                    description: String::new(),
                },
            ]
        );
    }

    #[test]
    fn test_parameter_usage() {
        let owner = mock_proxy("Titanium.API");
        let registry = mock_registry(vec![owner.clone()]);
        let ctx = JscaContext::new(&registry);

        let method = mock_method("log")
            .param(Parameter::new("level", "String").optional())
            .param(Parameter::new("message", "String").optional().repeatable())
            .param(Parameter::new("extra", "Array<String>").repeatable())
            .param(Parameter::new("callback", "Callback<Object>"));
        let func = map_function(&ctx, &owner, &method);
        let usages: Vec<_> = func
            .parameters
            .unwrap()
            .into_iter()
            .map(|p| (p.ty, p.usage))
            .collect();
        assert_eq!(
            usages,
            vec![
                ("String".to_string(), ParameterUsage::Optional),
                ("String".to_string(), ParameterUsage::Optional),
                ("Array".to_string(), ParameterUsage::OneOrMore),
                ("Function".to_string(), ParameterUsage::Required),
            ]
        );
    }

    #[test]
    fn test_factory_parameter_rewrite() {
        let owner = mock_proxy("Titanium.UI");
        let button = mock_proxy("Titanium.UI.Button");
        let registry = mock_registry(vec![owner.clone(), button]);
        let ctx = JscaContext::new(&registry);

        let method = mock_method("createButton")
            .param(Parameter::new("parameters", "Dictionary<Titanium.UI.Button>").optional())
            .returns(Returns::single("Titanium.UI.Button"));
        let func = map_function(&ctx, &owner, &method);
        assert_eq!(func.parameters.unwrap()[0].ty, "Titanium.UI.Button");

        let method = mock_method("createButton")
            .param(Parameter::new("parameters", "Object"))
            .returns(Returns::single("Titanium.UI.Button"));
        let func = map_function(&ctx, &owner, &method);
        assert_eq!(func.parameters.unwrap()[0].ty, "Titanium.UI.Button");
    }

    #[test]
    fn test_scope_flags() {
        let creatable = mock_proxy("Titanium.UI.Button").extends("Titanium.UI.View");
        let module = mock_proxy("Titanium.UI");
        let registry = mock_registry(vec![creatable.clone(), module.clone()]);
        let ctx = JscaContext::new(&registry);

        let func = map_function(&ctx, &creatable, &mock_method("HIDE"));
        assert!(func.is_instance_property);
        assert!(!func.is_class_property);

        let func = map_function(&ctx, &module, &mock_method("createButton"));
        assert!(func.is_class_property);
        assert!(!func.is_instance_property);
    }

    #[test]
    fn test_key_order() {
        let owner = mock_proxy("Titanium.UI");
        let registry = mock_registry(vec![owner.clone()]);
        let ctx = JscaContext::new(&registry);

        let method = mock_method("setTimeout")
            .param(Parameter::new("delay", "Number"))
            .returns(Returns::single("Number"));
        let value = serde_json::to_value(map_function(&ctx, &owner, &method)).unwrap();
        let keys: Vec<_> = value.as_object().unwrap().keys().cloned().collect();
        assert_eq!(
            keys,
            vec![
                "name",
                "deprecated",
                "description",
                "returnTypes",
                "parameters",
                "since",
                "userAgents",
                "isInstanceProperty",
                "isClassProperty",
                "isInternal",
                "examples",
                "references",
                "exceptions",
                "isConstructor",
                "isMethod",
            ]
        );
        assert_eq!(
            value["parameters"],
            json!([{"name": "delay", "description": "", "type": "Number", "usage": "required"}])
        );
    }

    #[test]
    fn test_parameter_constants() {
        let owner = mock_proxy("Titanium.UI")
            .property(mock_property("TEXT_ALIGNMENT_LEFT", "Number"))
            .property(mock_property("TEXT_ALIGNMENT_RIGHT", "Number"))
            .property(mock_property("FILL", "String"));
        let registry = mock_registry(vec![owner.clone()]);
        let ctx = JscaContext::new(&registry);

        let method = mock_method("align")
            .param(
                Parameter::new("mode", "Number").with_constants("Titanium.UI.TEXT_ALIGNMENT_*"),
            )
            .param(Parameter::new("size", "String"));
        let params = map_function(&ctx, &owner, &method).parameters.unwrap();
        assert_eq!(
            params[0].constants,
            Some(vec![
                "Titanium.UI.TEXT_ALIGNMENT_LEFT".to_string(),
                "Titanium.UI.TEXT_ALIGNMENT_RIGHT".to_string(),
            ])
        );
        assert_eq!(params[1].constants, None);

        let value = serde_json::to_value(&params[1]).unwrap();
        assert!(value.get("constants").is_none());
    }

    #[test]
    fn test_deprecated_parameter_description() {
        let owner = mock_proxy("Titanium.UI");
        let registry = mock_registry(vec![owner.clone()]);
        let ctx = JscaContext::new(&registry);

        let method = mock_method("animate")
            .param(
                Parameter::new("duration", "Number")
                    .with_summary("Length in milliseconds.")
                    .deprecated(Deprecation::since("5.0.0")),
            )
            .param(Parameter::new("curve", "Number").deprecated(Deprecation::since("5.0.0")));
        let params = map_function(&ctx, &owner, &method).parameters.unwrap();
        assert_eq!(
            params[0].description,
            "<p>Length in milliseconds.  <strong>Deprecated since 5.0.0.</strong></p>"
        );
        assert_eq!(params[1].description, "");
    }
}
