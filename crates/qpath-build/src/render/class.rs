use crate::{
    kotlin::{CodeBlock, ConstructorSpec, Initializer, Modifier, ParameterSpec, PropertySpec, TypeSpec},
    paths::{
        base_class, initializer, java_class, jvm_field, path, path_metadata,
        path_metadata_factory, path_type,
    },
    render::default_instance_name,
};
use qpath_schema::{SUPER_FIELD, prelude::*};

pub(super) fn render(graph: &EntityGraph, model: &EntityModel) -> TypeSpec {
    let self_type = model.self_type();
    let base = TypeName::parameterized(base_class(model.kind), vec![self_type.clone()]);

    let mut spec = TypeSpec::class(model.class_name.simple_name())
        .primary_parameter(ParameterSpec::new(
            "type",
            TypeName::parameterized(java_class(), vec![TypeName::producer_of(self_type.clone())]),
        ))
        .primary_parameter(ParameterSpec::new("metadata", path_metadata()))
        .superclass(base, [CodeBlock::new().ident("type"), CodeBlock::new().ident("metadata")])
        .superinterface(model.interface_name.clone());

    let superclass = graph.superclass(model);
    if let Some(superclass) = superclass {
        spec = spec
            .superinterface(superclass.interface_name.clone())
            .property(super_property(superclass));
    }

    for field in &model.fields {
        spec = spec.property(
            PropertySpec::new(&field.name, path_type(&field.ty))
                .modifier(Modifier::Override)
                .initializer(initializer(&field.name, &field.ty)),
        );
    }

    if superclass.is_some() {
        for (_, field) in graph.inherited_fields(model.id) {
            spec = spec.property(
                PropertySpec::new(&field.name, path_type(&field.ty))
                    .modifier(Modifier::Override)
                    .initializer(Initializer::Getter(
                        CodeBlock::new()
                            .text(format!("{SUPER_FIELD}."))
                            .ident(&field.name),
                    )),
            );
        }
    }

    constructors(model)
        .into_iter()
        .fold(spec, TypeSpec::constructor)
        .with_companion(companion(model))
}

// super_property
// built from this path's own type and metadata on first use
fn super_property(superclass: &EntityModel) -> PropertySpec {
    PropertySpec::new(SUPER_FIELD, superclass.class_name.clone())
        .modifier(Modifier::Private)
        .initializer(Initializer::Lazy(
            CodeBlock::new()
                .ty(superclass.class_name.clone())
                .args([CodeBlock::new().ident("type"), CodeBlock::new().ident("metadata")]),
        ))
}

// constructors
// every secondary form converges on the primary (type, metadata) one
fn constructors(model: &EntityModel) -> [ConstructorSpec; 3] {
    let own_class = || CodeBlock::new().class_literal(model.name.clone(), false);
    let source = TypeName::parameterized(path(), vec![TypeName::producer_of(model.self_type())]);

    [
        ConstructorSpec::new(
            [ParameterSpec::new("path", source)],
            [
                CodeBlock::new().ident("path").text(".type"),
                CodeBlock::new().ident("path").text(".metadata"),
            ],
        ),
        ConstructorSpec::new(
            [ParameterSpec::new("metadata", path_metadata())],
            [own_class(), CodeBlock::new().ident("metadata")],
        ),
        ConstructorSpec::new(
            [ParameterSpec::new("variable", ClassName::kotlin("String"))],
            [
                own_class(),
                CodeBlock::new()
                    .ty(path_metadata_factory())
                    .call(".forVariable", [CodeBlock::new().ident("variable")]),
            ],
        ),
    ]
}

fn companion(model: &EntityModel) -> TypeSpec {
    let name = default_instance_name(model);
    let instance = CodeBlock::new()
        .ty(model.class_name.clone())
        .args([CodeBlock::new().string(name.as_str())]);

    TypeSpec::companion().property(
        PropertySpec::new(name, model.class_name.clone())
            .annotation(jvm_field())
            .modifier(Modifier::Public)
            .initializer(Initializer::Value(instance)),
    )
}
