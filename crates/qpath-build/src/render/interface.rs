use crate::{
    kotlin::{Modifier, PropertySpec, TypeSpec},
    paths::path_type,
};
use qpath_schema::prelude::*;

// render
// abstract accessors for own fields only; inherited ones arrive through the
// superclass interface
pub(super) fn render(graph: &EntityGraph, model: &EntityModel) -> TypeSpec {
    let mut spec = TypeSpec::interface(model.interface_name.simple_name());

    if let Some(superclass) = graph.superclass(model) {
        spec = spec.superinterface(superclass.interface_name.clone());
    }

    for field in &model.fields {
        let modifier = if graph.ancestor_declares(model.id, &field.name) {
            Modifier::Override
        } else {
            Modifier::Public
        };

        spec = spec.property(PropertySpec::new(&field.name, path_type(&field.ty)).modifier(modifier));
    }

    spec
}
