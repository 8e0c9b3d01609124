mod class;
mod interface;

pub use qpath_schema::SUPER_FIELD;

use crate::kotlin::{FileSpec, TypeSpec};
use qpath_schema::prelude::*;

///
/// RenderedModel
///
/// The capability interface and the concrete path class for one entity.
///

#[derive(Clone, Debug, Eq, PartialEq)]
pub struct RenderedModel {
    pub interface: TypeSpec,
    pub class: TypeSpec,
}

impl RenderedModel {
    /// One file named after the class, interface first.
    #[must_use]
    pub fn into_file(self, model: &EntityModel) -> FileSpec {
        FileSpec::new(model.class_name.package(), model.class_name.simple_name())
            .with_type(self.interface)
            .with_type(self.class)
    }
}

/// Render `model`, which must belong to `graph`.
#[must_use]
pub fn render(graph: &EntityGraph, model: &EntityModel) -> RenderedModel {
    RenderedModel {
        interface: interface::render(graph, model),
        class: class::render(graph, model),
    }
}

/// Name of the companion singleton: the simple name with its first letter
/// lowered, e.g. `person` for `Person` and `vec3d` for `Vec3d`.
#[must_use]
pub fn default_instance_name(model: &EntityModel) -> String {
    let name = model.name.simple_name();
    let mut chars = name.chars();

    match chars.next() {
        Some(first) => first.to_lowercase().chain(chars).collect(),
        None => String::new(),
    }
}
