use crate::prelude::*;
use derive_more::Display;

///
/// EntityId
///
/// Index of a model inside the [`EntityGraph`] that created it.
///

#[derive(Clone, Copy, Debug, Display, Eq, Hash, Ord, PartialEq, PartialOrd, Serialize)]
#[display("#{_0}")]
pub struct EntityId(usize);

impl EntityId {
    pub(crate) const fn new(index: usize) -> Self {
        Self(index)
    }

    #[must_use]
    pub const fn index(self) -> usize {
        self.0
    }
}

///
/// EntityModel
///

#[derive(Clone, Debug, Eq, PartialEq, Serialize)]
pub struct EntityModel {
    pub id: EntityId,
    pub name: ClassName,
    pub kind: ModelKind,
    pub type_params: usize,
    pub fields: Vec<Field>,

    /// Resolved in the second assembly pass; absent when the declaration has
    /// no modeled superclass or the link could not be resolved.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub superclass: Option<EntityId>,

    pub class_name: ClassName,
    pub interface_name: ClassName,
    pub source: SourceToken,
}

impl EntityModel {
    #[must_use]
    pub fn field(&self, name: &str) -> Option<&Field> {
        self.fields.iter().find(|f| f.name == name)
    }

    /// The entity's own type with every type parameter collapsed to `*`.
    #[must_use]
    pub fn self_type(&self) -> TypeName {
        TypeName::with_stars(self.name.clone(), self.type_params)
    }

    #[must_use]
    pub const fn is_generic(&self) -> bool {
        self.type_params > 0
    }
}
