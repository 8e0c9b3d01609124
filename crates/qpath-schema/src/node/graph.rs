use crate::prelude::*;
use std::collections::{BTreeSet, HashMap};

///
/// EntityGraph
///
/// Arena of entity models in first-seen declaration order, indexed by
/// canonical identity. Superclass links are [`EntityId`]s into the arena, so
/// an omitted superclass is just an absent index.
///

#[derive(Clone, Debug, Default)]
pub struct EntityGraph {
    models: Vec<EntityModel>,
    index: HashMap<String, EntityId>,
}

impl EntityGraph {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    // insert
    // returns the id of the existing model when the identity is taken
    pub(crate) fn insert(&mut self, mut model: EntityModel) -> Result<EntityId, EntityId> {
        let key = model.name.canonical();
        if let Some(existing) = self.index.get(&key) {
            return Err(*existing);
        }

        let id = EntityId::new(self.models.len());
        model.id = id;
        self.index.insert(key, id);
        self.models.push(model);

        Ok(id)
    }

    // link
    // caller has already checked that the link keeps the graph acyclic
    pub(crate) fn link(&mut self, id: EntityId, superclass: EntityId) {
        if let Some(model) = self.models.get_mut(id.index()) {
            model.superclass = Some(superclass);
        }
    }

    /// Whether linking `id` to `superclass` would close a cycle.
    #[must_use]
    pub fn would_cycle(&self, id: EntityId, superclass: EntityId) -> bool {
        superclass == id || self.ancestors(superclass).any(|model| model.id == id)
    }

    #[must_use]
    pub fn get(&self, id: EntityId) -> Option<&EntityModel> {
        self.models.get(id.index())
    }

    #[must_use]
    pub fn id_of(&self, identity: &str) -> Option<EntityId> {
        self.index.get(identity).copied()
    }

    #[must_use]
    pub fn lookup(&self, identity: &str) -> Option<&EntityModel> {
        self.id_of(identity).and_then(|id| self.get(id))
    }

    pub fn iter(&self) -> impl Iterator<Item = &EntityModel> {
        self.models.iter()
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.models.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.models.is_empty()
    }

    #[must_use]
    pub fn superclass(&self, model: &EntityModel) -> Option<&EntityModel> {
        model.superclass.and_then(|id| self.get(id))
    }

    /// Walk the superclass chain of `id`, nearest first, excluding `id`.
    #[must_use]
    pub fn ancestors(&self, id: EntityId) -> Ancestors<'_> {
        Ancestors {
            graph: self,
            next: self.get(id).and_then(|model| model.superclass),
            remaining: self.models.len(),
        }
    }

    /// Fields `id` inherits, root ancestor first. A field redeclared closer to
    /// `id` (or on `id` itself) hides the inherited one.
    #[must_use]
    pub fn inherited_fields(&self, id: EntityId) -> Vec<(&EntityModel, &Field)> {
        let Some(model) = self.get(id) else {
            return Vec::new();
        };

        let mut hidden: BTreeSet<&str> = model.fields.iter().map(|f| f.name.as_str()).collect();
        let mut inherited = Vec::new();

        for ancestor in self.ancestors(id) {
            for field in &ancestor.fields {
                if hidden.insert(field.name.as_str()) {
                    inherited.push((ancestor, field));
                }
            }
        }

        // ancestors are walked nearest-first, but output is root-first
        let mut ordered = Vec::with_capacity(inherited.len());
        for ancestor in self.ancestors(id).collect::<Vec<_>>().into_iter().rev() {
            ordered.extend(
                inherited
                    .iter()
                    .filter(|(owner, _)| owner.id == ancestor.id)
                    .copied(),
            );
        }

        ordered
    }

    /// Whether an ancestor of `id` declares a field called `name`.
    #[must_use]
    pub fn ancestor_declares(&self, id: EntityId, name: &str) -> bool {
        self.ancestors(id).any(|model| model.field(name).is_some())
    }
}

///
/// Ancestors
///

pub struct Ancestors<'a> {
    graph: &'a EntityGraph,
    next: Option<EntityId>,
    remaining: usize,
}

impl<'a> Iterator for Ancestors<'a> {
    type Item = &'a EntityModel;

    fn next(&mut self) -> Option<Self::Item> {
        // bounded by the arena size, so a corrupt chain cannot spin forever
        if self.remaining == 0 {
            return None;
        }
        self.remaining -= 1;

        let model = self.graph.get(self.next?)?;
        self.next = model.superclass;

        Some(model)
    }
}

///
/// TESTS
///
