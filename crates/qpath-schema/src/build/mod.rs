pub mod classify;
pub mod extract;
pub mod naming;

pub use classify::Classifier;
pub use extract::{InclusionPolicy, Verdict};
pub use naming::Naming;

use crate::{prelude::*, validate::validate_declaration};
use std::collections::HashMap;
use tracing::{debug, warn};

///
/// Assembly
///
/// A finished entity graph plus every degradation recorded while building it.
///

#[derive(Debug, Default)]
pub struct Assembly {
    pub graph: EntityGraph,
    pub diagnostics: Vec<Diagnostic>,
}

impl Assembly {
    fn diagnose(&mut self, diagnostic: Diagnostic) {
        warn!(subject = diagnostic.subject(), "{diagnostic}");
        self.diagnostics.push(diagnostic);
    }
}

/// Build the entity graph for one pass from the policy-filtered candidates.
///
/// Candidates keep their first-seen order. Malformed and duplicate
/// declarations are skipped; superclass links that cannot be resolved are
/// dropped. Both are reported as diagnostics rather than errors.
#[must_use]
pub fn assemble(candidates: Vec<Declaration>, naming: &Naming) -> Assembly {
    let mut assembly = Assembly::default();

    // pass 0: validate and dedupe, collecting the identities being modeled
    let mut accepted: Vec<(Declaration, ClassName)> = Vec::with_capacity(candidates.len());
    let mut models: HashMap<String, ClassName> = HashMap::new();

    for decl in candidates {
        match validate_declaration(&decl) {
            Ok(class) => {
                let key = class.canonical();
                if models.contains_key(&key) {
                    assembly.diagnose(Diagnostic::DuplicateDeclaration { name: decl.name });
                    continue;
                }

                models.insert(key, class.clone());
                accepted.push((decl, class));
            }
            Err(reason) => {
                assembly.diagnose(Diagnostic::MalformedDeclaration {
                    name: decl.name,
                    reason,
                });
            }
        }
    }

    // pass 1: shells with classified fields, superclass unresolved
    let classifier = Classifier::new(&models, naming);
    let mut pending: Vec<(EntityId, String)> = Vec::new();

    for (decl, class) in accepted {
        let fields = decl
            .fields
            .iter()
            .map(|field| Field::new(field.name.clone(), classifier.classify(&field.ty)))
            .collect();

        let model = EntityModel {
            id: EntityId::new(0),
            class_name: naming.class_name(&class),
            interface_name: naming.interface_name(&class),
            name: class,
            kind: decl.kind,
            type_params: decl.type_params,
            fields,
            superclass: None,
            source: decl.source,
        };

        match assembly.graph.insert(model) {
            Ok(id) => {
                if let Some(superclass) = decl.superclass {
                    pending.push((id, superclass));
                }
            }
            Err(_) => assembly.diagnose(Diagnostic::DuplicateDeclaration { name: decl.name }),
        }
    }

    // pass 2: resolve superclasses against the full shell set
    for (id, superclass) in pending {
        let Some(entity) = assembly.graph.get(id).map(|m| m.name.canonical()) else {
            continue;
        };

        match assembly.graph.id_of(&superclass) {
            None => assembly.diagnose(Diagnostic::SuperclassNotModeled { entity, superclass }),
            Some(sup) if assembly.graph.would_cycle(id, sup) => {
                assembly.diagnose(Diagnostic::InheritanceCycle { entity, superclass });
            }
            Some(sup) => assembly.graph.link(id, sup),
        }
    }

    for model in assembly.graph.iter() {
        debug!(
            entity = %model.name,
            kind = %model.kind,
            fields = model.fields.len(),
            superclass = ?assembly.graph.superclass(model).map(|s| s.name.canonical()),
            "assembled entity model"
        );
    }

    assembly
}

///
/// TESTS
///
