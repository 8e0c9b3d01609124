//! Declaration records, the entity model, and the passes that turn one into
//! the other: inclusion policy, field-type classification, and the two-pass
//! assembler that links superclasses into an [`EntityGraph`](node::EntityGraph).

pub mod build;
pub mod decl;
pub mod error;
pub mod node;
pub mod types;
pub mod validate;

/// Maximum depth of nested type arguments accepted on a declared field type.
pub const MAX_TYPE_DEPTH: usize = 32;

/// Name of the generated back-reference to the superclass path. No declared
/// field may use it, since a subclass would end up with two members of that
/// name.
pub const SUPER_FIELD: &str = "_super";

///
/// Prelude
///

pub mod prelude {
    pub use crate::{
        build::{Assembly, Classifier, InclusionPolicy, Naming, Verdict, assemble},
        decl::{Declaration, FieldDecl, SourceToken, TypeKind, TypeRef},
        error::{Diagnostic, NameError},
        node::*,
        types::{ClassName, ModelKind, ScalarCategory, TypeName},
    };
    pub use serde::{Deserialize, Serialize};
}
