use thiserror::Error as ThisError;

///
/// NameError
///

#[derive(Clone, Debug, Eq, PartialEq, ThisError)]
pub enum NameError {
    #[error("qualified name is empty")]
    Empty,

    #[error("'{name}' has an invalid segment '{segment}'")]
    InvalidSegment { name: String, segment: String },

    #[error("'{name}' is not inside package '{package}'")]
    PackageMismatch { name: String, package: String },
}

///
/// Diagnostic
///
/// A degradation recorded while assembling the entity graph. None of these
/// abort the pass; each one is reported to the caller alongside the graph.
///

#[derive(Clone, Debug, Eq, PartialEq, ThisError)]
pub enum Diagnostic {
    #[error("declaration '{name}' skipped: {reason}")]
    MalformedDeclaration { name: String, reason: String },

    #[error("declaration '{name}' skipped: already declared earlier in this pass")]
    DuplicateDeclaration { name: String },

    #[error(
        "superclass '{superclass}' of '{entity}' is not modeled; '{entity}' is generated without inheritance"
    )]
    SuperclassNotModeled { entity: String, superclass: String },

    #[error("superclass link '{entity}' -> '{superclass}' closes an inheritance cycle and was dropped")]
    InheritanceCycle { entity: String, superclass: String },
}

impl Diagnostic {
    /// Name of the declaration the diagnostic is about.
    #[must_use]
    pub fn subject(&self) -> &str {
        match self {
            Self::MalformedDeclaration { name, .. } | Self::DuplicateDeclaration { name } => name,
            Self::SuperclassNotModeled { entity, .. } | Self::InheritanceCycle { entity, .. } => {
                entity
            }
        }
    }

    /// True when the declaration was dropped rather than generated in a
    /// reduced form.
    #[must_use]
    pub const fn is_skip(&self) -> bool {
        matches!(
            self,
            Self::MalformedDeclaration { .. } | Self::DuplicateDeclaration { .. }
        )
    }
}
