//! Declaration records as handed over by the host. They are already resolved
//! and type-checked; nothing here looks anything up.

use crate::{prelude::*, types::ClassName};
use derive_more::{Display, From};

///
/// SourceToken
///
/// Opaque provenance handle the host uses to track which source file a
/// generated file depends on.
///

#[derive(Clone, Debug, Deserialize, Display, Eq, From, Hash, Ord, PartialEq, PartialOrd, Serialize)]
#[serde(transparent)]
pub struct SourceToken(String);

impl SourceToken {
    #[must_use]
    pub fn new(token: impl Into<String>) -> Self {
        Self(token.into())
    }

    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl From<&str> for SourceToken {
    fn from(token: &str) -> Self {
        Self::new(token)
    }
}

///
/// Declaration
///

#[derive(Clone, Debug, Deserialize, Eq, PartialEq, Serialize)]
pub struct Declaration {
    /// Qualified identity, e.g. `com.example.Person`.
    pub name: String,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub package: Option<String>,

    pub kind: ModelKind,

    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub fields: Vec<FieldDecl>,

    /// Qualified identity of the recorded superclass, if it is itself modeled.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub superclass: Option<String>,

    #[serde(default)]
    pub type_params: usize,

    pub source: SourceToken,
}

impl Declaration {
    #[must_use]
    pub fn new(name: impl Into<String>, kind: ModelKind, source: impl Into<SourceToken>) -> Self {
        Self {
            name: name.into(),
            package: None,
            kind,
            fields: Vec::new(),
            superclass: None,
            type_params: 0,
            source: source.into(),
        }
    }

    #[must_use]
    pub fn entity(name: impl Into<String>, source: impl Into<SourceToken>) -> Self {
        Self::new(name, ModelKind::Entity, source)
    }

    #[must_use]
    pub fn with_package(mut self, package: impl Into<String>) -> Self {
        self.package = Some(package.into());
        self
    }

    #[must_use]
    pub fn with_field(mut self, name: impl Into<String>, ty: TypeRef) -> Self {
        self.fields.push(FieldDecl {
            name: name.into(),
            ty,
        });
        self
    }

    #[must_use]
    pub fn with_superclass(mut self, superclass: impl Into<String>) -> Self {
        self.superclass = Some(superclass.into());
        self
    }

    #[must_use]
    pub const fn with_type_params(mut self, count: usize) -> Self {
        self.type_params = count;
        self
    }

    pub fn class_name(&self) -> Result<ClassName, NameError> {
        ClassName::parse(&self.name, self.package.as_deref())
    }
}

///
/// FieldDecl
///

#[derive(Clone, Debug, Deserialize, Eq, PartialEq, Serialize)]
pub struct FieldDecl {
    pub name: String,
    pub ty: TypeRef,
}

///
/// TypeKind
///

#[derive(Clone, Copy, Debug, Default, Deserialize, Eq, Hash, PartialEq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum TypeKind {
    #[default]
    Class,
    Enum,
    TypeParameter,
}

///
/// TypeRef
///
/// Declared type of a field. `name` is the qualified class name, `*` for a
/// star projection, or the bare name of a type parameter.
///

#[derive(Clone, Debug, Deserialize, Eq, PartialEq, Serialize)]
pub struct TypeRef {
    pub name: String,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub package: Option<String>,

    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub args: Vec<Self>,

    #[serde(default)]
    pub kind: TypeKind,
}

impl TypeRef {
    pub const STAR: &'static str = "*";

    #[must_use]
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            package: None,
            args: Vec::new(),
            kind: TypeKind::Class,
        }
    }

    #[must_use]
    pub fn of(name: impl Into<String>, args: impl IntoIterator<Item = Self>) -> Self {
        Self {
            args: args.into_iter().collect(),
            ..Self::new(name)
        }
    }

    #[must_use]
    pub fn enumeration(name: impl Into<String>) -> Self {
        Self {
            kind: TypeKind::Enum,
            ..Self::new(name)
        }
    }

    #[must_use]
    pub fn type_parameter(name: impl Into<String>) -> Self {
        Self {
            kind: TypeKind::TypeParameter,
            ..Self::new(name)
        }
    }

    #[must_use]
    pub fn star() -> Self {
        Self::new(Self::STAR)
    }

    #[must_use]
    pub fn with_package(mut self, package: impl Into<String>) -> Self {
        self.package = Some(package.into());
        self
    }

    #[must_use]
    pub fn is_star(&self) -> bool {
        self.name == Self::STAR
    }

    pub fn class_name(&self) -> Result<ClassName, NameError> {
        ClassName::parse(&self.name, self.package.as_deref())
    }

    /// Nesting depth of type arguments; a plain class is depth 1.
    #[must_use]
    pub fn depth(&self) -> usize {
        1 + self.args.iter().map(Self::depth).max().unwrap_or(0)
    }
}

///
/// TESTS
///
