use crate::{error::NameError, prelude::*, validate::naming::is_identifier};
use derive_more::{Display, FromStr};
use std::fmt;

///
/// ModelKind
///
/// The annotation family a declaration was collected under. Entity and
/// Superclass share a generated base type, Embeddable gets its own.
///

#[derive(
    Clone, Copy, Debug, Deserialize, Display, Eq, FromStr, Hash, Ord, PartialEq, PartialOrd, Serialize,
)]
#[serde(rename_all = "snake_case")]
#[remain::sorted]
pub enum ModelKind {
    Embeddable,
    Entity,
    Superclass,
}

impl ModelKind {
    #[must_use]
    pub const fn is_embeddable(self) -> bool {
        matches!(self, Self::Embeddable)
    }
}

///
/// ScalarCategory
///
/// Path representation assigned to a recognized leaf type.
///

#[derive(
    Clone, Copy, Debug, Deserialize, Display, Eq, FromStr, Hash, Ord, PartialEq, PartialOrd, Serialize,
)]
#[remain::sorted]
pub enum ScalarCategory {
    Array,
    BooleanPath,
    Comparable,
    Date,
    DateTime,
    Number,
    Simple,
    StringPath,
    Time,
}

impl ScalarCategory {
    #[must_use]
    pub const fn is_numeric(self) -> bool {
        matches!(self, Self::Number)
    }

    #[must_use]
    pub const fn is_temporal(self) -> bool {
        matches!(self, Self::Date | Self::DateTime | Self::Time)
    }

    // String and Boolean paths are created from the property name alone
    #[must_use]
    pub const fn takes_type_handle(self) -> bool {
        !matches!(self, Self::StringPath | Self::BooleanPath)
    }
}

///
/// ClassName
///
/// A package plus one or more simple names (more than one for nested
/// classes). The canonical form is `pkg.Outer.Inner`.
///

#[derive(Clone, Debug, Eq, Hash, Ord, PartialEq, PartialOrd, Serialize)]
pub struct ClassName {
    package: String,
    simple_names: Vec<String>,
}

impl ClassName {
    /// Build a top-level class name. Inputs are trusted; use [`Self::parse`]
    /// for host-provided text.
    #[must_use]
    pub fn new(package: impl Into<String>, simple_name: impl Into<String>) -> Self {
        Self {
            package: package.into(),
            simple_names: vec![simple_name.into()],
        }
    }

    /// A class in the `kotlin` package.
    #[must_use]
    pub fn kotlin(simple_name: &str) -> Self {
        Self::new("kotlin", simple_name)
    }

    /// A class in the `kotlin.collections` package.
    #[must_use]
    pub fn collections(simple_name: &str) -> Self {
        Self::new("kotlin.collections", simple_name)
    }

    #[must_use]
    pub fn any() -> Self {
        Self::kotlin("Any")
    }

    /// Parse a qualified name. When the package is known it separates the
    /// package from nested simple names, otherwise the split is at the last dot.
    pub fn parse(qualified: &str, package: Option<&str>) -> Result<Self, NameError> {
        if qualified.is_empty() {
            return Err(NameError::Empty);
        }

        let (package, rest) = match package {
            Some("") => ("", qualified),
            Some(package) => {
                let rest = qualified
                    .strip_prefix(package)
                    .and_then(|rest| rest.strip_prefix('.'))
                    .ok_or_else(|| NameError::PackageMismatch {
                        name: qualified.to_string(),
                        package: package.to_string(),
                    })?;

                (package, rest)
            }
            None => qualified.rsplit_once('.').unwrap_or(("", qualified)),
        };

        let segments = package
            .split('.')
            .filter(|_| !package.is_empty())
            .chain(rest.split('.'));
        for segment in segments {
            if !is_identifier(segment) {
                return Err(NameError::InvalidSegment {
                    name: qualified.to_string(),
                    segment: segment.to_string(),
                });
            }
        }

        Ok(Self {
            package: package.to_string(),
            simple_names: rest.split('.').map(str::to_string).collect(),
        })
    }

    #[must_use]
    pub fn package(&self) -> &str {
        &self.package
    }

    #[must_use]
    pub fn simple_names(&self) -> &[String] {
        &self.simple_names
    }

    /// Innermost simple name.
    #[must_use]
    pub fn simple_name(&self) -> &str {
        self.simple_names.last().map_or("", String::as_str)
    }

    /// The outermost enclosing class, which is what an import names.
    #[must_use]
    pub fn top_level(&self) -> Self {
        Self {
            package: self.package.clone(),
            simple_names: self.simple_names.iter().take(1).cloned().collect(),
        }
    }

    #[must_use]
    pub fn is_nested(&self) -> bool {
        self.simple_names.len() > 1
    }

    #[must_use]
    pub fn canonical(&self) -> String {
        self.to_string()
    }
}

impl fmt::Display for ClassName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if !self.package.is_empty() {
            write!(f, "{}.", self.package)?;
        }

        write!(f, "{}", self.simple_names.join("."))
    }
}

///
/// TypeName
///
/// An output-side reference to a type: a class, a parameterized class, a
/// star projection, or an `out` projection.
///

#[derive(Clone, Debug, Eq, Hash, PartialEq, Serialize)]
pub enum TypeName {
    Class(ClassName),
    Parameterized { raw: ClassName, args: Vec<Self> },
    Star,
    Out(Box<Self>),
}

impl TypeName {
    /// Parameterize `raw`, collapsing to a plain class when there are no args.
    #[must_use]
    pub fn parameterized(raw: ClassName, args: Vec<Self>) -> Self {
        if args.is_empty() {
            Self::Class(raw)
        } else {
            Self::Parameterized { raw, args }
        }
    }

    /// `raw<*, *, ...>` with `count` star projections.
    #[must_use]
    pub fn with_stars(raw: ClassName, count: usize) -> Self {
        Self::parameterized(raw, vec![Self::Star; count])
    }

    #[must_use]
    pub fn producer_of(inner: Self) -> Self {
        Self::Out(Box::new(inner))
    }

    #[must_use]
    pub fn raw_class(&self) -> Option<&ClassName> {
        match self {
            Self::Class(class) | Self::Parameterized { raw: class, .. } => Some(class),
            Self::Out(inner) => inner.raw_class(),
            Self::Star => None,
        }
    }

    /// Visit every class mentioned anywhere in this type.
    pub fn for_each_class<F: FnMut(&ClassName)>(&self, f: &mut F) {
        match self {
            Self::Class(class) => f(class),
            Self::Parameterized { raw, args } => {
                f(raw);
                for arg in args {
                    arg.for_each_class(f);
                }
            }
            Self::Out(inner) => inner.for_each_class(f),
            Self::Star => {}
        }
    }
}

impl From<ClassName> for TypeName {
    fn from(class: ClassName) -> Self {
        Self::Class(class)
    }
}

impl fmt::Display for TypeName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Class(class) => write!(f, "{class}"),
            Self::Parameterized { raw, args } => {
                write!(f, "{raw}<")?;
                for (i, arg) in args.iter().enumerate() {
                    if i > 0 {
                        write!(f, ", ")?;
                    }
                    write!(f, "{arg}")?;
                }
                write!(f, ">")
            }
            Self::Star => write!(f, "*"),
            Self::Out(inner) => write!(f, "out {inner}"),
        }
    }
}

///
/// TESTS
///
