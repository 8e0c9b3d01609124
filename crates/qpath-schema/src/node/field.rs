use crate::prelude::*;

///
/// Field
///

#[derive(Clone, Debug, Eq, PartialEq, Serialize)]
pub struct Field {
    pub name: String,
    pub ty: FieldType,
}

impl Field {
    #[must_use]
    pub fn new(name: impl Into<String>, ty: FieldType) -> Self {
        Self {
            name: name.into(),
            ty,
        }
    }
}

///
/// ScalarType
///
/// A recognized leaf. `class` is the handle after normalization (unsigned
/// types carry their signed counterpart); `element` is set for arrays only.
///

#[derive(Clone, Debug, Eq, PartialEq, Serialize)]
pub struct ScalarType {
    pub category: ScalarCategory,
    pub class: ClassName,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub element: Option<ClassName>,
}

impl ScalarType {
    #[must_use]
    pub const fn new(category: ScalarCategory, class: ClassName) -> Self {
        Self {
            category,
            class,
            element: None,
        }
    }

    #[must_use]
    pub const fn array(class: ClassName, element: ClassName) -> Self {
        Self {
            category: ScalarCategory::Array,
            class,
            element: Some(element),
        }
    }
}

///
/// ObjectRef
///
/// Reference to another modeled entity (possibly the declaring one).
/// `path_class` is the generated class standing in for it.
///

#[derive(Clone, Debug, Eq, PartialEq, Serialize)]
pub struct ObjectRef {
    pub entity: ClassName,
    pub path_class: ClassName,
    pub args: Vec<TypeName>,
}

///
/// FieldType
///

#[derive(Clone, Debug, Eq, PartialEq, Serialize)]
pub enum FieldType {
    Scalar(ScalarType),
    ListOf(Box<Self>),
    SetOf(Box<Self>),
    MapOf { key: Box<Self>, value: Box<Self> },
    EnumRef(ClassName),
    ObjectRef(ObjectRef),
    Unknown { class: ClassName, args: Vec<TypeName> },
}

impl FieldType {
    #[must_use]
    pub fn list_of(inner: Self) -> Self {
        Self::ListOf(Box::new(inner))
    }

    #[must_use]
    pub fn set_of(inner: Self) -> Self {
        Self::SetOf(Box::new(inner))
    }

    #[must_use]
    pub fn map_of(key: Self, value: Self) -> Self {
        Self::MapOf {
            key: Box::new(key),
            value: Box::new(value),
        }
    }

    #[must_use]
    pub const fn unknown(class: ClassName) -> Self {
        Self::Unknown {
            class,
            args: Vec::new(),
        }
    }

    /// Raw class of the declared type, used for `::class.java` handles.
    #[must_use]
    pub fn original_class(&self) -> ClassName {
        match self {
            Self::Scalar(scalar) => scalar.class.clone(),
            Self::ListOf(_) => ClassName::collections("List"),
            Self::SetOf(_) => ClassName::collections("Set"),
            Self::MapOf { .. } => ClassName::collections("Map"),
            Self::EnumRef(class) | Self::Unknown { class, .. } => class.clone(),
            Self::ObjectRef(object) => object.entity.clone(),
        }
    }

    /// Full declared type including type arguments.
    #[must_use]
    pub fn original_type(&self) -> TypeName {
        match self {
            Self::Scalar(scalar) => TypeName::Class(scalar.class.clone()),
            Self::ListOf(inner) => {
                TypeName::parameterized(self.original_class(), vec![inner.original_type()])
            }
            Self::SetOf(inner) => {
                TypeName::parameterized(self.original_class(), vec![inner.original_type()])
            }
            Self::MapOf { key, value } => TypeName::parameterized(
                self.original_class(),
                vec![key.original_type(), value.original_type()],
            ),
            Self::EnumRef(class) => TypeName::Class(class.clone()),
            Self::ObjectRef(object) => {
                TypeName::parameterized(object.entity.clone(), object.args.clone())
            }
            Self::Unknown { class, args } => TypeName::parameterized(class.clone(), args.clone()),
        }
    }

    /// Whether the generated property must be built on first access.
    #[must_use]
    pub const fn is_lazy(&self) -> bool {
        matches!(self, Self::ObjectRef(_))
    }

    #[must_use]
    pub const fn is_unknown(&self) -> bool {
        matches!(self, Self::Unknown { .. })
    }
}

///
/// TESTS
///
