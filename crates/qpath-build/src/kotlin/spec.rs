use crate::kotlin::CodeBlock;
use qpath_schema::prelude::*;

///
/// Modifier
///

#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum Modifier {
    Public,
    Private,
    Override,
}

impl Modifier {
    #[must_use]
    pub const fn keyword(self) -> &'static str {
        match self {
            Self::Public => "public",
            Self::Private => "private",
            Self::Override => "override",
        }
    }
}

///
/// Initializer
///

#[derive(Clone, Debug, Eq, PartialEq)]
pub enum Initializer {
    /// `= expr`
    Value(CodeBlock),

    /// `by lazy { expr }`
    Lazy(CodeBlock),

    /// `get() = expr` on the following line
    Getter(CodeBlock),
}

impl Initializer {
    #[must_use]
    pub const fn code(&self) -> &CodeBlock {
        match self {
            Self::Value(code) | Self::Lazy(code) | Self::Getter(code) => code,
        }
    }
}

///
/// PropertySpec
///

#[derive(Clone, Debug, Eq, PartialEq)]
pub struct PropertySpec {
    pub name: String,
    pub ty: TypeName,
    pub modifiers: Vec<Modifier>,
    pub annotations: Vec<ClassName>,
    pub initializer: Option<Initializer>,
}

impl PropertySpec {
    #[must_use]
    pub fn new(name: impl Into<String>, ty: impl Into<TypeName>) -> Self {
        Self {
            name: name.into(),
            ty: ty.into(),
            modifiers: Vec::new(),
            annotations: Vec::new(),
            initializer: None,
        }
    }

    #[must_use]
    pub fn modifier(mut self, modifier: Modifier) -> Self {
        self.modifiers.push(modifier);
        self
    }

    #[must_use]
    pub fn annotation(mut self, class: ClassName) -> Self {
        self.annotations.push(class);
        self
    }

    #[must_use]
    pub fn initializer(mut self, initializer: Initializer) -> Self {
        self.initializer = Some(initializer);
        self
    }

    pub fn for_each_class<F: FnMut(&ClassName)>(&self, f: &mut F) {
        for class in &self.annotations {
            f(class);
        }
        self.ty.for_each_class(f);
        if let Some(init) = &self.initializer {
            init.code().for_each_class(f);
        }
    }
}

///
/// ParameterSpec
///

#[derive(Clone, Debug, Eq, PartialEq)]
pub struct ParameterSpec {
    pub name: String,
    pub ty: TypeName,
}

impl ParameterSpec {
    #[must_use]
    pub fn new(name: impl Into<String>, ty: impl Into<TypeName>) -> Self {
        Self {
            name: name.into(),
            ty: ty.into(),
        }
    }
}

///
/// ConstructorSpec
///
/// A secondary constructor that delegates to the primary one with
/// `: this(delegate)`.
///

#[derive(Clone, Debug, Eq, PartialEq)]
pub struct ConstructorSpec {
    pub params: Vec<ParameterSpec>,
    pub delegate: Vec<CodeBlock>,
}

impl ConstructorSpec {
    #[must_use]
    pub fn new<P, D>(params: P, delegate: D) -> Self
    where
        P: IntoIterator<Item = ParameterSpec>,
        D: IntoIterator<Item = CodeBlock>,
    {
        Self {
            params: params.into_iter().collect(),
            delegate: delegate.into_iter().collect(),
        }
    }
}

///
/// DeclKind
///

#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum DeclKind {
    Interface,
    Class,
    Companion,
}

///
/// TypeSpec
///

#[derive(Clone, Debug, Eq, PartialEq)]
pub struct TypeSpec {
    pub kind: DeclKind,
    pub name: String,
    pub primary: Vec<ParameterSpec>,
    pub superclass: Option<(TypeName, Vec<CodeBlock>)>,
    pub superinterfaces: Vec<TypeName>,
    pub properties: Vec<PropertySpec>,
    pub constructors: Vec<ConstructorSpec>,
    pub companion: Option<Box<Self>>,
}

impl TypeSpec {
    fn new(kind: DeclKind, name: impl Into<String>) -> Self {
        Self {
            kind,
            name: name.into(),
            primary: Vec::new(),
            superclass: None,
            superinterfaces: Vec::new(),
            properties: Vec::new(),
            constructors: Vec::new(),
            companion: None,
        }
    }

    #[must_use]
    pub fn interface(name: impl Into<String>) -> Self {
        Self::new(DeclKind::Interface, name)
    }

    #[must_use]
    pub fn class(name: impl Into<String>) -> Self {
        Self::new(DeclKind::Class, name)
    }

    #[must_use]
    pub fn companion() -> Self {
        Self::new(DeclKind::Companion, String::new())
    }

    #[must_use]
    pub fn primary_parameter(mut self, param: ParameterSpec) -> Self {
        self.primary.push(param);
        self
    }

    #[must_use]
    pub fn superclass<I>(mut self, ty: TypeName, args: I) -> Self
    where
        I: IntoIterator<Item = CodeBlock>,
    {
        self.superclass = Some((ty, args.into_iter().collect()));
        self
    }

    #[must_use]
    pub fn superinterface(mut self, ty: impl Into<TypeName>) -> Self {
        self.superinterfaces.push(ty.into());
        self
    }

    #[must_use]
    pub fn property(mut self, property: PropertySpec) -> Self {
        self.properties.push(property);
        self
    }

    #[must_use]
    pub fn constructor(mut self, constructor: ConstructorSpec) -> Self {
        self.constructors.push(constructor);
        self
    }

    #[must_use]
    pub fn with_companion(mut self, companion: Self) -> Self {
        self.companion = Some(Box::new(companion));
        self
    }

    #[must_use]
    pub fn property_named(&self, name: &str) -> Option<&PropertySpec> {
        self.properties.iter().find(|p| p.name == name)
    }

    /// Visit every class this declaration mentions.
    pub fn for_each_class<F: FnMut(&ClassName)>(&self, f: &mut F) {
        for param in &self.primary {
            param.ty.for_each_class(f);
        }
        if let Some((ty, args)) = &self.superclass {
            ty.for_each_class(f);
            for arg in args {
                arg.for_each_class(f);
            }
        }
        for ty in &self.superinterfaces {
            ty.for_each_class(f);
        }
        for property in &self.properties {
            property.for_each_class(f);
        }
        for constructor in &self.constructors {
            for param in &constructor.params {
                param.ty.for_each_class(f);
            }
            for arg in &constructor.delegate {
                arg.for_each_class(f);
            }
        }
        if let Some(companion) = &self.companion {
            companion.for_each_class(f);
        }
    }
}
