use qpath_schema::prelude::*;

///
/// Part
///
/// One piece of an expression. Types are kept symbolic until the file is
/// written so the import pass can decide how each one is spelled.
///

#[derive(Clone, Debug, Eq, PartialEq)]
pub enum Part {
    Text(String),
    Type(TypeName),
    Ident(String),
    Str(String),
}

///
/// CodeBlock
///

#[derive(Clone, Debug, Default, Eq, PartialEq)]
pub struct CodeBlock {
    parts: Vec<Part>,
}

impl CodeBlock {
    #[must_use]
    pub const fn new() -> Self {
        Self { parts: Vec::new() }
    }

    #[must_use]
    pub fn text(mut self, text: impl Into<String>) -> Self {
        self.parts.push(Part::Text(text.into()));
        self
    }

    #[must_use]
    pub fn ty(mut self, ty: impl Into<TypeName>) -> Self {
        self.parts.push(Part::Type(ty.into()));
        self
    }

    #[must_use]
    pub fn ident(mut self, name: impl Into<String>) -> Self {
        self.parts.push(Part::Ident(name.into()));
        self
    }

    #[must_use]
    pub fn string(mut self, value: impl Into<String>) -> Self {
        self.parts.push(Part::Str(value.into()));
        self
    }

    /// `X::class.java`, or `X::class.javaObjectType` for the boxed handle.
    #[must_use]
    pub fn class_literal(self, class: ClassName, boxed: bool) -> Self {
        let suffix = if boxed {
            "::class.javaObjectType"
        } else {
            "::class.java"
        };

        self.ty(class).text(suffix)
    }

    /// Append a parenthesized, comma-separated argument list.
    #[must_use]
    pub fn args<I>(mut self, args: I) -> Self
    where
        I: IntoIterator<Item = Self>,
    {
        self = self.text("(");
        for (i, arg) in args.into_iter().enumerate() {
            if i > 0 {
                self = self.text(", ");
            }
            self.parts.extend(arg.parts);
        }

        self.text(")")
    }

    /// `name(args...)` for a plain function name.
    #[must_use]
    pub fn call<I>(self, function: &str, args: I) -> Self
    where
        I: IntoIterator<Item = Self>,
    {
        self.text(function).args(args)
    }

    #[must_use]
    pub fn parts(&self) -> &[Part] {
        &self.parts
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.parts.is_empty()
    }

    pub fn for_each_class<F: FnMut(&ClassName)>(&self, f: &mut F) {
        for part in &self.parts {
            if let Part::Type(ty) = part {
                ty.for_each_class(f);
            }
        }
    }
}

///
/// TESTS
///
