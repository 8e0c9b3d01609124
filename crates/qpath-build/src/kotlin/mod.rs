//! A small Kotlin code model: declarations are built as values and only
//! turned into text by [`FileSpec::render`], which also works out imports.

mod code;
mod file;
mod reserved;
mod spec;

pub use code::{CodeBlock, Part};
pub use file::FileSpec;
pub use reserved::{identifier, is_keyword, string_literal};
pub use spec::{
    ConstructorSpec, DeclKind, Initializer, Modifier, ParameterSpec, PropertySpec, TypeSpec,
};
