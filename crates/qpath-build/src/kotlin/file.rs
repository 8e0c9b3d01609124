use crate::kotlin::{
    CodeBlock, DeclKind, Initializer, Part, PropertySpec, TypeSpec, identifier, string_literal,
};
use qpath_schema::prelude::*;
use std::collections::{BTreeMap, BTreeSet};

// packages every Kotlin/JVM file sees without an import
const DEFAULT_IMPORTS: &[&str] = &[
    "java.lang",
    "kotlin",
    "kotlin.annotation",
    "kotlin.collections",
    "kotlin.comparisons",
    "kotlin.io",
    "kotlin.jvm",
    "kotlin.ranges",
    "kotlin.sequences",
    "kotlin.text",
];

///
/// FileSpec
///
/// One Kotlin source file. Imports are derived from the declarations when the
/// file is rendered.
///

#[derive(Clone, Debug, Eq, PartialEq)]
pub struct FileSpec {
    pub package: String,
    pub name: String,
    pub types: Vec<TypeSpec>,

    /// Simple names of other top-level classes in the file's package. They
    /// shadow default imports, so a default-imported class with one of these
    /// names must be written qualified.
    pub package_names: BTreeSet<String>,
}

impl FileSpec {
    #[must_use]
    pub fn new(package: impl Into<String>, name: impl Into<String>) -> Self {
        Self {
            package: package.into(),
            name: name.into(),
            types: Vec::new(),
            package_names: BTreeSet::new(),
        }
    }

    #[must_use]
    pub fn with_type(mut self, ty: TypeSpec) -> Self {
        self.types.push(ty);
        self
    }

    #[must_use]
    pub fn with_package_names<I, S>(mut self, names: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.package_names.extend(names.into_iter().map(Into::into));
        self
    }

    /// Render the file, indenting one level with `indent`.
    #[must_use]
    pub fn render(&self, indent: &str) -> String {
        let imports = Imports::resolve(self);
        let mut w = Writer {
            out: String::new(),
            indent,
            level: 0,
            imports: &imports,
        };

        if !self.package.is_empty() {
            w.line(&format!("package {}", package_path(&self.package)));
            w.blank();
        }

        if !imports.imports.is_empty() {
            for import in &imports.imports {
                w.line(&format!("import {import}"));
            }
            w.blank();
        }

        for (i, ty) in self.types.iter().enumerate() {
            if i > 0 {
                w.blank();
            }
            w.type_spec(ty);
        }

        w.out
    }
}

// package_path
// package segments that are keywords must be quoted too
fn package_path(package: &str) -> String {
    package
        .split('.')
        .map(identifier)
        .collect::<Vec<_>>()
        .join(".")
}

///
/// Imports
///
/// Decides how each referenced top-level class is spelled. A simple name
/// shared by more than one referenced class is written fully qualified,
/// except for the one that lives in the file's own package. A default-imported
/// class shadowed by a same-package name is qualified as well.
///

#[derive(Debug, Default)]
pub(crate) struct Imports {
    short: BTreeSet<ClassName>,
    imports: BTreeSet<String>,
}

impl Imports {
    pub(crate) fn resolve(file: &FileSpec) -> Self {
        let mut referenced = BTreeSet::new();
        for ty in &file.types {
            referenced.insert(ClassName::new(file.package.clone(), ty.name.clone()));
            ty.for_each_class(&mut |class| {
                referenced.insert(class.top_level());
            });
        }

        let mut by_simple: BTreeMap<String, Vec<ClassName>> = BTreeMap::new();
        for class in referenced {
            by_simple
                .entry(class.simple_name().to_string())
                .or_default()
                .push(class);
        }

        let mut imports = Self::default();
        for classes in by_simple.into_values() {
            if let [class] = classes.as_slice() {
                if is_shadowed(class, file) {
                    continue;
                }
                if needs_import(class, &file.package) {
                    imports.imports.insert(import_path(class));
                }
                imports.short.insert(class.clone());
            } else if let Some(local) = classes.iter().find(|c| c.package() == file.package) {
                imports.short.insert(local.clone());
            }
        }

        imports
    }

    fn spell(&self, class: &ClassName) -> String {
        let names = class.simple_names().iter().map(|n| identifier(n));

        if self.short.contains(&class.top_level()) {
            names.collect::<Vec<_>>().join(".")
        } else {
            std::iter::once(package_path(class.package()))
                .filter(|p| !p.is_empty())
                .chain(names)
                .collect::<Vec<_>>()
                .join(".")
        }
    }
}

// is_shadowed
// same-package declarations win over default imports, explicit imports win
// over both
fn is_shadowed(class: &ClassName, file: &FileSpec) -> bool {
    DEFAULT_IMPORTS.contains(&class.package())
        && class.package() != file.package
        && file.package_names.contains(class.simple_name())
}

fn needs_import(class: &ClassName, package: &str) -> bool {
    !class.package().is_empty()
        && class.package() != package
        && !DEFAULT_IMPORTS.contains(&class.package())
}

fn import_path(class: &ClassName) -> String {
    format!(
        "{}.{}",
        package_path(class.package()),
        identifier(class.simple_name())
    )
}

///
/// Writer
///

struct Writer<'a> {
    out: String,
    indent: &'a str,
    level: usize,
    imports: &'a Imports,
}

impl Writer<'_> {
    fn line(&mut self, text: &str) {
        for _ in 0..self.level {
            self.out.push_str(self.indent);
        }
        self.out.push_str(text);
        self.out.push('\n');
    }

    fn blank(&mut self) {
        self.out.push('\n');
    }

    fn type_name(&self, ty: &TypeName) -> String {
        match ty {
            TypeName::Class(class) => self.imports.spell(class),
            TypeName::Parameterized { raw, args } => {
                let args: Vec<_> = args.iter().map(|arg| self.type_name(arg)).collect();
                format!("{}<{}>", self.imports.spell(raw), args.join(", "))
            }
            TypeName::Star => "*".to_string(),
            TypeName::Out(inner) => format!("out {}", self.type_name(inner)),
        }
    }

    fn code(&self, block: &CodeBlock) -> String {
        block
            .parts()
            .iter()
            .map(|part| match part {
                Part::Text(text) => text.clone(),
                Part::Type(ty) => self.type_name(ty),
                Part::Ident(name) => identifier(name),
                Part::Str(value) => string_literal(value),
            })
            .collect()
    }

    fn code_list(&self, blocks: &[CodeBlock]) -> String {
        blocks
            .iter()
            .map(|block| self.code(block))
            .collect::<Vec<_>>()
            .join(", ")
    }

    fn type_spec(&mut self, ty: &TypeSpec) {
        let header = match ty.kind {
            DeclKind::Interface => format!("public interface {}", identifier(&ty.name)),
            DeclKind::Class => format!("public class {}", identifier(&ty.name)),
            DeclKind::Companion => "public companion object".to_string(),
        };

        let mut supertypes = Vec::new();
        if let Some((superclass, args)) = &ty.superclass {
            supertypes.push(format!(
                "{}({})",
                self.type_name(superclass),
                self.code_list(args)
            ));
        }
        supertypes.extend(ty.superinterfaces.iter().map(|i| self.type_name(i)));
        let supertypes = if supertypes.is_empty() {
            String::new()
        } else {
            format!(" : {}", supertypes.join(", "))
        };

        let has_body =
            !ty.properties.is_empty() || !ty.constructors.is_empty() || ty.companion.is_some();
        let open = if has_body { " {" } else { "" };

        if ty.primary.is_empty() {
            self.line(&format!("{header}{supertypes}{open}"));
        } else {
            self.line(&format!("{header}("));
            self.level += 1;
            for param in &ty.primary {
                let param = format!("{}: {},", identifier(&param.name), self.type_name(&param.ty));
                self.line(&param);
            }
            self.level -= 1;
            self.line(&format!("){supertypes}{open}"));
        }

        if !has_body {
            return;
        }

        self.level += 1;
        for property in &ty.properties {
            self.property(property);
        }
        for (i, constructor) in ty.constructors.iter().enumerate() {
            if i > 0 || !ty.properties.is_empty() {
                self.blank();
            }
            let params: Vec<_> = constructor
                .params
                .iter()
                .map(|p| format!("{}: {}", identifier(&p.name), self.type_name(&p.ty)))
                .collect();
            let line = format!(
                "public constructor({}) : this({})",
                params.join(", "),
                self.code_list(&constructor.delegate)
            );
            self.line(&line);
        }
        if let Some(companion) = &ty.companion {
            if !ty.properties.is_empty() || !ty.constructors.is_empty() {
                self.blank();
            }
            self.type_spec(companion);
        }
        self.level -= 1;

        self.line("}");
    }

    fn property(&mut self, property: &PropertySpec) {
        for annotation in &property.annotations {
            let line = format!("@{}", self.imports.spell(annotation));
            self.line(&line);
        }

        let mut decl = String::new();
        for modifier in &property.modifiers {
            decl.push_str(modifier.keyword());
            decl.push(' ');
        }
        decl.push_str(&format!(
            "val {}: {}",
            identifier(&property.name),
            self.type_name(&property.ty)
        ));

        match &property.initializer {
            None => self.line(&decl),
            Some(Initializer::Value(code)) => {
                let line = format!("{decl} = {}", self.code(code));
                self.line(&line);
            }
            Some(Initializer::Lazy(code)) => {
                let line = format!("{decl} by lazy {{ {} }}", self.code(code));
                self.line(&line);
            }
            Some(Initializer::Getter(code)) => {
                self.line(&decl);
                self.level += 1;
                let line = format!("get() = {}", self.code(code));
                self.line(&line);
                self.level -= 1;
            }
        }
    }
}

///
/// TESTS
///
