//! Kotlin source generation for an assembled [`EntityGraph`]: one file per
//! entity holding its capability interface and its QueryDSL path class.

pub mod kotlin;
mod paths;
mod render;

pub use render::{RenderedModel, SUPER_FIELD, default_instance_name, render};

use qpath_schema::prelude::*;
use std::path::PathBuf;
use tracing::debug;

/// Indentation used when none is configured.
pub const DEFAULT_INDENT: &str = "    ";

///
/// GeneratedFile
///
/// A rendered source file plus the provenance the host needs for
/// incremental rebuilds.
///

#[derive(Clone, Debug, Eq, PartialEq)]
pub struct GeneratedFile {
    pub package: String,
    pub name: String,
    pub contents: String,
    pub originating: Vec<SourceToken>,
    pub aggregating: bool,
}

impl GeneratedFile {
    /// `com/example/QPerson.kt` for `com.example.QPerson`.
    #[must_use]
    pub fn relative_path(&self) -> PathBuf {
        let mut path: PathBuf = self
            .package
            .split('.')
            .filter(|segment| !segment.is_empty())
            .collect();
        path.push(format!("{}.kt", self.name));

        path
    }
}

/// Render every model of the graph, in graph order.
#[must_use]
pub fn generate(graph: &EntityGraph, indent: &str) -> Vec<GeneratedFile> {
    SourceBuilder::new(graph, indent).generate()
}

///
/// SourceBuilder
///

pub struct SourceBuilder<'a> {
    graph: &'a EntityGraph,
    indent: &'a str,
}

impl<'a> SourceBuilder<'a> {
    #[must_use]
    pub const fn new(graph: &'a EntityGraph, indent: &'a str) -> Self {
        Self { graph, indent }
    }

    #[must_use]
    pub fn generate(&self) -> Vec<GeneratedFile> {
        self.graph.iter().map(|model| self.file(model)).collect()
    }

    #[must_use]
    pub fn file(&self, model: &EntityModel) -> GeneratedFile {
        let spec = render(self.graph, model)
            .into_file(model)
            .with_package_names(self.package_names(model.class_name.package()));
        let contents = spec.render(self.indent);

        debug!(
            entity = %model.name,
            file = %model.class_name,
            bytes = contents.len(),
            "rendered path class"
        );

        GeneratedFile {
            package: spec.package,
            name: spec.name,
            contents,
            originating: self.originating(model),
            aggregating: false,
        }
    }

    /// Simple names every model contributes to `package`: the entity itself
    /// and its generated class and interface.
    #[must_use]
    pub fn package_names(&self, package: &str) -> Vec<String> {
        self.graph
            .iter()
            .flat_map(|model| [&model.name, &model.class_name, &model.interface_name])
            .filter(|class| class.package() == package)
            .map(|class| class.top_level().simple_name().to_string())
            .collect()
    }

    /// The model's own source followed by every ancestor's, without repeats.
    #[must_use]
    pub fn originating(&self, model: &EntityModel) -> Vec<SourceToken> {
        let mut tokens = vec![model.source.clone()];
        for ancestor in self.graph.ancestors(model.id) {
            if !tokens.contains(&ancestor.source) {
                tokens.push(ancestor.source.clone());
            }
        }

        tokens
    }
}

///
/// TESTS
///

#[cfg(test)]
mod tests {
    use super::*;

    fn person() -> Declaration {
        Declaration::entity("com.example.Person", "Person.kt")
            .with_field("name", TypeRef::new("kotlin.String"))
            .with_field("age", TypeRef::new("kotlin.Int"))
    }

    fn graph(decls: Vec<Declaration>) -> EntityGraph {
        let assembly = assemble(decls, &Naming::default());
        assert!(assembly.diagnostics.is_empty(), "{:?}", assembly.diagnostics);

        assembly.graph
    }

    #[test]
    fn person_renders_interface_and_class() {
        let files = generate(&graph(vec![person()]), DEFAULT_INDENT);

        let expected = r#"package com.example

import com.querydsl.core.types.Path
import com.querydsl.core.types.PathMetadata
import com.querydsl.core.types.PathMetadataFactory
import com.querydsl.core.types.dsl.EntityPathBase
import com.querydsl.core.types.dsl.NumberPath
import com.querydsl.core.types.dsl.StringPath

public interface IQPerson {
    public val name: StringPath
    public val age: NumberPath<Int>
}

public class QPerson(
    type: Class<out Person>,
    metadata: PathMetadata,
) : EntityPathBase<Person>(type, metadata), IQPerson {
    override val name: StringPath = createString("name")
    override val age: NumberPath<Int> = createNumber("age", Int::class.javaObjectType)

    public constructor(path: Path<out Person>) : this(path.type, path.metadata)

    public constructor(metadata: PathMetadata) : this(Person::class.java, metadata)

    public constructor(variable: String) : this(Person::class.java, PathMetadataFactory.forVariable(variable))

    public companion object {
        @JvmField
        public val person: QPerson = QPerson("person")
    }
}
"#;

        assert_eq!(files.len(), 1);
        assert_eq!(files[0].contents, expected);
        assert_eq!(files[0].name, "QPerson");
        assert!(!files[0].aggregating);
    }

    #[test]
    fn embeddables_and_generics_pick_their_base() {
        let address = Declaration::new("com.example.Address", ModelKind::Embeddable, "Address.kt")
            .with_field("city", TypeRef::new("kotlin.String"));
        let boxed = Declaration::entity("com.example.Box", "Box.kt")
            .with_type_params(2)
            .with_field("label", TypeRef::new("kotlin.String"));

        let files = generate(&graph(vec![address, boxed]), DEFAULT_INDENT);

        let (address, boxed) = (&files[0].contents, &files[1].contents);

        assert!(address.contains(") : BeanPath<Address>(type, metadata), IQAddress {"));
        assert!(boxed.contains("    type: Class<out Box<*, *>>,\n"));
        assert!(boxed.contains(") : EntityPathBase<Box<*, *>>(type, metadata), IQBox {"));
        assert!(boxed.contains("public constructor(path: Path<out Box<*, *>>)"));
    }

    #[test]
    fn originating_tokens_follow_the_ancestor_chain() {
        let base = Declaration::entity("com.example.Base", "Base.kt");
        let middle = Declaration::entity("com.example.Middle", "Shared.kt")
            .with_superclass("com.example.Base");
        let leaf = Declaration::entity("com.example.Leaf", "Shared.kt")
            .with_superclass("com.example.Middle");

        let graph = graph(vec![base, middle, leaf]);
        let builder = SourceBuilder::new(&graph, DEFAULT_INDENT);
        let leaf = graph.lookup("com.example.Leaf").unwrap();

        let tokens: Vec<_> = builder
            .originating(leaf)
            .iter()
            .map(|t| t.as_str().to_string())
            .collect();
        assert_eq!(tokens, ["Shared.kt", "Base.kt"]);
    }

    #[test]
    fn rendering_is_idempotent() {
        let graph = graph(vec![person()]);

        assert_eq!(generate(&graph, "\t"), generate(&graph, "\t"));
    }

    #[test]
    fn relative_path_follows_package() {
        let file = GeneratedFile {
            package: "com.example.query".to_string(),
            name: "QPerson".to_string(),
            contents: String::new(),
            originating: Vec::new(),
            aggregating: false,
        };
        assert_eq!(file.relative_path(), PathBuf::from("com/example/query/QPerson.kt"));

        let root = GeneratedFile {
            package: String::new(),
            ..file
        };
        assert_eq!(root.relative_path(), PathBuf::from("QPerson.kt"));
    }

    #[test]
    fn singleton_name_is_lower_camel() {
        let graph = graph(vec![Declaration::entity("a.OrderLine", "OrderLine.kt")]);
        let model = graph.lookup("a.OrderLine").unwrap();

        assert_eq!(default_instance_name(model), "orderLine");
    }

    #[test]
    fn singleton_name_only_lowers_the_first_letter() {
        let graph = graph(
            ["a.Vec3d", "a.Order_Line", "a.A1b2", "a.URLMapping"]
                .into_iter()
                .map(|name| Declaration::entity(name, "Shapes.kt"))
                .collect(),
        );

        let names: Vec<_> = graph.iter().map(default_instance_name).collect();
        assert_eq!(names, ["vec3d", "order_Line", "a1b2", "uRLMapping"]);
    }

    #[test]
    fn package_classes_shadowing_default_imports_force_qualified_names() {
        let class = Declaration::entity("com.example.Class", "Class.kt");
        let graph = graph(vec![person(), class]);

        let files = generate(&graph, DEFAULT_INDENT);
        let contents = &files[0].contents;

        assert!(contents.contains("    type: java.lang.Class<out Person>,\n"), "{contents}");
        assert!(contents.contains("public constructor(path: Path<out Person>)"));

        // with a package suffix the entity no longer shares the file's package
        let naming = Naming {
            package_suffix: ".query".to_string(),
            ..Naming::default()
        };
        let graph = assemble(
            vec![person(), Declaration::entity("com.example.Class", "Class.kt")],
            &naming,
        )
        .graph;
        let files = generate(&graph, DEFAULT_INDENT);

        assert!(files[0].contents.contains("    type: Class<out Person>,\n"));
    }
}
