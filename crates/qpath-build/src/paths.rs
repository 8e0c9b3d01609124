//! The QueryDSL side of the contract: which path class stands for each field
//! type, and how the generated property initializes it.

use crate::kotlin::{CodeBlock, Initializer};
use qpath_schema::prelude::*;

const TYPES: &str = "com.querydsl.core.types";
const DSL: &str = "com.querydsl.core.types.dsl";

// classes whose plain `::class.java` handle is a JVM primitive
const PRIMITIVES: &[&str] = &[
    "Boolean", "Byte", "Char", "Double", "Float", "Int", "Long", "Short",
];

pub(crate) fn dsl(simple_name: &str) -> ClassName {
    ClassName::new(DSL, simple_name)
}

pub(crate) fn path() -> ClassName {
    ClassName::new(TYPES, "Path")
}

pub(crate) fn path_metadata() -> ClassName {
    ClassName::new(TYPES, "PathMetadata")
}

pub(crate) fn path_metadata_factory() -> ClassName {
    ClassName::new(TYPES, "PathMetadataFactory")
}

pub(crate) fn java_class() -> ClassName {
    ClassName::new("java.lang", "Class")
}

pub(crate) fn jvm_field() -> ClassName {
    ClassName::new("kotlin.jvm", "JvmField")
}

// base_class
// entities and mapped superclasses share a base, embeddables get the bean one
pub(crate) fn base_class(kind: ModelKind) -> ClassName {
    match kind {
        ModelKind::Entity | ModelKind::Superclass => dsl("EntityPathBase"),
        ModelKind::Embeddable => dsl("BeanPath"),
    }
}

const fn scalar_path(category: ScalarCategory) -> &'static str {
    match category {
        ScalarCategory::Array => "ArrayPath",
        ScalarCategory::BooleanPath => "BooleanPath",
        ScalarCategory::Comparable => "ComparablePath",
        ScalarCategory::Date => "DatePath",
        ScalarCategory::DateTime => "DateTimePath",
        ScalarCategory::Number => "NumberPath",
        ScalarCategory::Simple => "SimplePath",
        ScalarCategory::StringPath => "StringPath",
        ScalarCategory::Time => "TimePath",
    }
}

/// Raw path class for a field type, used as a `::class.java` handle.
pub(crate) fn path_class(ty: &FieldType) -> ClassName {
    match ty {
        FieldType::Scalar(scalar) => dsl(scalar_path(scalar.category)),
        FieldType::ListOf(_) => dsl("ListPath"),
        FieldType::SetOf(_) => dsl("SetPath"),
        FieldType::MapOf { .. } => dsl("MapPath"),
        FieldType::EnumRef(_) => dsl("EnumPath"),
        FieldType::ObjectRef(object) => object.path_class.clone(),
        FieldType::Unknown { .. } => dsl("SimplePath"),
    }
}

/// Declared type of the generated property.
pub(crate) fn path_type(ty: &FieldType) -> TypeName {
    let raw = path_class(ty);

    match ty {
        FieldType::Scalar(scalar) => match scalar.category {
            ScalarCategory::StringPath | ScalarCategory::BooleanPath => raw.into(),
            ScalarCategory::Array => {
                let element = scalar.element.clone().unwrap_or_else(ClassName::any);
                TypeName::parameterized(raw, vec![scalar.class.clone().into(), element.into()])
            }
            _ => TypeName::parameterized(raw, vec![scalar.class.clone().into()]),
        },
        FieldType::ListOf(inner) | FieldType::SetOf(inner) => {
            TypeName::parameterized(raw, vec![inner.original_type(), path_type(inner)])
        }
        FieldType::MapOf { key, value } => TypeName::parameterized(
            raw,
            vec![key.original_type(), value.original_type(), path_type(value)],
        ),
        FieldType::EnumRef(class) => TypeName::parameterized(raw, vec![class.clone().into()]),
        FieldType::ObjectRef(_) => raw.into(),
        FieldType::Unknown { .. } => TypeName::parameterized(raw, vec![ty.original_type()]),
    }
}

// type_handle
// `X::class.java` for the declared type; numbers and JVM primitives use the
// boxed handle so the path sees the object type
fn type_handle(ty: &FieldType) -> CodeBlock {
    let class = ty.original_class();
    let boxed = matches!(ty, FieldType::Scalar(s) if s.category.is_numeric())
        || (class.package() == "kotlin" && PRIMITIVES.contains(&class.simple_name()));

    CodeBlock::new().class_literal(class, boxed)
}

fn path_handle(ty: &FieldType) -> CodeBlock {
    CodeBlock::new().class_literal(path_class(ty), false)
}

fn create(function: &str, name: &str, rest: impl IntoIterator<Item = CodeBlock>) -> Initializer {
    let args = std::iter::once(CodeBlock::new().string(name)).chain(rest);

    Initializer::Value(CodeBlock::new().call(function, args))
}

/// How the generated property for an own field `name` is initialized.
pub(crate) fn initializer(name: &str, ty: &FieldType) -> Initializer {
    match ty {
        FieldType::Scalar(scalar) => {
            let function = match scalar.category {
                ScalarCategory::StringPath => return create("createString", name, []),
                ScalarCategory::BooleanPath => return create("createBoolean", name, []),
                ScalarCategory::Array => "createArray",
                ScalarCategory::Comparable => "createComparable",
                ScalarCategory::Date => "createDate",
                ScalarCategory::DateTime => "createDateTime",
                ScalarCategory::Number => "createNumber",
                ScalarCategory::Simple => "createSimple",
                ScalarCategory::Time => "createTime",
            };

            create(function, name, [type_handle(ty)])
        }
        FieldType::ListOf(inner) => create(
            "createList",
            name,
            [type_handle(inner), path_handle(inner), CodeBlock::new().text("null")],
        ),
        FieldType::SetOf(inner) => create(
            "createSet",
            name,
            [type_handle(inner), path_handle(inner), CodeBlock::new().text("null")],
        ),
        FieldType::MapOf { key, value } => create(
            "createMap",
            name,
            [type_handle(key), type_handle(value), path_handle(value)],
        ),
        FieldType::EnumRef(_) => create("createEnum", name, [type_handle(ty)]),
        FieldType::ObjectRef(object) => Initializer::Lazy(
            CodeBlock::new()
                .ty(object.path_class.clone())
                .args([CodeBlock::new().call("forProperty", [CodeBlock::new().string(name)])]),
        ),
        FieldType::Unknown { .. } => create("createSimple", name, [type_handle(ty)]),
    }
}

///
/// TESTS
///

#[cfg(test)]
mod tests {
    use super::*;
    use crate::kotlin::{FileSpec, Modifier, PropertySpec, TypeSpec};

    fn scalar(category: ScalarCategory, class: ClassName) -> FieldType {
        FieldType::Scalar(ScalarType::new(category, class))
    }

    fn int() -> FieldType {
        scalar(ScalarCategory::Number, ClassName::kotlin("Int"))
    }

    fn string() -> FieldType {
        scalar(ScalarCategory::StringPath, ClassName::kotlin("String"))
    }

    // render one property in a throwaway file to see the final text
    fn rendered(name: &str, ty: &FieldType) -> String {
        let property = PropertySpec::new(name, path_type(ty))
            .modifier(Modifier::Override)
            .initializer(initializer(name, ty));
        let file = FileSpec::new("com.example", "QThing")
            .with_type(TypeSpec::class("QThing").property(property));

        let out = file.render("    ");
        out.lines()
            .find(|line| line.trim_start().starts_with("override val"))
            .map(|line| line.trim().to_string())
            .unwrap_or_default()
    }

    #[test]
    fn numbers_use_boxed_handles() {
        assert_eq!(
            rendered("age", &int()),
            "override val age: NumberPath<Int> = createNumber(\"age\", Int::class.javaObjectType)"
        );
    }

    #[test]
    fn strings_take_the_name_only() {
        assert_eq!(
            rendered("name", &string()),
            "override val name: StringPath = createString(\"name\")"
        );
    }

    #[test]
    fn map_property_references_key_value_and_value_path() {
        let tags = FieldType::map_of(string(), int());

        assert_eq!(
            rendered("tags", &tags),
            "override val tags: MapPath<String, Int, NumberPath<Int>> = \
             createMap(\"tags\", String::class.java, Int::class.javaObjectType, NumberPath::class.java)"
        );
    }

    #[test]
    fn lists_pass_element_and_path_handles() {
        let ty = FieldType::list_of(FieldType::EnumRef(ClassName::new("com.example", "Status")));

        assert_eq!(
            rendered("states", &ty),
            "override val states: ListPath<Status, EnumPath<Status>> = \
             createList(\"states\", Status::class.java, EnumPath::class.java, null)"
        );
    }

    #[test]
    fn byte_arrays_render_array_paths() {
        let ty = FieldType::Scalar(ScalarType::array(
            ClassName::kotlin("ByteArray"),
            ClassName::kotlin("Byte"),
        ));

        assert_eq!(
            rendered("data", &ty),
            "override val data: ArrayPath<ByteArray, Byte> = createArray(\"data\", ByteArray::class.java)"
        );
    }

    #[test]
    fn object_refs_are_lazy() {
        let ty = FieldType::ObjectRef(ObjectRef {
            entity: ClassName::new("com.example", "Employee"),
            path_class: ClassName::new("com.example", "QEmployee"),
            args: Vec::new(),
        });

        assert_eq!(
            rendered("manager", &ty),
            "override val manager: QEmployee by lazy { QEmployee(forProperty(\"manager\")) }"
        );
    }

    #[test]
    fn unknown_types_keep_arguments_in_path_type() {
        let ty = FieldType::Unknown {
            class: ClassName::new("com.vendor", "Money"),
            args: vec![ClassName::kotlin("String").into()],
        };

        assert_eq!(
            rendered("price", &ty),
            "override val price: SimplePath<Money<String>> = createSimple(\"price\", Money::class.java)"
        );
    }

    #[test]
    fn base_class_follows_model_kind() {
        assert_eq!(base_class(ModelKind::Superclass), dsl("EntityPathBase"));
        assert_eq!(base_class(ModelKind::Embeddable), dsl("BeanPath"));
    }
}
