use crate::{
    build::Naming,
    prelude::*,
    types::ScalarCategory::{
        Array, BooleanPath, Comparable, Date, DateTime, Number, Simple, StringPath, Time,
    },
};
use std::{
    collections::HashMap,
    sync::LazyLock,
};
use tracing::debug;

///
/// SCALARS
///
/// Leaf identity -> (category, handle class). Unsigned integers carry the
/// signed class of the same width; the path only needs ordering and equality.
///

const SCALARS: &[(&str, ScalarCategory, &str)] = &[
    ("kotlin.Any", Simple, "kotlin.Any"),
    ("kotlin.Char", Comparable, "kotlin.Char"),
    ("kotlin.String", StringPath, "kotlin.String"),
    ("kotlin.Boolean", BooleanPath, "kotlin.Boolean"),
    ("kotlin.Byte", Number, "kotlin.Byte"),
    ("kotlin.UByte", Number, "kotlin.Byte"),
    ("kotlin.Short", Number, "kotlin.Short"),
    ("kotlin.UShort", Number, "kotlin.Short"),
    ("kotlin.Int", Number, "kotlin.Int"),
    ("kotlin.UInt", Number, "kotlin.Int"),
    ("kotlin.Long", Number, "kotlin.Long"),
    ("kotlin.ULong", Number, "kotlin.Long"),
    ("kotlin.Float", Number, "kotlin.Float"),
    ("kotlin.Double", Number, "kotlin.Double"),
    ("java.math.BigInteger", Number, "java.math.BigInteger"),
    ("java.math.BigDecimal", Number, "java.math.BigDecimal"),
    ("java.util.UUID", Comparable, "java.util.UUID"),
    ("java.time.LocalDate", Date, "java.time.LocalDate"),
    ("java.time.ZonedDateTime", DateTime, "java.time.ZonedDateTime"),
    ("java.time.LocalDateTime", DateTime, "java.time.LocalDateTime"),
    ("java.time.LocalTime", Time, "java.time.LocalTime"),
    ("java.util.Locale", Simple, "java.util.Locale"),
    ("kotlin.ByteArray", Array, "kotlin.ByteArray"),
    ("kotlin.CharArray", Array, "kotlin.CharArray"),
    ("java.time.ZoneId", Simple, "java.time.ZoneId"),
    ("java.time.ZoneOffset", Comparable, "java.time.ZoneOffset"),
    ("java.time.Year", Comparable, "java.time.Year"),
    ("java.time.OffsetDateTime", DateTime, "java.time.OffsetDateTime"),
    ("java.time.Instant", DateTime, "java.time.Instant"),
    ("java.util.Date", DateTime, "java.util.Date"),
    ("java.util.Calendar", DateTime, "java.util.Calendar"),
    ("java.sql.Date", Date, "java.sql.Date"),
    ("java.sql.Time", Time, "java.sql.Time"),
    ("java.sql.Timestamp", DateTime, "java.sql.Timestamp"),
    ("java.time.Duration", Comparable, "java.time.Duration"),
    ("java.sql.Blob", Simple, "java.sql.Blob"),
    ("java.sql.Clob", Simple, "java.sql.Clob"),
    ("java.sql.NClob", Simple, "java.sql.NClob"),
    ("java.util.Currency", Simple, "java.util.Currency"),
    ("java.util.TimeZone", Simple, "java.util.TimeZone"),
    ("java.net.URL", Simple, "java.net.URL"),
];

// array class -> element class
const ARRAY_ELEMENTS: &[(&str, &str)] = &[
    ("kotlin.ByteArray", "kotlin.Byte"),
    ("kotlin.CharArray", "kotlin.Char"),
];

static SCALAR_TABLE: LazyLock<HashMap<&'static str, ScalarType>> = LazyLock::new(|| {
    SCALARS
        .iter()
        .map(|&(ident, category, class)| {
            let class = trusted(class);
            let scalar = match ARRAY_ELEMENTS.iter().find(|(array, _)| *array == ident) {
                Some(&(_, element)) => ScalarType::array(class, trusted(element)),
                None => ScalarType::new(category, class),
            };

            (ident, scalar)
        })
        .collect()
});

// table entries are well-formed by construction
fn trusted(qualified: &str) -> ClassName {
    let (package, simple) = qualified.rsplit_once('.').unwrap_or(("", qualified));

    ClassName::new(package, simple)
}

/// Look up a leaf identity in the scalar table.
#[must_use]
pub fn scalar(identity: &str) -> Option<ScalarType> {
    SCALAR_TABLE.get(identity).cloned()
}

///
/// Shape
///

#[derive(Clone, Copy, Debug, Eq, PartialEq)]
enum Shape {
    List,
    Set,
    Map,
}

impl Shape {
    fn of(identity: &str) -> Option<Self> {
        match identity {
            "kotlin.collections.List"
            | "kotlin.collections.MutableList"
            | "kotlin.collections.Collection"
            | "kotlin.collections.MutableCollection"
            | "kotlin.collections.Iterable"
            | "java.util.List"
            | "java.util.ArrayList"
            | "java.util.Collection" => Some(Self::List),
            "kotlin.collections.Set"
            | "kotlin.collections.MutableSet"
            | "java.util.Set"
            | "java.util.HashSet"
            | "java.util.LinkedHashSet"
            | "java.util.SortedSet" => Some(Self::Set),
            "kotlin.collections.Map"
            | "kotlin.collections.MutableMap"
            | "java.util.Map"
            | "java.util.HashMap"
            | "java.util.LinkedHashMap"
            | "java.util.SortedMap" => Some(Self::Map),
            _ => None,
        }
    }

    const fn arity(self) -> usize {
        match self {
            Self::List | Self::Set => 1,
            Self::Map => 2,
        }
    }
}

///
/// Classifier
///
/// Maps declared field types onto [`FieldType`]. Total: anything it cannot
/// place becomes [`FieldType::Unknown`].
///

pub struct Classifier<'a> {
    models: &'a HashMap<String, ClassName>,
    naming: &'a Naming,
}

impl<'a> Classifier<'a> {
    /// `models` maps the canonical identity of every entity being modeled in
    /// this pass to its declared class name.
    #[must_use]
    pub const fn new(models: &'a HashMap<String, ClassName>, naming: &'a Naming) -> Self {
        Self { models, naming }
    }

    #[must_use]
    pub fn classify(&self, ty: &TypeRef) -> FieldType {
        if ty.is_star() {
            return FieldType::Scalar(ScalarType::new(Simple, ClassName::any()));
        }
        if ty.kind == TypeKind::TypeParameter {
            return FieldType::unknown(ClassName::any());
        }

        let Ok(class) = ty.class_name() else {
            debug!(ty = %ty.name, "unparseable type name; falling back to Any");
            return FieldType::unknown(ClassName::any());
        };
        let identity = class.canonical();

        // 1. collections
        if let Some(shape) = Shape::of(&identity) {
            return self.classify_collection(shape, class, ty);
        }

        // 2. enums
        if ty.kind == TypeKind::Enum {
            return FieldType::EnumRef(class);
        }

        // 3. modeled entities, including the declaring one
        if let Some(entity) = self.models.get(&identity) {
            return FieldType::ObjectRef(ObjectRef {
                entity: entity.clone(),
                path_class: self.naming.class_name(entity),
                args: ty.args.iter().map(type_name).collect(),
            });
        }

        // 4. scalar table
        if let Some(scalar) = scalar(&identity) {
            return FieldType::Scalar(scalar);
        }

        debug!(ty = %identity, "no path mapping; falling back to SimplePath");
        FieldType::Unknown {
            class,
            args: ty.args.iter().map(type_name).collect(),
        }
    }

    fn classify_collection(&self, shape: Shape, class: ClassName, ty: &TypeRef) -> FieldType {
        if ty.args.len() != shape.arity() {
            debug!(
                ty = %class,
                args = ty.args.len(),
                "collection with unexpected type arguments; falling back to SimplePath"
            );
            return FieldType::Unknown {
                class,
                args: ty.args.iter().map(type_name).collect(),
            };
        }

        match (shape, ty.args.as_slice()) {
            (Shape::List, [inner]) => FieldType::list_of(self.classify(inner)),
            (Shape::Set, [inner]) => FieldType::set_of(self.classify(inner)),
            (Shape::Map, [key, value]) => FieldType::map_of(self.classify(key), self.classify(value)),
            _ => FieldType::Unknown {
                class,
                args: Vec::new(),
            },
        }
    }
}

// type_name
// type parameters are not in scope in generated code, so they become `*`
fn type_name(ty: &TypeRef) -> TypeName {
    if ty.is_star() || ty.kind == TypeKind::TypeParameter {
        return TypeName::Star;
    }

    match ty.class_name() {
        Ok(class) => TypeName::parameterized(class, ty.args.iter().map(type_name).collect()),
        Err(_) => TypeName::Star,
    }
}

///
/// TESTS
///

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    fn models(names: &[&str]) -> HashMap<String, ClassName> {
        names
            .iter()
            .map(|name| ((*name).to_string(), ClassName::parse(name, None).unwrap()))
            .collect()
    }

    fn classify(ty: &TypeRef) -> FieldType {
        let models = models(&["com.example.Employee", "com.example.Box"]);
        let naming = Naming::default();

        Classifier::new(&models, &naming).classify(ty)
    }

    fn category(ty: &FieldType) -> Option<ScalarCategory> {
        match ty {
            FieldType::Scalar(scalar) => Some(scalar.category),
            _ => None,
        }
    }

    #[test]
    fn table_has_one_category_per_identity() {
        let mut seen = std::collections::HashSet::new();
        for (ident, _, _) in SCALARS {
            assert!(seen.insert(*ident), "duplicate scalar entry {ident}");
        }
        assert_eq!(SCALAR_TABLE.len(), SCALARS.len());
    }

    #[test]
    fn strings_and_booleans_get_dedicated_paths() {
        assert_eq!(category(&classify(&TypeRef::new("kotlin.String"))), Some(StringPath));
        assert_eq!(category(&classify(&TypeRef::new("kotlin.Boolean"))), Some(BooleanPath));
    }

    #[test]
    fn unsigned_integers_normalize_to_signed_width() {
        for (unsigned, signed) in [
            ("kotlin.UByte", "Byte"),
            ("kotlin.UShort", "Short"),
            ("kotlin.UInt", "Int"),
            ("kotlin.ULong", "Long"),
        ] {
            let FieldType::Scalar(scalar) = classify(&TypeRef::new(unsigned)) else {
                panic!("{unsigned} should be a scalar");
            };
            assert_eq!(scalar.category, Number);
            assert_eq!(scalar.class, ClassName::kotlin(signed));
        }
    }

    #[test]
    fn byte_arrays_are_arrays_not_lists() {
        let FieldType::Scalar(scalar) = classify(&TypeRef::new("kotlin.ByteArray")) else {
            panic!("ByteArray should be a scalar");
        };

        assert_eq!(scalar.category, Array);
        assert_eq!(scalar.element, Some(ClassName::kotlin("Byte")));
    }

    #[test]
    fn temporal_types_split_by_precision() {
        assert_eq!(category(&classify(&TypeRef::new("java.time.LocalDate"))), Some(Date));
        assert_eq!(category(&classify(&TypeRef::new("java.time.Instant"))), Some(DateTime));
        assert_eq!(category(&classify(&TypeRef::new("java.sql.Time"))), Some(Time));
    }

    #[test]
    fn map_of_string_to_int_recurses_into_both_sides() {
        let ty = TypeRef::of(
            "kotlin.collections.Map",
            [TypeRef::new("kotlin.String"), TypeRef::new("kotlin.Int")],
        );

        let FieldType::MapOf { key, value } = classify(&ty) else {
            panic!("expected a map");
        };
        assert_eq!(category(&key), Some(StringPath));
        assert_eq!(category(&value), Some(Number));
    }

    #[test]
    fn nested_collections_wrap_resolved_inner_types() {
        let ty = TypeRef::of(
            "kotlin.collections.List",
            [TypeRef::of(
                "java.util.HashSet",
                [TypeRef::enumeration("com.example.Status")],
            )],
        );

        assert_eq!(
            classify(&ty),
            FieldType::list_of(FieldType::set_of(FieldType::EnumRef(ClassName::new(
                "com.example",
                "Status"
            ))))
        );
    }

    #[test]
    fn self_reference_is_an_object_ref() {
        let FieldType::ObjectRef(object) = classify(&TypeRef::new("com.example.Employee")) else {
            panic!("expected an object reference");
        };

        assert_eq!(object.entity, ClassName::new("com.example", "Employee"));
        assert_eq!(object.path_class, ClassName::new("com.example", "QEmployee"));
        assert!(object.args.is_empty());
    }

    #[test]
    fn generic_entity_reference_keeps_arguments() {
        let ty = TypeRef::of(
            "com.example.Box",
            [TypeRef::new("kotlin.String"), TypeRef::type_parameter("T")],
        );

        let FieldType::ObjectRef(object) = classify(&ty) else {
            panic!("expected an object reference");
        };
        assert_eq!(
            object.args,
            [TypeName::Class(ClassName::kotlin("String")), TypeName::Star]
        );
    }

    #[test]
    fn collection_shape_wins_over_enum_flag() {
        let mut ty = TypeRef::of("kotlin.collections.Set", [TypeRef::new("kotlin.Int")]);
        ty.kind = TypeKind::Enum;

        assert!(matches!(classify(&ty), FieldType::SetOf(_)));
    }

    #[test]
    fn unknown_types_fall_back_with_their_arguments() {
        let ty = TypeRef::of("com.vendor.Money", [TypeRef::new("kotlin.String")]);

        assert_eq!(
            classify(&ty).original_type().to_string(),
            "com.vendor.Money<kotlin.String>"
        );
        assert!(classify(&ty).is_unknown());
    }

    #[test]
    fn raw_collections_are_unknown() {
        let ty = TypeRef::new("kotlin.collections.List");

        assert_eq!(
            classify(&ty),
            FieldType::unknown(ClassName::collections("List"))
        );
    }

    #[test]
    fn star_and_type_parameters_degrade_to_any() {
        let list = TypeRef::of("kotlin.collections.List", [TypeRef::star()]);
        let FieldType::ListOf(inner) = classify(&list) else {
            panic!("expected a list");
        };
        assert_eq!(category(&inner), Some(Simple));

        assert_eq!(
            classify(&TypeRef::type_parameter("T")),
            FieldType::unknown(ClassName::any())
        );
    }

    fn arb_leaf() -> impl Strategy<Value = TypeRef> {
        prop_oneof![
            prop::sample::select(SCALARS.iter().map(|(ident, _, _)| *ident).collect::<Vec<_>>())
                .prop_map(TypeRef::new),
            Just(TypeRef::star()),
            Just(TypeRef::type_parameter("T")),
            Just(TypeRef::enumeration("com.example.Status")),
            Just(TypeRef::new("com.example.Employee")),
            "[a-z]{1,6}(\\.[A-Za-z]{1,6}){0,3}".prop_map(TypeRef::new),
            ".{0,12}".prop_map(TypeRef::new),
        ]
    }

    fn arb_type() -> impl Strategy<Value = TypeRef> {
        let containers = prop::sample::select(vec![
            "kotlin.collections.List",
            "kotlin.collections.Set",
            "kotlin.collections.Map",
            "java.util.HashMap",
            "com.example.Box",
            "com.vendor.Wrapper",
        ]);

        arb_leaf().prop_recursive(4, 32, 3, move |inner| {
            (containers.clone(), prop::collection::vec(inner, 0..3))
                .prop_map(|(name, args)| TypeRef::of(name, args))
        })
    }

    proptest! {
        #[test]
        fn classification_is_total_and_deterministic(ty in arb_type()) {
            let first = classify(&ty);
            let second = classify(&ty);

            prop_assert_eq!(&first, &second);
            // every variant can describe itself without panicking
            let _ = first.original_type().to_string();
        }
    }
}
