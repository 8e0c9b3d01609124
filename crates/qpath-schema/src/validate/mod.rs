//! Structural checks run on each candidate before it is assembled. A
//! declaration that fails here is skipped on its own; the pass continues.

pub mod naming;

use crate::{MAX_TYPE_DEPTH, SUPER_FIELD, prelude::*};
use naming::is_identifier;
use std::collections::BTreeSet;

/// Validate a declaration and return its parsed identity.
pub(crate) fn validate_declaration(decl: &Declaration) -> Result<ClassName, String> {
    let class = decl.class_name().map_err(|e| e.to_string())?;

    if let Some(superclass) = &decl.superclass {
        ClassName::parse(superclass, None).map_err(|e| format!("superclass: {e}"))?;
    }

    let mut seen = BTreeSet::new();
    for field in &decl.fields {
        if !is_identifier(&field.name) {
            return Err(format!("field name '{}' is not an identifier", field.name));
        }
        if field.name == SUPER_FIELD {
            return Err(format!("field name '{SUPER_FIELD}' is reserved"));
        }
        if !seen.insert(field.name.as_str()) {
            return Err(format!("field '{}' is declared twice", field.name));
        }

        validate_type_ref(&field.ty).map_err(|e| format!("field '{}': {e}", field.name))?;
    }

    Ok(class)
}

// validate_type_ref
// every name in the tree must parse, and the tree must stay shallow enough
// for the classifier to recurse over it
fn validate_type_ref(ty: &TypeRef) -> Result<(), String> {
    if ty.depth() > MAX_TYPE_DEPTH {
        return Err(format!(
            "type '{}' nests deeper than {MAX_TYPE_DEPTH} levels",
            ty.name
        ));
    }

    validate_type_names(ty)
}

fn validate_type_names(ty: &TypeRef) -> Result<(), String> {
    if ty.is_star() {
        return Ok(());
    }

    match ty.kind {
        TypeKind::TypeParameter => {
            if !is_identifier(&ty.name) {
                return Err(format!("type parameter '{}' is not an identifier", ty.name));
            }
        }
        TypeKind::Class | TypeKind::Enum => {
            ty.class_name().map_err(|e| e.to_string())?;
        }
    }

    ty.args.iter().try_for_each(validate_type_names)
}

///
/// TESTS
///

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn accepts_well_formed_declaration() {
        let decl = Declaration::entity("com.example.Person", "Person.kt")
            .with_field("name", TypeRef::new("kotlin.String"))
            .with_field(
                "items",
                TypeRef::of("kotlin.collections.List", [TypeRef::star()]),
            )
            .with_field("value", TypeRef::type_parameter("T"));

        let class = validate_declaration(&decl).unwrap();
        assert_eq!(class.simple_name(), "Person");
    }

    #[test]
    fn rejects_bad_identity() {
        let decl = Declaration::entity("com.example.", "x.kt");
        assert!(validate_declaration(&decl).is_err());
    }

    #[test]
    fn rejects_duplicate_and_invalid_field_names() {
        let dup = Declaration::entity("a.B", "B.kt")
            .with_field("x", TypeRef::new("kotlin.Int"))
            .with_field("x", TypeRef::new("kotlin.Long"));
        let err = validate_declaration(&dup).unwrap_err();
        assert!(err.contains("declared twice"), "unexpected error: {err}");

        let bad = Declaration::entity("a.B", "B.kt").with_field("not ok", TypeRef::new("kotlin.Int"));
        assert!(validate_declaration(&bad).is_err());
    }

    #[test]
    fn rejects_malformed_nested_type_names() {
        let decl = Declaration::entity("a.B", "B.kt").with_field(
            "xs",
            TypeRef::of("kotlin.collections.List", [TypeRef::new("bad..Name")]),
        );

        let err = validate_declaration(&decl).unwrap_err();
        assert!(err.starts_with("field 'xs'"), "unexpected error: {err}");
    }

    #[test]
    fn rejects_overly_deep_types() {
        let mut ty = TypeRef::new("kotlin.Int");
        for _ in 0..MAX_TYPE_DEPTH {
            ty = TypeRef::of("kotlin.collections.List", [ty]);
        }

        let decl = Declaration::entity("a.B", "B.kt").with_field("deep", ty);
        assert!(validate_declaration(&decl).is_err());
    }

    #[test]
    fn rejects_the_reserved_super_field() {
        // reserved on roots too, since subclasses inherit the field
        for decl in [
            Declaration::entity("a.Root", "Root.kt"),
            Declaration::entity("a.Leaf", "Leaf.kt").with_superclass("a.Root"),
        ] {
            let decl = decl.with_field(SUPER_FIELD, TypeRef::new("kotlin.String"));
            let err = validate_declaration(&decl).unwrap_err();

            assert!(err.contains("reserved"), "unexpected error: {err}");
        }
    }
}
