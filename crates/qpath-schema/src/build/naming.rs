use crate::prelude::*;

///
/// Naming
///
/// How generated class and interface names derive from an entity's identity.
/// Nested simple names are joined with `_` so every generated type is
/// top-level.
///

#[derive(Clone, Debug, Eq, PartialEq)]
pub struct Naming {
    pub prefix: String,
    pub suffix: String,
    pub interface_prefix: String,
    pub interface_suffix: String,
    pub package_suffix: String,
}

impl Default for Naming {
    fn default() -> Self {
        Self {
            prefix: "Q".to_string(),
            suffix: String::new(),
            interface_prefix: "IQ".to_string(),
            interface_suffix: String::new(),
            package_suffix: String::new(),
        }
    }
}

impl Naming {
    #[must_use]
    pub fn class_name(&self, entity: &ClassName) -> ClassName {
        ClassName::new(
            self.package(entity),
            format!("{}{}{}", self.prefix, Self::joined(entity), self.suffix),
        )
    }

    #[must_use]
    pub fn interface_name(&self, entity: &ClassName) -> ClassName {
        ClassName::new(
            self.package(entity),
            format!(
                "{}{}{}",
                self.interface_prefix,
                Self::joined(entity),
                self.interface_suffix
            ),
        )
    }

    /// Package that generated files for `entity` live in.
    #[must_use]
    pub fn package(&self, entity: &ClassName) -> String {
        if entity.package().is_empty() {
            self.package_suffix.trim_start_matches('.').to_string()
        } else {
            format!("{}{}", entity.package(), self.package_suffix)
        }
    }

    fn joined(entity: &ClassName) -> String {
        entity.simple_names().join("_")
    }
}

///
/// TESTS
///
