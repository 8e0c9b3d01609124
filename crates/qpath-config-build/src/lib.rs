//! Generator settings: built-in defaults, host key/value options, and TOML
//! files, all checked before a pass starts.

mod error;

pub use error::ConfigError;

use qpath_schema::{
    build::{InclusionPolicy, Naming},
    validate::naming::is_identifier,
};
use serde::{Deserialize, Serialize};
use std::{fs, path::Path};
use tracing::{debug, trace, warn};

///
/// Settings
///

#[derive(Clone, Debug, Deserialize, Eq, PartialEq, Serialize)]
#[serde(default, rename_all = "camelCase", deny_unknown_fields)]
pub struct Settings {
    pub enable: bool,
    pub indent: String,
    pub prefix: String,
    pub suffix: String,
    pub interface_prefix: String,
    pub interface_suffix: String,
    pub package_suffix: String,
    pub excluded_packages: Vec<String>,
    pub excluded_classes: Vec<String>,
    pub included_packages: Vec<String>,
    pub included_classes: Vec<String>,
}

/// Indentation used when none, or an unusable one, is configured.
pub const DEFAULT_INDENT: &str = "    ";

impl Default for Settings {
    fn default() -> Self {
        Self {
            enable: true,
            indent: DEFAULT_INDENT.to_string(),
            prefix: "Q".to_string(),
            suffix: String::new(),
            interface_prefix: "IQ".to_string(),
            interface_suffix: String::new(),
            package_suffix: String::new(),
            excluded_packages: Vec::new(),
            excluded_classes: Vec::new(),
            included_packages: Vec::new(),
            included_classes: Vec::new(),
        }
    }
}

impl Settings {
    /// Build settings from the host's option map. Keys this generator does not
    /// know are ignored, since hosts share one option namespace across tools.
    pub fn from_options<I, K, V>(options: I) -> Result<Self, ConfigError>
    where
        I: IntoIterator<Item = (K, V)>,
        K: AsRef<str>,
        V: AsRef<str>,
    {
        let mut settings = Self::default();

        for (key, value) in options {
            let (key, value) = (key.as_ref(), value.as_ref());

            match key {
                "enable" => settings.enable = parse_bool(key, value)?,
                "indent" => settings.indent = value.to_string(),
                "prefix" => settings.prefix = value.to_string(),
                "suffix" => settings.suffix = value.to_string(),
                "interfacePrefix" => settings.interface_prefix = value.to_string(),
                "interfaceSuffix" => settings.interface_suffix = value.to_string(),
                "packageSuffix" => settings.package_suffix = value.to_string(),
                "excludedPackages" => settings.excluded_packages = split_list(value),
                "excludedClasses" => settings.excluded_classes = split_list(value),
                "includedPackages" => settings.included_packages = split_list(value),
                "includedClasses" => settings.included_classes = split_list(value),
                _ => trace!(option = key, "ignoring unrecognized option"),
            }
        }

        settings.normalize();
        settings.validate()?;

        Ok(settings)
    }

    pub fn from_toml_str(contents: &str) -> Result<Self, ConfigError> {
        let mut settings: Self = toml::from_str(contents)?;
        settings.normalize();
        settings.validate()?;

        Ok(settings)
    }

    pub fn load(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let path = path.as_ref();
        let contents = fs::read_to_string(path).map_err(|source| ConfigError::Io {
            path: path.to_path_buf(),
            source,
        })?;

        let settings = Self::from_toml_str(&contents)?;
        debug!(path = %path.display(), "loaded generator settings");

        Ok(settings)
    }

    /// Replace settings that would only spoil the layout with their defaults.
    /// Only an indent that is not spaces or tabs qualifies.
    pub fn normalize(&mut self) {
        if !is_indent(&self.indent) {
            warn!(indent = ?self.indent, "unusable indent; falling back to four spaces");
            self.indent = DEFAULT_INDENT.to_string();
        }
    }

    /// Check that every setting can produce valid Kotlin. The indent is left
    /// to [`Settings::normalize`].
    pub fn validate(&self) -> Result<(), ConfigError> {
        check_affix("prefix", &self.prefix, true)?;
        check_affix("suffix", &self.suffix, false)?;
        check_affix("interfacePrefix", &self.interface_prefix, true)?;
        check_affix("interfaceSuffix", &self.interface_suffix, false)?;
        check_package_suffix(&self.package_suffix)?;

        // generated types would take the entity's own name in its own package
        if self.package_suffix.is_empty() {
            for (key, prefix, suffix) in [
                ("prefix", &self.prefix, &self.suffix),
                ("interfacePrefix", &self.interface_prefix, &self.interface_suffix),
            ] {
                if prefix.is_empty() && suffix.is_empty() {
                    return Err(ConfigError::invalid(
                        key,
                        "an empty prefix and suffix need a packageSuffix",
                    ));
                }
            }
        }

        if self.prefix == self.interface_prefix && self.suffix == self.interface_suffix {
            return Err(ConfigError::NameCollision {
                prefix: self.prefix.clone(),
                suffix: self.suffix.clone(),
            });
        }

        for (key, list) in [
            ("excludedPackages", &self.excluded_packages),
            ("excludedClasses", &self.excluded_classes),
            ("includedPackages", &self.included_packages),
            ("includedClasses", &self.included_classes),
        ] {
            if list.iter().any(|entry| entry.trim().is_empty()) {
                return Err(ConfigError::invalid(key, "contains an empty entry"));
            }
        }

        Ok(())
    }

    #[must_use]
    pub fn naming(&self) -> Naming {
        Naming {
            prefix: self.prefix.clone(),
            suffix: self.suffix.clone(),
            interface_prefix: self.interface_prefix.clone(),
            interface_suffix: self.interface_suffix.clone(),
            package_suffix: self.package_suffix.clone(),
        }
    }

    #[must_use]
    pub fn policy(&self) -> InclusionPolicy {
        InclusionPolicy {
            excluded_packages: self.excluded_packages.clone(),
            excluded_classes: self.excluded_classes.clone(),
            included_packages: self.included_packages.clone(),
            included_classes: self.included_classes.clone(),
        }
    }
}

/// Split a comma-separated option value, trimming items and dropping empties.
#[must_use]
pub fn split_list(value: &str) -> Vec<String> {
    value
        .split(',')
        .map(str::trim)
        .filter(|item| !item.is_empty())
        .map(str::to_string)
        .collect()
}

fn is_indent(value: &str) -> bool {
    !value.is_empty() && value.chars().all(|c| c == ' ' || c == '\t')
}

fn parse_bool(key: &str, value: &str) -> Result<bool, ConfigError> {
    match value.trim().to_ascii_lowercase().as_str() {
        "true" => Ok(true),
        "false" => Ok(false),
        _ => Err(ConfigError::InvalidBool {
            key: key.to_string(),
            value: value.to_string(),
        }),
    }
}

// check_affix
// a leading affix begins the generated name and must be an identifier itself
fn check_affix(key: &str, value: &str, leading: bool) -> Result<(), ConfigError> {
    if value.is_empty() {
        return Ok(());
    }

    let valid = if leading {
        is_identifier(value)
    } else {
        value.chars().all(|c| c.is_alphanumeric() || c == '_')
    };

    if valid {
        Ok(())
    } else {
        Err(ConfigError::invalid(
            key,
            format!("'{value}' cannot be part of a Kotlin identifier"),
        ))
    }
}

// check_package_suffix
// either empty or `.segment(.segment)*`
fn check_package_suffix(value: &str) -> Result<(), ConfigError> {
    if value.is_empty() {
        return Ok(());
    }

    let valid = value
        .strip_prefix('.')
        .is_some_and(|rest| rest.split('.').all(is_identifier));

    if valid {
        Ok(())
    } else {
        Err(ConfigError::invalid(
            "packageSuffix",
            format!("'{value}' must look like '.segment' or '.a.b'"),
        ))
    }
}

///
/// TESTS
///

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    #[test]
    fn defaults_match_documented_values() {
        let settings = Settings::default();

        assert!(settings.enable);
        assert_eq!(settings.indent, "    ");
        assert_eq!(settings.prefix, "Q");
        assert_eq!(settings.interface_prefix, "IQ");
        assert!(settings.suffix.is_empty() && settings.package_suffix.is_empty());
        settings.validate().unwrap();

        assert_eq!(settings.naming(), Naming::default());
        assert_eq!(settings.policy(), InclusionPolicy::default());
    }

    #[test]
    fn options_override_defaults_and_split_lists() {
        let settings = Settings::from_options([
            ("enable", "TRUE"),
            ("prefix", "Query"),
            ("packageSuffix", ".query"),
            ("excludedPackages", " com.internal , ,org.legacy,"),
            ("includedClasses", "com.shop.Order"),
        ])
        .unwrap();

        assert!(settings.enable);
        assert_eq!(settings.prefix, "Query");
        assert_eq!(settings.excluded_packages, ["com.internal", "org.legacy"]);
        assert_eq!(settings.policy().included_classes, ["com.shop.Order"]);
        assert_eq!(settings.naming().package_suffix, ".query");
    }

    #[test]
    fn unknown_options_are_ignored() {
        let settings =
            Settings::from_options([("room.schemaLocation", "x"), ("suffix", "Path")]).unwrap();

        assert_eq!(settings.suffix, "Path");
    }

    #[test]
    fn enable_must_be_boolean() {
        let err = Settings::from_options([("enable", "yes")]).unwrap_err();

        assert!(matches!(err, ConfigError::InvalidBool { ref value, .. } if value == "yes"));
    }

    #[test]
    fn toml_uses_camel_case_keys_and_arrays() {
        let settings = Settings::from_toml_str(
            r#"
            enable = false
            indent = "\t"
            interfaceSuffix = "Paths"
            includedPackages = ["com.shop", "com.billing"]
            "#,
        )
        .unwrap();

        assert!(!settings.enable);
        assert_eq!(settings.indent, "\t");
        assert_eq!(settings.interface_suffix, "Paths");
        assert_eq!(settings.included_packages, ["com.shop", "com.billing"]);
        // untouched keys keep their defaults
        assert_eq!(settings.prefix, "Q");
    }

    #[test]
    fn toml_rejects_unknown_keys() {
        let err = Settings::from_toml_str("prefx = \"Q\"").unwrap_err();

        assert!(matches!(err, ConfigError::Toml(_)));
    }

    #[test]
    fn validation_rejects_bad_names() {
        for (key, value) in [
            ("prefix", "Q Path"),
            ("prefix", "9Q"),
            ("suffix", "-Path"),
            ("packageSuffix", "query"),
            ("packageSuffix", ".a..b"),
        ] {
            let err = Settings::from_options([(key, value)]).unwrap_err();
            assert!(
                matches!(&err, ConfigError::Invalid { key: k, .. } if k == key),
                "{key}={value:?} gave {err}"
            );
        }
    }

    #[test]
    fn unusable_indent_falls_back_to_default() {
        for indent in ["ab", "", " x"] {
            let settings = Settings::from_options([("indent", indent)]).unwrap();
            assert_eq!(settings.indent, DEFAULT_INDENT, "indent {indent:?}");
        }

        let settings = Settings::from_toml_str("indent = \"--\"").unwrap();
        assert_eq!(settings.indent, DEFAULT_INDENT);

        let settings = Settings::from_options([("indent", "\t\t")]).unwrap();
        assert_eq!(settings.indent, "\t\t");
    }

    #[test]
    fn identical_naming_schemes_collide() {
        let err = Settings::from_options([("interfacePrefix", "Q")]).unwrap_err();

        assert!(matches!(err, ConfigError::NameCollision { .. }));
    }

    #[test]
    fn bare_names_need_a_package_suffix() {
        let err = Settings::from_options([("prefix", "")]).unwrap_err();
        assert!(matches!(err, ConfigError::Invalid { ref key, .. } if key == "prefix"));

        let settings = Settings::from_options([("prefix", ""), ("packageSuffix", ".query")]).unwrap();
        assert!(settings.prefix.is_empty());
    }

    #[test]
    fn empty_filter_entries_are_rejected_in_toml() {
        let err = Settings::from_toml_str("excludedPackages = [\"\"]").unwrap_err();

        assert!(matches!(err, ConfigError::Invalid { ref key, .. } if key == "excludedPackages"));
    }

    #[test]
    fn load_reads_file_and_reports_missing_ones() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        writeln!(file, "suffix = \"Path\"").unwrap();

        let settings = Settings::load(file.path()).unwrap();
        assert_eq!(settings.suffix, "Path");

        let dir = tempfile::tempdir().unwrap();
        let err = Settings::load(dir.path().join("missing.toml")).unwrap_err();
        assert!(matches!(err, ConfigError::Io { .. }));
    }
}
