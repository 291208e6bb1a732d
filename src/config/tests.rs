//! Tests for config functionality.

use crate::config::{
    BuildConfiguration, ContentConfig, DarkModeSetting, DarkModeStrategy, LoadMode, LoadOptions,
};
use crate::error::ConfigError;
use std::collections::BTreeMap;
use tempfile::TempDir;

/// The document of a site with a client and a server half.
const SITE_YAML: &str = r#"
purge:
  - "src/Website.Server/Pages/*"
  - "src/Website.Client/wwwroot/*.html"
  - "src/Website.Client/*.fs"
darkMode: false
theme:
  extend: {}
variants:
  extend: {}
plugins:
  - "@tailwindcss/typography"
"#;

/// The document of the standalone front end.
const FRONTEND_YAML: &str = r#"
future:
  removeDeprecatedGapUtilities: true
  purgeLayersByDefault: true
purge:
  - "./*.fs"
theme:
  extend: {}
variants:
  border: [responsive, group-hover, focus-within, first, last, odd, even, hover, focus, active, visited, disabled, motion-safe, motion-reduce]
  appearance: [responsive, group-hover, focus-within, first, last, odd, even, hover, focus, active, visited, disabled, motion-safe, motion-reduce]
  backgroundColor: [responsive, group-hover, focus-within, first, last, odd, even, hover, focus, active, visited, disabled, motion-safe, motion-reduce]
plugins: []
"#;

fn strict(yaml: &str) -> crate::error::Result<BuildConfiguration> {
    BuildConfiguration::from_yaml(yaml, LoadOptions::strict())
}

#[test]
fn test_default_config() {
    let config = BuildConfiguration::default();

    assert!(config.content_globs().is_empty());
    assert_eq!(config.dark_mode, None);
    assert_eq!(config.dark_mode_strategy(), Some(DarkModeStrategy::Disabled));
    assert!(config.theme.is_empty());
    assert!(config.variants.is_empty());
    assert!(config.plugins.is_empty());
    assert!(config.future.is_empty());
}

#[test]
fn test_default_load_mode_is_strict() {
    assert_eq!(LoadOptions::default().mode, LoadMode::Strict);
    assert_eq!("Lenient".parse::<LoadMode>().unwrap(), LoadMode::Lenient);
    assert!("loose".parse::<LoadMode>().is_err());
}

#[test]
fn test_parse_minimal_yaml() {
    let config = strict("").unwrap();
    assert_eq!(config, BuildConfiguration::default());
}

#[test]
fn test_parse_site_document() {
    let config = strict(SITE_YAML).unwrap();

    assert_eq!(
        config.content_globs(),
        &[
            "src/Website.Server/Pages/*",
            "src/Website.Client/wwwroot/*.html",
            "src/Website.Client/*.fs"
        ]
    );
    assert_eq!(config.dark_mode, Some(DarkModeSetting::Flag(false)));
    assert_eq!(config.dark_mode_strategy(), Some(DarkModeStrategy::Disabled));
    assert!(config.theme.is_empty());
    assert!(config.variants.is_empty());
    assert_eq!(config.plugins, vec!["@tailwindcss/typography"]);
}

#[test]
fn test_parse_frontend_document() {
    let config = strict(FRONTEND_YAML).unwrap();

    assert_eq!(config.content_globs(), &["./*.fs"]);
    assert_eq!(config.dark_mode, None);
    assert!(config.future_enabled("purgeLayersByDefault"));
    assert!(config.future_enabled("removeDeprecatedGapUtilities"));
    assert!(!config.future_enabled("defaultLineHeights"));
    assert_eq!(config.variants.categories.len(), 3);
    let border = &config.variants.categories["border"];
    assert_eq!(border.first().map(String::as_str), Some("responsive"));
    assert_eq!(border.last().map(String::as_str), Some("motion-reduce"));
    assert_eq!(border.len(), 14);
    assert!(config.plugins.is_empty());
}

#[test]
fn test_content_key_and_purge_alias_are_equivalent() {
    let a = strict("content: [\"src/**/*.html\"]").unwrap();
    let b = strict("purge: [\"src/**/*.html\"]").unwrap();
    assert_eq!(a, b);
}

#[test]
fn test_parse_content_object_form() {
    let yaml = r#"
purge:
  enabled: true
  content: ["src/**/*.fs"]
  safelist: ["bg-red-500"]
"#;
    let config = strict(yaml).unwrap();

    assert_eq!(config.content.files, vec!["src/**/*.fs"]);
    assert_eq!(config.content.enabled, Some(true));
    assert_eq!(config.content.safelist, vec!["bg-red-500"]);
}

#[test]
fn test_parse_dark_mode_strategies() {
    let config = strict("darkMode: media").unwrap();
    assert_eq!(config.dark_mode_strategy(), Some(DarkModeStrategy::MediaQuery));

    let config = strict("darkMode: class").unwrap();
    assert_eq!(config.dark_mode_strategy(), Some(DarkModeStrategy::ExplicitClass));
}

#[test]
fn test_parse_theme_sections() {
    let yaml = r##"
theme:
  spacing:
    "72": "18rem"
  extend:
    colors:
      brand: "#0fa9e6"
      gray:
        "100": "#f7fafc"
"##;
    let config = strict(yaml).unwrap();

    assert_eq!(
        config.theme.overrides["spacing"]["72"],
        serde_yaml::Value::String("18rem".to_string())
    );
    let colors = &config.theme.extend["colors"];
    assert_eq!(colors["brand"].as_str(), Some("#0fa9e6"));
    assert!(colors["gray"].is_mapping());
}

// =========================================================================
// Round trip
// =========================================================================

fn rich_config() -> BuildConfiguration {
    let mut config = strict(FRONTEND_YAML).unwrap();
    config.content = ContentConfig {
        files: vec!["src/**/*.fs".to_string(), "index.html".to_string()],
        enabled: Some(true),
        safelist: vec!["p-4".to_string()],
    };
    config.dark_mode = Some(DarkModeSetting::from(DarkModeStrategy::ExplicitClass));
    config.theme.extend.insert(
        "colors".to_string(),
        BTreeMap::from([(
            "brand".to_string(),
            serde_yaml::Value::String("#0fa9e6".to_string()),
        )]),
    );
    config
        .variants
        .extend
        .insert("opacity".to_string(), vec!["disabled".to_string()]);
    config.plugins = vec!["@tailwindcss/typography".to_string()];
    config
}

#[test]
fn test_yaml_round_trip() {
    for config in [
        strict(SITE_YAML).unwrap(),
        strict(FRONTEND_YAML).unwrap(),
        rich_config(),
    ] {
        let yaml = config.to_yaml().unwrap();
        let reloaded = strict(&yaml).unwrap();
        assert_eq!(reloaded, config, "round trip through:\n{}", yaml);
    }
}

#[test]
fn test_json_round_trip() {
    let config = rich_config();
    let json = config.to_json().unwrap();
    let reloaded = BuildConfiguration::from_json(&json, LoadOptions::strict()).unwrap();
    assert_eq!(reloaded, config);
}

#[test]
fn test_plain_globs_serialize_as_a_sequence() {
    let config = strict("purge: [\"./*.fs\"]").unwrap();
    let yaml = config.to_yaml().unwrap();
    let value: serde_yaml::Value = serde_yaml::from_str(&yaml).unwrap();
    assert!(value["content"].is_sequence(), "got:\n{}", yaml);
    assert!(value.get("purge").is_none());
}

// =========================================================================
// Strict and lenient modes
// =========================================================================

#[test]
fn test_strict_mode_rejects_unknown_keys() {
    let yaml = "purge: []\nmode: jit\nprefix: tw-\n";

    let err = strict(yaml).unwrap_err();

    match err {
        ConfigError::UnknownOption { paths } => assert_eq!(paths, vec!["mode", "prefix"]),
        other => panic!("expected UnknownOption, got {:?}", other),
    }
}

#[test]
fn test_lenient_mode_drops_unknown_keys() {
    let yaml = "purge:\n  content: [\"src/*.fs\"]\n  layers: [utilities]\nmode: jit\nplugins: [a]\n";

    let config = BuildConfiguration::from_yaml(yaml, LoadOptions::lenient()).unwrap();

    assert_eq!(config.content_globs(), &["src/*.fs"]);
    assert_eq!(config.plugins, vec!["a"]);
    let yaml = config.to_yaml().unwrap();
    assert!(!yaml.contains("mode"));
    assert!(!yaml.contains("layers"));
}

#[test]
fn test_strict_mode_reports_nested_unknown_keys() {
    let err = strict("purge:\n  content: []\n  layers: [base]\n").unwrap_err();
    assert_eq!(err.field_paths(), vec!["purge.layers"]);
}

#[test]
fn test_unknown_future_flag_loads_in_strict_mode() {
    let config = strict("future:\n  teleportUtilities: true\n").unwrap();
    assert!(config.future_enabled("teleportUtilities"));
}

// =========================================================================
// Failures
// =========================================================================

#[test]
fn test_content_must_be_a_sequence_of_strings() {
    let err = strict("purge: 42").unwrap_err();
    assert!(matches!(err, ConfigError::MalformedDocument { .. }));

    let err = strict("purge:\n  - [nested]\n").unwrap_err();
    assert!(matches!(err, ConfigError::MalformedDocument { .. }));
}

#[test]
fn test_variant_states_must_be_sequences() {
    let err = strict("variants:\n  border: hover\n").unwrap_err();
    assert!(matches!(err, ConfigError::MalformedDocument { .. }));
}

#[test]
fn test_syntax_error_is_malformed() {
    let err = strict("purge: [unterminated").unwrap_err();
    assert!(matches!(err, ConfigError::MalformedDocument { .. }));

    let err = BuildConfiguration::from_json("{\"purge\": ", LoadOptions::strict()).unwrap_err();
    assert!(matches!(err, ConfigError::MalformedDocument { .. }));
}

#[test]
fn test_quoted_false_dark_mode_fails_the_load() {
    let err = strict("darkMode: 'false'\n").unwrap_err();

    assert_eq!(err.field_paths(), vec!["darkMode"]);
    assert!(err.to_string().contains("'false (string)'"));
}

#[test]
fn test_invalid_values_fail_the_load() {
    let yaml = "darkMode: night\nvariants:\n  border: [hover, pressed]\n";

    let err = strict(yaml).unwrap_err();

    assert_eq!(err.field_paths(), vec!["darkMode", "variants.border[1]"]);
    assert_eq!(err.exit_code(), crate::exit_codes::VALIDATION_FAILURE);
}

// =========================================================================
// Files on disk
// =========================================================================

#[test]
fn test_load_yaml_and_json_files() {
    let dir = TempDir::new().unwrap();
    let yaml_path = dir.path().join("windcfg.yaml");
    let json_path = dir.path().join("windcfg.json");
    std::fs::write(&yaml_path, SITE_YAML).unwrap();
    std::fs::write(
        &json_path,
        strict(SITE_YAML).unwrap().to_json().unwrap(),
    )
    .unwrap();

    let from_yaml = BuildConfiguration::load(&yaml_path).unwrap();
    let from_json = BuildConfiguration::load(&json_path).unwrap();

    assert_eq!(from_yaml, from_json);
}

#[test]
fn test_load_missing_file_is_io_error() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("absent.yaml");

    let err = BuildConfiguration::load(&path).unwrap_err();

    match err {
        ConfigError::Io { path: reported, .. } => assert_eq!(reported, path),
        other => panic!("expected Io, got {:?}", other),
    }
}

#[test]
fn test_malformed_file_names_its_path() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("windcfg.yaml");
    std::fs::write(&path, "plugins: {a: b}\n").unwrap();

    let err = BuildConfiguration::load(&path).unwrap_err();

    match err {
        ConfigError::MalformedDocument { path: reported, .. } => assert_eq!(reported, path),
        other => panic!("expected MalformedDocument, got {:?}", other),
    }
}

#[test]
fn test_independent_documents_keep_their_own_plugin_order() {
    let dir = TempDir::new().unwrap();
    let a = dir.path().join("a.yaml");
    let b = dir.path().join("b.yaml");
    std::fs::write(&a, "purge: [a/*.fs]\nplugins: [forms, typography]\n").unwrap();
    std::fs::write(&b, "purge: [b/*.fs]\nplugins: [typography, forms, aspect-ratio]\n").unwrap();

    let first = BuildConfiguration::load(&a).unwrap();
    let second = BuildConfiguration::load(&b).unwrap();

    assert_eq!(first.plugins, vec!["forms", "typography"]);
    assert_eq!(second.plugins, vec!["typography", "forms", "aspect-ratio"]);
    assert_eq!(first.content_globs(), &["a/*.fs"]);
    assert_eq!(second.content_globs(), &["b/*.fs"]);
}

// =========================================================================
// Explicit merge
// =========================================================================

#[test]
fn test_merge_unions_and_concatenates() {
    let a = strict(
        "purge: [a/*.fs, shared/*.html]\nplugins: [forms, typography]\nvariants:\n  border: [hover, focus]\n",
    )
    .unwrap();
    let b = strict(
        "purge: [shared/*.html, b/*.fs]\nplugins: [typography]\nvariants:\n  border: [focus, active]\n  appearance: [hover]\ndarkMode: media\n",
    )
    .unwrap();

    let merged = a.merged_with(&b);

    assert_eq!(
        merged.content_globs(),
        &["a/*.fs", "shared/*.html", "b/*.fs"]
    );
    assert_eq!(merged.plugins, vec!["forms", "typography", "typography"]);
    assert_eq!(
        merged.variants.categories["border"],
        vec!["hover", "focus", "active"]
    );
    assert_eq!(merged.variants.categories["appearance"], vec!["hover"]);
    assert_eq!(merged.dark_mode_strategy(), Some(DarkModeStrategy::MediaQuery));

    // Inputs are untouched.
    assert_eq!(a.plugins, vec!["forms", "typography"]);
    assert_eq!(b.content_globs(), &["shared/*.html", "b/*.fs"]);
}

#[test]
fn test_merge_theme_and_future_prefer_other() {
    let a = strict(
        "theme:\n  extend:\n    colors: {brand: red, accent: blue}\nfuture:\n  purgeLayersByDefault: false\n",
    )
    .unwrap();
    let b = strict(
        "theme:\n  extend:\n    colors: {brand: green}\nfuture:\n  purgeLayersByDefault: true\n",
    )
    .unwrap();

    let merged = a.merged_with(&b);

    let colors = &merged.theme.extend["colors"];
    assert_eq!(colors["brand"].as_str(), Some("green"));
    assert_eq!(colors["accent"].as_str(), Some("blue"));
    assert!(merged.future_enabled("purgeLayersByDefault"));
}

#[test]
fn test_merge_keeps_explicit_purge_opt_out() {
    let a = strict("purge:\n  enabled: false\n  content: [a/*]\n").unwrap();
    let b = strict("purge: [b/*]").unwrap();

    let merged = a.merged_with(&b);

    assert_eq!(merged.content.enabled, Some(false));
    assert_eq!(merged.content_globs(), &["a/*", "b/*"]);
}
