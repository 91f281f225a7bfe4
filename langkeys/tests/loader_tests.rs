use indoc::indoc;
use langkeys::{
    CheckConfig, FileLoader, Loader, SourceShape, flatten, load_all, missing_keys, reconcile,
};
use std::fs;
use tempfile::TempDir;

fn locales(ids: &[&str]) -> Vec<String> {
    ids.iter().map(|id| id.to_string()).collect()
}

#[test]
fn test_json_sources_end_to_end() {
    let temp_dir = TempDir::new().unwrap();
    fs::write(
        temp_dir.path().join("en.json"),
        r#"{ "greeting": "Hello", "farewell": "Bye" }"#,
    )
    .unwrap();
    fs::write(temp_dir.path().join("es.json"), r#"{ "greeting": "Hola" }"#).unwrap();

    let config = CheckConfig::new()
        .with_source_dir(temp_dir.path())
        .with_locales(locales(&["en", "es"]));
    let ids = config.resolve_locales().unwrap();
    let trees = load_all(&config.loader().unwrap(), &ids);
    let result = reconcile(&ids, &trees);

    assert!(result[0].is_complete());
    assert_eq!(result[1].locale, "es");
    assert_eq!(result[1].missing.len(), 1);
    assert_eq!(result[1].missing[0].key, "farewell");
    assert_eq!(result[1].missing[0].translation("en"), Some("Bye"));
}

#[test]
fn test_module_shape_resolves_references_under_default_export() {
    let temp_dir = TempDir::new().unwrap();
    fs::write(
        temp_dir.path().join("en.json"),
        r#"{ "default": { "nav": { "home": "Home", "about": "About" } } }"#,
    )
    .unwrap();
    fs::write(
        temp_dir.path().join("es.json"),
        r#"{ "default": { "nav": { "home": "Inicio" } } }"#,
    )
    .unwrap();

    let config = CheckConfig::new()
        .with_source_dir(temp_dir.path())
        .with_locales(locales(&["en", "es"]))
        .with_shape(SourceShape::Module);
    let ids = config.resolve_locales().unwrap();
    let trees = load_all(&config.loader().unwrap(), &ids);
    let result = reconcile(&ids, &trees);

    assert_eq!(result[1].missing.len(), 1);
    assert_eq!(result[1].missing[0].key, "nav.about");
    assert_eq!(result[1].missing[0].translation("en"), Some("About"));
}

#[test]
fn test_plain_shape_strips_default_paths_but_not_lookups() {
    let temp_dir = TempDir::new().unwrap();
    fs::write(
        temp_dir.path().join("en.json"),
        r#"{ "default": { "title": "Title" } }"#,
    )
    .unwrap();
    fs::write(temp_dir.path().join("es.json"), r#"{ "default": {} }"#).unwrap();

    let config = CheckConfig::new()
        .with_source_dir(temp_dir.path())
        .with_locales(locales(&["en", "es"]));
    let ids = config.resolve_locales().unwrap();
    let trees = load_all(&config.loader().unwrap(), &ids);
    let result = reconcile(&ids, &trees);

    assert_eq!(result[1].missing.len(), 1);
    assert_eq!(result[1].missing[0].key, "title");
    assert!(result[1].missing[0].translations.is_empty());
}

#[test]
fn test_yaml_sources_with_discovery() {
    let temp_dir = TempDir::new().unwrap();
    fs::write(
        temp_dir.path().join("en.yaml"),
        indoc! {"
            auth:
              login: Log in
              logout: Log out
            tags: [a, b]
        "},
    )
    .unwrap();
    fs::write(
        temp_dir.path().join("fr.yaml"),
        indoc! {"
            auth:
              login: Connexion
        "},
    )
    .unwrap();

    let config = CheckConfig::new()
        .with_source_dir(temp_dir.path())
        .with_file_extension("yaml");
    let ids = config.resolve_locales().unwrap();
    assert_eq!(ids, locales(&["en", "fr"]));

    let trees = load_all(&config.loader().unwrap(), &ids);
    let result = reconcile(&ids, &trees);
    let fr = &result[1];
    let keys: Vec<&str> = fr.missing.iter().map(|m| m.key.as_str()).collect();
    assert_eq!(keys, vec!["auth.logout", "tags"]);
    assert_eq!(fr.missing[1].translation("en"), Some("a,b"));
}

#[test]
fn test_toml_sources() {
    let temp_dir = TempDir::new().unwrap();
    fs::write(
        temp_dir.path().join("en.toml"),
        indoc! {r#"
            [errors]
            not_found = "Not found"
            forbidden = "Forbidden"
        "#},
    )
    .unwrap();
    fs::write(
        temp_dir.path().join("de.toml"),
        indoc! {r#"
            [errors]
            forbidden = "Verboten"
        "#},
    )
    .unwrap();

    let config = CheckConfig::new()
        .with_source_dir(temp_dir.path())
        .with_file_extension("toml")
        .with_locales(locales(&["en", "de"]));
    let ids = config.resolve_locales().unwrap();
    let trees = load_all(&config.loader().unwrap(), &ids);
    let result = missing_keys(&ids, &trees);

    assert!(result[0].is_complete());
    assert_eq!(result[1].missing, vec!["errors.not_found"]);
}

#[test]
fn test_toml_dates_are_terminal_values() {
    let temp_dir = TempDir::new().unwrap();
    fs::write(
        temp_dir.path().join("en.toml"),
        indoc! {r#"
            released = 1979-05-27
            title = "T"
        "#},
    )
    .unwrap();
    fs::write(temp_dir.path().join("es.toml"), "title = \"T\"\n").unwrap();

    let loader = FileLoader::new(temp_dir.path(), "toml").unwrap();
    let tree = loader.load("en").unwrap();
    assert_eq!(flatten(&tree), vec!["released", "title"]);

    let ids = locales(&["en", "es"]);
    let result = reconcile(&ids, &load_all(&loader, &ids));
    assert_eq!(result[1].missing.len(), 1);
    assert_eq!(result[1].missing[0].key, "released");
    assert_eq!(
        result[1].missing[0].translation("en"),
        Some("1979-05-27")
    );
}

#[test]
fn test_missing_and_malformed_sources_are_empty_trees() {
    let temp_dir = TempDir::new().unwrap();
    fs::write(
        temp_dir.path().join("en.json"),
        r#"{ "a": "A", "b": { "c": "C" } }"#,
    )
    .unwrap();
    fs::write(temp_dir.path().join("es.json"), "{ broken").unwrap();

    let config = CheckConfig::new()
        .with_source_dir(temp_dir.path())
        .with_locales(locales(&["en", "es", "pt"]));
    let ids = config.resolve_locales().unwrap();
    let trees = load_all(&config.loader().unwrap(), &ids);
    let result = missing_keys(&ids, &trees);

    assert!(result[0].is_complete());
    assert_eq!(result[1].missing, vec!["a", "b", "b.c"]);
    assert_eq!(result[2].missing, vec!["a", "b", "b.c"]);
}

#[test]
fn test_all_sources_missing_reports_nothing_to_compare() {
    let temp_dir = TempDir::new().unwrap();
    let config = CheckConfig::new()
        .with_source_dir(temp_dir.path())
        .with_locales(locales(&["en", "es"]));
    let ids = config.resolve_locales().unwrap();
    let trees = load_all(&config.loader().unwrap(), &ids);

    assert_eq!(trees.len(), 2);
    assert!(reconcile(&ids, &trees).iter().all(|g| g.is_complete()));
}
