use pretty_assertions::assert_eq;
use skinkit_services::theme_files;
use skinkit_theme::codec::ThemePack;
use skinkit_theme::inheritance::InheritableTheme;
use skinkit_theme::presets;
use std::fs;

#[test]
fn test_export_and_load_theme_file() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("light.json");

    smol::block_on(async {
        theme_files::export_theme_file(&path, &presets::light(), Some("Bright"), Some("skinkit"))
            .await
            .unwrap();
        let loaded = theme_files::load_theme_file(&path).await.unwrap();
        assert_eq!(loaded, presets::light());

        let validation = theme_files::validate_theme_file(&path).await.unwrap();
        assert!(validation.is_valid());
    });
}

#[test]
fn test_load_theme_file_reports_validation_failure() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("nameless.json");
    fs::write(&path, r##"{ "name": "", "primaryColor": "#123456" }"##).unwrap();

    smol::block_on(async {
        let result = theme_files::import_theme_file(&path).await.unwrap();
        assert!(!result.is_success());
        assert!(theme_files::load_theme_file(&path).await.is_err());
    });
}

#[test]
fn test_directory_scan_skips_bad_files() {
    let dir = tempfile::tempdir().unwrap();
    fs::write(dir.path().join("a.json"), r#"{ "name": "Alpha" }"#).unwrap();
    fs::write(dir.path().join("broken.json"), "{").unwrap();
    fs::write(dir.path().join("notes.txt"), "ignored").unwrap();
    fs::create_dir(dir.path().join("beta")).unwrap();
    fs::write(
        dir.path().join("beta").join("theme.json"),
        r#"{ "name": "Beta", "baseTheme": "Alpha", "propertyOverrides": { "accentColor": "red" } }"#,
    )
    .unwrap();
    fs::create_dir(dir.path().join("empty")).unwrap();

    smol::block_on(async {
        let paths = theme_files::theme_paths(dir.path()).await.unwrap();
        assert_eq!(paths.len(), 3);

        let loaded = theme_files::load_documents(dir.path()).await.unwrap();
        let names: Vec<&str> = loaded.iter().map(|l| l.document.name.as_str()).collect();
        assert_eq!(names, vec!["Alpha", "Beta"]);
        assert!(!loaded[0].is_inheritable());
        assert!(loaded[1].is_inheritable());
    });
}

#[test]
fn test_inheritable_file_round_trip() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("variant.json");
    let variant = InheritableTheme::new(presets::dark().renamed("Dark Pink"))
        .with_base("Dark")
        .with_override("accentColor", "#E91E63");

    smol::block_on(async {
        theme_files::export_inheritable_theme_file(&path, &variant, None, None)
            .await
            .unwrap();
        let loaded = theme_files::load_inheritable_theme_file(&path).await.unwrap();
        assert_eq!(loaded, variant);
    });
}

#[test]
fn test_pack_file_round_trip() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("packs").join("builtin.json");
    let pack = ThemePack::new("Built-in", Some("Stock skins"), &presets::all());

    smol::block_on(async {
        theme_files::export_pack_file(&path, &pack).await.unwrap();
        let loaded = theme_files::import_pack_file(&path).await.unwrap();
        assert_eq!(loaded, pack);
        assert!(loaded.import_all().iter().all(|result| result.is_success()));
    });
}
