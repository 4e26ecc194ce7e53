use skinkit_services::{SettingsStore, SkinManager};
use skinkit_theme::config::ThemeSelection;
use std::fs;

#[test]
fn test_save_and_restore_selected_theme() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("settings.json");

    smol::block_on(async {
        let mut manager = SkinManager::new(SettingsStore::at(&path));
        manager.apply_skin("Light").unwrap();
        manager.save_selected_theme().await.unwrap();

        let mut settings = SettingsStore::at(&path);
        settings.load().await.unwrap();
        let mut restored = SkinManager::new(settings);
        assert!(restored.load_saved_theme().unwrap());
        assert_eq!(restored.current().name, "Light");
    });
}

#[test]
fn test_themes_dir_registers_plain_and_derived_skins() {
    let dir = tempfile::tempdir().unwrap();
    fs::write(
        dir.path().join("ocean.json"),
        r##"{ "name": "Ocean", "primaryBackground": "#0B1A24", "secondaryBackground": "#13293A" }"##,
    )
    .unwrap();
    fs::write(
        dir.path().join("deep-ocean.json"),
        r##"{ "name": "Deep Ocean", "baseTheme": "Ocean", "propertyOverrides": { "accentColor": "#00BCD4" } }"##,
    )
    .unwrap();

    smol::block_on(async {
        let mut manager = SkinManager::new(SettingsStore::at(dir.path().join("settings.json")));
        assert_eq!(manager.load_themes_dir(dir.path()).await.unwrap(), 2);
        assert_eq!(
            manager.available_skin_names(),
            vec!["Dark", "Deep Ocean", "Light", "Ocean"]
        );

        manager.apply_skin("Deep Ocean").unwrap();
        assert_eq!(manager.current().name, "Deep Ocean");
    });
}

#[test]
fn test_apply_configured_falls_back() {
    let dir = tempfile::tempdir().unwrap();

    smol::block_on(async {
        let mut settings = SettingsStore::at(dir.path().join("settings.json"));
        settings.theme_config = settings
            .theme_config
            .clone()
            .with_default_theme(ThemeSelection::File(dir.path().join("missing.json")))
            .with_fallback_theme(ThemeSelection::named("Light"));

        let mut manager = SkinManager::new(settings);
        manager.apply_configured().await.unwrap();
        assert_eq!(manager.current().name, "Light");
    });
}

#[test]
fn test_strict_config_starts_on_a_valid_builtin() {
    let dir = tempfile::tempdir().unwrap();

    smol::block_on(async {
        let mut settings = SettingsStore::at(dir.path().join("settings.json"));
        settings.theme_config = settings.theme_config.clone().with_strict_validation(true);

        let mut manager = SkinManager::new(settings);
        assert!(manager.is_strict());
        manager.apply_configured().await.unwrap();
        assert_eq!(manager.current().name, "Light");
    });
}

#[test]
fn test_apply_configured_reports_failure() {
    let dir = tempfile::tempdir().unwrap();

    smol::block_on(async {
        let mut settings = SettingsStore::at(dir.path().join("settings.json"));
        settings.theme_config = settings
            .theme_config
            .clone()
            .with_default_theme(ThemeSelection::named("Nope"))
            .with_fallback_theme(ThemeSelection::named("Also Nope"));

        let mut manager = SkinManager::new(settings);
        assert!(manager.apply_configured().await.is_err());
        assert_eq!(manager.current().name, "Dark");
    });
}
