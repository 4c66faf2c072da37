use super::{read_stored, theme_from_colorfgbg, write_stored, ResolvedTheme, ThemeMode, ThemeService};
use std::cell::RefCell;
use std::fs;
use std::rc::Rc;
use tempfile::TempDir;

#[test]
fn test_cycle_order() {
    assert_eq!(ThemeMode::System.cycle(), ThemeMode::Light);
    assert_eq!(ThemeMode::Light.cycle(), ThemeMode::Dark);
    assert_eq!(ThemeMode::Dark.cycle(), ThemeMode::System);
}

#[test]
fn test_parse_modes() {
    assert_eq!("dark".parse::<ThemeMode>().unwrap(), ThemeMode::Dark);
    assert_eq!("system".parse::<ThemeMode>().unwrap(), ThemeMode::System);
    assert!("sepia".parse::<ThemeMode>().is_err());
}

#[test]
fn test_colorfgbg_background() {
    assert_eq!(theme_from_colorfgbg(Some("15;0")), ResolvedTheme::Dark);
    assert_eq!(theme_from_colorfgbg(Some("0;15")), ResolvedTheme::Light);
    assert_eq!(theme_from_colorfgbg(Some("12;default;7")), ResolvedTheme::Light);
    assert_eq!(theme_from_colorfgbg(Some("7;8")), ResolvedTheme::Dark);
    assert_eq!(theme_from_colorfgbg(Some("garbage")), ResolvedTheme::Dark);
    assert_eq!(theme_from_colorfgbg(None), ResolvedTheme::Dark);
}

#[test]
fn test_resolve_against_system() {
    let theme = ThemeService::load(None, ResolvedTheme::Light);

    assert_eq!(theme.mode(), ThemeMode::System);
    assert_eq!(theme.resolved(), ResolvedTheme::Light);
    assert_eq!(theme.resolve(ThemeMode::Dark), ResolvedTheme::Dark);
}

#[test]
fn test_preference_persists() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("folio").join("theme.json");

    let mut theme = ThemeService::load(Some(path.clone()), ResolvedTheme::Dark);
    theme.set(ThemeMode::Light).unwrap();

    assert_eq!(read_stored(&path).unwrap(), ThemeMode::Light);
    let reloaded = ThemeService::load(Some(path), ResolvedTheme::Dark);
    assert_eq!(reloaded.mode(), ThemeMode::Light);
    assert_eq!(reloaded.resolved(), ResolvedTheme::Light);
}

#[test]
fn test_unknown_stored_value_falls_back_to_system() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("theme.json");
    fs::write(&path, r#"{"mode":"sepia"}"#).unwrap();

    let theme = ThemeService::load(Some(path.clone()), ResolvedTheme::Dark);

    assert_eq!(theme.mode(), ThemeMode::System);
    assert!(read_stored(&path).is_err());
}

#[test]
fn test_write_then_read() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("nested").join("theme.json");

    write_stored(&path, ThemeMode::Dark).unwrap();

    let contents = fs::read_to_string(&path).unwrap();
    assert!(contents.contains("\"dark\""), "stored as: {contents}");
}

#[test]
fn test_listeners_see_resolved_changes_only() {
    let seen = Rc::new(RefCell::new(Vec::new()));
    let mut theme = ThemeService::load(None, ResolvedTheme::Dark);
    let sink = Rc::clone(&seen);
    theme.subscribe(Box::new(move |resolved| sink.borrow_mut().push(resolved)));

    // system (dark) -> light -> dark -> system (dark)
    assert_eq!(theme.cycle().unwrap(), ThemeMode::Light);
    assert_eq!(theme.cycle().unwrap(), ThemeMode::Dark);
    assert_eq!(theme.cycle().unwrap(), ThemeMode::System);

    assert_eq!(
        *seen.borrow(),
        vec![ResolvedTheme::Light, ResolvedTheme::Dark]
    );
}

#[test]
fn test_system_change_only_matters_in_system_mode() {
    let seen = Rc::new(RefCell::new(Vec::new()));
    let mut theme = ThemeService::load(None, ResolvedTheme::Dark);
    let sink = Rc::clone(&seen);
    theme.subscribe(Box::new(move |resolved| sink.borrow_mut().push(resolved)));

    theme.set_system_preference(ResolvedTheme::Light);
    assert_eq!(theme.resolved(), ResolvedTheme::Light);

    theme.set(ThemeMode::Dark).unwrap();
    theme.set_system_preference(ResolvedTheme::Dark);
    theme.set_system_preference(ResolvedTheme::Light);

    assert_eq!(
        *seen.borrow(),
        vec![ResolvedTheme::Light, ResolvedTheme::Dark]
    );
}
