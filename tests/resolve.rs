use exercism_paths::{
    create_locator, PathResolver, Platform, Settings, StaticEnvironment, CONFIG_FILE,
    EXERCISES_DIR,
};
use std::path::MAIN_SEPARATOR;
use tempfile::tempdir;

fn tilde(rest: &str) -> String {
    format!("~{}{}", MAIN_SEPARATOR, rest)
}

#[test]
fn resolves_against_injected_environment() {
    let home = tempdir().unwrap();
    let cwd = tempdir().unwrap();
    let xdg = home.path().join(".config");
    std::fs::create_dir(&xdg).unwrap();
    std::fs::create_dir(home.path().join("work")).unwrap();

    let env = StaticEnvironment::new()
        .with_var("HOME", home.path())
        .with_var("XDG_CONFIG_HOME", &xdg)
        .with_current_dir(cwd.path());
    let paths = PathResolver::new(
        Box::new(env),
        create_locator(Platform::Unix),
        Settings::default(),
    )
    .unwrap();

    assert_eq!(paths.config_path("").unwrap(), xdg.join(CONFIG_FILE));
    assert_eq!(
        paths.config_path(&tilde("work")).unwrap(),
        home.path().join("work").join(CONFIG_FILE)
    );
    assert_eq!(
        paths.config_path(&tilde("work.json")).unwrap(),
        home.path().join("work.json")
    );
    assert_eq!(
        paths.exercises_path("").unwrap(),
        home.path().join(EXERCISES_DIR)
    );
    assert_eq!(
        paths.exercises_path("  tracks ").unwrap(),
        cwd.path().join("tracks")
    );
    assert_eq!(
        paths.exercises_path("./tracks/../solutions").unwrap(),
        cwd.path().join("solutions")
    );
}

#[test]
fn settings_file_drives_resolution() {
    let dir = tempdir().unwrap();
    let settings_path = dir.path().join("paths.yaml");
    std::fs::write(
        &settings_path,
        "config_file: user.json\nexercises_dir: solutions\nlocator: windows\n",
    )
    .unwrap();

    let settings = Settings::load(&settings_path).unwrap();
    let env = StaticEnvironment::new().with_var("USERPROFILE", dir.path());
    let paths = PathResolver::new(Box::new(env), create_locator(settings.locator), settings)
        .unwrap();

    assert_eq!(paths.config_path("").unwrap(), dir.path().join("user.json"));
    assert_eq!(
        paths.config_path(&dir.path().to_string_lossy()).unwrap(),
        dir.path().join("user.json")
    );
    assert_eq!(
        paths.exercises_path("").unwrap(),
        dir.path().join("solutions")
    );
}

#[test]
fn is_dir_does_not_raise() {
    assert!(!exercism_paths::is_dir("/nonexistent/path"));
}
