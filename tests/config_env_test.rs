//! Environment variable overrides for Settings.
//!
//! Kept in its own test binary: it mutates the process environment.

use std::fs;

use tempfile::TempDir;

use repo_create::config::Settings;

#[test]
fn given_env_var_and_config_file_when_load_then_env_var_wins() {
    // Arrange
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("repo-create.toml");
    fs::write(
        &path,
        "gh_program = \"from-file\"\ninstall_url = \"https://example.invalid/gh\"\n",
    )
    .unwrap();
    std::env::set_var("REPO_CREATE_GH_PROGRAM", "from-env");

    // Act
    let settings = Settings::load(Some(path.as_path())).expect("load settings");
    std::env::remove_var("REPO_CREATE_GH_PROGRAM");

    // Assert
    assert_eq!(settings.gh_program, "from-env");
    assert_eq!(settings.install_url, "https://example.invalid/gh");
}
