use std::fs;
use std::io::{self, Write};
use std::path::{Path, PathBuf};

use crate::config::{Paths, load_and_validate_config};

pub async fn handle_init(force: bool, custom_path: Option<PathBuf>) -> anyhow::Result<()> {
    let config_path = custom_path.unwrap_or_else(Paths::config_file);

    if config_path.exists() && !force {
        if !confirm_overwrite(&config_path)? {
            println!("Aborted.");
            return Ok(());
        }
    }

    if let Some(parent) = config_path.parent() {
        if !parent.as_os_str().is_empty() {
            fs::create_dir_all(parent)?;
        }
    }

    fs::write(&config_path, generate_example_config_yaml())?;
    set_file_permissions(&config_path);

    println!(
        "\x1b[32mConfig created at {}\x1b[0m",
        config_path.display()
    );
    println!("Edit it, then run: herald config validate");

    Ok(())
}

pub async fn handle_show(custom_path: Option<PathBuf>) -> anyhow::Result<()> {
    let config = load_and_validate_config(custom_path.as_deref())?;
    print!("{}", serde_yaml::to_string(&config)?);
    Ok(())
}

pub async fn handle_validate(custom_path: Option<PathBuf>) -> anyhow::Result<()> {
    let config_path = custom_path.unwrap_or_else(Paths::config_file);
    load_and_validate_config(Some(&config_path))?;
    println!("Configuration valid: {}", config_path.display());
    Ok(())
}

pub async fn handle_path() -> anyhow::Result<()> {
    println!("{}", Paths::config_file().display());
    Ok(())
}

fn confirm_overwrite(path: &Path) -> anyhow::Result<bool> {
    print!(
        "Config already exists at {}. Overwrite? [y/N] ",
        path.display()
    );
    io::stdout().flush()?;

    let mut input = String::new();
    io::stdin().read_line(&mut input)?;
    let response = input.trim();
    Ok(response.eq_ignore_ascii_case("y") || response.eq_ignore_ascii_case("yes"))
}

// The config file holds API keys and calendar credentials.
fn set_file_permissions(path: &Path) {
    #[cfg(unix)]
    {
        use std::os::unix::fs::PermissionsExt;
        if let Err(err) = fs::set_permissions(path, fs::Permissions::from_mode(0o600)) {
            eprintln!("Warning: failed to set config file permissions: {err}");
        }
    }
}

// Kept in lockstep with the template users copy by hand.
fn generate_example_config_yaml() -> &'static str {
    include_str!("../../../config.example.yaml")
}
