use std::path::Path;

use anyhow::{bail, Result};

use kinetype_core::AppConfig;

pub fn run(force: bool) -> Result<()> {
    let path = AppConfig::config_path();
    write_to(&path, force)?;
    println!("Wrote default configuration to {}", path.display());
    Ok(())
}

/// Write the default configuration to `path`. The existing file is never
/// parsed, so a broken config can be replaced with `force`.
pub fn write_to(path: &Path, force: bool) -> Result<()> {
    if path.exists() && !force {
        bail!(
            "Config already exists at {}\nUse --force to overwrite it.",
            path.display()
        );
    }

    AppConfig::default().save_to(path)?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn scratch(name: &str) -> std::path::PathBuf {
        std::env::temp_dir()
            .join(format!("kinetype-init-{}-{}", name, std::process::id()))
            .join("config.toml")
    }

    #[test]
    fn test_force_replaces_unparsable_config() {
        let path = scratch("force");
        std::fs::create_dir_all(path.parent().unwrap()).unwrap();
        std::fs::write(&path, "[hero\nbroken").unwrap();
        assert!(AppConfig::load_from(&path).is_err());

        write_to(&path, true).unwrap();

        let loaded = AppConfig::load_from(&path).unwrap();
        assert_eq!(loaded.hero.first_word, AppConfig::default().hero.first_word);
        std::fs::remove_dir_all(path.parent().unwrap()).ok();
    }

    #[test]
    fn test_existing_file_kept_without_force() {
        let path = scratch("keep");
        std::fs::create_dir_all(path.parent().unwrap()).unwrap();
        std::fs::write(&path, "[hero\nbroken").unwrap();

        assert!(write_to(&path, false).is_err());
        assert_eq!(std::fs::read_to_string(&path).unwrap(), "[hero\nbroken");
        std::fs::remove_dir_all(path.parent().unwrap()).ok();
    }
}
