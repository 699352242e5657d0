use std::path::{Path, PathBuf};
use std::fs;
use log::debug;
use serde_json::{Map, Value};

use crate::config::types::Config;
use crate::config::validation;
use crate::utils::error::{BoxResult, FolioError};

/// Configuration file names to look for
const CONFIG_FILES: [&str; 4] = ["folio.yml", "folio.yaml", "folio.toml", "folio.json"];

/// Load configuration from config files found in `dir`, or from the given files.
///
/// Files are layered in order: every key a file sets replaces the value set
/// by the files before it, including a value equal to the default.
pub fn load_config<P: AsRef<Path>>(
    dir: P,
    config_files: Option<Vec<PathBuf>>
) -> BoxResult<Config> {
    // Start with default configuration
    let mut merged = serde_json::to_value(Config::default())?;

    let config_paths = match config_files {
        Some(paths) if !paths.is_empty() => paths,
        _ => find_default_config_files(&dir),
    };

    if config_paths.is_empty() {
        debug!("No configuration files found, using defaults");
    } else {
        for path in config_paths {
            debug!("Loading configuration from {}", path.display());
            merge_config_file(&mut merged, &path)?;
        }
    }

    let config: Config = serde_json::from_value(merged)
        .map_err(|e| FolioError::Config(format!("Invalid configuration: {}", e)))?;
    validation::validate_config(&config)?;

    debug!("Configuration loaded: {:?}", config);
    Ok(config)
}

/// Find default configuration files
fn find_default_config_files<P: AsRef<Path>>(dir: P) -> Vec<PathBuf> {
    CONFIG_FILES
        .iter()
        .map(|name| dir.as_ref().join(name))
        .filter(|path| path.exists())
        .collect()
}

/// Merge the keys set by a configuration file into `merged`
fn merge_config_file(merged: &mut Value, config_path: &Path) -> BoxResult<()> {
    if !config_path.exists() {
        return Err(FolioError::Config(format!(
            "Configuration file not found: {}", config_path.display()
        )).into());
    }

    let content = fs::read_to_string(config_path)
        .map_err(|e| FolioError::Config(format!(
            "Failed to read configuration file {}: {}", config_path.display(), e
        )))?;

    let ext = config_path
        .extension()
        .map(|e| e.to_string_lossy().to_lowercase())
        .unwrap_or_else(|| "yml".to_string());

    let file_values = parse_config(&content, &ext, config_path)?;
    merge_values(merged, file_values);

    Ok(())
}

/// Parse configuration text by file extension, keeping only the keys it sets.
///
/// The text is also checked against the `Config` shape so a bad value is
/// reported against the file that holds it.
fn parse_config(content: &str, ext: &str, path: &Path) -> BoxResult<Value> {
    let parsed: Result<Value, String> = match ext {
        "yml" | "yaml" => serde_yaml::from_str(content).map_err(|e| e.to_string()),
        "toml" => toml::from_str(content).map_err(|e| e.to_string()),
        "json" => serde_json::from_str(content).map_err(|e| e.to_string()),
        other => {
            return Err(FolioError::Config(format!(
                "Unsupported configuration file format: {}", other
            )).into());
        }
    };

    let values = match parsed {
        // An empty YAML file sets nothing
        Ok(Value::Null) => Value::Object(Map::new()),
        Ok(values) => values,
        Err(e) => {
            return Err(FolioError::Config(format!(
                "Failed to parse configuration ({}): {}", path.display(), e
            )).into());
        }
    };

    serde_json::from_value::<Config>(values.clone()).map_err(|e| FolioError::Config(format!(
        "Invalid configuration ({}): {}", path.display(), e
    )))?;

    Ok(values)
}

/// Overlay `source` onto `target`; nested tables merge key by key
fn merge_values(target: &mut Value, source: Value) {
    match (target, source) {
        (Value::Object(target), Value::Object(source)) => {
            for (key, value) in source {
                match target.get_mut(&key) {
                    Some(existing) => merge_values(existing, value),
                    None => {
                        target.insert(key, value);
                    }
                }
            }
        }
        (target, source) => *target = source,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::SlugCollisionPolicy;

    #[test]
    fn test_defaults_without_files() {
        let dir = tempfile::tempdir().unwrap();
        let config = load_config(dir.path(), None).unwrap();
        assert_eq!(config, Config::default());
        assert_eq!(config.posts_dir, "blog");
        assert_eq!(config.data_file, PathBuf::from("site_data.json"));
    }

    #[test]
    fn test_yaml_config_is_discovered() {
        let dir = tempfile::tempdir().unwrap();
        fs::write(
            dir.path().join("folio.yml"),
            "destination: out\nposts_dir: posts\nslug_collisions: overwrite\nmarkdown:\n  escape_html: true\n",
        ).unwrap();

        let config = load_config(dir.path(), None).unwrap();
        assert_eq!(config.destination, PathBuf::from("out"));
        assert_eq!(config.posts_dir, "posts");
        assert_eq!(config.slug_collisions, SlugCollisionPolicy::Overwrite);
        assert!(config.markdown.escape_html);
        assert_eq!(config.home_page, "index.html");
    }

    #[test]
    fn test_toml_and_json_configs() {
        let dir = tempfile::tempdir().unwrap();
        let toml_path = dir.path().join("site.toml");
        fs::write(&toml_path, "logo = \"XY.\"\npage_extension = \"htm\"\n").unwrap();
        let json_path = dir.path().join("site.json");
        fs::write(&json_path, "{\"data_file\": \"content.json\"}").unwrap();

        let config = load_config(dir.path(), Some(vec![toml_path, json_path])).unwrap();
        assert_eq!(config.logo.as_deref(), Some("XY."));
        assert_eq!(config.page_extension, "htm");
        assert_eq!(config.data_file, PathBuf::from("content.json"));
    }

    #[test]
    fn test_missing_explicit_file_is_an_error() {
        let dir = tempfile::tempdir().unwrap();
        let result = load_config(dir.path(), Some(vec![dir.path().join("absent.yml")]));
        assert!(result.is_err());
    }

    #[test]
    fn test_invalid_config_is_rejected() {
        let dir = tempfile::tempdir().unwrap();
        fs::write(dir.path().join("folio.yml"), "posts_dir: a/b\n").unwrap();
        let err = load_config(dir.path(), None).unwrap_err();
        assert!(err.to_string().contains("posts_dir"));
    }

    #[test]
    fn test_later_file_can_restore_defaults() {
        let dir = tempfile::tempdir().unwrap();
        let first = dir.path().join("first.yml");
        fs::write(
            &first,
            "destination: out\nlogo: AB.\nslug_collisions: overwrite\nmarkdown:\n  escape_html: true\n",
        ).unwrap();
        let second = dir.path().join("second.yml");
        fs::write(
            &second,
            "destination: public\nlogo: null\nslug_collisions: disambiguate\nmarkdown:\n  escape_html: false\n",
        ).unwrap();

        let config = load_config(dir.path(), Some(vec![first, second])).unwrap();
        assert_eq!(config, Config::default());
    }

    #[test]
    fn test_unset_keys_survive_later_files() {
        let dir = tempfile::tempdir().unwrap();
        let first = dir.path().join("first.toml");
        fs::write(&first, "posts_dir = \"notes\"\n[markdown]\nescape_html = true\n").unwrap();
        let second = dir.path().join("second.json");
        fs::write(&second, "{\"page_extension\": \"htm\", \"markdown\": {}}").unwrap();
        let empty = dir.path().join("empty.yml");
        fs::write(&empty, "").unwrap();

        let config = load_config(dir.path(), Some(vec![first, second, empty])).unwrap();
        assert_eq!(config.posts_dir, "notes");
        assert_eq!(config.page_extension, "htm");
        assert!(config.markdown.escape_html);
    }

    #[test]
    fn test_bad_value_names_its_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("broken.yml");
        fs::write(&path, "slug_collisions: sometimes\n").unwrap();
        let err = load_config(dir.path(), Some(vec![path])).unwrap_err();
        assert!(err.to_string().contains("broken.yml"));
    }
}
