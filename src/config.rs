use std::path::{Path, PathBuf};

use crate::models::Config;

const SAMPLE_CONFIG: &str = include_str!("../config.sample.toml");

#[derive(Debug, thiserror::Error)]
pub enum Error {
    #[error("io error: {0}")]
    Io(#[from] std::io::Error),
    #[error("toml error: {0}")]
    Toml(#[from] toml::de::Error),
    #[error("{0}")]
    Invalid(String),
}

/// Load and merge one or more config files, in order.
pub fn load_all(paths: &[PathBuf]) -> Result<Config, Error> {
    let mut config: Option<Config> = None;

    for path in paths {
        log::info!("loading config: {}", path.display());
        let c = read_file(path)?;
        if let Some(ref mut existing) = config {
            merge(existing, c);
        } else {
            config = Some(c);
        }
    }

    config.ok_or_else(|| Error::Invalid("no config files specified".to_string()))
}

/// Generate sample config file.
pub fn generate_sample(path: &Path) -> Result<(), Error> {
    if path.exists() {
        return Err(Error::Invalid("config file already exists".to_string()));
    }
    std::fs::write(path, SAMPLE_CONFIG)?;
    Ok(())
}

/// Load configuration from a given TOML file.
fn read_file(path: &Path) -> Result<Config, Error> {
    let content = std::fs::read_to_string(path)?;
    parse(&content)
}

fn parse(content: &str) -> Result<Config, Error> {
    let cfg: Config = toml::from_str(content)?;
    if cfg.app.max_results == Some(0) {
        return Err(Error::Invalid("app.max_results should be > 0".to_string()));
    }
    if cfg.app.min_word_len == Some(0) {
        return Err(Error::Invalid("app.min_word_len should be > 0".to_string()));
    }
    Ok(cfg)
}

/// Merge the given src config into the dest config struct.
fn merge(dest: &mut Config, src: Config) {
    if !src.app.address.is_empty() {
        dest.app.address = src.app.address;
    }
    if src.app.max_results.is_some() {
        dest.app.max_results = src.app.max_results;
    }
    if src.app.min_word_len.is_some() {
        dest.app.min_word_len = src.app.min_word_len;
    }
    if src.app.fold_diacritics.is_some() {
        dest.app.fold_diacritics = src.app.fold_diacritics;
    }

    // Collections are merged by name; a later file can repoint one.
    for (name, c) in src.collection {
        if c.path.is_empty() && dest.collection.contains_key(&name) {
            continue;
        }
        dest.collection.insert(name, c);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    #[test]
    fn test_sample_config_parses() {
        let cfg = parse(SAMPLE_CONFIG).unwrap();

        assert_eq!(cfg.app.max_results, Some(10));
        assert_eq!(cfg.app.min_word_len, Some(2));
        let names: Vec<&str> = cfg.collection.keys().map(|k| k.as_str()).collect();
        assert_eq!(names, vec!["leagues", "players", "teams"]);
    }

    #[test]
    fn test_defaults() {
        let cfg = parse("").unwrap();

        assert!(cfg.app.address.is_empty());
        assert_eq!(cfg.app.max_results, None);
        assert_eq!(cfg.app.fold_diacritics, None);
        assert!(cfg.collection.is_empty());
    }

    #[test]
    fn test_zero_results_rejected() {
        assert!(matches!(
            parse("[app]\nmax_results = 0\n"),
            Err(Error::Invalid(_))
        ));
    }

    #[test]
    fn test_zero_word_len_rejected() {
        assert!(matches!(
            parse("[app]\nmin_word_len = 0\n"),
            Err(Error::Invalid(_))
        ));
        assert!(parse("[app]\nmin_word_len = 1\n").is_ok());
    }

    #[test]
    fn test_merge() {
        let mut dest = parse(
            r#"
            [app]
            address = ":8000"
            [collection.players]
            path = "a/players.json"
            [collection.teams]
            path = "a/teams.json"
            "#,
        )
        .unwrap();
        let src = parse(
            r#"
            [app]
            max_results = 5
            fold_diacritics = true
            [collection.teams]
            path = "b/teams.json"
            [collection.players]
            [collection.leagues]
            path = "b/leagues.json"
            "#,
        )
        .unwrap();

        merge(&mut dest, src);

        assert_eq!(dest.app.address, ":8000");
        assert_eq!(dest.app.max_results, Some(5));
        assert_eq!(dest.app.fold_diacritics, Some(true));
        assert_eq!(dest.collection["players"].path, "a/players.json");
        assert_eq!(dest.collection["teams"].path, "b/teams.json");
        assert_eq!(dest.collection["leagues"].path, "b/leagues.json");
    }

    #[test]
    fn test_load_all_and_generate() {
        let dir = tempfile::tempdir().unwrap();
        let sample = dir.path().join("config.toml");
        generate_sample(&sample).unwrap();
        assert!(generate_sample(&sample).is_err());

        let extra = dir.path().join("extra.toml");
        let mut f = std::fs::File::create(&extra).unwrap();
        f.write_all(b"[app]\naddress = \"127.0.0.1:9100\"\n").unwrap();

        let cfg = load_all(&[sample, extra]).unwrap();
        assert_eq!(cfg.app.address, "127.0.0.1:9100");
        assert_eq!(cfg.collection.len(), 3);

        assert!(load_all(&[]).is_err());
        assert!(load_all(&[dir.path().join("nope.toml")]).is_err());
    }
}
