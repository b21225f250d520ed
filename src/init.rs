use std::{path::PathBuf, sync::Arc};

use crate::{
    autocomplete::{Autocomplete, Options},
    config, loader,
    models::Config,
};

/// Initialize logger.
pub fn init_logger() {
    env_logger::Builder::new()
        .filter_level(log::LevelFilter::Info)
        .parse_env("RUST_LOG")
        .format(|buf, record| {
            use std::io::Write;
            let level = if record.level() != log::Level::Info {
                format!("[{}] ", record.level())
            } else {
                String::new()
            };
            writeln!(
                buf,
                "{} {}:{} {}{}",
                chrono::Local::now().format("%Y-%m-%dT%H:%M:%S%.3f"),
                record.file().unwrap_or("unknown"),
                record.line().unwrap_or(0),
                level,
                record.args()
            )
        })
        .init();
}

/// Load and merge config files, exiting on error.
pub fn init_config(paths: &[PathBuf]) -> Config {
    match config::load_all(paths) {
        Ok(c) => c,
        Err(e) => {
            log::error!("error loading config: {}", e);
            std::process::exit(1);
        }
    }
}

/// Load the configured collections and build the search index.
pub async fn init_index(config: &Config) -> Arc<Autocomplete> {
    if config.collection.is_empty() {
        log::warn!("no collections configured");
    }

    let opt = Options::from(&config.app);
    let tries = loader::load_collections(&config.collection, opt).await;

    let mut ac = Autocomplete::new(opt);
    for (name, trie) in tries {
        ac.insert(&name, trie);
    }

    Arc::new(ac)
}
