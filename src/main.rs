mod autocomplete;
mod cli;
mod collate;
mod config;
mod handlers;
mod http;
mod init;
mod loader;
mod models;
mod trie;

use std::{collections::BTreeMap, path::Path, sync::Arc};

use clap::Parser;

use autocomplete::{Autocomplete, Options};
use cli::Commands;
use handlers::Ctx;
use models::DEFAULT_ADDRESS;

#[cfg(target_env = "musl")]
#[global_allocator]
static GLOBAL: mimalloc::MiMalloc = mimalloc::MiMalloc;

#[tokio::main]
async fn main() {
    init::init_logger();

    let cli = cli::Cli::parse();

    // Handle CLI flags.
    if let Some(cmd) = cli.command {
        match cmd {
            // Generate a new config file.
            Commands::NewConfig { path } => {
                match config::generate_sample(&path) {
                    Ok(_) => {
                        log::info!("config file generated: {}", path.display());
                    }
                    Err(e) => {
                        log::error!("error generating config: {}", e);
                        std::process::exit(1);
                    }
                }
                return;
            }

            // One-off search against a single collection.
            Commands::Query { collection, query } => {
                let config = init::init_config(&cli.config);
                let Some(coll) = config.collection.get(&collection) else {
                    log::error!("unknown collection: {}", collection);
                    std::process::exit(1);
                };

                let records = match loader::load_file(Path::new(&coll.path)).await {
                    Ok(r) => r,
                    Err(e) => {
                        log::error!("error loading collection '{}': {}", collection, e);
                        std::process::exit(1);
                    }
                };

                let mut c = BTreeMap::new();
                c.insert(collection.clone(), records);
                let ac = Autocomplete::from_collections(c, Options::from(&config.app));
                let res = ac.query(&collection, &query);

                match serde_json::to_string_pretty(&res) {
                    Ok(out) => println!("{}", out),
                    Err(e) => {
                        log::error!("error encoding results: {}", e);
                        std::process::exit(1);
                    }
                }
                return;
            }
        }
    }

    // Load config.
    let config = init::init_config(&cli.config);

    // Load collections and build the index.
    let index = init::init_index(&config).await;

    let ctx = Arc::new(Ctx {
        index,
        collections: config.collection.keys().cloned().collect(),
        version: env!("VERSION").to_string(),
    });

    // Start the HTTP server.
    let routes = http::init_handlers(ctx);
    let addr = if config.app.address.is_empty() {
        DEFAULT_ADDRESS.to_string()
    } else {
        config.app.address
    };

    log::info!("starting server on {}", addr);

    let listener = match tokio::net::TcpListener::bind(&addr).await {
        Ok(l) => l,
        Err(e) => {
            log::error!("error listening on {}: {}", addr, e);
            std::process::exit(1);
        }
    };

    if let Err(e) = axum::serve(listener, routes).await {
        log::error!("server error: {}", e);
        std::process::exit(1);
    }
}
