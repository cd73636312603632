mod cli;

use std::path::PathBuf;

use clap::Parser;
use corpus_search::{Config, IndexService, Toggles};

use cli::{Cli, Commands};

#[tokio::main]
async fn main() {
    corpus_search::tracing::init();

    let cli = Cli::parse();
    let cwd = std::env::current_dir().unwrap_or_else(|_| PathBuf::from("."));
    let config = Config::load(&cwd).unwrap_or_default();

    if let Err(e) = run(cli, &config).await {
        eprintln!("Error: {e}");
        std::process::exit(1);
    }
}

async fn run(cli: Cli, config: &Config) -> anyhow::Result<()> {
    let service = IndexService::new();

    match cli.command {
        Commands::Build { corpus, data } | Commands::Rebuild { corpus, data } => {
            let corpus_dir = corpus
                .or_else(|| config.corpus_dir.clone())
                .unwrap_or_else(|| PathBuf::from("./corpus"));
            let data_dir = data
                .or_else(|| config.data_dir.clone())
                .unwrap_or_else(|| PathBuf::from("./data"));

            service.rebuild(&corpus_dir, &data_dir).await?;
            println!("Index built at {}", data_dir.display());
        }
        Commands::Search {
            query,
            data,
            top_k,
            spelling,
            synonyms,
            soundex,
        } => {
            let data_dir = data
                .or_else(|| config.data_dir.clone())
                .unwrap_or_else(|| PathBuf::from("./data"));
            let k = top_k
                .map(|raw| Config::resolve_top_k(&raw))
                .or(config.top_k)
                .unwrap_or(corpus_search::config::DEFAULT_TOP_K);
            let toggles = Toggles {
                spelling: spelling || config.spelling,
                synonyms: synonyms || config.synonyms,
                soundex: soundex || config.soundex,
            };

            service.load(&data_dir).await?;
            let hits = service.search(&query, k, toggles).await?;
            for hit in hits {
                println!("{}\t{}\t{:.6}", hit.doc_id, hit.filename, hit.score);
            }
        }
    }

    Ok(())
}
