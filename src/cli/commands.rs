//! CLI command definitions and handlers.
//!
//! Each subcommand is implemented as a function that takes the parsed
//! arguments and returns an `anyhow::Result<()>`. Credentials come from
//! flags, environment variables, or the config file, in that order.

use anyhow::{Context, bail};
use clap::{Parser, Subcommand};
use tokio::runtime::Runtime;
use tracing::warn;

use crate::catalog::CatalogClient;
use crate::config::Config;
use crate::model::{Song, SongSelection};
use crate::pod::{Identity, PodClient};
use crate::recommend::{Backend, RecommendClient};
use crate::session::{CycleOutcome, SessionOrchestrator};
use crate::config;

/// TuneScout CLI - LLM music recommendations saved to your Solid pod
#[derive(Parser)]
#[command(author, version, about, long_about = None, arg_required_else_help = true)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,
}

/// Available subcommands
#[derive(Subcommand)]
pub enum Commands {
    /// Search the song catalog
    Search {
        /// Free-text search term
        term: String,
    },
    /// Run one recommendation cycle: checkpoint the selection, ask the
    /// backend, checkpoint again with the recommendations
    Recommend {
        /// A selected song as "Title - Artist" (repeat up to 5 times)
        #[arg(short, long = "song", required = true)]
        songs: Vec<String>,
        /// Free-text notes about what you're after
        #[arg(short, long, default_value = "")]
        notes: String,
        /// LLM backend to ask
        #[arg(short, long, default_value = "openai", value_parser = parse_backend)]
        backend: Backend,
        /// Your WebID (or set WEB_ID / config [identity])
        #[arg(long, env = "WEB_ID")]
        web_id: Option<String>,
        /// API key for the openai backend (or set OPENAI_API_KEY)
        #[arg(long, env = "OPENAI_API_KEY", hide_env_values = true)]
        openai_api_key: Option<String>,
        /// API key for the huggingface backend (or set HF_API_KEY)
        #[arg(long, env = "HF_API_KEY", hide_env_values = true)]
        hf_api_key: Option<String>,
        /// Bearer token for pod access (or set POD_TOKEN)
        #[arg(long, env = "POD_TOKEN", hide_env_values = true)]
        pod_token: Option<String>,
    },
    /// List prior checkpoints stored in the pod
    History {
        /// Your WebID (or set WEB_ID / config [identity])
        #[arg(long, env = "WEB_ID")]
        web_id: Option<String>,
        /// Bearer token for pod access (or set POD_TOKEN)
        #[arg(long, env = "POD_TOKEN", hide_env_values = true)]
        pod_token: Option<String>,
    },
}

fn parse_backend(s: &str) -> Result<Backend, String> {
    s.parse()
}

/// Dispatch the parsed command.
pub fn run_command(cli: Cli) -> anyhow::Result<()> {
    let config = config::load();
    let rt = Runtime::new().context("Failed to create async runtime")?;

    match cli.command {
        Commands::Search { term } => Ok(rt.block_on(cmd_search(&config, &term))?),
        Commands::Recommend {
            songs,
            notes,
            backend,
            web_id,
            openai_api_key,
            hf_api_key,
            pod_token,
        } => rt.block_on(cmd_recommend(
            &config,
            songs,
            &notes,
            backend,
            web_id,
            openai_api_key,
            hf_api_key,
            pod_token,
        )),
        Commands::History { web_id, pod_token } => {
            rt.block_on(cmd_history(&config, web_id, pod_token))
        }
    }
}

async fn cmd_search(config: &Config, term: &str) -> crate::error::Result<()> {
    let client = if config.endpoints.catalog_url.is_empty() {
        CatalogClient::new()
    } else {
        CatalogClient::with_base_url(&config.endpoints.catalog_url)
    };

    let songs = client.search(term).await?;
    if songs.is_empty() {
        println!("No results for \"{term}\".");
        return Ok(());
    }
    for song in songs {
        let album = song
            .in_album
            .map(|a| format!(" ({a})"))
            .unwrap_or_default();
        println!("[{}] {} - {}{}", song.id, song.title, song.artist, album);
    }
    Ok(())
}

#[allow(clippy::too_many_arguments)]
async fn cmd_recommend(
    config: &Config,
    songs: Vec<String>,
    notes: &str,
    backend: Backend,
    web_id: Option<String>,
    openai_api_key: Option<String>,
    hf_api_key: Option<String>,
    pod_token: Option<String>,
) -> anyhow::Result<()> {
    let identity = resolve_identity(config, web_id)?;
    let pod_token = pod_token.or_else(|| config.credentials.pod_token.clone());
    let openai_key = openai_api_key
        .or_else(|| config.credentials.openai_api_key.clone())
        .unwrap_or_default();
    let hf_key = hf_api_key
        .or_else(|| config.credentials.hf_api_key.clone())
        .unwrap_or_default();

    let mut selection = SongSelection::new();
    for (i, entry) in songs.iter().enumerate() {
        let (title, artist) = match entry.split_once(" - ") {
            Some((title, artist)) => (title.trim(), artist.trim()),
            None => (entry.trim(), "Unknown"),
        };
        if !selection.add(Song::new(format!("cli-{i}"), title, artist)) {
            warn!("ignoring \"{entry}\": selection is full or the song repeats");
        }
    }

    let orchestrator = SessionOrchestrator::new(
        RecommendClient::new(openai_key, hf_key),
        PodClient::new(pod_token),
    );

    match orchestrator
        .run_cycle(&identity, &selection, notes, backend)
        .await?
    {
        CycleOutcome::Completed(report) => {
            println!("Recommendations:");
            for song in &report.recommended {
                println!("  {} - {}", song.title, song.artist);
            }
            println!("\nSelection checkpoint: {}", report.pre_location);
            match report.post_location {
                Some(location) => println!("Full checkpoint:      {location}"),
                None => {
                    if let Some(e) = report.post_save_error {
                        warn!("recommendations were not checkpointed: {e}");
                    }
                }
            }
            Ok(())
        }
        CycleOutcome::Discarded => bail!("The session was invalidated mid-cycle"),
    }
}

async fn cmd_history(
    config: &Config,
    web_id: Option<String>,
    pod_token: Option<String>,
) -> anyhow::Result<()> {
    let identity = resolve_identity(config, web_id)?;
    let pod_token = pod_token.or_else(|| config.credentials.pod_token.clone());
    let client = PodClient::new(pod_token);

    let roots = client.resolve_storage_roots(&identity.web_id).await?;
    let root = roots
        .first()
        .context("profile listed no storage root")?;

    let locations = client.list_records(root).await?;
    if locations.is_empty() {
        println!("No checkpoints found under {}.", PodClient::container_url(root));
        return Ok(());
    }

    for location in locations {
        match client.read_record(&location).await {
            Ok(record) => {
                let kind = if record.recommended_songs.is_empty() {
                    "selection"
                } else {
                    "full"
                };
                println!(
                    "{}  {}  {} selected, {} recommended  ({})",
                    record.created.to_rfc3339(),
                    kind,
                    record.selected_songs.len(),
                    record.recommended_songs.len(),
                    location,
                );
                if !record.description.is_empty() {
                    println!("    notes: {}", record.description);
                }
            }
            Err(e) => warn!("skipping {location}: {e}"),
        }
    }
    Ok(())
}

fn resolve_identity(config: &Config, web_id: Option<String>) -> anyhow::Result<Identity> {
    let Some(web_id) = web_id.or_else(|| config.identity.web_id.clone()) else {
        bail!("No WebID given: pass --web-id, set WEB_ID, or add it to the config file");
    };
    Ok(Identity { web_id })
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;

    #[test]
    fn test_cli_parses() {
        Cli::command().debug_assert();
    }

    #[test]
    fn test_recommend_args() {
        let cli = Cli::parse_from([
            "tune-scout",
            "recommend",
            "-s",
            "Hurt - Johnny Cash",
            "-s",
            "One - U2",
            "--backend",
            "huggingface",
            "--web-id",
            "https://user.pod.example/profile/card#me",
        ]);
        let Commands::Recommend { songs, backend, .. } = cli.command else {
            panic!("expected recommend");
        };
        assert_eq!(songs.len(), 2);
        assert_eq!(backend, Backend::HuggingFace);
    }

    #[test]
    fn test_bad_backend_rejected() {
        let result = Cli::try_parse_from([
            "tune-scout",
            "recommend",
            "-s",
            "A - B",
            "--backend",
            "nope",
        ]);
        assert!(result.is_err());
    }
}
