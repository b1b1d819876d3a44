use std::path::PathBuf;

use anyhow::Context;
use clap::{Parser, Subcommand, ValueEnum};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use epicgen::api::{self, AppState};
use epicgen::client::GeneratorClient;
use epicgen::config::Config;
use epicgen::export::Export;
use epicgen::models::{FeatureRequest, FeatureResult};
use epicgen::render::{
    render, render_value, result_from_value, to_portable_text, value_from_json,
};

#[derive(Parser)]
#[command(name = "epicgen")]
#[command(about = "Turn feature descriptions into epics and stories")]
struct Cli {
    /// Generation backend URL (overrides config file and EPICGEN_BACKEND_URL)
    #[arg(long, global = true)]
    backend_url: Option<String>,

    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Subcommand)]
enum Commands {
    /// Generate an epic from a description
    Generate {
        /// Free-text feature description
        #[arg(required_unless_present = "idea", conflicts_with = "idea")]
        description: Option<String>,

        /// Use suggested idea N (1-based) as the description
        #[arg(long)]
        idea: Option<usize>,

        /// Focus used when fetching ideas for --idea
        #[arg(long, requires = "idea")]
        focus: Option<String>,

        #[arg(short, long, value_enum, default_value_t = Format::Markdown)]
        format: Format,

        /// Also write generated-feature.md into this directory
        #[arg(long)]
        save: Option<PathBuf>,
    },
    /// List suggested feature ideas
    Ideas {
        /// Narrow suggestions to a topic
        #[arg(long)]
        focus: Option<String>,
    },
    /// Render a saved result JSON file
    Render {
        file: PathBuf,

        #[arg(short, long, value_enum, default_value_t = Format::Markdown)]
        format: Format,
    },
    /// Start the view server
    Serve {
        /// Port for the HTTP server
        #[arg(short, long)]
        port: Option<u16>,
    },
}

#[derive(Clone, Copy, ValueEnum)]
enum Format {
    Markdown,
    Html,
}

/// Initialize tracing on stderr so stdout carries only rendered output.
fn init_tracing() {
    let filter = tracing_subscriber::EnvFilter::new(
        std::env::var("RUST_LOG").unwrap_or_else(|_| "epicgen=info,tower_http=debug".into()),
    );

    tracing_subscriber::registry()
        .with(filter)
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();
}

fn print_result(result: &FeatureResult, format: Format) {
    match format {
        Format::Markdown => print!("{}", to_portable_text(result)),
        Format::Html => println!("{}", render(result).to_html()),
    }
}

async fn serve(client: GeneratorClient, port: u16) -> anyhow::Result<()> {
    let app = api::create_router(AppState::new(client));

    let listener = tokio::net::TcpListener::bind(format!("127.0.0.1:{}", port)).await?;
    tracing::info!("epicgen listening on http://127.0.0.1:{}", port);

    axum::serve(listener, app).await?;
    Ok(())
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();
    init_tracing();

    let mut config = Config::load();
    if let Some(url) = cli.backend_url {
        config.backend_url = url;
    }
    let client = GeneratorClient::new(config.backend_url.clone());
    tracing::debug!("Using generation backend {}", client.base_url());

    match cli.command {
        Some(Commands::Generate {
            description,
            idea,
            focus,
            format,
            save,
        }) => {
            let request = match (description, idea) {
                (Some(description), _) => FeatureRequest::new(description),
                (None, Some(n)) => {
                    let ideas = client
                        .try_fetch_ideas(focus.as_deref())
                        .await
                        .map_err(|e| anyhow::anyhow!(e.user_message()))?;
                    let picked = n
                        .checked_sub(1)
                        .and_then(|i| ideas.get(i))
                        .with_context(|| format!("No idea #{} ({} available)", n, ideas.len()))?;
                    tracing::info!("Using idea: {}", picked.short_title);
                    FeatureRequest::from(picked)
                }
                (None, None) => anyhow::bail!("A description or --idea is required"),
            };

            let result = client
                .generate_request(&request)
                .await
                .map_err(|e| anyhow::anyhow!(e.user_message()))?;
            print_result(&result, format);

            if let Some(dir) = save {
                let path = Export::from_result(&result).save_to(&dir)?;
                eprintln!("Saved {}", path.display());
            }
        }
        Some(Commands::Ideas { focus }) => {
            let list = client.fetch_ideas(focus.as_deref()).await;
            if let Some(message) = list.error_message() {
                anyhow::bail!(message);
            }
            for (i, idea) in list.ideas.iter().enumerate() {
                println!("{}. {}", i + 1, idea.short_title);
                println!("   {}", idea.long_description);
            }
        }
        Some(Commands::Render { file, format }) => {
            let text = std::fs::read_to_string(&file)
                .with_context(|| format!("Failed to read {}", file.display()))?;
            let value = value_from_json(&text)?;
            match format {
                Format::Markdown => print!("{}", to_portable_text(&result_from_value(value)?)),
                Format::Html => println!("{}", render_value(value)?.to_html()),
            }
        }
        Some(Commands::Serve { port }) => {
            serve(client, port.unwrap_or(config.port)).await?;
        }
        None => {
            serve(client, config.port).await?;
        }
    }

    Ok(())
}
