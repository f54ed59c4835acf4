use clap::{Parser, Subcommand};
use site_client::{ClientConfig, ContentClient, MutationClient};
use site_core::{config::content_dir_from_env_value, ContentStore, CoreConfig, PageSlug};
use std::sync::Arc;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

#[derive(Parser)]
#[command(name = "site")]
#[command(about = "Site content CLI")]
struct Cli {
    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Subcommand)]
enum Commands {
    /// List all pages in the content store
    List {
        /// Content directory (defaults to content/pages)
        #[arg(long, env = "SITE_CONTENT_DIR")]
        content_dir: Option<String>,
    },
    /// Print a stored page document
    Show {
        /// Page slug
        slug: String,
        /// Content directory (defaults to content/pages)
        #[arg(long, env = "SITE_CONTENT_DIR")]
        content_dir: Option<String>,
        /// Reformat the document instead of printing it as stored
        #[arg(long)]
        pretty: bool,
    },
    /// Resolve a page through the content API, falling back to legacy
    Resolve {
        /// Page slug
        slug: String,
        /// Base URL of the content API
        #[arg(long, env = "SITE_API_URL", default_value = "http://localhost:3000")]
        api_url: String,
    },
    /// Submit a JSON payload once, with a fresh idempotency key
    Submit {
        /// Absolute URL, or a route relative to the API URL
        endpoint: String,
        /// JSON payload
        payload: String,
        /// Base URL of the content API
        #[arg(long, env = "SITE_API_URL", default_value = "http://localhost:3000")]
        api_url: String,
    },
}

fn store(content_dir: Option<String>) -> Result<ContentStore, Box<dyn std::error::Error>> {
    let cfg = CoreConfig::new(content_dir_from_env_value(content_dir))?;
    Ok(ContentStore::new(Arc::new(cfg)))
}

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    dotenvy::dotenv().ok();

    // Diagnostics go to stderr so stdout stays machine-readable.
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::from_default_env()
                .add_directive("site_client=warn".parse()?),
        )
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();

    let cli = Cli::parse();

    match cli.command {
        Some(Commands::List { content_dir }) => {
            let slugs = store(content_dir)?.list_slugs()?;
            if slugs.is_empty() {
                println!("No pages found.");
            } else {
                for slug in slugs {
                    println!("{}", slug);
                }
            }
        }
        Some(Commands::Show {
            slug,
            content_dir,
            pretty,
        }) => {
            let slug = PageSlug::parse(&slug)?;
            let document = store(content_dir)?.read(&slug)?;
            if pretty {
                println!("{}", serde_json::to_string_pretty(document.value())?);
            } else {
                println!("{}", document.raw());
            }
        }
        Some(Commands::Resolve { slug, api_url }) => {
            let client = ContentClient::new(&ClientConfig::new(&api_url)?)?;
            let resolved = client.resolve(&slug).await;
            println!("{}", serde_json::to_string_pretty(&resolved)?);
        }
        Some(Commands::Submit {
            endpoint,
            payload,
            api_url,
        }) => {
            let payload: serde_json::Value = serde_json::from_str(&payload)?;
            let client = MutationClient::new(&ClientConfig::new(&api_url)?)?;
            let response: serde_json::Value = client.submit(&endpoint, &payload).await?;
            println!("{}", serde_json::to_string_pretty(&response)?);
        }
        None => {
            println!("Use 'site --help' for commands");
        }
    }

    Ok(())
}
