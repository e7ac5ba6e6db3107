use clap::Parser;
use std::path::Path;
use tracing::info;

use user_repository::config::AppConfig;
use user_repository::{fixtures, logging, startup, UserService};

#[derive(Parser, Debug)]
#[command(name = "user-repository")]
#[command(about = "Add random users to a storage backend and list them")]
struct Args {
    /// Configuration file path (default: config.yaml)
    #[arg(short, long, default_value = "config.yaml")]
    config: String,

    /// Backend type: sqlite, postgresql or mongodb (overrides config file)
    #[arg(short, long)]
    backend: Option<String>,

    /// Connection URL (overrides config file)
    #[arg(long)]
    url: Option<String>,

    /// Number of random users to add
    #[arg(short = 'n', long, default_value_t = 1)]
    count: usize,
}

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    let args = Args::parse();

    let mut app_config = if args.config == "config.yaml" && !Path::new("config.yaml").exists() {
        AppConfig::default_config()
    } else {
        AppConfig::load_from_file(&args.config)?
    };

    if let Some(backend) = args.backend {
        app_config.backend.backend_type = backend;
    }
    if let Some(url) = args.url {
        app_config.backend.url = url;
    }

    logging::init(&app_config.logging)?;
    info!(
        backend = %app_config.backend.backend_type,
        config = %args.config,
        "starting"
    );

    let backend = startup::setup_backend(&app_config).await?;
    let service = UserService::new(backend.clone()).with_validation();

    for _ in 0..args.count {
        let user = service.add_user(&fixtures::random_user()).await?;
        info!(%user, "added user");
    }

    let users = service.get_all_users().await?;
    for user in &users {
        info!(%user, "stored user");
    }
    info!(total = users.len(), "total users");

    backend.cleanup().await?;
    Ok(())
}
