//! scholar-graph - Entry Point
//!
//! Serves the paper graph over HTTP, or runs a single crawl from the command line.

use clap::{Parser, Subcommand};
use tracing_subscriber::{EnvFilter, layer::SubscriberExt, util::SubscriberInitExt};

use scholar_graph::{
    config::Config, formatters, models::OutputFormat, server::GraphServer,
    service::PaperGraphService,
};

#[derive(Parser, Debug)]
#[command(name = "scholar-graph")]
#[command(about = "Related-paper graph and collaborator suggestions for arXiv papers")]
#[command(version)]
struct Cli {
    #[command(subcommand)]
    command: Command,

    /// Log level (trace, debug, info, warn, error)
    #[arg(long, default_value = "info", env = "RUST_LOG", global = true)]
    log_level: String,

    /// Output logs as JSON
    #[arg(long, global = true)]
    json_logs: bool,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Run the HTTP server
    Serve {
        /// HTTP server port
        #[arg(long, default_value = "3001", env = "PORT")]
        port: u16,
    },
    /// Crawl one paper and print the result
    Crawl {
        /// arXiv identifier of the seed paper
        id: String,

        /// Override the maximum crawl depth
        #[arg(long)]
        depth: Option<u32>,

        /// Override the maximum related papers per node
        #[arg(long)]
        fan_out: Option<usize>,

        /// Output format
        #[arg(long, value_enum, default_value_t = OutputFormat::Json)]
        format: OutputFormat,
    },
}

fn init_tracing(log_level: &str, json: bool) {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(log_level));

    let subscriber = tracing_subscriber::registry().with(filter);

    // Logs go to stderr so `crawl` output on stdout stays clean.
    if json {
        subscriber.with(tracing_subscriber::fmt::layer().json().with_writer(std::io::stderr)).init();
    } else {
        subscriber
            .with(tracing_subscriber::fmt::layer().compact().with_writer(std::io::stderr))
            .init();
    }
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    dotenv::dotenv().ok();
    let cli = Cli::parse();

    init_tracing(&cli.log_level, cli.json_logs);

    tracing::info!(version = env!("CARGO_PKG_VERSION"), "Starting scholar-graph");

    let mut config = Config::from_env()?;

    match cli.command {
        Command::Serve { port } => {
            let service = PaperGraphService::from_config(&config).await?;
            GraphServer::new(service).run_http(port).await?;
        }
        Command::Crawl { id, depth, fan_out, format } => {
            if let Some(depth) = depth {
                config.crawl.max_depth = depth;
            }
            if let Some(fan_out) = fan_out {
                config.crawl.max_fan_out = fan_out;
            }

            let service = PaperGraphService::from_config(&config).await?;
            let exploration = service.explore(&id).await?;
            println!("{}", formatters::render(&exploration, format)?);
        }
    }

    Ok(())
}
