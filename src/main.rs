//! Iris-Serve - Main Entry Point

use clap::{Parser, Subcommand};
use tracing::info;

use iris_serve::model::{class_label, Classifier, NearestCentroidClassifier};
use iris_serve::server::{run_server, ServerConfig};

#[derive(Parser)]
#[command(name = "iris-serve")]
#[command(version = env!("CARGO_PKG_VERSION"))]
#[command(about = "Web-facing inference service for the Iris classification task")]
struct Cli {
    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Subcommand)]
enum Commands {
    /// Run the HTTP server
    Serve {
        /// Address to bind
        #[arg(long)]
        host: Option<String>,

        /// Port to bind
        #[arg(short, long)]
        port: Option<u16>,

        /// Path to the model artifact
        #[arg(short, long)]
        model: Option<String>,
    },

    /// Classify a single sample offline
    Predict {
        /// Path to the model artifact (built-in default model when omitted)
        #[arg(short, long)]
        model: Option<String>,

        sepal_length: f64,
        sepal_width: f64,
        petal_length: f64,
        petal_width: f64,
    },

    /// Write the built-in default model artifact to a file
    InitModel {
        /// Output path
        #[arg(short, long, default_value = "iris_model.json")]
        output: String,
    },
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Initialize logging
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "iris_serve=info".into()),
        )
        .init();

    let cli = Cli::parse();

    match cli.command {
        Some(Commands::Serve { host, port, model }) => {
            let mut config = ServerConfig::default();
            if let Some(host) = host {
                config.host = host;
            }
            if let Some(port) = port {
                config.port = port;
            }
            if let Some(model) = model {
                config.model_path = model;
            }
            run_server(config).await?;
        }
        Some(Commands::Predict { model, sepal_length, sepal_width, petal_length, petal_width }) => {
            let classifier = match model {
                Some(path) => NearestCentroidClassifier::load(&path)?,
                None => NearestCentroidClassifier::iris_default(),
            };
            let features = [sepal_length, sepal_width, petal_length, petal_width];
            let index = classifier.classify(&features)?;
            let label = class_label(index)?;
            println!("{} ({})", label, index);
        }
        Some(Commands::InitModel { output }) => {
            NearestCentroidClassifier::iris_default().save(&output)?;
            info!(path = %output, "Default model artifact written");
            println!("wrote {}", output);
        }
        None => {
            run_server(ServerConfig::default()).await?;
        }
    }

    Ok(())
}
