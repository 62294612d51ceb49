//! drive_audio CLI - Export Google Drive audio links as CSV.

use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};

use drive_audio::client::DRIVE_API_BASE;
use drive_audio::extract::extract_to;
use drive_audio::logging::init_logging;
use drive_audio::web::{serve, AppState};
use drive_audio::{extract_folder_id, CredentialSource, DriveClient};

/// Export links to every audio file in a Google Drive folder.
#[derive(Parser)]
#[command(name = "drive_audio")]
#[command(author, version, about, long_about = None)]
struct Cli {
    /// TOML secrets file with a [gcp_service_account] table.
    #[arg(long, env = "DRIVE_AUDIO_SECRETS", default_value = "secrets.toml")]
    secrets: PathBuf,

    /// Service account JSON key file. Takes precedence over --secrets.
    #[arg(long, env = "GOOGLE_APPLICATION_CREDENTIALS")]
    credentials: Option<PathBuf>,

    /// Log level or filter directives.
    #[arg(long, env = "RUST_LOG", default_value = "info")]
    log_level: String,

    /// Drive API base URL.
    #[arg(long, env = "DRIVE_API_BASE", default_value = DRIVE_API_BASE, hide = true)]
    api_base: String,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Serve the extraction form over HTTP.
    Serve {
        /// Address to bind.
        #[arg(long, env = "DRIVE_AUDIO_HOST", default_value = "127.0.0.1")]
        host: String,

        /// Port to bind.
        #[arg(long, env = "DRIVE_AUDIO_PORT", default_value_t = 8080)]
        port: u16,
    },

    /// Scan a folder once and write the CSV.
    Extract {
        /// Folder URL or ID.
        folder: String,

        /// Output file. Writes to stdout when omitted.
        #[arg(long, short = 'o')]
        output: Option<PathBuf>,
    },
}

#[actix_web::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();
    init_logging(&cli.log_level)?;

    let credentials = CredentialSource::new(cli.credentials, cli.secrets);

    match cli.command {
        Commands::Serve { host, port } => {
            let state = AppState::new(credentials, cli.api_base);
            serve(state, &host, port)
                .await
                .with_context(|| format!("Failed to serve on {}:{}", host, port))?;
        }

        Commands::Extract { folder, output } => {
            let folder_id = extract_folder_id(&folder)
                .with_context(|| format!("Invalid folder URL or ID: {}", folder))?;

            let auth = credentials
                .authenticator()
                .with_context(|| format!("Failed to load credentials from {:?}", credentials))?;
            let client = DriveClient::with_base_url(auth, cli.api_base);

            let mut stdout = std::io::stdout().lock();
            extract_to(&client, &folder_id, output.as_deref(), &mut stdout)
                .await
                .with_context(|| format!("Failed to export folder: {}", folder_id))?;
        }
    }

    Ok(())
}
