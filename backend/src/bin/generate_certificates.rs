//! Batch certificate generation
//!
//! Reads a template (JSON) and a recipient list (`name,email[,grade]` per
//! line), then writes `generated-certificates.json` and
//! `certificate-urls.csv` into the output directory.

use std::{fs, path::PathBuf};

use anyhow::Context;
use certificate_hub::{services::write_batch, Config};
use clap::Parser;
use shared::{generate_certificates, parse_recipient_lines, CertificateTemplate};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

/// Number of generated certificate paths echoed to the log
const PREVIEW_COUNT: usize = 3;

#[derive(Parser, Debug)]
#[command(name = "generate-certificates", about = "Generate certificate records in bulk")]
struct Cli {
    /// Template JSON file
    #[arg(long)]
    template: PathBuf,

    /// Recipient list, one `name,email[,grade]` per line
    #[arg(long)]
    recipients: PathBuf,

    /// Directory for the generated files
    #[arg(long, default_value = ".")]
    out_dir: PathBuf,

    /// Public site root for certificate URLs (defaults to the configured one)
    #[arg(long)]
    base_url: Option<String>,
}

fn main() -> anyhow::Result<()> {
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "generate_certificates=info,certificate_hub=info".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    dotenvy::dotenv().ok();
    let cli = Cli::parse();

    let base_url = match cli.base_url {
        Some(url) => url,
        None => Config::load()?.public_base_url,
    };

    let template_json = fs::read_to_string(&cli.template)
        .with_context(|| format!("reading template {}", cli.template.display()))?;
    let template: CertificateTemplate =
        serde_json::from_str(&template_json).context("parsing template JSON")?;

    let recipients_text = fs::read_to_string(&cli.recipients)
        .with_context(|| format!("reading recipients {}", cli.recipients.display()))?;
    let recipients = parse_recipient_lines(&recipients_text)?;

    let certificates = generate_certificates(&template, &recipients)?;
    tracing::info!("Generated {} certificates", certificates.len());

    let artifacts = write_batch(&cli.out_dir, &certificates, &base_url)?;
    tracing::info!("Certificates: {}", artifacts.json_path.display());
    tracing::info!("URL listing: {}", artifacts.csv_path.display());

    for certificate in certificates.iter().take(PREVIEW_COUNT) {
        tracing::info!("{}: {}", certificate.recipient_name, certificate.path());
    }

    Ok(())
}
