//! Portfolio Contact - terminal entry point
//!
//! Renders the contact form as a sequence of prompts on stdout, submits it
//! through the EmailJS relay, and prints the resulting banner. Logs go to
//! stderr so they never interleave with the prompts.

use anyhow::{bail, Result};
use portfolio_contact::{
    AsyncRelayClient, AsyncRelayClientImpl, Config, ContactField, ContactForm, FormSettings,
    Metrics, RelayClient, SubmitError,
};
use std::io::Write;
use std::sync::Arc;
use tokio::io::{AsyncBufReadExt, BufReader, Lines, Stdin};
use tracing::{error, info};
use tracing_subscriber::EnvFilter;

type InputLines = Lines<BufReader<Stdin>>;

fn label(field: ContactField) -> String {
    let name = match field {
        ContactField::Name => "Name",
        ContactField::Email => "Email",
        ContactField::Phone => "Phone",
        ContactField::Message => "Message",
    };
    if field.is_required() {
        format!("Your {} *", name)
    } else {
        format!("Your {} (Optional)", name)
    }
}

async fn prompt_field(
    form: &ContactForm,
    field: ContactField,
    input: &mut InputLines,
) -> Result<()> {
    print!("{}: ", label(field));
    std::io::stdout().flush()?;

    let Some(line) = input.next_line().await? else {
        bail!("input closed before the form was complete");
    };
    form.update_field(field, line.trim_end_matches('\r'));
    Ok(())
}

#[tokio::main(flavor = "current_thread")]
async fn main() -> Result<()> {
    let config = Config::from_env();

    // Initialize logging (stderr only to keep the prompts clean)
    let fallback = config
        .as_ref()
        .map(|cfg| cfg.log_level.clone())
        .unwrap_or_else(|_| "error".to_string());
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(fallback));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();

    let config = match config {
        Ok(cfg) => {
            info!("Configuration loaded successfully");
            cfg
        }
        Err(e) => {
            error!("Failed to load configuration: {}", e);
            return Err(e.into());
        }
    };

    if let Err(e) = config.relay.credentials() {
        // Not fatal: the form still works, submits will fail until this is fixed
        error!("Relay is not configured: {}", e);
    }

    info!("Using relay at {}", config.relay_api_url);

    // One collector for relay traffic and form outcomes
    let metrics = Metrics::new();
    let relay = RelayClient::new(&config).with_metrics(metrics.clone());
    let client = Arc::new(AsyncRelayClientImpl::new(relay)) as Arc<dyn AsyncRelayClient>;
    let form = ContactForm::with_metrics(client, FormSettings::from_config(&config), metrics);

    let mut input = BufReader::new(tokio::io::stdin()).lines();

    println!("Get In Touch");
    println!("You can contact me here or by email at {}", config.recipient_email);
    println!();

    for field in ContactField::ALL {
        prompt_field(&form, field, &mut input).await?;
    }

    loop {
        match form.submit().await {
            Ok(()) => break,
            Err(SubmitError::Validation(err)) => {
                println!("  {}", err);
                prompt_field(&form, err.field(), &mut input).await?;
            }
            Err(e) => {
                if !e.is_terminal() {
                    error!("Submit rejected: {}", e);
                }
                break;
            }
        }
    }

    if let Some(banner) = form.status().banner() {
        println!("{}", banner);
    }

    let summary = form.metrics().summary();
    info!(
        "Submissions: {} attempted, {} sent, {} failed, {} rejected by validation",
        summary.submissions_attempted_total,
        summary.submissions_succeeded_total,
        summary.submissions_failed_total,
        summary.validation_rejections_total
    );
    info!(
        "Relay HTTP: {} requests, {} errors, {:.1} ms average",
        summary.http_requests_total, summary.http_errors_total, summary.http_duration_avg_ms
    );

    Ok(())
}
