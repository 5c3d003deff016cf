//! Command line interface

use std::path::{Path, PathBuf};
use std::sync::Arc;

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};

use support_triage::{EmailInput, TicketPipeline};

use crate::{load_config, serve, AppState};

/// Address the HTTP service binds to by default
pub const DEFAULT_ADDR: &str = "0.0.0.0:8000";

/// Email id assigned to tickets submitted from the command line
pub const CLI_EMAIL_ID: &str = "cli";

#[derive(Parser, Debug)]
#[command(author, version, about = "Support email triage agent", long_about = None)]
pub struct Cli {
    /// TOML triage config replacing the built-in vocabulary and thresholds
    #[arg(long, global = true, env = "TRIAGE_CONFIG")]
    pub config: Option<PathBuf>,

    #[command(subcommand)]
    pub command: Command,
}

#[derive(Subcommand, Debug, PartialEq)]
pub enum Command {
    /// Run the HTTP API
    Serve {
        #[arg(long, env = "TRIAGE_ADDR", default_value = DEFAULT_ADDR)]
        addr: String,
    },

    /// Classify one email, run the escalation rules and draft a reply,
    /// printing the processed ticket as JSON
    Classify {
        #[arg(long)]
        subject: String,

        #[arg(long)]
        body: String,

        /// Times this customer has written in (defaults to 1)
        #[arg(long)]
        contact_count: Option<i64>,
    },

    /// Process a JSON array of emails and print the batch report
    Batch {
        /// File containing `[{"email_id", "subject", "body", "contact_count"?}, ...]`
        file: PathBuf,
    },
}

/// Execute the parsed command
pub async fn run(cli: Cli) -> Result<()> {
    let config = Arc::new(load_config(cli.config.as_deref())?);

    match cli.command {
        Command::Serve { addr } => serve(&addr, Arc::new(AppState::new(config))).await,
        Command::Classify {
            subject,
            body,
            contact_count,
        } => {
            let pipeline = TicketPipeline::new(config);
            let mut email = EmailInput::new(CLI_EMAIL_ID, subject, body);
            email.contact_count = contact_count;
            println!("{}", classify_json(&pipeline, &email)?);
            Ok(())
        }
        Command::Batch { file } => {
            let pipeline = TicketPipeline::new(config);
            println!("{}", batch_json(&pipeline, &file)?);
            Ok(())
        }
    }
}

/// Run one email through the full ticket pipeline (not only the classifier)
/// and render the processed ticket as pretty JSON
pub fn classify_json(pipeline: &TicketPipeline, email: &EmailInput) -> Result<String> {
    let outcome = pipeline
        .process(email)
        .with_context(|| format!("Failed to process email {}", email.email_id))?;
    serde_json::to_string_pretty(&outcome).context("Failed to serialize ticket")
}

/// Process the emails in `path` and render the batch report as pretty JSON
pub fn batch_json(pipeline: &TicketPipeline, path: &Path) -> Result<String> {
    let content = std::fs::read_to_string(path)
        .with_context(|| format!("Failed to read {}", path.display()))?;
    let emails: Vec<EmailInput> = serde_json::from_str(&content)
        .with_context(|| format!("Failed to parse emails from {}", path.display()))?;

    let report = pipeline.process_batch(&emails);
    serde_json::to_string_pretty(&report).context("Failed to serialize batch report")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_serve_defaults() {
        let cli = Cli::try_parse_from(["support-agent", "serve"]).unwrap();
        if std::env::var("TRIAGE_ADDR").is_err() {
            assert_eq!(
                cli.command,
                Command::Serve {
                    addr: DEFAULT_ADDR.to_string()
                }
            );
        }
    }

    #[test]
    fn test_parse_classify_with_global_config() {
        let cli = Cli::try_parse_from([
            "support-agent",
            "classify",
            "--subject",
            "Refund",
            "--body",
            "I want my money back",
            "--contact-count",
            "3",
            "--config",
            "triage.toml",
        ])
        .unwrap();

        assert_eq!(cli.config, Some(PathBuf::from("triage.toml")));
        assert_eq!(
            cli.command,
            Command::Classify {
                subject: "Refund".to_string(),
                body: "I want my money back".to_string(),
                contact_count: Some(3),
            }
        );
    }

    #[test]
    fn test_classify_requires_body() {
        assert!(Cli::try_parse_from(["support-agent", "classify", "--subject", "Hi"]).is_err());
    }

    #[test]
    fn test_classify_json_output() {
        let pipeline = TicketPipeline::default();
        let email = EmailInput::new(CLI_EMAIL_ID, "Refund", "I want my money back");
        let json: serde_json::Value =
            serde_json::from_str(&classify_json(&pipeline, &email).unwrap()).unwrap();

        assert_eq!(json["email_id"], "cli");
        assert_eq!(json["category"], "Payment & Billing");
        assert_eq!(json["status"], "Escalated to Human");
        assert_eq!(json["escalation_priority"], "Critical");
    }

    #[test]
    fn test_classify_help_describes_full_pipeline() {
        use clap::CommandFactory;

        let command = Cli::command();
        let classify = command.find_subcommand("classify").unwrap();
        let about = classify.get_about().unwrap().to_string();
        assert!(about.contains("escalation"), "About: {about}");
        assert!(about.contains("reply"), "About: {about}");
    }

    #[test]
    fn test_classify_json_includes_draft_reply() {
        let pipeline = TicketPipeline::default();
        let email = EmailInput::new(CLI_EMAIL_ID, "Password", "How do I reset my password?");
        let json: serde_json::Value =
            serde_json::from_str(&classify_json(&pipeline, &email).unwrap()).unwrap();

        assert_eq!(json["status"], "Auto-Drafted");
        assert!(json["draft_reply"].as_str().is_some());
        assert!(json["ticket_id"].as_str().is_some());
    }

    #[test]
    fn test_classify_json_rejects_negative_contact_count() {
        let pipeline = TicketPipeline::default();
        let email = EmailInput::new(CLI_EMAIL_ID, "Hi", "Hello").with_contact_count(-2);
        let err = classify_json(&pipeline, &email).unwrap_err();
        assert!(format!("{:#}", err).contains("must not be negative"));
    }

    #[test]
    fn test_batch_json_from_file() {
        let file = tempfile::NamedTempFile::new().unwrap();
        std::fs::write(
            file.path(),
            r#"[
                {"email_id": "a", "subject": "Invoice", "body": "Please send my invoice"},
                {"email_id": "b", "subject": "Hi", "body": "Hello", "contact_count": -1}
            ]"#,
        )
        .unwrap();

        let pipeline = TicketPipeline::default();
        let json: serde_json::Value =
            serde_json::from_str(&batch_json(&pipeline, file.path()).unwrap()).unwrap();

        assert_eq!(json["status"], "success");
        assert_eq!(json["summary"]["total_tickets"], 1);
        assert_eq!(json["summary"]["failed"], 1);
        assert_eq!(json["tickets"][1]["status"], "Error");
    }

    #[test]
    fn test_batch_json_reports_bad_file() {
        let pipeline = TicketPipeline::default();
        let err = batch_json(&pipeline, Path::new("/nonexistent/emails.json")).unwrap_err();
        assert!(err.to_string().contains("Failed to read"));

        let file = tempfile::NamedTempFile::new().unwrap();
        std::fs::write(file.path(), "{not json").unwrap();
        let err = batch_json(&pipeline, file.path()).unwrap_err();
        assert!(err.to_string().contains("Failed to parse emails"));
    }
}
