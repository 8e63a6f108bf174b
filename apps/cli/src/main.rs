use anyhow::{bail, Result};
use clap::{Parser, Subcommand};
use contact_core::{config, ContactFormController};
use shared::domain::{ContactField, SubmissionStatus};

#[derive(Parser, Debug)]
struct Cli {
    /// Backend base URL; defaults to portfolio.toml / BACKEND_URL.
    #[arg(long)]
    backend_url: Option<String>,
    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Validate and submit a contact message.
    Send {
        #[arg(long)]
        name: String,
        #[arg(long)]
        email: String,
        #[arg(long)]
        subject: String,
        #[arg(long)]
        message: String,
    },
    /// Print the backend health message.
    Health,
    /// List contact messages stored by the backend.
    List,
}

#[tokio::main]
async fn main() -> Result<()> {
    tracing_subscriber::fmt().init();
    let cli = Cli::parse();

    let backend_url = cli
        .backend_url
        .unwrap_or_else(|| config::load_settings().backend_url);
    let controller = ContactFormController::new(backend_url);

    match cli.command {
        Command::Send {
            name,
            email,
            subject,
            message,
        } => {
            controller.update_field(ContactField::Name, name).await;
            controller.update_field(ContactField::Email, email).await;
            controller.update_field(ContactField::Subject, subject).await;
            controller.update_field(ContactField::Message, message).await;

            match controller.submit().await {
                SubmissionStatus::Success(message) => println!("{message}"),
                SubmissionStatus::Error(message) => bail!(message),
                SubmissionStatus::Idle => {
                    let snapshot = controller.snapshot().await;
                    let mut errors: Vec<_> = snapshot.errors.into_iter().collect();
                    errors.sort_by_key(|(field, _)| field.as_str());
                    for (field, error) in errors {
                        eprintln!("{}: {error}", field.as_str());
                    }
                    bail!("contact message rejected by validation");
                }
            }
        }
        Command::Health => {
            println!("{}", controller.health_check().await?);
        }
        Command::List => {
            for message in controller.list_messages().await? {
                println!(
                    "{} {} <{}> [{}] {}",
                    message.timestamp, message.name, message.email, message.subject, message.message
                );
            }
        }
    }

    Ok(())
}
