use anyhow::{Context, Result};
use property_concierge::chat::{
    ConversationOrchestrator, FaqTable, PropertyCatalog, ResponseFormatter, Session,
};
use property_concierge::config::AppConfig;
use property_concierge::models::UserIdentity;
use property_concierge::polish::{GroqPolisher, PlainPolisher, Polisher};
use property_concierge::storage::{CsvListingSource, CsvLogSink, ListingSource};
use std::io::Write;
use std::path::Path;
use std::sync::Arc;
use tokio::io::{AsyncBufReadExt, BufReader, Lines, Stdin};
use tracing::{info, warn};
use tracing_subscriber::EnvFilter;

type InputLines = Lines<BufReader<Stdin>>;

const SAMPLE_QUERIES: &str = "Property queries:\n\
- What is the price of P003?\n\
- Show details for Sunrise Apartments\n\
- Is P007 available?\n\
General FAQs:\n\
- Where is your office?\n\
- What are your working hours?\n\
- Contact information\n\
Booking:\n\
- I want to book a visit\n\
- Schedule a visit\n\
Commands: /help, /history, /logout, /quit";

#[tokio::main]
async fn main() -> Result<()> {
    // Initialize logging
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .init();

    info!("🏠 Property Concierge");
    info!("====================");

    let config = AppConfig::from_env()?;

    // Without a complete catalog there is nothing to serve
    let source = CsvListingSource::new(&config.properties_path);
    let catalog = PropertyCatalog::load(&source)
        .with_context(|| format!("Failed to load listings from {}", source.source_name()))?;
    info!("Catalog ready with {} listings", catalog.len());

    ensure_parent_dir(&config.interactions_path).await?;
    ensure_parent_dir(&config.visits_path).await?;
    let sink = Arc::new(CsvLogSink::new(&config.interactions_path, &config.visits_path));

    let polisher: Arc<dyn Polisher> = match config.polish_settings() {
        Some(settings) => {
            info!("Polishing replies with {}", settings.model);
            Arc::new(GroqPolisher::new(settings)?)
        }
        None => {
            warn!("GROQ_API_KEY not set, replies will use plain templates");
            Arc::new(PlainPolisher)
        }
    };

    let orchestrator = ConversationOrchestrator::new(
        Arc::new(catalog),
        FaqTable::default(),
        ResponseFormatter::new(polisher),
        sink,
        config.max_message_chars,
    );

    let mut lines = BufReader::new(tokio::io::stdin()).lines();

    'login: loop {
        let Some(mut session) = login(&mut lines).await? else {
            break;
        };
        println!(
            "\nWelcome, {}! Ask me about properties, book visits, or general FAQs. Type /help for examples.\n",
            session.user().name
        );

        loop {
            let Some(line) = ask(&mut lines, "> ").await? else {
                break 'login;
            };
            match line.trim() {
                "" => continue,
                "/quit" => break 'login,
                "/help" => {
                    println!("{}\n", SAMPLE_QUERIES);
                    continue;
                }
                "/history" => {
                    println!("{}", session.render_history());
                    continue;
                }
                "/logout" => {
                    session.logout();
                    println!("Logged out.\n");
                    continue 'login;
                }
                _ => {}
            }

            match orchestrator.handle_message(&mut session, &line).await {
                Ok(reply) => println!("{}\n", reply.text),
                Err(e) => println!("{}\n", e),
            }
        }
    }

    info!("Goodbye");
    Ok(())
}

/// Print a prompt and read one line; `None` at end of input
async fn ask(lines: &mut InputLines, label: &str) -> Result<Option<String>> {
    print!("{}", label);
    std::io::stdout().flush()?;
    Ok(lines.next_line().await?)
}

/// Read a required field, asking again while the answer is blank
async fn ask_required(lines: &mut InputLines, label: &str) -> Result<Option<String>> {
    loop {
        match ask(lines, label).await? {
            Some(answer) if answer.trim().is_empty() => {
                println!("Please fill in all required fields.");
            }
            Some(answer) => return Ok(Some(answer.trim().to_string())),
            None => return Ok(None),
        }
    }
}

/// Collect the user's identity; `None` when input ends first
async fn login(lines: &mut InputLines) -> Result<Option<Session>> {
    println!("Please enter your information to start chatting.");

    let Some(name) = ask_required(lines, "Full Name *: ").await? else {
        return Ok(None);
    };
    let Some(email) = ask_required(lines, "Email Address *: ").await? else {
        return Ok(None);
    };
    let Some(phone) = ask_required(lines, "Phone Number *: ").await? else {
        return Ok(None);
    };

    info!("User {} logged in", name);
    Ok(Some(Session::new(UserIdentity { name, email, phone })))
}

async fn ensure_parent_dir(path: &Path) -> Result<()> {
    if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
        tokio::fs::create_dir_all(parent)
            .await
            .with_context(|| format!("Failed to create {}", parent.display()))?;
    }
    Ok(())
}

