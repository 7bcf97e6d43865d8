//! mdd-api - command-line client for the MDD backend
//!
//! Drives the same session core as the browser app: the token lives in a
//! file-backed slot, and every command goes through the page controllers so
//! validation, error normalization and confirmation prompts behave the same.

mod client;
mod output;
mod slot;
mod surface;

use std::path::PathBuf;
use std::rc::Rc;

use anyhow::{bail, Context, Result};
use clap::{Parser, Subcommand};
use colored::Colorize;
use session_core::config::MIN_COMMENT_LENGTH;
use session_core::features::article::{self, ArticleState};
use session_core::features::auth::{self, AuthFormState, LoginForm, RegisterForm};
use session_core::features::compose::{self, ArticleDraft, ComposeState};
use session_core::features::feed::{self, FeedState, SortOrder};
use session_core::features::profile::{self, ProfileForm, ProfileState};
use session_core::features::subjects::{self, SubjectsState};
use session_core::{KeyValueSlot, Outcome, Rejection, SessionStore, ViewCell};

use client::NativeApiClient;
use output::OutputFormat;
use slot::FileSlot;
use surface::{ConsoleNotifier, TerminalPrompt};

#[derive(Parser)]
#[command(name = "mdd-api")]
#[command(about = "Command-line client for the MDD backend", long_about = None)]
struct Cli {
    /// Server URL
    #[arg(short, long, env = "MDD_API_URL", default_value = "http://localhost:8080")]
    server: String,

    /// Where the session token is kept (defaults to the platform config dir)
    #[arg(long, env = "MDD_TOKEN_FILE")]
    token_file: Option<PathBuf>,

    /// Output format
    #[arg(short, long, default_value = "pretty")]
    format: OutputFormat,

    /// Answer yes to confirmation prompts
    #[arg(short, long)]
    yes: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Clone, Copy, clap::ValueEnum)]
enum SortArg {
    /// Oldest first
    Asc,
    /// Newest first
    Desc,
}

impl From<SortArg> for SortOrder {
    fn from(arg: SortArg) -> Self {
        match arg {
            SortArg::Asc => SortOrder::Asc,
            SortArg::Desc => SortOrder::Desc,
        }
    }
}

#[derive(Subcommand)]
enum Commands {
    /// Log in and store the session token
    Login {
        /// Username or email
        username_or_email: String,
        #[arg(long, env = "MDD_PASSWORD", hide_env_values = true)]
        password: String,
    },

    /// Create an account and log in
    Register {
        #[arg(long)]
        email: String,
        #[arg(long)]
        username: String,
        #[arg(long, env = "MDD_PASSWORD", hide_env_values = true)]
        password: String,
    },

    /// Forget the stored session token
    Logout,

    /// Show the current profile and subscriptions
    Me,

    /// Change username, email and password
    UpdateProfile {
        #[arg(long)]
        username: String,
        #[arg(long)]
        email: String,
        #[arg(long, env = "MDD_PASSWORD", hide_env_values = true)]
        password: String,
    },

    /// List the article feed
    Articles {
        #[arg(long, value_enum, default_value = "desc")]
        sort: SortArg,
    },

    /// Show one article with its comments
    Article {
        /// Article ID
        id: String,
    },

    /// Comment on an article
    Comment {
        /// Article ID
        id: i64,
        content: String,
    },

    /// List all subjects
    Subjects,

    /// Subscribe to a subject
    Subscribe {
        /// Subject ID
        id: i64,
    },

    /// Unsubscribe from a subject
    Unsubscribe {
        /// Subject ID
        id: i64,
    },

    /// Publish a new article to a subscribed subject
    Publish {
        /// Subject ID
        #[arg(long)]
        subject: i64,
        #[arg(long)]
        title: String,
        #[arg(long)]
        content: String,
    },
}

fn describe(rejection: Rejection) -> String {
    match rejection {
        Rejection::TooShort => format!(
            "Comment must be longer than {} characters",
            MIN_COMMENT_LENGTH
        ),
        Rejection::InFlight => "A submission is already in progress".to_string(),
        Rejection::NotReady => "Nothing loaded to act on".to_string(),
        Rejection::Invalid(field) => format!("Invalid value for {}", field),
    }
}

/// Turn a controller outcome into the command's result. `None` means the
/// operation was skipped or declined.
fn settle<T>(outcome: Outcome<T>) -> Result<Option<T>> {
    match outcome {
        Outcome::Committed(value) => Ok(Some(value)),
        Outcome::Skipped => Ok(None),
        Outcome::Declined => {
            eprintln!("Cancelled");
            Ok(None)
        }
        Outcome::Rejected(rejection) => bail!(describe(rejection)),
        Outcome::Failed(err) => Err(err.into()),
        Outcome::Detached => bail!("Request abandoned"),
    }
}

/// Fail with the view's load banner if the load did not succeed
fn ensure_loaded(outcome: Outcome, banner: Option<String>) -> Result<()> {
    if outcome.is_committed() {
        return Ok(());
    }
    bail!(banner.unwrap_or_else(|| "Could not load data".to_string()))
}

fn init_logging() {
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "warn".into()),
        )
        .with_writer(std::io::stderr)
        .init();
}

#[tokio::main]
async fn main() -> Result<()> {
    init_logging();

    let cli = Cli::parse();

    let token_path = match cli.token_file {
        Some(path) => path,
        None => FileSlot::default_path()?,
    };
    let slot: Rc<dyn KeyValueSlot> = Rc::new(FileSlot::new(token_path));
    let session = SessionStore::new(slot.clone());
    let client =
        NativeApiClient::new(&cli.server, slot).context("Failed to create HTTP client")?;
    let prompt = TerminalPrompt::new(cli.yes);
    let notifier = ConsoleNotifier;

    match cli.command {
        Commands::Login {
            username_or_email,
            password,
        } => {
            let view = ViewCell::new(AuthFormState::default());
            let form = LoginForm {
                username_or_email,
                password,
            };
            if settle(auth::login(&client, &session, &view.handle(), &form).await)?.is_some() {
                println!("{} Logged in", "✓".green());
            }
        }

        Commands::Register {
            email,
            username,
            password,
        } => {
            let view = ViewCell::new(AuthFormState::default());
            let form = RegisterForm {
                email,
                username: username.clone(),
                password,
            };
            if settle(auth::register(&client, &session, &view.handle(), &form).await)?.is_some() {
                println!("{} Registered and logged in as {}", "✓".green(), username.bold());
            }
        }

        Commands::Logout => {
            if !session.is_logged_in() {
                println!("Not logged in");
            } else if settle(auth::confirm_logout(&prompt, &session).await)?.is_some() {
                println!("{} Logged out", "✓".green());
            }
        }

        Commands::Me => {
            let view = ViewCell::new(ProfileState::default());
            let outcome = profile::load_profile(&client, &view.handle()).await;
            ensure_loaded(outcome, view.read(|s| s.error.clone()))?;
            view.read(|s| output::profile(cli.format, &s.username, &s.email, &s.subscriptions))?;
        }

        Commands::UpdateProfile {
            username,
            email,
            password,
        } => {
            let view = ViewCell::new(ProfileState::default());
            let form = ProfileForm {
                username,
                email,
                password,
            };
            settle(
                profile::save_profile(&client, &session, &notifier, &view.handle(), &form).await,
            )?;
        }

        Commands::Articles { sort } => {
            let view = ViewCell::new(FeedState {
                order: sort.into(),
                ..FeedState::default()
            });
            let outcome = feed::load_feed(&client, &view.handle()).await;
            ensure_loaded(outcome, view.read(|s| s.error.clone()))?;
            view.read(|s| output::articles(cli.format, &s.articles))?;
        }

        Commands::Article { id } => {
            let Some(id) = article::parse_article_id(Some(&id)) else {
                bail!("Invalid article id: {}", id);
            };
            let view = ViewCell::new(ArticleState::default());
            let outcome = article::load_article(&client, &view.handle(), id).await;
            ensure_loaded(outcome, view.read(|s| s.error.clone()))?;
            view.read(|s| match &s.article {
                Some(a) => output::article(cli.format, a),
                None => Ok(()),
            })?;
        }

        Commands::Comment { id, content } => {
            let view = ViewCell::new(ArticleState::default());
            let outcome = article::load_article(&client, &view.handle(), id).await;
            ensure_loaded(outcome, view.read(|s| s.error.clone()))?;
            view.update(|s| s.draft = content);
            if settle(article::submit_comment(&client, &notifier, &view.handle()).await)?.is_some() {
                view.read(|s| {
                    if let Some(latest) = s.cursor.current() {
                        println!(
                            "  {} of {}: {} {}",
                            s.cursor.index() + 1,
                            s.cursor.len(),
                            format!("{}:", latest.author).cyan(),
                            latest.content
                        );
                    }
                });
            }
        }

        Commands::Subjects => {
            let view = ViewCell::new(SubjectsState::default());
            let outcome = subjects::load_subjects(&client, &view.handle()).await;
            ensure_loaded(outcome, view.read(|s| s.error.clone()))?;
            view.read(|s| output::subjects(cli.format, &s.subjects))?;
        }

        Commands::Subscribe { id } => {
            let view = ViewCell::new(SubjectsState::default());
            let outcome = subjects::load_subjects(&client, &view.handle()).await;
            ensure_loaded(outcome, view.read(|s| s.error.clone()))?;
            match settle(subjects::subscribe(&client, &view.handle(), id).await)? {
                Some(()) => println!("{} Subscribed", "✓".green()),
                None => println!("Already subscribed or no such subject"),
            }
        }

        Commands::Unsubscribe { id } => {
            let view = ViewCell::new(ProfileState::default());
            let outcome = profile::load_profile(&client, &view.handle()).await;
            ensure_loaded(outcome, view.read(|s| s.error.clone()))?;
            let outcome =
                profile::unsubscribe(&client, &prompt, &notifier, &view.handle(), id).await;
            if matches!(outcome, Outcome::Skipped) {
                println!("Not subscribed to subject {}", id);
            }
            settle(outcome)?;
        }

        Commands::Publish {
            subject,
            title,
            content,
        } => {
            let view = ViewCell::new(ComposeState::default());
            let outcome = compose::load_subscribed_subjects(&client, &view.handle()).await;
            ensure_loaded(outcome, view.read(|s| s.error.clone()))?;
            if !view.read(|s| s.subjects.iter().any(|x| x.subject_id == subject)) {
                bail!("You are not subscribed to subject {}", subject);
            }
            let draft = ArticleDraft {
                subject_id: Some(subject),
                title,
                content,
            };
            if let Some(article_id) =
                settle(compose::publish(&client, &view.handle(), &draft).await)?
            {
                println!("{} Published article #{}", "✓".green(), article_id);
            }
        }
    }

    Ok(())
}
