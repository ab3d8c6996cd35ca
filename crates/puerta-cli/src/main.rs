//! `puerta` — command-line front end for the Puerta Caribe identity store.
//!
//! The text-mode presentation layer: validates form input (the store does
//! not re-validate) and renders the [`HeaderView`] the site header shows.
//!
//! # Usage
//!
//! ```
//! puerta register --username ana --email a@x.com --password p1 \
//!   --first-name Ana --last-name Diaz
//! puerta login a@x.com --password p1
//! puerta status
//! puerta logout
//! ```

use std::{path::PathBuf, time::Duration};

use anyhow::Context as _;
use clap::{Parser, Subcommand};
use puerta_auth::{AuthService, HeaderView};
use puerta_core::identity::{Credentials, NewIdentity};
use puerta_store_sqlite::SqliteStorage;
use tracing::level_filters::LevelFilter;
use tracing_subscriber::EnvFilter;

/// Simulated network latency applied to register and login.
const MOCK_LATENCY: Duration = Duration::from_millis(800);

// ─── CLI args ─────────────────────────────────────────────────────────────────

#[derive(Parser)]
#[command(name = "puerta", about = "Puerta Caribe session & identity store")]
struct Cli {
  /// Path to the SQLite store.
  #[arg(long, env = "PUERTA_STORE", default_value = "puerta.db")]
  store: PathBuf,

  #[command(subcommand)]
  command: Command,
}

#[derive(Subcommand)]
enum Command {
  /// Create an account and sign in.
  Register {
    #[arg(long)]
    username:   String,
    #[arg(long)]
    email:      String,
    #[arg(long)]
    password:   String,
    #[arg(long)]
    first_name: String,
    #[arg(long)]
    last_name:  String,
  },
  /// Sign in with a username or email.
  Login {
    /// Username or email.
    identifier: String,
    #[arg(long)]
    password: String,
  },
  /// Sign out. A no-op when already signed out.
  Logout,
  /// Show the signed-in profile.
  Whoami,
  /// Show the header state the site would render.
  Status,
}

// ─── Entry point ──────────────────────────────────────────────────────────────

#[tokio::main]
async fn main() -> anyhow::Result<()> {
  tracing_subscriber::fmt()
    .with_env_filter(
      EnvFilter::builder()
        .with_default_directive(LevelFilter::WARN.into())
        .from_env_lossy(),
    )
    .init();

  let cli = Cli::parse();

  let storage = SqliteStorage::open(&cli.store)
    .await
    .with_context(|| format!("failed to open store at {}", cli.store.display()))?;
  let service = AuthService::with_latency(storage, MOCK_LATENCY);

  match cli.command {
    Command::Register {
      username,
      email,
      password,
      first_name,
      last_name,
    } => {
      require_non_empty(&[
        ("username", &username),
        ("email", &email),
        ("password", &password),
        ("first-name", &first_name),
        ("last-name", &last_name),
      ])?;

      let profile = service
        .register(NewIdentity {
          username,
          email,
          password,
          first_name,
          last_name,
        })
        .await?;
      println!("Registered {} <{}> — signed in.", profile.username, profile.email);
    }

    Command::Login {
      identifier,
      password,
    } => {
      let profile = service
        .login(Credentials {
          identifier,
          password,
        })
        .await?;
      println!("Welcome back, {}.", profile.first_name);
    }

    Command::Logout => {
      service.logout().await?;
      // Back on the landing page: render the signed-out header.
      println!("{}", render_header(&service.header_view().await?));
    }

    Command::Whoami => match service.session().await? {
      Some(s) => println!(
        "{} {} <{}> — signed in since {}",
        s.first_name,
        s.last_name,
        s.email,
        s.logged_in_at.to_rfc3339(),
      ),
      None => println!("Not signed in."),
    },

    Command::Status => {
      println!("{}", render_header(&service.header_view().await?));
    }
  }

  Ok(())
}

// ─── Rendering ────────────────────────────────────────────────────────────────

/// Text rendering of the page-header account slot.
fn render_header(view: &HeaderView) -> String {
  if view.shows_logout() {
    format!("[{}] [Cerrar Sesión]", view.display_name())
  } else {
    format!("[{}]", view.display_name())
  }
}

/// Form validation — the store itself does not re-validate.
fn require_non_empty(fields: &[(&str, &str)]) -> anyhow::Result<()> {
  for (name, value) in fields {
    anyhow::ensure!(!value.trim().is_empty(), "{name} must not be empty");
  }
  Ok(())
}
