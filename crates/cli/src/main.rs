//! `typiform` CLI entry-point.
//!
//! Available sub-commands:
//! - `serve`  — start the API server.
//! - `get`    — print one form row as the API would return it.
//! - `list`   — list the forms a user owns.
//! - `delete` — delete a form.
//! - `query`  — run a raw SQL statement against the gateway.
//! - `share`  — print (and optionally copy) a form's public link.

use std::sync::Arc;

use anyhow::{Context, Result};
use clap::{Args, Parser, Subcommand};
use tokio::sync::watch;
use tracing::info;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use db::config::{DEFAULT_SCHEMA, DEFAULT_TABLE};
use db::repository::{forms as form_repo, sql as sql_repo};
use db::GatewayConfig;
use editor::cache::FormsCache;
use editor::{
    EditorNavbar, EditorStore, HttpFormsApi, NavbarProps, NavbarServices, Navigator, Route,
    Session, SystemClipboard, TracingNotifier,
};

#[derive(Parser)]
#[command(name = "typiform", about = "Form builder API and admin tools", version)]
struct Cli {
    #[command(flatten)]
    gateway: GatewayArgs,

    #[command(subcommand)]
    command: Command,
}

#[derive(Args)]
struct GatewayArgs {
    /// Database gateway endpoint.
    #[arg(long, env = "HARPERDB_URL", global = true)]
    harperdb_url: Option<String>,

    /// Credential sent as `Authorization: Basic <token>`.
    #[arg(long, env = "HARPERDB_TOKEN", hide_env_values = true, global = true)]
    harperdb_token: Option<String>,

    #[arg(long, env = "HARPERDB_SCHEMA", default_value = DEFAULT_SCHEMA, global = true)]
    schema: String,

    #[arg(long, env = "HARPERDB_TABLE", default_value = DEFAULT_TABLE, global = true)]
    table: String,
}

impl GatewayArgs {
    fn config(&self) -> Result<GatewayConfig> {
        let url = self
            .harperdb_url
            .clone()
            .context("HARPERDB_URL is not set (or pass --harperdb-url)")?;
        let token = self
            .harperdb_token
            .clone()
            .context("HARPERDB_TOKEN is not set (or pass --harperdb-token)")?;

        let mut config = GatewayConfig::new(url, token);
        config.schema = self.schema.clone();
        config.table = self.table.clone();
        Ok(config)
    }

    fn pool(&self) -> Result<db::DbPool> {
        Ok(db::pool::create_pool(&self.config()?)?)
    }
}

#[derive(Subcommand)]
enum Command {
    /// Start the REST API server.
    Serve {
        #[arg(long, default_value = "0.0.0.0:3000")]
        bind: String,
    },
    /// Fetch one form by id.
    Get { id: String },
    /// List every form owned by a user.
    List { user_id: String },
    /// Delete a form by id.
    Delete { id: String },
    /// Run a raw SQL statement. Admin use only.
    Query { sql: String },
    /// Print a form's public link.
    Share {
        id: String,
        /// Host the link should point at.
        #[arg(long, default_value = "localhost:3000")]
        host: String,
        /// Also copy the link to the system clipboard.
        #[arg(long)]
        copy: bool,
    },
}

/// Navigation has nowhere to go on a terminal; log it.
struct LogNavigator;

impl Navigator for LogNavigator {
    fn push(&self, route: Route) {
        info!("navigate to {}", route.path());
    }
}

fn init_tracing() {
    tracing_subscriber::registry()
        .with(tracing_subscriber::EnvFilter::new(
            std::env::var("RUST_LOG").unwrap_or_else(|_| "info,hyper=warn,reqwest=warn".into()),
        ))
        .with(tracing_subscriber::fmt::layer())
        .init();
}

fn print_json(value: &impl serde::Serialize) -> Result<()> {
    println!("{}", serde_json::to_string_pretty(value)?);
    Ok(())
}

#[tokio::main]
async fn main() -> Result<()> {
    init_tracing();

    let cli = Cli::parse();

    match cli.command {
        Command::Serve { bind } => {
            info!("Starting API server on {bind}");
            let pool = cli.gateway.pool()?;
            api::serve(&bind, pool).await?;
        }
        Command::Get { id } => {
            let pool = cli.gateway.pool()?;
            let row = form_repo::get_form(&pool, &id).await?;
            print_json(&row)?;
        }
        Command::List { user_id } => {
            let pool = cli.gateway.pool()?;
            let forms = form_repo::list_user_forms(&pool, &user_id).await?;
            for form in &forms {
                let created = form
                    .created_at()
                    .map(|t| t.format("%Y-%m-%d %H:%M").to_string())
                    .unwrap_or_else(|| "-".into());
                println!(
                    "{}\t{}\t{}",
                    form.id,
                    created,
                    form.title.as_deref().unwrap_or("(untitled)")
                );
            }
            info!("{} form(s)", forms.len());
        }
        Command::Delete { id } => {
            let pool = cli.gateway.pool()?;
            let outcome = form_repo::delete_form(&pool, &id)
                .await
                .with_context(|| format!("deleting form {id}"))?;
            println!("{}", outcome.message);
        }
        Command::Query { sql } => {
            let pool = cli.gateway.pool()?;
            let reply = sql_repo::run(&pool, &sql).await?;
            print_json(&reply)?;
        }
        Command::Share { id, host, copy } => {
            let (sidebar, _) = watch::channel(false);
            let navbar = EditorNavbar::new(
                NavbarProps {
                    form_id: id,
                    title: None,
                    icon: None,
                    host: host.clone(),
                },
                EditorStore::default(),
                Session::anonymous(),
                Arc::new(sidebar),
                NavbarServices {
                    notifier: Arc::new(TracingNotifier),
                    clipboard: Arc::new(SystemClipboard),
                    navigator: Arc::new(LogNavigator),
                    forms_api: Arc::new(HttpFormsApi::new(&format!("http://{host}"))?),
                    cache: FormsCache::new(),
                },
                Arc::new(|| {}),
            );

            println!("{}", navbar.share_link());
            if copy {
                navbar.copy_link()?;
            }
        }
    }

    Ok(())
}
