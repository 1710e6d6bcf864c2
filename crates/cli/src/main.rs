mod commands;
mod config;
mod params;

use std::path::PathBuf;

use anyhow::Result;
use clap::{Args, Parser, Subcommand};

use wayfinder_routes::HttpVerb;

use crate::config::Config;

#[derive(Parser)]
#[command(name = "wayfinder")]
#[command(version, about = "Route bindings for the store back office", long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// List every route: verbs, URL template, action and name
    List {
        /// Only routes of this controller (class name, with or without namespace)
        #[arg(short, long)]
        controller: Option<String>,
    },

    /// Build the URL of a route
    Url {
        #[command(flatten)]
        target: Target,

        /// Verb to request with (defaults to the route's first verb)
        #[arg(long)]
        verb: Option<HttpVerb>,

        /// Print `{ url, method }` as JSON instead of the bare URL
        #[arg(long)]
        json: bool,
    },

    /// Build the `<form>` attributes of a route, as JSON
    Form {
        #[command(flatten)]
        target: Target,

        /// Verb to submit with (defaults to the route's first verb)
        #[arg(long)]
        verb: Option<HttpVerb>,
    },

    /// Dump the whole route table as JSON
    Export,

    /// Compare the route table against `php artisan route:list --json` output
    Check {
        /// Route list file (defaults to WAYFINDER_ROUTE_LIST)
        path: Option<PathBuf>,
    },
}

/// Which route to build, and with what.
#[derive(Args)]
struct Target {
    /// Route name (`almacenes.update`) or action (`AlmacenController@update`)
    route: String,

    /// Path parameters in template order
    values: Vec<String>,

    /// Named path parameter; `name.field=value` passes a model field
    #[arg(short, long = "param", value_name = "NAME=VALUE")]
    params: Vec<String>,

    /// Query parameter; `key[]=v` appends to a list, a bare `key` removes it when merging
    #[arg(short, long = "query", value_name = "KEY=VALUE")]
    query: Vec<String>,

    /// Merge the query onto the configured current query instead of replacing it
    #[arg(long)]
    merge: bool,

    /// URL template to use when the action is reachable through several
    #[arg(long)]
    template: Option<String>,
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    let config = Config::from_env()?;

    wayfinder_observability::init(config.log_format);
    for warning in &config.warnings {
        tracing::warn!("{warning}");
    }

    let table = wayfinder_actions::routes();

    match cli.command {
        Commands::List { controller } => commands::list::execute(&table, controller.as_deref()),
        Commands::Url { target, verb, json } => {
            commands::build::url(&table, &config, &target, verb, json)
        }
        Commands::Form { target, verb } => commands::build::form(&table, &config, &target, verb),
        Commands::Export => commands::export::execute(&table),
        Commands::Check { path } => commands::check::execute(&table, &config, path),
    }
}
