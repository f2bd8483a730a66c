//! Admin command line for the content core.
//!
//! # Responsibility
//! - Inspect effective collections, export them for promotion into the
//!   static documents and reset kinds after a deploy.
//! - Wire `CoreConfig`, the baseline loader and override storage the same
//!   way the app hosts do.
//!
//! # Exit codes
//! - 0: success
//! - 1: content or storage failure, or item not found
//! - 2: configuration error

use clap::{Parser, Subcommand};
use factsite_core::db::open_db;
use factsite_core::{
    core_version, init_logging, AdminService, BaselineLoader, BlogPost, Category, ContentItem,
    ContentKind, CoreConfig, Fact, HybridResolver, KeyValueStorage, MemoryKeyValueStorage,
    SqliteKeyValueStorage,
};
use log::error;
use serde::Serialize;
use std::path::PathBuf;
use std::process::ExitCode;

const EXIT_FAILURE: u8 = 1;
const EXIT_CONFIG_ERROR: u8 = 2;

/// Inspect, export and reset site content.
#[derive(Debug, Parser)]
#[command(name = "factsite", version)]
struct Cli {
    /// JSON config file; `FACTSITE_*` environment variables apply otherwise.
    #[arg(long, value_name = "PATH", global = true)]
    config: Option<PathBuf>,

    /// Directory holding `data/*.json` baseline documents.
    #[arg(long, value_name = "DIR", global = true)]
    data_root: Option<PathBuf>,

    /// SQLite file with override snapshots.
    #[arg(long = "db", value_name = "PATH", global = true)]
    database_path: Option<PathBuf>,

    #[command(subcommand)]
    command: Command,
}

#[derive(Debug, Subcommand)]
enum Command {
    /// Print the effective collection of a kind as JSON.
    List {
        #[arg(value_parser = parse_kind)]
        kind: ContentKind,
    },
    /// Print one effective item by id.
    Show {
        #[arg(value_parser = parse_kind)]
        kind: ContentKind,
        id: String,
    },
    /// Render the effective collection as baseline envelope text.
    Export {
        #[arg(value_parser = parse_kind)]
        kind: ContentKind,
        /// Write to this file instead of stdout.
        #[arg(long, value_name = "PATH")]
        out: Option<PathBuf>,
    },
    /// Drop override snapshots and baseline memo (`all` for every kind).
    Reset { target: String },
    /// Show item counts and pending overrides per kind.
    Status,
    /// Print the core version.
    Version,
}

fn parse_kind(value: &str) -> Result<ContentKind, String> {
    ContentKind::parse(value)
        .ok_or_else(|| format!("unknown content kind `{value}` (facts, blog, categories)"))
}

fn main() -> ExitCode {
    let cli = Cli::parse();

    let config = match load_config(&cli) {
        Ok(config) => config,
        Err(message) => {
            eprintln!("error: {message}");
            return ExitCode::from(EXIT_CONFIG_ERROR);
        }
    };

    if let Some(log_dir) = &config.log_dir {
        if let Err(message) = init_logging(&config.log_level, &log_dir.to_string_lossy()) {
            eprintln!("warning: logging disabled: {message}");
        }
    }

    let loader = BaselineLoader::from_directory(config.data_root.clone());
    let result = match &config.database_path {
        Some(path) => match open_db(path) {
            Ok(conn) => run(cli.command, &loader, SqliteKeyValueStorage::new(&conn)),
            Err(err) => Err(format!("failed to open `{}`: {err}", path.display())),
        },
        None => run(cli.command, &loader, MemoryKeyValueStorage::new()),
    };

    match result {
        Ok(()) => ExitCode::SUCCESS,
        Err(message) => {
            error!("event=cli_command module=cli status=error error={message}");
            eprintln!("error: {message}");
            ExitCode::from(EXIT_FAILURE)
        }
    }
}

fn load_config(cli: &Cli) -> Result<CoreConfig, String> {
    let mut config = match &cli.config {
        Some(path) => CoreConfig::load(path).map_err(|err| err.to_string())?,
        None => CoreConfig::from_env().map_err(|err| err.to_string())?,
    };
    if let Some(data_root) = &cli.data_root {
        config.data_root = data_root.clone();
    }
    if let Some(database_path) = &cli.database_path {
        config.database_path = Some(database_path.clone());
    }
    config.validate().map_err(|err| err.to_string())?;
    Ok(config)
}

fn run<S: KeyValueStorage>(
    command: Command,
    loader: &BaselineLoader,
    storage: S,
) -> Result<(), String> {
    let resolver = HybridResolver::new(loader, storage);
    match command {
        Command::List { kind } => match kind {
            ContentKind::Facts => print_json(&resolver.effective::<Fact>()),
            ContentKind::BlogPosts => print_json(&resolver.effective::<BlogPost>()),
            ContentKind::Categories => print_json(&resolver.effective::<Category>()),
        },
        Command::Show { kind, id } => match kind {
            ContentKind::Facts => show::<Fact, S>(&resolver, &id),
            ContentKind::BlogPosts => show::<BlogPost, S>(&resolver, &id),
            ContentKind::Categories => show::<Category, S>(&resolver, &id),
        },
        Command::Export { kind, out } => {
            let text = resolver.export_kind(kind).map_err(|err| err.to_string())?;
            match out {
                Some(path) => std::fs::write(&path, format!("{text}\n"))
                    .map_err(|err| format!("failed to write `{}`: {err}", path.display())),
                None => {
                    println!("{text}");
                    Ok(())
                }
            }
        }
        Command::Reset { target } => {
            let admin = AdminService::new(resolver);
            if target.trim().eq_ignore_ascii_case("all") {
                admin.reset_all().map_err(|err| err.to_string())?;
                println!("reset kinds=all");
                return Ok(());
            }
            let kind = parse_kind(&target)?;
            admin.reset(kind).map_err(|err| err.to_string())?;
            println!("reset kind={kind}");
            Ok(())
        }
        Command::Status => {
            for status in AdminService::new(resolver).status() {
                println!(
                    "kind={} items={} pending_overrides={} baseline_loaded={}",
                    status.kind,
                    status.item_count,
                    status.has_pending_overrides,
                    status.baseline_loaded
                );
            }
            Ok(())
        }
        Command::Version => {
            println!("factsite_core version={}", core_version());
            Ok(())
        }
    }
}

fn show<T: ContentItem, S: KeyValueStorage>(
    resolver: &HybridResolver<'_, S>,
    id: &str,
) -> Result<(), String> {
    match resolver.find::<T>(id) {
        Some(item) => print_json(&item),
        None => Err(format!("{} item not found: {id}", T::KIND)),
    }
}

fn print_json<T: Serialize + ?Sized>(value: &T) -> Result<(), String> {
    let text = serde_json::to_string_pretty(value).map_err(|err| err.to_string())?;
    println!("{text}");
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::{parse_kind, Cli, Command};
    use clap::Parser;
    use factsite_core::ContentKind;

    #[test]
    fn parses_kind_arguments_and_global_flags() {
        let cli = Cli::try_parse_from(["factsite", "list", "posts", "--db", "site.db"]).unwrap();
        assert!(matches!(
            cli.command,
            Command::List {
                kind: ContentKind::BlogPosts
            }
        ));
        assert_eq!(
            cli.database_path.as_deref(),
            Some(std::path::Path::new("site.db"))
        );
    }

    #[test]
    fn rejects_unknown_kind() {
        assert!(parse_kind("comments").is_err());
        assert!(Cli::try_parse_from(["factsite", "list", "comments"]).is_err());
    }
}
