//! shoplist - Entry Point

use clap::Parser;
use shoplist::mediator::Mediator;
use shoplist::model::{CategoryCatalog, ShoppingModel};
use shoplist::source::detect_data_source;
use shoplist::state::{BoardProjection, SortOrder};
use shoplist::view::RunOptions;
use std::cell::RefCell;
use std::path::PathBuf;
use std::rc::Rc;
use std::sync::mpsc;
use tracing::{info, warn};

/// shoplist - shopping lists in the terminal
#[derive(Parser, Debug)]
#[command(name = "shoplist")]
#[command(version)]
#[command(about = "Manage shared shopping lists in a terminal UI")]
pub struct Args {
    /// Initial data file (JSON). Use `-` to read it from stdin
    pub data_file: Option<PathBuf>,

    /// Path to configuration file
    #[arg(long)]
    pub config: Option<PathBuf>,

    /// Disable colors
    #[arg(long)]
    pub no_color: bool,

    /// Item order when a list is opened: default, asc or desc
    #[arg(long)]
    pub sort: Option<SortOrder>,

    /// Print the board as plain text and exit
    #[arg(long)]
    pub print: bool,
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let args = Args::parse();

    // Defaults → Config File → Env Vars → CLI Args
    let (config, rejected_env) = {
        let config_file = shoplist::config::load_config_with_precedence(args.config.clone())?;
        let merged = shoplist::config::merge_config(config_file);
        let (with_env, rejected) = shoplist::config::apply_env_overrides(merged);
        let config = shoplist::config::apply_cli_overrides(
            with_env,
            args.data_file.clone(),
            args.sort,
            args.no_color,
        );
        (config, rejected)
    };

    // The log pane only exists in the interactive UI.
    let (pane_tx, pane_rx) = if args.print {
        (None, None)
    } else {
        let (tx, rx) = mpsc::channel();
        (Some(tx), Some(rx))
    };
    shoplist::logging::init(&config.log_file_path, pane_tx)?;

    for rejected in &rejected_env {
        warn!(
            var = rejected.var,
            value = %rejected.value,
            reason = %rejected.reason,
            "Ignoring environment override"
        );
    }

    info!(
        config = ?config,
        "Configuration loaded and resolved"
    );

    let data = detect_data_source(config.data_file.clone()).load()?;
    let mut model = ShoppingModel::with_categories(CategoryCatalog::from_names(&config.categories));
    model.load_data(data);

    if args.print {
        print!("{}", BoardProjection::project(model.lists()).to_plain_text());
        return Ok(());
    }

    let mediator = Mediator::new(Rc::new(RefCell::new(model)))
        .with_confirmation(config.confirm_destructive);
    shoplist::view::run_app(mediator, RunOptions::from_config(&config), pane_rx)?;

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_help_does_not_error() {
        let result = Args::try_parse_from(["shoplist", "--help"]);
        let err = result.unwrap_err();
        assert_eq!(err.kind(), clap::error::ErrorKind::DisplayHelp);
    }

    #[test]
    fn test_version_does_not_error() {
        let result = Args::try_parse_from(["shoplist", "--version"]);
        let err = result.unwrap_err();
        assert_eq!(err.kind(), clap::error::ErrorKind::DisplayVersion);
    }

    #[test]
    fn test_no_args_defaults() {
        let args = Args::parse_from(["shoplist"]);
        assert_eq!(args.data_file, None);
        assert_eq!(args.config, None);
        assert!(!args.no_color);
        assert_eq!(args.sort, None);
        assert!(!args.print);
    }

    #[test]
    fn test_data_file_positional() {
        let args = Args::parse_from(["shoplist", "lists.json"]);
        assert_eq!(args.data_file, Some(PathBuf::from("lists.json")));
    }

    #[test]
    fn test_dash_reads_stdin() {
        let args = Args::parse_from(["shoplist", "-"]);
        assert_eq!(args.data_file, Some(PathBuf::from("-")));
    }

    #[test]
    fn test_sort_values() {
        for (value, expected) in [
            ("default", SortOrder::Default),
            ("asc", SortOrder::Asc),
            ("desc", SortOrder::Desc),
        ] {
            let args = Args::parse_from(["shoplist", "--sort", value]);
            assert_eq!(args.sort, Some(expected));
        }
    }

    #[test]
    fn test_sort_rejects_unknown_value() {
        let result = Args::try_parse_from(["shoplist", "--sort", "random"]);
        assert!(result.is_err());
    }

    #[test]
    fn test_flags_combined() {
        let args = Args::parse_from([
            "shoplist",
            "data.json",
            "--config",
            "/tmp/shoplist.toml",
            "--no-color",
            "--print",
        ]);
        assert_eq!(args.data_file, Some(PathBuf::from("data.json")));
        assert_eq!(args.config, Some(PathBuf::from("/tmp/shoplist.toml")));
        assert!(args.no_color);
        assert!(args.print);
    }
}
