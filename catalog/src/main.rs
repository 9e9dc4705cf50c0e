//! Course and career-pathway browser.
//!
//! Loads the catalog dataset (embedded by default), validates it, and prints
//! filtered listings or detail panels for a selected course or pathway.

use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use clap::{Args, Parser, Subcommand};
use tracing::{debug, info};

use catalog::browse::{
    course_listing, course_panel, pathway_listing, pathway_panel, selected_detail,
};
use catalog::core::filter::{CatalogFilter, DomainFilter};
use catalog::core::query::Catalog;
use catalog::core::types::ActiveView;
use catalog::core::view::ViewState;
use catalog::exit_codes;
use catalog::io::config::{CONFIG_FILE, CatalogConfig, load_config, write_config};
use catalog::io::dataset_store::{DatasetSource, load_catalog};
use catalog::logging;
use catalog::render::Renderer;

#[derive(Parser)]
#[command(
    name = "catalog",
    version,
    about = "Browse courses, prerequisites and career pathways"
)]
struct Cli {
    /// Config file. Defaults apply when it does not exist.
    #[arg(long, global = true, default_value = CONFIG_FILE)]
    config: PathBuf,

    /// Dataset JSON file. Overrides `dataset` from the config.
    #[arg(long, global = true)]
    dataset: Option<PathBuf>,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// Write a default config file if missing.
    Init {
        /// Overwrite an existing config.
        #[arg(short, long)]
        force: bool,
    },
    /// Check the dataset against the schema and integrity rules.
    Validate,
    /// Print the distinct course domains, sorted.
    Domains,
    /// List courses grouped by level.
    Courses(ListArgs),
    /// List career pathways.
    Pathways(ListArgs),
    /// Show the detail panel for a course.
    Course { id: String },
    /// Show the detail panel for a pathway.
    Pathway { id: String },
}

#[derive(Args, Debug, Default, PartialEq, Eq)]
struct ListArgs {
    /// Exact domain, or `all`. Defaults to `default_domain` from the config.
    #[arg(long)]
    domain: Option<String>,

    /// Case-insensitive search term.
    #[arg(short, long, default_value = "")]
    search: String,

    /// Highlight this id and print its detail panel after the listing.
    #[arg(long)]
    select: Option<String>,
}

/// Everything a read command needs.
struct Session {
    config: CatalogConfig,
    catalog: Catalog,
    renderer: Renderer,
}

fn main() {
    logging::init();
    let code = match run() {
        Ok(code) => code,
        Err(err) => {
            eprintln!("{:#}", err);
            exit_codes::INVALID
        }
    };
    std::process::exit(code);
}

fn run() -> Result<i32> {
    let cli = Cli::parse();
    match &cli.command {
        Command::Init { force } => cmd_init(&cli.config, *force),
        Command::Validate => cmd_validate(&open_session(&cli)?),
        Command::Domains => cmd_domains(&open_session(&cli)?),
        Command::Courses(args) => cmd_courses(&open_session(&cli)?, args),
        Command::Pathways(args) => cmd_pathways(&open_session(&cli)?, args),
        Command::Course { id } => cmd_course(&open_session(&cli)?, id),
        Command::Pathway { id } => cmd_pathway(&open_session(&cli)?, id),
    }
}

fn open_session(cli: &Cli) -> Result<Session> {
    let config = load_config(&cli.config).context("load config")?;
    let base_dir = config_dir(&cli.config);
    let dataset_path = cli
        .dataset
        .clone()
        .or_else(|| config.dataset_path(base_dir));
    let source = match &dataset_path {
        Some(path) => DatasetSource::File(path),
        None => DatasetSource::Embedded,
    };
    debug!(source = ?source, "opening catalog");
    let catalog = load_catalog(source)?;
    Ok(Session {
        config,
        catalog,
        renderer: Renderer::new(),
    })
}

fn config_dir(config_path: &Path) -> &Path {
    config_path
        .parent()
        .filter(|parent| !parent.as_os_str().is_empty())
        .unwrap_or_else(|| Path::new("."))
}

fn cmd_init(config_path: &Path, force: bool) -> Result<i32> {
    if !force && config_path.exists() {
        println!(
            "init: {} exists (use --force to overwrite)",
            config_path.display()
        );
        return Ok(exit_codes::OK);
    }
    write_config(config_path, &CatalogConfig::default())
        .with_context(|| format!("write {}", config_path.display()))?;
    info!(path = %config_path.display(), "config written");
    println!("init: wrote {}", config_path.display());
    Ok(exit_codes::OK)
}

fn cmd_validate(session: &Session) -> Result<i32> {
    let catalog = &session.catalog;
    println!(
        "validate: courses={} pathways={} domains={}",
        catalog.courses().len(),
        catalog.pathways().len(),
        catalog.all_domains().len()
    );
    Ok(exit_codes::OK)
}

fn cmd_domains(session: &Session) -> Result<i32> {
    for domain in session.catalog.all_domains() {
        println!("{}", domain);
    }
    Ok(exit_codes::OK)
}

fn cmd_courses(session: &Session, args: &ListArgs) -> Result<i32> {
    let mut view = list_view(&session.config, args, ActiveView::Courses);
    if let Some(id) = &args.select {
        view.select_course(id.as_str());
    }
    let listing = course_listing(&session.catalog, &view, &session.config.openings);
    println!("{}", session.renderer.course_listing(&listing)?);
    print_selection(session, &view, args.select.as_deref(), "course")
}

fn cmd_pathways(session: &Session, args: &ListArgs) -> Result<i32> {
    let mut view = list_view(&session.config, args, ActiveView::Pathways);
    if let Some(id) = &args.select {
        view.select_pathway(id.as_str());
    }
    let cards = pathway_listing(&session.catalog, &view);
    println!("{}", session.renderer.pathway_listing(&cards)?);
    print_selection(session, &view, args.select.as_deref(), "pathway")
}

fn cmd_course(session: &Session, id: &str) -> Result<i32> {
    let Some(panel) = course_panel(&session.catalog, id, &session.config.detail) else {
        eprintln!("course '{}' not found", id);
        return Ok(exit_codes::NOT_FOUND);
    };
    println!("{}", session.renderer.course_panel(&panel)?);
    Ok(exit_codes::OK)
}

fn cmd_pathway(session: &Session, id: &str) -> Result<i32> {
    let Some(panel) = pathway_panel(&session.catalog, id) else {
        eprintln!("pathway '{}' not found", id);
        return Ok(exit_codes::NOT_FOUND);
    };
    println!("{}", session.renderer.pathway_panel(&panel)?);
    Ok(exit_codes::OK)
}

fn list_view(config: &CatalogConfig, args: &ListArgs, active: ActiveView) -> ViewState {
    let domain = args
        .domain
        .as_deref()
        .unwrap_or(&config.default_domain)
        .parse::<DomainFilter>()
        .unwrap_or_default();
    ViewState::new(CatalogFilter::new(domain, args.search.as_str()), active)
}

fn print_selection(
    session: &Session,
    view: &ViewState,
    selected: Option<&str>,
    kind: &str,
) -> Result<i32> {
    let Some(id) = selected else {
        return Ok(exit_codes::OK);
    };
    match selected_detail(&session.catalog, view, &session.config.detail) {
        Some(detail) => {
            println!("{}", session.renderer.detail(&detail)?);
            Ok(exit_codes::OK)
        }
        None => {
            eprintln!("{} '{}' not found", kind, id);
            Ok(exit_codes::NOT_FOUND)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parse_init_force() {
        let cli = Cli::parse_from(["catalog", "init", "--force"]);
        assert!(matches!(cli.command, Command::Init { force: true }));
        assert_eq!(cli.config, PathBuf::from(CONFIG_FILE));
    }

    #[test]
    fn parse_courses_with_filters() {
        let cli = Cli::parse_from([
            "catalog",
            "courses",
            "--domain",
            "Information Technology",
            "--search",
            "network",
            "--select",
            "uci_3001",
            "--dataset",
            "data.json",
        ]);
        assert_eq!(cli.dataset, Some(PathBuf::from("data.json")));
        let Command::Courses(args) = cli.command else {
            panic!("expected courses command");
        };
        assert_eq!(
            args,
            ListArgs {
                domain: Some("Information Technology".to_string()),
                search: "network".to_string(),
                select: Some("uci_3001".to_string()),
            }
        );
    }

    #[test]
    fn list_view_falls_back_to_config_domain() {
        let config = CatalogConfig {
            default_domain: "Healthcare".to_string(),
            ..CatalogConfig::default()
        };
        let view = list_view(&config, &ListArgs::default(), ActiveView::Courses);
        assert_eq!(
            view.filter.domain,
            DomainFilter::Only("Healthcare".to_string())
        );

        let args = ListArgs {
            domain: Some("all".to_string()),
            ..ListArgs::default()
        };
        let view = list_view(&config, &args, ActiveView::Pathways);
        assert_eq!(view.filter.domain, DomainFilter::All);
        assert_eq!(view.active_view, ActiveView::Pathways);
    }

    #[test]
    fn config_dir_defaults_to_current_dir() {
        assert_eq!(config_dir(Path::new("catalog.toml")), Path::new("."));
        assert_eq!(
            config_dir(Path::new("/etc/catalog/catalog.toml")),
            Path::new("/etc/catalog")
        );
    }
}
