use std::path::PathBuf;
use std::str::FromStr;

use anyhow::{Context, Result};
use clap::{ArgAction, Parser};
use tracing::info;

use data_table_view::infra::import::open_source;
use data_table_view::ui::text::render_page;
use data_table_view::usecase::services::load_service::LoadService;
use data_table_view::{TableConfig, ViewController, ViewEvent};

#[derive(Parser, Debug)]
#[command(
    name = "data-table-view",
    version,
    about = "Sort, filter and page through a CSV file or spreadsheet"
)]
struct Cli {
    /// CSV, xlsx, xls or ods file to show
    path: PathBuf,

    /// Sheet to read from a workbook (default: first sheet)
    #[arg(long)]
    sheet: Option<String>,

    /// Config file (default: table.toml in the user config directory, if present)
    #[arg(long)]
    config: Option<PathBuf>,

    /// Click the header of KEY; repeat to toggle the direction
    #[arg(long = "sort", value_name = "KEY")]
    sort: Vec<String>,

    /// Free-text filter on the search fields
    #[arg(long)]
    filter: Option<String>,

    /// Rows per page
    #[arg(long = "page-size")]
    page_size: Option<usize>,

    /// Number of "next page" clicks
    #[arg(long = "next", default_value_t = 0)]
    next: usize,

    /// Number of "previous page" clicks, applied after the next clicks
    #[arg(long = "previous", default_value_t = 0)]
    previous: usize,

    /// Print the page as text instead of opening a window
    #[arg(long = "print", action = ArgAction::SetTrue)]
    print: bool,
}

impl Cli {
    /// Replays the command line as view events. Sort, filter and page size
    /// reset the offset, so navigation comes last.
    fn events(&self) -> Vec<ViewEvent> {
        let mut events = Vec::new();
        if let Some(size) = self.page_size {
            events.push(ViewEvent::PageSizeChanged(size));
        }
        events.extend(self.sort.iter().cloned().map(ViewEvent::SortRequested));
        if let Some(filter) = &self.filter {
            events.push(ViewEvent::FilterChanged(filter.clone()));
        }
        events.extend(std::iter::repeat(ViewEvent::NextRequested).take(self.next));
        events.extend(std::iter::repeat(ViewEvent::PreviousRequested).take(self.previous));
        events
    }
}

fn init_tracing() {
    let env = std::env::var("DATA_TABLE_LOG").unwrap_or_else(|_| "info".to_string());
    let filter = tracing_subscriber::EnvFilter::from_str(&env)
        .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("info"));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(true)
        .with_writer(std::io::stderr)
        .init();
}

fn main() {
    init_tracing();
    if let Err(err) = run(Cli::parse()) {
        eprintln!("error: {err:#}");
        std::process::exit(1);
    }
}

fn run(cli: Cli) -> Result<()> {
    let config = TableConfig::load(cli.config.as_deref()).context("failed to load config")?;
    let source = open_source(&cli.path, cli.sheet.clone(), &config.id_field)?;
    let service = LoadService::new(source);
    let dataset = service
        .load()
        .with_context(|| format!("failed to load {}", cli.path.display()))?;

    let mut view = ViewController::new(&config, dataset);
    for event in cli.events() {
        view.handle(event.clone())
            .with_context(|| format!("failed to apply {event:?}"))?;
    }

    if cli.print || !cfg!(feature = "desktop") {
        print!("{}", render_page(&view.snapshot()));
        return Ok(());
    }

    info!(source = %service.describe(), "opening desktop window");
    launch_desktop(view, &config, service.describe())
}

#[cfg(feature = "desktop")]
fn launch_desktop(view: ViewController, config: &TableConfig, source_label: String) -> Result<()> {
    data_table_view::app::launch(data_table_view::app::LaunchData {
        controller: view,
        colors: config.colors.clone(),
        id_field: config.id_field.clone(),
        source_label,
    })
}

#[cfg(not(feature = "desktop"))]
fn launch_desktop(_view: ViewController, _config: &TableConfig, _source_label: String) -> Result<()> {
    anyhow::bail!("built without the desktop feature, rerun with --print")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn cli_events_put_navigation_last() {
        let cli = Cli::parse_from([
            "data-table-view",
            "people.csv",
            "--next",
            "2",
            "--sort",
            "firstName",
            "--sort",
            "firstName",
            "--filter",
            "ivy",
            "--page-size",
            "15",
            "--previous",
            "1",
        ]);

        assert_eq!(
            cli.events(),
            vec![
                ViewEvent::PageSizeChanged(15),
                ViewEvent::SortRequested("firstName".to_string()),
                ViewEvent::SortRequested("firstName".to_string()),
                ViewEvent::FilterChanged("ivy".to_string()),
                ViewEvent::NextRequested,
                ViewEvent::NextRequested,
                ViewEvent::PreviousRequested,
            ]
        );
    }
}
