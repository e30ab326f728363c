use anyhow::{anyhow, Context, Result};
use clap::Parser;
use eframe::egui;

use trade_dashboard::app::TradeDashboardApp;
use trade_dashboard::config::{Cli, Command};
use trade_dashboard::data::export::{export_csv, resolve_export_path};
use trade_dashboard::data::filter::preview_selection;
use trade_dashboard::data::loader::load_dataset;
use trade_dashboard::data::model::Dataset;
use trade_dashboard::view::{render, ViewContext};

fn main() -> Result<()> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    let cli = Cli::parse();
    let dataset = match load_dataset(&cli.data, &cli.sample_spec()) {
        Ok(ds) => ds,
        Err(e) => {
            log::error!("{e}");
            return Err(e).context("cannot start the dashboard");
        }
    };
    let context = cli.view_context();

    match &cli.command {
        None => run_window(dataset, context),
        Some(Command::Plan { page, filters }) => {
            let session = filters.session(*page)?;
            let plan = render(&session, &dataset, &context);
            println!("{}", serde_json::to_string_pretty(&plan)?);
            Ok(())
        }
        Some(Command::Export { filters }) => {
            let selection = preview_selection(&dataset, &filters.predicate());
            let path = resolve_export_path(&context.export_path);
            let rows = export_csv(&dataset, &selection.indices, &path)?;
            println!("Filtered data saved as '{}' ({rows} rows)", path.display());
            Ok(())
        }
    }
}

fn run_window(dataset: Dataset, context: ViewContext) -> Result<()> {
    let options = eframe::NativeOptions {
        viewport: egui::ViewportBuilder::default()
            .with_inner_size([1280.0, 860.0])
            .with_min_inner_size([720.0, 480.0]),
        ..Default::default()
    };

    eframe::run_native(
        "Imports/Exports Dashboard",
        options,
        Box::new(|_cc| Ok(Box::new(TradeDashboardApp::new(dataset, context)))),
    )
    .map_err(|e| anyhow!("window closed with an error: {e}"))
}
