//! Command-line and environment configuration.
//!
//! Every global option can also be set through a `TRADE_DASHBOARD_*`
//! environment variable; flags win over the environment.

use std::collections::BTreeSet;
use std::path::PathBuf;

use anyhow::{bail, Result};
use clap::{Args, Parser, Subcommand};

use crate::data::export::DEFAULT_EXPORT_PATH;
use crate::data::filter::{AnalysisFilter, Choice, Predicate};
use crate::data::loader::{SampleSpec, DEFAULT_SAMPLE_SIZE, DEFAULT_SEED};
use crate::data::model::ImportExport;
use crate::state::SessionState;
use crate::view::{FigureSource, Page, ViewContext};

pub const DEFAULT_DATA_PATH: &str = "Imports_Exports_Dataset.csv";

#[derive(Debug, Parser)]
#[command(
    name = "trade-dashboard",
    about = "Imports/exports dashboard: filter, preview and summarize a trade dataset"
)]
pub struct Cli {
    /// Source dataset (.csv or .parquet).
    #[arg(long, env = "TRADE_DASHBOARD_DATA", default_value = DEFAULT_DATA_PATH)]
    pub data: PathBuf,

    /// Rows drawn from the source for the session.
    #[arg(long, env = "TRADE_DASHBOARD_SAMPLE_SIZE", default_value_t = DEFAULT_SAMPLE_SIZE)]
    pub sample_size: usize,

    /// Seed of the sampling RNG.
    #[arg(long, env = "TRADE_DASHBOARD_SEED", default_value_t = DEFAULT_SEED)]
    pub seed: u64,

    /// Where "Save Filtered Data" writes. Relative paths resolve against the
    /// working directory.
    #[arg(long, env = "TRADE_DASHBOARD_EXPORT_PATH", default_value = DEFAULT_EXPORT_PATH)]
    pub export_path: PathBuf,

    /// Source of the auxiliary analysis charts.
    #[arg(long, env = "TRADE_DASHBOARD_FIGURES", value_enum, default_value_t = FigureSource::Demo)]
    pub figures: FigureSource,

    #[command(subcommand)]
    pub command: Option<Command>,
}

#[derive(Debug, Subcommand)]
pub enum Command {
    /// Print the render plan of a page as JSON instead of opening a window.
    Plan {
        #[arg(long, value_enum, default_value_t = Page::Welcome)]
        page: Page,

        #[command(flatten)]
        filters: FilterArgs,
    },
    /// Write the preview selection to the export path and exit.
    Export {
        #[command(flatten)]
        filters: FilterArgs,
    },
}

/// Filter flags shared by the headless commands.
#[derive(Debug, Clone, Default, Args)]
pub struct FilterArgs {
    /// Country to keep; repeat for several.
    #[arg(long = "country")]
    pub countries: Vec<String>,

    /// Single product to keep.
    #[arg(long)]
    pub product: Option<String>,

    /// `Import` or `Export`.
    #[arg(long, value_parser = parse_direction)]
    pub import_export: Option<ImportExport>,
}

impl FilterArgs {
    pub fn predicate(&self) -> Predicate {
        Predicate {
            countries: self.countries.iter().cloned().collect::<BTreeSet<_>>(),
            product: self.product.clone().map_or(Choice::All, Choice::Only),
            import_export: self.import_export.map_or(Choice::All, Choice::Only),
        }
    }

    /// The analysis page filters on one country at most.
    pub fn analysis_filter(&self) -> Result<AnalysisFilter> {
        let country = match self.countries.as_slice() {
            [] => Choice::All,
            [one] => Choice::Only(one.clone()),
            _ => bail!("the analysis page accepts at most one --country"),
        };
        Ok(AnalysisFilter {
            country,
            import_export: self.import_export.map_or(Choice::All, Choice::Only),
        })
    }

    pub fn session(&self, page: Page) -> Result<SessionState> {
        let analysis = if page == Page::Analysis {
            self.analysis_filter()?
        } else {
            AnalysisFilter::default()
        };
        Ok(SessionState {
            page,
            preview: self.predicate(),
            analysis,
        })
    }
}

fn parse_direction(s: &str) -> std::result::Result<ImportExport, String> {
    ImportExport::ALL
        .into_iter()
        .find(|d| d.label().eq_ignore_ascii_case(s))
        .ok_or_else(|| format!("expected Import or Export, got '{s}'"))
}

impl Cli {
    pub fn sample_spec(&self) -> SampleSpec {
        SampleSpec {
            size: self.sample_size,
            seed: self.seed,
        }
    }

    pub fn view_context(&self) -> ViewContext {
        ViewContext {
            figures: self.figures,
            export_path: self.export_path.clone(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_reproduce_the_standard_session() {
        let cli = Cli::try_parse_from(["trade-dashboard"]).unwrap();
        assert_eq!(cli.sample_spec(), SampleSpec::default());
        assert_eq!(cli.export_path, PathBuf::from("Filtered_Data.csv"));
        assert_eq!(cli.figures, FigureSource::Demo);
        assert!(cli.command.is_none());
    }

    #[test]
    fn plan_subcommand_parses_filters() {
        let cli = Cli::try_parse_from([
            "trade-dashboard",
            "--data",
            "trades.csv",
            "plan",
            "--page",
            "preview",
            "--country",
            "USA",
            "--country",
            "India",
            "--import-export",
            "export",
        ])
        .unwrap();
        assert_eq!(cli.data, PathBuf::from("trades.csv"));
        let Some(Command::Plan { page, filters }) = cli.command else {
            panic!("expected plan subcommand");
        };
        assert_eq!(page, Page::Preview);
        let predicate = filters.predicate();
        assert_eq!(predicate.countries.len(), 2);
        assert_eq!(predicate.import_export, Choice::Only(ImportExport::Export));
        assert!(predicate.product.is_all());
    }

    #[test]
    fn analysis_session_rejects_several_countries() {
        let filters = FilterArgs {
            countries: vec!["USA".into(), "India".into()],
            ..FilterArgs::default()
        };
        assert!(filters.session(Page::Analysis).is_err());
        assert!(filters.session(Page::Preview).is_ok());
    }

    #[test]
    fn unknown_direction_is_rejected() {
        let parsed = Cli::try_parse_from(["trade-dashboard", "export", "--import-export", "barter"]);
        assert!(parsed.is_err());
    }
}
