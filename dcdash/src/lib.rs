use clap::Parser;
use dcd_chart::{apply_filter, demand_chart, render};
use dcd_core::{
    models::{SegmentBook, SegmentRecord, TableRow},
    ports::{DashboardSink as _, SegmentSource as _},
};
use std::path::PathBuf;

mod io;
pub use io::*;

mod commands;
pub use commands::*;

mod config;
pub use config::AppConfig;

mod impls;
pub use impls::*;

mod seed;
pub use seed::risavika_seed;

// The top-level arguments: an optional config file plus which subcommand to
// execute.
#[derive(Parser, Debug)]
#[command(version, about, long_about = None)]
pub struct BaseArgs {
    /// Path to an optional TOML configuration file
    #[arg(short, long, env = "APP_CONFIG", global = true)]
    pub config: Option<PathBuf>,

    #[command(subcommand)]
    pub command: Commands,
}

impl BaseArgs {
    pub fn evaluate(self) -> anyhow::Result<()> {
        let app = AppConfig::load(self.config.as_deref())?;

        match self.command {
            Commands::Chart { io, filter } => {
                let records = JsonSegmentSource::new(&io).load()?;
                let records = match filter.resolve(app.filter) {
                    Some(filter) => apply_filter(&filter, &records),
                    None => records,
                };
                let chart = demand_chart(&records, app.labels);
                serde_json::to_writer_pretty(io.write()?, &chart)?;
            }

            Commands::Table { io, filter } => {
                let records = JsonSegmentSource::new(&io).load()?;
                let records = match filter.resolve(app.filter) {
                    Some(filter) => apply_filter(&filter, &records),
                    None => records,
                };
                let rows: Vec<TableRow> = records.into_iter().map(TableRow::from).collect();
                serde_json::to_writer_pretty(io.write()?, &rows)?;
            }

            Commands::View { io, filter } => {
                let book = SegmentBook::new(JsonSegmentSource::new(&io).load()?);
                let view = render(&book, filter.resolve(app.filter).as_ref(), app.labels);
                JsonDashboardSink::new(io.write()?).render(&view)?;
            }

            Commands::Seed { output } => {
                serde_json::to_writer_pretty(output.write()?, &risavika_seed())?;
            }

            Commands::Schema { output } => {
                let schema = schemars::schema_for!(Vec<SegmentRecord>);
                serde_json::to_writer_pretty(output.write()?, &schema)?;
            }
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use dcd_core::models::MarginFilter;

    #[test]
    fn chart_flags_parse_into_filter_args() {
        let args = BaseArgs::try_parse_from([
            "dcdash",
            "chart",
            "segments.json",
            "--min-volume",
            "20",
            "--margin",
            "negative",
            "--category",
            "Maritime",
            "--category",
            "Industry",
        ])
        .unwrap();

        let Commands::Chart { filter, .. } = args.command else {
            panic!("expected the chart subcommand");
        };
        let filter = filter.resolve(None).unwrap();
        assert_eq!(filter.min_volume, 20.0);
        assert_eq!(filter.margin, MarginFilter::NegativeOnly);
        assert_eq!(
            filter.categories,
            Some(["Industry".to_string(), "Maritime".to_string()].into())
        );
    }

    #[test]
    fn table_takes_the_same_filter_flags_as_chart() {
        let args = BaseArgs::try_parse_from([
            "dcdash",
            "table",
            "segments.json",
            "--min-volume",
            "20",
            "--margin",
            "positive",
            "--category",
            "Maritime",
        ])
        .unwrap();

        let Commands::Table { filter, .. } = args.command else {
            panic!("expected the table subcommand");
        };
        let filter = filter.resolve(None).unwrap();
        assert_eq!(filter.min_volume, 20.0);
        assert_eq!(filter.margin, MarginFilter::PositiveOnly);
        assert_eq!(filter.categories, Some(["Maritime".to_string()].into()));
    }

    #[test]
    fn seed_defaults_to_stdout() {
        let args = BaseArgs::try_parse_from(["dcdash", "seed"]).unwrap();
        let Commands::Seed { output } = args.command else {
            panic!("expected the seed subcommand");
        };
        assert!(matches!(output, PathOrStd::Std));
    }

    #[test]
    fn config_flag_is_global() {
        let args =
            BaseArgs::try_parse_from(["dcdash", "table", "segments.json", "--config", "app.toml"])
                .unwrap();
        assert_eq!(args.config, Some(PathBuf::from("app.toml")));
    }
}
