use super::{IOArgs, PathOrStd};
use clap::Subcommand;

mod filter;
pub use filter::{FilterArgs, MarginArg};

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Compute the demand-curve chart from a segment file
    Chart {
        #[command(flatten)]
        io: IOArgs,

        #[command(flatten)]
        filter: FilterArgs,
    },

    /// Recompute the margin column and report the input table rows
    Table {
        #[command(flatten)]
        io: IOArgs,

        #[command(flatten)]
        filter: FilterArgs,
    },

    /// Run a full render pass: table plus chart in a single view
    View {
        #[command(flatten)]
        io: IOArgs,

        #[command(flatten)]
        filter: FilterArgs,
    },

    /// Write the built-in seed segments as an editable starting file
    Seed {
        /// The output file ("-" implies stdout)
        #[arg(short, long, default_value = "-", value_parser = clap::value_parser!(PathOrStd))]
        output: PathOrStd,
    },

    /// Write the JSON Schema for the segment input format
    Schema {
        /// The output file ("-" implies stdout)
        #[arg(short, long, default_value = "-", value_parser = clap::value_parser!(PathOrStd))]
        output: PathOrStd,
    },
}
