//! Command-line implementations of the collaborator ports.
//!
//! The "grid" here is a JSON file (or stdin) the user edits by hand, and the
//! "renderer" is a JSON writer a downstream plotting tool consumes. Both sit
//! behind the same ports a real UI runtime would implement.

use crate::IOArgs;
use dcd_core::{
    models::{DashboardView, SegmentRecord},
    ports::{DashboardSink, SegmentSource},
};
use serde::Serialize;
use std::io::Write;

// The two fixed margin-bucket colors and the cost-line style are presentation
// decisions, so they live here with the renderer, not in the models.
const NON_NEGATIVE_FILL: &str = "lightblue";
const NEGATIVE_FILL: &str = "lightcoral";
const COST_LINE_STYLE: &str = "black, dashed";

/// Reads the edited segment sequence from a JSON file or stdin.
pub struct JsonSegmentSource<'a> {
    io: &'a IOArgs,
}

impl<'a> JsonSegmentSource<'a> {
    pub fn new(io: &'a IOArgs) -> Self {
        Self { io }
    }
}

impl SegmentSource for JsonSegmentSource<'_> {
    type Error = anyhow::Error;

    fn load(&self) -> Result<Vec<SegmentRecord>, Self::Error> {
        let records: Vec<SegmentRecord> = serde_json::from_reader(self.io.read()?)?;
        tracing::debug!(records = records.len(), "loaded segment file");
        Ok(records)
    }
}

/// Writes the rendered view as pretty JSON, palette included.
pub struct JsonDashboardSink {
    out: Box<dyn Write>,
}

impl JsonDashboardSink {
    pub fn new(out: Box<dyn Write>) -> Self {
        Self { out }
    }
}

impl DashboardSink for JsonDashboardSink {
    type Error = anyhow::Error;

    fn render(&mut self, view: &DashboardView) -> Result<(), Self::Error> {
        let painted = Painted { view, palette: Palette::default() };
        serde_json::to_writer_pretty(&mut self.out, &painted)?;
        writeln!(self.out)?;
        Ok(())
    }
}

#[derive(Serialize)]
struct Painted<'a> {
    #[serde(flatten)]
    view: &'a DashboardView,
    palette: Palette,
}

#[derive(Serialize)]
struct Palette {
    non_negative: &'static str,
    negative: &'static str,
    cost_line: &'static str,
}

impl Default for Palette {
    fn default() -> Self {
        Self {
            non_negative: NON_NEGATIVE_FILL,
            negative: NEGATIVE_FILL,
            cost_line: COST_LINE_STYLE,
        }
    }
}
