use super::{DemandChart, SegmentRecord};

/// One row of the rendered input table: the record plus its margin column.
///
/// The margin is computed when the row is built, once per render pass, and
/// never stored on the record itself.
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "schemars", derive(schemars::JsonSchema))]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct TableRow {
    /// The underlying segment record.
    #[cfg_attr(feature = "serde", serde(flatten))]
    pub record: SegmentRecord,
    /// Margin in €/MWh, recomputed from the record.
    pub margin: f64,
}

impl From<SegmentRecord> for TableRow {
    fn from(record: SegmentRecord) -> Self {
        let margin = record.margin();
        Self { record, margin }
    }
}

/// The complete output of one render pass.
///
/// The table shows every row of the book (the grid is the editor, so it never
/// hides rows); the chart reflects whatever filter and sort were active.
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "schemars", derive(schemars::JsonSchema))]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct DashboardView {
    /// The input table with its margin column.
    pub table: Vec<TableRow>,
    /// The demand-curve chart.
    pub chart: DemandChart,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn table_row_carries_computed_margin() {
        let row = TableRow::from(SegmentRecord::new("Onshore Tankers - Local", 58.0, 48.0, 23.0));
        assert_eq!(row.margin, 10.0);
    }

    #[test]
    fn table_row_serializes_flat() {
        let row = TableRow::from(SegmentRecord::new("Industry - CHP", 47.0, 42.0, 17.0));
        let value = serde_json::to_value(&row).unwrap();
        // The record's fields sit next to the margin column, not nested.
        assert_eq!(value["name"], "Industry - CHP");
        assert_eq!(value["margin"], 5.0);
    }
}
