use crate::{apply_filter, demand_chart};
use dcd_core::models::{ChartLabels, DashboardView, SegmentBook, SegmentFilter, TableRow};

/// Run one full render pass over the current book state.
///
/// This is the `render(state) -> view` function the external event loop
/// invokes whenever the book changes. The table always shows every row of
/// the book with its margin column recomputed (the grid is the editor, so it
/// never hides rows); only the chart sees the optional filter/sort pipeline.
///
/// Pure function of its inputs: two passes over the same book and filter
/// produce identical views.
pub fn render(
    book: &SegmentBook,
    filter: Option<&SegmentFilter>,
    labels: ChartLabels,
) -> DashboardView {
    let table: Vec<TableRow> = book.records().iter().cloned().map(TableRow::from).collect();

    let chart = match filter {
        Some(filter) => demand_chart(&apply_filter(filter, book.records()), labels),
        None => demand_chart(book.records(), labels),
    };

    tracing::debug!(rows = table.len(), bars = chart.bars.len(), "rendered dashboard view");

    DashboardView { table, chart }
}

#[cfg(test)]
mod tests {
    use super::*;
    use dcd_core::models::{MarginFilter, SegmentRecord};

    #[test]
    fn table_ignores_the_chart_filter() {
        let book = SegmentBook::new(vec![
            SegmentRecord::new("Maritime Export - Hub Bunkering", 35.0, 46.0, 25.0),
            SegmentRecord::new("Industry - CHP", 47.0, 42.0, 17.0),
        ]);
        let filter = SegmentFilter {
            margin: MarginFilter::PositiveOnly,
            ..Default::default()
        };

        let view = render(&book, Some(&filter), ChartLabels::default());
        assert_eq!(view.table.len(), 2);
        assert_eq!(view.chart.bars.len(), 1);
    }

    #[test]
    fn margin_column_is_recomputed_each_pass() {
        let mut book = SegmentBook::new(vec![SegmentRecord::new("Industry - CHP", 47.0, 42.0, 17.0)]);
        let view = render(&book, None, ChartLabels::default());
        assert_eq!(view.table[0].margin, 5.0);

        book.update(0, SegmentRecord::new("Industry - CHP", 40.0, 42.0, 17.0))
            .unwrap();
        let view = render(&book, None, ChartLabels::default());
        assert_eq!(view.table[0].margin, -2.0);
    }
}
