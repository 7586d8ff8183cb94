use dcd_core::models::{BarSpec, ChartLabels, DemandChart, Legend, SegmentRecord};

/// Lay the records out as a stepped demand curve.
///
/// The i-th bar starts at the cumulative volume of all preceding records, is
/// as wide as its own volume, and as tall as its unit price; the unit cost
/// becomes the dashed marker across the bar's width. The transform is total:
/// any numeric input, including negative prices, costs, or volumes, produces
/// a bar. This is deliberate for an exploratory tool; a nonsensical input is
/// visible in the chart rather than rejected.
///
/// An empty input yields zero bars and an axis extent of one volume unit, so
/// the plotting range never degenerates.
pub fn demand_chart(records: &[SegmentRecord], labels: ChartLabels) -> DemandChart {
    let mut bars = Vec::with_capacity(records.len());
    let mut left = 0.0;
    for record in records {
        bars.push(BarSpec {
            left,
            width: record.volume,
            height: record.unit_price,
            cost_line: record.unit_cost,
            margin_sign: record.margin_sign(),
            label: bar_label(record),
        });
        left += record.volume;
    }

    let axis_extent = if records.is_empty() { 1.0 } else { left };

    DemandChart {
        bars,
        axis_extent,
        labels,
        legend: Legend::standard(),
    }
}

/// The annotation drawn above each bar: name, then price and cost lines.
fn bar_label(record: &SegmentRecord) -> String {
    format!(
        "{}\nPrice: {}€/MWh\nCost: {}€/MWh",
        record.name, record.unit_price, record.unit_cost
    )
}
