/// The two fixed render buckets for a segment's margin.
///
/// The renderer owns the actual colors; the model only records which bucket
/// a bar falls in.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "schemars", derive(schemars::JsonSchema))]
#[cfg_attr(
    feature = "serde",
    derive(serde::Serialize, serde::Deserialize),
    serde(rename_all = "snake_case")
)]
pub enum MarginSign {
    /// Margin ≥ 0.
    NonNegative,
    /// Margin < 0.
    Negative,
}

impl MarginSign {
    /// Bucket a margin value. A margin of exactly zero is non-negative.
    ///
    /// Total over any input; a NaN margin falls in the negative bucket.
    pub fn from_margin(margin: f64) -> Self {
        if margin >= 0.0 {
            Self::NonNegative
        } else {
            Self::Negative
        }
    }
}

/// One bar of the demand curve, ready for the rendering collaborator.
///
/// The renderer draws a rectangle spanning `[left, left + width]`
/// horizontally and `[0, height]` vertically, a dashed marker at `cost_line`
/// across the bar's width, and the label text above the bar.
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "schemars", derive(schemars::JsonSchema))]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct BarSpec {
    /// Cumulative volume of all preceding bars (ktpa).
    pub left: f64,
    /// This segment's volume (ktpa).
    pub width: f64,
    /// This segment's unit price (€/MWh).
    pub height: f64,
    /// This segment's unit cost (€/MWh), drawn as a horizontal marker.
    pub cost_line: f64,
    /// Which color bucket the bar belongs to.
    pub margin_sign: MarginSign,
    /// Segment name plus price/cost annotation text.
    pub label: String,
}

/// The demand-curve chart for one render pass.
///
/// Bars are recomputed from scratch every pass and never cached.
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "schemars", derive(schemars::JsonSchema))]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct DemandChart {
    /// The bars, in the order the active sort assigned.
    pub bars: Vec<BarSpec>,
    /// Horizontal extent of the chart: the total volume of all bars, or 1.0
    /// for an empty chart so the plotting range stays valid.
    pub axis_extent: f64,
    /// Title and axis text.
    pub labels: ChartLabels,
    /// The fixed legend entries.
    pub legend: Vec<LegendEntry>,
}

/// Title and axis text for the chart.
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "schemars", derive(schemars::JsonSchema))]
#[cfg_attr(
    feature = "serde",
    derive(serde::Serialize, serde::Deserialize),
    serde(default)
)]
pub struct ChartLabels {
    /// Chart title.
    pub title: String,
    /// Horizontal axis label.
    pub x_axis: String,
    /// Vertical axis label.
    pub y_axis: String,
}

impl Default for ChartLabels {
    fn default() -> Self {
        Self {
            title: "Demand Curve with Segment-Specific Cost to Serve".into(),
            x_axis: "LNG Volume (ktpa)".into(),
            y_axis: "Price / Cost (€/MWh)".into(),
        }
    }
}

/// One entry of the chart legend.
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "schemars", derive(schemars::JsonSchema))]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct LegendEntry {
    /// Display text for the entry.
    pub label: String,
    /// What the entry's swatch depicts.
    pub marker: LegendMarker,
}

/// The swatch style of a legend entry.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "schemars", derive(schemars::JsonSchema))]
#[cfg_attr(
    feature = "serde",
    derive(serde::Serialize, serde::Deserialize),
    serde(rename_all = "snake_case")
)]
pub enum LegendMarker {
    /// A filled patch in one of the two margin colors.
    Fill(MarginSign),
    /// The dashed cost-to-serve (RLP) line style.
    DashedLine,
}

/// The fixed three-entry legend.
pub struct Legend;

impl Legend {
    /// Positive margin, negative margin, cost-to-serve marker.
    pub fn standard() -> Vec<LegendEntry> {
        vec![
            LegendEntry {
                label: "Positive Margin".into(),
                marker: LegendMarker::Fill(MarginSign::NonNegative),
            },
            LegendEntry {
                label: "Negative Margin".into(),
                marker: LegendMarker::Fill(MarginSign::Negative),
            },
            LegendEntry {
                label: "Cost to Serve".into(),
                marker: LegendMarker::DashedLine,
            },
        ]
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn margin_sign_buckets() {
        assert_eq!(MarginSign::from_margin(5.0), MarginSign::NonNegative);
        assert_eq!(MarginSign::from_margin(0.0), MarginSign::NonNegative);
        assert_eq!(MarginSign::from_margin(-0.5), MarginSign::Negative);
        assert_eq!(MarginSign::from_margin(f64::NAN), MarginSign::Negative);
    }

    #[test]
    fn margin_sign_serializes_snake_case() {
        assert_eq!(
            serde_json::to_string(&MarginSign::NonNegative).unwrap(),
            r#""non_negative""#
        );
        assert_eq!(
            serde_json::to_string(&MarginSign::Negative).unwrap(),
            r#""negative""#
        );
    }

    #[test]
    fn legend_has_three_fixed_entries() {
        let legend = Legend::standard();
        assert_eq!(legend.len(), 3);
        assert_eq!(legend[0].marker, LegendMarker::Fill(MarginSign::NonNegative));
        assert_eq!(legend[1].marker, LegendMarker::Fill(MarginSign::Negative));
        assert_eq!(legend[2].marker, LegendMarker::DashedLine);
    }
}
