use super::MarginSign;

/// A customer segment: one row of the dashboard's editable input table.
///
/// A segment is an independent value row; the book owns each record outright
/// and the editing collaborator replaces rows wholesale. Nothing about a
/// record is validated beyond its types: the dashboard is an exploratory
/// tool, and any finite or non-finite numeric input is accepted and drawn.
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "schemars", derive(schemars::JsonSchema))]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct SegmentRecord {
    /// Display label. Not required to be unique.
    pub name: String,
    /// Sale price in €/MWh.
    pub unit_price: f64,
    /// Cost to serve in €/MWh.
    pub unit_cost: f64,
    /// Annual volume in ktpa. A zero or negative volume is not rejected; it
    /// simply produces a zero-width (invisible) bar.
    pub volume: f64,
}

impl SegmentRecord {
    /// Convenience constructor for a record.
    pub fn new(name: impl Into<String>, unit_price: f64, unit_cost: f64, volume: f64) -> Self {
        Self {
            name: name.into(),
            unit_price,
            unit_cost,
            volume,
        }
    }

    /// The margin in €/MWh.
    ///
    /// Margin is a view over price and cost, recomputed on every access.
    /// It is deliberately never stored, so it can never go stale after an
    /// in-place edit.
    pub fn margin(&self) -> f64 {
        self.unit_price - self.unit_cost
    }

    /// The render bucket for this record's margin.
    pub fn margin_sign(&self) -> MarginSign {
        MarginSign::from_margin(self.margin())
    }
}
