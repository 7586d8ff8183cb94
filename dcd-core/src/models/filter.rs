use super::SegmentRecord;
use std::collections::BTreeSet;

/// The three-way margin-sign selector of the sidebar filter.
///
/// The sign predicates are strict: a zero-margin row passes only [`All`].
///
/// [`All`]: MarginFilter::All
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
#[cfg_attr(feature = "schemars", derive(schemars::JsonSchema))]
#[cfg_attr(
    feature = "serde",
    derive(serde::Serialize, serde::Deserialize),
    serde(rename_all = "snake_case")
)]
pub enum MarginFilter {
    /// Keep every row regardless of margin.
    #[default]
    All,
    /// Keep only rows with margin strictly greater than zero.
    PositiveOnly,
    /// Keep only rows with margin strictly less than zero.
    NegativeOnly,
}

impl MarginFilter {
    /// Whether a margin value passes this selector.
    pub fn matches(&self, margin: f64) -> bool {
        match self {
            Self::All => true,
            Self::PositiveOnly => margin > 0.0,
            Self::NegativeOnly => margin < 0.0,
        }
    }
}

/// The conjunction of sidebar predicates applied before the transform.
///
/// Keyword matching is a case-sensitive substring test over the segment name,
/// mirroring the original sidebar multiselect. Consequently `Some` of an
/// empty set matches nothing, exactly like a multiselect with every category
/// deselected, while `None` disables the keyword predicate entirely (the
/// dashboard variants without a sidebar).
#[derive(Clone, Debug, Default, PartialEq)]
#[cfg_attr(feature = "schemars", derive(schemars::JsonSchema))]
#[cfg_attr(
    feature = "serde",
    derive(serde::Serialize, serde::Deserialize),
    serde(default)
)]
pub struct SegmentFilter {
    /// Keep only rows with at least this volume (ktpa).
    pub min_volume: f64,
    /// Keep only rows whose margin passes this selector.
    pub margin: MarginFilter,
    /// Keep only rows whose name contains at least one of these keywords.
    pub categories: Option<BTreeSet<String>>,
}

impl SegmentFilter {
    /// Whether a record passes all three predicates.
    pub fn matches(&self, record: &SegmentRecord) -> bool {
        record.volume >= self.min_volume
            && self.margin.matches(record.margin())
            && match &self.categories {
                None => true,
                Some(keywords) => keywords.iter().any(|k| record.name.contains(k.as_str())),
            }
    }
}
