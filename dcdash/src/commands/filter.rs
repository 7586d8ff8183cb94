use clap::{Args, ValueEnum};
use dcd_core::models::{MarginFilter, SegmentFilter};

/// The sidebar filter controls, as command-line flags.
#[derive(Args, Debug, Default)]
pub struct FilterArgs {
    /// Keep only segments with at least this volume (ktpa)
    #[arg(long)]
    pub min_volume: Option<f64>,

    /// Keep only segments whose margin has this sign
    #[arg(long, value_enum)]
    pub margin: Option<MarginArg>,

    /// Keep only segments whose name contains this keyword
    /// (case-sensitive; may be repeated)
    #[arg(long = "category")]
    pub categories: Vec<String>,
}

/// CLI spelling of the three-way margin selector.
#[derive(ValueEnum, Clone, Copy, Debug, PartialEq, Eq)]
pub enum MarginArg {
    /// Keep every segment
    All,
    /// Margin strictly greater than zero
    Positive,
    /// Margin strictly less than zero
    Negative,
}

impl From<MarginArg> for MarginFilter {
    fn from(value: MarginArg) -> Self {
        match value {
            MarginArg::All => Self::All,
            MarginArg::Positive => Self::PositiveOnly,
            MarginArg::Negative => Self::NegativeOnly,
        }
    }
}

impl FilterArgs {
    /// Merge the CLI flags over the config-file filter.
    ///
    /// Returns `None` when no filtering is requested anywhere, in which case
    /// the chart sees the records exactly as edited (the variants without a
    /// sidebar). Each flag that is present overrides the corresponding
    /// config field.
    pub fn resolve(self, base: Option<SegmentFilter>) -> Option<SegmentFilter> {
        if self.is_empty() {
            return base;
        }

        let mut filter = base.unwrap_or_default();
        if let Some(min_volume) = self.min_volume {
            filter.min_volume = min_volume;
        }
        if let Some(margin) = self.margin {
            filter.margin = margin.into();
        }
        if !self.categories.is_empty() {
            filter.categories = Some(self.categories.into_iter().collect());
        }
        Some(filter)
    }

    fn is_empty(&self) -> bool {
        self.min_volume.is_none() && self.margin.is_none() && self.categories.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn no_flags_and_no_config_means_no_filter() {
        assert_eq!(FilterArgs::default().resolve(None), None);
    }

    #[test]
    fn no_flags_falls_back_to_config() {
        let base = SegmentFilter {
            min_volume: 20.0,
            ..Default::default()
        };
        assert_eq!(FilterArgs::default().resolve(Some(base.clone())), Some(base));
    }

    #[test]
    fn flags_override_config_fields() {
        let base = SegmentFilter {
            min_volume: 20.0,
            margin: MarginFilter::PositiveOnly,
            categories: Some(["Maritime".to_string()].into()),
        };
        let args = FilterArgs {
            min_volume: Some(5.0),
            margin: None,
            categories: vec!["Industry".to_string()],
        };

        let resolved = args.resolve(Some(base)).unwrap();
        assert_eq!(resolved.min_volume, 5.0);
        assert_eq!(resolved.margin, MarginFilter::PositiveOnly);
        assert_eq!(resolved.categories, Some(["Industry".to_string()].into()));
    }

    #[test]
    fn margin_arg_maps_onto_the_model() {
        assert_eq!(MarginFilter::from(MarginArg::All), MarginFilter::All);
        assert_eq!(MarginFilter::from(MarginArg::Positive), MarginFilter::PositiveOnly);
        assert_eq!(MarginFilter::from(MarginArg::Negative), MarginFilter::NegativeOnly);
    }
}
