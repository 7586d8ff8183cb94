mod book;
mod chart;
mod filter;
mod segment;
mod view;

pub use book::{EditError, SegmentBook};
pub use chart::{BarSpec, ChartLabels, DemandChart, Legend, LegendEntry, LegendMarker, MarginSign};
pub use filter::{MarginFilter, SegmentFilter};
pub use segment::SegmentRecord;
pub use view::{DashboardView, TableRow};
