mod sink;
mod source;

pub use sink::DashboardSink;
pub use source::SegmentSource;
