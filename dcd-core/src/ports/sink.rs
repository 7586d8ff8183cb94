use crate::models::DashboardView;

/// The rendering-collaborator seam.
///
/// Consumes one [`DashboardView`] per render pass. The sink owns all purely
/// presentational decisions: the two margin-bucket colors, the dashed
/// cost-line style, fonts, figure size. The view hands it geometry and
/// buckets, never colors.
pub trait DashboardSink {
    /// Failure reported by the collaborator.
    type Error;

    /// Draw (or write out) the view.
    fn render(&mut self, view: &DashboardView) -> Result<(), Self::Error>;
}
