use crate::models::SegmentRecord;

/// The editing-collaborator seam.
///
/// The grid widget (or a file/stdin adapter) presents the rows for editing
/// and hands the full, ordered, possibly edited sequence back on every
/// interaction. The pipeline never sees partial edits: it always reloads the
/// whole sequence and recomputes from scratch.
///
/// Everything downstream is single-threaded and synchronous, so the port is
/// too: there is exactly one writer, and a render pass runs to completion
/// before the next edit is accepted.
pub trait SegmentSource {
    /// Failure reported by the collaborator.
    type Error;

    /// Return the current ordered record sequence.
    fn load(&self) -> Result<Vec<SegmentRecord>, Self::Error>;
}
