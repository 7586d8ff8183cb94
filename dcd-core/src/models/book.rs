use super::SegmentRecord;
use thiserror::Error;

/// The ordered record store backing the editable grid.
///
/// Rows keep their insertion order unless the filter pipeline reassigns it
/// downstream; the demand-curve transform is order-dependent, since each
/// bar's horizontal offset is the cumulative volume of the rows before it.
///
/// The book is seeded from a caller-supplied record list (a configuration
/// value, not a literal baked into the core) and mutated synchronously by the
/// editing collaborator between render passes. Nothing is persisted: a
/// process restart starts over from the seed.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct SegmentBook {
    seed: Vec<SegmentRecord>,
    records: Vec<SegmentRecord>,
}

impl SegmentBook {
    /// Create a book whose current state is a copy of the given seed.
    pub fn new(seed: Vec<SegmentRecord>) -> Self {
        Self {
            records: seed.clone(),
            seed,
        }
    }

    /// The current rows, in order.
    pub fn records(&self) -> &[SegmentRecord] {
        &self.records
    }

    /// Number of rows currently in the book.
    pub fn len(&self) -> usize {
        self.records.len()
    }

    /// Whether the book has no rows.
    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    /// Append a row at the end of the book ("add row" in the grid).
    pub fn push(&mut self, record: SegmentRecord) {
        self.records.push(record);
    }

    /// Delete the row at `index`, returning it.
    pub fn remove(&mut self, index: usize) -> Result<SegmentRecord, EditError> {
        if index < self.records.len() {
            Ok(self.records.remove(index))
        } else {
            Err(EditError::RowOutOfRange {
                index,
                len: self.records.len(),
            })
        }
    }

    /// Replace the row at `index` with an edited record.
    pub fn update(&mut self, index: usize, record: SegmentRecord) -> Result<(), EditError> {
        match self.records.get_mut(index) {
            Some(row) => {
                *row = record;
                Ok(())
            }
            None => Err(EditError::RowOutOfRange {
                index,
                len: self.records.len(),
            }),
        }
    }

    /// Replace the whole book with a freshly edited sequence.
    ///
    /// The grid collaborator hands back the full ordered sequence on every
    /// interaction, so this is the common write path.
    pub fn replace_all(&mut self, records: Vec<SegmentRecord>) {
        self.records = records;
    }

    /// Discard all edits and restore the seed state.
    pub fn reset(&mut self) {
        self.records = self.seed.clone();
    }
}

/// Errors from row-level edit operations.
#[derive(Debug, PartialEq, Error)]
pub enum EditError {
    /// The targeted row does not exist.
    #[error("row {index} does not exist (book has {len} rows)")]
    RowOutOfRange {
        /// The requested row index.
        index: usize,
        /// The number of rows in the book at the time of the edit.
        len: usize,
    },
}

#[cfg(test)]
mod tests {
    use super::*;

    fn seed() -> Vec<SegmentRecord> {
        vec![
            SegmentRecord::new("Maritime Export - Hub Bunkering", 35.0, 46.0, 25.0),
            SegmentRecord::new("Industry - CHP", 47.0, 42.0, 17.0),
        ]
    }

    #[test]
    fn book_starts_as_seed_copy() {
        let book = SegmentBook::new(seed());
        assert_eq!(book.records(), seed().as_slice());
    }

    #[test]
    fn edits_preserve_insertion_order() {
        let mut book = SegmentBook::new(seed());
        book.push(SegmentRecord::new("Industry - Off-grid", 49.0, 46.0, 15.0));
        book.update(0, SegmentRecord::new("Maritime Export - Hub Bunkering", 40.0, 46.0, 25.0))
            .unwrap();

        let names: Vec<&str> = book.records().iter().map(|r| r.name.as_str()).collect();
        assert_eq!(
            names,
            [
                "Maritime Export - Hub Bunkering",
                "Industry - CHP",
                "Industry - Off-grid"
            ]
        );
        assert_eq!(book.records()[0].unit_price, 40.0);
    }

    #[test]
    fn remove_shifts_later_rows() {
        let mut book = SegmentBook::new(seed());
        let removed = book.remove(0).unwrap();
        assert_eq!(removed.name, "Maritime Export - Hub Bunkering");
        assert_eq!(book.len(), 1);
        assert_eq!(book.records()[0].name, "Industry - CHP");
    }

    #[test]
    fn out_of_range_edits_fail() {
        let mut book = SegmentBook::new(seed());
        assert_eq!(
            book.remove(5).unwrap_err(),
            EditError::RowOutOfRange { index: 5, len: 2 }
        );
        assert_eq!(
            book.update(2, SegmentRecord::new("x", 0.0, 0.0, 0.0))
                .unwrap_err(),
            EditError::RowOutOfRange { index: 2, len: 2 }
        );
    }

    #[test]
    fn reset_restores_seed() {
        let mut book = SegmentBook::new(seed());
        book.replace_all(vec![]);
        assert!(book.is_empty());
        book.reset();
        assert_eq!(book.records(), seed().as_slice());
    }
}
