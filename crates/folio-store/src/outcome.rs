//! Results of list reads.

use folio_core::entities::{EducationItem, ExperienceItem, ListedRecord};

use crate::error::StoreError;

/// What a list read produced.
///
/// Failure is reported next to the data rather than inside it; sample rows
/// only appear when the caller asks for them with [`ListOutcome::or_samples`].
#[derive(Debug)]
pub enum ListOutcome<T> {
    /// At least one document was read and normalized.
    Loaded(Vec<T>),
    /// The read succeeded and the collection held nothing to show.
    Empty,
    /// The store could not be read.
    Failed(StoreError),
}

impl<T: ListedRecord> ListOutcome<T> {
    pub(crate) fn from_records(records: Vec<T>) -> Self {
        if records.is_empty() {
            Self::Empty
        } else {
            Self::Loaded(records)
        }
    }

    /// Loaded records; empty for `Empty` and `Failed`.
    #[must_use]
    pub fn records(&self) -> &[T] {
        match self {
            Self::Loaded(records) => records,
            Self::Empty | Self::Failed(_) => &[],
        }
    }

    #[must_use]
    pub fn into_records(self) -> Vec<T> {
        match self {
            Self::Loaded(records) => records,
            Self::Empty | Self::Failed(_) => Vec::new(),
        }
    }

    /// Loaded records, or the kind's sample rows when nothing was loaded.
    #[must_use]
    pub fn or_samples(self) -> Vec<T> {
        match self {
            Self::Loaded(records) => records,
            Self::Empty | Self::Failed(_) => T::samples(),
        }
    }

    #[must_use]
    pub const fn is_loaded(&self) -> bool {
        matches!(self, Self::Loaded(_))
    }

    #[must_use]
    pub const fn is_empty(&self) -> bool {
        matches!(self, Self::Empty)
    }

    #[must_use]
    pub const fn is_failed(&self) -> bool {
        matches!(self, Self::Failed(_))
    }

    /// The store error, if the read failed.
    #[must_use]
    pub const fn error(&self) -> Option<&StoreError> {
        match self {
            Self::Failed(e) => Some(e),
            Self::Loaded(_) | Self::Empty => None,
        }
    }
}

/// Experience and education, read together for the resume page.
#[derive(Debug)]
pub struct Resume {
    pub experience: ListOutcome<ExperienceItem>,
    pub education: ListOutcome<EducationItem>,
}
