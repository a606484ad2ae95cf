//! Repeatable "work experience" rows.

use serde::{Deserialize, Serialize};

use crate::error::CvResult;

/// Maximum number of concurrent experience rows.
pub const MAX_EXPERIENCES: usize = 3;

/// Identifier of a row, unique within one list's lifetime.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct RowId(pub u32);

impl std::fmt::Display for RowId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "exp-{}", self.0)
    }
}

/// One country/duration pair as typed by the user.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ExperienceRow {
    pub id: RowId,
    pub country: String,
    /// Years, kept as typed
    pub period: String,
}

impl ExperienceRow {
    pub fn is_complete(&self) -> bool {
        !self.country.is_empty() && !self.period.is_empty()
    }
}

/// Wire shape of a row inside the `experiences` JSON array.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Experience {
    pub country: String,
    pub period: String,
}

/// Ordered list of 0 to [`MAX_EXPERIENCES`] rows.
#[derive(Debug, Clone, Default)]
pub struct ExperienceList {
    rows: Vec<ExperienceRow>,
    next_id: u32,
}

impl ExperienceList {
    pub fn new() -> Self {
        Self::default()
    }

    /// Append an empty row. No-op at capacity.
    pub fn add_row(&mut self) -> Option<RowId> {
        if self.rows.len() >= MAX_EXPERIENCES {
            return None;
        }
        self.next_id += 1;
        let id = RowId(self.next_id);
        self.rows.push(ExperienceRow {
            id,
            country: String::new(),
            period: String::new(),
        });
        Some(id)
    }

    /// Remove a row by id. Returns `false` if no such row exists.
    pub fn remove_row(&mut self, id: RowId) -> bool {
        let before = self.rows.len();
        self.rows.retain(|row| row.id != id);
        self.rows.len() != before
    }

    pub fn update_country(&mut self, id: RowId, country: impl Into<String>) {
        if let Some(row) = self.row_mut(id) {
            row.country = country.into();
        }
    }

    pub fn update_period(&mut self, id: RowId, period: impl Into<String>) {
        if let Some(row) = self.row_mut(id) {
            row.period = period.into();
        }
    }

    fn row_mut(&mut self, id: RowId) -> Option<&mut ExperienceRow> {
        self.rows.iter_mut().find(|row| row.id == id)
    }

    pub fn rows(&self) -> &[ExperienceRow] {
        &self.rows
    }

    pub fn len(&self) -> usize {
        self.rows.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }

    /// The list container is only shown once a row exists.
    pub fn show_container(&self) -> bool {
        !self.rows.is_empty()
    }

    /// The add control hides at capacity.
    pub fn can_add(&self) -> bool {
        self.rows.len() < MAX_EXPERIENCES
    }

    /// Rows with both fields filled, in insertion order.
    pub fn valid_rows(&self) -> Vec<Experience> {
        self.rows
            .iter()
            .filter(|row| row.is_complete())
            .map(|row| Experience {
                country: row.country.clone(),
                period: row.period.clone(),
            })
            .collect()
    }

    /// JSON array sent as the `experiences` form field.
    pub fn to_json(&self) -> CvResult<String> {
        Ok(serde_json::to_string(&self.valid_rows())?)
    }

    /// Drop every row and restart id numbering.
    pub fn clear(&mut self) {
        self.rows.clear();
        self.next_id = 0;
    }
}
