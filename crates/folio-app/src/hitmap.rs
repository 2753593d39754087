//! Screen positions of actionable spans, for mouse clicks.
//!
//! One entry per printed row since the last full redraw. The prompt sits on
//! the row after the last printed one, so when the output outgrows the screen
//! the terminal has scrolled by `rows + 1 - height`.

/// Columns `[start, end)` on one row that re-submit `command` when clicked.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ActionRegion {
    pub start: u16,
    pub end: u16,
    pub command: String,
}

#[derive(Debug, Default)]
pub struct HitMap {
    rows: Vec<Vec<ActionRegion>>,
}

impl HitMap {
    /// Forget every row (the screen was cleared).
    pub fn clear(&mut self) {
        self.rows.clear();
    }

    pub fn push_row(&mut self, regions: Vec<ActionRegion>) {
        self.rows.push(regions);
    }

    #[cfg(test)]
    pub fn len(&self) -> usize {
        self.rows.len()
    }

    /// Command under screen cell (`col`, `row`) on a screen `height` rows tall.
    pub fn command_at(&self, col: u16, row: u16, height: u16) -> Option<&str> {
        let total = self.rows.len() + 1;
        let top = total.saturating_sub(usize::from(height));
        self.rows
            .get(top + usize::from(row))?
            .iter()
            .find(|r| (r.start..r.end).contains(&col))
            .map(|r| r.command.as_str())
    }
}
