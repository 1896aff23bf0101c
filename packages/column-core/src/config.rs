//! Column configuration.

/// How row indices are bounds-checked.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum IndexPolicy {
    /// Valid when `-rows <= index < rows`; negative indices count from the end.
    #[default]
    Conventional,
    /// Valid when `-index < rows && rows > index`.
    ///
    /// Rejects `index == -rows`, which the conventional check accepts.
    Legacy,
}

impl IndexPolicy {
    /// Resolves `index` against `rows`, returning the absolute position.
    pub fn resolve(self, index: isize, rows: usize) -> Option<usize> {
        let rows_i = isize::try_from(rows).ok()?;
        let in_bounds = match self {
            IndexPolicy::Conventional => -rows_i <= index && index < rows_i,
            IndexPolicy::Legacy => {
                index.checked_neg().is_some_and(|neg| neg < rows_i) && rows_i > index
            }
        };
        if !in_bounds {
            return None;
        }
        let position = if index < 0 { rows_i + index } else { index };
        usize::try_from(position).ok()
    }
}

/// How AUTO_INCREMENT picks the value for a missing row identity.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum IncrementPolicy {
    /// Current row count plus one.
    #[default]
    RowCount,
    /// Largest stored integer plus one, or 1 for an empty column.
    RunningMax,
}

/// Which rows `modify` compares the new value against for duplicates.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum DuplicateScope {
    /// Every stored row, including the one being overwritten.
    ///
    /// Rewriting a PRIMARY KEY or UNIQUE row with its current value fails.
    #[default]
    AllRows,
    /// Every stored row except the one being overwritten.
    OtherRows,
}

/// Column configuration.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FieldConfig {
    /// Row index bounds check
    pub index_policy: IndexPolicy,
    /// Auto-increment counter source
    pub increment_policy: IncrementPolicy,
    /// Rows checked for duplicates on update
    pub duplicate_scope: DuplicateScope,
    /// Initial value store capacity in rows
    pub initial_capacity: usize,
}

impl Default for FieldConfig {
    fn default() -> Self {
        Self {
            index_policy: IndexPolicy::Conventional,
            increment_policy: IncrementPolicy::RowCount,
            duplicate_scope: DuplicateScope::AllRows,
            initial_capacity: 16,
        }
    }
}
