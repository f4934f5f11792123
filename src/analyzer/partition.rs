//! Fixed category partitions for the column and dozen schemes.
//!
//! Both partitions are precomputed as 37-entry lookup tables indexed by
//! outcome, holding the category number (1–3) or 0 for the zero pocket.

use crate::types::{is_valid_outcome, Category, Scheme, OUTCOME_COUNT};

static COLUMN_TABLE: [u8; OUTCOME_COUNT] = build_table(Scheme::Column);
static DOZEN_TABLE: [u8; OUTCOME_COUNT] = build_table(Scheme::Dozen);

const fn build_table(scheme: Scheme) -> [u8; OUTCOME_COUNT] {
    let mut table = [0u8; OUTCOME_COUNT];
    let mut n = 1;
    while n < OUTCOME_COUNT {
        table[n] = match scheme {
            // 1, 4, 7, ... → 1; 2, 5, 8, ... → 2; 3, 6, 9, ... → 3
            Scheme::Column => ((n - 1) % 3 + 1) as u8,
            Scheme::Dozen => ((n - 1) / 12 + 1) as u8,
        };
        n += 1;
    }
    table
}

/// Lookup table for a scheme.
pub fn table(scheme: Scheme) -> &'static [u8; OUTCOME_COUNT] {
    match scheme {
        Scheme::Column => &COLUMN_TABLE,
        Scheme::Dozen => &DOZEN_TABLE,
    }
}

/// Category number of an outcome: 1–3, or 0 for zero and any value outside
/// the table.
pub fn category_number(outcome: i64, scheme: Scheme) -> u8 {
    if !is_valid_outcome(outcome) {
        return 0;
    }
    table(scheme)[outcome as usize]
}

/// Typed variant of [`category_number`].
pub fn category(outcome: i64, scheme: Scheme) -> Option<Category> {
    Category::from_number(category_number(outcome, scheme))
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
