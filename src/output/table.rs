//! Table output formatting

use tabled::{
    Table, Tabled,
    settings::{
        Alignment, Modify, Style,
        object::{Columns, Rows},
    },
};

/// How one kind of table is laid out
#[derive(Debug, Clone, Copy)]
pub struct TableLayout {
    /// Message printed instead of an empty table
    pub empty: &'static str,
    /// Columns holding numbers, right-aligned
    pub numeric: &'static [usize],
}

/// Organization listing: `#`, ORG ID, NAME
pub const ORGANIZATIONS: TableLayout = TableLayout {
    empty: "No organizations found.",
    numeric: &[0],
};

/// Validation counters: CHECK, ORDERS
pub const COUNTS: TableLayout = TableLayout {
    empty: "No orders checked.",
    numeric: &[1],
};

/// Duplicate phones: PHONE, ORDERS
pub const DUPLICATES: TableLayout = TableLayout {
    empty: "No duplicate phone numbers.",
    numeric: &[1],
};

/// Format rows with the given layout
pub fn format_table<T: Tabled>(rows: &[T], layout: TableLayout) -> String {
    if rows.is_empty() {
        return layout.empty.to_string();
    }

    let mut table = Table::new(rows);
    table.with(Style::rounded());
    for &column in layout.numeric {
        table.with(Modify::new(Columns::one(column)).with(Alignment::right()));
    }
    // Headers stay centered over numeric columns too
    table.with(Modify::new(Rows::first()).with(Alignment::center()));

    table.to_string()
}
