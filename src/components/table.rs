//! `data-testid` conventions shared by the moderation tables.

pub fn header_id(table: &str, column: &str) -> String {
    format!("{table}-header-{column}")
}

pub fn row_id(table: &str, row: usize) -> String {
    format!("{table}-row-{row}")
}

pub fn cell_id(table: &str, row: usize, column: &str) -> String {
    format!("{table}-cell-row-{row}-col-{column}")
}

pub fn button_id(table: &str, row: usize, column: &str) -> String {
    format!("{}-button", cell_id(table, row, column))
}
