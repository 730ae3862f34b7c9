// src/config/consts.rs

// Section marker (note the trailing space; the report has it too)
pub const SECTION_LABEL: &str = "Данные ГН ";
pub const ANCHOR_TAG: &str = "a";
pub const ANCHOR_KEY: &str = "name";

// Data tables
pub const TABLE_TAG: &str = "table";
pub const TABLE_ATTR_KEY: &str = "cellpadding";
pub const TABLE_ATTR_VALUE: &str = "4";
pub const STOP_TAG: &str = "h2";
pub const MAX_SIBLING_STEPS: usize = 10_000;

// Rows
pub const HEADER_LABEL: &str = "Время";
pub const DATE_PREFIX: &str = "Дата";
pub const DATE_SPLIT: char = ':';
pub const MIN_DATA_CELLS: usize = 5;

// Output
pub const FIELD_DELIM: char = ';';
pub const OUTPUT_SUFFIX: &str = ".csv";
