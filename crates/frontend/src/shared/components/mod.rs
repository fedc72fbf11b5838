pub mod table_checkbox;
pub mod ui;
