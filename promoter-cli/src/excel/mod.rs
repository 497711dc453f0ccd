//! Excel import of the wide sheet and export of the long table

mod reader;
mod writer;

pub use reader::{read_first_sheet, read_first_sheet_from_bytes};
pub use writer::write_output_xlsx;
