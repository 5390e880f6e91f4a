pub mod log;
pub mod workbook;

pub use workbook::Workbook;
