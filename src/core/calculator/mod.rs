pub mod grid;
pub mod interval;
