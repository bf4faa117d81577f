pub mod lines;
pub mod report;
