pub mod evaluate;
pub mod pipeline;
pub mod roman;
pub mod sanitize;
pub mod words;
