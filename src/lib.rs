pub mod codes;
pub mod fetch;
pub mod join;
pub mod model;
pub mod output;
pub mod parser;
pub mod pipeline;
pub mod render;
pub mod scale;
