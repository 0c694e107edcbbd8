mod json_lines;

pub use json_lines::JsonLinesChannel;
