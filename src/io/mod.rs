//! PDF input and output.

pub mod reader;
pub mod writer;

pub use reader::{Source, SourceSet};
pub use writer::PdfWriter;
