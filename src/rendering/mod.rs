pub mod png_writer;

pub use png_writer::PngWriter;
