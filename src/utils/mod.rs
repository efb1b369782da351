mod formatter;

pub use formatter::{DebugFormat, DisplayFormat, HexFormat, ValueFormatter};
