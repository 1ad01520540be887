//! Console presentation: themes, status messages and tables.

pub mod output_format;
pub mod table;
pub mod theme;
