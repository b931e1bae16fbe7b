//! Today's Masses from the extracted text of a parish bulletin.
//!
//! The library takes already-extracted text, a target day and a time zone and
//! returns time-ordered [`Event`]s. Fetching the PDF, pulling text out of it and
//! writing the feed are left to the caller (see the `kirchenblatt` binary).

pub mod error;
pub mod model;
pub mod parser;
pub mod settings;

pub use error::{Error, SkipReason};
pub use model::{Event, LineOutcome};
pub use parser::{extract_events, scan_lines, ExtractOptions};
