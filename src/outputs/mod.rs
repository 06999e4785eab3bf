//! Output generation for the published news document.
//!
//! A single submodule today:
//!
//! - [`json`]: Turns an [`IngestResult`](crate::collect::IngestResult) into
//!   the on-disk document, atomically replacing the output file for `Items`
//!   and writing nothing at all for `Empty`

pub mod json;
