//! Document-to-allergen-label pipeline.
//!
//! A recipe document (spreadsheet, word-processing document, photo, or plain
//! text) is classified, normalized into a single text-or-image payload, sent
//! to the remote analysis service, and the response projected into an ordered
//! list of product records ready for display.

pub mod application;
pub mod config;
pub mod domain;
pub mod infrastructure;
