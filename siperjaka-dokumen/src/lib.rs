//! # siperjaka-dokumen
//!
//! Plain-text page layout for fixed-format government documents -
//! low-level layout capabilities only.
//!
//! ## Scope
//!
//! This crate handles HOW to lay a page out:
//! - centered headings over a fixed page width
//! - label/value rows with an aligned colon column
//! - wrapped paragraphs with hanging indents
//! - two-column signature grids
//!
//! Business content (WHAT a document says) stays in application code:
//! - contract / SPMT / verification sheet rendering lives in siperjaka-core.
//!
//! ## Example
//!
//! ```
//! use siperjaka_dokumen::DocBuilder;
//!
//! let mut b = DocBuilder::new(64);
//! b.center("PERJANJIAN KERJA");
//! b.sep_double();
//! b.kv(0, 12, "Nama", "Budi Santoso");
//! let page = b.build();
//! assert!(page.contains("Nama        : Budi Santoso"));
//! ```

mod builder;

// Re-exports
pub use builder::DocBuilder;
