//! Minimal ZIP container writer for spreadsheet packages.
//!
//! This crate packs an ordered list of named byte blobs into a single
//! ZIP-format byte sequence. Every entry is stored uncompressed, which is
//! all an OOXML spreadsheet package needs to stay openable by standard
//! spreadsheet applications while keeping the writer small and fully
//! deterministic.
//!
//! # Quick Start
//!
//! ```rust
//! use platebook_zip::ArchiveWriter;
//!
//! let mut writer = ArchiveWriter::new();
//! writer.add_stored("content.xml", b"<root/>")?;
//! let bytes = writer.finish()?;
//! # Ok::<(), platebook_zip::Error>(())
//! ```
#![forbid(unsafe_code)]

mod crc;
mod errors;
mod writer;

pub use crc::Crc32;
pub use errors::{Error, Result};
pub use writer::{write_archive, ArchiveWriter};
