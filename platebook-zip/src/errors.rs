//! Error types for the container writer.
use thiserror::Error;

/// Result type for container writer operations.
pub type Result<T> = std::result::Result<T, Error>;

/// Error types for container writer operations.
#[derive(Error, Debug)]
pub enum Error {
    /// Entry path does not fit the 16-bit name-length field
    #[error("Entry path too long: {0} bytes (limit 65535)")]
    PathTooLong(usize),

    /// Entry payload does not fit the 32-bit size fields
    #[error("Entry too large for a 32-bit archive: {0} bytes")]
    EntryTooLarge(usize),

    /// Entry count does not fit the 16-bit count fields
    #[error("Too many entries for a single archive: {0} (limit 65535)")]
    TooManyEntries(usize),

    /// Archive grew past the 32-bit offset range
    #[error("Archive too large: offset {0} exceeds the 32-bit range")]
    ArchiveTooLarge(usize),

    /// Offset bookkeeping between local headers and the central directory
    /// diverged; emitting the central directory would corrupt the archive
    #[error(
        "Recorded local header offset {offset} for '{path}' does not point at that entry's header"
    )]
    OffsetMismatch { path: String, offset: u32 },
}
