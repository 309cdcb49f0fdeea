//! Stored-only ZIP archive writer.
//!
//! Emits the three structural regions of a ZIP file in order: one local file
//! header + payload per entry, the central directory, and the single
//! end-of-central-directory record. All multi-byte fields are little-endian
//! as the ZIP specification requires.

use crate::crc::Crc32;
use crate::errors::{Error, Result};

const LOCAL_FILE_HEADER_SIGNATURE: u32 = 0x0403_4B50;
const CENTRAL_DIRECTORY_SIGNATURE: u32 = 0x0201_4B50;
const END_OF_CENTRAL_DIRECTORY_SIGNATURE: u32 = 0x0605_4B50;

/// Version 2.0: the minimum that covers stored entries.
const ZIP_VERSION: u16 = 20;

const LOCAL_FILE_HEADER_LEN: usize = 30;

/// Central directory bookkeeping for one written entry.
#[derive(Debug, Clone)]
struct EntryRecord {
    path: Vec<u8>,
    crc: u32,
    size: u32,
    /// Byte offset of the entry's local file header in the output buffer.
    offset: u32,
}

/// Writer that packs named byte blobs into a single ZIP byte sequence.
///
/// Entries are written in insertion order and never compressed, deduplicated,
/// or split. The caller receives the finished archive as one immutable
/// buffer from [`finish`](ArchiveWriter::finish).
#[derive(Debug)]
pub struct ArchiveWriter {
    crc: Crc32,
    buf: Vec<u8>,
    entries: Vec<EntryRecord>,
}

impl ArchiveWriter {
    /// Create an empty archive writer.
    pub fn new() -> Self {
        Self {
            crc: Crc32::new(),
            buf: Vec::new(),
            entries: Vec::new(),
        }
    }

    /// Number of entries added so far.
    #[inline]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Check if no entries have been added.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Append one stored (uncompressed) entry.
    ///
    /// Writes the 30-byte local file header, the path bytes, and the raw
    /// payload, and records the checksum, size, and starting offset for the
    /// central directory.
    pub fn add_stored(&mut self, path: &str, data: &[u8]) -> Result<()> {
        let path_bytes = path.as_bytes();
        if path_bytes.len() > u16::MAX as usize {
            return Err(Error::PathTooLong(path_bytes.len()));
        }
        if data.len() > u32::MAX as usize {
            return Err(Error::EntryTooLarge(data.len()));
        }
        if self.entries.len() >= u16::MAX as usize {
            return Err(Error::TooManyEntries(self.entries.len() + 1));
        }

        let offset = self.position()?;
        let crc = self.crc.checksum(data);
        let size = data.len() as u32;

        self.push_u32(LOCAL_FILE_HEADER_SIGNATURE);
        self.push_u16(ZIP_VERSION); // version needed to extract
        self.push_u16(0); // general purpose bit flag
        self.push_u16(0); // compression method: stored
        self.push_u16(0); // last mod file time
        self.push_u16(0); // last mod file date
        self.push_u32(crc);
        self.push_u32(size); // compressed size
        self.push_u32(size); // uncompressed size
        self.push_u16(path_bytes.len() as u16);
        self.push_u16(0); // extra field length
        self.buf.extend_from_slice(path_bytes);
        self.buf.extend_from_slice(data);

        self.entries.push(EntryRecord {
            path: path_bytes.to_vec(),
            crc,
            size,
            offset,
        });
        Ok(())
    }

    /// Write the central directory and end-of-central-directory record and
    /// return the finished archive bytes.
    ///
    /// Before each central directory record is emitted, the recorded local
    /// header offset is checked against the bytes actually written there; a
    /// mismatch aborts with [`Error::OffsetMismatch`] instead of producing a
    /// subtly corrupt file.
    pub fn finish(mut self) -> Result<Vec<u8>> {
        let central_directory_offset = self.position()?;

        let entries = std::mem::take(&mut self.entries);
        for entry in &entries {
            self.verify_local_header(entry)?;

            self.push_u32(CENTRAL_DIRECTORY_SIGNATURE);
            self.push_u16(ZIP_VERSION); // version made by
            self.push_u16(ZIP_VERSION); // version needed to extract
            self.push_u16(0); // general purpose bit flag
            self.push_u16(0); // compression method: stored
            self.push_u16(0); // last mod file time
            self.push_u16(0); // last mod file date
            self.push_u32(entry.crc);
            self.push_u32(entry.size); // compressed size
            self.push_u32(entry.size); // uncompressed size
            self.push_u16(entry.path.len() as u16);
            self.push_u16(0); // extra field length
            self.push_u16(0); // file comment length
            self.push_u16(0); // disk number start
            self.push_u16(0); // internal file attributes
            self.push_u32(0); // external file attributes
            self.push_u32(entry.offset);
            self.buf.extend_from_slice(&entry.path);
        }

        let central_directory_end = self.position()?;
        let central_directory_size = central_directory_end - central_directory_offset;

        self.push_u32(END_OF_CENTRAL_DIRECTORY_SIGNATURE);
        self.push_u16(0); // number of this disk
        self.push_u16(0); // disk where the central directory starts
        self.push_u16(entries.len() as u16); // entries on this disk
        self.push_u16(entries.len() as u16); // total entries
        self.push_u32(central_directory_size);
        self.push_u32(central_directory_offset);
        self.push_u16(0); // comment length

        Ok(self.buf)
    }

    /// Check that the bytes at an entry's recorded offset really are that
    /// entry's local header (signature followed by the same path at the
    /// fixed header length).
    fn verify_local_header(&self, entry: &EntryRecord) -> Result<()> {
        let start = entry.offset as usize;
        let name_start = start + LOCAL_FILE_HEADER_LEN;
        let name_end = name_start + entry.path.len();

        let header_ok = self
            .buf
            .get(start..start + 4)
            .is_some_and(|sig| sig == LOCAL_FILE_HEADER_SIGNATURE.to_le_bytes());
        let name_ok = self
            .buf
            .get(name_start..name_end)
            .is_some_and(|name| name == entry.path.as_slice());

        if header_ok && name_ok {
            Ok(())
        } else {
            Err(Error::OffsetMismatch {
                path: String::from_utf8_lossy(&entry.path).into_owned(),
                offset: entry.offset,
            })
        }
    }

    /// Current output length as a 32-bit offset.
    fn position(&self) -> Result<u32> {
        u32::try_from(self.buf.len()).map_err(|_| Error::ArchiveTooLarge(self.buf.len()))
    }

    #[inline]
    fn push_u16(&mut self, value: u16) {
        self.buf.extend_from_slice(&value.to_le_bytes());
    }

    #[inline]
    fn push_u32(&mut self, value: u32) {
        self.buf.extend_from_slice(&value.to_le_bytes());
    }
}

impl Default for ArchiveWriter {
    fn default() -> Self {
        Self::new()
    }
}

/// Pack an ordered list of (path, bytes) parts into a ZIP archive.
pub fn write_archive<'a, I>(parts: I) -> Result<Vec<u8>>
where
    I: IntoIterator<Item = (&'a str, &'a [u8])>,
{
    let mut writer = ArchiveWriter::new();
    for (path, data) in parts {
        writer.add_stored(path, data)?;
    }
    writer.finish()
}
