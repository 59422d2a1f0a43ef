//! In-memory assembly of uncompressed zip archives.
//!
//! Builds a complete single-disk zip container byte for byte, with no
//! archiving library underneath: the crc-32 engine, the local file headers,
//! the central directory and the end-of-central-directory record are all
//! laid out by hand. Every entry uses the stored method, so data lands in
//! the archive verbatim and any standard unzip tool can read the result.
//!
//! The whole archive is assembled in memory; there is no streaming and no
//! backpatching. Checksums and sizes are computed when an entry is added,
//! before any header exists, which is what the format's descriptor-free
//! headers require.
//!
//! ```
//! use memzip::ZipArchive;
//!
//! let mut archive = ZipArchive::new();
//! archive.add_file("hello.txt", "hello world")?;
//! archive.add_file("data.bin", vec![0_u8, 1, 2, 3])?;
//! archive.add_directory("docs")?;
//! let bytes = archive.into_bytes()?;
//! # Ok::<(), memzip::ZipError>(())
//! ```

mod crc32;
mod error;
mod zip_parts;

pub use crc32::crc32;
pub use error::ZipError;

use std::io::Write;

use zip_parts::{data::ZipData, entry::ZipEntry};

/// Collects (name, content) entries and assembles them into a zip archive.
///
/// Entries appear in the archive in the order they were added. Names are
/// stored as their utf-8 bytes, with no extra fields and no timestamps.
#[derive(Debug, Default)]
pub struct ZipArchive {
    data: ZipData,
}

impl ZipArchive {
    pub fn new() -> Self {
        Self::default()
    }

    /// Add a file entry. `content` is anything that converts into a byte
    /// buffer; `&str` and `String` work for text blobs like generated JSON.
    ///
    /// Rejects names over 65535 utf-8 bytes and content over the 32-bit
    /// size field, the capacities of this format's headers.
    pub fn add_file(
        &mut self,
        archive_name: &str,
        content: impl Into<Vec<u8>>,
    ) -> Result<(), ZipError> {
        let content = content.into();
        Self::check_name(archive_name)?;
        if u32::try_from(content.len()).is_err() {
            return Err(ZipError::EntryTooLarge(content.len()));
        }
        self.data
            .files
            .push(ZipEntry::new(archive_name.to_string(), content));
        Ok(())
    }

    /// Add a directory entry. A trailing `/` is appended if missing.
    pub fn add_directory(&mut self, archive_name: &str) -> Result<(), ZipError> {
        let entry = ZipEntry::directory(archive_name.to_string());
        Self::check_name(&entry.name)?;
        self.data.files.push(entry);
        Ok(())
    }

    /// Number of entries added so far.
    pub fn len(&self) -> usize {
        self.data.files.len()
    }

    pub fn is_empty(&self) -> bool {
        self.data.files.is_empty()
    }

    /// Exact byte length of the archive [`write`](ZipArchive::write) will
    /// emit.
    pub fn size(&self) -> u64 {
        self.data.size()
    }

    /// Write the archive to a writer.
    pub fn write<W: Write>(&self, writer: &mut W) -> Result<(), ZipError> {
        self.data.write(writer)
    }

    /// Assemble the archive into a single byte buffer.
    pub fn into_bytes(self) -> Result<Vec<u8>, ZipError> {
        let mut buffer = Vec::with_capacity(self.size() as usize);
        self.data.write(&mut buffer)?;
        Ok(buffer)
    }

    fn check_name(name: &str) -> Result<(), ZipError> {
        if name.len() > u16::MAX as usize {
            return Err(ZipError::NameTooLong(name.len()));
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn name_at_the_16_bit_boundary_is_accepted() {
        let name = "a".repeat(u16::MAX as usize);
        let mut archive = ZipArchive::new();
        assert!(archive.add_file(&name, "x").is_ok());
        assert_eq!(archive.len(), 1);
    }

    #[test]
    fn name_over_the_16_bit_boundary_is_rejected() {
        let name = "a".repeat(u16::MAX as usize + 1);
        let mut archive = ZipArchive::new();
        assert!(matches!(
            archive.add_file(&name, "x"),
            Err(ZipError::NameTooLong(65536))
        ));
        assert!(archive.is_empty());
    }

    #[test]
    fn directory_name_limit_applies_after_slash_normalization() {
        let name = "a".repeat(u16::MAX as usize);
        let mut archive = ZipArchive::new();
        assert!(matches!(
            archive.add_directory(&name),
            Err(ZipError::NameTooLong(65536))
        ));
        assert!(archive.add_directory(&name[..name.len() - 1]).is_ok());
    }

    #[test]
    fn multibyte_names_are_measured_in_utf8_bytes() {
        // 21846 three-byte characters encode to 65538 bytes
        let name = "\u{20AC}".repeat(21846);
        let mut archive = ZipArchive::new();
        assert!(matches!(
            archive.add_file(&name, ""),
            Err(ZipError::NameTooLong(65538))
        ));
    }

    #[test]
    fn size_matches_emitted_length() {
        let mut archive = ZipArchive::new();
        archive.add_file("a.txt", "hi").unwrap();
        archive.add_file("b.json", "{}").unwrap();
        archive.add_directory("sub").unwrap();
        let size = archive.size();
        let bytes = archive.into_bytes().unwrap();
        assert_eq!(bytes.len() as u64, size);
    }

    #[test]
    fn empty_archive_still_assembles() {
        let archive = ZipArchive::new();
        assert_eq!(archive.size(), 22);
        let bytes = archive.into_bytes().unwrap();
        assert_eq!(bytes.len(), 22);
    }
}
