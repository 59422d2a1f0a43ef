use std::io::Write;

use log::debug;

use super::{entry::ZipEntry, write_le};
use crate::ZipError;

const END_OF_CENTRAL_DIR_SIGNATURE: u32 = 0x06054B50;

/// The ordered set of entries and the assembly pass over them.
#[derive(Debug, Default)]
pub struct ZipData {
    pub(crate) files: Vec<ZipEntry>,
}

impl ZipData {
    const FOOTER_LENGTH: usize = 22;

    /// Exact byte length of the archive [`write`](ZipData::write) emits.
    pub(crate) fn size(&self) -> u64 {
        self.files
            .iter()
            .map(|file| file.local_block_len() + file.central_block_len())
            .sum::<u64>()
            + Self::FOOTER_LENGTH as u64
    }

    /// Emits the archive: every local block in entry order, then every
    /// central directory block in the same order, then the end of central
    /// directory record. Offsets are accumulated up front, so every header
    /// field is known before it is written and nothing is backpatched.
    pub(crate) fn write<W: Write>(&self, buf: &mut W) -> Result<(), ZipError> {
        if self.files.len() > u16::MAX as usize {
            return Err(ZipError::TooManyEntries(self.files.len()));
        }
        debug!("assembling archive: {} entries", self.files.len());

        // Zip file records
        let mut offset: u64 = 0;
        let mut offsets: Vec<u32> = Vec::with_capacity(self.files.len());
        for file in &self.files {
            offsets.push(u32::try_from(offset).map_err(|_| ZipError::ArchiveTooLarge)?);
            file.write_local_file_header_and_data(buf)?;
            offset += file.local_block_len();
        }
        let central_dir_offset = u32::try_from(offset).map_err(|_| ZipError::ArchiveTooLarge)?;

        // Zip directory entries
        let mut central_dir_size: u64 = 0;
        for (file, local_offset) in self.files.iter().zip(offsets.iter()) {
            file.write_central_directory_entry(buf, *local_offset)?;
            central_dir_size += file.central_block_len();
        }
        let central_dir_size =
            u32::try_from(central_dir_size).map_err(|_| ZipError::ArchiveTooLarge)?;

        // End of central dir record
        let mut footer = [0; Self::FOOTER_LENGTH];
        // signature
        write_le(&mut footer, 0, END_OF_CENTRAL_DIR_SIGNATURE, 4);
        // number of this disk
        write_le(&mut footer, 4, 0, 2);
        // number of the disk where the central directory starts
        write_le(&mut footer, 6, 0, 2);
        // number of entries on this disk
        write_le(&mut footer, 8, self.files.len() as u32, 2);
        // number of entries, identical on a single-disk archive
        write_le(&mut footer, 10, self.files.len() as u32, 2);
        // central directory size
        write_le(&mut footer, 12, central_dir_size, 4);
        // central directory offset
        write_le(&mut footer, 16, central_dir_offset, 4);
        // comment length
        write_le(&mut footer, 20, 0, 2);
        buf.write_all(&footer)?;

        Ok(())
    }
}
