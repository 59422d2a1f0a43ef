use std::io::Write;

use super::write_le;
use crate::crc32::crc32;

const VERSION_NEEDED_TO_EXTRACT: u16 = 20;
const VERSION_MADE_BY: u16 = 20;

const LOCAL_FILE_HEADER_SIGNATURE: u32 = 0x04034B50;
const CENTRAL_FILE_HEADER_SIGNATURE: u32 = 0x02014B50;

pub(crate) const LOCAL_HEADER_LENGTH: usize = 30;
pub(crate) const CENTRAL_HEADER_LENGTH: usize = 46;

/// One archive entry with its checksum and size fixed at construction.
///
/// The headers emitted here carry no data descriptor, so the crc and size
/// must be known before either header is written; nothing may change after
/// construction.
#[derive(Debug)]
pub struct ZipEntry {
    pub(crate) name: String,
    pub(crate) data: Vec<u8>,
    pub(crate) crc: u32,
    pub(crate) size: u32,
}

impl ZipEntry {
    pub(crate) fn new(name: String, data: Vec<u8>) -> Self {
        debug_assert!(data.len() <= u32::MAX as usize);
        let crc = crc32(&data);
        let size = data.len() as u32;
        Self {
            name,
            data,
            crc,
            size,
        }
    }

    pub(crate) fn directory(mut name: String) -> Self {
        if !(name.ends_with('/') || name.ends_with('\\')) {
            name += "/"
        };
        Self::new(name, Vec::new())
    }

    /// Byte length of the local block: fixed header, name, then the data.
    #[inline]
    pub(crate) fn local_block_len(&self) -> u64 {
        (LOCAL_HEADER_LENGTH + self.name.len() + self.data.len()) as u64
    }

    /// Byte length of this entry's central directory block.
    #[inline]
    pub(crate) fn central_block_len(&self) -> u64 {
        (CENTRAL_HEADER_LENGTH + self.name.len()) as u64
    }

    pub(crate) fn write_local_file_header_and_data<W: Write>(
        &self,
        buf: &mut W,
    ) -> std::io::Result<()> {
        debug_assert!(self.name.len() <= u16::MAX as usize);
        let mut header = [0; LOCAL_HEADER_LENGTH];
        // signature
        write_le(&mut header, 0, LOCAL_FILE_HEADER_SIGNATURE, 4);
        // version needed to extract
        write_le(&mut header, 4, VERSION_NEEDED_TO_EXTRACT.into(), 2);
        // general purpose bit flag
        write_le(&mut header, 6, 0, 2);
        // compression method (stored)
        write_le(&mut header, 8, 0, 2);
        // last modification time and date
        write_le(&mut header, 10, 0, 4);
        // crc
        write_le(&mut header, 14, self.crc, 4);
        // compressed size, equal to uncompressed under the stored method
        write_le(&mut header, 18, self.size, 4);
        // uncompressed size
        write_le(&mut header, 22, self.size, 4);
        // filename size
        write_le(&mut header, 26, self.name.len() as u32, 2);
        // extra field size
        write_le(&mut header, 28, 0, 2);
        buf.write_all(&header)?;

        // Filename
        buf.write_all(self.name.as_bytes())?;

        // Data, copied verbatim
        buf.write_all(&self.data)?;

        Ok(())
    }

    pub(crate) fn write_central_directory_entry<W: Write>(
        &self,
        buf: &mut W,
        local_header_offset: u32,
    ) -> std::io::Result<()> {
        debug_assert!(self.name.len() <= u16::MAX as usize);
        let mut header = [0; CENTRAL_HEADER_LENGTH];
        // signature
        write_le(&mut header, 0, CENTRAL_FILE_HEADER_SIGNATURE, 4);
        // version made by
        write_le(&mut header, 4, VERSION_MADE_BY.into(), 2);
        // version needed to extract
        write_le(&mut header, 6, VERSION_NEEDED_TO_EXTRACT.into(), 2);
        // general purpose bit flag
        write_le(&mut header, 8, 0, 2);
        // compression method (stored)
        write_le(&mut header, 10, 0, 2);
        // last modification time and date
        write_le(&mut header, 12, 0, 4);
        // crc
        write_le(&mut header, 16, self.crc, 4);
        // compressed size
        write_le(&mut header, 20, self.size, 4);
        // uncompressed size
        write_le(&mut header, 24, self.size, 4);
        // filename size
        write_le(&mut header, 28, self.name.len() as u32, 2);
        // extra field size
        write_le(&mut header, 30, 0, 2);
        // comment size
        write_le(&mut header, 32, 0, 2);
        // disk number start
        write_le(&mut header, 34, 0, 2);
        // internal file attributes
        write_le(&mut header, 36, 0, 2);
        // external file attributes
        write_le(&mut header, 38, 0, 4);
        // relative offset of local header
        write_le(&mut header, 42, local_header_offset, 4);
        buf.write_all(&header)?;

        // Filename
        buf.write_all(self.name.as_bytes())?;

        Ok(())
    }
}
