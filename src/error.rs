use thiserror::Error;

/// Errors that can occur while building an archive.
///
/// The size variants exist because this crate emits plain zip32 records with
/// no ZIP64 extensions: names and entry counts are bounded by 16-bit fields,
/// sizes and offsets by 32-bit fields. Inputs past those bounds are rejected
/// up front rather than truncated into a corrupt archive.
#[derive(Debug, Error)]
pub enum ZipError {
    #[error(transparent)]
    Io(#[from] std::io::Error),
    #[error("file name is {0} bytes in utf-8, over the 65535-byte zip limit")]
    NameTooLong(usize),
    #[error("entry data is {0} bytes, over the 32-bit zip size field")]
    EntryTooLarge(usize),
    #[error("archive has {0} entries, over the 65535-entry zip limit")]
    TooManyEntries(usize),
    #[error("archive layout exceeds the 32-bit zip offset fields")]
    ArchiveTooLarge,
}
