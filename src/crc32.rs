use std::sync::LazyLock;

/// Reflected polynomial mandated by the zip format (shared with gzip and
/// PNG).
const CRC32_POLYNOMIAL: u32 = 0xEDB88320;

// Built once on first use, read-only afterwards. Correctness does not depend
// on the caching, only throughput when checksumming many entries.
static CRC32_TABLE: LazyLock<[u32; 256]> = LazyLock::new(|| {
    let mut table = [0_u32; 256];
    for (index, entry) in table.iter_mut().enumerate() {
        let mut value = index as u32;
        for _ in 0..8 {
            value = if value & 1 != 0 {
                CRC32_POLYNOMIAL ^ (value >> 1)
            } else {
                value >> 1
            };
        }
        *entry = value;
    }
    table
});

/// Computes the CRC-32 checksum of `bytes` as stored in zip headers.
pub fn crc32(bytes: &[u8]) -> u32 {
    let table = &*CRC32_TABLE;
    let mut crc = !0_u32;
    for &byte in bytes {
        crc = (crc >> 8) ^ table[((crc ^ u32::from(byte)) & 0xFF) as usize];
    }
    !crc
}

#[cfg(test)]
mod tests {
    use super::crc32;

    #[test]
    fn empty_input() {
        assert_eq!(crc32(b""), 0);
    }

    #[test]
    fn standard_check_value() {
        assert_eq!(crc32(b"123456789"), 0xCBF43926);
    }

    #[test]
    fn ascii_sentence() {
        assert_eq!(
            crc32(b"The quick brown fox jumps over the lazy dog"),
            0x414FA339
        );
    }

    #[test]
    fn deterministic() {
        let input = b"some archive entry payload";
        assert_eq!(crc32(input), crc32(input));
    }

    #[test]
    fn sensitive_to_single_byte_change() {
        let original = b"some archive entry payload".to_vec();
        for position in 0..original.len() {
            let mut changed = original.clone();
            changed[position] ^= 0x01;
            assert_ne!(crc32(&original), crc32(&changed));
        }
    }
}
