pub mod data;
pub mod entry;

/// Writes `width` bytes of `value` into `buf` at `offset`, least-significant
/// byte first. `width` is 1, 2 or 4; `buf` is a header array sized up front.
/// Every numeric header field goes through here.
#[inline]
pub(crate) fn write_le(buf: &mut [u8], offset: usize, value: u32, width: usize) {
    debug_assert!(matches!(width, 1 | 2 | 4));
    debug_assert!(width == 4 || value < 1 << (8 * width));
    let mut value = value;
    for byte in &mut buf[offset..offset + width] {
        *byte = (value & 0xFF) as u8;
        value >>= 8;
    }
}
