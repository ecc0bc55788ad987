//! Bounds-checked big-endian reads
//!
//! Every offset taken from an untrusted length or offset field goes through
//! these helpers. They return `None` instead of panicking when the requested
//! range does not fit in the buffer, including when `offset + len` overflows.
//! Callers map `None` to the error that names the field they were reading.

/// Borrow `len` bytes starting at `offset`
#[inline]
pub fn bytes(data: &[u8], offset: usize, len: usize) -> Option<&[u8]> {
    let end = offset.checked_add(len)?;
    data.get(offset..end)
}

/// Borrow everything in `offset..end`
#[inline]
pub fn range(data: &[u8], offset: usize, end: usize) -> Option<&[u8]> {
    if offset > end {
        return None;
    }
    data.get(offset..end)
}

/// Read a fixed-size array at `offset`
#[inline]
pub fn array<const N: usize>(data: &[u8], offset: usize) -> Option<[u8; N]> {
    bytes(data, offset, N)?.try_into().ok()
}

#[inline]
pub fn u8_at(data: &[u8], offset: usize) -> Option<u8> {
    data.get(offset).copied()
}

#[inline]
pub fn u16_be(data: &[u8], offset: usize) -> Option<u16> {
    array(data, offset).map(u16::from_be_bytes)
}

#[inline]
pub fn u32_be(data: &[u8], offset: usize) -> Option<u32> {
    array(data, offset).map(u32::from_be_bytes)
}

/// Read a four-byte signature such as `acsp` or `desc`
#[inline]
pub fn signature(data: &[u8], offset: usize) -> Option<[u8; 4]> {
    array(data, offset)
}
