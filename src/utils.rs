//! Low-level byte-slice primitives shared by the format scanners.
//!
//! Each method consumes exactly the bytes it promises or returns `None` and
//! leaves the cursor where it was - there is no partial-read ambiguity.

use std::io::Read;

/// Forward-only cursor over a borrowed byte slice.
#[derive(Debug, Clone)]
pub(crate) struct ByteCursor<'a> {
    buf: &'a [u8],
    pos: usize,
}

impl<'a> ByteCursor<'a> {
    #[inline]
    pub(crate) fn new(buf: &'a [u8]) -> Self {
        Self { buf, pos: 0 }
    }

    /// Bytes not yet consumed.
    #[inline]
    pub(crate) fn remaining(&self) -> usize {
        self.buf.len() - self.pos
    }

    #[inline]
    pub(crate) fn is_empty(&self) -> bool {
        self.remaining() == 0
    }

    /// Read one byte.
    #[inline]
    pub(crate) fn u8(&mut self) -> Option<u8> {
        let b = *self.buf.get(self.pos)?;
        self.pos += 1;
        Some(b)
    }

    /// Borrow the next `len` bytes.
    #[inline]
    pub(crate) fn bytes(&mut self, len: usize) -> Option<&'a [u8]> {
        let end = self.pos.checked_add(len)?;
        let slice = self.buf.get(self.pos..end)?;
        self.pos = end;
        Some(slice)
    }

    /// Read exactly `N` bytes into a fixed-size array.
    #[inline]
    pub(crate) fn bytesa<const N: usize>(&mut self) -> Option<[u8; N]> {
        self.bytes(N)?.try_into().ok()
    }

    /// Read a little-endian unsigned integer of `width` bytes (1 to 4).
    #[inline]
    pub(crate) fn le_uint(&mut self, width: usize) -> Option<u32> {
        debug_assert!((1..=4).contains(&width));
        let raw = self.bytes(width)?;
        Some(
            raw.iter()
                .rev()
                .fold(0u32, |acc, &b| (acc << 8) | u32::from(b)),
        )
    }

    /// Read a little-endian `u16`.
    #[inline]
    pub(crate) fn le_u16(&mut self) -> Option<u16> {
        self.bytesa::<2>().map(u16::from_le_bytes)
    }

    /// Read a little-endian 24-bit length.
    #[inline]
    pub(crate) fn le_u24(&mut self) -> Option<u32> {
        self.le_uint(3)
    }

    /// Read a little-endian `u32`.
    #[inline]
    pub(crate) fn le_u32(&mut self) -> Option<u32> {
        self.bytesa::<4>().map(u32::from_le_bytes)
    }

    /// Read a little-endian base-128 varint that must fit in a `u32`.
    ///
    /// At most five bytes are consumed; a fifth byte carrying bits beyond
    /// 32 is rejected.
    pub(crate) fn varint32(&mut self) -> Option<u32> {
        let start = self.pos;
        let mut value = 0u32;
        for shift in (0..35).step_by(7) {
            let Some(b) = self.u8() else {
                self.pos = start;
                return None;
            };
            if shift == 28 && b > 0x0f {
                self.pos = start;
                return None;
            }
            value |= u32::from(b & 0x7f) << shift;
            if b & 0x80 == 0 {
                return Some(value);
            }
        }
        self.pos = start;
        None
    }
}

/// Drain `r` into a `Vec`, reading at most `limit` bytes.
///
/// Returns `Ok(None)` when the reader still had data after `limit` bytes.
pub(crate) fn read_bounded<R: Read>(r: R, limit: usize) -> std::io::Result<Option<Vec<u8>>> {
    let mut out = Vec::new();
    let cap = u64::try_from(limit).unwrap_or(u64::MAX).saturating_add(1);
    r.take(cap).read_to_end(&mut out)?;
    if out.len() > limit {
        return Ok(None);
    }
    Ok(Some(out))
}
