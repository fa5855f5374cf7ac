use bytemuck::{Pod, Zeroable};

/// Opaque 64-bit view identifier, stored as two 32-bit halves.
///
/// Carried through the stages untouched; the batching/clip system consumes it.
#[repr(C)]
#[derive(Debug, Copy, Clone, Default, Eq, PartialEq, Hash, Pod, Zeroable)]
pub struct ViewId {
    pub lo: u32,
    pub hi: u32,
}

impl ViewId {
    #[inline]
    pub const fn new(id: u64) -> Self {
        Self { lo: id as u32, hi: (id >> 32) as u32 }
    }

    #[inline]
    pub const fn as_u64(self) -> u64 {
        ((self.hi as u64) << 32) | self.lo as u64
    }
}

impl From<u64> for ViewId {
    #[inline]
    fn from(id: u64) -> Self {
        Self::new(id)
    }
}

impl From<ViewId> for u64 {
    #[inline]
    fn from(id: ViewId) -> Self {
        id.as_u64()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn splits_into_halves() {
        let id = ViewId::new(0x0123_4567_89ab_cdef);
        assert_eq!(id.lo, 0x89ab_cdef);
        assert_eq!(id.hi, 0x0123_4567);
        assert_eq!(u64::from(id), 0x0123_4567_89ab_cdef);
    }
}
