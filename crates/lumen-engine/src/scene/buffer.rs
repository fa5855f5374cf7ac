use core::ops::Index;

use anyhow::Result;
use bytemuck::Pod;

/// Index of a record inside an [`InstanceBuffer`].
///
/// Handles are ordinals: the n-th pushed record has id `n`. They stay valid
/// until the buffer is cleared.
#[derive(Debug, Copy, Clone, Eq, PartialEq, Ord, PartialOrd, Hash, Default)]
pub struct InstanceId(pub u32);

impl InstanceId {
    #[inline]
    pub const fn index(self) -> usize {
        self.0 as usize
    }
}

/// Flat, append-only array of plain-old-data instance records.
///
/// Performance characteristics:
/// - `push()` is amortized O(1); records are stored contiguously, never boxed
/// - `clear()` keeps the allocation so a buffer can be reused every frame
/// - `as_bytes()` is a zero-copy view suitable for upload
#[derive(Debug, Clone)]
pub struct InstanceBuffer<T: Pod> {
    items: Vec<T>,
}

impl<T: Pod> Default for InstanceBuffer<T> {
    fn default() -> Self {
        Self { items: Vec::new() }
    }
}

impl<T: Pod> InstanceBuffer<T> {
    #[inline]
    pub fn new() -> Self {
        Self::default()
    }

    #[inline]
    pub fn with_capacity(capacity: usize) -> Self {
        Self { items: Vec::with_capacity(capacity) }
    }

    /// Copies records out of a raw byte slice (e.g. a host-side upload buffer).
    ///
    /// The slice does not need any particular alignment, but its length must be
    /// a whole number of records.
    pub fn from_bytes(bytes: &[u8]) -> Result<Self> {
        let stride = size_of::<T>();
        anyhow::ensure!(stride > 0, "instance records must not be zero-sized");
        anyhow::ensure!(
            bytes.len() % stride == 0,
            "instance byte length {} is not a multiple of the record size {}",
            bytes.len(),
            stride
        );
        anyhow::ensure!(
            bytes.len() / stride <= u32::MAX as usize,
            "too many instance records: {}",
            bytes.len() / stride
        );

        let items: Vec<T> = bytemuck::pod_collect_to_vec(bytes);
        log::trace!("loaded {} instance records from {} bytes", items.len(), bytes.len());
        Ok(Self { items })
    }

    /// Clears recorded items. Keeps allocated capacity for reuse.
    #[inline]
    pub fn clear(&mut self) {
        self.items.clear();
    }

    /// Appends a record and returns its handle.
    #[inline]
    pub fn push(&mut self, item: T) -> InstanceId {
        let id = InstanceId(self.items.len() as u32);
        debug_assert!(self.items.len() < u32::MAX as usize, "instance buffer overflow");
        self.items.push(item);
        id
    }

    #[inline]
    pub fn get(&self, id: InstanceId) -> Option<&T> {
        self.items.get(id.index())
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.items.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    /// Records in ordinal order.
    #[inline]
    pub fn as_slice(&self) -> &[T] {
        &self.items
    }

    #[inline]
    pub fn as_bytes(&self) -> &[u8] {
        bytemuck::cast_slice(&self.items)
    }

    pub fn iter(&self) -> impl Iterator<Item = (InstanceId, &T)> {
        self.items.iter().enumerate().map(|(i, item)| (InstanceId(i as u32), item))
    }
}

impl<T: Pod> Index<InstanceId> for InstanceBuffer<T> {
    type Output = T;

    #[inline]
    fn index(&self, id: InstanceId) -> &T {
        &self.items[id.index()]
    }
}

impl<T: Pod> FromIterator<T> for InstanceBuffer<T> {
    fn from_iter<I: IntoIterator<Item = T>>(iter: I) -> Self {
        Self { items: iter.into_iter().collect() }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    use crate::coords::Bounds;
    use crate::paint::Hsla;
    use crate::scene::Quad;

    fn quad(x: f32) -> Quad {
        Quad::new(Bounds::new(x, 0.0, 10.0, 10.0), Hsla::white())
    }

    #[test]
    fn push_returns_ordinal_handles() {
        let mut buf = InstanceBuffer::new();
        let a = buf.push(quad(0.0));
        let b = buf.push(quad(20.0));
        assert_eq!(a, InstanceId(0));
        assert_eq!(b, InstanceId(1));
        assert_eq!(buf[b].bounds.origin.x, 20.0);
        assert!(buf.get(InstanceId(2)).is_none());
    }

    #[test]
    fn clear_keeps_capacity() {
        let mut buf = InstanceBuffer::with_capacity(8);
        buf.push(quad(0.0));
        buf.clear();
        assert!(buf.is_empty());
        assert!(buf.items.capacity() >= 8);
        assert_eq!(buf.push(quad(1.0)), InstanceId(0));
    }

    #[test]
    fn bytes_round_trip_through_unaligned_slice() {
        let buf: InstanceBuffer<Quad> = [quad(1.0), quad(2.0), quad(3.0)].into_iter().collect();

        // Shift by one byte so the source is not aligned for `Quad`.
        let mut raw = vec![0u8; 1];
        raw.extend_from_slice(buf.as_bytes());

        let loaded = InstanceBuffer::<Quad>::from_bytes(&raw[1..]).unwrap();
        assert_eq!(loaded.as_slice(), buf.as_slice());
    }

    #[test]
    fn from_bytes_rejects_partial_records() {
        let buf: InstanceBuffer<Quad> = [quad(1.0)].into_iter().collect();
        let bytes = buf.as_bytes();
        let err = InstanceBuffer::<Quad>::from_bytes(&bytes[..bytes.len() - 4]).unwrap_err();
        assert!(err.to_string().contains("not a multiple"));
    }

    #[test]
    fn iter_pairs_ids_with_records() {
        let buf: InstanceBuffer<Quad> = [quad(5.0), quad(6.0)].into_iter().collect();
        let ids: Vec<_> = buf.iter().map(|(id, q)| (id.0, q.bounds.origin.x)).collect();
        assert_eq!(ids, vec![(0, 5.0), (1, 6.0)]);
    }
}
