// Cyclic indexing into rings of `len` elements. `idx` must already be in range.

pub fn cyclic_next(idx: usize, len: usize) -> usize {
  debug_assert!(idx < len);
  if idx + 1 == len {
    0
  } else {
    idx + 1
  }
}

pub fn cyclic_prev(idx: usize, len: usize) -> usize {
  debug_assert!(idx < len);
  if idx == 0 {
    len - 1
  } else {
    idx - 1
  }
}

// `None` once an index has walked off the end of the ring.
pub fn in_ring(idx: usize, len: usize) -> Option<usize> {
  (idx < len).then_some(idx)
}
