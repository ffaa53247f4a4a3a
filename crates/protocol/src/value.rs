//! Opaque value identifiers for send/receive markers
//!
//! Values identify a message so the visualizer can pair a send with its
//! receive. They are session-local, human-distinguishable markers, NOT
//! strong identifiers: the fold below is collision-prone by design and must
//! never be used where a real hash is required.

/// Fold a byte string into an opaque 64-bit identifier
///
/// XOR of successive 8-byte little-endian words; the final partial word is
/// zero-padded before folding.
pub fn fold_bytes(bytes: &[u8]) -> u64 {
    let mut acc = 0u64;
    for chunk in bytes.chunks(8) {
        let mut word = [0u8; 8];
        word[..chunk.len()].copy_from_slice(chunk);
        acc ^= u64::from_le_bytes(word);
    }
    acc
}

/// Merge the two identifiers of a two-value marker into the single emitted
/// field
///
/// One-value markers leave `value2` at 0, so the same merge covers both
/// forms.
#[inline]
pub const fn merge_values(value1: u64, value2: u64) -> u64 {
    value1 ^ value2
}
