//! Secondary-hash machinery: the default fixed stride and the
//! non-zero step derivation shared by every probe.

use core::hash::{BuildHasher, Hasher};

/// Stride constant for [`FixedStride`]. Odd, so the raw value already
/// has a non-zero residue for power-of-two capacities.
const STRIDE: u64 = 0x9e37_79b9_7f4a_7c15;

/// Key-independent secondary hasher: every key probes with the same
/// fixed odd stride.
///
/// This is the default secondary `BuildHasher`. It turns the probe
/// into a constant-skip walk, which is enough for small fixed tables;
/// plug a real per-key hasher as the secondary parameter for true
/// double hashing.
#[derive(Clone, Copy, Debug, Default)]
pub struct FixedStride;

impl BuildHasher for FixedStride {
    type Hasher = StrideHasher;

    fn build_hasher(&self) -> StrideHasher {
        StrideHasher
    }
}

/// Hasher for [`FixedStride`]: ignores all input and finishes to the
/// stride constant.
#[derive(Clone, Copy, Debug, Default)]
pub struct StrideHasher;

impl Hasher for StrideHasher {
    fn finish(&self) -> u64 {
        STRIDE
    }

    fn write(&mut self, _bytes: &[u8]) {}
}

/// Derive the probe step from a secondary hash.
///
/// The step residue must be non-zero mod `capacity` for every key, or
/// the probe sequence collapses to a single revisited slot. Mapping
/// into `1..capacity` makes that unconditional, whatever the
/// secondary hasher returns.
pub(crate) fn step_for(secondary_hash: u64, capacity: usize) -> usize {
    if capacity <= 1 {
        1
    } else {
        1 + (secondary_hash % (capacity as u64 - 1)) as usize
    }
}
