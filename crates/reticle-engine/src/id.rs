//! Gizmo identifiers.
//!
//! An [`Id`] is a 32-bit FNV-1a hash of a name, optionally seeded with a
//! parent id so the same name under different scopes stays unique.

use std::fmt;

const FNV_OFFSET_BASIS: u32 = 0x811c_9dc5;
const FNV_PRIME: u32 = 0x0100_0193;

/// Opaque identifier naming a gizmo or an id scope.
#[derive(Copy, Clone, Default, Eq, PartialEq, Hash)]
pub struct Id(u32);

impl Id {
    /// Reserved sentinel: "no gizmo".
    pub const INVALID: Id = Id(0);

    #[inline]
    pub const fn from_raw(raw: u32) -> Self {
        Self(raw)
    }

    #[inline]
    pub const fn raw(self) -> u32 {
        self.0
    }

    #[inline]
    pub const fn is_valid(self) -> bool {
        self.0 != Self::INVALID.0
    }

    /// Hashes `name` with no parent scope.
    #[inline]
    pub fn from_name(name: &str) -> Self {
        Self::with_parent(Self::INVALID, name)
    }

    /// Hashes `name` within the scope of `parent`.
    ///
    /// An invalid parent contributes nothing, so
    /// `with_parent(Id::INVALID, n) == from_name(n)`.
    pub fn with_parent(parent: Id, name: &str) -> Self {
        let mut hash = FNV_OFFSET_BASIS;
        if parent.is_valid() {
            hash = fnv1a(hash, &parent.0.to_le_bytes());
        }
        hash = fnv1a(hash, name.as_bytes());

        // Never collide with the sentinel.
        if hash == Self::INVALID.0 { Self(1) } else { Self(hash) }
    }
}

impl fmt::Debug for Id {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.is_valid() {
            write!(f, "Id({:#010x})", self.0)
        } else {
            write!(f, "Id(INVALID)")
        }
    }
}

#[inline]
fn fnv1a(mut hash: u32, bytes: &[u8]) -> u32 {
    for &b in bytes {
        hash ^= b as u32;
        hash = hash.wrapping_mul(FNV_PRIME);
    }
    hash
}
