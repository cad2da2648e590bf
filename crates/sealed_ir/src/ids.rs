//! Dense indices for registered unions and variants.

use std::fmt;

/// Index of a union inside its registry.
#[derive(Copy, Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct UnionId(u32);

/// Index of a variant inside its registry.
#[derive(Copy, Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct VariantId(u32);

macro_rules! dense_index {
    ($ty:ident, $prefix:literal) => {
        impl $ty {
            /// Wrap a raw index.
            #[inline]
            pub const fn from_raw(raw: u32) -> Self {
                $ty(raw)
            }

            /// The raw index.
            #[inline]
            pub const fn raw(self) -> u32 {
                self.0
            }

            /// The index as a `usize`, for slice access.
            #[inline]
            pub const fn index(self) -> usize {
                self.0 as usize
            }
        }

        impl fmt::Debug for $ty {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                write!(f, concat!($prefix, "{}"), self.0)
            }
        }
    };
}

dense_index!(UnionId, "union#");
dense_index!(VariantId, "variant#");
