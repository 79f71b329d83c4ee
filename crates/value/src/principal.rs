//! Opaque caller identity token.

use std::fmt;

use smallvec::SmallVec;

use crate::core::error::{ValueError, ValueResult};

const MAX_PRINCIPAL_LEN: usize = 29;

/// A fixed-format binary identity handle.
///
/// The token is at most [`Principal::MAX_LEN`] bytes. The single byte
/// `0x04` is reserved for the anonymous caller.
#[derive(Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Principal(SmallVec<[u8; MAX_PRINCIPAL_LEN]>);

impl Principal {
    /// Maximum raw length of a principal, and its fixed encoded size.
    pub const MAX_LEN: usize = MAX_PRINCIPAL_LEN;

    const ANONYMOUS_TAG: u8 = 0x04;

    /// Builds a principal from raw bytes.
    pub fn from_slice(bytes: &[u8]) -> ValueResult<Self> {
        if bytes.len() > Self::MAX_LEN {
            return Err(ValueError::InvalidPrincipal {
                len: bytes.len(),
                max: Self::MAX_LEN,
            });
        }
        Ok(Self(SmallVec::from_slice(bytes)))
    }

    /// The anonymous caller.
    #[must_use]
    pub fn anonymous() -> Self {
        Self(SmallVec::from_slice(&[Self::ANONYMOUS_TAG]))
    }

    #[inline]
    #[must_use]
    pub fn is_anonymous(&self) -> bool {
        self.0.as_slice() == [Self::ANONYMOUS_TAG]
    }

    #[inline]
    #[must_use]
    pub fn as_slice(&self) -> &[u8] {
        &self.0
    }

    #[inline]
    #[must_use]
    pub fn len(&self) -> usize {
        self.0.len()
    }

    #[inline]
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

impl TryFrom<&[u8]> for Principal {
    type Error = ValueError;

    fn try_from(bytes: &[u8]) -> ValueResult<Self> {
        Self::from_slice(bytes)
    }
}

impl AsRef<[u8]> for Principal {
    fn as_ref(&self) -> &[u8] {
        &self.0
    }
}

impl fmt::Display for Principal {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&hex::encode(&self.0))
    }
}

impl fmt::Debug for Principal {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Principal({self})")
    }
}
