//! nv/types.rs
//! Header pair and ordered pair list.

use std::fmt;

use bytes::Bytes;

use crate::constants::NV_VALUE_SEPARATOR;
use crate::utils::fmt_bytes;

/// One header entry. `value` may hold several NUL-joined values.
#[derive(Clone, PartialEq, Eq, Hash)]
pub struct NameValue {
    pub name: Bytes,
    pub value: Bytes,
}

impl NameValue {
    pub fn new(name: impl Into<Bytes>, value: impl Into<Bytes>) -> Self {
        Self { name: name.into(), value: value.into() }
    }

    /// Individual values of a merged entry, split on NUL.
    pub fn values(&self) -> impl Iterator<Item = &[u8]> {
        self.value.split(|&b| b == NV_VALUE_SEPARATOR)
    }
}

impl fmt::Debug for NameValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} = {}", fmt_bytes(&self.name), fmt_bytes(&self.value))
    }
}

/// Ordered header list carried by SYN_STREAM and SYN_REPLY.
///
/// Precondition for packing: names strictly ascending by byte order, which
/// also means no duplicates. Build with `normalize` to get there from
/// arbitrary input, or `from_sorted` when the caller already holds the order.
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash)]
pub struct NameValueBlock {
    pairs: Vec<NameValue>,
}

impl NameValueBlock {
    pub fn new() -> Self {
        Self::default()
    }

    /// Take ownership of an already sorted, merged list.
    ///
    /// The order is not rewritten here: re-sorting would change the bytes fed
    /// to the shared compressor. Debug builds assert the precondition.
    pub fn from_sorted(pairs: Vec<NameValue>) -> Self {
        debug_assert!(is_sorted_unique(&pairs), "name/value pairs must be sorted and unique");
        Self { pairs }
    }

    /// Wrap pairs in wire order without checking it (decode path).
    pub(crate) fn from_wire(pairs: Vec<NameValue>) -> Self {
        Self { pairs }
    }

    pub fn len(&self) -> usize {
        self.pairs.len()
    }

    pub fn is_empty(&self) -> bool {
        self.pairs.is_empty()
    }

    pub fn iter(&self) -> std::slice::Iter<'_, NameValue> {
        self.pairs.iter()
    }

    pub fn as_slice(&self) -> &[NameValue] {
        &self.pairs
    }

    /// First entry with this exact name.
    pub fn get(&self, name: &[u8]) -> Option<&Bytes> {
        self.pairs.iter().find(|p| p.name == name).map(|p| &p.value)
    }

    /// True when names are strictly ascending.
    pub fn is_normalized(&self) -> bool {
        is_sorted_unique(&self.pairs)
    }

    pub fn into_inner(self) -> Vec<NameValue> {
        self.pairs
    }
}

impl<'a> IntoIterator for &'a NameValueBlock {
    type Item = &'a NameValue;
    type IntoIter = std::slice::Iter<'a, NameValue>;

    fn into_iter(self) -> Self::IntoIter {
        self.pairs.iter()
    }
}

impl IntoIterator for NameValueBlock {
    type Item = NameValue;
    type IntoIter = std::vec::IntoIter<NameValue>;

    fn into_iter(self) -> Self::IntoIter {
        self.pairs.into_iter()
    }
}

pub(crate) fn is_sorted_unique(pairs: &[NameValue]) -> bool {
    pairs.windows(2).all(|w| w[0].name < w[1].name)
}
