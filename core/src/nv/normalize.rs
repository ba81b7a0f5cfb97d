//! nv/normalize.rs
//!
//! Caller-side merge step: turn arbitrary (name, value) input into a block
//! that satisfies the packing precondition.

use bytes::{BufMut, Bytes, BytesMut};

use crate::constants::NV_VALUE_SEPARATOR;
use crate::nv::types::{NameValue, NameValueBlock};

/// Sort pairs by name and join values of equal names with a single NUL.
///
/// The sort is stable, so repeated names keep their values in input order:
/// `[("b","1"),("a","x"),("b","2")]` becomes `[("a","x"),("b","1\0" "2")]`.
pub fn normalize<I, K, V>(pairs: I) -> NameValueBlock
where
    I: IntoIterator<Item = (K, V)>,
    K: Into<Bytes>,
    V: Into<Bytes>,
{
    let mut input: Vec<NameValue> = pairs
        .into_iter()
        .map(|(k, v)| NameValue::new(k, v))
        .collect();
    input.sort_by(|a, b| a.name.cmp(&b.name));

    let mut merged: Vec<NameValue> = Vec::with_capacity(input.len());
    let mut i = 0;
    while i < input.len() {
        let mut j = i + 1;
        while j < input.len() && input[j].name == input[i].name {
            j += 1;
        }

        if j - i == 1 {
            merged.push(input[i].clone());
        } else {
            let group = &input[i..j];
            let joined_len = group.iter().map(|p| p.value.len()).sum::<usize>() + group.len() - 1;
            let mut value = BytesMut::with_capacity(joined_len);
            for (n, p) in group.iter().enumerate() {
                if n > 0 {
                    value.put_u8(NV_VALUE_SEPARATOR);
                }
                value.put_slice(&p.value);
            }
            merged.push(NameValue { name: input[i].name.clone(), value: value.freeze() });
        }
        i = j;
    }

    NameValueBlock::from_sorted(merged)
}
