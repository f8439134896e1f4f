//! VM-002: Integer sequence transforms.

use tracing::debug;

/// The fixed literal every demonstration sequence starts from.
pub const SOURCE: [i64; 3] = [1, 2, 3];

/// Fallback multiplier used by [`scale_at`].
pub const SCALE_FACTOR: i64 = 5;

/// Add one to every element, preserving order and length.
///
/// Fails only when an element is `i64::MAX`; the error names its index.
pub fn increment_all(values: &[i64]) -> Result<Vec<i64>, String> {
    let out = values
        .iter()
        .enumerate()
        .map(|(i, v)| {
            v.checked_add(1)
                .ok_or_else(|| format!("element {} overflows on increment: {}", i, v))
        })
        .collect::<Result<Vec<_>, _>>()?;
    debug!(len = out.len(), "incremented sequence");
    Ok(out)
}

/// Multiply `nums[index]` by [`SCALE_FACTOR`].
///
/// An out-of-bounds index is used as the operand itself.
pub fn scale_at(nums: &[i64], index: usize) -> Result<i64, String> {
    let operand = match nums.get(index) {
        Some(n) => *n,
        None => {
            debug!(index, len = nums.len(), "index out of bounds, using index");
            i64::try_from(index).map_err(|e| format!("index {} out of range: {}", index, e))?
        }
    };
    operand
        .checked_mul(SCALE_FACTOR)
        .ok_or_else(|| format!("{} * {} overflows", operand, SCALE_FACTOR))
}
