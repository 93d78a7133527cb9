//! Capacity planning.
//!
//! The planner is a pure function from the current capacity and the
//! requested length to the capacity the backing region should have. Growth
//! adds a proportional margin:
//!
//! ```text
//! capacity = new_len + new_len / GROWTH_RATIO + MIN_MARGIN
//! ```
//!
//! Inside the hysteresis window `[old_capacity / SHRINK_RATIO,
//! old_capacity]` the old capacity is kept unchanged, so alternating
//! append/remove patterns do not thrash the allocator. Every result is
//! clamped to the valid slot range for the element size; when the margin
//! would leave that range, the plan collapses toward an exact fit.
//!
//! The hinted variant biases the result toward an expected steady-state
//! length. The hint is treated as an estimated mean with an estimated
//! standard deviation of a third of its value, giving three regions below
//! the hint: far below, capacity is clamped to the two-deviations-under
//! floor; approaching, it ramps linearly with slope 2; within one deviation
//! it snaps to the hint exactly, so churn around the expected length never
//! reallocates. Above the hint only the small fixed margin is added.

use crate::arith::{add_capped, is_valid_slot_count, max_slot_count};

/// Fraction of the requested length added as growth margin.
pub(crate) const GROWTH_RATIO: usize = 8;

/// Margin floor, in slots. Keeps tiny arrays from reallocating on every
/// append.
pub(crate) const MIN_MARGIN: usize = 4;

/// The hysteresis window reaches down to `old_capacity / SHRINK_RATIO`.
pub(crate) const SHRINK_RATIO: usize = 2;

/// Plans the capacity for a buffer of `new_len` elements of `elem_size`
/// bytes, currently holding `old_capacity` slots.
///
/// The result is always a valid slot count, is never below `new_len`, and
/// replanning with the result as the old capacity returns the result
/// unchanged.
pub(crate) fn plan_capacity(elem_size: usize, old_capacity: usize, new_len: usize) -> usize {
    debug_assert!(is_valid_slot_count(new_len, elem_size));

    if new_len <= old_capacity && new_len >= old_capacity / SHRINK_RATIO {
        return old_capacity;
    }

    // new_len fits the index range, so the margin sum cannot overflow;
    // add_capped still bounds the result to the valid slot range.
    let margin = new_len / GROWTH_RATIO + MIN_MARGIN;
    add_capped(new_len, margin, max_slot_count(elem_size))
}

/// Plans like [`plan_capacity`], biased toward an expected steady-state
/// length of `hint` elements.
pub(crate) fn plan_capacity_with_hint(
    elem_size: usize,
    old_capacity: usize,
    new_len: usize,
    hint: usize,
) -> usize {
    debug_assert!(is_valid_slot_count(new_len, elem_size));

    if new_len <= old_capacity && new_len >= old_capacity / SHRINK_RATIO {
        return old_capacity;
    }

    let cap = max_slot_count(elem_size);
    let sigma = hint / 3;
    let floor = hint - 2 * sigma;

    let planned = if new_len < floor {
        floor
    } else if new_len < hint - sigma {
        // ramp from the floor toward the hint with slope 2
        floor + 2 * (new_len - floor)
    } else if new_len <= hint {
        hint
    } else {
        return add_capped(new_len, MIN_MARGIN, cap);
    };

    planned.clamp(new_len, cap)
}
