#![no_std]

//! `GrowVec`: a growable contiguous array with hysteresis-based capacity
//! management.
//!
//! `GrowVec` keeps its elements in insertion order in a single heap region
//! and plans every capacity change through a small, independently tested
//! policy. All fallible operations report through a structured error enum
//! instead of panicking, and a failed operation leaves the container exactly
//! as it was.
//!
//! This crate is `no_std` compatible (it requires `alloc`).
//!
//! # Capacity policy
//!
//! Growth allocates a proportional margin on top of the requested length
//! (an eighth, plus a small constant), so repeated appends settle into
//! amortized constant time. Shrinking is driven by a hysteresis window: as
//! long as the length stays above half the capacity, removals reuse the
//! existing region. This absorbs alternating append/remove traffic without
//! bouncing between allocations.
//!
//! ```
//! use growvec::GrowVec;
//!
//! let mut v = GrowVec::new();
//! for i in 0..100 {
//!     v.push(i).unwrap();
//! }
//! let settled = v.capacity();
//! v.remove(50).unwrap();
//! v.push(100).unwrap();
//! // the window absorbed both length changes
//! assert_eq!(v.capacity(), settled);
//! ```
//!
//! # Length hints
//!
//! When the typical size of the array is known in advance, a length hint
//! biases the planner toward it: capacity approaches the hint in a few
//! steps and snaps to it exactly nearby, so filling to the expected size
//! touches the allocator a handful of times instead of repeatedly.
//!
//! ```
//! use growvec::GrowVec;
//!
//! let mut v = GrowVec::with_length_hint(1000);
//! v.push(0).unwrap();
//! assert!(v.capacity() >= 100);
//! ```
//!
//! # Slicing
//!
//! [`GrowVec::slice`] derives a new container from a strided sub-range,
//! forward or backward:
//!
//! ```
//! use growvec::GrowVec;
//!
//! let v = GrowVec::from_slice(&[0, 1, 2, 3, 4, 5, 6, 7, 8, 9]).unwrap();
//! let evens = v.slice(0, v.len(), 2).unwrap();
//! assert_eq!(evens.as_slice(), &[0, 2, 4, 6, 8]);
//!
//! let reversed = v.slice(v.len(), 0, -1).unwrap();
//! assert_eq!(reversed.as_slice(), &[9, 8, 7, 6, 5, 4, 3, 2, 1, 0]);
//! ```
//!
//! # Error handling
//!
//! Every fallible operation returns [`GrowVecError`]; nothing is silently
//! swallowed and nothing panics on bad input:
//!
//! ```
//! use growvec::{GrowVec, GrowVecError};
//!
//! let mut v: GrowVec<u8> = GrowVec::new();
//! assert_eq!(
//!     v.remove(0),
//!     Err(GrowVecError::NotFound { index: 0, length: 0 })
//! );
//! ```

extern crate alloc;

mod arith;
mod capacity;
mod core;
mod error;
mod iter;
mod raw;

pub use crate::core::GrowVec;
pub use crate::error::GrowVecError;
pub use crate::iter::IntoIter;
