//! Check whether two byte strings are at most one edit apart.
//!
//! An edit is one substitution, one insertion or one deletion of a single byte, so this is
//! the predicate `levenshtein(a, b) <= 1` without ever computing a distance. It is meant for
//! near-duplicate and "one typo away" checks on inputs that are mostly identical.
//!
//! `one_edit` picks the fastest implementation for the current CPU. The other `one_edit_*`
//! functions expose each implementation directly, and `Variant` names them for test and
//! benchmark drivers. All of them give the same answer as `one_edit_naive` on every input.
//!
//! # Example
//! ```
//! # use one_edit::*;
//!
//! assert!(one_edit(b"kitten", b"kitten"));
//! assert!(one_edit(b"kitten", b"sitten"));
//! assert!(one_edit(b"kitten", b"kittens"));
//! assert!(!one_edit(b"kitten", b"sitting"));
//! ```

mod dispatch;
mod error;
pub mod lanes;
mod naive;
mod scan;
mod variant;

// re-export
pub use dispatch::*;
pub use error::*;
pub use naive::*;
pub use variant::*;
