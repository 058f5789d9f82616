//! # SeqComb - Lazy Sequence Combinators
//!
//! A LINQ-style lazy sequence library: chainable combinators over a
//! pull-based cursor, where nothing is computed until values are pulled or
//! collected. The library emphasizes:
//!
//! - **Laziness**: combinators build a recipe; work happens one pull at a time
//! - **Zero panics**: reading an exhausted cursor is a `Result`, not UB
//! - **Ownership**: each combinator consumes its upstream, so a pipeline is
//!   one owned value with no aliasing hazards
//! - **Composability**: small cursors combine into larger ones using
//!   extension-trait methods
//!
//! ```
//! use seqcomb::{CollectExt, FilterExt, SelectExt, TakeExt, from};
//!
//! let data = [1, 2, 3, 4, 5, 6];
//! let result = from(&data)
//!     .filter(|x| x % 2 == 0)
//!     .select(|x| x * 10)
//!     .take(2)
//!     .to_vec();
//! assert_eq!(result, vec![20, 40]);
//! ```

pub mod collect;
pub mod cursor;
pub mod drop;
pub mod error;
pub mod filter;
pub mod select;
pub mod slice;
pub mod take;
pub mod until;

pub use collect::CollectExt;
pub use cursor::Cursor;
pub use drop::DropExt;
pub use error::CursorError;
pub use filter::FilterExt;
pub use select::SelectExt;
pub use slice::{SliceCursor, from};
pub use take::TakeExt;
pub use until::UntilExt;
