//! Stage operators
//!
//! Every operator spawns exactly one worker that owns its upstream Stage(s)
//! and writes to one new downstream Stage. The same functions are exposed as
//! methods on [`Stage`](crate::stage::Stage).

pub mod aggregate;
pub mod inspect;
pub mod merge;
pub mod pad;
pub mod split;
pub mod transform;

pub use merge::{chain, round_robin, zip, zip_rounds};
