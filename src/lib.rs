//! stagepipe - lazy stream combinators where every operator is its own stage
//!
//! A [`Stage`] is an in-flight sequence filled by one background tokio task
//! through a depth-one queue. Operators consume Stages by value and return new
//! ones, so a pipeline is a chain of independently running workers:
//!
//! ```
//! use stagepipe::*;
//!
//! # #[tokio::main]
//! # async fn main() {
//! let words = from_string("Lorem adipiscing elit ipsum sed neque", " ")
//!     .stride(3)
//!     .take(2)
//!     .reduce(|a, b| format!("{a} {b}"));
//! assert_eq!(words.collect_vec().await, vec!["Lorem ipsum".to_string()]);
//! # }
//! ```

pub mod error;
pub mod ops;
pub mod pipe;
pub mod sinks;
pub mod sources;
pub mod stage;
pub mod stage_configuration;

pub use error::{StreamError, StreamResult};
pub use ops::{chain, round_robin, zip, zip_rounds};
pub use sinks::{Encode, Render};
pub use sources::*;
pub use stage::{Indexed, Stage, StageOfStages};
pub use stage_configuration::StageConfig;
