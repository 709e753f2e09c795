pub mod factorial;
pub mod primality;
pub mod reversal;
pub mod sequence;
pub mod stats;

pub use crate::domain::model::{StepOutput, StepReport};
pub use crate::domain::ports::{Demo, OutputSink};
pub use crate::utils::error::Result;
