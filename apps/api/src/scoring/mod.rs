//! Pure scoring computations over already-structured data. Nothing in this
//! module calls the model or touches storage — callers supply the full
//! persisted state and receive derived fields back.

pub mod assessment;
pub mod handlers;
pub mod mastery;
pub mod quiz;
