//! Mixing degree assessment demo.
//!
//! A user uploads or captures a photo of a stirred sample and asks for a
//! grade. The grading is delegated to an [`Evaluator`]; the shipped
//! [`PlaceholderEvaluator`] waits one second and always answers
//! "mixing degree: average", so the page can be wired up before a real
//! classifier exists.
//!
//! [`server::router`] exposes the page, its stylesheet and the `POST /assess`
//! endpoint over axum.

mod array;
mod assessor;
mod error;
mod evaluator;
mod label;
pub mod page;
pub mod server;

pub use array::ImageArray;
pub use assessor::{AssessmentResponse, Assessor};
pub use error::MixevalError;
pub use evaluator::{DEFAULT_DELAY, Evaluator, PlaceholderEvaluator};
pub use label::{Assessment, MixingLabel, PROMPT};
