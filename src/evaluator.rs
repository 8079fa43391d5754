use crate::{
    array::ImageArray,
    label::{Assessment, MixingLabel},
};
use std::{convert::Infallible, time::Duration};

/// Simulated processing time of the placeholder evaluator.
pub const DEFAULT_DELAY: Duration = Duration::from_secs(1);

/// Trait for anything that can grade the mixing degree shown in an image.
///
/// Implementations receive the current image, or `None` when the user has not
/// supplied one, and return the text to display. Calls may block; the server
/// runs them on a blocking thread.
pub trait Evaluator {
    /// The error type that can be returned during evaluation.
    type Error: std::error::Error + Send + Sync + 'static;

    fn evaluate(&self, image: Option<&ImageArray>) -> Result<Assessment, Self::Error>;
}

/// Stand-in for a real classifier.
///
/// Waits for a fixed delay, computes the image mean and discards it, then
/// answers [`MixingLabel::Average`] whatever the content.
#[derive(Clone, Debug)]
pub struct PlaceholderEvaluator {
    delay: Duration,
}

impl PlaceholderEvaluator {
    pub fn new() -> Self {
        Self::with_delay(DEFAULT_DELAY)
    }

    pub fn with_delay(delay: Duration) -> Self {
        Self { delay }
    }

    pub fn delay(&self) -> Duration {
        self.delay
    }
}

impl Default for PlaceholderEvaluator {
    fn default() -> Self {
        Self::new()
    }
}

impl Evaluator for PlaceholderEvaluator {
    type Error = Infallible;

    fn evaluate(&self, image: Option<&ImageArray>) -> Result<Assessment, Self::Error> {
        let Some(image) = image else {
            return Ok(Assessment::Prompt);
        };

        std::thread::sleep(self.delay);

        // not used for grading yet
        let mean = image.mean();
        log::debug!("Image {:?} has mean {mean:.3}", image.shape());

        Ok(Assessment::Label(MixingLabel::Average))
    }
}
