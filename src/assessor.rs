use crate::{array::ImageArray, evaluator::Evaluator, label::Assessment};
use std::{
    sync::atomic::{AtomicU64, Ordering},
    time::{Duration, Instant},
};

/// Result of one assessment together with its telemetry.
#[derive(Clone, Debug)]
pub struct AssessmentResponse {
    /// Sequential identifier of this call.
    pub id: u64,
    /// Timestamp when the evaluation started.
    pub start_time: Instant,
    /// Total time spent in the evaluator.
    pub duration: Duration,
    /// `(height, width, channels)` of the input, if any.
    pub image_shape: Option<(usize, usize, usize)>,
    /// The text shown to the user.
    pub assessment: Assessment,
}

/// Times and numbers calls into an [`Evaluator`].
///
/// Calls are not queued or serialized: concurrent callers each run the
/// evaluator on their own thread. The id counter is the only shared state.
pub struct Assessor<E: Evaluator> {
    evaluator: E,
    id_counter: AtomicU64,
}

impl<E: Evaluator> Assessor<E> {
    pub fn new(evaluator: E) -> Self {
        Self {
            evaluator,
            id_counter: AtomicU64::new(0),
        }
    }

    /// Runs the evaluator on the calling thread, blocking for as long as it
    /// takes.
    pub fn assess(&self, image: Option<&ImageArray>) -> Result<AssessmentResponse, E::Error> {
        let id = self.id_counter.fetch_add(1, Ordering::Relaxed);
        let image_shape = image.map(ImageArray::shape);

        log::debug!("Starting assessment {id} for image {image_shape:?}");
        let start_time = Instant::now();

        let assessment = self.evaluator.evaluate(image)?;
        let duration = start_time.elapsed();

        log::debug!("Assessment {id} completed in {duration:?}: {assessment}");

        Ok(AssessmentResponse {
            id,
            start_time,
            duration,
            image_shape,
            assessment,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{
        evaluator::PlaceholderEvaluator,
        label::{MixingLabel, PROMPT},
    };

    #[derive(Debug, thiserror::Error)]
    #[error("sensor offline")]
    struct Offline;

    struct FailingEvaluator;

    impl Evaluator for FailingEvaluator {
        type Error = Offline;

        fn evaluate(&self, _image: Option<&ImageArray>) -> Result<Assessment, Self::Error> {
            Err(Offline)
        }
    }

    #[test]
    fn ids_increase_per_call() {
        let assessor = Assessor::new(PlaceholderEvaluator::with_delay(Duration::ZERO));
        let first = assessor.assess(None).unwrap();
        let second = assessor.assess(None).unwrap();
        assert_eq!((first.id, second.id), (0, 1));
        assert_eq!(first.assessment.as_str(), PROMPT);
        assert_eq!(first.image_shape, None);
    }

    #[test]
    fn records_shape_and_duration() {
        let assessor = Assessor::new(PlaceholderEvaluator::with_delay(Duration::from_millis(20)));
        let image = ImageArray::filled(10, 10, 3, 0).unwrap();
        let response = assessor.assess(Some(&image)).unwrap();
        assert_eq!(response.image_shape, Some((10, 10, 3)));
        assert!(response.duration >= Duration::from_millis(20));
        assert_eq!(response.assessment, Assessment::Label(MixingLabel::Average));
    }

    #[test]
    fn evaluator_errors_propagate() {
        let assessor = Assessor::new(FailingEvaluator);
        let err = assessor.assess(None).unwrap_err();
        assert_eq!(err.to_string(), "sensor offline");
    }
}
