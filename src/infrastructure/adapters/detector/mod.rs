//! Sentence Detector Adapters

mod fake_detector;
mod srx_detector;

pub use fake_detector::FakeSentenceDetector;
pub use srx_detector::{DetectorError, SrxSentenceDetector};
