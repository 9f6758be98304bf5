/// Per-record observers for the conversion pass.
///
/// The converter notifies an observer after each record is written;
/// observers never influence the output.
use std::path::PathBuf;

use tracing::info;

/// How often [`SampleProbe`] reports, in records.
pub const SAMPLE_INTERVAL: usize = 3000;

/// Callback invoked once per converted record.
pub trait RecordObserver {
    fn on_record(&mut self, index: usize, image_name: &str, joined_tokens: &str);
}

/// Observer that does nothing.
#[derive(Debug, Default, Clone, Copy)]
pub struct NoopObserver;

impl RecordObserver for NoopObserver {
    fn on_record(&mut self, _index: usize, _image_name: &str, _joined_tokens: &str) {}
}

/// Spot-checks every `interval`-th record (0-indexed, so the first
/// record is always sampled): logs the token string, the resolved image
/// path, and whether that image exists on disk. A missing image is
/// reported and ignored.
pub struct SampleProbe {
    image_dir: PathBuf,
    interval: usize,
}

impl SampleProbe {
    #[must_use]
    pub fn new(image_dir: PathBuf, interval: usize) -> Self {
        Self { image_dir, interval }
    }

    /// Whether the record at `index` gets sampled.
    #[must_use]
    pub fn should_sample(&self, index: usize) -> bool {
        self.interval > 0 && index % self.interval == 0
    }
}

impl RecordObserver for SampleProbe {
    fn on_record(&mut self, index: usize, image_name: &str, joined_tokens: &str) {
        if !self.should_sample(index) {
            return;
        }

        let image_path = self.image_dir.join(image_name);
        info!("{joined_tokens}");
        info!("{}", image_path.display());
        info!("exists? {}", image_path.exists());
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_sampling_cadence() {
        let probe = SampleProbe::new(PathBuf::from("images"), 3000);
        assert!(probe.should_sample(0), "first record is always sampled");
        assert!(!probe.should_sample(1));
        assert!(!probe.should_sample(2999));
        assert!(probe.should_sample(3000));
        assert!(probe.should_sample(6000));
        assert!(!probe.should_sample(6001));
    }

    #[test]
    fn test_zero_interval_never_samples() {
        let probe = SampleProbe::new(PathBuf::from("images"), 0);
        assert!(!probe.should_sample(0));
        assert!(!probe.should_sample(100));
    }

    #[test]
    fn test_missing_image_does_not_panic() {
        let mut probe = SampleProbe::new(PathBuf::from("/nonexistent/images"), 1);
        probe.on_record(0, "COCO_train2014_000000000042.jpg", "[CLS],is,it,red");
    }
}
