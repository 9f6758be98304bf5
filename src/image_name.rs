/// Image filename derivation for the two VQA image corpora.
///
/// Maps a numeric `image_id` onto the fixed filename convention of the
/// active corpus. Pure and deterministic; the naming mode is an explicit
/// parameter rather than ambient state.

/// Which image corpus the annotation ids refer to.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ImageMode {
    /// Balanced real images, `COCO_train2014_000000xxxxxx.jpg`.
    BalancedReal,
    /// Abstract scene images, `abstract_v002_train2015_0000000xxxxx.png`.
    AbstractScene,
}

impl ImageMode {
    /// Fixed filename prefix for this corpus.
    #[must_use]
    pub const fn prefix(self) -> &'static str {
        match self {
            Self::BalancedReal => "COCO_train2014_000000",
            Self::AbstractScene => "abstract_v002_train2015_0000000",
        }
    }

    /// File extension (with dot) for this corpus.
    #[must_use]
    pub const fn suffix(self) -> &'static str {
        match self {
            Self::BalancedReal => ".jpg",
            Self::AbstractScene => ".png",
        }
    }

    /// Minimum digit width of the id segment.
    #[must_use]
    pub const fn pad_width(self) -> usize {
        match self {
            Self::BalancedReal => 6,
            Self::AbstractScene => 5,
        }
    }

    /// Derive the image filename for `image_id`.
    ///
    /// The id is left-padded with zeros to [`pad_width`](Self::pad_width)
    /// digits. Ids wider than that are used as-is; the result is simply
    /// longer. No range validation.
    #[must_use]
    pub fn image_filename(self, image_id: u64) -> String {
        let width = self.pad_width();
        format!("{}{:0width$}{}", self.prefix(), image_id, self.suffix())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_balanced_real_shape() {
        let name = ImageMode::BalancedReal.image_filename(42);
        assert!(name.starts_with("COCO_train2014_000000"));
        assert!(name.ends_with(".jpg"));
        assert_eq!(name, "COCO_train2014_000000000042.jpg");
    }

    #[test]
    fn test_abstract_scene_shape() {
        let name = ImageMode::AbstractScene.image_filename(42);
        assert!(name.starts_with("abstract_v002_train2015_0000000"));
        assert!(name.ends_with(".png"));
        assert_eq!(name, "abstract_v002_train2015_000000000042.png");
    }

    #[test]
    fn test_exact_width_id_gets_no_extra_padding() {
        let name = ImageMode::BalancedReal.image_filename(123_456);
        assert_eq!(name, "COCO_train2014_000000123456.jpg");
    }

    #[test]
    fn test_wide_id_is_not_truncated() {
        let name = ImageMode::BalancedReal.image_filename(12_345_678);
        assert_eq!(name, "COCO_train2014_00000012345678.jpg");

        let name = ImageMode::AbstractScene.image_filename(1_234_567);
        assert_eq!(name, "abstract_v002_train2015_00000001234567.png");
    }

    #[test]
    fn test_id_segment_width_is_max_of_width_and_digits() {
        for mode in [ImageMode::BalancedReal, ImageMode::AbstractScene] {
            for id in [0u64, 7, 99, 4_573, 123_456, 9_999_999] {
                let name = mode.image_filename(id);
                let middle = name
                    .strip_prefix(mode.prefix())
                    .and_then(|s| s.strip_suffix(mode.suffix()))
                    .unwrap();
                let digits = id.to_string().len();
                assert_eq!(
                    middle.len(),
                    mode.pad_width().max(digits),
                    "unexpected width for id {id} in {mode:?}"
                );
            }
        }
    }

    #[test]
    fn test_round_trip_recovers_id() {
        for mode in [ImageMode::BalancedReal, ImageMode::AbstractScene] {
            for id in [0u64, 1, 42, 581_929, 10_000_000] {
                let name = mode.image_filename(id);
                let middle = name
                    .strip_prefix(mode.prefix())
                    .and_then(|s| s.strip_suffix(mode.suffix()))
                    .unwrap();
                assert_eq!(middle.parse::<u64>().unwrap(), id);
            }
        }
    }
}
