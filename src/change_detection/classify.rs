use image::Rgba;
use serde::{Deserialize, Serialize};

use crate::definitions::{DEFAULT_BLACK_THRESHOLD, DEFAULT_WHITE_THRESHOLD};

/// Channel thresholds used to decide whether a sample counts as black or white.
/// Only the colour channels are inspected; alpha is ignored.
///
/// A sample can be neither black nor white.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct ColorThresholds {
    /// A sample is black when every colour channel is strictly below this value.
    pub black: u8,

    /// A sample is white when every colour channel is strictly above this value.
    pub white: u8,
}

impl Default for ColorThresholds {
    fn default() -> Self {
        Self {
            black: DEFAULT_BLACK_THRESHOLD,
            white: DEFAULT_WHITE_THRESHOLD,
        }
    }
}

impl ColorThresholds {
    #[must_use]
    pub fn is_black(&self, Rgba([r, g, b, _a]): Rgba<u8>) -> bool {
        r < self.black && g < self.black && b < self.black
    }

    #[must_use]
    pub fn is_white(&self, Rgba([r, g, b, _a]): Rgba<u8>) -> bool {
        r > self.white && g > self.white && b > self.white
    }
}

#[cfg(test)]
mod test {
    use image::Rgba;

    use super::ColorThresholds;
    use crate::{BLACK, WHITE};

    #[test]
    fn test_marks_classify_as_themselves() {
        let thresholds = ColorThresholds::default();

        assert!(thresholds.is_black(BLACK));
        assert!(!thresholds.is_white(BLACK));

        assert!(thresholds.is_white(WHITE));
        assert!(!thresholds.is_black(WHITE));
    }

    #[test]
    fn test_every_channel_must_be_below_black_threshold() {
        let thresholds = ColorThresholds::default();

        assert!(thresholds.is_black(Rgba([9, 9, 9, 255])));
        assert!(!thresholds.is_black(Rgba([10, 0, 0, 255])));
        assert!(!thresholds.is_black(Rgba([0, 10, 0, 255])));
        assert!(!thresholds.is_black(Rgba([0, 0, 10, 255])));
    }

    #[test]
    fn test_alpha_is_ignored() {
        let thresholds = ColorThresholds::default();

        assert!(thresholds.is_black(Rgba([0, 0, 0, 0])));
        assert!(thresholds.is_white(Rgba([255, 255, 255, 0])));
    }

    #[test]
    fn test_grey_is_neither() {
        let thresholds = ColorThresholds::default();
        let grey = Rgba([128, 128, 128, 255]);

        assert!(!thresholds.is_black(grey));
        assert!(!thresholds.is_white(grey));
    }

    #[test]
    fn test_white_threshold_is_configurable() {
        let lenient = ColorThresholds {
            white: 100,
            ..ColorThresholds::default()
        };
        let strict = ColorThresholds::default();
        let light_grey = Rgba([150, 150, 150, 255]);

        assert!(lenient.is_white(light_grey));
        assert!(!strict.is_white(light_grey));
    }
}
