use image::RgbaImage;

use crate::{
    diff, project, suppress, ChangeMask, ChangeMaskResult, ColorGrid, DetectionOptions,
    Error::NotEnoughFrames,
};

/// Folds an ordered sequence of frames into a single [`ChangeMask`].
///
/// The first frame becomes the subject grid. Each following frame is compared against the
/// subject, and the resulting mask is denoised and painted onto the subject before the next
/// comparison, so marks that survive denoising accumulate across the whole sequence.
///
/// Frames must be supplied in order; each step depends on the previous one.
#[derive(Debug, Clone)]
pub struct SequenceAccumulator {
    options: DetectionOptions,
    subject: ColorGrid,
    mask: Option<ColorGrid>,
    num_frames: usize,
}

impl SequenceAccumulator {
    #[must_use]
    pub fn new(first_frame: &RgbaImage, options: DetectionOptions) -> Self {
        Self {
            options,
            subject: ColorGrid::sample(first_frame),
            mask: None,
            num_frames: 1,
        }
    }

    /// Compare the next frame of the sequence against everything seen so far.
    #[must_use]
    pub fn push_frame(self, frame: &RgbaImage) -> Self {
        let Self {
            options,
            subject,
            mask,
            num_frames,
        } = self;

        //on every step but the first, carry the stable part of the previous mask into the subject.
        let subject = match mask {
            Some(mask) => project(&suppress(&mask, &options), subject, &options.thresholds),
            None => subject,
        };

        let candidate = ColorGrid::sample(frame);
        let mask = diff(&subject, candidate, &options);

        debug!(
            target: "sequence",
            "frame {}: {} cells differ from subject",
            num_frames,
            mask.count_black(&options.thresholds)
        );

        Self {
            options,
            subject,
            mask: Some(mask),
            num_frames: num_frames + 1,
        }
    }

    /// Number of frames folded in so far, including the first.
    pub fn num_frames(&self) -> usize {
        self.num_frames
    }

    /// Run the last denoising pass and produce the composite mask.
    ///
    /// Fails with [`crate::Error::NotEnoughFrames`] if only the first frame was supplied.
    pub fn finish(self) -> ChangeMaskResult<ChangeMask> {
        let Some(mask) = self.mask else {
            return Err(NotEnoughFrames(self.num_frames));
        };

        let grid = project(
            &suppress(&mask, &self.options),
            self.subject,
            &self.options.thresholds,
        );

        Ok(ChangeMask::new(grid, self.num_frames, &self.options.thresholds))
    }
}

#[cfg(test)]
mod test {
    use image::{Rgba, RgbaImage};

    use super::SequenceAccumulator;
    use crate::{ChannelDifference, DetectionOptions, Error, BLACK, GRID_SIZE, WHITE};

    fn white_frame() -> RgbaImage {
        RgbaImage::from_pixel(GRID_SIZE as u32, GRID_SIZE as u32, WHITE)
    }

    fn with_square(mut frame: RgbaImage, left: u32, top: u32, side: u32) -> RgbaImage {
        for x in left..left + side {
            for y in top..top + side {
                frame.put_pixel(x, y, BLACK);
            }
        }
        frame
    }

    #[test]
    fn test_single_frame_is_not_enough() {
        let acc = SequenceAccumulator::new(&white_frame(), DetectionOptions::default());
        assert_eq!(acc.num_frames(), 1);
        assert_eq!(acc.finish().unwrap_err(), Error::NotEnoughFrames(1));
    }

    #[test]
    fn test_static_scene_has_no_change() {
        let frame = white_frame();
        let mask = SequenceAccumulator::new(&frame, DetectionOptions::default())
            .push_frame(&frame)
            .push_frame(&frame)
            .push_frame(&frame)
            .finish()
            .unwrap();

        assert_eq!(mask.num_frames(), 4);
        assert_eq!(mask.changed_cells(), 0);
    }

    #[test]
    fn test_persistent_square_survives() {
        let empty = white_frame();
        let occupied = with_square(white_frame(), 40, 40, 10);

        let mask = SequenceAccumulator::new(&empty, DetectionOptions::default())
            .push_frame(&occupied)
            .push_frame(&occupied)
            .finish()
            .unwrap();

        assert_eq!(mask.changed_cells(), 100);
        for (x, y) in crate::ColorGrid::coords() {
            let inside = (40..50).contains(&x) && (40..50).contains(&y);
            let expected = if inside { BLACK } else { WHITE };
            assert_eq!(mask.grid().get(x, y), expected, "cell ({x}, {y})");
        }
    }

    #[test]
    fn test_speck_is_erased() {
        let empty = white_frame();
        let mut speck = white_frame();
        speck.put_pixel(5, 5, BLACK);

        let mask = SequenceAccumulator::new(&empty, DetectionOptions::default())
            .push_frame(&speck)
            .finish()
            .unwrap();

        assert_eq!(mask.changed_cells(), 0);
    }

    #[test]
    fn test_marks_accumulate_once_stable() {
        let empty = white_frame();
        let first = with_square(white_frame(), 0, 0, 10);
        let second = with_square(white_frame(), 60, 60, 20);

        //the first square is carried forward by the subject grid even after it leaves the scene
        let mask = SequenceAccumulator::new(&empty, DetectionOptions::default())
            .push_frame(&first)
            .push_frame(&second)
            .push_frame(&second)
            .finish()
            .unwrap();

        assert_eq!(mask.changed_cells(), 100 + 400);
        assert_eq!(mask.grid().get(0, 0), BLACK);
        assert_eq!(mask.grid().get(79, 79), BLACK);
        assert_eq!(mask.grid().get(30, 30), WHITE);
    }

    #[test]
    fn test_brightening_depends_on_difference_mode() {
        let side = GRID_SIZE as u32;
        let grey = RgbaImage::from_pixel(side, side, Rgba([100, 100, 100, 255]));
        let lighter = RgbaImage::from_pixel(side, side, Rgba([105, 105, 105, 255]));

        let run = |difference| {
            let options = DetectionOptions {
                difference,
                ..DetectionOptions::default()
            };
            SequenceAccumulator::new(&grey, options)
                .push_frame(&lighter)
                .finish()
                .unwrap()
                .changed_cells()
        };

        assert_eq!(run(ChannelDifference::Wrapping), GRID_SIZE * GRID_SIZE);
        assert_eq!(run(ChannelDifference::Absolute), 0);
    }
}
