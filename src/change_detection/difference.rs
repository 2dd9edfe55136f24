use image::Rgba;

use crate::{definitions::BLACK, ColorGrid, DetectionOptions};

/// Whether two samples are within tolerance of each other in each of the red, green and
/// blue channels. The order matters for [`crate::ChannelDifference::Wrapping`].
#[must_use]
pub fn is_similar(
    Rgba([subj_r, subj_g, subj_b, _]): Rgba<u8>,
    Rgba([cand_r, cand_g, cand_b, _]): Rgba<u8>,
    opts: &DetectionOptions,
) -> bool {
    let delta = |subj, cand| opts.difference.delta(subj, cand);

    delta(subj_r, cand_r) < opts.tolerance
        && delta(subj_g, cand_g) < opts.tolerance
        && delta(subj_b, cand_b) < opts.tolerance
}

/// Compare `candidate` against `subject` cell by cell and return the candidate with every
/// changed cell painted black. A cell counts as changed when the subject is already black
/// there, or when the two samples are not similar. Unchanged cells keep the candidate's
/// sample.
#[must_use]
pub fn diff(subject: &ColorGrid, mut candidate: ColorGrid, opts: &DetectionOptions) -> ColorGrid {
    for (x, y) in ColorGrid::coords() {
        let subj_pix = subject.get(x, y);
        let cand_pix = candidate.get(x, y);

        if opts.thresholds.is_black(subj_pix) || !is_similar(subj_pix, cand_pix, opts) {
            candidate.set(x, y, BLACK);
        }
    }

    candidate
}
