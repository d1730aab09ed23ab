use embedded_graphics::{pixelcolor::BinaryColor, prelude::*};

use super::shapes::{EYE_SPREAD, bbox, center_of, face_outline, filled_rect, line, lower_arc, trunc};

const LENS_HALF_WIDTH: i32 = 8;
const LENS_HALF_HEIGHT: i32 = 5;
/// Frames the glasses take to slide into place.
const SLIDE_FRAMES: f32 = 15.0;

pub(super) fn draw<D>(target: &mut D, index: usize, _total: usize) -> Result<(), D::Error>
where
    D: DrawTarget<Color = BinaryColor>,
{
    let center = center_of(target);
    face_outline(target, center)?;

    // Glasses slide down and then stay put.
    let progress = (index as f32 / SLIDE_FRAMES).min(1.0);
    let glasses_y = center.y - 20 + trunc(progress * 12.0);

    let left_x = center.x - EYE_SPREAD;
    let right_x = center.x + EYE_SPREAD;
    for lens_x in [left_x, right_x] {
        filled_rect(
            target,
            bbox(
                Point::new(lens_x - LENS_HALF_WIDTH, glasses_y - LENS_HALF_HEIGHT),
                Point::new(lens_x + LENS_HALF_WIDTH, glasses_y + LENS_HALF_HEIGHT),
            ),
        )?;
    }
    line(
        target,
        Point::new(left_x + LENS_HALF_WIDTH, glasses_y),
        Point::new(right_x - LENS_HALF_WIDTH, glasses_y),
        2,
    )?;

    let smirk_y = center.y + 10;
    lower_arc(
        target,
        bbox(
            Point::new(center.x - 10, smirk_y - 5),
            Point::new(center.x + 12, smirk_y + 5),
        ),
        2,
    )
}
