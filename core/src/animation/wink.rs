use embedded_graphics::{pixelcolor::BinaryColor, prelude::*};

use super::shapes::{EYE_RISE, EYE_SPREAD, bbox, center_of, disc, face_outline, line, lower_arc};

const EYE_RADIUS: i32 = 4;
/// Frames per wink, independent of the animation length.
const WINK_PERIOD: usize = 30;

pub(super) fn draw<D>(target: &mut D, index: usize, _total: usize) -> Result<(), D::Error>
where
    D: DrawTarget<Color = BinaryColor>,
{
    let center = center_of(target);
    face_outline(target, center)?;

    let eye_y = center.y - EYE_RISE;
    disc(target, Point::new(center.x - EYE_SPREAD, eye_y), EYE_RADIUS)?;

    let right_eye = Point::new(center.x + EYE_SPREAD, eye_y);
    let cycle = (index % WINK_PERIOD) as f32 / WINK_PERIOD as f32;
    if 0.3 < cycle && cycle < 0.5 {
        line(
            target,
            right_eye - Point::new(5, 0),
            right_eye + Point::new(5, 0),
            2,
        )?;
    } else {
        disc(target, right_eye, EYE_RADIUS)?;
    }

    let smile_y = center.y + 8;
    lower_arc(
        target,
        bbox(
            Point::new(center.x - 15, smile_y - 8),
            Point::new(center.x + 15, smile_y + 8),
        ),
        2,
    )
}
