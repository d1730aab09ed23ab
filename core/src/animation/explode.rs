use core::f32::consts::TAU;

use embedded_graphics::{pixelcolor::BinaryColor, prelude::*};

use super::shapes::{
    EYE_RISE, EYE_SPREAD, FACE_RADIUS, bbox, center_of, disc, face_outline, filled_ellipse, line,
    trunc,
};

const RAYS: usize = 12;
const RAY_GROWTH: f32 = 20.0;

pub(super) fn draw<D>(target: &mut D, index: usize, total: usize) -> Result<(), D::Error>
where
    D: DrawTarget<Color = BinaryColor>,
{
    let center = center_of(target);
    let progress = index as f32 / total as f32;

    if progress < 0.5 {
        shocked(target, center, progress)
    } else {
        blast(target, center, index, (progress - 0.5) * 2.0)
    }
}

/// Eyes widen and the mouth opens.
fn shocked<D>(target: &mut D, center: Point, progress: f32) -> Result<(), D::Error>
where
    D: DrawTarget<Color = BinaryColor>,
{
    face_outline(target, center)?;

    let eye_size = 3 + trunc(progress * 10.0);
    let eye_y = center.y - EYE_RISE;
    disc(target, Point::new(center.x - EYE_SPREAD, eye_y), eye_size)?;
    disc(target, Point::new(center.x + EYE_SPREAD, eye_y), eye_size)?;

    let mouth = trunc(progress * 15.0);
    let mouth_y = center.y + 8;
    filled_ellipse(
        target,
        bbox(
            Point::new(center.x - mouth, mouth_y - mouth / 2),
            Point::new(center.x + mouth, mouth_y + mouth / 2),
        ),
    )
}

/// Shaking face with rays shooting out of the rim.
fn blast<D>(target: &mut D, center: Point, index: usize, explosion: f32) -> Result<(), D::Error>
where
    D: DrawTarget<Color = BinaryColor>,
{
    let shake_phase = index as f32 * 2.0;
    let shake = Point::new(
        trunc(shake_phase.sin() * 2.0),
        trunc(shake_phase.cos() * 2.0),
    );
    face_outline(target, center + shake)?;

    let rim = FACE_RADIUS as f32;
    let length = rim + explosion * RAY_GROWTH;
    for j in 0..RAYS {
        let angle = j as f32 / RAYS as f32 * TAU;
        let (sin, cos) = angle.sin_cos();
        let start = center + Point::new(trunc(cos * rim), trunc(sin * rim));
        let end = center + Point::new(trunc(cos * length), trunc(sin * length));
        line(target, start, end, 2)?;

        if explosion > 0.5 {
            let dot = end + Point::new(trunc(cos * 5.0), trunc(sin * 5.0));
            disc(target, dot, 2)?;
        }
    }
    Ok(())
}
