use core::f32::consts::{FRAC_PI_4, TAU};

use embedded_graphics::{pixelcolor::BinaryColor, prelude::*};

use super::shapes::{EYE_RISE, EYE_SPREAD, center_of, disc, face_outline, polyline, trunc};

const SPIRAL_DOTS: usize = 8;

pub(super) fn draw<D>(target: &mut D, index: usize, total: usize) -> Result<(), D::Error>
where
    D: DrawTarget<Color = BinaryColor>,
{
    let center = center_of(target);
    face_outline(target, center)?;

    let phase = index as f32 / total as f32 * TAU;
    let eye_y = center.y - EYE_RISE;
    // The eyes spin in opposite directions.
    spiral(target, Point::new(center.x - EYE_SPREAD, eye_y), phase)?;
    spiral(target, Point::new(center.x + EYE_SPREAD, eye_y), -phase)?;

    let mouth_y = center.y + 10;
    let points: Vec<Point> = (-15..=15)
        .step_by(2)
        .map(|x: i32| {
            let wave = ((x + index as i32 * 3) as f32 * 0.3).sin() * 3.0;
            Point::new(center.x + x, mouth_y + trunc(wave))
        })
        .collect();
    polyline(target, &points, 2)
}

fn spiral<D>(target: &mut D, center: Point, phase: f32) -> Result<(), D::Error>
where
    D: DrawTarget<Color = BinaryColor>,
{
    for j in 0..SPIRAL_DOTS {
        let angle = phase + j as f32 * FRAC_PI_4;
        let radius = (j * 2) as f32;
        let dot = center + Point::new(trunc(angle.cos() * radius), trunc(angle.sin() * radius));
        disc(target, dot, 1)?;
    }
    Ok(())
}
