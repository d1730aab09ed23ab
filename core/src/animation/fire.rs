use core::f32::consts::TAU;

use embedded_graphics::{pixelcolor::BinaryColor, prelude::*};

use super::shapes::{center_of, polygon, trunc};

/// Flames are squashed vertically to fit the wide panel.
const SQUASH: f32 = 0.8;

pub(super) fn draw<D>(target: &mut D, index: usize, total: usize) -> Result<(), D::Error>
where
    D: DrawTarget<Color = BinaryColor>,
{
    let center = center_of(target);
    let phase = index as f32 / total as f32 * TAU;

    let outer: Vec<Point> = (0..360)
        .step_by(15)
        .map(|deg: i32| {
            let angle = (deg as f32).to_radians();
            let flicker = (phase + angle * 3.0).sin() * 3.0;
            let radius = 25.0 + flicker + (angle * 2.0).sin().abs() * 5.0;
            Point::new(
                center.x + trunc(angle.cos() * radius),
                center.y + trunc(angle.sin() * radius * SQUASH) - 5,
            )
        })
        .collect();
    polygon(target, &outer, 2)?;

    let inner: Vec<Point> = (0..360)
        .step_by(20)
        .map(|deg: i32| {
            let angle = (deg as f32).to_radians();
            let flicker = (phase * 1.5 + angle * 2.0).sin() * 2.0;
            let radius = 15.0 + flicker;
            Point::new(
                center.x + trunc(angle.cos() * radius),
                center.y + trunc(angle.sin() * radius * SQUASH),
            )
        })
        .collect();
    polygon(target, &inner, 1)
}
