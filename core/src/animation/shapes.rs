use embedded_graphics::{
    pixelcolor::BinaryColor,
    prelude::*,
    primitives::{
        Circle, Ellipse, Line, Polyline, PrimitiveStyle, PrimitiveStyleBuilder, Rectangle,
        StrokeAlignment,
    },
};

use crate::framebuffer::{INK, PAPER};

pub(super) const FACE_RADIUS: i32 = 28;
pub(super) const FACE_STROKE: u32 = 2;
/// Horizontal distance of each eye from the face centre.
pub(super) const EYE_SPREAD: i32 = 12;
/// Eyes sit this far above the face centre.
pub(super) const EYE_RISE: i32 = 8;

pub(super) fn center_of<D: DrawTarget>(target: &D) -> Point {
    let area = target.bounding_box();
    area.top_left + Point::new(area.size.width as i32 / 2, area.size.height as i32 / 2)
}

/// Bounding box spanning both corners, inclusive.
pub(super) fn bbox(a: Point, b: Point) -> Rectangle {
    Rectangle::with_corners(a, b)
}

pub(super) fn circle_bbox(center: Point, radius: i32) -> Rectangle {
    bbox(
        center - Point::new(radius, radius),
        center + Point::new(radius, radius),
    )
}

pub(super) fn face_outline<D>(target: &mut D, center: Point) -> Result<(), D::Error>
where
    D: DrawTarget<Color = BinaryColor>,
{
    let style = PrimitiveStyleBuilder::new()
        .stroke_color(INK)
        .stroke_width(FACE_STROKE)
        .stroke_alignment(StrokeAlignment::Inside)
        .fill_color(PAPER)
        .build();
    let area = circle_bbox(center, FACE_RADIUS);
    Circle::new(area.top_left, area.size.width)
        .into_styled(style)
        .draw(target)
}

pub(super) fn disc<D>(target: &mut D, center: Point, radius: i32) -> Result<(), D::Error>
where
    D: DrawTarget<Color = BinaryColor>,
{
    filled_ellipse(target, circle_bbox(center, radius.max(0)))
}

pub(super) fn filled_ellipse<D>(target: &mut D, area: Rectangle) -> Result<(), D::Error>
where
    D: DrawTarget<Color = BinaryColor>,
{
    Ellipse::new(area.top_left, area.size)
        .into_styled(PrimitiveStyle::with_fill(INK))
        .draw(target)
}

pub(super) fn filled_rect<D>(target: &mut D, area: Rectangle) -> Result<(), D::Error>
where
    D: DrawTarget<Color = BinaryColor>,
{
    area.into_styled(PrimitiveStyle::with_fill(INK)).draw(target)
}

pub(super) fn line<D>(target: &mut D, start: Point, end: Point, width: u32) -> Result<(), D::Error>
where
    D: DrawTarget<Color = BinaryColor>,
{
    Line::new(start, end)
        .into_styled(PrimitiveStyle::with_stroke(INK, width))
        .draw(target)
}

pub(super) fn polyline<D>(target: &mut D, points: &[Point], width: u32) -> Result<(), D::Error>
where
    D: DrawTarget<Color = BinaryColor>,
{
    if points.len() < 2 {
        return Ok(());
    }
    Polyline::new(points)
        .into_styled(PrimitiveStyle::with_stroke(INK, width))
        .draw(target)
}

/// Outline of a polygon; the first point is repeated to close the path.
pub(super) fn polygon<D>(target: &mut D, points: &[Point], width: u32) -> Result<(), D::Error>
where
    D: DrawTarget<Color = BinaryColor>,
{
    if points.len() < 3 {
        return Ok(());
    }
    let mut closed = points.to_vec();
    closed.push(points[0]);
    polyline(target, &closed, width)
}

/// Lower half of the ellipse inscribed in `area`, from 3 to 9 o'clock.
pub(super) fn lower_arc<D>(target: &mut D, area: Rectangle, width: u32) -> Result<(), D::Error>
where
    D: DrawTarget<Color = BinaryColor>,
{
    let Some(bottom_right) = area.bottom_right() else {
        return Ok(());
    };
    let mid_y = area.top_left.y + (area.size.height as i32 - 1) / 2;
    let margin = width as i32;
    let clip = bbox(
        Point::new(area.top_left.x - margin, mid_y),
        bottom_right + Point::new(margin, margin),
    );
    let style = PrimitiveStyleBuilder::new()
        .stroke_color(INK)
        .stroke_width(width)
        .stroke_alignment(StrokeAlignment::Inside)
        .build();
    Ellipse::new(area.top_left, area.size)
        .into_styled(style)
        .draw(&mut target.clipped(&clip))
}

/// `f32 -> i32` truncating toward zero.
#[inline]
pub(super) fn trunc(value: f32) -> i32 {
    value as i32
}
