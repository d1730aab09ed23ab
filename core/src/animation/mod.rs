use embedded_graphics::{pixelcolor::BinaryColor, prelude::DrawTarget};
use strum::IntoEnumIterator;
use strum_macros::{Display, EnumIter, IntoStaticStr};

use crate::framebuffer::Canvas;

mod cool;
mod dizzy;
mod explode;
mod fire;
mod shapes;
mod wink;

pub const DEFAULT_FRAMES: usize = 30;
/// Delay written into generated GIFs for every frame.
pub const FRAME_DELAY_MS: u16 = 60;

#[derive(Debug, Clone, Copy, PartialEq, Eq, EnumIter, IntoStaticStr, Display)]
#[strum(serialize_all = "lowercase")]
pub enum AnimationKind {
    Wink,
    Dizzy,
    Cool,
    Fire,
    Explode,
}

impl AnimationKind {
    pub fn all() -> impl Iterator<Item = AnimationKind> {
        Self::iter()
    }

    pub fn name(self) -> &'static str {
        self.into()
    }

    pub fn file_name(self) -> String {
        format!("{}.gif", self.name())
    }

    /// Draws frame `index` of `total` on top of whatever is in `target`.
    pub fn draw<D>(self, target: &mut D, index: usize, total: usize) -> Result<(), D::Error>
    where
        D: DrawTarget<Color = BinaryColor>,
    {
        let total = total.max(1);
        match self {
            AnimationKind::Wink => wink::draw(target, index, total),
            AnimationKind::Dizzy => dizzy::draw(target, index, total),
            AnimationKind::Cool => cool::draw(target, index, total),
            AnimationKind::Fire => fire::draw(target, index, total),
            AnimationKind::Explode => explode::draw(target, index, total),
        }
    }

    /// Renders frame `index` onto a fresh white canvas.
    pub fn render_frame(self, index: usize, total: usize, width: usize, height: usize) -> Canvas {
        let mut canvas = Canvas::new(width, height);
        self.draw(&mut canvas, index, total)
            .unwrap_or_else(|never| match never {});
        canvas
    }

    pub fn render(self, frames: usize, width: usize, height: usize) -> Vec<Canvas> {
        log::info!("Creating {} animation ({frames} frames)", self.name().to_uppercase());
        (0..frames)
            .map(|i| self.render_frame(i, frames, width, height))
            .collect()
    }
}
