//! Stone-bridge platforms
//!
//! A platform is a rect plus precomputed cosmetic decoration. Brick seams
//! and moss spots are rolled once at construction so each platform keeps a
//! stable pattern for its whole life; the renderer only reads them.

use rand::Rng;

use crate::geom::Rect;

/// One brick column in the bridge face: (offset from the left edge, width)
pub type Brick = (f32, f32);

/// One moss tuft on the bridge top: (x offset, y offset)
pub type MossSpot = (f32, f32);

#[derive(Debug, Clone)]
pub struct Platform {
    /// Stable identity for the platform's lifetime (enemy hosting)
    pub id: u32,
    pub rect: Rect,
    pub bricks: Vec<Brick>,
    pub moss: Vec<MossSpot>,
}

impl Platform {
    pub fn new(id: u32, x: f32, y: f32, w: f32, h: f32, rng: &mut impl Rng) -> Self {
        // Brick columns 18-32 px wide with a 2 px seam between them
        let mut bricks = Vec::new();
        let mut bx = 0.0;
        while bx < w {
            let bw = rng.gen_range(18..=32) as f32;
            bricks.push((bx, bw));
            bx += bw + 2.0;
        }

        // Roughly one moss tuft per 40 px of width
        let moss_count = ((w / 40.0) as usize).max(1);
        let moss = (0..moss_count)
            .map(|_| {
                let max_x = (w - 8.0).max(5.0);
                (rng.gen_range(4.0..max_x), rng.gen_range(0.0..4.0))
            })
            .collect();

        Self {
            id,
            rect: Rect::new(x, y, w, h),
            bricks,
            moss,
        }
    }
}
