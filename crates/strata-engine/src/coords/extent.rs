use super::Vec2;

/// Axis-aligned box in device pixels, stored as min/max bounds.
///
/// A well-formed extent satisfies `xmin <= xmax` and `ymin <= ymax`.
/// [`Extent::set_corners`] always produces one.
#[derive(Debug, Copy, Clone, Default, PartialEq)]
pub struct Extent {
    pub xmin: f32,
    pub ymin: f32,
    pub xmax: f32,
    pub ymax: f32,
}

impl Extent {
    #[inline]
    pub const fn new(xmin: f32, ymin: f32, xmax: f32, ymax: f32) -> Self {
        Self { xmin, ymin, xmax, ymax }
    }

    /// Overwrites this box with the one spanned by `a` and `b`.
    ///
    /// Corners may arrive flipped on either axis (e.g. a projection with +Y up);
    /// the result is normalized regardless.
    #[inline]
    pub fn set_corners(&mut self, a: Vec2, b: Vec2) {
        if a.x < b.x {
            self.xmin = a.x;
            self.xmax = b.x;
        } else {
            self.xmin = b.x;
            self.xmax = a.x;
        }
        if a.y < b.y {
            self.ymin = a.y;
            self.ymax = b.y;
        } else {
            self.ymin = b.y;
            self.ymax = a.y;
        }
    }

    #[inline]
    pub fn width(self) -> f32 {
        self.xmax - self.xmin
    }

    #[inline]
    pub fn height(self) -> f32 {
        self.ymax - self.ymin
    }

    /// Grows the box by `d` on every side, in place.
    #[inline]
    pub fn expand(&mut self, d: f32) -> &mut Self {
        self.xmin -= d;
        self.ymin -= d;
        self.xmax += d;
        self.ymax += d;
        self
    }

    /// Copying variant of [`expand`](Self::expand).
    #[inline]
    pub fn expanded(mut self, d: f32) -> Self {
        self.expand(d);
        self
    }
}
