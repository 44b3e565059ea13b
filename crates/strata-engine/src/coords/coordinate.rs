/// Point in projected (map) space.
#[derive(Debug, Copy, Clone, Default, PartialEq)]
pub struct Coordinate {
    pub x: f64,
    pub y: f64,
}

impl Coordinate {
    #[inline]
    pub const fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }

    /// Overwrites both components in place.
    #[inline]
    pub fn set(&mut self, x: f64, y: f64) {
        self.x = x;
        self.y = y;
    }
}

/// Axis-aligned box in projected space.
#[derive(Debug, Copy, Clone, Default, PartialEq)]
pub struct ProjectedExtent {
    pub xmin: f64,
    pub ymin: f64,
    pub xmax: f64,
    pub ymax: f64,
}

impl ProjectedExtent {
    #[inline]
    pub const fn new(xmin: f64, ymin: f64, xmax: f64, ymax: f64) -> Self {
        Self { xmin, ymin, xmax, ymax }
    }

    /// Smallest extent covering every coordinate, or `None` for an empty input.
    pub fn from_coordinates<I>(coords: I) -> Option<Self>
    where
        I: IntoIterator<Item = Coordinate>,
    {
        let mut iter = coords.into_iter();
        let first = iter.next()?;
        let mut extent = Self::new(first.x, first.y, first.x, first.y);
        for c in iter {
            extent.xmin = extent.xmin.min(c.x);
            extent.ymin = extent.ymin.min(c.y);
            extent.xmax = extent.xmax.max(c.x);
            extent.ymax = extent.ymax.max(c.y);
        }
        Some(extent)
    }
}
