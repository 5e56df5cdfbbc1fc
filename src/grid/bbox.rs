use geo::{coord, Rect};

use crate::error::{Error, Result};

/// Axis-aligned box in OS national grid coordinates (metres).
///
/// Fields are private so that every box has `min <= max` on both axes and no NaN.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct BoundingBox {
    minx: f64,
    miny: f64,
    maxx: f64,
    maxy: f64,
}

impl BoundingBox {
    /// Construct a bounding box, rejecting inverted axes and NaN coordinates.
    pub fn new(minx: f64, miny: f64, maxx: f64, maxy: f64) -> Result<Self> {
        if !(minx <= maxx && miny <= maxy) {
            return Err(Error::InvalidBounds { minx, miny, maxx, maxy });
        }
        Ok(Self { minx, miny, maxx, maxy })
    }

    #[inline] pub fn minx(&self) -> f64 { self.minx }

    #[inline] pub fn miny(&self) -> f64 { self.miny }

    #[inline] pub fn maxx(&self) -> f64 { self.maxx }

    #[inline] pub fn maxy(&self) -> f64 { self.maxy }

    /// Square with lower-left corner `(minx, miny)`; a negative side grows towards the origin.
    pub(super) fn square(minx: f64, miny: f64, side: f64) -> Self {
        let (x0, x1) = if side < 0.0 { (minx + side, minx) } else { (minx, minx + side) };
        let (y0, y1) = if side < 0.0 { (miny + side, miny) } else { (miny, miny + side) };
        Self { minx: x0, miny: y0, maxx: x1, maxy: y1 }
    }

    /// Width along the x axis.
    #[inline] pub fn width(&self) -> f64 { self.maxx - self.minx }

    /// Height along the y axis.
    #[inline] pub fn height(&self) -> f64 { self.maxy - self.miny }

    /// Convert to a `geo::Rect`.
    #[inline]
    pub fn to_rect(&self) -> Rect<f64> {
        Rect::new(coord! { x: self.minx, y: self.miny }, coord! { x: self.maxx, y: self.maxy })
    }
}

impl TryFrom<Rect<f64>> for BoundingBox {
    type Error = Error;

    fn try_from(rect: Rect<f64>) -> Result<Self> {
        Self::new(rect.min().x, rect.min().y, rect.max().x, rect.max().y)
    }
}

#[cfg(test)]
mod tests {
    use super::BoundingBox;

    #[test]
    fn rejects_inverted_axes() {
        assert!(BoundingBox::new(2.0, 0.0, 1.0, 1.0).is_err());
        assert!(BoundingBox::new(0.0, 2.0, 1.0, 1.0).is_err());
        assert!(BoundingBox::new(0.0, 0.0, f64::NAN, 1.0).is_err());
        assert!(BoundingBox::new(f64::NAN, 0.0, 1.0, 1.0).is_err());
        assert!(BoundingBox::new(0.0, f64::NAN, 1.0, f64::NAN).is_err());
    }

    #[test]
    fn degenerate_box_is_allowed() {
        let bbox = BoundingBox::new(5.0, 5.0, 5.0, 5.0).unwrap();
        assert_eq!(bbox.width(), 0.0);
        assert_eq!(bbox.height(), 0.0);
    }

    #[test]
    fn rect_round_trip_keeps_corners() {
        let bbox = BoundingBox::new(500000.0, 100000.0, 505000.0, 101000.0).unwrap();
        assert_eq!(BoundingBox::try_from(bbox.to_rect()).unwrap(), bbox);
        assert_eq!(bbox.minx(), 500000.0);
        assert_eq!(bbox.maxy(), 101000.0);
    }
}
