use geo::{Coord, Geometry, LineString, MultiLineString, MultiPoint, MultiPolygon, Point, Polygon};
use shapefile::{PolygonRing, Shape};

use crate::error::{Error, Result};

/// Convert shapefile polygon rings to geo::MultiPolygon<f64>.
///
/// Shapefiles store each outer ring followed by its holes; rings are closed
/// if the file left them open.
pub(crate) fn shp_to_geo<P>(rings: &[PolygonRing<P>], xy: impl Fn(&P) -> Coord<f64>) -> MultiPolygon<f64> {
    let mut polys: Vec<Polygon<f64>> = Vec::new();
    let mut current_exterior: Option<LineString<f64>> = None;
    let mut current_holes: Vec<LineString<f64>> = Vec::new();

    for ring in rings {
        let mut coords = ring.points().iter().map(&xy).collect::<Vec<_>>();
        if let (Some(&first), Some(&last)) = (coords.first(), coords.last()) {
            if first != last { coords.push(first) }
        }
        match ring {
            PolygonRing::Outer(_) => {
                // flush previous polygon
                if let Some(ext) = current_exterior.replace(LineString(coords)) {
                    polys.push(Polygon::new(ext, std::mem::take(&mut current_holes)));
                }
            }
            PolygonRing::Inner(_) => current_holes.push(LineString(coords)),
        }
    }
    if let Some(ext) = current_exterior {
        polys.push(Polygon::new(ext, current_holes));
    }

    MultiPolygon(polys)
}

/// Coerce a generic shape into an owned geometry, dropping M and Z values.
/// Null shapes become an empty geometry collection.
pub(crate) fn shape_to_geometry(shape: Shape) -> Result<Geometry<f64>> {
    macro_rules! xy { () => { |p| Coord { x: p.x, y: p.y } }; }

    fn lines<P>(parts: &[Vec<P>], xy: impl Fn(&P) -> Coord<f64>) -> Geometry<f64> {
        Geometry::MultiLineString(MultiLineString(
            parts.iter().map(|part| LineString(part.iter().map(&xy).collect())).collect()
        ))
    }

    fn points<P>(pts: &[P], xy: impl Fn(&P) -> Coord<f64>) -> Geometry<f64> {
        Geometry::MultiPoint(MultiPoint(pts.iter().map(|p| Point(xy(p))).collect()))
    }

    Ok(match shape {
        Shape::NullShape => Geometry::GeometryCollection(Default::default()),
        Shape::Point(p) => Geometry::Point(Point::new(p.x, p.y)),
        Shape::PointM(p) => Geometry::Point(Point::new(p.x, p.y)),
        Shape::PointZ(p) => Geometry::Point(Point::new(p.x, p.y)),
        Shape::Polyline(l) => lines(l.parts(), xy!()),
        Shape::PolylineM(l) => lines(l.parts(), xy!()),
        Shape::PolylineZ(l) => lines(l.parts(), xy!()),
        Shape::Polygon(p) => Geometry::MultiPolygon(shp_to_geo(p.rings(), xy!())),
        Shape::PolygonM(p) => Geometry::MultiPolygon(shp_to_geo(p.rings(), xy!())),
        Shape::PolygonZ(p) => Geometry::MultiPolygon(shp_to_geo(p.rings(), xy!())),
        Shape::Multipoint(m) => points(m.points(), xy!()),
        Shape::MultipointM(m) => points(m.points(), xy!()),
        Shape::MultipointZ(m) => points(m.points(), xy!()),
        other => return Err(Error::UnsupportedShape(format!("{:?}", other.shapetype()))),
    })
}
