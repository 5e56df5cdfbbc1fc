use geo::{BooleanOps, BoundingRect, Contains, Coord, Geometry, Intersects, Line, MultiPolygon, Rect};
use rstar::{Envelope, RTree, RTreeObject, AABB};

fn envelope_of(rect: &Rect<f64>) -> AABB<[f64; 2]> {
    AABB::from_corners(rect.min().into(), rect.max().into())
}

/// Envelope of one component polygon, indexed by its position in the shape.
#[derive(Debug, Clone)]
struct Component {
    idx: usize,
    envelope: AABB<[f64; 2]>,
}

impl RTreeObject for Component {
    type Envelope = AABB<[f64; 2]>;

    fn envelope(&self) -> Self::Envelope { self.envelope }
}

/// One ring edge, exterior or hole.
#[derive(Debug, Clone)]
struct Segment(Line<f64>);

impl RTreeObject for Segment {
    type Envelope = AABB<[f64; 2]>;

    fn envelope(&self) -> Self::Envelope {
        AABB::from_corners(self.0.start.into(), self.0.end.into())
    }
}

/// A polygon pre-processed for many containment queries.
///
/// Preparation computes the overall envelope, an R-tree over the envelopes of
/// the component polygons and an R-tree over every ring edge. Points are
/// located by casting a ray through the edge index; other geometries go through
/// `geo::Contains` against the candidate components. Build once with
/// [`PreparedPolygon::prepare`], then call [`PreparedPolygon::contains`] per geometry.
#[derive(Debug, Clone)]
pub struct PreparedPolygon {
    shape: MultiPolygon<f64>,
    bounds: Option<Rect<f64>>,
    components: RTree<Component>,
    segments: RTree<Segment>,
    merged: Option<MultiPolygon<f64>>, // union of the components, if there are several
}

impl PreparedPolygon {
    /// Prepare a (multi)polygon for repeated containment tests.
    pub fn prepare(shape: impl Into<MultiPolygon<f64>>) -> Self {
        let shape = shape.into();

        let components = shape.0.iter().enumerate()
            .filter_map(|(idx, polygon)| {
                polygon.bounding_rect().map(|rect| Component { idx, envelope: envelope_of(&rect) })
            })
            .collect();

        let segments = shape.0.iter()
            .flat_map(|polygon| std::iter::once(polygon.exterior()).chain(polygon.interiors()))
            .flat_map(|ring| ring.lines())
            .map(Segment)
            .collect();

        let merged = (shape.0.len() > 1).then(|| {
            shape.0.iter().skip(1).fold(MultiPolygon(shape.0[..1].to_vec()), |merged, polygon| {
                merged.union(&MultiPolygon(vec![polygon.clone()]))
            })
        });

        Self {
            bounds: shape.bounding_rect(),
            components: RTree::bulk_load(components),
            segments: RTree::bulk_load(segments),
            merged,
            shape,
        }
    }

    /// Get a reference to the prepared shape.
    #[inline] pub fn shape(&self) -> &MultiPolygon<f64> { &self.shape }

    /// Get the envelope of the prepared shape, if it has any coordinates.
    #[inline] pub fn bounds(&self) -> Option<Rect<f64>> { self.bounds }

    /// Number of component polygons.
    #[inline] pub fn num_components(&self) -> usize { self.shape.0.len() }

    /// True if the geometry lies within the prepared shape.
    ///
    /// Boundary-touching cases follow `geo::Contains`: a geometry lying
    /// entirely on the boundary is not contained.
    pub fn contains(&self, geom: &Geometry<f64>) -> bool {
        let (Some(bounds), Some(rect)) = (self.bounds, geom.bounding_rect()) else { return false };
        let envelope = envelope_of(&rect);
        if !envelope_of(&bounds).contains_envelope(&envelope) { return false }

        if let Geometry::Point(point) = geom {
            if let Some(inside) = self.locate_point(point.0, bounds.max().x) { return inside }
        }

        let candidates = self.components.locate_in_envelope_intersecting(&envelope)
            .collect::<Vec<_>>();

        if candidates.iter()
            .filter(|candidate| candidate.envelope.contains_envelope(&envelope))
            .any(|candidate| self.shape.0[candidate.idx].contains(geom))
        {
            return true
        }

        // Only the union of touching components can hold what no single one does.
        candidates.len() > 1 && self.merged.as_ref()
            .is_some_and(|merged| merged.0.iter().any(|polygon| polygon.contains(geom)))
    }

    /// Even-odd ray cast through the edge index.
    /// `None` if the point lies on an edge, which the exact predicates settle.
    fn locate_point(&self, point: Coord<f64>, max_x: f64) -> Option<bool> {
        let at = AABB::from_point([point.x, point.y]);
        if self.segments.locate_in_envelope_intersecting(&at).any(|segment| segment.0.intersects(&point)) {
            return None
        }

        let ray = AABB::from_corners([point.x, point.y], [max_x, point.y]);
        let crossings = self.segments.locate_in_envelope_intersecting(&ray)
            .filter(|Segment(Line { start: a, end: b })| {
                (a.y > point.y) != (b.y > point.y)
                    && a.x + (point.y - a.y) * (b.x - a.x) / (b.y - a.y) > point.x
            })
            .count();

        Some(crossings % 2 == 1)
    }
}
