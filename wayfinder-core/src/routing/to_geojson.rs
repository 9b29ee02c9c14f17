use geo::{LineString, Point};
use geojson::{Feature, FeatureCollection, Geometry, GeometryValue};
use serde_json::json;

use super::route::{RoutePoint, RouteSegment, RoutingResult, StopKind};
use crate::Error;

impl RoutingResult {
    /// Converts the route to a `GeoJSON` `FeatureCollection`: one `LineString`
    /// per segment, then one `Point` per POI or gate stop.
    ///
    /// Coordinates stay in the airport's planar coordinate space.
    pub fn to_geojson(&self) -> Result<FeatureCollection, Error> {
        let mut features = Vec::with_capacity(self.segments.len() + self.stops.len());

        for (idx, segment) in self.segments.iter().enumerate() {
            features.push(create_segment_feature(idx, segment)?);
        }

        for stop in self
            .stops
            .iter()
            .filter(|stop| stop.kind != StopKind::Corridor)
        {
            features.push(create_stop_feature(stop)?);
        }

        Ok(FeatureCollection {
            features,
            bbox: None,
            foreign_members: None,
        })
    }

    pub fn to_geojson_string(&self) -> Result<String, Error> {
        serde_json::to_string(&self.to_geojson()?).map_err(|e| Error::GeoJsonError(e.to_string()))
    }
}

fn create_segment_feature(idx: usize, segment: &RouteSegment) -> Result<Feature, Error> {
    let line = LineString::from(segment.polyline.iter().map(|&[x, y]| (x, y)).collect::<Vec<_>>());
    let geometry = Geometry::new(GeometryValue::from(&line));

    let value = json!({
        "type": "Feature",
        "geometry": geometry,
        "properties": {
            "leg_type": "segment",
            "segment_index": idx,
            "from_name": segment.from.name,
            "to_name": segment.to.name,
            "distance": segment.distance,
        }
    });

    serde_json::from_value::<Feature>(value).map_err(|e| Error::GeoJsonError(e.to_string()))
}

fn create_stop_feature(stop: &RoutePoint) -> Result<Feature, Error> {
    let geometry = Geometry::new(GeometryValue::from(&Point::new(stop.x, stop.y)));

    let value = json!({
        "type": "Feature",
        "geometry": geometry,
        "properties": {
            "leg_type": "stop",
            "stop_type": stop.kind,
            "poi_id": stop.poi_id,
            "name": stop.name,
        }
    });

    serde_json::from_value::<Feature>(value).map_err(|e| Error::GeoJsonError(e.to_string()))
}
