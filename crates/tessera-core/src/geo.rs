//! # Geo-Coordinates
//!
//! [`GeoPoint`] is a WGS 84 longitude/latitude pair composed of two
//! [`FloatValue`]s. There is no empty state: a null native yields "null
//! island" (0, 0), which is a valid point.

use crate::error::ValidationError;
use crate::native::{Native, NativeMap};
use crate::numeric::FloatValue;
use crate::value::{native_serde, ValueObject};

const EXPECTED: &str = "{\"lon\": -180..=180, \"lat\": -90..=90} mapping, or null";

/// A longitude/latitude point.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct GeoPoint {
    lon: FloatValue,
    lat: FloatValue,
}

impl GeoPoint {
    /// Longitude and latitude of null island.
    pub const NULL_ISLAND: (f64, f64) = (0.0, 0.0);

    /// Create a point, validating coordinate ranges.
    ///
    /// # Errors
    ///
    /// Returns [`ValidationError`] if either coordinate is non-finite or out
    /// of range.
    pub fn new(lon: f64, lat: f64) -> Result<Self, ValidationError> {
        let out_of_range = |axis: &str, value: f64| {
            ValidationError::new(Self::TYPE_NAME, EXPECTED, format!("{axis} {value} is out of range"))
        };
        let lon_value = FloatValue::new(lon)?;
        let lat_value = FloatValue::new(lat)?;
        if !(-180.0..=180.0).contains(&lon) {
            return Err(out_of_range("lon", lon));
        }
        if !(-90.0..=90.0).contains(&lat) {
            return Err(out_of_range("lat", lat));
        }
        Ok(Self {
            lon: lon_value,
            lat: lat_value,
        })
    }

    /// The point (0, 0).
    pub fn null_island() -> Self {
        let (lon, lat) = Self::NULL_ISLAND;
        Self {
            lon: FloatValue::new(lon).unwrap_or_default(),
            lat: FloatValue::new(lat).unwrap_or_default(),
        }
    }

    /// Longitude.
    pub fn lon(&self) -> &FloatValue {
        &self.lon
    }

    /// Latitude.
    pub fn lat(&self) -> &FloatValue {
        &self.lat
    }

    /// Whether this is (0, 0).
    pub fn is_null_island(&self) -> bool {
        self.equals(&Self::null_island())
    }
}

fn coordinate(map: &NativeMap, axis: &str) -> Result<f64, ValidationError> {
    let native = map.get(axis).ok_or_else(|| {
        ValidationError::new(GeoPoint::TYPE_NAME, EXPECTED, format!("missing {axis:?}"))
    })?;
    FloatValue::from_native(native)
        .ok()
        .and_then(|v| v.value())
        .ok_or_else(|| {
            ValidationError::new(
                GeoPoint::TYPE_NAME,
                EXPECTED,
                format!("{axis:?} must be a number, got {native}"),
            )
        })
}

impl ValueObject for GeoPoint {
    const TYPE_NAME: &'static str = "GeoPoint";

    fn from_native(native: &Native) -> Result<Self, ValidationError> {
        match native {
            Native::Null => Ok(Self::null_island()),
            Native::Object(map) => Self::new(coordinate(map, "lon")?, coordinate(map, "lat")?),
            other => Err(ValidationError::unsupported(Self::TYPE_NAME, EXPECTED, other)),
        }
    }

    fn to_native(&self) -> Native {
        let mut map = NativeMap::new();
        map.insert("lon".to_string(), self.lon.to_native());
        map.insert("lat".to_string(), self.lat.to_native());
        Native::Object(map)
    }
}

impl std::fmt::Display for GeoPoint {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "lon: {}, lat: {}", self.lon, self.lat)
    }
}

native_serde!(GeoPoint);

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn roundtrip() {
        let native = json!({"lon": 13.404954, "lat": 52.520008});
        let p = GeoPoint::from_native(&native).unwrap();
        assert_eq!(p.to_native(), native);
        assert_eq!(p.lon().value(), Some(13.404954));
        assert_eq!(p.lat().value(), Some(52.520008));
    }

    #[test]
    fn null_is_null_island() {
        let p = GeoPoint::from_native(&json!(null)).unwrap();
        assert!(p.is_null_island());
        assert!(!p.is_empty());
        assert_eq!(p.to_native(), json!({"lon": 0.0, "lat": 0.0}));
    }

    #[test]
    fn display() {
        let p = GeoPoint::new(1.5, -2.25).unwrap();
        assert_eq!(p.to_string(), "lon: 1.5, lat: -2.25");
    }

    #[test]
    fn rejects_bad_input() {
        assert!(GeoPoint::from_native(&json!({"lon": 1.0})).is_err());
        assert!(GeoPoint::from_native(&json!({"lon": 1.0, "lat": null})).is_err());
        assert!(GeoPoint::from_native(&json!({"lon": 181.0, "lat": 0.0})).is_err());
        assert!(GeoPoint::from_native(&json!({"lon": 0.0, "lat": -90.5})).is_err());
        assert!(GeoPoint::from_native(&json!([1.0, 2.0])).is_err());
    }

    #[test]
    fn integer_coordinates_are_accepted() {
        let p = GeoPoint::from_native(&json!({"lon": 10, "lat": 20})).unwrap();
        assert_eq!(p.to_native(), json!({"lon": 10.0, "lat": 20.0}));
    }
}
