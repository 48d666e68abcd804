//! Property-based tests for coordinate validation
//!
//! Tests invariants:
//! - A point exists exactly when latitude and longitude are both in range
//! - Accepted values are kept bit for bit, including via provider text

use proptest::prelude::*;
use serde_json::json;

use crate::core::record::GeoPoint;
use crate::ingestion::{ElongExtractor, ProviderExtractor};

fn in_range(lat: f64, lon: f64) -> bool {
    (-90.0..=90.0).contains(&lat) && (-180.0..=180.0).contains(&lon)
}

proptest! {
    #[test]
    fn prop_validated_iff_in_range(lat in -200.0f64..200.0, lon in -400.0f64..400.0) {
        let point = GeoPoint::validated(lat, lon);
        prop_assert_eq!(point.is_some(), in_range(lat, lon));
        if let Some(point) = point {
            prop_assert_eq!(point.lat, lat);
            prop_assert_eq!(point.lon, lon);
        }
    }

    #[test]
    fn prop_non_finite_is_rejected(lat in prop::num::f64::ANY, lon in prop::num::f64::ANY) {
        if !lat.is_finite() || !lon.is_finite() {
            prop_assert!(GeoPoint::validated(lat, lon).is_none());
        }
    }

    #[test]
    fn prop_elong_string_coordinates(lat in -120.0f64..120.0, lon in -200.0f64..200.0) {
        let payload = json!({
            "Result": { "Detail": {
                "HotelName": "测试酒店",
                "GoogleLat": lat.to_string(),
                "GoogleLon": lon.to_string(),
            }}
        });
        let record = ElongExtractor::default().extract(&payload);
        match record.location {
            Some(point) => {
                prop_assert!(in_range(lat, lon));
                prop_assert_eq!(point.lat, lat);
                prop_assert_eq!(point.lon, lon);
            }
            None => prop_assert!(!in_range(lat, lon)),
        }
    }
}
