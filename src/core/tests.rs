#[cfg(test)]
mod tests {
    use crate::core::api::ApiStatus;
    use crate::core::routes::{self, ROUTES};
    use crate::core::{BoundingBox, CutoutQuery, Layer, QueryError};

    /// The sample bounding box from the API documentation.
    fn example_bbox() -> BoundingBox {
        BoundingBox::new(-11.2843, 16.9779, -12.3143, 16.4229)
    }

    #[test]
    fn route_table_lists_home_and_dashboard() {
        assert_eq!(ROUTES.len(), 2);
        assert_eq!(ROUTES[0].path, "/");
        assert_eq!(ROUTES[0].label, "Home");
        assert_eq!(ROUTES[1].path, "/dashboard");
        assert_eq!(ROUTES[1].label, "Dashboard");
    }

    #[test]
    fn route_paths_are_unique_literals() {
        for (i, route) in ROUTES.iter().enumerate() {
            assert!(route.path.starts_with('/'));
            assert!(!route.path.contains(':'));
            assert!(!route.path.contains('*'));
            for other in &ROUTES[i + 1..] {
                assert_ne!(route.path, other.path);
            }
        }
    }

    #[test]
    fn find_matches_exact_paths_only() {
        assert_eq!(routes::find("/").map(|r| r.label), Some("Home"));
        assert_eq!(routes::find("/dashboard").map(|r| r.label), Some("Dashboard"));

        // No catch-all: undefined paths match nothing.
        assert!(routes::find("/missing").is_none());
        assert!(routes::find("/dashboard/").is_none());
        assert!(routes::find("dashboard").is_none());
        assert!(routes::find("").is_none());
    }

    #[test]
    fn cutout_url_uses_api_parameter_names() {
        let query = CutoutQuery {
            layer: Layer::Land,
            bbox: example_bbox(),
            year: 2010,
        };

        assert_eq!(
            query.url("http://localhost:8000").unwrap(),
            "http://localhost:8000/cutout/land?lon1=-11.2843&lat1=16.9779&lon2=-12.3143&lat2=16.4229&year=2010",
        );
    }

    #[test]
    fn cutout_url_with_same_origin_base() {
        let query = CutoutQuery {
            layer: Layer::Precipitation,
            bbox: example_bbox(),
            year: 2023,
        };

        let url = query.url("").unwrap();
        assert!(url.starts_with("/cutout/precipitation?"));
        assert!(url.ends_with("&year=2023"));
    }

    #[test]
    fn every_layer_has_a_distinct_path_segment() {
        for (i, layer) in Layer::ALL.into_iter().enumerate() {
            assert!(!layer.as_str().is_empty());
            assert!(!layer.display_name().is_empty());
            assert_eq!(Layer::from_str(layer.as_str()), Some(layer));
            for other in &Layer::ALL[i + 1..] {
                assert_ne!(layer.as_str(), other.as_str());
            }
        }
        assert_eq!(Layer::from_str("lava"), None);
    }

    #[test]
    fn year_is_validated_like_the_server() {
        let mut query = CutoutQuery {
            layer: Layer::Gpp,
            bbox: example_bbox(),
            year: 2009,
        };
        assert_eq!(query.url(""), Err(QueryError::YearOutOfRange(2009)));

        query.year = 2024;
        assert_eq!(query.url(""), Err(QueryError::YearOutOfRange(2024)));

        query.year = 2010;
        assert!(query.url("").is_ok());
        query.year = 2023;
        assert!(query.url("").is_ok());
    }

    #[test]
    fn coordinates_are_checked_against_wgs84() {
        let bbox = BoundingBox::new(-11.0, 90.5, -12.0, 16.0);
        assert_eq!(bbox.validate(), Err(QueryError::LatitudeOutOfRange(90.5)));

        let bbox = BoundingBox::new(-180.5, 16.0, -12.0, 17.0);
        assert_eq!(bbox.validate(), Err(QueryError::LongitudeOutOfRange(-180.5)));
    }

    #[test]
    fn degenerate_boxes_are_rejected() {
        let bbox = BoundingBox::new(-11.0, 16.0, -11.0, 17.0);
        assert_eq!(bbox.validate(), Err(QueryError::DegenerateBox));

        let bbox = BoundingBox::new(-11.0, 16.0, -12.0, 16.0);
        assert_eq!(bbox.validate(), Err(QueryError::DegenerateBox));
    }

    #[test]
    fn status_payload_matches_the_api_shape() {
        let status: ApiStatus =
            serde_json::from_str(r#"{"message": "Spatial Data API is running"}"#).unwrap();
        assert_eq!(status.message, "Spatial Data API is running");
    }
}
