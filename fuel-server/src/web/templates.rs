//! Askama templates for the web frontend.

use askama::Template;

use crate::domain::{Coordinate, Station, distance_km};

/// Index page with the search form.
#[derive(Template)]
#[template(path = "index.html")]
pub struct IndexTemplate {
    /// Warning shown above the form, e.g. for blank inputs.
    pub warning: Option<String>,
}

/// Results page listing the stations found along the route.
#[derive(Template)]
#[template(path = "results.html")]
pub struct ResultsTemplate {
    pub origin: String,
    pub destination: String,
    pub stations: Vec<StationView>,
}

/// Error page for failed searches.
#[derive(Template)]
#[template(path = "error.html")]
pub struct ErrorTemplate {
    pub message: String,
}

// ---------------------------------------------------------------
// View Models (for templates)
// ---------------------------------------------------------------

/// Station view model for the results template.
pub struct StationView {
    /// 1-based position in the rendered list.
    pub number: usize,
    pub name: String,
    pub address: String,
    pub rating: String,
    /// Distance from the previous listed station, formatted in km.
    /// `None` for the first station on the route.
    pub distance_from_previous_km: Option<String>,
}

impl StationView {
    /// Build view models from the finder's station list.
    ///
    /// Inserts the great-circle distance between consecutive entries.
    /// This is the distance between list neighbors, not distance
    /// along the route itself.
    pub fn from_stations(stations: &[Station]) -> Vec<StationView> {
        let mut views = Vec::with_capacity(stations.len());
        let mut previous: Option<Coordinate> = None;

        for (idx, station) in stations.iter().enumerate() {
            let distance_from_previous_km =
                previous.map(|p| format!("{:.1}", distance_km(p, station.location)));

            views.push(StationView {
                number: idx + 1,
                name: station.name.clone(),
                address: station.address_label().to_string(),
                rating: station.rating_label(),
                distance_from_previous_km,
            });

            previous = Some(station.location);
        }

        views
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn station(name: &str, lat: f64) -> Station {
        Station::new(name, Coordinate::new(lat, 0.0))
    }

    #[test]
    fn empty_list() {
        assert!(StationView::from_stations(&[]).is_empty());
    }

    #[test]
    fn first_station_has_no_distance() {
        let views = StationView::from_stations(&[station("Shell", 50.0)]);

        assert_eq!(views.len(), 1);
        assert_eq!(views[0].number, 1);
        assert!(views[0].distance_from_previous_km.is_none());
    }

    #[test]
    fn consecutive_distances_and_numbering() {
        // 0.01 degrees of latitude apart, ~1.1 km.
        let views = StationView::from_stations(&[
            station("Shell", 50.00),
            station("Aral", 50.01),
            station("Esso", 50.02),
        ]);

        assert_eq!(views.len(), 3);
        assert_eq!(views[1].number, 2);
        assert_eq!(views[1].distance_from_previous_km.as_deref(), Some("1.1"));
        assert_eq!(views[2].distance_from_previous_km.as_deref(), Some("1.1"));
    }

    #[test]
    fn unknown_fields_render_placeholders() {
        let views = StationView::from_stations(&[station("Shell", 50.0)]);

        assert_eq!(views[0].rating, "N/A");
        assert_eq!(views[0].address, "No address available");
    }

    #[test]
    fn templates_render() {
        let index = IndexTemplate {
            warning: Some("Please enter both origin and destination.".to_string()),
        };
        assert!(index.render().unwrap().contains("origin"));

        let results = ResultsTemplate {
            origin: "Munich".to_string(),
            destination: "Berlin".to_string(),
            stations: StationView::from_stations(&[station("Shell", 50.0)]),
        };
        let html = results.render().unwrap();
        assert!(html.contains("Shell"));
        assert!(html.contains("First station on the route."));

        let error = ErrorTemplate {
            message: "Failed to fetch route.".to_string(),
        };
        assert!(error.render().unwrap().contains("Failed to fetch route."));
    }

    #[test]
    fn empty_results_render_none_found() {
        let results = ResultsTemplate {
            origin: "Munich".to_string(),
            destination: "Berlin".to_string(),
            stations: Vec::new(),
        };
        let html = results.render().unwrap();
        assert!(html.contains("No gas stations found along the route."));
    }
}
