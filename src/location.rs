use serde::{Deserialize, Serialize};

#[derive(Debug, Default, Clone, Copy, Serialize, Deserialize, PartialEq)]
pub struct Location {
    pub latitude: f64,
    pub longitude: f64,
}

impl Location {
    pub fn new(lat: f64, lon: f64) -> Location {
        Location {
            latitude: lat,
            longitude: lon,
        }
    }

    /// A station only makes it onto the map with finite coordinates.
    pub fn is_mappable(&self) -> bool {
        self.latitude.is_finite() && self.longitude.is_finite()
    }

    pub fn centroid<I>(locations: I) -> Option<Location>
    where
        I: IntoIterator<Item = Location>,
    {
        let (count, lat_sum, lon_sum) = locations
            .into_iter()
            .fold((0usize, 0.0, 0.0), |(count, lat_sum, lon_sum), loc| {
                (count + 1, lat_sum + loc.latitude, lon_sum + loc.longitude)
            });

        if count == 0 {
            None
        } else {
            Some(Location::new(
                lat_sum / count as f64,
                lon_sum / count as f64,
            ))
        }
    }
}
