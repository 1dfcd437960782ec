use crate::domain::point::Point;
use std::fmt;

/// An urban record: a name, two coordinates (center and central station),
/// a resident count and a neighborhood count.
///
/// Out-of-range numeric input is clamped rather than rejected: residents
/// never go below 0 and neighborhoods never below 1. This holds on
/// construction and on every setter, so a `City` can never be observed in
/// an invalid state.
#[derive(Debug, Clone, PartialEq)]
pub struct City {
    name: String,
    center: Point,
    station: Point,
    residents: u64,
    neighborhoods: u32,
}

fn clamp_residents(residents: i64) -> u64 {
    residents.max(0) as u64
}

fn clamp_neighborhoods(neighborhoods: i32) -> u32 {
    neighborhoods.max(1) as u32
}

impl City {
    /// Builds a city from raw coordinates. Negative residents clamp to 0,
    /// neighborhoods below 1 clamp to 1; construction never fails.
    pub fn new(
        name: impl Into<String>,
        center_x: f64,
        center_y: f64,
        station_x: f64,
        station_y: f64,
        residents: i64,
        neighborhoods: i32,
    ) -> Self {
        Self {
            name: name.into(),
            center: Point::new(center_x, center_y),
            station: Point::new(station_x, station_y),
            residents: clamp_residents(residents),
            neighborhoods: clamp_neighborhoods(neighborhoods),
        }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn center(&self) -> Point {
        self.center
    }

    pub fn station(&self) -> Point {
        self.station
    }

    pub fn residents(&self) -> u64 {
        self.residents
    }

    pub fn neighborhoods(&self) -> u32 {
        self.neighborhoods
    }

    pub fn set_name(&mut self, name: impl Into<String>) {
        self.name = name.into();
    }

    pub fn set_center(&mut self, center: Point) {
        self.center = center;
    }

    pub fn set_station(&mut self, station: Point) {
        self.station = station;
    }

    /// Negative values clamp to 0.
    pub fn set_residents(&mut self, residents: i64) {
        self.residents = clamp_residents(residents);
    }

    /// Values below 1 clamp to 1.
    pub fn set_neighborhoods(&mut self, neighborhoods: i32) {
        self.neighborhoods = clamp_neighborhoods(neighborhoods);
    }

    /// Shifts the central station in place; coordinates are unbounded.
    pub fn move_station(&mut self, dx: f64, dy: f64) {
        self.station.translate(dx, dy);
    }

    /// Adds `delta` to the resident count. If the result would be negative
    /// the count clamps to 0 and the call reports failure.
    pub fn add_residents(&mut self, delta: i64) -> bool {
        let updated = self.residents as i64 + delta;
        if updated >= 0 {
            self.residents = updated as u64;
            true
        } else {
            self.residents = 0;
            false
        }
    }

    /// A new settlement at a shifted location: both points translated by
    /// (dx, dy), residents reset to 0 and neighborhoods to 1. Demographics
    /// are not carried over.
    pub fn relocated(&self, new_name: impl Into<String>, dx: f64, dy: f64) -> City {
        let mut center = self.center;
        center.translate(dx, dy);
        let mut station = self.station;
        station.translate(dx, dy);
        City::new(new_name, center.x, center.y, station.x, station.y, 0, 1)
    }

    /// Euclidean distance between this city's own center and station.
    pub fn center_to_station_distance(&self) -> f64 {
        self.center.distance(&self.station)
    }
}

impl fmt::Display for City {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "City Name: {}", self.name)?;
        writeln!(f, "City Center: {}", self.center)?;
        writeln!(f, "Central Station: {}", self.station)?;
        writeln!(f, "Number of Residents: {}", self.residents)?;
        writeln!(f, "Number of Neighborhoods: {}", self.neighborhoods)
    }
}
