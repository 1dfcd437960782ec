use crate::domain::city::City;
use std::fmt;

/// Upper bound on the number of cities a country holds.
pub const MAX_CITIES: usize = 1000;

/// A country and its ordered collection of cities.
///
/// Insertion order is the canonical order for every scan. Names are not
/// required to be unique; lookups always bind to the first occurrence.
/// Every `City` handed out is a clone, so callers can never alias the
/// internal collection.
#[derive(Debug, Clone)]
pub struct Country {
    name: String,
    cities: Vec<City>,
}

impl Country {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            cities: Vec::new(),
        }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn len(&self) -> usize {
        self.cities.len()
    }

    pub fn is_empty(&self) -> bool {
        self.cities.is_empty()
    }

    /// Cloned snapshot of the held cities, in insertion order.
    pub fn cities(&self) -> Vec<City> {
        self.cities.clone()
    }

    /// Appends a new city unless the country is at capacity. Returns false
    /// and leaves the collection untouched when the limit is reached.
    /// Duplicate names are allowed.
    #[allow(clippy::too_many_arguments)]
    pub fn add_city(
        &mut self,
        name: impl Into<String>,
        center_x: f64,
        center_y: f64,
        station_x: f64,
        station_y: f64,
        residents: i64,
        neighborhoods: i32,
    ) -> bool {
        let name = name.into();
        if self.cities.len() >= MAX_CITIES {
            tracing::warn!(
                country = %self.name,
                city = %name,
                "city limit of {MAX_CITIES} reached, rejecting"
            );
            return false;
        }
        self.cities.push(City::new(
            name,
            center_x,
            center_y,
            station_x,
            station_y,
            residents,
            neighborhoods,
        ));
        true
    }

    /// Merges the first city named `name1` with the first named `name2`.
    ///
    /// One of the two entries is kept and the other removed: with equal
    /// resident counts the entry matching `name1` is kept, otherwise the one
    /// at the smaller index. The returned city is a copy of the kept entry
    /// with the combined name `"{name1}-{name2}"`, summed residents and
    /// neighborhoods, the midpoint of both centers, and the removed entry's
    /// station when that station lies strictly left of the kept one. The
    /// removed entry is deleted with the order of the rest preserved; the
    /// kept entry itself stays as it was.
    ///
    /// Returns `None` without touching the collection when either name is
    /// missing.
    pub fn unify_cities(&mut self, name1: &str, name2: &str) -> Option<City> {
        let mut index1 = None;
        let mut index2 = None;
        for (i, city) in self.cities.iter().enumerate() {
            if index1.is_none() && city.name() == name1 {
                index1 = Some(i);
            } else if index2.is_none() && city.name() == name2 {
                index2 = Some(i);
            }
            if index1.is_some() && index2.is_some() {
                break;
            }
        }
        let (index1, index2) = (index1?, index2?);

        let (keep, remove) =
            if self.cities[index1].residents() == self.cities[index2].residents() {
                (index1, index2)
            } else {
                (index1.min(index2), index1.max(index2))
            };

        let mut unified = self.cities[keep].clone();
        unified.set_name(format!("{name1}-{name2}"));
        unified.set_residents(
            (self.cities[index1].residents() + self.cities[index2].residents()) as i64,
        );
        unified.set_neighborhoods(
            (self.cities[index1].neighborhoods() + self.cities[index2].neighborhoods()) as i32,
        );
        unified.set_center(
            self.cities[index1]
                .center()
                .middle(&self.cities[index2].center()),
        );

        // Westernmost of the two stations wins; ties keep the kept entry's.
        if self.cities[remove]
            .station()
            .is_left(&self.cities[keep].station())
        {
            unified.set_station(self.cities[remove].station());
        }

        tracing::debug!(
            country = %self.name,
            unified = %unified.name(),
            removed = %self.cities[remove].name(),
            "unified two cities"
        );
        self.cities.remove(remove);
        Some(unified)
    }

    /// Total residents across all cities; 0 for an empty country.
    pub fn num_of_residents(&self) -> u64 {
        self.cities.iter().map(|city| city.residents()).sum()
    }

    /// Greedy two-pointer estimate of the largest center-to-center distance.
    ///
    /// Starting from the two ends of the insertion order, the scan advances
    /// the left pointer when the next-left pair beats the current pair,
    /// then retreats the right pointer when the previous-right pair beats
    /// the running value, and stops once the pointers meet or neither move
    /// improves anything. This is a heuristic: for some orderings it misses
    /// the true maximum pair. Use [`Country::max_pairwise_distance`] when
    /// the exact answer matters.
    ///
    /// Returns 0.0 with fewer than 2 cities.
    pub fn longest_distance(&self) -> f64 {
        if self.cities.len() < 2 {
            return 0.0;
        }

        let center = |i: usize| self.cities[i].center();
        let mut max_distance = 0.0;
        let mut left = 0;
        let mut right = self.cities.len() - 1;

        while left < right {
            max_distance = center(left).distance(&center(right));
            let mut moved = false;

            let left_next = center(left + 1).distance(&center(right));
            if max_distance < left_next {
                max_distance = left_next;
                left += 1;
                moved = true;
            }

            let right_prev = center(left).distance(&center(right - 1));
            if max_distance < right_prev {
                max_distance = right_prev;
                right -= 1;
                moved = true;
            }

            if !moved {
                break;
            }
        }
        max_distance
    }

    /// Exact largest center-to-center distance over all pairs. Quadratic,
    /// unlike the greedy [`Country::longest_distance`] scan.
    pub fn max_pairwise_distance(&self) -> f64 {
        let mut max_distance = 0.0;
        for (i, a) in self.cities.iter().enumerate() {
            for b in &self.cities[i + 1..] {
                let d = a.center().distance(&b.center());
                if d > max_distance {
                    max_distance = d;
                }
            }
        }
        max_distance
    }

    /// Lists every city whose center lies strictly north of the named city's
    /// center, walking the collection from both ends inward. Returns a
    /// descriptive message when the reference city is missing or nothing
    /// lies north of it.
    pub fn cities_north_of(&self, name: &str) -> String {
        let Some(target) = self.cities.iter().position(|city| city.name() == name) else {
            return format!("There is no city with the name {name}");
        };
        let target_center = self.cities[target].center();

        let mut listing = format!("The cities north of {name} are:\n\n");
        let mut found = false;
        let mut left = 0;
        let mut right = self.cities.len() - 1;

        while left <= right {
            if left != target && self.cities[left].center().is_above(&target_center) {
                listing.push_str(&self.cities[left].to_string());
                found = true;
            }
            left += 1;

            if left > right {
                break;
            }

            if right != target && self.cities[right].center().is_above(&target_center) {
                listing.push_str(&self.cities[right].to_string());
                found = true;
            }
            right -= 1;
        }

        if found {
            listing
        } else {
            format!("There are no cities north of {name}")
        }
    }

    /// The city whose center lies south of every other candidate, scanning
    /// in insertion order with the first city as the initial candidate.
    /// `None` for an empty country.
    pub fn southernmost_city(&self) -> Option<City> {
        let mut southernmost = self.cities.first()?;
        for city in &self.cities[1..] {
            if city.center().is_under(&southernmost.center()) {
                southernmost = city;
            }
        }
        Some(southernmost.clone())
    }
}

impl fmt::Display for Country {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "Cities of {}:", self.name)?;
        writeln!(f)?;
        for (i, city) in self.cities.iter().enumerate() {
            write!(f, "{city}")?;
            if i + 1 < self.cities.len() {
                writeln!(f)?;
            }
        }
        Ok(())
    }
}
