use std::collections::HashMap;
use std::io::Read;
use std::path::Path;

use serde::Deserialize;

/// Road distance used when a city pair is not in the table.
pub const FALLBACK_DISTANCE_KM: f64 = 1000.0;

const BUILTIN_DISTANCES: &[(&str, &str, f64)] = &[
    ("mumbai", "delhi", 1400.0),
    ("mumbai", "bangalore", 980.0),
    ("mumbai", "chennai", 1340.0),
    ("mumbai", "pune", 150.0),
    ("mumbai", "jaipur", 1150.0),
    ("delhi", "bangalore", 2150.0),
    ("delhi", "chennai", 2180.0),
    ("delhi", "pune", 1450.0),
    ("delhi", "jaipur", 280.0),
    ("bangalore", "chennai", 350.0),
    ("bangalore", "pune", 840.0),
    ("bangalore", "jaipur", 2000.0),
    ("chennai", "pune", 1180.0),
    ("chennai", "jaipur", 2050.0),
    ("pune", "jaipur", 1200.0),
];

#[derive(Debug, thiserror::Error)]
pub enum DistanceTableError {
    #[error("failed to read distance table: {0}")]
    Io(#[from] std::io::Error),
    #[error("invalid distance table CSV: {0}")]
    Csv(#[from] csv::Error),
    #[error("distance from '{from}' to '{to}' must be a positive number (got {distance_km})")]
    InvalidDistance {
        from: String,
        to: String,
        distance_km: f64,
    },
}

/// Case-insensitive lookup of road distances between city pairs, in kilometres.
#[derive(Debug, Clone, PartialEq)]
pub struct DistanceTable {
    distances: HashMap<(String, String), f64>,
}

impl Default for DistanceTable {
    fn default() -> Self {
        Self::builtin()
    }
}

impl DistanceTable {
    /// The six-metro table shipped with the client.
    pub fn builtin() -> Self {
        let mut table = Self {
            distances: HashMap::new(),
        };
        for (from, to, distance_km) in BUILTIN_DISTANCES {
            table.insert_pair(from, to, *distance_km);
        }
        table
    }

    pub fn from_path<P: AsRef<Path>>(path: P) -> Result<Self, DistanceTableError> {
        let file = std::fs::File::open(path)?;
        Self::from_csv_reader(file)
    }

    /// Reads `from,to,distance_km` rows. Each row also fills the reverse direction unless the
    /// file lists that direction itself.
    pub fn from_csv_reader<R: Read>(reader: R) -> Result<Self, DistanceTableError> {
        let mut csv_reader = csv::ReaderBuilder::new()
            .trim(csv::Trim::All)
            .from_reader(reader);
        let mut explicit = HashMap::new();

        for row in csv_reader.deserialize::<DistanceRow>() {
            let row = row?;
            if !row.distance_km.is_finite() || row.distance_km <= 0.0 {
                return Err(DistanceTableError::InvalidDistance {
                    from: row.from,
                    to: row.to,
                    distance_km: row.distance_km,
                });
            }
            explicit.insert(
                (normalize_city(&row.from), normalize_city(&row.to)),
                row.distance_km,
            );
        }

        let mut distances = explicit.clone();
        for ((from, to), distance_km) in explicit {
            distances.entry((to, from)).or_insert(distance_km);
        }

        Ok(Self { distances })
    }

    pub fn distance(&self, from: &str, to: &str) -> Option<f64> {
        self.distances
            .get(&(normalize_city(from), normalize_city(to)))
            .copied()
    }

    /// Distance for the pair, or [`FALLBACK_DISTANCE_KM`] when the pair is unknown.
    pub fn distance_or_fallback(&self, from: &str, to: &str) -> (f64, bool) {
        match self.distance(from, to) {
            Some(distance_km) => (distance_km, false),
            None => (FALLBACK_DISTANCE_KM, true),
        }
    }

    pub fn len(&self) -> usize {
        self.distances.len()
    }

    pub fn is_empty(&self) -> bool {
        self.distances.is_empty()
    }

    fn insert_pair(&mut self, from: &str, to: &str, distance_km: f64) {
        let from = normalize_city(from);
        let to = normalize_city(to);
        self.distances.insert((to.clone(), from.clone()), distance_km);
        self.distances.insert((from, to), distance_km);
    }
}

#[derive(Debug, Deserialize)]
struct DistanceRow {
    from: String,
    to: String,
    distance_km: f64,
}

fn normalize_city(value: &str) -> String {
    let cleaned = value.replace(['\u{feff}', '\u{200b}'], "");
    let collapsed = cleaned.split_whitespace().collect::<Vec<_>>().join(" ");
    collapsed.to_lowercase()
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Cursor;

    #[test]
    fn builtin_lookup_ignores_case_and_spacing() {
        let table = DistanceTable::builtin();
        assert_eq!(table.distance("Mumbai", "DELHI"), Some(1400.0));
        assert_eq!(table.distance("  delhi ", "mumbai"), Some(1400.0));
        assert_eq!(table.distance("Bangalore", "Chennai"), Some(350.0));
        assert_eq!(table.len(), BUILTIN_DISTANCES.len() * 2);
    }

    #[test]
    fn unknown_pairs_use_the_fallback_distance() {
        let table = DistanceTable::builtin();
        assert_eq!(
            table.distance_or_fallback("Kochi", "Delhi"),
            (FALLBACK_DISTANCE_KM, true)
        );
        // Same-city trips are not in the table either.
        assert_eq!(
            table.distance_or_fallback("Pune", "pune"),
            (FALLBACK_DISTANCE_KM, true)
        );
        assert_eq!(table.distance_or_fallback("pune", "jaipur"), (1200.0, false));
    }

    #[test]
    fn csv_rows_fill_reverse_direction_without_overriding_it() {
        let csv = "from,to,distance_km\n\
                   Kochi, Goa ,720\n\
                   Goa,Kochi,705\n\
                   Surat,Indore,480\n";
        let table = DistanceTable::from_csv_reader(Cursor::new(csv)).expect("table parses");

        assert_eq!(table.distance("kochi", "goa"), Some(720.0));
        assert_eq!(table.distance("goa", "kochi"), Some(705.0));
        assert_eq!(table.distance("indore", "surat"), Some(480.0));
        assert_eq!(table.distance("mumbai", "delhi"), None);
    }

    #[test]
    fn csv_rejects_non_positive_distances() {
        let csv = "from,to,distance_km\nKochi,Goa,0\n";
        let err = DistanceTable::from_csv_reader(Cursor::new(csv)).expect_err("zero rejected");
        assert!(matches!(err, DistanceTableError::InvalidDistance { .. }));

        let csv = "from,to,distance_km\nKochi,Goa,far\n";
        let err = DistanceTable::from_csv_reader(Cursor::new(csv)).expect_err("text rejected");
        assert!(matches!(err, DistanceTableError::Csv(_)));
    }
}
