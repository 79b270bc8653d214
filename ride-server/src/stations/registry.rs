//! Canonical station registry.

use std::collections::HashMap;
use std::fmt;
use std::path::Path;

use serde::de::{Deserialize, Deserializer, MapAccess, Visitor};
use serde::Serialize;
use tracing::{info, warn};

use crate::domain::{Confidence, Station};

use super::error::StationError;
use super::matcher::{MatchCandidate, find_matching_stations};

/// Lines mapped to the stations they serve, in travel order.
///
/// Lines keep the order they were inserted or appeared in the file, which
/// decides the registry's first-seen station order.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct LineMap(Vec<(String, Vec<String>)>);

impl LineMap {
    pub fn new() -> Self {
        Self::default()
    }

    /// Set a line's stations. A line already present keeps its position.
    pub fn insert(&mut self, line: String, stations: Vec<String>) {
        match self.0.iter_mut().find(|(l, _)| *l == line) {
            Some((_, existing)) => *existing = stations,
            None => self.0.push((line, stations)),
        }
    }

    /// Stations on `line`, if it is known.
    pub fn get(&self, line: &str) -> Option<&[String]> {
        self.0
            .iter()
            .find(|(l, _)| l == line)
            .map(|(_, stations)| stations.as_slice())
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &[String])> {
        self.0
            .iter()
            .map(|(line, stations)| (line.as_str(), stations.as_slice()))
    }
}

impl<'de> Deserialize<'de> for LineMap {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        struct LineMapVisitor;

        impl<'de> Visitor<'de> for LineMapVisitor {
            type Value = LineMap;

            fn expecting(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
                formatter.write_str("a map of line names to station lists")
            }

            fn visit_map<A>(self, mut access: A) -> Result<LineMap, A::Error>
            where
                A: MapAccess<'de>,
            {
                let mut lines = LineMap::new();
                while let Some((line, stations)) = access.next_entry::<String, Vec<String>>()? {
                    lines.insert(line, stations);
                }
                Ok(lines)
            }
        }

        deserializer.deserialize_map(LineMapVisitor)
    }
}

/// A suggested station for some free text, with the lines serving it.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct StationSuggestion {
    pub station_name: String,
    pub confidence: Confidence,
    pub lines: Vec<String>,
}

/// Read-only registry of subway lines and stations.
///
/// Loaded once at startup and shared between requests without locking.
/// An empty registry is valid: it means no stations are known.
#[derive(Debug, Clone, Default)]
pub struct StationRegistry {
    lines: LineMap,
    /// Unique stations in first-seen order (lines in file order).
    stations: Vec<Station>,
    by_name: HashMap<String, usize>,
}

impl StationRegistry {
    /// Create an empty registry.
    pub fn empty() -> Self {
        Self::default()
    }

    /// Load the registry from a JSON file of the form
    /// `{ "<line>": ["<station>", ...] }`.
    ///
    /// A missing, unreadable or malformed file gives an empty registry; the
    /// problem is logged rather than returned.
    pub fn load(path: impl AsRef<Path>) -> Self {
        let path = path.as_ref();
        match Self::try_load(path) {
            Ok(registry) => {
                info!(
                    path = %path.display(),
                    lines = registry.lines.len(),
                    stations = registry.len(),
                    "loaded station registry"
                );
                registry
            }
            Err(e) => {
                warn!(error = %e, "station registry unavailable, continuing with no stations");
                Self::empty()
            }
        }
    }

    /// Load the registry from a JSON file, reporting failures.
    pub fn try_load(path: impl AsRef<Path>) -> Result<Self, StationError> {
        let path = path.as_ref();
        let contents = std::fs::read_to_string(path).map_err(|source| StationError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        let lines: LineMap = serde_json::from_str(&contents).map_err(|e| StationError::Json {
            path: path.to_path_buf(),
            message: e.to_string(),
        })?;
        Ok(Self::from_lines(lines))
    }

    /// Build a registry from an in-memory line map.
    pub fn from_lines(lines: LineMap) -> Self {
        let mut stations: Vec<Station> = Vec::new();
        let mut by_name: HashMap<String, usize> = HashMap::new();

        for (line, names) in lines.iter() {
            for name in names.iter().filter(|n| !n.trim().is_empty()) {
                let idx = *by_name.entry(name.clone()).or_insert_with(|| {
                    stations.push(Station::new(name.clone()));
                    stations.len() - 1
                });
                stations[idx].add_line(line);
            }
        }

        Self {
            lines,
            stations,
            by_name,
        }
    }

    /// The line -> stations mapping as loaded.
    pub fn lines(&self) -> &LineMap {
        &self.lines
    }

    /// Every known station, each once.
    pub fn all_stations(&self) -> &[Station] {
        &self.stations
    }

    /// Look up a station by its canonical name.
    pub fn get(&self, name: &str) -> Option<&Station> {
        self.by_name.get(name).map(|&idx| &self.stations[idx])
    }

    /// Lines serving the named station; empty if the station is unknown.
    pub fn lines_for(&self, name: &str) -> &[String] {
        self.get(name).map(Station::lines).unwrap_or_default()
    }

    /// Number of unique stations.
    pub fn len(&self) -> usize {
        self.stations.len()
    }

    /// Whether no stations are known.
    pub fn is_empty(&self) -> bool {
        self.stations.is_empty()
    }

    /// Match free text against every known station.
    pub fn find_matching(&self, raw: &str) -> Vec<MatchCandidate> {
        find_matching_stations(raw, self.stations.iter().map(Station::name))
    }

    /// Suggest stations for free text, with the lines serving each.
    pub fn suggest(&self, raw: &str) -> Vec<StationSuggestion> {
        self.find_matching(raw)
            .into_iter()
            .map(|m| StationSuggestion {
                lines: self.lines_for(&m.station_name).to_vec(),
                station_name: m.station_name,
                confidence: m.confidence,
            })
            .collect()
    }
}
