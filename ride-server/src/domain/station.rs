//! Canonical stations.

use std::fmt;

/// A canonical subway station and the lines that serve it.
///
/// Stations come from the registry file and are never modified once loaded.
#[derive(Clone, PartialEq, Eq)]
pub struct Station {
    name: String,
    lines: Vec<String>,
}

impl Station {
    /// Create a station served by no lines yet.
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            lines: Vec::new(),
        }
    }

    /// Record that `line` serves this station. Duplicates are ignored.
    pub(crate) fn add_line(&mut self, line: &str) {
        if !self.lines.iter().any(|l| l == line) {
            self.lines.push(line.to_string());
        }
    }

    /// The canonical station name.
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Lines serving this station, in registry line order.
    pub fn lines(&self) -> &[String] {
        &self.lines
    }

    /// Whether `line` serves this station.
    pub fn is_served_by(&self, line: &str) -> bool {
        self.lines.iter().any(|l| l == line)
    }
}

impl fmt::Debug for Station {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Station({} [{}])", self.name, self.lines.join(","))
    }
}

impl fmt::Display for Station {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.name)
    }
}
