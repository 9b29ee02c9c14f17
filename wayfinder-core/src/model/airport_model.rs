use hashbrown::HashMap;

use super::{Location, NavigationGraph, Poi, PoiCategory, Zone};

/// Fallback start position when a terminal has no arrivals zone
const DEFAULT_ARRIVAL_POSITION: (f64, f64) = (100.0, 100.0);

/// Read-only airport data shared by every request: the POI catalog, the zone
/// table and the navigation graph.
#[derive(Debug, Clone)]
pub struct AirportModel {
    /// Catalog in its original order, "first match" lookups depend on it
    pub pois: Vec<Poi>,
    pub zones: Vec<Zone>,
    pub graph: NavigationGraph,
    poi_index: HashMap<String, usize>,
    zone_index: HashMap<String, usize>,
}

impl AirportModel {
    pub(crate) fn new(pois: Vec<Poi>, zones: Vec<Zone>, graph: NavigationGraph) -> Self {
        let poi_index = pois
            .iter()
            .enumerate()
            .map(|(idx, poi)| (poi.id.clone(), idx))
            .collect();
        let zone_index = zones
            .iter()
            .enumerate()
            .map(|(idx, zone)| (zone.id.clone(), idx))
            .collect();

        Self {
            pois,
            zones,
            graph,
            poi_index,
            zone_index,
        }
    }

    pub fn poi(&self, id: &str) -> Option<&Poi> {
        self.poi_index.get(id).map(|&idx| &self.pois[idx])
    }

    pub fn zone(&self, id: &str) -> Option<&Zone> {
        self.zone_index.get(id).map(|&idx| &self.zones[idx])
    }

    pub fn zone_location(&self, zone_id: &str) -> Option<Location> {
        self.zone(zone_id).map(Zone::location)
    }

    /// Location of a terminal-scoped zone such as `t1-baggage`
    pub fn terminal_zone_location(&self, terminal: &str, kind: &str) -> Option<Location> {
        self.zone_location(&terminal_zone_id(terminal, kind))
    }

    /// Where a traveler arriving at `terminal` starts walking
    pub fn arrival_location(&self, terminal: &str) -> Location {
        self.terminal_zone_location(terminal, "arrivals")
            .unwrap_or_else(|| {
                let (x, y) = DEFAULT_ARRIVAL_POSITION;
                Location::new(x, y, terminal)
            })
    }

    /// Resolves a gate code such as `B10`.
    ///
    /// A gate present in the catalog is used as is. Otherwise the pier letter
    /// selects the `*-gates-<pier>` zone and the gate number spreads gates
    /// around the zone centre. Codes are case-sensitive: anything other than a
    /// capital letter followed by digits resolves to `None`.
    pub fn gate_location(&self, gate_code: &str) -> Option<Location> {
        let (pier, number) = parse_gate_code(gate_code)?;

        if let Some(gate) = self
            .poi(gate_code)
            .filter(|poi| poi.category == PoiCategory::Gate)
        {
            return Some(gate.location());
        }

        let suffix = format!("-gates-{}", pier.to_ascii_lowercase());
        let zone = self.zones.iter().find(|zone| zone.id.ends_with(&suffix))?;
        Some(Location::new(
            zone.x + f64::from(number % 5) * 5.0,
            zone.y + f64::from(number / 5) * 3.0,
            zone.terminal.as_str(),
        ))
    }

    pub fn poi_count(&self) -> usize {
        self.pois.len()
    }

    pub fn zone_count(&self) -> usize {
        self.zones.len()
    }

    /// Short human readable description of the loaded data
    pub fn summary(&self) -> String {
        let mut terminals: Vec<&str> = self.zones.iter().map(|z| z.terminal.as_str()).collect();
        terminals.sort_unstable();
        terminals.dedup();

        format!(
            "{} POIs, {} zones in terminals [{}], navigation graph with {} nodes and {} connections",
            self.poi_count(),
            self.zone_count(),
            terminals.join(", "),
            self.graph.node_count(),
            self.graph.connection_count()
        )
    }
}

/// Zone id convention: lowercase terminal, dash, zone kind (`t2-security`)
pub fn terminal_zone_id(terminal: &str, kind: &str) -> String {
    format!("{}-{kind}", terminal.to_lowercase())
}

fn parse_gate_code(code: &str) -> Option<(char, u32)> {
    let mut chars = code.chars();
    let pier = chars.next().filter(char::is_ascii_uppercase)?;
    let digits = chars.as_str();
    if digits.is_empty() || !digits.bytes().all(|b| b.is_ascii_digit()) {
        return None;
    }
    Some((pier, digits.parse().ok()?))
}
