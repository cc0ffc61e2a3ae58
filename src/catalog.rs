//! Static module catalog and map zone geometry.

/// A draggable grid module. Loaded once, never mutated.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct ModuleDef {
    pub id: &'static str,
    pub name: &'static str,
    /// Category label shown under the module name.
    pub kind: &'static str,
    /// Highlight color used for the zone and node glow.
    pub color: &'static str,
    /// Short fallback glyph text.
    pub glyph: &'static str,
    pub zone_id: &'static str,
    pub description: &'static str,
}

impl ModuleDef {
    /// Icon character rendered inside the node body.
    pub fn icon(&self) -> &'static str {
        match self.id {
            "off_grid" => "⏻",
            "maintenance" => "⚙",
            "overload" => "⚠",
            "heavy_usage" => "〰",
            "industrial" => "🏭",
            "corporate" => "▤",
            "renewables" => "⚡",
            "ev_grid" => "🔌",
            _ => "⚡",
        }
    }

    /// First word of the display name, used for the dock label.
    pub fn short_name(&self) -> &'static str {
        self.name.split(' ').next().unwrap_or(self.name)
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Zone {
    pub id: &'static str,
    pub name: &'static str,
    /// SVG path in the 1100x1100 map viewbox.
    pub path: &'static str,
}

pub const MAP_SIZE: f64 = 1100.0;

pub const MODULES: &[ModuleDef] = &[
    ModuleDef {
        id: "off_grid",
        name: "Off Grid Sector",
        kind: "Outage",
        color: "#ff3b30",
        glyph: "OFF",
        zone_id: "rr_nagar",
        description: "Feeder isolated from the network; supply restoration pending.",
    },
    ModuleDef {
        id: "maintenance",
        name: "Maintenance Window",
        kind: "Planned Work",
        color: "#ffcc00",
        glyph: "MNT",
        zone_id: "west",
        description: "Scheduled line and transformer servicing with controlled shutdowns.",
    },
    ModuleDef {
        id: "overload",
        name: "Overload Alert",
        kind: "Fault",
        color: "#ff9500",
        glyph: "OVL",
        zone_id: "south",
        description: "Distribution transformers running above rated capacity.",
    },
    ModuleDef {
        id: "heavy_usage",
        name: "Heavy Usage",
        kind: "Demand",
        color: "#af52de",
        glyph: "HVY",
        zone_id: "east",
        description: "Peak residential and commercial demand on the eastern feeders.",
    },
    ModuleDef {
        id: "industrial",
        name: "Industrial Load",
        kind: "Demand",
        color: "#5ac8fa",
        glyph: "IND",
        zone_id: "dasarahalli",
        description: "High-tension industrial consumers in the Peenya belt.",
    },
    ModuleDef {
        id: "corporate",
        name: "Corporate Tech Parks",
        kind: "Demand",
        color: "#007aff",
        glyph: "CORP",
        zone_id: "mahadevapura",
        description: "Data centers and tech parks along the Whitefield corridor.",
    },
    ModuleDef {
        id: "renewables",
        name: "Renewables Feed",
        kind: "Generation",
        color: "#34c759",
        glyph: "SOL",
        zone_id: "yelahanka",
        description: "Rooftop and utility solar injection into the northern grid.",
    },
    ModuleDef {
        id: "ev_grid",
        name: "EV Charging Grid",
        kind: "Infrastructure",
        color: "#00f0ff",
        glyph: "EV",
        zone_id: "bommanahalli",
        description: "Public EV charging stations and their load profile.",
    },
];

pub const ZONES: &[Zone] = &[
    Zone {
        id: "yelahanka",
        name: "Yelahanka",
        path: "M 480,50 L 580,80 L 650,120 L 720,250 L 680,350 L 600,400 L 450,380 L 350,300 L 320,150 Z",
    },
    Zone {
        id: "dasarahalli",
        name: "Dasarahalli",
        path: "M 150,250 L 350,300 L 320,450 L 180,420 L 100,320 Z",
    },
    Zone {
        id: "mahadevapura",
        name: "Mahadevapura",
        path: "M 680,350 L 850,380 L 980,520 L 920,750 L 750,780 L 620,650 L 620,450 L 600,400 Z",
    },
    Zone {
        id: "east",
        name: "East",
        path: "M 450,380 L 600,400 L 620,450 L 620,650 L 550,680 L 480,600 Z",
    },
    Zone {
        id: "west",
        name: "West",
        path: "M 320,450 L 450,380 L 480,600 L 380,650 L 250,500 Z",
    },
    Zone {
        id: "south",
        name: "South",
        path: "M 480,600 L 550,680 L 620,650 L 750,780 L 520,820 L 380,650 Z",
    },
    Zone {
        id: "rr_nagar",
        name: "RR Nagar",
        path: "M 120,520 L 250,500 L 380,650 L 400,800 L 250,880 L 100,750 Z",
    },
    Zone {
        id: "bommanahalli",
        name: "Bommanahalli",
        path: "M 400,800 L 520,820 L 750,780 L 820,920 L 550,1020 L 300,900 Z",
    },
];

pub fn find_module(id: &str) -> Option<&'static ModuleDef> {
    MODULES.iter().find(|m| m.id == id)
}

pub fn find_zone(id: &str) -> Option<&'static Zone> {
    ZONES.iter().find(|z| z.id == id)
}
