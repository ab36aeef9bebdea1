//! Catalog of HUD elements and selection presets

/// A single overlay metric the HUD can display
pub struct HudElement {
    /// Key as consumed by the runtime in MTL_HUD_ELEMENTS
    pub key: &'static str,
    /// Human-readable label for the element list
    pub label: &'static str,
}

/// All known HUD elements, in display order
pub const ELEMENTS: &[HudElement] = &[
    HudElement { key: "device", label: "Device" },
    HudElement { key: "rosetta", label: "Rosetta Info" },
    HudElement { key: "layersize", label: "Layer Size & Composition" },
    HudElement { key: "memory", label: "Memory" },
    HudElement { key: "fps", label: "FPS" },
    HudElement { key: "frameinterval", label: "Frame Interval" },
    HudElement { key: "frameintervalhistogram", label: "Frame Interval Histogram" },
    HudElement { key: "metalcpu", label: "Metal CPU" },
    HudElement { key: "gputimeline", label: "GPU Timeline" },
    HudElement { key: "shaders", label: "Shader Compilation" },
    HudElement { key: "framenumber", label: "Frame Number" },
    HudElement { key: "disk", label: "Disk Usage" },
    HudElement { key: "frameintervalgraph", label: "Frame Interval Graph" },
    HudElement { key: "presentdelay", label: "Present Delay" },
    HudElement { key: "gputime", label: "GPU Time" },
    HudElement { key: "thermal", label: "Thermal State" },
    HudElement { key: "fpsgraph", label: "FPS Graph" },
    HudElement { key: "layerscale", label: "Layer Scale" },
    HudElement { key: "refreshrate", label: "Refresh Rate" },
    HudElement { key: "gamemode", label: "Game Mode" },
    HudElement { key: "client", label: "Client Process" },
];

/// A named element selection the user can apply with one click
pub struct Preset {
    pub name: &'static str,
    pub elements: &'static [&'static str],
}

pub const PRESETS: &[Preset] = &[
    Preset {
        name: "FPS Only",
        elements: &["fps"],
    },
    Preset {
        name: "Full",
        elements: &[
            "device",
            "rosetta",
            "layersize",
            "memory",
            "fps",
            "frameinterval",
            "frameintervalhistogram",
            "metalcpu",
            "gputimeline",
            "shaders",
            "framenumber",
            "disk",
            "frameintervalgraph",
            "presentdelay",
            "gputime",
            "thermal",
            "fpsgraph",
            "layerscale",
            "refreshrate",
            "gamemode",
            "client",
        ],
    },
    Preset {
        name: "Rich",
        elements: &["fps", "gputime", "memory", "thermal", "shaders"],
    },
    Preset {
        name: "Default",
        elements: &[
            "device",
            "rosetta",
            "layersize",
            "memory",
            "gamemode",
            "fps",
            "gputime",
            "frameinterval",
            "frameintervalgraph",
        ],
    },
];
