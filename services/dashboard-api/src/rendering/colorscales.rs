//! Named color scales for the warming map.
//!
//! The page sends a free-text colormap name; this registry is what resolves
//! it. Each scale is a list of `(position, color)` stops sent to the client
//! verbatim, so the palette is pinned server-side rather than left to
//! whatever the plotting library ships.
//!
//! Names are case-insensitive and accept a `_r` suffix for a reversed
//! scale (the dashboard default is `RdBu_r`).

use std::collections::HashMap;

use once_cell::sync::Lazy;

use figure_protocol::ColorScale;
use sst_common::DashboardError;

type Stops = &'static [(f64, &'static str)];

const RDBU: Stops = &[
    (0.0, "rgb(5,10,172)"),
    (0.35, "rgb(106,137,247)"),
    (0.5, "rgb(190,190,190)"),
    (0.6, "rgb(220,170,132)"),
    (0.7, "rgb(230,145,90)"),
    (1.0, "rgb(178,10,28)"),
];

const VIRIDIS: Stops = &[
    (0.0, "rgb(68,1,84)"),
    (0.125, "rgb(71,44,122)"),
    (0.25, "rgb(59,81,139)"),
    (0.375, "rgb(44,113,142)"),
    (0.5, "rgb(33,144,141)"),
    (0.625, "rgb(39,173,129)"),
    (0.75, "rgb(92,200,99)"),
    (0.875, "rgb(170,220,50)"),
    (1.0, "rgb(253,231,37)"),
];

const JET: Stops = &[
    (0.0, "rgb(0,0,131)"),
    (0.125, "rgb(0,60,170)"),
    (0.375, "rgb(5,255,255)"),
    (0.625, "rgb(255,255,0)"),
    (0.875, "rgb(250,0,0)"),
    (1.0, "rgb(128,0,0)"),
];

const PORTLAND: Stops = &[
    (0.0, "rgb(12,51,131)"),
    (0.25, "rgb(10,136,186)"),
    (0.5, "rgb(242,211,56)"),
    (0.75, "rgb(242,143,56)"),
    (1.0, "rgb(217,30,30)"),
];

const PICNIC: Stops = &[
    (0.0, "rgb(0,0,255)"),
    (0.1, "rgb(51,153,255)"),
    (0.2, "rgb(102,204,255)"),
    (0.3, "rgb(153,204,255)"),
    (0.4, "rgb(204,204,255)"),
    (0.5, "rgb(255,255,255)"),
    (0.6, "rgb(255,204,255)"),
    (0.7, "rgb(255,153,255)"),
    (0.8, "rgb(255,102,204)"),
    (0.9, "rgb(255,102,102)"),
    (1.0, "rgb(255,0,0)"),
];

const GREYS: Stops = &[(0.0, "rgb(0,0,0)"), (1.0, "rgb(255,255,255)")];

const HOT: Stops = &[
    (0.0, "rgb(0,0,0)"),
    (0.3, "rgb(230,0,0)"),
    (0.6, "rgb(255,210,0)"),
    (1.0, "rgb(255,255,255)"),
];

const EARTH: Stops = &[
    (0.0, "rgb(0,0,130)"),
    (0.1, "rgb(0,180,180)"),
    (0.2, "rgb(40,210,40)"),
    (0.4, "rgb(230,230,50)"),
    (0.6, "rgb(120,70,20)"),
    (1.0, "rgb(255,255,255)"),
];

const ELECTRIC: Stops = &[
    (0.0, "rgb(0,0,0)"),
    (0.15, "rgb(30,0,100)"),
    (0.4, "rgb(120,0,100)"),
    (0.6, "rgb(160,90,0)"),
    (0.8, "rgb(230,200,0)"),
    (1.0, "rgb(255,250,220)"),
];

const BLUERED: Stops = &[(0.0, "rgb(0,0,255)"), (1.0, "rgb(255,0,0)")];

const RAINBOW: Stops = &[
    (0.0, "rgb(150,0,90)"),
    (0.125, "rgb(0,0,200)"),
    (0.25, "rgb(0,25,255)"),
    (0.375, "rgb(0,152,255)"),
    (0.5, "rgb(44,255,150)"),
    (0.625, "rgb(151,255,0)"),
    (0.75, "rgb(255,234,0)"),
    (0.875, "rgb(255,111,0)"),
    (1.0, "rgb(255,0,0)"),
];

const BLACKBODY: Stops = &[
    (0.0, "rgb(0,0,0)"),
    (0.2, "rgb(230,0,0)"),
    (0.4, "rgb(230,210,0)"),
    (0.7, "rgb(255,255,255)"),
    (1.0, "rgb(160,200,255)"),
];

const YLGNBU: Stops = &[
    (0.0, "rgb(8,29,88)"),
    (0.125, "rgb(37,52,148)"),
    (0.25, "rgb(34,94,168)"),
    (0.375, "rgb(29,145,192)"),
    (0.5, "rgb(65,182,196)"),
    (0.625, "rgb(127,205,187)"),
    (0.75, "rgb(199,233,180)"),
    (0.875, "rgb(237,248,217)"),
    (1.0, "rgb(255,255,217)"),
];

const YLORRD: Stops = &[
    (0.0, "rgb(128,0,38)"),
    (0.125, "rgb(189,0,38)"),
    (0.25, "rgb(227,26,28)"),
    (0.375, "rgb(252,78,42)"),
    (0.5, "rgb(253,141,60)"),
    (0.625, "rgb(254,178,76)"),
    (0.75, "rgb(254,217,118)"),
    (0.875, "rgb(255,237,160)"),
    (1.0, "rgb(255,255,204)"),
];

/// Registry keyed by lowercase name; values carry the display name for
/// error messages.
static REGISTRY: Lazy<HashMap<&'static str, (&'static str, Stops)>> = Lazy::new(|| {
    let mut m = HashMap::new();
    m.insert("rdbu", ("RdBu", RDBU));
    m.insert("viridis", ("Viridis", VIRIDIS));
    m.insert("jet", ("Jet", JET));
    m.insert("portland", ("Portland", PORTLAND));
    m.insert("picnic", ("Picnic", PICNIC));
    m.insert("greys", ("Greys", GREYS));
    m.insert("hot", ("Hot", HOT));
    m.insert("earth", ("Earth", EARTH));
    m.insert("electric", ("Electric", ELECTRIC));
    m.insert("bluered", ("Bluered", BLUERED));
    m.insert("rainbow", ("Rainbow", RAINBOW));
    m.insert("blackbody", ("Blackbody", BLACKBODY));
    m.insert("ylgnbu", ("YlGnBu", YLGNBU));
    m.insert("ylorrd", ("YlOrRd", YLORRD));
    m
});

/// Names accepted by [`resolve`], in display form.
pub fn available_names() -> Vec<&'static str> {
    let mut names: Vec<&'static str> = REGISTRY.values().map(|(name, _)| *name).collect();
    names.sort_unstable();
    names
}

/// Resolve a user-provided colormap name to explicit stops.
///
/// An unresolvable name is a user-facing error, not a crash.
pub fn resolve(name: &str) -> Result<ColorScale, DashboardError> {
    let lower = name.trim().to_lowercase();
    let (base, reversed) = match lower.strip_suffix("_r") {
        Some(base) => (base, true),
        None => (lower.as_str(), false),
    };

    let (_, stops) = REGISTRY.get(base).ok_or_else(|| {
        DashboardError::ColormapNotFound(format!(
            "'{}'. Available colormaps: {:?} (append _r to reverse)",
            name,
            available_names()
        ))
    })?;

    let scale = if reversed {
        stops
            .iter()
            .rev()
            .map(|&(t, color)| (1.0 - t, color.to_string()))
            .collect()
    } else {
        stops
            .iter()
            .map(|&(t, color)| (t, color.to_string()))
            .collect()
    };

    Ok(scale)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_resolve_known_name() {
        let scale = resolve("Portland").unwrap();
        assert_eq!(scale.first().unwrap().0, 0.0);
        assert_eq!(scale.last().unwrap().0, 1.0);
        assert_eq!(scale[0].1, "rgb(12,51,131)");
    }

    #[test]
    fn test_resolve_is_case_insensitive() {
        assert_eq!(resolve("VIRIDIS").unwrap(), resolve("viridis").unwrap());
    }

    #[test]
    fn test_resolve_reversed_suffix() {
        let forward = resolve("RdBu").unwrap();
        let reversed = resolve("RdBu_r").unwrap();
        assert_eq!(reversed.first().unwrap().0, 0.0);
        assert_eq!(reversed.last().unwrap().0, 1.0);
        // The cold end of the forward scale becomes the hot end
        assert_eq!(reversed.first().unwrap().1, forward.last().unwrap().1);
        assert_eq!(reversed.last().unwrap().1, forward.first().unwrap().1);
        // Interior positions are mirrored
        assert!((reversed[1].0 - 0.3).abs() < 1e-12);
    }

    #[test]
    fn test_resolve_unknown_name_lists_available() {
        let err = resolve("Sunset").unwrap_err();
        let message = err.to_string();
        assert!(message.contains("Sunset"));
        assert!(message.contains("Viridis"));
    }

    #[test]
    fn test_stops_are_sorted_and_bounded() {
        for name in available_names() {
            let scale = resolve(name).unwrap();
            assert_eq!(scale.first().unwrap().0, 0.0, "{}", name);
            assert_eq!(scale.last().unwrap().0, 1.0, "{}", name);
            for pair in scale.windows(2) {
                assert!(pair[0].0 <= pair[1].0, "{} stops out of order", name);
            }
        }
    }
}
