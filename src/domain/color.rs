//! Fixed presentation palette: one fill/stroke pair per lineage.

use crate::domain::lineage::LineageTag;

/// Color pair for one lineage, as `#rrggbb` hex strings.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct LineageColor {
    pub fill: &'static str,
    pub stroke: &'static str,
}

impl LineageColor {
    pub fn fill_rgb(&self) -> (u8, u8, u8) {
        hex_rgb(self.fill)
    }

    pub fn stroke_rgb(&self) -> (u8, u8, u8) {
        hex_rgb(self.stroke)
    }
}

/// Total lookup over the closed lineage enumeration. The exhaustive match
/// makes an out-of-enumeration request unrepresentable.
pub fn lineage_color(tag: LineageTag) -> LineageColor {
    match tag {
        LineageTag::HaikyoArts => LineageColor {
            fill: "#e3f2fd",
            stroke: "#1976d2",
        },
        LineageTag::HaikyoOsawa => LineageColor {
            fill: "#f3e5f5",
            stroke: "#7b1fa2",
        },
        LineageTag::HaikyoSigma => LineageColor {
            fill: "#e8f5e9",
            stroke: "#388e3c",
        },
        LineageTag::Aoni => LineageColor {
            fill: "#fff3e0",
            stroke: "#f57c00",
        },
        LineageTag::Ken => LineageColor {
            fill: "#fce4ec",
            stroke: "#c2185b",
        },
        LineageTag::Independent => LineageColor {
            fill: "#f5f5f5",
            stroke: "#616161",
        },
    }
}

fn hex_rgb(hex: &str) -> (u8, u8, u8) {
    let h = hex.trim_start_matches('#');
    let byte = |range: std::ops::Range<usize>| {
        h.get(range)
            .and_then(|s| u8::from_str_radix(s, 16).ok())
            .unwrap_or(0)
    };
    (byte(0..2), byte(2..4), byte(4..6))
}
