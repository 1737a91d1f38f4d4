use serde::{Deserialize, Serialize};

use crate::core::ControlResult;

/// Marker glyphs used to footnote status reasons.
///
/// The n-th distinct reason gets the glyph repeated n times while
/// `n <= max_repeat`, and the glyph followed by n after that.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MarkerScale {
    pub glyph: String,
    pub max_repeat: usize,
}

impl Default for MarkerScale {
    fn default() -> Self {
        Self {
            glyph: "*".to_string(),
            max_repeat: 3,
        }
    }
}

impl MarkerScale {
    /// Marker for a 1-based rank.
    pub fn marker(&self, rank: usize) -> String {
        let rank = rank.max(1);
        if rank <= self.max_repeat {
            self.glyph.repeat(rank)
        } else {
            format!("{}{rank}", self.glyph)
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct InfoMarker {
    pub info: String,
    pub marker: String,
}

/// De-duplicated status reasons in first-seen order.
///
/// Markers follow the rank of each distinct reason, not how many controls
/// share it, so a footnote keeps its marker when more controls report it.
pub fn dedupe_info(controls: &[ControlResult], scale: &MarkerScale) -> Vec<InfoMarker> {
    let mut markers: Vec<InfoMarker> = Vec::new();
    for reason in controls.iter().filter_map(ControlResult::reason) {
        if markers.iter().any(|m| m.info == reason) {
            continue;
        }
        let marker = scale.marker(markers.len() + 1);
        markers.push(InfoMarker {
            info: reason.to_string(),
            marker,
        });
    }
    markers
}

pub fn marker_for<'a>(markers: &'a [InfoMarker], reason: &str) -> Option<&'a str> {
    markers
        .iter()
        .find(|m| m.info == reason)
        .map(|m| m.marker.as_str())
}

/// Footnote lines, one per distinct reason.
pub fn info_lines(markers: &[InfoMarker]) -> Vec<String> {
    markers
        .iter()
        .map(|m| format!("{} {}", m.marker, m.info))
        .collect()
}
