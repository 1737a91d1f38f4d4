use crate::core::{ControlResult, ControlStatus, ReportSummary};
use crate::render::info::{InfoMarker, marker_for};
use crate::render::status::severity_channel;
use crate::render::table::Align;

pub const ROW_LEN: usize = 7;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Column {
    Name,
    Failed,
    Excluded,
    Total,
    Severity,
    RiskScore,
    Info,
}

impl Column {
    const fn index(self) -> usize {
        match self {
            Column::Name => 0,
            Column::Failed => 1,
            Column::Excluded => 2,
            Column::Total => 3,
            Column::Severity => 4,
            Column::RiskScore => 5,
            Column::Info => 6,
        }
    }
}

pub const HEADERS: [&str; ROW_LEN] = [
    "CONTROL NAME",
    "FAILED RESOURCES",
    "EXCLUDED RESOURCES",
    "ALL RESOURCES",
    "SEVERITY",
    "% RISK-SCORE",
    "INFO",
];

pub const ALIGNMENTS: [Align; ROW_LEN] = [
    Align::Left,
    Align::Center,
    Align::Center,
    Align::Center,
    Align::Left,
    Align::Right,
    Align::Left,
];

/// One line of the summary table.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DisplayRow {
    cells: [String; ROW_LEN],
}

impl DisplayRow {
    pub fn get(&self, column: Column) -> &str {
        &self.cells[column.index()]
    }

    pub fn into_cells(self) -> Vec<String> {
        self.cells.into()
    }
}

/// Why a control has no row in the summary table, if it has none.
pub fn omission_reason(control: &ControlResult, verbose: bool) -> Option<&'static str> {
    if !verbose && control.status == ControlStatus::Passed {
        return Some("passed");
    }
    if !verbose && control.status == ControlStatus::Irrelevant {
        return Some("irrelevant");
    }
    let keeps_empty = matches!(
        control.status,
        ControlStatus::Failed | ControlStatus::Skipped | ControlStatus::Error
    );
    if control.counters.all == 0 && !keeps_empty {
        return Some("no applicable resources");
    }
    None
}

pub fn format_score(score: f64) -> String {
    format!("{score:.2}%")
}

/// Summary-table row for one control, `None` when the control is omitted.
pub fn control_row(
    control: &ControlResult,
    markers: &[InfoMarker],
    verbose: bool,
    color: bool,
) -> Option<DisplayRow> {
    if let Some(reason) = omission_reason(control, verbose) {
        log::debug!("control {} omitted from summary: {reason}", control.id);
        return None;
    }

    let risk = if control.status.is_skipped() {
        "skipped".to_string()
    } else {
        format_score(control.score)
    };
    let info = control
        .reason()
        .and_then(|r| marker_for(markers, r))
        .unwrap_or("")
        .to_string();
    let severity = severity_channel(control.severity).paint(control.severity.as_str(), color);

    Some(DisplayRow {
        cells: [
            control.name.clone(),
            control.counters.failed.to_string(),
            control.counters.excluded.to_string(),
            control.counters.all.to_string(),
            severity,
            risk,
            info,
        ],
    })
}

/// Report-wide totals; severity and info are not meaningful here.
pub fn footer_row(summary: &ReportSummary) -> DisplayRow {
    DisplayRow {
        cells: [
            "Resource Summary".to_string(),
            summary.counters.failed.to_string(),
            summary.counters.excluded.to_string(),
            summary.counters.all.to_string(),
            " ".to_string(),
            format_score(summary.score),
            " ".to_string(),
        ],
    }
}
