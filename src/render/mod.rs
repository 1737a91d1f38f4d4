//! Pretty text rendering of an evaluated result set.
//!
//! Rendering is a pure function of [`ScanResults`] and an immutable
//! [`RenderConfig`]: the same input always renders the same text.

use std::fmt;
use std::io::{self, Write};
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::core::{ControlResult, FrameworkSummary, ReportSummary, ResourceIndex, ScanResults};

mod grouping;
mod info;
mod ordering;
mod related;
mod resources;
mod rows;
mod status;
mod table;

#[cfg(test)]
mod fixtures;

pub use grouping::{OutcomeGroups, ResourceGroup, group_by_scope, group_outcomes, workload_results};
pub use info::{InfoMarker, MarkerScale, dedupe_info};
pub use ordering::{SeverityBucket, display_order, severity_buckets};
pub use related::{related_objects_suffix, resource_line};
pub use rows::{Column, DisplayRow, ROW_LEN, control_row, footer_row};
pub use status::{Channel, StatusStyle, status_style};

use status::DETECTIVE;
use table::TextTable;

pub const DEFAULT_DOCS_BASE_URL: &str = "https://hub.armo.cloud/docs";

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub enum FormatVersion {
    #[default]
    V1,
    V2,
}

impl FormatVersion {
    pub const fn as_str(self) -> &'static str {
        match self {
            FormatVersion::V1 => "v1",
            FormatVersion::V2 => "v2",
        }
    }
}

impl fmt::Display for FormatVersion {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for FormatVersion {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "v1" => Ok(FormatVersion::V1),
            "v2" => Ok(FormatVersion::V2),
            other => Err(format!("invalid format version: {other} (expected v1|v2)")),
        }
    }
}

impl TryFrom<String> for FormatVersion {
    type Error = String;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        value.parse()
    }
}

impl From<FormatVersion> for String {
    fn from(value: FormatVersion) -> Self {
        value.as_str().to_string()
    }
}

/// Render-time settings, fixed for the lifetime of a [`Renderer`].
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct RenderConfig {
    pub verbose: bool,
    pub format_version: FormatVersion,
    pub color: bool,
    pub docs_base_url: String,
    pub marker: MarkerScale,
}

impl Default for RenderConfig {
    fn default() -> Self {
        Self {
            verbose: false,
            format_version: FormatVersion::V1,
            color: false,
            docs_base_url: DEFAULT_DOCS_BASE_URL.to_string(),
            marker: MarkerScale::default(),
        }
    }
}

#[derive(Debug, Clone)]
pub struct Renderer {
    cfg: RenderConfig,
}

impl Renderer {
    pub fn new(cfg: RenderConfig) -> Self {
        Self { cfg }
    }

    pub fn config(&self) -> &RenderConfig {
        &self.cfg
    }

    /// Renders the whole report.
    pub fn render(&self, results: &ScanResults) -> String {
        let summary = &results.summary;
        let index = ResourceIndex::new(&results.resources);
        let buckets = severity_buckets(&summary.controls);

        for control in &summary.controls {
            if !control.counters.is_consistent() {
                log::warn!(
                    "control {}: passed+failed+excluded exceeds all ({:?})",
                    control.id,
                    control.counters
                );
            }
        }

        let mut out = String::new();
        if self.cfg.verbose {
            match self.cfg.format_version {
                FormatVersion::V1 => {
                    for control in display_order(&buckets) {
                        out.push_str(&self.control_block(control, &index));
                    }
                }
                FormatVersion::V2 => {
                    out.push_str(&resources::resource_table(summary, &index).render());
                    out.push('\n');
                }
            }
        }

        out.push_str(&self.summary_section(summary, &buckets));

        if !self.cfg.verbose {
            out.push('\n');
            out.push_str(&self.line(
                Channel::Simple,
                &format!("{DETECTIVE} Run with '--verbose' flag for full scan details"),
            ));
        }
        out
    }

    /// Renders into a sink. A failing sink aborts with the I/O error; output
    /// already written is left as is.
    pub fn write_to(&self, results: &ScanResults, out: &mut dyn Write) -> io::Result<()> {
        out.write_all(self.render(results).as_bytes())?;
        out.flush()
    }

    /// Verbose block for one control.
    pub fn control_block(&self, control: &ControlResult, index: &ResourceIndex<'_>) -> String {
        let mut out = String::new();
        let style = status_style(control.status);

        out.push_str(&self.paint(
            Channel::Info,
            &format!(
                "[control: {} - {}] ",
                control.name,
                doc_link(&self.cfg.docs_base_url, control.doc_key())
            ),
        ));
        out.push_str(&self.line(style.channel, &format!("{} {}", style.verb, style.glyph)));
        out.push_str(&self.line(
            Channel::Description,
            &format!("Description: {}", control.description),
        ));
        if let Some(reason) = control.reason() {
            out.push_str(&self.line(Channel::Warning, &format!("Reason: {reason}")));
        }

        if control.status.is_skipped() {
            return out;
        }

        let groups = group_outcomes(control, index, self.cfg.verbose);
        let sections = [
            (Channel::Failure, "Failed:", &groups.failed),
            (Channel::Warning, "Excluded:", &groups.excluded),
            (Channel::Success, "Passed:", &groups.passed),
        ];
        for (channel, title, section) in sections {
            if section.is_empty() {
                continue;
            }
            out.push_str(&self.line(channel, title));
            grouping::write_groups(&mut out, section);
        }

        let counters = &control.counters;
        out.push_str("Summary - ");
        out.push_str(&self.paint(Channel::Success, &format!("Passed:{}   ", counters.passed)));
        out.push_str(&self.paint(Channel::Warning, &format!("Excluded:{}   ", counters.excluded)));
        out.push_str(&self.paint(Channel::Failure, &format!("Failed:{}   ", counters.failed)));
        out.push_str(&self.line(Channel::Info, &format!("Total:{}", counters.all)));
        if control.status.is_failed() {
            out.push_str(&self.line(
                Channel::Description,
                &format!("Remediation: {}", control.remediation),
            ));
        }
        out.push('\n');
        out
    }

    /// Summary table, framework rollup and info footnotes.
    fn summary_section(&self, summary: &ReportSummary, buckets: &[SeverityBucket<'_>]) -> String {
        let markers = dedupe_info(&summary.controls, &self.cfg.marker);

        let mut table = TextTable::new(&rows::HEADERS, &rows::ALIGNMENTS);
        for control in display_order(buckets) {
            if let Some(row) = control_row(control, &markers, self.cfg.verbose, self.cfg.color) {
                table.push_row(row.into_cells());
            }
        }
        table.set_footer(footer_row(summary).into_cells());

        let mut out = table.render();
        let rollup = frameworks_rollup(&summary.frameworks);
        if !rollup.is_empty() {
            out.push_str(&self.line(Channel::Info, rollup.trim_end_matches('\n')));
        }
        out.push('\n');
        for line in info::info_lines(&markers) {
            out.push_str(&self.line(Channel::Info, &line));
        }
        out
    }

    fn paint(&self, channel: Channel, s: &str) -> String {
        channel.paint(s, self.cfg.color)
    }

    fn line(&self, channel: Channel, s: &str) -> String {
        let mut line = self.paint(channel, s);
        line.push('\n');
        line
    }
}

/// Framework line under the summary table. A single framework's score equals
/// the report score, so it is left out.
pub fn frameworks_rollup(frameworks: &[FrameworkSummary]) -> String {
    match frameworks {
        [] => String::new(),
        [only] if only.name.is_empty() => String::new(),
        [only] => format!("FRAMEWORK {}\n", only.name),
        [init @ .., last] => {
            let mut line = String::from("FRAMEWORKS: ");
            for fw in init {
                line.push_str(&format!("{} (risk: {:.2}), ", fw.name, fw.score));
            }
            line.push_str(&format!("{} (risk: {:.2})\n", last.name, last.score));
            line
        }
    }
}

pub fn doc_link(base: &str, key: &str) -> String {
    format!("{}/{}", base.trim_end_matches('/'), key.to_lowercase())
}
