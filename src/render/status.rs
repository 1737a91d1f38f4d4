use crate::core::{ControlStatus, Severity};

/// Display channel a piece of text is written on.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Channel {
    Simple,
    Info,
    Success,
    Warning,
    Failure,
    Description,
}

impl Channel {
    const fn ansi_code(self) -> Option<&'static str> {
        match self {
            Channel::Simple => None,
            Channel::Info => Some("36"),
            Channel::Success => Some("32"),
            Channel::Warning => Some("33"),
            Channel::Failure => Some("31"),
            Channel::Description => Some("90"),
        }
    }

    pub fn paint(self, s: &str, color: bool) -> String {
        match self.ansi_code() {
            Some(code) if color && !s.is_empty() => format!("\x1b[{code}m{s}\x1b[0m"),
            _ => s.to_string(),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct StatusStyle {
    pub channel: Channel,
    pub glyph: &'static str,
    pub verb: &'static str,
}

const CONFUSED_FACE: &str = "\u{1F615}";
const SAD_BUT_RELIEVED_FACE: &str = "\u{1F625}";
const NEUTRAL_FACE: &str = "\u{1F610}";
const THUMBS_UP: &str = "\u{1F44D}";
pub const DETECTIVE: &str = "\u{1F575}\u{FE0F}";

const STATUS_STYLES: [(ControlStatus, StatusStyle); 6] = [
    (
        ControlStatus::Skipped,
        StatusStyle {
            channel: Channel::Info,
            glyph: CONFUSED_FACE,
            verb: "skipped",
        },
    ),
    (
        ControlStatus::Failed,
        StatusStyle {
            channel: Channel::Failure,
            glyph: SAD_BUT_RELIEVED_FACE,
            verb: "failed",
        },
    ),
    (
        ControlStatus::Excluded,
        StatusStyle {
            channel: Channel::Warning,
            glyph: NEUTRAL_FACE,
            verb: "excluded",
        },
    ),
    (
        ControlStatus::Irrelevant,
        StatusStyle {
            channel: Channel::Success,
            glyph: CONFUSED_FACE,
            verb: "irrelevant",
        },
    ),
    (
        ControlStatus::Error,
        StatusStyle {
            channel: Channel::Warning,
            glyph: CONFUSED_FACE,
            verb: "error",
        },
    ),
    (
        ControlStatus::Passed,
        StatusStyle {
            channel: Channel::Success,
            glyph: THUMBS_UP,
            verb: "passed",
        },
    ),
];

const PASSED_STYLE: StatusStyle = STATUS_STYLES[5].1;

pub fn status_style(status: ControlStatus) -> StatusStyle {
    STATUS_STYLES
        .iter()
        .find(|(s, _)| *s == status)
        .map(|(_, style)| *style)
        .unwrap_or(PASSED_STYLE)
}

pub fn severity_channel(severity: Severity) -> Channel {
    match severity {
        Severity::Unknown => Channel::Description,
        Severity::Low => Channel::Success,
        Severity::Medium => Channel::Info,
        Severity::High => Channel::Warning,
        Severity::Critical => Channel::Failure,
    }
}
