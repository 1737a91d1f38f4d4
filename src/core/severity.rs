use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Severity of a control. Ordering drives display priority.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(try_from = "SeverityRepr", into = "String")]
pub enum Severity {
    Unknown,
    Low,
    Medium,
    High,
    Critical,
}

impl Severity {
    pub const fn as_str(self) -> &'static str {
        match self {
            Severity::Unknown => "Unknown",
            Severity::Low => "Low",
            Severity::Medium => "Medium",
            Severity::High => "High",
            Severity::Critical => "Critical",
        }
    }

    /// Maps a numeric score factor (0..=10) onto a severity level.
    pub fn from_score_factor(factor: f64) -> Self {
        if factor.is_nan() || factor <= 0.0 {
            Severity::Unknown
        } else if factor < 4.0 {
            Severity::Low
        } else if factor < 7.0 {
            Severity::Medium
        } else if factor < 9.0 {
            Severity::High
        } else {
            Severity::Critical
        }
    }
}

impl fmt::Display for Severity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Severity {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "unknown" | "" => Ok(Severity::Unknown),
            "low" => Ok(Severity::Low),
            "medium" => Ok(Severity::Medium),
            "high" => Ok(Severity::High),
            "critical" => Ok(Severity::Critical),
            other => Err(format!(
                "invalid severity: {other} (expected unknown|low|medium|high|critical or a score factor)"
            )),
        }
    }
}

impl From<Severity> for String {
    fn from(value: Severity) -> Self {
        value.as_str().to_string()
    }
}

#[derive(Deserialize)]
#[serde(untagged)]
enum SeverityRepr {
    Label(String),
    Factor(f64),
}

impl TryFrom<SeverityRepr> for Severity {
    type Error = String;

    fn try_from(value: SeverityRepr) -> Result<Self, Self::Error> {
        match value {
            SeverityRepr::Label(s) => s.parse(),
            SeverityRepr::Factor(f) => Ok(Severity::from_score_factor(f)),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn score_factor_boundaries() {
        assert_eq!(Severity::from_score_factor(0.0), Severity::Unknown);
        assert_eq!(Severity::from_score_factor(1.0), Severity::Low);
        assert_eq!(Severity::from_score_factor(4.0), Severity::Medium);
        assert_eq!(Severity::from_score_factor(7.0), Severity::High);
        assert_eq!(Severity::from_score_factor(8.5), Severity::High);
        assert_eq!(Severity::from_score_factor(9.0), Severity::Critical);
        assert_eq!(Severity::from_score_factor(f64::NAN), Severity::Unknown);
    }

    #[test]
    fn infinite_factors_clamp_to_the_ends() {
        assert_eq!(Severity::from_score_factor(f64::INFINITY), Severity::Critical);
        assert_eq!(Severity::from_score_factor(f64::NEG_INFINITY), Severity::Unknown);
    }

    #[test]
    fn deserializes_from_label_or_factor() {
        let s: Severity = serde_json::from_str("\"high\"").expect("label");
        assert_eq!(s, Severity::High);
        let s: Severity = serde_json::from_str("9").expect("factor");
        assert_eq!(s, Severity::Critical);
        assert!(serde_json::from_str::<Severity>("\"severe\"").is_err());
    }

    #[test]
    fn ordering_puts_critical_last() {
        let mut all = vec![
            Severity::Critical,
            Severity::Low,
            Severity::Unknown,
            Severity::High,
            Severity::Medium,
        ];
        all.sort();
        assert_eq!(
            all,
            vec![
                Severity::Unknown,
                Severity::Low,
                Severity::Medium,
                Severity::High,
                Severity::Critical
            ]
        );
    }
}
