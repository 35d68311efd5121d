use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Finding severity, ordered most severe first for table sorting.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, PartialOrd, Ord)]
#[serde(rename_all = "snake_case")]
pub enum Severity {
    Critical,
    High,
    Medium,
    Low,
}

impl Severity {
    pub fn label(&self) -> &'static str {
        match self {
            Severity::Critical => "Critical",
            Severity::High => "High",
            Severity::Medium => "Medium",
            Severity::Low => "Low",
        }
    }
}

/// One issue surfaced by a provider scan.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct SecurityFinding {
    pub id: String,
    pub title: String,
    pub severity: Severity,
    pub resource: String,
    pub description: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub detected_at: Option<DateTime<Utc>>,
}

/// Result of `GET /security/{provider}/scan`.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct SecurityScan {
    pub provider: String,
    pub scanned_at: DateTime<Utc>,
    /// 0-100 posture score computed server-side.
    pub score: u8,
    pub findings: Vec<SecurityFinding>,
}

impl SecurityScan {
    pub fn count_by_severity(&self, severity: Severity) -> usize {
        self.findings.iter().filter(|f| f.severity == severity).count()
    }
}

/// Body for `POST /security/sbom`.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct SbomRequest {
    pub provider: String,
    pub target: String,
}

/// Generated software bill of materials summary.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct SbomReport {
    pub id: String,
    pub target: String,
    pub format: String,
    pub component_count: u32,
    pub generated_at: DateTime<Utc>,
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    #[test]
    fn counts_findings_by_severity() {
        let finding = |sev: Severity| SecurityFinding {
            id: "f".into(),
            title: "t".into(),
            severity: sev,
            resource: "r".into(),
            description: String::new(),
            detected_at: None,
        };
        let scan = SecurityScan {
            provider: "aws".into(),
            scanned_at: Utc.with_ymd_and_hms(2026, 7, 1, 0, 0, 0).unwrap(),
            score: 70,
            findings: vec![
                finding(Severity::Critical),
                finding(Severity::High),
                finding(Severity::High),
            ],
        };
        assert_eq!(scan.count_by_severity(Severity::Critical), 1);
        assert_eq!(scan.count_by_severity(Severity::High), 2);
        assert_eq!(scan.count_by_severity(Severity::Low), 0);
    }

    #[test]
    fn severity_orders_most_severe_first() {
        let mut sevs = vec![Severity::Low, Severity::Critical, Severity::Medium];
        sevs.sort();
        assert_eq!(sevs[0], Severity::Critical);
    }
}
