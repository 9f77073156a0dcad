use crate::core::{Confidence, Outdated};
use serde::Serialize;

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct VulnerabilityReport {
    pub title: String,
    pub references: Vec<String>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct PluginReport {
    pub plugin: String,
    pub location: String,
    pub latest_version: String,
    pub outdated: Outdated,
    pub confidence: Confidence,
    pub interesting_entries: Vec<String>,
    pub vulnerabilities: Vec<VulnerabilityReport>,
}
