use crate::core::{Finding, PluginReport, ThemeInfo};
use serde::Serialize;

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct UserRecord {
    pub username: String,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ScanReport {
    pub target_url: String,
    pub start_time: String,
    pub stop_time: String,
    pub main_theme: Option<ThemeInfo>,
    pub interesting_findings: Vec<Finding>,
    pub plugins: Vec<PluginReport>,
    pub users: Vec<UserRecord>,
}
