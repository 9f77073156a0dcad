mod finding;
mod indicator;
mod plugin;
mod report;
mod theme;

pub use finding::Finding;
pub use indicator::{Confidence, Outdated, StyleClass};
pub use plugin::{PluginReport, VulnerabilityReport};
pub use report::{ScanReport, UserRecord};
pub use theme::{ThemeInfo, VersionInfo};

pub const NOT_AVAILABLE: &str = "N/A";
