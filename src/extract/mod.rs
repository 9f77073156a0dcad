use serde_json::{Map, Value};

use crate::core::{
    Confidence, Finding, NOT_AVAILABLE, Outdated, PluginReport, ScanReport, ThemeInfo, UserRecord,
    VersionInfo, VulnerabilityReport,
};

pub fn extract(raw: &Map<String, Value>) -> ScanReport {
    ScanReport {
        target_url: text_or_na(raw.get("target_url")),
        start_time: text_or_na(raw.get("start_time")),
        stop_time: text_or_na(raw.get("stop_time")),
        main_theme: raw.get("main_theme").and_then(Value::as_object).map(theme),
        interesting_findings: list(raw.get("interesting_findings"))
            .iter()
            .cloned()
            .map(Finding::new)
            .collect(),
        plugins: raw
            .get("plugins")
            .and_then(Value::as_object)
            .map(|plugins| {
                plugins
                    .iter()
                    .map(|(name, details)| plugin(name, details))
                    .collect()
            })
            .unwrap_or_default(),
        users: users(raw.get("users")),
    }
}

fn theme(raw: &Map<String, Value>) -> ThemeInfo {
    ThemeInfo {
        slug: text_or_na(raw.get("slug")),
        version: raw
            .get("version")
            .and_then(Value::as_object)
            .map(|v| VersionInfo {
                number: text_or_na(v.get("number")),
            }),
    }
}

fn plugin(name: &str, details: &Value) -> PluginReport {
    let interesting_entries = details
        .get("version")
        .and_then(Value::as_object)
        .map(|v| list(v.get("interesting_entries")))
        .unwrap_or_default()
        .iter()
        .map(display)
        .collect();

    PluginReport {
        plugin: name.to_string(),
        location: text_or_na(details.get("location")),
        latest_version: text_or_na(details.get("latest_version")),
        outdated: outdated(details.get("outdated")),
        confidence: confidence(details.get("confidence")),
        interesting_entries,
        vulnerabilities: list(details.get("vulnerabilities"))
            .iter()
            .map(vulnerability)
            .collect(),
    }
}

fn vulnerability(raw: &Value) -> VulnerabilityReport {
    let references = match raw.get("references").and_then(|r| r.get("url")) {
        Some(Value::Array(urls)) => urls.iter().map(display).collect(),
        Some(Value::String(url)) => vec![url.clone()],
        _ => Vec::new(),
    };
    VulnerabilityReport {
        title: text_or_na(raw.get("title")),
        references,
    }
}

fn outdated(raw: Option<&Value>) -> Outdated {
    match raw {
        Some(Value::Bool(true)) => Outdated::Yes,
        Some(Value::Bool(false)) => Outdated::No,
        None | Some(Value::Null) => Outdated::unknown(),
        Some(other) => Outdated::Unknown(display(other)),
    }
}

fn confidence(raw: Option<&Value>) -> Confidence {
    match raw {
        None | Some(Value::Null) => Confidence::unknown(),
        Some(Value::Number(n)) => match n.as_i64() {
            Some(score) => Confidence::Score(score),
            None => match n.as_f64() {
                Some(f) if f.fract() == 0.0 && f.abs() <= i64::MAX as f64 => {
                    Confidence::Score(f as i64)
                }
                _ => Confidence::Unknown(n.to_string()),
            },
        },
        Some(other) => Confidence::Unknown(display(other)),
    }
}

fn users(raw: Option<&Value>) -> Vec<UserRecord> {
    match raw {
        Some(Value::Array(entries)) => entries
            .iter()
            .map(|entry| match entry {
                Value::Object(fields) => text_or_na(fields.get("username")),
                other => text_or_na(Some(other)),
            })
            .map(|username| UserRecord { username })
            .collect(),
        // WPScan's native shape: username -> details.
        Some(Value::Object(by_name)) => by_name
            .keys()
            .map(|username| UserRecord {
                username: username.clone(),
            })
            .collect(),
        _ => Vec::new(),
    }
}

fn list(raw: Option<&Value>) -> &[Value] {
    match raw {
        Some(Value::Array(items)) => items.as_slice(),
        _ => &[],
    }
}

fn text_or_na(raw: Option<&Value>) -> String {
    match raw {
        None | Some(Value::Null) => NOT_AVAILABLE.to_string(),
        Some(value) => display(value),
    }
}

fn display(value: &Value) -> String {
    match value {
        Value::String(s) => s.clone(),
        other => other.to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn extract_json(v: Value) -> ScanReport {
        let raw = v.as_object().cloned().expect("object");
        extract(&raw)
    }

    #[test]
    fn empty_document_defaults_everything() {
        let report = extract_json(json!({}));
        assert_eq!(report.target_url, "N/A");
        assert_eq!(report.start_time, "N/A");
        assert_eq!(report.stop_time, "N/A");
        assert!(report.main_theme.is_none());
        assert!(report.interesting_findings.is_empty());
        assert!(report.plugins.is_empty());
        assert!(report.users.is_empty());
    }

    #[test]
    fn null_plugin_version_yields_no_entries() {
        let report = extract_json(json!({
            "plugins": { "akismet": { "version": null, "confidence": 80 } }
        }));
        let plugin = &report.plugins[0];
        assert_eq!(plugin.plugin, "akismet");
        assert!(plugin.interesting_entries.is_empty());
        assert_eq!(plugin.confidence, Confidence::Score(80));
        assert_eq!(plugin.location, "N/A");
        assert_eq!(plugin.latest_version, "N/A");
        assert_eq!(plugin.outdated, Outdated::unknown());
    }

    #[test]
    fn plugin_fields_are_extracted() {
        let report = extract_json(json!({
            "plugins": {
                "contact-form-7": {
                    "location": "https://example.com/wp-content/plugins/contact-form-7/",
                    "latest_version": "5.9",
                    "outdated": true,
                    "confidence": "N/A",
                    "version": {
                        "number": "5.1",
                        "interesting_entries": ["readme.txt: Stable tag 5.1", 7]
                    },
                    "vulnerabilities": [
                        { "title": "CF7 < 5.3.2 - Unrestricted File Upload",
                          "references": { "url": ["https://a.example/1", "https://b.example/2"],
                                          "cve": ["2020-35489"] } },
                        { "references": {} },
                        { "title": "No refs" }
                    ]
                }
            }
        }));
        let plugin = &report.plugins[0];
        assert_eq!(plugin.latest_version, "5.9");
        assert_eq!(plugin.outdated, Outdated::Yes);
        assert_eq!(plugin.confidence, Confidence::Unknown("N/A".to_string()));
        assert_eq!(
            plugin.interesting_entries,
            vec!["readme.txt: Stable tag 5.1".to_string(), "7".to_string()]
        );
        assert_eq!(plugin.vulnerabilities.len(), 3);
        assert_eq!(
            plugin.vulnerabilities[0].references,
            vec!["https://a.example/1", "https://b.example/2"]
        );
        assert_eq!(plugin.vulnerabilities[1].title, "N/A");
        assert!(plugin.vulnerabilities[1].references.is_empty());
        assert!(plugin.vulnerabilities[2].references.is_empty());
    }

    #[test]
    fn null_vulnerabilities_are_empty() {
        let report = extract_json(json!({
            "plugins": { "a": { "vulnerabilities": null }, "b": null }
        }));
        assert!(report.plugins[0].vulnerabilities.is_empty());
        assert_eq!(report.plugins[1].plugin, "b");
        assert_eq!(report.plugins[1].confidence, Confidence::unknown());
    }

    #[test]
    fn single_reference_string_is_one_link() {
        let report = extract_json(json!({
            "plugins": { "a": { "vulnerabilities": [
                { "title": "t", "references": { "url": "https://only.example/" } }
            ] } }
        }));
        assert_eq!(
            report.plugins[0].vulnerabilities[0].references,
            vec!["https://only.example/"]
        );
    }

    #[test]
    fn plugin_order_follows_input() {
        let raw = r#"{"plugins": {"zeta": {}, "alpha": {}, "mid": {}}}"#;
        let v: Value = serde_json::from_str(raw).expect("parse");
        let names: Vec<String> = extract_json(v)
            .plugins
            .into_iter()
            .map(|p| p.plugin)
            .collect();
        assert_eq!(names, vec!["zeta", "alpha", "mid"]);
    }

    #[test]
    fn float_confidence_without_fraction_is_a_score() {
        assert_eq!(confidence(Some(&json!(100.0))), Confidence::Score(100));
        assert_eq!(
            confidence(Some(&json!(99.5))),
            Confidence::Unknown("99.5".to_string())
        );
        assert_eq!(
            confidence(Some(&json!("80"))),
            Confidence::Unknown("80".to_string())
        );
    }

    #[test]
    fn theme_version_only_when_present() {
        let with = extract_json(json!({
            "main_theme": { "slug": "twentytwenty", "version": { "number": "1.9" } }
        }));
        let theme = with.main_theme.expect("theme");
        assert_eq!(theme.slug, "twentytwenty");
        assert_eq!(theme.version.expect("version").number, "1.9");

        let without = extract_json(json!({ "main_theme": { "version": null } }));
        let theme = without.main_theme.expect("theme");
        assert_eq!(theme.slug, "N/A");
        assert!(theme.version.is_none());
    }

    #[test]
    fn users_keep_only_the_username() {
        let report = extract_json(json!({
            "users": [
                { "username": "admin", "id": 1 },
                { "id": 2 },
                "editor",
                null,
                7
            ]
        }));
        let names: Vec<&str> = report.users.iter().map(|u| u.username.as_str()).collect();
        assert_eq!(names, vec!["admin", "N/A", "editor", "N/A", "7"]);
    }

    #[test]
    fn non_boolean_outdated_keeps_scanner_text() {
        let report = extract_json(json!({
            "plugins": {
                "a": { "outdated": "yes" },
                "b": { "outdated": false },
                "c": { "outdated": 1 }
            }
        }));
        assert_eq!(report.plugins[0].outdated, Outdated::Unknown("yes".to_string()));
        assert_eq!(report.plugins[1].outdated, Outdated::No);
        assert_eq!(report.plugins[2].outdated, Outdated::Unknown("1".to_string()));
    }

    #[test]
    fn users_mapping_uses_keys() {
        let report = extract_json(json!({
            "users": { "admin": { "id": 1 }, "bob": { "id": 2 } }
        }));
        let names: Vec<&str> = report.users.iter().map(|u| u.username.as_str()).collect();
        assert_eq!(names, vec!["admin", "bob"]);
    }

    #[test]
    fn findings_pass_through_verbatim() {
        let finding = json!({ "to_s": "XML-RPC seems to be enabled", "url": "https://e.x/xmlrpc.php",
                              "confidence": 100, "interesting_entries": [] });
        let report = extract_json(json!({ "interesting_findings": [finding.clone()] }));
        assert_eq!(report.interesting_findings[0].raw(), &finding);
    }
}
