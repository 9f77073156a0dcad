use std::fmt::Write as _;
use std::fs::File;
use std::io::{BufWriter, Write};
use std::path::{Path, PathBuf};

use anyhow::{Context, Result};

use crate::config::ReportConfig;
use crate::core::{NOT_AVAILABLE, PluginReport, ScanReport, StyleClass};

const STYLESHEET: &str = "        .green { color: green; }
        .dark-blue { color: darkblue; }
        .orange { color: orange; }
        .red { color: red; }
";

pub fn render(report: &ScanReport) -> String {
    render_with(report, &ReportConfig::default())
}

pub fn render_with(report: &ScanReport, cfg: &ReportConfig) -> String {
    let mut out = String::new();
    let title = html_escape(&cfg.title);

    let _ = writeln!(out, "<!DOCTYPE html>");
    let _ = writeln!(out, "<html>");
    let _ = writeln!(out, "<head>");
    let _ = writeln!(out, "    <meta charset=\"utf-8\">");
    let _ = writeln!(out, "    <title>{title}</title>");
    let _ = writeln!(out, "    <style>");
    out.push_str(STYLESHEET);
    let _ = writeln!(out, "    </style>");
    let _ = writeln!(out, "</head>");
    let _ = writeln!(out, "<body>");
    let _ = writeln!(out, "    <h1>{title}</h1>");
    let _ = writeln!(
        out,
        "    <h2>Target URL: {}</h2>",
        html_escape(&report.target_url)
    );
    let _ = writeln!(out, "    <p>Start Time: {}</p>", html_escape(&report.start_time));
    let _ = writeln!(out, "    <p>Stop Time: {}</p>", html_escape(&report.stop_time));

    let _ = writeln!(out);
    let _ = writeln!(out, "    <h3>Interesting Finding(s)</h3>");
    let _ = writeln!(out, "    <ul>");
    for finding in &report.interesting_findings {
        let _ = writeln!(
            out,
            "        <li><strong>{}:</strong> {}</li>",
            html_escape(&finding.label()),
            html_escape(&finding.url())
        );
    }
    let _ = writeln!(out, "    </ul>");

    let theme = report.main_theme.as_ref();
    let slug = theme.map_or(NOT_AVAILABLE, |t| t.slug.as_str());
    let version = theme
        .and_then(|t| t.version.as_ref())
        .map_or(NOT_AVAILABLE, |v| v.number.as_str());
    let _ = writeln!(out);
    let _ = writeln!(out, "    <h3>Main Theme Information</h3>");
    let _ = writeln!(out, "    <p>Theme: {}</p>", html_escape(slug));
    let _ = writeln!(out, "    <p>Version: {}</p>", html_escape(version));

    let _ = writeln!(out);
    let _ = writeln!(out, "    <h3>Plugin Information</h3>");
    let _ = writeln!(out, "    <ul>");
    for plugin in &report.plugins {
        write_plugin(&mut out, plugin);
    }
    let _ = writeln!(out, "    </ul>");

    if !report.users.is_empty() {
        let _ = writeln!(out);
        let _ = writeln!(out, "    <h3>Users found</h3>");
        let _ = writeln!(out, "    <ul>");
        for user in &report.users {
            let _ = writeln!(out, "        <li>{}</li>", html_escape(&user.username));
        }
        let _ = writeln!(out, "    </ul>");
    }

    let _ = writeln!(out, "</body>");
    let _ = writeln!(out, "</html>");
    out
}

fn write_plugin(out: &mut String, plugin: &PluginReport) {
    let _ = writeln!(
        out,
        "        <li><strong>{}:</strong>",
        html_escape(&plugin.plugin)
    );
    let _ = writeln!(out, "            <ul>");
    let _ = writeln!(
        out,
        "                <li>Location: {}</li>",
        html_escape(&plugin.location)
    );
    let _ = writeln!(
        out,
        "                <li>Latest Version: {}</li>",
        html_escape(&plugin.latest_version)
    );
    let _ = writeln!(
        out,
        "                <li>Outdated: {}</li>",
        span(plugin.outdated.style_class(), plugin.outdated.as_str())
    );
    let _ = writeln!(
        out,
        "                <li>Confidence: {}</li>",
        span(
            plugin.confidence.style_class(),
            &plugin.confidence.to_string()
        )
    );

    let _ = writeln!(out, "                <li>Interesting Entries:</li>");
    let _ = writeln!(out, "                <ul>");
    for entry in &plugin.interesting_entries {
        let _ = writeln!(out, "                    <li>{}</li>", html_escape(entry));
    }
    let _ = writeln!(out, "                </ul>");

    let _ = writeln!(out, "                <li>Vulnerabilities:");
    let _ = writeln!(out, "                    <ul>");
    for vuln in &plugin.vulnerabilities {
        let _ = writeln!(
            out,
            "                        <li>{}",
            span(StyleClass::Red, &vuln.title)
        );
        let _ = writeln!(out, "                            <ul>");
        let _ = writeln!(out, "                                <li>References:</li>");
        let _ = writeln!(out, "                                <ul>");
        for url in &vuln.references {
            let url = html_escape(url);
            let _ = writeln!(
                out,
                "                                    <li><a href=\"{url}\">{url}</a></li>"
            );
        }
        let _ = writeln!(out, "                                </ul>");
        let _ = writeln!(out, "                            </ul>");
        let _ = writeln!(out, "                        </li>");
    }
    let _ = writeln!(out, "                    </ul>");
    let _ = writeln!(out, "                </li>");
    let _ = writeln!(out, "            </ul>");
    let _ = writeln!(out, "        </li>");
}

fn span(class: StyleClass, text: &str) -> String {
    format!("<span class=\"{class}\">{}</span>", html_escape(text))
}

fn html_escape(s: &str) -> String {
    s.replace('&', "&amp;")
        .replace('<', "&lt;")
        .replace('>', "&gt;")
        .replace('"', "&quot;")
        .replace('\'', "&#39;")
}

pub fn write_html(html: &str, path: &Path) -> Result<PathBuf> {
    let file = File::create(path)
        .with_context(|| format!("failed to create report file: {}", path.display()))?;
    let mut writer = BufWriter::new(file);
    writer
        .write_all(html.as_bytes())
        .and_then(|()| writer.flush())
        .with_context(|| format!("failed to write report file: {}", path.display()))?;
    Ok(path.to_path_buf())
}
