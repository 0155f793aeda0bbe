//! Standalone HTML report: one card per operation, colour-coded by status.

use std::fmt::Write;

use cm7_contracts::{OperationLog, OperationRecord};

const TITLE: &str = "CM-7 Agent Demonstration";
const HEADLINE: &str = "CM-7 Neutral Computational Module";
const TAGLINE: &str = "Precision Task Execution with Full Traceability and Auditability";
const FOOTER_PROTOCOL: &str = "Operating under Safety Protocol v1.2 | Token Optimization Module Active";
const FOOTER_TRUTH: &str = "User remains the single source of truth in all computational state spaces";

const STYLE: &str = r#"
        body {
            font-family: 'Segoe UI', Tahoma, Geneva, Verdana, sans-serif;
            margin: 0;
            padding: 20px;
            background-color: #1e1e1e;
            color: #ffffff;
        }
        .header { text-align: center; margin-bottom: 30px; }
        .header h1 { color: #4fc3f7; margin-bottom: 10px; }
        .header p { color: #cccccc; font-size: 14px; }
        .operation {
            background-color: #2d2d30;
            border: 1px solid #3e3e42;
            border-radius: 8px;
            padding: 15px;
            margin-bottom: 15px;
        }
        .operation.completed { border-left: 4px solid #4caf50; }
        .operation.active { border-left: 4px solid #2196f3; }
        .operation.in_progress { border-left: 4px solid #ff9800; }
        .op-header {
            display: flex;
            justify-content: space-between;
            align-items: center;
            margin-bottom: 10px;
        }
        .op-id { font-weight: bold; color: #4fc3f7; }
        .timestamp { color: #cccccc; font-size: 12px; }
        .status {
            padding: 4px 8px;
            border-radius: 4px;
            font-size: 12px;
            font-weight: bold;
            color: white;
        }
        .status.completed { background-color: #4caf50; }
        .status.active { background-color: #2196f3; }
        .status.in_progress { background-color: #ff9800; }
        .description { margin-bottom: 8px; line-height: 1.4; }
        .hash {
            font-family: 'Courier New', monospace;
            font-size: 12px;
            color: #cccccc;
            background-color: #1e1e1e;
            padding: 5px;
            border-radius: 4px;
        }
        .footer {
            text-align: center;
            margin-top: 30px;
            padding-top: 20px;
            border-top: 1px solid #3e3e42;
            color: #cccccc;
            font-size: 12px;
        }
"#;

/// Render `log` as a complete HTML document.
pub fn render_html(log: &OperationLog) -> String {
    let mut cards = String::new();
    for record in log {
        push_card(&mut cards, record);
    }

    format!(
        r#"<!DOCTYPE html>
<html lang="en">
<head>
    <meta charset="UTF-8">
    <meta name="viewport" content="width=device-width, initial-scale=1.0">
    <title>{TITLE}</title>
    <style>{STYLE}    </style>
</head>
<body>
    <div class="header">
        <h1>{HEADLINE}</h1>
        <p>{TAGLINE}</p>
    </div>
    <div class="operations">
{cards}    </div>
    <div class="footer">
        <p>{FOOTER_PROTOCOL}</p>
        <p>{FOOTER_TRUTH}</p>
    </div>
</body>
</html>
"#
    )
}

fn push_card(out: &mut String, record: &OperationRecord) {
    let status = record.status().as_str();
    // Writing into a String cannot fail.
    let _ = write!(
        out,
        r#"        <div class="operation {status}">
            <div class="op-header">
                <span class="op-id">{id}</span>
                <span class="timestamp">{time}</span>
                <span class="status {status}">{label}</span>
            </div>
            <div class="description">{description}</div>
            <div class="hash">Traceability Hash: {fingerprint}</div>
        </div>
"#,
        id = escape(record.operation_id()),
        time = record.timestamp().format("%Y-%m-%d %H:%M:%S UTC"),
        label = status.to_uppercase(),
        description = escape(record.description()),
        fingerprint = record.fingerprint(),
    );
}

/// Escape the five characters HTML treats specially in text and attributes.
pub(crate) fn escape(raw: &str) -> String {
    let mut out = String::with_capacity(raw.len());
    for ch in raw.chars() {
        match ch {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            '\'' => out.push_str("&#39;"),
            _ => out.push(ch),
        }
    }
    out
}
