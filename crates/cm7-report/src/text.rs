//! Plain-text terminal report.

use std::fmt::Write;

use cm7_contracts::OperationLog;

/// Render `log` as a banner followed by one block per operation.
pub fn render_text(log: &OperationLog) -> String {
    let mut out = String::new();

    // Writing into a String cannot fail.
    let _ = writeln!(out, "CM-7 Neutral Computational Module");
    let _ = writeln!(
        out,
        "Precision Task Execution with Full Traceability and Auditability"
    );
    let _ = writeln!(out, "=================================================================");
    let _ = writeln!(out);

    for record in log {
        let _ = writeln!(
            out,
            "[{}] {:<12} {}",
            record.operation_id(),
            record.status().as_str().to_uppercase(),
            record.timestamp_iso()
        );
        let _ = writeln!(out, "    {}", record.description());
        let _ = writeln!(out, "    Traceability Hash: {}", record.fingerprint());
        let _ = writeln!(out);
    }

    let _ = writeln!(
        out,
        "{} operation(s) | generated {}",
        log.len(),
        log.generated_at.format("%Y-%m-%d %H:%M:%S UTC")
    );
    out
}
