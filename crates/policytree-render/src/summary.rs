#[derive(Clone, Debug, PartialEq, Eq)]
pub struct RenderableSummaryRow {
    pub display: String,
    pub version: String,
    pub source_type: String,
    pub total_checks: usize,
    pub hash: String,
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct RenderableSummary {
    pub rows: Vec<RenderableSummaryRow>,
    pub total_checks: usize,
    pub used_custom: usize,
    pub hub: usize,
}

const SHORT_HASH: usize = 12;

pub fn render_summary_markdown(summary: &RenderableSummary) -> String {
    let mut out = String::new();

    out.push_str("# Policy summary\n\n");
    out.push_str(&format!(
        "- Policies: {} (custom: {}, hub: {})\n- Checks: {} total\n",
        summary.rows.len(),
        summary.used_custom,
        summary.hub,
        summary.total_checks
    ));

    if summary.rows.is_empty() {
        out.push_str("\nNo policies.\n");
        return out;
    }

    out.push_str("\n| Policy | Version | Source | Checks | Hash |\n");
    out.push_str("|---|---|---|---|---|\n");
    for row in &summary.rows {
        let source = if row.source_type.is_empty() {
            "-"
        } else {
            row.source_type.as_str()
        };
        let hash = row.hash.get(..SHORT_HASH).unwrap_or(&row.hash);
        out.push_str(&format!(
            "| `{}` | {} | {} | {} | `{}` |\n",
            row.display, row.version, source, row.total_checks, hash
        ));
    }

    out
}
