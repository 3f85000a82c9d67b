//! Human-readable summary renderer for diff lists.

use crate::compare::model::Diff;

/// Render a Markdown summary of `diffs`.
///
/// Intended for assertion failure messages and review output. It is
/// informational only and lists diffs in the order given.
pub fn render_human_summary(diffs: &[Diff]) -> String {
    let mut out = String::new();

    out.push_str("## Structural Diff\n\n");

    if diffs.is_empty() {
        out.push_str("_No differences detected._\n");
        return out;
    }

    out.push_str(&format!("**Differences**: {}\n\n", diffs.len()));
    out.push_str("| Field | Expected | Actual |\n|---|---|---|\n");
    for diff in diffs {
        out.push_str(&format!(
            "| `{}` | `{}` | `{}` |\n",
            diff.display_field(),
            cell(&diff.expected.to_string()),
            cell(&diff.actual.to_string())
        ));
    }
    out
}

/// Escape table separators and truncate long values.
fn cell(value: &str) -> String {
    const MAX: usize = 60;
    let escaped = value.replace('|', "\\|");
    if escaped.chars().count() > MAX {
        let truncated: String = escaped.chars().take(MAX).collect();
        format!("{}…", truncated)
    } else {
        escaped
    }
}
