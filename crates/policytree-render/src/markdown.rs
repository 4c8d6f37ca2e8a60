use crate::model::{RenderSettings, RenderableCheckKind, RenderablePolicy, plural};

/// Render a policy and its expanded sub-policies as Markdown sections.
///
/// Heading levels follow tree depth and stop growing at `######`.
pub fn render_markdown(policy: &RenderablePolicy, settings: &RenderSettings) -> String {
    let mut out = String::new();
    write_policy(&mut out, policy, 0, settings);
    out
}

fn write_policy(out: &mut String, p: &RenderablePolicy, level: usize, settings: &RenderSettings) {
    if level > 0 {
        out.push('\n');
    }
    out.push_str(&"#".repeat((level + 1).min(6)));
    out.push(' ');
    out.push_str(&p.display);
    out.push_str("\n\n");

    if !p.title.is_empty() {
        out.push_str(&p.title);
        out.push_str("\n\n");
    }

    out.push_str(&format!("- Version: `{}`\n", p.version));
    if let Some(source) = &p.source {
        out.push_str(&format!("- Source: `{}`\n", source));
    }
    if !p.providers.is_empty() {
        out.push_str(&format!("- Providers: {}\n", p.providers.join(", ")));
    }
    out.push_str(&format!("- Checks: {} total\n", p.total_checks));

    if !p.checks.is_empty() {
        out.push_str("\n**Checks**\n\n");
        for c in &p.checks {
            let kind = match c.kind {
                RenderableCheckKind::Manual => "manual",
                RenderableCheckKind::Automatic => "automatic",
            };
            if c.title.is_empty() {
                out.push_str(&format!("- `{}` ({})\n", c.name, kind));
            } else {
                out.push_str(&format!("- `{}` ({}): {}\n", c.name, kind, c.title));
            }
            if let Some(reason) = &c.reason {
                out.push_str(&format!("  - reason: {}\n", reason));
            }
        }
    }

    if settings.views && !p.views.is_empty() {
        out.push_str("\n**Views**\n\n");
        for v in &p.views {
            if v.title.is_empty() {
                out.push_str(&format!("- `{}`\n", v.name));
            } else {
                out.push_str(&format!("- `{}`: {}\n", v.name, v.title));
            }
        }
    }

    if p.children.is_empty() {
        return;
    }
    if settings.expands(level + 1) {
        for child in &p.children {
            write_policy(out, child, level + 1, settings);
        }
    } else {
        out.push_str(&format!(
            "\n> {} not shown.\n",
            plural(p.children.len(), "sub-policy", "sub-policies")
        ));
    }
}
