use crate::model::{RenderSettings, RenderableCheckKind, RenderablePolicy, plural};

enum Entry<'a> {
    Check(&'a crate::RenderableCheck),
    View(&'a crate::RenderableView),
    Policy(&'a RenderablePolicy),
    Elided(usize),
}

/// Render a policy as an indented tree: checks, then views, then sub-policies.
pub fn render_tree(policy: &RenderablePolicy, settings: &RenderSettings) -> String {
    let mut out = String::new();
    out.push_str(&policy_label(policy));
    out.push('\n');
    write_entries(&mut out, policy, "", 1, settings);
    out
}

fn policy_label(p: &RenderablePolicy) -> String {
    format!("{} ({})", p.display, plural(p.total_checks, "check", "checks"))
}

fn write_entries(
    out: &mut String,
    policy: &RenderablePolicy,
    prefix: &str,
    level: usize,
    settings: &RenderSettings,
) {
    let mut entries: Vec<Entry<'_>> = policy.checks.iter().map(Entry::Check).collect();
    if settings.views {
        entries.extend(policy.views.iter().map(Entry::View));
    }
    if settings.expands(level) {
        entries.extend(policy.children.iter().map(Entry::Policy));
    } else if !policy.children.is_empty() {
        entries.push(Entry::Elided(policy.children.len()));
    }

    let count = entries.len();
    for (i, entry) in entries.into_iter().enumerate() {
        let last = i + 1 == count;
        out.push_str(prefix);
        out.push_str(if last { "└── " } else { "├── " });

        match entry {
            Entry::Check(c) => {
                out.push_str("[check] ");
                out.push_str(&c.name);
                if c.kind == RenderableCheckKind::Manual {
                    out.push_str(" (manual)");
                }
                out.push('\n');
            }
            Entry::View(v) => {
                out.push_str("[view] ");
                out.push_str(&v.name);
                out.push('\n');
            }
            Entry::Policy(child) => {
                out.push_str(&policy_label(child));
                out.push('\n');
                let next = format!("{prefix}{}", if last { "    " } else { "│   " });
                write_entries(out, child, &next, level + 1, settings);
            }
            Entry::Elided(n) => {
                out.push_str(&format!("... {}\n", plural(n, "sub-policy", "sub-policies")));
            }
        }
    }
}
