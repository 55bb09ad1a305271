//! BitBar plugin output: `text | key=value ...`, `---` separators,
//! submenu lines prefixed with `--` per level.

use super::{Entry, MenuItem};

pub fn render(entries: &[Entry]) -> String {
    let mut out = String::new();
    write_entries(&mut out, entries, 0);
    out
}

fn write_entries(out: &mut String, entries: &[Entry], depth: usize) {
    let prefix = "--".repeat(depth);
    for entry in entries {
        match entry {
            Entry::Separator => {
                out.push_str(&prefix);
                out.push_str("---\n");
            }
            Entry::Item(item) => {
                out.push_str(&prefix);
                out.push_str(&line(item));
                out.push('\n');
                write_entries(out, &item.submenu, depth + 1);
            }
        }
    }
}

fn line(item: &MenuItem) -> String {
    let text = item.text.replace('|', "¦");
    let attrs = attributes(item);
    if attrs.is_empty() {
        text
    } else {
        format!("{text} | {}", attrs.join(" "))
    }
}

fn attributes(item: &MenuItem) -> Vec<String> {
    let mut attrs = Vec::new();
    if let Some(color) = item.color {
        attrs.push(format!("color={}", color.as_str()));
    }
    if let Some(font) = &item.font {
        attrs.push(format!("font={}", quote(font)));
    }
    if let Some(size) = item.size {
        attrs.push(format!("size={size}"));
    }
    if item.title_only {
        attrs.push("dropdown=false".into());
    }
    if let Some(action) = &item.action {
        attrs.push(format!("bash={}", quote(&action.program.to_string_lossy())));
        for (i, param) in action.params.iter().enumerate() {
            attrs.push(format!("param{}={}", i + 1, quote(param)));
        }
        attrs.push(format!("terminal={}", action.terminal));
    }
    if item.refresh {
        attrs.push("refresh=true".into());
    }
    attrs
}

fn quote(value: &str) -> String {
    if value.is_empty() || value.contains(|c: char| c.is_whitespace() || c == '"') {
        format!("\"{}\"", value.replace('"', "\\\""))
    } else {
        value.to_string()
    }
}
