use std::path::PathBuf;

use super::{Action, Color, Entry, MenuItem};
use crate::columns::ColumnWidths;
use crate::config::Settings;
use crate::error::ConfigError;
use crate::runner::Binary;
use crate::stack::ContainerRow;

/// Where menu actions point to.
#[derive(Debug, Clone)]
pub struct MenuContext {
    /// This executable; the host re-invokes it with a mode keyword.
    pub plugin: PathBuf,
    pub docker_path: PathBuf,
    pub max_column_width: usize,
}

impl MenuContext {
    pub fn new(plugin: PathBuf, settings: &Settings) -> Self {
        Self {
            plugin,
            docker_path: settings.docker_path.clone(),
            max_column_width: settings.max_column_width,
        }
    }

    /// Run `docker-bar <params>` in the background.
    fn plugin_action(&self, params: &[&str]) -> Action {
        Action {
            program: self.plugin.clone(),
            params: params.iter().map(|p| p.to_string()).collect(),
            terminal: false,
        }
    }

    /// Run one of the CLIs directly in a terminal window.
    fn terminal_action(&self, binary: Binary, params: &[&str]) -> Action {
        Action {
            program: self.docker_path.join(binary.name()),
            params: params.iter().map(|p| p.to_string()).collect(),
            terminal: true,
        }
    }

    fn command(&self, text: &str, params: &[&str]) -> Entry {
        MenuItem::new(text)
            .refresh()
            .action(self.plugin_action(params))
            .into()
    }
}

/// Healthy / unhealthy counts shown in the menu bar.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Summary {
    pub healthy: usize,
    pub unhealthy: usize,
    pub loaded: bool,
}

impl Summary {
    pub fn of(rows: &[ContainerRow]) -> Self {
        let healthy = rows.iter().filter(|r| r.is_healthy()).count();
        Self {
            healthy,
            unhealthy: rows.len() - healthy,
            loaded: !rows.is_empty(),
        }
    }

    pub fn title(&self) -> String {
        let mut title = String::from("🐳");
        if self.healthy > 0 {
            title.push_str(&self.healthy.to_string());
        }
        if self.unhealthy > 0 {
            title.push_str(&format!("❌{}", self.unhealthy));
        }
        if !self.loaded {
            title.push_str("⛔️");
        }
        title
    }
}

/// The whole menu for one render.
pub fn build(rows: &[ContainerRow], ctx: &MenuContext) -> Vec<Entry> {
    let widths = ColumnWidths::compute(rows, ctx.max_column_width);

    let mut entries = vec![
        MenuItem::new(Summary::of(rows).title()).title_only().into(),
        Entry::Separator,
        MenuItem::new("Refresh ♻️").refresh().into(),
        Entry::Separator,
        MenuItem::new(widths.render(None)).monospace().into(),
    ];
    entries.extend(rows.iter().map(|row| container_entry(row, &widths, ctx)));
    entries.push(Entry::Separator);
    entries.extend(stack_entries(ctx));
    entries
}

fn container_entry(row: &ContainerRow, widths: &ColumnWidths, ctx: &MenuContext) -> Entry {
    let app = row.app.as_str();
    let color = if row.is_healthy() { Color::Green } else { Color::Red };
    let scale_down = format!("{app}=0");

    MenuItem::new(widths.render(Some(row)))
        .monospace()
        .color(color)
        .action(ctx.terminal_action(Binary::Docker, &["logs", "-f", row.names()]))
        .submenu(vec![
            MenuItem::new(app).into(),
            ctx.command("pull", &["docker-compose", "pull", app]),
            ctx.command("(re)start", &["restart", app]),
            ctx.command("stop", &["docker-compose", "scale", scale_down.as_str()]),
            ctx.command("logs", &["docker-compose", "logs", app]),
        ])
        .into()
}

fn stack_entries(ctx: &MenuContext) -> Vec<Entry> {
    vec![
        MenuItem::new("Logs")
            .action(ctx.terminal_action(Binary::Compose, &["logs", "-f"]))
            .into(),
        ctx.command(
            "(re)load docker-compose.yml",
            &["docker-compose", "up", "-d", "--remove-orphans"],
        ),
        ctx.command("Restart all", &["docker-compose", "restart"]),
        ctx.command("Stop all", &["docker-compose", "stop"]),
        ctx.command("Pull all", &["docker-compose", "pull"]),
        Entry::Separator,
        ctx.command("Prune stack", &["prune"]),
    ]
}

/// Shown instead of the stack when the configuration is unusable.
pub fn config_error(err: &ConfigError) -> Vec<Entry> {
    vec![
        MenuItem::new("🐳⚠️").title_only().into(),
        Entry::Separator,
        MenuItem::new(format!("Configuration error: {err}"))
            .color(Color::Red)
            .into(),
        MenuItem::new("Run `docker-bar init --global` to create a config file").into(),
        MenuItem::new("Refresh ♻️").refresh().into(),
    ]
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::stack::UNKNOWN;
    use crate::table::Record;

    fn ctx() -> MenuContext {
        MenuContext {
            plugin: "/plugins/docker-bar".into(),
            docker_path: "/usr/local/bin".into(),
            max_column_width: 50,
        }
    }

    fn row(app: &str, status: &str, cpu: &str) -> ContainerRow {
        let record: Record = [
            ("names", format!("stack_{app}_1")),
            ("image", format!("{app}:latest")),
            ("status", status.to_string()),
        ]
        .into_iter()
        .map(|(k, v)| (k.to_string(), v))
        .collect();
        ContainerRow {
            app: app.into(),
            cpu: cpu.into(),
            ram: "1.0%".into(),
            record,
        }
    }

    fn item(entry: &Entry) -> &MenuItem {
        match entry {
            Entry::Item(item) => item,
            Entry::Separator => panic!("expected an item"),
        }
    }

    fn find<'a>(entries: &'a [Entry], text: &str) -> &'a MenuItem {
        entries
            .iter()
            .filter_map(|e| match e {
                Entry::Item(item) => Some(item),
                Entry::Separator => None,
            })
            .find(|item| item.text == text)
            .unwrap_or_else(|| panic!("no entry `{text}`"))
    }

    fn params(item: &MenuItem) -> Vec<&str> {
        item.action
            .as_ref()
            .unwrap()
            .params
            .iter()
            .map(String::as_str)
            .collect()
    }

    // ── summary ──

    #[test]
    fn test_summary_counts() {
        let rows = [
            row("api", "Up 2 hours", "1%"),
            row("db", "Exited (1)", "0%"),
            row("web", "Up 1 minute", UNKNOWN),
        ];
        let summary = Summary::of(&rows);
        assert_eq!(summary, Summary { healthy: 1, unhealthy: 2, loaded: true });
        assert_eq!(summary.title(), "🐳1❌2");
    }

    #[test]
    fn test_summary_all_healthy() {
        let summary = Summary::of(&[row("api", "Up", "1%")]);
        assert_eq!(summary.title(), "🐳1");
    }

    #[test]
    fn test_summary_not_loaded() {
        let summary = Summary::of(&[]);
        assert_eq!(summary, Summary { healthy: 0, unhealthy: 0, loaded: false });
        assert_eq!(summary.title(), "🐳⛔️");
    }

    // ── build ──

    #[test]
    fn test_layout_empty_stack() {
        let entries = build(&[], &ctx());
        let title = item(&entries[0]);
        assert_eq!(title.text, "🐳⛔️");
        assert!(title.title_only);
        assert_eq!(entries[1], Entry::Separator);
        assert!(item(&entries[2]).refresh);
        assert_eq!(item(&entries[4]).text, "APP  IMAGE  CPU  RAM  STATUS");
        assert_eq!(entries[5], Entry::Separator);
        find(&entries, "Prune stack");
    }

    #[test]
    fn test_container_rows_in_order_with_health_colors() {
        let rows = [row("api", "Up 2 hours", "1%"), row("db", "Exited (1)", "0%")];
        let entries = build(&rows, &ctx());

        let api = item(&entries[5]);
        let db = item(&entries[6]);
        assert!(api.text.starts_with("api"));
        assert!(db.text.starts_with("db "));
        assert_eq!(api.color, Some(Color::Green));
        assert_eq!(db.color, Some(Color::Red));
        assert_eq!(api.font.as_deref(), Some("Courier"));
    }

    #[test]
    fn test_row_click_follows_logs() {
        let entries = build(&[row("api", "Up", "1%")], &ctx());
        let action = item(&entries[5]).action.clone().unwrap();
        assert_eq!(action.program, PathBuf::from("/usr/local/bin/docker"));
        assert_eq!(action.params, vec!["logs", "-f", "stack_api_1"]);
        assert!(action.terminal);
    }

    #[test]
    fn test_container_submenu() {
        let entries = build(&[row("api", "Up", "1%")], &ctx());
        let submenu = &item(&entries[5]).submenu;

        assert_eq!(item(&submenu[0]).text, "api");
        assert!(item(&submenu[0]).action.is_none());

        let pull = find(submenu, "pull");
        assert_eq!(params(pull), vec!["docker-compose", "pull", "api"]);
        assert!(pull.refresh);

        let restart = find(submenu, "(re)start");
        assert_eq!(params(restart), vec!["restart", "api"]);
        assert_eq!(restart.action.as_ref().unwrap().program, PathBuf::from("/plugins/docker-bar"));

        let stop = find(submenu, "stop");
        assert_eq!(params(stop), vec!["docker-compose", "scale", "api=0"]);
    }

    #[test]
    fn test_stack_actions() {
        let entries = build(&[], &ctx());

        let logs = find(&entries, "Logs");
        let action = logs.action.as_ref().unwrap();
        assert_eq!(action.program, PathBuf::from("/usr/local/bin/docker-compose"));
        assert!(action.terminal);
        assert!(!logs.refresh);

        assert_eq!(params(find(&entries, "Restart all")), vec!["docker-compose", "restart"]);
        assert_eq!(params(find(&entries, "Stop all")), vec!["docker-compose", "stop"]);
        assert_eq!(params(find(&entries, "Pull all")), vec!["docker-compose", "pull"]);
        assert_eq!(params(find(&entries, "Prune stack")), vec!["prune"]);
        assert_eq!(
            params(find(&entries, "(re)load docker-compose.yml")),
            vec!["docker-compose", "up", "-d", "--remove-orphans"]
        );
    }

    #[test]
    fn test_widths_shared_across_rows() {
        let rows = [row("api", "Up", "1%"), row("scheduler", "Up", "1%")];
        let entries = build(&rows, &ctx());
        let header = &item(&entries[4]).text;
        let first = &item(&entries[5]).text;
        let second = &item(&entries[6]).text;
        assert_eq!(header.chars().count(), first.chars().count());
        assert_eq!(first.chars().count(), second.chars().count());
    }

    #[test]
    fn test_config_error_menu() {
        let entries = config_error(&ConfigError::Missing { key: "docker_path" });
        assert_eq!(item(&entries[0]).text, "🐳⚠️");
        let message = item(&entries[2]);
        assert_eq!(message.text, "Configuration error: `docker_path` is not configured");
        assert_eq!(message.color, Some(Color::Red));
    }
}
