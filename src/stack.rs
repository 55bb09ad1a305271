//! Joins `docker ps` with `docker stats` into one row per container.

use regex::Regex;
use tracing::warn;

use crate::config::Settings;
use crate::error::RunError;
use crate::runner::{Binary, Exec};
use crate::table::{self, Record};

/// Shown for CPU / RAM when no stats row matches a container.
pub const UNKNOWN: &str = "??";

/// A `ps` record plus usage figures and the derived app name.
#[derive(Debug, Clone, PartialEq)]
pub struct ContainerRow {
    pub app: String,
    pub cpu: String,
    pub ram: String,
    pub record: Record,
}

impl ContainerRow {
    /// Field lookup across derived and `ps` columns; absent fields are empty.
    pub fn get(&self, key: &str) -> &str {
        match key {
            "app" => &self.app,
            "cpu" => &self.cpu,
            "ram" => &self.ram,
            _ => self.record.get(key).map_or("", String::as_str),
        }
    }

    pub fn names(&self) -> &str {
        self.get("names")
    }

    pub fn status(&self) -> &str {
        self.get("status")
    }

    /// Running and reporting usage.
    pub fn is_healthy(&self) -> bool {
        self.status().starts_with("Up") && self.cpu != UNKNOWN
    }
}

/// `stack_admin_1` -> `admin`; names the pattern does not match stay as they are.
pub fn derive_app(names: &str, pattern: &Regex) -> String {
    pattern
        .captures(names)
        .and_then(|caps| caps.get(1))
        .map_or_else(|| names.to_string(), |m| m.as_str().to_string())
}

/// Join containers with their stats by container id, sorted by app.
pub fn aggregate(containers: Vec<Record>, stats: &[Record], pattern: &Regex) -> Vec<ContainerRow> {
    let mut rows: Vec<ContainerRow> = containers
        .into_iter()
        .map(|record| {
            let stat = record
                .get("container id")
                .and_then(|id| stats.iter().find(|s| stat_id(s) == Some(id)));
            let usage = |column: &str| {
                stat.and_then(|s| s.get(column))
                    .map_or_else(|| UNKNOWN.to_string(), String::clone)
            };
            ContainerRow {
                app: derive_app(record.get("names").map_or("", String::as_str), pattern),
                cpu: usage("cpu %"),
                ram: usage("mem %"),
                record,
            }
        })
        .collect();

    rows.sort_by(|a, b| a.app.cmp(&b.app));
    rows
}

/// Older engines title the id column of `docker stats` just `CONTAINER`.
fn stat_id(stat: &Record) -> Option<&String> {
    stat.get("container id").or_else(|| stat.get("container"))
}

/// Run `ps` and `stats` side by side and aggregate their tables.
pub fn query_rows(exec: &dyn Exec, settings: &Settings) -> Result<Vec<ContainerRow>, RunError> {
    let ps_args = ps_args(settings.all_containers);
    let stats_args: Vec<String> = vec!["stats".into(), "--no-stream".into()];

    let (ps, stats) = std::thread::scope(|scope| {
        let stats = scope.spawn(|| exec.run(Binary::Docker, &stats_args));
        let ps = exec.run(Binary::Docker, &ps_args);
        let stats = stats
            .join()
            .unwrap_or_else(|panic| std::panic::resume_unwind(panic));
        (ps, stats)
    });

    let locator = settings.column_offsets.locator();
    let containers = table::parse_table(&ps?.stdout, locator);
    let stats = table::parse_table(&stats?.stdout, locator);
    Ok(aggregate(containers, &stats, &settings.name_pattern))
}

/// Rows for the menu; an unreachable engine renders as an empty stack.
pub fn fetch_rows(exec: &dyn Exec, settings: &Settings) -> Vec<ContainerRow> {
    match query_rows(exec, settings) {
        Ok(rows) => rows,
        Err(err @ (RunError::Spawn { .. } | RunError::Exit { .. })) => {
            warn!(%err, "docker unavailable, rendering an empty stack");
            Vec::new()
        }
    }
}

fn ps_args(all: bool) -> Vec<String> {
    let mut args = vec!["ps".to_string()];
    if all {
        args.push("-a".into());
    }
    args
}
