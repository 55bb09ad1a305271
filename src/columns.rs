//! Fixed-width columns for the monospace container rows.

use crate::stack::ContainerRow;

/// Display columns, in order.
pub const COLUMNS: [&str; 5] = ["app", "image", "cpu", "ram", "status"];

const SEPARATOR: &str = "  ";

/// Width of every display column over one row set.
#[derive(Debug, Clone, PartialEq)]
pub struct ColumnWidths {
    widths: [usize; COLUMNS.len()],
}

impl ColumnWidths {
    /// Widest cell (header title included) per column, capped at `max`.
    pub fn compute(rows: &[ContainerRow], max: usize) -> Self {
        let widths = COLUMNS.map(|key| {
            let widest = rows
                .iter()
                .map(|row| row.get(key).chars().count())
                .fold(key.chars().count(), usize::max);
            widest.min(max)
        });
        Self { widths }
    }

    /// One aligned line; `None` renders the upper-cased header.
    pub fn render(&self, row: Option<&ContainerRow>) -> String {
        COLUMNS
            .iter()
            .zip(self.widths)
            .map(|(key, width)| match row {
                Some(row) => fit(row.get(key), width),
                None => fit(&key.to_uppercase(), width),
            })
            .collect::<Vec<_>>()
            .join(SEPARATOR)
    }
}

/// Cut to `width` chars, or pad with spaces up to it.
fn fit(text: &str, width: usize) -> String {
    let mut out: String = text.chars().take(width).collect();
    let len = out.chars().count();
    out.extend(std::iter::repeat_n(' ', width - len));
    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::table::Record;

    fn row(app: &str, image: &str, cpu: &str, ram: &str, status: &str) -> ContainerRow {
        let record: Record = [("image", image), ("status", status)]
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        ContainerRow {
            app: app.into(),
            cpu: cpu.into(),
            ram: ram.into(),
            record,
        }
    }

    fn width(widths: &ColumnWidths, key: &str) -> usize {
        let i = COLUMNS.iter().position(|k| *k == key).unwrap();
        widths.widths[i]
    }

    // ── compute ──

    #[test]
    fn test_header_is_minimum_width() {
        let widths = ColumnWidths::compute(&[row("db", "pg", "1%", "2%", "Up")], 50);
        assert_eq!(width(&widths, "app"), 3);
        assert_eq!(width(&widths, "image"), 5);
        assert_eq!(width(&widths, "status"), 6);
    }

    #[test]
    fn test_widest_value_wins() {
        let rows = [
            row("web", "nginx:1.25-alpine", "0.10%", "1.5%", "Up 2 hours"),
            row("worker", "app:latest", "120.33%", "12.25%", "Up 5 seconds"),
        ];
        let widths = ColumnWidths::compute(&rows, 50);
        assert_eq!(width(&widths, "app"), 6);
        assert_eq!(width(&widths, "image"), 17);
        assert_eq!(width(&widths, "cpu"), 7);
        assert_eq!(width(&widths, "ram"), 6);
        assert_eq!(width(&widths, "status"), 12);
    }

    #[test]
    fn test_capped_at_max() {
        let long = "x".repeat(80);
        let widths = ColumnWidths::compute(&[row("a", &long, "1%", "1%", "Up")], 50);
        assert_eq!(width(&widths, "image"), 50);
    }

    #[test]
    fn test_no_rows_uses_headers() {
        let widths = ColumnWidths::compute(&[], 50);
        assert_eq!(widths.render(None), "APP  IMAGE  CPU  RAM  STATUS");
    }

    // ── render ──

    #[test]
    fn test_render_pads_rows() {
        let rows = [
            row("web", "nginx", "0.1%", "1%", "Up 2 hours"),
            row("api", "node:20", "12.5%", "3%", "Exited (0)"),
        ];
        let widths = ColumnWidths::compute(&rows, 50);
        assert_eq!(widths.render(None), "APP  IMAGE    CPU    RAM  STATUS    ");
        assert_eq!(widths.render(Some(&rows[0])), "web  nginx    0.1%   1%   Up 2 hours");
        assert_eq!(widths.render(Some(&rows[1])), "api  node:20  12.5%  3%   Exited (0)");
    }

    #[test]
    fn test_render_truncates_without_ellipsis() {
        let long = format!("registry.example.com/{}", "a".repeat(40));
        let rows = [row("web", &long, "1%", "1%", "Up")];
        let widths = ColumnWidths::compute(&rows, 50);
        let line = widths.render(Some(&rows[0]));
        let image = line.split("  ").nth(1).unwrap();
        assert_eq!(image.chars().count(), 50);
        assert!(long.starts_with(image));
    }

    #[test]
    fn test_fit() {
        assert_eq!(fit("abc", 5), "abc  ");
        assert_eq!(fit("abcdef", 3), "abc");
        assert_eq!(fit("", 2), "  ");
    }
}
