//! Fixed-width text rendering of the attendance grid.

use chrono::NaiveTime;

use crate::error::ReportResult;
use crate::models::{DayCell, MonthlyReport, ReportLabels};

use super::ReportRenderer;

/// Default number of lines on one printed page.
pub const DEFAULT_LINES_PER_PAGE: usize = 40;

/// Separates pages in rendered text.
pub const PAGE_BREAK: char = '\u{000C}';

const TIME_FORMAT: &str = "%H:%M:%S";
const DAY_WIDTH: usize = 3;
const WEEKDAY_WIDTH: usize = 9;
const SLOT_WIDTH: usize = 8;
const SEPARATOR: &str = " | ";
const COLUMN_GAP: &str = "    ";

/// Title, blank line, slot captions and column headers.
const HEADER_LINES: usize = 4;

/// Renders a report as a two-column fixed-width grid.
///
/// Each page repeats the title and column headers. When the grid does not
/// fit in `lines_per_page` lines, pages are separated by [`PAGE_BREAK`].
#[derive(Debug, Clone, Copy)]
pub struct TextRenderer {
    lines_per_page: usize,
}

impl TextRenderer {
    /// Creates a renderer with the given page height.
    pub fn new(lines_per_page: usize) -> Self {
        Self { lines_per_page }
    }

    fn rows_per_page(&self) -> usize {
        self.lines_per_page.saturating_sub(HEADER_LINES).max(1)
    }

    fn header(&self, report: &MonthlyReport, labels: &ReportLabels) -> Vec<String> {
        let title = format!(
            "{}: {} | {}: {} | {}",
            labels.title, report.employee_name, labels.registry, report.employee_id, report.heading
        );

        let caption_block = caption_block(labels);
        let captions = format!("{caption_block}{COLUMN_GAP}{caption_block}");

        let header_block = grid_block([
            labels.day.as_str(),
            labels.weekday.as_str(),
            labels.entry.as_str(),
            labels.exit.as_str(),
            labels.entry.as_str(),
            labels.exit.as_str(),
        ]);
        let columns = format!("{header_block}{COLUMN_GAP}{header_block}");

        vec![title, String::new(), captions.trim_end().to_string(), columns]
    }
}

impl Default for TextRenderer {
    fn default() -> Self {
        Self::new(DEFAULT_LINES_PER_PAGE)
    }
}

impl ReportRenderer for TextRenderer {
    fn extension(&self) -> &str {
        "txt"
    }

    fn render(&self, report: &MonthlyReport, labels: &ReportLabels) -> ReportResult<Vec<u8>> {
        let header = self.header(report, labels);
        let lines: Vec<String> = report
            .rows
            .iter()
            .map(|row| {
                let left = cell_block(&row.left, labels);
                match &row.right {
                    Some(right) => format!("{left}{COLUMN_GAP}{}", cell_block(right, labels)),
                    None => left,
                }
            })
            .collect();

        let pages: Vec<String> = lines
            .chunks(self.rows_per_page())
            .map(|chunk| {
                let mut page = header.join("\n");
                for line in chunk {
                    page.push('\n');
                    page.push_str(line.trim_end());
                }
                page.push('\n');
                page
            })
            .collect();

        Ok(pages.join(&PAGE_BREAK.to_string()).into_bytes())
    }
}

fn grid_block(cells: [&str; 6]) -> String {
    let [day, weekday, s1, s2, s3, s4] = cells;
    [
        format!("{:^DAY_WIDTH$}", day),
        format!("{:<WEEKDAY_WIDTH$}", weekday),
        format!("{:^SLOT_WIDTH$}", s1),
        format!("{:^SLOT_WIDTH$}", s2),
        format!("{:^SLOT_WIDTH$}", s3),
        format!("{:^SLOT_WIDTH$}", s4),
    ]
    .join(SEPARATOR)
}

fn caption_block(labels: &ReportLabels) -> String {
    let lead = DAY_WIDTH + WEEKDAY_WIDTH + 2 * SEPARATOR.len();
    let pair = 2 * SLOT_WIDTH + SEPARATOR.len();
    format!(
        "{:lead$}{:^pair$}{}{:^pair$}",
        "",
        labels.morning,
        " ".repeat(SEPARATOR.len()),
        labels.afternoon
    )
}

fn cell_block(cell: &DayCell, labels: &ReportLabels) -> String {
    let day = format!("{:02}", cell.day);
    let [s1, s2, s3, s4] = cell.slots.as_array().map(|slot| format_slot(slot, labels));
    grid_block([
        day.as_str(),
        cell.weekday.as_str(),
        s1.as_str(),
        s2.as_str(),
        s3.as_str(),
        s4.as_str(),
    ])
}

fn format_slot(slot: Option<NaiveTime>, labels: &ReportLabels) -> String {
    slot.map(|t| t.format(TIME_FORMAT).to_string())
        .unwrap_or_else(|| labels.missing.clone())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{DayPunches, EmployeeMonthGroup, NameTable, YearMonth};
    use crate::processing::build_report;
    use chrono::Weekday;

    fn make_time(s: &str) -> NaiveTime {
        NaiveTime::parse_from_str(s, "%H:%M:%S").unwrap()
    }

    fn january_report() -> MonthlyReport {
        let mut group = EmployeeMonthGroup::new("1001", "Ana Torres");
        let mut day = DayPunches::new(Weekday::Wed);
        day.times = vec![
            make_time("08:00:00"),
            make_time("12:00:00"),
            make_time("13:00:00"),
            make_time("17:00:00"),
        ];
        group.days.insert(17, day);
        build_report(&group, &YearMonth::parse("2024-01").unwrap(), &NameTable::spanish())
    }

    fn render_text(renderer: TextRenderer, report: &MonthlyReport) -> String {
        String::from_utf8(renderer.render(report, &ReportLabels::default()).unwrap()).unwrap()
    }

    #[test]
    fn test_title_line() {
        let text = render_text(TextRenderer::default(), &january_report());
        assert_eq!(
            text.lines().next().unwrap(),
            "Asistencia: Ana Torres | Registro: 1001 | ENERO 2024"
        );
    }

    #[test]
    fn test_header_lines_contain_captions() {
        let text = render_text(TextRenderer::default(), &january_report());
        let lines: Vec<&str> = text.lines().collect();
        assert_eq!(lines[2].matches("Mañana").count(), 2);
        assert_eq!(lines[2].matches("Tarde").count(), 2);
        assert_eq!(lines[3].matches("Entrada").count(), 4);
        assert_eq!(lines[3].matches("Salida").count(), 4);
    }

    #[test]
    fn test_single_page_has_one_line_per_row() {
        let text = render_text(TextRenderer::default(), &january_report());
        assert!(!text.contains(PAGE_BREAK));
        assert_eq!(text.lines().count(), HEADER_LINES + 16);
    }

    #[test]
    fn test_row_pairs_days_and_prints_slots() {
        let text = render_text(TextRenderer::default(), &january_report());
        let first_row = text.lines().nth(HEADER_LINES).unwrap();

        assert!(first_row.starts_with("01  | Lunes"));
        assert!(first_row.contains("17  | Miércoles | 08:00:00 | 12:00:00 | 13:00:00 | 17:00:00"));
        assert_eq!(first_row.matches("-----").count(), 4);
    }

    #[test]
    fn test_last_row_of_odd_month_has_no_right_cell() {
        let text = render_text(TextRenderer::default(), &january_report());
        let last_row = text.lines().last().unwrap();
        assert!(last_row.starts_with("16  | Martes"));
        assert_eq!(last_row.matches("-----").count(), 4);
        assert!(!last_row.ends_with(' '));
    }

    #[test]
    fn test_custom_missing_sentinel() {
        let labels = ReportLabels {
            missing: "--:--".to_string(),
            ..ReportLabels::default()
        };
        let bytes = TextRenderer::default().render(&january_report(), &labels).unwrap();
        let text = String::from_utf8(bytes).unwrap();
        assert!(text.contains("--:--"));
        assert!(!text.contains("-----"));
    }

    #[test]
    fn test_pagination_repeats_header() {
        // 10 lines per page leaves 6 rows: 16 rows need 3 pages.
        let text = render_text(TextRenderer::new(10), &january_report());
        let pages: Vec<&str> = text.split(PAGE_BREAK).collect();

        assert_eq!(pages.len(), 3);
        for page in &pages {
            assert!(page.starts_with("Asistencia: Ana Torres"));
        }
        assert_eq!(pages[2].lines().count(), HEADER_LINES + 4);
    }

    #[test]
    fn test_tiny_page_still_renders_every_row() {
        let text = render_text(TextRenderer::new(0), &january_report());
        assert_eq!(text.split(PAGE_BREAK).count(), 16);
    }
}
