//! SVG infographic generation.
//!
//! Lays out a single US-letter page from a [`YearReport`]: title, book
//! count, top authors, month and week charts, grades, genres and media.
//! Everything here is presentation; the numbers all come from the report.

use crate::aggregator::{LabelCount, PeriodCounts, YearReport};
use crate::utils::config::{PAGE_HEIGHT, PAGE_WIDTH};
use crate::utils::error::RenderError;
use log::{debug, info};

const TITLE_COLOR: &str = "#aa6688";
const HEADING_COLOR: &str = "grey";
const TEXT_COLOR: &str = "#333333";
const BAR_COLOR: &str = "#aa6688";
const PAPER_COLOR: &str = "#fbf8f3";
const FONT_FAMILY: &str = "DejaVu Sans Mono, Menlo, monospace";

const MONTH_INITIALS: [&str; 12] = ["J", "F", "M", "A", "M", "J", "J", "A", "S", "O", "N", "D"];
const SPINE_COLORS: [&str; 5] = ["#aa6688", "#6688aa", "#88aa66", "#c9a04a", "#7a6a9a"];

// Horizontal extent shared by the full-width charts
const LEFT: f64 = 60.0;
const RIGHT: f64 = 790.0;

/// Infographic configuration
#[derive(Debug, Clone)]
pub struct InfographicConfig {
    /// Overrides the default "Year in Books {year}" title
    pub title: Option<String>,
    /// Overrides the reader named in the catalog
    pub reader: Option<String>,
    /// Draw the paper tint and book-spine decoration
    pub background: bool,
    pub width: usize,
    pub height: usize,
}

impl Default for InfographicConfig {
    fn default() -> Self {
        Self {
            title: None,
            reader: None,
            background: true,
            width: PAGE_WIDTH,
            height: PAGE_HEIGHT,
        }
    }
}

impl InfographicConfig {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_title(mut self, title: impl Into<String>) -> Self {
        self.title = Some(title.into());
        self
    }

    pub fn with_reader(mut self, reader: impl Into<String>) -> Self {
        self.reader = Some(reader.into());
        self
    }

    pub fn with_background(mut self, background: bool) -> Self {
        self.background = background;
        self
    }
}

#[derive(Debug, Clone, Copy)]
struct TextStyle {
    size: u32,
    color: &'static str,
    anchor: &'static str,
    bold: bool,
}

impl TextStyle {
    const fn new(size: u32, color: &'static str) -> Self {
        Self {
            size,
            color,
            anchor: "start",
            bold: false,
        }
    }

    const fn bold(self) -> Self {
        Self { bold: true, ..self }
    }

    const fn anchor(self, anchor: &'static str) -> Self {
        Self { anchor, ..self }
    }
}

const HEADING: TextStyle = TextStyle::new(24, HEADING_COLOR).bold();
const BODY: TextStyle = TextStyle::new(14, TEXT_COLOR);
const SMALL: TextStyle = TextStyle::new(11, HEADING_COLOR);

/// Generate the SVG infographic for a report
///
/// **Public** - main entry point for infographic rendering
///
/// # Errors
/// * `RenderError::InvalidSize` - Width or height is zero
///
/// An empty catalog still renders: a page with "0 books" and no tables.
pub fn generate_infographic(
    report: &YearReport,
    config: Option<&InfographicConfig>,
) -> Result<String, RenderError> {
    let config = config.cloned().unwrap_or_default();
    if config.width == 0 || config.height == 0 {
        return Err(RenderError::InvalidSize {
            width: config.width,
            height: config.height,
        });
    }

    info!("Generating infographic for {} books", report.total_books);

    let mut svg_content = String::new();

    // Header: fixed page coordinates, scaled to the requested size
    svg_content.push_str(&format!(
        r#"<svg xmlns="http://www.w3.org/2000/svg" width="{}" height="{}" viewBox="0 0 {} {}">"#,
        config.width, config.height, PAGE_WIDTH, PAGE_HEIGHT
    ));
    svg_content.push_str(&format!(
        r#"<style>text {{ font-family: {}; }}</style>"#,
        FONT_FAMILY
    ));

    render_background(&mut svg_content, config.background);

    let title = config.title.clone().unwrap_or_else(|| match report.reporting_year {
        Some(year) => format!("Year in Books {}", year),
        None => "Year in Books".to_string(),
    });
    let reader = config.reader.as_deref().or(report.reader.as_deref());
    render_title(&mut svg_content, &title, reader);

    render_count(&mut svg_content, report);
    render_authors(&mut svg_content, &report.top_authors, report.top_authors_requested);

    match &report.periods {
        Some(periods) => {
            render_monthly(&mut svg_content, &periods.monthly);
            render_weekly(&mut svg_content, &periods.weekly);
            render_date_range(&mut svg_content, periods);
        }
        None => debug!("No finish dates, skipping period charts"),
    }

    render_grades(&mut svg_content, &report.grades);
    render_table(&mut svg_content, "Top genres", &report.genres, 460.0, 740.0);
    render_inline(&mut svg_content, "Media", &report.media, LEFT, 960.0);
    render_inline(&mut svg_content, "Via", &report.via, 460.0, 960.0);

    svg_content.push_str("</svg>");

    info!("Infographic generated successfully ({} bytes)", svg_content.len());
    Ok(svg_content)
}

fn render_background(out: &mut String, decorate: bool) {
    let fill = if decorate { PAPER_COLOR } else { "white" };
    out.push_str(&format!(
        r#"<rect x="0" y="0" width="{}" height="{}" fill="{}"/>"#,
        PAGE_WIDTH, PAGE_HEIGHT, fill
    ));

    if !decorate {
        return;
    }

    // A shelf of book spines along the bottom edge
    let spine_width = 25;
    for i in 0..PAGE_WIDTH / spine_width {
        let height = 40 + (i * 37) % 50;
        out.push_str(&format!(
            r#"<rect x="{}" y="{}" width="{}" height="{}" fill="{}" opacity="0.18" rx="2"/>"#,
            i * spine_width + 1,
            PAGE_HEIGHT - height,
            spine_width - 2,
            height,
            SPINE_COLORS[i % SPINE_COLORS.len()]
        ));
    }
}

fn render_title(out: &mut String, title: &str, reader: Option<&str>) {
    let right = RIGHT - 25.0;
    push_text(
        out,
        right,
        90.0,
        TextStyle::new(28, TITLE_COLOR).bold().anchor("end"),
        title,
    );
    if let Some(reader) = reader {
        push_text(
            out,
            right,
            120.0,
            TextStyle::new(20, HEADING_COLOR).anchor("end"),
            reader,
        );
    }
}

fn render_count(out: &mut String, report: &YearReport) {
    let center = 125.0;
    push_text(
        out,
        center,
        230.0,
        TextStyle::new(100, HEADING_COLOR).bold().anchor("middle"),
        &report.total_books.to_string(),
    );
    let noun = if report.total_books == 1 { "book" } else { "books" };
    push_text(
        out,
        center,
        262.0,
        TextStyle::new(18, HEADING_COLOR).anchor("middle"),
        noun,
    );
    if report.total_pages > 0 {
        push_text(
            out,
            center,
            290.0,
            TextStyle::new(14, HEADING_COLOR).anchor("middle"),
            &format!("{} pages", report.total_pages),
        );
    }
}

fn render_authors(out: &mut String, authors: &[LabelCount], requested: usize) {
    if authors.is_empty() {
        return;
    }

    let left = 500.0;
    let top = 200.0;
    let heading = match requested {
        1 => "Top author".to_string(),
        n => format!("Top {} authors", n),
    };
    push_text(out, left, top, HEADING, &heading);

    for (i, author) in authors.iter().enumerate() {
        let y = top + 30.0 + i as f64 * 20.0;
        push_text(out, left, y, BODY, &truncate(&author.label, 30));
        push_text(out, RIGHT, y, BODY.anchor("end"), &author.count.to_string());
    }
}

fn render_monthly(out: &mut String, monthly: &[usize]) {
    let top = 350.0;
    let baseline = 560.0;
    let max_bar = 160.0;

    push_text(out, LEFT, top, HEADING, "Books per month");

    let max = monthly.iter().copied().max().unwrap_or(0).max(1) as f64;
    let slot = (RIGHT - LEFT) / monthly.len().max(1) as f64;
    let bar_width = slot * 0.7;

    for (i, &count) in monthly.iter().enumerate() {
        let x = LEFT + i as f64 * slot + (slot - bar_width) / 2.0;
        let height = count as f64 / max * max_bar;
        let center = x + bar_width / 2.0;

        out.push_str(&format!(
            r#"<rect x="{:.2}" y="{:.2}" width="{:.2}" height="{:.2}" fill="{}"><title>{} books</title></rect>"#,
            x,
            baseline - height,
            bar_width,
            height,
            BAR_COLOR,
            count
        ));
        if count > 0 {
            push_text(
                out,
                center,
                baseline - height - 6.0,
                BODY.anchor("middle"),
                &count.to_string(),
            );
        }
        push_text(
            out,
            center,
            baseline + 20.0,
            SMALL.anchor("middle"),
            MONTH_INITIALS.get(i).copied().unwrap_or(""),
        );
    }
}

fn render_weekly(out: &mut String, weekly: &[usize]) {
    let top = 625.0;
    push_text(out, LEFT, top, HEADING, "Weekly timeline");

    let max = weekly.iter().copied().max().unwrap_or(0).max(1) as f64;
    let slot = (RIGHT - LEFT) / weekly.len().max(1) as f64;

    for (i, &count) in weekly.iter().enumerate() {
        let opacity = if count == 0 {
            0.08
        } else {
            0.3 + 0.7 * count as f64 / max
        };
        out.push_str(&format!(
            r#"<rect x="{:.2}" y="{:.2}" width="{:.2}" height="24" fill="{}" opacity="{:.2}" rx="2"><title>Week {}: {} books</title></rect>"#,
            LEFT + i as f64 * slot,
            top + 12.0,
            slot - 2.0,
            BAR_COLOR,
            opacity,
            i + 1,
            count
        ));
    }
}

fn render_date_range(out: &mut String, periods: &PeriodCounts) {
    push_text(
        out,
        RIGHT,
        680.0,
        SMALL.anchor("end"),
        &format!(
            "{} to {}",
            periods.first_finished.format("%b %-d"),
            periods.last_finished.format("%b %-d")
        ),
    );
}

fn render_grades(out: &mut String, grades: &[LabelCount]) {
    if grades.is_empty() {
        return;
    }

    let top = 740.0;
    let bar_left = LEFT + 50.0;
    let max_bar = 240.0;
    push_text(out, LEFT, top, HEADING, "Grades");

    let max = grades.iter().map(|g| g.count).max().unwrap_or(0).max(1) as f64;
    for (i, grade) in grades.iter().take(8).enumerate() {
        let y = top + 30.0 + i as f64 * 22.0;
        let width = grade.count as f64 / max * max_bar;

        push_text(out, LEFT, y, BODY, &truncate(&grade.label, 4));
        out.push_str(&format!(
            r#"<rect x="{:.2}" y="{:.2}" width="{:.2}" height="14" fill="{}"/>"#,
            bar_left,
            y - 12.0,
            width,
            BAR_COLOR
        ));
        push_text(out, bar_left + width + 8.0, y, SMALL, &grade.count.to_string());
    }
}

fn render_table(out: &mut String, heading: &str, entries: &[LabelCount], left: f64, top: f64) {
    if entries.is_empty() {
        return;
    }

    push_text(out, left, top, HEADING, heading);
    for (i, entry) in entries.iter().take(8).enumerate() {
        let y = top + 30.0 + i as f64 * 20.0;
        push_text(out, left, y, BODY, &truncate(&entry.label, 32));
        push_text(out, RIGHT, y, BODY.anchor("end"), &entry.count.to_string());
    }
}

fn render_inline(out: &mut String, heading: &str, entries: &[LabelCount], left: f64, top: f64) {
    if entries.is_empty() {
        return;
    }

    push_text(out, left, top, HEADING, heading);
    let line = entries
        .iter()
        .take(5)
        .map(|e| format!("{} {}", e.label, e.count))
        .collect::<Vec<_>>()
        .join(" · ");
    push_text(out, left, top + 30.0, BODY, &truncate(&line, 44));
}

fn push_text(out: &mut String, x: f64, y: f64, style: TextStyle, content: &str) {
    let weight = if style.bold { r#" font-weight="bold""# } else { "" };
    out.push_str(&format!(
        r#"<text x="{:.1}" y="{:.1}" font-size="{}" fill="{}" text-anchor="{}"{}>{}</text>"#,
        x,
        y,
        style.size,
        style.color,
        style.anchor,
        weight,
        escape_xml(content)
    ));
}

/// Escape text for use inside an SVG element
pub fn escape_xml(text: &str) -> String {
    let mut escaped = String::with_capacity(text.len());
    for c in text.chars() {
        match c {
            '&' => escaped.push_str("&amp;"),
            '<' => escaped.push_str("&lt;"),
            '>' => escaped.push_str("&gt;"),
            '"' => escaped.push_str("&quot;"),
            '\'' => escaped.push_str("&apos;"),
            _ => escaped.push(c),
        }
    }
    escaped
}

fn truncate(text: &str, max_chars: usize) -> String {
    if text.chars().count() <= max_chars {
        return text.to_string();
    }
    let kept: String = text.chars().take(max_chars.saturating_sub(3)).collect();
    format!("{}...", kept)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::aggregator::{build_report, ReportOptions};
    use crate::catalog::{Book, Catalog};
    use chrono::NaiveDate;

    fn report() -> YearReport {
        let catalog = Catalog::new(vec![
            Book::new("a", "A", "Ann & Co")
                .with_finished(NaiveDate::from_ymd_opt(2020, 1, 5).unwrap())
                .with_grade("A"),
            Book::new("b", "B", "Bob").with_pages(300),
        ])
        .unwrap();
        build_report(&catalog, &ReportOptions::default())
    }

    #[test]
    fn test_generate_infographic_contents() {
        let svg = generate_infographic(&report(), None).unwrap();

        assert!(svg.starts_with("<svg"));
        assert!(svg.ends_with("</svg>"));
        assert!(svg.contains("Year in Books 2020"));
        assert!(svg.contains("Ann &amp; Co"));
        assert!(svg.contains("Books per month"));
        assert!(svg.contains("300 pages"));
    }

    #[test]
    fn test_background_toggle() {
        let report = report();
        let plain = generate_infographic(&report, Some(&InfographicConfig::new().with_background(false)))
            .unwrap();
        let decorated = generate_infographic(&report, None).unwrap();

        assert!(!plain.contains(PAPER_COLOR));
        assert!(decorated.contains(PAPER_COLOR));
    }

    #[test]
    fn test_title_and_reader_override() {
        let config = InfographicConfig::new()
            .with_title("My Reading")
            .with_reader("Jane <J> Reader");
        let svg = generate_infographic(&report(), Some(&config)).unwrap();

        assert!(svg.contains("My Reading"));
        assert!(svg.contains("Jane &lt;J&gt; Reader"));
    }

    #[test]
    fn test_empty_report_renders_zero_books() {
        let catalog = Catalog::new(Vec::new()).unwrap();
        let report = build_report(&catalog, &ReportOptions::default());

        let svg = generate_infographic(&report, None).unwrap();

        assert!(svg.contains(">0</text>"));
        assert!(svg.contains(">books</text>"));
        assert!(svg.contains("Year in Books"));
        assert!(!svg.contains("Top "));
        assert!(!svg.contains("Books per month"));
    }

    #[test]
    fn test_authors_heading_uses_requested_count() {
        let svg = generate_infographic(&report(), None).unwrap();
        assert!(svg.contains("Top 5 authors"));
    }

    #[test]
    fn test_zero_size_is_an_error() {
        let mut config = InfographicConfig::new();
        config.width = 0;
        assert_eq!(
            generate_infographic(&report(), Some(&config)),
            Err(RenderError::InvalidSize {
                width: 0,
                height: PAGE_HEIGHT
            })
        );
    }

    #[test]
    fn test_truncate() {
        assert_eq!(truncate("short", 10), "short");
        assert_eq!(truncate("a very long author name", 10), "a very ...");
    }
}
