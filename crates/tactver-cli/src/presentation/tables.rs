//! Table formatting utilities for CLI output.

use tactver_tact::VersionRecord;

const REGION_HEADER: &str = "Region";
const BUILD_HEADER: &str = "BuildId";
const VERSION_HEADER: &str = "Version";

/// Longest version name shown before truncating.
const MAX_VERSION_WIDTH: usize = 40;

/// Truncates a string to a maximum length, adding "..." if needed.
///
/// # Examples
///
/// ```rust
/// use tactver_cli::presentation::truncate_string;
///
/// assert_eq!(truncate_string("Hello", 10), "Hello");
/// assert_eq!(truncate_string("Hello World", 8), "Hello...");
/// ```
pub fn truncate_string(s: &str, max_len: usize) -> String {
    if s.chars().count() <= max_len {
        s.to_string()
    } else {
        let kept: String = s.chars().take(max_len.saturating_sub(3)).collect();
        format!("{kept}...")
    }
}

/// A horizontal separator line.
pub fn separator(width: usize) -> String {
    "-".repeat(width)
}

/// Render one line per region: region, build id and version name.
pub fn render_versions_table(records: &[VersionRecord]) -> String {
    let rows: Vec<(String, String, String)> = records
        .iter()
        .map(|r| {
            (
                r.region.clone(),
                r.build_id.to_string(),
                truncate_string(&r.versions_name, MAX_VERSION_WIDTH),
            )
        })
        .collect();

    let region_width = column_width(REGION_HEADER, rows.iter().map(|r| r.0.as_str()));
    let build_width = column_width(BUILD_HEADER, rows.iter().map(|r| r.1.as_str()));
    let version_width = column_width(VERSION_HEADER, rows.iter().map(|r| r.2.as_str()));

    let mut out = String::new();
    push_line(
        &mut out,
        [REGION_HEADER, BUILD_HEADER, VERSION_HEADER],
        [region_width, build_width, version_width],
    );
    push_line(
        &mut out,
        [
            &separator(region_width),
            &separator(build_width),
            &separator(version_width),
        ],
        [region_width, build_width, version_width],
    );
    for (region, build, version) in &rows {
        push_line(
            &mut out,
            [region, build, version],
            [region_width, build_width, version_width],
        );
    }
    out
}

fn column_width<'a>(header: &str, cells: impl Iterator<Item = &'a str>) -> usize {
    cells
        .map(|c| c.chars().count())
        .chain(std::iter::once(header.len()))
        .max()
        .unwrap_or(0)
}

fn push_line(out: &mut String, cells: [&str; 3], widths: [usize; 3]) {
    let line = format!(
        "{:<rw$}  {:<bw$}  {}",
        cells[0],
        cells[1],
        cells[2],
        rw = widths[0],
        bw = widths[1],
    );
    out.push_str(line.trim_end());
    out.push('\n');
}
