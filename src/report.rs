use chrono::{DateTime, Local};
use serde::Serialize;

use crate::config::OutputFormat;
use crate::models::{
    ArtistDiversityEntry, ArtistTierEntry, GenreMetrics, ListeningReport, PeakWindow,
    PlaylistEntry,
};

/// Helper trait for grouping digits the way stream counts are displayed
pub trait ThousandsSeparated {
    fn separated(&self) -> String;
}

impl ThousandsSeparated for u64 {
    fn separated(&self) -> String {
        let digits = self.to_string();
        let mut out = String::with_capacity(digits.len() + digits.len() / 3);
        for (i, ch) in digits.chars().enumerate() {
            if i > 0 && (digits.len() - i) % 3 == 0 {
                out.push(',');
            }
            out.push(ch);
        }
        out
    }
}

/// Escape text for interpolation into HTML
pub fn escape_html(text: &str) -> String {
    let mut out = String::with_capacity(text.len());
    for ch in text.chars() {
        match ch {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            '\'' => out.push_str("&#39;"),
            _ => out.push(ch),
        }
    }
    out
}

/// A run of text, optionally emphasised
#[derive(Debug, Clone, PartialEq)]
struct Span {
    text: String,
    strong: bool,
}

impl Span {
    fn plain(text: impl Into<String>) -> Self {
        Self { text: text.into(), strong: false }
    }

    fn strong(text: impl Into<String>) -> Self {
        Self { text: text.into(), strong: true }
    }
}

type Line = Vec<Span>;

/// One named display region and its content
#[derive(Debug)]
struct Section {
    region: &'static str,
    heading: &'static str,
    blocks: Vec<Vec<Line>>, // Blocks are separated by a blank line
}

/// JSON envelope stamping the time of rendering
#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
struct ReportDocument<'a> {
    generated_at: DateTime<Local>,
    #[serde(flatten)]
    report: &'a ListeningReport,
}

/// Render a report in the requested format
pub fn render(
    report: &ListeningReport,
    format: OutputFormat,
    generated_at: DateTime<Local>,
) -> Result<String, serde_json::Error> {
    match format {
        OutputFormat::Text => Ok(render_text(report, generated_at)),
        OutputFormat::Html => Ok(render_html(report, generated_at)),
        OutputFormat::Json => serde_json::to_string_pretty(&ReportDocument {
            generated_at,
            report,
        }),
    }
}

pub fn render_text(report: &ListeningReport, generated_at: DateTime<Local>) -> String {
    let mut out = format!(
        "Listening Insights (generated {})\n",
        generated_at.format("%Y-%m-%d %H:%M")
    );

    for section in sections(report) {
        out.push('\n');
        out.push_str(section.heading);
        out.push('\n');
        out.push_str(&"=".repeat(section.heading.len()));
        out.push('\n');

        let blocks: Vec<String> = section
            .blocks
            .iter()
            .map(|block| {
                block
                    .iter()
                    .map(|line| line.iter().map(|span| span.text.as_str()).collect::<String>())
                    .collect::<Vec<_>>()
                    .join("\n")
            })
            .collect();
        if !blocks.is_empty() {
            out.push_str(&blocks.join("\n\n"));
            out.push('\n');
        }
    }
    out
}

pub fn render_html(report: &ListeningReport, generated_at: DateTime<Local>) -> String {
    let mut out = String::from(
        "<!DOCTYPE html>\n<html lang=\"en\">\n<head>\n<meta charset=\"utf-8\">\n<title>Listening Insights</title>\n</head>\n<body>\n",
    );
    out.push_str(&format!(
        "<h1>Listening Insights</h1>\n<p>Generated {}</p>\n",
        generated_at.format("%Y-%m-%d %H:%M")
    ));

    for section in sections(report) {
        let content = section
            .blocks
            .iter()
            .map(|block| {
                block
                    .iter()
                    .map(|line| line.iter().map(span_html).collect::<String>())
                    .collect::<Vec<_>>()
                    .join("<br>")
            })
            .collect::<Vec<_>>()
            .join("<br><br>");
        out.push_str(&format!(
            "<section>\n<h2>{}</h2>\n<div id=\"{}\">{}</div>\n</section>\n",
            section.heading, section.region, content
        ));
    }

    out.push_str("</body>\n</html>\n");
    out
}

fn span_html(span: &Span) -> String {
    let text = escape_html(&span.text);
    if span.strong {
        format!("<strong>{text}</strong>")
    } else {
        text
    }
}

fn sections(report: &ListeningReport) -> Vec<Section> {
    vec![
        Section {
            region: "task1Answer",
            heading: "Artist Tiers",
            blocks: single_block(report.artist_tiers.iter().map(tier_line)),
        },
        Section {
            region: "task2Answer",
            heading: "Genre Performance",
            blocks: single_block(genre_lines(&report.genre_metrics)),
        },
        Section {
            region: "task3Answer",
            heading: "Peak Performance Window",
            // No window leaves the region empty
            blocks: report.peak_window.iter().map(window_lines).collect(),
        },
        Section {
            region: "task4Answer",
            heading: "Cross-Genre Artists",
            blocks: report.diverse_artists.iter().map(diversity_lines).collect(),
        },
        Section {
            region: "task5Answer",
            heading: "Premium Playlist",
            blocks: single_block(
                report
                    .premium_playlist
                    .iter()
                    .enumerate()
                    .map(|(i, entry)| playlist_line(i + 1, entry)),
            ),
        },
    ]
}

fn single_block(lines: impl Iterator<Item = Line>) -> Vec<Vec<Line>> {
    let lines: Vec<Line> = lines.collect();
    if lines.is_empty() { Vec::new() } else { vec![lines] }
}

fn tier_line(entry: &ArtistTierEntry) -> Line {
    vec![Span::plain(format!(
        "{} ({}): {} streams",
        entry.artist,
        entry.tier.label(),
        entry.total_streams.separated()
    ))]
}

fn genre_lines(metrics: &GenreMetrics) -> impl Iterator<Item = Line> + '_ {
    metrics.iter().map(|(genre, metric)| {
        vec![
            Span::strong(genre.to_uppercase()),
            Span::plain(format!(
                ": Avg Streams: {}, Avg Rating: {}, Engagement Score: {}",
                metric.avg_streams.separated(),
                metric.avg_rating,
                metric.engagement_score
            )),
        ]
    })
}

fn window_lines(window: &PeakWindow) -> Vec<Line> {
    vec![
        vec![Span::plain(format!(
            "Window [{}-{}]: {}",
            window.start_index,
            window.end_index,
            window.songs.join(", ")
        ))],
        vec![Span::plain(format!("Total Score: {}", window.total_score))],
    ]
}

fn diversity_lines(entry: &ArtistDiversityEntry) -> Vec<Line> {
    vec![
        vec![
            Span::strong(entry.artist.clone()),
            Span::plain(format!(
                " ({} genres): {}",
                entry.genre_count,
                entry.genres.join(", ")
            )),
        ],
        vec![Span::plain(format!(
            "Best Genre: {} ({} avg streams)",
            entry.best_genre,
            entry.best_genre_avg_streams.separated()
        ))],
    ]
}

fn playlist_line(position: usize, entry: &PlaylistEntry) -> Line {
    vec![Span::plain(format!(
        "{}. \"{}\" - {} (Quality Score: {})",
        position, entry.title, entry.artist, entry.quality_score
    ))]
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::analytics::AnalyticsEngine;
    use crate::models::SongRecord;
    use chrono::TimeZone;

    fn fixed_time() -> DateTime<Local> {
        Local.with_ymd_and_hms(2024, 3, 9, 18, 30, 0).unwrap()
    }

    fn sample_records() -> Vec<SongRecord> {
        vec![
            SongRecord::new("Alpha", "Ivy & Co", "pop", 6_000_000, 4.5, 200),
            SongRecord::new("Beta", "Ivy & Co", "rock", 2_500_000, 4.4, 210),
            SongRecord::new("Gamma", "Ivy & Co", "jazz", 1_000_000, 4.0, 300),
            SongRecord::new("Delta", "Moss", "pop", 3_000_000, 4.7, 185),
        ]
    }

    #[test]
    fn test_thousands_separator() {
        assert_eq!(0_u64.separated(), "0");
        assert_eq!(999_u64.separated(), "999");
        assert_eq!(1_000_u64.separated(), "1,000");
        assert_eq!(1_234_567_u64.separated(), "1,234,567");
        assert_eq!(12_000_000_u64.separated(), "12,000,000");
    }

    #[test]
    fn test_escape_html() {
        assert_eq!(escape_html("R&B <live> \"mix\""), "R&amp;B &lt;live&gt; &quot;mix&quot;");
    }

    #[test]
    fn test_text_rendering() {
        let report = AnalyticsEngine::new(&sample_records()).run();
        let text = render_text(&report, fixed_time());

        assert!(text.starts_with("Listening Insights (generated 2024-03-09 18:30)"));
        assert!(text.contains("Ivy & Co (Gold): 9,500,000 streams"));
        assert!(text.contains("Moss (Silver): 3,000,000 streams"));
        assert!(text.contains("POP: Avg Streams: 4,500,000, Avg Rating: 4.6, Engagement Score: 20.7"));
        assert!(text.contains("Window [0-3]: Alpha, Beta, Gamma, Delta"));
        assert!(text.contains("Ivy & Co (3 genres): pop, rock, jazz\nBest Genre: pop (6,000,000 avg streams)"));
        assert!(text.contains("1. \"Alpha\" - Ivy & Co (Quality Score: 21)"));
        assert!(text.contains("2. \"Delta\" - Moss (Quality Score: 15.4)"));
        assert!(text.contains("3. \"Beta\" - Ivy & Co (Quality Score: 13.8)"));
    }

    #[test]
    fn test_missing_window_renders_empty_region() {
        let records = sample_records()[..3].to_vec();
        let report = AnalyticsEngine::new(&records).run();

        let text = render_text(&report, fixed_time());
        assert!(!text.contains("Window ["));

        let html = render_html(&report, fixed_time());
        assert!(html.contains("<div id=\"task3Answer\"></div>"));
    }

    #[test]
    fn test_html_rendering_escapes_and_fills_regions() {
        let report = AnalyticsEngine::new(&sample_records()).run();
        let html = render_html(&report, fixed_time());

        for region in ["task1Answer", "task2Answer", "task3Answer", "task4Answer", "task5Answer"] {
            assert!(html.contains(&format!("id=\"{region}\"")), "missing region {region}");
        }
        assert!(html.contains("<strong>Ivy &amp; Co</strong> (3 genres)"));
        assert!(html.contains("<strong>POP</strong>: Avg Streams"));
        assert!(!html.contains("Ivy & Co"));
    }

    #[test]
    fn test_json_rendering() {
        let report = AnalyticsEngine::new(&sample_records()).run();
        let json = render(&report, OutputFormat::Json, fixed_time()).unwrap();
        let value: serde_json::Value = serde_json::from_str(&json).unwrap();

        assert!(value["generatedAt"].is_string());
        assert_eq!(value["artistTiers"][0]["tier"], "Gold");
        assert_eq!(value["genreMetrics"]["pop"]["songCount"], 2);
        assert_eq!(value["peakWindow"]["startIndex"], 0);
        assert_eq!(value["premiumPlaylist"].as_array().map(Vec::len), Some(3));
    }
}
