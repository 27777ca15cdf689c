use std::fmt::Write;

use chrono::{DateTime, Local};

use crate::font::RankedEntry;

/// Stylesheets linked from every generated page unless others are given.
pub const DEFAULT_STYLESHEETS: [&str; 2] = [
    "http://web.cse.ohio-state.edu/software/2231/web-sw2/assignments/projects/tag-cloud-generator/data/tagcloud.css",
    "tagcloud.css",
];

#[derive(Debug, Clone)]
pub struct HtmlOptions {
    /// Name shown in the title and heading, usually the input file name.
    pub title_source: String,
    /// The number of words asked for, which may exceed the number shown.
    pub requested: usize,
    pub stylesheets: Vec<String>,
    pub generated: Option<DateTime<Local>>,
}

impl HtmlOptions {
    pub fn new(title_source: impl Into<String>, requested: usize) -> Self {
        HtmlOptions {
            title_source: title_source.into(),
            requested,
            stylesheets: DEFAULT_STYLESHEETS.iter().map(|s| s.to_string()).collect(),
            generated: None,
        }
    }
}

pub fn escape(text: &str) -> String {
    let mut out = String::with_capacity(text.len());
    for c in text.chars() {
        match c {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            _ => out.push(c),
        }
    }
    out
}

/// Renders the tag cloud page. Entries are written in the order given, one
/// span per entry, with class `f<font size>` and the count in the title.
pub fn render_html(entries: &[RankedEntry], options: &HtmlOptions) -> String {
    let heading = format!(
        "Top {} words in {}",
        options.requested,
        escape(&options.title_source)
    );

    // Writing to a String cannot fail.
    let mut html = String::new();
    let _ = writeln!(html, "<html>");
    let _ = writeln!(html, "<head>");
    let _ = writeln!(html, "<title>{heading}</title>");
    if let Some(generated) = options.generated {
        let _ = writeln!(
            html,
            "<meta name=\"generated\" content=\"{}\">",
            generated.to_rfc3339()
        );
    }
    for href in &options.stylesheets {
        let _ = writeln!(
            html,
            "<link href=\"{}\" rel=\"stylesheet\" type=\"text/css\">",
            escape(href)
        );
    }
    let _ = writeln!(html, "</head>");
    let _ = writeln!(html, "<body>");
    let _ = writeln!(html, "<h2>{heading}</h2>");
    let _ = writeln!(html, "<hr>");
    let _ = writeln!(html, "<div class=\"cdiv\">");
    let _ = writeln!(html, "<p class=\"cbox\">");
    for entry in entries {
        let _ = writeln!(
            html,
            "<span style=\"cursor:default\" class=\"f{}\" title=\"count: {}\">{}</span>",
            entry.font_size,
            entry.count,
            escape(&entry.word)
        );
    }
    let _ = writeln!(html, "</p>");
    let _ = writeln!(html, "</div>");
    let _ = writeln!(html, "</body>");
    let _ = writeln!(html, "</html>");
    html
}
