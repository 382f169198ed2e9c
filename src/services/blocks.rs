//! Classification of post text into headings, code, lists and paragraphs.

const FENCE: &str = "```";

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TextBlock {
    /// `level` is 1 for `# `, 2 for `## `, 3 for `### `.
    Heading { level: u8, text: String },
    Code(String),
    List(Vec<String>),
    Paragraph(String),
}

impl TextBlock {
    /// First matching rule wins: headings (deepest marker first), fenced code,
    /// embedded list lines, then a plain paragraph.
    pub fn parse(text: &str) -> Self {
        for (marker, level) in [("### ", 3u8), ("## ", 2), ("# ", 1)] {
            if text.starts_with(marker) {
                return Self::Heading {
                    level,
                    text: text.replacen(marker, "", 1),
                };
            }
        }

        if text.starts_with(FENCE) && text.ends_with(FENCE) {
            return Self::Code(text.replace(FENCE, "").trim().to_string());
        }

        if text.contains("\n- ") || text.contains("\n* ") {
            let items = text
                .split('\n')
                .map(|line| strip_bullet(line).trim())
                .filter(|item| !item.is_empty())
                .map(str::to_string)
                .collect();
            return Self::List(items);
        }

        Self::Paragraph(text.to_string())
    }

    /// HTML heading tag for a heading level; post titles own `h1`.
    pub fn heading_tag(level: u8) -> &'static str {
        match level {
            1 => "h2",
            2 => "h3",
            _ => "h4",
        }
    }
}

fn strip_bullet(line: &str) -> &str {
    line.strip_prefix("- ")
        .or_else(|| line.strip_prefix("* "))
        .unwrap_or(line)
}
