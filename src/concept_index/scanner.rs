//! # Section Scanner
//!
//! Splits one concept document into an optional title line plus an ordered
//! sequence of (header, body) sections. Field extraction then works against
//! this single parse instead of running independent pattern searches over the
//! raw text, so overlapping or inconsistent matches cannot happen.
//!
//! Rules:
//! 1. The title is the first line of the document iff it has the form
//!    `# <PREFIX>-NNN: <name>` with exactly three digits after the prefix.
//! 2. Any other line whose first character is `#` opens a new section; the
//!    header is kept verbatim (trailing whitespace stripped) for exact lookup.
//! 3. A section body runs until the next header, until two consecutive blank
//!    lines, or until the end of the document.
//! 4. Text before the first header belongs to no section and is dropped.

/// Parsed `# PREFIX-NNN: name` title line.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Title {
    pub id: String,
    pub name: String,
}

/// One `header` line and the body lines that follow it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Section {
    pub header: String,
    pub body: Vec<String>,
}

impl Section {
    /// Body joined back into a block of text, trimmed of surrounding
    /// whitespace.
    pub fn text(&self) -> String {
        self.body.join("\n").trim().to_string()
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Document {
    pub title: Option<Title>,
    pub sections: Vec<Section>,
}

impl Document {
    pub fn parse(content: &str, prefix: &str) -> Self {
        let mut lines = content.lines();

        let mut pending: Option<&str> = None;
        let title = match lines.next() {
            Some(first) => match parse_title(first, prefix) {
                Some(title) => Some(title),
                None => {
                    // Not a title; feed the first line back into the scan.
                    pending = Some(first);
                    None
                }
            },
            None => None,
        };

        let mut sections: Vec<Section> = Vec::new();
        let mut current: Option<Section> = None;
        let mut blank_run = 0usize;

        for line in pending.into_iter().chain(lines) {
            if line.starts_with('#') {
                if let Some(section) = current.take() {
                    sections.push(section);
                }
                current = Some(Section {
                    header: line.trim_end().to_string(),
                    body: Vec::new(),
                });
                blank_run = 0;
            } else if line.trim().is_empty() {
                blank_run += 1;
                if blank_run >= 2 {
                    // Two consecutive blank lines close the section.
                    if let Some(section) = current.take() {
                        sections.push(section);
                    }
                } else if let Some(section) = current.as_mut() {
                    section.body.push(line.to_string());
                }
            } else {
                blank_run = 0;
                if let Some(section) = current.as_mut() {
                    section.body.push(line.to_string());
                }
            }
        }
        if let Some(section) = current.take() {
            sections.push(section);
        }

        Self { title, sections }
    }

    /// First section with the exact header line, e.g. `## 定义`.
    pub fn section(&self, header: &str) -> Option<&Section> {
        self.sections.iter().find(|s| s.header == header)
    }
}

fn parse_title(line: &str, prefix: &str) -> Option<Title> {
    let rest = line.strip_prefix("# ")?;
    let (id, name) = rest.split_once(": ")?;
    let number = id.strip_prefix(prefix)?.strip_prefix('-')?;
    if number.len() != 3 || !number.chars().all(|c| c.is_ascii_digit()) {
        return None;
    }
    let name = name.trim();
    if name.is_empty() {
        return None;
    }
    Some(Title {
        id: id.to_string(),
        name: name.to_string(),
    })
}
