//! Content-based format detection for Markdown and HTML documents.
//!
//! Every non-blank line is checked against a set of indicator patterns and
//! each matching pattern adds its weight to the Markdown or HTML score. The
//! higher score wins as long as it reaches one point per seven non-blank
//! lines; otherwise the document is [`DocumentFormat::Unknown`].

use regex::Regex;
use serde::Serialize;
use std::sync::LazyLock;

/// Formats the detector can report.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum DocumentFormat {
    Markdown,
    Html,
    Unknown,
}

impl DocumentFormat {
    pub fn as_str(self) -> &'static str {
        match self {
            DocumentFormat::Markdown => "markdown",
            DocumentFormat::Html => "html",
            DocumentFormat::Unknown => "unknown",
        }
    }
}

impl std::fmt::Display for DocumentFormat {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

// HTML indicators
static RE_DOCTYPE: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"(?i)<!DOCTYPE\s+html").unwrap());

static RE_HTML_TAG: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"<[a-zA-Z][^>]*>").unwrap());

static RE_HTML_ENTITY: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"&[a-zA-Z]+;|&#\d+;|&#x[0-9a-fA-F]+;").unwrap());

// Markdown block indicators
static RE_MD_HEADER: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"^#{1,6}\s+.+").unwrap());

static RE_MD_LIST: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"^\s*[-*+]\s+.+").unwrap());

static RE_MD_ORDERED_LIST: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^\s*\d+\.\s+.+").unwrap());

// Markdown inline indicators (ignored inside fenced code)
static RE_MD_LINK: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"\[.+?\]\(.+?\)").unwrap());

static RE_MD_BOLD: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\*\*.+?\*\*|__.+?__").unwrap());

static RE_MD_ITALIC: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"\*.+?\*|_.+?_").unwrap());

static RE_MD_INLINE_CODE: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"`[^`]+`").unwrap());

const CODE_FENCE: &str = "```";

/// Lines per required point of score.
const THRESHOLD_DIVISOR: usize = 7;

/// Accumulated indicator scores for a document.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub struct FormatScores {
    pub markdown: usize,
    pub html: usize,
    pub non_blank_lines: usize,
}

impl FormatScores {
    /// Minimum winning score for this document.
    pub fn threshold(&self) -> usize {
        self.non_blank_lines / THRESHOLD_DIVISOR
    }

    /// Turns the scores into a format decision.
    pub fn verdict(&self) -> DocumentFormat {
        if self.non_blank_lines == 0 {
            return DocumentFormat::Unknown;
        }

        let threshold = self.threshold();
        if self.html > self.markdown && self.html >= threshold {
            DocumentFormat::Html
        } else if self.markdown > self.html && self.markdown >= threshold {
            DocumentFormat::Markdown
        } else {
            DocumentFormat::Unknown
        }
    }
}

/// Scores a whole document against the Markdown and HTML indicators.
pub fn score_format(content: &str) -> FormatScores {
    let mut scores = FormatScores::default();
    let mut in_code_block = false;

    for line in content.split('\n') {
        let trimmed = line.trim();
        if trimmed.is_empty() {
            continue;
        }
        scores.non_blank_lines += 1;

        let is_fence = trimmed.starts_with(CODE_FENCE);
        if is_fence {
            in_code_block = !in_code_block;
        }

        scores.html += score_html_line(trimmed);
        scores.markdown += score_markdown_line(trimmed, is_fence, in_code_block);
    }

    scores
}

/// Detects whether the content is Markdown, HTML or neither.
pub fn detect_format(content: &str) -> DocumentFormat {
    let scores = score_format(content);
    let format = scores.verdict();
    log::debug!(
        "detected format {} (markdown {}, html {}, {} non-blank lines)",
        format,
        scores.markdown,
        scores.html,
        scores.non_blank_lines
    );
    format
}

fn score_html_line(line: &str) -> usize {
    let mut score = 0;
    if RE_DOCTYPE.is_match(line) {
        score += 15;
    }
    if RE_HTML_TAG.is_match(line) {
        score += 3;
    }
    if RE_HTML_ENTITY.is_match(line) {
        score += 2;
    }
    score
}

fn score_markdown_line(line: &str, is_fence: bool, in_code_block: bool) -> usize {
    let mut score = 0;

    // Block structure counts even inside fenced code
    if RE_MD_HEADER.is_match(line) {
        score += 4;
    }
    if RE_MD_LIST.is_match(line) {
        score += 3;
    }
    if RE_MD_ORDERED_LIST.is_match(line) {
        score += 3;
    }
    if is_fence {
        score += 4;
    }

    if !in_code_block {
        if RE_MD_LINK.is_match(line) {
            score += 3;
        }
        if RE_MD_BOLD.is_match(line) {
            score += 2;
        }
        if RE_MD_ITALIC.is_match(line) {
            score += 1;
        }
        if RE_MD_INLINE_CODE.is_match(line) {
            score += 1;
        }
    }

    score
}
