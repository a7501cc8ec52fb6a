//! Cleaning options for a sanitization run.

use crate::detect::DocumentFormat;
use serde::Serialize;

/// Options controlling which characters are removed and how lines end.
///
/// Built once before a run and never mutated by the engine.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CleaningOptions {
    /// Remove code points above U+007F.
    pub remove_non_ascii: bool,

    /// Remove control characters (newline, carriage return and tab survive).
    pub remove_control_chars: bool,

    /// Remove zero-width and directional formatting characters.
    pub remove_zero_width: bool,

    /// Remove a byte order mark at the start of a line.
    pub remove_bom: bool,

    /// Collapse whitespace code points to a single ASCII space.
    pub normalize_whitespace: bool,

    /// Keep newlines and carriage returns when normalizing whitespace.
    pub preserve_newlines: bool,

    /// Line terminator written for every line.
    pub line_ending: LineEnding,

    /// Markup to strip before the character pass, if any.
    pub strip_format: Option<StripFormat>,
}

impl Default for CleaningOptions {
    fn default() -> Self {
        Self {
            remove_non_ascii: true,
            remove_control_chars: true,
            remove_zero_width: true,
            remove_bom: true,
            normalize_whitespace: false,
            preserve_newlines: true,
            line_ending: LineEnding::native(),
            strip_format: None,
        }
    }
}

impl CleaningOptions {
    /// Creates new options with default settings.
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates options that only remove invisible characters (zero-width and BOM).
    pub fn minimal() -> Self {
        Self {
            remove_non_ascii: false,
            remove_control_chars: false,
            remove_zero_width: true,
            remove_bom: true,
            normalize_whitespace: false,
            preserve_newlines: true,
            line_ending: LineEnding::native(),
            strip_format: None,
        }
    }

    /// Creates options with every removal enabled plus whitespace normalization.
    pub fn aggressive() -> Self {
        Self {
            remove_non_ascii: true,
            remove_control_chars: true,
            remove_zero_width: true,
            remove_bom: true,
            normalize_whitespace: true,
            preserve_newlines: true,
            line_ending: LineEnding::native(),
            strip_format: None,
        }
    }

    /// Sets the target line ending.
    pub fn with_line_ending(mut self, line_ending: LineEnding) -> Self {
        self.line_ending = line_ending;
        self
    }

    /// Requests markup stripping for the given format.
    pub fn with_strip_format(mut self, format: StripFormat) -> Self {
        self.strip_format = Some(format);
        self
    }

    /// Keeps non-ASCII characters.
    pub fn keep_non_ascii(mut self) -> Self {
        self.remove_non_ascii = false;
        self
    }

    /// Keeps control characters.
    pub fn keep_control_chars(mut self) -> Self {
        self.remove_control_chars = false;
        self
    }

    /// Enables whitespace normalization.
    pub fn with_normalized_whitespace(mut self) -> Self {
        self.normalize_whitespace = true;
        self
    }

    /// Drops newlines when normalizing whitespace, joining lines together.
    pub fn without_newlines(mut self) -> Self {
        self.preserve_newlines = false;
        self
    }

    /// Disables every character removal and normalization switch.
    pub fn passthrough(mut self) -> Self {
        self.remove_non_ascii = false;
        self.remove_control_chars = false;
        self.remove_zero_width = false;
        self.remove_bom = false;
        self.normalize_whitespace = false;
        self
    }
}

/// Line terminator conventions.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum LineEnding {
    /// CRLF (`\r\n`)
    Windows,
    /// LF (`\n`), also used by modern macOS
    Unix,
    /// CR (`\r`), classic Mac OS
    Mac9,
}

impl LineEnding {
    /// The convention of the platform this was built for.
    pub fn native() -> Self {
        if cfg!(windows) {
            LineEnding::Windows
        } else {
            LineEnding::Unix
        }
    }

    /// The terminator string.
    pub fn as_str(self) -> &'static str {
        match self {
            LineEnding::Windows => "\r\n",
            LineEnding::Unix => "\n",
            LineEnding::Mac9 => "\r",
        }
    }

    /// Human-readable operating system family.
    pub fn label(self) -> &'static str {
        match self {
            LineEnding::Windows => "Windows",
            LineEnding::Unix => "Unix/Linux/macOS",
            LineEnding::Mac9 => "Classic Mac OS",
        }
    }

    /// Human-readable terminator description.
    pub fn description(self) -> &'static str {
        match self {
            LineEnding::Windows => "CRLF (\\r\\n)",
            LineEnding::Unix => "LF (\\n)",
            LineEnding::Mac9 => "CR (\\r)",
        }
    }
}

impl Default for LineEnding {
    fn default() -> Self {
        Self::native()
    }
}

/// Markup formats that can be stripped.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum StripFormat {
    Markdown,
    Html,
}

impl StripFormat {
    /// True if content detected as `detected` may be stripped as this format.
    pub fn matches(self, detected: DocumentFormat) -> bool {
        matches!(
            (self, detected),
            (StripFormat::Markdown, DocumentFormat::Markdown)
                | (StripFormat::Html, DocumentFormat::Html)
        )
    }
}

impl std::fmt::Display for StripFormat {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            StripFormat::Markdown => write!(f, "Markdown"),
            StripFormat::Html => write!(f, "HTML"),
        }
    }
}
