use liquid_core::Value;
use liquid_core::ValueView;
use relative_path::RelativePath;
use relative_path::RelativePathBuf;

use crate::DateTime;
use crate::RenderRequest;
use crate::SourceFileParameters;

const TEMPLATED_EXTENSIONS: [&str; 5] = ["html", "md", "rst", "xml", "txt"];

const NEEDS_LAYOUT_EXTENSIONS: [&str; 3] = ["html", "md", "rst"];

const MARKDOWN_EXTENSION: &str = "md";

const RESTRUCTURED_TEXT_EXTENSION: &str = "rst";

const API_DOCS_PREFIX: &str = "/api/";

const CONTROLLER_KEY: &str = "_controller";

/// One content file in the site's input tree: its path, its body with
/// any front-matter block stripped, and its externally loaded metadata
/// parameters.
///
/// Everything else is derived on demand from the path and the
/// parameters. No accessor fails; absent values degrade to an empty
/// string, `None`, or the current time.
#[derive(Debug, Clone, PartialEq)]
pub struct SourceFile {
    source_path: RelativePathBuf,
    contents: String,
    parameters: SourceFileParameters,
}

impl SourceFile {
    /// Wrap a loaded content file.
    ///
    /// The front-matter block, if present and well formed, is stripped
    /// from `contents` here; malformed or missing blocks leave the text
    /// untouched. The parameters are taken as-is, already populated by
    /// the front-matter loader.
    pub fn new(
        source_path: impl AsRef<RelativePath>,
        contents: &str,
        parameters: SourceFileParameters,
    ) -> Self {
        Self {
            source_path: source_path.as_ref().to_owned(),
            contents: strip_front_matter(contents).to_owned(),
            parameters,
        }
    }

    pub fn source_path(&self) -> &RelativePath {
        &self.source_path
    }

    /// The body, without front matter.
    pub fn contents(&self) -> &str {
        &self.contents
    }

    pub fn parameters(&self) -> &SourceFileParameters {
        &self.parameters
    }

    pub fn parameter(&self, key: &str) -> Option<&Value> {
        self.parameters.get(key)
    }

    /// The `url` parameter rendered as a string; empty when unset.
    pub fn url(&self) -> String {
        self.parameter("url")
            .map(|v| v.to_kstr().as_str().to_owned())
            .unwrap_or_default()
    }

    /// Publish date derived from a `/YYYY/MM/DD/slug` URL.
    ///
    /// URLs with fewer than four `/`-separated segments, or whose
    /// year/month/day segments do not form a real date, yield the
    /// current moment at call time instead.
    pub fn date(&self) -> DateTime {
        let url = self.url();
        let segments: Vec<_> = url.split('/').collect();
        if segments.len() < 4 {
            return DateTime::now();
        }

        parse_date_segments(segments[1], segments[2], segments[3]).unwrap_or_else(DateTime::now)
    }

    /// The extension of the source path, without the dot; empty when
    /// the file name has none.
    pub fn extension(&self) -> &str {
        self.source_path.extension().unwrap_or_default()
    }

    pub fn is_markdown(&self) -> bool {
        self.extension() == MARKDOWN_EXTENSION
    }

    pub fn is_restructured_text(&self) -> bool {
        self.extension() == RESTRUCTURED_TEXT_EXTENSION
    }

    /// Whether the file runs through the template engine. API docs are
    /// exempt regardless of extension.
    pub fn is_templated(&self) -> bool {
        TEMPLATED_EXTENSIONS.contains(&self.extension()) && !self.is_api_docs()
    }

    pub fn needs_layout(&self) -> bool {
        NEEDS_LAYOUT_EXTENSIONS.contains(&self.extension())
    }

    pub fn is_api_docs(&self) -> bool {
        self.url().starts_with(API_DOCS_PREFIX)
    }

    pub fn has_controller(&self) -> bool {
        self.parameter(CONTROLLER_KEY).is_some_and(|v| !v.is_nil())
    }

    /// The `_controller` parameter as a sequence of strings, `None`
    /// when unset or null. A scalar value becomes a one-element
    /// sequence.
    pub fn controller(&self) -> Option<Vec<String>> {
        let value = self.parameter(CONTROLLER_KEY)?;
        if value.is_nil() {
            return None;
        }

        let controller = match value.as_array() {
            Some(values) => values
                .values()
                .map(|v| v.to_kstr().as_str().to_owned())
                .collect(),
            None => vec![value.to_kstr().as_str().to_owned()],
        };
        Some(controller)
    }

    /// Materialize a request targeting this file's URL, carrying the
    /// full parameter map and a back-reference to the file, for handing
    /// to a router/controller layer.
    pub fn request(&self) -> RenderRequest<'_> {
        RenderRequest::new(self)
    }
}

static FRONT_MATTER: once_cell::sync::Lazy<regex::Regex> = once_cell::sync::Lazy::new(|| {
    regex::RegexBuilder::new(r"\A\s*---\s*\r?\n(.*?)---\s*\r?\n(.*)\z")
        .dot_matches_new_line(true)
        .build()
        .unwrap()
});

fn strip_front_matter(contents: &str) -> &str {
    if let Some(captures) = FRONT_MATTER.captures(contents) {
        let front = captures.get(1).map(|m| m.as_str()).unwrap_or_default();
        log::trace!("Stripped {} bytes of front matter", front.len());
        captures.get(2).map(|m| m.as_str()).unwrap_or(contents)
    } else {
        contents
    }
}

fn parse_date_segments(year: &str, month: &str, day: &str) -> Option<DateTime> {
    let year = year.parse().ok()?;
    let month = month.parse().ok()?;
    let day = day.parse().ok()?;
    DateTime::from_ymd(year, month, day)
}
