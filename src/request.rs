use liquid_core::Object;

use crate::SourceFile;

/// Synthetic request routed to a controller layer in place of a real
/// HTTP request.
///
/// Carries the source file's URL as the target, a copy of the file's
/// full parameter map as request attributes, and a back-reference to
/// the originating file so the controller can recover it from the
/// request context.
#[derive(Debug, Clone)]
pub struct RenderRequest<'f> {
    url: String,
    attributes: Object,
    source_file: &'f SourceFile,
}

impl<'f> RenderRequest<'f> {
    pub(crate) fn new(source_file: &'f SourceFile) -> Self {
        Self {
            url: source_file.url(),
            attributes: source_file.parameters().all().clone(),
            source_file,
        }
    }

    pub fn url(&self) -> &str {
        &self.url
    }

    pub fn attributes(&self) -> &Object {
        &self.attributes
    }

    pub fn source_file(&self) -> &'f SourceFile {
        self.source_file
    }
}
