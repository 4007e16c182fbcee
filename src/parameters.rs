use liquid_core::Object;
use liquid_core::Value;
use liquid_core::model::KString;

/// Metadata parameters for a single source file.
///
/// Populated by an external front-matter/config loader before the
/// [`SourceFile`][crate::SourceFile] is constructed; queried but never
/// mutated afterwards. A missing key is `None`, never an error.
#[derive(Debug, Clone, PartialEq, Default, serde::Serialize, serde::Deserialize)]
#[serde(transparent)]
pub struct SourceFileParameters(Object);

impl SourceFileParameters {
    pub fn new(parameters: Object) -> Self {
        Self(parameters)
    }

    pub fn get(&self, key: &str) -> Option<&Value> {
        self.0.get(key)
    }

    pub fn all(&self) -> &Object {
        &self.0
    }
}

impl From<Object> for SourceFileParameters {
    fn from(parameters: Object) -> Self {
        Self(parameters)
    }
}

impl FromIterator<(KString, Value)> for SourceFileParameters {
    fn from_iter<I: IntoIterator<Item = (KString, Value)>>(iter: I) -> Self {
        Self(iter.into_iter().collect())
    }
}
