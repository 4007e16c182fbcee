use crate::Result;
use crate::Status;

/// Site-wide metadata, populated once at startup and shared with
/// whatever renders each source file.
///
/// Fields are opaque: nothing is validated or derived, values come back
/// out exactly as they went in.
#[derive(Debug, Clone, PartialEq, Eq, Default, serde::Serialize, serde::Deserialize)]
#[serde(default)]
#[serde(rename_all = "snake_case")]
pub struct Site {
    title: String,
    subtitle: String,
    url: String,
    keywords: Vec<String>,
    description: String,
    env: String,
    analytics_id: String,
}

impl Site {
    pub fn new(
        title: impl Into<String>,
        subtitle: impl Into<String>,
        url: impl Into<String>,
        keywords: Vec<String>,
        description: impl Into<String>,
        env: impl Into<String>,
        analytics_id: impl Into<String>,
    ) -> Self {
        Self {
            title: title.into(),
            subtitle: subtitle.into(),
            url: url.into(),
            keywords,
            description: description.into(),
            env: env.into(),
            analytics_id: analytics_id.into(),
        }
    }

    /// Parse site configuration out of a YAML document.
    ///
    /// Missing keys fall back to empty values.
    pub fn from_yaml(content: &str) -> Result<Self> {
        if content.trim().is_empty() {
            return Ok(Self::default());
        }
        serde_yaml::from_str(content)
            .map_err(|e| Status::new("Failed to parse site config").with_source(e))
    }

    pub fn title(&self) -> &str {
        &self.title
    }

    pub fn subtitle(&self) -> &str {
        &self.subtitle
    }

    pub fn url(&self) -> &str {
        &self.url
    }

    /// Keywords in the order they were configured.
    pub fn keywords(&self) -> &[String] {
        &self.keywords
    }

    pub fn description(&self) -> &str {
        &self.description
    }

    pub fn env(&self) -> &str {
        &self.env
    }

    pub fn analytics_id(&self) -> &str {
        &self.analytics_id
    }
}

#[cfg(test)]
mod test {
    use super::*;

    #[test]
    fn accessors_echo_inputs() {
        let site = Site::new(
            "A Site",
            "the finer points",
            "https://example.com",
            vec!["static".to_owned(), "site".to_owned()],
            "A site about things",
            "prod",
            "UA-000000-1",
        );
        assert_eq!(site.title(), "A Site");
        assert_eq!(site.subtitle(), "the finer points");
        assert_eq!(site.url(), "https://example.com");
        assert_eq!(site.keywords(), ["static".to_owned(), "site".to_owned()]);
        assert_eq!(site.description(), "A site about things");
        assert_eq!(site.env(), "prod");
        assert_eq!(site.analytics_id(), "UA-000000-1");
    }

    #[test]
    fn keywords_empty() {
        let site = Site::new("t", "s", "u", vec![], "d", "e", "a");
        assert!(site.keywords().is_empty());
    }

    #[test]
    fn keywords_preserve_order() {
        let keywords = vec!["zeta".to_owned(), "alpha".to_owned(), "mid".to_owned()];
        let site = Site::new("t", "s", "u", keywords.clone(), "d", "e", "a");
        assert_eq!(site.keywords(), keywords.as_slice());
    }

    #[test]
    fn from_yaml_full() {
        let site = Site::from_yaml(
            "title: A Site\n\
             subtitle: the finer points\n\
             url: https://example.com\n\
             keywords:\n\
             - static\n\
             - site\n\
             description: A site about things\n\
             env: prod\n\
             analytics_id: UA-000000-1\n",
        )
        .unwrap();
        assert_eq!(site.title(), "A Site");
        assert_eq!(site.keywords(), ["static".to_owned(), "site".to_owned()]);
        assert_eq!(site.analytics_id(), "UA-000000-1");
    }

    #[test]
    fn from_yaml_defaults_missing_keys() {
        let site = Site::from_yaml("title: Partial\n").unwrap();
        assert_eq!(site.title(), "Partial");
        assert_eq!(site.subtitle(), "");
        assert!(site.keywords().is_empty());
    }

    #[test]
    fn from_yaml_empty() {
        let site = Site::from_yaml("").unwrap();
        assert_eq!(site, Site::default());
    }

    #[test]
    fn from_yaml_invalid_syntax() {
        let result = Site::from_yaml("title: [unterminated\n");
        assert!(result.is_err());
    }
}
