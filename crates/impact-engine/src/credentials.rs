//! Credentials for the external scoring path

use serde::Deserialize;
use std::fmt;

/// API keys for the search and language-model services
///
/// The engine never reads the environment itself; callers load these values
/// and pass them in.
#[derive(Clone, Default, Deserialize, PartialEq, Eq)]
pub struct Credentials {
    /// Web search API key (e.g. SerpAPI)
    #[serde(default)]
    pub search_api_key: Option<String>,

    /// Language-model API key (e.g. OpenAI)
    #[serde(default)]
    pub llm_api_key: Option<String>,
}

impl Credentials {
    /// Create credentials from optional key values
    pub fn new(search_api_key: Option<String>, llm_api_key: Option<String>) -> Self {
        Self {
            search_api_key,
            llm_api_key,
        }
    }

    /// True only when both keys are present and not blank
    ///
    /// # Examples
    ///
    /// ```
    /// use impact_engine::Credentials;
    ///
    /// let creds = Credentials::new(Some("serp".into()), None);
    /// assert!(!creds.is_complete());
    ///
    /// let creds = Credentials::new(Some("serp".into()), Some("llm".into()));
    /// assert!(creds.is_complete());
    /// ```
    pub fn is_complete(&self) -> bool {
        is_set(&self.search_api_key) && is_set(&self.llm_api_key)
    }
}

fn is_set(key: &Option<String>) -> bool {
    key.as_deref().is_some_and(|k| !k.trim().is_empty())
}

fn redact(key: &Option<String>) -> &'static str {
    if is_set(key) {
        "<set>"
    } else {
        "<unset>"
    }
}

impl fmt::Debug for Credentials {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Credentials")
            .field("search_api_key", &redact(&self.search_api_key))
            .field("llm_api_key", &redact(&self.llm_api_key))
            .finish()
    }
}
