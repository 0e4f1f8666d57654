#[pavex::config(key = "turbo", default_if_missing)]
#[derive(Debug, Clone, serde::Serialize, serde::Deserialize)]
#[serde(rename_all = "snake_case")]
#[non_exhaustive]
/// Configure how the canonical URL attached to Turbo responses is assembled.
///
/// The default configuration is suitable for an application that is reached
/// directly over plain HTTP.
pub struct TurboConfig {
    /// The scheme to use when the request target doesn't carry one.
    ///
    /// HTTP/1.1 requests almost always use the origin form (e.g. `/about?x=1`),
    /// so this is the value you get in most cases.
    ///
    /// By default, it's set to `http`.
    #[serde(default = "default_scheme")]
    pub default_scheme: String,
    /// Honor the `X-Forwarded-Proto` and `X-Forwarded-Host` headers.
    ///
    /// Enable it only if the application runs behind a reverse proxy that
    /// overwrites those headers, otherwise clients can spoof them.
    ///
    /// By default, it's `false`.
    #[serde(default)]
    pub trust_forwarded_headers: bool,
}

impl Default for TurboConfig {
    fn default() -> Self {
        Self {
            default_scheme: default_scheme(),
            trust_forwarded_headers: false,
        }
    }
}

impl TurboConfig {
    /// Create a new [`TurboConfig`] with the default settings.
    pub fn new() -> Self {
        Self::default()
    }

    /// Set [`default_scheme`](Self::default_scheme).
    pub fn with_default_scheme(mut self, scheme: impl Into<String>) -> Self {
        self.default_scheme = scheme.into();
        self
    }

    /// Set [`trust_forwarded_headers`](Self::trust_forwarded_headers).
    pub fn with_trust_forwarded_headers(mut self, trust: bool) -> Self {
        self.trust_forwarded_headers = trust;
        self
    }
}

fn default_scheme() -> String {
    "http".to_string()
}
