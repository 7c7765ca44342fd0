/// Environment variable consulted when no agent string is passed in,
/// following the CGI convention for request headers.
pub const DEFAULT_AMBIENT_VAR: &str = "HTTP_USER_AGENT";

/// Construction-time options for [`UserAgentParser`](crate::UserAgentParser).
#[derive(Debug, Clone)]
pub struct ParserConfig {
    /// Name of the environment variable read by `parse_or_env` when the
    /// caller does not supply an agent string.
    pub ambient_var: String,
    /// Skip the browser regex when none of its literal tokens occur in the
    /// input. Results are identical either way.
    pub prefilter: bool,
}

impl Default for ParserConfig {
    fn default() -> Self {
        Self {
            ambient_var: DEFAULT_AMBIENT_VAR.to_string(),
            prefilter: true,
        }
    }
}

impl ParserConfig {
    pub fn ambient_var(mut self, name: impl Into<String>) -> Self {
        self.ambient_var = name.into();
        self
    }

    pub fn prefilter(mut self, enabled: bool) -> Self {
        self.prefilter = enabled;
        self
    }
}
