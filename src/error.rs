#[derive(Debug, thiserror::Error)]
pub enum Error {
    /// No User-Agent was passed and no ambient header value was available.
    #[error("parse_user_agent requires a user agent")]
    MissingInput,
    #[error(transparent)]
    Regex(#[from] regex::Error),
    #[error(transparent)]
    FancyRegex(#[from] fancy_regex::Error),
    #[error(transparent)]
    AhoCorasick(#[from] aho_corasick::BuildError),
}

pub type Result<T> = std::result::Result<T, Error>;
