mod browser_extractor;
mod candidates;
mod catalog;
mod disambiguation;
mod error;
mod helpers;
mod literal;
mod parser;
mod platform_extractor;
mod prefilter;
mod types;
mod user_agent_parser;

pub use error::{Error, Result};
pub use types::*;
pub use user_agent_parser::UserAgentParser;

/// Parse `ua` with the shared parser, reading `HTTP_USER_AGENT` from the
/// environment when `ua` is `None`.
pub fn parse_user_agent(ua: Option<&str>) -> Result<ParseResult<'static>> {
    UserAgentParser::shared().parse_or_env(ua)
}
