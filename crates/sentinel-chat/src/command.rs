use sentinel_types::WEB_COMMAND_PREFIX;

/// What a non-empty submission asks for
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Command<'a> {
    /// `/web <url>`: fetch a page, bypassing the conversation
    FetchPage(&'a str),
    /// Anything else goes to the model
    Chat(&'a str),
}

impl<'a> Command<'a> {
    pub fn parse(text: &'a str) -> Self {
        match text.strip_prefix(WEB_COMMAND_PREFIX) {
            Some(rest) => Command::FetchPage(rest.trim()),
            None => Command::Chat(text),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_web_prefix_extracts_trimmed_url() {
        assert_eq!(
            Command::parse("/web   http://example.com  "),
            Command::FetchPage("http://example.com")
        );
    }

    #[test]
    fn test_prefix_needs_the_space() {
        assert_eq!(Command::parse("/webhttp://x"), Command::Chat("/webhttp://x"));
        assert_eq!(Command::parse("/web"), Command::Chat("/web"));
    }

    #[test]
    fn test_prefix_must_be_at_start() {
        assert_eq!(Command::parse("mira /web x"), Command::Chat("mira /web x"));
        assert_eq!(Command::parse("/WEB x"), Command::Chat("/WEB x"));
    }
}
