/// Development backend started with `python app.py`
pub const LOCAL_BASE_URL: &str = "http://127.0.0.1:5000";

/// Hosted backend
pub const REMOTE_BASE_URL: &str = "https://agi-sentinel-bot.onrender.com";

/// Full URLs of the chat and browse services
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Endpoints {
    pub chat_url: String,
    pub browse_url: String,
}

impl Endpoints {
    /// Derive both service URLs from a base URL
    pub fn from_base(base: &str) -> Self {
        let base = base.trim().trim_end_matches('/');
        Self {
            chat_url: format!("{}/chat", base),
            browse_url: format!("{}/browse", base),
        }
    }

    pub fn local() -> Self {
        Self::from_base(LOCAL_BASE_URL)
    }

    pub fn remote() -> Self {
        Self::from_base(REMOTE_BASE_URL)
    }

    /// Pick the local backend when served from a loopback host, the hosted one otherwise
    pub fn for_host(host: &str) -> Self {
        if is_loopback_host(host) {
            Self::local()
        } else {
            Self::remote()
        }
    }
}

impl Default for Endpoints {
    fn default() -> Self {
        Self::remote()
    }
}

/// `localhost` or `127.0.0.1`, with or without a port
pub fn is_loopback_host(host: &str) -> bool {
    let name = host.split(':').next().unwrap_or(host);
    name == "localhost" || name == "127.0.0.1"
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_from_base_trims_trailing_slash() {
        let endpoints = Endpoints::from_base("http://example.com/api/");
        assert_eq!(endpoints.chat_url, "http://example.com/api/chat");
        assert_eq!(endpoints.browse_url, "http://example.com/api/browse");
    }

    #[test]
    fn test_local_and_remote() {
        assert_eq!(Endpoints::local().chat_url, "http://127.0.0.1:5000/chat");
        assert_eq!(
            Endpoints::remote().browse_url,
            "https://agi-sentinel-bot.onrender.com/browse"
        );
        assert_eq!(Endpoints::default(), Endpoints::remote());
    }

    #[test]
    fn test_for_host() {
        assert_eq!(Endpoints::for_host("localhost"), Endpoints::local());
        assert_eq!(Endpoints::for_host("127.0.0.1:8080"), Endpoints::local());
        assert_eq!(Endpoints::for_host("agi-sentinel.example"), Endpoints::remote());
    }
}
