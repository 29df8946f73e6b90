//! Deep link classification.
//!
//! Incoming strings (scanned QR payloads, pasted text, URLs the OS hands to
//! the app, browser locations) are tested against an ordered table of
//! patterns. The first pattern that matches decides the intent.
//!
//! Default order:
//!
//! ```text
//! 1. WebJoin    http(s)://[www.]eventshare.app/join/{CODE}
//! 2. WebEvent   http(s)://[www.]eventshare.app/event/{ID}
//! 3. AppJoin    eventshare://join/{CODE}
//! 4. AppEvent   eventshare://event/{ID}
//! 5. BareCode   {CODE}
//! ```
//!
//! `{CODE}` is 6 ASCII letters or digits, `{ID}` is hex digits and hyphens.
//! Keywords and codes match in any case. Link patterns match a prefix of the
//! input, so anything after the captured segment is ignored; only a bare code
//! must make up the whole input.

use once_cell::sync::Lazy;
use regex::Regex;

use crate::code::EventCode;
use crate::config::{ConfigError, LinkConfig};
use crate::intent::DeepLinkIntent;

const CODE: &str = "([A-Z0-9]{6})";
const ID: &str = "([a-f0-9-]+)";

static DEFAULT_PARSER: Lazy<DeepLinkParser> = Lazy::new(|| {
    DeepLinkParser::new(LinkConfig::default()).expect("default link patterns compile")
});

/// Kinds of link the parser recognizes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum PatternKind {
    /// Web join URL.
    WebJoin,
    /// Web event URL.
    WebEvent,
    /// App-scheme join link.
    AppJoin,
    /// App-scheme event link.
    AppEvent,
    /// A join code on its own.
    BareCode,
    /// Browser location path `/join/{CODE}`.
    PathJoin,
    /// Browser location path `/event/{ID}`.
    PathEvent,
}

impl PatternKind {
    /// Priority order for full links and codes.
    pub const LINK_ORDER: [PatternKind; 5] = [
        PatternKind::WebJoin,
        PatternKind::WebEvent,
        PatternKind::AppJoin,
        PatternKind::AppEvent,
        PatternKind::BareCode,
    ];

    /// Priority order for browser location paths.
    pub const PATH_ORDER: [PatternKind; 2] = [PatternKind::PathJoin, PatternKind::PathEvent];

    /// Whether the captured segment is a join code (as opposed to an event ID).
    pub fn captures_code(&self) -> bool {
        matches!(
            self,
            PatternKind::WebJoin | PatternKind::AppJoin | PatternKind::BareCode | PatternKind::PathJoin
        )
    }

    fn source(&self, config: &LinkConfig) -> String {
        let host = regex::escape(&config.web_host);
        let scheme = regex::escape(&config.app_scheme);
        let (code, id) = (CODE, ID);

        let body = match self {
            PatternKind::WebJoin => format!(r"^https?://(?:www\.)?{host}/join/{code}"),
            PatternKind::WebEvent => format!(r"^https?://(?:www\.)?{host}/event/{id}"),
            PatternKind::AppJoin => format!("^{scheme}://join/{code}"),
            PatternKind::AppEvent => format!("^{scheme}://event/{id}"),
            PatternKind::BareCode => format!("^{code}$"),
            PatternKind::PathJoin => format!("^/join/{code}"),
            PatternKind::PathEvent => format!("^/event/{id}"),
        };

        // ASCII-only, case-insensitive
        format!("(?i-u){body}")
    }

    fn intent(&self, captured: &str) -> Option<DeepLinkIntent> {
        if self.captures_code() {
            EventCode::parse(captured).ok().map(DeepLinkIntent::join)
        } else {
            Some(DeepLinkIntent::view(captured))
        }
    }
}

/// One compiled entry of the pattern table.
#[derive(Debug, Clone)]
pub struct LinkPattern {
    kind: PatternKind,
    regex: Regex,
}

impl LinkPattern {
    fn compile(kind: PatternKind, config: &LinkConfig) -> Result<Self, ConfigError> {
        let regex = Regex::new(&kind.source(config)).map_err(|e| ConfigError::InvalidValue {
            key: format!("{kind:?}"),
            message: e.to_string(),
        })?;
        Ok(Self { kind, regex })
    }

    /// The kind of link this pattern recognizes.
    pub fn kind(&self) -> PatternKind {
        self.kind
    }

    /// The regular expression source.
    pub fn as_str(&self) -> &str {
        self.regex.as_str()
    }

    /// Classify `input` if this pattern matches it.
    pub fn classify(&self, input: &str) -> Option<DeepLinkIntent> {
        let captured = self.regex.captures(input)?.get(1)?;
        self.kind.intent(captured.as_str())
    }
}

/// Ordered pattern table built from a [`LinkConfig`].
///
/// # Example
///
/// ```
/// use eventshare_links::{DeepLinkIntent, DeepLinkParser, LinkConfig};
///
/// let config = LinkConfig {
///     web_host: "staging.eventshare.app".to_string(),
///     app_scheme: "eventshare-dev".to_string(),
/// };
/// let parser = DeepLinkParser::new(config).unwrap();
///
/// let intent = parser.parse("eventshare-dev://join/ab12cd").unwrap();
/// assert_eq!(intent.event_code().unwrap().as_str(), "AB12CD");
/// assert!(parser.parse("https://eventshare.app/join/AB12CD").is_none());
/// ```
#[derive(Debug, Clone)]
pub struct DeepLinkParser {
    config: LinkConfig,
    links: Vec<LinkPattern>,
    paths: Vec<LinkPattern>,
}

impl DeepLinkParser {
    /// Compile the pattern table for `config`.
    pub fn new(config: LinkConfig) -> Result<Self, ConfigError> {
        config.validate()?;

        let links = PatternKind::LINK_ORDER
            .iter()
            .map(|kind| LinkPattern::compile(*kind, &config))
            .collect::<Result<Vec<_>, _>>()?;
        let paths = PatternKind::PATH_ORDER
            .iter()
            .map(|kind| LinkPattern::compile(*kind, &config))
            .collect::<Result<Vec<_>, _>>()?;

        Ok(Self {
            config,
            links,
            paths,
        })
    }

    /// The configuration the table was built from.
    pub fn config(&self) -> &LinkConfig {
        &self.config
    }

    /// Link patterns in priority order.
    pub fn patterns(&self) -> &[LinkPattern] {
        &self.links
    }

    /// Classify a link, QR payload or typed code.
    ///
    /// Surrounding whitespace is ignored. Returns `None` for anything that is
    /// not an EventShare link or join code.
    pub fn parse(&self, input: &str) -> Option<DeepLinkIntent> {
        let input = input.trim();
        let intent = first_match(&self.links, input);

        match &intent {
            Some(intent) => tracing::debug!(kind = intent.kind(), "Classified deep link"),
            None => tracing::debug!(len = input.len(), "Unrecognized deep link"),
        }

        intent
    }

    /// Classify a browser location path such as `/join/AB12CD`.
    pub fn parse_web_path(&self, path: &str) -> Option<DeepLinkIntent> {
        first_match(&self.paths, path.trim())
    }
}

fn first_match(patterns: &[LinkPattern], input: &str) -> Option<DeepLinkIntent> {
    patterns.iter().find_map(|pattern| pattern.classify(input))
}

/// The parser for the production link configuration.
pub fn default_parser() -> &'static DeepLinkParser {
    &DEFAULT_PARSER
}

/// Classify a link, QR payload or typed code with the production configuration.
///
/// # Example
///
/// ```
/// use eventshare_links::{parse_deep_link, DeepLinkIntent};
///
/// let intent = parse_deep_link("https://eventshare.app/join/AB12CD").unwrap();
/// assert_eq!(intent.kind(), "event_join");
///
/// assert!(parse_deep_link("not a real link").is_none());
/// assert!(parse_deep_link("").is_none());
/// ```
pub fn parse_deep_link(input: &str) -> Option<DeepLinkIntent> {
    default_parser().parse(input)
}

/// Classify a browser location path with the production configuration.
pub fn parse_web_path(path: &str) -> Option<DeepLinkIntent> {
    default_parser().parse_web_path(path)
}
