//! Decomposed tokens: the per-unit result of segmentation.

/// Why a unit could not be decomposed. Carried inside `Token::Failed`;
/// never aborts a batch.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum DecomposeError {
    #[error("exactly one Chinese character expected, got {0:?}")]
    InvalidLength(String),
    #[error("character not in dictionary: {0}")]
    UnrecognizedCharacter(char),
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TokenKind {
    /// Blank unit, rendered as a single space.
    Whitespace,
    /// Run of ASCII letters and apostrophes, kept verbatim.
    Passthrough,
    /// Dictionary-backed syllable.
    Syllable,
}

/// A successful decomposition.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Decomposition {
    pub(crate) kind: TokenKind,
    pub(crate) source: String,
    pub(crate) toned: String,
    pub(crate) toneless: String,
    pub(crate) initial: String,
    pub(crate) finals: Vec<String>,
    pub(crate) tone: u8,
}

impl Decomposition {
    pub(crate) fn whitespace() -> Self {
        Self {
            kind: TokenKind::Whitespace,
            source: " ".to_string(),
            toned: " ".to_string(),
            toneless: " ".to_string(),
            initial: String::new(),
            finals: Vec::new(),
            tone: 0,
        }
    }

    pub(crate) fn passthrough(source: &str, toneless: String) -> Self {
        Self {
            kind: TokenKind::Passthrough,
            source: source.to_string(),
            toned: source.to_string(),
            toneless,
            initial: String::new(),
            finals: Vec::new(),
            tone: 0,
        }
    }

    pub fn kind(&self) -> TokenKind {
        self.kind
    }
}

/// A unit that failed to decompose. The toned form is the verbatim source
/// so the token still joins back into text.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FailedToken {
    pub(crate) source: String,
    pub(crate) error: DecomposeError,
}

impl FailedToken {
    pub(crate) fn new(source: &str, error: DecomposeError) -> Self {
        Self {
            source: source.to_string(),
            error,
        }
    }

    pub fn error(&self) -> &DecomposeError {
        &self.error
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Token {
    Decomposed(Decomposition),
    Failed(FailedToken),
}

impl Token {
    /// The unit this token was built from.
    pub fn source(&self) -> &str {
        match self {
            Token::Decomposed(d) => &d.source,
            Token::Failed(f) => &f.source,
        }
    }

    /// Romanization with tone marks.
    pub fn toned(&self) -> &str {
        match self {
            Token::Decomposed(d) => &d.toned,
            Token::Failed(f) => &f.source,
        }
    }

    /// Romanization with tone marks replaced by plain vowels.
    pub fn toneless(&self) -> &str {
        match self {
            Token::Decomposed(d) => &d.toneless,
            Token::Failed(f) => &f.source,
        }
    }

    /// Toneless form followed by the tone digit, e.g. `zhong1`. Tokens
    /// without a tone return the toneless form unchanged.
    pub fn numbered(&self) -> String {
        match self.tone() {
            0 => self.toneless().to_string(),
            tone => format!("{}{tone}", self.toneless()),
        }
    }

    pub fn initial(&self) -> &str {
        match self {
            Token::Decomposed(d) => &d.initial,
            Token::Failed(_) => "",
        }
    }

    pub fn finals(&self) -> &[String] {
        match self {
            Token::Decomposed(d) => &d.finals,
            Token::Failed(_) => &[],
        }
    }

    /// 1-4, or 0 for neutral tone and non-syllable tokens.
    pub fn tone(&self) -> u8 {
        match self {
            Token::Decomposed(d) => d.tone,
            Token::Failed(_) => 0,
        }
    }

    pub fn failure(&self) -> Option<&DecomposeError> {
        match self {
            Token::Decomposed(_) => None,
            Token::Failed(f) => Some(&f.error),
        }
    }

    pub fn kind(&self) -> Option<TokenKind> {
        match self {
            Token::Decomposed(d) => Some(d.kind),
            Token::Failed(_) => None,
        }
    }

    pub fn is_whitespace(&self) -> bool {
        self.kind() == Some(TokenKind::Whitespace)
    }

    pub fn is_passthrough(&self) -> bool {
        self.kind() == Some(TokenKind::Passthrough)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn whitespace_token_fields() {
        let t = Token::Decomposed(Decomposition::whitespace());
        assert_eq!(t.source(), " ");
        assert_eq!(t.toned(), " ");
        assert_eq!(t.toneless(), " ");
        assert_eq!(t.initial(), "");
        assert!(t.finals().is_empty());
        assert_eq!(t.tone(), 0);
        assert!(t.failure().is_none());
        assert!(t.is_whitespace());
        assert!(!t.is_passthrough());
    }

    #[test]
    fn failed_token_round_trips_source() {
        let t = Token::Failed(FailedToken::new(
            "é",
            DecomposeError::UnrecognizedCharacter('é'),
        ));
        assert_eq!(t.toned(), "é");
        assert_eq!(t.toneless(), "é");
        assert_eq!(t.numbered(), "é");
        assert_eq!(t.kind(), None);
        assert_eq!(
            t.failure(),
            Some(&DecomposeError::UnrecognizedCharacter('é'))
        );
    }

    #[test]
    fn numbered_appends_tone() {
        let t = Token::Decomposed(Decomposition {
            kind: TokenKind::Syllable,
            source: "中".into(),
            toned: "zhōng".into(),
            toneless: "zhong".into(),
            initial: "zh".into(),
            finals: vec!["ong".into()],
            tone: 1,
        });
        assert_eq!(t.numbered(), "zhong1");
    }

    #[test]
    fn error_messages() {
        assert_eq!(
            DecomposeError::InvalidLength("中国".into()).to_string(),
            "exactly one Chinese character expected, got \"中国\""
        );
        assert_eq!(
            DecomposeError::UnrecognizedCharacter('㐀').to_string(),
            "character not in dictionary: 㐀"
        );
    }
}
