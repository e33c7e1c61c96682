//! Bracket classification.

/// One of the three supported bracket pairs.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Bracket {
    /// `(` and `)`.
    Paren,
    /// `[` and `]`.
    Square,
    /// `{` and `}`.
    Curly,
}

impl Bracket {
    /// The opening character of this pair.
    #[must_use]
    pub const fn open(self) -> char {
        match self {
            Self::Paren => '(',
            Self::Square => '[',
            Self::Curly => '{',
        }
    }

    /// The closing character of this pair.
    #[must_use]
    pub const fn close(self) -> char {
        match self {
            Self::Paren => ')',
            Self::Square => ']',
            Self::Curly => '}',
        }
    }
}

/// A bracket character together with the side it sits on.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Delim {
    /// An opener: `(`, `[` or `{`.
    Open(Bracket),
    /// A closer: `)`, `]` or `}`.
    Close(Bracket),
}

/// Classify a character as an opener, a closer, or neither.
#[must_use]
pub const fn classify(c: char) -> Option<Delim> {
    match c {
        '(' => Some(Delim::Open(Bracket::Paren)),
        '[' => Some(Delim::Open(Bracket::Square)),
        '{' => Some(Delim::Open(Bracket::Curly)),
        ')' => Some(Delim::Close(Bracket::Paren)),
        ']' => Some(Delim::Close(Bracket::Square)),
        '}' => Some(Delim::Close(Bracket::Curly)),
        _ => None,
    }
}

/// Return the closer matching `opener`, or `None` if it is not an opener.
#[must_use]
pub const fn closer_for(opener: char) -> Option<char> {
    match classify(opener) {
        Some(Delim::Open(bracket)) => Some(bracket.close()),
        _ => None,
    }
}
