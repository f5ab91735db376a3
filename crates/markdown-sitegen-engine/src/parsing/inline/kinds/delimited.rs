use crate::parsing::inline::types::TokenKind;

/// A style whose spans open and close with the same literal delimiter.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Delimited {
    pub delimiter: &'static str,
    pub kind: TokenKind,
}

impl Delimited {
    pub const BOLD: Delimited = Delimited {
        delimiter: "**",
        kind: TokenKind::Bold,
    };
    pub const ITALIC: Delimited = Delimited {
        delimiter: "_",
        kind: TokenKind::Italic,
    };
    pub const CODE: Delimited = Delimited {
        delimiter: "`",
        kind: TokenKind::Code,
    };

    /// Tokenizer order. Bold runs before italic so `**` is never read as two markers.
    pub const ORDER: [Delimited; 3] = [Self::BOLD, Self::ITALIC, Self::CODE];
}
