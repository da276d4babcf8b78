//! Key-pattern matching for section keys
//!
//! Three key shapes drive a conversion: bare patch numbers (`42`) inside a
//! bank's patch list, `Patch[N]` melodic bank selectors, and `Key[N,M]`
//! drum bank selectors. A key is only recognized when the whole string
//! matches one shape; everything else is left for callers to skip, which
//! tolerates comment-like keys sitting in the same section.

use logos::Logos;

/// Tokens of a section key
#[derive(Logos, Debug, Clone, Copy, PartialEq)]
pub enum KeyToken {
    #[token("Patch")]
    Patch,

    #[token("Key")]
    Key,

    #[token("[")]
    LBracket,

    #[token("]")]
    RBracket,

    #[token(",")]
    Comma,

    #[regex(r"[0-9]+", parse_number)]
    Number(u32),
}

fn parse_number(lex: &mut logos::Lexer<KeyToken>) -> Option<u32> {
    lex.slice().parse().ok()
}

/// A classified section key
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum KeyPattern {
    /// A bare patch/program number inside a bank section
    Program(u32),
    /// `Patch[N]`: a melodic bank selector
    MelodicBank(u32),
    /// `Key[N,M]`: a drum bank selector pair
    DrumBank(u32, u32),
}

/// Classify a section key, or `None` when it matches no known shape
///
/// No range checking happens here: `"200"` classifies as `Program(200)`
/// and is rejected later by the builder.
pub fn classify(key: &str) -> Option<KeyPattern> {
    let tokens: Vec<KeyToken> = KeyToken::lexer(key).collect::<Result<_, _>>().ok()?;

    match tokens.as_slice() {
        [KeyToken::Number(n)] => Some(KeyPattern::Program(*n)),
        [KeyToken::Patch, KeyToken::LBracket, KeyToken::Number(n), KeyToken::RBracket] => {
            Some(KeyPattern::MelodicBank(*n))
        }
        [KeyToken::Key, KeyToken::LBracket, KeyToken::Number(n1), KeyToken::Comma, KeyToken::Number(n2), KeyToken::RBracket] => {
            Some(KeyPattern::DrumBank(*n1, *n2))
        }
        _ => None,
    }
}
