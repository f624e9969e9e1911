//! Reserved word table.
//!
//! Every keyword is always reserved; there are no context-sensitive
//! keywords. `transaction` and `contract` are reserved without any grammar
//! production behind them.

use uniris_ir::TokenKind;

/// Look up a reserved keyword by text.
///
/// Returns `None` for ordinary identifiers. Keywords are 2-11 chars long,
/// so anything outside that range is rejected without comparing.
#[inline]
pub(crate) fn lookup(text: &str) -> Option<TokenKind> {
    if !(2..=11).contains(&text.len()) {
        return None;
    }

    match text {
        "if" => Some(TokenKind::If),
        "or" => Some(TokenKind::Or),
        "and" => Some(TokenKind::And),
        "for" => Some(TokenKind::For),
        "else" => Some(TokenKind::Else),
        "true" => Some(TokenKind::True),
        "false" => Some(TokenKind::False),
        "print" => Some(TokenKind::Print),
        "while" => Some(TokenKind::While),
        "return" => Some(TokenKind::Return),
        "function" => Some(TokenKind::Function),
        "contract" => Some(TokenKind::Contract),
        "transaction" => Some(TokenKind::Transaction),
        _ => None,
    }
}
