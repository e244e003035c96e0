//! logos-based class tokenizer.
//!
//! A class string is a whitespace-separated list of opaque class names.
//! The lexer only finds token boundaries: it never looks inside a token, so
//! `md:hover:text-red-500`, `[mask-type:luminance]` and `!p-2` all come out
//! as single [`ClassToken::Class`] tokens.

use logos::Logos;

/// Token produced by the class lexer.
#[derive(Logos, Debug, Clone, Copy, PartialEq, Eq)]
#[logos(skip r"[ \t\n\r\f]+")]
pub enum ClassToken {
    /// One class name: any run of non-whitespace characters.
    #[regex(r"[^ \t\n\r\f]+")]
    Class,
}

/// Split a class string into its class names, in source order.
///
/// Leading, trailing and repeated whitespace are dropped.
pub fn tokenize(input: &str) -> Vec<String> {
    let lexer = ClassToken::lexer(input);
    lexer
        .spanned()
        .filter_map(|(result, span)| result.ok().map(|_| input[span].to_string()))
        .collect()
}

/// Collapse every whitespace run to a single space and trim both ends.
pub fn normalize_whitespace(input: &str) -> String {
    tokenize(input).join(" ")
}
