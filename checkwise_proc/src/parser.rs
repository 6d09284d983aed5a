//SPDX-License-Identifier: MIT OR Apache-2.0

use proc_macro::{Spacing, TokenStream, TokenTree};
use std::collections::VecDeque;

/// One argument of a logging macro after splitting on top-level commas.
pub(crate) enum LogArg {
    /// A string literal.  It is already text, so it is written to the record verbatim.
    Literal(String),
    /// Any other expression.  It is inspected at run time.
    Expr(String),
}

/// Splits the remaining token stream into arguments.
///
/// Groups (`(..)`, `[..]`, `{..}`) are atomic tokens, so commas inside them never split.
/// Commas inside turbofish generics (`HashMap::<K, V>::new()`) are also kept together.
/// Empty arguments (e.g. from a trailing comma) are dropped.
pub(crate) fn parse_args(input: &mut VecDeque<TokenTree>) -> Vec<LogArg> {
    let mut args = Vec::new();
    while !input.is_empty() {
        let tokens = take_arg(input);
        if tokens.is_empty() {
            continue;
        }
        args.push(classify(tokens));
    }
    args
}

/// Consumes tokens up to and including the next top-level `,`.
fn take_arg(input: &mut VecDeque<TokenTree>) -> Vec<TokenTree> {
    let mut tokens = Vec::new();
    let mut generic_depth = 0usize;
    //true right after a `::`
    let mut after_path_sep = false;
    //last punct, used to tell `->` apart from a closing `>`
    let mut previous_punct: Option<(char, Spacing)> = None;

    while let Some(token) = input.pop_front() {
        let mut next_after_path_sep = false;
        let mut next_previous_punct = None;
        if let TokenTree::Punct(p) = &token {
            let c = p.as_char();
            if c == ',' && generic_depth == 0 {
                return tokens;
            }
            match c {
                '<' if after_path_sep || generic_depth > 0 => generic_depth += 1,
                '>' if generic_depth > 0 && previous_punct != Some(('-', Spacing::Joint)) => {
                    generic_depth -= 1
                }
                ':' if previous_punct == Some((':', Spacing::Joint)) => next_after_path_sep = true,
                _ => {}
            }
            next_previous_punct = Some((c, p.spacing()));
        }
        after_path_sep = next_after_path_sep;
        previous_punct = next_previous_punct;
        tokens.push(token);
    }
    tokens
}

fn classify(tokens: Vec<TokenTree>) -> LogArg {
    if let [TokenTree::Literal(l)] = tokens.as_slice() {
        let text = l.to_string();
        if is_string_literal(&text) {
            return LogArg::Literal(text);
        }
    }
    LogArg::Expr(tokens.into_iter().collect::<TokenStream>().to_string())
}

fn is_string_literal(text: &str) -> bool {
    if text.starts_with('"') {
        return true;
    }
    //raw strings: r"..." and r#"..."#
    match text.strip_prefix('r') {
        Some(rest) => rest.starts_with('"') || rest.starts_with('#'),
        None => false,
    }
}
