//! This module parses rule text into a `RuleTable`.
//!
//! The grammar is deliberately loose: tokens are runs of word characters (with
//! a leading minus sign for negative states and the `-1` direction) or the
//! standalone wildcard `*`; every other character separates tokens. Each group
//! of five consecutive tokens forms one rule, in declaration order. A trailing
//! group of fewer than five tokens is silently dropped, never rejected.

use crate::types::{
    Direction, MachineError, Rule, RuleTable, State, Symbol, Write, WILDCARD_TOKEN,
};
use lazy_static::lazy_static;
use regex::Regex;

lazy_static! {
    static ref TOKEN: Regex = Regex::new(r"[-\w]+|\*").unwrap();
}

/// Parses rule text into a `RuleTable`, preserving declaration order.
///
/// # Errors
///
/// Returns [`MachineError::InvalidRule`] when a complete five-token group
/// holds a token that is not a state number, single-character symbol,
/// wildcard, or direction. Incomplete trailing groups are not an error.
pub fn parse(input: &str) -> Result<RuleTable, MachineError> {
    let tokens: Vec<&str> = TOKEN.find_iter(input).map(|m| m.as_str()).collect();

    let mut rules = Vec::new();
    for group in tokens.chunks_exact(5) {
        rules.push(parse_rule(group)?);
    }

    Ok(RuleTable::new(rules))
}

/// Converts one five-token group into a `Rule`.
fn parse_rule(tokens: &[&str]) -> Result<Rule, MachineError> {
    Ok(Rule {
        state: parse_state(tokens[0])?,
        scan: parse_symbol(tokens[1])?,
        next_state: parse_state(tokens[2])?,
        write: parse_write(tokens[3])?,
        direction: parse_direction(tokens[4])?,
    })
}

fn parse_state(token: &str) -> Result<State, MachineError> {
    token
        .parse()
        .map_err(|_| MachineError::InvalidRule(format!("'{token}' is not a state number")))
}

fn parse_symbol(token: &str) -> Result<Symbol, MachineError> {
    if token == WILDCARD_TOKEN {
        return Ok(Symbol::Wildcard);
    }

    single_char(token).map(Symbol::Literal)
}

fn parse_write(token: &str) -> Result<Write, MachineError> {
    if token == WILDCARD_TOKEN {
        return Ok(Write::Unchanged);
    }

    single_char(token).map(Write::Literal)
}

fn parse_direction(token: &str) -> Result<Direction, MachineError> {
    match token.parse::<i64>() {
        Ok(-1) => Ok(Direction::Left),
        Ok(0) => Ok(Direction::Stay),
        Ok(1) => Ok(Direction::Right),
        _ => Err(MachineError::InvalidRule(format!(
            "'{token}' is not a direction (-1, 0, or 1)"
        ))),
    }
}

fn single_char(token: &str) -> Result<char, MachineError> {
    let mut chars = token.chars();
    match (chars.next(), chars.next()) {
        (Some(c), None) => Ok(c),
        _ => Err(MachineError::InvalidRule(format!(
            "'{token}' is not a single-character symbol"
        ))),
    }
}
