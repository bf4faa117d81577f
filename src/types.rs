//! Shared types used across romanwords.
//! Includes the arithmetic `Operator` and the driver's `OutputFormat`.
use clap::ValueEnum;
use serde::{Deserialize, Serialize};

/// One of the four arithmetic operators, or whatever else sat in the operator slot.
#[derive(Copy, Clone, PartialEq, Eq, Debug, Serialize, Deserialize)]
pub enum Operator {
    Add,
    Sub,
    Mul,
    Div,
    Unknown(char),
}

impl Operator {
    pub fn from_symbol(symbol: char) -> Self {
        match symbol {
            '+' => Operator::Add,
            '-' => Operator::Sub,
            '*' => Operator::Mul,
            '/' => Operator::Div,
            other => Operator::Unknown(other),
        }
    }

    /// Parse the middle field of a line. Anything other than a single
    /// operator symbol is `Unknown`, keyed on its first character.
    pub fn from_token(token: &str) -> Self {
        let mut chars = token.chars();
        match (chars.next(), chars.next()) {
            (Some(symbol), None) => Operator::from_symbol(symbol),
            (Some(first), Some(_)) => Operator::Unknown(first),
            (None, _) => Operator::Unknown(' '),
        }
    }

    pub fn symbol(&self) -> char {
        match self {
            Operator::Add => '+',
            Operator::Sub => '-',
            Operator::Mul => '*',
            Operator::Div => '/',
            Operator::Unknown(c) => *c,
        }
    }
}

impl std::fmt::Display for Operator {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.symbol())
    }
}

#[derive(Copy, Clone, PartialEq, Eq, PartialOrd, Ord, ValueEnum, Debug, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum OutputFormat {
    Text,
    Json, // JSON Lines, one object per input line
}

impl OutputFormat {
    pub fn extension(&self) -> &'static str {
        match self {
            OutputFormat::Text => "txt",
            OutputFormat::Json => "jsonl",
        }
    }
}

impl std::fmt::Display for OutputFormat {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            OutputFormat::Text => write!(f, "Text"),
            OutputFormat::Json => write!(f, "Json"),
        }
    }
}
