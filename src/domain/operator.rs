//! PEP 440 comparison operators
//!
//! The operator set is closed: anything else in requirement metadata is a
//! parse error upstream, never a value of this enum.

use std::fmt;
use std::str::FromStr;

/// A version comparison operator from a PEP 440 specifier clause
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Operator {
    /// Compatible release (`~=`)
    Compatible,
    /// Version matching (`==`)
    Equal,
    /// Arbitrary equality (`===`)
    ArbitraryEqual,
    /// Version exclusion (`!=`)
    NotEqual,
    /// Inclusive ordered comparison (`<=`)
    LessOrEqual,
    /// Exclusive ordered comparison (`<`)
    Less,
    /// Inclusive ordered comparison (`>=`)
    GreaterOrEqual,
    /// Exclusive ordered comparison (`>`)
    Greater,
}

impl Operator {
    /// The source-ecosystem token for this operator
    pub fn as_str(&self) -> &'static str {
        match self {
            Operator::Compatible => "~=",
            Operator::Equal => "==",
            Operator::ArbitraryEqual => "===",
            Operator::NotEqual => "!=",
            Operator::LessOrEqual => "<=",
            Operator::Less => "<",
            Operator::GreaterOrEqual => ">=",
            Operator::Greater => ">",
        }
    }
}

impl FromStr for Operator {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "~=" => Ok(Operator::Compatible),
            "==" => Ok(Operator::Equal),
            "===" => Ok(Operator::ArbitraryEqual),
            "!=" => Ok(Operator::NotEqual),
            "<=" => Ok(Operator::LessOrEqual),
            "<" => Ok(Operator::Less),
            ">=" => Ok(Operator::GreaterOrEqual),
            ">" => Ok(Operator::Greater),
            other => Err(format!("unknown version operator '{}'", other)),
        }
    }
}

impl fmt::Display for Operator {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
