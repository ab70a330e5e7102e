//! One drawing instruction of a path `d` attribute.

use crate::number::{format_number_into, numbers};
use crate::{Error, Result};
use serde::Serialize;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "camelCase")]
pub enum Operation {
    MoveTo,
    LineTo,
    HorizontalLineTo,
    VerticalLineTo,
    CurveTo,
    SmoothCurveTo,
    QuadraticCurveTo,
    SmoothQuadraticCurveTo,
    Arc,
    ClosePath,
}

impl Operation {
    /// Maps a command letter to its operation and whether it is the relative (lowercase) form.
    pub fn from_letter(c: char) -> Option<(Self, bool)> {
        let op = match c.to_ascii_uppercase() {
            'M' => Self::MoveTo,
            'L' => Self::LineTo,
            'H' => Self::HorizontalLineTo,
            'V' => Self::VerticalLineTo,
            'C' => Self::CurveTo,
            'S' => Self::SmoothCurveTo,
            'Q' => Self::QuadraticCurveTo,
            'T' => Self::SmoothQuadraticCurveTo,
            'A' => Self::Arc,
            'Z' => Self::ClosePath,
            _ => return None,
        };
        Some((op, c.is_ascii_lowercase()))
    }

    pub fn letter(self, relative: bool) -> char {
        let c = match self {
            Self::MoveTo => 'M',
            Self::LineTo => 'L',
            Self::HorizontalLineTo => 'H',
            Self::VerticalLineTo => 'V',
            Self::CurveTo => 'C',
            Self::SmoothCurveTo => 'S',
            Self::QuadraticCurveTo => 'Q',
            Self::SmoothQuadraticCurveTo => 'T',
            Self::Arc => 'A',
            Self::ClosePath => 'Z',
        };
        if relative { c.to_ascii_lowercase() } else { c }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Command {
    pub operation: Operation,
    pub relative: bool,
    pub values: Vec<f64>,
}

impl Command {
    pub fn new(operation: Operation, relative: bool, values: Vec<f64>) -> Self {
        Self {
            operation,
            relative,
            values,
        }
    }

    /// Parses one command token such as `L 10,10` or `c1-2.5.5 3 4 5`.
    pub fn parse(token: &str) -> Result<Self> {
        let Some((idx, (operation, relative))) = token
            .char_indices()
            .find_map(|(i, c)| Operation::from_letter(c).map(|op| (i, op)))
        else {
            return Err(Error::CommandParse {
                token: token.to_string(),
            });
        };
        let letter_len = operation.letter(relative).len_utf8();
        let values = numbers(&token[idx + letter_len..]);
        Ok(Self {
            operation,
            relative,
            values,
        })
    }

    pub fn letter(&self) -> char {
        self.operation.letter(self.relative)
    }

    /// Same letter (operation and case) as `other`.
    pub fn same_operation(&self, other: &Self) -> bool {
        self.operation == other.operation && self.relative == other.relative
    }

    pub fn serialize(&self) -> String {
        let mut out = String::new();
        self.serialize_into(&mut out, None);
        out
    }

    pub(crate) fn serialize_into(&self, out: &mut String, decimals: Option<u32>) {
        out.push(self.letter());
        for v in &self.values {
            out.push(' ');
            format_number_into(out, *v, decimals);
        }
    }
}

impl std::fmt::Display for Command {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.serialize())
    }
}
