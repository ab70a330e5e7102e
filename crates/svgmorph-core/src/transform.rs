//! One function of a `transform` attribute, e.g. `translate(10, 20)`.

use crate::interpolate::lerp;
use crate::number::{format_number_into, numbers};
use crate::{Error, Result};
use regex::Regex;
use serde::Serialize;
use std::sync::OnceLock;

pub const MATRIX: &str = "matrix";
pub const TRANSLATE: &str = "translate";
pub const SCALE: &str = "scale";
pub const ROTATE: &str = "rotate";

fn re_transform() -> &'static Regex {
    static ONCE: OnceLock<Regex> = OnceLock::new();
    ONCE.get_or_init(|| {
        Regex::new(r"^\s*([A-Za-z_][A-Za-z0-9_]*)\(?([^)]*)\)?")
            .expect("transform regex must compile")
    })
}

fn re_transform_list() -> &'static Regex {
    static ONCE: OnceLock<Regex> = OnceLock::new();
    ONCE.get_or_init(|| {
        Regex::new(r"[A-Za-z][A-Za-z0-9_]*\([^)]*\)").expect("transform list regex must compile")
    })
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Transform {
    pub name: String,
    pub values: Vec<f64>,
}

impl Transform {
    pub fn new(name: impl Into<String>, values: Vec<f64>) -> Self {
        Self {
            name: name.into(),
            values,
        }
    }

    /// Parses a single `name(args)` token. The parentheses are optional.
    pub fn parse(token: &str) -> Result<Self> {
        let Some(caps) = re_transform().captures(token) else {
            return Err(Error::TransformParse {
                token: token.to_string(),
            });
        };
        let name = caps.get(1).map(|m| m.as_str()).unwrap_or_default();
        let args = caps.get(2).map(|m| m.as_str()).unwrap_or_default();
        Ok(Self::new(name, numbers(args)))
    }

    /// Splits a whole `transform` attribute value into its functions.
    pub fn tokenize(attr: &str) -> Vec<Self> {
        re_transform_list()
            .find_iter(attr)
            .filter_map(|m| Self::parse(m.as_str()).ok())
            .collect()
    }

    pub fn is_translate(&self) -> bool {
        self.name == TRANSLATE
    }

    pub fn is_matrix(&self) -> bool {
        self.name == MATRIX
    }

    /// `translate(tx, ty)` as the equivalent `matrix(1, 0, 0, 1, tx, ty)`; anything else is
    /// returned as is.
    pub fn to_matrix_if_translate(&self) -> Self {
        if !self.is_translate() {
            return self.clone();
        }
        let tx = self.values.first().copied().unwrap_or(0.0);
        let ty = self.values.get(1).copied().unwrap_or(0.0);
        Self::new(MATRIX, vec![1.0, 0.0, 0.0, 1.0, tx, ty])
    }

    /// A transform with the same name and arity that leaves geometry unchanged.
    ///
    /// `scale` is neutral at 1 and `matrix` at the identity matrix. `rotate` keeps its centre and
    /// zeroes the angle, so the shape turns in place. Every other operation is neutral at 0.
    pub fn identity_like(&self) -> Self {
        const IDENTITY_MATRIX: [f64; 6] = [1.0, 0.0, 0.0, 1.0, 0.0, 0.0];
        let values = match self.name.as_str() {
            MATRIX => (0..self.values.len())
                .map(|i| IDENTITY_MATRIX.get(i).copied().unwrap_or(0.0))
                .collect(),
            SCALE => vec![1.0; self.values.len()],
            ROTATE => self
                .values
                .iter()
                .enumerate()
                .map(|(i, v)| if i == 0 { 0.0 } else { *v })
                .collect(),
            _ => vec![0.0; self.values.len()],
        };
        Self::new(self.name.clone(), values)
    }

    /// Blends `self` toward `other` at fraction `p`.
    ///
    /// A `translate` facing a `matrix` is promoted to a matrix first; any other name mismatch is
    /// an error. Missing trailing values count as 0.
    pub fn interpolate(&self, other: &Self, p: f64) -> Result<Self> {
        let (from, to) = match (self.name.as_str(), other.name.as_str()) {
            (TRANSLATE, MATRIX) => (self.to_matrix_if_translate(), other.clone()),
            (MATRIX, TRANSLATE) => (self.clone(), other.to_matrix_if_translate()),
            _ => (self.clone(), other.clone()),
        };
        if from.name != to.name {
            return Err(Error::IncompatibleTransform {
                from: self.serialize(),
                to: other.serialize(),
            });
        }

        let len = from.values.len().max(to.values.len());
        let values = (0..len)
            .map(|i| {
                let v1 = from.values.get(i).copied().unwrap_or(0.0);
                let v2 = to.values.get(i).copied().unwrap_or(0.0);
                lerp(v1, v2, p)
            })
            .collect();

        Ok(Self::new(from.name, values))
    }

    pub fn serialize(&self) -> String {
        let mut out = String::new();
        self.serialize_into(&mut out, None);
        out
    }

    pub(crate) fn serialize_into(&self, out: &mut String, decimals: Option<u32>) {
        out.push_str(&self.name);
        out.push('(');
        for (i, v) in self.values.iter().enumerate() {
            if i > 0 {
                out.push_str(", ");
            }
            format_number_into(out, *v, decimals);
        }
        out.push(')');
    }
}

impl std::fmt::Display for Transform {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.serialize())
    }
}

/// Serializes a transform list the way it is written back into a `transform` attribute.
pub(crate) fn serialize_list(transforms: &[Transform], decimals: Option<u32>) -> String {
    let mut out = String::new();
    for (i, t) in transforms.iter().enumerate() {
        if i > 0 {
            out.push(';');
        }
        t.serialize_into(&mut out, decimals);
    }
    out
}
