//! `<path>` geometry: the command list of a `d` attribute.

use crate::command::Command;
use crate::interpolate::{Interpolate, lerp};
use crate::{Error, Result};
use regex::Regex;
use std::sync::OnceLock;

fn re_command() -> &'static Regex {
    static ONCE: OnceLock<Regex> = OnceLock::new();
    ONCE.get_or_init(|| {
        Regex::new(r"[MLHVCSQTAZmlhvcsqtaz][^MLHVCSQTAZmlhvcsqtaz]*")
            .expect("path command regex must compile")
    })
}

/// Splits a `d` attribute value on command-letter boundaries.
pub fn tokenize(d: &str) -> Result<Vec<Command>> {
    re_command()
        .find_iter(d)
        .map(|m| Command::parse(m.as_str()))
        .collect()
}

#[derive(Debug, Clone, Default, PartialEq)]
pub struct PathData {
    pub commands: Vec<Command>,
}

impl PathData {
    pub fn parse(d: &str) -> Result<Self> {
        Ok(Self {
            commands: tokenize(d)?,
        })
    }

    pub fn is_empty(&self) -> bool {
        self.commands.is_empty()
    }

    /// Why `other` cannot be blended with `self`, or `None` when it can.
    pub fn incompatibility(&self, other: &Self) -> Option<String> {
        if self.commands.len() != other.commands.len() {
            return Some(format!(
                "paths have {} and {} commands",
                self.commands.len(),
                other.commands.len()
            ));
        }
        self.commands
            .iter()
            .zip(&other.commands)
            .position(|(a, b)| !a.same_operation(b))
            .map(|i| {
                format!(
                    "command #{i} is `{}` on one side and `{}` on the other",
                    self.commands[i].letter(),
                    other.commands[i].letter()
                )
            })
    }

    /// The `d` attribute value: serialized commands concatenated.
    pub fn serialize(&self) -> String {
        self.serialize_with(None)
    }

    pub(crate) fn serialize_with(&self, decimals: Option<u32>) -> String {
        let mut out = String::new();
        for c in &self.commands {
            c.serialize_into(&mut out, decimals);
        }
        out
    }
}

impl Interpolate for PathData {
    fn can_interpolate(&self, other: &Self) -> bool {
        self.incompatibility(other).is_none()
    }

    fn interpolated(&self, other: &Self, p: f64) -> Result<Self> {
        let mut out = self.clone();
        for (i, (cmd, partner)) in out.commands.iter_mut().zip(&other.commands).enumerate() {
            if cmd.values.len() != partner.values.len() {
                return Err(Error::ElementMismatch {
                    command: i,
                    left: cmd.values.len(),
                    right: partner.values.len(),
                });
            }
            for (v, v2) in cmd.values.iter_mut().zip(&partner.values) {
                *v = lerp(*v, *v2, p);
            }
        }
        Ok(out)
    }
}
