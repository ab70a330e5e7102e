//! Numeric runs inside `d` and `transform` attribute values.

use regex::Regex;
use std::fmt::Write as _;
use std::sync::OnceLock;

fn re_num() -> &'static Regex {
    static ONCE: OnceLock<Regex> = OnceLock::new();
    ONCE.get_or_init(|| {
        Regex::new(r"[+-]?(?:\d+\.?\d*|\.\d+)(?:[eE][+-]?\d+)?").expect("number regex must compile")
    })
}

/// Extracts every number of `text`, in order.
///
/// Separators are optional the way the path grammar allows: `10-5` is two numbers, and so is
/// `.5.5`.
pub fn numbers(text: &str) -> Vec<f64> {
    re_num()
        .find_iter(text)
        .filter_map(|m| m.as_str().parse::<f64>().ok())
        .collect()
}

/// Shortest round-trippable decimal, printed the way JavaScript's `Number#toString` does.
pub fn format_number(v: f64) -> String {
    format_number_with(v, None)
}

/// Like [`format_number`], but rounded to `decimals` places (trailing zeros trimmed) when set.
pub fn format_number_with(v: f64, decimals: Option<u32>) -> String {
    let mut out = String::new();
    format_number_into(&mut out, v, decimals);
    out
}

/// Precision beyond this carries no information for an `f64`.
pub const MAX_DECIMALS: u32 = 17;

pub(crate) fn format_number_into(out: &mut String, mut v: f64, decimals: Option<u32>) {
    if !v.is_finite() {
        out.push('0');
        return;
    }
    if let Some(decimals) = decimals {
        let decimals = decimals.min(MAX_DECIMALS);
        let p = 10_f64.powi(decimals as i32);
        let scaled = (v * p).round();
        if scaled.is_finite() {
            v = scaled / p;
        }
        if v == 0.0 {
            v = 0.0;
        }
        let start = out.len();
        let _ = write!(out, "{:.*}", decimals as usize, v);
        if out[start..].contains('.') {
            while out.ends_with('0') {
                out.pop();
            }
            if out.ends_with('.') {
                out.pop();
            }
        }
        return;
    }
    if v == -0.0 {
        v = 0.0;
    }
    let mut buf = ryu_js::Buffer::new();
    out.push_str(buf.format_finite(v));
}
