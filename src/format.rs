//! Rendering of physical-unit values for the mirrored input fields.

/// Turns a physical value into the text written to an input field.
///
/// Implemented for any `Fn(f64, Option<usize>) -> String`, so callers can
/// pass a closure instead of a dedicated type.
pub trait Formatter {
    fn format(&self, value: f64, precision: Option<usize>) -> String;
}

impl<F> Formatter for F
where
    F: Fn(f64, Option<usize>) -> String,
{
    fn format(&self, value: f64, precision: Option<usize>) -> String {
        self(value, precision)
    }
}

/// Default formatter: fixed number of decimals
#[derive(Debug, Clone, Copy)]
pub struct FixedFormatter {
    pub default_precision: usize,
}

impl FixedFormatter {
    pub fn new(default_precision: usize) -> Self {
        Self { default_precision }
    }
}

impl Default for FixedFormatter {
    fn default() -> Self {
        Self::new(crate::constants::DEFAULT_PRECISION)
    }
}

impl Formatter for FixedFormatter {
    fn format(&self, value: f64, precision: Option<usize>) -> String {
        format_fixed(value, precision.unwrap_or(self.default_precision))
    }
}

/// Format with `precision` decimals, never producing "-0.0"
pub fn format_fixed(value: f64, precision: usize) -> String {
    let text = format!("{:.*}", precision, value);
    match text.strip_prefix('-') {
        Some(rest) if rest.bytes().all(|b| b == b'0' || b == b'.') => rest.to_string(),
        _ => text,
    }
}
