//! Currency input for the dish edit form.
//!
//! While the field has focus it keeps whatever the user typed; on blur the
//! text is parsed (comma as decimal separator) and the field holds a number
//! again.

/// Parses user input such as `"12,5"` into a price.
///
/// Empty, unparseable, non-finite and negative input all become `0.0`.
pub fn parse_price(raw: &str) -> f64 {
    let raw = raw.trim();
    if raw.is_empty() {
        return 0.0;
    }

    raw.replacen(',', ".", 1)
        .parse::<f64>()
        .ok()
        .filter(|v| v.is_finite() && *v >= 0.0)
        .unwrap_or(0.0)
}

/// `12.5` → `"12,50"`.
pub fn format_price(value: f64) -> String {
    format!("{:.2}", value).replace('.', ",")
}

#[derive(Clone, Debug, PartialEq)]
pub enum PriceInput {
    Value(f64),
    Editing(String),
}

impl Default for PriceInput {
    fn default() -> Self {
        PriceInput::Value(0.0)
    }
}

impl PriceInput {
    /// Text shown in the field. Zero is shown as an empty field.
    pub fn display(&self) -> String {
        match self {
            PriceInput::Value(v) if *v == 0.0 => String::new(),
            PriceInput::Value(v) => format_price(*v),
            PriceInput::Editing(text) => text.clone(),
        }
    }

    pub fn on_change(&mut self, raw: &str) {
        *self = if raw.is_empty() {
            PriceInput::Value(0.0)
        } else {
            PriceInput::Editing(raw.to_string())
        };
    }

    pub fn on_blur(&mut self, raw: &str) {
        *self = PriceInput::Value(parse_price(raw));
    }

    /// Numeric value sent to the API.
    pub fn value(&self) -> f64 {
        match self {
            PriceInput::Value(v) => *v,
            PriceInput::Editing(text) => parse_price(text),
        }
    }
}
