use crate::models::settings::Locale;

/// Locale-specific text for amounts and periods.
///
/// The numeric services stay locale-agnostic; only implementations of this
/// trait know about currency symbols, digit grouping and plural forms.
pub trait AmountFormatter: Send + Sync {
    /// Whole currency units, grouped, with the currency symbol.
    fn currency(&self, amount: f64) -> String;

    /// A percentage with one decimal place, e.g. `40.5%`.
    fn percent(&self, pct: f64) -> String {
        let rounded = (pct * 10.0).round() / 10.0;
        let shown = if rounded == 0.0 || !rounded.is_finite() {
            0.0
        } else {
            rounded
        };
        format!("{shown:.1}%")
    }

    /// Count of periods with the correctly inflected unit, e.g. `3 years`.
    fn period_label(&self, periods: u32) -> String;

    /// Heading for a single chart point; period 0 is the starting point.
    fn point_label(&self, period: u32) -> String;
}

/// Rubles with Russian plural forms: `1 404 929 ₽`, `3 года`.
pub struct RussianFormatter;

impl RussianFormatter {
    pub fn new() -> Self {
        Self
    }

    /// год / года / лет for `n`.
    #[must_use]
    pub fn year_word(n: u32) -> &'static str {
        let last_digit = n % 10;
        let last_two = n % 100;
        if last_digit == 1 && last_two != 11 {
            "год"
        } else if (2..=4).contains(&last_digit) && !(12..=14).contains(&last_two) {
            "года"
        } else {
            "лет"
        }
    }
}

impl Default for RussianFormatter {
    fn default() -> Self {
        Self::new()
    }
}

impl AmountFormatter for RussianFormatter {
    fn currency(&self, amount: f64) -> String {
        let (negative, digits) = whole_units(amount);
        let grouped = group_digits(&digits, '\u{a0}');
        let sign = if negative { "-" } else { "" };
        format!("{sign}{grouped}\u{a0}₽")
    }

    fn period_label(&self, periods: u32) -> String {
        format!("{periods} {}", Self::year_word(periods))
    }

    fn point_label(&self, period: u32) -> String {
        if period == 0 {
            "Начало".to_string()
        } else {
            self.period_label(period)
        }
    }
}

/// US dollars with English labels: `$1,404,929`, `3 years`.
pub struct EnglishFormatter;

impl EnglishFormatter {
    pub fn new() -> Self {
        Self
    }
}

impl Default for EnglishFormatter {
    fn default() -> Self {
        Self::new()
    }
}

impl AmountFormatter for EnglishFormatter {
    fn currency(&self, amount: f64) -> String {
        let (negative, digits) = whole_units(amount);
        let grouped = group_digits(&digits, ',');
        let sign = if negative { "-" } else { "" };
        format!("{sign}${grouped}")
    }

    fn period_label(&self, periods: u32) -> String {
        let unit = if periods == 1 { "year" } else { "years" };
        format!("{periods} {unit}")
    }

    fn point_label(&self, period: u32) -> String {
        if period == 0 {
            "Start".to_string()
        } else {
            format!("Year {period}")
        }
    }
}

/// Pick the formatter for a configured locale.
pub fn formatter_for(locale: Locale) -> Box<dyn AmountFormatter> {
    match locale {
        Locale::Ru => Box::new(RussianFormatter::new()),
        Locale::En => Box::new(EnglishFormatter::new()),
    }
}

/// Round half away from zero to whole units and return (is_negative, digits).
/// Non-finite amounts and amounts that round to zero come back as unsigned "0".
fn whole_units(amount: f64) -> (bool, String) {
    if !amount.is_finite() {
        return (false, "0".to_string());
    }
    let rounded = amount.round();
    if rounded == 0.0 {
        return (false, "0".to_string());
    }
    (rounded < 0.0, format!("{:.0}", rounded.abs()))
}

fn group_digits(digits: &str, separator: char) -> String {
    let len = digits.len();
    let mut out = String::with_capacity(len + len / 3 * separator.len_utf8());
    for (i, ch) in digits.chars().enumerate() {
        if i > 0 && (len - i) % 3 == 0 {
            out.push(separator);
        }
        out.push(ch);
    }
    out
}
