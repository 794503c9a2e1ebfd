//! Parsing and display of user-entered amounts.
//!
//! Amounts are typed with thousands separators (`10,000,000`) and kept as strings in the
//! calculator form, so every numeric read goes through [`parse_formatted_number`].

/// Parse an amount that may contain `,` thousands separators.
///
/// Returns `None` for empty input, anything `f64` cannot parse, and non-finite values.
pub fn parse_formatted_number(value: &str) -> Option<f64> {
    let cleaned: String = value.chars().filter(|c| *c != ',').collect();
    let cleaned = cleaned.trim();
    if cleaned.is_empty() {
        return None;
    }
    cleaned.parse::<f64>().ok().filter(|v| v.is_finite())
}

/// Parse a plain number such as a percentage or a multiplier. Separators are not accepted.
pub fn parse_plain_number(value: &str) -> Option<f64> {
    let trimmed = value.trim();
    if trimmed.is_empty() {
        return None;
    }
    trimmed.parse::<f64>().ok().filter(|v| v.is_finite())
}

/// Normalize a typed amount: group the integer part by thousands and keep at most two
/// fractional digits. Input that is not a number is returned unchanged.
pub fn format_number_string(value: &str) -> String {
    let num: String = value.chars().filter(|c| *c != ',').collect();
    if parse_formatted_number(&num).is_none() {
        return value.to_string();
    }

    let num = num.trim();
    match num.split_once('.') {
        Some((int_part, frac_part)) => {
            let frac: String = frac_part.chars().take(2).collect();
            format!("{}.{}", group_thousands(int_part), frac)
        }
        None => group_thousands(num),
    }
}

/// Render a number with thousands separators, rounded to `max_frac` digits and padded to at
/// least `min_frac`.
pub fn format_grouped(value: f64, min_frac: usize, max_frac: usize) -> String {
    if !value.is_finite() {
        return value.to_string();
    }
    let max_frac = max_frac.max(min_frac);
    let rendered = format!("{:.*}", max_frac, value);

    let (int_part, frac_part) = match rendered.split_once('.') {
        Some((i, f)) => (i.to_string(), f.to_string()),
        None => (rendered.clone(), String::new()),
    };

    let mut frac = frac_part.trim_end_matches('0').to_string();
    while frac.len() < min_frac {
        frac.push('0');
    }

    // "-0" after rounding a tiny negative
    let int_part = if int_part == "-0" && frac.chars().all(|c| c == '0') {
        "0".to_string()
    } else {
        int_part
    };

    if frac.is_empty() {
        group_thousands(&int_part)
    } else {
        format!("{}.{}", group_thousands(&int_part), frac)
    }
}

fn group_thousands(int_part: &str) -> String {
    let (sign, digits) = match int_part.strip_prefix(['-', '+']) {
        Some(rest) => (&int_part[..1], rest),
        None => ("", int_part),
    };
    if digits.is_empty() || !digits.bytes().all(|b| b.is_ascii_digit()) {
        return int_part.to_string();
    }

    let mut grouped = String::with_capacity(digits.len() + digits.len() / 3);
    for (i, ch) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            grouped.push(',');
        }
        grouped.push(ch);
    }
    format!("{sign}{grouped}")
}
