//! Number and date formatting shared by chart labels and page text.

use chrono::NaiveDate;

/// `332102` -> `"332,102"`.
pub fn thousands(n: u64) -> String {
    let digits = n.to_string();
    let mut out = String::with_capacity(digits.len() + digits.len() / 3);
    for (i, ch) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            out.push(',');
        }
        out.push(ch);
    }
    out
}

/// Rounds to the nearest whole number, then groups thousands.
pub fn thousands_f64(v: f64) -> String {
    let rounded = v.round();
    if rounded < 0.0 {
        format!("-{}", thousands(rounded.abs() as u64))
    } else {
        thousands(rounded as u64)
    }
}

pub fn percent(v: f64, decimals: usize) -> String {
    format!("{v:.decimals$}%")
}

/// Whole-number percentage with an explicit sign: `"+53%"`, `"-42%"`.
pub fn signed_percent(v: f64) -> String {
    format!("{v:+.0}%")
}

/// `"Dec 15"`.
pub fn month_day(date: NaiveDate) -> String {
    date.format("%b %-d").to_string()
}

pub fn hours(v: f64) -> String {
    format!("{v:.1} hrs")
}

/// JSON embedded in a `<script>` block must not close the tag early.
pub fn script_safe_json(json: &str) -> String {
    json.replace("</", "<\\/")
}
