use crate::error::{ContractDataError, Result};
use chrono::NaiveDate;

/// Fiscal years the dashboard exposes for selection.
pub const SUPPORTED_FISCAL_YEARS: [i32; 5] = [2020, 2021, 2022, 2023, 2024];

/// Shown wherever a record has no parseable action date.
pub const MISSING_DATE_LABEL: &str = "N/A";

pub fn validate_fiscal_year(year: i32) -> Result<()> {
    if !SUPPORTED_FISCAL_YEARS.contains(&year) {
        return Err(ContractDataError::InvalidFiscalYear(year));
    }
    Ok(())
}

pub fn format_date_label(date: Option<NaiveDate>) -> String {
    match date {
        Some(date) => date.format("%Y-%m-%d").to_string(),
        None => MISSING_DATE_LABEL.to_string(),
    }
}

/// Renders an amount the way the dashboard tooltip does: rounded to whole
/// dollars with thousands separators, e.g. "$1,250,000".
pub fn format_usd(amount: f64) -> String {
    let negative = amount < 0.0;
    let whole = amount.abs().round() as u64;
    let digits = whole.to_string();

    let mut grouped = String::with_capacity(digits.len() + digits.len() / 3);
    for (position, digit) in digits.chars().enumerate() {
        if position > 0 && (digits.len() - position) % 3 == 0 {
            grouped.push(',');
        }
        grouped.push(digit);
    }

    if negative {
        format!("-${}", grouped)
    } else {
        format!("${}", grouped)
    }
}
