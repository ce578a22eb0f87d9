//! Pricing of project funding campaigns.
//!
//! Funding costs double every month: 6 ADA for one month, 12 for two,
//! 24 for three, up to a maximum duration of 12 months.

use chrono::{Datelike, NaiveDate};
use num_format::{Locale, ToFormattedString};
use serde::Serialize;

use crate::errors::FundingError;

/// Cost in ADA of a one month funding campaign.
pub const BASE_FUNDING_COST: u64 = 6;

pub const MIN_FUNDING_MONTHS: u32 = 1;
pub const MAX_FUNDING_MONTHS: u32 = 12;

/// One row of the funding price table.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct FundingOption {
    pub months: u32,
    pub cost: u64,
    pub cost_formatted: String,
}

/// Cost in ADA of a funding campaign lasting `months` months.
pub fn calculate_funding_cost(months: u32) -> Result<u64, FundingError> {
    if !(MIN_FUNDING_MONTHS..=MAX_FUNDING_MONTHS).contains(&months) {
        return Err(FundingError::InvalidDuration(months));
    }
    Ok(BASE_FUNDING_COST << (months - 1))
}

/// Number of months between `today` and the `YYYY-MM` target, the current
/// month counting as one. Targets in the past are clamped to one month and
/// an empty target yields zero.
pub fn calculate_months_from_now(target: &str, today: NaiveDate) -> Result<u32, FundingError> {
    if target.is_empty() {
        return Ok(0);
    }

    let invalid = || FundingError::InvalidTargetMonth(target.to_owned());
    let (year, month) = target.split_once('-').ok_or_else(invalid)?;
    let year: i32 = year.parse().map_err(|_| invalid())?;
    let month: u32 = month.parse().map_err(|_| invalid())?;
    if !(1..=12).contains(&month) {
        return Err(invalid());
    }

    let months_from_now = i64::from(year)
        .checked_sub(i64::from(today.year()))
        .and_then(|years| years.checked_mul(12))
        .and_then(|months| months.checked_add(i64::from(month) - i64::from(today.month())))
        .and_then(|months| months.checked_add(1))
        .ok_or_else(invalid)?;
    u32::try_from(months_from_now.max(1)).map_err(|_| invalid())
}

/// Formats an ADA amount with thousands separators, e.g. `12,288 ADA`.
pub fn format_ada_amount(amount: u64) -> String {
    format!("{} ADA", amount.to_formatted_string(&Locale::en))
}

/// Price table for every supported funding duration.
pub fn pricing_breakdown() -> Vec<FundingOption> {
    (MIN_FUNDING_MONTHS..=MAX_FUNDING_MONTHS)
        .map(|months| {
            let cost = BASE_FUNDING_COST << (months - 1);
            FundingOption {
                months,
                cost,
                cost_formatted: format_ada_amount(cost),
            }
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;
    use rstest::rstest;

    use super::*;

    #[rstest]
    #[case(1, 6)]
    #[case(2, 12)]
    #[case(3, 24)]
    #[case(12, 12_288)]
    fn test_funding_cost_doubles_every_month(#[case] months: u32, #[case] expected: u64) {
        assert_eq!(calculate_funding_cost(months).unwrap(), expected);
    }

    #[rstest]
    #[case(0)]
    #[case(13)]
    fn test_funding_cost_out_of_range(#[case] months: u32) {
        assert_eq!(
            calculate_funding_cost(months),
            Err(FundingError::InvalidDuration(months))
        );
    }

    #[rstest]
    #[case("2025-03", 1)]
    #[case("2025-04", 2)]
    #[case("2026-02", 12)]
    #[case("2024-11", 1)]
    #[case("", 0)]
    fn test_months_from_now(#[case] target: &str, #[case] expected: u32) {
        let today = NaiveDate::from_ymd_opt(2025, 3, 17).unwrap();
        assert_eq!(calculate_months_from_now(target, today).unwrap(), expected);
    }

    #[rstest]
    #[case("2025")]
    #[case("2025-13")]
    #[case("march-2025")]
    #[case("9223372036854775807-01")]
    #[case("2147483647-12")]
    #[case("-2147483648-01")]
    fn test_months_from_now_rejects_malformed_targets(#[case] target: &str) {
        let today = NaiveDate::from_ymd_opt(2025, 3, 17).unwrap();
        assert_eq!(
            calculate_months_from_now(target, today),
            Err(FundingError::InvalidTargetMonth(target.to_owned()))
        );
    }

    #[rstest]
    #[case(6, "6 ADA")]
    #[case(768, "768 ADA")]
    #[case(1_536, "1,536 ADA")]
    #[case(1_234_567, "1,234,567 ADA")]
    fn test_format_ada_amount(#[case] amount: u64, #[case] expected: &str) {
        assert_eq!(format_ada_amount(amount), expected);
    }

    #[test]
    fn test_pricing_breakdown() {
        let breakdown = pricing_breakdown();
        assert_eq!(breakdown.len(), 12);
        assert_eq!(
            breakdown[0],
            FundingOption {
                months: 1,
                cost: 6,
                cost_formatted: "6 ADA".into(),
            }
        );
        assert_eq!(breakdown[11].cost_formatted, "12,288 ADA");
        for option in &breakdown {
            assert_eq!(calculate_funding_cost(option.months).unwrap(), option.cost);
        }
    }
}
