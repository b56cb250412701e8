//! Summary Aggregator
//!
//! Totals of collected and outstanding rent, recomputed from scratch.

use serde::Serialize;

use crate::domain::RentalRecord;

#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize)]
pub struct Summary {
    pub total_collected: f64,
    pub total_pending: f64,
    pub paid_count: usize,
    pub pending_count: usize,
}

impl Summary {
    /// Unparseable rents count as zero
    pub fn from_records(records: &[RentalRecord]) -> Self {
        records.iter().fold(Summary::default(), |mut acc, record| {
            let rent = record.rent_amount().unwrap_or(0.0);
            if record.is_paid() {
                acc.total_collected += rent;
                acc.paid_count += 1;
            } else {
                acc.total_pending += rent;
                acc.pending_count += 1;
            }
            acc
        })
    }
}

/// Whole amounts without decimals, everything else with up to two
pub fn format_amount(amount: f64) -> String {
    if amount.fract() == 0.0 {
        return format!("{:.0}", amount);
    }
    let fixed = format!("{:.2}", amount);
    fixed.trim_end_matches('0').trim_end_matches('.').to_string()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::RentStatus;

    fn record(rent: &str, status: RentStatus) -> RentalRecord {
        RentalRecord {
            rent_status: status,
            ..RentalRecord::new("C", "R", rent)
        }
    }

    #[test]
    fn test_totals_by_status() {
        let records = vec![
            record("1000", RentStatus::Paid),
            record("2000", RentStatus::Pending),
            record("1500", RentStatus::Paid),
        ];
        let summary = Summary::from_records(&records);
        assert_eq!(summary.total_collected, 2500.0);
        assert_eq!(summary.total_pending, 2000.0);
        assert_eq!(summary.paid_count, 2);
        assert_eq!(summary.pending_count, 1);
    }

    #[test]
    fn test_unparseable_rent_is_zero() {
        let records = vec![
            record("abc", RentStatus::Paid),
            record("", RentStatus::Pending),
            record("250.5", RentStatus::Pending),
        ];
        let summary = Summary::from_records(&records);
        assert_eq!(summary.total_collected, 0.0);
        assert_eq!(summary.total_pending, 250.5);
    }

    #[test]
    fn test_empty_store() {
        assert_eq!(Summary::from_records(&[]), Summary::default());
    }

    #[test]
    fn test_format_amount() {
        assert_eq!(format_amount(2500.0), "2500");
        assert_eq!(format_amount(250.5), "250.5");
        assert_eq!(format_amount(99.999), "100");
        assert_eq!(format_amount(0.25), "0.25");
    }
}
