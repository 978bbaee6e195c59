use crate::domain::common::{is_set, lenient};
use serde::{Deserialize, Serialize};

/// Оплата перевозчику (строка листа Kitting), one per completed return.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TransporterPayment {
    #[serde(default, deserialize_with = "lenient::row_id")]
    pub row_id: i64,
    #[serde(default, deserialize_with = "lenient::string")]
    pub timestamp: String,
    #[serde(default, deserialize_with = "lenient::string")]
    pub payment_number: String,
    /// `returnNo` of the parent request
    #[serde(default, deserialize_with = "lenient::string")]
    pub unique_number: String,
    #[serde(default, deserialize_with = "lenient::string")]
    pub status: String,
    #[serde(default, deserialize_with = "lenient::string")]
    pub transporter_name: String,
    #[serde(default, deserialize_with = "lenient::string")]
    pub vehicle_number: String,
    #[serde(default, deserialize_with = "lenient::string")]
    pub from_location: String,
    #[serde(default, deserialize_with = "lenient::string")]
    pub to_location: String,
    #[serde(default, deserialize_with = "lenient::string")]
    pub material_load_details: String,
    #[serde(default, deserialize_with = "lenient::string")]
    pub bilty_number: String,
    #[serde(default, deserialize_with = "lenient::string")]
    pub rate_type: String,
    #[serde(default, deserialize_with = "lenient::string")]
    pub amount: String,
    #[serde(default, deserialize_with = "lenient::string")]
    pub bilty_image: String,
    #[serde(default, deserialize_with = "lenient::string")]
    pub planned: String,
    #[serde(default, deserialize_with = "lenient::string")]
    pub actual: String,
    #[serde(default, deserialize_with = "lenient::string")]
    pub delay: String,
    #[serde(default, deserialize_with = "lenient::string")]
    pub payment_form: String,
}

impl TransporterPayment {
    /// Terminal state: status reads "paid" in any case, or `actual` is stamped.
    pub fn is_paid(&self) -> bool {
        self.status.trim().eq_ignore_ascii_case("paid") || is_set(&self.actual)
    }

    /// Badge text for the status column
    pub fn status_label(&self) -> String {
        if self.is_paid() {
            "Paid".to_string()
        } else if is_set(&self.status) {
            self.status.clone()
        } else {
            "Pending".to_string()
        }
    }
}

/// Whether any payment already exists for the given return number
pub fn is_kitted(payments: &[TransporterPayment], return_no: &str) -> bool {
    payments.iter().any(|p| p.unique_number == return_no)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_paid_status_is_case_insensitive() {
        for status in ["paid", "Paid", "PAID", "  paid "] {
            let payment = TransporterPayment {
                status: status.into(),
                ..Default::default()
            };
            assert!(payment.is_paid(), "status {:?}", status);
            assert_eq!(payment.status_label(), "Paid");
        }
    }

    #[test]
    fn test_actual_stamp_means_paid() {
        let payment = TransporterPayment {
            status: "Active Kitting".into(),
            actual: "2024-06-01".into(),
            ..Default::default()
        };
        assert!(payment.is_paid());
    }

    #[test]
    fn test_open_payment_labels() {
        let active = TransporterPayment {
            status: "Active Kitting".into(),
            ..Default::default()
        };
        assert!(!active.is_paid());
        assert_eq!(active.status_label(), "Active Kitting");
        assert_eq!(TransporterPayment::default().status_label(), "Pending");
    }

    #[test]
    fn test_is_kitted_matches_unique_number() {
        let payments = vec![TransporterPayment {
            unique_number: "RET-1002".into(),
            ..Default::default()
        }];
        assert!(is_kitted(&payments, "RET-1002"));
        assert!(!is_kitted(&payments, "RET-1003"));
    }
}
