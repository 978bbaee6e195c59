use crate::domain::a001_material_return::MaterialReturn;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Status written when a completed return is forwarded to kitting
pub const ACTIVE_KITTING_STATUS: &str = "Active Kitting";
/// Status the form shows before submission
pub const PENDING_PAYMENT_STATUS: &str = "Pending Payment";

/// Kitting entry submitted with `addKittingEntry`
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NewPaymentDto {
    pub payment_number: String,
    pub unique_number: String,
    pub status: String,
    pub transporter_name: String,
    pub vehicle_number: String,
    pub from_location: String,
    pub to_location: String,
    pub material_load_details: String,
    pub bilty_number: String,
    pub rate_type: String,
    pub amount: String,
    pub bilty_image: String,
}

impl NewPaymentDto {
    /// Prefills the kitting form from a completed return
    pub fn from_return(record: &MaterialReturn, payment_number: String) -> Self {
        Self {
            payment_number,
            unique_number: record.return_no.clone(),
            status: PENDING_PAYMENT_STATUS.to_string(),
            transporter_name: record.transporter_name.clone(),
            vehicle_number: record.vehicle_no.clone(),
            from_location: record.party_names.clone(),
            to_location: String::new(),
            material_load_details: format!("{} - {}", record.product_name, record.qty),
            bilty_number: record.bilty_no.clone(),
            rate_type: record.type_of_rate.clone(),
            amount: clean_amount(&record.amount),
            bilty_image: record.original_bill_image.clone(),
        }
    }

    /// Payload as sent: status is always switched to active kitting
    pub fn for_submission(&self) -> Self {
        Self {
            status: ACTIVE_KITTING_STATUS.to_string(),
            ..self.clone()
        }
    }
}

/// Strips currency symbols and separators so the amount is a plain number
pub fn clean_amount(amount: &str) -> String {
    amount
        .chars()
        .filter(|c| c.is_ascii_digit() || *c == '.')
        .collect()
}

/// "Mark payment as done" payload for `updateKittingPayment`
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PaymentDoneDto {
    pub payment_form: String,
    pub payment_date: String,
    pub payment_status: String,
}

impl PaymentDoneDto {
    pub fn at(now: DateTime<Utc>) -> Self {
        Self {
            payment_form: "Marked as Done".to_string(),
            payment_date: now.to_rfc3339(),
            payment_status: "Paid".to_string(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    fn completed_return() -> MaterialReturn {
        MaterialReturn {
            return_no: "RET-1004".into(),
            party_names: "Shree Traders".into(),
            product_name: "Cement 50kg".into(),
            qty: "40".into(),
            transporter_name: "Fast Movers".into(),
            vehicle_no: "MH12AB1234".into(),
            bilty_no: "B-77".into(),
            type_of_rate: "Fixed".into(),
            amount: "₹ 12,500.50".into(),
            original_bill_image: "https://drive/bill".into(),
            actual4: "2024-05-09".into(),
            ..Default::default()
        }
    }

    #[test]
    fn test_prefill_from_return() {
        let dto = NewPaymentDto::from_return(&completed_return(), "PAY-2024-1001".into());
        assert_eq!(dto.unique_number, "RET-1004");
        assert_eq!(dto.from_location, "Shree Traders");
        assert_eq!(dto.material_load_details, "Cement 50kg - 40");
        assert_eq!(dto.vehicle_number, "MH12AB1234");
        assert_eq!(dto.amount, "12500.50");
        assert_eq!(dto.bilty_image, "https://drive/bill");
        assert_eq!(dto.status, PENDING_PAYMENT_STATUS);
    }

    #[test]
    fn test_submission_marks_active_kitting() {
        let dto = NewPaymentDto::from_return(&completed_return(), "PAY-2024-1001".into());
        let sent = dto.for_submission();
        assert_eq!(sent.status, ACTIVE_KITTING_STATUS);
        assert_eq!(sent.payment_number, dto.payment_number);
    }

    #[test]
    fn test_payment_done_payload() {
        let now = Utc.with_ymd_and_hms(2024, 6, 1, 9, 30, 0).unwrap();
        let value = serde_json::to_value(PaymentDoneDto::at(now)).unwrap();
        assert_eq!(value["paymentStatus"], "Paid");
        assert_eq!(value["paymentForm"], "Marked as Done");
        assert_eq!(value["paymentDate"], "2024-06-01T09:30:00+00:00");
    }
}
