//! Column catalog of the kitting table.

use super::TransporterPayment;
use crate::domain::a001_material_return::columns::{CellKind, Column};

/// Paid/pending badge computed from the record rather than read from a cell
pub const STATUS_KEY: &str = "status";

pub const PAYMENT_COLUMNS: &[Column] = &[
    Column { key: "timestamp", label: "Timestamp", kind: CellKind::Text },
    Column { key: "paymentNumber", label: "Payment Number", kind: CellKind::Key },
    Column { key: "uniqueNumber", label: "Return No.", kind: CellKind::Text },
    Column { key: STATUS_KEY, label: "Status", kind: CellKind::Badge },
    Column { key: "transporterName", label: "Transporter", kind: CellKind::Text },
    Column { key: "vehicleNumber", label: "Vehicle No.", kind: CellKind::Text },
    Column { key: "fromLocation", label: "From", kind: CellKind::Text },
    Column { key: "toLocation", label: "To", kind: CellKind::Text },
    Column { key: "materialLoadDetails", label: "Load Details", kind: CellKind::Text },
    Column { key: "biltyNumber", label: "Bilty No.", kind: CellKind::Text },
    Column { key: "rateType", label: "Rate Type", kind: CellKind::Text },
    Column { key: "amount", label: "Amount", kind: CellKind::Amount },
    Column { key: "biltyImage", label: "Bilty Image", kind: CellKind::Link { empty: "No image" } },
    Column { key: "paymentForm", label: "Payment Form", kind: CellKind::Link { empty: "No form" } },
];

/// Cell text for a catalog key; the status column yields the badge label
pub fn cell_value(payment: &TransporterPayment, key: &str) -> String {
    let raw = match key {
        STATUS_KEY => return payment.status_label(),
        "timestamp" => &payment.timestamp,
        "paymentNumber" => &payment.payment_number,
        "uniqueNumber" => &payment.unique_number,
        "transporterName" => &payment.transporter_name,
        "vehicleNumber" => &payment.vehicle_number,
        "fromLocation" => &payment.from_location,
        "toLocation" => &payment.to_location,
        "materialLoadDetails" => &payment.material_load_details,
        "biltyNumber" => &payment.bilty_number,
        "rateType" => &payment.rate_type,
        "amount" => &payment.amount,
        "biltyImage" => &payment.bilty_image,
        "paymentForm" => &payment.payment_form,
        _ => "",
    };
    raw.to_string()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::a001_material_return::columns::is_link_target;

    #[test]
    fn test_status_column_uses_badge_label() {
        let payment = TransporterPayment {
            status: "PAID".into(),
            ..Default::default()
        };
        assert_eq!(cell_value(&payment, STATUS_KEY), "Paid");
        assert_eq!(cell_value(&TransporterPayment::default(), STATUS_KEY), "Pending");
    }

    #[test]
    fn test_payment_form_is_a_link_column() {
        let column = PAYMENT_COLUMNS
            .iter()
            .find(|c| c.key == "paymentForm")
            .copied();
        assert_eq!(
            column.map(|c| c.kind),
            Some(CellKind::Link { empty: "No form" })
        );
    }

    #[test]
    fn test_marked_payment_form_is_not_opened_as_link() {
        let paid = TransporterPayment {
            payment_form: "Marked as Done".into(),
            ..Default::default()
        };
        let value = cell_value(&paid, "paymentForm");
        assert_eq!(value, "Marked as Done");
        assert!(!is_link_target(&value));
    }

    #[test]
    fn test_reads_fields_by_key() {
        let payment = TransporterPayment {
            payment_number: "PAY-2024-1001".into(),
            vehicle_number: "MH12AB1234".into(),
            ..Default::default()
        };
        assert_eq!(cell_value(&payment, "paymentNumber"), "PAY-2024-1001");
        assert_eq!(cell_value(&payment, "vehicleNumber"), "MH12AB1234");
        assert_eq!(cell_value(&payment, "unknown"), "");
    }
}
