//! Column catalog of the request tables.

use super::MaterialReturn;
use crate::enums::ViewId;

/// How a cell is rendered
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CellKind {
    Text,
    /// Identifier shown emphasised
    Key,
    Amount,
    /// Document URL; the text is shown when the cell is empty. Values that
    /// are not http(s) URLs are shown as plain text.
    Link { empty: &'static str },
    Badge,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Column {
    pub key: &'static str,
    pub label: &'static str,
    pub kind: CellKind,
}

/// Whether a link cell value can be opened as a document
pub fn is_link_target(value: &str) -> bool {
    let value = value.trim().to_ascii_lowercase();
    value.starts_with("https://") || value.starts_with("http://")
}

const fn col(key: &'static str, label: &'static str, kind: CellKind) -> Column {
    Column { key, label, kind }
}

/// Every request column in explorer order
pub const RETURN_COLUMNS: &[Column] = &[
    col("timestamp", "Timestamp", CellKind::Text),
    col("returnNo", "Return No.", CellKind::Key),
    col("doNumber", "DO Number", CellKind::Text),
    col("partyNames", "Party Name", CellKind::Text),
    col("productName", "Product", CellKind::Text),
    col("qty", "Quantity", CellKind::Text),
    col("transportPayment", "Transport Payment", CellKind::Badge),
    col("reasonOfMaterialReturn", "Return Reason", CellKind::Text),
    col("debitNote", "Debit Note", CellKind::Link { empty: "No image" }),
    col("planned1", "Logistics Due", CellKind::Text),
    col("transporterName", "Transporter", CellKind::Text),
    col("biltyNo", "Bilty No.", CellKind::Text),
    col("typeOfRate", "Rate Type", CellKind::Text),
    col("perMatricTonRate", "Per MT Rate", CellKind::Text),
    col("fixedAmount", "Fixed Amount", CellKind::Text),
    col("vehicleNo", "Vehicle No.", CellKind::Text),
    col("receivedDate", "Received Date", CellKind::Text),
    col("planned2", "Receiving Due", CellKind::Text),
    col("qtyOfReturnMaterial", "Return Qty", CellKind::Text),
    col("rateOfMaterial", "Material Rate", CellKind::Text),
    col("conditionOfMaterial", "Condition", CellKind::Text),
    col("photoOfReturnMaterial", "Return Photo", CellKind::Link { empty: "No photo" }),
    col("partyDebitNoteNo", "Party Debit No.", CellKind::Text),
    col("materialReturnNo", "Material Return No.", CellKind::Text),
    col("originalBillImage", "Bill Image", CellKind::Link { empty: "No image" }),
    col("planned3", "Credit Note Due", CellKind::Text),
    col("billNo", "Bill No.", CellKind::Text),
    col("amount", "Amount", CellKind::Amount),
    col("creditNoteCopy", "Credit Note", CellKind::Link { empty: "No note" }),
    col("creditNoteNo", "Credit Note No.", CellKind::Text),
    col("planned4", "Dispatch Due", CellKind::Text),
    col("sendToMail", "Mail Status", CellKind::Badge),
];

const STEP1_KEYS: &[&str] = &[
    "returnNo",
    "doNumber",
    "partyNames",
    "productName",
    "qty",
    "transportPayment",
    "reasonOfMaterialReturn",
    "debitNote",
    "planned1",
];

const STEP2_KEYS: &[&str] = &[
    "returnNo",
    "doNumber",
    "partyNames",
    "productName",
    "qty",
    "transportPayment",
    "reasonOfMaterialReturn",
    "debitNote",
    "transporterName",
    "biltyNo",
    "typeOfRate",
    "perMatricTonRate",
    "fixedAmount",
    "vehicleNo",
    "receivedDate",
    "planned2",
];

const STEP3_KEYS: &[&str] = &[
    "returnNo",
    "doNumber",
    "partyNames",
    "productName",
    "qty",
    "transportPayment",
    "reasonOfMaterialReturn",
    "debitNote",
    "transporterName",
    "biltyNo",
    "typeOfRate",
    "perMatricTonRate",
    "fixedAmount",
    "vehicleNo",
    "receivedDate",
    "qtyOfReturnMaterial",
    "conditionOfMaterial",
    "photoOfReturnMaterial",
    "partyDebitNoteNo",
    "materialReturnNo",
    "originalBillImage",
    "planned3",
];

const STEP4_KEYS: &[&str] = &[
    "timestamp",
    "returnNo",
    "doNumber",
    "partyNames",
    "productName",
    "qty",
    "transportPayment",
    "reasonOfMaterialReturn",
    "debitNote",
    "transporterName",
    "biltyNo",
    "typeOfRate",
    "receivedDate",
    "qtyOfReturnMaterial",
    "rateOfMaterial",
    "photoOfReturnMaterial",
    "partyDebitNoteNo",
    "materialReturnNo",
    "billNo",
    "amount",
    "creditNoteCopy",
    "creditNoteNo",
    "planned4",
];

/// Columns shown by a request view, in catalog order.
///
/// The explorer gets the full catalog; views that do not list requests get
/// nothing.
pub fn columns_for(view: ViewId) -> Vec<Column> {
    let keys = match view {
        ViewId::Table => return RETURN_COLUMNS.to_vec(),
        ViewId::Step1 => STEP1_KEYS,
        ViewId::Step2 => STEP2_KEYS,
        ViewId::Step3 => STEP3_KEYS,
        ViewId::Step4 => STEP4_KEYS,
        ViewId::Dashboard | ViewId::Kitting => return Vec::new(),
    };
    RETURN_COLUMNS
        .iter()
        .filter(|c| keys.contains(&c.key))
        .copied()
        .collect()
}

/// Raw cell text of a record for a catalog key
pub fn cell_value<'a>(record: &'a MaterialReturn, key: &str) -> &'a str {
    match key {
        "timestamp" => &record.timestamp,
        "returnNo" => &record.return_no,
        "doNumber" => &record.do_number,
        "partyNames" => &record.party_names,
        "productName" => &record.product_name,
        "qty" => &record.qty,
        "transportPayment" => &record.transport_payment,
        "reasonOfMaterialReturn" => &record.reason_of_material_return,
        "debitNote" => &record.debit_note,
        "planned1" => &record.planned1,
        "transporterName" => &record.transporter_name,
        "biltyNo" => &record.bilty_no,
        "typeOfRate" => &record.type_of_rate,
        "perMatricTonRate" => &record.per_matric_ton_rate,
        "fixedAmount" => &record.fixed_amount,
        "vehicleNo" => &record.vehicle_no,
        "receivedDate" => &record.received_date,
        "planned2" => &record.planned2,
        "qtyOfReturnMaterial" => &record.qty_of_return_material,
        "rateOfMaterial" => &record.rate_of_material,
        "conditionOfMaterial" => &record.condition_of_material,
        "photoOfReturnMaterial" => &record.photo_of_return_material,
        "partyDebitNoteNo" => &record.party_debit_note_no,
        "materialReturnNo" => &record.material_return_no,
        "originalBillImage" => &record.original_bill_image,
        "planned3" => &record.planned3,
        "billNo" => &record.bill_no,
        "amount" => &record.amount,
        "creditNoteCopy" => &record.credit_note_copy,
        "creditNoteNo" => &record.credit_note_no,
        "planned4" => &record.planned4,
        "sendToMail" => &record.send_to_mail,
        _ => "",
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn keys(view: ViewId) -> Vec<&'static str> {
        columns_for(view).iter().map(|c| c.key).collect()
    }

    #[test]
    fn test_step1_columns() {
        assert_eq!(keys(ViewId::Step1), STEP1_KEYS.to_vec());
    }

    #[test]
    fn test_every_step_key_is_in_catalog() {
        for list in [STEP1_KEYS, STEP2_KEYS, STEP3_KEYS, STEP4_KEYS] {
            for key in list {
                assert!(
                    RETURN_COLUMNS.iter().any(|c| c.key == *key),
                    "missing column {}",
                    key
                );
            }
        }
        assert_eq!(keys(ViewId::Step4).len(), STEP4_KEYS.len());
    }

    #[test]
    fn test_step2_drops_planned1() {
        let step2 = keys(ViewId::Step2);
        assert!(!step2.contains(&"planned1"));
        assert!(step2.contains(&"planned2"));
        assert!(step2.contains(&"vehicleNo"));
    }

    #[test]
    fn test_explorer_and_non_request_views() {
        assert_eq!(columns_for(ViewId::Table).len(), RETURN_COLUMNS.len());
        assert!(columns_for(ViewId::Dashboard).is_empty());
        assert!(columns_for(ViewId::Kitting).is_empty());
    }

    #[test]
    fn test_every_catalog_key_reads_a_field() {
        let record = MaterialReturn {
            timestamp: "t".into(),
            return_no: "t".into(),
            do_number: "t".into(),
            party_names: "t".into(),
            product_name: "t".into(),
            qty: "t".into(),
            transport_payment: "t".into(),
            reason_of_material_return: "t".into(),
            debit_note: "t".into(),
            planned1: "t".into(),
            transporter_name: "t".into(),
            bilty_no: "t".into(),
            type_of_rate: "t".into(),
            per_matric_ton_rate: "t".into(),
            fixed_amount: "t".into(),
            vehicle_no: "t".into(),
            received_date: "t".into(),
            planned2: "t".into(),
            qty_of_return_material: "t".into(),
            rate_of_material: "t".into(),
            condition_of_material: "t".into(),
            photo_of_return_material: "t".into(),
            party_debit_note_no: "t".into(),
            material_return_no: "t".into(),
            original_bill_image: "t".into(),
            planned3: "t".into(),
            bill_no: "t".into(),
            amount: "t".into(),
            credit_note_copy: "t".into(),
            credit_note_no: "t".into(),
            planned4: "t".into(),
            send_to_mail: "t".into(),
            ..Default::default()
        };
        for column in RETURN_COLUMNS {
            assert_eq!(cell_value(&record, column.key), "t", "{}", column.key);
        }
        assert_eq!(cell_value(&record, "nope"), "");
    }

    #[test]
    fn test_link_targets_are_http_urls() {
        assert!(is_link_target("https://drive.google.com/file/d/abc"));
        assert!(is_link_target(" HTTP://example.com/bill.pdf"));
        assert!(!is_link_target("Marked as Done"));
        assert!(!is_link_target("drive/bill"));
        assert!(!is_link_target(""));
    }
}
