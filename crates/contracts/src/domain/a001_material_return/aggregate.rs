use crate::domain::common::{is_set, lenient, parse_number_lossy};
use crate::enums::WorkflowStep;
use serde::{Deserialize, Serialize};

/// Запрос на возврат материала (строка листа FMS).
///
/// Mirrors the backend row one-to-one. Every business field is free text;
/// the `actualN` cells drive the derived workflow step.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MaterialReturn {
    #[serde(default, deserialize_with = "lenient::row_id")]
    pub row_id: i64,
    #[serde(default, deserialize_with = "lenient::string")]
    pub timestamp: String,
    #[serde(default, deserialize_with = "lenient::string")]
    pub return_no: String,

    // Step 0: new entry
    #[serde(default, deserialize_with = "lenient::string")]
    pub do_number: String,
    #[serde(default, deserialize_with = "lenient::string")]
    pub party_names: String,
    #[serde(default, deserialize_with = "lenient::string")]
    pub product_name: String,
    #[serde(default, deserialize_with = "lenient::string")]
    pub qty: String,
    #[serde(default, deserialize_with = "lenient::string")]
    pub transport_payment: String,
    #[serde(default, deserialize_with = "lenient::string")]
    pub reason_of_material_return: String,
    #[serde(default, deserialize_with = "lenient::string")]
    pub debit_note: String,

    // Step 1: arrange logistics
    #[serde(default, deserialize_with = "lenient::string")]
    pub planned1: String,
    #[serde(default, deserialize_with = "lenient::string")]
    pub actual1: String,
    #[serde(default, deserialize_with = "lenient::string")]
    pub delay1: String,
    #[serde(default, deserialize_with = "lenient::string")]
    pub transporter_name: String,
    #[serde(default, deserialize_with = "lenient::string")]
    pub bilty_no: String,
    #[serde(default, deserialize_with = "lenient::string")]
    pub type_of_rate: String,
    #[serde(default, deserialize_with = "lenient::string")]
    pub per_matric_ton_rate: String,
    #[serde(default, deserialize_with = "lenient::string")]
    pub fixed_amount: String,
    #[serde(default, deserialize_with = "lenient::string")]
    pub vehicle_no: String,
    #[serde(default, deserialize_with = "lenient::string")]
    pub received_date: String,

    // Step 2: material receiving
    #[serde(default, deserialize_with = "lenient::string")]
    pub planned2: String,
    #[serde(default, deserialize_with = "lenient::string")]
    pub actual2: String,
    #[serde(default, deserialize_with = "lenient::string")]
    pub delay2: String,
    #[serde(default, deserialize_with = "lenient::string")]
    pub qty_of_return_material: String,
    #[serde(default, deserialize_with = "lenient::string")]
    pub rate_of_material: String,
    #[serde(default, deserialize_with = "lenient::string")]
    pub condition_of_material: String,
    #[serde(default, deserialize_with = "lenient::string")]
    pub photo_of_return_material: String,
    #[serde(default, deserialize_with = "lenient::string")]
    pub party_debit_note_no: String,
    #[serde(default, deserialize_with = "lenient::string")]
    pub material_return_no: String,
    #[serde(default, deserialize_with = "lenient::string")]
    pub original_bill_image: String,

    // Step 3: credit note issuance
    #[serde(default, deserialize_with = "lenient::string")]
    pub planned3: String,
    #[serde(default, deserialize_with = "lenient::string")]
    pub actual3: String,
    #[serde(default, deserialize_with = "lenient::string")]
    pub delay3: String,
    #[serde(default, deserialize_with = "lenient::string")]
    pub bill_no: String,
    #[serde(default, deserialize_with = "lenient::string")]
    pub amount: String,
    #[serde(default, deserialize_with = "lenient::string")]
    pub credit_note_copy: String,
    #[serde(default, deserialize_with = "lenient::string")]
    pub credit_note_no: String,

    // Step 4: dispatch to party
    #[serde(default, deserialize_with = "lenient::string")]
    pub planned4: String,
    #[serde(default, deserialize_with = "lenient::string")]
    pub actual4: String,
    #[serde(default, deserialize_with = "lenient::string")]
    pub delay4: String,
    #[serde(default, deserialize_with = "lenient::string")]
    pub send_to_mail: String,
}

impl MaterialReturn {
    /// Current workflow stage.
    ///
    /// The later `actual` wins: a record with `actual2` set but `actual3`
    /// empty is on step 3 regardless of what `actual1` holds.
    pub fn current_step(&self) -> WorkflowStep {
        if is_set(&self.actual4) {
            WorkflowStep::Completed
        } else if is_set(&self.actual3) {
            WorkflowStep::Step4
        } else if is_set(&self.actual2) {
            WorkflowStep::Step3
        } else if is_set(&self.actual1) {
            WorkflowStep::Step2
        } else {
            WorkflowStep::Step1
        }
    }

    pub fn is_completed(&self) -> bool {
        is_set(&self.actual4)
    }

    /// `plannedN` cell for steps 1..=4
    pub fn planned(&self, step: u8) -> &str {
        match step {
            1 => &self.planned1,
            2 => &self.planned2,
            3 => &self.planned3,
            4 => &self.planned4,
            _ => "",
        }
    }

    /// `actualN` cell for steps 1..=4
    pub fn actual(&self, step: u8) -> &str {
        match step {
            1 => &self.actual1,
            2 => &self.actual2,
            3 => &self.actual3,
            4 => &self.actual4,
            _ => "",
        }
    }

    /// `delayN` cell for steps 1..=4
    pub fn delay(&self, step: u8) -> &str {
        match step {
            1 => &self.delay1,
            2 => &self.delay2,
            3 => &self.delay3,
            4 => &self.delay4,
            _ => "",
        }
    }

    /// The four delay cells as numbers; unparseable cells count as 0
    pub fn delays(&self) -> [f64; 4] {
        [
            parse_number_lossy(&self.delay1),
            parse_number_lossy(&self.delay2),
            parse_number_lossy(&self.delay3),
            parse_number_lossy(&self.delay4),
        ]
    }

    pub fn total_delay(&self) -> f64 {
        self.delays().iter().sum()
    }

    pub fn is_delayed(&self) -> bool {
        self.delays().iter().any(|d| *d > 0.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn with_actuals(a1: &str, a2: &str, a3: &str, a4: &str) -> MaterialReturn {
        MaterialReturn {
            actual1: a1.into(),
            actual2: a2.into(),
            actual3: a3.into(),
            actual4: a4.into(),
            ..Default::default()
        }
    }

    #[test]
    fn test_no_actuals_is_step_one() {
        assert_eq!(MaterialReturn::default().current_step(), WorkflowStep::Step1);
    }

    #[test]
    fn test_each_actual_advances_the_step() {
        assert_eq!(with_actuals("x", "", "", "").current_step(), WorkflowStep::Step2);
        assert_eq!(with_actuals("x", "x", "", "").current_step(), WorkflowStep::Step3);
        assert_eq!(with_actuals("x", "x", "x", "").current_step(), WorkflowStep::Step4);
        assert_eq!(with_actuals("x", "x", "x", "x").current_step(), WorkflowStep::Completed);
    }

    #[test]
    fn test_later_actual_takes_precedence_over_gaps() {
        assert_eq!(with_actuals("", "x", "", "").current_step(), WorkflowStep::Step3);
        assert_eq!(with_actuals("", "", "", "x").current_step(), WorkflowStep::Completed);
    }

    #[test]
    fn test_whitespace_actual_is_not_done() {
        assert_eq!(with_actuals("  ", "", "", "").current_step(), WorkflowStep::Step1);
    }

    #[test]
    fn test_delays_ignore_garbage() {
        let record = MaterialReturn {
            delay1: "2".into(),
            delay2: "abc".into(),
            delay3: "".into(),
            delay4: "1.5".into(),
            ..Default::default()
        };
        assert_eq!(record.delays(), [2.0, 0.0, 0.0, 1.5]);
        assert_eq!(record.total_delay(), 3.5);
        assert!(record.is_delayed());
        assert!(!MaterialReturn::default().is_delayed());
    }

    #[test]
    fn test_decodes_sheet_row_with_mixed_types() {
        let json = r#"{
            "rowId": "7",
            "returnNo": "RET-1002",
            "qty": 25,
            "actual1": "2024-05-01 10:00:00",
            "delay1": 1,
            "actual2": null,
            "unknownColumn": "ignored"
        }"#;
        let record: MaterialReturn = serde_json::from_str(json).unwrap();
        assert_eq!(record.row_id, 7);
        assert_eq!(record.qty, "25");
        assert_eq!(record.delay1, "1");
        assert_eq!(record.actual2, "");
        assert_eq!(record.current_step(), WorkflowStep::Step2);
    }

    #[test]
    fn test_serializes_with_backend_field_names() {
        let record = MaterialReturn {
            per_matric_ton_rate: "450".into(),
            ..Default::default()
        };
        let value = serde_json::to_value(&record).unwrap();
        assert_eq!(value["perMatricTonRate"], "450");
        assert!(value.get("rowId").is_some());
        assert!(value.get("qtyOfReturnMaterial").is_some());
    }
}
