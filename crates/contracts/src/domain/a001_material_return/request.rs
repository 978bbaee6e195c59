//! Payloads the frontend submits for material return requests.

use crate::enums::WorkflowStep;
use crate::shared::api::OrderInfo;
use serde::{Deserialize, Serialize};

pub const TRANSPORT_PAYMENT_OPTIONS: [&str; 4] = ["To Pay", "Paid", "Ex factory", "For"];

pub const RATE_PER_MT: &str = "Per MT";
pub const RATE_FIXED: &str = "Fixed";

pub const MAIL_NOT_SENT: &str = "No";
pub const MAIL_SENT: &str = "Yes";

fn require(value: &str, label: &str) -> Result<(), String> {
    if value.trim().is_empty() {
        Err(format!("{} is required", label))
    } else {
        Ok(())
    }
}

/// New entry (step 0) submitted with `addInitialEntry`
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NewReturnDto {
    pub return_no: String,
    pub do_number: String,
    pub party_names: String,
    pub product_name: String,
    pub qty: String,
    pub transport_payment: String,
    pub reason_of_material_return: String,
    pub debit_note: String,
}

impl NewReturnDto {
    pub fn new(return_no: String) -> Self {
        Self {
            return_no,
            do_number: String::new(),
            party_names: String::new(),
            product_name: String::new(),
            qty: String::new(),
            transport_payment: TRANSPORT_PAYMENT_OPTIONS[0].to_string(),
            reason_of_material_return: String::new(),
            debit_note: String::new(),
        }
    }

    /// Selects a DO number and fills party and product from the order list.
    /// An unknown DO number clears both.
    pub fn select_order(&mut self, do_number: &str, orders: &[OrderInfo]) {
        self.do_number = do_number.to_string();
        match orders.iter().find(|o| o.do_number == do_number) {
            Some(order) => {
                self.party_names = order.party_names.clone();
                self.product_name = order.product_name.clone();
            }
            None => {
                self.party_names.clear();
                self.product_name.clear();
            }
        }
    }

    pub fn validate(&self) -> Result<(), String> {
        if self.do_number.trim().is_empty() || self.debit_note.trim().is_empty() {
            return Err(
                "Please fill in all required fields including the Debit Note Image".to_string(),
            );
        }
        require(&self.return_no, "Return number")
    }
}

/// Step 1: arrange logistics
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LogisticsUpdate {
    pub transporter_name: String,
    pub vehicle_no: String,
    pub bilty_no: String,
    pub received_date: String,
    pub type_of_rate: String,
    pub per_matric_ton_rate: String,
    pub fixed_amount: String,
}

impl Default for LogisticsUpdate {
    fn default() -> Self {
        Self {
            transporter_name: String::new(),
            vehicle_no: String::new(),
            bilty_no: String::new(),
            received_date: String::new(),
            type_of_rate: RATE_PER_MT.to_string(),
            per_matric_ton_rate: String::new(),
            fixed_amount: String::new(),
        }
    }
}

impl LogisticsUpdate {
    pub fn is_per_mt(&self) -> bool {
        self.type_of_rate == RATE_PER_MT
    }

    pub fn validate(&self) -> Result<(), String> {
        if self.transporter_name.trim().is_empty() {
            return Err("Please select a transporter".to_string());
        }
        require(&self.vehicle_no, "Vehicle number")?;
        require(&self.bilty_no, "Bilty number")?;
        require(&self.received_date, "Received date")?;
        if self.is_per_mt() {
            require(&self.per_matric_ton_rate, "Per metric ton rate")
        } else {
            require(&self.fixed_amount, "Fixed amount")
        }
    }
}

/// Step 2: material receiving
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ReceivingUpdate {
    pub qty_of_return_material: String,
    pub rate_of_material: String,
    pub condition_of_material: String,
    pub photo_of_return_material: String,
    pub party_debit_note_no: String,
    pub material_return_no: String,
    pub original_bill_image: String,
}

impl ReceivingUpdate {
    pub fn validate(&self) -> Result<(), String> {
        require(&self.qty_of_return_material, "Returned quantity")?;
        require(&self.rate_of_material, "Material rate")?;
        require(&self.party_debit_note_no, "Party debit note number")?;
        require(&self.material_return_no, "Material return number")
    }
}

/// Step 3: credit note issuance
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CreditNoteUpdate {
    pub bill_no: String,
    pub amount: String,
    pub credit_note_no: String,
    pub credit_note_copy: String,
}

impl CreditNoteUpdate {
    pub fn validate(&self) -> Result<(), String> {
        require(&self.bill_no, "Bill number")?;
        require(&self.amount, "Amount")?;
        require(&self.credit_note_no, "Credit note number")
    }
}

/// Step 4: dispatch to party
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DispatchUpdate {
    pub send_to_mail: String,
}

impl Default for DispatchUpdate {
    fn default() -> Self {
        Self {
            send_to_mail: MAIL_NOT_SENT.to_string(),
        }
    }
}

/// Fields submitted with `updateWorkflowStep`; the backend stamps `actualN`.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(untagged)]
pub enum StepUpdate {
    Logistics(LogisticsUpdate),
    Receiving(ReceivingUpdate),
    CreditNote(CreditNoteUpdate),
    Dispatch(DispatchUpdate),
}

impl StepUpdate {
    /// Empty form for the given stage; completed requests take no update
    pub fn for_step(step: WorkflowStep) -> Option<Self> {
        match step {
            WorkflowStep::Step1 => Some(StepUpdate::Logistics(LogisticsUpdate::default())),
            WorkflowStep::Step2 => Some(StepUpdate::Receiving(ReceivingUpdate::default())),
            WorkflowStep::Step3 => Some(StepUpdate::CreditNote(CreditNoteUpdate::default())),
            WorkflowStep::Step4 => Some(StepUpdate::Dispatch(DispatchUpdate::default())),
            WorkflowStep::Completed => None,
        }
    }

    pub fn step(&self) -> WorkflowStep {
        match self {
            StepUpdate::Logistics(_) => WorkflowStep::Step1,
            StepUpdate::Receiving(_) => WorkflowStep::Step2,
            StepUpdate::CreditNote(_) => WorkflowStep::Step3,
            StepUpdate::Dispatch(_) => WorkflowStep::Step4,
        }
    }

    pub fn validate(&self) -> Result<(), String> {
        match self {
            StepUpdate::Logistics(u) => u.validate(),
            StepUpdate::Receiving(u) => u.validate(),
            StepUpdate::CreditNote(u) => u.validate(),
            StepUpdate::Dispatch(_) => Ok(()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn orders() -> Vec<OrderInfo> {
        vec![OrderInfo {
            do_number: "DO-11".into(),
            party_names: "Shree Traders".into(),
            product_name: "Cement 50kg".into(),
        }]
    }

    #[test]
    fn test_selecting_order_fills_party_and_product() {
        let mut dto = NewReturnDto::new("RET-1001".into());
        dto.select_order("DO-11", &orders());
        assert_eq!(dto.party_names, "Shree Traders");
        assert_eq!(dto.product_name, "Cement 50kg");

        dto.select_order("DO-99", &orders());
        assert_eq!(dto.do_number, "DO-99");
        assert!(dto.party_names.is_empty());
        assert!(dto.product_name.is_empty());
    }

    #[test]
    fn test_new_entry_requires_do_and_debit_note() {
        let mut dto = NewReturnDto::new("RET-1001".into());
        dto.do_number = "DO-11".into();
        assert!(dto.validate().is_err());
        dto.debit_note = "https://drive/file".into();
        assert!(dto.validate().is_ok());
        assert_eq!(dto.transport_payment, "To Pay");
    }

    #[test]
    fn test_logistics_rate_requirement_follows_rate_type() {
        let mut update = LogisticsUpdate {
            transporter_name: "Fast Movers".into(),
            vehicle_no: "MH12AB1234".into(),
            bilty_no: "B-1".into(),
            received_date: "2024-05-02".into(),
            ..Default::default()
        };
        assert!(update.validate().is_err());
        update.per_matric_ton_rate = "450".into();
        assert!(update.validate().is_ok());

        update.type_of_rate = RATE_FIXED.into();
        assert!(update.validate().is_err());
        update.fixed_amount = "9000".into();
        assert!(update.validate().is_ok());
    }

    #[test]
    fn test_missing_transporter_message() {
        let err = LogisticsUpdate::default().validate().unwrap_err();
        assert_eq!(err, "Please select a transporter");
    }

    #[test]
    fn test_step_update_matches_step() {
        for step in WorkflowStep::all() {
            match StepUpdate::for_step(step) {
                Some(update) => assert_eq!(update.step(), step),
                None => assert!(step.is_completed()),
            }
        }
    }

    #[test]
    fn test_step_update_serializes_flat() {
        let update = StepUpdate::Dispatch(DispatchUpdate::default());
        let value = serde_json::to_value(&update).unwrap();
        assert_eq!(value, serde_json::json!({"sendToMail": "No"}));
    }
}
