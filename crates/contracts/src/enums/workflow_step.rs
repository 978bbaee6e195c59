use serde::{Deserialize, Serialize};

use super::ViewId;

/// Stage of a material return request, derived from its `actual` timestamps.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum WorkflowStep {
    Step1,
    Step2,
    Step3,
    Step4,
    Completed,
}

impl WorkflowStep {
    /// Stages in workflow order, completed last
    pub fn all() -> [WorkflowStep; 5] {
        [
            WorkflowStep::Step1,
            WorkflowStep::Step2,
            WorkflowStep::Step3,
            WorkflowStep::Step4,
            WorkflowStep::Completed,
        ]
    }

    /// Step number as the backend expects it in `updateWorkflowStep`
    pub fn number(&self) -> u8 {
        match self {
            WorkflowStep::Step1 => 1,
            WorkflowStep::Step2 => 2,
            WorkflowStep::Step3 => 3,
            WorkflowStep::Step4 => 4,
            WorkflowStep::Completed => 5,
        }
    }

    pub fn from_number(number: u8) -> Option<Self> {
        match number {
            1 => Some(WorkflowStep::Step1),
            2 => Some(WorkflowStep::Step2),
            3 => Some(WorkflowStep::Step3),
            4 => Some(WorkflowStep::Step4),
            5 => Some(WorkflowStep::Completed),
            _ => None,
        }
    }

    /// Short status badge shown in the workflow table
    pub fn label(&self) -> &'static str {
        match self {
            WorkflowStep::Step1 => "Step 1: Transporter",
            WorkflowStep::Step2 => "Step 2: Confirmation",
            WorkflowStep::Step3 => "Step 3: Billing",
            WorkflowStep::Step4 => "Step 4: Dispatch",
            WorkflowStep::Completed => "Finalized",
        }
    }

    /// Title of the update form for this step
    pub fn title(&self) -> &'static str {
        match self {
            WorkflowStep::Step1 => "Step 1: Arrange Logistics",
            WorkflowStep::Step2 => "Step 2: Material Receiving",
            WorkflowStep::Step3 => "Step 3: Credit Note Issuance",
            WorkflowStep::Step4 => "Step 4: Dispatch to Party",
            WorkflowStep::Completed => "Completed",
        }
    }

    pub fn description(&self) -> &'static str {
        match self {
            WorkflowStep::Step1 => "Logistics Arrangement",
            WorkflowStep::Step2 => "Material Receiving",
            WorkflowStep::Step3 => "Credit Note Issuance",
            WorkflowStep::Step4 => "Dispatch to Party",
            WorkflowStep::Completed => "Process Completed",
        }
    }

    /// Hint shown above the step form
    pub fn instructions(&self) -> &'static str {
        match self {
            WorkflowStep::Step1 => "Enter transporter details and vehicle information",
            WorkflowStep::Step2 => "Record returned material details and condition",
            WorkflowStep::Step3 => "Generate billing and credit note information",
            WorkflowStep::Step4 => "Finalize and dispatch credit notes to party",
            WorkflowStep::Completed => "",
        }
    }

    /// Wording used in the dashboard activity feed
    pub fn action_label(&self) -> &'static str {
        match self {
            WorkflowStep::Step1 => "Logistics Arranged",
            WorkflowStep::Step2 => "Material Received",
            WorkflowStep::Step3 => "Credit Note Issued",
            WorkflowStep::Step4 => "Dispatched to Party",
            WorkflowStep::Completed => "Process Completed",
        }
    }

    pub fn icon_name(&self) -> &'static str {
        match self {
            WorkflowStep::Step1 => "user",
            WorkflowStep::Step2 => "package",
            WorkflowStep::Step3 => "file-check",
            WorkflowStep::Step4 => "truck",
            WorkflowStep::Completed => "check-circle",
        }
    }

    /// CSS modifier for badges and chart bars
    pub fn css_modifier(&self) -> &'static str {
        match self {
            WorkflowStep::Step1 => "step1",
            WorkflowStep::Step2 => "step2",
            WorkflowStep::Step3 => "step3",
            WorkflowStep::Step4 => "step4",
            WorkflowStep::Completed => "completed",
        }
    }

    /// Step view that works this stage; completed requests have none
    pub fn view(&self) -> Option<ViewId> {
        match self {
            WorkflowStep::Step1 => Some(ViewId::Step1),
            WorkflowStep::Step2 => Some(ViewId::Step2),
            WorkflowStep::Step3 => Some(ViewId::Step3),
            WorkflowStep::Step4 => Some(ViewId::Step4),
            WorkflowStep::Completed => None,
        }
    }

    pub fn is_completed(&self) -> bool {
        matches!(self, WorkflowStep::Completed)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_numbers_match_backend_contract() {
        let numbers: Vec<u8> = WorkflowStep::all().iter().map(|s| s.number()).collect();
        assert_eq!(numbers, vec![1, 2, 3, 4, 5]);
        assert_eq!(WorkflowStep::from_number(3), Some(WorkflowStep::Step3));
        assert_eq!(WorkflowStep::from_number(0), None);
    }

    #[test]
    fn test_view_binding_is_symmetric() {
        for step in WorkflowStep::all() {
            match step.view() {
                Some(view) => assert_eq!(view.step(), Some(step)),
                None => assert!(step.is_completed()),
            }
        }
    }
}
