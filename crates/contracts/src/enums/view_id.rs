use serde::{Deserialize, Serialize};
use std::fmt;

use super::WorkflowStep;

/// Navigable views of the application.
///
/// Declaration order is the enumeration order used for navigation and for the
/// "first permitted view" fallback, so `Ord` follows it as well.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ViewId {
    Dashboard,
    Step1,
    Step2,
    Step3,
    Step4,
    Kitting,
    Table,
}

impl ViewId {
    /// Код вида (совпадает с ключом флага доступа на бэкенде)
    pub fn code(&self) -> &'static str {
        match self {
            ViewId::Dashboard => "dashboard",
            ViewId::Step1 => "step1",
            ViewId::Step2 => "step2",
            ViewId::Step3 => "step3",
            ViewId::Step4 => "step4",
            ViewId::Kitting => "kitting",
            ViewId::Table => "table",
        }
    }

    /// Page title shown in the header
    pub fn title(&self) -> &'static str {
        match self {
            ViewId::Dashboard => "Dashboard Overview",
            ViewId::Step1 => "Arrange Logistics",
            ViewId::Step2 => "Material Receiving",
            ViewId::Step3 => "Credit Note Issuance",
            ViewId::Step4 => "Send to Party",
            ViewId::Table => "Complete Records",
            ViewId::Kitting => "Transporter Payments",
        }
    }

    /// Label used in the sidebar menu
    pub fn menu_label(&self) -> &'static str {
        match self {
            ViewId::Dashboard => "Dashboard",
            ViewId::Step1 => "Arrange Logistics",
            ViewId::Step2 => "Received Returned",
            ViewId::Step3 => "Issue Credit Note",
            ViewId::Step4 => "Send to Party",
            ViewId::Kitting => "Transporter Payment",
            ViewId::Table => "Complete Records",
        }
    }

    pub fn icon_name(&self) -> &'static str {
        match self {
            ViewId::Dashboard => "layout-grid",
            ViewId::Step1 => "truck",
            ViewId::Step2 => "package",
            ViewId::Step3 => "file-text",
            ViewId::Step4 => "send",
            ViewId::Kitting => "credit-card",
            ViewId::Table => "table",
        }
    }

    pub fn all() -> Vec<ViewId> {
        vec![
            ViewId::Dashboard,
            ViewId::Step1,
            ViewId::Step2,
            ViewId::Step3,
            ViewId::Step4,
            ViewId::Kitting,
            ViewId::Table,
        ]
    }

    pub fn from_code(code: &str) -> Option<Self> {
        ViewId::all()
            .into_iter()
            .find(|view| view.code().eq_ignore_ascii_case(code.trim()))
    }

    /// Workflow step a step view is bound to
    pub fn step(&self) -> Option<WorkflowStep> {
        match self {
            ViewId::Step1 => Some(WorkflowStep::Step1),
            ViewId::Step2 => Some(WorkflowStep::Step2),
            ViewId::Step3 => Some(WorkflowStep::Step3),
            ViewId::Step4 => Some(WorkflowStep::Step4),
            _ => None,
        }
    }

    pub fn is_step_view(&self) -> bool {
        self.step().is_some()
    }
}

impl fmt::Display for ViewId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.code())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_codes_round_trip_through_from_code() {
        for view in ViewId::all() {
            assert_eq!(ViewId::from_code(view.code()), Some(view));
        }
        assert_eq!(ViewId::from_code(" STEP2 "), Some(ViewId::Step2));
        assert_eq!(ViewId::from_code("explorer"), None);
    }

    #[test]
    fn test_serde_uses_backend_keys() {
        let json = serde_json::to_string(&ViewId::Step3).unwrap();
        assert_eq!(json, "\"step3\"");
        let view: ViewId = serde_json::from_str("\"kitting\"").unwrap();
        assert_eq!(view, ViewId::Kitting);
    }

    #[test]
    fn test_only_step_views_map_to_steps() {
        assert_eq!(ViewId::Step4.step(), Some(WorkflowStep::Step4));
        assert!(ViewId::Dashboard.step().is_none());
        assert!(!ViewId::Kitting.is_step_view());
        assert!(!ViewId::Table.is_step_view());
    }
}
