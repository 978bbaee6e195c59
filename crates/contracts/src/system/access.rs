//! Capability checks that decide what a user may see and do.

use crate::domain::a001_material_return::MaterialReturn;
use crate::domain::a002_transporter_payment::{is_kitted, TransporterPayment};
use crate::enums::{ViewId, WorkflowStep};
use crate::system::auth::UserSession;

/// `None` never grants access
pub fn has_capability(user: &UserSession, view: Option<ViewId>) -> bool {
    view.map(|v| user.has_capability(v)).unwrap_or(false)
}

pub fn can_act_on_step(user: &UserSession, step: WorkflowStep) -> bool {
    has_capability(user, step.view())
}

/// Permitted views in navigation order
pub fn visible_views(user: &UserSession) -> Vec<ViewId> {
    ViewId::all()
        .into_iter()
        .filter(|view| user.has_capability(*view))
        .collect()
}

/// Keeps `current` if permitted, otherwise falls back to the dashboard and
/// then to the first permitted view.
pub fn resolve_active_view(user: &UserSession, current: ViewId) -> Option<ViewId> {
    if user.has_capability(current) {
        return Some(current);
    }
    if user.has_capability(ViewId::Dashboard) {
        return Some(ViewId::Dashboard);
    }
    visible_views(user).into_iter().next()
}

/// "New Entry" button visibility
pub fn can_create_entry(user: &UserSession, active: ViewId) -> bool {
    user.has_capability(ViewId::Step1) && active != ViewId::Kitting
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RowAction {
    Kitted,
    ForwardToKitting,
    UpdateStep(WorkflowStep),
    Locked,
}

pub fn row_action(user: &UserSession, record: &MaterialReturn, payments: &[TransporterPayment]) -> RowAction {
    let step = record.current_step();
    if step.is_completed() {
        if is_kitted(payments, &record.return_no) {
            RowAction::Kitted
        } else if user.has_capability(ViewId::Kitting) {
            RowAction::ForwardToKitting
        } else {
            RowAction::Locked
        }
    } else if can_act_on_step(user, step) {
        RowAction::UpdateStep(step)
    } else {
        RowAction::Locked
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PaymentAction {
    Paid,
    ProcessPayment,
    Locked,
}

pub fn payment_action(user: &UserSession, payment: &TransporterPayment) -> PaymentAction {
    if payment.is_paid() {
        PaymentAction::Paid
    } else if user.has_capability(ViewId::Kitting) {
        PaymentAction::ProcessPayment
    } else {
        PaymentAction::Locked
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn user(views: &[ViewId]) -> UserSession {
        UserSession {
            id: "u1".into(),
            name: "User".into(),
            capabilities: views.iter().copied().collect(),
        }
    }

    fn completed(return_no: &str) -> MaterialReturn {
        MaterialReturn {
            return_no: return_no.into(),
            actual1: "a".into(),
            actual2: "a".into(),
            actual3: "a".into(),
            actual4: "a".into(),
            ..Default::default()
        }
    }

    #[test]
    fn test_step1_only_user() {
        let clerk = user(&[ViewId::Step1]);
        assert_eq!(visible_views(&clerk), vec![ViewId::Step1]);
        assert_eq!(resolve_active_view(&clerk, ViewId::Dashboard), Some(ViewId::Step1));
    }

    #[test]
    fn test_fallback_prefers_dashboard() {
        let manager = user(&[ViewId::Table, ViewId::Step3, ViewId::Dashboard]);
        assert_eq!(resolve_active_view(&manager, ViewId::Kitting), Some(ViewId::Dashboard));
        assert_eq!(resolve_active_view(&manager, ViewId::Step3), Some(ViewId::Step3));
        assert_eq!(
            visible_views(&manager),
            vec![ViewId::Dashboard, ViewId::Step3, ViewId::Table]
        );
    }

    #[test]
    fn test_fallback_without_dashboard_takes_first_in_view_order() {
        let dispatcher = user(&[ViewId::Table, ViewId::Kitting, ViewId::Step3]);
        assert_eq!(resolve_active_view(&dispatcher, ViewId::Dashboard), Some(ViewId::Step3));
        assert_eq!(resolve_active_view(&dispatcher, ViewId::Step1), Some(ViewId::Step3));
        assert_eq!(resolve_active_view(&dispatcher, ViewId::Kitting), Some(ViewId::Kitting));
    }

    #[test]
    fn test_no_permissions_resolves_to_none() {
        assert_eq!(resolve_active_view(&user(&[]), ViewId::Dashboard), None);
        assert!(!has_capability(&user(&[ViewId::Dashboard]), None));
    }

    #[test]
    fn test_completed_step_is_never_actionable() {
        let admin = user(&ViewId::all());
        assert!(!can_act_on_step(&admin, WorkflowStep::Completed));
        assert!(can_act_on_step(&admin, WorkflowStep::Step4));
    }

    #[test]
    fn test_row_actions() {
        let kitting = user(&[ViewId::Kitting]);
        let step2 = user(&[ViewId::Step2]);
        let pending = MaterialReturn {
            return_no: "RET-1".into(),
            actual1: "done".into(),
            ..Default::default()
        };
        let payments = vec![TransporterPayment {
            unique_number: "RET-2".into(),
            ..Default::default()
        }];

        assert_eq!(row_action(&step2, &pending, &payments), RowAction::UpdateStep(WorkflowStep::Step2));
        assert_eq!(row_action(&kitting, &pending, &payments), RowAction::Locked);
        assert_eq!(row_action(&kitting, &completed("RET-1"), &payments), RowAction::ForwardToKitting);
        assert_eq!(row_action(&kitting, &completed("RET-2"), &payments), RowAction::Kitted);
        assert_eq!(row_action(&step2, &completed("RET-2"), &payments), RowAction::Kitted);
        assert_eq!(row_action(&step2, &completed("RET-1"), &payments), RowAction::Locked);
    }

    #[test]
    fn test_payment_actions() {
        let kitting = user(&[ViewId::Kitting]);
        let paid = TransporterPayment {
            status: " PAID ".into(),
            ..Default::default()
        };
        let open = TransporterPayment::default();
        assert_eq!(payment_action(&kitting, &paid), PaymentAction::Paid);
        assert_eq!(payment_action(&user(&[]), &paid), PaymentAction::Paid);
        assert_eq!(payment_action(&kitting, &open), PaymentAction::ProcessPayment);
        assert_eq!(payment_action(&user(&[ViewId::Table]), &open), PaymentAction::Locked);
    }

    #[test]
    fn test_new_entry_visibility() {
        let clerk = user(&[ViewId::Step1, ViewId::Kitting]);
        assert!(can_create_entry(&clerk, ViewId::Step1));
        assert!(can_create_entry(&clerk, ViewId::Table));
        assert!(!can_create_entry(&clerk, ViewId::Kitting));
        assert!(!can_create_entry(&user(&[ViewId::Dashboard]), ViewId::Dashboard));
    }
}
