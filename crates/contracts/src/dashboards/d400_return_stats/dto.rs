use crate::enums::WorkflowStep;
use serde::{Deserialize, Serialize};

/// Headline figures of the return dashboard
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ReturnStats {
    pub total: usize,
    /// Records without `actual4`
    pub pending: usize,
    pub completed: usize,
    /// Records with at least one positive delay cell
    pub delayed: usize,
    /// Percent, rounded to an integer
    pub completion_rate: f64,
    /// Days, rounded to one decimal
    pub avg_delay: f64,
    /// Percent, capped at 100
    pub efficiency: f64,
}

/// One bar of the step distribution chart
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct StepBucket {
    pub step: WorkflowStep,
    pub description: String,
    pub count: usize,
}

/// Entry of the recent activity feed
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ActivityItem {
    pub return_no: String,
    pub action: String,
    pub party: String,
    pub step: WorkflowStep,
    pub completed: bool,
}

/// Party ranking row
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PartyPerformance {
    pub name: String,
    pub returns: usize,
    pub completed: usize,
    /// Percent of the party's returns that are completed
    pub completion: f64,
    /// Average of the summed delay cells per return, one decimal
    pub avg_delay: f64,
    pub score: f64,
}
