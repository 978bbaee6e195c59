pub mod view_id;
pub mod workflow_step;

pub use view_id::ViewId;
pub use workflow_step::WorkflowStep;
