// Services layer for business logic
// Services own the catalog and executor and are shared by route state

pub mod workflow;

pub use workflow::WorkflowService;
