//! Application services for operation lifecycle orchestration.

mod lifecycle;

pub use lifecycle::{
    DeployOperationRequest, OperationLifecycleError, OperationLifecycleResult,
    OperationLifecycleService,
};
