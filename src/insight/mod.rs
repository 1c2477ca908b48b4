pub mod backend;
pub mod client;
pub mod mock;
pub mod models;

pub use backend::{BackendError, HttpBackend};
pub use client::{InsightClient, SimulatedLatency};
pub use models::{BusinessData, BusinessRequest, HeadlineResponse, InvalidRequest};
