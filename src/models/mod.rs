pub mod chat;
pub mod request;
pub mod tier;

pub use chat::{ChatRole, ChatTurn};
pub use request::{AnalysisRequest, Gender, ModelPayload};
pub use tier::{DispatchResult, ModelTierConfig};
