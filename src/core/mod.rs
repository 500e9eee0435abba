pub mod greeting;
pub mod registry;
pub mod render;

pub use crate::domain::model::{GreetingRequest, GreetingResponse};
pub use crate::domain::ports::{Clock, PingProbe, SystemClock};
pub use crate::utils::error::Result;
