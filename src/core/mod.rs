pub mod etl;
pub mod pipeline;

pub use crate::domain::model::{GeneratedDataset, Listing};
pub use crate::domain::ports::{Clock, ConfigProvider, Pipeline, Storage, SystemClock};
pub use crate::utils::error::Result;
