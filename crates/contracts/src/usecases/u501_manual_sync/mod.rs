pub mod request;

pub use request::{ManualSyncRequest, SyncDataType, SyncMethod};
