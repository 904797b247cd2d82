pub mod error;
pub mod rpc;
pub mod types;

pub use error::{CoreError, NodeError};
pub use rpc::{ClientConfig, HttpNodeClient, TronRpc};
pub use types::Address;
