//! TRON full-node HTTP API abstraction layer.
//!
//! Defines the [`TronRpc`] trait and its HTTP implementation
//! ([`HttpNodeClient`]), together with the request and response shapes of
//! each wallet endpoint.

mod http_adapter;
pub mod request;
pub mod types;
mod validate;

pub use http_adapter::{ClientConfig, HttpNodeClient};
pub use request::TriggerSmartContract;
pub use types::{
    Account, Block, CallOutcome, ConstantContractResult, EnergyEstimate, Transaction,
    TransactionInfo,
};

use async_trait::async_trait;

use crate::error::CoreError;
use crate::types::Address;

/// The wallet endpoints this client speaks.
///
/// Every method is one stateless round trip. Failures the node reports with
/// a 200 response (missing header, false call result, empty transaction
/// info) come back as errors, never as zero-valued successes.
#[async_trait]
pub trait TronRpc: Send + Sync {
    /// Look up an account by address.
    async fn get_account(&self, address: &Address) -> Result<Account, CoreError>;

    /// Fetch the latest block.
    async fn get_now_block(&self) -> Result<Block, CoreError>;

    /// Fetch a block by height.
    async fn get_block_by_num(&self, num: u64) -> Result<Block, CoreError>;

    /// Run a contract call without committing it to chain state.
    async fn trigger_constant_contract(
        &self,
        call: &TriggerSmartContract,
    ) -> Result<ConstantContractResult, CoreError>;

    /// Estimate the energy a contract call would consume.
    async fn estimate_energy(
        &self,
        call: &TriggerSmartContract,
    ) -> Result<EnergyEstimate, CoreError>;

    /// Fetch the execution record of a transaction by its id.
    async fn get_transaction_info_by_id(&self, id: &str) -> Result<TransactionInfo, CoreError>;
}
