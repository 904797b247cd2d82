//! Per-endpoint checks for success-shaped failures.
//!
//! The node answers several failure cases with HTTP 200 and a body that
//! decodes cleanly: an empty block for an unknown height, `{}` for an
//! unknown transaction or account, and `result.result = false` for a
//! reverted contract call. Each endpoint runs its check after decoding.

use crate::error::NodeError;
use crate::types::Address;

use super::types::{Account, Block, CallOutcome, TransactionInfo};

pub(crate) fn require_block_header(block: Block) -> Result<Block, NodeError> {
    if block.block_header.is_none() {
        return Err(NodeError::MissingBlockHeader);
    }
    Ok(block)
}

pub(crate) fn require_call_success(outcome: &CallOutcome) -> Result<(), NodeError> {
    if outcome.result {
        return Ok(());
    }
    Err(NodeError::ContractCall {
        code: outcome.code.clone(),
        message: outcome.decoded_message(),
    })
}

pub(crate) fn require_transaction_found(
    id: &str,
    info: TransactionInfo,
) -> Result<TransactionInfo, NodeError> {
    if info.id.is_empty() {
        return Err(NodeError::TransactionNotFound { id: id.to_owned() });
    }
    Ok(info)
}

pub(crate) fn require_account_found(
    address: &Address,
    account: Account,
) -> Result<Account, NodeError> {
    if account.address.is_empty() {
        return Err(NodeError::AccountNotFound {
            address: address.to_string(),
        });
    }
    Ok(account)
}
