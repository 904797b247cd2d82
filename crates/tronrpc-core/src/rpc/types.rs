//! Response shapes returned by the wallet endpoints.
//!
//! The node omits zero-valued scalars, so counters and strings fall back to
//! their default. Nested objects whose absence signals a failure (block
//! header, transaction raw data, receipt) are `Option` so callers and the
//! validation layer can tell "missing" from "empty".

use serde::{Deserialize, Serialize};

use crate::types::Address;

// ==============================================================================
// Account
// ==============================================================================

/// Account state from `/getaccount`.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Account {
    #[serde(default)]
    pub address: String,
    /// TRX balance in sun.
    #[serde(default)]
    pub balance: i64,
    #[serde(default)]
    pub create_time: i64,
    /// Spelled this way on the wire.
    #[serde(default, rename = "latest_opration_time")]
    pub latest_operation_time: i64,
    #[serde(default)]
    pub net_usage: i64,
    #[serde(default)]
    pub free_net_usage: i64,
    #[serde(default)]
    pub latest_consume_time: i64,
    #[serde(default)]
    pub latest_consume_free_time: i64,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub account_resource: Option<AccountResource>,
    #[serde(default, rename = "frozenV2")]
    pub frozen_v2: Vec<FrozenV2>,
    #[serde(default, rename = "assetV2")]
    pub asset_v2: Vec<AssetBalance>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub owner_permission: Option<serde_json::Value>,
    #[serde(default)]
    pub active_permission: Vec<serde_json::Value>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct AccountResource {
    #[serde(default)]
    pub energy_usage: i64,
    #[serde(default)]
    pub latest_consume_time_for_energy: i64,
    #[serde(default)]
    pub energy_window_size: i64,
}

/// Stake 2.0 frozen balance. A missing `type` means bandwidth.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct FrozenV2 {
    #[serde(default, rename = "type", skip_serializing_if = "Option::is_none")]
    pub resource: Option<String>,
    #[serde(default)]
    pub amount: i64,
}

/// TRC-10 balance keyed by token id.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct AssetBalance {
    pub key: String,
    #[serde(default)]
    pub value: i64,
}

// ==============================================================================
// Blocks
// ==============================================================================

/// Block from `/getnowblock` or `/getblockbynum`.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Block {
    #[serde(default, rename = "blockID")]
    pub block_id: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub block_header: Option<BlockHeader>,
    #[serde(default)]
    pub transactions: Vec<Transaction>,
}

impl Block {
    /// Block height, if the header is present.
    pub fn number(&self) -> Option<u64> {
        self.block_header.as_ref().map(|h| h.raw_data.number)
    }

    /// Block timestamp in milliseconds, if the header is present.
    pub fn timestamp(&self) -> Option<i64> {
        self.block_header.as_ref().map(|h| h.raw_data.timestamp)
    }
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct BlockHeader {
    #[serde(default)]
    pub raw_data: BlockHeaderRaw,
    #[serde(default)]
    pub witness_signature: String,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct BlockHeaderRaw {
    #[serde(default)]
    pub number: u64,
    #[serde(default, rename = "txTrieRoot")]
    pub tx_trie_root: String,
    #[serde(default)]
    pub witness_address: String,
    #[serde(default, rename = "parentHash")]
    pub parent_hash: String,
    #[serde(default)]
    pub version: i32,
    #[serde(default)]
    pub timestamp: i64,
}

// ==============================================================================
// Transactions
// ==============================================================================

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Transaction {
    #[serde(default, rename = "txID")]
    pub tx_id: String,
    #[serde(default)]
    pub ret: Vec<TransactionRet>,
    #[serde(default)]
    pub signature: Vec<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub raw_data: Option<TransactionRaw>,
    #[serde(default)]
    pub raw_data_hex: String,
}

impl Transaction {
    /// Contract entries of the raw transaction, empty when raw data is absent.
    pub fn contracts(&self) -> &[ContractEntry] {
        self.raw_data
            .as_ref()
            .map(|raw| raw.contract.as_slice())
            .unwrap_or_default()
    }
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct TransactionRet {
    #[serde(default, rename = "contractRet")]
    pub contract_ret: String,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct TransactionRaw {
    #[serde(default)]
    pub contract: Vec<ContractEntry>,
    #[serde(default)]
    pub ref_block_bytes: String,
    #[serde(default)]
    pub ref_block_hash: String,
    #[serde(default)]
    pub expiration: i64,
    #[serde(default)]
    pub fee_limit: i64,
    #[serde(default)]
    pub timestamp: i64,
    #[serde(default)]
    pub data: String,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ContractEntry {
    /// Contract kind, e.g. `TriggerSmartContract` or `TransferContract`.
    #[serde(default, rename = "type")]
    pub kind: String,
    #[serde(default)]
    pub parameter: ContractParameter,
}

/// The `value` shape depends on the contract kind, so it stays loose.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ContractParameter {
    #[serde(default)]
    pub type_url: String,
    #[serde(default)]
    pub value: serde_json::Value,
}

// ==============================================================================
// Contract Calls
// ==============================================================================

/// Nested outcome marker embedded in contract-call responses.
///
/// A failed call still comes back with HTTP 200; only `result` tells the two
/// apart. The node omits `result` entirely when it is false.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct CallOutcome {
    #[serde(default)]
    pub result: bool,
    #[serde(default)]
    pub code: String,
    #[serde(default)]
    pub message: String,
}

impl CallOutcome {
    /// The node hex-encodes `message`. Returns the decoded text when the raw
    /// value is even-length hex of printable UTF-8, otherwise the raw value.
    /// Use `message` directly when the undecoded form is needed.
    pub fn decoded_message(&self) -> String {
        decode_hex_text(&self.message)
    }
}

/// Response of `/triggerconstantcontract`.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ConstantContractResult {
    #[serde(default)]
    pub result: CallOutcome,
    #[serde(default)]
    pub energy_used: i64,
    #[serde(default)]
    pub energy_penalty: i64,
    #[serde(default)]
    pub constant_result: Vec<String>,
    #[serde(default)]
    pub logs: Vec<EventLog>,
    #[serde(default)]
    pub internal_transactions: Vec<InternalTransaction>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub transaction: Option<Transaction>,
}

impl ConstantContractResult {
    /// Raw return data of the first result word, if any.
    pub fn first_result_bytes(&self) -> Option<Result<Vec<u8>, hex::FromHexError>> {
        self.constant_result.first().map(hex::decode)
    }
}

/// Response of `/estimateenergy`.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct EnergyEstimate {
    #[serde(default)]
    pub result: CallOutcome,
    #[serde(default)]
    pub energy_required: i64,
}

// ==============================================================================
// Transaction Info
// ==============================================================================

/// Execution record from `/gettransactioninfobyid`.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct TransactionInfo {
    #[serde(default)]
    pub id: String,
    #[serde(default)]
    pub fee: i64,
    #[serde(default, rename = "blockNumber")]
    pub block_number: u64,
    #[serde(default, rename = "blockTimeStamp")]
    pub block_timestamp: i64,
    #[serde(default, rename = "contractResult")]
    pub contract_result: Vec<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub contract_address: Option<Address>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub receipt: Option<ResourceReceipt>,
    #[serde(default)]
    pub log: Vec<EventLog>,
    /// `FAILED` for reverted executions, absent on success.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub result: Option<String>,
    #[serde(default, rename = "resMessage")]
    pub res_message: String,
    #[serde(default)]
    pub internal_transactions: Vec<InternalTransaction>,
}

impl TransactionInfo {
    pub fn is_failed(&self) -> bool {
        self.result.as_deref() == Some("FAILED")
    }

    /// `resMessage` decoded from hex, with the same rules as
    /// [`CallOutcome::decoded_message`].
    pub fn decoded_res_message(&self) -> String {
        decode_hex_text(&self.res_message)
    }
}

/// Resource usage and fees charged for a transaction.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ResourceReceipt {
    #[serde(default)]
    pub energy_usage: i64,
    #[serde(default)]
    pub energy_fee: i64,
    #[serde(default)]
    pub origin_energy_usage: i64,
    #[serde(default)]
    pub energy_usage_total: i64,
    #[serde(default)]
    pub net_usage: i64,
    #[serde(default)]
    pub net_fee: i64,
    #[serde(default)]
    pub energy_penalty_total: i64,
    #[serde(default)]
    pub result: String,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct EventLog {
    #[serde(default)]
    pub address: String,
    #[serde(default)]
    pub topics: Vec<String>,
    #[serde(default)]
    pub data: String,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct InternalTransaction {
    #[serde(default)]
    pub hash: String,
    #[serde(default)]
    pub caller_address: String,
    #[serde(default, rename = "transferTo_address")]
    pub transfer_to_address: String,
    #[serde(default, rename = "callValueInfo")]
    pub call_value_info: Vec<CallValueInfo>,
    #[serde(default)]
    pub note: String,
    #[serde(default)]
    pub rejected: bool,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct CallValueInfo {
    #[serde(default, rename = "callValue")]
    pub call_value: i64,
    #[serde(default, rename = "tokenId", skip_serializing_if = "Option::is_none")]
    pub token_id: Option<String>,
}

/// Decode node text fields, which arrive hex-encoded.
///
/// Only even-length hex that decodes to printable UTF-8 is rewritten;
/// anything else is returned as is. Plain text made only of hex digits
/// (e.g. `41`) cannot be told apart and comes back decoded (`A`).
fn decode_hex_text(raw: &str) -> String {
    if raw.is_empty() || raw.len() % 2 != 0 {
        return raw.to_owned();
    }
    hex::decode(raw)
        .ok()
        .and_then(|bytes| String::from_utf8(bytes).ok())
        .filter(|text| text.chars().all(|c| !c.is_control() || c == '\n' || c == '\t'))
        .unwrap_or_else(|| raw.to_owned())
}
