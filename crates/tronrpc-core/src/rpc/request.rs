//! Request bodies for the wallet endpoints.
//!
//! Field names match the JSON keys the node expects. Every request sets
//! `visible = true` so addresses travel in base58check form.

use serde::Serialize;

use crate::types::Address;

/// Body of `/getaccount`.
#[derive(Debug, Clone, Serialize)]
pub struct AccountRequest<'a> {
    pub address: &'a Address,
    pub visible: bool,
}

/// Body of `/getblockbynum`.
#[derive(Debug, Clone, Serialize)]
pub struct BlockByNumRequest {
    pub num: u64,
}

/// Body of `/gettransactioninfobyid`.
#[derive(Debug, Clone, Serialize)]
pub struct TransactionInfoRequest<'a> {
    pub value: &'a str,
}

/// Body shared by `/triggerconstantcontract` and `/estimateenergy`.
///
/// `parameter` is the hex form of ABI-encoded argument bytes produced by the
/// caller's encoder; the selector is the human-readable signature, e.g.
/// `balanceOf(address)`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct TriggerSmartContract {
    pub owner_address: Address,
    pub contract_address: Address,
    pub function_selector: String,
    pub parameter: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub call_value: Option<i64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub call_token_value: Option<i64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub token_id: Option<i64>,
    pub visible: bool,
}

impl TriggerSmartContract {
    pub fn new(
        owner_address: Address,
        contract_address: Address,
        function_selector: impl Into<String>,
        parameter: impl AsRef<[u8]>,
    ) -> Self {
        Self {
            owner_address,
            contract_address,
            function_selector: function_selector.into(),
            parameter: hex::encode(parameter),
            call_value: None,
            call_token_value: None,
            token_id: None,
            visible: true,
        }
    }

    /// Attach a TRX amount (in sun) to the call.
    pub fn with_call_value(mut self, call_value: i64) -> Self {
        self.call_value = Some(call_value);
        self
    }

    /// Attach a TRC-10 token transfer to the call.
    pub fn with_token(mut self, token_id: i64, amount: i64) -> Self {
        self.token_id = Some(token_id);
        self.call_token_value = Some(amount);
        self
    }
}

#[cfg(test)]
mod tests {
    use serde_json::json;

    use super::*;

    #[test]
    fn trigger_omits_unset_optionals_and_hex_encodes_parameter() {
        let req = TriggerSmartContract::new(
            Address::new("TOwner"),
            Address::new("TContract"),
            "balanceOf(address)",
            [0x00, 0xab, 0xff],
        );
        let value = serde_json::to_value(&req).expect("must serialize");
        assert_eq!(
            value,
            json!({
                "owner_address": "TOwner",
                "contract_address": "TContract",
                "function_selector": "balanceOf(address)",
                "parameter": "00abff",
                "visible": true,
            })
        );
    }

    #[test]
    fn trigger_with_value_and_token_includes_all_keys() {
        let req = TriggerSmartContract::new(
            Address::new("TOwner"),
            Address::new("TContract"),
            "deposit()",
            [0u8; 0],
        )
        .with_call_value(1_000_000)
        .with_token(1002000, 5);
        let value = serde_json::to_value(&req).expect("must serialize");
        assert_eq!(value["call_value"], 1_000_000);
        assert_eq!(value["token_id"], 1002000);
        assert_eq!(value["call_token_value"], 5);
        assert_eq!(value["parameter"], "");
    }

    #[test]
    fn account_request_uses_visible_addresses() {
        let address = Address::new("TAddr");
        let value = serde_json::to_value(AccountRequest {
            address: &address,
            visible: true,
        })
        .expect("must serialize");
        assert_eq!(value, json!({ "address": "TAddr", "visible": true }));
    }
}
