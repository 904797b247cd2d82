use eyre::{eyre, WrapErr};
use serde_json::Value;

use tronrpc_core::rpc::TriggerSmartContract;
use tronrpc_core::{Address, TronRpc};

use crate::cli::{Command, ContractCallArgs};

/// Run one subcommand against the node and return its result as JSON.
pub async fn run(rpc: &dyn TronRpc, command: &Command) -> eyre::Result<Value> {
    let value = match command {
        Command::Account { address } => {
            let address: Address = address.parse()?;
            serde_json::to_value(rpc.get_account(&address).await?)?
        }
        Command::NowBlock => serde_json::to_value(rpc.get_now_block().await?)?,
        Command::Block { num } => serde_json::to_value(rpc.get_block_by_num(*num).await?)?,
        Command::Trigger(args) => {
            let call = build_call(args)?;
            serde_json::to_value(rpc.trigger_constant_contract(&call).await?)?
        }
        Command::EstimateEnergy(args) => {
            let call = build_call(args)?;
            serde_json::to_value(rpc.estimate_energy(&call).await?)?
        }
        Command::TxInfo { txid } => {
            let txid = txid.trim_start_matches("0x");
            serde_json::to_value(rpc.get_transaction_info_by_id(txid).await?)?
        }
    };
    Ok(value)
}

fn build_call(args: &ContractCallArgs) -> eyre::Result<TriggerSmartContract> {
    let parameter = args.parameter.trim_start_matches("0x");
    let parameter = hex::decode(parameter)
        .wrap_err_with(|| format!("--parameter is not valid hex: `{}`", args.parameter))?;
    if args.selector.trim().is_empty() {
        return Err(eyre!("function selector must not be empty"));
    }

    let mut call = TriggerSmartContract::new(
        args.owner.parse()?,
        args.contract.parse()?,
        args.selector.trim(),
        parameter,
    );
    if let Some(call_value) = args.call_value {
        call = call.with_call_value(call_value);
    }
    if let (Some(token_id), Some(amount)) = (args.token_id, args.call_token_value) {
        call = call.with_token(token_id, amount);
    }
    Ok(call)
}

#[cfg(test)]
mod tests {
    use std::sync::Mutex;

    use async_trait::async_trait;
    use tronrpc_core::rpc::types::{
        Account, Block, BlockHeader, BlockHeaderRaw, CallOutcome, ConstantContractResult,
        EnergyEstimate, TransactionInfo,
    };
    use tronrpc_core::CoreError;

    use super::*;

    /// Records the last contract call and answers with canned values.
    #[derive(Default)]
    struct StubRpc {
        last_call: Mutex<Option<TriggerSmartContract>>,
    }

    #[async_trait]
    impl TronRpc for StubRpc {
        async fn get_account(&self, address: &Address) -> Result<Account, CoreError> {
            Ok(Account {
                address: address.to_string(),
                balance: 2059504131,
                ..Default::default()
            })
        }

        async fn get_now_block(&self) -> Result<Block, CoreError> {
            self.get_block_by_num(52799248).await
        }

        async fn get_block_by_num(&self, num: u64) -> Result<Block, CoreError> {
            Ok(Block {
                block_header: Some(BlockHeader {
                    raw_data: BlockHeaderRaw {
                        number: num,
                        ..Default::default()
                    },
                    witness_signature: String::new(),
                }),
                ..Default::default()
            })
        }

        async fn trigger_constant_contract(
            &self,
            call: &TriggerSmartContract,
        ) -> Result<ConstantContractResult, CoreError> {
            *self.last_call.lock().expect("lock poisoned") = Some(call.clone());
            Ok(ConstantContractResult {
                result: CallOutcome {
                    result: true,
                    ..Default::default()
                },
                constant_result: vec!["00".repeat(32)],
                ..Default::default()
            })
        }

        async fn estimate_energy(
            &self,
            call: &TriggerSmartContract,
        ) -> Result<EnergyEstimate, CoreError> {
            *self.last_call.lock().expect("lock poisoned") = Some(call.clone());
            Ok(EnergyEstimate {
                result: CallOutcome {
                    result: true,
                    ..Default::default()
                },
                energy_required: 14910,
            })
        }

        async fn get_transaction_info_by_id(
            &self,
            id: &str,
        ) -> Result<TransactionInfo, CoreError> {
            Ok(TransactionInfo {
                id: id.to_owned(),
                block_number: 32880248,
                ..Default::default()
            })
        }
    }

    fn call_args(parameter: &str) -> ContractCallArgs {
        ContractCallArgs {
            owner: "TOwner".into(),
            contract: "TContract".into(),
            selector: "balanceOf(address)".into(),
            parameter: parameter.into(),
            call_value: None,
            token_id: Some(1002000),
            call_token_value: Some(3),
        }
    }

    #[tokio::test]
    async fn account_command_prints_balance() {
        let rpc = StubRpc::default();
        let value = run(
            &rpc,
            &Command::Account {
                address: "TOwner".into(),
            },
        )
        .await
        .expect("command must succeed");
        assert_eq!(value["balance"], 2059504131_i64);
        assert_eq!(value["address"], "TOwner");
    }

    #[tokio::test]
    async fn block_command_uses_wire_field_names() {
        let rpc = StubRpc::default();
        let value = run(&rpc, &Command::NowBlock).await.expect("must succeed");
        assert_eq!(value["block_header"]["raw_data"]["number"], 52799248);
    }

    #[tokio::test]
    async fn tx_info_strips_hex_prefix() {
        let rpc = StubRpc::default();
        let value = run(
            &rpc,
            &Command::TxInfo {
                txid: "0xabcd".into(),
            },
        )
        .await
        .expect("must succeed");
        assert_eq!(value["id"], "abcd");
        assert_eq!(value["blockNumber"], 32880248);
    }

    #[tokio::test]
    async fn trigger_command_decodes_parameter_and_token() {
        let rpc = StubRpc::default();
        run(&rpc, &Command::Trigger(call_args("0x00ff")))
            .await
            .expect("must succeed");
        let call = rpc
            .last_call
            .lock()
            .expect("lock poisoned")
            .clone()
            .expect("call recorded");
        assert_eq!(call.parameter, "00ff");
        assert_eq!(call.token_id, Some(1002000));
        assert_eq!(call.call_token_value, Some(3));
        assert_eq!(call.call_value, None);
    }

    #[tokio::test]
    async fn estimate_energy_rejects_bad_hex() {
        let rpc = StubRpc::default();
        let err = run(&rpc, &Command::EstimateEnergy(call_args("zz")))
            .await
            .expect_err("invalid hex must fail");
        assert!(err.to_string().contains("not valid hex"));
        assert!(rpc.last_call.lock().expect("lock poisoned").is_none());
    }
}
