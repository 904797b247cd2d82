use clap::{Args, Parser, Subcommand};

/// tronrpc — query a TRON full node over its HTTP wallet API.
#[derive(Debug, Parser)]
#[command(version, about)]
pub struct Cli {
    /// Wallet API root of the full node.
    #[arg(
        long,
        default_value = "http://127.0.0.1:8090/wallet",
        env = "TRONRPC_NODE_URL"
    )]
    pub node_url: String,

    /// API key sent as `TRON-PRO-API-KEY` (needed by public gateways).
    #[arg(long, env = "TRONRPC_API_KEY", hide_env_values = true)]
    pub api_key: Option<String>,

    /// Per-request timeout in seconds.
    #[arg(long, default_value = "30", value_parser = clap::value_parser!(u64).range(1..))]
    pub timeout_secs: u64,

    #[command(subcommand)]
    pub command: Command,
}

#[derive(Debug, Subcommand)]
pub enum Command {
    /// Look up an account by address.
    Account { address: String },

    /// Fetch the latest block.
    NowBlock,

    /// Fetch a block by height.
    Block { num: u64 },

    /// Run a constant (read-only) contract call.
    Trigger(ContractCallArgs),

    /// Estimate the energy a contract call would consume.
    EstimateEnergy(ContractCallArgs),

    /// Fetch the execution record of a transaction.
    TxInfo { txid: String },
}

#[derive(Debug, Args)]
pub struct ContractCallArgs {
    /// Caller address.
    pub owner: String,

    /// Contract address.
    pub contract: String,

    /// Function signature, e.g. `balanceOf(address)`.
    pub selector: String,

    /// ABI-encoded arguments as hex, with or without `0x`.
    #[arg(long, default_value = "")]
    pub parameter: String,

    /// TRX amount to send with the call, in sun.
    #[arg(long)]
    pub call_value: Option<i64>,

    /// TRC-10 token id to send with the call.
    #[arg(long, requires = "call_token_value")]
    pub token_id: Option<i64>,

    /// TRC-10 token amount to send with the call.
    #[arg(long, requires = "token_id")]
    pub call_token_value: Option<i64>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_block_with_defaults() {
        let cli = Cli::try_parse_from(["tronrpc", "block", "52799248"]).expect("must parse");
        assert_eq!(cli.node_url, "http://127.0.0.1:8090/wallet");
        assert_eq!(cli.timeout_secs, 30);
        assert!(matches!(cli.command, Command::Block { num: 52799248 }));
    }

    #[test]
    fn zero_timeout_is_rejected() {
        let err = Cli::try_parse_from(["tronrpc", "--timeout-secs", "0", "now-block"])
            .expect_err("zero timeout must be rejected");
        assert_eq!(err.kind(), clap::error::ErrorKind::ValueValidation);

        let cli = Cli::try_parse_from(["tronrpc", "--timeout-secs", "1", "now-block"])
            .expect("one second is accepted");
        assert_eq!(cli.timeout_secs, 1);
    }

    #[test]
    fn token_id_requires_amount() {
        let err = Cli::try_parse_from([
            "tronrpc", "trigger", "TOwner", "TContract", "f()", "--token-id", "1002000",
        ])
        .expect_err("token id alone must be rejected");
        assert_eq!(err.kind(), clap::error::ErrorKind::MissingRequiredArgument);
    }

    #[test]
    fn parses_estimate_energy_arguments() {
        let cli = Cli::try_parse_from([
            "tronrpc",
            "--node-url",
            "https://api.trongrid.io/wallet",
            "estimate-energy",
            "TOwner",
            "TContract",
            "transfer(address,uint256)",
            "--parameter",
            "0x01",
            "--call-value",
            "5",
        ])
        .expect("must parse");
        assert_eq!(cli.node_url, "https://api.trongrid.io/wallet");
        let Command::EstimateEnergy(args) = cli.command else {
            panic!("expected estimate-energy");
        };
        assert_eq!(args.parameter, "0x01");
        assert_eq!(args.call_value, Some(5));
    }
}
