use async_trait::async_trait;
use reqwest::header::{self, HeaderMap, HeaderValue};
use reqwest::{Method, StatusCode, Url};
use serde::de::DeserializeOwned;
use serde::Serialize;
use tracing::{debug, trace, warn};

use crate::error::{CoreError, NodeError};
use crate::types::Address;

use super::super::request::{
    AccountRequest, BlockByNumRequest, TransactionInfoRequest, TriggerSmartContract,
};
use super::super::types::{Account, Block, ConstantContractResult, EnergyEstimate, TransactionInfo};
use super::super::validate::{
    require_account_found, require_block_header, require_call_success, require_transaction_found,
};
use super::super::TronRpc;
use super::connection::{parse_base_url, ClientConfig};
use super::protocol::{decode_body, probe_node_error};

const GET_ACCOUNT: &str = "/getaccount";
const GET_NOW_BLOCK: &str = "/getnowblock";
const GET_BLOCK_BY_NUM: &str = "/getblockbynum";
const TRIGGER_CONSTANT_CONTRACT: &str = "/triggerconstantcontract";
const ESTIMATE_ENERGY: &str = "/estimateenergy";
const GET_TRANSACTION_INFO_BY_ID: &str = "/gettransactioninfobyid";

const API_KEY_HEADER: &str = "tron-pro-api-key";

/// TRON full-node wallet API client over HTTP(S).
///
/// Holds only immutable configuration and a `reqwest::Client` handle, so a
/// single instance (or its clones) can serve concurrent callers. Every call
/// is one request; dropping the returned future cancels it.
#[derive(Debug, Clone)]
pub struct HttpNodeClient {
    client: reqwest::Client,
    base_url: String,
}

impl HttpNodeClient {
    /// Create a client with default timeouts and no API key.
    pub fn new(base_url: &str) -> Result<Self, CoreError> {
        Self::with_config(ClientConfig::new(base_url))
    }

    pub fn with_config(config: ClientConfig) -> Result<Self, CoreError> {
        let base_url = parse_base_url(&config.base_url)?;

        let mut headers = HeaderMap::new();
        if let Some(api_key) = &config.api_key {
            let mut value = HeaderValue::from_str(api_key)
                .map_err(|e| CoreError::Config(format!("invalid api key header value: {e}")))?;
            value.set_sensitive(true);
            headers.insert(API_KEY_HEADER, value);
        }

        let client = reqwest::Client::builder()
            .connect_timeout(config.connect_timeout)
            .timeout(config.timeout)
            .default_headers(headers)
            .build()
            .map_err(|e| CoreError::Config(format!("failed to build http client: {e}")))?;

        Ok(Self { client, base_url })
    }

    /// Wrap an existing `reqwest::Client`, e.g. one configured with a proxy.
    pub fn from_client(client: reqwest::Client, base_url: &str) -> Result<Self, CoreError> {
        Ok(Self {
            client,
            base_url: parse_base_url(base_url)?,
        })
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    /// `GET` an endpoint and decode its body into `T`.
    pub async fn get<T: DeserializeOwned>(&self, path: &str) -> Result<T, CoreError> {
        self.request::<(), T>(Method::GET, path, None).await
    }

    /// `POST` a JSON body to an endpoint and decode the response into `T`.
    pub async fn post<B, T>(&self, path: &str, body: &B) -> Result<T, CoreError>
    where
        B: Serialize + ?Sized + Sync,
        T: DeserializeOwned,
    {
        self.request(Method::POST, path, Some(body)).await
    }

    async fn request<B, T>(
        &self,
        method: Method,
        path: &str,
        body: Option<&B>,
    ) -> Result<T, CoreError>
    where
        B: Serialize + ?Sized + Sync,
        T: DeserializeOwned,
    {
        self.send(&method, path, body)
            .await
            .map_err(|source| CoreError::node(&method, path, source))
    }

    async fn send<B, T>(
        &self,
        method: &Method,
        path: &str,
        body: Option<&B>,
    ) -> Result<T, NodeError>
    where
        B: Serialize + ?Sized + Sync,
        T: DeserializeOwned,
    {
        let endpoint = format!("{}{}", self.base_url, path);
        let payload = body
            .map(serde_json::to_vec)
            .transpose()
            .map_err(NodeError::Serialization)?;

        let url = Url::parse(&endpoint).map_err(|e| {
            NodeError::RequestConstruction(format!("invalid endpoint `{endpoint}`: {e}"))
        })?;
        let mut builder = self
            .client
            .request(method.clone(), url)
            .header(header::CONTENT_TYPE, "application/json")
            .header(header::ACCEPT, "application/json");
        if let Some(payload) = payload {
            builder = builder.body(payload);
        }
        let request = builder
            .build()
            .map_err(|e| NodeError::RequestConstruction(e.to_string()))?;

        debug!(
            http.method = %method,
            http.path = path,
            body_len = request.body().and_then(|b| b.as_bytes()).map_or(0, <[u8]>::len),
            "node request"
        );

        let response = self
            .client
            .execute(request)
            .await
            .map_err(NodeError::Transport)?;
        let status = response.status();
        let body = response.text().await.map_err(NodeError::Read)?;
        debug!(
            http.method = %method,
            http.path = path,
            %status,
            body_len = body.len(),
            "node response"
        );
        trace!(http.method = %method, http.path = path, body = %body, "node response body");

        if status != StatusCode::OK {
            return Err(NodeError::HttpStatus { status });
        }

        if let Err(err) = probe_node_error(&body) {
            warn!(http.path = path, error = %err, "node reported an error");
            return Err(err);
        }

        decode_body(&body)
    }

    fn semantic_error(method: Method, path: &str, source: NodeError) -> CoreError {
        warn!(http.path = path, error = %source, "node call returned a failure result");
        CoreError::node(&method, path, source)
    }
}

#[async_trait]
impl TronRpc for HttpNodeClient {
    async fn get_account(&self, address: &Address) -> Result<Account, CoreError> {
        let request = AccountRequest {
            address,
            visible: true,
        };
        let account: Account = self.post(GET_ACCOUNT, &request).await?;
        require_account_found(address, account)
            .map_err(|e| Self::semantic_error(Method::POST, GET_ACCOUNT, e))
    }

    async fn get_now_block(&self) -> Result<Block, CoreError> {
        let block: Block = self.get(GET_NOW_BLOCK).await?;
        require_block_header(block)
            .map_err(|e| Self::semantic_error(Method::GET, GET_NOW_BLOCK, e))
    }

    async fn get_block_by_num(&self, num: u64) -> Result<Block, CoreError> {
        let block: Block = self
            .post(GET_BLOCK_BY_NUM, &BlockByNumRequest { num })
            .await?;
        require_block_header(block)
            .map_err(|e| Self::semantic_error(Method::POST, GET_BLOCK_BY_NUM, e))
    }

    async fn trigger_constant_contract(
        &self,
        call: &TriggerSmartContract,
    ) -> Result<ConstantContractResult, CoreError> {
        let result: ConstantContractResult = self.post(TRIGGER_CONSTANT_CONTRACT, call).await?;
        require_call_success(&result.result)
            .map_err(|e| Self::semantic_error(Method::POST, TRIGGER_CONSTANT_CONTRACT, e))?;
        Ok(result)
    }

    async fn estimate_energy(
        &self,
        call: &TriggerSmartContract,
    ) -> Result<EnergyEstimate, CoreError> {
        let estimate: EnergyEstimate = self.post(ESTIMATE_ENERGY, call).await?;
        require_call_success(&estimate.result)
            .map_err(|e| Self::semantic_error(Method::POST, ESTIMATE_ENERGY, e))?;
        Ok(estimate)
    }

    async fn get_transaction_info_by_id(&self, id: &str) -> Result<TransactionInfo, CoreError> {
        let info: TransactionInfo = self
            .post(GET_TRANSACTION_INFO_BY_ID, &TransactionInfoRequest { value: id })
            .await?;
        require_transaction_found(id, info)
            .map_err(|e| Self::semantic_error(Method::POST, GET_TRANSACTION_INFO_BY_ID, e))
    }
}
