// Copyright 2025, Offchain Labs, Inc.
// For licensing, see https://github.com/OffchainLabs/stylus-sdk-rs/blob/main/licenses/COPYRIGHT.md

//! End-to-end harness for the MoonCoin contract.
//!
//! [`MoonCoinDevnet`] starts a Nitro devnode, deploys the contract in the
//! current package directory through `cargo stylus`, and hands out providers
//! for the accounts a scenario needs: the devnet key acts as the deployer, and
//! [`MoonCoinDevnet::funded_signer`] creates fresh accounts with gas money for
//! the other roles.

use std::env;

use alloy::{
    contract,
    network::{EthereumWallet, TransactionBuilder},
    primitives::{utils::parse_ether, Address},
    providers::{Provider, ProviderBuilder},
    rpc::types::TransactionRequest,
    signers::local::PrivateKeySigner,
    sol_types::SolError,
};
use eyre::{eyre, Result, WrapErr};
use log::LevelFilter;
use stylus_tools::{
    devnet::{Node, DEVNET_PRIVATE_KEY},
    Deployer,
};

/// Ether sent to every signer created by [`MoonCoinDevnet::funded_signer`].
pub const GAS_FUNDING: &str = "1";

/// Set to any value to log at debug level.
pub const VERBOSE_ENV: &str = "MOONCOIN_E2E_VERBOSE";

/// Installs the harness logger. Later calls are no-ops.
pub fn init_logging() {
    let level = if env::var_os(VERBOSE_ENV).is_some() {
        LevelFilter::Debug
    } else {
        LevelFilter::Info
    };
    simple_logger::SimpleLogger::new()
        .with_level(level)
        .init()
        .ok();
}

/// A Nitro devnode with MoonCoin deployed on it.
/// The node is shut down when this struct is dropped.
pub struct MoonCoinDevnet {
    node: Node,
    address: Address,
}

impl MoonCoinDevnet {
    /// Starts a devnode and deploys the contract from the current directory.
    /// The devnet key is the deploying account and receives the whole supply.
    pub async fn start() -> Result<Self> {
        init_logging();

        let node = Node::new().await.wrap_err("failed to start devnode")?;
        let rpc = node.rpc();
        log::info!("Deploying MoonCoin to Nitro ({rpc})...");
        // The deployer address is only forwarded alongside constructor args.
        let (address, tx_hash, gas) = Deployer::builder()
            .rpc(rpc)
            .constructor_args(Vec::<String>::new())
            .build()
            .deploy()
            .wrap_err("failed to deploy MoonCoin")?;
        log::info!("Deployed MoonCoin to {address} (tx {tx_hash})");
        log::debug!("Deployment gas: {gas} ETH");

        Ok(Self { node, address })
    }

    /// Gets the Nitro node RPC.
    pub fn rpc(&self) -> &str {
        self.node.rpc()
    }

    /// Address of the deployed contract.
    pub fn address(&self) -> Address {
        self.address
    }

    /// The devnet key, which deployed the contract.
    pub fn deployer(&self) -> Result<PrivateKeySigner> {
        DEVNET_PRIVATE_KEY
            .parse()
            .wrap_err("failed to parse devnet private key")
    }

    /// Creates a new account and funds it with [`GAS_FUNDING`] ether from the
    /// devnet key.
    pub async fn funded_signer(&self) -> Result<PrivateKeySigner> {
        let signer = PrivateKeySigner::random();
        let value = parse_ether(GAS_FUNDING)?;
        let provider = self.node.create_provider().await?;
        let tx = TransactionRequest::default()
            .with_to(signer.address())
            .with_value(value);
        provider
            .send_transaction(tx)
            .await?
            .watch()
            .await
            .wrap_err_with(|| format!("failed to fund {}", signer.address()))?;
        log::debug!("Funded {} with {GAS_FUNDING} ETH", signer.address());
        Ok(signer)
    }

    /// Creates a provider that signs transactions as `signer`.
    pub async fn provider_for(&self, signer: PrivateKeySigner) -> Result<impl Provider> {
        let wallet = EthereumWallet::from(signer);
        let provider = ProviderBuilder::new()
            .wallet(wallet)
            .connect(self.rpc())
            .await
            .wrap_err("failed to connect to devnode")?;
        Ok(provider)
    }
}

/// Decodes the custom error a reverted contract call carried.
pub fn decode_revert<E: SolError>(err: &contract::Error) -> Result<E> {
    err.as_decoded_error::<E>()
        .ok_or_else(|| eyre!("call did not revert with {}: {err}", E::SIGNATURE))
}
