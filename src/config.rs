use anyhow::{Context, Result};
use clap::Parser;
use std::env;

/// Stub server configuration.
/// Combines environment variables and CLI arguments.
#[derive(Debug, Clone)]
pub struct StubConfig {
    pub host: String,
    pub port: u16,
    pub account: String,
}

/// Command-line + environment configuration.
#[derive(Parser, Debug)]
#[command(author, version, about = "In-memory Swift account and Glance image stub")]
pub struct Args {
    /// Host to bind to (overrides OPENSTACK_STUB_HOST)
    #[arg(long)]
    pub host: Option<String>,

    /// Port to bind to (overrides OPENSTACK_STUB_PORT)
    #[arg(long)]
    pub port: Option<u16>,

    /// Swift account seeded at startup (overrides OPENSTACK_STUB_ACCOUNT)
    #[arg(long)]
    pub account: Option<String>,
}

impl StubConfig {
    /// Parse environment variables + CLI args into StubConfig.
    pub fn from_env_and_args() -> Result<Self> {
        Self::merge(Args::parse())
    }

    fn merge(args: Args) -> Result<Self> {
        let env_host = env::var("OPENSTACK_STUB_HOST").unwrap_or_else(|_| "0.0.0.0".into());
        let env_port = match env::var("OPENSTACK_STUB_PORT") {
            Ok(value) => value
                .parse::<u16>()
                .with_context(|| format!("parsing OPENSTACK_STUB_PORT value `{}`", value))?,
            Err(env::VarError::NotPresent) => 3000,
            Err(err) => return Err(err).context("reading OPENSTACK_STUB_PORT"),
        };
        let env_account =
            env::var("OPENSTACK_STUB_ACCOUNT").unwrap_or_else(|_| "AUTH_demo".into());

        Ok(Self {
            host: args.host.unwrap_or(env_host),
            port: args.port.unwrap_or(env_port),
            account: args.account.unwrap_or(env_account),
        })
    }

    pub fn addr(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }
}
