//! Server configuration from command-line flags, with environment fallbacks.

use clap::Parser;
use std::net::SocketAddr;

#[derive(Parser, Debug, Clone)]
#[command(name = "froggy-pies")]
#[command(version)]
#[command(about = "Serve a personal pie and crust recipe catalog over HTTP", long_about = None)]
pub struct ServerConfig {
    /// Address to listen on
    #[arg(long, env = "FROGGY_PIES_BIND", default_value = "127.0.0.1:5000")]
    pub bind: SocketAddr,

    /// Queue depth of the recipe store actor
    #[arg(
        long,
        env = "FROGGY_PIES_CHANNEL_CAPACITY",
        default_value_t = 32,
        value_parser = clap::value_parser!(u32).range(1..)
    )]
    pub channel_capacity: u32,

    /// Default log filter, used when RUST_LOG is unset
    #[arg(long, env = "FROGGY_PIES_LOG", default_value = "info")]
    pub log: String,

    /// Load the starter recipes at startup
    #[arg(long, env = "FROGGY_PIES_SEED")]
    pub seed: bool,
}
