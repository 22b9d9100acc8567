#![warn(
    missing_debug_implementations,
    rust_2018_idioms,
    missing_docs,
    rustdoc::broken_intra_doc_links,
    rustdoc::missing_crate_level_docs
)]

//! Email relay server

use std::sync::Arc;

use anyhow::Result;
use clap::Parser;
use postman::{
    domain::postman::{PostmanServiceImpl, ServerConfig},
    infrastructure::{
        email::smtp::SmtpDeliveryClient,
        http::{HttpServer, HttpServerConfig},
    },
};

/// Command-line arguments / environment variables
#[derive(Debug, Parser)]
#[command(version, about)]
pub struct Args {
    /// The HTTP server configuration
    #[clap(flatten)]
    pub server: HttpServerConfig,

    /// The mail settings
    #[clap(flatten)]
    pub postman: ServerConfig,
}

#[mutants::skip]
#[tokio::main]
async fn main() -> Result<()> {
    if let Err(e) = dotenvy::dotenv() {
        if !e.not_found() {
            eprintln!("Failed to load environment: {}", e);

            return Err(e.into());
        }
    }

    tracing_subscriber::fmt::init();

    let args = Args::parse();

    let config = Arc::new(args.postman);
    let delivery = Arc::new(SmtpDeliveryClient::new(config.clone()));
    let postman = PostmanServiceImpl::new(config, delivery);

    HttpServer::new(postman, args.server).await?.run().await
}
