#![warn(
    missing_debug_implementations,
    rust_2018_idioms,
    missing_docs,
    rustdoc::broken_intra_doc_links,
    rustdoc::missing_crate_level_docs
)]

//! Contact relay HTTP server

use std::sync::Arc;

use anyhow::Result;
use clap::Parser;
use contact_relay::{
    domain::contact::service::ContactRelayService,
    infrastructure::{
        email::smtp::{SmtpConfig, SmtpMailer},
        http::{HttpServer, HttpServerConfig},
    },
};

/// Command-line arguments / environment variables
#[derive(Debug, Parser)]
pub struct Args {
    /// The HTTP server configuration
    #[clap(flatten)]
    pub server: HttpServerConfig,

    /// The SMTP configuration
    #[clap(flatten)]
    pub smtp: SmtpConfig,
}

#[mutants::skip]
#[tokio::main]
async fn main() -> Result<()> {
    // Incomplete SMTP configuration is not fatal here; it surfaces as a
    // configuration error on the first submission instead.
    if let Err(e) = dotenvy::dotenv() {
        eprintln!("No environment file loaded: {}", e);
    }

    tracing_subscriber::fmt::init();

    let args = Args::parse();

    let mailer = SmtpMailer::new(args.smtp);
    let contact = ContactRelayService::new(Arc::new(mailer));

    HttpServer::new(contact, args.server).await?.run().await
}
