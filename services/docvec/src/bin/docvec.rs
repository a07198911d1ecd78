//! docvec - feed a directory of documents to a vectorization service
//!
//! # Examples
//!
//! ```bash
//! # Ingest ./documents (or ingest.documents_dir)
//! docvec run
//!
//! # Ingest another directory against a different service
//! DOCVEC_API_URL=http://rag:9101 docvec run ~/papers
//!
//! # Preview how a file would be chunked
//! docvec chunk report.pdf --chunk-size 500
//!
//! # Check the service
//! docvec health
//! ```

use clap::Parser;
use docvec::cli::output::print_error;
use docvec::cli::{run, Cli};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

/// Logs go to stderr so stdout stays clean for `--format json`
fn init_logging(json: bool) {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| "docvec=info".into());
    let registry = tracing_subscriber::registry().with(filter);

    if json {
        registry
            .with(
                tracing_subscriber::fmt::layer()
                    .json()
                    .with_writer(std::io::stderr),
            )
            .init();
    } else {
        registry
            .with(
                tracing_subscriber::fmt::layer()
                    .compact()
                    .with_writer(std::io::stderr),
            )
            .init();
    }
}

#[tokio::main(flavor = "current_thread")]
async fn main() {
    let cli = Cli::parse();
    init_logging(cli.log_json);

    if let Err(e) = run(cli).await {
        print_error(&e.to_string());
        std::process::exit(1);
    }
}
