// SPDX-License-Identifier: MIT OR Apache-2.0

//! Startup example for the envresolve crate.
//!
//! This example demonstrates:
//! - Choosing the key=value file with `--env-file` / `ENV_FILE`
//! - Declaring required variables with defaults and validators
//! - Exiting on the first variable that cannot be resolved
//! - Reading typed values back out of the report
//!
//! To run this example:
//! ```bash
//! printf 'client_secret = s3cr3t12\nCLIENT_SECRET=finalvalue\nPORT=8080\n' > demo.env
//! export CLIENT_ID=abc123
//!
//! cargo run --example startup -- --env-file demo.env
//! ```

use clap::Parser;
use envresolve::prelude::*;

#[derive(Parser, Debug)]
#[command(about = "Resolve startup configuration and print where each value came from")]
struct Cli {
    #[command(flatten)]
    env: EnvFileArgs,
}

fn main() {
    // Initialize tracing subscriber for logging
    tracing_subscriber::fmt::init();

    let cli = Cli::parse();

    let specs = [
        VariableSpec::new("CLIENT_ID")
            .with_default("default_id")
            .with_validator(validators::non_empty()),
        VariableSpec::new("CLIENT_SECRET")
            .with_validator(validators::min_len(8))
            .secret(),
        VariableSpec::new("ISSUER")
            .with_default("https://default-issuer.com")
            .with_validator(validators::has_prefix("https://")),
        VariableSpec::new("PORT")
            .with_default("8080")
            .with_validator(validators::parses_as::<u16>()),
    ];

    let mut resolver = cli.env.resolver().build();
    let resolution = exit_on_failure(resolver.resolve(&specs));

    for variable in &resolution {
        println!(
            "{:<14} {:<28} ({})",
            variable.key().as_str(),
            variable.display_value(),
            variable.origin()
        );
    }

    if let Some(port) = resolution.get("PORT") {
        let port = exit_on_failure(port.value().as_u16("PORT"));
        println!("\nWould listen on port {}", port);
    }
}
