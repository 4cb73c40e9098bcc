//! Fetch a URL with a configurable client and print the body.
//!
//! ```bash
//! fetch https://jsonplaceholder.typicode.com/users
//! fetch --timeout 10 --user-agent "My Custom User Agent" --insecure https://self-signed.badssl.com/
//! RUST_LOG=debug fetch --no-redirects http://github.com/
//! ```

use std::io::{self, Write};
use std::time::Duration;

use anyhow::{Context, Result};
use clap::Parser;
use fetchkit::client::{
    use_insecure_transport, with_timeout, with_user_agent, without_redirects, ConfigOption,
};
use fetchkit::Client;
use log::info;

#[derive(Parser)]
#[command(version, about)]
struct Cli {
    /// URL to fetch.
    url: String,

    /// Request timeout in seconds. 0 disables the timeout.
    #[arg(short, long)]
    timeout: Option<u64>,

    /// Value of the User-Agent header.
    #[arg(short = 'A', long)]
    user_agent: Option<String>,

    /// Print redirect responses instead of following them.
    #[arg(long)]
    no_redirects: bool,

    /// Skip TLS certificate verification.
    #[arg(short = 'k', long)]
    insecure: bool,
}

impl Cli {
    fn options(&self) -> Vec<ConfigOption> {
        let mut options = vec![];
        if self.insecure {
            options.push(use_insecure_transport());
        }
        if let Some(secs) = self.timeout {
            options.push(with_timeout(Duration::from_secs(secs)));
        }
        if let Some(user_agent) = &self.user_agent {
            options.push(with_user_agent(user_agent.clone()));
        }
        if self.no_redirects {
            options.push(without_redirects());
        }
        options
    }
}

fn main() -> Result<()> {
    env_logger::init();
    fetchkit_backend_reqwest::register();

    let cli = Cli::parse();
    let client = Client::new(cli.options()).context("failed to build client")?;

    let mut response = client
        .get(cli.url.clone())
        .with_context(|| format!("GET {} failed", cli.url))?;
    info!("{} {}", response.status(), cli.url);
    if response.status().is_redirection() {
        for location in response.get_header("location")? {
            info!("location: {location}");
        }
    }

    let mut stdout = io::stdout().lock();
    io::copy(&mut response, &mut stdout).context("failed to read response body")?;
    stdout.flush()?;
    Ok(())
}
