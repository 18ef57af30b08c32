use std::io::{self, Write};

use anyhow::Context;
use config::Config;
use controller::LookupController;
use dictionary::{Dictionary, WordLookup};
use utilities::{input, is_exit_command};

mod config;
mod controller;
mod render;
mod state;
mod utilities;
mod view;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let config = Config::new();
    init_tracing(&config.log_filter)?;

    let dict = Dictionary::with_options(config.api_url.clone(), config.timeout)
        .context("failed to build the dictionary client")?;
    tracing::debug!(api_url = dict.base_url(), timeout = ?config.timeout, "dictionary client ready");
    let controller = LookupController::new(dict);

    let mut stdout = io::stdout();
    render::banner(&mut stdout)?;
    while let Some(line) = input(">> ")? {
        if is_exit_command(&line) {
            break;
        }
        // enter is the submit control
        controller.update_query(line);
        lookup(&controller, &mut stdout).await?;
    }
    render::footer(&mut stdout)?;
    Ok(())
}

async fn lookup<D: WordLookup>(
    controller: &LookupController<D>,
    out: &mut impl Write,
) -> io::Result<()> {
    let mut changes = controller.subscribe();
    changes.borrow_and_update();
    let submit = controller.submit();
    tokio::pin!(submit);
    loop {
        tokio::select! {
            () = &mut submit => break,
            Ok(()) = changes.changed() => {
                let session = changes.borrow_and_update().clone();
                if session.is_loading() {
                    render::render_session(out, &session)?;
                    out.flush()?;
                }
            }
        }
    }
    render::render_session(out, &controller.snapshot())?;
    out.flush()
}

fn init_tracing(filter: &str) -> anyhow::Result<()> {
    let filter = tracing_subscriber::EnvFilter::try_new(filter)
        .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new(config::DEFAULT_LOG_FILTER));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(io::stderr)
        .try_init()
        .map_err(|error| anyhow::anyhow!("failed to initialize tracing subscriber: {error}"))?;

    Ok(())
}
