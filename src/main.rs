use anyhow::{Context, Result};
use hostmap::{
    command::Command, constants::DEFAULT_LOG_FILTER, env::Env, handler::Handler, HostMap, Store,
};
use log::{error, info};
use tokio::io::{stdin, AsyncBufReadExt, BufReader};
use tokio::signal::unix::{signal, SignalKind};

async fn process_line<S: Store>(handler: &Handler<S>, line: &str) {
    if line.trim().is_empty() {
        return;
    }

    let command = match line.parse::<Command>() {
        Ok(command) => command,
        Err(err) => {
            error!("{}", err);
            return;
        }
    };

    match handler.handle(command).await {
        Ok(output) if output.is_empty() => {}
        Ok(output) => println!("{}", output),
        Err(err) => error!("{:#}", err),
    }
}

#[tokio::main]
async fn main() -> Result<()> {
    env_logger::init_from_env(
        env_logger::Env::default().filter_or(env_logger::DEFAULT_FILTER_ENV, DEFAULT_LOG_FILTER),
    );

    Env::validate()?;

    let map = HostMap::shared(Env::seed_store()?);
    map.write()
        .await
        .load()
        .context("Failed to load entries from store.")?;
    info!("Loaded {} entries from store.", map.read().await.len());

    let handler = Handler::new(map);
    let mut lines = BufReader::new(stdin()).lines();
    let mut term_signal =
        signal(SignalKind::terminate()).context("Failed to listen for SIGTERM.")?;

    loop {
        tokio::select! {
            _ = term_signal.recv() => {
                info!("SIGTERM received, shutting down...");
                break;
            },
            _ = tokio::signal::ctrl_c() => {
                info!("Interrupt received, shutting down...");
                break;
            },
            line = lines.next_line() => {
                match line.context("Failed to read from stdin.")? {
                    Some(line) => process_line(&handler, &line).await,
                    None => {
                        info!("End of input, shutting down...");
                        break;
                    }
                }
            },
        }
    }

    Ok(())
}
