// demos/buy/src/main.rs

use anyhow::{bail, Result};
use common::{load_config, SwapPipeline};

#[tokio::main]
async fn main() -> Result<()> {
    env_logger::init();

    // Load .env (RPC_URL, SECRET_KEY or KEYPAIR_PATH)
    let cfg = load_config()?;

    let args: Vec<String> = std::env::args().collect();
    if args.len() != 3 {
        bail!("usage: buy <TOKEN_MINT> <AMOUNT_SOL>");
    }

    // Run the buy pipeline once and hand either string back to the caller
    let pipeline = SwapPipeline::new(cfg)?;
    match pipeline.buy(&args[1], &args[2]).await {
        Ok(signature) => println!("Swap submitted: {signature}"),
        Err(err) => println!("Swap failed: {err}"),
    }

    Ok(())
}
