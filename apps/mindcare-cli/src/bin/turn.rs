use std::env;
use std::fs;
use std::io::{self, Read};

use anyhow::Context;

fn read_payload() -> anyhow::Result<String> {
    let args: Vec<String> = env::args().skip(1).collect();
    match args.first().map(String::as_str) {
        None | Some("-") => {
            let mut buf = String::new();
            io::stdin().read_to_string(&mut buf).context("read turn event from stdin")?;
            Ok(buf)
        }
        Some(path) => fs::read_to_string(path).with_context(|| format!("read turn event from {}", path)),
    }
}

fn main() -> anyhow::Result<()> {
    let router = mindcare_cli::bootstrap()?;
    let payload = read_payload()?;
    let envelope = router.handle_raw(&payload).to_envelope();
    println!("{}", serde_json::to_string_pretty(&envelope)?);
    Ok(())
}
