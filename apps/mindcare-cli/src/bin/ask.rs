use std::env;

use mindcare_core::types::TurnRequest;
use mindcare_dialog::router::GET_SYMPTOM_INFO;

fn main() -> anyhow::Result<()> {
    let question = env::args().skip(1).collect::<Vec<_>>().join(" ");
    if question.trim().is_empty() {
        eprintln!("Usage: mindcare-ask <question...>");
        std::process::exit(1);
    }
    let router = mindcare_cli::bootstrap()?;
    let response = router.handle(&TurnRequest::new(GET_SYMPTOM_INFO).with_transcript(question));
    println!("{}", response.message);
    Ok(())
}
