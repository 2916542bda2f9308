use pivot_clock::SystemClock;
use pivot_runner::{JournalConfig, PivotJournal};
use std::io::{self, BufRead, Write};
use std::sync::Arc;

/// Optional configuration file, looked up in the working directory
const CONFIG_PATH: &str = "pivot-journal.json";

fn main() -> anyhow::Result<()> {
    // Initialize logging
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    let config = JournalConfig::load_or_default(CONFIG_PATH)?;
    let mut journal = PivotJournal::from_config(&config, Arc::new(SystemClock::new()))?;

    log::info!(
        "Pivot journal ready ({} saved, store {})",
        journal.len(),
        config.store_path.display()
    );

    let stdin = io::stdin();
    let mut stdout = io::stdout().lock();
    let mut recorded = 0usize;

    for line in stdin.lock().lines() {
        let line = line?;
        if line.trim().is_empty() {
            continue;
        }
        if let Some(pivot) = journal.record(&line) {
            writeln!(stdout, "{}", serde_json::to_string(&pivot)?)?;
            recorded += 1;
        }
    }

    if !journal.save() {
        anyhow::bail!(
            "failed to save {} pivots to {}",
            journal.len(),
            config.store_path.display()
        );
    }

    log::info!("Recorded {} new pivots, {} total", recorded, journal.len());
    Ok(())
}
