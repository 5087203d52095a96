use anyhow::Context;

use bizgrid_console::{ConsoleConfig, Dataset, Session};

fn main() -> anyhow::Result<()> {
    bizgrid_observability::init();

    let config = ConsoleConfig::from_env();
    let dataset = match &config.dataset {
        Some(path) => Dataset::from_json_file(path)?,
        None => Dataset::sample(config.sample),
    };

    tracing::info!(
        dataset = %dataset.name,
        rows = dataset.records.len(),
        columns = dataset.columns.len(),
        page_size = config.page_size,
        "dataset loaded"
    );

    let mut session = Session::new(dataset, &config)?;
    let stdin = std::io::stdin();
    let stdout = std::io::stdout();
    session
        .run(stdin.lock(), stdout.lock())
        .context("console session failed")
}
