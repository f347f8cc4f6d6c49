use anyhow::{Context, Result};
use itsg33_issues::{
    controls::ControlSource,
    driver,
    tracker::GithubIssues,
    Config,
};
use tracing::info;
use tracing_subscriber::{fmt, EnvFilter};

fn main() -> Result<()> {
    // ─── 1) configuration ────────────────────────────────────────────
    let config = Config::from_env().context("loading configuration")?;

    // ─── 2) init logging ─────────────────────────────────────────────
    let default_filter = if config.debug {
        "itsg33_issues=debug,info"
    } else {
        "info"
    };
    let env = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_filter));
    fmt::Subscriber::builder()
        .with_env_filter(env)
        .with_target(false)
        .init();
    info!(repo = %config.repo, csv = %config.csv_file.display(), "startup");

    // ─── 3) open control sheet; header is checked before any request ─
    let rows = ControlSource::open(&config.csv_file)
        .with_context(|| format!("reading controls from {}", config.csv_file.display()))?;

    // ─── 4) submit one issue per control ─────────────────────────────
    let issues = GithubIssues::new(&config).context("building issue tracker client")?;
    info!(url = %issues.url(), "submitting issues");
    driver::run(rows, &issues).context("submitting issues")?;

    info!("all done");
    Ok(())
}
