//! Wires the GitHub-backed collection pipeline from configuration.

use gleaner::telemetry::{NoopTelemetrySink, StderrJsonlTelemetrySink, TelemetrySink};
use gleaner::{
    CollectionOrchestrator, CollectionSummary, FilesystemReviewStore, GatewayFetcher,
    GleanerConfig, OctocrabGateway,
};

use super::CliError;

/// Runs one collection for the configured repository and window.
///
/// Telemetry events go to stderr as JSON lines when `verbose` is set.
///
/// # Errors
///
/// Returns [`CliError::Intake`] for missing or invalid configuration and
/// [`CliError::Collection`] when discovery fails.
pub async fn run(config: &GleanerConfig) -> Result<CollectionSummary, CliError> {
    let repository = config.require_repository()?;
    let range = config.date_range()?;
    let token = config.resolve_token()?;
    let gateway = OctocrabGateway::for_token(&token, &config.api_base_url()?)?;

    let fetcher = GatewayFetcher::new(&gateway, &gateway, range.timezone());
    let store = FilesystemReviewStore::new(config.output_root());
    let filter = config.comment_filter();
    let telemetry: &dyn TelemetrySink = if config.verbose {
        &StderrJsonlTelemetrySink
    } else {
        &NoopTelemetrySink
    };

    let orchestrator = CollectionOrchestrator::new(&gateway, &fetcher, &store, &filter, telemetry);
    Ok(orchestrator.collect(&repository, &range).await?)
}
