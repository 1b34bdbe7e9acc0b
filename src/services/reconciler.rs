use crate::domain::{
    ContainerObservation, ServiceReport, ServiceStatus, StatusCategory, parse_status_output,
};
use std::collections::HashSet;
use tracing::debug;

/// How a declared service was paired with an observed container.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MatchKind {
    Exact,
    Substring,
}

/// Picks the observation belonging to `service`.
///
/// An observation equal to the service in either name column (service or
/// container) is an exact match. Compose prefixes and suffixes container names
/// with the project name and a replica index (`myproject-web-1`), so a name
/// containing the service, or contained in it, also counts. Exact matches win
/// over substring matches; otherwise the first substring match in output
/// order is taken. An empty service name never matches.
pub fn match_observation<'a>(
    service: &str,
    observations: &'a [ContainerObservation],
) -> Option<(&'a ContainerObservation, MatchKind)> {
    if service.is_empty() {
        return None;
    }

    if let Some(exact) = observations
        .iter()
        .find(|o| o.names().any(|name| name == service))
    {
        return Some((exact, MatchKind::Exact));
    }

    observations
        .iter()
        .find(|o| {
            o.names()
                .any(|name| name.contains(service) || service.contains(name))
        })
        .map(|o| (o, MatchKind::Substring))
}

/// Builds the report for `declared` services from the raw status query output.
///
/// Every declared service appears exactly once, in declaration order; repeated
/// names keep their first position.
pub fn reconcile<S: AsRef<str>>(declared: &[S], raw_status_output: &str) -> ServiceReport {
    let observations = parse_status_output(raw_status_output);
    debug!("{} container observation(s) parsed", observations.len());

    let mut seen = HashSet::new();
    let entries = declared
        .iter()
        .map(|name| name.as_ref())
        .filter(|name| seen.insert(*name))
        .map(|name| classify_service(name, &observations))
        .collect();

    ServiceReport::new(entries)
}

fn classify_service(name: &str, observations: &[ContainerObservation]) -> ServiceStatus {
    match match_observation(name, observations) {
        Some((obs, kind)) => {
            let category = StatusCategory::classify(&obs.state);
            debug!(
                "{name} -> {} ({kind:?} match, state {:?}): {category}",
                obs.name, obs.state
            );
            ServiceStatus::new(name, category).with_raw_state(obs.state.clone())
        }
        None => {
            debug!("{name} has no container");
            ServiceStatus::new(name, StatusCategory::NotCreated)
        }
    }
}
