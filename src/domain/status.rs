use std::fmt;

/// Display category of a declared service.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum StatusCategory {
    Running,
    Stopped,
    Created,
    NotCreated,
    Unknown,
}

const RUNNING_MARKERS: &[&str] = &["up", "running"];
const STOPPED_MARKERS: &[&str] = &["exited", "dead", "stopped"];
const CREATED_MARKERS: &[&str] = &["created"];

impl StatusCategory {
    /// Classifies the free-text state reported for a matched container.
    ///
    /// Matching is case-insensitive and works on whole words, so both the
    /// `Status` column ("Up 3 hours", "Exited (0) 2 days ago") and the bare
    /// `State` column ("running", "exited") are understood.
    pub fn classify(state: &str) -> Self {
        let words: Vec<String> = state
            .split(|c: char| !c.is_ascii_alphabetic())
            .filter(|w| !w.is_empty())
            .map(|w| w.to_ascii_lowercase())
            .collect();

        let has_any = |markers: &[&str]| words.iter().any(|w| markers.contains(&w.as_str()));

        if has_any(RUNNING_MARKERS) {
            Self::Running
        } else if has_any(STOPPED_MARKERS) {
            Self::Stopped
        } else if has_any(CREATED_MARKERS) {
            Self::Created
        } else {
            Self::Unknown
        }
    }

    /// Word shown next to the service name.
    pub fn label(&self) -> &'static str {
        match self {
            Self::Running => "running",
            Self::Stopped => "stopped",
            Self::Created => "created",
            Self::NotCreated => "not created",
            Self::Unknown => "unknown",
        }
    }
}

impl fmt::Display for StatusCategory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// Reconciled status of one declared service.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ServiceStatus {
    pub name: String,
    pub category: StatusCategory,
    /// State text of the matched container, `None` when nothing matched.
    pub raw_state: Option<String>,
}

impl ServiceStatus {
    pub fn new(name: impl Into<String>, category: StatusCategory) -> Self {
        Self {
            name: name.into(),
            category,
            raw_state: None,
        }
    }

    pub fn with_raw_state(mut self, raw_state: impl Into<String>) -> Self {
        self.raw_state = Some(raw_state.into());
        self
    }

    /// Status word for display. Unrecognized states are shown verbatim.
    pub fn display_state(&self) -> &str {
        match (self.category, self.raw_state.as_deref()) {
            (StatusCategory::Unknown, Some(raw)) if !raw.trim().is_empty() => raw.trim(),
            (category, _) => category.label(),
        }
    }
}

const SUMMARY_ORDER: [StatusCategory; 5] = [
    StatusCategory::Running,
    StatusCategory::Stopped,
    StatusCategory::Created,
    StatusCategory::NotCreated,
    StatusCategory::Unknown,
];

/// Per-service statuses in declaration order.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ServiceReport {
    entries: Vec<ServiceStatus>,
}

impl ServiceReport {
    pub fn new(entries: Vec<ServiceStatus>) -> Self {
        Self { entries }
    }

    pub fn entries(&self) -> &[ServiceStatus] {
        &self.entries
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn count(&self, category: StatusCategory) -> usize {
        self.entries
            .iter()
            .filter(|e| e.category == category)
            .count()
    }

    /// One-line tally such as `3 services: 2 running, 1 not created`.
    ///
    /// Categories without services are left out.
    pub fn summary(&self) -> String {
        let total = match self.len() {
            1 => "1 service".to_string(),
            n => format!("{n} services"),
        };

        let counts: Vec<String> = SUMMARY_ORDER
            .iter()
            .map(|&category| (category, self.count(category)))
            .filter(|(_, n)| *n > 0)
            .map(|(category, n)| format!("{n} {category}"))
            .collect();

        if counts.is_empty() {
            total
        } else {
            format!("{total}: {}", counts.join(", "))
        }
    }

    pub fn get(&self, name: &str) -> Option<&ServiceStatus> {
        self.entries.iter().find(|e| e.name == name)
    }

    /// `(name, category)` pairs, mostly useful for assertions.
    pub fn pairs(&self) -> Vec<(&str, StatusCategory)> {
        self.entries
            .iter()
            .map(|e| (e.name.as_str(), e.category))
            .collect()
    }
}
