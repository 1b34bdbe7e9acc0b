/// One container record parsed from the status query output.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ContainerObservation {
    /// First column: the compose service name, or a container name for
    /// listings that only carry one name column
    pub name: String,
    pub state: String,
    /// Container name from the optional third column
    pub container: Option<String>,
}

impl ContainerObservation {
    pub fn new(name: impl Into<String>, state: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            state: state.into(),
            container: None,
        }
    }

    pub fn with_container(mut self, container: impl Into<String>) -> Self {
        self.container = Some(container.into());
        self
    }

    /// Names this record can be matched by, first column first.
    pub fn names(&self) -> impl Iterator<Item = &str> {
        std::iter::once(self.name.as_str()).chain(self.container.as_deref())
    }

    /// Parses a single `NAME<sep>STATE[<tab>CONTAINER]` line.
    ///
    /// Tab-separated lines may carry a third container-name column. Lines
    /// without tabs are split at the first run of two or more spaces
    /// (column-aligned tables). Returns `None` for blank lines, header lines
    /// and lines missing either of the first two columns.
    pub fn parse_line(line: &str) -> Option<Self> {
        let line = line.trim();
        if line.is_empty() {
            return None;
        }

        let (name, state, container) = if line.contains('\t') {
            let mut fields = line.split('\t').map(str::trim);
            let name = fields.next()?;
            let state = fields.next()?;
            (name, state, fields.next().filter(|c| !c.is_empty()))
        } else {
            let (name, state) = split_on_column_gap(line)?;
            (name.trim(), state.trim(), None)
        };

        if name.is_empty() || state.is_empty() || is_header(name) {
            return None;
        }

        let observation = Self::new(name, state);
        Some(match container {
            Some(container) => observation.with_container(container),
            None => observation,
        })
    }
}

/// Parses every record of a status query, skipping lines that are not records.
pub fn parse_status_output(output: &str) -> Vec<ContainerObservation> {
    output
        .lines()
        .filter_map(ContainerObservation::parse_line)
        .collect()
}

fn split_on_column_gap(line: &str) -> Option<(&str, &str)> {
    let gap = line.find("  ")?;
    Some((&line[..gap], &line[gap..]))
}

fn is_header(name: &str) -> bool {
    name == "NAME" || name == "SERVICE"
}
