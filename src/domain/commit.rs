/// One commit as emitted by the log command.
///
/// Fields arrive in a fixed order: committer date, committer name, committer
/// email, abbreviated hash, subject, decoration.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CommitRecord {
    pub date: String,
    pub committer_name: String,
    pub committer_email: String,
    pub short_id: String,
    pub subject: String,
    pub decoration: String,
}

impl CommitRecord {
    /// Decode one log line.
    ///
    /// The first four fields are plain comma-separated text. The rest is
    /// `"<subject>","<decoration>"`, split at the last `","` because a
    /// decoration never contains that sequence. git does not escape quotes in
    /// subjects, so everything between the outer quotes is kept as is.
    ///
    /// Missing fields decode as empty strings, so a malformed line degrades
    /// instead of failing.
    pub fn parse(line: &str) -> Self {
        let line = line.trim_end_matches(['\r', '\n']);
        let mut fields = line.splitn(5, ',');
        let mut next = || fields.next().unwrap_or_default().to_string();

        let date = next();
        let committer_name = next();
        let committer_email = next();
        let short_id = next();
        let (subject, decoration) = split_quoted_pair(&next());

        CommitRecord {
            date,
            committer_name,
            committer_email,
            short_id,
            subject,
            decoration,
        }
    }
}

/// Parse every non-blank line of `output` lazily, in log order.
pub fn parse_log(output: &str) -> impl Iterator<Item = CommitRecord> + '_ {
    output
        .lines()
        .filter(|line| !line.trim().is_empty())
        .map(CommitRecord::parse)
}

/// Split `"<subject>","<decoration>"` into its two unquoted parts.
fn split_quoted_pair(rest: &str) -> (String, String) {
    match rest.rfind(QUOTED_SEPARATOR) {
        Some(idx) => (
            strip_outer_quotes(&rest[..=idx]),
            strip_outer_quotes(&rest[idx + QUOTED_SEPARATOR.len() - 1..]),
        ),
        None => (strip_outer_quotes(rest), String::new()),
    }
}

fn strip_outer_quotes(field: &str) -> String {
    let field = field.strip_prefix('"').unwrap_or(field);
    field.strip_suffix('"').unwrap_or(field).to_string()
}

const QUOTED_SEPARATOR: &str = "\",\"";
