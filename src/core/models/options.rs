use url::form_urlencoded;

/// Explicit mapping from an options struct to query-string parameters.
pub trait QueryOptions {
    /// Every parameter the options type knows about, with its current value.
    fn query_pairs(&self) -> Vec<(&'static str, Option<&str>)>;

    /// Form-urlencode the non-empty parameters, ordered by name.
    fn encode(&self) -> String {
        let mut pairs: Vec<(&'static str, &str)> = self
            .query_pairs()
            .into_iter()
            .filter_map(|(name, value)| value.filter(|v| !v.is_empty()).map(|v| (name, v)))
            .collect();
        pairs.sort_by_key(|(name, _)| *name);

        let mut serializer = form_urlencoded::Serializer::new(String::new());
        for (name, value) in pairs {
            serializer.append_pair(name, value);
        }
        serializer.finish()
    }
}

/// Append `?` plus the encoded options to `path` when options are given.
///
/// Options with every field empty still produce a trailing `?`.
pub fn with_query<O: QueryOptions>(path: String, options: Option<&O>) -> String {
    match options {
        Some(options) => format!("{}?{}", path, options.encode()),
        None => path,
    }
}

/// Query parameters accepted by the single chargeback endpoint.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ChargebackOptions {
    pub include: Option<String>,
    pub embed: Option<String>,
}

impl QueryOptions for ChargebackOptions {
    fn query_pairs(&self) -> Vec<(&'static str, Option<&str>)> {
        vec![
            ("include", self.include.as_deref()),
            ("embed", self.embed.as_deref()),
        ]
    }
}

/// Query parameters accepted by the chargeback list endpoints.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ListChargebackOptions {
    pub include: Option<String>,
    pub embed: Option<String>,
    /// Restrict the list to one website profile
    pub profile_id: Option<String>,
}

impl QueryOptions for ListChargebackOptions {
    fn query_pairs(&self) -> Vec<(&'static str, Option<&str>)> {
        vec![
            ("include", self.include.as_deref()),
            ("embed", self.embed.as_deref()),
            ("profileId", self.profile_id.as_deref()),
        ]
    }
}
