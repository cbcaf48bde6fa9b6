use crate::error::Result;
use regex::Regex;

/// Optional search/replace applied to performance-data labels
#[derive(Debug, Clone, Default)]
pub struct LabelRewrite {
    search: Option<Regex>,
    replace: String,
}

impl LabelRewrite {
    /// An empty `search` disables rewriting and `replace` is ignored.
    pub fn new(search: &str, replace: &str) -> Result<Self> {
        let search = if search.is_empty() {
            None
        } else {
            Some(Regex::new(search)?)
        };

        Ok(Self {
            search,
            replace: replace.to_string(),
        })
    }

    pub fn is_active(&self) -> bool {
        self.search.is_some()
    }

    pub fn apply(&self, label: &str) -> String {
        match &self.search {
            Some(re) => re.replace_all(label, self.replace.as_str()).into_owned(),
            None => label.to_string(),
        }
    }
}
