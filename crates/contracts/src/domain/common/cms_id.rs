use serde::{Deserialize, Serialize};
use std::fmt;

/// Identifier of a CMS record.
///
/// The content API is inconsistent here: older collections return numeric
/// ids, newer ones return string document ids. Both are accepted and kept as
/// their string form.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(from = "RawCmsId", into = "String")]
pub struct CmsId(String);

#[derive(Deserialize)]
#[serde(untagged)]
enum RawCmsId {
    Number(i64),
    Text(String),
}

impl From<RawCmsId> for CmsId {
    fn from(raw: RawCmsId) -> Self {
        match raw {
            RawCmsId::Number(n) => CmsId(n.to_string()),
            RawCmsId::Text(s) => CmsId(s),
        }
    }
}

impl From<CmsId> for String {
    fn from(id: CmsId) -> Self {
        id.0
    }
}

impl CmsId {
    pub fn new(value: impl Into<String>) -> Self {
        Self(value.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for CmsId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}
