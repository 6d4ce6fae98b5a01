use serde::{Deserialize, Deserializer, Serialize};

/// List payload returned by collection endpoints.
///
/// Depending on the endpoint version the CMS answers with either a bare JSON
/// array or an envelope `{ "data": [...] }`; both decode into `Collection`.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Collection<T> {
    pub data: Vec<T>,
}

impl<T> Default for Collection<T> {
    fn default() -> Self {
        Self { data: Vec::new() }
    }
}

#[derive(Deserialize)]
#[serde(untagged)]
enum RawCollection<T> {
    Bare(Vec<T>),
    Envelope {
        #[serde(default = "Vec::new")]
        data: Vec<T>,
    },
}

impl<'de, T> Deserialize<'de> for Collection<T>
where
    T: Deserialize<'de>,
{
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        let data = match RawCollection::deserialize(deserializer)? {
            RawCollection::Bare(items) => items,
            RawCollection::Envelope { data } => data,
        };
        Ok(Self { data })
    }
}

impl<T> Collection<T> {
    pub fn is_empty(&self) -> bool {
        self.data.is_empty()
    }

    pub fn iter(&self) -> std::slice::Iter<'_, T> {
        self.data.iter()
    }
}
