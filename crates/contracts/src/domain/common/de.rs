use serde::{Deserialize, Deserializer};

/// Treats an explicit JSON `null` the same as a missing field.
///
/// The CMS emits `"tags": null` for records that never had the field filled.
pub fn null_as_default<'de, D, T>(deserializer: D) -> Result<T, D::Error>
where
    D: Deserializer<'de>,
    T: Default + Deserialize<'de>,
{
    Ok(Option::<T>::deserialize(deserializer)?.unwrap_or_default())
}
