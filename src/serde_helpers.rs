use std::str::FromStr;

use serde::Deserialize as _;
use skrifa::Tag;

pub(crate) fn tag_ser<S>(tag: &Tag, serializer: S) -> Result<S::Ok, S::Error>
where
    S: serde::Serializer,
{
    serializer.serialize_str(&tag.to_string())
}

pub(crate) fn tag_de<'de, D>(deserializer: D) -> Result<Tag, D::Error>
where
    D: serde::Deserializer<'de>,
{
    let raw: String = String::deserialize(deserializer)?;
    Tag::from_str(&raw).map_err(serde::de::Error::custom)
}
