/// Post records as published in the static post list
use serde::{Deserialize, Deserializer};

use crate::error::LoadError;

/// One post. Missing or `null` fields read as empty, so a single sparse
/// record never takes the whole list down.
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(default)]
pub struct Post {
    #[serde(deserialize_with = "null_as_default")]
    pub title: String,
    #[serde(deserialize_with = "null_as_default")]
    pub slug: String,
    #[serde(deserialize_with = "null_as_default")]
    pub date: String,
    #[serde(deserialize_with = "null_as_default")]
    pub image: String,
    #[serde(deserialize_with = "null_as_default")]
    pub tags: Vec<String>,
    pub author: Option<String>,
    pub description: Option<String>,
}

fn null_as_default<'de, D, T>(deserializer: D) -> Result<T, D::Error>
where
    D: Deserializer<'de>,
    T: Default + Deserialize<'de>,
{
    Ok(Option::<T>::deserialize(deserializer)?.unwrap_or_default())
}

/// Decode the post list, keeping the first `limit` entries in file order
pub fn decode_posts(body: &str, limit: usize) -> Result<Vec<Post>, LoadError> {
    let mut posts: Vec<Post> = serde_json::from_str(body)?;
    posts.truncate(limit);
    Ok(posts)
}
