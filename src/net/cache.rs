//! Normalized client-side cache of GraphQL results.
//!
//! DESIGN
//! ======
//! Any object carrying both `__typename` and `id` is stored once under
//! `Type:id` and replaced by a `{"__ref": "Type:id"}` marker wherever it
//! appears. Writing the same entity again merges its fields, so a mutation
//! result (e.g. `likePost`) updates every cached query that references that
//! post without a refetch.
//!
//! Query results are stored under their root field (`getPosts`). Mutation
//! results only merge entities; any change to a root listing goes through an
//! explicit `CacheUpdate` rule.

#[cfg(test)]
#[path = "cache_test.rs"]
mod cache_test;

use std::collections::HashMap;

use serde_json::{Map, Value};

/// Marker key used for entity references inside normalized values.
pub const REF_KEY: &str = "__ref";

/// Root field of the post-listing query.
pub const POSTS_ROOT: &str = "getPosts";

/// Root field of the post-creation mutation.
pub const CREATE_POST_ROOT: &str = "createPost";

/// Pure cache-update rule: prior cache plus mutation `data` to next cache.
pub type CacheUpdate = fn(NormalizedCache, &Value) -> NormalizedCache;

#[derive(Clone, Debug, Default, PartialEq)]
pub struct NormalizedCache {
    entities: HashMap<String, Map<String, Value>>,
    roots: Map<String, Value>,
}

/// `Type:id` key for an object, if it is an identifiable entity.
pub fn entity_key(object: &Map<String, Value>) -> Option<String> {
    let typename = object.get("__typename")?.as_str()?;
    let id = match object.get("id")? {
        Value::String(s) => s.clone(),
        Value::Number(n) => n.to_string(),
        _ => return None,
    };
    Some(format!("{typename}:{id}"))
}

impl NormalizedCache {
    pub fn new() -> Self {
        Self::default()
    }

    /// Store a query result: every root field of `data` is normalized and
    /// recorded.
    pub fn write_query(&mut self, data: &Value) {
        let Some(fields) = data.as_object() else {
            return;
        };
        for (field, value) in fields {
            let normalized = self.normalize(value);
            self.roots.insert(field.clone(), normalized);
        }
    }

    /// Merge the entities found in a mutation result without touching roots.
    pub fn merge_entities(&mut self, data: &Value) {
        let _ = self.normalize(data);
    }

    /// Replace one root field with `value`.
    pub fn write_root(&mut self, field: &str, value: &Value) {
        let normalized = self.normalize(value);
        self.roots.insert(field.to_owned(), normalized);
    }

    /// Denormalized value of a root field.
    pub fn read_root(&self, field: &str) -> Option<Value> {
        self.roots.get(field).map(|value| self.denormalize(value, &mut Vec::new()))
    }

    /// Normalized (reference-preserving) value of a root field.
    pub fn raw_root(&self, field: &str) -> Option<&Value> {
        self.roots.get(field)
    }

    /// Denormalized entity by key.
    pub fn entity(&self, key: &str) -> Option<Value> {
        self.entities.contains_key(key).then(|| self.resolve(key, &mut Vec::new()))
    }

    pub fn entity_count(&self) -> usize {
        self.entities.len()
    }

    /// Merge a mutation result and then run its update rule, if any.
    #[must_use]
    pub fn apply_mutation(mut self, data: &Value, update: Option<CacheUpdate>) -> Self {
        self.merge_entities(data);
        match update {
            Some(rule) => rule(self, data),
            None => self,
        }
    }

    fn normalize(&mut self, value: &Value) -> Value {
        match value {
            Value::Array(items) => Value::Array(items.iter().map(|item| self.normalize(item)).collect()),
            Value::Object(object) => {
                let fields: Map<String, Value> = object
                    .iter()
                    .map(|(name, field)| (name.clone(), self.normalize(field)))
                    .collect();
                match entity_key(object) {
                    Some(key) => {
                        self.entities.entry(key.clone()).or_default().extend(fields);
                        reference(&key)
                    }
                    None => Value::Object(fields),
                }
            }
            other => other.clone(),
        }
    }

    fn denormalize(&self, value: &Value, path: &mut Vec<String>) -> Value {
        match value {
            Value::Array(items) => Value::Array(items.iter().map(|item| self.denormalize(item, path)).collect()),
            Value::Object(object) => {
                if let Some(key) = reference_key(object) {
                    return self.resolve(key, path);
                }
                Value::Object(
                    object
                        .iter()
                        .map(|(name, field)| (name.clone(), self.denormalize(field, path)))
                        .collect(),
                )
            }
            other => other.clone(),
        }
    }

    fn resolve(&self, key: &str, path: &mut Vec<String>) -> Value {
        // A reference back to an entity being expanded stays a reference.
        if path.iter().any(|k| k == key) {
            return reference(key);
        }
        let Some(fields) = self.entities.get(key) else {
            return Value::Null;
        };
        path.push(key.to_owned());
        let resolved = fields
            .iter()
            .map(|(name, field)| (name.clone(), self.denormalize(field, path)))
            .collect();
        path.pop();
        Value::Object(resolved)
    }
}

fn reference(key: &str) -> Value {
    let mut object = Map::new();
    object.insert(REF_KEY.to_owned(), Value::String(key.to_owned()));
    Value::Object(object)
}

fn reference_key(object: &Map<String, Value>) -> Option<&str> {
    if object.len() != 1 {
        return None;
    }
    object.get(REF_KEY)?.as_str()
}

/// Update rule for `createPost`: prepend the new post to the cached
/// `getPosts` listing. No de-duplication. Without a cached listing the cache
/// is returned unchanged; the next `getPosts` fetch includes the post.
pub fn prepend_created_post(mut cache: NormalizedCache, data: &Value) -> NormalizedCache {
    let Some(created) = data.get(CREATE_POST_ROOT).filter(|v| v.is_object()) else {
        return cache;
    };
    let Some(Value::Array(existing)) = cache.roots.get(POSTS_ROOT).cloned() else {
        return cache;
    };
    let mut listing = Vec::with_capacity(existing.len() + 1);
    listing.push(cache.normalize(created));
    listing.extend(existing);
    cache.roots.insert(POSTS_ROOT.to_owned(), Value::Array(listing));
    cache
}
