//! Dotted-path lookup and mutation over decoded JSON documents.
//!
//! A path like `"sap.app.version"` has no escape syntax, so a `.` in the path
//! may either separate nesting levels or be part of a literal key name. Both
//! readings are disambiguated structurally: at every mapping level the
//! resolver tries the longest run of remaining segments as one literal key
//! first, shrinking a segment at a time. A longer literal key therefore always
//! wins over deeper nesting on reads. Writes run the same longest-match search
//! for each candidate parent; see [`assign`] for how the two interact when a
//! literal dotted key and a nested structure coexist at one level.

use crate::errors::UpdateError;
use serde_json::Value;

/// Walks `doc` along `path` using greedy longest-match at each level.
///
/// Returns `PathNotFound` when no run of segments (down to a single one)
/// names a key at some level.
pub fn resolve<'a>(doc: &'a Value, path: &str) -> Result<&'a Value, UpdateError> {
    let parts: Vec<&str> = path.split('.').collect();
    let mut current = doc;
    let mut i = 0;
    while i < parts.len() {
        let Some(map) = current.as_object() else {
            return Err(UpdateError::PathNotFound(path.to_string()));
        };
        let mut matched = None;
        for j in (i + 1..=parts.len()).rev() {
            let key = parts[i..j].join(".");
            if let Some(next) = map.get(&key) {
                matched = Some((next, j));
                break;
            }
        }
        match matched {
            Some((next, j)) => {
                current = next;
                i = j;
            }
            None => return Err(UpdateError::PathNotFound(path.to_string())),
        }
    }
    Ok(current)
}

/// Mutable twin of [`resolve`]; same search, same failures.
pub fn resolve_mut<'a>(doc: &'a mut Value, path: &str) -> Result<&'a mut Value, UpdateError> {
    let parts: Vec<&str> = path.split('.').collect();
    let mut current = doc;
    let mut i = 0;
    while i < parts.len() {
        if !current.is_object() {
            return Err(UpdateError::PathNotFound(path.to_string()));
        }
        let mut matched_key = None;
        for j in (i + 1..=parts.len()).rev() {
            let key = parts[i..j].join(".");
            if current.as_object().is_some_and(|m| m.contains_key(&key)) {
                matched_key = Some((key, j));
                break;
            }
        }
        match matched_key {
            Some((key, j)) => {
                // contains_key above guarantees the entry exists
                let Some(next) = current.as_object_mut().and_then(|m| m.get_mut(&key)) else {
                    return Err(UpdateError::PathNotFound(path.to_string()));
                };
                current = next;
                i = j;
            }
            None => return Err(UpdateError::PathNotFound(path.to_string())),
        }
    }
    Ok(current)
}

/// Overwrites the value at `path` in place.
///
/// Split points are tried from the end of the path ("all but the last segment
/// is the parent" down to "the entire path is one leaf key"), resolving each
/// candidate parent with the same longest-match search as [`resolve`]. The
/// first split whose parent directly owns the candidate leaf key wins. The
/// target key must already exist; `assign` never creates keys.
///
/// When both a literal dotted key and an equivalent nested structure exist at
/// one level, the parent-first split search lands on the nested slot even
/// though [`resolve`] prefers the literal key. That corner keeps the split
/// iteration order stable instead of special-casing the conflict.
pub fn assign(doc: &mut Value, path: &str, value: Value) -> Result<(), UpdateError> {
    let parts: Vec<&str> = path.split('.').collect();
    let mut value = Some(value);
    for i in (1..=parts.len()).rev() {
        let parent_path = parts[..i - 1].join(".");
        let leaf = parts[i - 1..].join(".");

        let parent = if parent_path.is_empty() {
            &mut *doc
        } else {
            match resolve_mut(doc, &parent_path) {
                Ok(parent) => parent,
                Err(_) => continue,
            }
        };

        if let Some(slot) = parent.as_object_mut().and_then(|m| m.get_mut(&leaf)) {
            if let Some(value) = value.take() {
                *slot = value;
            }
            return Ok(());
        }
    }
    Err(UpdateError::PathNotFound(path.to_string()))
}
