//! Generic command descriptors
//!
//! A descriptor is the untyped shape of a request as produced by a command
//! line: a verb, a collection name and an ordered key/value mapping. The
//! factory turns descriptors into typed [`Command`](crate::Command)s and
//! [`Filter::from_args`](crate::Filter::from_args) turns argument maps into
//! filters.

use serde::{Deserialize, Serialize};

use crate::errors::{BaseballError, Result};

/// Insertion-ordered string mapping
///
/// Re-inserting a key replaces its value without moving it.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Args {
    entries: Vec<(String, String)>,
}

impl Args {
    pub fn new() -> Self {
        Self::default()
    }

    /// Build arguments from alternating key/value tokens
    ///
    /// # Errors
    ///
    /// Returns `MissingArgument` when the last key has no value.
    pub fn from_pairs<S: AsRef<str>>(command: &str, tokens: &[S]) -> Result<Self> {
        let mut args = Args::new();
        for pair in tokens.chunks(2) {
            match pair {
                [key, value] => args.insert(key.as_ref(), value.as_ref()),
                [key] => {
                    return Err(BaseballError::MissingArgument {
                        command: command.to_string(),
                        key: key.as_ref().to_string(),
                    })
                }
                _ => {}
            }
        }
        Ok(args)
    }

    pub fn insert(&mut self, key: impl Into<String>, value: impl Into<String>) {
        let key = key.into();
        let value = value.into();
        match self.entries.iter_mut().find(|(k, _)| *k == key) {
            Some(entry) => entry.1 = value,
            None => self.entries.push((key, value)),
        }
    }

    pub fn get(&self, key: &str) -> Option<&str> {
        self.entries
            .iter()
            .find(|(k, _)| k == key)
            .map(|(_, v)| v.as_str())
    }

    pub fn contains_key(&self, key: &str) -> bool {
        self.get(key).is_some()
    }

    /// Iterate entries in insertion order
    pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> {
        self.entries.iter().map(|(k, v)| (k.as_str(), v.as_str()))
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

impl<K: Into<String>, V: Into<String>> FromIterator<(K, V)> for Args {
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        let mut args = Args::new();
        for (key, value) in iter {
            args.insert(key, value);
        }
        args
    }
}

/// Untyped command as produced by a command line
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct CommandDescriptor {
    pub verb: String,
    pub collection: String,
    pub args: Args,
}

impl CommandDescriptor {
    pub fn new(verb: impl Into<String>, collection: impl Into<String>, args: Args) -> Self {
        Self {
            verb: verb.into(),
            collection: collection.into(),
            args,
        }
    }

    /// Tokenize a command line
    ///
    /// Token 0 is the verb, token 1 (optional) the collection, and the
    /// remaining tokens are key/value pairs.
    ///
    /// # Errors
    ///
    /// Returns `MissingArgument` when there is no verb or a key has no value.
    pub fn from_tokens<S: AsRef<str>>(tokens: &[S]) -> Result<Self> {
        let (verb, rest) = tokens
            .split_first()
            .ok_or_else(|| BaseballError::MissingArgument {
                command: String::new(),
                key: "verb".to_string(),
            })?;
        let (collection, pairs) = match rest.split_first() {
            Some((collection, pairs)) => (collection.as_ref(), pairs),
            None => ("", rest),
        };
        let label = format!("{} {}", verb.as_ref(), collection);
        let args = Args::from_pairs(label.trim_end(), pairs)?;
        Ok(Self::new(verb.as_ref(), collection, args))
    }

    /// Human-readable `verb collection` label used in errors
    pub fn label(&self) -> String {
        if self.collection.is_empty() {
            self.verb.clone()
        } else {
            format!("{} {}", self.verb, self.collection)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_args_preserve_insertion_order() {
        let args: Args = [("homeTeam", "BOS"), ("dateFrom", "2021-04-01")]
            .into_iter()
            .collect();
        let keys: Vec<&str> = args.iter().map(|(k, _)| k).collect();
        assert_eq!(keys, vec!["homeTeam", "dateFrom"]);
    }

    #[test]
    fn test_args_reinsert_replaces_in_place() {
        let mut args = Args::new();
        args.insert("a", "1");
        args.insert("b", "2");
        args.insert("a", "3");

        assert_eq!(args.len(), 2);
        assert_eq!(args.get("a"), Some("3"));
        assert_eq!(args.iter().next(), Some(("a", "3")));
    }

    #[test]
    fn test_from_tokens() {
        let desc =
            CommandDescriptor::from_tokens(&["insert", "team", "TeamId", "BOS", "League", "AL"])
                .unwrap();
        assert_eq!(desc.verb, "insert");
        assert_eq!(desc.collection, "team");
        assert_eq!(desc.args.get("TeamId"), Some("BOS"));
        assert_eq!(desc.args.get("League"), Some("AL"));
    }

    #[test]
    fn test_from_tokens_verb_only() {
        let desc = CommandDescriptor::from_tokens(&["begin"]).unwrap();
        assert_eq!(desc.verb, "begin");
        assert!(desc.collection.is_empty());
        assert!(desc.args.is_empty());
        assert_eq!(desc.label(), "begin");
    }

    #[test]
    fn test_from_tokens_dangling_key() {
        let err = CommandDescriptor::from_tokens(&["insert", "park", "ParkId"]).unwrap_err();
        assert_eq!(
            err,
            BaseballError::MissingArgument {
                command: "insert park".to_string(),
                key: "ParkId".to_string(),
            }
        );
    }

    #[test]
    fn test_from_tokens_empty() {
        let tokens: [&str; 0] = [];
        assert!(matches!(
            CommandDescriptor::from_tokens(&tokens),
            Err(BaseballError::MissingArgument { .. })
        ));
    }
}
