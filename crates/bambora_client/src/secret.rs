//! Masked wrapper for secret values.
//!
//! API keys and passcodes move through request builders and serialized
//! bodies; wrapping them keeps accidental `Debug`/`Display` output from
//! leaking them into logs. Serialization is deliberately transparent so a
//! secret placed in a request body reaches the wire.

use std::fmt;

use serde::{Deserialize, Deserializer, Serialize, Serializer};

/// Secret thing.
///
/// Access the value through [`PeekInterface::peek`] for a reference or
/// [`ExposeInterface::expose`] to consume the wrapper.
pub struct Secret<S = String> {
    inner_secret: S,
}

impl<S> Secret<S> {
    /// Take ownership of a secret value.
    pub fn new(secret: S) -> Self {
        Self {
            inner_secret: secret,
        }
    }
}

/// Interface to expose a reference to an inner secret.
pub trait PeekInterface<S> {
    /// Only method providing borrowed access to the secret value.
    fn peek(&self) -> &S;
}

/// Interface that consumes a secret and returns the inner value.
pub trait ExposeInterface<S> {
    /// Consume the secret and return the inner value.
    fn expose(self) -> S;
}

impl<S> PeekInterface<S> for Secret<S> {
    fn peek(&self) -> &S {
        &self.inner_secret
    }
}

impl<S> ExposeInterface<S> for Secret<S> {
    fn expose(self) -> S {
        self.inner_secret
    }
}

impl<S> From<S> for Secret<S> {
    fn from(secret: S) -> Self {
        Self::new(secret)
    }
}

impl From<&str> for Secret<String> {
    fn from(secret: &str) -> Self {
        Self::new(secret.to_owned())
    }
}

impl<S: Clone> Clone for Secret<S> {
    fn clone(&self) -> Self {
        Self {
            inner_secret: self.inner_secret.clone(),
        }
    }
}

impl<S: PartialEq> PartialEq for Secret<S> {
    fn eq(&self, other: &Self) -> bool {
        self.inner_secret == other.inner_secret
    }
}

impl<S: Eq + PartialEq> Eq for Secret<S> {}

impl<S> fmt::Debug for Secret<S> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "*** {} ***", std::any::type_name::<S>())
    }
}

impl<S> fmt::Display for Secret<S> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("*** redacted ***")
    }
}

impl<S: Serialize> Serialize for Secret<S> {
    fn serialize<Sr: Serializer>(&self, serializer: Sr) -> Result<Sr::Ok, Sr::Error> {
        self.inner_secret.serialize(serializer)
    }
}

impl<'de, S: Deserialize<'de>> Deserialize<'de> for Secret<S> {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        S::deserialize(deserializer).map(Self::new)
    }
}
