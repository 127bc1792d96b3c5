//! Structured-document encoding through serde.
//!
//! The container is transparent: an absent value encodes as the format's null
//! and a present one exactly as its inner value would. Inside a derived
//! aggregate a missing field decodes as absent, the same as an explicit null.
//!
//! Transparency has one cost: nested containers collapse. `present(absent())`
//! of type `Option<Option<U>>` encodes as `null`, and `null` decodes as the
//! outer `absent()`, so the inner layer's presence does not survive a round
//! trip through a document. Only the outermost absent layer is recoverable.

use serde::de::{Deserialize, Deserializer};
use serde::ser::{Serialize, Serializer};

use crate::option::{Absent, Option, Present};

type StdOption<T> = std::option::Option<T>;

impl<T: Serialize> Serialize for Option<T> {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        match self {
            Present(value) => serializer.serialize_some(value),
            Absent => serializer.serialize_none(),
        }
    }
}

impl<'de, T: Deserialize<'de>> Deserialize<'de> for Option<T> {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        StdOption::<T>::deserialize(deserializer).map(Option::from)
    }

    fn deserialize_in_place<D>(deserializer: D, place: &mut Self) -> Result<(), D::Error>
    where
        D: Deserializer<'de>,
    {
        // a failed decode must not leave the previous value behind
        *place = Absent;
        *place = Self::deserialize(deserializer)?;
        Ok(())
    }
}

/// Emptiness predicate for serde's `skip_serializing_if`.
///
/// ```
/// use optional_value::{IsAbsent, Option};
/// use serde::Serialize;
///
/// #[derive(Serialize)]
/// struct Patch {
///     #[serde(skip_serializing_if = "IsAbsent::is_absent")]
///     name: Option<String>,
/// }
///
/// let json = serde_json::to_string(&Patch { name: Option::absent() }).unwrap();
/// assert_eq!(json, "{}");
/// ```
pub trait IsAbsent {
    fn is_absent(&self) -> bool;
}

impl<T> IsAbsent for Option<T> {
    fn is_absent(&self) -> bool {
        Option::is_absent(self)
    }
}

impl<T> IsAbsent for StdOption<T> {
    fn is_absent(&self) -> bool {
        self.is_none()
    }
}

#[cfg(feature = "json")]
mod json {
    use serde::de::DeserializeOwned;
    use serde::Serialize;
    use tracing::debug;

    use crate::error::{Error, Result};
    use crate::option::{Absent, Option};

    impl<T> Option<T> {
        /// Encodes the container as JSON: `null` when absent.
        pub fn to_json(&self) -> Result<String>
        where
            T: Serialize,
        {
            serde_json::to_string(self).map_err(Error::Encode)
        }

        pub fn from_json(json: &str) -> Result<Self>
        where
            T: DeserializeOwned,
        {
            serde_json::from_str(json).map_err(Error::Decode)
        }

        /// Decodes `json` into this container in place.
        ///
        /// On failure the container is left absent and the decoder's error is
        /// returned.
        pub fn decode_json(&mut self, json: &str) -> Result<()>
        where
            T: DeserializeOwned,
        {
            match serde_json::from_str(json) {
                Ok(decoded) => {
                    *self = decoded;
                    Ok(())
                }
                Err(err) => {
                    debug!(error = %err, "json decode failed, resetting to absent");
                    *self = Absent;
                    Err(Error::Decode(err))
                }
            }
        }
    }
}
