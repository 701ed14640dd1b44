//! Wire format for [`Outcome`]: the ordered pair `(tag, payload)`.
//!
//! Other code pattern-matches against this exact two-element shape, so the
//! serde impls are written by hand instead of derived: `Failure("no user")`
//! serializes as `["failure", "no user"]` in JSON, not as an object or an
//! externally tagged enum.

use std::fmt;
use std::marker::PhantomData;

use serde::de::{self, Deserializer, SeqAccess, Visitor};
use serde::ser::{SerializeTuple, Serializer};
use serde::{Deserialize, Serialize};

use super::{Outcome, FAILURE_TAG, SUCCESS_TAG};

impl<F, S> Serialize for Outcome<F, S>
where
    F: Serialize,
    S: Serialize,
{
    fn serialize<Ser>(&self, serializer: Ser) -> Result<Ser::Ok, Ser::Error>
    where
        Ser: Serializer,
    {
        let mut pair = serializer.serialize_tuple(2)?;
        pair.serialize_element(self.tag())?;
        match self {
            Self::Failure(e) => pair.serialize_element(e)?,
            Self::Success(s) => pair.serialize_element(s)?,
        }
        pair.end()
    }
}

struct OutcomeVisitor<F, S> {
    marker: PhantomData<(F, S)>,
}

impl<'de, F, S> Visitor<'de> for OutcomeVisitor<F, S>
where
    F: Deserialize<'de>,
    S: Deserialize<'de>,
{
    type Value = Outcome<F, S>;

    fn expecting(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        formatter.write_str("a (tag, payload) pair tagged \"failure\" or \"success\"")
    }

    fn visit_seq<A>(self, mut seq: A) -> Result<Self::Value, A::Error>
    where
        A: SeqAccess<'de>,
    {
        let tag: String = seq
            .next_element()?
            .ok_or_else(|| de::Error::invalid_length(0, &self))?;
        match tag.as_str() {
            FAILURE_TAG => {
                let payload = seq
                    .next_element()?
                    .ok_or_else(|| de::Error::invalid_length(1, &self))?;
                Ok(Outcome::Failure(payload))
            }
            SUCCESS_TAG => {
                let payload = seq
                    .next_element()?
                    .ok_or_else(|| de::Error::invalid_length(1, &self))?;
                Ok(Outcome::Success(payload))
            }
            other => Err(de::Error::unknown_variant(other, &[FAILURE_TAG, SUCCESS_TAG])),
        }
    }
}

impl<'de, F, S> Deserialize<'de> for Outcome<F, S>
where
    F: Deserialize<'de>,
    S: Deserialize<'de>,
{
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        deserializer.deserialize_tuple(
            2,
            OutcomeVisitor {
                marker: PhantomData,
            },
        )
    }
}
