//! Byte-string serde support for the public group types
//!
//! Each type serializes as its canonical encoding (compressed for curve
//! points) and deserializes through the fully validating decoder.

use alloc::vec::Vec;
use core::fmt;
use core::marker::PhantomData;

use serde::de::{self, Deserialize, Deserializer, SeqAccess, Visitor};
use serde::ser::{Serialize, Serializer};

use bls12381_api::Serialize as Encoding;

use super::{G1Affine, G2Affine, Gt};

struct BytesVisitor<T>(PhantomData<T>);

impl<'de, T: Encoding> Visitor<'de> for BytesVisitor<T> {
    type Value = T;

    fn expecting(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} bytes", T::ENCODED_LEN)
    }

    fn visit_bytes<E: de::Error>(self, v: &[u8]) -> Result<T, E> {
        T::from_bytes(v).map_err(E::custom)
    }

    // Self-describing formats without a bytes type hand over a sequence
    fn visit_seq<A: SeqAccess<'de>>(self, mut seq: A) -> Result<T, A::Error> {
        let mut bytes = Vec::with_capacity(T::ENCODED_LEN);
        while let Some(b) = seq.next_element::<u8>()? {
            bytes.push(b);
        }
        T::from_bytes(&bytes).map_err(de::Error::custom)
    }
}

macro_rules! impl_serde_bytes {
    ($t:ty) => {
        impl Serialize for $t {
            fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
                serializer.serialize_bytes(&Encoding::to_bytes(self))
            }
        }

        impl<'de> Deserialize<'de> for $t {
            fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
                deserializer.deserialize_bytes(BytesVisitor::<$t>(PhantomData))
            }
        }
    };
}

impl_serde_bytes!(G1Affine);
impl_serde_bytes!(G2Affine);
impl_serde_bytes!(Gt);
