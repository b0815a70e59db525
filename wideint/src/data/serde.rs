use core::{fmt, marker::PhantomData};

use serde::{
    de,
    de::{MapAccess, SeqAccess, Visitor},
    ser::{SerializeStruct, SerializeTuple},
    Deserialize, Deserializer, Serialize, Serializer,
};
use wideint_internals::Word;

use crate::BigInt;

impl<const BITS: usize, const SIGNED: bool, W: Word, const LEN: usize>
    BigInt<BITS, SIGNED, W, LEN>
{
    /// Parses an unsigned hexadecimal string of raw bits, least significant
    /// digit last
    fn from_hex_str(s: &str) -> Result<Self, &'static str> {
        if s.is_empty() {
            return Err("`bits` string should be nonempty")
        }
        let mut res = Self::zero();
        for (k, c) in s.as_bytes().iter().rev().enumerate() {
            let v = match c {
                b'0'..=b'9' => c - b'0',
                b'a'..=b'f' => c - b'a' + 10,
                b'A'..=b'F' => c - b'A' + 10,
                _ => return Err("`bits` string contains a nonhexadecimal character"),
            };
            if v == 0 {
                continue
            }
            let off = k * 4;
            if (off >= BITS) || (((BITS - off) < 4) && ((v >> (BITS - off)) != 0)) {
                return Err("`bits` value does not fit in the bitwidth")
            }
            // a digit never straddles a word boundary, because the word size
            // is a multiple of 4
            res.words[off / W::BITS] |= W::from_u128(v as u128) << (off % W::BITS);
        }
        Ok(res)
    }
}

/// A `serde_support` impl
impl<const BITS: usize, const SIGNED: bool, W: Word, const LEN: usize> Serialize
    for BigInt<BITS, SIGNED, W, LEN>
{
    /// Serializes `self` in a platform and word size independent way. In
    /// human readable form, it serializes into a struct named "BigInt" with
    /// two fields "bw" and "bits". "bw" is the bitwidth in decimal, and
    /// "bits" are the raw bits as an unsigned hexadecimal string with only
    /// the significant digits kept.
    ///
    /// ```
    /// // Example using the `ron` crate. Note that it
    /// // omits the struct name which would be "BigInt".
    /// use ron::to_string;
    /// use wideint::UInt;
    ///
    /// let x = UInt::<100, 2>::from_u64(0xfedcba9876543210);
    /// assert_eq!(to_string(&x).unwrap(), "(bw:100,bits:\"fedcba9876543210\")");
    /// ```
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        // this is all done without allocation on our side. One byte per
        // hexadecimal digit is never more than `BITS` bytes.
        let mut buf = [0u8; BITS];
        let digits = (BITS + 3) / 4;
        let mut sig = 1;
        for i in (1..digits).rev() {
            if self.nibble(i) != 0 {
                sig = i + 1;
                break
            }
        }
        for i in 0..sig {
            let d = self.nibble(sig - 1 - i);
            buf[i] = if d < 10 { b'0' + d } else { b'a' + (d - 10) };
        }
        let str_buf = core::str::from_utf8(&buf[..sig]).unwrap();
        if serializer.is_human_readable() {
            let mut s = serializer.serialize_struct("BigInt", 2)?;
            s.serialize_field("bw", &BITS)?;
            s.serialize_field("bits", str_buf)?;
            s.end()
        } else {
            let mut s = serializer.serialize_tuple(2)?;
            s.serialize_element(&BITS)?;
            s.serialize_element(str_buf)?;
            s.end()
        }
    }
}

const FIELDS: &[&str] = &["bw", "bits"];

/// Helper for the deserialization impl
enum Field {
    Bw,
    Bits,
}

impl<'de> Deserialize<'de> for Field {
    fn deserialize<D>(deserializer: D) -> Result<Field, D::Error>
    where
        D: Deserializer<'de>,
    {
        struct FieldVisitor;

        impl<'de> Visitor<'de> for FieldVisitor {
            type Value = Field;

            fn expecting(&self, formatter: &mut fmt::Formatter) -> fmt::Result {
                formatter.write_str("`bw` or `bits`")
            }

            fn visit_str<E>(self, value: &str) -> Result<Field, E>
            where
                E: de::Error,
            {
                match value {
                    "bw" => Ok(Field::Bw),
                    "bits" => Ok(Field::Bits),
                    _ => Err(de::Error::unknown_field(value, FIELDS)),
                }
            }
        }

        deserializer.deserialize_identifier(FieldVisitor)
    }
}

struct BigIntVisitor<const BITS: usize, const SIGNED: bool, W: Word, const LEN: usize>(
    PhantomData<fn() -> W>,
);

impl<const BITS: usize, const SIGNED: bool, W: Word, const LEN: usize>
    BigIntVisitor<BITS, SIGNED, W, LEN>
{
    fn finish<E: de::Error>(bw: usize, bits: &str) -> Result<BigInt<BITS, SIGNED, W, LEN>, E> {
        if bw != BITS {
            return Err(de::Error::custom(
                "`bw` field does not equal `BITS` of the `BigInt` type this deserialization is \
                 happening on",
            ))
        }
        BigInt::from_hex_str(bits).map_err(de::Error::custom)
    }
}

impl<'de, const BITS: usize, const SIGNED: bool, W: Word, const LEN: usize> Visitor<'de>
    for BigIntVisitor<BITS, SIGNED, W, LEN>
{
    type Value = BigInt<BITS, SIGNED, W, LEN>;

    fn expecting(&self, formatter: &mut fmt::Formatter) -> fmt::Result {
        formatter.write_str(
            "struct BigInt consisting of a decimal bitwidth \"bw\" and a hexadecimal unsigned \
             integer \"bits\"",
        )
    }

    fn visit_map<V>(self, mut map: V) -> Result<Self::Value, V::Error>
    where
        V: MapAccess<'de>,
    {
        let mut bw: Option<usize> = None;
        let mut bits: Option<&str> = None;
        while let Some(key) = map.next_key()? {
            match key {
                Field::Bw => {
                    if bw.is_some() {
                        return Err(de::Error::duplicate_field("bw"))
                    }
                    bw = Some(map.next_value()?);
                }
                Field::Bits => {
                    if bits.is_some() {
                        return Err(de::Error::duplicate_field("bits"))
                    }
                    bits = Some(map.next_value()?);
                }
            }
        }
        let bw = bw.ok_or_else(|| de::Error::missing_field("bw"))?;
        let bits = bits.ok_or_else(|| de::Error::missing_field("bits"))?;
        Self::finish(bw, bits)
    }

    fn visit_seq<V>(self, mut seq: V) -> Result<Self::Value, V::Error>
    where
        V: SeqAccess<'de>,
    {
        let bw: usize = seq
            .next_element()?
            .ok_or_else(|| de::Error::invalid_length(0, &self))?;
        let bits: &str = seq
            .next_element()?
            .ok_or_else(|| de::Error::invalid_length(1, &self))?;
        Self::finish(bw, bits)
    }
}

/// A `serde_support` impl
impl<'de, const BITS: usize, const SIGNED: bool, W: Word, const LEN: usize> Deserialize<'de>
    for BigInt<BITS, SIGNED, W, LEN>
{
    /// Deserializes `self` in a platform and word size independent way.
    ///
    /// ```
    /// // Example using the `ron` crate. Note that it
    /// // omits the struct name which would be "BigInt".
    /// use ron::from_str;
    /// use wideint::UInt;
    ///
    /// let x = UInt::<100, 2>::from_u64(0xfedcba9876543210);
    /// let y: UInt<100, 2> = from_str("(bw:100,bits:\"fedcba9876543210\")").unwrap();
    /// assert_eq!(x, y);
    /// ```
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        deserializer.deserialize_struct("BigInt", FIELDS, BigIntVisitor(PhantomData))
    }
}
