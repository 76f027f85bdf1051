use std::marker::PhantomData;

use serde::{Deserialize, Deserializer, de::Visitor};

use super::FieldMap;

struct FieldMapVisitor<N, V> {
    _n: PhantomData<N>,
    _v: PhantomData<V>,
}

impl<N, V> FieldMapVisitor<N, V> {
    fn new() -> Self {
        Self {
            _n: PhantomData,
            _v: PhantomData,
        }
    }
}

impl<'de, N, V> Visitor<'de> for FieldMapVisitor<N, V>
where
    N: Deserialize<'de> + PartialEq,
    V: Deserialize<'de>,
{
    type Value = FieldMap<N, V>;

    fn expecting(&self, formatter: &mut std::fmt::Formatter) -> std::fmt::Result {
        formatter.write_str("sequence of two-item tuples or a map")
    }

    fn visit_seq<A>(self, mut seq: A) -> Result<Self::Value, A::Error>
    where
        A: serde::de::SeqAccess<'de>,
    {
        let mut fields = FieldMap::new();

        while let Some((name, value)) = seq.next_element::<(N, V)>()? {
            fields.insert(name, value);
        }

        Ok(fields)
    }

    fn visit_map<A>(self, mut map: A) -> Result<Self::Value, A::Error>
    where
        A: serde::de::MapAccess<'de>,
    {
        let mut fields = FieldMap::new();

        while let Some((name, value)) = map.next_entry::<N, V>()? {
            fields.insert(name, value);
        }

        Ok(fields)
    }

    fn visit_unit<E: serde::de::Error>(self) -> Result<Self::Value, E> {
        Ok(FieldMap::new())
    }
}

impl<'de, N, V> Deserialize<'de> for FieldMap<N, V>
where
    N: Deserialize<'de> + PartialEq,
    V: Deserialize<'de>,
{
    fn deserialize<D>(deserializer: D) -> Result<FieldMap<N, V>, D::Error>
    where
        D: Deserializer<'de>,
    {
        deserializer.deserialize_any(FieldMapVisitor::new())
    }
}
