use serde::{Serialize, Serializer};

use super::FieldMap;

/// Fields serialize as a list of `[name, value]` pairs in order.
impl<N, V> Serialize for FieldMap<N, V>
where
    N: Serialize,
    V: Serialize,
{
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        serializer.collect_seq(&self.fields)
    }
}
