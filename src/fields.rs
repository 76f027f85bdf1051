//! HTTP-style name-value fields
use std::{
    fmt::Display,
    ops::{Add, AddAssign},
};

mod de;
mod ser;

/// Data structure for HTTP-style name-value fields.
///
/// Fields keep the order in which names were first inserted. A name appears
/// at most once: inserting an existing name replaces its value without moving
/// it.
///
/// Names are compared exactly, without ASCII case folding, so `Host` and
/// `host` are two different fields.
///
/// No validation is performed on whether the names or values are valid HTTP
/// values.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FieldMap<N, V> {
    fields: Vec<(N, V)>,
}

impl<N: PartialEq, V> FieldMap<N, V> {
    pub fn new() -> Self {
        Self { fields: Vec::new() }
    }

    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            fields: Vec::with_capacity(capacity),
        }
    }

    pub fn len(&self) -> usize {
        self.fields.len()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    pub fn clear(&mut self) {
        self.fields.clear()
    }

    /// Sets the value of a field.
    ///
    /// An existing field keeps its position and the previous value is
    /// returned. A new field is placed at the end.
    pub fn insert(&mut self, name: N, value: V) -> Option<V> {
        match self.position(&name) {
            Some(index) => Some(std::mem::replace(&mut self.fields[index].1, value)),
            None => {
                self.fields.push((name, value));
                None
            }
        }
    }

    /// Inserts every pair in order using the same rules as [`Self::insert()`].
    pub fn merge<I, K, W>(&mut self, other: I)
    where
        I: IntoIterator<Item = (K, W)>,
        K: Into<N>,
        W: Into<V>,
    {
        for (name, value) in other {
            self.insert(name.into(), value.into());
        }
    }

    pub fn remove<Q>(&mut self, name: &Q) -> Option<V>
    where
        Q: ?Sized,
        N: PartialEq<Q>,
    {
        let index = self.position(name)?;
        Some(self.fields.remove(index).1)
    }

    pub fn contains_name<Q>(&self, name: &Q) -> bool
    where
        Q: ?Sized,
        N: PartialEq<Q>,
    {
        self.position(name).is_some()
    }

    pub fn get<Q>(&self, name: &Q) -> Option<&V>
    where
        Q: ?Sized,
        N: PartialEq<Q>,
    {
        self.position(name).map(|index| &self.fields[index].1)
    }

    pub fn get_mut<Q>(&mut self, name: &Q) -> Option<&mut V>
    where
        Q: ?Sized,
        N: PartialEq<Q>,
    {
        self.position(name).map(|index| &mut self.fields[index].1)
    }

    fn position<Q>(&self, name: &Q) -> Option<usize>
    where
        Q: ?Sized,
        N: PartialEq<Q>,
    {
        self.fields.iter().position(|(n, _v)| n == name)
    }

    pub fn iter(&self) -> FieldMapIter<'_, N, V> {
        FieldMapIter::new(&self.fields)
    }

    pub fn names(&self) -> impl Iterator<Item = &N> {
        self.fields.iter().map(|(n, _v)| n)
    }

    pub fn values(&self) -> impl Iterator<Item = &V> {
        self.fields.iter().map(|(_n, v)| v)
    }
}

impl<N: PartialEq, V> Default for FieldMap<N, V> {
    fn default() -> Self {
        Self::new()
    }
}

impl<N: PartialEq, V> IntoIterator for FieldMap<N, V> {
    type Item = (N, V);
    type IntoIter = std::vec::IntoIter<Self::Item>;

    fn into_iter(self) -> Self::IntoIter {
        self.fields.into_iter()
    }
}

impl<'a, N: PartialEq, V> IntoIterator for &'a FieldMap<N, V> {
    type Item = (&'a N, &'a V);
    type IntoIter = FieldMapIter<'a, N, V>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

impl<N: PartialEq, V> Extend<(N, V)> for FieldMap<N, V> {
    fn extend<T: IntoIterator<Item = (N, V)>>(&mut self, iter: T) {
        self.merge(iter)
    }
}

impl<N, V, K, W> FromIterator<(K, W)> for FieldMap<N, V>
where
    N: PartialEq,
    K: Into<N>,
    W: Into<V>,
{
    fn from_iter<T: IntoIterator<Item = (K, W)>>(iter: T) -> Self {
        let mut fields = Self::new();
        fields.merge(iter);
        fields
    }
}

impl<N, V, K, W, const S: usize> From<[(K, W); S]> for FieldMap<N, V>
where
    N: PartialEq,
    K: Into<N>,
    W: Into<V>,
{
    fn from(value: [(K, W); S]) -> Self {
        Self::from_iter(value)
    }
}

impl<N, V, I, K, W> Add<I> for FieldMap<N, V>
where
    N: PartialEq,
    I: IntoIterator<Item = (K, W)>,
    K: Into<N>,
    W: Into<V>,
{
    type Output = Self;

    fn add(mut self, rhs: I) -> Self::Output {
        self.merge(rhs);
        self
    }
}

impl<N, V, I, K, W> AddAssign<I> for FieldMap<N, V>
where
    N: PartialEq,
    I: IntoIterator<Item = (K, W)>,
    K: Into<N>,
    W: Into<V>,
{
    fn add_assign(&mut self, rhs: I) {
        self.merge(rhs);
    }
}

impl<N: PartialEq + Display, V: Display> Display for FieldMap<N, V> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        for (index, (name, value)) in self.fields.iter().enumerate() {
            if index > 0 {
                f.write_str("\r\n")?;
            }
            write!(f, "{}: {}", name, value)?;
        }

        Ok(())
    }
}

pub struct FieldMapIter<'a, N, V> {
    fields: std::slice::Iter<'a, (N, V)>,
}

impl<'a, N, V> FieldMapIter<'a, N, V> {
    fn new(fields: &'a [(N, V)]) -> Self {
        Self {
            fields: fields.iter(),
        }
    }
}

impl<'a, N, V> Iterator for FieldMapIter<'a, N, V> {
    type Item = (&'a N, &'a V);

    fn next(&mut self) -> Option<Self::Item> {
        self.fields.next().map(|(n, v)| (n, v))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_fields_generics() {
        let mut f = FieldMap::<String, String>::new();
        f.insert("a".to_string(), "a".to_string());
        f.get("a");

        let mut f = FieldMap::<&'static str, &'static str>::new();
        f.insert("a", "a");
        f.get(&"a");

        let mut f = FieldMap::<Vec<u8>, Vec<u8>>::new();
        f.insert(b"a".to_vec(), b"a".to_vec());
        f.get(b"a".as_slice());
    }

    #[test]
    fn test_fields_create() {
        let mut f = FieldMap::<&str, &str>::from_iter([("n1", "v1")]);

        assert!(!f.is_empty());
        assert_eq!(f.len(), 1);
        assert!(f.contains_name(&"n1"));
        assert_eq!(f.get(&"n1"), Some(&"v1"));

        f.clear();

        assert!(f.is_empty());
        assert_eq!(f.len(), 0);
        assert!(!f.contains_name(&"n1"));
        assert_eq!(f.get(&"n1"), None);
    }

    #[test]
    fn test_fields_insert_keeps_position() {
        let mut f = FieldMap::new();

        assert_eq!(f.insert("n1", "v1-0"), None);
        assert_eq!(f.insert("n2", "v2-0"), None);
        assert_eq!(f.insert("n1", "v1-1"), Some("v1-0"));

        assert_eq!(f.len(), 2);
        assert_eq!(
            f.iter().collect::<Vec<_>>(),
            vec![(&"n1", &"v1-1"), (&"n2", &"v2-0")]
        );

        assert_eq!(f.remove(&"n1"), Some("v1-1"));
        assert_eq!(f.remove(&"n1"), None);
        assert_eq!(f.names().collect::<Vec<_>>(), vec![&"n2"]);
    }

    #[test]
    fn test_fields_from_iter_collapses_duplicates() {
        let f = FieldMap::<&str, &str>::from_iter([("n1", "v1"), ("n2", "v2-0"), ("n2", "v2-1")]);

        assert_eq!(
            f.into_iter().collect::<Vec<_>>(),
            vec![("n1", "v1"), ("n2", "v2-1")]
        );
    }

    #[test]
    fn test_fields_add() {
        let a = FieldMap::<&str, &str>::from([("A", "1")]);
        let c = a.clone() + [("B", "2")];
        assert_eq!(c.names().collect::<Vec<_>>(), vec![&"A", &"B"]);
        assert_eq!(a.len(), 1);

        let mut d = FieldMap::<&str, &str>::from([("A", "1"), ("B", "2")]);
        d += [("A", "3")];
        assert_eq!(
            d.iter().collect::<Vec<_>>(),
            vec![(&"A", &"3"), (&"B", &"2")]
        );
    }

    #[test]
    fn test_fields_case_sensitive() {
        let f = FieldMap::<&str, &str>::from([("n1", "v1-0"), ("N1", "v1-1")]);

        assert_eq!(f.len(), 2);
        assert_eq!(f.get(&"n1"), Some(&"v1-0"));
        assert_eq!(f.get(&"N1"), Some(&"v1-1"));
    }

    #[test]
    fn test_fields_display() {
        let f = FieldMap::<&str, &str>::from([("n1", "v1"), ("n2", "v2")]);
        assert_eq!(f.to_string(), "n1: v1\r\nn2: v2");
        assert_eq!(FieldMap::<&str, &str>::new().to_string(), "");
    }
}
