use serde::de::{Deserialize, Deserializer, MapAccess, Visitor};
use std::collections::HashMap;
use std::fmt;
use std::marker::PhantomData;

#[derive(Debug, Clone)]
pub struct OrderedMap<T> {
    map: HashMap<String, T>,
    keys: Vec<String>,
}

impl<T> Default for OrderedMap<T> {
    fn default() -> Self {
        Self {
            map: HashMap::new(),
            keys: Vec::new(),
        }
    }
}

impl<T> OrderedMap<T> {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &T)> {
        self.keys.iter().filter_map(|key| {
            self.map.get(key).map(|value| (key.as_str(), value))
        })
    }

    pub fn values(&self) -> impl Iterator<Item = &T> {
        self.iter().map(|(_, value)| value)
    }

    pub fn insert(&mut self, key: String, value: T) -> Option<T> {
        if !self.map.contains_key(&key) {
            self.keys.push(key.clone());
        }
        self.map.insert(key, value)
    }

    pub fn get_mut(&mut self, key: &str) -> Option<&mut T> {
        self.map.get_mut(key)
    }

    pub fn len(&self) -> usize {
        self.keys.len()
    }

    pub fn is_empty(&self) -> bool {
        self.keys.is_empty()
    }
}

impl<'de, T: Deserialize<'de>> Deserialize<'de> for OrderedMap<T> {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        struct OrderedMapVisitor<T>(PhantomData<T>);

        impl<'de, T: Deserialize<'de>> Visitor<'de> for OrderedMapVisitor<T> {
            type Value = OrderedMap<T>;

            fn expecting(&self, formatter: &mut fmt::Formatter) -> fmt::Result {
                formatter.write_str("a map")
            }

            fn visit_map<A>(self, mut access: A) -> Result<Self::Value, A::Error>
            where
                A: MapAccess<'de>,
            {
                let mut map = OrderedMap::new();
                while let Some((key, value)) = access.next_entry::<String, T>()? {
                    map.insert(key, value);
                }
                Ok(map)
            }
        }

        deserializer.deserialize_map(OrderedMapVisitor(PhantomData))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn iter_preserves_insertion_order() {
        let mut map = OrderedMap::new();
        map.insert("zeta".to_string(), 1);
        map.insert("alpha".to_string(), 2);
        map.insert("mid".to_string(), 3);

        let keys: Vec<&str> = map.iter().map(|(key, _)| key).collect();
        assert_eq!(keys, vec!["zeta", "alpha", "mid"]);
    }

    #[test]
    fn reinsert_keeps_original_position() {
        let mut map = OrderedMap::new();
        map.insert("first".to_string(), 1);
        map.insert("second".to_string(), 2);
        let previous = map.insert("first".to_string(), 10);

        assert_eq!(previous, Some(1));
        assert_eq!(map.len(), 2);
        let entries: Vec<(&str, &i32)> = map.iter().collect();
        assert_eq!(entries, vec![("first", &10), ("second", &2)]);
    }

    #[test]
    fn deserialize_preserves_document_order() {
        let raw = r#"{"ebucks": 1, "airtime": 2, "vouchers": 3}"#;
        let map: OrderedMap<i32> = serde_json::from_str(raw).unwrap();

        let entries: Vec<(&str, &i32)> = map.iter().collect();
        assert_eq!(entries, vec![("ebucks", &1), ("airtime", &2), ("vouchers", &3)]);
    }

    #[test]
    fn empty_map() {
        let map: OrderedMap<i32> = OrderedMap::new();
        assert!(map.is_empty());
        assert_eq!(map.iter().count(), 0);
    }
}
