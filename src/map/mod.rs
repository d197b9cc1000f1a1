//! An ordered map based on a red-black tree.

mod node;

#[cfg(feature = "quickcheck")]
mod quickcheck;

use compare::{Compare, Natural};
use crate::error::{Error, Result};
use log::debug;
use self::node::{Dir, Left, Right, Tree};
use std::fmt::{self, Debug};
use std::ops;

/// An ordered map based on a red-black tree.
///
/// Keys are unique: inserting a key that is already present is rejected and leaves the map
/// unchanged.
///
/// The behavior of this map is undefined if a key's ordering relative to any other key changes
/// while the key is in the map. This is normally only possible through `Cell`, `RefCell`, or
/// unsafe code.
#[derive(Clone)]
pub struct OrderedMap<K, V, C = Natural<K>> where C: Compare<K> {
    tree: Tree<K, V>,
    cmp: C,
}

impl<K, V> OrderedMap<K, V> where K: Ord {
    /// Creates an empty map ordered according to the natural order of its keys.
    ///
    /// # Examples
    ///
    /// ```
    /// use rbmap::OrderedMap;
    ///
    /// let mut map = OrderedMap::new();
    ///
    /// map.insert(2, "b").unwrap();
    /// map.insert(1, "a").unwrap();
    /// map.insert(3, "c").unwrap();
    ///
    /// let mut it = map.iter();
    /// assert_eq!(it.next(), Some((&1, &"a")));
    /// assert_eq!(it.next(), Some((&2, &"b")));
    /// assert_eq!(it.next(), Some((&3, &"c")));
    /// assert_eq!(it.next(), None);
    /// ```
    pub fn new() -> OrderedMap<K, V> { OrderedMap::with_cmp(compare::natural()) }
}

impl<K, V, C> OrderedMap<K, V, C> where C: Compare<K> {
    /// Creates an empty map ordered according to the given comparator.
    ///
    /// # Examples
    ///
    /// ```
    /// use compare::{Compare, natural};
    /// use rbmap::OrderedMap;
    ///
    /// let mut map = OrderedMap::with_cmp(natural().rev());
    ///
    /// map.insert(2, "b").unwrap();
    /// map.insert(1, "a").unwrap();
    /// map.insert(3, "c").unwrap();
    ///
    /// assert_eq!(map.first(), Some(&3));
    /// assert_eq!(map.last(), Some(&1));
    /// ```
    pub fn with_cmp(cmp: C) -> OrderedMap<K, V, C> {
        OrderedMap { tree: Tree::new(), cmp: cmp }
    }

    /// Checks if the map is empty.
    pub fn is_empty(&self) -> bool { self.tree.root().is_none() }

    /// Returns the number of entries in the map.
    pub fn len(&self) -> usize { self.tree.len() }

    /// Returns a reference to the map's comparator.
    pub fn cmp(&self) -> &C { &self.cmp }

    /// Inserts an entry into the map, rebalancing as needed.
    ///
    /// Fails with `Error::DuplicateKey` if the key is already present, in which case the map is
    /// not modified and the given entry is dropped.
    ///
    /// # Examples
    ///
    /// ```
    /// use rbmap::{Error, OrderedMap};
    ///
    /// let mut map = OrderedMap::new();
    ///
    /// assert_eq!(map.insert("'A'ahu 'ili kao", 1), Ok(()));
    /// assert_eq!(map.insert("'A'ahu 'ili kao", 2), Err(Error::DuplicateKey));
    /// assert_eq!(map[&"'A'ahu 'ili kao"], 1);
    /// assert_eq!(map.len(), 1);
    /// ```
    pub fn insert(&mut self, key: K, value: V) -> Result<()> {
        match self.tree.insert(&self.cmp, key, value) {
            Ok(_) => Ok(()),
            Err(_) => {
                debug!("rejected duplicate key ({} entries)", self.len());
                Err(Error::DuplicateKey)
            }
        }
    }

    /// Checks if the map contains the given key.
    ///
    /// # Examples
    ///
    /// ```
    /// use rbmap::OrderedMap;
    ///
    /// let mut map = OrderedMap::new();
    /// assert!(!map.contains_key(&1));
    /// map.insert(1, "a").unwrap();
    /// assert!(map.contains_key(&1));
    /// ```
    pub fn contains_key<Q: ?Sized>(&self, key: &Q) -> bool where C: Compare<Q, K> {
        self.tree.find(&self.cmp, key).is_some()
    }

    /// Returns a reference to the value associated with the given key, or `None` if the map
    /// does not contain the key.
    pub fn get<Q: ?Sized>(&self, key: &Q) -> Option<&V> where C: Compare<Q, K> {
        self.tree.find(&self.cmp, key).map(|id| &self.tree[id].value)
    }

    /// Returns a mutable reference to the value associated with the given key, or `None` if the
    /// map does not contain the key.
    ///
    /// # Examples
    ///
    /// ```
    /// use rbmap::OrderedMap;
    ///
    /// let mut map = OrderedMap::new();
    /// map.insert(1, "a").unwrap();
    ///
    /// if let Some(value) = map.get_mut(&1) { *value = "b"; }
    /// assert_eq!(map[&1], "b");
    /// ```
    pub fn get_mut<Q: ?Sized>(&mut self, key: &Q) -> Option<&mut V> where C: Compare<Q, K> {
        match self.tree.find(&self.cmp, key) {
            Some(id) => Some(&mut self.tree[id].value),
            None => None,
        }
    }

    /// Returns the map's minimum key, or `None` if the map is empty.
    ///
    /// # Examples
    ///
    /// ```
    /// use rbmap::OrderedMap;
    ///
    /// let mut map = OrderedMap::new();
    /// assert_eq!(map.first(), None);
    ///
    /// map.insert(2, "b").unwrap();
    /// map.insert(1, "a").unwrap();
    /// assert_eq!(map.first(), Some(&1));
    /// ```
    pub fn first(&self) -> Option<&K> { self.first_key_value().map(|e| e.0) }

    /// Returns the map's maximum key, or `None` if the map is empty.
    pub fn last(&self) -> Option<&K> { self.last_key_value().map(|e| e.0) }

    /// Returns the entry with the minimum key, or `None` if the map is empty.
    pub fn first_key_value(&self) -> Option<(&K, &V)> { self.extremum::<Left>() }

    /// Returns the entry with the maximum key, or `None` if the map is empty.
    pub fn last_key_value(&self) -> Option<(&K, &V)> { self.extremum::<Right>() }

    fn extremum<D: Dir>(&self) -> Option<(&K, &V)> {
        self.tree.root().map(|root| {
            let node = &self.tree[self.tree.extremum::<D>(root)];
            (&node.key, &node.value)
        })
    }

    /// Returns the key immediately before the given key.
    ///
    /// # Errors
    ///
    /// `Error::EmptyTree` if the map is empty, `Error::NotFound` if the key is not in the map and
    /// `Error::NoPredecessor` if it is the minimum.
    ///
    /// # Examples
    ///
    /// ```
    /// use rbmap::{Error, OrderedMap};
    ///
    /// let mut map = OrderedMap::new();
    /// assert_eq!(map.predecessor(&1), Err(Error::EmptyTree));
    ///
    /// map.insert(1, "a").unwrap();
    /// map.insert(3, "c").unwrap();
    ///
    /// assert_eq!(map.predecessor(&3), Ok(&1));
    /// assert_eq!(map.predecessor(&1), Err(Error::NoPredecessor));
    /// assert_eq!(map.predecessor(&2), Err(Error::NotFound));
    /// ```
    pub fn predecessor<Q: ?Sized>(&self, key: &Q) -> Result<&K> where C: Compare<Q, K> {
        self.neighbor::<Left, Q>(key, Error::NoPredecessor)
    }

    /// Returns the key immediately after the given key.
    ///
    /// # Errors
    ///
    /// `Error::EmptyTree` if the map is empty, `Error::NotFound` if the key is not in the map and
    /// `Error::NoSuccessor` if it is the maximum.
    ///
    /// # Examples
    ///
    /// ```
    /// use rbmap::{Error, OrderedMap};
    ///
    /// let mut map = OrderedMap::new();
    /// map.insert(1, "a").unwrap();
    /// map.insert(3, "c").unwrap();
    ///
    /// assert_eq!(map.successor(&1), Ok(&3));
    /// assert_eq!(map.successor(&3), Err(Error::NoSuccessor));
    /// ```
    pub fn successor<Q: ?Sized>(&self, key: &Q) -> Result<&K> where C: Compare<Q, K> {
        self.neighbor::<Right, Q>(key, Error::NoSuccessor)
    }

    fn neighbor<D: Dir, Q: ?Sized>(&self, key: &Q, boundary: Error) -> Result<&K>
        where C: Compare<Q, K> {

        if self.is_empty() { return Err(Error::EmptyTree); }
        let id = self.tree.find(&self.cmp, key).ok_or(Error::NotFound)?;
        self.tree.neighbor::<D>(id).map(|id| &self.tree[id].key).ok_or(boundary)
    }

    /// Returns an iterator over the map's entries with immutable references to the values.
    ///
    /// The iterator yields the entries in ascending order according to the map's comparator.
    ///
    /// # Examples
    ///
    /// ```
    /// use rbmap::OrderedMap;
    ///
    /// let mut map = OrderedMap::new();
    ///
    /// map.insert(2, "b").unwrap();
    /// map.insert(1, "a").unwrap();
    /// map.insert(3, "c").unwrap();
    ///
    /// assert_eq!(map.iter().collect::<Vec<_>>(), [(&1, &"a"), (&2, &"b"), (&3, &"c")]);
    /// assert_eq!(map.iter().rev().next(), Some((&3, &"c")));
    /// ```
    pub fn iter(&self) -> Iter<K, V> { Iter(node::Iter::new(&self.tree)) }

    /// Returns an iterator over the map's keys in ascending order.
    pub fn keys(&self) -> Keys<K, V> { Keys(self.iter()) }

    /// Returns an iterator over the map's values in ascending order of their keys.
    pub fn values(&self) -> Values<K, V> { Values(self.iter()) }

    /// Returns an iterator over the keys that contain `needle`, in ascending order.
    ///
    /// Every entry is visited. The empty needle matches every key.
    ///
    /// # Examples
    ///
    /// ```
    /// use rbmap::OrderedMap;
    ///
    /// let mut map = OrderedMap::new();
    ///
    /// map.insert("Na kai 'ewalu.", ()).unwrap();
    /// map.insert("La'i lua ke kai.", ()).unwrap();
    /// map.insert("Nānā i ke kumu.", ()).unwrap();
    ///
    /// assert_eq!(map.search_keys("kai").collect::<Vec<_>>(),
    ///     [&"La'i lua ke kai.", &"Na kai 'ewalu."]);
    /// ```
    pub fn search_keys<'a, 'n>(&'a self, needle: &'n str) -> SearchKeys<'a, 'n, K, V>
        where K: AsRef<str> {

        SearchKeys { iter: self.iter(), needle: needle }
    }

    /// Returns an iterator over the keys whose values' search text contains `needle`, in
    /// ascending order.
    ///
    /// Every entry is visited. The empty needle matches every entry.
    ///
    /// # Examples
    ///
    /// ```
    /// use rbmap::OrderedMap;
    ///
    /// let mut map = OrderedMap::new();
    ///
    /// map.insert(2, "two").unwrap();
    /// map.insert(1, "one").unwrap();
    /// map.insert(3, "three").unwrap();
    ///
    /// assert_eq!(map.search_values("t").collect::<Vec<_>>(), [&2, &3]);
    /// ```
    pub fn search_values<'a, 'n>(&'a self, needle: &'n str) -> SearchValues<'a, 'n, K, V>
        where V: Searchable {

        SearchValues { iter: self.iter(), needle: needle }
    }
}

impl<K, V, C> Debug for OrderedMap<K, V, C> where K: Debug, V: Debug, C: Compare<K> {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "{{")?;

        let mut it = self.iter();

        if let Some((k, v)) = it.next() {
            write!(f, "{:?}: {:?}", k, v)?;
            for (k, v) in it { write!(f, ", {:?}: {:?}", k, v)?; }
        }

        write!(f, "}}")
    }
}

impl<K, V, C> Default for OrderedMap<K, V, C> where C: Compare<K> + Default {
    fn default() -> OrderedMap<K, V, C> { OrderedMap::with_cmp(Default::default()) }
}

/// Entries whose keys are already present are skipped.
impl<K, V, C> Extend<(K, V)> for OrderedMap<K, V, C> where C: Compare<K> {
    fn extend<I: IntoIterator<Item=(K, V)>>(&mut self, it: I) {
        for (k, v) in it { let _ = self.insert(k, v); }
    }
}

impl<K, V, C> FromIterator<(K, V)> for OrderedMap<K, V, C> where C: Compare<K> + Default {
    fn from_iter<I: IntoIterator<Item=(K, V)>>(it: I) -> OrderedMap<K, V, C> {
        let mut map: OrderedMap<K, V, C> = Default::default();
        map.extend(it);
        map
    }
}

impl<'q, K, V, C, Q: ?Sized> ops::Index<&'q Q> for OrderedMap<K, V, C>
    where C: Compare<K> + Compare<Q, K> {

    type Output = V;

    /// # Panics
    ///
    /// Panics if the map does not contain the key.
    fn index(&self, key: &Q) -> &V { self.get(key).expect("key not found") }
}

impl<'a, K, V, C> IntoIterator for &'a OrderedMap<K, V, C> where C: Compare<K> {
    type Item = (&'a K, &'a V);
    type IntoIter = Iter<'a, K, V>;
    fn into_iter(self) -> Iter<'a, K, V> { self.iter() }
}

impl<K, V, C> PartialEq for OrderedMap<K, V, C> where K: PartialEq, V: PartialEq, C: Compare<K> {
    fn eq(&self, other: &OrderedMap<K, V, C>) -> bool {
        self.len() == other.len() && self.iter().eq(other.iter())
    }
}

impl<K, V, C> Eq for OrderedMap<K, V, C> where K: Eq, V: Eq, C: Compare<K> {}

/// A value with a designated text field for substring search.
///
/// See [`OrderedMap::search_values`](struct.OrderedMap.html#method.search_values).
pub trait Searchable {
    /// Returns the text that value searches match against.
    fn search_text(&self) -> &str;
}

impl Searchable for str {
    fn search_text(&self) -> &str { self }
}

impl Searchable for String {
    fn search_text(&self) -> &str { self }
}

impl<'a, T: ?Sized> Searchable for &'a T where T: Searchable {
    fn search_text(&self) -> &str { (**self).search_text() }
}

/// An iterator over the map's entries with immutable references to the values.
///
/// # Examples
///
/// Acquire through [`OrderedMap::iter`](struct.OrderedMap.html#method.iter) or the
/// `IntoIterator` trait:
///
/// ```
/// use rbmap::OrderedMap;
///
/// let mut map = OrderedMap::new();
///
/// map.insert(2, "b").unwrap();
/// map.insert(1, "a").unwrap();
/// map.insert(3, "c").unwrap();
///
/// for (key, value) in &map {
///     println!("{:?}: {:?}", key, value);
/// }
/// ```
pub struct Iter<'a, K: 'a, V: 'a>(node::Iter<'a, K, V>);

impl<'a, K, V> Clone for Iter<'a, K, V> {
    fn clone(&self) -> Iter<'a, K, V> { Iter(self.0.clone()) }
}

impl<'a, K, V> Iterator for Iter<'a, K, V> {
    type Item = (&'a K, &'a V);
    fn next(&mut self) -> Option<(&'a K, &'a V)> { self.0.next() }
    fn size_hint(&self) -> (usize, Option<usize>) { self.0.size_hint() }
}

impl<'a, K, V> DoubleEndedIterator for Iter<'a, K, V> {
    fn next_back(&mut self) -> Option<(&'a K, &'a V)> { self.0.next_back() }
}

impl<'a, K, V> ExactSizeIterator for Iter<'a, K, V> {}

/// An iterator over the map's keys.
///
/// Acquire through [`OrderedMap::keys`](struct.OrderedMap.html#method.keys).
pub struct Keys<'a, K: 'a, V: 'a>(Iter<'a, K, V>);

impl<'a, K, V> Clone for Keys<'a, K, V> {
    fn clone(&self) -> Keys<'a, K, V> { Keys(self.0.clone()) }
}

impl<'a, K, V> Iterator for Keys<'a, K, V> {
    type Item = &'a K;
    fn next(&mut self) -> Option<&'a K> { self.0.next().map(|e| e.0) }
    fn size_hint(&self) -> (usize, Option<usize>) { self.0.size_hint() }
}

impl<'a, K, V> DoubleEndedIterator for Keys<'a, K, V> {
    fn next_back(&mut self) -> Option<&'a K> { self.0.next_back().map(|e| e.0) }
}

impl<'a, K, V> ExactSizeIterator for Keys<'a, K, V> {}

/// An iterator over the map's values.
///
/// Acquire through [`OrderedMap::values`](struct.OrderedMap.html#method.values).
pub struct Values<'a, K: 'a, V: 'a>(Iter<'a, K, V>);

impl<'a, K, V> Clone for Values<'a, K, V> {
    fn clone(&self) -> Values<'a, K, V> { Values(self.0.clone()) }
}

impl<'a, K, V> Iterator for Values<'a, K, V> {
    type Item = &'a V;
    fn next(&mut self) -> Option<&'a V> { self.0.next().map(|e| e.1) }
    fn size_hint(&self) -> (usize, Option<usize>) { self.0.size_hint() }
}

impl<'a, K, V> DoubleEndedIterator for Values<'a, K, V> {
    fn next_back(&mut self) -> Option<&'a V> { self.0.next_back().map(|e| e.1) }
}

impl<'a, K, V> ExactSizeIterator for Values<'a, K, V> {}

/// An iterator over the keys containing a substring.
///
/// Acquire through [`OrderedMap::search_keys`](struct.OrderedMap.html#method.search_keys).
pub struct SearchKeys<'a, 'n, K: 'a, V: 'a> {
    iter: Iter<'a, K, V>,
    needle: &'n str,
}

impl<'a, 'n, K, V> Iterator for SearchKeys<'a, 'n, K, V> where K: AsRef<str> {
    type Item = &'a K;

    fn next(&mut self) -> Option<&'a K> {
        let needle = self.needle;
        self.iter.find(|e| AsRef::<str>::as_ref(e.0).contains(needle)).map(|e| e.0)
    }

    fn size_hint(&self) -> (usize, Option<usize>) { (0, self.iter.size_hint().1) }
}

/// An iterator over the keys whose values' search text contains a substring.
///
/// Acquire through [`OrderedMap::search_values`](struct.OrderedMap.html#method.search_values).
pub struct SearchValues<'a, 'n, K: 'a, V: 'a> {
    iter: Iter<'a, K, V>,
    needle: &'n str,
}

impl<'a, 'n, K, V> Iterator for SearchValues<'a, 'n, K, V> where V: Searchable {
    type Item = &'a K;

    fn next(&mut self) -> Option<&'a K> {
        let needle = self.needle;
        self.iter.find(|e| e.1.search_text().contains(needle)).map(|e| e.0)
    }

    fn size_hint(&self) -> (usize, Option<usize>) { (0, self.iter.size_hint().1) }
}
