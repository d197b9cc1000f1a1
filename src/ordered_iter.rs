use ::ordered_iter::OrderedMapIterator;
use crate::map::Iter;

impl<'a, K, V> OrderedMapIterator for Iter<'a, K, V> where K: Ord {
    type Key = &'a K;
    type Val = &'a V;
}
