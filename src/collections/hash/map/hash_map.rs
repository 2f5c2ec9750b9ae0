use std::borrow::Borrow;
use std::fmt::{self, Debug, Display, Formatter};
use std::hash::{BuildHasher, Hash, RandomState};
use std::num::NonZero;

use super::{AddError, DuplicateKey, Iter, KeyNotFound, Keys, NullKey, Values, ValuesMut};
use crate::collections::linked::SinglyLinkedList;
use crate::util::fmt::{DebugEntries, DebugRaw};

/// The number of buckets used by [`HashMap::new`] and [`HashMap::with_hasher`].
pub const DEFAULT_BUCKETS: usize = 16;

/// A map of keys to values which relies on the keys implementing [`Hash`], using separate
/// chaining: every bucket is a [`SinglyLinkedList`] of the entries whose keys hash to it.
///
/// The number of buckets is chosen on creation and never changes. The map doesn't resize, so once
/// the number of entries is large compared to the number of buckets, every operation degrades
/// towards a linear scan.
///
/// Each key appears at most once across all buckets. Adding a key that is already present is an
/// error rather than a replacement, see [`HashMap::add`].
///
/// It is a logic error for keys in a HashMap to be manipulated in a way that changes their hash.
/// Because of this, HashMap's API prevents mutable access to its keys.
///
/// # Time Complexity
/// For this analysis of time complexity, variables are defined as follows:
/// - `n`: The number of items in the HashMap.
/// - `b`: The number of buckets.
///
/// | Method | Complexity |
/// |-|-|
/// | `len` | `O(1)` |
/// | `add` | `O(1)`*, `O(n)` |
/// | `get` | `O(1)`*, `O(n)` |
/// | `remove` | `O(1)`*, `O(n)` |
/// | `contains_key` | `O(1)`*, `O(n)` |
/// | `clear` | `O(n + b)` |
///
/// \* Each of these scans a single bucket, which averages `n / b` entries when the hasher spreads
/// keys evenly. If every key collides, the scan covers all `n`.
#[derive(Clone)]
pub struct HashMap<K: Hash + Eq, V, B: BuildHasher = RandomState> {
    pub(crate) buckets: Box<[Bucket<K, V>]>,
    pub(crate) len: usize,
    pub(crate) hasher: B,
}

pub(crate) type Bucket<K, V> = SinglyLinkedList<(K, V)>;

impl<K: Hash + Eq, V> HashMap<K, V> {
    /// Creates a new, empty HashMap with [`DEFAULT_BUCKETS`] buckets, hashing with
    /// [`RandomState`].
    pub fn new() -> HashMap<K, V> {
        HashMap::with_hasher(RandomState::new())
    }

    /// Creates a new, empty HashMap with the provided number of buckets, hashing with
    /// [`RandomState`].
    pub fn with_buckets(count: NonZero<usize>) -> HashMap<K, V> {
        HashMap::with_buckets_and_hasher(count, RandomState::new())
    }
}

impl<K: Hash + Eq, V, B: BuildHasher> HashMap<K, V, B> {
    /// Creates a new, empty HashMap with [`DEFAULT_BUCKETS`] buckets and the provided `hasher`.
    pub fn with_hasher(hasher: B) -> HashMap<K, V, B> {
        HashMap {
            buckets: empty_buckets(DEFAULT_BUCKETS),
            len: 0,
            hasher,
        }
    }

    /// Creates a new, empty HashMap with the provided number of buckets and `hasher`.
    pub fn with_buckets_and_hasher(count: NonZero<usize>, hasher: B) -> HashMap<K, V, B> {
        HashMap {
            buckets: empty_buckets(count.get()),
            len: 0,
            hasher,
        }
    }

    /// Returns the number of entries in the HashMap, across all buckets.
    pub const fn len(&self) -> usize {
        self.len
    }

    /// Returns true if the HashMap contains no entries.
    pub const fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Returns the number of buckets, which is fixed for the life of the HashMap.
    pub fn bucket_count(&self) -> usize {
        self.buckets.len()
    }

    /// Adds the provided `key`-`value` pair to the end of the key's bucket.
    ///
    /// Unlike the standard library's `insert`, an existing entry is never replaced: if the map
    /// already contains an equal key, [`DuplicateKey`] is returned and the map is left unchanged.
    pub fn add(&mut self, key: K, value: V) -> Result<(), DuplicateKey> {
        let bucket = self.bucket_mut(&key);

        if bucket.iter().any(|(existing, _)| *existing == key) {
            return Err(DuplicateKey);
        }

        bucket.add_last((key, value));
        self.len += 1;
        Ok(())
    }

    /// Adds the provided `key`-`value` pair like [`HashMap::add`], but for a key that may be
    /// missing. A missing key can't be hashed, so it is rejected with [`NullKey`].
    pub fn add_optional(&mut self, key: Option<K>, value: V) -> Result<(), AddError> {
        let key = key.ok_or(NullKey)?;
        Ok(self.add(key, value)?)
    }

    /// Returns a reference to the value associated with the provided `key`.
    pub fn get<Q>(&self, key: &Q) -> Result<&V, KeyNotFound>
    where
        // Q represents a borrowed version of K, where equality and hashing carry over the borrow.
        K: Borrow<Q>,
        Q: Hash + Eq + ?Sized,
    {
        self.bucket(key)
            .iter()
            .find(|(existing, _)| existing.borrow() == key)
            .map(|(_, value)| value)
            .ok_or(KeyNotFound)
    }

    /// Returns a mutable reference to the value associated with the provided `key`.
    pub fn get_mut<Q>(&mut self, key: &Q) -> Result<&mut V, KeyNotFound>
    where
        K: Borrow<Q>,
        Q: Hash + Eq + ?Sized,
    {
        self.bucket_mut(key)
            .iter_mut()
            .find(|(existing, _)| existing.borrow() == key)
            .map(|(_, value)| value)
            .ok_or(KeyNotFound)
    }

    /// Returns true if there is a value associated with the provided `key`.
    pub fn contains_key<Q>(&self, key: &Q) -> bool
    where
        K: Borrow<Q>,
        Q: Hash + Eq + ?Sized,
    {
        self.get(key).is_ok()
    }

    /// Removes the entry associated with `key`, returning it if it exists. Other entries in the
    /// same bucket keep their relative order.
    pub fn remove_entry<Q>(&mut self, key: &Q) -> Option<(K, V)>
    where
        K: Borrow<Q>,
        Q: Hash + Eq + ?Sized,
    {
        let removed = self.bucket_mut(key).remove_where(|(existing, _)| existing.borrow() == key)?;
        self.len -= 1;
        Some(removed)
    }

    /// Removes the entry associated with `key`. Returns whether an entry was removed.
    pub fn remove<Q>(&mut self, key: &Q) -> bool
    where
        K: Borrow<Q>,
        Q: Hash + Eq + ?Sized,
    {
        self.remove_entry(key).is_some()
    }

    /// Removes every entry from the HashMap, keeping the same number of buckets.
    pub fn clear(&mut self) {
        for bucket in self.buckets.iter_mut() {
            bucket.clear();
        }
        self.len = 0;
    }

    /// Returns an iterator over all key-value pairs in the HashMap, as references. Entries come
    /// out in bucket order, then in the order they were added to each bucket.
    pub fn iter(&self) -> Iter<'_, K, V> {
        self.into_iter()
    }

    /// Returns an iterator over all keys in the HashMap, as references.
    pub fn keys(&self) -> Keys<'_, K, V> {
        Keys(self.iter())
    }

    /// Returns an iterator over all values in the HashMap, as references.
    pub fn values(&self) -> Values<'_, K, V> {
        Values(self.iter())
    }

    /// Returns an iterator over all values in the HashMap, as mutable references.
    pub fn values_mut(&mut self) -> ValuesMut<'_, K, V> {
        ValuesMut {
            len: self.len,
            inner: self.buckets.iter_mut().flatten(),
        }
    }
}

impl<K: Hash + Eq, V, B: BuildHasher> HashMap<K, V, B> {
    /// Calculates the index of the bucket for the provided `hashable`. The hash is unsigned, so
    /// the index is always within `0..bucket_count`.
    pub(crate) fn bucket_index<H: Hash + ?Sized>(&self, hashable: &H) -> usize {
        let key_hash = self.hasher.hash_one(hashable);
        // The bucket count is never 0, having been created from a NonZero or DEFAULT_BUCKETS.
        (key_hash % self.bucket_count() as u64) as usize
    }

    pub(crate) fn bucket<H: Hash + ?Sized>(&self, hashable: &H) -> &Bucket<K, V> {
        &self.buckets[self.bucket_index(hashable)]
    }

    pub(crate) fn bucket_mut<H: Hash + ?Sized>(&mut self, hashable: &H) -> &mut Bucket<K, V> {
        let index = self.bucket_index(hashable);
        &mut self.buckets[index]
    }
}

fn empty_buckets<K, V>(count: usize) -> Box<[Bucket<K, V>]> {
    (0..count).map(|_| SinglyLinkedList::new()).collect()
}

impl<K: Hash + Eq, V, B: BuildHasher + Default> Default for HashMap<K, V, B> {
    fn default() -> Self {
        HashMap::with_hasher(B::default())
    }
}

impl<K: Hash + Eq + Debug, V: Debug, B: BuildHasher + Debug> Debug for HashMap<K, V, B> {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        let buckets = self.buckets.iter().map(|bucket| {
            if bucket.is_empty() {
                return DebugRaw("-".into());
            }

            DebugRaw(
                bucket
                    .iter()
                    .map(|(key, value)| format!("({key:?}: {value:?})"))
                    .collect::<Vec<_>>()
                    .join(" -> "),
            )
        });

        f.debug_struct("HashMap")
            .field("buckets", &DebugEntries(buckets))
            .field("len", &self.len)
            .field("hasher", &self.hasher)
            .finish()
    }
}

impl<K: Hash + Eq + Debug, V: Debug, B: BuildHasher> Display for HashMap<K, V, B> {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        f.debug_map().entries(self.iter()).finish()
    }
}
