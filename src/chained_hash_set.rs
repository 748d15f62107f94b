//! ChainedHashSet: fixed bucket count, one `Vec<String>` chain per bucket.

use crate::rolling_hash;
use core::fmt;
use log::debug;

/// Where a key landed on a successful `add`.
#[derive(Copy, Clone, Debug, Eq, PartialEq, Hash)]
pub struct Placement {
    pub bucket: usize,
    /// Index within the chain; equals the chain length before the append.
    pub position: usize,
}

#[derive(Debug, Clone, Copy, Eq, PartialEq, thiserror::Error)]
pub enum BuildError {
    #[error("bucket count must be positive")]
    ZeroBuckets,
    #[error("bucket count {0} exceeds the 32-bit hash range")]
    TooManyBuckets(usize),
}

#[derive(Debug, Clone, Copy, Eq, PartialEq, thiserror::Error)]
pub enum AddError {
    #[error("key already exists")]
    Duplicate,
}

#[derive(Debug, Clone)]
pub struct ChainedHashSet {
    buckets: Vec<Vec<String>>,
    // Bucket count as the hash sees it; always equals `buckets.len()`.
    modulus: i32,
    count: usize,
}

impl ChainedHashSet {
    pub fn with_buckets(n: usize) -> Result<Self, BuildError> {
        if n == 0 {
            return Err(BuildError::ZeroBuckets);
        }
        let modulus = i32::try_from(n).map_err(|_| BuildError::TooManyBuckets(n))?;
        let mut buckets = Vec::with_capacity(n);
        buckets.resize_with(n, Vec::new);
        debug!("created table with {} buckets", n);
        Ok(Self {
            buckets,
            modulus,
            count: 0,
        })
    }

    /// Bucket index for `key`. Pure in `key` and the bucket count.
    #[inline]
    pub fn bucket_of(&self, key: &str) -> usize {
        rolling_hash::bucket_index(key, self.modulus)
    }

    pub fn bucket_count(&self) -> usize {
        self.buckets.len()
    }

    pub fn len(&self) -> usize {
        self.count
    }
    pub fn is_empty(&self) -> bool {
        self.count == 0
    }

    /// Append `key` to the end of its bucket's chain unless it is already
    /// present there. A duplicate leaves the table untouched.
    pub fn add(&mut self, key: impl Into<String>) -> Result<Placement, AddError> {
        let key = key.into();
        let bucket = self.bucket_of(&key);
        let chain = &mut self.buckets[bucket];
        if chain.iter().any(|k| *k == key) {
            debug!("Key already exists: {}", key);
            return Err(AddError::Duplicate);
        }
        let position = chain.len();
        debug!("Added successfully: {} (bucket {}, position {})", key, bucket, position);
        chain.push(key);
        self.count += 1;
        Ok(Placement { bucket, position })
    }

    /// Remove `key`, scanning its chain from the tail toward the head and
    /// taking the first match found there (the last occurrence).
    pub fn remove(&mut self, key: &str) -> Option<String> {
        let bucket = self.bucket_of(key);
        let chain = &mut self.buckets[bucket];
        let Some(pos) = chain.iter().rposition(|k| k == key) else {
            debug!("Key not found: {}", key);
            return None;
        };
        let removed = chain.remove(pos);
        self.count -= 1;
        debug!("Removed successfully: {}", removed);
        Some(removed)
    }

    pub fn contains(&self, key: &str) -> bool {
        let found = self.buckets[self.bucket_of(key)].iter().any(|k| k == key);
        if found {
            debug!("Key '{}' found", key);
        } else {
            debug!("Key '{}' not found", key);
        }
        found
    }

    /// The chain stored at bucket `i`, or `None` when `i` is out of range.
    pub fn bucket(&self, i: usize) -> Option<&[String]> {
        self.buckets.get(i).map(Vec::as_slice)
    }

    /// All chains in bucket order.
    pub fn buckets(&self) -> impl ExactSizeIterator<Item = &[String]> + '_ {
        self.buckets.iter().map(Vec::as_slice)
    }

    pub fn iter(&self) -> Iter<'_> {
        Iter {
            chains: self.buckets.iter(),
            current: Default::default(),
            remaining: self.count,
        }
    }

    /// Snapshot of every bucket as `"{index}: [k1, k2]"` lines.
    pub fn display(&self) -> String {
        self.to_string()
    }
}

impl fmt::Display for ChainedHashSet {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (i, chain) in self.buckets.iter().enumerate() {
            write!(f, "{}: [", i)?;
            for (j, key) in chain.iter().enumerate() {
                if j > 0 {
                    f.write_str(", ")?;
                }
                f.write_str(key)?;
            }
            f.write_str("]\n")?;
        }
        Ok(())
    }
}

/// Iterator over keys in bucket order, then chain order.
pub struct Iter<'a> {
    chains: core::slice::Iter<'a, Vec<String>>,
    current: core::slice::Iter<'a, String>,
    remaining: usize,
}

impl<'a> Iterator for Iter<'a> {
    type Item = &'a str;
    #[inline]
    fn next(&mut self) -> Option<Self::Item> {
        loop {
            if let Some(k) = self.current.next() {
                self.remaining -= 1;
                return Some(k.as_str());
            }
            self.current = self.chains.next()?.iter();
        }
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        (self.remaining, Some(self.remaining))
    }
}

impl ExactSizeIterator for Iter<'_> {}

impl<'a> IntoIterator for &'a ChainedHashSet {
    type Item = &'a str;
    type IntoIter = Iter<'a>;
    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}
