use std::collections::HashMap;

/// Running occurrence count per TLD.
///
/// Every key present has a count of at least one. The table only grows; it
/// lives as long as its owner and is never evicted.
#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct FrequencyTable {
    counts: HashMap<String, u64>,
}

impl FrequencyTable {
    pub fn new() -> Self {
        Self::default()
    }

    /// Counts one occurrence of `tld`, inserting it at 1 if unseen, and
    /// returns the updated table.
    pub fn record(&mut self, tld: &str) -> &HashMap<String, u64> {
        match self.counts.get_mut(tld) {
            Some(count) => *count += 1,
            None => {
                self.counts.insert(tld.to_string(), 1);
            }
        }
        &self.counts
    }

    /// Read-only view of the current counts.
    pub fn snapshot(&self) -> &HashMap<String, u64> {
        &self.counts
    }

    pub fn get(&self, tld: &str) -> Option<u64> {
        self.counts.get(tld).copied()
    }

    pub fn len(&self) -> usize {
        self.counts.len()
    }

    pub fn is_empty(&self) -> bool {
        self.counts.is_empty()
    }

    /// Sum of all counts.
    pub fn total(&self) -> u64 {
        self.counts.values().sum()
    }
}

impl<S: AsRef<str>> Extend<S> for FrequencyTable {
    fn extend<I: IntoIterator<Item = S>>(&mut self, iter: I) {
        for tld in iter {
            self.record(tld.as_ref());
        }
    }
}

impl<S: AsRef<str>> FromIterator<S> for FrequencyTable {
    fn from_iter<I: IntoIterator<Item = S>>(iter: I) -> Self {
        let mut table = FrequencyTable::new();
        table.extend(iter);
        table
    }
}

/// Orders `(tld, count)` pairs by count descending.
///
/// Equal counts fall back to the TLD in ascending byte order so that reports
/// are reproducible regardless of hash iteration order.
pub fn rank(counts: &HashMap<String, u64>) -> Vec<(&str, u64)> {
    let mut ranked: Vec<(&str, u64)> = counts
        .iter()
        .map(|(tld, count)| (tld.as_str(), *count))
        .collect();
    ranked.sort_unstable_by(|a, b| b.1.cmp(&a.1).then_with(|| a.0.cmp(b.0)));
    ranked
}

/// Bookkeeping for one pass over the input stream.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct RunSummary {
    pub lines_read: u64,
    pub recorded: u64,
    pub malformed: u64,
    pub reports: u64,
    pub distinct: usize,
}
