//! Named evaluation partitions.

use corpora_cuts::CutSet;

/// Insertion-ordered mapping from partition name to cut set.
///
/// Partitions are kept apart so each can be scored on its own. Names are
/// unique; inserting an existing name replaces its cut set in place.
#[derive(Clone, Debug, Default)]
pub struct Partitions {
    entries: Vec<(String, CutSet)>,
}

impl Partitions {
    pub fn new() -> Self {
        Self::default()
    }

    /// Insert or replace a partition, returning the previous cut set.
    pub fn insert(&mut self, name: impl Into<String>, cuts: CutSet) -> Option<CutSet> {
        let name = name.into();

        match self.entries.iter_mut().find(|(n, _)| *n == name) {
            Some((_, slot)) => Some(std::mem::replace(slot, cuts)),
            None => {
                self.entries.push((name, cuts));
                None
            }
        }
    }

    pub fn get(&self, name: &str) -> Option<&CutSet> {
        self.entries
            .iter()
            .find_map(|(n, cuts)| (n == name).then_some(cuts))
    }

    pub fn contains(&self, name: &str) -> bool {
        self.get(name).is_some()
    }

    /// Partition names in insertion order.
    pub fn names(&self) -> impl Iterator<Item = &str> {
        self.entries.iter().map(|(n, _)| n.as_str())
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &CutSet)> {
        self.entries.iter().map(|(n, cuts)| (n.as_str(), cuts))
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

impl IntoIterator for Partitions {
    type Item = (String, CutSet);
    type IntoIter = std::vec::IntoIter<(String, CutSet)>;

    fn into_iter(self) -> Self::IntoIter {
        self.entries.into_iter()
    }
}

impl<S: Into<String>> Extend<(S, CutSet)> for Partitions {
    fn extend<I: IntoIterator<Item = (S, CutSet)>>(&mut self, iter: I) {
        for (name, cuts) in iter {
            self.insert(name, cuts);
        }
    }
}

impl<S: Into<String>> FromIterator<(S, CutSet)> for Partitions {
    fn from_iter<I: IntoIterator<Item = (S, CutSet)>>(iter: I) -> Self {
        let mut partitions = Self::new();
        partitions.extend(iter);
        partitions
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use corpora_cuts::Cut;

    fn cuts(n: usize) -> CutSet {
        CutSet::from_cuts((0..n).map(|i| Cut::new(format!("c{i}"), 0.0, 1.0)).collect())
    }

    #[test]
    fn keeps_insertion_order() {
        let partitions: Partitions = [("b", cuts(1)), ("a", cuts(2)), ("c", cuts(3))]
            .into_iter()
            .collect();

        assert_eq!(partitions.names().collect::<Vec<_>>(), ["b", "a", "c"]);
        assert_eq!(partitions.len(), 3);
    }

    #[test]
    fn insert_replaces_in_place() {
        let mut partitions = Partitions::new();
        assert!(partitions.insert("x", cuts(1)).is_none());
        partitions.insert("y", cuts(1));

        let previous = partitions.insert("x", cuts(4)).unwrap();

        assert_eq!(previous.len().unwrap(), 1);
        assert_eq!(partitions.get("x").unwrap().len().unwrap(), 4);
        assert_eq!(partitions.names().collect::<Vec<_>>(), ["x", "y"]);
    }

    #[test]
    fn missing_partition() {
        let partitions = Partitions::new();

        assert!(partitions.is_empty());
        assert!(!partitions.contains("aishell_test"));
        assert!(partitions.get("aishell_test").is_none());
    }
}
