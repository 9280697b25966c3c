use std::collections::HashMap;

use super::RunEntries;

#[derive(Debug)]
struct KeyStat<'a> {
    key: &'a str,
    /// Number of distinct runs the key appears in.
    runs: usize,
    /// Last run index that contributed to `runs`.
    last_run: usize,
}

/// Distinct keys across all runs, most widespread first.
///
/// Keys are discovered scanning runs in input order and each run's entries in
/// extraction order; the discovery position breaks ties between keys seen in
/// the same number of runs.
pub(crate) fn frequency_ordered_keys(entries: &RunEntries) -> Vec<String> {
    let mut index: HashMap<&str, usize> = HashMap::new();
    let mut stats: Vec<KeyStat<'_>> = Vec::new();

    for (run_idx, run_entries) in entries.iter().enumerate() {
        for entry in run_entries {
            match index.get(entry.key.as_str()).copied() {
                Some(pos) => {
                    let stat = &mut stats[pos];
                    if stat.last_run != run_idx {
                        stat.runs += 1;
                        stat.last_run = run_idx;
                    }
                }
                None => {
                    index.insert(entry.key.as_str(), stats.len());
                    stats.push(KeyStat {
                        key: entry.key.as_str(),
                        runs: 1,
                        last_run: run_idx,
                    });
                }
            }
        }
    }

    // `stats` is in discovery order and `sort_by` is stable.
    stats.sort_by(|a, b| b.runs.cmp(&a.runs));
    stats.into_iter().map(|stat| stat.key.to_owned()).collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::table::KeyValueEntry;

    fn entries(runs: &[&[&str]]) -> RunEntries {
        runs.iter()
            .map(|keys| {
                keys.iter()
                    .map(|key| KeyValueEntry::new(*key, "v"))
                    .collect::<Vec<_>>()
            })
            .collect()
    }

    #[test]
    fn counts_runs_not_occurrences() {
        let keys = frequency_ordered_keys(&entries(&[&["a", "a", "a"], &["b"], &["b"]]));
        assert_eq!(keys, vec!["b", "a"]);
    }

    #[test]
    fn ties_keep_discovery_order() {
        let keys = frequency_ordered_keys(&entries(&[&["z", "y"], &["x", "y", "z"], &["w"]]));
        assert_eq!(keys, vec!["z", "y", "x", "w"]);
    }

    #[test]
    fn empty_runs_contribute_nothing() {
        assert!(frequency_ordered_keys(&entries(&[&[], &[]])).is_empty());
    }
}
