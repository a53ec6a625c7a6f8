use std::{collections::HashMap, hash::Hash};

use crate::entities::{Direction, PositionNumber, TransactionRow};

/// Partitions `items` by `key_of`, keeping keys in the order they are first
/// encountered and items in their original relative order within each group.
pub(crate) fn group_first_seen<T, K, F>(items: Vec<T>, key_of: F) -> Vec<(K, Vec<T>)>
where
    K: Eq + Hash + Clone,
    F: Fn(&T) -> K,
{
    let mut index: HashMap<K, usize> = HashMap::new();
    let mut groups: Vec<(K, Vec<T>)> = Vec::new();
    for item in items {
        let key = key_of(&item);
        match index.get(&key) {
            Some(&i) => groups[i].1.push(item),
            None => {
                index.insert(key.clone(), groups.len());
                groups.push((key, vec![item]));
            }
        }
    }
    groups
}

/// Groups rows by position, ordered by ascending position number.
pub(crate) fn group_positions(rows: Vec<TransactionRow>) -> Vec<(PositionNumber, Vec<TransactionRow>)> {
    let mut groups = group_first_seen(rows, |r| r.position_number.clone());
    // Stable, so non-numeric positions keep their first-seen order.
    groups.sort_by(|(a, _), (b, _)| a.display_order(b));
    groups
}

pub(crate) fn group_work_groups(rows: Vec<TransactionRow>) -> Vec<(String, Vec<TransactionRow>)> {
    group_first_seen(rows, |r| r.work_group.clone())
}

pub(crate) fn group_base_items(
    rows: Vec<TransactionRow>,
    delimiter: &str,
) -> Vec<(String, Vec<TransactionRow>)> {
    group_first_seen(rows, |r| base_name(&r.item_name, delimiter).to_string())
}

/// Splits rows into income then expense, omitting a direction with no rows.
pub(crate) fn group_directions(rows: Vec<TransactionRow>) -> Vec<(Direction, Vec<TransactionRow>)> {
    let (income, expense): (Vec<_>, Vec<_>) = rows
        .into_iter()
        .partition(|r| r.transaction_type == Direction::Income);
    [(Direction::Income, income), (Direction::Expense, expense)]
        .into_iter()
        .filter(|(_, rows)| !rows.is_empty())
        .collect()
}

/// Base item name: the part of `item_name` before the first `delimiter`,
/// trimmed. Names without the delimiter are only trimmed.
///
/// A name that legitimately contains the delimiter is still cut at its first
/// occurrence.
pub fn base_name<'a>(item_name: &'a str, delimiter: &str) -> &'a str {
    match item_name.split_once(delimiter) {
        Some((head, _)) => head.trim(),
        None => item_name.trim(),
    }
}
