//! Conflict-resolving merge of class names.

use std::collections::HashSet;

use super::groups::classify;
use super::token::ClassToken;

/// Merges class names, letting later names win conflicts.
///
/// Names are scanned from last to first. A name whose group (under the same
/// variants and importance) was already claimed by a later name is dropped;
/// a kept name claims its group plus every group it overrides. Names outside
/// any known group are only dropped when repeated exactly.
///
/// The survivors keep their original relative order.
pub fn merge_classes<'a, I>(names: I) -> String
where
    I: IntoIterator<Item = &'a str>,
{
    let names: Vec<&str> = names.into_iter().collect();
    let mut claimed: HashSet<String> = HashSet::new();
    let mut seen_unknown: HashSet<&str> = HashSet::new();
    let mut keep = vec![false; names.len()];

    for (i, &name) in names.iter().enumerate().rev() {
        let token = ClassToken::parse(name);
        match classify(token.base) {
            Some(group) => {
                let key = token.key(&group.id);
                if claimed.contains(&key) {
                    log::trace!("dropping class '{}': overridden by a later class", name);
                    continue;
                }
                claimed.insert(key);
                claimed.extend(group.overrides.iter().map(|id| token.key(id)));
            }
            None => {
                if !seen_unknown.insert(name) {
                    log::trace!("dropping duplicate class '{}'", name);
                    continue;
                }
            }
        }
        keep[i] = true;
    }

    let mut out = String::new();
    for (name, _) in names.iter().zip(keep).filter(|(_, kept)| *kept) {
        if !out.is_empty() {
            out.push(' ');
        }
        out.push_str(name);
    }
    out
}
