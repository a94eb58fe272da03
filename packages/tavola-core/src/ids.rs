/// Identifier allocation for a scope (all lists, or one list's cards).
///
/// Ids are allocated from the ids currently present: one past the largest,
/// or 0 for an empty scope. Deleting never reclaims lower ids, but emptying
/// a scope restarts it at 0.

/// Next id for the given scope snapshot. Pure; input order is irrelevant.
pub fn next_id<I>(ids: I) -> u64
where
    I: IntoIterator<Item = u64>,
{
    ids.into_iter().max().map_or(0, |max| max + 1)
}
