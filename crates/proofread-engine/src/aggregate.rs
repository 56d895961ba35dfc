use shared_types::Finding;

/// Concatenates finding sources in order. Nothing is sorted, merged or
/// dropped; duplicates across sources are kept.
pub fn aggregate<S, I>(sources: S) -> Vec<Finding>
where
    S: IntoIterator<Item = I>,
    I: IntoIterator<Item = Finding>,
{
    sources.into_iter().flatten().collect()
}
