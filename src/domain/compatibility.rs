/// Two header rows are compatible only when they are identical position by
/// position. No trimming or case folding is applied.
pub fn is_compatible(reference: &[String], candidate: &[String]) -> bool {
    reference.len() == candidate.len()
        && reference
            .iter()
            .zip(candidate)
            .all(|(expected, actual)| expected == actual)
}
