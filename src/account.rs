const REFERENCE_PREFIX: &str = "MQR-00";
const REFERENCE_SUFFIX: &str = "-PP";

/// Strips the `MQR-00` prefix and then the `-PP` suffix from a reference id.
///
/// Either affix may be absent. The result is not checked for being numeric
/// or non-empty.
pub fn account_no(reference_id: &str) -> &str {
    let trimmed = reference_id
        .strip_prefix(REFERENCE_PREFIX)
        .unwrap_or(reference_id);
    trimmed.strip_suffix(REFERENCE_SUFFIX).unwrap_or(trimmed)
}
