// ==========================================
// AFOCS 电报生成系统 - ULD 合计
// ==========================================
// 职责: 行李 ULD 与货物 ULD 同类型合并, 生成 TTL 行
// 记号: LD3 / LD3-45 / LD6
// ==========================================

use crate::domain::telex::NO_CARGO_MARKER;
use regex::Regex;
use std::sync::OnceLock;
use tracing::debug;

fn uld_token_regex() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    RE.get_or_init(|| Regex::new(r"(\d+)(LD3(?:-45)?|LD6)").expect("uld token pattern"))
}

fn uld_tokens_only_regex() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    RE.get_or_init(|| {
        Regex::new(r"^(?:\d+(?:LD3(?:-45)?|LD6)\s*)+$").expect("uld tokens-only pattern")
    })
}

/// 合并同类型 ULD 记号
///
/// 扫描 `<数量><记号>`，按记号求和（保持首次出现顺序），
/// 以空格连接输出；不匹配的文本被丢弃。
pub fn merge_same_type_tokens(text: &str) -> String {
    let upper = text.to_uppercase();
    let mut merged: Vec<(String, u64)> = Vec::new();

    for caps in uld_token_regex().captures_iter(&upper) {
        // 记号只含数字，解析失败即溢出，按上限计
        let count: u64 = caps[1].parse().unwrap_or(u64::MAX);
        let label = &caps[2];
        match merged.iter_mut().find(|(l, _)| l == label) {
            Some((_, total)) => *total = total.saturating_add(count),
            None => merged.push((label.to_string(), count)),
        }
    }

    merged
        .iter()
        .map(|(label, total)| format!("{}{}", total, label))
        .collect::<Vec<_>>()
        .join(" ")
}

/// 文本是否完全由 ULD 记号组成（允许空格分隔，允许混合类型）
pub fn is_uld_tokens_only(text: &str) -> bool {
    uld_tokens_only_regex().is_match(text.trim().to_uppercase().as_str())
}

/// 生成 TTL 行内容
///
/// - 货物为 NIL → 仅行李
/// - 货物全部为 ULD 记号 → 合并同类型
/// - 其他自由文本 → 原样拼接，不合并
pub fn totals_line(bag_label: &str, cargo_uld: &str) -> String {
    let cargo = cargo_uld.trim();

    if cargo.eq_ignore_ascii_case(NO_CARGO_MARKER) {
        return bag_label.to_string();
    }

    if is_uld_tokens_only(cargo) {
        return merge_same_type_tokens(&format!("{} {}", bag_label, cargo));
    }

    debug!(cargo, "货物描述非 ULD 记号，按原文拼接");
    format!("{} {}", bag_label, cargo).trim().to_string()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_merge_same_label() {
        assert_eq!(merge_same_type_tokens("3LD3 2LD3"), "5LD3");
    }

    #[test]
    fn test_merge_mixed_labels_keep_first_seen_order() {
        assert_eq!(merge_same_type_tokens("3LD3 2LD6"), "3LD3 2LD6");
        assert_eq!(
            merge_same_type_tokens("1LD6 3LD3-45 2LD3 1LD3-45"),
            "1LD6 4LD3-45 2LD3"
        );
    }

    #[test]
    fn test_merge_is_idempotent_on_single_token() {
        let once = merge_same_type_tokens("5LD3");
        assert_eq!(once, "5LD3");
        assert_eq!(merge_same_type_tokens(&once), once);
    }

    #[test]
    fn test_merge_drops_other_text() {
        assert_eq!(merge_same_type_tokens("bag 2ld3 + remarks 1LD6"), "2LD3 1LD6");
        assert_eq!(merge_same_type_tokens("SEE REMARKS"), "");
    }

    #[test]
    fn test_merge_saturates_oversized_count() {
        let max = format!("{}LD3", u64::MAX);
        assert_eq!(merge_same_type_tokens("3LD3 99999999999999999999LD3"), max);
        assert_eq!(
            merge_same_type_tokens("99999999999999999999LD6 1LD3"),
            format!("{}LD6 1LD3", u64::MAX)
        );
        assert_eq!(totals_line("3LD3", "99999999999999999999LD3"), max);
    }

    #[test]
    fn test_is_uld_tokens_only() {
        assert!(is_uld_tokens_only("2LD3"));
        assert!(is_uld_tokens_only(" 2ld3 1LD3-45  3LD6 "));
        assert!(!is_uld_tokens_only("2LD3 SEE REMARKS"));
        assert!(!is_uld_tokens_only("LD3"));
        assert!(!is_uld_tokens_only(""));
    }

    #[test]
    fn test_totals_line_selection() {
        assert_eq!(totals_line("3LD3", "NIL"), "3LD3");
        assert_eq!(totals_line("3LD3", "nil"), "3LD3");
        assert_eq!(totals_line("3LD3", "2LD3"), "5LD3");
        assert_eq!(totals_line("3LD3", "2LD6"), "3LD3 2LD6");
        assert_eq!(totals_line("3LD3", "SEE REMARKS"), "3LD3 SEE REMARKS");
        assert_eq!(totals_line("3LD3", ""), "3LD3");
    }
}
