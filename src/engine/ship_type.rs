// ==========================================
// AFOCS 电报生成系统 - 机型显示规则
// ==========================================
// 规则: 3 开头 → A###, 7 开头 → B###, 其他原样
// ==========================================

/// 机型代码 → 显示代码
///
/// 输入先 TRIM + UPPER；无错误分支。
pub fn normalize_ship_type(raw: &str) -> String {
    let s = raw.trim().to_uppercase();
    match s.chars().next() {
        Some('3') => format!("A{}", s),
        Some('7') => format!("B{}", s),
        _ => s,
    }
}
