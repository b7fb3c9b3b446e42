// ==========================================
// AFOCS 电报生成系统 - 渲染层
// ==========================================
// 职责: 航班事实 + 调用方输入 + 行李需求 → 固定格式电报
// 红线: 渲染层不引入新的错误类型
// ==========================================

pub mod telex_template;

pub use telex_template::{render_message, TelexSlots, SENDER_ADDRESS, TELEX_TEMPLATE};
