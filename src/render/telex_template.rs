// ==========================================
// AFOCS 电报生成系统 - 电报模板
// ==========================================
// 职责: 固定格式电报 = 模板行 + 具名槽位
// 红线: 标签文字与空格为下游系统契约，不得改动
// ==========================================

use crate::domain::flight::FlightFacts;
use crate::domain::telex::{BagRequirement, TelexRequest};
use crate::engine::uld_merge::totals_line;

/// 发件地址（固定，不接受调用方输入）
pub const SENDER_ADDRESS: &str = "NRTFFOZ";

/// 电报模板，`{slot}` 为槽位
pub const TELEX_TEMPLATE: &[&str] = &[
    "QD {to1} {to2} {to3} {to4} {to5} {to6}",
    ".{sender}",
    "ADD INFO {flt}/{ddmon} {dep}/{arr} WT:KGS",
    "AA.  SHIP : HL {reg} ({ship})",
    "BB.  PAX : C-{pax_c} Y-{pax_y}",
    "CC.  CGO : {wgt} KG",
    "DD.  ULD : BAG : {bag}",
    "           CGO : {cgo}",
    "           TTL : {ttl}",
    "GTTL {wgt}/{name}",
];

/// 槽位取值
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TelexSlots {
    pub addressees: Vec<String>,
    pub flight_number: String,
    pub local_date: String,
    pub departure: String,
    pub arrival: String,
    pub registration: String,
    pub ship_type: String,
    pub pax_c: String,
    pub pax_y: String,
    pub weight: String,
    pub bag: String,
    pub cargo: String,
    pub totals: String,
    pub name: String,
}

impl TelexSlots {
    pub fn build(
        facts: &FlightFacts,
        request: &TelexRequest,
        bag: &BagRequirement,
        ship_type: &str,
    ) -> Self {
        Self {
            addressees: request
                .addressees
                .iter()
                .map(|a| a.trim().to_string())
                .collect(),
            flight_number: facts.flight_number.clone(),
            local_date: facts.local_date_display.clone(),
            departure: facts.departure_station.clone(),
            arrival: facts.arrival_station.clone(),
            registration: facts.registration.clone(),
            ship_type: ship_type.to_string(),
            pax_c: zero_pad3(facts.pax_cabin_c),
            pax_y: zero_pad3(facts.pax_cabin_y),
            weight: request.weight.clone(),
            bag: bag.label.clone(),
            cargo: request.cargo_uld.clone(),
            totals: totals_line(&bag.label, &request.cargo_uld),
            name: request.name.clone(),
        }
    }

    fn value(&self, slot: &str) -> Option<&str> {
        let v: &str = match slot {
            "to1" | "to2" | "to3" | "to4" | "to5" | "to6" => {
                let idx: usize = slot[2..].parse().ok()?;
                return Some(self.addressees.get(idx - 1).map(String::as_str).unwrap_or(""));
            }
            "sender" => SENDER_ADDRESS,
            "flt" => &self.flight_number,
            "ddmon" => &self.local_date,
            "dep" => &self.departure,
            "arr" => &self.arrival,
            "reg" => &self.registration,
            "ship" => &self.ship_type,
            "pax_c" => &self.pax_c,
            "pax_y" => &self.pax_y,
            "wgt" => &self.weight,
            "bag" => &self.bag,
            "cgo" => &self.cargo,
            "ttl" => &self.totals,
            "name" => &self.name,
            _ => return None,
        };
        Some(v)
    }

    /// 单行填充（单遍扫描，槽位值中的花括号不会被再次展开）
    pub fn fill(&self, line: &str) -> String {
        let mut out = String::with_capacity(line.len() + 16);
        let mut rest = line;

        while let Some(open) = rest.find('{') {
            out.push_str(&rest[..open]);
            let after = &rest[open + 1..];
            match after.find('}') {
                Some(close) => {
                    let slot = &after[..close];
                    match self.value(slot) {
                        Some(v) => out.push_str(v),
                        None => {
                            out.push('{');
                            out.push_str(slot);
                            out.push('}');
                        }
                    }
                    rest = &after[close + 1..];
                }
                None => {
                    out.push_str(&rest[open..]);
                    rest = "";
                }
            }
        }
        out.push_str(rest);
        out
    }

    /// 渲染全文，每行以 \n 结尾
    pub fn render(&self) -> String {
        let mut text = String::new();
        for (i, line) in TELEX_TEMPLATE.iter().enumerate() {
            let filled = self.fill(line);
            // 仅 QD 行去掉尾部空白（空收件地址）
            if i == 0 {
                text.push_str(filled.trim_end());
            } else {
                text.push_str(&filled);
            }
            text.push('\n');
        }
        text
    }
}

/// 三位补零
fn zero_pad3(n: u32) -> String {
    format!("{:03}", n)
}

/// 渲染电报
pub fn render_message(
    facts: &FlightFacts,
    request: &TelexRequest,
    bag: &BagRequirement,
    ship_type: &str,
) -> String {
    TelexSlots::build(facts, request, bag, ship_type).render()
}
