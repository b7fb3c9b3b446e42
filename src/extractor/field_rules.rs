// ==========================================
// AFOCS 电报生成系统 - 字段抽取规则
// ==========================================
// 职责: 航班号 / 当地日期 / 航线组 / 旅客人数 四条独立规则
// 红线: 规则只返回 Option,默认值由 FlightFacts::default 决定
// ==========================================

use crate::domain::flight::FlightFacts;
use crate::extractor::extractor_trait::FieldRule;
use chrono::NaiveDate;
use regex::Regex;
use std::sync::OnceLock;

/// 当地日期锚点
pub const LOCAL_DATE_MARKER: &str = "1ST LEG LCL DATE";

fn flight_number_regex() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    RE.get_or_init(|| Regex::new(r"\b([A-Z]{2}\d{3,4})\b").expect("flight number pattern"))
}

fn iso_date_regex() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    RE.get_or_init(|| Regex::new(r"\b(\d{4}-\d{2}-\d{2})\b").expect("iso date pattern"))
}

fn local_date_marker_regex() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    RE.get_or_init(|| {
        Regex::new(&format!("(?i){}", regex::escape(LOCAL_DATE_MARKER)))
            .expect("local date marker pattern")
    })
}

fn route_regex() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    RE.get_or_init(|| {
        Regex::new(r"\b([A-Z]{3})\s*/\s*([A-Z]{3})\b\s+(\d+)\s+(\d{2,3}[A-Z]?)")
            .expect("route pattern")
    })
}

fn pax_regex() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    RE.get_or_init(|| {
        Regex::new(r"PAX\s+F(\d+)-C(\d+)-Y(\d+)-T(\d+)").expect("pax pattern")
    })
}

// ==========================================
// 航班号: 两位大写字母 + 3~4 位数字
// ==========================================
pub struct FlightNumberRule;

impl FlightNumberRule {
    pub fn capture(&self, text: &str) -> Option<String> {
        flight_number_regex()
            .captures(text)
            .map(|caps| caps[1].to_string())
    }
}

impl FieldRule for FlightNumberRule {
    fn name(&self) -> &'static str {
        "flight_number"
    }

    fn apply(&self, text: &str, facts: &mut FlightFacts) -> bool {
        match self.capture(text) {
            Some(flt) => {
                facts.flight_number = flt;
                true
            }
            None => false,
        }
    }
}

// ==========================================
// 当地日期: 锚点之前的 YYYY-MM-DD → ddMON
// ==========================================
pub struct LocalDateRule;

impl LocalDateRule {
    /// 找到锚点之前第一个 ISO 日期（原样字符串）
    ///
    /// 锚点可出现多次，只要日期之后任意位置还有锚点即可
    pub fn locate<'a>(&self, text: &'a str) -> Option<&'a str> {
        let last_marker = local_date_marker_regex().find_iter(text).last()?;

        iso_date_regex()
            .captures_iter(text)
            .filter_map(|caps| caps.get(1))
            .find(|m| m.end() <= last_marker.start())
            .map(|m| m.as_str())
    }

    pub fn capture(&self, text: &str) -> Option<String> {
        let iso = self.locate(text)?;
        let date = NaiveDate::parse_from_str(iso, "%Y-%m-%d").ok()?;
        Some(format_ddmon(date))
    }
}

/// NaiveDate → ddMON（月份缩写为固定英文）
pub fn format_ddmon(date: NaiveDate) -> String {
    date.format("%d%b").to_string().to_uppercase()
}

impl FieldRule for LocalDateRule {
    fn name(&self) -> &'static str {
        "local_date"
    }

    fn apply(&self, text: &str, facts: &mut FlightFacts) -> bool {
        match self.capture(text) {
            Some(ddmon) => {
                facts.local_date_display = ddmon;
                true
            }
            None => false,
        }
    }
}

// ==========================================
// 航线组: DEP/ARR <注册号> <机型>
// ==========================================
// 四个字段整体命中或整体落默认
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RouteCapture {
    pub departure: String,
    pub arrival: String,
    pub registration: String,
    pub ship_type: String,
}

pub struct RouteRule;

impl RouteRule {
    pub fn capture(&self, text: &str) -> Option<RouteCapture> {
        let caps = route_regex().captures(text)?;
        Some(RouteCapture {
            departure: caps[1].to_string(),
            arrival: caps[2].to_string(),
            registration: caps[3].to_string(),
            ship_type: caps[4].to_string(),
        })
    }
}

impl FieldRule for RouteRule {
    fn name(&self) -> &'static str {
        "route"
    }

    fn apply(&self, text: &str, facts: &mut FlightFacts) -> bool {
        match self.capture(text) {
            Some(route) => {
                facts.departure_station = route.departure;
                facts.arrival_station = route.arrival;
                facts.registration = route.registration;
                facts.ship_type_raw = route.ship_type;
                true
            }
            None => false,
        }
    }
}

// ==========================================
// 旅客人数: PAX F<n>-C<n>-Y<n>-T<n>
// ==========================================
// F 舱解析但不保留
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PaxCounts {
    pub cabin_c: u32,
    pub cabin_y: u32,
    pub total_t: u32,
}

pub struct PaxRule;

impl PaxRule {
    pub fn capture(&self, text: &str) -> Option<PaxCounts> {
        let caps = pax_regex().captures(text)?;
        // 超出 u32 范围视同未命中
        Some(PaxCounts {
            cabin_c: caps[2].parse().ok()?,
            cabin_y: caps[3].parse().ok()?,
            total_t: caps[4].parse().ok()?,
        })
    }
}

impl FieldRule for PaxRule {
    fn name(&self) -> &'static str {
        "pax"
    }

    fn apply(&self, text: &str, facts: &mut FlightFacts) -> bool {
        match self.capture(text) {
            Some(pax) => {
                facts.pax_cabin_c = pax.cabin_c;
                facts.pax_cabin_y = pax.cabin_y;
                facts.pax_total_t = pax.total_t;
                true
            }
            None => false,
        }
    }
}
