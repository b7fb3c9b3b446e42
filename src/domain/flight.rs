// ==========================================
// AFOCS 电报生成系统 - 航班事实记录
// ==========================================
// 职责: 从 AFOCS 文本抽取出的航班事实（构建后只读）
// 红线: 每个字段都有确定的占位默认值
// ==========================================

use serde::{Deserialize, Serialize};

/// 航班号缺失时的占位
pub const UNKNOWN_FLIGHT: &str = "UNKNOWN";
/// 当地日期缺失或无法解析时的占位
pub const DATE_PLACEHOLDER: &str = "??";
/// 出发/到达站缺失时的占位
pub const STATION_PLACEHOLDER: &str = "???";
/// 注册号缺失时的占位
pub const REGISTRATION_PLACEHOLDER: &str = "????";
/// 机型缺失时的占位
pub const SHIP_TYPE_PLACEHOLDER: &str = "???";

/// 航班事实
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FlightFacts {
    pub flight_number: String,
    /// ddMON, 例如 30AUG
    pub local_date_display: String,
    pub departure_station: String,
    pub arrival_station: String,
    /// 注册号数字部分（电报中以 HL 前缀输出）
    pub registration: String,
    pub ship_type_raw: String,
    pub pax_cabin_c: u32,
    pub pax_cabin_y: u32,
    pub pax_total_t: u32,
}

impl Default for FlightFacts {
    fn default() -> Self {
        Self {
            flight_number: UNKNOWN_FLIGHT.to_string(),
            local_date_display: DATE_PLACEHOLDER.to_string(),
            departure_station: STATION_PLACEHOLDER.to_string(),
            arrival_station: STATION_PLACEHOLDER.to_string(),
            registration: REGISTRATION_PLACEHOLDER.to_string(),
            ship_type_raw: SHIP_TYPE_PLACEHOLDER.to_string(),
            pax_cabin_c: 0,
            pax_cabin_y: 0,
            pax_total_t: 0,
        }
    }
}

impl FlightFacts {
    /// 航线组（出发/到达/注册号/机型）是否全部为占位值
    pub fn route_is_placeholder(&self) -> bool {
        self.departure_station == STATION_PLACEHOLDER
            && self.arrival_station == STATION_PLACEHOLDER
            && self.registration == REGISTRATION_PLACEHOLDER
            && self.ship_type_raw == SHIP_TYPE_PLACEHOLDER
    }
}
