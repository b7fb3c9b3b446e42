// ==========================================
// AfocsExtractor 集成测试
// ==========================================
// 测试目标: 自由文本抽取的命中与占位回落
// ==========================================


use afocs_telex::domain::flight::{
    DATE_PLACEHOLDER, REGISTRATION_PLACEHOLDER, SHIP_TYPE_PLACEHOLDER, STATION_PLACEHOLDER,
    UNKNOWN_FLIGHT,
};
use afocs_telex::extractor::{extract, AfocsExtractor, FactExtractor, RouteRule};
use test_helpers::{build_afocs_text, SAMPLE_AFOCS};

#[test]
fn test_extract_sample_afocs() {
    let facts = extract(SAMPLE_AFOCS);

    assert_eq!(facts.flight_number, "KE123");
    assert_eq!(facts.local_date_display, "30AUG");
    assert_eq!(facts.departure_station, "NRT");
    assert_eq!(facts.arrival_station, "ICN");
    assert_eq!(facts.registration, "7741");
    assert_eq!(facts.ship_type_raw, "333");
    assert_eq!(facts.pax_cabin_c, 12);
    assert_eq!(facts.pax_cabin_y, 88);
    assert_eq!(facts.pax_total_t, 100);
}

#[test]
fn test_extract_is_deterministic() {
    let extractor = AfocsExtractor::new();
    assert_eq!(extractor.extract(SAMPLE_AFOCS), extractor.extract(SAMPLE_AFOCS));
}

#[test]
fn test_route_group_recovered_exactly() {
    let cases = [
        ("NRT/ICN 7741 333", ("NRT", "ICN", "7741", "333")),
        ("HND /GMP 8012 32Q", ("HND", "GMP", "8012", "32Q")),
        ("ICN/ LAX  2046  77W", ("ICN", "LAX", "2046", "77W")),
        ("CJU  /  PUS 801 321", ("CJU", "PUS", "801", "321")),
    ];

    for (route, (dep, arr, reg, ship)) in cases {
        let facts = extract(&format!("STATUS\n{}\nEND", route));
        assert_eq!(facts.departure_station, dep, "route={}", route);
        assert_eq!(facts.arrival_station, arr, "route={}", route);
        assert_eq!(facts.registration, reg, "route={}", route);
        assert_eq!(facts.ship_type_raw, ship, "route={}", route);
    }
}

#[test]
fn test_route_group_never_partial() {
    // 各种不完整的航线片段：四个字段必须同时为占位值
    for text in ["NRT/ICN", "NRT/ICN 7741", "NRT ICN 7741 333", "nrt/icn 7741 333"] {
        let facts = extract(text);
        assert_eq!(facts.departure_station, STATION_PLACEHOLDER, "text={}", text);
        assert_eq!(facts.arrival_station, STATION_PLACEHOLDER, "text={}", text);
        assert_eq!(facts.registration, REGISTRATION_PLACEHOLDER, "text={}", text);
        assert_eq!(facts.ship_type_raw, SHIP_TYPE_PLACEHOLDER, "text={}", text);
        assert!(facts.route_is_placeholder());
    }
    assert!(RouteRule.capture("NRT/ICN 7741").is_none());
}

#[test]
fn test_missing_fields_fall_back_independently() {
    // 仅有旅客人数
    let facts = extract("PAX F2-C010-Y150-T162");
    assert_eq!(facts.flight_number, UNKNOWN_FLIGHT);
    assert_eq!(facts.local_date_display, DATE_PLACEHOLDER);
    assert!(facts.route_is_placeholder());
    assert_eq!(facts.pax_total_t, 162);

    // 无旅客片段
    let facts = extract("FLT OZ1085");
    assert_eq!(facts.flight_number, "OZ1085");
    assert_eq!(
        (facts.pax_cabin_c, facts.pax_cabin_y, facts.pax_total_t),
        (0, 0, 0)
    );
}

#[test]
fn test_invalid_date_uses_placeholder() {
    let text = build_afocs_text("KE123", "2025-02-30", "NRT/ICN 7741 333", "PAX F0-C1-Y1-T2");
    let facts = extract(&text);
    assert_eq!(facts.local_date_display, DATE_PLACEHOLDER);
    // 其他字段不受影响
    assert_eq!(facts.flight_number, "KE123");
    assert_eq!(facts.pax_total_t, 2);
}

#[test]
fn test_date_month_abbreviation() {
    let text = build_afocs_text("KE001", "2026-12-01", "NRT/ICN 7741 333", "");
    assert_eq!(extract(&text).local_date_display, "01DEC");
}

#[test]
fn test_date_without_marker_is_placeholder() {
    let facts = extract("FLT KE123\n2025-08-30\nNRT/ICN 7741 333");
    assert_eq!(facts.local_date_display, DATE_PLACEHOLDER);
}

#[test]
fn test_malformed_input_never_panics() {
    let inputs = [
        "",
        "\n\n\n",
        "PAX F-C-Y-T",
        "9999-99-99 1ST LEG LCL DATE",
        "한글 텍스트 / 日本語 1ST LEG LCL DATE",
        "AB/CD 12 3",
    ];
    for input in inputs {
        let facts = extract(input);
        assert_eq!(facts.flight_number, UNKNOWN_FLIGHT, "input={:?}", input);
        assert_eq!(facts.local_date_display, DATE_PLACEHOLDER, "input={:?}", input);
        assert!(facts.route_is_placeholder(), "input={:?}", input);
        assert_eq!(
            (facts.pax_cabin_c, facts.pax_cabin_y, facts.pax_total_t),
            (0, 0, 0),
            "input={:?}",
            input
        );
    }
}
