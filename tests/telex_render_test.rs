// ==========================================
// 电报渲染 / ULD 合计 测试
// ==========================================
// 测试目标: 固定格式契约 + TTL 行选择规则
// ==========================================


use afocs_telex::domain::types::BagRule;
use afocs_telex::engine::{merge_same_type_tokens, totals_line};
use afocs_telex::render::{render_message, TelexSlots, SENDER_ADDRESS};
use afocs_telex::{BagRequirement, FlightFacts};
use test_helpers::nrt_request;

fn facts() -> FlightFacts {
    FlightFacts {
        flight_number: "KE123".to_string(),
        local_date_display: "30AUG".to_string(),
        departure_station: "NRT".to_string(),
        arrival_station: "ICN".to_string(),
        registration: "7741".to_string(),
        ship_type_raw: "333".to_string(),
        pax_cabin_c: 12,
        pax_cabin_y: 88,
        pax_total_t: 100,
    }
}

#[test]
fn test_render_exact_layout() {
    let request = nrt_request();
    let bag = BagRequirement::new(3, BagRule::ExplicitAke);

    let text = render_message(&facts(), &request, &bag, "A333");

    let expected = "\
QD ICNODOZ NRTOJNH NRTKKOZ NRTFFOZ CDGCSXH
.NRTFFOZ
ADD INFO KE123/30AUG NRT/ICN WT:KGS
AA.  SHIP : HL 7741 (A333)
BB.  PAX : C-012 Y-088
CC.  CGO : 1250 KG
DD.  ULD : BAG : 3LD3
           CGO : NIL
           TTL : 3LD3
GTTL 1250/KIM
";
    assert_eq!(text, expected);
}

#[test]
fn test_render_placeholders_are_visible() {
    let request = nrt_request();
    let bag = BagRequirement::new(0, BagRule::ExplicitAke);

    let text = render_message(&FlightFacts::default(), &request, &bag, "???");
    assert!(text.contains("ADD INFO UNKNOWN/?? ???/??? WT:KGS\n"));
    assert!(text.contains("AA.  SHIP : HL ???? (???)\n"));
    assert!(text.contains("BB.  PAX : C-000 Y-000\n"));
}

#[test]
fn test_sender_line_ignores_caller_input() {
    let mut request = nrt_request();
    request.addressees[3] = "XXXXXXX".to_string();
    let bag = BagRequirement::new(1, BagRule::ExplicitAke);

    let text = render_message(&facts(), &request, &bag, "A333");
    let lines: Vec<&str> = text.lines().collect();
    assert_eq!(lines[1], format!(".{}", SENDER_ADDRESS));
}

#[test]
fn test_qd_line_with_empty_trailing_addressees() {
    let mut request = nrt_request();
    for slot in request.addressees.iter_mut().skip(2) {
        slot.clear();
    }
    let bag = BagRequirement::new(1, BagRule::ExplicitAke);

    let text = render_message(&facts(), &request, &bag, "A333");
    assert_eq!(text.lines().next(), Some("QD ICNODOZ NRTOJNH"));
}

#[test]
fn test_all_addressees_empty() {
    let mut request = nrt_request();
    request.addressees = Default::default();
    let bag = BagRequirement::new(1, BagRule::ExplicitAke);

    let text = render_message(&facts(), &request, &bag, "A333");
    assert_eq!(text.lines().next(), Some("QD"));
}

#[test]
fn test_cargo_line_is_verbatim() {
    let mut request = nrt_request();
    request.cargo_uld = "2ld3".to_string();
    let bag = BagRequirement::new(3, BagRule::ExplicitAke);

    let slots = TelexSlots::build(&facts(), &request, &bag, "A333");
    assert_eq!(slots.cargo, "2ld3");
    assert_eq!(slots.totals, "5LD3");

    let text = slots.render();
    assert!(text.contains("           CGO : 2ld3\n"));
    assert!(text.contains("           TTL : 5LD3\n"));
}

#[test]
fn test_totals_line_rules() {
    // NIL → 仅行李
    assert_eq!(totals_line("3LD3", "NIL"), "3LD3");
    // 同类型 → 合并
    assert_eq!(totals_line("3LD3", "2LD3"), "5LD3");
    // 混合类型 → 各自保留
    assert_eq!(totals_line("4LD3-45", "1LD3 2LD3-45"), "6LD3-45 1LD3");
    // 自由文本 → 原样拼接
    assert_eq!(totals_line("3LD3", "SEE REMARKS"), "3LD3 SEE REMARKS");
    assert_eq!(totals_line("3LD3", "2LD3 + BULK"), "3LD3 2LD3 + BULK");
}

#[test]
fn test_merge_properties() {
    assert_eq!(merge_same_type_tokens("3LD3 2LD3"), "5LD3");
    assert_eq!(merge_same_type_tokens("3LD3 2LD6"), "3LD3 2LD6");

    let merged = merge_same_type_tokens("1LD6 2LD3 3LD6");
    assert_eq!(merged, "4LD6 2LD3");
    assert_eq!(merge_same_type_tokens(&merged), merged);
}
