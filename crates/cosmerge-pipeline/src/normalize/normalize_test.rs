use cosmerge_core::ThumbColor;
use serde_json::Map;

use super::*;

/// Label shapes observed in category scrapes.
const CODE_LABELS: &[&str] = &[
    "단품",
    "[01 핑크]",
    "(02 코랄)",
    "[NEW] 03 로즈\n36,000원",
    "01 핑크 (품절)",
    "[한정] 02 코랄 기획세트",
    "04 베이지_단품",
    "05 누드 1+1",
    "시트 마스크*2개입",
    "10개",
    "01 핑크 3.5g",
    "０６ 모브",
    "NEW 07 레드 듀오팩",
    "08 체리\u{3000}\n12,000원",
    "세트",
    "핑크 10개_세트",
    "핑크 10개_단품",
    "",
];

const PRODUCT_NAMES: &[&str] = &[
    "[9월 올영픽] 헤라 센슈얼 누드 글로스 5g",
    "[1+1] 롬앤 쥬시 래스팅 틴트 (본품+리필)",
    "클리오 킬커버 쿠션 리필 기획세트",
    "페리페라 잉크 무드 글로이 틴트 12종 중 택1",
    "에뛰드 픽싱 틴트 4g 2+1",
    "마스크 ×3",
    "립/치크 멀티밤 10ml",
    "어뮤즈 듀 틴트 한정 기획",
    "리필러 스펀지",
    "",
];

// -----------------------------------------------------------------------
// clean_product_name
// -----------------------------------------------------------------------

#[test]
fn product_name_strips_bracket_and_trailing_unit() {
    assert_eq!(
        clean_product_name("[9월 올영픽] 헤라 센슈얼 누드 글로스 5g"),
        "헤라 센슈얼 누드 글로스"
    );
}

#[test]
fn product_name_strips_combo_and_parenthesized_notes() {
    assert_eq!(
        clean_product_name("[1+1] 롬앤 쥬시 래스팅 틴트 (본품+리필)"),
        "롬앤 쥬시 래스팅 틴트"
    );
    assert_eq!(clean_product_name("에뛰드 픽싱 틴트 4g 2+1"), "에뛰드 픽싱 틴트");
}

#[test]
fn product_name_strips_refill_and_promo_phrases() {
    assert_eq!(
        clean_product_name("클리오 킬커버 쿠션 리필 기획세트"),
        "클리오 킬커버 쿠션"
    );
    assert_eq!(clean_product_name("어뮤즈 듀 틴트 한정 기획"), "어뮤즈 듀 틴트");
}

#[test]
fn product_name_keeps_refill_inside_larger_word() {
    assert_eq!(clean_product_name("리필러 스펀지"), "리필러 스펀지");
}

#[test]
fn product_name_strips_choose_n_phrase() {
    assert_eq!(
        clean_product_name("페리페라 잉크 무드 글로이 틴트 12종 중 택1"),
        "페리페라 잉크 무드 글로이 틴트"
    );
}

#[test]
fn product_name_collapses_slashes() {
    assert_eq!(clean_product_name("립/치크 멀티밤 10ml"), "립 치크 멀티밤");
}

#[test]
fn product_name_does_not_truncate_alphanumeric_words() {
    assert_eq!(clean_product_name("3CE 벨벳 립 틴트"), "3CE 벨벳 립 틴트");
    assert_eq!(clean_product_name("2gether 틴트"), "2gether 틴트");
}

#[test]
fn product_name_empty_stays_empty() {
    assert_eq!(clean_product_name(""), "");
}

#[test]
fn product_name_is_idempotent() {
    for name in PRODUCT_NAMES {
        let once = clean_product_name(name);
        assert_eq!(clean_product_name(&once), once, "not idempotent for {name:?}");
    }
}

// -----------------------------------------------------------------------
// clean_code_name
// -----------------------------------------------------------------------

#[test]
fn code_name_sentinel_is_preserved() {
    assert_eq!(clean_code_name("단품"), "단품");
    assert_eq!(clean_code_name("  단품\n15,000원"), "단품");
}

#[test]
fn code_name_unwraps_single_full_wrap() {
    assert_eq!(clean_code_name("[01 핑크]"), "01 핑크");
    assert_eq!(clean_code_name("(02 코랄)"), "02 코랄");
}

#[test]
fn code_name_removes_partial_brackets() {
    assert_eq!(clean_code_name("[NEW] 03 로즈\n36,000원"), "03 로즈");
    assert_eq!(clean_code_name("[한정] 02 코랄 기획세트"), "02 코랄");
}

#[test]
fn code_name_removes_sold_out_marker() {
    assert_eq!(clean_code_name("01 핑크 (품절)"), "01 핑크");
}

#[test]
fn code_name_removes_single_item_suffix() {
    assert_eq!(clean_code_name("04 베이지_단품"), "04 베이지");
}

#[test]
fn code_name_removes_combo_new_and_pack_count() {
    assert_eq!(clean_code_name("05 누드 1+1"), "05 누드");
    assert_eq!(clean_code_name("NEW 07 레드 듀오팩"), "07 레드");
    assert_eq!(clean_code_name("시트 마스크*2개입"), "시트 마스크");
}

#[test]
fn code_name_keeps_label_that_is_only_a_quantity() {
    assert_eq!(clean_code_name("10개"), "10개");
    assert_eq!(clean_code_name("01 핑크 3.5g"), "01 핑크");
}

#[test]
fn code_name_folds_full_width_and_special_spaces() {
    assert_eq!(clean_code_name("０６ 모브"), "06 모브");
    assert_eq!(clean_code_name("08 체리\u{3000}\n12,000원"), "08 체리");
}

#[test]
fn code_name_may_clean_to_empty() {
    assert_eq!(clean_code_name("세트"), "");
    assert_eq!(clean_code_name(""), "");
}

#[test]
fn code_name_is_idempotent() {
    for label in CODE_LABELS {
        let once = clean_code_name(label);
        assert_eq!(clean_code_name(&once), once, "not idempotent for {label:?}");
    }
}

// -----------------------------------------------------------------------
// extract_price_from_code_name
// -----------------------------------------------------------------------

#[test]
fn price_split_returns_label_and_digits() {
    assert_eq!(
        extract_price_from_code_name("란제리\n36,000원"),
        ("란제리".to_owned(), "36000".to_owned())
    );
}

#[test]
fn price_split_passes_through_sentinel_and_empty() {
    assert_eq!(
        extract_price_from_code_name("단품"),
        ("단품".to_owned(), String::new())
    );
    assert_eq!(extract_price_from_code_name(""), (String::new(), String::new()));
}

#[test]
fn price_split_without_price_line() {
    assert_eq!(
        extract_price_from_code_name("01 핑크"),
        ("01 핑크".to_owned(), String::new())
    );
}

// -----------------------------------------------------------------------
// preprocess_products / preprocess_reviews
// -----------------------------------------------------------------------

fn raw_product(name: &str, code: &str, price: &str) -> ProductRecord {
    ProductRecord {
        brand_name: "헤라".to_owned(),
        product_name: name.to_owned(),
        code_name: code.to_owned(),
        price: price.to_owned(),
        product_main_image: "https://image.example/main.jpg".to_owned(),
        product_url: "https://www.oliveyoung.co.kr/store/goods/getGoodsDetail.do?goodsNo=A1"
            .to_owned(),
        thumb_color: ThumbColor::default(),
        extra: Map::new(),
    }
}

fn raw_review(name: &str, label: &str) -> ReviewRecord {
    ReviewRecord {
        brand_name: "헤라".to_owned(),
        product_name: name.to_owned(),
        review_name: label.to_owned(),
        price: String::new(),
        product_main_image: String::new(),
        product_url: String::new(),
        texts: vec!["좋아요".to_owned()],
    }
}

#[test]
fn preprocess_product_recovers_price_from_label() {
    let product = preprocess_product(raw_product(
        "[9월 올영픽] 헤라 센슈얼 누드 글로스 5g",
        "[01 핑크]\n36,000원",
        "",
    ));
    assert_eq!(product.product_name, "헤라 센슈얼 누드 글로스");
    assert_eq!(product.code_name, "01 핑크");
    assert_eq!(product.price, "36000");
}

#[test]
fn preprocess_product_keeps_existing_price() {
    let product = preprocess_product(raw_product("글로스", "01 핑크\n36,000원", "32000"));
    assert_eq!(product.price, "32000");
}

#[test]
fn preprocess_product_falls_back_to_raw_label_when_cleaned_empty() {
    let product = preprocess_product(raw_product("글로스", "세트\n20,000원", ""));
    assert_eq!(product.code_name, "세트");
}

#[test]
fn preprocess_products_drops_later_duplicates() {
    let outcome = preprocess_products(vec![
        raw_product("[특가] 글로스", "[01 핑크]", "1"),
        raw_product("글로스", "02 코랄", "2"),
        raw_product("글로스 5g", "01 핑크 (품절)", "3"),
    ]);
    assert_eq!(outcome.dropped, 1);
    let prices: Vec<&str> = outcome.records.iter().map(|p| p.price.as_str()).collect();
    assert_eq!(prices, ["1", "2"]);
}

#[test]
fn preprocess_reviews_cleans_labels_and_dedups() {
    let outcome = preprocess_reviews(vec![
        raw_review("[단독] 글로스", "[옵션] 01 핑크"),
        raw_review("글로스", "01 핑크"),
        raw_review("글로스", "02 코랄"),
    ]);
    assert_eq!(outcome.dropped, 1);
    assert_eq!(outcome.records[0].product_name, "글로스");
    assert_eq!(outcome.records[0].review_name, "01 핑크");
    assert_eq!(outcome.records[1].review_name, "02 코랄");
}
