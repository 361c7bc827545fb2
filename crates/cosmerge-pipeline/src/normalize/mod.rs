//! Label cleanup for scraped product and review records.
//!
//! [`clean_product_name`], [`clean_code_name`] and
//! [`extract_price_from_code_name`] are total over any string input. The
//! `preprocess_*` functions apply them to whole record sets and then drop
//! repeated variants with [`crate::dedup`].

mod code_name;
mod product_name;
mod rules;

use cosmerge_core::{ProductRecord, ReviewRecord, SINGLE_ITEM};

use crate::dedup::{dedup_by_identity, Deduplicated};

/// Strips promotional annotations, quantities and combo markers from a
/// product name.
///
/// `"[9월 올영픽] 헤라 센슈얼 누드 글로스 5g"` → `"헤라 센슈얼 누드 글로스"`
///
/// Returns an empty string only when the input is empty or made entirely
/// of removable tokens.
#[must_use]
pub fn clean_product_name(name: &str) -> String {
    rules::run_steps(product_name::STEPS, name.to_owned())
}

/// Reduces a raw option label to its display form.
///
/// The sentinel `"단품"` is returned unchanged. A label entirely wrapped in
/// one `[...]` or `(...)` pair is unwrapped rather than erased. Any other
/// label may clean down to an empty string; callers decide the fallback.
#[must_use]
pub fn clean_code_name(code: &str) -> String {
    code_name::clean(code)
}

/// Splits a two-line `"label\nprice"` option into `(label, digits)`.
///
/// `"란제리\n36,000원"` → `("란제리", "36000")`. Empty input and the
/// `"단품"` sentinel come back as `(input, "")`.
#[must_use]
pub fn extract_price_from_code_name(code: &str) -> (String, String) {
    if code.is_empty() || code == SINGLE_ITEM {
        return (code.to_owned(), String::new());
    }
    let spaced = code_name::normalize_spaces(code);
    let (label, rest) = spaced.split_once('\n').unwrap_or((spaced.as_str(), ""));
    let price: String = rest.chars().filter(char::is_ascii_digit).collect();
    (label.trim().to_owned(), price)
}

/// Cleans one product record in place of the raw one.
///
/// A missing price is recovered from the second line of the raw option
/// label. When a label cleans down to nothing its raw first line is kept.
#[must_use]
pub fn preprocess_product(mut product: ProductRecord) -> ProductRecord {
    product.product_name = clean_or_raw_name(&product.product_name);
    if product.price.is_empty() {
        let (_, price) = extract_price_from_code_name(&product.code_name);
        product.price = price;
    }
    product.code_name = clean_or_raw_label(&product.code_name);
    product
}

/// Cleans the product name and option label of one review record.
#[must_use]
pub fn preprocess_review(mut review: ReviewRecord) -> ReviewRecord {
    review.product_name = clean_or_raw_name(&review.product_name);
    review.review_name = clean_or_raw_label(&review.review_name);
    review
}

/// Cleans every product record, then keeps the first record per
/// `(brand, product, code)` key.
pub fn preprocess_products<I>(products: I) -> Deduplicated<ProductRecord>
where
    I: IntoIterator<Item = ProductRecord>,
{
    dedup_by_identity(products.into_iter().map(preprocess_product))
}

/// Cleans every review record, then keeps the first record per
/// `(brand, product, code, review)` key.
pub fn preprocess_reviews<I>(reviews: I) -> Deduplicated<ReviewRecord>
where
    I: IntoIterator<Item = ReviewRecord>,
{
    dedup_by_identity(reviews.into_iter().map(preprocess_review))
}

fn clean_or_raw_name(raw: &str) -> String {
    let cleaned = clean_product_name(raw);
    if cleaned.is_empty() {
        raw.trim().to_owned()
    } else {
        cleaned
    }
}

fn clean_or_raw_label(raw: &str) -> String {
    let cleaned = clean_code_name(raw);
    if cleaned.is_empty() {
        code_name::first_line(&code_name::normalize_spaces(raw))
    } else {
        cleaned
    }
}

#[cfg(test)]
#[path = "normalize_test.rs"]
mod tests;
