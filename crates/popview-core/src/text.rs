// crates/popview-core/src/text.rs

//! Text normalization for headers, district names and numeric cells.

use crate::variant::DatasetVariant;

/// Removes the per-month prefix from a column header.
///
/// A header such as `2022년05월_계_0세` becomes `계_0세` for the month token
/// `월`. Headers that do not contain `<token>_` are returned unchanged, which
/// makes the operation idempotent on already-stripped headers.
///
/// # Examples
///
/// ```rust
/// use popview_core::text::strip_month_prefix;
///
/// assert_eq!(strip_month_prefix("2022year05month_Total", "month"), "Total");
/// assert_eq!(strip_month_prefix("Administrative district", "month"), "Administrative district");
/// ```
pub fn strip_month_prefix(header: &str, month_token: &str) -> String {
    let separator = format!("{month_token}_");
    match header.split_once(separator.as_str()) {
        Some((_, rest)) => rest.to_string(),
        None => header.to_string(),
    }
}

/// Canonicalizes a raw district cell.
///
/// 1. Everything from the last `(` onward is dropped (the administrative code).
/// 2. Surrounding whitespace is trimmed.
/// 3. The name is split on single spaces.
/// 4. With at least three parts, where the second ends with the city marker
///    and the third with the district marker, the whole-area label is appended.
///
/// ```rust
/// use popview_core::text::canonicalize_district;
/// use popview_core::DatasetVariant;
///
/// let ko = DatasetVariant::korean();
/// assert_eq!(
///     canonicalize_district("경기도 수원시 장안구(4111100000)", &ko),
///     "경기도 수원시 장안구 전체"
/// );
/// assert_eq!(canonicalize_district("서울특별시  (1100000000)", &ko), "서울특별시");
/// ```
pub fn canonicalize_district(raw: &str, variant: &DatasetVariant) -> String {
    let head = match raw.rfind('(') {
        Some(idx) => &raw[..idx],
        None => raw,
    };
    let mut name = head.trim().to_string();

    let parts: Vec<&str> = name.split(' ').collect();
    if parts.len() >= 3
        && parts[1].ends_with(variant.city_marker)
        && parts[2].ends_with(variant.district_marker)
    {
        name.push(' ');
        name.push_str(variant.whole_area_label);
    }
    name
}

/// Parses a count cell, accepting `,` digit-group separators.
///
/// Returns `None` for empty or non-numeric input.
pub fn parse_count(cell: &str) -> Option<i64> {
    let cleaned: String = cell.trim().chars().filter(|c| *c != ',').collect();
    if cleaned.is_empty() {
        return None;
    }
    cleaned.parse::<i64>().ok()
}

/// Returns `true` if a canonical name carries the whole-area label.
pub fn is_whole_area(name: &str, variant: &DatasetVariant) -> bool {
    name.strip_suffix(variant.whole_area_label)
        .is_some_and(|head| head.ends_with(' '))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn strips_prefix_up_to_first_token() {
        let token = "월";
        assert_eq!(strip_month_prefix("2022년05월_계_총인구수", token), "계_총인구수");
        assert_eq!(strip_month_prefix("2022년05월_남_100세 이상", token), "남_100세 이상");
        assert_eq!(strip_month_prefix("행정구역", token), "행정구역");
    }

    #[test]
    fn strip_prefix_is_idempotent() {
        let headers = [
            "2022year05month_Total population",
            "2022year05month_Male_0 years old",
            "Administrative district",
        ];
        for h in headers {
            let once = strip_month_prefix(h, "month");
            let twice = strip_month_prefix(&once, "month");
            assert_eq!(once, twice, "header {h:?}");
        }
    }

    #[test]
    fn appends_whole_area_label_for_city_with_districts() {
        let en = DatasetVariant::english();
        assert_eq!(
            canonicalize_district("Gyeonggi-do Suwon-City Jangan-Gu (4111100000)", &en),
            "Gyeonggi-do Suwon-City Jangan-Gu all"
        );
    }

    #[test]
    fn short_names_never_get_label() {
        let en = DatasetVariant::english();
        assert_eq!(canonicalize_district("Village(info)", &en), "Village");
        // Two parts that both carry markers are still too short.
        assert_eq!(
            canonicalize_district("Suwon-City Jangan-Gu(4111100000)", &en),
            "Suwon-City Jangan-Gu"
        );
    }

    #[test]
    fn markers_must_be_in_positions_one_and_two() {
        let ko = DatasetVariant::korean();
        assert_eq!(
            canonicalize_district("경기도 가평군 가평읍(4182025000)", &ko),
            "경기도 가평군 가평읍"
        );
        assert_eq!(
            canonicalize_district("서울특별시 종로구 청운효자동(1111051500)", &ko),
            "서울특별시 종로구 청운효자동"
        );
    }

    #[test]
    fn separate_marker_words_do_not_count_as_suffixes() {
        // Parts: Gangnam / City / Yeoksam / Gu; part 2 does not end in "Gu".
        let en = DatasetVariant::english();
        assert_eq!(
            canonicalize_district("Gangnam City Yeoksam Gu (info)", &en),
            "Gangnam City Yeoksam Gu"
        );
    }

    #[test]
    fn only_last_parenthesis_is_dropped() {
        let en = DatasetVariant::english();
        assert_eq!(canonicalize_district("Dong (old) (1234)", &en), "Dong (old)");
    }

    #[test]
    fn name_without_parenthesis_is_kept() {
        let ko = DatasetVariant::korean();
        assert_eq!(canonicalize_district("  세종특별자치시 ", &ko), "세종특별자치시");
    }

    #[test]
    fn parses_thousands_separated_counts() {
        assert_eq!(parse_count("1,234"), Some(1234));
        assert_eq!(parse_count(" 9,733,509 "), Some(9_733_509));
        assert_eq!(parse_count("0"), Some(0));
        assert_eq!(parse_count(""), None);
        assert_eq!(parse_count("n/a"), None);
    }

    #[test]
    fn detects_whole_area_rows() {
        let ko = DatasetVariant::korean();
        assert!(is_whole_area("경기도 수원시 장안구 전체", &ko));
        assert!(!is_whole_area("경기도 수원시 장안구", &ko));
        assert!(!is_whole_area("전체", &ko));
    }
}
