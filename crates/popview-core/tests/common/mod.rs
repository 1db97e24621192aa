// Shared fixture builder for the integration tests.
#![allow(dead_code)]

use num_format::{Locale, ToFormattedString};
use std::fs;
use std::io::Write;
use std::path::{Path, PathBuf};

pub const PERIOD: &str = "2022년05월";
pub const GROUPS: [&str; 3] = ["계", "남", "여"];

/// Full 310-column header row of the Korean monthly extract.
pub fn korean_headers() -> Vec<String> {
    let mut headers = vec!["행정구역".to_string()];
    for g in GROUPS {
        headers.push(format!("{PERIOD}_{g}_총인구수"));
        headers.push(format!("{PERIOD}_{g}_연령구간인구수"));
        for age in 0..100 {
            headers.push(format!("{PERIOD}_{g}_{age}세"));
        }
        headers.push(format!("{PERIOD}_{g}_100세 이상"));
    }
    headers
}

/// Per-age count for group `g` (0 = total, 1, 2) at `age`.
pub fn age_value(base: i64, g: usize, age: usize) -> i64 {
    base + (g as i64) * 1_000 + age as i64
}

/// Group total column value: the sum of its per-age values.
pub fn group_total(base: i64, g: usize) -> i64 {
    (0..=100).map(|a| age_value(base, g, a)).sum()
}

/// One data row with thousands-separated, quoted numbers.
pub fn korean_row(raw_name: &str, base: i64) -> Vec<String> {
    let mut row = vec![raw_name.to_string()];
    for g in 0..GROUPS.len() {
        let total = group_total(base, g);
        row.push(total.to_formatted_string(&Locale::en));
        row.push(total.to_formatted_string(&Locale::en));
        for age in 0..=100 {
            row.push(age_value(base, g, age).to_formatted_string(&Locale::en));
        }
    }
    row
}

pub fn to_csv(headers: &[String], rows: &[Vec<String>]) -> String {
    let mut out = String::new();
    let quote = |cells: &[String]| {
        cells
            .iter()
            .map(|c| format!("\"{c}\""))
            .collect::<Vec<_>>()
            .join(",")
    };
    out.push_str(&quote(headers));
    out.push('\n');
    for r in rows {
        out.push_str(&quote(r));
        out.push('\n');
    }
    out
}

/// Sample extract: a province, a city aggregate, two districts and one
/// neighbourhood. Bases are distinct so rows can be told apart.
pub fn sample_csv() -> String {
    let rows = vec![
        korean_row("서울특별시  (1100000000)", 100),
        korean_row("서울특별시 강남구 (1168000000)", 200),
        korean_row("서울특별시 강남구 역삼1동(1168064000)", 300),
        korean_row("경기도 수원시 장안구(4111100000)", 400),
        korean_row("부산광역시 해운대구 (2635000000)", 500),
    ];
    to_csv(&korean_headers(), &rows)
}

pub fn encode_cp949(text: &str) -> Vec<u8> {
    let (bytes, _, had_errors) = encoding_rs::EUC_KR.encode(text);
    assert!(!had_errors, "fixture text must be representable in CP949");
    bytes.into_owned()
}

pub fn write_fixture(dir: &Path, file_name: &str, bytes: &[u8]) -> PathBuf {
    let path = dir.join(file_name);
    fs::write(&path, bytes).expect("write fixture");
    path
}

pub fn write_gzip_fixture(dir: &Path, file_name: &str, bytes: &[u8]) -> PathBuf {
    use flate2::{write::GzEncoder, Compression};

    let path = dir.join(file_name);
    let file = fs::File::create(&path).expect("create fixture");
    let mut encoder = GzEncoder::new(file, Compression::default());
    encoder.write_all(bytes).expect("write gzip fixture");
    encoder.finish().expect("finish gzip fixture");
    path
}
