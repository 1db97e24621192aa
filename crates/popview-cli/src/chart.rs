//! Terminal rendering of a [`PopulationProfile`].

use clap::ValueEnum;
use num_format::{Locale, ToFormattedString};
use popview_core::{DatasetPeriod, DatasetVariant, PopulationProfile};

/// How per-age counts are drawn.
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum ChartStyle {
    /// One bar chart per sex, age 0 first.
    Bars,
    /// Divergent pyramid: male bars to the left, female to the right, oldest on top.
    Pyramid,
}

impl ChartStyle {
    /// The Korean viewer draws a pyramid, the English one plain bars.
    pub fn default_for(variant: &DatasetVariant) -> Self {
        if variant.code == DatasetVariant::english().code {
            ChartStyle::Bars
        } else {
            ChartStyle::Pyramid
        }
    }
}

/// Caption strings, per dataset language.
#[derive(Debug, Clone, Copy)]
pub struct Labels {
    pub total: &'static str,
    pub male: &'static str,
    pub female: &'static str,
    pub year: &'static str,
    pub month: &'static str,
}

impl Labels {
    pub fn for_variant(variant: &DatasetVariant) -> Self {
        if variant.code == DatasetVariant::korean().code {
            Labels {
                total: "총 인구",
                male: "남성",
                female: "여성",
                year: "데이터 연도",
                month: "월",
            }
        } else {
            Labels {
                total: "Total population",
                male: "Male",
                female: "Female",
                year: "Data year",
                month: "month",
            }
        }
    }
}

pub fn grouped(n: i64) -> String {
    n.to_formatted_string(&Locale::en)
}

pub fn period_line(period: DatasetPeriod, labels: &Labels) -> String {
    format!(
        "{}: {}, {}: {:02}",
        labels.year, period.year, labels.month, period.month
    )
}

pub fn summary_line(profile: &PopulationProfile, labels: &Labels) -> String {
    format!(
        "{}: {}, {}: {}, {}: {}",
        labels.total,
        grouped(profile.total_population),
        labels.male,
        grouped(profile.male_total),
        labels.female,
        grouped(profile.female_total)
    )
}

// Bar length scaled so the largest count spans `width` cells.
fn bar_len(value: i64, peak: i64, width: usize) -> usize {
    if peak <= 0 || value <= 0 {
        return 0;
    }
    ((value as f64 / peak as f64) * width as f64).round() as usize
}

pub fn render_bars(profile: &PopulationProfile, width: usize, labels: &Labels) -> String {
    let peak = profile.peak();
    let mut out = String::new();
    for (caption, series) in [
        (labels.male, &profile.male_by_age),
        (labels.female, &profile.female_by_age),
    ] {
        out.push_str(&format!("{caption}\n"));
        for (age, value) in series.iter().enumerate() {
            let bar = "#".repeat(bar_len(*value, peak, width));
            out.push_str(&format!("{age:>3} |{bar} {}\n", grouped(*value)));
        }
    }
    out
}

pub fn render_pyramid(profile: &PopulationProfile, width: usize, labels: &Labels) -> String {
    let (male, female) = profile.pyramid_series();
    let peak = profile.peak();
    let mut out = String::new();
    out.push_str(&format!(
        "{:>w$} | age | {}\n",
        labels.male,
        labels.female,
        w = width
    ));
    for age in (0..male.len().min(female.len())).rev() {
        let left = "#".repeat(bar_len(male[age], peak, width));
        let right = "#".repeat(bar_len(female[age].saturating_neg(), peak, width));
        out.push_str(&format!("{left:>w$} | {age:>3} | {right}\n", w = width));
    }
    out
}

/// Full report: optional period line, totals, then the chart.
pub fn render_report(
    profile: &PopulationProfile,
    period: Option<DatasetPeriod>,
    style: ChartStyle,
    width: usize,
    labels: &Labels,
) -> String {
    let mut out = String::new();
    out.push_str(&profile.district_name);
    out.push('\n');
    if let Some(p) = period {
        out.push_str(&period_line(p, labels));
        out.push('\n');
    }
    out.push_str(&summary_line(profile, labels));
    out.push_str("\n\n");
    match style {
        ChartStyle::Bars => out.push_str(&render_bars(profile, width, labels)),
        ChartStyle::Pyramid => out.push_str(&render_pyramid(profile, width, labels)),
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    fn profile() -> PopulationProfile {
        let mut male = vec![0; 101];
        let mut female = vec![0; 101];
        male[30] = 1_000;
        female[30] = 500;
        female[100] = 2_000;
        PopulationProfile {
            district_name: "서울특별시 강남구".into(),
            male_by_age: male,
            female_by_age: female,
            male_total: 1_000,
            female_total: 2_500,
            total_population: 3_500,
        }
    }

    #[test]
    fn default_style_follows_variant() {
        assert_eq!(ChartStyle::default_for(&DatasetVariant::korean()), ChartStyle::Pyramid);
        assert_eq!(ChartStyle::default_for(&DatasetVariant::english()), ChartStyle::Bars);
    }

    #[test]
    fn summary_uses_thousands_separators() {
        let labels = Labels::for_variant(&DatasetVariant::english());
        assert_eq!(
            summary_line(&profile(), &labels),
            "Total population: 3,500, Male: 1,000, Female: 2,500"
        );
        let period = DatasetPeriod { year: 2022, month: 5 };
        assert_eq!(period_line(period, &labels), "Data year: 2022, month: 05");
    }

    #[test]
    fn bars_scale_to_peak() {
        assert_eq!(bar_len(2_000, 2_000, 10), 10);
        assert_eq!(bar_len(500, 2_000, 10), 3);
        assert_eq!(bar_len(0, 2_000, 10), 0);
        assert_eq!(bar_len(5, 0, 10), 0);
    }

    #[test]
    fn bar_chart_has_one_line_per_age_and_sex() {
        let labels = Labels::for_variant(&DatasetVariant::english());
        let out = render_bars(&profile(), 10, &labels);
        assert_eq!(out.lines().count(), 2 * (101 + 1));
        assert!(out.contains(" 30 |##### 1,000"));
        assert!(out.contains("100 |########## 2,000"));
    }

    #[test]
    fn pyramid_puts_oldest_first_and_splits_sides() {
        let labels = Labels::for_variant(&DatasetVariant::english());
        let out = render_pyramid(&profile(), 10, &labels);
        let lines: Vec<&str> = out.lines().collect();
        assert_eq!(lines.len(), 102);
        assert_eq!(lines[1], format!("{:>10} | 100 | ##########", ""));
        assert_eq!(lines[71], format!("{:>10} |  30 | ###", "#####"));
    }

    #[test]
    fn report_includes_period_when_known() {
        let labels = Labels::for_variant(&DatasetVariant::korean());
        let out = render_report(
            &profile(),
            Some(DatasetPeriod { year: 2022, month: 5 }),
            ChartStyle::Pyramid,
            10,
            &labels,
        );
        let mut lines = out.lines();
        assert_eq!(lines.next(), Some("서울특별시 강남구"));
        assert_eq!(lines.next(), Some("데이터 연도: 2022, 월: 05"));
        assert_eq!(lines.next(), Some("총 인구: 3,500, 남성: 1,000, 여성: 2,500"));
    }

    #[test]
    fn report_without_period_separates_totals_from_chart() {
        let labels = Labels::for_variant(&DatasetVariant::english());
        let out = render_report(&profile(), None, ChartStyle::Bars, 10, &labels);
        assert!(out.starts_with(
            "서울특별시 강남구\nTotal population: 3,500, Male: 1,000, Female: 2,500\n\nMale\n"
        ));
        assert!(out.ends_with("100 |########## 2,000\n"));
    }
}
