//! Label and political-news statistics.
//!
//! # Responsibility
//! - Count true/fake articles.
//! - Compute fake share of political news per year and per month.
//! - Render the monthly share as a text histogram.
//!
//! # Invariants
//! - Statistics never mutate the list.
//! - Articles whose date cannot be parsed are skipped and counted, never
//!   assigned a default date.

use crate::list::article_list::ArticleList;
use crate::model::date_key::{extract_date_key, month_abbreviation};
use crate::model::record::Label;
use log::warn;
use serde::Serialize;

/// True/fake totals; articles with other labels are not counted.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize)]
pub struct LabelCounts {
    pub true_count: usize,
    pub fake_count: usize,
}

/// Political articles and fake political articles in one month.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct MonthShare {
    /// 1-based month.
    pub month: u8,
    pub total: usize,
    pub fake: usize,
}

impl MonthShare {
    /// Fake share in percent, `0.0` for a month without political articles.
    pub fn percentage(&self) -> f64 {
        percentage(self.fake, self.total)
    }
}

/// Monthly political breakdown for one year.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct MonthlyBreakdown {
    pub year: i32,
    /// Always twelve entries, January first.
    pub months: Vec<MonthShare>,
    /// Articles skipped because their date did not parse.
    pub skipped: usize,
}

pub fn count_labels(list: &ArticleList) -> LabelCounts {
    list.iter()
        .fold(LabelCounts::default(), |mut counts, article| {
            match article.label_kind() {
                Some(Label::True) => counts.true_count += 1,
                Some(Label::Fake) => counts.fake_count += 1,
                None => {}
            }
            counts
        })
}

/// Percentage of fake articles among political articles dated in `year`.
///
/// Returns `0.0` when there is no political article in that year.
pub fn political_fake_percentage(list: &ArticleList, year: i32) -> f64 {
    let breakdown = political_fake_by_month(list, year);
    let (total, fake) = breakdown
        .months
        .iter()
        .fold((0, 0), |(total, fake), share| {
            (total + share.total, fake + share.fake)
        });
    percentage(fake, total)
}

/// Per-month political totals and fake counts for `year`.
pub fn political_fake_by_month(list: &ArticleList, year: i32) -> MonthlyBreakdown {
    let mut months: Vec<MonthShare> = (1..=12)
        .map(|month| MonthShare {
            month,
            total: 0,
            fake: 0,
        })
        .collect();
    let mut skipped = 0;

    for article in list.iter().filter(|article| article.is_political()) {
        let key = match extract_date_key(&article.date) {
            Ok(key) => key,
            Err(_) => {
                skipped += 1;
                continue;
            }
        };
        if key.year != year {
            continue;
        }

        let share = &mut months[usize::from(key.month) - 1];
        share.total += 1;
        if article.is_fake() {
            share.fake += 1;
        }
    }

    if skipped > 0 {
        warn!("event=stats_skipped module=analysis status=partial year={year} skipped={skipped}");
    }
    MonthlyBreakdown {
        year,
        months,
        skipped,
    }
}

/// Renders one line per month: `JAN | *** 3%`.
///
/// One star per whole percent; the percentage is rounded to an integer.
pub fn render_month_histogram(breakdown: &MonthlyBreakdown) -> String {
    let mut out = String::new();
    for share in &breakdown.months {
        let percent = share.percentage();
        out.push_str(&format!(
            "{:>3} | {} {:.0}%\n",
            month_abbreviation(share.month),
            "*".repeat(percent as usize),
            percent
        ));
    }
    out
}

fn percentage(part: usize, whole: usize) -> f64 {
    if whole == 0 {
        return 0.0;
    }
    part as f64 / whole as f64 * 100.0
}

#[cfg(test)]
mod tests {
    use super::{percentage, render_month_histogram, MonthShare, MonthlyBreakdown};

    #[test]
    fn percentage_of_empty_whole_is_zero() {
        assert_eq!(percentage(0, 0), 0.0);
        assert_eq!(percentage(1, 4), 25.0);
    }

    #[test]
    fn histogram_prints_stars_per_percent() {
        let mut months: Vec<MonthShare> = (1..=12)
            .map(|month| MonthShare {
                month,
                total: 0,
                fake: 0,
            })
            .collect();
        months[0] = MonthShare {
            month: 1,
            total: 4,
            fake: 1,
        };
        let rendered = render_month_histogram(&MonthlyBreakdown {
            year: 2016,
            months,
            skipped: 0,
        });

        let lines: Vec<&str> = rendered.lines().collect();
        assert_eq!(lines.len(), 12);
        assert_eq!(lines[0], format!("JAN | {} 25%", "*".repeat(25)));
        assert_eq!(lines[1], "FEB |  0%");
    }
}
