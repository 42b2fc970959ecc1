//! Monday-first month grid.

use chrono::{Datelike, NaiveDate};

pub const WEEKDAY_LABELS: [&str; 7] = ["Mon", "Tue", "Wed", "Thu", "Fri", "Sat", "Sun"];

/// Weeks of the month as Monday..Sunday rows; days outside the month are
/// `None`. Returns `None` for an invalid year/month.
pub fn month_weeks(year: i32, month: u32) -> Option<Vec<[Option<u32>; 7]>> {
    let first = NaiveDate::from_ymd_opt(year, month, 1)?;
    let days = days_in_month(year, month)?;
    let offset = first.weekday().num_days_from_monday() as usize;

    let mut weeks = Vec::new();
    let mut week = [None; 7];
    let mut col = offset;
    for day in 1..=days {
        week[col] = Some(day);
        col += 1;
        if col == 7 {
            weeks.push(week);
            week = [None; 7];
            col = 0;
        }
    }
    if col > 0 {
        weeks.push(week);
    }
    Some(weeks)
}

pub fn days_in_month(year: i32, month: u32) -> Option<u32> {
    let first = NaiveDate::from_ymd_opt(year, month, 1)?;
    let next = if month == 12 {
        NaiveDate::from_ymd_opt(year + 1, 1, 1)?
    } else {
        NaiveDate::from_ymd_opt(year, month + 1, 1)?
    };
    u32::try_from((next - first).num_days()).ok()
}

/// Day selected when none is given: today if it falls in the shown month,
/// otherwise the first of the month.
pub fn default_selection(year: i32, month: u32, today: NaiveDate) -> Option<NaiveDate> {
    if today.year() == year && today.month() == month {
        Some(today)
    } else {
        NaiveDate::from_ymd_opt(year, month, 1)
    }
}

/// Text grid with a title line. Today is marked `15*`; the selected day,
/// when it is not today, `[15]`.
pub fn render_month(year: i32, month: u32, today: NaiveDate, selected: NaiveDate) -> Option<String> {
    let weeks = month_weeks(year, month)?;
    let title = NaiveDate::from_ymd_opt(year, month, 1)?
        .format("%B %Y")
        .to_string();

    let mut out = format!("{title:^34}\n");
    let header: Vec<String> = WEEKDAY_LABELS.iter().map(|l| format!("{l:>4}")).collect();
    out.push_str(header.join(" ").trim_end());
    out.push('\n');

    for week in weeks {
        let cells: Vec<String> = week
            .iter()
            .map(|cell| match cell {
                None => format!("{:>4}", ""),
                Some(day) => {
                    let date = NaiveDate::from_ymd_opt(year, month, *day);
                    let text = if date == Some(today) {
                        format!("{day}*")
                    } else if date == Some(selected) {
                        format!("[{day}]")
                    } else {
                        day.to_string()
                    };
                    format!("{text:>4}")
                }
            })
            .collect();
        out.push_str(cells.join(" ").trim_end());
        out.push('\n');
    }
    Some(out)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    #[test]
    fn february_2024_starts_thursday() {
        let weeks = month_weeks(2024, 2).unwrap();
        assert_eq!(weeks[0], [None, None, None, Some(1), Some(2), Some(3), Some(4)]);
        assert_eq!(weeks.len(), 5);
        assert_eq!(weeks[4], [Some(26), Some(27), Some(28), Some(29), None, None, None]);
    }

    #[test]
    fn february_2021_fills_four_rows() {
        let weeks = month_weeks(2021, 2).unwrap();
        assert_eq!(weeks.len(), 4);
        assert_eq!(weeks[0][0], Some(1));
        assert_eq!(weeks[3][6], Some(28));
    }

    #[test]
    fn october_2026_starts_thursday() {
        let weeks = month_weeks(2026, 10).unwrap();
        assert_eq!(weeks[0][3], Some(1));
        assert_eq!(weeks[0][2], None);
    }

    #[test]
    fn month_lengths() {
        assert_eq!(days_in_month(2024, 2), Some(29));
        assert_eq!(days_in_month(1900, 2), Some(28));
        assert_eq!(days_in_month(2000, 2), Some(29));
        assert_eq!(days_in_month(2100, 12), Some(31));
        assert_eq!(days_in_month(2024, 13), None);
    }

    #[test]
    fn selection_defaults() {
        let today = date(2026, 10, 19);
        assert_eq!(default_selection(2026, 10, today), Some(today));
        assert_eq!(default_selection(2024, 3, today), Some(date(2024, 3, 1)));
    }

    #[test]
    fn markers() {
        let grid = render_month(2026, 10, date(2026, 10, 19), date(2026, 10, 5)).unwrap();
        assert!(grid.contains("19*"));
        assert!(grid.contains("[5]"));
        assert!(grid.lines().next().unwrap().contains("October 2026"));
        assert_eq!(grid.lines().nth(1).unwrap(), " Mon  Tue  Wed  Thu  Fri  Sat  Sun");
    }

    #[test]
    fn today_wins_over_selection() {
        let d = date(2024, 3, 20);
        let grid = render_month(2024, 3, d, d).unwrap();
        assert!(grid.contains("20*"));
        assert!(!grid.contains("[20]"));
    }
}
