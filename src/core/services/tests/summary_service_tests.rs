use super::{date, push_expense};
use crate::core::services::SummaryService;
use crate::ledger::LedgerState;

fn march_state() -> LedgerState {
    let mut state = LedgerState::default();
    push_expense(&mut state, 50.0, "food", date(2024, 3, 1));
    push_expense(&mut state, 30.0, "food", date(2024, 3, 31));
    push_expense(&mut state, 999.0, "bills", date(2024, 4, 1));
    state
}

#[test]
fn totals_use_zero_based_months() {
    let state = march_state();
    assert_eq!(SummaryService::total_by_month(&state, 2024, 2), 80.0);
    assert_eq!(SummaryService::total_by_month(&state, 2024, 3), 999.0);
    assert_eq!(SummaryService::total_by_month(&state, 2023, 2), 0.0);
}

#[test]
fn breakdown_sorts_by_amount_and_falls_back_for_unknown_ids() {
    let mut state = LedgerState::default();
    push_expense(&mut state, 20.0, "food", date(2024, 5, 1));
    push_expense(&mut state, 60.0, "ghost", date(2024, 5, 2));
    push_expense(&mut state, 20.0, "transport", date(2024, 5, 3));
    push_expense(&mut state, 100.0, "food", date(2024, 6, 1));

    let breakdown = SummaryService::category_breakdown(&state, 2024, 4);
    let ids: Vec<&str> = breakdown.iter().map(|s| s.category_id.as_str()).collect();
    assert_eq!(ids, ["ghost", "food", "transport"]);
    assert_eq!(breakdown[0].name, "Other");
    assert_eq!(breakdown[0].icon, "MoreHorizontal");
    assert_eq!(breakdown[0].percentage, 60.0);
    assert_eq!(breakdown[1].name, "Food & Drinks");
    assert_eq!(breakdown[1].percentage, 20.0);
}

#[test]
fn top_category_prefers_first_seen_on_ties() {
    let mut state = LedgerState::default();
    push_expense(&mut state, 40.0, "transport", date(2024, 5, 1));
    push_expense(&mut state, 40.0, "food", date(2024, 5, 2));
    let top = SummaryService::top_category(&state, 2024, 4).expect("spend exists");
    assert_eq!(top.category_id, "transport");
    assert!(SummaryService::top_category(&state, 2024, 5).is_none());
}

#[test]
fn daily_totals_cover_every_day_of_the_month() {
    let state = march_state();
    let days = SummaryService::daily_totals(&state, 2024, 2, date(2024, 3, 31));
    assert_eq!(days.len(), 31);
    assert_eq!(days[0].amount, 50.0);
    assert_eq!(days[30].amount, 30.0);
    assert!(days[30].is_today);
    assert_eq!(days.iter().filter(|d| d.is_today).count(), 1);
    assert!(SummaryService::daily_totals(&state, 2024, 12, date(2024, 3, 31)).is_empty());
}

#[test]
fn trailing_totals_end_today_oldest_first() {
    let state = march_state();
    let week = SummaryService::trailing_daily_totals(&state, date(2024, 4, 2), 7);
    assert_eq!(week.len(), 7);
    assert_eq!(week[0].date, date(2024, 3, 27));
    assert_eq!(week[6].date, date(2024, 4, 2));
    assert!(week[6].is_today);
    let amounts: Vec<f64> = week.iter().map(|d| d.amount).collect();
    assert_eq!(amounts, [0.0, 0.0, 0.0, 0.0, 30.0, 999.0, 0.0]);
}

#[test]
fn month_comparison_wraps_year_and_handles_no_history() {
    let mut state = LedgerState::default();
    push_expense(&mut state, 200.0, "food", date(2023, 12, 10));
    push_expense(&mut state, 150.0, "food", date(2024, 1, 3));

    let january = SummaryService::month_comparison(&state, 2024, 0);
    assert_eq!(january.current, 150.0);
    assert_eq!(january.previous, 200.0);
    assert_eq!(january.change_percentage, -25.0);

    let december = SummaryService::month_comparison(&state, 2023, 11);
    assert_eq!(december.previous, 0.0);
    assert_eq!(december.change_percentage, 0.0);
}
