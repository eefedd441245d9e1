use chrono::{Duration, NaiveDate};

use crate::{
    find_danger_date, find_lowest_balance, project, FixedClock, ProjectionService,
};
use cashflow_domain::{
    round_currency, AutoTransport, BudgetConfig, FoodBudget, OneTimeExpense, OneTimeIncome,
    PayFrequency, PublicTransit, RecurringExpense, RecurringIncome, TransportConfig,
};

fn date(y: i32, m: u32, d: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(y, m, d).unwrap()
}

fn household(today: NaiveDate) -> BudgetConfig {
    let mut budget = BudgetConfig::new(1200.0, 3);
    budget.recurring_incomes.push(RecurringIncome::new(
        "Warehouse",
        25.0,
        18.5,
        PayFrequency::Biweekly,
        today - Duration::days(3),
    ));
    budget
        .recurring_expenses
        .push(RecurringExpense::new("Rent", 950.0, 1));
    budget
        .recurring_expenses
        .push(RecurringExpense::new("Phone", 45.99, 15));
    budget
        .one_time_incomes
        .push(OneTimeIncome::new("Tax refund", 320.0, today + Duration::days(20)));
    budget
        .one_time_expenses
        .push(OneTimeExpense::new("Car repair", 610.0, today + Duration::days(9)));
    budget.food_budget = FoodBudget {
        enabled: true,
        breakfast: 3.25,
        lunch: 9.0,
        dinner: 11.5,
        snacks: 2.0,
        weekend_daily_total: 38.0,
    };
    budget.transport_config = TransportConfig {
        enabled: true,
        auto: AutoTransport {
            enabled: true,
            weekday_miles: 22.0,
            weekend_miles: 8.0,
            mpg: 31.0,
            fuel_cost_per_gallon: 3.79,
        },
        public_transit: PublicTransit {
            enabled: true,
            weekly_cost: 15.0,
        },
    };
    budget
}

#[test]
fn biweekly_paycheck_against_rent_on_day_zero() {
    let today = date(2025, 1, 10);
    let mut budget = BudgetConfig::new(1000.0, 1);
    budget.recurring_incomes.push(RecurringIncome::new(
        "Job",
        10.0,
        15.0,
        PayFrequency::Biweekly,
        today,
    ));
    budget
        .recurring_expenses
        .push(RecurringExpense::new("Rent", 800.0, 10));

    let snapshots = project(&budget, today).unwrap();
    assert_eq!(snapshots[0].balance, 500.0);
    assert_eq!(snapshots[0].income_today, 300.0);
    assert_eq!(snapshots[0].expenses_today, 800.0);

    let paydays: Vec<_> = snapshots
        .iter()
        .filter(|s| s.income_today > 0.0)
        .map(|s| s.date)
        .collect();
    assert_eq!(paydays, [today, date(2025, 1, 24), date(2025, 2, 7)]);

    let rent_days: Vec<_> = snapshots
        .iter()
        .filter(|s| s.expenses_today > 0.0)
        .map(|s| s.date)
        .collect();
    assert_eq!(rent_days, [today, date(2025, 2, 10)]);
    assert_eq!(snapshots.last().unwrap().date, date(2025, 2, 10));
    assert_eq!(snapshots.last().unwrap().balance, 300.0);
}

#[test]
fn one_time_expense_on_horizon_end_is_included_and_day_after_is_not() {
    let today = date(2025, 4, 12);
    let end = date(2025, 6, 12);
    let mut budget = BudgetConfig::new(100.0, 2);
    budget
        .one_time_expenses
        .push(OneTimeExpense::new("Festival", 60.0, end));
    budget
        .one_time_expenses
        .push(OneTimeExpense::new("Too late", 999.0, end + Duration::days(1)));

    let snapshots = project(&budget, today).unwrap();
    let last = snapshots.last().unwrap();
    assert_eq!(last.date, end);
    assert_eq!(last.events.len(), 1);
    assert_eq!(last.events[0].label, "Festival");
    assert!(snapshots
        .iter()
        .flat_map(|s| &s.events)
        .all(|event| event.label != "Too late"));
    assert_eq!(last.balance, 40.0);
}

#[test]
fn zero_mpg_car_costs_nothing_for_the_whole_horizon() {
    let today = date(2025, 2, 1);
    let mut budget = BudgetConfig::new(10.0, 1);
    budget.transport_config.enabled = true;
    budget.transport_config.auto = AutoTransport {
        enabled: true,
        weekday_miles: 40.0,
        weekend_miles: 12.0,
        mpg: 0.0,
        fuel_cost_per_gallon: 4.0,
    };

    let snapshots = project(&budget, today).unwrap();
    assert!(snapshots.iter().all(|s| s.expenses_today == 0.0));
    assert!(snapshots.iter().all(|s| s.balance == 10.0));
}

#[test]
fn balance_recurrence_holds_every_day() {
    let today = date(2025, 5, 20);
    let budget = household(today);
    let snapshots = project(&budget, today).unwrap();

    let mut previous = budget.initial_balance;
    for snapshot in &snapshots {
        assert_eq!(
            snapshot.balance,
            round_currency(previous + snapshot.income_today - snapshot.expenses_today),
            "recurrence broken on {}",
            snapshot.date
        );
        assert!(snapshot.income_today >= 0.0);
        assert!(snapshot.expenses_today >= 0.0);
        previous = snapshot.balance;
    }
}

#[test]
fn disabling_a_rule_removes_only_its_contribution() {
    let today = date(2025, 5, 20);
    let budget = household(today);
    let mut without_phone = budget.clone();
    without_phone.recurring_expenses[1].enabled = false;

    let base = project(&budget, today).unwrap();
    let trimmed = project(&without_phone, today).unwrap();
    assert_eq!(base.len(), trimmed.len());

    for (with, without) in base.iter().zip(&trimmed) {
        assert_eq!(with.income_today, without.income_today);
        let removed = round_currency(with.expenses_today - without.expenses_today);
        if with.date.format("%d").to_string() == "15" {
            assert_eq!(removed, 45.99, "phone bill missing on {}", with.date);
            assert_eq!(with.events.len(), without.events.len() + 1);
        } else {
            assert_eq!(removed, 0.0);
            assert_eq!(with.events, without.events);
        }
    }
}

#[test]
fn analytics_agree_with_the_service_report() {
    let today = date(2025, 5, 20);
    let mut budget = household(today);
    budget.initial_balance = 150.0;

    let snapshots = project(&budget, today).unwrap();
    let report = ProjectionService::run_with_clock(&budget, &FixedClock::new(today)).unwrap();

    assert_eq!(report.snapshots, snapshots);
    assert_eq!(report.danger.as_ref(), find_danger_date(&snapshots));
    assert_eq!(report.lowest.as_ref(), find_lowest_balance(&snapshots));
    assert!(report.goes_negative());
    assert_eq!(report.end_date(), Some(date(2025, 8, 20)));
    assert_eq!(report.summary.ending_balance, snapshots.last().unwrap().balance);
    assert_eq!(report.months.len(), 4);
    assert_eq!(report.markers.len(), 2);
    assert_eq!(report.markers[0].event.label, "Car repair");
    assert_eq!(report.markers[1].event.label, "Tax refund");
}

#[test]
fn ended_income_stops_paying() {
    let today = date(2025, 1, 1);
    let mut budget = BudgetConfig::new(0.0, 2);
    budget.recurring_incomes.push(
        RecurringIncome::new("Contract", 40.0, 50.0, PayFrequency::Weekly, today)
            .with_end_date(date(2025, 1, 22)),
    );
    let snapshots = project(&budget, today).unwrap();
    let paid: f64 = snapshots.iter().map(|s| s.income_today).sum();
    assert_eq!(paid, 4.0 * 2000.0);
    assert_eq!(snapshots.last().unwrap().balance, 8000.0);
}

#[test]
fn future_anchor_only_pays_from_its_start() {
    let today = date(2025, 1, 1);
    let mut budget = BudgetConfig::new(0.0, 1);
    budget.recurring_incomes.push(RecurringIncome::new(
        "New job",
        20.0,
        20.0,
        PayFrequency::Monthly,
        date(2025, 1, 20),
    ));
    let snapshots = project(&budget, today).unwrap();
    let paydays: Vec<_> = snapshots
        .iter()
        .filter(|s| !s.events.is_empty())
        .map(|s| s.date)
        .collect();
    assert_eq!(paydays, [date(2025, 1, 20)]);
    assert_eq!(snapshots[19].events[0].label, "New job paycheck");
    assert_eq!(snapshots[19].income_today, 1733.33);
}
