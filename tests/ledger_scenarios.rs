use budgety::{
    init,
    ledger::{BudgetSummary, EntryKind, Ledger, PERCENTAGE_UNDEFINED},
};

fn summary(budget: f64, income: f64, expense: f64, percentage: i32) -> BudgetSummary {
    BudgetSummary {
        budget,
        total_income: income,
        total_expense: expense,
        percentage,
    }
}

fn salary_and_rent() -> (Ledger, u64) {
    let mut ledger = Ledger::new();
    ledger.add_item(EntryKind::Income, "Salary", 2000.0);
    let rent = ledger.add_item(EntryKind::Expense, "Rent", 800.0);
    ledger.calculate_budget();
    (ledger, rent.id)
}

#[test]
fn salary_and_rent_budget() {
    init();
    let (ledger, _) = salary_and_rent();
    assert_eq!(ledger.budget(), summary(1200.0, 2000.0, 800.0, 40));
}

#[test]
fn rent_percentage_of_salary() {
    let (mut ledger, rent) = salary_and_rent();
    ledger.calculate_percentages();
    assert_eq!(
        ledger.find(EntryKind::Expense, rent).and_then(|e| e.percentage()),
        Some(40)
    );
    assert_eq!(ledger.percentages(), vec![40]);
}

#[test]
fn deleting_rent_restores_full_budget() {
    let (mut ledger, rent) = salary_and_rent();
    ledger.delete_item(EntryKind::Expense, rent);
    ledger.calculate_budget();
    assert_eq!(ledger.budget(), summary(2000.0, 2000.0, 0.0, 0));
}

#[test]
fn expenses_without_income_are_undefined() {
    let mut ledger = Ledger::new();
    ledger.add_item(EntryKind::Expense, "Coffee", 5.0);
    ledger.calculate_budget();
    ledger.calculate_percentages();
    assert_eq!(ledger.budget().percentage, PERCENTAGE_UNDEFINED);
    assert_eq!(ledger.budget().budget, -5.0);
    assert_eq!(ledger.percentages(), vec![PERCENTAGE_UNDEFINED]);
}

#[test]
fn ids_increase_by_one_without_deletions() {
    let mut ledger = Ledger::new();
    let ids: Vec<u64> = (0..5)
        .map(|n| ledger.add_item(EntryKind::Expense, format!("item {n}"), 1.0).id)
        .collect();
    assert_eq!(ids, vec![0, 1, 2, 3, 4]);

    ledger.delete_item(EntryKind::Expense, 2);
    assert_eq!(ledger.add_item(EntryKind::Expense, "after", 1.0).id, 5);
    assert_eq!(ledger.add_item(EntryKind::Income, "first income", 1.0).id, 0);
}

#[test]
fn calculate_budget_is_idempotent() {
    let (mut ledger, _) = salary_and_rent();
    ledger.add_item(EntryKind::Expense, "Food", 333.33);
    ledger.recompute_all();
    let first = (ledger.budget(), ledger.percentages());
    ledger.recompute_all();
    assert_eq!((ledger.budget(), ledger.percentages()), first);
}

#[test]
fn add_then_delete_restores_totals() {
    let (mut ledger, _) = salary_and_rent();
    let before = ledger.budget();

    for kind in EntryKind::ALL {
        let entry = ledger.add_item(kind, "Temporary", 123.45);
        ledger.delete_item(kind, entry.id);
        ledger.calculate_budget();
        assert_eq!(ledger.budget(), before);
    }
}

#[test]
fn deletion_is_reflected_after_recompute_only() {
    let (mut ledger, rent) = salary_and_rent();
    ledger.delete_item(EntryKind::Expense, rent);
    assert_eq!(ledger.budget().total_expense, 800.0);
    ledger.calculate_budget();
    assert_eq!(ledger.budget().total_expense, 0.0);
}

#[test]
fn percentages_follow_expense_order() {
    let mut ledger = Ledger::new();
    ledger.add_item(EntryKind::Income, "Salary", 1000.0);
    ledger.add_item(EntryKind::Expense, "Rent", 500.0);
    ledger.add_item(EntryKind::Expense, "Food", 250.0);
    ledger.add_item(EntryKind::Expense, "Gym", 50.0);
    ledger.recompute_all();
    assert_eq!(ledger.percentages(), vec![50, 25, 5]);

    ledger.delete_item(EntryKind::Expense, 1);
    ledger.recompute_all();
    assert_eq!(ledger.percentages(), vec![50, 5]);
}

#[test]
fn ledgers_are_independent() {
    let (first, _) = salary_and_rent();
    let mut second = Ledger::new();
    second.calculate_budget();
    assert_eq!(second.budget(), summary(0.0, 0.0, 0.0, PERCENTAGE_UNDEFINED));
    assert_eq!(first.budget().total_income, 2000.0);
}

#[test]
fn state_dump_lists_entries_by_kind() {
    let (ledger, _) = salary_and_rent();
    let json = serde_json::to_value(&ledger).expect("serialize ledger");
    assert_eq!(json["entries"]["income"][0]["description"], "Salary");
    assert_eq!(json["entries"]["expense"][0]["type"], "expense");
    assert_eq!(json["entries"]["expense"][0]["percentage"], -1);
    assert_eq!(json["budget"], 1200.0);
}
