use log::warn;

use crate::entities::{Direction, ExpenseSign, HasTotals, Totals, TransactionRow};

/// Signed contribution of a single row. Rows whose amount is not a finite
/// number (e.g. a non-numeric quantity read as `NaN`) contribute nothing.
pub(crate) fn contribution(row: &TransactionRow, expense_sign: ExpenseSign) -> f64 {
    let amount = row.amount();
    if !amount.is_finite() {
        return 0.0;
    }
    match row.transaction_type {
        Direction::Income => amount,
        Direction::Expense => expense_sign.apply(amount),
    }
}

/// Income, expense and net totals of `rows`. This is the only place totals are
/// derived; every level of the hierarchy calls it on the rows it owns.
///
/// A row that would push any of the three totals out of the finite range is
/// left out, so totals are always finite.
pub(crate) fn compute_totals<'a, I>(rows: I, expense_sign: ExpenseSign) -> Totals
where
    I: IntoIterator<Item = &'a TransactionRow>,
{
    let (income, expense) = rows
        .into_iter()
        .fold((0.0, 0.0), |(income, expense), row| {
            let c = contribution(row, expense_sign);
            let next = match row.transaction_type {
                Direction::Income => (income + c, expense),
                Direction::Expense => (income, expense + c),
            };
            if next.0.is_finite() && next.1.is_finite() && (next.0 + next.1).is_finite() {
                next
            } else {
                warn!(
                    "amount of '{}' overflows the totals, counted as zero",
                    row.item_name
                );
                (income, expense)
            }
        });
    Totals::new(income, expense)
}

/// Sum of the absolute contributions of `rows`: the size of the numbers that
/// went into a total, which bounds its rounding error.
pub(crate) fn magnitude<'a, I>(rows: I, expense_sign: ExpenseSign) -> f64
where
    I: IntoIterator<Item = &'a TransactionRow>,
{
    rows.into_iter()
        .map(|row| contribution(row, expense_sign).abs())
        .filter(|c| c.is_finite())
        .sum()
}

/// Compares `totals` with the sum of the children's totals and logs a warning
/// when they differ by more than `tolerance` relative to `magnitude`. The
/// recomputed `totals` stay authoritative either way.
pub(crate) fn cross_check<C: HasTotals>(
    level: &str,
    key: &str,
    totals: &Totals,
    magnitude: f64,
    children: &[C],
    tolerance: f64,
) -> bool {
    let summed: Totals = children.iter().map(HasTotals::totals).sum();
    let pairs = [
        ("income", totals.income_total, summed.income_total),
        ("expense", totals.expense_total, summed.expense_total),
        ("net", totals.net_total, summed.net_total),
    ];
    let mut consistent = true;
    for (name, own, sum) in pairs {
        if !approx_eq(own, sum, magnitude, tolerance) {
            warn!(
                "{} '{}': {} total {} differs from its children's sum {}",
                level, key, name, own, sum
            );
            consistent = false;
        }
    }
    consistent
}

/// `a` and `b` agree within `tolerance` relative to the larger of their own
/// size, the `magnitude` of the terms that produced them, and 1.
fn approx_eq(a: f64, b: f64, magnitude: f64, tolerance: f64) -> bool {
    if a == b {
        return true;
    }
    let scale = a.abs().max(b.abs()).max(magnitude).max(1.0);
    (a - b).abs() <= tolerance * scale
}
