use super::*;

#[test]
fn test_deep_recursion() {
    // 100k nested frames would overflow a typical 8MB stack without growth
    fn depth_of(n: u64) -> u64 {
        ensure_sufficient_stack(|| if n == 0 { 0 } else { depth_of(n - 1) + 1 })
    }

    assert_eq!(depth_of(100_000), 100_000);
}

#[test]
fn test_returns_closure_result() {
    let result: Result<i32, &str> = ensure_sufficient_stack(|| Ok(123));
    assert_eq!(result, Ok(123));
}

#[test]
fn test_budget_allows_exactly_limit_hops() {
    let mut budget = DepthBudget::new(3);
    for expected in 1..=3 {
        budget = budget.descend().unwrap_or(budget);
        assert_eq!(budget.used(), expected);
    }
    assert_eq!(budget.descend(), None);
    assert_eq!(budget.limit(), 3);
}

#[test]
fn test_zero_budget_refuses_first_hop() {
    assert_eq!(DepthBudget::new(0).descend(), None);
}

#[test]
fn test_budget_is_copied_per_branch() {
    let root = DepthBudget::new(2);
    let left = root.descend();
    let right = root.descend();
    assert_eq!(left, right);
    assert_eq!(root.used(), 0);
}
