use super::*;

#[test]
fn returns_closure_result() {
    let result: Result<i32, &str> = ensure_sufficient_stack(|| Ok(123));
    assert_eq!(result, Ok(123));
}

#[test]
fn deep_recursion_on_small_thread() {
    fn depth(n: u64) -> u64 {
        ensure_sufficient_stack(|| if n == 0 { 0 } else { depth(n - 1) + 1 })
    }

    let handle = std::thread::Builder::new()
        .stack_size(256 * 1024)
        .spawn(|| depth(50_000))
        .unwrap();
    assert_eq!(handle.join().unwrap(), 50_000);
}
