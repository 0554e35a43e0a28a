/// Returns the `n`th Fibonacci number using the plain double recursion.
///
/// Runs in O(2^n) time. Nothing is cached between calls, so anything much
/// past `n = 35` gets slow.
pub fn fibonacci(n: u64) -> u128 {
    match n {
        0 => 0,
        1 => 1,
        _ => fibonacci(n - 1) + fibonacci(n - 2),
    }
}
