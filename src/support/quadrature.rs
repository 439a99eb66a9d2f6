//! Numerical quadrature rules.

/// Integrates `f` over `[a, b]` using the composite Simpson rule.
///
/// `panels` is the number of subintervals and must be even and non-zero;
/// an odd count is rounded up. Returns zero for an empty interval.
///
/// Simpson's rule is fourth-order accurate for smooth integrands, which is
/// what makes stage-refinement of the cooling schedule converge: halving the
/// panel width shrinks the quadrature residual by roughly a factor of 16.
pub fn simpson<F>(f: F, a: f64, b: f64, panels: usize) -> f64
where
    F: Fn(f64) -> f64,
{
    if a == b {
        return 0.0;
    }

    let n = if panels == 0 {
        2
    } else if panels % 2 == 1 {
        panels + 1
    } else {
        panels
    };

    let h = (b - a) / n as f64;
    let mut sum = f(a) + f(b);

    for i in 1..n {
        let x = a + h * i as f64;
        let weight = if i % 2 == 1 { 4.0 } else { 2.0 };
        sum += weight * f(x);
    }

    sum * h / 3.0
}
