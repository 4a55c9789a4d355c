use dualnum::DualNumber;

/// Newton iteration for a root of f(x) = x² - 2, with the derivative
/// supplied by the dual number rather than written out by hand.
fn main() {
    let mut x = 1.0_f64;

    for i in 0..8 {
        let d = DualNumber::<f64, 1>::with_derivative(x, 1.0);
        let f = d * d - 2.0;

        x -= f.value() / f.derivative().unwrap();
        println!("iteration {i}: x = {x}");
    }

    println!("sqrt(2) = {}", 2.0_f64.sqrt());
}
