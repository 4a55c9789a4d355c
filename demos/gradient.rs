use dualnum::DualNumber;

fn main() {
    // f(x, y) = x * y + sin(x) at (2, 3)
    let x = DualNumber::<f64, 2>::variable(2.0, 0).unwrap();
    let y = DualNumber::<f64, 2>::variable(3.0, 1).unwrap();

    let f = x * y + x.sin();

    println!("{}", f);
    println!("∂f/∂x = {}", f.partial(0).unwrap()); // y + cos(x) = 2.5839
    println!("∂f/∂y = {}", f.partial(1).unwrap()); // x = 2.0
}
