/// Greatest common divisor of two pixel lengths
///
/// Both inputs are rounded to the nearest integer first. `gcd(a, 0)` is `a`.
pub fn gcd(a: f64, b: f64) -> u64 {
    let mut a = a.round().abs() as u64;
    let mut b = b.round().abs() as u64;
    while b != 0 {
        let remainder = a % b;
        a = b;
        b = remainder;
    }
    a
}
