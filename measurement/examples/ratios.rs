//! Dimensionless ratios: quotients of one dimension reduce to plain numbers through the scalar identity.

use measurement::{Kilometres, Metres, Microseconds, Scalar, Seconds};

fn main() {
    let same_scale = Metres::new(1.0) / Metres::new(2.0);
    assert_eq!(same_scale.to_scalar(), 0.5);
    println!("1 m / 2 m = {}", same_scale);

    // The magnitude stays in km/m until it is scaled to the scalar identity.
    let mixed = Kilometres::new(3.0) / Metres::new(1500.0);
    println!("3 km / 1500 m = {} = {}", mixed, mixed.to::<Scalar>());

    let ticks: f64 = (Seconds::new(1.0) / Microseconds::new(250.0)).into();
    assert_eq!(ticks, 4000.0);
    println!("250 µs ticks per second: {}", ticks);
}
