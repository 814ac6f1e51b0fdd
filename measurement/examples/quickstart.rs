//! Minimal end-to-end example: convert times and compose a velocity (length / time).

use measurement::{KilometrePerHour, Metre, Metres, MetresPerSecond, Microsecond, Millisecond, Milliseconds, Seconds};

fn main() {
    let t = Seconds::new(3.0);
    let ms = t.to::<Millisecond>();
    assert_eq!(ms.value(), 3000.0);
    println!("{} = {}", t, ms);

    let total = ms + Milliseconds::new(5.0);
    println!("{} + 5 ms = {}", t, total.to::<Microsecond>());

    let v: MetresPerSecond = Metres::new(100.0) / Seconds::new(20.0);
    let d = (v * t).to::<Metre>();
    assert_eq!(d.value(), 15.0);
    println!("{} for {} covers {}", v, t, d);
    println!("{} = {}", v, v.to::<KilometrePerHour>());
}
