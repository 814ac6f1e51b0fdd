//! Runtime-checked quantities: the same rules as the typed API, reported as errors instead of compile failures.

use measurement::{
    DynQuantity, Hours, Kilometres, KilometrePerHour, Microsecond, Milliseconds, QuantityError, Second, Seconds, Unit,
};

fn main() -> Result<(), QuantityError> {
    let a = DynQuantity::from(Seconds::new(3.0));
    let b = DynQuantity::from(Milliseconds::new(5.0));

    match a.checked_add(b) {
        Ok(sum) => println!("unexpected sum {}", sum),
        Err(err) => println!("3 s + 5 ms rejected: {}", err),
    }

    let sum = a.convert_to(b.identity())?.checked_add(b)?;
    println!("after conversion: {}", sum.convert_to(Microsecond::IDENTITY)?);

    let speed = DynQuantity::from(Kilometres::new(15.0)).checked_div(DynQuantity::from(Hours::new(3.0)))?;
    let typed = speed.into_typed::<KilometrePerHour>()?;
    println!("15 km / 3 h = {}", typed);

    if let Err(err) = speed.convert_to(Second::IDENTITY) {
        println!("velocity to seconds rejected: {}", err);
    }

    let shape = DynQuantity::from_parts(1.0, (1, 1), 0, &[2, 0, 3, 4]);
    println!("four-component dimension: {:?}", shape);
    Ok(())
}
