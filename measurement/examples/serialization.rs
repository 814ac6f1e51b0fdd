//! Examples of serializing and deserializing quantities.
//!
//! Quantities serialize as their bare `f64` magnitude by default; `serde_with_unit` keeps the unit symbol next to
//! the value and rejects a mismatching symbol on the way back.
//!
//! To run this example with serde support:
//! ```bash
//! cargo run --example serialization --features serde
//! ```

#[cfg(feature = "serde")]
fn main() {
    use measurement::{Hours, Kilometres, KilometresPerHour, Metre, Metres, Seconds};
    use serde::{Deserialize, Serialize};

    println!("=== Quantity Serialization Examples ===\n");

    // Example 1: Basic serialization to JSON
    println!("1. Basic JSON Serialization:");
    let distance = Metres::new(42.5);
    let json = serde_json::to_string(&distance).unwrap();
    println!("   Distance: {} → JSON: {}", distance, json);

    let restored = serde_json::from_str::<Metres>(&json).unwrap();
    println!("   JSON: {} → {}", json, restored);
    println!();

    // Example 2: Structs mixing compact and unit-tagged fields
    #[derive(Serialize, Deserialize, Debug)]
    struct Trip {
        #[serde(with = "measurement::serde_with_unit")]
        distance: Kilometres,
        #[serde(with = "measurement::serde_with_unit")]
        duration: Hours,
        #[serde(with = "measurement::serde_with_unit")]
        average: KilometresPerHour,
        rest: Seconds,
    }

    println!("2. Unit-tagged fields:");
    let distance = Kilometres::new(15.0);
    let duration = Hours::new(3.0);
    let trip = Trip {
        distance,
        duration,
        average: distance / duration,
        rest: Seconds::new(900.0),
    };
    let json = serde_json::to_string_pretty(&trip).unwrap();
    println!("{}", json);

    let restored: Trip = serde_json::from_str(&json).unwrap();
    println!("   Restored: {:?}", restored);
    println!();

    // Example 3: A mismatching symbol is an error, not a silent rescale
    println!("3. Unit validation:");
    let wrong = r#"{"distance":{"value":15000.0,"unit":"m"},"duration":{"value":3.0,"unit":"h"},"average":{"value":5.0,"unit":"km/h"},"rest":900.0}"#;
    match serde_json::from_str::<Trip>(wrong) {
        Ok(trip) => println!("   unexpected: {:?}", trip),
        Err(err) => println!("   rejected: {}", err),
    }
    println!();

    // Example 4: Convert before serializing to store canonical units
    println!("4. Converting Units Before Serialization:");
    let distance_m = distance.to::<Metre>();
    let json = serde_json::to_string(&distance_m).unwrap();
    println!("   {} → {} → JSON: {}", distance, distance_m, json);
}

#[cfg(not(feature = "serde"))]
fn main() {
    println!("This example requires the 'serde' feature.");
    println!("Run with: cargo run --example serialization --features serde");
}
