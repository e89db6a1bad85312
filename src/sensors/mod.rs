//! Sensor models.
//!
//! One sensor type: the DHT temperature/humidity part, instantiable any
//! number of times with independently fixed locations.

pub mod dht;

pub use dht::{DhtKind, DhtSensor, Location};
