// Built-in EnOcean Equipment Profiles
// Each module registers its profiles with the link-time collection

// 4BS
pub mod a5_02;
pub mod a5_04;
pub mod a5_06;
pub mod a5_07;
pub mod a5_38;
pub mod a5_3f;

// 1BS
pub mod d5_00;

// RPS
pub mod f6_02;

pub use a5_02::TemperatureSensor;
pub use a5_04::TemperatureHumiditySensor;
pub use a5_06::LightSensor;
pub use a5_07::OccupancySensor;
pub use a5_38::{CentralCommand, CentralCommandConfig};
pub use a5_3f::UniversalProfile;
pub use d5_00::ContactSensor;
pub use f6_02::RockerSwitch;
