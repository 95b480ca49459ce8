/// Flat host parameters and the validated guide configuration.
pub mod params;
