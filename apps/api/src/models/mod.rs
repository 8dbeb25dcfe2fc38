pub mod satellite;
