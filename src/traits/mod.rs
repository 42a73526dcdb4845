mod driver;
mod probe;

pub use driver::DatabaseDriver;
pub use probe::Probe;
