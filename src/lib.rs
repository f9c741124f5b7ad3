pub mod domain;
pub mod io;
pub mod logging;
pub mod prelude;
pub mod report;
pub mod synth;
