pub mod buffer;
pub mod color;
pub mod composite;
pub mod consts;
pub mod error;
pub mod io;
pub mod labeling;
pub mod morphology;
pub mod pipeline;
