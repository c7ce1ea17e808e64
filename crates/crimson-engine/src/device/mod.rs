//! GPU device and surface management: adapter/device acquisition, surface
//! configuration, and per-frame texture acquisition.

mod frame;
mod gpu;
mod init;
mod surface;

pub use frame::GpuFrame;
pub use gpu::Gpu;
pub use init::GpuInit;
pub use surface::SurfaceErrorAction;
