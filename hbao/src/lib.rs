//! Horizon-based ambient occlusion (HBAO) for rasterized frames.
//!
//! Given a hardware depth buffer and the camera's projection, [`Hbao`]
//! estimates how much of the hemisphere above each visible surface is
//! blocked by nearby geometry, and darkens the color target accordingly.
//!
//! ```no_run
//! use glam::uvec2;
//! use hbao::{Camera, Frame, Hbao, Settings, Texture, Tunables};
//!
//! let size = uvec2(640, 480);
//! let mut hbao = Hbao::new(Settings::default(), size);
//!
//! let depth = Texture::new("depth", size).unwrap();
//! let mut color = image::Rgba32FImage::new(size.x, size.y);
//!
//! hbao.render(
//!     Frame {
//!         depth: &depth,
//!         camera: &Camera::default(),
//!         tunables: &Tunables::default(),
//!     },
//!     &mut color,
//! )
//! .unwrap();
//! ```

mod ao_parameters;
mod buffers;
mod camera;
mod controller;
mod error;
mod rotation_table;
mod settings;
mod tunables;
mod utils;


pub use hbao_gpu as gpu;

pub use self::ao_parameters::*;
pub use self::buffers::*;
pub use self::camera::*;
pub use self::controller::*;
pub use self::error::*;
pub use self::rotation_table::*;
pub use self::settings::*;
pub use self::tunables::*;
