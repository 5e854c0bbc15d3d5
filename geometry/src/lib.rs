pub mod camera;
pub mod ray;

pub use camera::Camera;
pub use ray::Ray;
