//! Backend type alias and device management
//!
//! Observations are small dense grids, so the CPU NdArray backend is all the
//! environment needs.

use burn::backend::ndarray::{NdArray, NdArrayDevice};

/// Backend used for observation tensors
pub type DefaultBackend = NdArray<f32>;

/// Get the default device for computation
///
/// # Example
///
/// ```rust
/// use maze_runner::rl::default_device;
///
/// let device = default_device();
/// ```
pub fn default_device() -> NdArrayDevice {
    NdArrayDevice::default()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_multiple_device_calls() {
        let device1 = default_device();
        let device2 = default_device();
        assert_eq!(
            std::mem::discriminant(&device1),
            std::mem::discriminant(&device2)
        );
    }
}
