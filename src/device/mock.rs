//! Scripted devices for testing.
//!
//! `MockDevice` answers capability queries from fixed values and records
//! every query it receives. `MockDeviceProvider` hands out such devices (or
//! refuses to) and counts how many handles were opened and released.
//!
//! # Example
//!
//! ```
//! use gpu_gate::device::{DeviceProvider, FeatureLevel, MockDevice, MockDeviceProvider};
//!
//! let provider = MockDeviceProvider::with_device(MockDevice::fully_capable());
//! {
//!     let _device = provider.create_device(FeatureLevel::Level12_0).unwrap();
//!     assert_eq!(provider.open_handles(), 1);
//! }
//! assert_eq!(provider.open_handles(), 0);
//! ```

use std::cell::{Cell, RefCell};
use std::collections::HashSet;
use std::rc::Rc;

use super::{
    DeviceError, DeviceProvider, FeatureData, FeatureLevel, FeatureQuery, GraphicsDevice,
    MeshShaderTier, QueryError, RaytracingTier, ShaderModel, VariableShadingRateTier,
};

/// A device with scripted capabilities.
#[derive(Debug, Clone)]
pub struct MockDevice {
    name: String,
    atomic_int64: bool,
    wave_ops: bool,
    shader_model: ShaderModel,
    raytracing_tier: RaytracingTier,
    mesh_shader_tier: MeshShaderTier,
    vrs_tier: VariableShadingRateTier,
    failing: HashSet<&'static str>,
    queries: Rc<RefCell<Vec<FeatureQuery>>>,
}

impl MockDevice {
    /// A feature level 12_0 device with nothing optional.
    pub fn baseline() -> Self {
        Self {
            name: "Mock Baseline Adapter".to_string(),
            atomic_int64: false,
            wave_ops: false,
            shader_model: ShaderModel::SM_6_0,
            raytracing_tier: RaytracingTier::NotSupported,
            mesh_shader_tier: MeshShaderTier::NotSupported,
            vrs_tier: VariableShadingRateTier::NotSupported,
            failing: HashSet::new(),
            queries: Rc::default(),
        }
    }

    /// A device supporting every optional capability.
    pub fn fully_capable() -> Self {
        Self {
            name: "Mock Ultimate Adapter".to_string(),
            atomic_int64: true,
            wave_ops: true,
            shader_model: ShaderModel::SM_6_7,
            raytracing_tier: RaytracingTier::Tier1_1,
            mesh_shader_tier: MeshShaderTier::Tier1,
            vrs_tier: VariableShadingRateTier::Tier2,
            ..Self::baseline()
        }
    }

    pub fn with_atomic_int64(mut self, supported: bool) -> Self {
        self.atomic_int64 = supported;
        self
    }

    pub fn with_wave_ops(mut self, supported: bool) -> Self {
        self.wave_ops = supported;
        self
    }

    pub fn with_shader_model(mut self, model: ShaderModel) -> Self {
        self.shader_model = model;
        self
    }

    pub fn with_raytracing_tier(mut self, tier: RaytracingTier) -> Self {
        self.raytracing_tier = tier;
        self
    }

    pub fn with_mesh_shader_tier(mut self, tier: MeshShaderTier) -> Self {
        self.mesh_shader_tier = tier;
        self
    }

    pub fn with_vrs_tier(mut self, tier: VariableShadingRateTier) -> Self {
        self.vrs_tier = tier;
        self
    }

    /// Make `query` fail regardless of the scripted capabilities.
    pub fn failing(mut self, query: FeatureQuery) -> Self {
        self.failing.insert(query.name());
        self
    }

    /// Queries received so far, across all clones of this device.
    pub fn queries(&self) -> Vec<FeatureQuery> {
        self.queries.borrow().clone()
    }
}

impl GraphicsDevice for MockDevice {
    fn check_feature_support(&self, query: FeatureQuery) -> Result<FeatureData, QueryError> {
        self.queries.borrow_mut().push(query);

        if self.failing.contains(query.name()) {
            return Err(QueryError::Failed {
                query,
                message: "scripted failure".to_string(),
            });
        }

        Ok(match query {
            FeatureQuery::Options1 => FeatureData::Options1 {
                wave_ops: self.wave_ops,
            },
            FeatureQuery::Options5 => FeatureData::Options5 {
                raytracing_tier: self.raytracing_tier,
            },
            FeatureQuery::Options6 => FeatureData::Options6 {
                variable_shading_rate_tier: self.vrs_tier,
            },
            FeatureQuery::Options7 => FeatureData::Options7 {
                mesh_shader_tier: self.mesh_shader_tier,
            },
            FeatureQuery::Options9 => FeatureData::Options9 {
                atomic_int64_on_typed_resource_supported: self.atomic_int64,
            },
            // The runtime reports the lower of the requested and supported model.
            FeatureQuery::ShaderModel { highest } => FeatureData::ShaderModel {
                highest_shader_model: highest.min(self.shader_model),
            },
        })
    }

    fn adapter_name(&self) -> Option<String> {
        Some(self.name.clone())
    }
}

/// Handle returned by [`MockDeviceProvider`]; counts its own release.
struct MockHandle {
    device: MockDevice,
    open: Rc<Cell<usize>>,
}

impl GraphicsDevice for MockHandle {
    fn check_feature_support(&self, query: FeatureQuery) -> Result<FeatureData, QueryError> {
        self.device.check_feature_support(query)
    }

    fn adapter_name(&self) -> Option<String> {
        self.device.adapter_name()
    }
}

impl Drop for MockHandle {
    fn drop(&mut self) {
        self.open.set(self.open.get() - 1);
    }
}

/// Provider that hands out a scripted device, or fails creation.
///
/// Clones share their counters, so a test can keep one clone and hand
/// another to the code under test.
#[derive(Debug, Default, Clone)]
pub struct MockDeviceProvider {
    device: Option<MockDevice>,
    created: Rc<Cell<usize>>,
    open: Rc<Cell<usize>>,
    levels: Rc<RefCell<Vec<FeatureLevel>>>,
}

impl MockDeviceProvider {
    /// Provider whose every creation attempt succeeds with `device`.
    pub fn with_device(device: MockDevice) -> Self {
        Self {
            device: Some(device),
            ..Self::default()
        }
    }

    /// Provider whose every creation attempt fails.
    pub fn failing() -> Self {
        Self::default()
    }

    /// Creation attempts so far, successful or not.
    pub fn creation_attempts(&self) -> usize {
        self.created.get()
    }

    /// Handles created and not yet dropped.
    pub fn open_handles(&self) -> usize {
        self.open.get()
    }

    /// Feature levels requested, in order.
    pub fn requested_levels(&self) -> Vec<FeatureLevel> {
        self.levels.borrow().clone()
    }

    /// The scripted device, for inspecting its query log.
    pub fn device(&self) -> Option<&MockDevice> {
        self.device.as_ref()
    }
}

impl DeviceProvider for MockDeviceProvider {
    fn create_device(&self, minimum: FeatureLevel) -> Result<Box<dyn GraphicsDevice>, DeviceError> {
        self.created.set(self.created.get() + 1);
        self.levels.borrow_mut().push(minimum);

        let Some(device) = &self.device else {
            return Err(DeviceError::CreationFailed {
                level: minimum,
                message: "scripted failure".to_string(),
            });
        };

        self.open.set(self.open.get() + 1);
        Ok(Box::new(MockHandle {
            device: device.clone(),
            open: Rc::clone(&self.open),
        }))
    }
}
