//! Direct3D 12 backend.

use std::mem::size_of;

use windows::core::IUnknown;
use windows::Win32::Foundation::E_INVALIDARG;
use windows::Win32::Graphics::Direct3D::{
    D3D_FEATURE_LEVEL, D3D_FEATURE_LEVEL_11_0, D3D_FEATURE_LEVEL_11_1, D3D_FEATURE_LEVEL_12_0,
    D3D_FEATURE_LEVEL_12_1, D3D_FEATURE_LEVEL_12_2,
};
use windows::Win32::Graphics::Direct3D12::{
    D3D12CreateDevice, ID3D12Device, D3D12_FEATURE, D3D12_FEATURE_D3D12_OPTIONS1,
    D3D12_FEATURE_D3D12_OPTIONS5, D3D12_FEATURE_D3D12_OPTIONS6, D3D12_FEATURE_D3D12_OPTIONS7,
    D3D12_FEATURE_D3D12_OPTIONS9, D3D12_FEATURE_DATA_D3D12_OPTIONS1,
    D3D12_FEATURE_DATA_D3D12_OPTIONS5, D3D12_FEATURE_DATA_D3D12_OPTIONS6,
    D3D12_FEATURE_DATA_D3D12_OPTIONS7, D3D12_FEATURE_DATA_D3D12_OPTIONS9,
    D3D12_FEATURE_DATA_SHADER_MODEL, D3D12_FEATURE_SHADER_MODEL, D3D12_MESH_SHADER_TIER_1,
    D3D12_RAYTRACING_TIER_1_0, D3D12_RAYTRACING_TIER_1_1, D3D12_VARIABLE_SHADING_RATE_TIER_1,
    D3D12_VARIABLE_SHADING_RATE_TIER_2, D3D_SHADER_MODEL,
};

use super::{
    DeviceError, DeviceProvider, FeatureData, FeatureLevel, FeatureQuery, GraphicsDevice,
    MeshShaderTier, QueryError, RaytracingTier, ShaderModel, VariableShadingRateTier,
};

fn d3d_feature_level(level: FeatureLevel) -> D3D_FEATURE_LEVEL {
    match level {
        FeatureLevel::Level11_0 => D3D_FEATURE_LEVEL_11_0,
        FeatureLevel::Level11_1 => D3D_FEATURE_LEVEL_11_1,
        FeatureLevel::Level12_0 => D3D_FEATURE_LEVEL_12_0,
        FeatureLevel::Level12_1 => D3D_FEATURE_LEVEL_12_1,
        FeatureLevel::Level12_2 => D3D_FEATURE_LEVEL_12_2,
    }
}

// D3D_SHADER_MODEL packs the version as 0xMm.
fn d3d_shader_model(model: ShaderModel) -> D3D_SHADER_MODEL {
    D3D_SHADER_MODEL(((model.major as i32) << 4) | model.minor as i32)
}

fn shader_model_from_d3d(model: D3D_SHADER_MODEL) -> ShaderModel {
    ShaderModel::new(((model.0 >> 4) & 0xf) as u8, (model.0 & 0xf) as u8)
}

/// Opens `ID3D12Device`s on the default adapter.
#[derive(Debug, Default, Clone, Copy)]
pub struct D3d12Provider;

impl D3d12Provider {
    pub fn new() -> Self {
        Self
    }
}

impl DeviceProvider for D3d12Provider {
    fn create_device(&self, minimum: FeatureLevel) -> Result<Box<dyn GraphicsDevice>, DeviceError> {
        let mut device: Option<ID3D12Device> = None;
        unsafe { D3D12CreateDevice(None::<&IUnknown>, d3d_feature_level(minimum), &mut device) }
            .map_err(|e| DeviceError::CreationFailed {
                level: minimum,
                message: e.message(),
            })?;

        let device = device.ok_or_else(|| DeviceError::CreationFailed {
            level: minimum,
            message: "D3D12CreateDevice returned no device".to_string(),
        })?;

        Ok(Box::new(D3d12Device { device }))
    }
}

/// An open Direct3D 12 device. The COM reference is released on drop.
pub struct D3d12Device {
    device: ID3D12Device,
}

impl D3d12Device {
    fn check<T>(
        &self,
        query: FeatureQuery,
        feature: D3D12_FEATURE,
        mut data: T,
    ) -> Result<T, QueryError> {
        unsafe {
            self.device.CheckFeatureSupport(
                feature,
                &mut data as *mut _ as *mut _,
                size_of::<T>() as u32,
            )
        }
        .map_err(|e| {
            if e.code() == E_INVALIDARG {
                QueryError::Unsupported(query)
            } else {
                QueryError::Failed {
                    query,
                    message: e.message(),
                }
            }
        })?;
        Ok(data)
    }
}

impl GraphicsDevice for D3d12Device {
    fn check_feature_support(&self, query: FeatureQuery) -> Result<FeatureData, QueryError> {
        match query {
            FeatureQuery::Options1 => {
                let data = self.check(
                    query,
                    D3D12_FEATURE_D3D12_OPTIONS1,
                    D3D12_FEATURE_DATA_D3D12_OPTIONS1::default(),
                )?;
                Ok(FeatureData::Options1 {
                    wave_ops: data.WaveOps.as_bool(),
                })
            }
            FeatureQuery::Options5 => {
                let data = self.check(
                    query,
                    D3D12_FEATURE_D3D12_OPTIONS5,
                    D3D12_FEATURE_DATA_D3D12_OPTIONS5::default(),
                )?;
                let tier = data.RaytracingTier.0;
                let raytracing_tier = if tier >= D3D12_RAYTRACING_TIER_1_1.0 {
                    RaytracingTier::Tier1_1
                } else if tier >= D3D12_RAYTRACING_TIER_1_0.0 {
                    RaytracingTier::Tier1_0
                } else {
                    RaytracingTier::NotSupported
                };
                Ok(FeatureData::Options5 { raytracing_tier })
            }
            FeatureQuery::Options6 => {
                let data = self.check(
                    query,
                    D3D12_FEATURE_D3D12_OPTIONS6,
                    D3D12_FEATURE_DATA_D3D12_OPTIONS6::default(),
                )?;
                let tier = data.VariableShadingRateTier.0;
                let variable_shading_rate_tier = if tier >= D3D12_VARIABLE_SHADING_RATE_TIER_2.0 {
                    VariableShadingRateTier::Tier2
                } else if tier >= D3D12_VARIABLE_SHADING_RATE_TIER_1.0 {
                    VariableShadingRateTier::Tier1
                } else {
                    VariableShadingRateTier::NotSupported
                };
                Ok(FeatureData::Options6 {
                    variable_shading_rate_tier,
                })
            }
            FeatureQuery::Options7 => {
                let data = self.check(
                    query,
                    D3D12_FEATURE_D3D12_OPTIONS7,
                    D3D12_FEATURE_DATA_D3D12_OPTIONS7::default(),
                )?;
                let mesh_shader_tier = if data.MeshShaderTier.0 >= D3D12_MESH_SHADER_TIER_1.0 {
                    MeshShaderTier::Tier1
                } else {
                    MeshShaderTier::NotSupported
                };
                Ok(FeatureData::Options7 { mesh_shader_tier })
            }
            FeatureQuery::Options9 => {
                let data = self.check(
                    query,
                    D3D12_FEATURE_D3D12_OPTIONS9,
                    D3D12_FEATURE_DATA_D3D12_OPTIONS9::default(),
                )?;
                Ok(FeatureData::Options9 {
                    atomic_int64_on_typed_resource_supported: data
                        .AtomicInt64OnTypedResourceSupported
                        .as_bool(),
                })
            }
            FeatureQuery::ShaderModel { highest } => {
                let data = self.check(
                    query,
                    D3D12_FEATURE_SHADER_MODEL,
                    D3D12_FEATURE_DATA_SHADER_MODEL {
                        HighestShaderModel: d3d_shader_model(highest),
                    },
                )?;
                Ok(FeatureData::ShaderModel {
                    highest_shader_model: shader_model_from_d3d(data.HighestShaderModel),
                })
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use windows::Win32::Graphics::Direct3D12::{D3D_SHADER_MODEL_6_0, D3D_SHADER_MODEL_6_6};

    #[test]
    fn shader_model_packing_matches_d3d() {
        assert_eq!(d3d_shader_model(ShaderModel::SM_6_6), D3D_SHADER_MODEL_6_6);
        assert_eq!(d3d_shader_model(ShaderModel::SM_6_0), D3D_SHADER_MODEL_6_0);
        assert_eq!(shader_model_from_d3d(D3D_SHADER_MODEL_6_6), ShaderModel::SM_6_6);
    }

    #[test]
    fn feature_levels_map_to_d3d() {
        assert_eq!(d3d_feature_level(FeatureLevel::Level12_0), D3D_FEATURE_LEVEL_12_0);
        assert_eq!(d3d_feature_level(FeatureLevel::Level12_2), D3D_FEATURE_LEVEL_12_2);
    }
}
