//! Library integration tests.

use gpu_gate::GateError;

#[test]
fn error_types_are_public() {
    let err = GateError::ConfigNotFound {
        path: "config.yml".into(),
    };
    assert!(err.to_string().contains("config.yml"));
}

#[test]
fn result_type_alias_is_public() {
    fn test_fn() -> gpu_gate::Result<()> {
        Ok(())
    }
    assert!(test_fn().is_ok());
}

#[test]
fn cli_types_are_public() {
    use clap::Parser;
    use gpu_gate::cli::{Cli, Commands};

    let cli = Cli::parse_from(["gpu-gate", "required", "--json"]);

    if let Some(Commands::Required(args)) = cli.command {
        assert!(args.json);
    } else {
        panic!("Expected Required command");
    }
}

#[test]
fn feature_descriptors_cover_every_bit() {
    use gpu_gate::features::{descriptor, HardwareFeature};

    assert_eq!(descriptor::all().len(), HardwareFeature::ALL.len());
    for feature in HardwareFeature::ALL {
        let d = descriptor::describe(feature);
        assert_eq!(d.feature, feature);
        assert!(!d.slug.is_empty());
    }
}

#[test]
fn feature_set_iterates_lowest_bit_first() {
    use gpu_gate::features::HardwareFeature;

    let set = HardwareFeature::Vrs | HardwareFeature::Dx12 | HardwareFeature::Sm66;
    let order: Vec<_> = set.iter().collect();
    assert_eq!(
        order,
        vec![
            HardwareFeature::Dx12,
            HardwareFeature::Sm66,
            HardwareFeature::Vrs
        ]
    );
}
