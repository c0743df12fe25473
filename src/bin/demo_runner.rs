// Demo harness binary: registers sample parametrized cases and runs them.
// Usage: cargo run --bin demo_runner [filter] [--params DIR] [--list] [--no-color]

use paracase::case::{selectors_from_params, ParametrizedCase};
use paracase::cli;
use paracase::params::{ParamGrid, ParamRow, ParamValue};
use paracase::registry::CaseRegistry;
use paracase::selector::MethodSelector;

/// Checks aspect-fill scaling over a grid of source sizes against a fixed
/// 100x100 target.
#[derive(Default)]
struct AspectFillScale;

impl AspectFillScale {
    fn aspect_fill(&self, original: (f64, f64), target: (f64, f64)) {
        let scale = (target.0 / original.0).max(target.1 / original.1);
        let scaled = (original.0 * scale, original.1 * scale);

        // the scaled frame must cover the target on both axes
        assert!(scaled.0 >= target.0 - 1e-9);
        assert!(scaled.1 >= target.1 - 1e-9);

        // and fit it exactly on at least one axis
        let slack_x = scaled.0 - target.0;
        let slack_y = scaled.1 - target.1;
        assert!(slack_x * slack_y < 1e-9);
    }
}

impl ParametrizedCase for AspectFillScale {
    fn test_method_selectors() -> Vec<MethodSelector<Self>> {
        let sizes = [50.0, 100.0, 200.0];
        let rows = ParamGrid::new()
            .axis(sizes.map(ParamValue::Number))
            .axis(sizes.map(ParamValue::Number))
            .rows();

        selectors_from_params(rows, |case: &mut Self, row: &ParamRow| {
            let width = row.get(0).and_then(ParamValue::as_number).unwrap_or_default();
            let height = row.get(1).and_then(ParamValue::as_number).unwrap_or_default();
            case.aspect_fill((width, height), (100.0, 100.0));
        })
    }
}

/// A case that does not override the selector query: contributes nothing.
#[derive(Default)]
struct NoExtraMethods;

impl ParametrizedCase for NoExtraMethods {}

fn main() -> miette::Result<()> {
    let mut registry = CaseRegistry::new();
    registry.register::<AspectFillScale>("aspect_fill_scale")?;
    registry.register::<NoExtraMethods>("no_extra_methods")?;

    cli::harness_main(&registry);
    Ok(())
}
