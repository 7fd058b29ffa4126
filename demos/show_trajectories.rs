use trajplot::api::{TrajectoryPlotConfig, plot_3d_trajectory};
use trajplot::core::TrajectoryTensor;
use trajplot::platform_gtk::GtkFigureWindow;
use trajplot::render::ColorSpec;

/// Three bodies on tilted circular orbits of different radii.
fn orbits() -> Result<TrajectoryTensor, trajplot::PlotError> {
    let steps: Vec<Vec<[f64; 3]>> = (0..400)
        .map(|step| {
            let t = f64::from(step) * 0.02;
            (1..=3)
                .map(|body| {
                    let radius = f64::from(body);
                    let phase = t / radius;
                    [
                        radius * phase.cos(),
                        radius * phase.sin(),
                        0.3 * radius * phase.sin(),
                    ]
                })
                .collect()
        })
        .collect();
    TrajectoryTensor::from_steps(&steps)
}

fn main() {
    let _ = trajplot::telemetry::init_default_tracing();

    let trajectory = match orbits() {
        Ok(trajectory) => trajectory,
        Err(err) => {
            eprintln!("failed to build demo trajectory: {err}");
            return;
        }
    };
    let colors = [
        ColorSpec::from("tab:blue"),
        ColorSpec::from("tab:orange"),
        ColorSpec::from("#2ca02c"),
    ];
    let config = TrajectoryPlotConfig::new(8.0, 6.0, true);
    let mut window = GtkFigureWindow::new("Orbits");

    if let Err(err) = plot_3d_trajectory(
        &mut window,
        &trajectory,
        &["inner", "middle", "outer"],
        &colors,
        &config,
    ) {
        eprintln!("failed to show trajectories: {err}");
    }
}
