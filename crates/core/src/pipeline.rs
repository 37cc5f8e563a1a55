//! High-level orchestration of a precision-analysis run.
//!
//! The sequence is fixed: generate, c2c round-trip, r2c round-trip, machine
//! precision, DC components, and the conjugate-symmetry bonus case. All of it
//! is deterministic for a given seed apart from the reported timings.

use std::io::Write;
use std::time::{Duration, Instant};

use num_complex::Complex64;
use rand_xoshiro::Xoshiro256PlusPlus;

use crate::{
    analysis::ErrorStats,
    backend::SpectralBackend,
    dump::MatrixDumper,
    error::{RunError, RunResult},
    field::{Field2D, RealField, SpectralField},
    generator::{gaussian_matrix, seeded_rng},
    grid::Shape2D,
    io::RunConfig,
    metrics::{MetricsEvent, MetricsRecorder, TransformStage},
    report::{Reporter, sci, sci_complex, seconds},
    symmetry::expand_half_spectrum,
};

/// Relative tolerance for the DC-versus-sum check.
pub const DC_TOLERANCE: f64 = 1e-6;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Verbosity {
    Quiet,
    Verbose,
}

impl Verbosity {
    fn enabled(self) -> bool {
        matches!(self, Verbosity::Verbose)
    }
}

/// Values reported by a run.
#[derive(Debug, Clone)]
pub struct RunSummary {
    pub shape: Shape2D,
    pub half_shape: Shape2D,
    pub a00: f64,
    pub c2c: ErrorStats,
    pub r2c: ErrorStats,
    pub epsilon: f64,
    pub c_dc: Complex64,
    pub r_dc: Complex64,
    pub sum: f64,
    pub dc_matches_sum: bool,
    pub bonus: BonusSummary,
}

#[derive(Debug, Clone)]
pub struct BonusSummary {
    pub shape: Shape2D,
    pub half_shape: Shape2D,
    /// Magnitude comparison of the directly computed and the reconstructed
    /// full spectra.
    pub symmetry: ErrorStats,
    pub original_00: Complex64,
    pub reconstructed_00: Complex64,
    pub original_11: Complex64,
    pub reconstructed_11: Complex64,
    pub c2c: ErrorStats,
    pub r2c: ErrorStats,
}

/// Open the configured results file (and metrics log), run, and close them.
pub fn run_to_file<B: SpectralBackend>(
    backend: &B,
    config: &RunConfig,
    verbosity: Verbosity,
) -> RunResult<RunSummary> {
    let mut reporter = Reporter::create(&config.output)?;
    let recorder = config.metrics.build_recorder()?;
    if verbosity.enabled() {
        eprintln!("[run] writing report to {}", config.output.display());
    }
    let summary = run_with_metrics(backend, config, &mut reporter, verbosity, recorder.as_ref())?;
    reporter.finish()?;
    Ok(summary)
}

pub fn run<B, C, F>(
    backend: &B,
    config: &RunConfig,
    reporter: &mut Reporter<C, F>,
    verbosity: Verbosity,
) -> RunResult<RunSummary>
where
    B: SpectralBackend,
    C: Write,
    F: Write,
{
    run_with_metrics(backend, config, reporter, verbosity, None)
}

pub fn run_with_metrics<B, C, F>(
    backend: &B,
    config: &RunConfig,
    reporter: &mut Reporter<C, F>,
    verbosity: Verbosity,
    metrics: Option<&MetricsRecorder>,
) -> RunResult<RunSummary>
where
    B: SpectralBackend,
    C: Write,
    F: Write,
{
    if config.bonus_size < 2 {
        return Err(RunError::InvalidArgument(format!(
            "bonus_size must be at least 2 to sample entry [1,1], got {}",
            config.bonus_size
        )));
    }

    let pipeline_start = Instant::now();
    if verbosity.enabled() {
        eprintln!(
            "[setup] backend={} size={} bonus_size={} seed={} mean={} std={}",
            backend.name(),
            config.size,
            config.bonus_size,
            config.seed,
            config.mean,
            config.std
        );
    }
    if let Some(recorder) = metrics {
        recorder.emit(MetricsEvent::RunStart {
            backend: backend.name(),
            seed: config.seed,
            size: config.size,
            bonus_size: config.bonus_size,
            mean: config.mean,
            std: config.std,
        });
    }
    let dumper = config
        .dump_dir
        .as_ref()
        .map(MatrixDumper::new)
        .transpose()?;

    let mut rng = seeded_rng(config.seed);
    let n = config.size;

    // 1) generation
    reporter.line(format!("\n1) Generating {n}x{n} Gaussian matrix..."))?;
    let (a, elapsed) = timed(|| gaussian_matrix(&mut rng, n, config.mean, config.std));
    let a = a?;
    reporter.line(format!("Matrix generation time: {} seconds", seconds(elapsed)))?;
    reporter.line(format!("Matrix A shape: {}", a.shape()))?;
    let a00 = a.get(0, 0);
    reporter.line(format!("A[0,0]: {}", sci(a00)))?;
    record_matrix(metrics, "A", &a, elapsed);
    progress(verbosity, "generated", "A", elapsed);
    if let Some(dumper) = &dumper {
        dumper.real("A", &a)?;
    }

    // 2) complex-to-complex round-trip
    reporter.line("\n2) Performing complex-to-complex FFT...")?;
    let (c, elapsed) = timed(|| backend.forward_fft_2d_real(&a));
    reporter.line(format!("c2c FFT time: {} seconds", seconds(elapsed)))?;
    record_transform(metrics, "C", TransformStage::ForwardC2c, &c, elapsed);
    progress(verbosity, "forward c2c", "C", elapsed);

    let (a_c2c, elapsed) = timed(|| inverse_c2c(backend, &c));
    reporter.line(format!("Inverse c2c FFT time: {} seconds", seconds(elapsed)))?;
    reporter.line("Reconstruction completed")?;
    record_transform(
        metrics,
        "A_reconstructed_c2c",
        TransformStage::InverseC2c,
        &a_c2c,
        elapsed,
    );
    progress(verbosity, "inverse c2c", "A_reconstructed_c2c", elapsed);

    reporter.line("\nErrors for complex-to-complex FFT:")?;
    let c2c = ErrorStats::between(&a, &a_c2c)?;
    reporter.errors(&c2c)?;
    record_errors(metrics, "c2c", c2c);
    if let Some(dumper) = &dumper {
        dumper.complex("C", &c)?;
        dumper.real("A_reconstructed_c2c", &a_c2c)?;
    }

    // 3) real-to-complex forward
    reporter.line("\n3) Performing real-to-complex FFT...")?;
    let (r, elapsed) = timed(|| backend.forward_real_fft_2d(&a));
    reporter.line(format!("r2c FFT time: {} seconds", seconds(elapsed)))?;
    reporter.line(format!("Matrix R shape: {}", r.shape()))?;
    record_transform(metrics, "R", TransformStage::ForwardR2c, &r, elapsed);
    progress(verbosity, "forward r2c", "R", elapsed);

    // 4) real-to-complex inverse
    reporter.line("\n4) Reconstructing from real-to-complex FFT...")?;
    let (a_r2c, elapsed) = timed(|| backend.inverse_real_fft_2d(&r, n));
    let a_r2c = a_r2c?;
    reporter.line(format!("Inverse r2c FFT time: {} seconds", seconds(elapsed)))?;
    reporter.line("Reconstruction completed")?;
    record_transform(
        metrics,
        "A_reconstructed_r2c",
        TransformStage::InverseR2c,
        &a_r2c,
        elapsed,
    );
    progress(verbosity, "inverse r2c", "A_reconstructed_r2c", elapsed);

    reporter.line("\nErrors for real-to-complex FFT:")?;
    let r2c = ErrorStats::between(&a, &a_r2c)?;
    reporter.errors(&r2c)?;
    record_errors(metrics, "r2c", r2c);
    if let Some(dumper) = &dumper {
        dumper.complex("R", &r)?;
        dumper.real("A_reconstructed_r2c", &a_r2c)?;
    }

    // 5) machine precision
    let epsilon = f64::EPSILON;
    reporter.line("\n5) Machine precision analysis:")?;
    reporter.line(format!("Machine epsilon for float64: {}", sci(epsilon)))?;
    reporter.line("For complex-to-complex FFT, we are close to machine precision")?;
    reporter.line(
        "For real-to-complex FFT, we have higher errors due to the reconstruction process",
    )?;

    // 6) DC components
    let c_dc = c.get(0, 0);
    let r_dc = r.get(0, 0);
    let sum = a.sum();
    let dc_matches_sum = dc_matches(c_dc, sum) && dc_matches(r_dc, sum);
    reporter.line("\n6) DC component analysis:")?;
    reporter.line(format!("C[0,0]: {}", sci_complex(c_dc)))?;
    reporter.line(format!("R[0,0]: {}", sci_complex(r_dc)))?;
    reporter.line("These values represent the sum of all elements in the original matrix")?;
    reporter.line(format!("Sum of A: {}", sci(sum)))?;
    reporter.line(format!(
        "DC components match Sum of A: {}",
        if dc_matches_sum { "yes" } else { "no" }
    ))?;
    if !dc_matches_sum {
        log::warn!("DC components {c_dc} / {r_dc} deviate from sum {sum}");
    }

    // 7) bonus
    let bonus = run_bonus(
        backend,
        config,
        reporter,
        verbosity,
        metrics,
        &mut rng,
        dumper.as_ref(),
    )?;

    let total = pipeline_start.elapsed();
    if verbosity.enabled() {
        eprintln!("[run] completed in {:.2?}", total);
    }
    if let Some(recorder) = metrics {
        recorder.emit(MetricsEvent::RunDone {
            duration_ms: total.as_secs_f64() * 1000.0,
        });
    }
    log::info!("run finished: c2c rms={:e} r2c rms={:e}", c2c.mean_abs, r2c.mean_abs);

    Ok(RunSummary {
        shape: a.shape(),
        half_shape: r.shape(),
        a00,
        c2c,
        r2c,
        epsilon,
        c_dc,
        r_dc,
        sum,
        dc_matches_sum,
        bonus,
    })
}

#[allow(clippy::too_many_arguments)]
fn run_bonus<B, C, F>(
    backend: &B,
    config: &RunConfig,
    reporter: &mut Reporter<C, F>,
    verbosity: Verbosity,
    metrics: Option<&MetricsRecorder>,
    rng: &mut Xoshiro256PlusPlus,
    dumper: Option<&MatrixDumper>,
) -> RunResult<BonusSummary>
where
    B: SpectralBackend,
    C: Write,
    F: Write,
{
    let m = config.bonus_size;
    let a_name = format!("A{m}");
    let r_name = format!("R{m}");
    let c_name = format!("C{m}");
    let c_original_name = format!("C{m}_original");
    let c_from_r_name = format!("C{m}_from_R");

    reporter.line(format!("\n7) Bonus: {m}x{m} case"))?;
    let (a6, elapsed) = timed(|| gaussian_matrix(rng, m, config.mean, config.std));
    let a6 = a6?;
    reporter.line(format!("{m}x{m} matrix generation time: {} seconds", seconds(elapsed)))?;
    reporter.line(format!("Matrix {a_name} shape: {}", a6.shape()))?;
    record_matrix(metrics, &a_name, &a6, elapsed);

    let (r6, elapsed) = timed(|| backend.forward_real_fft_2d(&a6));
    reporter.line(format!("\n{m}x{m} r2c FFT time: {} seconds", seconds(elapsed)))?;
    reporter.line(format!("Matrix {r_name} shape: {}", r6.shape()))?;
    record_transform(metrics, &r_name, TransformStage::ForwardR2c, &r6, elapsed);

    let (c6_from_r, elapsed) = timed(|| expand_half_spectrum(&r6, m));
    let c6_from_r = c6_from_r?;
    reporter.line(format!("{m}x{m} C reconstruction time: {} seconds", seconds(elapsed)))?;
    record_transform(
        metrics,
        &c_from_r_name,
        TransformStage::SymmetryReconstruction,
        &c6_from_r,
        elapsed,
    );

    let (c6_original, elapsed) = timed(|| backend.forward_fft_2d_real(&a6));
    reporter.line(format!("{m}x{m} c2c FFT time: {} seconds", seconds(elapsed)))?;
    record_transform(
        metrics,
        &c_original_name,
        TransformStage::ForwardC2c,
        &c6_original,
        elapsed,
    );
    progress(verbosity, "bonus spectra", &c_name, elapsed);

    reporter.line(format!("\nErrors for C reconstruction from R ({m}x{m}):"))?;
    let symmetry = ErrorStats::between(&c6_original.norms(), &c6_from_r.norms())?;
    reporter.errors(&symmetry)?;
    record_errors(metrics, "symmetry", symmetry);

    let original_00 = c6_original.get(0, 0);
    let reconstructed_00 = c6_from_r.get(0, 0);
    let original_11 = c6_original.get(1, 1);
    let reconstructed_11 = c6_from_r.get(1, 1);
    reporter.line("\nComparison of some values:")?;
    reporter.line(format!("{c_original_name}[0,0]: {}", sci_complex(original_00)))?;
    reporter.line(format!("{c_from_r_name}[0,0]: {}", sci_complex(reconstructed_00)))?;
    reporter.line(format!("{c_original_name}[1,1]: {}", sci_complex(original_11)))?;
    reporter.line(format!("{c_from_r_name}[1,1]: {}", sci_complex(reconstructed_11)))?;

    let a6_c2c = inverse_c2c(backend, &c6_original);
    let c2c = ErrorStats::between(&a6, &a6_c2c)?;
    reporter.line(format!("\nErrors for complex-to-complex FFT ({m}x{m}):"))?;
    reporter.errors(&c2c)?;
    record_errors(metrics, "bonus_c2c", c2c);

    let a6_r2c = backend.inverse_real_fft_2d(&r6, m)?;
    let r2c = ErrorStats::between(&a6, &a6_r2c)?;
    reporter.line(format!("\nErrors for real-to-complex FFT ({m}x{m}):"))?;
    reporter.errors(&r2c)?;
    record_errors(metrics, "bonus_r2c", r2c);

    if let Some(dumper) = dumper {
        dumper.real(&a_name, &a6)?;
        dumper.complex(&r_name, &r6)?;
        dumper.complex(&c_name, &c6_original)?;
        dumper.complex(&c_from_r_name, &c6_from_r)?;
        dumper.real(&format!("{a_name}_reconstructed_c2c"), &a6_c2c)?;
        dumper.real(&format!("{a_name}_reconstructed_r2c"), &a6_r2c)?;
    }

    Ok(BonusSummary {
        shape: a6.shape(),
        half_shape: r6.shape(),
        symmetry,
        original_00,
        reconstructed_00,
        original_11,
        reconstructed_11,
        c2c,
        r2c,
    })
}

fn inverse_c2c<B: SpectralBackend>(backend: &B, spectrum: &SpectralField) -> RealField {
    let mut buffer = spectrum.clone();
    backend.inverse_fft_2d(&mut buffer);
    buffer.real_part()
}

/// True when `dc` equals `sum` within [`DC_TOLERANCE`], relative to
/// `max(|sum|, 1)`.
pub fn dc_matches(dc: Complex64, sum: f64) -> bool {
    let scale = sum.abs().max(1.0);
    (dc - Complex64::new(sum, 0.0)).norm() <= DC_TOLERANCE * scale
}

fn timed<T>(f: impl FnOnce() -> T) -> (T, Duration) {
    let start = Instant::now();
    let value = f();
    (value, start.elapsed())
}

fn progress(verbosity: Verbosity, step: &str, label: &str, elapsed: Duration) {
    if verbosity.enabled() {
        eprintln!("[run] {step} {label} in {:.2?}", elapsed);
    }
    log::debug!("{step} {label} took {:?}", elapsed);
}

fn record_matrix(
    metrics: Option<&MetricsRecorder>,
    label: &str,
    field: &RealField,
    elapsed: Duration,
) {
    if let Some(recorder) = metrics {
        let shape = field.shape();
        recorder.emit(MetricsEvent::MatrixGenerated {
            label,
            rows: shape.rows,
            cols: shape.cols,
            duration_ms: elapsed.as_secs_f64() * 1000.0,
        });
    }
}

fn record_transform<T: Copy>(
    metrics: Option<&MetricsRecorder>,
    label: &str,
    stage: TransformStage,
    output: &Field2D<T>,
    elapsed: Duration,
) {
    if let Some(recorder) = metrics {
        let shape = output.shape();
        recorder.emit(MetricsEvent::Transform {
            label,
            stage,
            rows: shape.rows,
            cols: shape.cols,
            duration_ms: elapsed.as_secs_f64() * 1000.0,
        });
    }
}

fn record_errors(metrics: Option<&MetricsRecorder>, label: &str, stats: ErrorStats) {
    if let Some(recorder) = metrics {
        recorder.emit(MetricsEvent::Reconstruction { label, stats });
    }
}
