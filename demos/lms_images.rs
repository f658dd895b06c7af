//! Gaussian, KL and KLo estimates of differential entropy and mutual
//! information between two trivariate images.
//!
//! Each image is a `rows x cols x 3` array of cone-excitation (LMS) values,
//! recorded about a minute apart. Here both images are synthesised: the
//! second is a slightly changed, noisy version of the first. The arrays are
//! flattened column-major into `(rows * cols) x 3` sample matrices, one pixel
//! per row, before calling the estimators.

use klo::{entg, entkl, mig, mikl};
use ndarray::{Array2, Array3, s};
use rand::SeedableRng;
use rand::rngs::StdRng;
use rand_distr::{Distribution, Normal};

const ROWS: usize = 120;
const COLS: usize = 160;

/// Smooth scene with correlated L, M and S channels, values below unity.
fn synth_scene(rng: &mut StdRng) -> Array3<f64> {
    let texture = Normal::new(0.0, 0.02).unwrap();
    Array3::from_shape_fn((ROWS, COLS, 3), |(r, c, w)| {
        let u = r as f64 / ROWS as f64;
        let v = c as f64 / COLS as f64;
        let luminance = 0.3 + 0.2 * (6.0 * u).sin() * (4.0 * v).cos() + 0.1 * u * v;
        let gain = [1.0, 0.9, 0.35][w];
        gain * luminance + texture.sample(&mut *rng)
    })
}

/// Second recording: illumination drift plus sensor noise.
fn later_recording(scene: &Array3<f64>, rng: &mut StdRng) -> Array3<f64> {
    let noise = Normal::new(0.0, 0.01).unwrap();
    let drift = [0.97, 0.95, 1.04];
    Array3::from_shape_fn(scene.dim(), |(r, c, w)| {
        drift[w] * scene[(r, c, w)] + noise.sample(&mut *rng)
    })
}

/// Flatten `rows x cols x w` into `(rows * cols) x w`, column-major over pixels.
fn to_samples(image: &Array3<f64>) -> Array2<f64> {
    let (nr, nc, nw) = image.dim();
    let mut out = Array2::zeros((nr * nc, nw));
    for c in 0..nc {
        for r in 0..nr {
            out.row_mut(r + c * nr).assign(&image.slice(s![r, c, ..]));
        }
    }
    out
}

fn main() -> klo::Result<()> {
    let mut rng = StdRng::seed_from_u64(1320);
    let scene = synth_scene(&mut rng);
    let lms1 = to_samples(&scene);
    let lms2 = to_samples(&later_recording(&scene, &mut rng));

    println!("first rows of lms1:\n{}", lms1.slice(s![..6, ..]));
    println!("first rows of lms2:\n{}", lms2.slice(s![..6, ..]));

    // Negative because the LMS values are below unity.
    println!("entg(lms1)            = {:.4}", entg(lms1.view())?);
    println!("entkl(lms1, \"kl\")     = {:.4}", entkl(lms1.view(), "kl", 1)?);
    println!("entkl(lms1, \"klo\")    = {:.4}", entkl(lms1.view(), "klo", 1)?);

    println!("mig(lms1, lms2)       = {:.4}", mig(lms1.view(), lms2.view())?);
    println!("mikl(lms1, lms2, \"kl\")  = {:.4}", mikl(lms1.view(), lms2.view(), "kl", 1)?);
    println!("mikl(lms1, lms2, \"klo\") = {:.4}", mikl(lms1.view(), lms2.view(), "klo", 1)?);
    Ok(())
}
