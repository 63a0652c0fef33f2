use rayon::prelude::*;

use crate::core::actions::generate_fractal::ports::fractal_algorithm::FractalAlgorithm;
use crate::core::data::point::Point;

/// Generates fractal data in parallel using rayon's work-stealing scheduler.
///
/// Rows are the unit of work. The algorithm is shared by reference across
/// workers, so everything it reads is fixed for the whole pass. Output is
/// row-major, identical to [`generate_fractal_serial`].
///
/// [`generate_fractal_serial`]: crate::core::actions::generate_fractal::generate_fractal_serial::generate_fractal_serial
pub fn generate_fractal_parallel_rayon<Alg>(algorithm: &Alg) -> Vec<Alg::Success>
where
    Alg: FractalAlgorithm + Sync,
    Alg::Success: Send,
{
    let screen = algorithm.screen();
    let width = screen.pixel_columns();
    let height = screen.pixel_rows();

    let rows: Vec<Vec<Alg::Success>> = (0..height)
        .into_par_iter()
        .map(|y| (0..width).map(|x| algorithm.compute(Point { x, y })).collect())
        .collect();

    rows.into_iter().flatten().collect()
}
