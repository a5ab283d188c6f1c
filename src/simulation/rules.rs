use rand::Rng;

use crate::grid::Grid;
use crate::material::Phase;

/// Density test deciding whether the visited cell trades places with a target
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Movement {
    /// Swap when the visited cell is lighter than the target
    Rise,
    /// Swap when the visited cell is heavier than the target
    Sink,
}

/// Run the movement rules over every cell of the scratch buffer
///
/// Rows are visited bottom to top, columns left to right. Swaps land in
/// scratch immediately, so cells visited later see them. Returns the number
/// of swaps performed.
pub fn update_grid<R: Rng + ?Sized>(grid: &mut Grid, rng: &mut R) -> u32 {
    debug_assert!(grid.is_tick_in_progress());

    let mut swaps = 0;
    for y in (0..grid.height()).rev() {
        for x in 0..grid.width() {
            swaps += update_cell(grid, rng, x, y);
        }
    }
    swaps
}

/// Apply the rule set of the material currently at `(x, y)`
pub fn update_cell<R: Rng + ?Sized>(grid: &mut Grid, rng: &mut R, x: u32, y: u32) -> u32 {
    match grid.scratch(x, y).phase {
        Phase::Gas => update_gas(grid, rng, x, y),
        Phase::Liquid => update_liquid(grid, rng, x, y),
        Phase::Solid => update_solid(grid, rng, x, y),
    }
}

/// Gas: rise, then drift diagonally up and sideways by a viscosity jitter
fn update_gas<R: Rng + ?Sized>(grid: &mut Grid, rng: &mut R, x: u32, y: u32) -> u32 {
    let mut swaps = 0;
    swaps += try_swap(grid, x, y, 0, -1, Movement::Rise) as u32;

    let t = jitter(rng, grid.scratch(x, y).viscosity);
    swaps += try_swap(grid, x, y, t, -1, Movement::Rise) as u32;
    swaps += try_swap(grid, x, y, -t, -1, Movement::Rise) as u32;
    swaps += try_swap(grid, x, y, -t, 0, Movement::Rise) as u32;
    swaps
}

/// Liquid: sink, slide diagonally down, then spread sideways by a viscosity jitter
fn update_liquid<R: Rng + ?Sized>(grid: &mut Grid, rng: &mut R, x: u32, y: u32) -> u32 {
    let mut swaps = 0;
    swaps += try_swap(grid, x, y, 0, 1, Movement::Sink) as u32;

    let s = lateral_sign(rng);
    swaps += try_swap(grid, x, y, s, 1, Movement::Sink) as u32;
    swaps += try_swap(grid, x, y, -s, 1, Movement::Sink) as u32;

    let t = jitter(rng, grid.scratch(x, y).viscosity);
    swaps += try_swap(grid, x, y, -t, 0, Movement::Sink) as u32;
    swaps
}

/// Solid: sink, then slide diagonally down. Viscosity is ignored.
fn update_solid<R: Rng + ?Sized>(grid: &mut Grid, rng: &mut R, x: u32, y: u32) -> u32 {
    let mut swaps = 0;
    swaps += try_swap(grid, x, y, 0, 1, Movement::Sink) as u32;

    let s = lateral_sign(rng);
    swaps += try_swap(grid, x, y, s, 1, Movement::Sink) as u32;
    swaps += try_swap(grid, x, y, -s, 1, Movement::Sink) as u32;
    swaps
}

/// Compare the cell at `(x, y)` with `(x + dx, y + dy)` and swap on success
///
/// Out-of-bounds targets are skipped.
fn try_swap(grid: &mut Grid, x: u32, y: u32, dx: i32, dy: i32, movement: Movement) -> bool {
    let tx = x as i32 + dx;
    let ty = y as i32 + dy;
    if !grid.contains(tx, ty) {
        return false;
    }

    let (tx, ty) = (tx as u32, ty as u32);
    let current = grid.scratch(x, y).density;
    let target = grid.scratch(tx, ty).density;

    let moves = match movement {
        Movement::Rise => current < target,
        Movement::Sink => current > target,
    };
    if moves {
        grid.swap_scratch((x, y), (tx, ty));
    }
    moves
}

/// Lateral displacement `round(viscosity * u)` with `u` uniform in `[-1, 1)`
fn jitter<R: Rng + ?Sized>(rng: &mut R, viscosity: f32) -> i32 {
    let u: f32 = rng.gen_range(-1.0..1.0);
    (viscosity * u).round() as i32
}

/// -1 or +1 with equal probability
fn lateral_sign<R: Rng + ?Sized>(rng: &mut R) -> i32 {
    if rng.gen_bool(0.5) {
        -1
    } else {
        1
    }
}
