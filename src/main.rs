//! Headless Sandfall driver
//! Runs the simulation with a scripted pointer sweeping across the top of the
//! display, then prints the final grid and optionally writes a PNG snapshot.

use anyhow::{Context, Result};
use winit::dpi::PhysicalPosition;
use winit::event::{ElementState, MouseButton};

use sandfall::renderer::{render_ascii, render_frame, save_png};
use sandfall::{FrameLoop, SimConfig};

fn main() -> Result<()> {
    env_logger::init();

    let config = match std::env::args().nth(1) {
        Some(path) => SimConfig::load(&path).with_context(|| format!("loading {}", path))?,
        None => {
            log::info!("No config given, using defaults");
            SimConfig::default()
        }
    };

    let mut frame_loop = FrameLoop::new(&config).context("starting simulation")?;
    let display_width = config.display_width as f64;
    let paint_height = config.display_height as f64 / 3.0;

    log::info!("Running {} frames at {} ticks/s", config.frames, config.tick_rate);

    for frame in 0..config.frames {
        // Sweep left to right, painting during the first half of each pass
        let pass = (frame % 120) as f64 / 120.0;
        let pointer = frame_loop.pointer_mut();
        pointer.process_cursor_moved(PhysicalPosition::new(pass * display_width, paint_height));
        let state = if pass < 0.5 {
            ElementState::Pressed
        } else {
            ElementState::Released
        };
        pointer.process_mouse_button(MouseButton::Left, state);

        frame_loop.run_paced_frame();
    }

    let grid = frame_loop.engine().grid();
    println!("{}", render_ascii(grid));

    let mut counts: Vec<_> = grid.tally().into_iter().collect();
    counts.sort();
    for (id, count) in counts {
        println!("{:>6}: {}", id, count);
    }

    if let Some(path) = &config.snapshot_path {
        let image = render_frame(grid, config.cell_pixels());
        save_png(&image, path).context("writing snapshot")?;
    }

    Ok(())
}
