//! Python bindings for the memory-match game.
//!
//! # Quick Start
//!
//! ```python
//! import memory_match as mm
//!
//! game = mm.MemoryGame(pair_count=10, seed=42)
//! game.select_difficulty("medium")
//!
//! game.choose("1a")        # "revealed"
//! game.choose("1b")        # "matched"
//!
//! while game.tick() == "counted":
//!     ...
//! print(game.phase, game.score, game.clock)
//! ```

use pyo3::prelude::*;

mod py_game;

pub use py_game::*;

/// memory_match: a timed memory matching card game.
#[pymodule]
fn memory_match(m: &Bound<'_, PyModule>) -> PyResult<()> {
    m.add_class::<PyMemoryGame>()?;
    Ok(())
}
