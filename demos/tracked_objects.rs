//! Walks a `GrowableVec` through construction, growth, copy and move with an
//! element type that logs every construction, clone and drop.
//!
//! Run with `cargo run --example tracked_objects`; set `RUST_LOG=trace` to also
//! see the buffer allocations and reallocations.

use growable_vec::{GrowableVec, VecResult};
use log::{info, LevelFilter};
use simple_logger::SimpleLogger;

struct Tracked {
    name: String,
}

impl Default for Tracked {
    fn default() -> Self {
        info!("default constructor");
        Self {
            name: String::from("default"),
        }
    }
}

impl Tracked {
    fn new(name: &str) -> Self {
        info!("custom constructor: {name}");
        Self {
            name: name.to_owned(),
        }
    }
}

impl Clone for Tracked {
    fn clone(&self) -> Self {
        info!("copy of: {}", self.name);
        Self {
            name: self.name.clone(),
        }
    }
}

impl Drop for Tracked {
    fn drop(&mut self) {
        info!("destructor for: {}", self.name);
    }
}

fn main() -> VecResult<()> {
    SimpleLogger::new()
        .with_level(LevelFilter::Info)
        .env()
        .without_timestamps()
        .init()
        .ok();

    info!("-- sized construction");
    let mut vec = GrowableVec::<Tracked>::with_len(2);

    info!("-- push past capacity");
    vec.push_back(Tracked::new("alpha"))?;
    vec.push_back_cloned(&Tracked::new("beta"))?;
    info!("len {} capacity {}", vec.len(), vec.capacity());

    info!("-- copy");
    let copy = vec.try_clone()?;
    info!("copy holds {} elements", copy.len());

    info!("-- move");
    let mut moved = vec.take();
    info!(
        "source len {} capacity {}, moved len {}",
        vec.len(),
        vec.capacity(),
        moved.len()
    );

    info!("-- pop and shrink");
    let last = moved.pop_back()?;
    info!("popped {}", last.name);
    drop(last);
    moved.resize(1)?;

    info!("-- scope end");
    Ok(())
}
