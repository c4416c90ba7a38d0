//! Drive a realtime world for a couple of seconds and print frames.
//!
//! Run with `RUST_LOG=hexdrift_engine=debug` to see resets and rebases.

use std::sync::Arc;
use std::time::Duration;

use hexdrift_core::ascii_art;
use hexdrift_engine::{DirectionManager, Engine, EngineConfig, RealtimeWorld};
use tracing_subscriber::EnvFilter;

fn main() -> Result<(), Box<dyn std::error::Error>> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .init();

    let config = EngineConfig {
        radius: 6,
        frequency: 6,
        tick_rate_hz: 10.0,
        seed: 42,
        ..EngineConfig::default()
    };
    let engine = Engine::new(config)?;
    let steering = Arc::new(DirectionManager::default());
    let mut world = RealtimeWorld::spawn(engine, Arc::clone(&steering))?;
    let ready = world.subscribe()?;

    for frame_no in 0..20 {
        if ready.recv_timeout(Duration::from_secs(1)).is_err() {
            break;
        }
        if frame_no % 4 == 3 {
            steering.turn(frame_no % 8 == 3);
        }
        let frame = world.latest();
        println!("tick {} length {}", frame.tick, frame.snake_length);
        println!("{}\n", ascii_art(&world));
    }

    if let Some(engine) = world.shutdown() {
        println!("{:?}", engine.last_metrics());
    }
    Ok(())
}
