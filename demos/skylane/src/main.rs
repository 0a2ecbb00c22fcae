//! skylane — flight-corridor permit auction demo.
//!
//! Couriers spawn over an 8×8 two-level lattice, plan a corridor from a
//! random origin to a random destination, and bid tick-by-tick for the
//! permits along it.  Couriers that reach end-of-life relist whatever they
//! still hold, so permits cycle back onto the market.  Every settled trade
//! is appended to `output/skylane/trades.csv`.

use std::fs::File;
use std::path::Path;
use std::time::Instant;

use anyhow::Result;

use pm_agent::{Agent, AskMarket, BidMarket, BoxedAgent, PublicStatus};
use pm_core::{CallRng, Navigable, Tick, Value};
use pm_grid::{Cell, GridDims};
use pm_sim::{SimBuilder, SimObserver, StopCriteria, Trade};

// ── Constants ─────────────────────────────────────────────────────────────────

const SEED: u64 = 42;
const GRID_COLS: i32 = 8;
const GRID_ROWS: i32 = 8;
const GRID_LEVELS: i32 = 2;
const TIME_WINDOW: u64 = 24;
const LAST_TICK: u64 = 100;
const SPAWN_UNTIL: u64 = 90;
const COURIER_LIFETIME: u64 = 10;

// ── Courier agent ─────────────────────────────────────────────────────────────

/// Plans one corridor and tries to buy every permit along it: the permit for
/// path step `i` covers occupancy tick `launch + 1 + i`.  At end of life the
/// courier relists anything it still holds.
struct Courier {
    origin: Cell,
    dest: Cell,
    launch: Tick,
    /// Lazily planned on the first bid phase so tie-breaking uses the
    /// callback seed, not spawn-time state.
    corridor: Option<Vec<(Cell, Tick)>>,
    owned: Vec<(Cell, Tick)>,
}

impl Courier {
    fn new(origin: Cell, dest: Cell, launch: Tick) -> Self {
        Self {
            origin,
            dest,
            launch,
            corridor: None,
            owned: Vec::new(),
        }
    }

    fn lifetime_over(&self, t: Tick) -> bool {
        t >= self.launch + COURIER_LIFETIME
    }
}

impl Agent<Cell> for Courier {
    fn bid_phase(&mut self, t: Tick, market: &mut BidMarket<'_, Cell>, seed: u32) {
        let mut rng = CallRng::from_seed(seed);

        let corridor = self.corridor.get_or_insert_with(|| {
            self.origin
                .shortest_path(&self.dest, &mut rng)
                .into_iter()
                .enumerate()
                .map(|(i, cell)| (cell, self.launch + 1 + i as u64))
                .collect()
        });

        for &(cell, slot_t) in corridor.iter() {
            if slot_t < t || self.owned.contains(&(cell, slot_t)) {
                continue;
            }
            let min_value = match market.status(&cell, slot_t) {
                PublicStatus::Available { min_value, .. } => min_value,
                _ => continue,
            };
            let spread = Value(rng.gen_range(1..5_000u64));
            market.bid(&cell, slot_t, min_value + spread);
        }
    }

    fn ask_phase(&mut self, t: Tick, market: &mut AskMarket<'_, Cell>, seed: u32) {
        // Relist holdings on the final tick so the permits re-enter the
        // market instead of dying with the courier.
        if !self.lifetime_over(t) {
            return;
        }
        let mut rng = CallRng::from_seed(seed);
        for &(cell, slot_t) in &self.owned {
            let reserve = Value(rng.gen_range(1..2_000u64));
            market.ask(&cell, slot_t, reserve);
        }
    }

    fn on_bought(&mut self, region: &Cell, t: Tick, _price: Value) {
        self.owned.push((*region, t));
    }

    fn on_sold(&mut self, region: &Cell, t: Tick, _price: Value) {
        self.owned.retain(|&(cell, slot_t)| (cell, slot_t) != (*region, t));
    }

    fn stop(&mut self, t: Tick, _seed: u32) -> bool {
        self.lifetime_over(t)
    }
}

// ── Factory ───────────────────────────────────────────────────────────────────

/// Spawns up to two couriers per tick until `SPAWN_UNTIL`.
fn courier_factory(t: Tick, space: &GridDims, seed: u32) -> Vec<BoxedAgent<Cell>> {
    if t.0 >= SPAWN_UNTIL {
        return vec![];
    }
    let mut rng = CallRng::from_seed(seed);
    let count = rng.gen_range(0..=2u32);
    (0..count)
        .map(|_| {
            let origin = space.random_cell(&mut rng);
            let mut dest = space.random_cell(&mut rng);
            while dest == origin {
                dest = space.random_cell(&mut rng);
            }
            Box::new(Courier::new(origin, dest, t)) as BoxedAgent<Cell>
        })
        .collect()
}

// ── CSV trade log ─────────────────────────────────────────────────────────────

struct TradeCsv {
    writer: csv::Writer<File>,
    trades: usize,
    error: Option<csv::Error>,
}

impl TradeCsv {
    fn create(path: &Path) -> Result<Self> {
        let mut writer = csv::Writer::from_path(path)?;
        writer.write_record([
            "tick", "seller", "buyer", "x", "y", "alt", "t", "price",
        ])?;
        Ok(Self {
            writer,
            trades: 0,
            error: None,
        })
    }

    fn write(&mut self, trade: &Trade<Cell>) -> Result<(), csv::Error> {
        self.writer.write_record([
            trade.tick.0.to_string(),
            trade
                .seller
                .map(|id| id.0.to_string())
                .unwrap_or_else(|| "none".to_string()),
            trade.buyer.0.to_string(),
            trade.region.x().to_string(),
            trade.region.y().to_string(),
            trade.region.alt().to_string(),
            trade.t.0.to_string(),
            trade.price.to_string(),
        ])
    }
}

impl SimObserver<Cell, GridDims> for TradeCsv {
    fn on_trade(&mut self, trade: &Trade<Cell>) {
        self.trades += 1;
        if self.error.is_none() {
            if let Err(e) = self.write(trade) {
                self.error = Some(e);
            }
        }
    }

    fn on_tick_end(&mut self, t: Tick, trades: usize) {
        if t.0 % 20 == 0 {
            println!("{t}: {trades} trades settled");
        }
    }

    fn on_sim_end(&mut self, final_tick: Tick) {
        if let Err(e) = self.writer.flush() {
            eprintln!("csv flush failed: {e}");
        }
        println!("simulation ended at {final_tick}");
    }
}

// ── main ──────────────────────────────────────────────────────────────────────

fn main() -> Result<()> {
    println!("=== skylane — permit-market demo ===");
    println!(
        "Grid: {GRID_COLS}×{GRID_ROWS}×{GRID_LEVELS}  |  Ticks: {LAST_TICK}  |  Seed: {SEED}"
    );
    println!();

    // 1. The space.
    let space = GridDims::new(GRID_COLS, GRID_ROWS, GRID_LEVELS);
    println!("Lattice: {} cells", space.cell_count());

    // 2. Output.
    std::fs::create_dir_all("output/skylane")?;
    let mut observer = TradeCsv::create(Path::new("output/skylane/trades.csv"))?;

    // 3. Build and run.
    let mut sim = SimBuilder::new(courier_factory, space, SEED)
        .window(TIME_WINDOW)
        .stop(StopCriteria::TimeThreshold(Tick(LAST_TICK)))
        .build()?;

    let started = Instant::now();
    sim.run(&mut observer)?;
    let elapsed = started.elapsed();

    if let Some(e) = observer.error.take() {
        eprintln!("csv output error: {e}");
    }

    // 4. Summary.
    println!();
    println!("Simulation complete in {:.3} s", elapsed.as_secs_f64());
    println!("  couriers admitted : {}", sim.roster_len());
    println!("  trades settled    : {}", observer.trades);
    println!("  trades.csv        : output/skylane/trades.csv");

    Ok(())
}
